use std::sync::OnceLock;

use regex::Regex;

/// Letter runs with a single apostrophe or hyphen allowed between letters:
/// "don't", "well-being". Digits and punctuation are separators.
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\p{L}(?:['\-]?\p{L})*").unwrap())
}

/// Split `text` into lower-cased word tokens, left to right.
///
/// Pure and total: identical input always yields the identical sequence,
/// and empty input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    token_pattern()
        .find_iter(text)
        .map(|token| token.as_str().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("123 !?").is_empty());
    }

    #[test]
    fn punctuation_separates_and_case_folds() {
        assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn internal_apostrophes_and_hyphens_stay_in_the_token() {
        assert_eq!(tokenize("don't stop"), vec!["don't", "stop"]);
        assert_eq!(tokenize("well-being"), vec!["well-being"]);
    }

    #[test]
    fn leading_and_trailing_separators_are_stripped() {
        // Apostrophes/hyphens only count between letters
        assert_eq!(tokenize("'tis rock- -roll dogs'"), vec!["tis", "rock", "roll", "dogs"]);
    }

    #[test]
    fn digits_split_tokens() {
        assert_eq!(tokenize("abc123def"), vec!["abc", "def"]);
    }

    #[test]
    fn non_ascii_letters_are_tokens() {
        assert_eq!(tokenize("Café olé"), vec!["café", "olé"]);
    }

    #[test]
    fn tokens_emit_in_text_order() {
        assert_eq!(tokenize("one two three"), vec!["one", "two", "three"]);
    }
}
