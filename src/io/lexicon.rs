use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::lexicon::Lexicon;

/// Load a lexicon from comma-separated `phrase,weight` lines.
pub fn read_lexicon(path: &Path) -> Result<Lexicon> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lexicon file: {}", path.display()))?;

    let lexicon = parse_lexicon(&content);
    log::info!("loaded {} lexicon entries from {}", lexicon.len(), path.display());
    Ok(lexicon)
}

/// Parse `phrase,weight` lines. Malformed lines are skipped; duplicate
/// phrases keep the last weight seen.
pub fn parse_lexicon(content: &str) -> Lexicon {
    let mut lexicon = Lexicon::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let entry = line
            .split_once(',')
            .and_then(|(phrase, weight)| Some((phrase.trim(), weight.trim().parse::<f64>().ok()?)));
        match entry {
            Some((phrase, weight)) => lexicon.insert(phrase, weight),
            None => log::debug!("skipping malformed lexicon line: {line:?}"),
        }
    }
    lexicon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_phrase_weight_lines() {
        let lexicon = parse_lexicon("sunny,1.0\nnot good,-0.625\n");

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.weight("sunny"), Some(1.0));
        assert_eq!(lexicon.weight("not good"), Some(-0.625));
        assert_eq!(lexicon.max_phrase_len(), 2);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let lexicon = parse_lexicon("sunny,1.0\nno separator\nword,not-a-number\n\n ,0.5\n");

        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.weight("sunny"), Some(1.0));
    }

    #[test]
    fn duplicate_phrases_keep_the_last_weight() {
        let lexicon = parse_lexicon("good,0.5\nGOOD,0.875\n");

        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.weight("good"), Some(0.875));
    }

    #[test]
    fn empty_content_yields_an_empty_lexicon() {
        assert!(parse_lexicon("").is_empty());
    }
}
