use ahash::AHashMap;

/// Immutable-after-load mapping from normalized phrase to sentiment weight.
///
/// Keys are lower-cased token sequences joined by single ascii spaces
/// (`"not good"`). The longest key length in tokens is maintained on every
/// insert and bounds the scorer's lookahead; it is at least 1 even for an
/// empty lexicon.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: AHashMap<String, f64>,
    max_phrase_len: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self { entries: AHashMap::new(), max_phrase_len: 1 }
    }

    /// Build a lexicon from `(phrase, weight)` pairs. Later entries win on
    /// duplicate phrases.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for (phrase, weight) in entries {
            lexicon.insert(phrase.as_ref(), weight);
        }
        lexicon
    }

    /// Insert one phrase, normalizing the key (lower-cased, whitespace
    /// collapsed to single spaces). The last write wins on duplicates;
    /// a phrase with no tokens is ignored.
    pub fn insert(&mut self, phrase: &str, weight: f64) {
        let key = normalize(phrase);
        if key.is_empty() {
            return;
        }
        let len = key.split(' ').count();
        self.max_phrase_len = self.max_phrase_len.max(len);
        self.entries.insert(key, weight);
    }

    /// Weight of an already-normalized phrase (lower-cased, single-spaced).
    /// The scorer's candidates are built from tokenizer output and so are
    /// normalized by construction; arbitrary input goes through [`get`].
    ///
    /// [`get`]: Lexicon::get
    #[inline]
    pub fn weight(&self, phrase: &str) -> Option<f64> {
        self.entries.get(phrase).copied()
    }

    /// Case-insensitive lookup of an arbitrary phrase.
    pub fn get(&self, phrase: &str) -> Option<f64> {
        self.entries.get(&normalize(phrase)).copied()
    }

    /// Token count of the longest phrase key, ≥ 1.
    #[inline] pub fn max_phrase_len(&self) -> usize { self.max_phrase_len }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower-case and re-join on single spaces so lookups are insensitive to
/// case and stray whitespace.
fn normalize(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
