use rayon::prelude::*;

use crate::lexicon::Lexicon;
use crate::types::Record;

use super::tokenize;

/// Average sentiment of `text` against `lexicon`, or `None` when nothing
/// matched.
///
/// Greedy longest-match scan, left to right: at each position, candidate
/// phrases are tried from `min(max_phrase_len, remaining)` tokens down to
/// one. A match contributes its weight as a single span (a multi-word
/// phrase counts once, not per token) and the scan jumps past it; a
/// position with no match at any length advances one token and contributes
/// nothing. The result is the mean over matched spans, so a text with no
/// matches is `None` rather than `0.0`: zero is a valid neutral score and
/// must stay distinguishable from "no information".
pub fn score(text: &str, lexicon: &Lexicon) -> Option<f64> {
    let tokens = tokenize(text);
    if tokens.is_empty() || lexicon.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    let mut count = 0u32;
    let mut i = 0;

    while i < tokens.len() {
        let max_len = lexicon.max_phrase_len().min(tokens.len() - i);
        let mut matched = 0;

        // Longest candidate first: a multi-word phrase takes priority over
        // its single-token prefix.
        for len in (1..=max_len).rev() {
            let phrase = tokens[i..i + len].join(" ");
            if let Some(weight) = lexicon.weight(&phrase) {
                sum += weight;
                count += 1;
                matched = len;
                break;
            }
        }

        // Unscored tokens are skipped, not zero-scored
        i += matched.max(1);
    }

    (count > 0).then(|| sum / f64::from(count))
}

/// Score every record in place.
///
/// Each record depends only on its own text and the shared read-only
/// lexicon, so the pass is data-parallel with no coordination; completion
/// order is unspecified.
pub fn score_records(records: &mut [Record], lexicon: &Lexicon) {
    records.par_iter_mut().for_each(|record| {
        record.sentiment = score(&record.text, lexicon);
    });
}
