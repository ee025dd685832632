//! Greedy, priority-ordered grapheme segmentation.

use crate::alphabet::{Alphabet, GraphemeClass};
use crate::errors::{Error, Result};

/// Splits an arbitrary grapheme string into tagged consonant/vowel units.
///
/// The splitter keeps a cursor at the start of the remaining string and, at
/// each step, consumes the first pattern that anchor-matches there. The
/// [`Alphabet`] tables encode the priority: consonants before vowels, and
/// multi-character graphemes before single characters within each class.
#[derive(Debug, Clone, Copy)]
pub struct ClusterSplitter<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> ClusterSplitter<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        ClusterSplitter { alphabet }
    }

    /// Split `s` into `(unit, class)` pairs.
    ///
    /// Concatenating the units in order reconstructs `s` exactly. A
    /// character that neither table can consume is a hard failure: direct
    /// callers should treat it as a data error, while the counting pass
    /// catches it per token (see `counter.rs`).
    pub fn split(&self, s: &str) -> Result<Vec<(String, GraphemeClass)>> {
        let mut units = Vec::new();
        let mut rest = s;
        while !rest.is_empty() {
            let (len, class) = self.alphabet.match_prefix(rest).ok_or_else(|| {
                Error::UnknownGrapheme {
                    remainder: rest.to_string(),
                    offset: s.len() - rest.len(),
                }
            })?;
            units.push((rest[..len].to_string(), class));
            rest = &rest[len..];
        }
        Ok(units)
    }
}
