//! Per-letter, per-position frequency aggregation.

use super::decomposer::SyllableToken;
use super::splitter::ClusterSplitter;
use super::tokenizer::WordTokens;
use crate::alphabet::{Alphabet, GraphemeClass};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Onset/coda hit counts for one consonant letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionCounts {
    pub onset: u64,
    pub coda: u64,
}

/// Aggregated corpus frequencies.
///
/// Closed world: both maps are pre-seeded with every alphabet letter at
/// zero, and letters outside the alphabet are never tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableCounts {
    /// Nucleus occurrences per vowel grapheme.
    pub vowels: BTreeMap<String, u64>,
    /// Onset/coda occurrences per consonant grapheme.
    pub consonants: BTreeMap<String, PositionCounts>,
    /// Tokens whose contribution was skipped: an unrecognized grapheme in
    /// an onset/coda cluster, or a nucleus outside the vowel table.
    pub skipped_tokens: usize,
}

/// Units a single token would contribute, staged before any map is touched
/// so that a failing token leaves the counts untouched.
struct TokenHits {
    onset_units: Vec<(String, GraphemeClass)>,
    coda_units: Vec<(String, GraphemeClass)>,
    nucleus: String,
}

/// Folds decomposed tokens into [`SyllableCounts`].
#[derive(Debug, Clone, Copy)]
pub struct SyllableCounter<'a> {
    alphabet: &'a Alphabet,
    splitter: ClusterSplitter<'a>,
}

impl<'a> SyllableCounter<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        SyllableCounter { alphabet, splitter: ClusterSplitter::new(alphabet) }
    }

    /// Count every token of the corpus.
    ///
    /// Aggregation is per-token best effort, not all-or-nothing: a token
    /// that fails to split contributes nothing at all, while counts from
    /// other tokens are unaffected. Per-letter counters commute under
    /// addition, so the result is independent of word-processing order.
    pub fn count(&self, corpus: &[WordTokens]) -> SyllableCounts {
        let mut counts = SyllableCounts {
            vowels: self.alphabet.vowels().map(|v| (v.to_string(), 0)).collect(),
            consonants: self
                .alphabet
                .consonants()
                .map(|c| (c.to_string(), PositionCounts::default()))
                .collect(),
            skipped_tokens: 0,
        };

        for word in corpus {
            for token in &word.tokens {
                match self.stage(token) {
                    Ok(hits) => Self::apply(&mut counts, &hits),
                    Err(_) => counts.skipped_tokens += 1,
                }
            }
        }
        counts
    }

    fn stage(&self, token: &SyllableToken) -> Result<TokenHits> {
        if !self.alphabet.is_vowel(&token.nucleus) {
            return Err(Error::UnknownGrapheme { remainder: token.nucleus.clone(), offset: 0 });
        }
        Ok(TokenHits {
            onset_units: self.splitter.split(&token.onset)?,
            coda_units: self.splitter.split(&token.coda)?,
            nucleus: token.nucleus.clone(),
        })
    }

    fn apply(counts: &mut SyllableCounts, hits: &TokenHits) {
        // Vowel units inside an onset/coda cluster should not occur under a
        // well-formed grammar; they are simply not consonant hits.
        for (unit, class) in &hits.onset_units {
            if *class == GraphemeClass::Consonant {
                if let Some(pc) = counts.consonants.get_mut(unit) {
                    pc.onset += 1;
                }
            }
        }
        for (unit, class) in &hits.coda_units {
            if *class == GraphemeClass::Consonant {
                if let Some(pc) = counts.consonants.get_mut(unit) {
                    pc.coda += 1;
                }
            }
        }
        if let Some(n) = counts.vowels.get_mut(&hits.nucleus) {
            *n += 1;
        }
    }
}
