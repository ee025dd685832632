//! Segmentation and counting engine.
//!
//! This module is the algorithmic core of the crate. Analyzing a corpus is a
//! strictly downward pipeline:
//!
//! ```text
//! words ── SyllableParser::parse ──> syllable-shaped tokens
//!                                          │
//!                                          v
//!                        SyllableDecomposer (decomposer.rs)
//!                          - first vowel match = nucleus
//!                          - no nucleus -> token dropped
//!                                          │
//!                                          v
//!                            Vec<WordTokens> (tokenizer.rs)
//!                                          │
//!                                          v
//!                          SyllableCounter (counter.rs)
//!                            - ClusterSplitter on onset/coda
//!                            - per-letter, per-position totals
//!                                          │
//!                                          v
//!                                  SyllableCounts
//! ```
//!
//! ## Responsibilities by module
//!
//! - `splitter.rs`: greedy, priority-ordered segmentation of a grapheme
//!   string into tagged consonant/vowel units.
//! - `decomposer.rs`: onset/nucleus/coda decomposition of one token.
//! - `tokenizer.rs`: per-word tokenization over the corpus, behind the
//!   [`SyllableParser`] seam; sequential and rayon-parallel variants.
//! - `counter.rs`: folds decomposed tokens into frequency tables with
//!   per-token best-effort error handling.
//!
//! Every stage takes its [`Alphabet`](crate::Alphabet) by reference at
//! construction; nothing here owns global state, so identical inputs always
//! produce identical outputs.

#[path = "engine/counter.rs"]
mod counter;
#[path = "engine/decomposer.rs"]
mod decomposer;
#[path = "engine/splitter.rs"]
mod splitter;
#[path = "engine/tokenizer.rs"]
mod tokenizer;

pub use counter::{PositionCounts, SyllableCounter, SyllableCounts};
pub use decomposer::{SyllableDecomposer, SyllableToken};
pub use splitter::ClusterSplitter;
pub use tokenizer::{CorpusTokenizer, SyllableParser, TokenizeReport, WordTokens};
