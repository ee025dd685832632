//! silabel — syllable-structure statistics over a word corpus.
//!
//! The crate computes how often each consonant and vowel grapheme occupies
//! each syllable position (onset, nucleus, coda) across a corpus, and
//! aggregates those counts under tables of linguistic distinctive features.
//!
//! ```text
//! words ──> CorpusTokenizer ──> SyllableCounter ──> FeatureTable ──> documents
//!               (engine)            (engine)          (feature)       (store)
//! ```
//!
//! The syllable parser that cuts a word into syllable-shaped substrings is
//! an external collaborator, passed in through the [`SyllableParser`] seam.
//!
//! # Example
//! ```
//! use silabel::{AnalysisConfig, analyze};
//!
//! let words = vec!["ban".to_string()];
//! let identity = |word: &str| vec![word.to_string()];
//! let spec = vec!["b +".to_string()];
//! let vowel_spec = vec!["a +".to_string()];
//!
//! let config = AnalysisConfig {
//!     consonant_features: vec!["voice".to_string()],
//!     vowel_features: vec!["low".to_string()],
//!     ..AnalysisConfig::default()
//! };
//! let result = analyze(&words, &identity, &spec, &vowel_spec, &config).unwrap();
//! assert_eq!(result.documents.len(), 2);
//! ```

mod alphabet;
mod api;
mod engine;
mod errors;
mod feature;
mod store;

pub use alphabet::{Alphabet, DEFAULT_ALPHABET, GraphemeClass};
pub use api::{AnalysisConfig, AnalysisResult, analyze};
pub use engine::{
    ClusterSplitter, CorpusTokenizer, PositionCounts, SyllableCounter, SyllableCounts,
    SyllableDecomposer, SyllableParser, SyllableToken, TokenizeReport, WordTokens,
};
pub use errors::{Error, Result};
pub use feature::{
    CONSONANT_FEATURE_NAMES, CountSource, Feature, FeatureDocument, FeatureGroup, FeaturePoint,
    FeatureTable, GroupDocument, PointDocument, TAG_CONSONANT, TAG_VOWEL, VOWEL_FEATURE_NAMES,
};
pub use store::{load_spec_lines, load_words, save_documents, save_word_tokens};
