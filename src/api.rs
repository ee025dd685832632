//! Public pipeline API.
//!
//! [`analyze`] wires the whole batch transform together: tokenize the
//! corpus through the caller's [`SyllableParser`], fold the tokens into
//! per-letter counts, load both feature specifications, aggregate, and
//! render the tagged output documents (consonant features first, then
//! vowel features).

use crate::alphabet::{Alphabet, DEFAULT_ALPHABET};
use crate::engine::{
    CorpusTokenizer, SyllableCounter, SyllableCounts, SyllableParser, TokenizeReport,
};
use crate::errors::Result;
use crate::feature::{
    CONSONANT_FEATURE_NAMES, CountSource, FeatureDocument, FeatureTable, TAG_CONSONANT,
    TAG_VOWEL, VOWEL_FEATURE_NAMES,
};

/// Configuration for one analysis run.
///
/// Everything is read-only data injected up front; the default is the
/// Indonesian alphabet with the standard feature-name columns.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub alphabet: Alphabet,
    /// Consonant feature names, in spec-file column order.
    pub consonant_features: Vec<String>,
    /// Vowel feature names, in spec-file column order.
    pub vowel_features: Vec<String>,
    /// Tokenize words in parallel. Aggregation is order-independent, so
    /// this never changes the output.
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            alphabet: DEFAULT_ALPHABET.clone(),
            consonant_features: CONSONANT_FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            vowel_features: VOWEL_FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            parallel: false,
        }
    }
}

/// Result of [`analyze`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// One record per feature, consonant-tagged then vowel-tagged.
    pub documents: Vec<FeatureDocument>,
    /// Raw per-letter frequency tables.
    pub counts: SyllableCounts,
    /// Tokenization tally, including dropped nucleus-less tokens.
    pub report: TokenizeReport,
}

/// Run the full analysis pipeline over an in-memory corpus.
///
/// `consonant_spec` and `vowel_spec` are the lines of the two
/// feature-specification tables (see [`FeatureTable::load_spec`]).
pub fn analyze<P>(
    words: &[String],
    parser: &P,
    consonant_spec: &[String],
    vowel_spec: &[String],
    config: &AnalysisConfig,
) -> Result<AnalysisResult>
where
    P: SyllableParser + Sync + ?Sized,
{
    let tokenizer = CorpusTokenizer::new(&config.alphabet);
    let (corpus, report) = if config.parallel {
        tokenizer.tokenize_par(words, parser)
    } else {
        tokenizer.tokenize(words, parser)
    };
    log::info!(
        "tokenized {} words into {} tokens ({} dropped without a nucleus)",
        report.words,
        report.tokens,
        report.dropped
    );

    let counts = SyllableCounter::new(&config.alphabet).count(&corpus);
    if counts.skipped_tokens > 0 {
        log::warn!("skipped {} tokens with unrecognized graphemes", counts.skipped_tokens);
    }

    let table = FeatureTable::new(&config.alphabet);

    let mut consonant_features = table.load_spec(consonant_spec, &config.consonant_features);
    table.apply_counts(&mut consonant_features, &CountSource::consonants(&counts))?;

    let mut vowel_features = table.load_spec(vowel_spec, &config.vowel_features);
    table.apply_counts(&mut vowel_features, &CountSource::vowels(&counts))?;

    let documents: Vec<FeatureDocument> = consonant_features
        .iter()
        .map(|f| table.to_document(f, TAG_CONSONANT))
        .chain(vowel_features.iter().map(|f| table.to_document(f, TAG_VOWEL)))
        .collect();
    log::debug!("rendered {} feature documents", documents.len());

    Ok(AnalysisResult { documents, counts, report })
}
