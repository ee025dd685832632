//! Corpus tokenization: words to decomposed syllable tokens.
//!
//! The morphological syllable parser itself is an external collaborator.
//! This module only defines the [`SyllableParser`] seam and drives the
//! decomposition of whatever tokens the parser emits.

use crate::alphabet::Alphabet;
use super::decomposer::{SyllableDecomposer, SyllableToken};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// External parser boundary.
///
/// Given a word, produces an ordered sequence of syllable-shaped
/// substrings. The engine makes no assumption about their length or count
/// beyond "each element is attempted as a syllable token". Any
/// `Fn(&str) -> Vec<String>` closure implements this trait.
pub trait SyllableParser {
    fn parse(&self, word: &str) -> Vec<String>;
}

impl<F> SyllableParser for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn parse(&self, word: &str) -> Vec<String> {
        self(word)
    }
}

/// All usable syllable tokens of one corpus word.
///
/// A word whose tokens all lacked a nucleus still appears here, with an
/// empty token list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTokens {
    pub word: String,
    pub tokens: Vec<SyllableToken>,
}

/// Tally of a tokenization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizeReport {
    /// Words processed.
    pub words: usize,
    /// Tokens that decomposed successfully.
    pub tokens: usize,
    /// Tokens dropped for lacking a nucleus.
    pub dropped: usize,
}

/// Runs the parser and the decomposer over every word of a corpus.
#[derive(Debug, Clone, Copy)]
pub struct CorpusTokenizer<'a> {
    decomposer: SyllableDecomposer<'a>,
}

impl<'a> CorpusTokenizer<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        CorpusTokenizer { decomposer: SyllableDecomposer::new(alphabet) }
    }

    fn tokenize_word<P>(&self, word: &str, parser: &P) -> (WordTokens, usize)
    where
        P: SyllableParser + ?Sized,
    {
        let raw = parser.parse(word);
        let mut tokens = Vec::with_capacity(raw.len());
        let mut dropped = 0;
        for token in &raw {
            match self.decomposer.decompose(token) {
                Some(t) => tokens.push(t),
                // Expected for degenerate fragments; excluded, but tallied.
                None => dropped += 1,
            }
        }
        (WordTokens { word: word.to_string(), tokens }, dropped)
    }

    /// Tokenize the corpus sequentially, preserving word order.
    pub fn tokenize<P>(&self, words: &[String], parser: &P) -> (Vec<WordTokens>, TokenizeReport)
    where
        P: SyllableParser + ?Sized,
    {
        let mut dropped = 0;
        let corpus: Vec<WordTokens> = words
            .iter()
            .map(|word| {
                let (tokens, d) = self.tokenize_word(word, parser);
                dropped += d;
                tokens
            })
            .collect();
        let report = Self::report(&corpus, dropped);
        (corpus, report)
    }

    /// Tokenize the corpus in parallel over words.
    ///
    /// Output order matches the input word order, so downstream counting
    /// sees exactly the sequence [`tokenize`](Self::tokenize) would produce
    /// and aggregates to identical totals.
    pub fn tokenize_par<P>(&self, words: &[String], parser: &P) -> (Vec<WordTokens>, TokenizeReport)
    where
        P: SyllableParser + Sync + ?Sized,
    {
        let pairs: Vec<(WordTokens, usize)> =
            words.par_iter().map(|word| self.tokenize_word(word, parser)).collect();
        let mut dropped = 0;
        let corpus: Vec<WordTokens> = pairs
            .into_iter()
            .map(|(tokens, d)| {
                dropped += d;
                tokens
            })
            .collect();
        let report = Self::report(&corpus, dropped);
        (corpus, report)
    }

    fn report(corpus: &[WordTokens], dropped: usize) -> TokenizeReport {
        TokenizeReport {
            words: corpus.len(),
            tokens: corpus.iter().map(|w| w.tokens.len()).sum(),
            dropped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::DEFAULT_ALPHABET;

    fn identity(word: &str) -> Vec<String> {
        vec![word.to_string()]
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn identity_parser_yields_one_token_per_word() {
        let tokenizer = CorpusTokenizer::new(&DEFAULT_ALPHABET);
        let (corpus, report) = tokenizer.tokenize(&words(&["ba", "ban"]), &identity);

        assert_eq!(report, TokenizeReport { words: 2, tokens: 2, dropped: 0 });
        assert_eq!(corpus[0].word, "ba");
        assert_eq!(corpus[0].tokens[0].nucleus, "a");
        assert_eq!(corpus[1].tokens[0].coda, "n");
    }

    #[test]
    fn nucleus_less_tokens_are_dropped_but_the_word_remains() {
        let tokenizer = CorpusTokenizer::new(&DEFAULT_ALPHABET);
        let parser = |word: &str| vec![word.to_string(), "xyz".to_string()];
        let (corpus, report) = tokenizer.tokenize(&words(&["ba"]), &parser);

        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus[0].tokens.len(), 1);
        assert_eq!(report.dropped, 1);

        // A word producing only degenerate tokens keeps its empty entry.
        let no_nucleus = |_: &str| vec!["zzz".to_string()];
        let (corpus, report) = tokenizer.tokenize(&words(&["ba"]), &no_nucleus);
        assert_eq!(corpus, vec![WordTokens { word: "ba".to_string(), tokens: vec![] }]);
        assert_eq!(report.dropped, 1);
    }

    #[test]
    fn multi_token_parser_output_is_decomposed_in_order() {
        let tokenizer = CorpusTokenizer::new(&DEFAULT_ALPHABET);
        let parser = |_: &str| vec!["ban".to_string(), "tu".to_string(), "an".to_string()];
        let (corpus, _) = tokenizer.tokenize(&words(&["bantuan"]), &parser);

        let nuclei: Vec<&str> =
            corpus[0].tokens.iter().map(|t| t.nucleus.as_str()).collect();
        assert_eq!(nuclei, vec!["a", "u", "a"]);
    }

    #[test]
    fn parallel_tokenization_matches_sequential() {
        let tokenizer = CorpusTokenizer::new(&DEFAULT_ALPHABET);
        let corpus: Vec<String> = ["bantu", "makan", "ngarai", "xyz", "pulau", "syair"]
            .iter()
            .cycle()
            .take(300)
            .map(|w| w.to_string())
            .collect();

        let (seq, seq_report) = tokenizer.tokenize(&corpus, &identity);
        let (par, par_report) = tokenizer.tokenize_par(&corpus, &identity);

        assert_eq!(seq, par);
        assert_eq!(seq_report, par_report);
    }
}
