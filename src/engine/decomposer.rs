//! Onset/nucleus/coda decomposition of a syllable token.

use crate::alphabet::Alphabet;
use serde::{Deserialize, Serialize};

/// One decomposed syllable.
///
/// Invariant: `onset + nucleus + coda == token`. The nucleus is always a
/// single vowel grapheme from the alphabet; onset and coda may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableToken {
    pub token: String,
    pub onset: String,
    pub nucleus: String,
    pub coda: String,
}

/// Locates the nucleus of a syllable-shaped token and splits around it.
#[derive(Debug, Clone, Copy)]
pub struct SyllableDecomposer<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> SyllableDecomposer<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        SyllableDecomposer { alphabet }
    }

    /// Decompose `token` around its first vowel occurrence.
    ///
    /// Only the first vowel match becomes the nucleus, even when the token
    /// contains several vowel clusters; any trailing vowels stay inside the
    /// coda text and are not re-analyzed. A token with no recognizable vowel
    /// anywhere yields `None` and is discarded by the caller.
    pub fn decompose(&self, token: &str) -> Option<SyllableToken> {
        let (start, len) = self.alphabet.find_vowel(token)?;
        Some(SyllableToken {
            token: token.to_string(),
            onset: token[..start].to_string(),
            nucleus: token[start..start + len].to_string(),
            coda: token[start + len..].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::DEFAULT_ALPHABET;

    fn decompose(token: &str) -> Option<SyllableToken> {
        SyllableDecomposer::new(&DEFAULT_ALPHABET).decompose(token)
    }

    #[test]
    fn first_vowel_match_wins() {
        let t = decompose("trak").unwrap();
        assert_eq!(t.onset, "tr");
        assert_eq!(t.nucleus, "a");
        assert_eq!(t.coda, "k");
        assert_eq!(t.token, "trak");
    }

    #[test]
    fn token_without_a_vowel_has_no_nucleus() {
        assert_eq!(decompose("xyz"), None);
        assert_eq!(decompose(""), None);
    }

    #[test]
    fn diphthong_nucleus_is_one_grapheme() {
        let t = decompose("pau").unwrap();
        assert_eq!(t.onset, "p");
        assert_eq!(t.nucleus, "au");
        assert_eq!(t.coda, "");
    }

    #[test]
    fn trailing_vowels_stay_in_the_coda() {
        let t = decompose("buah").unwrap();
        assert_eq!(t.onset, "b");
        assert_eq!(t.nucleus, "u");
        assert_eq!(t.coda, "ah");
    }

    #[test]
    fn onset_and_coda_recompose_the_token() {
        for token in ["ban", "a", "nguap", "strak", "kail"] {
            let t = decompose(token).unwrap();
            assert_eq!(format!("{}{}{}", t.onset, t.nucleus, t.coda), token);
        }
    }
}
