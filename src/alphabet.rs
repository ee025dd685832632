//! Grapheme tables: ordered consonant and vowel patterns.
//!
//! An [`Alphabet`] is read-only configuration injected at construction time
//! into every stage that needs it. The engine never consults a global table,
//! which keeps tests free to run against alternate alphabets.
//!
//! Order inside each table is match priority: multi-character graphemes
//! (digraphs like `ng`, diphthongs like `ai`) must be listed before any
//! single character that prefixes them, otherwise `ng` would be consumed as
//! `n` + `g`.

use once_cell::sync::Lazy;

/// Class of one grapheme unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphemeClass {
    Consonant,
    Vowel,
}

/// Ordered, disjoint consonant and vowel grapheme tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    consonants: Vec<String>,
    vowels: Vec<String>,
}

/// The default alphabet: Indonesian orthography with four consonant
/// digraphs and four diphthongs.
pub static DEFAULT_ALPHABET: Lazy<Alphabet> = Lazy::new(|| {
    Alphabet::new(
        &[
            "kh", "ng", "ny", "sy", "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p",
            "q", "r", "s", "t", "v", "w", "x", "y", "z",
        ],
        &["ai", "au", "ei", "oi", "a", "i", "u", "e", "o"],
    )
});

impl Alphabet {
    /// Build an alphabet from ordered pattern tables.
    ///
    /// The caller is responsible for listing longer graphemes before their
    /// single-character prefixes; the tables are used exactly as given.
    pub fn new(consonants: &[&str], vowels: &[&str]) -> Self {
        Alphabet {
            consonants: consonants.iter().map(|s| s.to_string()).collect(),
            vowels: vowels.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Consonant graphemes in priority order.
    pub fn consonants(&self) -> impl Iterator<Item = &str> {
        self.consonants.iter().map(String::as_str)
    }

    /// Vowel graphemes in priority order.
    pub fn vowels(&self) -> impl Iterator<Item = &str> {
        self.vowels.iter().map(String::as_str)
    }

    pub fn is_consonant(&self, s: &str) -> bool {
        self.consonants.iter().any(|c| c == s)
    }

    pub fn is_vowel(&self, s: &str) -> bool {
        self.vowels.iter().any(|v| v == s)
    }

    /// Anchored match at the start of `s`.
    ///
    /// Consonant patterns are tried first, then vowel patterns, each in
    /// table order; the first pattern that matches wins. Returns the byte
    /// length of the match and its class, or `None` when neither table can
    /// consume the start of `s`.
    pub fn match_prefix(&self, s: &str) -> Option<(usize, GraphemeClass)> {
        for pat in &self.consonants {
            if s.starts_with(pat.as_str()) {
                return Some((pat.len(), GraphemeClass::Consonant));
            }
        }
        for pat in &self.vowels {
            if s.starts_with(pat.as_str()) {
                return Some((pat.len(), GraphemeClass::Vowel));
            }
        }
        None
    }

    /// First vowel occurrence anywhere in `s` as `(byte offset, byte length)`.
    ///
    /// Positions are scanned left to right; at each position the vowel table
    /// is tried in order, so a diphthong wins over the monophthong that
    /// starts it (`"ai"` matches as one unit, never as `"a"`).
    pub fn find_vowel(&self, s: &str) -> Option<(usize, usize)> {
        for (start, _) in s.char_indices() {
            let rest = &s[start..];
            for pat in &self.vowels {
                if rest.starts_with(pat.as_str()) {
                    return Some((start, pat.len()));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_are_disjoint() {
        let a = &*DEFAULT_ALPHABET;
        for c in a.consonants() {
            assert!(!a.is_vowel(c), "{c:?} is in both tables");
        }
    }

    #[test]
    fn digraphs_listed_before_their_prefix_letters() {
        let a = &*DEFAULT_ALPHABET;
        assert_eq!(a.match_prefix("ngarai"), Some((2, GraphemeClass::Consonant)));
        assert_eq!(a.match_prefix("nyala"), Some((2, GraphemeClass::Consonant)));
        assert_eq!(a.match_prefix("nasi"), Some((1, GraphemeClass::Consonant)));
    }

    #[test]
    fn diphthongs_win_over_monophthongs() {
        let a = &*DEFAULT_ALPHABET;
        assert_eq!(a.match_prefix("air"), Some((2, GraphemeClass::Vowel)));
        assert_eq!(a.find_vowel("air"), Some((0, 2)));
        // No diphthong starts here, so the single vowel matches.
        assert_eq!(a.find_vowel("ani"), Some((0, 1)));
    }

    #[test]
    fn find_vowel_scans_past_leading_consonants() {
        let a = &*DEFAULT_ALPHABET;
        assert_eq!(a.find_vowel("trak"), Some((2, 1)));
        assert_eq!(a.find_vowel("xyz"), None);
        assert_eq!(a.find_vowel(""), None);
    }

    #[test]
    fn consonants_tried_before_vowels_on_misconfigured_tables() {
        // With overlapping tables the consonant table must win the tie.
        let a = Alphabet::new(&["a"], &["a"]);
        assert_eq!(a.match_prefix("a"), Some((1, GraphemeClass::Consonant)));
    }

    #[test]
    fn alternate_alphabets_are_honored() {
        let a = Alphabet::new(&["th", "t"], &["ee", "e"]);
        assert_eq!(a.match_prefix("three"), Some((2, GraphemeClass::Consonant)));
        assert_eq!(a.find_vowel("three"), Some((3, 2)));
        assert!(a.match_prefix("k").is_none());
    }
}
