//! Distinctive-feature tables and count aggregation.
//!
//! A feature specification is a plain-text table, one letter per line:
//!
//! ```text
//! b + - ... +
//! ng + + ... 0
//! ```
//!
//! Column `i` corresponds to the `i`-th caller-supplied feature name. A `+`
//! puts the letter into that feature's plus group, a `-` into its minus
//! group, and any other token leaves the letter unspecified for that
//! feature. [`FeatureTable::apply_counts`] then folds raw corpus counts onto
//! every group, and [`FeatureTable::to_document`] renders the serializable
//! records that get persisted.

use crate::alphabet::Alphabet;
use crate::engine::{PositionCounts, SyllableCounts};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Document tag for features aggregated from consonant counts.
pub const TAG_CONSONANT: &str = "konsonan";
/// Document tag for features aggregated from vowel counts.
pub const TAG_VOWEL: &str = "vocal";

/// Default consonant feature-name list, in spec column order.
pub const CONSONANT_FEATURE_NAMES: &[&str] = &[
    "consonantal",
    "sonorant",
    "coronal",
    "anterior",
    "labial",
    "round",
    "distributed",
    "high",
    "low",
    "back",
    "atr",
    "spread",
    "constricted",
    "voice",
    "continuant",
    "lateral",
    "nasal",
    "strident",
    "del rel",
    "bilabial",
    "labiodental",
    "dental",
    "alveolar",
    "postalveolar",
    "palatal",
    "velar",
    "glottal",
];

/// Default vowel feature-name list, in spec column order.
pub const VOWEL_FEATURE_NAMES: &[&str] =
    &["high", "low", "back", "tense", "round", "atr", "front"];

/// One letter's statistics under one polarity of one feature.
///
/// Which of the three counters is meaningful depends on the letter's class:
/// vowels carry `nucleus`, consonants carry `onset` and `coda`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturePoint {
    pub letter: String,
    pub nucleus: u64,
    pub onset: u64,
    pub coda: u64,
}

impl FeaturePoint {
    fn new(letter: &str) -> Self {
        FeaturePoint { letter: letter.to_string(), nucleus: 0, onset: 0, coda: 0 }
    }
}

/// A named polarity holding its letters in first-declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGroup {
    pub polarity: &'static str,
    points: Vec<FeaturePoint>,
}

impl FeatureGroup {
    fn new(polarity: &'static str) -> Self {
        FeatureGroup { polarity, points: Vec::new() }
    }

    fn add_letter(&mut self, letter: &str) {
        if !self.points.iter().any(|p| p.letter == letter) {
            self.points.push(FeaturePoint::new(letter));
        }
    }

    pub fn points(&self) -> &[FeaturePoint] {
        &self.points
    }
}

/// A distinctive feature: a name and its plus/minus letter groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub name: String,
    pub plus: FeatureGroup,
    pub minus: FeatureGroup,
}

/// Raw counts to aggregate from, in one of the two map shapes of
/// [`SyllableCounts`].
#[derive(Debug, Clone, Copy)]
pub enum CountSource<'a> {
    Vowel(&'a BTreeMap<String, u64>),
    Consonant(&'a BTreeMap<String, PositionCounts>),
}

impl<'a> CountSource<'a> {
    /// The vowel-shaped view of a full count set.
    pub fn vowels(counts: &'a SyllableCounts) -> Self {
        CountSource::Vowel(&counts.vowels)
    }

    /// The consonant-shaped view of a full count set.
    pub fn consonants(counts: &'a SyllableCounts) -> Self {
        CountSource::Consonant(&counts.consonants)
    }
}

/// Loads feature specifications and folds corpus counts onto them.
#[derive(Debug, Clone, Copy)]
pub struct FeatureTable<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> FeatureTable<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        FeatureTable { alphabet }
    }

    /// Parse spec lines into zero-count [`Feature`]s.
    ///
    /// Each line is `letter flag1 flag2 ...`, whitespace-separated. Flags
    /// are matched positionally against `feature_names`; lines shorter than
    /// the name list leave the remaining features unspecified for that
    /// letter, extra flags are ignored. `+`/`-`/other are mutually
    /// exclusive per column, so a letter lands in at most one polarity per
    /// feature. Blank lines are skipped. Letters never mentioned in the
    /// lines appear in no group at all.
    pub fn load_spec<L, N>(&self, lines: &[L], feature_names: &[N]) -> Vec<Feature>
    where
        L: AsRef<str>,
        N: AsRef<str>,
    {
        let mut features: Vec<Feature> = feature_names
            .iter()
            .map(|name| Feature {
                name: name.as_ref().to_string(),
                plus: FeatureGroup::new("plus"),
                minus: FeatureGroup::new("minus"),
            })
            .collect();

        for line in lines {
            let mut fields = line.as_ref().split_whitespace();
            let Some(letter) = fields.next() else { continue };
            for (flag, feature) in fields.zip(features.iter_mut()) {
                match flag {
                    "+" => feature.plus.add_letter(letter),
                    "-" => feature.minus.add_letter(letter),
                    _ => {}
                }
            }
        }
        features
    }

    /// Fold raw counts onto every point of every feature, in place.
    ///
    /// A letter absent from `source` keeps its zero counts. A letter whose
    /// class does not match the shape of `source` (a vowel against
    /// consonant counts, or the reverse) is a fatal configuration error:
    /// the feature table and the count map are semantically incompatible.
    ///
    /// Applying the same source twice is idempotent; counts are assigned,
    /// never accumulated across calls.
    pub fn apply_counts(&self, features: &mut [Feature], source: &CountSource) -> Result<()> {
        for feature in features {
            self.apply_group(&mut feature.plus, source)?;
            self.apply_group(&mut feature.minus, source)?;
        }
        Ok(())
    }

    fn apply_group(&self, group: &mut FeatureGroup, source: &CountSource) -> Result<()> {
        for point in &mut group.points {
            match source {
                CountSource::Vowel(map) => {
                    if self.alphabet.is_consonant(&point.letter) {
                        return Err(Error::CountShapeMismatch {
                            letter: point.letter.clone(),
                            expected: "onset/coda",
                        });
                    }
                    if let Some(&total) = map.get(&point.letter) {
                        point.nucleus = total;
                    }
                }
                CountSource::Consonant(map) => {
                    if self.alphabet.is_vowel(&point.letter) {
                        return Err(Error::CountShapeMismatch {
                            letter: point.letter.clone(),
                            expected: "nucleus",
                        });
                    }
                    if let Some(pc) = map.get(&point.letter) {
                        point.onset = pc.onset;
                        point.coda = pc.coda;
                    }
                }
            }
        }
        Ok(())
    }

    /// Render one feature as a serializable output document.
    ///
    /// Vowel points carry `{letter, total}`; consonant points carry
    /// `{letter, onset, coda, total}` with `total = onset + coda`.
    pub fn to_document(&self, feature: &Feature, tag: &str) -> FeatureDocument {
        FeatureDocument {
            name: feature.name.clone(),
            tag: tag.to_string(),
            plus: self.group_document(&feature.plus),
            minus: self.group_document(&feature.minus),
        }
    }

    fn group_document(&self, group: &FeatureGroup) -> GroupDocument {
        let points = group
            .points
            .iter()
            .map(|p| {
                if self.alphabet.is_vowel(&p.letter) {
                    PointDocument {
                        letter: p.letter.clone(),
                        onset: None,
                        coda: None,
                        total: p.nucleus,
                    }
                } else {
                    PointDocument {
                        letter: p.letter.clone(),
                        onset: Some(p.onset),
                        coda: Some(p.coda),
                        total: p.onset + p.coda,
                    }
                }
            })
            .collect();
        GroupDocument { polarity: group.polarity.to_string(), points }
    }
}

// --- Output documents --------------------------------------------------------

/// Persisted record for one feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDocument {
    pub name: String,
    /// `"konsonan"` or `"vocal"`: which alphabet/count map the feature was
    /// aggregated from.
    pub tag: String,
    pub plus: GroupDocument,
    pub minus: GroupDocument,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDocument {
    pub polarity: String,
    pub points: Vec<PointDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointDocument {
    pub letter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coda: Option<u64>,
    pub total: u64,
}
