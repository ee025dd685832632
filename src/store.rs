//! File-backed corpus input and result persistence.
//!
//! The word list is a JSON array of strings, the feature specification is
//! the plain-text table described in `feature.rs`, and results are written
//! as one JSON file holding the full document set. Saving always replaces
//! the previous file atomically (write to a temp file in the same
//! directory, then persist over the target), so readers either see the old
//! complete set or the new one, never a mix.

use crate::engine::WordTokens;
use crate::errors::Result;
use crate::feature::FeatureDocument;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load the corpus word list from a JSON array of strings.
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let words = serde_json::from_reader(BufReader::new(file))?;
    Ok(words)
}

/// Read a feature-specification file into its lines.
pub fn load_spec_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text.lines().map(|l| l.to_string()).collect())
}

/// Atomically replace `path` with the full set of feature documents.
pub fn save_documents(path: &Path, documents: &[FeatureDocument]) -> Result<()> {
    save_json(path, documents)
}

/// Atomically replace `path` with the tokenized corpus.
pub fn save_word_tokens(path: &Path, corpus: &[WordTokens]) -> Result<()> {
    save_json(path, corpus)
}

fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let temp_file = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
    }
    temp_file.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{GroupDocument, PointDocument};

    fn sample_document(name: &str) -> FeatureDocument {
        FeatureDocument {
            name: name.to_string(),
            tag: "konsonan".to_string(),
            plus: GroupDocument {
                polarity: "plus".to_string(),
                points: vec![PointDocument {
                    letter: "b".to_string(),
                    onset: Some(2),
                    coda: Some(1),
                    total: 3,
                }],
            },
            minus: GroupDocument { polarity: "minus".to_string(), points: vec![] },
        }
    }

    #[test]
    fn words_round_trip_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, r#"["bantu", "makan"]"#).unwrap();

        assert_eq!(load_words(&path).unwrap(), vec!["bantu", "makan"]);
    }

    #[test]
    fn spec_lines_are_split_on_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitur.txt");
        fs::write(&path, "b + -\nn - +\n").unwrap();

        assert_eq!(load_spec_lines(&path).unwrap(), vec!["b + -", "n - +"]);
    }

    #[test]
    fn save_replaces_the_previous_document_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("fiturs.json");

        save_documents(&path, &[sample_document("voice"), sample_document("nasal")]).unwrap();
        save_documents(&path, &[sample_document("lateral")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let docs: Vec<FeatureDocument> = serde_json::from_str(&text).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "lateral");
    }
}
