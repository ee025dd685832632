//! Crate-wide error type.
//!
//! The pipeline is a deterministic batch transform, so there are no retries
//! anywhere: every error aborts the run it occurs in. The one deliberate
//! exception is per-token counting (see `engine/counter.rs`), which catches
//! [`Error::UnknownGrapheme`] locally and skips only that token's
//! contribution.

/// Result alias defaulting to this crate's [`enum@Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No consonant or vowel pattern in the alphabet can consume the next
    /// character of the input.
    ///
    /// `remainder` is the unconsumed tail, `offset` the byte position it
    /// starts at in the original string.
    #[error("unrecognized grapheme at byte {offset}: {remainder:?}")]
    UnknownGrapheme { remainder: String, offset: usize },

    /// A feature table was applied against a count map of the wrong shape
    /// (e.g. a consonant feature fed vowel counts).
    ///
    /// This is a configuration error and must not silently coerce into a
    /// document with undefined numbers.
    #[error("letter {letter:?} needs {expected} counts, but the other map shape was supplied")]
    CountShapeMismatch {
        letter: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
}
