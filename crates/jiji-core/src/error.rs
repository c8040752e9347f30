use std::path::PathBuf;

use crate::entry::EntryId;

/// Invalid mutation of a single entry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("{kind} must not contain a comma: {token}")]
    InvalidToken { kind: TokenKind, token: String },

    #[error("entry {entry}: restriction {restriction:?} names a form that is neither a headword nor a pronunciation")]
    RestrictionViolation {
        entry: EntryId,
        restriction: Vec<String>,
    },

    #[error("entry {entry}: sense has no glosses")]
    NoGlosses { entry: EntryId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Pronunciation,
    Tag,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Pronunciation => write!(f, "pronunciation"),
            TokenKind::Tag => write!(f, "tag"),
        }
    }
}

/// A raw record that cannot produce a valid entry; the record is dropped
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildRejection {
    #[error("record {0} has a sense without glosses")]
    NoGlosses(EntryId),

    #[error("record {0} has no headword")]
    NoHeadwords(EntryId),

    #[error("record {0} has no sense")]
    NoSenses(EntryId),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("entry {entry} has multiple occurrences of numbered tag {prefix}: {tags:?}")]
    NumberedTagCorruption {
        entry: EntryId,
        prefix: String,
        tags: Vec<String>,
    },

    #[error(transparent)]
    Entry(#[from] EntryError),
}

#[derive(Debug, thiserror::Error)]
pub enum TagFileError {
    #[error("tag file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("tag file has no usable name: {0}")]
    InvalidName(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum FrequencyError {
    #[error("frequency list not found: {0}")]
    FileNotFound(PathBuf),

    #[error("line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Failure to turn one raw record into an entry
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The record is dropped, the run goes on
    #[error(transparent)]
    Rejected(#[from] BuildRejection),

    /// The record contradicts itself; the caller decides to skip or abort
    #[error(transparent)]
    Malformed(#[from] EntryError),

    #[error(transparent)]
    Tag(#[from] TagError),
}
