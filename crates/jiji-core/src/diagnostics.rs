use crate::entry::EntryId;
use crate::error::BuildRejection;

/// Recoverable condition met while building, tagging or serializing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    #[error("record dropped: {0}")]
    RecordRejected(BuildRejection),

    #[error("record {entry} skipped: {reason}")]
    RecordSkipped { entry: EntryId, reason: String },

    #[error("cannot tag {headword} with {tag} (line {line}) because it was not found in the dictionary")]
    TagLookupMiss {
        tag: String,
        line: usize,
        headword: String,
    },

    #[error("cannot tag {headword} with {tag} (line {line}) because more than one entry matches: {}", join_ids(.entries))]
    MultiEntryTagAmbiguity {
        tag: String,
        line: usize,
        headword: String,
        entries: Vec<EntryId>,
    },

    #[error("entry {entry} has no sense defined, will skip")]
    EntryWithoutSense { entry: EntryId },

    #[error("entry {entry} has no headword, will skip")]
    EntryWithoutHeadword { entry: EntryId },

    #[error("entry {entry} key {key} already exists (entry {kept}), will skip")]
    DuplicateEntryKey {
        entry: EntryId,
        kept: EntryId,
        key: String,
    },

    #[error("tag file {0} not found, will skip")]
    MissingTagFile(String),
}

fn join_ids(ids: &[EntryId]) -> String {
    ids.iter()
        .map(EntryId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collects warnings for the caller and logs each one as it arrives
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}
