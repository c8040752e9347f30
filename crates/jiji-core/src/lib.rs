pub mod diagnostics;
pub mod dictionary;
pub mod entry;
pub mod error;
pub mod frequency;
pub mod id;
pub mod level;
pub mod output;
pub mod tag_file;
pub mod tagging;

pub use diagnostics::{Diagnostics, Warning};
pub use dictionary::{Dictionary, DictionaryMetadata, SerializedDictionary, SerializedEntry};
pub use entry::{Entry, EntryId};
pub use error::{BuildError, BuildRejection, EntryError, FrequencyError, OutputError, TagError, TagFileError};
pub use frequency::LevelLists;
pub use id::{IdSource, RandomIds, SequentialIds};
pub use level::LevelClassifier;
pub use tag_file::TagFile;
pub use tagging::{apply_tag, apply_tag_file};
