pub mod builder;
pub mod frequency;
pub mod loader;
pub mod record;

pub use builder::EntryBuilder;
pub use frequency::BccwjFrequency;
pub use loader::{JMdictLoader, LoadError};
pub use record::{JmdictRecord, KanjiForm, RawSense, Reading};
