use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_allow_multiple_entries() -> bool {
    true
}

fn default_prefer_lowest_number() -> bool {
    true
}

fn default_line_numbered_tags() -> bool {
    false
}

fn default_directory() -> PathBuf {
    PathBuf::from("tags")
}

/// How a tag file is applied to the dictionary
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct TagFileOptions {
    /// Tag every entry sharing a headword, otherwise skip ambiguous lines
    #[serde(default = "default_allow_multiple_entries")]
    pub allow_multiple_entries: bool,
    /// On numbered tag conflicts keep the lowest number (freq01 over freq05)
    #[serde(default = "default_prefer_lowest_number")]
    pub prefer_lowest_number: bool,
    /// Append the line number to the tag name, for ranked lists
    #[serde(default = "default_line_numbered_tags")]
    pub line_numbered_tags: bool,
}

impl Default for TagFileOptions {
    fn default() -> Self {
        Self {
            allow_multiple_entries: default_allow_multiple_entries(),
            prefer_lowest_number: default_prefer_lowest_number(),
            line_numbered_tags: default_line_numbered_tags(),
        }
    }
}

/// One tag file, relative to [`TagsConfig::directory`]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TagFileSpec {
    pub file: String,
    #[serde(default)]
    pub options: TagFileOptions,
}

impl TagFileSpec {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            options: TagFileOptions::default(),
        }
    }

    pub fn with_options(file: impl Into<String>, options: TagFileOptions) -> Self {
        Self {
            file: file.into(),
            options,
        }
    }
}

/// Tag files applied after every entry is indexed, in declared order
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TagsConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    pub files: Vec<TagFileSpec>,
}

impl TagsConfig {
    /// Stopwords, JLPT levels then frequency levels.
    ///
    /// JLPT lists keep the highest level an entry appears in, frequency
    /// lists keep the most frequent band.
    pub fn jmdict_defaults() -> Vec<TagFileSpec> {
        let jlpt = TagFileOptions {
            prefer_lowest_number: false,
            ..TagFileOptions::default()
        };

        let mut files = vec![TagFileSpec::new("stopword.txt")];
        files.extend((1..=5).map(|n| TagFileSpec::with_options(format!("jlpt{n}.txt"), jlpt)));
        files.extend((1..=12).map(|n| TagFileSpec::new(format!("freq{n:02}.txt"))));
        files
    }

    pub fn paths(&self) -> impl Iterator<Item = (PathBuf, TagFileOptions)> + '_ {
        self.files
            .iter()
            .map(|spec| (self.directory.join(&spec.file), spec.options))
    }
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            files: Self::jmdict_defaults(),
        }
    }
}
