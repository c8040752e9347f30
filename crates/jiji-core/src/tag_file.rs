use std::fs;
use std::path::Path;

use jiji_config::TagFileOptions;

use crate::error::TagFileError;

/// A list of headwords sharing one tag, one headword per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFile {
    pub name: String,
    pub headwords: Vec<String>,
    pub options: TagFileOptions,
}

impl TagFile {
    pub fn new(name: impl Into<String>, headwords: Vec<String>, options: TagFileOptions) -> Self {
        Self {
            name: name.into(),
            headwords,
            options,
        }
    }

    /// Read a tag file; the tag name is the file stem (`freq01.txt` -> `freq01`)
    pub fn load(path: &Path, options: TagFileOptions) -> Result<Self, TagFileError> {
        if !path.exists() {
            return Err(TagFileError::FileNotFound(path.to_path_buf()));
        }

        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| TagFileError::InvalidName(path.to_path_buf()))?;

        let content = fs::read_to_string(path)?;
        let headwords = content.lines().map(|l| l.trim().to_string()).collect();

        tracing::info!("Loaded tag file {}", path.display());
        Ok(Self::new(name, headwords, options))
    }

    /// Non-blank headwords with their 1-based line number
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.headwords
            .iter()
            .enumerate()
            .map(|(idx, headword)| (idx + 1, headword.trim()))
            .filter(|(_, headword)| !headword.is_empty())
    }
}
