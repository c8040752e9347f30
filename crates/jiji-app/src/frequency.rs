use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use jiji_config::TagFileOptions;
use jiji_core::{TagFile, TagFileError};
use jiji_lang_french::LexiqueFrequency;
use jiji_lang_japanese::BccwjFrequency;

const STOPWORD_FILE: &str = "stopword.txt";

/// Stopwords of `tags_dir`, empty when the list does not exist
pub fn load_stopwords(tags_dir: &Path) -> anyhow::Result<HashSet<String>> {
    let path = tags_dir.join(STOPWORD_FILE);
    match TagFile::load(&path, TagFileOptions::default()) {
        Ok(file) => Ok(file.headwords.into_iter().collect()),
        Err(TagFileError::FileNotFound(_)) => {
            tracing::warn!("No stopword list at {}", path.display());
            Ok(HashSet::new())
        }
        Err(e) => Err(e).with_context(|| format!("cannot read {}", path.display())),
    }
}

/// Rank Lexique lemmas and write `freqNN.txt` lists to `tags_dir`
pub fn lexique_tags(input: &Path, tags_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let stopwords = load_stopwords(tags_dir)?;
    let lexique = LexiqueFrequency::load_from_file(input, &stopwords)
        .with_context(|| format!("cannot load {}", input.display()))?;

    let written = lexique
        .level_lists()
        .write_tag_files(tags_dir)
        .with_context(|| format!("cannot write tag lists to {}", tags_dir.display()))?;
    Ok(written)
}

/// Group BCCWJ lemmas and write `freqNN.txt` lists to `tags_dir`
pub fn bccwj_tags(input: &Path, tags_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let bccwj = BccwjFrequency::load_from_file(input)
        .with_context(|| format!("cannot load {}", input.display()))?;

    let written = bccwj
        .lists()
        .write_tag_files(tags_dir)
        .with_context(|| format!("cannot write tag lists to {}", tags_dir.display()))?;
    Ok(written)
}
