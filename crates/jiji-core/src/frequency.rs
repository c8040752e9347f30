use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FrequencyError;
use crate::level::{LevelClassifier, MAX_TAGGED_LEVEL};

/// Lemmas grouped by frequency level, written out as `freqNN.txt` tag files
#[derive(Debug, Clone)]
pub struct LevelLists {
    classifier: LevelClassifier,
    levels: HashMap<String, u8>,
}

impl LevelLists {
    pub fn new(classifier: LevelClassifier) -> Self {
        Self {
            classifier,
            levels: HashMap::new(),
        }
    }

    /// Record `lemma` at `rank`; a lemma seen several times keeps its best level
    pub fn insert(&mut self, lemma: &str, rank: u32) -> u8 {
        let level = self.classifier.level(rank);
        let best = self
            .levels
            .entry(lemma.to_string())
            .and_modify(|current| *current = (*current).min(level))
            .or_insert(level);
        *best
    }

    pub fn level_of(&self, lemma: &str) -> Option<u8> {
        self.levels.get(lemma).copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Sorted lemmas of every level
    pub fn by_level(&self) -> BTreeMap<u8, BTreeSet<&str>> {
        let mut lists: BTreeMap<u8, BTreeSet<&str>> = BTreeMap::new();
        for (lemma, level) in &self.levels {
            lists.entry(*level).or_default().insert(lemma.as_str());
        }
        lists
    }

    /// Write one file per level from 1 to 12 into `directory`.
    ///
    /// Rarer levels are left out, they carry no useful signal.
    pub fn write_tag_files(&self, directory: &Path) -> Result<Vec<PathBuf>, FrequencyError> {
        fs::create_dir_all(directory)?;

        let mut written = Vec::new();
        for (level, lemmas) in self.by_level() {
            if level == 0 || level > MAX_TAGGED_LEVEL {
                tracing::debug!("Skipping level {level} ({} lemmas)", lemmas.len());
                continue;
            }

            let path = directory.join(format!("freq{level:02}.txt"));
            let content = lemmas.into_iter().collect::<Vec<_>>().join("\n");
            fs::write(&path, content)?;
            tracing::info!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}
