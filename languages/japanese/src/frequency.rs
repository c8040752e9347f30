use std::path::Path;

use jiji_core::{FrequencyError, LevelClassifier, LevelLists};

/// Marker of broken BCCWJ rows
const BROKEN_LEMMA_MARKER: char = '■';

/// Reads the BCCWJ short-unit word frequency list.
///
/// The list is a TSV file with a header row, whose first columns are
/// `rank`, `lForm` (kana) and `lemma`. Lemmas are grouped in levels with the
/// BCCWJ limits, each keeping the best level it was ranked at.
pub struct BccwjFrequency {
    lists: LevelLists,
}

impl BccwjFrequency {
    pub fn load_from_file(path: &Path) -> Result<Self, FrequencyError> {
        if !path.exists() {
            return Err(FrequencyError::FileNotFound(path.to_path_buf()));
        }

        tracing::info!("Loading BCCWJ frequency list from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let frequency = Self::parse(&content)?;
        tracing::info!("Ranked {} lemmas", frequency.lists.len());
        Ok(frequency)
    }

    pub fn parse(content: &str) -> Result<Self, FrequencyError> {
        let mut lists = LevelLists::new(LevelClassifier::bccwj());

        for (idx, line) in content.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 3 {
                return Err(FrequencyError::InvalidRow {
                    line: idx + 1,
                    reason: format!("expected at least 3 columns, found {}", parts.len()),
                });
            }

            let lemma = parts[2].trim();
            if lemma.is_empty() || lemma.contains(BROKEN_LEMMA_MARKER) {
                continue;
            }

            let rank: u32 = parts[0]
                .trim()
                .parse()
                .map_err(|e| FrequencyError::InvalidRow {
                    line: idx + 1,
                    reason: format!("invalid rank {:?}: {e}", parts[0]),
                })?;

            lists.insert(lemma, rank);
        }

        Ok(Self { lists })
    }

    pub fn lists(&self) -> &LevelLists {
        &self.lists
    }

    pub fn level(&self, lemma: &str) -> Option<u8> {
        self.lists.level_of(lemma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "rank\tlForm\tlemma\tpos\tsubLemma\twType\tfrequency\n\
        1\tノ\tの\t助詞-格助詞\t\t和\t5061558\n\
        701\tタベル\t食べる\t動詞-一般\t\t和\t40000\n\
        702\tスル\t■\t動詞\t\t和\t39000\n\
        900\tショクジ\t食事\t名詞\t\t漢\t30000\n\
        30\tタベル\t食べる\t動詞-一般\t\t和\t90000\n";

    #[test]
    fn test_parse() {
        let frequency = BccwjFrequency::parse(SAMPLE).unwrap();

        assert_eq!(frequency.level("の"), Some(1));
        assert_eq!(frequency.level("食べる"), Some(1));
        assert_eq!(frequency.level("食事"), Some(2));
        assert_eq!(frequency.level("■"), None);
        assert_eq!(frequency.lists().len(), 3);
    }

    #[test]
    fn test_invalid_rank() {
        let content = "rank\tlForm\tlemma\nfirst\tノ\tの\n";
        let err = BccwjFrequency::parse(content).err().unwrap();
        assert!(matches!(err, FrequencyError::InvalidRow { line: 2, .. }));
    }
}
