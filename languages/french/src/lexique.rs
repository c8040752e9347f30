use std::collections::HashSet;
use std::path::Path;

use jiji_core::{FrequencyError, LevelClassifier, LevelLists};

const LEMMA_COLUMN: usize = 2;
const FREQ_FILMS_COLUMN: usize = 6;
const FREQ_BOOKS_COLUMN: usize = 7;
const IS_LEMMA_COLUMN: usize = 13;

/// Lemma frequencies from the Lexique database (TSV export).
///
/// Only rows flagged as lemmas are kept (conjugated and inflected forms are
/// skipped), and stopwords are left out since they would crowd the first
/// level. Films subtitles weigh twice as much as books.
pub struct LexiqueFrequency {
    ranked: Vec<(String, f64)>,
    skipped_stopwords: usize,
}

impl LexiqueFrequency {
    pub fn load_from_file(path: &Path, stopwords: &HashSet<String>) -> Result<Self, FrequencyError> {
        if !path.exists() {
            return Err(FrequencyError::FileNotFound(path.to_path_buf()));
        }

        tracing::info!("Loading Lexique from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let lexique = Self::parse(&content, stopwords)?;
        tracing::info!(
            "Ranked {} lemmas, {} stopwords ignored",
            lexique.ranked.len(),
            lexique.skipped_stopwords
        );
        Ok(lexique)
    }

    pub fn parse(content: &str, stopwords: &HashSet<String>) -> Result<Self, FrequencyError> {
        let mut ranked = Vec::new();
        let mut skipped_stopwords = 0;

        for (idx, line) in content.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }

            let row: Vec<&str> = line.split('\t').collect();
            if row.len() <= IS_LEMMA_COLUMN {
                return Err(FrequencyError::InvalidRow {
                    line: idx + 1,
                    reason: format!(
                        "expected at least {} columns, found {}",
                        IS_LEMMA_COLUMN + 1,
                        row.len()
                    ),
                });
            }

            let is_lemma = parse_number::<u8>(row[IS_LEMMA_COLUMN], idx)?.unwrap_or(0) != 0;
            if !is_lemma {
                continue;
            }

            let lemma = row[LEMMA_COLUMN].trim();
            if stopwords.contains(lemma) {
                skipped_stopwords += 1;
                continue;
            }

            let films = parse_number::<f64>(row[FREQ_FILMS_COLUMN], idx)?;
            let books = parse_number::<f64>(row[FREQ_BOOKS_COLUMN], idx)?;
            let frequency = match (films, books) {
                (Some(films), Some(books)) => (2.0 * films + books) / 3.0,
                (Some(films), None) => films,
                (None, Some(books)) => books,
                (None, None) => continue,
            };

            ranked.push((lemma.to_string(), frequency));
        }

        // Stable: equally frequent lemmas keep the file order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        Ok(Self {
            ranked,
            skipped_stopwords,
        })
    }

    /// Lemmas from the most to the least frequent
    pub fn ranked(&self) -> impl Iterator<Item = &str> {
        self.ranked.iter().map(|(lemma, _)| lemma.as_str())
    }

    pub fn skipped_stopwords(&self) -> usize {
        self.skipped_stopwords
    }

    /// Group the ranked lemmas with the generic level limits
    pub fn level_lists(&self) -> LevelLists {
        let mut lists = LevelLists::new(LevelClassifier::language());
        for (rank, lemma) in self.ranked().enumerate() {
            lists.insert(lemma, rank as u32 + 1);
        }
        lists
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, idx: usize) -> Result<Option<T>, FrequencyError>
where
    T::Err: std::fmt::Display,
{
    let field = field.trim();
    if field.is_empty() {
        return Ok(None);
    }
    field
        .parse()
        .map(Some)
        .map_err(|e| FrequencyError::InvalidRow {
            line: idx + 1,
            reason: format!("invalid number {field:?}: {e}"),
        })
}
