use std::path::Path;

use serde::Deserialize;

use crate::record::{JmdictRecord, KanjiForm, RawSense, Reading, USUALLY_KANA};

/// Restriction value meaning "every form"
const ANY_FORM: &str = "*";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// JSON structures of the jmdict-simplified format, plus priority markers
#[derive(Debug, Deserialize)]
struct JMdictJson {
    words: Vec<JMdictJsonEntry>,
}

#[derive(Debug, Deserialize)]
struct JMdictJsonEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    kanji: Vec<KanjiElement>,
    #[serde(default)]
    kana: Vec<KanaElement>,
    #[serde(default)]
    sense: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct KanjiElement {
    text: String,
    #[serde(default)]
    priorities: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct KanaElement {
    text: String,
    #[serde(rename = "appliesToKanji", default)]
    applies_to_kanji: Vec<String>,
    #[serde(default)]
    priorities: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Sense {
    #[serde(rename = "appliesToKanji", default)]
    applies_to_kanji: Vec<String>,
    #[serde(rename = "appliesToKana", default)]
    applies_to_kana: Vec<String>,
    #[serde(default)]
    misc: Vec<String>,
    #[serde(default)]
    gloss: Vec<Gloss>,
}

#[derive(Debug, Deserialize)]
struct Gloss {
    #[serde(default = "default_lang")]
    lang: String,
    text: String,
}

fn default_lang() -> String {
    "eng".to_string()
}

fn restriction(forms: Vec<String>) -> Vec<String> {
    forms
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty() && f != ANY_FORM)
        .collect()
}

/// Reads JMdict records, keeping glosses of one language
pub struct JMdictLoader {
    lang: String,
}

impl Default for JMdictLoader {
    fn default() -> Self {
        Self::new(default_lang())
    }
}

impl JMdictLoader {
    pub fn new(lang: impl Into<String>) -> Self {
        Self { lang: lang.into() }
    }

    /// Load records from a JSON file (jmdict-simplified format)
    pub fn load_from_file(&self, path: &Path) -> Result<Vec<JmdictRecord>, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading JMdict from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let records = self.parse_json(&json)?;
        tracing::info!("Loaded {} JMdict records from file", records.len());
        Ok(records)
    }

    /// Parse records from a JSON string.
    ///
    /// Senses without a gloss in the loader's language are dropped, a record
    /// left with no sense is kept so the builder can report it.
    pub fn parse_json(&self, json_str: &str) -> Result<Vec<JmdictRecord>, LoadError> {
        let data: JMdictJson = serde_json::from_str(json_str)?;
        Ok(data
            .words
            .into_iter()
            .map(|word| self.convert(word))
            .collect())
    }

    fn convert(&self, word: JMdictJsonEntry) -> JmdictRecord {
        let kanji = word
            .kanji
            .into_iter()
            .map(|k| KanjiForm {
                text: k.text.trim().to_string(),
                priorities: k.priorities,
            })
            .collect();

        let readings = word
            .kana
            .into_iter()
            .map(|k| Reading {
                text: k.text.trim().to_string(),
                kanji_restriction: restriction(k.applies_to_kanji),
                priorities: k.priorities,
            })
            .collect();

        let senses = word
            .sense
            .into_iter()
            .filter_map(|sense| {
                let glosses: Vec<String> = sense
                    .gloss
                    .into_iter()
                    .filter(|g| g.lang == self.lang)
                    .map(|g| g.text)
                    .collect();
                if glosses.is_empty() {
                    return None;
                }

                Some(RawSense {
                    glosses,
                    kanji_restriction: restriction(sense.applies_to_kanji),
                    reading_restriction: restriction(sense.applies_to_kana),
                    usually_kana: sense.misc.iter().any(|m| m == USUALLY_KANA),
                })
            })
            .collect();

        JmdictRecord {
            id: word.id,
            kanji,
            readings,
            senses,
        }
    }
}
