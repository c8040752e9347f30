use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Jim's Breen Japanese dictionary".to_string()
}

fn default_lang_from() -> String {
    "Japanese".to_string()
}

fn default_lang_to() -> Option<String> {
    Some("English".to_string())
}

fn default_licence() -> String {
    "Creative Commons Attribution-ShareAlike Licence (V3.0)".to_string()
}

/// Metadata written in the `_about_this_dictionary` block
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_lang_from")]
    pub lang_from: String,
    /// Falls back to `lang_from` for monolingual dictionaries
    #[serde(default = "default_lang_to")]
    pub lang_to: Option<String>,
    #[serde(default = "default_licence")]
    pub licence: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            lang_from: default_lang_from(),
            lang_to: default_lang_to(),
            licence: default_licence(),
        }
    }
}
