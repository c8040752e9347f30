use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use self::dictionary::DictionaryConfig;
pub use self::tags::{TagFileOptions, TagFileSpec, TagsConfig};

pub mod dictionary;
pub mod tags;

fn default_output() -> PathBuf {
    PathBuf::from("jmdict_english.jiji.yaml")
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("invalid config {path}: {source}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub tags: TagsConfig,

    /// Where the YAML dictionary is written
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Drop records with restrictions naming unknown forms instead of aborting
    pub skip_malformed_records: bool,
    /// Random UUIDs for records without a sequence number
    pub random_ids: bool,
    /// Emit log lines as JSON
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            tags: TagsConfig::default(),
            output: default_output(),
            skip_malformed_records: false,
            random_ids: false,
            log_json: false,
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load a JSON config file, then apply environment overrides
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        tracing::info!("Loading config from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        let mut config: Config =
            serde_json::from_reader(reader).map_err(|source| ConfigError::InvalidFormat {
                path: path.to_path_buf(),
                source,
            })?;
        config.apply_env();
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Override settings from `JIJI_*` variables resolved by `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("JIJI_TAGS_DIR") {
            self.tags.directory = PathBuf::from(dir);
        }

        if let Some(output) = lookup("JIJI_OUTPUT") {
            self.output = PathBuf::from(output);
        }

        if let Some(skip) = lookup("JIJI_SKIP_MALFORMED").and_then(|v| v.parse().ok()) {
            self.skip_malformed_records = skip;
        }

        if let Some(random) = lookup("JIJI_RANDOM_IDS").and_then(|v| v.parse().ok()) {
            self.random_ids = random;
        }

        if let Some(json) = lookup("JIJI_LOG_JSON").and_then(|v| v.parse().ok()) {
            self.log_json = json;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_tag_list_order() {
        let files: Vec<String> = TagsConfig::default()
            .files
            .into_iter()
            .map(|spec| spec.file)
            .collect();

        assert_eq!(files.len(), 18);
        assert_eq!(files[0], "stopword.txt");
        assert_eq!(files[1], "jlpt1.txt");
        assert_eq!(files[5], "jlpt5.txt");
        assert_eq!(files[6], "freq01.txt");
        assert_eq!(files[17], "freq12.txt");
    }

    #[test]
    fn test_jlpt_lists_keep_highest_level() {
        let config = TagsConfig::default();
        for spec in &config.files {
            let expected = !spec.file.starts_with("jlpt");
            assert_eq!(spec.options.prefer_lowest_number, expected, "{}", spec.file);
            assert!(spec.options.allow_multiple_entries);
            assert!(!spec.options.line_numbered_tags);
        }
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("JIJI_TAGS_DIR", "/tmp/tags"),
            ("JIJI_SKIP_MALFORMED", "true"),
            ("JIJI_LOG_JSON", "not-a-bool"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.tags.directory, PathBuf::from("/tmp/tags"));
        assert!(config.skip_malformed_records);
        assert!(!config.log_json);
        assert_eq!(config.output, default_output());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "dictionary": { "title": "Lexique", "lang_from": "French", "lang_to": null },
            "tags": { "files": [ { "file": "rank.txt", "options": { "line_numbered_tags": true } } ] }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.dictionary.title, "Lexique");
        assert_eq!(config.dictionary.lang_to, None);
        assert_eq!(config.tags.directory, PathBuf::from("tags"));
        assert_eq!(config.tags.files.len(), 1);
        let options = config.tags.files[0].options;
        assert!(options.line_numbered_tags);
        assert!(options.prefer_lowest_number);
        assert!(options.allow_multiple_entries);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "output": "out.yaml" }}"#).unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.output, PathBuf::from("out.yaml"));
        assert_eq!(config.dictionary, DictionaryConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load_from_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
