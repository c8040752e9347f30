use std::collections::HashMap;

use indexmap::IndexMap;
use indexmap::map::Entry as MapEntry;
use jiji_config::DictionaryConfig;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::diagnostics::{Diagnostics, Warning};
use crate::entry::{Entry, EntryId, LIST_SEPARATOR};

/// Key of the metadata block at the top of a serialized dictionary
pub const ABOUT_DICT_KEY: &str = "_about_this_dictionary";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub title: String,
    pub lang_from: String,
    pub lang_to: String,
    pub licence: String,
}

impl DictionaryMetadata {
    /// `lang_to` defaults to `lang_from` for monolingual dictionaries
    pub fn new(
        title: impl Into<String>,
        lang_from: impl Into<String>,
        lang_to: Option<String>,
        licence: impl Into<String>,
    ) -> Self {
        let lang_from = lang_from.into();
        Self {
            title: title.into(),
            lang_to: lang_to.unwrap_or_else(|| lang_from.clone()),
            lang_from,
            licence: licence.into(),
        }
    }
}

impl From<&DictionaryConfig> for DictionaryMetadata {
    fn from(config: &DictionaryConfig) -> Self {
        Self::new(
            config.title.clone(),
            config.lang_from.clone(),
            config.lang_to.clone(),
            config.licence.clone(),
        )
    }
}

/// Append-only entry store with a headword index.
///
/// Entries are never removed, and the index is updated on every `add`, so
/// a lookup always sees every entry added so far.
#[derive(Debug, Clone)]
pub struct Dictionary {
    metadata: DictionaryMetadata,
    entries: Vec<Entry>,
    headword_index: HashMap<String, Vec<usize>>,
}

impl Dictionary {
    pub fn new(metadata: DictionaryMetadata) -> Self {
        Self {
            metadata,
            entries: Vec::new(),
            headword_index: HashMap::new(),
        }
    }

    pub fn metadata(&self) -> &DictionaryMetadata {
        &self.metadata
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, entry: Entry) {
        let entry_idx = self.entries.len();
        for headword in entry.headwords() {
            self.headword_index
                .entry(headword.clone())
                .or_default()
                .push(entry_idx);
        }
        self.entries.push(entry);
    }

    /// Entries having `headword` among their headwords, in order of addition
    pub fn lookup(&self, headword: &str) -> Vec<&Entry> {
        self.positions(headword)
            .iter()
            .filter_map(|&idx| self.entries.get(idx))
            .collect()
    }

    pub(crate) fn positions(&self, headword: &str) -> &[usize] {
        self.headword_index
            .get(headword)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Only tags may change through this handle; headwords stay fixed once indexed
    pub(crate) fn entry_mut(&mut self, idx: usize) -> Option<&mut Entry> {
        self.entries.get_mut(idx)
    }

    /// Flatten into an ordered `key -> record` mapping.
    ///
    /// Entries without sense or headword are skipped, and when two entries
    /// share a key the first one wins. The metadata key counts as taken.
    pub fn serialize(&self, diagnostics: &mut Diagnostics) -> SerializedDictionary {
        let mut entries: IndexMap<String, SerializedEntry> = IndexMap::new();
        let mut owners: HashMap<String, EntryId> = HashMap::new();

        for entry in &self.entries {
            if entry.headwords().is_empty() {
                diagnostics.warn(Warning::EntryWithoutHeadword {
                    entry: entry.id().clone(),
                });
                continue;
            }

            let Some(record) = SerializedEntry::from_entry(entry) else {
                diagnostics.warn(Warning::EntryWithoutSense {
                    entry: entry.id().clone(),
                });
                continue;
            };

            let key = entry.key();
            if key == ABOUT_DICT_KEY {
                diagnostics.warn(Warning::DuplicateEntryKey {
                    entry: entry.id().clone(),
                    kept: EntryId::new(ABOUT_DICT_KEY),
                    key,
                });
                continue;
            }

            match entries.entry(key) {
                MapEntry::Occupied(occupied) => {
                    let kept = owners
                        .get(occupied.key())
                        .cloned()
                        .unwrap_or_else(|| entry.id().clone());
                    diagnostics.warn(Warning::DuplicateEntryKey {
                        entry: entry.id().clone(),
                        kept,
                        key: occupied.key().clone(),
                    });
                }
                MapEntry::Vacant(vacant) => {
                    owners.insert(vacant.key().clone(), entry.id().clone());
                    vacant.insert(record);
                }
            }
        }

        tracing::info!(
            "Serialized {} of {} entries of {}",
            entries.len(),
            self.entries.len(),
            self.metadata.title
        );

        SerializedDictionary {
            about: About::from(&self.metadata),
            entries,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Languages {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct About {
    pub title: String,
    pub licence: String,
    pub languages: Languages,
}

impl From<&DictionaryMetadata> for About {
    fn from(metadata: &DictionaryMetadata) -> Self {
        Self {
            title: metadata.title.clone(),
            licence: metadata.licence.clone(),
            languages: Languages {
                from: metadata.lang_from.clone(),
                to: metadata.lang_to.clone(),
            },
        }
    }
}

/// One flattened entry; exactly one of `sense` / `senses` is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerializedEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sense: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl SerializedEntry {
    fn from_entry(entry: &Entry) -> Option<Self> {
        let (sense, senses) = match entry.senses() {
            [] => return None,
            [single] => (Some(single.clone()), None),
            many => (None, Some(many.to_vec())),
        };

        Some(Self {
            sense,
            senses,
            pronunciation: join_non_empty(entry.pronunciations()),
            tags: join_non_empty(entry.tags()),
        })
    }
}

fn join_non_empty(items: &[String]) -> Option<String> {
    (!items.is_empty()).then(|| items.join(LIST_SEPARATOR))
}

/// Metadata block followed by every entry, in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedDictionary {
    pub about: About,
    pub entries: IndexMap<String, SerializedEntry>,
}

impl Serialize for SerializedDictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        map.serialize_entry(ABOUT_DICT_KEY, &self.about)?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn metadata() -> DictionaryMetadata {
        DictionaryMetadata::new("Test", "Japanese", Some("English".to_string()), "")
    }

    fn entry(id: &str, headwords: &[&str], senses: &[&str]) -> Entry {
        let mut entry = Entry::new(id);
        for h in headwords {
            entry.add_headword(h);
        }
        for s in senses {
            entry.add_sense(&[*s], &[]).unwrap();
        }
        entry
    }

    #[test]
    fn test_lang_to_defaults_to_lang_from() {
        let metadata = DictionaryMetadata::new("Lexique", "French", None, "");
        assert_eq!(metadata.lang_to, "French");
    }

    #[test]
    fn test_lookup_homographs_in_order() {
        let mut dict = Dictionary::new(metadata());
        dict.add(entry("1", &["橋", "はし"], &["bridge"]));
        dict.add(entry("2", &["箸", "はし"], &["chopsticks"]));
        dict.add(entry("3", &["端"], &["edge"]));

        let ids: Vec<&str> = dict.lookup("はし").iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(dict.lookup("端").len(), 1);
        assert!(dict.lookup("missing").is_empty());
    }

    #[test]
    fn test_index_consistent_with_entries() {
        let mut dict = Dictionary::new(metadata());
        dict.add(entry("1", &["a", "b"], &["x"]));
        dict.add(entry("2", &["b", "c"], &["y"]));
        dict.add(entry("3", &[], &["z"]));

        for e in dict.entries() {
            for h in e.headwords() {
                assert!(dict.lookup(h).iter().any(|found| found.id() == e.id()));
            }
        }
        let indexed: usize = dict.headword_index.values().map(Vec::len).sum();
        let expected: usize = dict.entries().iter().map(|e| e.headwords().len()).sum();
        assert_eq!(indexed, expected);
    }

    #[test]
    fn test_serialize_sense_and_senses() {
        let mut dict = Dictionary::new(metadata());
        let mut cat = entry("1", &["猫"], &["cat"]);
        cat.add_pronunciation("ねこ").unwrap();
        cat.add_tag("freq02").unwrap();
        cat.add_tag("jlpt5").unwrap();
        dict.add(cat);
        dict.add(entry("2", &["犬"], &["dog", "spy"]));

        let mut diagnostics = Diagnostics::new();
        let out = dict.serialize(&mut diagnostics);

        assert!(diagnostics.is_empty());
        let cat = &out.entries["猫"];
        assert_eq!(cat.sense.as_deref(), Some("cat"));
        assert_eq!(cat.senses, None);
        assert_eq!(cat.pronunciation.as_deref(), Some("ねこ"));
        assert_eq!(cat.tags.as_deref(), Some("freq02, jlpt5"));

        let dog = &out.entries["犬"];
        assert_eq!(dog.sense, None);
        assert_eq!(
            dog.senses,
            Some(vec!["dog".to_string(), "spy".to_string()])
        );
        assert_eq!(dog.pronunciation, None);
        assert_eq!(dog.tags, None);
    }

    #[test]
    fn test_serialize_skips_invalid_entries() {
        let mut dict = Dictionary::new(metadata());
        dict.add(entry("1", &["猫"], &[]));
        dict.add(entry("2", &[], &["orphan"]));
        dict.add(entry("3", &["犬"], &["dog"]));

        let mut diagnostics = Diagnostics::new();
        let out = dict.serialize(&mut diagnostics);

        assert_eq!(out.entries.len(), 1);
        assert_eq!(
            diagnostics.warnings(),
            &[
                Warning::EntryWithoutSense {
                    entry: EntryId::new("1")
                },
                Warning::EntryWithoutHeadword {
                    entry: EntryId::new("2")
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_key_first_wins() {
        let mut dict = Dictionary::new(metadata());
        dict.add(entry("1", &["猫", "ねこ"], &["cat"]));
        dict.add(entry("2", &["猫", "ねこ"], &["shamisen"]));

        let mut diagnostics = Diagnostics::new();
        let out = dict.serialize(&mut diagnostics);

        assert_eq!(out.entries.len(), 1);
        assert_eq!(out.entries["猫, ねこ"].sense.as_deref(), Some("cat"));
        assert_eq!(
            diagnostics.warnings(),
            &[Warning::DuplicateEntryKey {
                entry: EntryId::new("2"),
                kept: EntryId::new("1"),
                key: "猫, ねこ".to_string(),
            }]
        );
    }

    #[test]
    fn test_metadata_key_is_reserved() {
        let mut dict = Dictionary::new(metadata());
        dict.add(entry("1", &[ABOUT_DICT_KEY], &["sneaky"]));
        dict.add(entry("2", &["犬"], &["dog"]));

        let mut diagnostics = Diagnostics::new();
        let out = dict.serialize(&mut diagnostics);

        assert_eq!(out.entries.len(), 1);
        assert!(!out.entries.contains_key(ABOUT_DICT_KEY));
        assert_eq!(
            diagnostics.warnings(),
            &[Warning::DuplicateEntryKey {
                entry: EntryId::new("1"),
                kept: EntryId::new(ABOUT_DICT_KEY),
                key: ABOUT_DICT_KEY.to_string(),
            }]
        );
    }

    #[test]
    fn test_serialized_keys_round_trip() {
        let mut dict = Dictionary::new(metadata());
        dict.add(entry("1", &["猫", "ねこ"], &["cat"]));
        dict.add(entry("2", &["犬"], &["dog"]));
        dict.add(entry("3", &["ねこ"], &["cat (kana)"]));

        let out = dict.serialize(&mut Diagnostics::new());
        let keys: HashSet<String> = out.entries.keys().cloned().collect();
        let expected: HashSet<String> = dict.entries().iter().map(Entry::key).collect();
        assert_eq!(keys, expected);

        let reingested: HashSet<Vec<String>> = keys
            .iter()
            .map(|k| k.split(LIST_SEPARATOR).map(str::to_string).collect())
            .collect();
        let headwords: HashSet<Vec<String>> =
            dict.entries().iter().map(|e| e.headwords().to_vec()).collect();
        assert_eq!(reingested, headwords);
    }
}
