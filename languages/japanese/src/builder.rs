use std::collections::HashSet;

use jiji_core::error::{BuildError, BuildRejection, TagError};
use jiji_core::{Entry, EntryId, IdSource, SequentialIds, apply_tag};

use crate::record::JmdictRecord;

/// Prefix of the JMdict frequency-of-use bands (`nf01` .. `nf48`)
const FREQUENCY_BAND_PREFIX: &str = "nf";

/// Turns JMdict records into dictionary entries.
///
/// Kanji forms are the headwords and kana forms the pronunciations, except
/// for kana-only words and senses usually written in kana, whose readings
/// become headwords too.
pub struct EntryBuilder<I = SequentialIds> {
    ids: I,
    issued: HashSet<EntryId>,
}

impl EntryBuilder<SequentialIds> {
    pub fn new() -> Self {
        Self::with_ids(SequentialIds::new())
    }

    /// Generated ids continue after the highest numeric `ent_seq` of `records`
    pub fn for_records(records: &[JmdictRecord]) -> Self {
        let last = records
            .iter()
            .filter_map(|r| r.id.as_deref()?.trim().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::with_ids(SequentialIds::starting_after(last))
    }
}

impl Default for EntryBuilder<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> EntryBuilder<I> {
    /// Use `ids` for records without `ent_seq`
    pub fn with_ids(ids: I) -> Self {
        Self {
            ids,
            issued: HashSet::new(),
        }
    }

    /// Generated ids skip every id this builder already handed out
    fn next_id(&mut self, supplied: Option<&str>) -> EntryId {
        let id = match supplied {
            Some(id) => EntryId::new(id),
            None => loop {
                let id = self.ids.next_id();
                if !self.issued.contains(&id) {
                    break id;
                }
            },
        };
        self.issued.insert(id.clone());
        id
    }

    pub fn build(&mut self, record: &JmdictRecord) -> Result<Entry, BuildError> {
        let id = self.next_id(record.id.as_deref());
        let record = &record.normalized();

        if record.senses.is_empty() {
            return Err(BuildRejection::NoSenses(id).into());
        }
        if record.senses.iter().any(|s| s.glosses.is_empty()) {
            return Err(BuildRejection::NoGlosses(id).into());
        }

        let has_kanji = !record.kanji.is_empty();
        let mut headwords: Vec<&str> = if has_kanji {
            record.kanji.iter().map(|k| k.text.as_str()).collect()
        } else {
            record.readings.iter().map(|r| r.text.as_str()).collect()
        };

        let mut restrictions: Vec<Vec<String>> = record
            .senses
            .iter()
            .map(|s| {
                s.kanji_restriction
                    .iter()
                    .chain(s.reading_restriction.iter())
                    .cloned()
                    .collect()
            })
            .collect();

        for (sense, restriction) in record.senses.iter().zip(restrictions.iter_mut()) {
            if !sense.usually_kana {
                continue;
            }
            for reading in sense.readings(&record.readings) {
                if !headwords.contains(&reading.text.as_str()) {
                    headwords.push(&reading.text);
                }
                if sense.has_restriction() {
                    restriction.push(reading.text.clone());
                }
            }
        }

        let mut entry = Entry::new(id);
        for headword in headwords {
            entry.add_headword(headword);
        }
        if entry.headwords().is_empty() {
            return Err(BuildRejection::NoHeadwords(entry.id().clone()).into());
        }

        for reading in &record.readings {
            if !entry.headwords().contains(&reading.text) {
                entry.add_pronunciation(&reading.text)?;
            }
        }

        for (sense, restriction) in record.senses.iter().zip(&restrictions) {
            entry.add_sense(&sense.glosses, restriction)?;
        }

        for priority in record.priorities() {
            if priority.starts_with(FREQUENCY_BAND_PREFIX) {
                apply_tag(&mut entry, priority, true).map_err(|e| match e {
                    TagError::Entry(e) => BuildError::Malformed(e),
                    e => BuildError::Tag(e),
                })?;
            }
        }

        Ok(entry)
    }
}
