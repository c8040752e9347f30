/// JMdict `misc` value marking a sense usually written in kana alone
pub const USUALLY_KANA: &str = "uk";

/// Kanji form (`<keb>`) with its priority markers (`<ke_pri>`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanjiForm {
    pub text: String,
    pub priorities: Vec<String>,
}

/// Kana form (`<reb>`), optionally restricted to some kanji forms (`<re_restr>`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reading {
    pub text: String,
    pub kanji_restriction: Vec<String>,
    pub priorities: Vec<String>,
}

/// One `<sense>`: glosses and the forms it is limited to (`<stagk>`, `<stagr>`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSense {
    pub glosses: Vec<String>,
    pub kanji_restriction: Vec<String>,
    pub reading_restriction: Vec<String>,
    pub usually_kana: bool,
}

impl RawSense {
    pub fn new(glosses: &[&str]) -> Self {
        Self {
            glosses: glosses.iter().map(|g| g.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn has_restriction(&self) -> bool {
        !self.kanji_restriction.is_empty() || !self.reading_restriction.is_empty()
    }

    /// Readings this sense applies to.
    ///
    /// Without restriction, all of them. Otherwise the readings named by the
    /// sense, plus the readings reachable from the kanji forms it names. A
    /// reading that declares no kanji restriction of its own is reachable
    /// from every kanji form.
    pub fn readings<'a>(&self, all_readings: &'a [Reading]) -> Vec<&'a Reading> {
        if !self.has_restriction() {
            return all_readings.iter().collect();
        }

        all_readings
            .iter()
            .filter(|r| {
                let named = self.reading_restriction.contains(&r.text);
                let reachable = !self.kanji_restriction.is_empty()
                    && (r.kanji_restriction.is_empty()
                        || r
                            .kanji_restriction
                            .iter()
                            .any(|k| self.kanji_restriction.contains(k)));
                named || reachable
            })
            .collect()
    }
}

/// A JMdict `<entry>` as read from the source, before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JmdictRecord {
    /// `<ent_seq>`; an id is generated when absent
    pub id: Option<String>,
    pub kanji: Vec<KanjiForm>,
    pub readings: Vec<Reading>,
    pub senses: Vec<RawSense>,
}

impl JmdictRecord {
    /// Copy with every form and restriction trimmed, blank ones dropped
    pub fn normalized(&self) -> JmdictRecord {
        JmdictRecord {
            id: self.id.clone(),
            kanji: self
                .kanji
                .iter()
                .filter_map(|k| {
                    let text = trimmed(&k.text)?;
                    Some(KanjiForm {
                        text,
                        priorities: k.priorities.clone(),
                    })
                })
                .collect(),
            readings: self
                .readings
                .iter()
                .filter_map(|r| {
                    let text = trimmed(&r.text)?;
                    Some(Reading {
                        text,
                        kanji_restriction: trimmed_all(&r.kanji_restriction),
                        priorities: r.priorities.clone(),
                    })
                })
                .collect(),
            senses: self
                .senses
                .iter()
                .map(|s| RawSense {
                    glosses: s.glosses.clone(),
                    kanji_restriction: trimmed_all(&s.kanji_restriction),
                    reading_restriction: trimmed_all(&s.reading_restriction),
                    usually_kana: s.usually_kana,
                })
                .collect(),
        }
    }

    /// Priority markers of every form, first occurrence order
    pub fn priorities(&self) -> Vec<&str> {
        let mut priorities: Vec<&str> = Vec::new();
        let all = self
            .kanji
            .iter()
            .flat_map(|k| k.priorities.iter())
            .chain(self.readings.iter().flat_map(|r| r.priorities.iter()));
        for p in all {
            if !priorities.contains(&p.as_str()) {
                priorities.push(p);
            }
        }
        priorities
    }
}

fn trimmed(form: &str) -> Option<String> {
    let form = form.trim();
    (!form.is_empty()).then(|| form.to_string())
}

fn trimmed_all(forms: &[String]) -> Vec<String> {
    forms.iter().filter_map(|f| trimmed(f)).collect()
}
