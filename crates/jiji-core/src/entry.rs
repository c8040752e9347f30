use std::fmt;

use crate::error::{EntryError, TokenKind};

/// Separator used when headwords, pronunciations and tags are flattened
pub const LIST_SEPARATOR: &str = ", ";

/// Opaque entry identifier, unique within a dictionary
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A dictionary entry: headwords, pronunciations, senses and tags.
///
/// Every list keeps insertion order and silently ignores duplicates.
/// Pronunciations and tags are flattened into comma separated fields on
/// output, so a comma inside one of them is rejected on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    headwords: Vec<String>,
    pronunciations: Vec<String>,
    senses: Vec<String>,
    tags: Vec<String>,
}

impl Entry {
    pub fn new(id: impl Into<EntryId>) -> Self {
        Self {
            id: id.into(),
            headwords: Vec::new(),
            pronunciations: Vec::new(),
            senses: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn headwords(&self) -> &[String] {
        &self.headwords
    }

    pub fn pronunciations(&self) -> &[String] {
        &self.pronunciations
    }

    pub fn senses(&self) -> &[String] {
        &self.senses
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns false when the headword was blank or already present
    pub fn add_headword(&mut self, headword: &str) -> bool {
        let headword = headword.trim();
        if headword.is_empty() || self.headwords.iter().any(|h| h == headword) {
            return false;
        }
        self.headwords.push(headword.to_string());
        true
    }

    pub fn add_pronunciation(&mut self, pronunciation: &str) -> Result<(), EntryError> {
        check_token(TokenKind::Pronunciation, pronunciation)?;
        if !self.pronunciations.iter().any(|p| p == pronunciation) {
            self.pronunciations.push(pronunciation.to_string());
        }
        Ok(())
    }

    pub fn add_tag(&mut self, tag: &str) -> Result<(), EntryError> {
        check_token(TokenKind::Tag, tag)?;
        if !self.has_tag(tag) {
            self.tags.push(tag.to_string());
        }
        Ok(())
    }

    pub(crate) fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Add a sense made of one or more glosses.
    ///
    /// Glosses are joined with `/`. A non-empty `restriction` limits the
    /// sense to some headwords or pronunciations; each of them must already
    /// be on the entry. The restriction is rendered as a `(a, b)` prefix in
    /// headword then pronunciation order.
    pub fn add_sense<S: AsRef<str>>(
        &mut self,
        glosses: &[S],
        restriction: &[String],
    ) -> Result<(), EntryError> {
        if glosses.is_empty() {
            return Err(EntryError::NoGlosses {
                entry: self.id.clone(),
            });
        }

        let text: String = glosses
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("/")
            .replace('\n', "");

        if restriction.is_empty() {
            self.senses.push(text);
            return Ok(());
        }

        let mut positions = Vec::with_capacity(restriction.len());
        for form in restriction {
            match self.form_position(form) {
                Some(position) => positions.push((position, form.as_str())),
                None => {
                    return Err(EntryError::RestrictionViolation {
                        entry: self.id.clone(),
                        restriction: restriction.to_vec(),
                    });
                }
            }
        }
        positions.sort_unstable();
        positions.dedup();

        let forms: Vec<&str> = positions.into_iter().map(|(_, form)| form).collect();
        self.senses
            .push(format!("({}){}", forms.join(LIST_SEPARATOR), text));
        Ok(())
    }

    /// Serialization key: the headwords joined with `, `
    pub fn key(&self) -> String {
        self.headwords.join(LIST_SEPARATOR)
    }

    fn form_position(&self, form: &str) -> Option<usize> {
        self.headwords
            .iter()
            .chain(self.pronunciations.iter())
            .position(|f| f == form)
    }
}

fn check_token(kind: TokenKind, token: &str) -> Result<(), EntryError> {
    if token.contains(',') {
        return Err(EntryError::InvalidToken {
            kind,
            token: token.to_string(),
        });
    }
    Ok(())
}
