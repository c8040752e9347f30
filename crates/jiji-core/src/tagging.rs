use std::cmp::Ordering;

use crate::diagnostics::{Diagnostics, Warning};
use crate::dictionary::Dictionary;
use crate::entry::Entry;
use crate::error::TagError;
use crate::tag_file::TagFile;

/// Split `freq05` into `("freq", Some("05"))`, `stopword` into `("stopword", None)`
pub fn split_numbered(tag: &str) -> (&str, Option<&str>) {
    let prefix = tag.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &tag[prefix.len()..];
    if digits.is_empty() {
        (prefix, None)
    } else {
        (prefix, Some(digits))
    }
}

/// Compare two ASCII digit strings by value, whatever their length
fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Add `tag` to `entry`, keeping at most one tag per numbered family.
///
/// When the entry already holds a tag with the same prefix, the tag with the
/// lowest number wins if `prefer_lowest`, otherwise the highest. Returns
/// whether the entry changed.
pub fn apply_tag(entry: &mut Entry, tag: &str, prefer_lowest: bool) -> Result<bool, TagError> {
    if entry.has_tag(tag) {
        return Ok(false);
    }

    let (prefix, Some(number)) = split_numbered(tag) else {
        entry.add_tag(tag)?;
        return Ok(true);
    };

    let mut family: Vec<String> = entry
        .tags()
        .iter()
        .filter(|t| matches!(split_numbered(t), (p, Some(_)) if p == prefix))
        .cloned()
        .collect();

    let existing = match family.len() {
        0 => {
            entry.add_tag(tag)?;
            return Ok(true);
        }
        1 => family.remove(0),
        _ => {
            return Err(TagError::NumberedTagCorruption {
                entry: entry.id().clone(),
                prefix: prefix.to_string(),
                tags: family,
            });
        }
    };

    let existing_number = &existing[prefix.len()..];
    let wins = match compare_numbers(number, existing_number) {
        Ordering::Less => prefer_lowest,
        Ordering::Greater => !prefer_lowest,
        // freq5 against freq05: same level, keep what is there
        Ordering::Equal => false,
    };
    if !wins {
        return Ok(false);
    }

    tracing::debug!("entry {}: {} replaces {}", entry.id(), tag, existing);
    entry.add_tag(tag)?;
    entry.remove_tag(&existing);
    Ok(true)
}

/// Tag every entry matching a headword of `tag_file`.
///
/// Lines whose headword is unknown, or ambiguous when the file disallows
/// multiple entries, are reported to `diagnostics` and skipped. Returns the
/// number of lines that were applied.
pub fn apply_tag_file(
    dictionary: &mut Dictionary,
    tag_file: &TagFile,
    diagnostics: &mut Diagnostics,
) -> Result<usize, TagError> {
    let options = tag_file.options;
    let mut applied = 0;

    for (line, headword) in tag_file.lines() {
        let positions = dictionary.positions(headword).to_vec();

        if positions.is_empty() {
            diagnostics.warn(Warning::TagLookupMiss {
                tag: tag_file.name.clone(),
                line,
                headword: headword.to_string(),
            });
            continue;
        }

        if !options.allow_multiple_entries && positions.len() > 1 {
            let entries = dictionary
                .lookup(headword)
                .iter()
                .map(|e| e.id().clone())
                .collect();
            diagnostics.warn(Warning::MultiEntryTagAmbiguity {
                tag: tag_file.name.clone(),
                line,
                headword: headword.to_string(),
                entries,
            });
            continue;
        }

        let token = if options.line_numbered_tags {
            format!("{}{}", tag_file.name, line)
        } else {
            tag_file.name.clone()
        };

        for idx in positions {
            if let Some(entry) = dictionary.entry_mut(idx) {
                apply_tag(entry, &token, options.prefer_lowest_number)?;
            }
        }
        applied += 1;
    }

    tracing::info!(
        "Applied tag {} to {} of {} headwords",
        tag_file.name,
        applied,
        tag_file.headwords.len()
    );
    Ok(applied)
}
