//! Record fields to journal fields.

use journal::{JournalFields, Priority};
use logging::{Fields, Record, Value};

use crate::error::HookError;
use crate::sanitize::sanitize_key;
use crate::severity::priority_for;

/// Converts one field into its journal name and text value.
///
/// The value is rendered with its natural [`Display`](std::fmt::Display)
/// formatting.
pub fn stringify_entry(name: &str, value: &Value) -> (String, String) {
    (sanitize_key(name), value.to_string())
}

/// Converts a record's field set into journal fields.
///
/// With `sort_entries` unset, fields are processed in the field set's own
/// unspecified order. With it set, they are processed in byte-wise order of
/// their original names, which makes both the surviving value of colliding
/// names and the order of the output deterministic.
///
/// When two names sanitize to the same key, the one processed last wins.
/// Fields whose name sanitizes to the empty string are dropped.
///
/// # Examples
///
/// ```
/// use journalhook::stringify_entries;
/// use logging::{Fields, Value};
///
/// let mut fields = Fields::default();
/// fields.insert("path".into(), Value::from("/var"));
/// fields.insert("bytes-free".into(), Value::from(0));
///
/// let entries = stringify_entries(&fields, true);
/// assert_eq!(
///     entries.iter().collect::<Vec<_>>(),
///     [("BYTES_FREE", "0"), ("PATH", "/var")]
/// );
/// ```
pub fn stringify_entries(fields: &Fields, sort_entries: bool) -> JournalFields {
    let mut entries = JournalFields::with_capacity(fields.len());
    if sort_entries {
        let mut names: Vec<&String> = fields.keys().collect();
        names.sort_unstable();
        for name in names {
            push_entry(&mut entries, name, &fields[name]);
        }
    } else {
        for (name, value) in fields {
            push_entry(&mut entries, name, value);
        }
    }
    entries
}

fn push_entry(entries: &mut JournalFields, name: &str, value: &Value) {
    let (key, text) = stringify_entry(name, value);
    if !key.is_empty() {
        entries.insert(key, text);
    }
}

/// A record in the shape the journal accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JournalEntry {
    /// Message text, unchanged.
    pub message: String,
    /// Priority derived from the record's level.
    pub priority: Priority,
    /// Sanitized, stringified fields.
    pub fields: JournalFields,
}

impl JournalEntry {
    /// Transforms `record`; fails only when its level has no priority.
    pub fn from_record(record: &Record, sort_entries: bool) -> Result<Self, HookError> {
        let priority = priority_for(record.level).ok_or(HookError::UnmappedLevel(record.level))?;
        Ok(Self {
            message: record.message.clone(),
            priority,
            fields: stringify_entries(&record.fields, sort_entries),
        })
    }
}
