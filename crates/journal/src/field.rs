//! Field names and the ordered field collection sent with each entry.

use rustc_hash::FxHashMap;

use crate::error::{FieldNameError, JournalError};

/// Name of the field carrying the entry text.
pub const MESSAGE: &str = "MESSAGE";

/// Name of the field carrying the numeric priority.
pub const PRIORITY: &str = "PRIORITY";

/// Checks `name` against the journal's field naming rules.
///
/// A valid name is non-empty, does not start with `_`, and contains only
/// `A-Z`, `0-9` and `_`. journald silently drops fields that break these
/// rules, so the client rejects them before sending.
///
/// # Examples
///
/// ```
/// use journal::{FieldNameError, validate_field_name};
///
/// assert!(validate_field_name("BYTES_FREE").is_ok());
/// assert_eq!(validate_field_name("_PID"), Err(FieldNameError::LeadingUnderscore));
/// assert_eq!(validate_field_name("path"), Err(FieldNameError::InvalidCharacter('p')));
/// ```
pub fn validate_field_name(name: &str) -> Result<(), FieldNameError> {
    if name.is_empty() {
        return Err(FieldNameError::Empty);
    }
    if name.starts_with('_') {
        return Err(FieldNameError::LeadingUnderscore);
    }
    match name
        .chars()
        .find(|c| !matches!(c, 'A'..='Z' | '0'..='9' | '_'))
    {
        Some(c) => Err(FieldNameError::InvalidCharacter(c)),
        None => Ok(()),
    }
}

pub(crate) fn check_field_name(name: &str) -> Result<(), JournalError> {
    validate_field_name(name).map_err(|reason| JournalError::InvalidFieldName {
        name: name.to_owned(),
        reason,
    })
}

/// Key-unique field map that remembers insertion order.
///
/// Inserting an existing key replaces its value in place, so the key keeps
/// the position of its first insertion. Entries are written to the journal
/// in this order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JournalFields {
    entries: Vec<(String, String)>,
    index: FxHashMap<String, usize>,
}

impl JournalFields {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts a field, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        if let Some(&slot) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[slot].1, value));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, value));
        None
    }

    /// Looks up a field value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    /// Returns `true` when `name` is present.
    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when there are no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates names in insertion order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for JournalFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        fields.extend(iter);
        fields
    }
}

impl<K, V> Extend<(K, V)> for JournalFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for JournalFields {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_uppercase_digits_and_underscore() {
        assert_eq!(validate_field_name("A"), Ok(()));
        assert_eq!(validate_field_name("CODE_LINE"), Ok(()));
        assert_eq!(validate_field_name("X9_"), Ok(()));
        assert_eq!(validate_field_name("9LIVES"), Ok(()));
    }

    #[test]
    fn rejects_empty_and_reserved_names() {
        assert_eq!(validate_field_name(""), Err(FieldNameError::Empty));
        assert_eq!(
            validate_field_name("_SYSTEMD_UNIT"),
            Err(FieldNameError::LeadingUnderscore)
        );
    }

    #[test]
    fn rejects_first_invalid_character() {
        assert_eq!(
            validate_field_name("BYTES-FREE"),
            Err(FieldNameError::InvalidCharacter('-'))
        );
        assert_eq!(
            validate_field_name("PATHé"),
            Err(FieldNameError::InvalidCharacter('é'))
        );
    }

    #[test]
    fn check_field_name_wraps_reason() {
        let err = check_field_name("bad").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid journal field \"bad\": variable name contains invalid character 'b'"
        );
    }

    #[test]
    fn insert_keeps_first_position_and_replaces_value() {
        let mut fields = JournalFields::new();
        assert_eq!(fields.insert("B", "1"), None);
        assert_eq!(fields.insert("A", "2"), None);
        assert_eq!(fields.insert("B", "3"), Some("1".to_owned()));

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("B"), Some("3"));
        assert!(fields.contains_key("A"));
        assert!(!fields.contains_key("C"));
        assert_eq!(fields.iter().collect::<Vec<_>>(), [("B", "3"), ("A", "2")]);
    }

    #[test]
    fn collect_and_into_iter_preserve_order() {
        let fields: JournalFields = [("Z", "last"), ("M", "mid"), ("Z", "again")]
            .into_iter()
            .collect();
        assert_eq!(fields.names().collect::<Vec<_>>(), ["Z", "M"]);
        let owned: Vec<(String, String)> = fields.into_iter().collect();
        assert_eq!(owned[0], ("Z".to_owned(), "again".to_owned()));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ab: JournalFields = [("A", "1"), ("B", "2")].into_iter().collect();
        let ba: JournalFields = [("B", "2"), ("A", "1")].into_iter().collect();
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }
}
