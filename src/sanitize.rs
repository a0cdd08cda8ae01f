//! Field-name sanitization.
//!
//! Journal field names may only contain `A-Z`, `0-9` and `_`, and names
//! starting with `_` are reserved for fields journald adds itself.

/// Maps an arbitrary field name onto the journal's field-name alphabet.
///
/// ASCII lowercase letters are uppercased, `A-Z`, `0-9` and `_` are kept, and
/// every other character (including any non-ASCII character) becomes `_`.
/// All leading underscores are then removed. The result is empty when the
/// name contained nothing but characters that map to `_`.
///
/// # Examples
///
/// ```
/// use journalhook::sanitize_key;
///
/// assert_eq!(sanitize_key("my-key.ok"), "MY_KEY_OK");
/// assert_eq!(sanitize_key("_internal"), "INTERNAL");
/// assert_eq!(sanitize_key("__x"), "X");
/// assert_eq!(sanitize_key("--"), "");
/// ```
pub fn sanitize_key(name: &str) -> String {
    let mut key: String = name.chars().map(sanitize_char).collect();
    let leading = key.len() - key.trim_start_matches('_').len();
    key.drain(..leading);
    key
}

const fn sanitize_char(c: char) -> char {
    match c {
        'A'..='Z' | '0'..='9' | '_' => c,
        'a'..='z' => c.to_ascii_uppercase(),
        _ => '_',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lowercase_is_folded() {
        assert_eq!(sanitize_key("path"), "PATH");
        assert_eq!(sanitize_key("Path9"), "PATH9");
    }

    #[test]
    fn punctuation_becomes_underscore() {
        assert_eq!(sanitize_key("my-key.ok"), "MY_KEY_OK");
        assert_eq!(sanitize_key("bytes-free"), "BYTES_FREE");
        assert_eq!(sanitize_key("a b"), "A_B");
    }

    #[test]
    fn non_ascii_becomes_one_underscore_per_char() {
        assert_eq!(sanitize_key("café"), "CAF_");
        assert_eq!(sanitize_key("x名前"), "X__");
    }

    #[test]
    fn every_leading_underscore_is_stripped() {
        assert_eq!(sanitize_key("_internal"), "INTERNAL");
        assert_eq!(sanitize_key("__x"), "X");
        assert_eq!(sanitize_key("-_-x"), "X");
        assert_eq!(sanitize_key("x__"), "X__");
    }

    #[test]
    fn names_without_legal_characters_become_empty() {
        assert_eq!(sanitize_key(""), "");
        assert_eq!(sanitize_key("___"), "");
        assert_eq!(sanitize_key("名前"), "");
    }

    proptest! {
        #[test]
        fn lowercase_names_uppercase(name in "[a-z]{1,24}") {
            prop_assert_eq!(sanitize_key(&name), name.to_ascii_uppercase());
        }

        #[test]
        fn output_is_always_journal_legal(name in any::<String>()) {
            let key = sanitize_key(&name);
            prop_assert!(!key.starts_with('_'));
            prop_assert!(key.chars().all(|c| matches!(c, 'A'..='Z' | '0'..='9' | '_')));
            if !key.is_empty() {
                prop_assert!(journal::validate_field_name(&key).is_ok());
            }
        }

        #[test]
        fn sanitizing_is_idempotent(name in any::<String>()) {
            let once = sanitize_key(&name);
            prop_assert_eq!(sanitize_key(&once), once.clone());
        }
    }
}
