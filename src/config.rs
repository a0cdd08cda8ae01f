//! Hook configuration.

use journal::JournalConfig;

/// Settings for [`enable_with_config`](crate::enable_with_config) and
/// [`init_journal_tracing`](crate::init_journal_tracing).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HookConfig {
    /// Process fields in byte-wise order of their original names.
    pub sort_entries: bool,
    /// Where entries are sent.
    pub journal: JournalConfig,
}

impl HookConfig {
    /// Default configuration with sorted field processing.
    pub fn sorted() -> Self {
        Self {
            sort_entries: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unsorted_on_the_system_socket() {
        let config = HookConfig::default();
        assert!(!config.sort_entries);
        assert_eq!(config.journal, JournalConfig::default());
        assert!(HookConfig::sorted().sort_entries);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_documents() {
        let config: HookConfig = serde_json::from_str(r#"{"sort_entries":true}"#).unwrap();
        assert_eq!(config, HookConfig::sorted());

        let config: HookConfig =
            serde_json::from_str(r#"{"journal":{"socket_path":"/tmp/j"}}"#).unwrap();
        assert!(!config.sort_entries);
        assert_eq!(config.journal.socket_path, std::path::PathBuf::from("/tmp/j"));
    }
}
