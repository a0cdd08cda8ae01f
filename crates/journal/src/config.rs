//! Journal client configuration.

use std::path::PathBuf;

/// Well-known path of journald's native protocol socket.
pub const DEFAULT_SOCKET_PATH: &str = "/run/systemd/journal/socket";

/// Where the [`SystemJournal`](crate::SystemJournal) sends entries.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JournalConfig {
    /// Datagram socket journald listens on.
    pub socket_path: PathBuf,
}

impl JournalConfig {
    /// Configuration pointing at a custom socket, for tests and containers.
    pub fn with_socket_path(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self::with_socket_path(DEFAULT_SOCKET_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_journald() {
        assert_eq!(
            JournalConfig::default().socket_path,
            PathBuf::from("/run/systemd/journal/socket")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_socket_path_uses_default() {
        let config: JournalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, JournalConfig::default());

        let config: JournalConfig =
            serde_json::from_str(r#"{"socket_path":"/tmp/j.sock"}"#).unwrap();
        assert_eq!(config.socket_path, PathBuf::from("/tmp/j.sock"));
    }
}
