//! crates/logging/src/hook.rs
//! Pluggable consumers that receive every record at the levels they select.

use std::error::Error;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::levels::Level;
use crate::record::Record;

/// Error type hooks report back to the logger.
pub type HookError = Box<dyn Error + Send + Sync + 'static>;

/// A consumer registered on a [`Logger`](crate::Logger).
///
/// The logger calls [`fire`](Hook::fire) synchronously on the logging thread
/// for every record whose level appears in [`levels`](Hook::levels).
pub trait Hook: Send + Sync {
    /// Levels this hook wants to receive.
    fn levels(&self) -> &[Level];

    /// Consumes one record.
    fn fire(&self, record: &Record) -> Result<(), HookError>;
}

/// Hooks indexed by the level they registered for.
#[derive(Clone, Default)]
pub struct LevelHooks {
    by_level: FxHashMap<Level, Vec<Arc<dyn Hook>>>,
}

impl LevelHooks {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `hook` under each of its levels.
    pub fn add(&mut self, hook: Arc<dyn Hook>) {
        for &level in hook.levels() {
            self.by_level.entry(level).or_default().push(Arc::clone(&hook));
        }
    }

    /// Hooks registered for `level`, in registration order.
    pub fn for_level(&self, level: Level) -> &[Arc<dyn Hook>] {
        self.by_level.get(&level).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `true` when no hook is registered for any level.
    pub fn is_empty(&self) -> bool {
        self.by_level.values().all(Vec::is_empty)
    }

    /// Fires every hook registered for the record's level.
    ///
    /// All hooks run even when an earlier one fails; the failures are
    /// returned in registration order.
    pub fn fire(&self, record: &Record) -> Vec<HookError> {
        self.for_level(record.level)
            .iter()
            .filter_map(|hook| hook.fire(record).err())
            .collect()
    }
}

impl std::fmt::Debug for LevelHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<_> = self
            .by_level
            .iter()
            .map(|(level, hooks)| (*level, hooks.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("LevelHooks").field("counts", &counts).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Collect {
        levels: Vec<Level>,
        seen: Mutex<Vec<String>>,
        fail: bool,
    }

    impl Collect {
        fn new(levels: &[Level], fail: bool) -> Arc<Self> {
            Arc::new(Self {
                levels: levels.to_vec(),
                seen: Mutex::new(Vec::new()),
                fail,
            })
        }
    }

    impl Hook for Collect {
        fn levels(&self) -> &[Level] {
            &self.levels
        }

        fn fire(&self, record: &Record) -> Result<(), HookError> {
            self.seen.lock().unwrap().push(record.message.clone());
            if self.fail {
                return Err("refused".into());
            }
            Ok(())
        }
    }

    #[test]
    fn hooks_only_see_their_levels() {
        let errors_only = Collect::new(&[Level::Error], false);
        let everything = Collect::new(&[Level::Error, Level::Info], false);
        let mut hooks = LevelHooks::new();
        hooks.add(errors_only.clone());
        hooks.add(everything.clone());

        assert!(hooks.fire(&Record::new(Level::Info, "hello")).is_empty());
        assert!(hooks.fire(&Record::new(Level::Error, "boom")).is_empty());
        assert!(hooks.fire(&Record::new(Level::Debug, "quiet")).is_empty());

        assert_eq!(*errors_only.seen.lock().unwrap(), ["boom"]);
        assert_eq!(*everything.seen.lock().unwrap(), ["hello", "boom"]);
    }

    #[test]
    fn failing_hook_does_not_stop_later_hooks() {
        let failing = Collect::new(&[Level::Warn], true);
        let after = Collect::new(&[Level::Warn], false);
        let mut hooks = LevelHooks::new();
        hooks.add(failing);
        hooks.add(after.clone());

        let errors = hooks.fire(&Record::new(Level::Warn, "careful"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "refused");
        assert_eq!(*after.seen.lock().unwrap(), ["careful"]);
    }

    #[test]
    fn empty_registry_reports_empty() {
        let mut hooks = LevelHooks::new();
        assert!(hooks.is_empty());
        assert!(hooks.for_level(Level::Info).is_empty());
        hooks.add(Collect::new(&[Level::Info], false));
        assert!(!hooks.is_empty());
        assert_eq!(hooks.for_level(Level::Info).len(), 1);
    }
}
