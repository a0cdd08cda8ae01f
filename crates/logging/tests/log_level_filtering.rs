//! Integration tests for threshold filtering.
//!
//! These tests verify that the logger's threshold decides which records
//! reach the text output and the registered hooks.

use std::sync::{Arc, Mutex};

use logging::{ALL_LEVELS, Hook, HookError, Level, Logger, LoggerConfig, Output, Record};
use test_support::SharedBuffer;

struct Seen(Mutex<Vec<Level>>);

impl Hook for Seen {
    fn levels(&self) -> &[Level] {
        &ALL_LEVELS
    }

    fn fire(&self, record: &Record) -> Result<(), HookError> {
        self.0.lock().unwrap().push(record.level);
        Ok(())
    }
}

fn emit_every_level(logger: &Logger) {
    for level in ALL_LEVELS {
        logger.with_field("n", 1).log(level, "x");
    }
}

// ============================================================================
// Threshold Tests
// ============================================================================

/// Verifies the default threshold drops debug and trace.
#[test]
fn default_threshold_drops_debug_and_trace() {
    let buffer = SharedBuffer::new();
    let mut logger = Logger::new();
    logger.set_output(Output::writer(buffer.clone()));

    emit_every_level(&logger);

    let text = buffer.contents();
    let levels: Vec<&str> = text
        .lines()
        .map(|line| line.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(
        levels,
        [
            "level=panic",
            "level=fatal",
            "level=error",
            "level=warning",
            "level=info"
        ]
    );
}

/// Verifies hooks see exactly the records that pass the threshold.
#[test]
fn hooks_follow_threshold() {
    let mut logger = Logger::with_config(LoggerConfig::with_level(Level::Warn));
    logger.set_output(Output::Discard);
    let seen = Arc::new(Seen(Mutex::new(Vec::new())));
    logger.add_hook(seen.clone());

    emit_every_level(&logger);

    assert_eq!(
        *seen.0.lock().unwrap(),
        [Level::Panic, Level::Fatal, Level::Error, Level::Warn]
    );
}

/// Verifies the most verbose threshold lets everything through.
#[test]
fn trace_threshold_emits_everything() {
    let mut logger = Logger::with_config(LoggerConfig::with_level(Level::Trace));
    logger.set_output(Output::Discard);
    let seen = Arc::new(Seen(Mutex::new(Vec::new())));
    logger.add_hook(seen.clone());

    emit_every_level(&logger);

    assert_eq!(*seen.0.lock().unwrap(), ALL_LEVELS);
}

/// Verifies the least verbose threshold only lets panic through.
#[test]
fn panic_threshold_is_most_restrictive() {
    let logger = Logger::with_config(LoggerConfig::with_level(Level::Panic));
    assert!(logger.is_enabled(Level::Panic));
    for level in &ALL_LEVELS[1..] {
        assert!(!logger.is_enabled(*level), "{level} should be filtered");
    }
}
