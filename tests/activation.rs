//! End-to-end tests for activating the journal hook on a logger.

use std::sync::Arc;

use journal::Priority;
use journalhook::{
    Activation, HookError, JOURNAL_LEVELS, JournalEntry, JournalHook, UNAVAILABLE_WARNING,
    enable_with,
};
use logging::{Level, Logger, Output, Record, Value};
use test_support::{RecordingJournal, SharedBuffer};

fn buffered_logger() -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let mut logger = Logger::new();
    logger.set_output(Output::writer(buffer.clone()));
    (logger, buffer)
}

// ============================================================================
// Record Transformation
// ============================================================================

/// The disk-full record transforms into the expected journal entry.
#[test]
fn disk_full_record_transforms() {
    let record = Record::new(Level::Error, "disk full")
        .with_field("path", "/var")
        .with_field("bytes-free", 0);

    let entry = JournalEntry::from_record(&record, false).unwrap();

    assert_eq!(entry.message, "disk full");
    assert_eq!(entry.priority, Priority::Error);
    assert_eq!(entry.fields.len(), 2);
    assert_eq!(entry.fields.get("PATH"), Some("/var"));
    assert_eq!(entry.fields.get("BYTES_FREE"), Some("0"));
}

/// Composite values use their natural text form.
#[test]
fn composite_values_render_as_text() {
    let tags: Value = ["a", "b"].into_iter().map(Value::from).collect();
    let record = Record::new(Level::Info, "tagged")
        .with_field("tags", tags)
        .with_field("parent", Option::<i32>::None);

    let entry = JournalEntry::from_record(&record, true).unwrap();

    assert_eq!(
        entry.fields.iter().collect::<Vec<_>>(),
        [("PARENT", "<nil>"), ("TAGS", "[a, b]")]
    );
}

// ============================================================================
// Activation
// ============================================================================

/// An unreachable journal leaves the logger untouched apart from one warning.
#[test]
fn unavailable_journal_warns_once() {
    let (mut logger, buffer) = buffered_logger();
    let journal = RecordingJournal::unavailable();

    assert_eq!(
        enable_with(&mut logger, Arc::clone(&journal), false),
        Activation::Unavailable
    );

    assert!(logger.hooks().is_empty());
    assert!(!logger.is_output_discarded());
    let output = buffer.contents();
    assert_eq!(output.lines().count(), 1);
    assert!(output.starts_with("level=warning "));
    assert!(output.contains(UNAVAILABLE_WARNING));
}

/// A reachable journal receives every mapped level; text output stops.
#[test]
fn available_journal_receives_records() {
    let (mut logger, buffer) = buffered_logger();
    logger.set_level(Level::Trace);
    let journal = RecordingJournal::available();

    assert!(enable_with(&mut logger, Arc::clone(&journal), true).is_enabled());
    assert!(logger.is_output_discarded());
    for level in JOURNAL_LEVELS {
        assert_eq!(logger.hooks().for_level(level).len(), 1);
    }

    logger.panic("p");
    logger.fatal("f");
    logger.error("e");
    logger.warn("w");
    logger.info("i");
    logger.debug("d");
    logger.trace("t");

    assert!(buffer.contents().is_empty());
    let sent: Vec<(String, u8)> = journal
        .sent()
        .iter()
        .map(|e| (e.message.clone(), e.priority.as_u8()))
        .collect();
    assert_eq!(
        sent,
        [
            ("p".to_owned(), 0),
            ("f".to_owned(), 2),
            ("e".to_owned(), 3),
            ("w".to_owned(), 4),
            ("i".to_owned(), 6),
            ("d".to_owned(), 7),
        ]
    );
}

/// A failing send does not stop later records or other hooks.
#[test]
fn send_failure_is_not_fatal_to_logging() {
    let (mut logger, _buffer) = buffered_logger();
    let journal = RecordingJournal::available();
    let _ = enable_with(&mut logger, Arc::clone(&journal), false);

    journal.fail_sends(true);
    logger.error("lost");
    journal.fail_sends(false);
    logger.error("delivered");

    let sent = journal.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].message, "delivered");
}

// ============================================================================
// Manual Registration
// ============================================================================

/// A hand-built hook works alongside the logger's own output.
#[test]
fn manual_hook_keeps_text_output() {
    let (mut logger, buffer) = buffered_logger();
    let journal = RecordingJournal::available();
    logger.add_hook(Arc::new(JournalHook::with_journal(Arc::clone(&journal), true)));

    logger.with_field("user", "root").info("login");

    assert_eq!(buffer.contents(), "level=info msg=login user=root\n");
    assert_eq!(journal.sent()[0].fields.get("USER"), Some("root"));
}

/// Send errors surface through the inherent fire with their cause.
#[test]
fn manual_fire_reports_send_error() {
    let journal = RecordingJournal::available();
    journal.fail_sends(true);
    let hook = JournalHook::with_journal(journal, false);

    let err = hook
        .fire(&Record::new(Level::Warn, "careful"))
        .unwrap_err();
    assert!(matches!(err, HookError::Send(_)));
}
