//! Native journal protocol encoding.
//!
//! An entry is a sequence of fields. A value without a newline is written as
//! `NAME=value\n`. A value containing `\n` switches to the binary-safe form:
//! `NAME\n`, the value length as a little-endian `u64`, the raw value, `\n`.

use crate::error::JournalError;
use crate::field::{JournalFields, MESSAGE, PRIORITY, check_field_name};
use crate::priority::Priority;

/// Encodes one entry as a single native-protocol datagram.
///
/// `PRIORITY` is written first, then `MESSAGE`, then `fields` in their
/// insertion order. Every user field name is validated before any bytes are
/// produced.
///
/// # Examples
///
/// ```
/// use journal::{JournalFields, Priority, encode_entry};
///
/// let mut fields = JournalFields::new();
/// fields.insert("PATH", "/var");
/// let datagram = encode_entry("disk full", Priority::Error, &fields)?;
/// assert_eq!(datagram, b"PRIORITY=3\nMESSAGE=disk full\nPATH=/var\n");
/// # Ok::<(), journal::JournalError>(())
/// ```
pub fn encode_entry(
    message: &str,
    priority: Priority,
    fields: &JournalFields,
) -> Result<Vec<u8>, JournalError> {
    for name in fields.names() {
        check_field_name(name)?;
    }

    let capacity = PRIORITY.len()
        + MESSAGE.len()
        + message.len()
        + 16
        + fields.iter().map(|(k, v)| k.len() + v.len() + 10).sum::<usize>();
    let mut buf = Vec::with_capacity(capacity);

    append_field(&mut buf, PRIORITY, priority.as_field_value());
    append_field(&mut buf, MESSAGE, message);
    for (name, value) in fields.iter() {
        append_field(&mut buf, name, value);
    }
    Ok(buf)
}

fn append_field(buf: &mut Vec<u8>, name: &str, value: &str) {
    buf.extend_from_slice(name.as_bytes());
    if value.contains('\n') {
        buf.push(b'\n');
        buf.extend_from_slice(&(value.len() as u64).to_le_bytes());
    } else {
        buf.push(b'=');
    }
    buf.extend_from_slice(value.as_bytes());
    buf.push(b'\n');
}
