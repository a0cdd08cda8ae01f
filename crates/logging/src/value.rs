//! crates/logging/src/value.rs
//! Dynamically typed field values attached to log records.

use std::collections::BTreeMap;
use std::fmt;

/// A field value of one of the common primitive or composite kinds.
///
/// [`Display`](fmt::Display) renders each variant in its natural textual
/// form: integers as base-10 digits, booleans as `true`/`false`, strings
/// verbatim, lists as `[a, b]` and maps as `{k: v}` in key order.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absent value, rendered as `<nil>`.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    I64(i64),
    /// Unsigned integer.
    U64(u64),
    /// Floating point number.
    F64(f64),
    /// UTF-8 text.
    Str(String),
    /// Raw bytes, rendered as lossy UTF-8.
    Bytes(Vec<u8>),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// String-keyed map of values.
    Map(BTreeMap<String, Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("<nil>"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::I64(n) => write!(f, "{n}"),
            Self::U64(n) => write!(f, "{n}"),
            Self::F64(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::Bytes(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

macro_rules! value_from {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )+
    };
}

value_from!(Bool: bool);
value_from!(I64: i8, i16, i32, i64);
value_from!(U64: u8, u16, u32, u64);
value_from!(F64: f32, f64);
value_from!(Str: String, &str, char);
value_from!(Bytes: Vec<u8>, &[u8]);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Self::I64(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::U64(v as u64)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

impl<T: Into<Self>> From<BTreeMap<String, T>> for Value {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
