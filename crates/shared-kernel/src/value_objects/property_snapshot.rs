// crates/shared-kernel/src/value_objects/property_snapshot.rs
use std::{borrow::Cow, collections::BTreeMap};

/// Immutable key/value view of the process configuration, captured once.
///
/// Keys iterate in ascending order so two snapshots of an unchanged host
/// render identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySnapshot {
    entries: BTreeMap<String, String>,
}

impl PropertySnapshot {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Later pairs replace earlier ones with the same key.
impl<K, V> FromIterator<(K, V)> for PropertySnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Replaces CR and LF with the two-character escapes `\r` and `\n`.
///
/// A rendered `key: value` line must never span more than one output line.
#[must_use]
pub fn escape_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 2);
    for ch in text.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
