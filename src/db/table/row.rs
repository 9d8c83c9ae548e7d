use std::collections::HashMap;

/// A committed row: column name to textual value.
///
/// Rows are only produced by a successful insert. Every column of the owning
/// table has an entry; an empty string stands for "no value".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    pub(crate) fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Gets the stored text for a column, if the column exists.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Gets the value for a column, treating the empty string as absent.
    pub fn value(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| !v.is_empty())
    }

    /// Iterates over `(column, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
