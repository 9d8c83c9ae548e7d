use std::collections::HashSet;

use super::column_def::ColumnDef;
use crate::DatabaseError;

/// A table schema defining the structure of rows.
///
/// A schema is an ordered list of column definitions. It is fixed once the
/// table is created; insert validates columns in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// The ordered list of column definitions.
    pub columns: Vec<ColumnDef>,
}

impl Schema {
    /// Creates a new schema from a vector of column definitions.
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self { columns }
    }

    /// Finds the index of a column by name.
    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name == name)
    }

    /// Finds a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|col| col.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_column(name).is_some()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|col| col.name.as_str())
    }

    /// Checks that the schema can back a table named `table`.
    ///
    /// A table needs at least one column and column names must be unique.
    pub(crate) fn check(&self, table: &str) -> Result<(), DatabaseError> {
        if self.columns.is_empty() {
            return Err(DatabaseError::EmptySchema(table.to_string()));
        }

        let mut seen = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(DatabaseError::DuplicateColumnName {
                    table: table.to_string(),
                    column: column.name.clone(),
                });
            }
        }

        Ok(())
    }
}
