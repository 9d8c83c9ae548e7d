use std::collections::HashMap;

use tracing::debug;

use super::{column_def::ColumnDef, row::Row, schema::Schema};
use crate::DatabaseError;

/// A named table with a fixed schema and append-only rows.
///
/// Tables are created through [`Database::create_table`](crate::Database::create_table)
/// or [`TableBuilder`](crate::TableBuilder) and live as long as their registry.
/// Rows are never updated or removed.
#[derive(Debug, Clone)]
pub struct Table {
    /// The table name.
    pub(crate) name: String,

    /// The table's schema defining its columns.
    pub(crate) schema: Schema,

    /// Committed rows, in insertion order.
    pub(crate) rows: Vec<Row>,

    /// Fail inserts that mention columns outside the schema.
    pub(crate) reject_unknown_columns: bool,
}

impl Table {
    /// Creates an empty table. The schema is assumed to be checked already.
    pub(crate) fn new(name: String, schema: Schema, reject_unknown_columns: bool) -> Self {
        Self {
            name,
            schema,
            rows: Vec::new(),
            reject_unknown_columns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.schema.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of committed rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Validates `values` against the schema and appends a new row.
    ///
    /// Columns are checked in schema order and the first violation is
    /// returned. Nothing is appended unless every column passes. Omitted
    /// nullable columns are stored as the empty string. Entries naming
    /// columns outside the schema are ignored unless the table was created
    /// with `reject_unknown_columns`.
    ///
    /// Foreign key references are not checked here; see
    /// [`Database::insert`](crate::Database::insert).
    ///
    /// # Errors
    ///
    /// - [`DatabaseError::UnknownColumn`] for an unknown column in strict mode
    /// - [`DatabaseError::MissingPrimaryKeyValue`] when a primary key column is
    ///   omitted
    /// - [`DatabaseError::MissingRequiredValue`] when a NOT NULL column is omitted
    /// - [`DatabaseError::InvalidColumnValue`] when a supplied value fails the
    ///   column's check, including an empty primary key value
    pub fn insert<I, K, V>(&mut self, values: I) -> Result<&Row, DatabaseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let row = self.prepare_row(values)?;
        Ok(self.commit(row))
    }

    /// Runs every insert check and builds the row without appending it.
    pub(crate) fn prepare_row<I, K, V>(&self, values: I) -> Result<Row, DatabaseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values: HashMap<String, String> = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        if self.reject_unknown_columns {
            let mut unknown: Vec<&String> = values
                .keys()
                .filter(|name| !self.schema.contains(name))
                .collect();
            unknown.sort();
            if let Some(column) = unknown.first() {
                return Err(DatabaseError::UnknownColumn {
                    table: self.name.clone(),
                    column: (*column).clone(),
                });
            }
        }

        let mut row_data = HashMap::with_capacity(self.schema.columns.len());
        for column in &self.schema.columns {
            let value = match values.remove(&column.name) {
                None if column.primary_key => {
                    return Err(self.missing_primary_key(column));
                }
                None if !column.nullable => {
                    return Err(DatabaseError::MissingRequiredValue {
                        table: self.name.clone(),
                        column: column.name.clone(),
                    });
                }
                None => String::new(),
                Some(value) => {
                    // primary keys are NOT NULL even when declared nullable
                    let empty_key = column.primary_key && value.is_empty();
                    if empty_key || !column.validate(&value) {
                        return Err(DatabaseError::InvalidColumnValue {
                            table: self.name.clone(),
                            column: column.name.clone(),
                            value,
                            data_type: column.data_type.name(),
                        });
                    }
                    value
                }
            };
            row_data.insert(column.name.clone(), value);
        }

        Ok(Row::new(row_data))
    }

    /// Appends a row produced by [`Table::prepare_row`].
    pub(crate) fn commit(&mut self, row: Row) -> &Row {
        let index = self.rows.len();
        self.rows.push(row);
        debug!(table = %self.name, row = index, "Inserted row");

        &self.rows[index]
    }

    fn missing_primary_key(&self, column: &ColumnDef) -> DatabaseError {
        DatabaseError::MissingPrimaryKeyValue {
            table: self.name.clone(),
            column: column.name.clone(),
        }
    }
}
