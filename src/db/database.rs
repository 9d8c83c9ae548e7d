use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    DatabaseError,
    db::table::{ColumnDef, Row, Schema, Table},
};

/// Behaviour switches for a [`Database`].
///
/// The defaults keep the lenient behaviour: unknown columns in an insert are
/// ignored and foreign keys are recorded but never checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatabaseOptions {
    /// Reject inserts that name a column the table does not have.
    pub reject_unknown_columns: bool,

    /// Check foreign key values on [`Database::insert`].
    pub enforce_foreign_keys: bool,
}

impl DatabaseOptions {
    pub fn reject_unknown_columns(mut self, reject: bool) -> Self {
        self.reject_unknown_columns = reject;
        self
    }

    pub fn enforce_foreign_keys(mut self, enforce: bool) -> Self {
        self.enforce_foreign_keys = enforce;
        self
    }
}

/// The main database handle.
///
/// `Database` is a registry of named tables. It owns every table it creates
/// and hands out references to them. There is no global instance: create one
/// with [`Database::new`] and pass it to whatever needs it.
///
/// # Example
///
/// ```
/// use tally_db::{ColumnDef, DataType, Database};
///
/// let mut db = Database::new();
/// db.create_table(
///     "users",
///     vec![
///         ColumnDef::new("id", DataType::Integer).not_null().primary_key(),
///         ColumnDef::new("age", DataType::Integer),
///     ],
/// )
/// .unwrap();
///
/// db.insert("users", [("id", "1"), ("age", "40")]).unwrap();
/// assert_eq!(db.get_table("users").unwrap().sum("age"), 40.0);
/// ```
#[derive(Debug, Default)]
pub struct Database {
    /// All tables, keyed by name.
    tables: BTreeMap<String, Table>,

    options: DatabaseOptions,
}

impl Database {
    /// Creates an empty database with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty database with the given options.
    pub fn with_options(options: DatabaseOptions) -> Self {
        Self {
            tables: BTreeMap::new(),
            options,
        }
    }

    pub fn options(&self) -> DatabaseOptions {
        self.options
    }

    /// Creates and registers a new table.
    ///
    /// # Errors
    ///
    /// - [`DatabaseError::DuplicateTableName`] if `name` is already registered
    /// - [`DatabaseError::EmptySchema`] if `columns` is empty
    /// - [`DatabaseError::DuplicateColumnName`] if two columns share a name
    pub fn create_table(
        &mut self,
        name: &str,
        columns: Vec<ColumnDef>,
    ) -> Result<&mut Table, DatabaseError> {
        if self.tables.contains_key(name) {
            return Err(DatabaseError::DuplicateTableName(name.to_string()));
        }

        let schema = Schema::new(columns);
        schema.check(name)?;

        debug!(
            table = name,
            columns = schema.columns.len(),
            "Created table"
        );

        let table = Table::new(
            name.to_string(),
            schema,
            self.options.reject_unknown_columns,
        );
        Ok(self.tables.entry(name.to_string()).or_insert(table))
    }

    /// Gets an immutable reference to a table.
    pub fn get_table(&self, name: &str) -> Result<&Table, DatabaseError> {
        self.tables
            .get(name)
            .ok_or_else(|| DatabaseError::TableNotFound(name.to_string()))
    }

    /// Gets a mutable reference to a table.
    pub fn get_table_mut(&mut self, name: &str) -> Result<&mut Table, DatabaseError> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| DatabaseError::TableNotFound(name.to_string()))
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Names of all registered tables, sorted.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Inserts a row into the named table.
    ///
    /// Performs the same checks as [`Table::insert`]. When
    /// `enforce_foreign_keys` is enabled, every non-empty value of a column
    /// with a foreign key must also be present in the referenced column.
    /// The row is only appended once all checks pass.
    ///
    /// # Errors
    ///
    /// [`DatabaseError::TableNotFound`], any error of [`Table::insert`], or
    /// [`DatabaseError::ForeignKeyViolation`].
    pub fn insert<I, K, V>(&mut self, table_name: &str, values: I) -> Result<&Row, DatabaseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = self.get_table(table_name)?;
        let row = table.prepare_row(values)?;

        if self.options.enforce_foreign_keys {
            self.check_foreign_keys(table, &row)?;
        }

        Ok(self.get_table_mut(table_name)?.commit(row))
    }

    fn check_foreign_keys(&self, table: &Table, row: &Row) -> Result<(), DatabaseError> {
        for column in table.columns() {
            let Some(reference) = &column.foreign_key else {
                continue;
            };
            let Some(value) = row.value(&column.name) else {
                continue;
            };

            let found = self.tables.get(&reference.table).is_some_and(|target| {
                target
                    .rows()
                    .iter()
                    .any(|target_row| target_row.value(&reference.column) == Some(value))
            });

            if !found {
                return Err(DatabaseError::ForeignKeyViolation {
                    table: table.name().to_string(),
                    column: column.name.clone(),
                    value: value.to_string(),
                    target_table: reference.table.clone(),
                    target_column: reference.column.clone(),
                });
            }
        }

        Ok(())
    }
}
