use crate::{
    DatabaseError,
    core::types::DataType,
    db::{
        database::Database,
        table::{ColumnDef, Table},
    },
};

/// Fluent helper for assembling a column list before creating a table.
///
/// # Example
///
/// ```
/// use tally_db::{ColumnDef, DataType, Database, TableBuilder};
///
/// let mut db = Database::new();
/// let users = TableBuilder::new("users")
///     .add_column(ColumnDef::new("id", DataType::Integer).not_null().primary_key())
///     .add_column(ColumnDef::new("name", DataType::String).not_null())
///     .column("age", DataType::Integer)
///     .build(&mut db)
///     .unwrap();
///
/// assert_eq!(users.columns().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder {
    name: String,
    columns: Vec<ColumnDef>,
}

impl TableBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            columns: Vec::new(),
        }
    }

    pub fn add_column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Adds a nullable, non-key column.
    pub fn column(self, name: &str, data_type: DataType) -> Self {
        self.add_column(ColumnDef::new(name, data_type))
    }

    /// Registers the table in `db`. See [`Database::create_table`].
    pub fn build(self, db: &mut Database) -> Result<&mut Table, DatabaseError> {
        db.create_table(&self.name, self.columns)
    }
}
