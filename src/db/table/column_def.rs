use crate::core::types::DataType;

/// A declared reference from a column to a column of another table.
///
/// Only checked when the owning [`Database`](crate::Database) has
/// `enforce_foreign_keys` enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    /// Name of the referenced table (e.g. `"users"`).
    pub table: String,

    /// Name of the referenced column (e.g. `"id"`).
    pub column: String,
}

/// Definition of a single column in a table schema.
///
/// Columns are nullable and not part of the primary key unless told
/// otherwise.
///
/// # Example
///
/// ```
/// use tally_db::{ColumnDef, DataType};
///
/// let id = ColumnDef::new("id", DataType::Integer).not_null().primary_key();
/// let age = ColumnDef::new("age", DataType::Integer);
///
/// assert!(id.primary_key && !id.nullable);
/// assert!(age.nullable);
/// assert!(age.validate(""));
/// assert!(!id.validate(""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// The column name.
    pub name: String,

    /// The data type for values in this column.
    pub data_type: DataType,

    /// Whether this column can hold "no value" (the empty string).
    pub nullable: bool,

    /// Whether this column is part of the primary key.
    ///
    /// Primary key columns are implicitly NOT NULL at insert time.
    pub primary_key: bool,

    /// Foreign key reference, if any.
    pub foreign_key: Option<ForeignKeyRef>,
}

impl ColumnDef {
    /// Creates a new nullable, non-key column definition.
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_owned(),
            data_type,
            nullable: true,
            primary_key: false,
            foreign_key: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Declares that this column references `table.column`.
    pub fn references(mut self, table: &str, column: &str) -> Self {
        self.foreign_key = Some(ForeignKeyRef {
            table: table.to_owned(),
            column: column.to_owned(),
        });
        self
    }

    /// Checks a supplied value against this column.
    ///
    /// The empty string means "no value" and is accepted only for nullable
    /// columns. Anything else is handed to the data type.
    pub fn validate(&self, value: &str) -> bool {
        if value.is_empty() {
            return self.nullable;
        }
        self.data_type.validate(value)
    }
}
