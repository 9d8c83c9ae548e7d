use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the table store.
///
/// Every variant aborts the operation that produced it. No partial state is
/// committed: a failed insert leaves the table's rows untouched and a failed
/// table creation leaves the registry untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DatabaseError {
    #[error("Table with name '{0}' already exists")]
    #[diagnostic(code(tally::duplicate_table_name))]
    DuplicateTableName(String),

    #[error("Table with name '{0}' not found")]
    #[diagnostic(code(tally::table_not_found))]
    TableNotFound(String),

    #[error("Invalid INSERT into '{table}': missing value for PRIMARY KEY column '{column}'")]
    #[diagnostic(
        code(tally::missing_primary_key_value),
        help("primary key columns must be given a non-empty value on every insert")
    )]
    MissingPrimaryKeyValue { table: String, column: String },

    #[error("Invalid INSERT into '{table}': missing value for NOT NULL column '{column}'")]
    #[diagnostic(code(tally::missing_required_value))]
    MissingRequiredValue { table: String, column: String },

    #[error("Invalid value '{value}' for {data_type} column '{column}' in table '{table}'")]
    #[diagnostic(code(tally::invalid_column_value))]
    InvalidColumnValue {
        table: String,
        column: String,
        value: String,
        data_type: &'static str,
    },

    #[error("Table '{0}' must declare at least one column")]
    #[diagnostic(code(tally::empty_schema))]
    EmptySchema(String),

    #[error("Column '{column}' is declared more than once in table '{table}'")]
    #[diagnostic(code(tally::duplicate_column_name))]
    DuplicateColumnName { table: String, column: String },

    #[error("Table '{table}' has no column named '{column}'")]
    #[diagnostic(
        code(tally::unknown_column),
        help("unknown columns are rejected because `reject_unknown_columns` is enabled")
    )]
    UnknownColumn { table: String, column: String },

    #[error(
        "Foreign key violation on '{table}.{column}': value '{value}' not found in '{target_table}.{target_column}'"
    )]
    #[diagnostic(code(tally::foreign_key_violation))]
    ForeignKeyViolation {
        table: String,
        column: String,
        value: String,
        target_table: String,
        target_column: String,
    },

    #[error("Unknown data type: {0}")]
    #[diagnostic(
        code(tally::unknown_data_type),
        help("expected one of Integer, String, Boolean, Date")
    )]
    UnknownDataType(String),
}
