mod aggregate;
pub(crate) mod column_def;
pub(crate) mod row;
pub(crate) mod schema;
pub(crate) mod table_def;

pub use column_def::{ColumnDef, ForeignKeyRef};
pub use row::Row;
pub use schema::Schema;
pub use table_def::Table;
