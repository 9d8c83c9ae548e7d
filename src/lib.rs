//! Tally DB: a typed in-memory table store.
//!
//! Tables have a fixed schema of typed columns. Values are inserted as text
//! and checked against each column's type and constraints. Counts, sums and
//! averages can be computed over a single column.

pub(crate) mod common;
pub(crate) mod core;
pub(crate) mod db;

pub use crate::core::types::DataType;
pub use common::error::DatabaseError;
pub use db::{
    builder::TableBuilder,
    database::{Database, DatabaseOptions},
    table::*,
};
