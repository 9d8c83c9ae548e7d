pub(crate) mod builder;
pub(crate) mod database;
pub(crate) mod table;
