//! Aggregate queries over a single column.
//!
//! All aggregates only look at non-empty values; the empty string is how a
//! row stores "no value".

use tracing::warn;

use super::table_def::Table;

impl Table {
    /// Number of rows holding a non-empty value for `column`.
    ///
    /// Returns 0 for a column that is not part of the schema.
    pub fn count(&self, column: &str) -> usize {
        self.rows
            .iter()
            .filter(|row| row.value(column).is_some())
            .count()
    }

    /// Sum of the non-empty values of a numeric column.
    ///
    /// Summing a column that is not numeric (or does not exist) is not an
    /// error: a warning is logged and `0.0` is returned. Stored values that do
    /// not parse as numbers are skipped with a warning.
    pub fn sum(&self, column: &str) -> f64 {
        let numeric = self
            .schema
            .get_column(column)
            .is_some_and(|col| col.data_type.is_numeric());

        if !numeric {
            warn!(table = %self.name, column, "Attempted to SUM non-numeric column");
            return 0.0;
        }

        self.rows
            .iter()
            .filter_map(|row| row.value(column))
            .filter_map(|value| match value.parse::<f64>() {
                Ok(number) => Some(number),
                Err(_) => {
                    warn!(table = %self.name, column, value, "Skipping unparsable value in SUM");
                    None
                }
            })
            .sum()
    }

    /// Average of the non-empty values of a numeric column.
    ///
    /// Uses [`Table::count`] as the denominator and returns `0.0` when it is
    /// zero.
    pub fn avg(&self, column: &str) -> f64 {
        let count = self.count(column);
        if count == 0 {
            return 0.0;
        }
        self.sum(column) / count as f64
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{
        ColumnDef, DataType,
        db::table::{row::Row, schema::Schema},
    };

    use super::*;

    fn people() -> Table {
        let schema = Schema::new(vec![
            ColumnDef::new("id", DataType::Integer)
                .not_null()
                .primary_key(),
            ColumnDef::new("name", DataType::String).not_null(),
            ColumnDef::new("age", DataType::Integer),
            ColumnDef::new("active", DataType::Boolean),
        ]);
        let mut table = Table::new("people".to_string(), schema, false);
        table
            .insert([
                ("id", "1"),
                ("name", "Alex"),
                ("age", "25"),
                ("active", "1"),
            ])
            .unwrap();
        table
            .insert([("id", "2"), ("name", "Mira"), ("age", "30")])
            .unwrap();
        table.insert([("id", "3"), ("name", "Sam")]).unwrap();
        table
    }

    #[test]
    fn test_count_skips_empty_values() {
        let table = people();
        assert_eq!(table.count("id"), 3);
        assert_eq!(table.count("age"), 2);
        assert_eq!(table.count("active"), 1);
    }

    #[test]
    fn test_count_unknown_column_is_zero() {
        assert_eq!(people().count("email"), 0);
    }

    #[test]
    fn test_sum_and_avg() {
        let table = people();
        assert_eq!(table.sum("age"), 55.0);
        assert_eq!(table.avg("age"), 27.5);
        assert_eq!(table.sum("id"), 6.0);
        assert_eq!(table.avg("id"), 2.0);
    }

    #[test]
    fn test_sum_negative_values() {
        let schema = Schema::new(vec![ColumnDef::new("delta", DataType::Integer)]);
        let mut table = Table::new("deltas".to_string(), schema, false);
        for delta in ["-5", "+3", "10"] {
            table.insert([("delta", delta)]).unwrap();
        }
        assert_eq!(table.sum("delta"), 8.0);
    }

    #[test]
    fn test_sum_non_numeric_column_is_zero() {
        let table = people();
        assert_eq!(table.sum("name"), 0.0);
        assert_eq!(table.sum("active"), 0.0);
        assert_eq!(table.sum("email"), 0.0);
    }

    #[test]
    fn test_avg_non_numeric_column_uses_zero_sum() {
        let table = people();
        assert_eq!(table.avg("name"), 0.0);
    }

    #[test]
    fn test_avg_without_values_is_zero() {
        let schema = Schema::new(vec![ColumnDef::new("age", DataType::Integer)]);
        let mut table = Table::new("empty".to_string(), schema, false);
        assert_eq!(table.avg("age"), 0.0);

        table.insert([("age", "")]).unwrap();
        assert_eq!(table.count("age"), 0);
        assert_eq!(table.avg("age"), 0.0);
    }

    #[test]
    fn test_sum_skips_unparsable_values() {
        let schema = Schema::new(vec![ColumnDef::new("n", DataType::Integer)]);
        let mut table = Table::new("nums".to_string(), schema, false);
        table.insert([("n", "4")]).unwrap();
        // Rows are normally only produced by insert; forge one to cover the skip path.
        table.rows.push(Row::new(HashMap::from([(
            "n".to_string(),
            "oops".to_string(),
        )])));

        assert_eq!(table.sum("n"), 4.0);
        assert_eq!(table.count("n"), 2);
        assert_eq!(table.avg("n"), 2.0);
    }

    #[test]
    fn test_aggregates_are_repeatable() {
        let table = people();
        let first = (table.count("age"), table.sum("age"), table.avg("age"));
        for _ in 0..3 {
            assert_eq!(
                (table.count("age"), table.sum("age"), table.avg("age")),
                first
            );
        }
    }
}
