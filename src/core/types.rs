use std::{fmt, str::FromStr};

use strum::{EnumIter, EnumString};

use crate::DatabaseError;

/// Scalar data types supported by Tally DB.
///
/// Every value is stored as text; a data type only decides whether a given
/// text is acceptable for a column. Validation never looks at table state.
///
/// # Example
///
/// ```
/// use tally_db::DataType;
///
/// assert!(DataType::Integer.validate("-5"));
/// assert!(!DataType::Integer.validate("12x"));
/// assert!(DataType::Date.validate("2024-01-15"));
/// assert_eq!("bool".parse::<DataType>().unwrap(), DataType::Boolean);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum DataType {
    /// 32-bit signed integer written in base 10 with an optional sign.
    #[strum(serialize = "Int", serialize = "Integer")]
    Integer,

    /// Arbitrary text, including the empty string.
    #[strum(serialize = "Text", serialize = "String")]
    String,

    /// One of `true`, `false`, `1` or `0` (case-sensitive).
    #[strum(serialize = "Bool", serialize = "Boolean")]
    Boolean,

    /// `YYYY-MM-DD` shape only.
    ///
    /// Month and day ranges are not checked, so `2024-13-99` is accepted.
    Date,
}

impl DataType {
    /// Returns `true` if `value` is acceptable for this type.
    pub fn validate(self, value: &str) -> bool {
        match self {
            DataType::Integer => !value.is_empty() && value.parse::<i32>().is_ok(),
            DataType::String => true,
            DataType::Boolean => matches!(value, "true" | "false" | "1" | "0"),
            DataType::Date => is_date_shaped(value),
        }
    }

    /// Human readable type name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            DataType::Integer => "Integer",
            DataType::String => "String",
            DataType::Boolean => "Boolean",
            DataType::Date => "Date",
        }
    }

    /// Whether `sum`/`avg` can be evaluated over columns of this type.
    pub fn is_numeric(self) -> bool {
        matches!(self, DataType::Integer)
    }

    /// Parses a type name, mapping failures into a [`DatabaseError`].
    pub fn from_name(name: &str) -> Result<Self, DatabaseError> {
        DataType::from_str(name).map_err(|_| DatabaseError::UnknownDataType(name.to_string()))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_date_shaped(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return false;
    }

    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_integer_validation() {
        assert!(DataType::Integer.validate("123"));
        assert!(DataType::Integer.validate("-5"));
        assert!(DataType::Integer.validate("+7"));
        assert!(!DataType::Integer.validate(""));
        assert!(!DataType::Integer.validate("12x"));
        assert!(!DataType::Integer.validate("four"));
        assert!(!DataType::Integer.validate(" 1"));
        assert!(!DataType::Integer.validate(" 12"));
        assert!(!DataType::Integer.validate("12 "));
        assert!(!DataType::Integer.validate("1.5"));
    }

    #[test]
    fn test_integer_out_of_range() {
        assert!(DataType::Integer.validate("2147483647"));
        assert!(DataType::Integer.validate("-2147483648"));
        assert!(!DataType::Integer.validate("2147483648"));
    }

    #[test]
    fn test_string_accepts_anything() {
        assert!(DataType::String.validate(""));
        assert!(DataType::String.validate("Alex"));
        assert!(DataType::String.validate("  spaced  "));
    }

    #[test]
    fn test_boolean_validation() {
        for value in ["true", "false", "1", "0"] {
            assert!(DataType::Boolean.validate(value), "{value} should be valid");
        }
        for value in ["yes", "TRUE", "False", "", "2"] {
            assert!(
                !DataType::Boolean.validate(value),
                "{value} should be invalid"
            );
        }
    }

    #[test]
    fn test_date_validation() {
        assert!(DataType::Date.validate("2024-01-15"));
        assert!(!DataType::Date.validate("2024/01/15"));
        assert!(!DataType::Date.validate("24-01-15"));
        assert!(!DataType::Date.validate("2024-1-155"));
        assert!(!DataType::Date.validate("2024-0a-15"));
        assert!(!DataType::Date.validate(""));
    }

    #[test]
    fn test_date_has_no_calendar_check() {
        assert!(DataType::Date.validate("2024-13-99"));
        assert!(DataType::Date.validate("0000-00-00"));
    }

    #[test]
    fn test_date_rejects_multibyte_text() {
        // 10 bytes, but not ASCII digits
        assert!(!DataType::Date.validate("2024-01-\u{e9}"));
    }

    #[test]
    fn test_parse_type_names() {
        assert_eq!(DataType::from_name("Integer"), Ok(DataType::Integer));
        assert_eq!(DataType::from_name("int"), Ok(DataType::Integer));
        assert_eq!(DataType::from_name("TEXT"), Ok(DataType::String));
        assert_eq!(DataType::from_name("string"), Ok(DataType::String));
        assert_eq!(DataType::from_name("Bool"), Ok(DataType::Boolean));
        assert_eq!(DataType::from_name("date"), Ok(DataType::Date));
        assert_eq!(
            DataType::from_name("Decimal"),
            Err(DatabaseError::UnknownDataType("Decimal".to_string()))
        );
    }

    #[test]
    fn test_names_round_trip_through_parser() {
        for data_type in DataType::iter() {
            assert_eq!(DataType::from_name(data_type.name()), Ok(data_type));
            assert_eq!(data_type.to_string(), data_type.name());
        }
    }

    #[test]
    fn test_only_integer_is_numeric() {
        let numeric: Vec<_> = DataType::iter().filter(|t| t.is_numeric()).collect();
        assert_eq!(numeric, vec![DataType::Integer]);
    }
}
