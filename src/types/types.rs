use std::fmt;

use super::TypeError;

/// Sqlrs type conversion:
/// LogicalType -> metastore type string
/// LogicalType -> arrow::datatypes::DataType
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogicalType {
    Invalid,
    SqlNull,
    Boolean,
    Tinyint,
    UTinyint,
    Smallint,
    USmallint,
    Integer,
    UInteger,
    Bigint,
    UBigint,
    Float,
    Double,
    Varchar,
    Date,
    Timestamp,
    Decimal(u8, i8),
    Binary,
}

impl LogicalType {
    /// The type name the metastore records for a column of this type.
    ///
    /// The metastore has no unsigned integers and can not persist a column whose type is
    /// still unresolved, so those are rejected instead of silently widened.
    pub fn to_metastore_type(&self) -> Result<String, TypeError> {
        let name = match self {
            LogicalType::Boolean => "boolean".to_string(),
            LogicalType::Tinyint => "tinyint".to_string(),
            LogicalType::Smallint => "smallint".to_string(),
            LogicalType::Integer => "int".to_string(),
            LogicalType::Bigint => "bigint".to_string(),
            LogicalType::Float => "float".to_string(),
            LogicalType::Double => "double".to_string(),
            LogicalType::Varchar => "string".to_string(),
            LogicalType::Date => "date".to_string(),
            LogicalType::Timestamp => "timestamp".to_string(),
            LogicalType::Decimal(precision, scale) => {
                if !Self::is_valid_decimal(*precision, *scale) {
                    return Err(TypeError::UnsupportedMetastoreType(self.to_string()));
                }
                format!("decimal({},{})", precision, scale)
            }
            LogicalType::Binary => "binary".to_string(),
            LogicalType::Invalid
            | LogicalType::SqlNull
            | LogicalType::UTinyint
            | LogicalType::USmallint
            | LogicalType::UInteger
            | LogicalType::UBigint => {
                return Err(TypeError::UnsupportedMetastoreType(self.to_string()))
            }
        };
        Ok(name)
    }

    /// Parses a metastore type name back into a logical type, accepting the common aliases.
    pub fn from_metastore_type(name: &str) -> Result<LogicalType, TypeError> {
        let normalized = name.trim().to_lowercase();
        let ty = match normalized.as_str() {
            "boolean" | "bool" => LogicalType::Boolean,
            "tinyint" => LogicalType::Tinyint,
            "smallint" => LogicalType::Smallint,
            "int" | "integer" => LogicalType::Integer,
            "bigint" => LogicalType::Bigint,
            "float" | "real" => LogicalType::Float,
            "double" => LogicalType::Double,
            "string" | "varchar" => LogicalType::Varchar,
            "date" => LogicalType::Date,
            "timestamp" => LogicalType::Timestamp,
            "binary" => LogicalType::Binary,
            "decimal" => LogicalType::Decimal(10, 0),
            other => return Self::parse_decimal(other),
        };
        Ok(ty)
    }

    fn parse_decimal(name: &str) -> Result<LogicalType, TypeError> {
        let unknown = || TypeError::UnknownMetastoreType(name.to_string());
        let args = name
            .strip_prefix("decimal(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(unknown)?;
        let (precision, scale) = match args.split_once(',') {
            Some((p, s)) => (p.trim(), s.trim()),
            None => (args.trim(), "0"),
        };
        let precision = precision.parse::<u8>().map_err(|_| unknown())?;
        let scale = scale.parse::<i8>().map_err(|_| unknown())?;
        if !Self::is_valid_decimal(precision, scale) {
            return Err(unknown());
        }
        Ok(LogicalType::Decimal(precision, scale))
    }

    fn is_valid_decimal(precision: u8, scale: i8) -> bool {
        (1..=38).contains(&precision) && scale >= 0 && (scale as u8) <= precision
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::Decimal(precision, scale) => {
                write!(f, "Decimal({}, {})", precision, scale)
            }
            other => write!(f, "{:?}", other),
        }
    }
}

impl From<LogicalType> for arrow::datatypes::DataType {
    fn from(value: LogicalType) -> Self {
        use arrow::datatypes::{DataType, TimeUnit};
        match value {
            LogicalType::Invalid => panic!("invalid logical type"),
            LogicalType::SqlNull => DataType::Null,
            LogicalType::Boolean => DataType::Boolean,
            LogicalType::Tinyint => DataType::Int8,
            LogicalType::UTinyint => DataType::UInt8,
            LogicalType::Smallint => DataType::Int16,
            LogicalType::USmallint => DataType::UInt16,
            LogicalType::Integer => DataType::Int32,
            LogicalType::UInteger => DataType::UInt32,
            LogicalType::Bigint => DataType::Int64,
            LogicalType::UBigint => DataType::UInt64,
            LogicalType::Float => DataType::Float32,
            LogicalType::Double => DataType::Float64,
            LogicalType::Varchar => DataType::Utf8,
            LogicalType::Date => DataType::Date32,
            LogicalType::Timestamp => DataType::Timestamp(TimeUnit::Microsecond, None),
            LogicalType::Decimal(precision, scale) => DataType::Decimal128(precision, scale),
            LogicalType::Binary => DataType::Binary,
        }
    }
}
