use std::fmt;

use serde::Serialize;

use crate::sql::ast::display::{Ident, Str};

/// Column data type as written in a column definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DataType {
    Bit(BitType),
    Integer(IntegerType),
    Numeric(NumericType),
    Temporal(TemporalType),
    String(StringType),
    Blob(BlobType),
    EnumSet(EnumSetType),
    Json,
    Spatial(SpatialKind),
    Bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitType {
    pub precision: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntegerKind {
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    Integer,
    BigInt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegerType {
    pub kind: IntegerKind,
    /// Display width, e.g. the `4` in `TINYINT(4)`.
    pub precision: Option<u32>,
    pub unsigned: bool,
    pub zerofill: bool,
}

/// Fixed-point and floating-point kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NumericKind {
    Decimal,
    Numeric,
    Dec,
    Fixed,
    Float,
    Double,
    DoublePrecision,
    Real,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumericType {
    pub kind: NumericKind,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub unsigned: bool,
    pub zerofill: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemporalKind {
    Date,
    Time,
    Timestamp,
    DateTime,
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalType {
    pub kind: TemporalKind,
    /// Fractional seconds precision (or the display width for `YEAR`).
    pub fsp: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StringKind {
    Char,
    NChar,
    VarChar,
    Text,
    TinyText,
    MediumText,
    LongText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringType {
    pub national: bool,
    pub kind: StringKind,
    pub precision: Option<u32>,
    pub charset: Option<String>,
    pub collation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlobKind {
    Binary,
    VarBinary,
    Blob,
    TinyBlob,
    MediumBlob,
    LongBlob,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlobType {
    pub kind: BlobKind,
    pub precision: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumSetType {
    /// `SET` when true, `ENUM` otherwise.
    pub is_set: bool,
    pub values: Vec<String>,
    pub charset: Option<String>,
    pub collation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpatialKind {
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl fmt::Display for IntegerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IntegerKind::TinyInt => "TINYINT",
            IntegerKind::SmallInt => "SMALLINT",
            IntegerKind::MediumInt => "MEDIUMINT",
            IntegerKind::Int => "INT",
            IntegerKind::Integer => "INTEGER",
            IntegerKind::BigInt => "BIGINT",
        })
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NumericKind::Decimal => "DECIMAL",
            NumericKind::Numeric => "NUMERIC",
            NumericKind::Dec => "DEC",
            NumericKind::Fixed => "FIXED",
            NumericKind::Float => "FLOAT",
            NumericKind::Double => "DOUBLE",
            NumericKind::DoublePrecision => "DOUBLE PRECISION",
            NumericKind::Real => "REAL",
        })
    }
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TemporalKind::Date => "DATE",
            TemporalKind::Time => "TIME",
            TemporalKind::Timestamp => "TIMESTAMP",
            TemporalKind::DateTime => "DATETIME",
            TemporalKind::Year => "YEAR",
        })
    }
}

impl fmt::Display for StringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StringKind::Char => "CHAR",
            StringKind::NChar => "NCHAR",
            StringKind::VarChar => "VARCHAR",
            StringKind::Text => "TEXT",
            StringKind::TinyText => "TINYTEXT",
            StringKind::MediumText => "MEDIUMTEXT",
            StringKind::LongText => "LONGTEXT",
        })
    }
}

impl fmt::Display for BlobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlobKind::Binary => "BINARY",
            BlobKind::VarBinary => "VARBINARY",
            BlobKind::Blob => "BLOB",
            BlobKind::TinyBlob => "TINYBLOB",
            BlobKind::MediumBlob => "MEDIUMBLOB",
            BlobKind::LongBlob => "LONGBLOB",
        })
    }
}

impl fmt::Display for SpatialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpatialKind::Geometry => "GEOMETRY",
            SpatialKind::Point => "POINT",
            SpatialKind::LineString => "LINESTRING",
            SpatialKind::Polygon => "POLYGON",
            SpatialKind::MultiPoint => "MULTIPOINT",
            SpatialKind::MultiLineString => "MULTILINESTRING",
            SpatialKind::MultiPolygon => "MULTIPOLYGON",
            SpatialKind::GeometryCollection => "GEOMETRYCOLLECTION",
        })
    }
}

fn write_length(f: &mut fmt::Formatter<'_>, precision: Option<u32>) -> fmt::Result {
    match precision {
        Some(n) => write!(f, "({})", n),
        None => Ok(()),
    }
}

fn write_sign(f: &mut fmt::Formatter<'_>, unsigned: bool, zerofill: bool) -> fmt::Result {
    if unsigned {
        write!(f, " UNSIGNED")?;
    }
    if zerofill {
        write!(f, " ZEROFILL")?;
    }
    Ok(())
}

fn write_charset(
    f: &mut fmt::Formatter<'_>,
    charset: &Option<String>,
    collation: &Option<String>,
) -> fmt::Result {
    if let Some(cs) = charset {
        write!(f, " CHARACTER SET {}", Ident(cs))?;
    }
    if let Some(c) = collation {
        write!(f, " COLLATE {}", Ident(c))?;
    }
    Ok(())
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Bit(t) => {
                write!(f, "BIT")?;
                write_length(f, t.precision)
            }
            DataType::Integer(t) => {
                write!(f, "{}", t.kind)?;
                write_length(f, t.precision)?;
                write_sign(f, t.unsigned, t.zerofill)
            }
            DataType::Numeric(t) => {
                write!(f, "{}", t.kind)?;
                match (t.precision, t.scale) {
                    (Some(p), Some(s)) => write!(f, "({},{})", p, s)?,
                    (Some(p), None) => write!(f, "({})", p)?,
                    _ => {}
                }
                write_sign(f, t.unsigned, t.zerofill)
            }
            DataType::Temporal(t) => {
                write!(f, "{}", t.kind)?;
                write_length(f, t.fsp)
            }
            DataType::String(t) => {
                if t.national {
                    write!(f, "NATIONAL ")?;
                }
                write!(f, "{}", t.kind)?;
                write_length(f, t.precision)?;
                write_charset(f, &t.charset, &t.collation)
            }
            DataType::Blob(t) => {
                write!(f, "{}", t.kind)?;
                write_length(f, t.precision)
            }
            DataType::EnumSet(t) => {
                write!(f, "{}", if t.is_set { "SET" } else { "ENUM" })?;
                if !t.values.is_empty() {
                    write!(f, "(")?;
                    for (i, v) in t.values.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{}", Str(v))?;
                    }
                    write!(f, ")")?;
                }
                write_charset(f, &t.charset, &t.collation)
            }
            DataType::Json => write!(f, "JSON"),
            DataType::Spatial(kind) => write!(f, "{}", kind),
            DataType::Bool => write!(f, "BOOL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integer() {
        let t = DataType::Integer(IntegerType {
            kind: IntegerKind::TinyInt,
            precision: Some(4),
            unsigned: true,
            zerofill: true,
        });
        assert_eq!(t.to_string(), "TINYINT(4) UNSIGNED ZEROFILL");
    }

    #[test]
    fn test_display_decimal_and_double_precision() {
        let t = DataType::Numeric(NumericType {
            kind: NumericKind::Decimal,
            precision: Some(10),
            scale: Some(2),
            unsigned: false,
            zerofill: false,
        });
        assert_eq!(t.to_string(), "DECIMAL(10,2)");

        let t = DataType::Numeric(NumericType {
            kind: NumericKind::DoublePrecision,
            precision: None,
            scale: None,
            unsigned: true,
            zerofill: false,
        });
        assert_eq!(t.to_string(), "DOUBLE PRECISION UNSIGNED");
    }

    #[test]
    fn test_display_varchar_with_charset() {
        let t = DataType::String(StringType {
            national: false,
            kind: StringKind::VarChar,
            precision: Some(30),
            charset: Some("utf8mb4".into()),
            collation: Some("utf8mb4_bin".into()),
        });
        assert_eq!(
            t.to_string(),
            "VARCHAR(30) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin"
        );
    }

    #[test]
    fn test_display_enum_picks_quote() {
        let t = DataType::EnumSet(EnumSetType {
            is_set: false,
            values: vec!["a".into(), "it's".into()],
            charset: None,
            collation: None,
        });
        assert_eq!(t.to_string(), "ENUM('a',\"it's\")");
    }
}
