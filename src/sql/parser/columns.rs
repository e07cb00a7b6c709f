use super::expr_and_select::expression;
use super::indexes::{check_constraint, reference_definition};
use super::*;
use crate::types::*;

/// Attributes that may follow `name type` in a plain column.
struct SimpleTail {
    not_null: Option<bool>,
    default: Option<DefaultValue>,
    on_update: Option<TimeFunctionCall>,
    visible: Option<bool>,
    auto_increment: bool,
    unique_key: bool,
    primary_key: bool,
    comment: Option<String>,
    collation: Option<String>,
    column_format: Option<ColumnFormat>,
    engine_attribute: Option<String>,
    secondary_engine_attribute: Option<String>,
    storage: Option<StorageMedium>,
    reference: Option<ReferenceDefinition>,
    check: Option<CheckConstraintDefinition>,
}

/// Attributes that may follow `name type` in a generated column.
struct GeneratedTail {
    expression: Expression,
    storage: Option<GeneratedStorage>,
    not_null: Option<bool>,
    visible: Option<bool>,
    unique_key: bool,
    primary_key: bool,
    comment: Option<String>,
    reference: Option<ReferenceDefinition>,
    check: Option<CheckConstraintDefinition>,
}

enum ColumnTail {
    Generated(GeneratedTail),
    Simple(SimpleTail),
}

/// `name data_type [COLLATE c]` followed by generated or plain attributes.
///
/// Both column forms share the prefix, so it is parsed once and the tails
/// compete in a single choice.
pub(super) fn column_definition(input: Input<'_>) -> Match<'_, ColumnDefinition> {
    let (input, name) = ident(input)?;
    let (input, data_type) = data_type(input)?;
    let (input, collation) = optional(preceded(literal("COLLATE"), super::name))(input)?;
    let (input, tail) = choice((
        map(generated_tail, ColumnTail::Generated),
        map(simple_tail, ColumnTail::Simple),
    ))(input)?;

    let column = match tail {
        ColumnTail::Generated(t) => ColumnDefinition::Generated(GeneratedColumnDefinition {
            name,
            data_type,
            collation,
            expression: t.expression,
            storage: t.storage,
            not_null: t.not_null,
            visible: t.visible,
            unique_key: t.unique_key,
            primary_key: t.primary_key,
            comment: t.comment,
            reference: t.reference,
            check: t.check,
        }),
        ColumnTail::Simple(t) => ColumnDefinition::Simple(SimpleColumnDefinition {
            name,
            data_type,
            not_null: t.not_null,
            default: t.default,
            on_update: t.on_update,
            visible: t.visible,
            auto_increment: t.auto_increment,
            unique_key: t.unique_key,
            primary_key: t.primary_key,
            comment: t.comment,
            collation: t.collation.or(collation),
            column_format: t.column_format,
            engine_attribute: t.engine_attribute,
            secondary_engine_attribute: t.secondary_engine_attribute,
            storage: t.storage,
            reference: t.reference,
            check: t.check,
        }),
    };
    Ok((input, column))
}

fn generated_tail(input: Input<'_>) -> Match<'_, GeneratedTail> {
    let (input, _) = optional(sequence((literal("GENERATED"), literal("ALWAYS"))))(input)?;
    let (input, _) = literal("AS")(input)?;
    let (input, expression) = parenthesized(expression)(input)?;
    let (input, storage) = optional(choice((
        value(GeneratedStorage::Virtual, literal("VIRTUAL")),
        value(GeneratedStorage::Stored, literal("STORED")),
    )))(input)?;
    let (input, not_null) = optional(nullability)(input)?;
    let (input, visible) = optional(visibility)(input)?;
    let (input, unique_key) = flag(unique_key_attribute)(input)?;
    let (input, primary_key) = flag(primary_key_attribute)(input)?;
    let (input, comment) = optional(preceded(literal("COMMENT"), string))(input)?;
    let (input, reference) = optional(reference_definition)(input)?;
    let (input, check) = optional(check_constraint)(input)?;

    Ok((
        input,
        GeneratedTail {
            expression,
            storage,
            not_null,
            visible,
            unique_key,
            primary_key,
            comment,
            reference,
            check,
        },
    ))
}

fn simple_tail(input: Input<'_>) -> Match<'_, SimpleTail> {
    let (input, not_null) = optional(nullability)(input)?;
    let (input, default) = optional(preceded(literal("DEFAULT"), default_value))(input)?;
    let (input, on_update) = optional(preceded(
        sequence((literal("ON"), literal("UPDATE"))),
        time_function_call,
    ))(input)?;
    let (input, visible) = optional(visibility)(input)?;
    let (input, auto_increment) = flag(literal("AUTO_INCREMENT"))(input)?;
    let (input, unique_key) = flag(unique_key_attribute)(input)?;
    let (input, primary_key) = flag(primary_key_attribute)(input)?;
    let (input, comment) = optional(preceded(literal("COMMENT"), string))(input)?;
    let (input, collation) = optional(preceded(literal("COLLATE"), name))(input)?;
    let (input, column_format) =
        optional(preceded(literal("COLUMN_FORMAT"), column_format))(input)?;
    let (input, engine_attribute) =
        optional(setting(literal("ENGINE_ATTRIBUTE"), string))(input)?;
    let (input, secondary_engine_attribute) =
        optional(setting(literal("SECONDARY_ENGINE_ATTRIBUTE"), string))(input)?;
    let (input, storage) = optional(preceded(literal("STORAGE"), storage_medium))(input)?;
    let (input, reference) = optional(reference_definition)(input)?;
    let (input, check) = optional(check_constraint)(input)?;

    Ok((
        input,
        SimpleTail {
            not_null,
            default,
            on_update,
            visible,
            auto_increment,
            unique_key,
            primary_key,
            comment,
            collation,
            column_format,
            engine_attribute,
            secondary_engine_attribute,
            storage,
            reference,
            check,
        },
    ))
}

/// `NOT NULL` is `true`, a bare `NULL` is `false`.
fn nullability(input: Input<'_>) -> Match<'_, bool> {
    choice((
        value(true, sequence((literal("NOT"), literal("NULL")))),
        value(false, literal("NULL")),
    ))(input)
}

/// `UNIQUE [KEY]`
fn unique_key_attribute(input: Input<'_>) -> Match<'_, ()> {
    value((), sequence((literal("UNIQUE"), optional(literal("KEY")))))(input)
}

/// `[PRIMARY] KEY`
fn primary_key_attribute(input: Input<'_>) -> Match<'_, ()> {
    value((), sequence((optional(literal("PRIMARY")), literal("KEY"))))(input)
}

fn column_format(input: Input<'_>) -> Match<'_, ColumnFormat> {
    choice((
        value(ColumnFormat::Fixed, literal("FIXED")),
        value(ColumnFormat::Dynamic, literal("DYNAMIC")),
        value(ColumnFormat::Default, literal("DEFAULT")),
    ))(input)
}

pub(super) fn default_value(input: Input<'_>) -> Match<'_, DefaultValue> {
    choice((
        map(number, DefaultValue::Number),
        map(string, DefaultValue::String),
        map(boolean, DefaultValue::Boolean),
        value(DefaultValue::Null, literal("NULL")),
        map(
            parenthesized(comma_list(expression)),
            DefaultValue::Array,
        ),
        map(time_function_call, DefaultValue::TimeFunction),
    ))(input)
}

/// `CURRENT_TIMESTAMP`, `NOW()`, `LOCALTIMESTAMP(6)`, ...
pub(super) fn time_function_call(input: Input<'_>) -> Match<'_, TimeFunctionCall> {
    let (input, function) = time_function(input)?;
    let (input, precision) = optional(parenthesized(optional(integer)))(input)?;
    Ok((
        input,
        TimeFunctionCall {
            function,
            precision: precision.flatten(),
        },
    ))
}

pub(super) fn time_function(input: Input<'_>) -> Match<'_, TimeFunction> {
    choice((
        value(TimeFunction::CurrentTimestamp, literal("CURRENT_TIMESTAMP")),
        value(TimeFunction::Now, literal("NOW")),
        value(TimeFunction::LocalTime, literal("LOCALTIME")),
        value(TimeFunction::LocalTimestamp, literal("LOCALTIMESTAMP")),
    ))(input)
}

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

pub(super) fn data_type(input: Input<'_>) -> Match<'_, DataType> {
    choice((
        map(preceded(literal("BIT"), optional(parenthesized(integer))), |precision| {
            DataType::Bit(BitType { precision })
        }),
        map(integer_type, DataType::Integer),
        map(numeric_type, DataType::Numeric),
        map(temporal_type, DataType::Temporal),
        map(string_type, DataType::String),
        map(blob_type, DataType::Blob),
        map(enum_set_type, DataType::EnumSet),
        value(DataType::Json, literal("JSON")),
        map(spatial_kind, DataType::Spatial),
        value(
            DataType::Bool,
            choice((literal("BOOL"), literal("BOOLEAN"))),
        ),
    ))(input)
}

fn integer_type(input: Input<'_>) -> Match<'_, IntegerType> {
    let (input, kind) = choice((
        value(IntegerKind::TinyInt, literal("TINYINT")),
        value(IntegerKind::SmallInt, literal("SMALLINT")),
        value(IntegerKind::MediumInt, literal("MEDIUMINT")),
        value(IntegerKind::Int, literal("INT")),
        value(IntegerKind::Integer, literal("INTEGER")),
        value(IntegerKind::BigInt, literal("BIGINT")),
    ))(input)?;
    let (input, precision) = optional(parenthesized(integer))(input)?;
    let (input, unsigned) = flag(literal("UNSIGNED"))(input)?;
    let (input, zerofill) = flag(literal("ZEROFILL"))(input)?;
    Ok((
        input,
        IntegerType {
            kind,
            precision,
            unsigned,
            zerofill,
        },
    ))
}

fn numeric_type(input: Input<'_>) -> Match<'_, NumericType> {
    let (input, kind) = choice((
        value(NumericKind::Decimal, literal("DECIMAL")),
        value(NumericKind::Numeric, literal("NUMERIC")),
        value(NumericKind::Dec, literal("DEC")),
        value(NumericKind::Fixed, literal("FIXED")),
        value(NumericKind::Float, literal("FLOAT")),
        map(
            preceded(literal("DOUBLE"), flag(literal("PRECISION"))),
            |precision| {
                if precision {
                    NumericKind::DoublePrecision
                } else {
                    NumericKind::Double
                }
            },
        ),
        value(NumericKind::Real, literal("REAL")),
    ))(input)?;
    let (input, size) = optional(parenthesized(sequence((
        integer,
        optional(preceded(literal(","), integer)),
    ))))(input)?;
    let (input, unsigned) = flag(literal("UNSIGNED"))(input)?;
    let (input, zerofill) = flag(literal("ZEROFILL"))(input)?;

    let (precision, scale) = match size {
        Some((p, s)) => (Some(p), s),
        None => (None, None),
    };
    Ok((
        input,
        NumericType {
            kind,
            precision,
            scale,
            unsigned,
            zerofill,
        },
    ))
}

fn temporal_type(input: Input<'_>) -> Match<'_, TemporalType> {
    let (input, kind) = choice((
        value(TemporalKind::Date, literal("DATE")),
        value(TemporalKind::Time, literal("TIME")),
        value(TemporalKind::Timestamp, literal("TIMESTAMP")),
        value(TemporalKind::DateTime, literal("DATETIME")),
        value(TemporalKind::Year, literal("YEAR")),
    ))(input)?;
    let (input, fsp) = optional(parenthesized(integer))(input)?;
    Ok((input, TemporalType { kind, fsp }))
}

/// `CHARACTER SET name` / `CHARSET name`
fn charset(input: Input<'_>) -> Match<'_, String> {
    preceded(charset_keyword, name)(input)
}

fn string_type(input: Input<'_>) -> Match<'_, StringType> {
    let (input, national) = flag(literal("NATIONAL"))(input)?;
    let (input, kind) = choice((
        value(StringKind::Char, literal("CHAR")),
        value(StringKind::NChar, literal("NCHAR")),
        value(StringKind::VarChar, literal("VARCHAR")),
        value(StringKind::Text, literal("TEXT")),
        value(StringKind::TinyText, literal("TINYTEXT")),
        value(StringKind::MediumText, literal("MEDIUMTEXT")),
        value(StringKind::LongText, literal("LONGTEXT")),
    ))(input)?;
    let (input, precision) = optional(parenthesized(integer))(input)?;
    let (input, charset) = optional(charset)(input)?;
    let (input, collation) = optional(preceded(literal("COLLATE"), name))(input)?;
    Ok((
        input,
        StringType {
            national,
            kind,
            precision,
            charset,
            collation,
        },
    ))
}

fn blob_type(input: Input<'_>) -> Match<'_, BlobType> {
    let (input, kind) = choice((
        value(BlobKind::Binary, literal("BINARY")),
        value(BlobKind::VarBinary, literal("VARBINARY")),
        value(BlobKind::Blob, literal("BLOB")),
        value(BlobKind::TinyBlob, literal("TINYBLOB")),
        value(BlobKind::MediumBlob, literal("MEDIUMBLOB")),
        value(BlobKind::LongBlob, literal("LONGBLOB")),
    ))(input)?;
    let (input, precision) = optional(parenthesized(integer))(input)?;
    Ok((input, BlobType { kind, precision }))
}

fn enum_set_type(input: Input<'_>) -> Match<'_, EnumSetType> {
    let (input, is_set) = choice((
        value(false, literal("ENUM")),
        value(true, literal("SET")),
    ))(input)?;
    let (input, values) = optional(parenthesized(comma_list(string)))(input)?;
    let (input, charset) = optional(charset)(input)?;
    let (input, collation) = optional(preceded(literal("COLLATE"), name))(input)?;
    Ok((
        input,
        EnumSetType {
            is_set,
            values: values.unwrap_or_default(),
            charset,
            collation,
        },
    ))
}

fn spatial_kind(input: Input<'_>) -> Match<'_, SpatialKind> {
    choice((
        value(SpatialKind::Geometry, literal("GEOMETRY")),
        value(SpatialKind::Point, literal("POINT")),
        value(SpatialKind::LineString, literal("LINESTRING")),
        value(SpatialKind::Polygon, literal("POLYGON")),
        value(SpatialKind::MultiPoint, literal("MULTIPOINT")),
        value(SpatialKind::MultiLineString, literal("MULTILINESTRING")),
        value(SpatialKind::MultiPolygon, literal("MULTIPOLYGON")),
        value(
            SpatialKind::GeometryCollection,
            literal("GEOMETRYCOLLECTION"),
        ),
    ))(input)
}
