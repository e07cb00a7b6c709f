//! Syntax tree for CREATE TABLE and ALTER TABLE.
//!
//! Enumerated keyword values become enums; names, identifiers and string
//! literals are kept exactly as written, minus quotes and backticks. Every
//! node implements `Display`, which re-emits canonical MySQL that parses
//! back to an equal tree.

pub mod display;
pub mod expr;

use serde::Serialize;

use crate::types::DataType;

pub use expr::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    CreateTable(CreateTable),
    AlterTable(AlterTable),
}

/// A possibly schema-qualified table name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableName {
    pub schema: Option<String>,
    pub name: String,
}

impl TableName {
    pub fn new(name: impl Into<String>) -> Self {
        TableName {
            schema: None,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTable {
    pub temporary: bool,
    pub if_not_exists: bool,
    pub name: TableName,
    pub definitions: Vec<CreateDefinition>,
    pub table_options: Vec<TableOption>,
    pub partition_options: Option<PartitionOptions>,
}

impl CreateTable {
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.definitions.iter().filter_map(|d| match d {
            CreateDefinition::Column(c) => Some(c),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CreateDefinition {
    Column(ColumnDefinition),
    SimpleIndex(SimpleIndexDefinition),
    PrimaryKey(PrimaryKeyDefinition),
    UniqueKey(UniqueKeyDefinition),
    ForeignKey(ForeignKeyDefinition),
    SpecialIndex(SpecialIndexDefinition),
    CheckConstraint(CheckConstraintDefinition),
}

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ColumnDefinition {
    Simple(SimpleColumnDefinition),
    Generated(GeneratedColumnDefinition),
}

impl ColumnDefinition {
    pub fn name(&self) -> &str {
        match self {
            ColumnDefinition::Simple(c) => &c.name,
            ColumnDefinition::Generated(c) => &c.name,
        }
    }

    pub fn data_type(&self) -> &DataType {
        match self {
            ColumnDefinition::Simple(c) => &c.data_type,
            ColumnDefinition::Generated(c) => &c.data_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    /// `NOT NULL` gives `Some(true)`, an explicit `NULL` gives `Some(false)`.
    pub not_null: Option<bool>,
    pub default: Option<DefaultValue>,
    pub on_update: Option<TimeFunctionCall>,
    pub visible: Option<bool>,
    pub auto_increment: bool,
    pub unique_key: bool,
    pub primary_key: bool,
    pub comment: Option<String>,
    pub collation: Option<String>,
    pub column_format: Option<ColumnFormat>,
    pub engine_attribute: Option<String>,
    pub secondary_engine_attribute: Option<String>,
    pub storage: Option<StorageMedium>,
    pub reference: Option<ReferenceDefinition>,
    pub check: Option<CheckConstraintDefinition>,
}

impl SimpleColumnDefinition {
    /// A bare `name type` column.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        SimpleColumnDefinition {
            name: name.into(),
            data_type,
            not_null: None,
            default: None,
            on_update: None,
            visible: None,
            auto_increment: false,
            unique_key: false,
            primary_key: false,
            comment: None,
            collation: None,
            column_format: None,
            engine_attribute: None,
            secondary_engine_attribute: None,
            storage: None,
            reference: None,
            check: None,
        }
    }

    pub fn is_not_null(&self) -> bool {
        self.not_null == Some(true)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub collation: Option<String>,
    pub expression: Expression,
    pub storage: Option<GeneratedStorage>,
    pub not_null: Option<bool>,
    pub visible: Option<bool>,
    pub unique_key: bool,
    pub primary_key: bool,
    pub comment: Option<String>,
    pub reference: Option<ReferenceDefinition>,
    pub check: Option<CheckConstraintDefinition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GeneratedStorage {
    Virtual,
    Stored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnFormat {
    Fixed,
    Dynamic,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StorageMedium {
    Disk,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DefaultValue {
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
    /// Parenthesized expression list, e.g. `DEFAULT (uuid())`.
    Array(Vec<Expression>),
    TimeFunction(TimeFunctionCall),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeFunction {
    CurrentTimestamp,
    Now,
    LocalTime,
    LocalTimestamp,
}

/// `CURRENT_TIMESTAMP`, `NOW()`, `CURRENT_TIMESTAMP(3)`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeFunctionCall {
    pub function: TimeFunction,
    pub precision: Option<u32>,
}

// ---------------------------------------------------------------------------
// Indexes and constraints
// ---------------------------------------------------------------------------

/// `CONSTRAINT [symbol]` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constraint {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndexType {
    BTree,
    Hash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyPart {
    pub target: KeyPartTarget,
    pub order: Option<SortOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum KeyPartTarget {
    Column { name: String, length: Option<u32> },
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IndexOption {
    KeyBlockSize(u64),
    IndexType(IndexType),
    WithParser(String),
    Comment(String),
    Visible(bool),
    EngineAttribute(String),
    SecondaryEngineAttribute(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleIndexDefinition {
    pub name: Option<String>,
    pub index_type: Option<IndexType>,
    pub key_parts: Vec<KeyPart>,
    pub options: Vec<IndexOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryKeyDefinition {
    pub constraint: Option<Constraint>,
    pub index_type: Option<IndexType>,
    pub key_parts: Vec<KeyPart>,
    pub options: Vec<IndexOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniqueKeyDefinition {
    pub constraint: Option<Constraint>,
    pub name: Option<String>,
    pub index_type: Option<IndexType>,
    pub key_parts: Vec<KeyPart>,
    pub options: Vec<IndexOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpecialIndexKind {
    Fulltext,
    Spatial,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialIndexDefinition {
    pub kind: SpecialIndexKind,
    pub name: Option<String>,
    pub key_parts: Vec<KeyPart>,
    pub options: Vec<IndexOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForeignKeyDefinition {
    pub constraint: Option<Constraint>,
    pub name: Option<String>,
    pub columns: Vec<String>,
    pub reference: ReferenceDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceDefinition {
    pub table: TableName,
    pub key_parts: Vec<KeyPart>,
    pub match_type: Option<MatchType>,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchType {
    Full,
    Partial,
    Simple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferentialAction {
    Restrict,
    Cascade,
    SetNull,
    NoAction,
    SetDefault,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckConstraintDefinition {
    pub constraint: Option<Constraint>,
    pub expression: Expression,
    /// `ENFORCED` gives `Some(true)`, `NOT ENFORCED` gives `Some(false)`.
    pub enforced: Option<bool>,
}

// ---------------------------------------------------------------------------
// Table options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TableOption {
    AutoextendSize(u64),
    AutoIncrement(u64),
    AvgRowLength(u64),
    CharacterSet(String),
    Checksum(u64),
    Collate(String),
    Comment(String),
    Compression(String),
    Connection(String),
    DataDirectory(String),
    IndexDirectory(String),
    DelayKeyWrite(u64),
    Encryption(String),
    Engine(String),
    EngineAttribute(String),
    InsertMethod(InsertMethod),
    SecondaryEngineAttribute(String),
    KeyBlockSize(u64),
    MaxRows(u64),
    MinRows(u64),
    PackKeys(DefaultOr),
    Password(String),
    RowFormat(RowFormat),
    StatsAutoRecalc(DefaultOr),
    StatsPersistent(DefaultOr),
    StatsSamplePages(u64),
    Tablespace {
        name: String,
        storage: Option<StorageMedium>,
    },
    Union(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsertMethod {
    No,
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowFormat {
    Default,
    Dynamic,
    Fixed,
    Compressed,
    Redundant,
    Compact,
}

/// A numeric option value that may also be spelled `DEFAULT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefaultOr {
    Default,
    Value(u64),
}

// ---------------------------------------------------------------------------
// Partitioning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartitionOptions {
    pub kind: PartitionKind,
    pub partitions: Option<u32>,
    pub subpartition_by: Option<SubpartitionKind>,
    pub subpartitions: Option<u32>,
    pub definitions: Vec<PartitionDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PartitionKind {
    Hash(HashPartition),
    Key(KeyPartition),
    Range(PartitionBy),
    List(PartitionBy),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SubpartitionKind {
    Hash(HashPartition),
    Key(KeyPartition),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HashPartition {
    pub linear: bool,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyPartition {
    pub linear: bool,
    pub algorithm: Option<u32>,
    pub columns: Vec<String>,
}

/// What a RANGE or LIST partitioning is computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PartitionBy {
    Expression(Expression),
    Columns(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartitionDefinition {
    pub name: String,
    pub values: Option<PartitionValues>,
    pub options: Vec<PartitionDefinitionOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PartitionValues {
    LessThan(LessThan),
    In(Vec<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LessThan {
    MaxValue,
    /// `VALUES LESS THAN (expr)` with a single item.
    Expression(Expression),
    /// `VALUES LESS THAN (a, b, MAXVALUE)` for RANGE COLUMNS.
    Values(Vec<PartitionValue>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PartitionValue {
    MaxValue,
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PartitionDefinitionOption {
    Engine(String),
    Comment(String),
    DataDirectory(String),
    IndexDirectory(String),
    MaxRows(u64),
    MinRows(u64),
    Tablespace(String),
}

// ---------------------------------------------------------------------------
// ALTER TABLE
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlterTable {
    pub name: TableName,
    pub alter_options: Vec<AlterOption>,
    pub partition_options: Vec<AlterPartitionOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ColumnPosition {
    First,
    After(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AlterOption {
    AddColumn {
        column: ColumnDefinition,
        position: Option<ColumnPosition>,
    },
    AddColumns(Vec<ColumnDefinition>),
    AddSimpleIndex(SimpleIndexDefinition),
    AddPrimaryKey(PrimaryKeyDefinition),
    AddUniqueKey(UniqueKeyDefinition),
    AddForeignKey(ForeignKeyDefinition),
    AddSpecialIndex(SpecialIndexDefinition),
    AddCheckConstraint(CheckConstraintDefinition),
    DropCheckConstraint(String),
    AlterCheckConstraint {
        name: String,
        enforced: bool,
    },
    Algorithm(Algorithm),
    DropColumn(String),
    DropIndex(String),
    DropPrimaryKey,
    DropForeignKey(String),
    AlterColumn {
        name: String,
        action: AlterColumnAction,
    },
    AlterIndex {
        name: String,
        visible: bool,
    },
    ModifyColumn {
        column: ColumnDefinition,
        position: Option<ColumnPosition>,
    },
    ChangeColumn {
        old_name: String,
        column: ColumnDefinition,
        position: Option<ColumnPosition>,
    },
    RenameColumn {
        from: String,
        to: String,
    },
    RenameIndex {
        from: String,
        to: String,
    },
    RenameTable(TableName),
    Lock(LockMode),
    ConvertCharset {
        charset: String,
        collation: Option<String>,
    },
    TableOption(TableOption),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Algorithm {
    Default,
    Instant,
    Inplace,
    Copy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LockMode {
    Default,
    None,
    Shared,
    Exclusive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AlterColumnAction {
    SetDefault(DefaultValue),
    DropDefault,
    SetVisible(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AlterPartitionOption {
    PartitionBy(PartitionOptions),
    AddPartition(Vec<PartitionDefinition>),
    DropPartition(Vec<String>),
    Maintain {
        operation: PartitionOperation,
        partitions: PartitionNames,
    },
    CoalescePartition(u32),
    RemovePartitioning,
}

/// Partition maintenance verbs that take a partition list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PartitionOperation {
    Truncate,
    Analyze,
    Check,
    Optimize,
    Rebuild,
    Repair,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PartitionNames {
    All,
    Names(Vec<String>),
}
