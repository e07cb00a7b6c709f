//! Canonical SQL re-emission.

use std::fmt::{self, Display, Formatter};

use super::*;
use crate::sql::keywords::Keywords;

/// A name, backquoted unless it is a plain word that is not a keyword.
pub struct Ident<'a>(pub &'a str);

impl Display for Ident<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = self.0;
        let plain = name
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if plain && !Keywords::mysql().is_keyword(name) {
            f.write_str(name)
        } else {
            write!(f, "`{}`", name)
        }
    }
}

/// A string literal. Single-quoted unless the text contains a single quote.
pub struct Str<'a>(pub &'a str);

impl Display for Str<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.contains('\'') {
            write!(f, "\"{}\"", self.0)
        } else {
            write!(f, "'{}'", self.0)
        }
    }
}

fn join<T: Display>(f: &mut Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn join_idents(f: &mut Formatter<'_>, names: &[String], sep: &str) -> fmt::Result {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", Ident(name))?;
    }
    Ok(())
}

fn write_not(f: &mut Formatter<'_>, not: bool) -> fmt::Result {
    if not {
        f.write_str("NOT ")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::CreateTable(ct) => write!(f, "{}", ct),
            Statement::AlterTable(at) => write!(f, "{}", at),
        }
    }
}

impl Display for TableName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(schema) = &self.schema {
            write!(f, "{}.", Ident(schema))?;
        }
        write!(f, "{}", Ident(&self.name))
    }
}

impl Display for CreateTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE ")?;
        if self.temporary {
            f.write_str("TEMPORARY ")?;
        }
        f.write_str("TABLE ")?;
        if self.if_not_exists {
            f.write_str("IF NOT EXISTS ")?;
        }
        write!(f, "{} (", self.name)?;
        join(f, &self.definitions, ", ")?;
        f.write_str(")")?;
        for option in &self.table_options {
            write!(f, " {}", option)?;
        }
        if let Some(p) = &self.partition_options {
            write!(f, " PARTITION BY {}", p)?;
        }
        Ok(())
    }
}

impl Display for CreateDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CreateDefinition::Column(c) => write!(f, "{}", c),
            CreateDefinition::SimpleIndex(d) => write!(f, "{}", d),
            CreateDefinition::PrimaryKey(d) => write!(f, "{}", d),
            CreateDefinition::UniqueKey(d) => write!(f, "{}", d),
            CreateDefinition::ForeignKey(d) => write!(f, "{}", d),
            CreateDefinition::SpecialIndex(d) => write!(f, "{}", d),
            CreateDefinition::CheckConstraint(d) => write!(f, "{}", d),
        }
    }
}

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

fn write_not_null(f: &mut Formatter<'_>, not_null: Option<bool>) -> fmt::Result {
    match not_null {
        Some(true) => f.write_str(" NOT NULL"),
        Some(false) => f.write_str(" NULL"),
        None => Ok(()),
    }
}

fn write_visible(f: &mut Formatter<'_>, visible: Option<bool>) -> fmt::Result {
    match visible {
        Some(true) => f.write_str(" VISIBLE"),
        Some(false) => f.write_str(" INVISIBLE"),
        None => Ok(()),
    }
}

impl Display for ColumnDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ColumnDefinition::Simple(c) => write!(f, "{}", c),
            ColumnDefinition::Generated(c) => write!(f, "{}", c),
        }
    }
}

impl Display for SimpleColumnDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Ident(&self.name), self.data_type)?;
        write_not_null(f, self.not_null)?;
        if let Some(d) = &self.default {
            write!(f, " DEFAULT {}", d)?;
        }
        if let Some(u) = &self.on_update {
            write!(f, " ON UPDATE {}", u)?;
        }
        write_visible(f, self.visible)?;
        if self.auto_increment {
            f.write_str(" AUTO_INCREMENT")?;
        }
        if self.unique_key {
            f.write_str(" UNIQUE")?;
        }
        if self.primary_key {
            f.write_str(" PRIMARY KEY")?;
        }
        if let Some(c) = &self.comment {
            write!(f, " COMMENT {}", Str(c))?;
        }
        if let Some(c) = &self.collation {
            write!(f, " COLLATE {}", Ident(c))?;
        }
        if let Some(cf) = &self.column_format {
            write!(f, " COLUMN_FORMAT {}", cf)?;
        }
        if let Some(a) = &self.engine_attribute {
            write!(f, " ENGINE_ATTRIBUTE = {}", Str(a))?;
        }
        if let Some(a) = &self.secondary_engine_attribute {
            write!(f, " SECONDARY_ENGINE_ATTRIBUTE = {}", Str(a))?;
        }
        if let Some(s) = &self.storage {
            write!(f, " STORAGE {}", s)?;
        }
        if let Some(r) = &self.reference {
            write!(f, " {}", r)?;
        }
        if let Some(c) = &self.check {
            write!(f, " {}", c)?;
        }
        Ok(())
    }
}

impl Display for GeneratedColumnDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Ident(&self.name), self.data_type)?;
        if let Some(c) = &self.collation {
            write!(f, " COLLATE {}", Ident(c))?;
        }
        write!(f, " GENERATED ALWAYS AS ({})", self.expression)?;
        match self.storage {
            Some(GeneratedStorage::Virtual) => f.write_str(" VIRTUAL")?,
            Some(GeneratedStorage::Stored) => f.write_str(" STORED")?,
            None => {}
        }
        write_not_null(f, self.not_null)?;
        write_visible(f, self.visible)?;
        if self.unique_key {
            f.write_str(" UNIQUE")?;
        }
        if self.primary_key {
            f.write_str(" PRIMARY KEY")?;
        }
        if let Some(c) = &self.comment {
            write!(f, " COMMENT {}", Str(c))?;
        }
        if let Some(r) = &self.reference {
            write!(f, " {}", r)?;
        }
        if let Some(c) = &self.check {
            write!(f, " {}", c)?;
        }
        Ok(())
    }
}

impl Display for ColumnFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnFormat::Fixed => "FIXED",
            ColumnFormat::Dynamic => "DYNAMIC",
            ColumnFormat::Default => "DEFAULT",
        })
    }
}

impl Display for StorageMedium {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageMedium::Disk => "DISK",
            StorageMedium::Memory => "MEMORY",
        })
    }
}

impl Display for DefaultValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Number(n) => write!(f, "{}", n),
            DefaultValue::String(s) => write!(f, "{}", Str(s)),
            DefaultValue::Boolean(true) => f.write_str("TRUE"),
            DefaultValue::Boolean(false) => f.write_str("FALSE"),
            DefaultValue::Null => f.write_str("NULL"),
            DefaultValue::Array(items) => {
                f.write_str("(")?;
                join(f, items, ", ")?;
                f.write_str(")")
            }
            DefaultValue::TimeFunction(call) => write!(f, "{}", call),
        }
    }
}

impl Display for TimeFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeFunction::CurrentTimestamp => "CURRENT_TIMESTAMP",
            TimeFunction::Now => "NOW",
            TimeFunction::LocalTime => "LOCALTIME",
            TimeFunction::LocalTimestamp => "LOCALTIMESTAMP",
        })
    }
}

impl Display for TimeFunctionCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.function)?;
        match (self.precision, self.function) {
            (Some(p), _) => write!(f, "({})", p),
            (None, TimeFunction::Now) => f.write_str("()"),
            (None, _) => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Indexes and constraints
// ---------------------------------------------------------------------------

fn write_constraint(f: &mut Formatter<'_>, constraint: &Option<Constraint>) -> fmt::Result {
    if let Some(c) = constraint {
        f.write_str("CONSTRAINT ")?;
        if let Some(name) = &c.name {
            write!(f, "{} ", Ident(name))?;
        }
    }
    Ok(())
}

fn write_index_tail(
    f: &mut Formatter<'_>,
    name: &Option<String>,
    index_type: &Option<IndexType>,
    key_parts: &[KeyPart],
    options: &[IndexOption],
) -> fmt::Result {
    if let Some(n) = name {
        write!(f, " {}", Ident(n))?;
    }
    if let Some(t) = index_type {
        write!(f, " USING {}", t)?;
    }
    f.write_str(" (")?;
    join(f, key_parts, ", ")?;
    f.write_str(")")?;
    for o in options {
        write!(f, " {}", o)?;
    }
    Ok(())
}

impl Display for IndexType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IndexType::BTree => "BTREE",
            IndexType::Hash => "HASH",
        })
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        })
    }
}

impl Display for KeyPart {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.target {
            KeyPartTarget::Column { name, length } => {
                write!(f, "{}", Ident(name))?;
                if let Some(n) = length {
                    write!(f, "({})", n)?;
                }
            }
            KeyPartTarget::Expression(e) => write!(f, "({})", e)?,
        }
        if let Some(o) = self.order {
            write!(f, " {}", o)?;
        }
        Ok(())
    }
}

impl Display for IndexOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IndexOption::KeyBlockSize(n) => write!(f, "KEY_BLOCK_SIZE = {}", n),
            IndexOption::IndexType(t) => write!(f, "USING {}", t),
            IndexOption::WithParser(p) => write!(f, "WITH PARSER {}", Ident(p)),
            IndexOption::Comment(c) => write!(f, "COMMENT {}", Str(c)),
            IndexOption::Visible(true) => f.write_str("VISIBLE"),
            IndexOption::Visible(false) => f.write_str("INVISIBLE"),
            IndexOption::EngineAttribute(a) => write!(f, "ENGINE_ATTRIBUTE = {}", Str(a)),
            IndexOption::SecondaryEngineAttribute(a) => {
                write!(f, "SECONDARY_ENGINE_ATTRIBUTE = {}", Str(a))
            }
        }
    }
}

impl Display for SimpleIndexDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("KEY")?;
        write_index_tail(f, &self.name, &self.index_type, &self.key_parts, &self.options)
    }
}

impl Display for PrimaryKeyDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_constraint(f, &self.constraint)?;
        f.write_str("PRIMARY KEY")?;
        write_index_tail(f, &None, &self.index_type, &self.key_parts, &self.options)
    }
}

impl Display for UniqueKeyDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_constraint(f, &self.constraint)?;
        f.write_str("UNIQUE KEY")?;
        write_index_tail(f, &self.name, &self.index_type, &self.key_parts, &self.options)
    }
}

impl Display for SpecialIndexDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self.kind {
            SpecialIndexKind::Fulltext => "FULLTEXT KEY",
            SpecialIndexKind::Spatial => "SPATIAL KEY",
        })?;
        write_index_tail(f, &self.name, &None, &self.key_parts, &self.options)
    }
}

impl Display for ForeignKeyDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_constraint(f, &self.constraint)?;
        f.write_str("FOREIGN KEY")?;
        if let Some(n) = &self.name {
            write!(f, " {}", Ident(n))?;
        }
        f.write_str(" (")?;
        join_idents(f, &self.columns, ", ")?;
        write!(f, ") {}", self.reference)
    }
}

impl Display for ReferenceDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "REFERENCES {} (", self.table)?;
        join(f, &self.key_parts, ", ")?;
        f.write_str(")")?;
        if let Some(m) = self.match_type {
            write!(f, " MATCH {}", m)?;
        }
        if let Some(a) = self.on_delete {
            write!(f, " ON DELETE {}", a)?;
        }
        if let Some(a) = self.on_update {
            write!(f, " ON UPDATE {}", a)?;
        }
        Ok(())
    }
}

impl Display for MatchType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchType::Full => "FULL",
            MatchType::Partial => "PARTIAL",
            MatchType::Simple => "SIMPLE",
        })
    }
}

impl Display for ReferentialAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::SetDefault => "SET DEFAULT",
        })
    }
}

impl Display for CheckConstraintDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_constraint(f, &self.constraint)?;
        write!(f, "CHECK ({})", self.expression)?;
        match self.enforced {
            Some(true) => f.write_str(" ENFORCED"),
            Some(false) => f.write_str(" NOT ENFORCED"),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Table options
// ---------------------------------------------------------------------------

impl Display for TableOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TableOption::AutoextendSize(n) => write!(f, "AUTOEXTEND_SIZE = {}", n),
            TableOption::AutoIncrement(n) => write!(f, "AUTO_INCREMENT = {}", n),
            TableOption::AvgRowLength(n) => write!(f, "AVG_ROW_LENGTH = {}", n),
            TableOption::CharacterSet(cs) => write!(f, "CHARACTER SET = {}", Ident(cs)),
            TableOption::Checksum(n) => write!(f, "CHECKSUM = {}", n),
            TableOption::Collate(c) => write!(f, "COLLATE = {}", Ident(c)),
            TableOption::Comment(c) => write!(f, "COMMENT = {}", Str(c)),
            TableOption::Compression(c) => write!(f, "COMPRESSION = {}", Str(c)),
            TableOption::Connection(c) => write!(f, "CONNECTION = {}", Str(c)),
            TableOption::DataDirectory(d) => write!(f, "DATA DIRECTORY = {}", Str(d)),
            TableOption::IndexDirectory(d) => write!(f, "INDEX DIRECTORY = {}", Str(d)),
            TableOption::DelayKeyWrite(n) => write!(f, "DELAY_KEY_WRITE = {}", n),
            TableOption::Encryption(e) => write!(f, "ENCRYPTION = {}", Str(e)),
            TableOption::Engine(e) => write!(f, "ENGINE = {}", Ident(e)),
            TableOption::EngineAttribute(a) => write!(f, "ENGINE_ATTRIBUTE = {}", Str(a)),
            TableOption::InsertMethod(m) => write!(f, "INSERT_METHOD = {}", m),
            TableOption::SecondaryEngineAttribute(a) => {
                write!(f, "SECONDARY_ENGINE_ATTRIBUTE = {}", Str(a))
            }
            TableOption::KeyBlockSize(n) => write!(f, "KEY_BLOCK_SIZE = {}", n),
            TableOption::MaxRows(n) => write!(f, "MAX_ROWS = {}", n),
            TableOption::MinRows(n) => write!(f, "MIN_ROWS = {}", n),
            TableOption::PackKeys(v) => write!(f, "PACK_KEYS = {}", v),
            TableOption::Password(p) => write!(f, "PASSWORD = {}", Str(p)),
            TableOption::RowFormat(r) => write!(f, "ROW_FORMAT = {}", r),
            TableOption::StatsAutoRecalc(v) => write!(f, "STATS_AUTO_RECALC = {}", v),
            TableOption::StatsPersistent(v) => write!(f, "STATS_PERSISTENT = {}", v),
            TableOption::StatsSamplePages(n) => write!(f, "STATS_SAMPLE_PAGES = {}", n),
            TableOption::Tablespace { name, storage } => {
                write!(f, "TABLESPACE {}", Ident(name))?;
                if let Some(s) = storage {
                    write!(f, " STORAGE {}", s)?;
                }
                Ok(())
            }
            TableOption::Union(tables) => {
                f.write_str("UNION = (")?;
                join_idents(f, tables, ", ")?;
                f.write_str(")")
            }
        }
    }
}

impl Display for InsertMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InsertMethod::No => "NO",
            InsertMethod::First => "FIRST",
            InsertMethod::Last => "LAST",
        })
    }
}

impl Display for RowFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RowFormat::Default => "DEFAULT",
            RowFormat::Dynamic => "DYNAMIC",
            RowFormat::Fixed => "FIXED",
            RowFormat::Compressed => "COMPRESSED",
            RowFormat::Redundant => "REDUNDANT",
            RowFormat::Compact => "COMPACT",
        })
    }
}

impl Display for DefaultOr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DefaultOr::Default => f.write_str("DEFAULT"),
            DefaultOr::Value(n) => write!(f, "{}", n),
        }
    }
}

// ---------------------------------------------------------------------------
// Partitioning
// ---------------------------------------------------------------------------

impl Display for PartitionOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(n) = self.partitions {
            write!(f, " PARTITIONS {}", n)?;
        }
        if let Some(sub) = &self.subpartition_by {
            write!(f, " SUBPARTITION BY {}", sub)?;
        }
        if let Some(n) = self.subpartitions {
            write!(f, " SUBPARTITIONS {}", n)?;
        }
        if !self.definitions.is_empty() {
            f.write_str(" (")?;
            join(f, &self.definitions, ", ")?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl Display for HashPartition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.linear {
            f.write_str("LINEAR ")?;
        }
        write!(f, "HASH ({})", self.expression)
    }
}

impl Display for KeyPartition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.linear {
            f.write_str("LINEAR ")?;
        }
        f.write_str("KEY")?;
        if let Some(a) = self.algorithm {
            write!(f, " ALGORITHM = {}", a)?;
        }
        f.write_str(" (")?;
        join_idents(f, &self.columns, ", ")?;
        f.write_str(")")
    }
}

impl Display for PartitionBy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PartitionBy::Expression(e) => write!(f, " ({})", e),
            PartitionBy::Columns(cols) => {
                f.write_str(" COLUMNS (")?;
                join_idents(f, cols, ", ")?;
                f.write_str(")")
            }
        }
    }
}

impl Display for PartitionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PartitionKind::Hash(h) => write!(f, "{}", h),
            PartitionKind::Key(k) => write!(f, "{}", k),
            PartitionKind::Range(by) => write!(f, "RANGE{}", by),
            PartitionKind::List(by) => write!(f, "LIST{}", by),
        }
    }
}

impl Display for SubpartitionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SubpartitionKind::Hash(h) => write!(f, "{}", h),
            SubpartitionKind::Key(k) => write!(f, "{}", k),
        }
    }
}

impl Display for PartitionDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PARTITION {}", Ident(&self.name))?;
        if let Some(v) = &self.values {
            write!(f, " {}", v)?;
        }
        for o in &self.options {
            write!(f, " {}", o)?;
        }
        Ok(())
    }
}

impl Display for PartitionValues {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PartitionValues::LessThan(LessThan::MaxValue) => {
                f.write_str("VALUES LESS THAN MAXVALUE")
            }
            PartitionValues::LessThan(LessThan::Expression(e)) => {
                write!(f, "VALUES LESS THAN ({})", e)
            }
            PartitionValues::LessThan(LessThan::Values(values)) => {
                f.write_str("VALUES LESS THAN (")?;
                join(f, values, ", ")?;
                f.write_str(")")
            }
            PartitionValues::In(items) => {
                f.write_str("VALUES IN (")?;
                join(f, items, ", ")?;
                f.write_str(")")
            }
        }
    }
}

impl Display for PartitionValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PartitionValue::MaxValue => f.write_str("MAXVALUE"),
            PartitionValue::Expression(e) => write!(f, "{}", e),
        }
    }
}

impl Display for PartitionDefinitionOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PartitionDefinitionOption::Engine(e) => write!(f, "ENGINE = {}", Ident(e)),
            PartitionDefinitionOption::Comment(c) => write!(f, "COMMENT = {}", Str(c)),
            PartitionDefinitionOption::DataDirectory(d) => {
                write!(f, "DATA DIRECTORY = {}", Str(d))
            }
            PartitionDefinitionOption::IndexDirectory(d) => {
                write!(f, "INDEX DIRECTORY = {}", Str(d))
            }
            PartitionDefinitionOption::MaxRows(n) => write!(f, "MAX_ROWS = {}", n),
            PartitionDefinitionOption::MinRows(n) => write!(f, "MIN_ROWS = {}", n),
            PartitionDefinitionOption::Tablespace(t) => write!(f, "TABLESPACE = {}", Ident(t)),
        }
    }
}

// ---------------------------------------------------------------------------
// ALTER TABLE
// ---------------------------------------------------------------------------

impl Display for AlterTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER TABLE {}", self.name)?;
        let specs = self
            .alter_options
            .iter()
            .map(|o| o.to_string())
            .chain(self.partition_options.iter().map(|o| o.to_string()))
            .collect::<Vec<_>>();
        if !specs.is_empty() {
            write!(f, " {}", specs.join(", "))?;
        }
        Ok(())
    }
}

fn write_position(f: &mut Formatter<'_>, position: &Option<ColumnPosition>) -> fmt::Result {
    match position {
        Some(ColumnPosition::First) => f.write_str(" FIRST"),
        Some(ColumnPosition::After(c)) => write!(f, " AFTER {}", Ident(c)),
        None => Ok(()),
    }
}

impl Display for AlterOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AlterOption::AddColumn { column, position } => {
                write!(f, "ADD COLUMN {}", column)?;
                write_position(f, position)
            }
            AlterOption::AddColumns(columns) => {
                f.write_str("ADD COLUMN (")?;
                join(f, columns, ", ")?;
                f.write_str(")")
            }
            AlterOption::AddSimpleIndex(d) => write!(f, "ADD {}", d),
            AlterOption::AddPrimaryKey(d) => write!(f, "ADD {}", d),
            AlterOption::AddUniqueKey(d) => write!(f, "ADD {}", d),
            AlterOption::AddForeignKey(d) => write!(f, "ADD {}", d),
            AlterOption::AddSpecialIndex(d) => write!(f, "ADD {}", d),
            AlterOption::AddCheckConstraint(d) => write!(f, "ADD {}", d),
            AlterOption::DropCheckConstraint(name) => write!(f, "DROP CHECK {}", Ident(name)),
            AlterOption::AlterCheckConstraint { name, enforced } => {
                write!(f, "ALTER CHECK {} ", Ident(name))?;
                write_not(f, !enforced)?;
                f.write_str("ENFORCED")
            }
            AlterOption::Algorithm(a) => write!(f, "ALGORITHM = {}", a),
            AlterOption::DropColumn(name) => write!(f, "DROP COLUMN {}", Ident(name)),
            AlterOption::DropIndex(name) => write!(f, "DROP INDEX {}", Ident(name)),
            AlterOption::DropPrimaryKey => f.write_str("DROP PRIMARY KEY"),
            AlterOption::DropForeignKey(name) => write!(f, "DROP FOREIGN KEY {}", Ident(name)),
            AlterOption::AlterColumn { name, action } => {
                write!(f, "ALTER COLUMN {} {}", Ident(name), action)
            }
            AlterOption::AlterIndex { name, visible } => write!(
                f,
                "ALTER INDEX {} {}",
                Ident(name),
                if *visible { "VISIBLE" } else { "INVISIBLE" }
            ),
            AlterOption::ModifyColumn { column, position } => {
                write!(f, "MODIFY COLUMN {}", column)?;
                write_position(f, position)
            }
            AlterOption::ChangeColumn {
                old_name,
                column,
                position,
            } => {
                write!(f, "CHANGE COLUMN {} {}", Ident(old_name), column)?;
                write_position(f, position)
            }
            AlterOption::RenameColumn { from, to } => {
                write!(f, "RENAME COLUMN {} TO {}", Ident(from), Ident(to))
            }
            AlterOption::RenameIndex { from, to } => {
                write!(f, "RENAME INDEX {} TO {}", Ident(from), Ident(to))
            }
            AlterOption::RenameTable(name) => write!(f, "RENAME TO {}", name),
            AlterOption::Lock(m) => write!(f, "LOCK = {}", m),
            AlterOption::ConvertCharset { charset, collation } => {
                write!(f, "CONVERT TO CHARACTER SET {}", Ident(charset))?;
                if let Some(c) = collation {
                    write!(f, " COLLATE {}", Ident(c))?;
                }
                Ok(())
            }
            AlterOption::TableOption(o) => write!(f, "{}", o),
        }
    }
}

impl Display for AlterColumnAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AlterColumnAction::SetDefault(v) => write!(f, "SET DEFAULT {}", v),
            AlterColumnAction::DropDefault => f.write_str("DROP DEFAULT"),
            AlterColumnAction::SetVisible(true) => f.write_str("SET VISIBLE"),
            AlterColumnAction::SetVisible(false) => f.write_str("SET INVISIBLE"),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Default => "DEFAULT",
            Algorithm::Instant => "INSTANT",
            Algorithm::Inplace => "INPLACE",
            Algorithm::Copy => "COPY",
        })
    }
}

impl Display for LockMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LockMode::Default => "DEFAULT",
            LockMode::None => "NONE",
            LockMode::Shared => "SHARED",
            LockMode::Exclusive => "EXCLUSIVE",
        })
    }
}

impl Display for AlterPartitionOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AlterPartitionOption::PartitionBy(p) => write!(f, "PARTITION BY {}", p),
            AlterPartitionOption::AddPartition(defs) => {
                f.write_str("ADD PARTITION (")?;
                join(f, defs, ", ")?;
                f.write_str(")")
            }
            AlterPartitionOption::DropPartition(names) => {
                f.write_str("DROP PARTITION ")?;
                join_idents(f, names, ", ")
            }
            AlterPartitionOption::Maintain {
                operation,
                partitions,
            } => write!(f, "{} PARTITION {}", operation, partitions),
            AlterPartitionOption::CoalescePartition(n) => write!(f, "COALESCE PARTITION {}", n),
            AlterPartitionOption::RemovePartitioning => f.write_str("REMOVE PARTITIONING"),
        }
    }
}

impl Display for PartitionOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PartitionOperation::Truncate => "TRUNCATE",
            PartitionOperation::Analyze => "ANALYZE",
            PartitionOperation::Check => "CHECK",
            PartitionOperation::Optimize => "OPTIMIZE",
            PartitionOperation::Rebuild => "REBUILD",
            PartitionOperation::Repair => "REPAIR",
        })
    }
}

impl Display for PartitionNames {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PartitionNames::All => f.write_str("ALL"),
            PartitionNames::Names(names) => join_idents(f, names, ", "),
        }
    }
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        join(f, &self.or, " OR ")
    }
}

impl Display for OrCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        join(f, &self.and, " AND ")
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Operand(c) => write!(f, "{}", c),
            Condition::Not(c) => write!(f, "NOT {}", c),
            Condition::Exists(s) => write!(f, "EXISTS ({})", s),
        }
    }
}

impl Display for ConditionOperand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operand)?;
        if let Some(p) = &self.predicate {
            write!(f, " {}", p)?;
        }
        Ok(())
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Compare { op, rhs } => write!(f, "{} {}", op, rhs),
            Predicate::Is { not, rhs } => {
                f.write_str("IS ")?;
                write_not(f, *not)?;
                match rhs {
                    IsRhs::Null => f.write_str("NULL"),
                    IsRhs::DistinctFrom(o) => write!(f, "DISTINCT FROM {}", o),
                }
            }
            Predicate::Between { not, low, high } => {
                write_not(f, *not)?;
                write!(f, "BETWEEN {} AND {}", low, high)
            }
            Predicate::In { not, list } => {
                write_not(f, *not)?;
                f.write_str("IN (")?;
                match list {
                    InList::Select(s) => write!(f, "{}", s)?,
                    InList::Expressions(items) => join(f, items, ", ")?,
                }
                f.write_str(")")
            }
            Predicate::Like { not, pattern } => {
                write_not(f, *not)?;
                write!(f, "LIKE {}", pattern)
            }
        }
    }
}

impl Display for CompareOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompareOp::NotEq => "<>",
            CompareOp::LtEq => "<=",
            CompareOp::GtEq => ">=",
            CompareOp::Eq => "=",
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
        })
    }
}

impl Display for CompareRhs {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CompareRhs::Operand(o) => write!(f, "{}", o),
            CompareRhs::Quantified { quantifier, select } => {
                let q = match quantifier {
                    Quantifier::All => "ALL",
                    Quantifier::Any => "ANY",
                    Quantifier::Some => "SOME",
                };
                write!(f, "{} ({})", q, select)
            }
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        join(f, &self.summands, " || ")
    }
}

impl Display for Summand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (op, factor) in &self.rest {
            let op = match op {
                AddOp::Add => "+",
                AddOp::Sub => "-",
            };
            write!(f, " {} {}", op, factor)?;
        }
        Ok(())
    }
}

impl Display for Factor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (op, term) in &self.rest {
            let op = match op {
                MulOp::Mul => "*",
                MulOp::Div => "/",
                MulOp::Mod => "%",
            };
            write!(f, " {} {}", op, term)?;
        }
        Ok(())
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Term::Select(s) => write!(f, "{}", s),
            Term::Value(v) => write!(f, "{}", v),
            Term::SymbolRef(s) => write!(f, "{}", s),
            Term::SubExpression(e) => write!(f, "({})", e),
        }
    }
}

impl Display for SymbolRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, part) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            let time_function = i == 0
                && ["CURRENT_TIMESTAMP", "LOCALTIME", "LOCALTIMESTAMP", "NOW"]
                    .iter()
                    .any(|name| part.eq_ignore_ascii_case(name));
            if time_function {
                f.write_str(part)?;
            } else {
                write!(f, "{}", Ident(part))?;
            }
        }
        if let Some(args) = &self.arguments {
            f.write_str("(")?;
            join(f, args, ", ")?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Wildcard => f.write_str("*"),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", Str(s)),
            Value::Boolean(true) => f.write_str("TRUE"),
            Value::Boolean(false) => f.write_str("FALSE"),
            Value::Null => f.write_str("NULL"),
            Value::Array(items) => {
                f.write_str("(")?;
                join(f, items, ", ")?;
                f.write_str(")")
            }
        }
    }
}

impl Display for Select {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT")?;
        if let Some(top) = &self.top {
            write!(f, " TOP {}", top)?;
        }
        match self.quantifier {
            Some(SelectQuantifier::Distinct) => f.write_str(" DISTINCT")?,
            Some(SelectQuantifier::All) => f.write_str(" ALL")?,
            None => {}
        }
        match &self.projection {
            Projection::Wildcard => f.write_str(" *")?,
            Projection::Expressions(items) => {
                f.write_str(" ")?;
                join(f, items, ", ")?;
            }
        }
        f.write_str(" FROM ")?;
        join(f, &self.from, ", ")?;
        if let Some(w) = &self.where_clause {
            write!(f, " WHERE {}", w)?;
        }
        if let Some(l) = &self.limit {
            write!(f, " LIMIT {}", l)?;
        }
        if let Some(o) = &self.offset {
            write!(f, " OFFSET {}", o)?;
        }
        if let Some(g) = &self.group_by {
            write!(f, " GROUP BY {}", g)?;
        }
        Ok(())
    }
}

impl Display for AliasedExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)?;
        if let Some(a) = &self.alias {
            write!(f, " AS {}", Ident(a))?;
        }
        Ok(())
    }
}

impl Display for TableExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.source {
            TableSource::Values(items) => {
                f.write_str("VALUES (")?;
                join(f, items, ", ")?;
                f.write_str(")")?;
            }
            TableSource::Subquery(s) => write!(f, "({})", s)?,
            TableSource::Table(path) => join_idents(f, path, ".")?,
        }
        if let Some(a) = &self.alias {
            write!(f, " AS {}", Ident(a))?;
        }
        Ok(())
    }
}
