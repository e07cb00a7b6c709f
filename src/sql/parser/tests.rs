use super::*;
use crate::types::*;

fn create(sql: &str) -> CreateTable {
    Parser::new().parse_create_table(sql).unwrap()
}

fn alter(sql: &str) -> AlterTable {
    Parser::new().parse_alter_table(sql).unwrap()
}

fn only_column(sql: &str) -> SimpleColumnDefinition {
    let ct = create(sql);
    assert_eq!(ct.definitions.len(), 1);
    if let CreateDefinition::Column(ColumnDefinition::Simple(c)) = &ct.definitions[0] {
        c.clone()
    } else {
        panic!("Expected simple column, got {:?}", ct.definitions[0]);
    }
}

#[test]
fn test_parse_create_table() {
    let stmt = parse_sql("CREATE TABLE users (id BIGINT PRIMARY KEY, name VARCHAR(64))").unwrap();
    if let Statement::CreateTable(ct) = stmt {
        assert_eq!(ct.name, TableName::new("users"));
        assert_eq!(ct.definitions.len(), 2);
        assert!(!ct.if_not_exists);
        assert!(!ct.temporary);
        let names: Vec<&str> = ct.columns().map(|c| c.name()).collect();
        assert_eq!(names, vec!["id", "name"]);
    } else {
        panic!("Expected CreateTable");
    }
}

#[test]
fn test_parse_create_table_if_not_exists() {
    let ct = create("CREATE TEMPORARY TABLE IF NOT EXISTS db.users (id INT)");
    assert!(ct.temporary);
    assert!(ct.if_not_exists);
    assert_eq!(ct.name.schema.as_deref(), Some("db"));
    assert_eq!(ct.name.name, "users");
}

#[test]
fn test_parse_empty_definition_list() {
    let ct = create("CREATE TABLE t ()");
    assert!(ct.definitions.is_empty());
}

#[test]
fn test_parse_bit_column() {
    let c = only_column("CREATE TABLE t (c BIT)");
    assert_eq!(c.data_type, DataType::Bit(BitType { precision: None }));

    let c = only_column("CREATE TABLE t (c BIT ( 5 ))");
    assert_eq!(c.data_type, DataType::Bit(BitType { precision: Some(5) }));
}

#[test]
fn test_parse_integer_attributes() {
    let c = only_column("CREATE TABLE t (c TINYINT(4) UNSIGNED ZEROFILL)");
    assert_eq!(
        c.data_type,
        DataType::Integer(IntegerType {
            kind: IntegerKind::TinyInt,
            precision: Some(4),
            unsigned: true,
            zerofill: true,
        })
    );
}

#[test]
fn test_parse_numeric_types() {
    let c = only_column("CREATE TABLE t (price DECIMAL(10, 2) UNSIGNED)");
    if let DataType::Numeric(n) = &c.data_type {
        assert_eq!(n.kind, NumericKind::Decimal);
        assert_eq!(n.precision, Some(10));
        assert_eq!(n.scale, Some(2));
        assert!(n.unsigned);
    } else {
        panic!("Expected numeric type");
    }

    let c = only_column("CREATE TABLE t (d DOUBLE PRECISION)");
    if let DataType::Numeric(n) = &c.data_type {
        assert_eq!(n.kind, NumericKind::DoublePrecision);
    } else {
        panic!("Expected numeric type");
    }
}

#[test]
fn test_parse_string_types() {
    let c = only_column(
        "CREATE TABLE t (s NATIONAL VARCHAR(30) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin)",
    );
    assert_eq!(
        c.data_type,
        DataType::String(StringType {
            national: true,
            kind: StringKind::VarChar,
            precision: Some(30),
            charset: Some("utf8mb4".into()),
            collation: Some("utf8mb4_bin".into()),
        })
    );
}

#[test]
fn test_parse_enum_and_set() {
    let c = only_column("CREATE TABLE t (e ENUM('a', 'b') CHARSET latin1)");
    if let DataType::EnumSet(e) = &c.data_type {
        assert!(!e.is_set);
        assert_eq!(e.values, vec!["a", "b"]);
        assert_eq!(e.charset.as_deref(), Some("latin1"));
    } else {
        panic!("Expected enum type");
    }

    let c = only_column("CREATE TABLE t (s SET('x'))");
    assert!(matches!(&c.data_type, DataType::EnumSet(e) if e.is_set));
}

#[test]
fn test_parse_other_types() {
    let ct = create(
        "CREATE TABLE t (a DATETIME(6), b BLOB, c JSON, d POINT, e BOOLEAN, f YEAR, g VARBINARY(16))",
    );
    let types: Vec<DataType> = ct.columns().map(|c| c.data_type().clone()).collect();
    assert_eq!(
        types[0],
        DataType::Temporal(TemporalType {
            kind: TemporalKind::DateTime,
            fsp: Some(6),
        })
    );
    assert_eq!(
        types[1],
        DataType::Blob(BlobType {
            kind: BlobKind::Blob,
            precision: None,
        })
    );
    assert_eq!(types[2], DataType::Json);
    assert_eq!(types[3], DataType::Spatial(SpatialKind::Point));
    assert_eq!(types[4], DataType::Bool);
    assert!(matches!(&types[5], DataType::Temporal(t) if t.kind == TemporalKind::Year));
    assert!(matches!(&types[6], DataType::Blob(b) if b.precision == Some(16)));
}

#[test]
fn test_parse_column_attributes() {
    let c = only_column(
        "CREATE TABLE t (id INT NOT NULL DEFAULT 0 INVISIBLE AUTO_INCREMENT UNIQUE KEY \
         COMMENT 'identifier' COLUMN_FORMAT FIXED STORAGE DISK)",
    );
    assert_eq!(c.name, "id");
    assert_eq!(c.not_null, Some(true));
    assert!(c.is_not_null());
    assert_eq!(c.default, Some(DefaultValue::Number(0.0)));
    assert_eq!(c.visible, Some(false));
    assert!(c.auto_increment);
    assert!(c.unique_key);
    assert!(!c.primary_key);
    assert_eq!(c.comment.as_deref(), Some("identifier"));
    assert_eq!(c.column_format, Some(ColumnFormat::Fixed));
    assert_eq!(c.storage, Some(StorageMedium::Disk));
}

#[test]
fn test_parse_explicit_null() {
    let c = only_column("CREATE TABLE t (a INT NULL DEFAULT NULL)");
    assert_eq!(c.not_null, Some(false));
    assert!(!c.is_not_null());
    assert_eq!(c.default, Some(DefaultValue::Null));
}

#[test]
fn test_parse_timestamp_defaults() {
    let c = only_column(
        "CREATE TABLE t (ts TIMESTAMP(3) DEFAULT CURRENT_TIMESTAMP(3) ON UPDATE NOW())",
    );
    assert_eq!(
        c.default,
        Some(DefaultValue::TimeFunction(TimeFunctionCall {
            function: TimeFunction::CurrentTimestamp,
            precision: Some(3),
        }))
    );
    assert_eq!(
        c.on_update,
        Some(TimeFunctionCall {
            function: TimeFunction::Now,
            precision: None,
        })
    );
}

#[test]
fn test_parse_default_values() {
    let c = only_column("CREATE TABLE t (a VARCHAR(10) DEFAULT 'x')");
    assert_eq!(c.default, Some(DefaultValue::String("x".into())));
    let c = only_column("CREATE TABLE t (a INT DEFAULT -1)");
    assert_eq!(c.default, Some(DefaultValue::Number(-1.0)));
    let c = only_column("CREATE TABLE t (a BOOL DEFAULT TRUE)");
    assert_eq!(c.default, Some(DefaultValue::Boolean(true)));
    let c = only_column("CREATE TABLE t (a BINARY(16) DEFAULT (uuid_to_bin(uuid())))");
    if let Some(DefaultValue::Array(items)) = &c.default {
        assert_eq!(items.len(), 1);
    } else {
        panic!("Expected expression default");
    }
}

#[test]
fn test_parse_column_collation_after_type() {
    let c = only_column("CREATE TABLE t (a INT COLLATE utf8mb4_bin NOT NULL)");
    assert_eq!(c.collation.as_deref(), Some("utf8mb4_bin"));
    assert_eq!(c.not_null, Some(true));
}

#[test]
fn test_parse_generated_column() {
    let ct = create(
        "CREATE TABLE t (a INT, b INT GENERATED ALWAYS AS (a * 2) STORED NOT NULL, c INT AS (a + 1))",
    );
    if let CreateDefinition::Column(ColumnDefinition::Generated(g)) = &ct.definitions[1] {
        assert_eq!(g.name, "b");
        assert_eq!(g.storage, Some(GeneratedStorage::Stored));
        assert_eq!(g.not_null, Some(true));
        assert_eq!(g.expression.to_string(), "a * 2");
    } else {
        panic!("Expected generated column");
    }
    if let CreateDefinition::Column(ColumnDefinition::Generated(g)) = &ct.definitions[2] {
        assert_eq!(g.storage, None);
    } else {
        panic!("Expected generated column");
    }
}

#[test]
fn test_parse_column_reference_and_check() {
    let c = only_column(
        "CREATE TABLE t (uid INT REFERENCES users (id) ON DELETE CASCADE CHECK (uid > 0))",
    );
    let reference = c.reference.unwrap();
    assert_eq!(reference.table, TableName::new("users"));
    assert_eq!(reference.on_delete, Some(ReferentialAction::Cascade));
    assert_eq!(reference.on_update, None);
    let check = c.check.unwrap();
    assert_eq!(check.expression.to_string(), "uid > 0");
}

#[test]
fn test_parse_non_reserved_keyword_as_column_name() {
    let ct = create("CREATE TABLE t (comment TEXT, status INT, `key` INT)");
    let names: Vec<&str> = ct.columns().map(|c| c.name()).collect();
    assert_eq!(names, vec!["comment", "status", "key"]);
}

#[test]
fn test_reserved_keyword_as_column_name_fails() {
    assert!(parse_sql("CREATE TABLE t (key INT)").is_err());
}

#[test]
fn test_parse_primary_and_unique_keys() {
    let ct = create(
        "CREATE TABLE t (a INT, b INT, PRIMARY KEY USING BTREE (a), \
         CONSTRAINT uq UNIQUE KEY ub (b DESC) COMMENT 'unique b')",
    );
    if let CreateDefinition::PrimaryKey(pk) = &ct.definitions[2] {
        assert_eq!(pk.constraint, None);
        assert_eq!(pk.index_type, Some(IndexType::BTree));
        assert_eq!(pk.key_parts.len(), 1);
    } else {
        panic!("Expected primary key");
    }
    if let CreateDefinition::UniqueKey(uk) = &ct.definitions[3] {
        assert_eq!(
            uk.constraint,
            Some(Constraint {
                name: Some("uq".into())
            })
        );
        assert_eq!(uk.name.as_deref(), Some("ub"));
        assert_eq!(uk.key_parts[0].order, Some(SortOrder::Desc));
        assert_eq!(uk.options, vec![IndexOption::Comment("unique b".into())]);
    } else {
        panic!("Expected unique key");
    }
}

#[test]
fn test_parse_simple_and_special_indexes() {
    let ct = create(
        "CREATE TABLE t (body TEXT, loc POINT, INDEX idx_body (body(10)) INVISIBLE, \
         KEY ((lower(body))), FULLTEXT KEY ft (body) WITH PARSER ngram, SPATIAL INDEX (loc))",
    );
    if let CreateDefinition::SimpleIndex(idx) = &ct.definitions[2] {
        assert_eq!(idx.name.as_deref(), Some("idx_body"));
        assert_eq!(
            idx.key_parts[0].target,
            KeyPartTarget::Column {
                name: "body".into(),
                length: Some(10),
            }
        );
        assert_eq!(idx.options, vec![IndexOption::Visible(false)]);
    } else {
        panic!("Expected simple index");
    }
    if let CreateDefinition::SimpleIndex(idx) = &ct.definitions[3] {
        assert_eq!(idx.name, None);
        assert!(matches!(idx.key_parts[0].target, KeyPartTarget::Expression(_)));
    } else {
        panic!("Expected functional index");
    }
    if let CreateDefinition::SpecialIndex(ft) = &ct.definitions[4] {
        assert_eq!(ft.kind, SpecialIndexKind::Fulltext);
        assert_eq!(ft.options, vec![IndexOption::WithParser("ngram".into())]);
    } else {
        panic!("Expected fulltext index");
    }
    if let CreateDefinition::SpecialIndex(sp) = &ct.definitions[5] {
        assert_eq!(sp.kind, SpecialIndexKind::Spatial);
        assert_eq!(sp.name, None);
    } else {
        panic!("Expected spatial index");
    }
}

#[test]
fn test_parse_foreign_key() {
    let ct = create(
        "CREATE TABLE t (a INT, CONSTRAINT fk_a FOREIGN KEY (a) REFERENCES other.p (id) \
         MATCH FULL ON DELETE SET NULL ON UPDATE NO ACTION)",
    );
    if let CreateDefinition::ForeignKey(fk) = &ct.definitions[1] {
        assert_eq!(
            fk.constraint,
            Some(Constraint {
                name: Some("fk_a".into())
            })
        );
        assert_eq!(fk.columns, vec!["a"]);
        assert_eq!(fk.reference.table.schema.as_deref(), Some("other"));
        assert_eq!(fk.reference.match_type, Some(MatchType::Full));
        assert_eq!(fk.reference.on_delete, Some(ReferentialAction::SetNull));
        assert_eq!(fk.reference.on_update, Some(ReferentialAction::NoAction));
    } else {
        panic!("Expected foreign key");
    }
}

#[test]
fn test_parse_check_constraints() {
    let ct = create(
        "CREATE TABLE t (a INT, CHECK (a > 0), CONSTRAINT c_a CHECK (a < 10) NOT ENFORCED)",
    );
    if let CreateDefinition::CheckConstraint(c) = &ct.definitions[1] {
        assert_eq!(c.constraint, None);
        assert_eq!(c.enforced, None);
    } else {
        panic!("Expected check constraint");
    }
    if let CreateDefinition::CheckConstraint(c) = &ct.definitions[2] {
        assert_eq!(c.constraint.as_ref().unwrap().name.as_deref(), Some("c_a"));
        assert_eq!(c.enforced, Some(false));
    } else {
        panic!("Expected check constraint");
    }
}

#[test]
fn test_parse_table_options() {
    let ct = create(
        "CREATE TABLE t (a INT) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE utf8mb4_bin \
         AUTO_INCREMENT = 100, COMMENT 'hello' ROW_FORMAT=DYNAMIC STATS_PERSISTENT=DEFAULT \
         TABLESPACE ts1 STORAGE MEMORY UNION = (a, b)",
    );
    assert_eq!(
        ct.table_options,
        vec![
            TableOption::Engine("InnoDB".into()),
            TableOption::CharacterSet("utf8mb4".into()),
            TableOption::Collate("utf8mb4_bin".into()),
            TableOption::AutoIncrement(100),
            TableOption::Comment("hello".into()),
            TableOption::RowFormat(RowFormat::Dynamic),
            TableOption::StatsPersistent(DefaultOr::Default),
            TableOption::Tablespace {
                name: "ts1".into(),
                storage: Some(StorageMedium::Memory),
            },
            TableOption::Union(vec!["a".into(), "b".into()]),
        ]
    );
}

#[test]
fn test_parse_table_option_quoted_engine() {
    let ct = create("CREATE TABLE t (a INT) ENGINE 'MyISAM' INSERT_METHOD LAST");
    assert_eq!(
        ct.table_options,
        vec![
            TableOption::Engine("MyISAM".into()),
            TableOption::InsertMethod(InsertMethod::Last),
        ]
    );
}

#[test]
fn test_parse_partition_by_hash() {
    let ct = create("CREATE TABLE t (id INT) PARTITION BY LINEAR HASH (id) PARTITIONS 4");
    let p = ct.partition_options.unwrap();
    if let PartitionKind::Hash(h) = &p.kind {
        assert!(h.linear);
        assert_eq!(h.expression.to_string(), "id");
    } else {
        panic!("Expected hash partitioning");
    }
    assert_eq!(p.partitions, Some(4));
    assert!(p.definitions.is_empty());
}

#[test]
fn test_parse_partition_by_range() {
    let ct = create(
        "CREATE TABLE t (y INT) PARTITION BY RANGE (y) (\
         PARTITION p0 VALUES LESS THAN (2000) ENGINE = InnoDB, \
         PARTITION p1 VALUES LESS THAN MAXVALUE COMMENT 'rest')",
    );
    let p = ct.partition_options.unwrap();
    assert!(matches!(p.kind, PartitionKind::Range(PartitionBy::Expression(_))));
    assert_eq!(p.definitions.len(), 2);
    assert_eq!(p.definitions[0].name, "p0");
    if let Some(PartitionValues::LessThan(LessThan::Expression(e))) = &p.definitions[0].values {
        assert_eq!(e.to_string(), "2000");
    } else {
        panic!("Expected LESS THAN expression");
    }
    assert_eq!(
        p.definitions[0].options,
        vec![PartitionDefinitionOption::Engine("InnoDB".into())]
    );
    assert_eq!(
        p.definitions[1].values,
        Some(PartitionValues::LessThan(LessThan::MaxValue))
    );
}

#[test]
fn test_parse_partition_by_range_columns_and_list() {
    let ct = create(
        "CREATE TABLE t (a INT, b INT) PARTITION BY RANGE COLUMNS (a, b) (\
         PARTITION p0 VALUES LESS THAN (10, MAXVALUE))",
    );
    let p = ct.partition_options.unwrap();
    assert_eq!(
        p.kind,
        PartitionKind::Range(PartitionBy::Columns(vec!["a".into(), "b".into()]))
    );
    if let Some(PartitionValues::LessThan(LessThan::Values(values))) = &p.definitions[0].values {
        assert_eq!(values.len(), 2);
        assert_eq!(values[1], PartitionValue::MaxValue);
    } else {
        panic!("Expected LESS THAN value list");
    }

    let ct = create(
        "CREATE TABLE t (r INT) PARTITION BY LIST (r) (PARTITION east VALUES IN (1, 2, 3))",
    );
    let p = ct.partition_options.unwrap();
    if let Some(PartitionValues::In(items)) = &p.definitions[0].values {
        assert_eq!(items.len(), 3);
    } else {
        panic!("Expected VALUES IN");
    }
}

#[test]
fn test_parse_partition_by_key_with_subpartitions() {
    let ct = create(
        "CREATE TABLE t (a INT, d DATE) PARTITION BY RANGE (year(d)) \
         SUBPARTITION BY KEY ALGORITHM = 2 (a) SUBPARTITIONS 2 \
         (PARTITION p0 VALUES LESS THAN (1990))",
    );
    let p = ct.partition_options.unwrap();
    assert_eq!(
        p.subpartition_by,
        Some(SubpartitionKind::Key(KeyPartition {
            linear: false,
            algorithm: Some(2),
            columns: vec!["a".into()],
        }))
    );
    assert_eq!(p.subpartitions, Some(2));
}

#[test]
fn test_parse_alter_add_and_drop() {
    let at = alter(
        "ALTER TABLE t ADD COLUMN c INT NOT NULL AFTER b, ADD INDEX idx_c (c), \
         DROP COLUMN d, DROP PRIMARY KEY, DROP FOREIGN KEY fk_x, DROP INDEX idx_old",
    );
    assert_eq!(at.name, TableName::new("t"));
    assert_eq!(at.alter_options.len(), 6);
    if let AlterOption::AddColumn { column, position } = &at.alter_options[0] {
        assert_eq!(column.name(), "c");
        assert_eq!(position, &Some(ColumnPosition::After("b".into())));
    } else {
        panic!("Expected ADD COLUMN");
    }
    assert!(matches!(at.alter_options[1], AlterOption::AddSimpleIndex(_)));
    assert_eq!(at.alter_options[2], AlterOption::DropColumn("d".into()));
    assert_eq!(at.alter_options[3], AlterOption::DropPrimaryKey);
    assert_eq!(at.alter_options[4], AlterOption::DropForeignKey("fk_x".into()));
    assert_eq!(at.alter_options[5], AlterOption::DropIndex("idx_old".into()));
}

#[test]
fn test_parse_alter_add_columns_and_keys() {
    let at = alter(
        "ALTER TABLE t ADD (x INT, y INT), ADD PRIMARY KEY (x), ADD UNIQUE (y), \
         ADD CONSTRAINT fk FOREIGN KEY (x) REFERENCES p (id), ADD FULLTEXT (z), \
         ADD CHECK (x > 0)",
    );
    assert!(matches!(&at.alter_options[0], AlterOption::AddColumns(cols) if cols.len() == 2));
    assert!(matches!(at.alter_options[1], AlterOption::AddPrimaryKey(_)));
    assert!(matches!(at.alter_options[2], AlterOption::AddUniqueKey(_)));
    assert!(matches!(at.alter_options[3], AlterOption::AddForeignKey(_)));
    assert!(matches!(at.alter_options[4], AlterOption::AddSpecialIndex(_)));
    assert!(matches!(at.alter_options[5], AlterOption::AddCheckConstraint(_)));
}

#[test]
fn test_parse_alter_column_changes() {
    let at = alter(
        "ALTER TABLE t ALTER COLUMN a SET DEFAULT 5, ALTER b DROP DEFAULT, \
         ALTER COLUMN c SET INVISIBLE, ALTER INDEX i VISIBLE, ALTER CHECK ck NOT ENFORCED, \
         MODIFY COLUMN a BIGINT FIRST, CHANGE b b2 VARCHAR(20), RENAME COLUMN c TO c2, \
         RENAME INDEX i TO i2, RENAME TO t2",
    );
    assert_eq!(
        at.alter_options[0],
        AlterOption::AlterColumn {
            name: "a".into(),
            action: AlterColumnAction::SetDefault(DefaultValue::Number(5.0)),
        }
    );
    assert_eq!(
        at.alter_options[1],
        AlterOption::AlterColumn {
            name: "b".into(),
            action: AlterColumnAction::DropDefault,
        }
    );
    assert_eq!(
        at.alter_options[2],
        AlterOption::AlterColumn {
            name: "c".into(),
            action: AlterColumnAction::SetVisible(false),
        }
    );
    assert_eq!(
        at.alter_options[3],
        AlterOption::AlterIndex {
            name: "i".into(),
            visible: true,
        }
    );
    assert_eq!(
        at.alter_options[4],
        AlterOption::AlterCheckConstraint {
            name: "ck".into(),
            enforced: false,
        }
    );
    if let AlterOption::ModifyColumn { column, position } = &at.alter_options[5] {
        assert_eq!(column.name(), "a");
        assert_eq!(position, &Some(ColumnPosition::First));
    } else {
        panic!("Expected MODIFY COLUMN");
    }
    if let AlterOption::ChangeColumn {
        old_name, column, ..
    } = &at.alter_options[6]
    {
        assert_eq!(old_name, "b");
        assert_eq!(column.name(), "b2");
    } else {
        panic!("Expected CHANGE COLUMN");
    }
    assert_eq!(
        at.alter_options[7],
        AlterOption::RenameColumn {
            from: "c".into(),
            to: "c2".into(),
        }
    );
    assert_eq!(
        at.alter_options[8],
        AlterOption::RenameIndex {
            from: "i".into(),
            to: "i2".into(),
        }
    );
    assert_eq!(
        at.alter_options[9],
        AlterOption::RenameTable(TableName::new("t2"))
    );
}

#[test]
fn test_parse_alter_table_level_options() {
    let at = alter(
        "ALTER TABLE t ALGORITHM = INPLACE, LOCK = NONE, \
         CONVERT TO CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci, ENGINE = InnoDB",
    );
    assert_eq!(
        at.alter_options,
        vec![
            AlterOption::Algorithm(Algorithm::Inplace),
            AlterOption::Lock(LockMode::None),
            AlterOption::ConvertCharset {
                charset: "utf8mb4".into(),
                collation: Some("utf8mb4_general_ci".into()),
            },
            AlterOption::TableOption(TableOption::Engine("InnoDB".into())),
        ]
    );
}

#[test]
fn test_parse_alter_partition_options() {
    let at = alter(
        "ALTER TABLE t ADD PARTITION (PARTITION p3 VALUES LESS THAN (2030)), \
         TRUNCATE PARTITION ALL, COALESCE PARTITION 2, REMOVE PARTITIONING, \
         ANALYZE PARTITION p2, DROP PARTITION p0, p1",
    );
    assert!(at.alter_options.is_empty());
    assert_eq!(at.partition_options.len(), 6);
    assert!(matches!(&at.partition_options[0], AlterPartitionOption::AddPartition(d) if d.len() == 1));
    assert_eq!(
        at.partition_options[1],
        AlterPartitionOption::Maintain {
            operation: PartitionOperation::Truncate,
            partitions: PartitionNames::All,
        }
    );
    assert_eq!(
        at.partition_options[2],
        AlterPartitionOption::CoalescePartition(2)
    );
    assert_eq!(
        at.partition_options[3],
        AlterPartitionOption::RemovePartitioning
    );
    assert_eq!(
        at.partition_options[4],
        AlterPartitionOption::Maintain {
            operation: PartitionOperation::Analyze,
            partitions: PartitionNames::Names(vec!["p2".into()]),
        }
    );
    assert_eq!(
        at.partition_options[5],
        AlterPartitionOption::DropPartition(vec!["p0".into(), "p1".into()])
    );
}

#[test]
fn test_parse_alter_partition_by() {
    let at = alter("ALTER TABLE t PARTITION BY KEY (id) PARTITIONS 8");
    if let AlterPartitionOption::PartitionBy(p) = &at.partition_options[0] {
        assert_eq!(p.partitions, Some(8));
    } else {
        panic!("Expected PARTITION BY");
    }
}

#[test]
fn test_parse_trailing_semicolon() {
    assert!(parse_sql("CREATE TABLE t (a INT);").is_ok());
    assert!(parse_sql("CREATE TABLE t (a INT); CREATE TABLE u (b INT)").is_err());
}

#[test]
fn test_parse_expression_entry_point() {
    let e = Parser::new().parse_expression("a + b * 2 > 10").unwrap();
    assert_eq!(e.to_string(), "a + b * 2 > 10");
}

#[test]
fn test_syntax_error_reports_furthest_position() {
    let err = parse_sql("CREATE TABLE t (a INT COLUMN_FORMAT blah)").unwrap_err();
    if let DdlError::Syntax {
        position, found, ..
    } = &err
    {
        assert_eq!(found, "'blah'");
        assert_eq!(position.column, 37);
    } else {
        panic!("Expected syntax error, got {:?}", err);
    }
}

#[test]
fn test_syntax_error_at_end_of_input() {
    let err = parse_sql("CREATE TABLE t (a INT").unwrap_err();
    if let DdlError::Syntax {
        position, found, ..
    } = &err
    {
        assert_eq!(found, "end of input");
        assert_eq!(position.offset, 21);
    } else {
        panic!("Expected syntax error, got {:?}", err);
    }
}

#[test]
fn test_custom_keywords() {
    let keywords = Keywords::mysql().extended(["WIDGET"]).unwrap();
    let parser = Parser::with_keywords(&keywords);
    // still usable as a name: only MySQL reserved words are rejected
    let ct = parser.parse_create_table("CREATE TABLE widget (a INT)").unwrap();
    assert_eq!(ct.name.name, "widget");
}
