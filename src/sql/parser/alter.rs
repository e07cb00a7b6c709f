use super::columns::{column_definition, default_value};
use super::indexes::{enforcement, index_or_key, key_definition};
use super::partition::{partition_definition, partition_options};
use super::*;

/// A single comma-separated ALTER TABLE specification.
enum AlterSpec {
    Option(AlterOption),
    Partition(AlterPartitionOption),
}

pub(super) fn alter_table(input: Input<'_>) -> Match<'_, AlterTable> {
    let (input, _) = sequence((literal("ALTER"), literal("TABLE")))(input)?;
    let (input, name) = table_name(input)?;
    let (input, specs) = separated0(alter_spec, literal(","))(input)?;

    let mut alter = AlterTable {
        name,
        alter_options: Vec::new(),
        partition_options: Vec::new(),
    };
    for spec in specs {
        match spec {
            AlterSpec::Option(o) => alter.alter_options.push(o),
            AlterSpec::Partition(p) => alter.partition_options.push(p),
        }
    }
    Ok((input, alter))
}

fn alter_spec(input: Input<'_>) -> Match<'_, AlterSpec> {
    choice((
        map(alter_option, AlterSpec::Option),
        map(alter_partition_option, AlterSpec::Partition),
    ))(input)
}

fn alter_option(input: Input<'_>) -> Match<'_, AlterOption> {
    choice((
        add,
        drop_option,
        alter,
        modify,
        change,
        rename,
        map(
            setting(literal("ALGORITHM"), algorithm),
            AlterOption::Algorithm,
        ),
        map(setting(literal("LOCK"), lock_mode), AlterOption::Lock),
        convert,
        map(table_option, AlterOption::TableOption),
    ))(input)
}

fn add(input: Input<'_>) -> Match<'_, AlterOption> {
    preceded(
        literal("ADD"),
        choice((map(key_definition, add_definition), add_column)),
    )(input)
}

fn add_definition(definition: CreateDefinition) -> AlterOption {
    match definition {
        CreateDefinition::Column(column) => AlterOption::AddColumn {
            column,
            position: None,
        },
        CreateDefinition::SimpleIndex(d) => AlterOption::AddSimpleIndex(d),
        CreateDefinition::PrimaryKey(d) => AlterOption::AddPrimaryKey(d),
        CreateDefinition::UniqueKey(d) => AlterOption::AddUniqueKey(d),
        CreateDefinition::ForeignKey(d) => AlterOption::AddForeignKey(d),
        CreateDefinition::SpecialIndex(d) => AlterOption::AddSpecialIndex(d),
        CreateDefinition::CheckConstraint(d) => AlterOption::AddCheckConstraint(d),
    }
}

/// `[COLUMN] (col, ...)` or `[COLUMN] col [FIRST | AFTER other]`
fn add_column(input: Input<'_>) -> Match<'_, AlterOption> {
    let (input, _) = optional(literal("COLUMN"))(input)?;
    choice((
        map(
            parenthesized(comma_list(column_definition)),
            AlterOption::AddColumns,
        ),
        map(
            sequence((column_definition, optional(column_position))),
            |(column, position)| AlterOption::AddColumn { column, position },
        ),
    ))(input)
}

fn column_position(input: Input<'_>) -> Match<'_, ColumnPosition> {
    choice((
        value(ColumnPosition::First, literal("FIRST")),
        map(preceded(literal("AFTER"), ident), ColumnPosition::After),
    ))(input)
}

fn check_or_constraint(input: Input<'_>) -> Match<'_, ()> {
    choice((literal("CHECK"), literal("CONSTRAINT")))(input)
}

fn drop_option(input: Input<'_>) -> Match<'_, AlterOption> {
    preceded(
        literal("DROP"),
        choice((
            map(
                preceded(check_or_constraint, ident),
                AlterOption::DropCheckConstraint,
            ),
            value(
                AlterOption::DropPrimaryKey,
                sequence((literal("PRIMARY"), literal("KEY"))),
            ),
            map(
                preceded(sequence((literal("FOREIGN"), literal("KEY"))), ident),
                AlterOption::DropForeignKey,
            ),
            map(preceded(index_or_key, ident), AlterOption::DropIndex),
            map(
                preceded(optional(literal("COLUMN")), ident),
                AlterOption::DropColumn,
            ),
        )),
    )(input)
}

fn alter(input: Input<'_>) -> Match<'_, AlterOption> {
    preceded(
        literal("ALTER"),
        choice((
            map(
                sequence((preceded(check_or_constraint, ident), enforcement)),
                |(name, enforced)| AlterOption::AlterCheckConstraint { name, enforced },
            ),
            map(
                sequence((preceded(literal("INDEX"), ident), visibility)),
                |(name, visible)| AlterOption::AlterIndex { name, visible },
            ),
            map(
                sequence((
                    preceded(optional(literal("COLUMN")), ident),
                    alter_column_action,
                )),
                |(name, action)| AlterOption::AlterColumn { name, action },
            ),
        )),
    )(input)
}

fn alter_column_action(input: Input<'_>) -> Match<'_, AlterColumnAction> {
    choice((
        map(
            preceded(sequence((literal("SET"), literal("DEFAULT"))), default_value),
            AlterColumnAction::SetDefault,
        ),
        value(
            AlterColumnAction::DropDefault,
            sequence((literal("DROP"), literal("DEFAULT"))),
        ),
        value(
            AlterColumnAction::SetVisible(true),
            sequence((literal("SET"), literal("VISIBLE"))),
        ),
        value(
            AlterColumnAction::SetVisible(false),
            sequence((literal("SET"), literal("INVISIBLE"))),
        ),
    ))(input)
}

fn modify(input: Input<'_>) -> Match<'_, AlterOption> {
    let (input, _) = literal("MODIFY")(input)?;
    let (input, _) = optional(literal("COLUMN"))(input)?;
    let (input, column) = column_definition(input)?;
    let (input, position) = optional(column_position)(input)?;
    Ok((input, AlterOption::ModifyColumn { column, position }))
}

fn change(input: Input<'_>) -> Match<'_, AlterOption> {
    let (input, _) = literal("CHANGE")(input)?;
    let (input, _) = optional(literal("COLUMN"))(input)?;
    let (input, old_name) = ident(input)?;
    let (input, column) = column_definition(input)?;
    let (input, position) = optional(column_position)(input)?;
    Ok((
        input,
        AlterOption::ChangeColumn {
            old_name,
            column,
            position,
        },
    ))
}

fn rename(input: Input<'_>) -> Match<'_, AlterOption> {
    preceded(
        literal("RENAME"),
        choice((
            map(
                sequence((
                    preceded(literal("COLUMN"), ident),
                    preceded(literal("TO"), ident),
                )),
                |(from, to)| AlterOption::RenameColumn { from, to },
            ),
            map(
                sequence((
                    preceded(index_or_key, ident),
                    preceded(literal("TO"), ident),
                )),
                |(from, to)| AlterOption::RenameIndex { from, to },
            ),
            map(
                preceded(
                    optional(choice((literal("TO"), literal("AS")))),
                    table_name,
                ),
                AlterOption::RenameTable,
            ),
        )),
    )(input)
}

fn algorithm(input: Input<'_>) -> Match<'_, Algorithm> {
    choice((
        value(Algorithm::Default, literal("DEFAULT")),
        value(Algorithm::Instant, literal("INSTANT")),
        value(Algorithm::Inplace, literal("INPLACE")),
        value(Algorithm::Copy, literal("COPY")),
    ))(input)
}

fn lock_mode(input: Input<'_>) -> Match<'_, LockMode> {
    choice((
        value(LockMode::Default, literal("DEFAULT")),
        value(LockMode::None, literal("NONE")),
        value(LockMode::Shared, literal("SHARED")),
        value(LockMode::Exclusive, literal("EXCLUSIVE")),
    ))(input)
}

/// `CONVERT TO CHARACTER SET name [COLLATE name]`
fn convert(input: Input<'_>) -> Match<'_, AlterOption> {
    let (input, _) = sequence((literal("CONVERT"), literal("TO")))(input)?;
    let (input, charset) = preceded(charset_keyword, name)(input)?;
    let (input, collation) = optional(preceded(literal("COLLATE"), name))(input)?;
    Ok((input, AlterOption::ConvertCharset { charset, collation }))
}

fn alter_partition_option(input: Input<'_>) -> Match<'_, AlterPartitionOption> {
    choice((
        map(
            preceded(
                sequence((literal("PARTITION"), literal("BY"))),
                partition_options,
            ),
            AlterPartitionOption::PartitionBy,
        ),
        map(
            preceded(
                sequence((literal("ADD"), literal("PARTITION"))),
                parenthesized(comma_list(partition_definition)),
            ),
            AlterPartitionOption::AddPartition,
        ),
        map(
            preceded(
                sequence((literal("DROP"), literal("PARTITION"))),
                comma_list(ident),
            ),
            AlterPartitionOption::DropPartition,
        ),
        map(
            sequence((
                partition_operation,
                preceded(literal("PARTITION"), partition_names),
            )),
            |(operation, partitions)| AlterPartitionOption::Maintain {
                operation,
                partitions,
            },
        ),
        map(
            preceded(
                sequence((literal("COALESCE"), literal("PARTITION"))),
                integer,
            ),
            AlterPartitionOption::CoalescePartition,
        ),
        value(
            AlterPartitionOption::RemovePartitioning,
            sequence((literal("REMOVE"), literal("PARTITIONING"))),
        ),
    ))(input)
}

fn partition_operation(input: Input<'_>) -> Match<'_, PartitionOperation> {
    choice((
        value(PartitionOperation::Truncate, literal("TRUNCATE")),
        value(PartitionOperation::Analyze, literal("ANALYZE")),
        value(PartitionOperation::Check, literal("CHECK")),
        value(PartitionOperation::Optimize, literal("OPTIMIZE")),
        value(PartitionOperation::Rebuild, literal("REBUILD")),
        value(PartitionOperation::Repair, literal("REPAIR")),
    ))(input)
}

fn partition_names(input: Input<'_>) -> Match<'_, PartitionNames> {
    choice((
        value(PartitionNames::All, literal("ALL")),
        map(comma_list(ident), PartitionNames::Names),
    ))(input)
}
