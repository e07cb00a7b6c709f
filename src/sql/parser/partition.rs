use super::expr_and_select::expression;
use super::*;

/// Everything after `PARTITION BY`.
pub(super) fn partition_options(input: Input<'_>) -> Match<'_, PartitionOptions> {
    let (input, kind) = partition_kind(input)?;
    let (input, partitions) = optional(preceded(literal("PARTITIONS"), integer))(input)?;
    let (input, subpartition_by) = optional(preceded(
        sequence((literal("SUBPARTITION"), literal("BY"))),
        subpartition_kind,
    ))(input)?;
    let (input, subpartitions) = optional(preceded(literal("SUBPARTITIONS"), integer))(input)?;
    let (input, definitions) =
        optional(parenthesized(comma_list(partition_definition)))(input)?;
    Ok((
        input,
        PartitionOptions {
            kind,
            partitions,
            subpartition_by,
            subpartitions,
            definitions: definitions.unwrap_or_default(),
        },
    ))
}

fn partition_kind(input: Input<'_>) -> Match<'_, PartitionKind> {
    choice((
        map(hash_partition, PartitionKind::Hash),
        map(key_partition, PartitionKind::Key),
        map(preceded(literal("RANGE"), partition_by), PartitionKind::Range),
        map(preceded(literal("LIST"), partition_by), PartitionKind::List),
    ))(input)
}

fn subpartition_kind(input: Input<'_>) -> Match<'_, SubpartitionKind> {
    choice((
        map(hash_partition, SubpartitionKind::Hash),
        map(key_partition, SubpartitionKind::Key),
    ))(input)
}

/// `[LINEAR] HASH (expr)`
fn hash_partition(input: Input<'_>) -> Match<'_, HashPartition> {
    let (input, linear) = flag(literal("LINEAR"))(input)?;
    let (input, _) = literal("HASH")(input)?;
    let (input, expression) = parenthesized(expression)(input)?;
    Ok((input, HashPartition { linear, expression }))
}

/// `[LINEAR] KEY [ALGORITHM = n] (columns)`
fn key_partition(input: Input<'_>) -> Match<'_, KeyPartition> {
    let (input, linear) = flag(literal("LINEAR"))(input)?;
    let (input, _) = literal("KEY")(input)?;
    let (input, algorithm) = optional(setting(literal("ALGORITHM"), integer))(input)?;
    let (input, columns) = parenthesized(separated0(ident, literal(",")))(input)?;
    Ok((
        input,
        KeyPartition {
            linear,
            algorithm,
            columns,
        },
    ))
}

/// `(expr)` or `COLUMNS (col, ...)`
fn partition_by(input: Input<'_>) -> Match<'_, PartitionBy> {
    choice((
        map(parenthesized(expression), PartitionBy::Expression),
        map(
            preceded(literal("COLUMNS"), parenthesized(comma_list(ident))),
            PartitionBy::Columns,
        ),
    ))(input)
}

pub(super) fn partition_definition(input: Input<'_>) -> Match<'_, PartitionDefinition> {
    let (input, _) = literal("PARTITION")(input)?;
    let (input, name) = ident(input)?;
    let (input, values) = optional(partition_values)(input)?;
    let (input, options) = repeat(partition_definition_option)(input)?;
    Ok((
        input,
        PartitionDefinition {
            name,
            values,
            options,
        },
    ))
}

fn partition_values(input: Input<'_>) -> Match<'_, PartitionValues> {
    preceded(
        literal("VALUES"),
        choice((
            map(
                preceded(sequence((literal("LESS"), literal("THAN"))), less_than),
                PartitionValues::LessThan,
            ),
            map(
                preceded(literal("IN"), parenthesized(comma_list(expression))),
                PartitionValues::In,
            ),
        )),
    )(input)
}

/// `MAXVALUE` or a parenthesized list. A list holding one expression is
/// the plain RANGE form; anything else is RANGE COLUMNS.
fn less_than(input: Input<'_>) -> Match<'_, LessThan> {
    choice((
        value(LessThan::MaxValue, literal("MAXVALUE")),
        map(
            parenthesized(comma_list(partition_value)),
            |mut values: Vec<PartitionValue>| {
                if values.len() == 1 {
                    if let Some(PartitionValue::Expression(e)) = values.pop() {
                        return LessThan::Expression(e);
                    }
                    values = vec![PartitionValue::MaxValue];
                }
                LessThan::Values(values)
            },
        ),
    ))(input)
}

fn partition_value(input: Input<'_>) -> Match<'_, PartitionValue> {
    choice((
        value(PartitionValue::MaxValue, literal("MAXVALUE")),
        map(expression, PartitionValue::Expression),
    ))(input)
}

fn partition_definition_option(input: Input<'_>) -> Match<'_, PartitionDefinitionOption> {
    choice((
        map(
            preceded(optional(literal("STORAGE")), setting(literal("ENGINE"), name)),
            PartitionDefinitionOption::Engine,
        ),
        map(
            setting(literal("COMMENT"), string),
            PartitionDefinitionOption::Comment,
        ),
        map(
            setting(sequence((literal("DATA"), literal("DIRECTORY"))), string),
            PartitionDefinitionOption::DataDirectory,
        ),
        map(
            setting(sequence((literal("INDEX"), literal("DIRECTORY"))), string),
            PartitionDefinitionOption::IndexDirectory,
        ),
        map(
            setting(literal("MAX_ROWS"), long),
            PartitionDefinitionOption::MaxRows,
        ),
        map(
            setting(literal("MIN_ROWS"), long),
            PartitionDefinitionOption::MinRows,
        ),
        map(
            setting(literal("TABLESPACE"), name),
            PartitionDefinitionOption::Tablespace,
        ),
    ))(input)
}
