use super::columns::column_definition;
use super::expr_and_select::expression;
use super::*;

/// One entry of a CREATE TABLE definition list.
pub(super) fn create_definition(input: Input<'_>) -> Match<'_, CreateDefinition> {
    choice((key_definition, map(column_definition, CreateDefinition::Column)))(input)
}

/// Any definition except a column: the forms `ALTER TABLE ... ADD` shares
/// with CREATE TABLE.
pub(super) fn key_definition(input: Input<'_>) -> Match<'_, CreateDefinition> {
    choice((
        constrained_definition,
        map(primary_key, CreateDefinition::PrimaryKey),
        map(unique_key, CreateDefinition::UniqueKey),
        map(foreign_key, CreateDefinition::ForeignKey),
        map(special_index, CreateDefinition::SpecialIndex),
        map(check_constraint, CreateDefinition::CheckConstraint),
        map(simple_index, CreateDefinition::SimpleIndex),
    ))(input)
}

/// `CONSTRAINT [symbol]` followed by a key or check that carries it.
fn constrained_definition(input: Input<'_>) -> Match<'_, CreateDefinition> {
    let (input, constraint) = constraint(input)?;
    let (input, mut definition) = choice((
        map(primary_key, CreateDefinition::PrimaryKey),
        map(unique_key, CreateDefinition::UniqueKey),
        map(foreign_key, CreateDefinition::ForeignKey),
        map(check_body, CreateDefinition::CheckConstraint),
    ))(input)?;
    match &mut definition {
        CreateDefinition::PrimaryKey(d) => d.constraint = Some(constraint),
        CreateDefinition::UniqueKey(d) => d.constraint = Some(constraint),
        CreateDefinition::ForeignKey(d) => d.constraint = Some(constraint),
        CreateDefinition::CheckConstraint(d) => d.constraint = Some(constraint),
        _ => {}
    }
    Ok((input, definition))
}

fn constraint(input: Input<'_>) -> Match<'_, Constraint> {
    let (input, _) = literal("CONSTRAINT")(input)?;
    let (input, name) = optional(ident)(input)?;
    Ok((input, Constraint { name }))
}

pub(super) fn index_or_key(input: Input<'_>) -> Match<'_, ()> {
    choice((literal("INDEX"), literal("KEY")))(input)
}

fn index_type(input: Input<'_>) -> Match<'_, IndexType> {
    preceded(
        literal("USING"),
        choice((
            value(IndexType::BTree, literal("BTREE")),
            value(IndexType::Hash, literal("HASH")),
        )),
    )(input)
}

fn index_option(input: Input<'_>) -> Match<'_, IndexOption> {
    choice((
        map(
            setting(literal("KEY_BLOCK_SIZE"), long),
            IndexOption::KeyBlockSize,
        ),
        map(index_type, IndexOption::IndexType),
        map(
            preceded(sequence((literal("WITH"), literal("PARSER"))), ident),
            IndexOption::WithParser,
        ),
        map(preceded(literal("COMMENT"), string), IndexOption::Comment),
        map(visibility, IndexOption::Visible),
        map(
            setting(literal("ENGINE_ATTRIBUTE"), string),
            IndexOption::EngineAttribute,
        ),
        map(
            setting(literal("SECONDARY_ENGINE_ATTRIBUTE"), string),
            IndexOption::SecondaryEngineAttribute,
        ),
    ))(input)
}

fn index_options(input: Input<'_>) -> Match<'_, Vec<IndexOption>> {
    repeat(index_option)(input)
}

/// `"(" key_part ("," key_part)* ")"`
pub(super) fn key_parts(input: Input<'_>) -> Match<'_, Vec<KeyPart>> {
    parenthesized(comma_list(key_part))(input)
}

/// A column with an optional prefix length, or a parenthesized expression,
/// then an optional sort order.
fn key_part(input: Input<'_>) -> Match<'_, KeyPart> {
    let (input, target) = choice((
        map(
            sequence((ident, optional(parenthesized(integer)))),
            |(name, length)| KeyPartTarget::Column { name, length },
        ),
        map(parenthesized(expression), KeyPartTarget::Expression),
    ))(input)?;
    let (input, order) = optional(choice((
        value(SortOrder::Asc, literal("ASC")),
        value(SortOrder::Desc, literal("DESC")),
    )))(input)?;
    Ok((input, KeyPart { target, order }))
}

fn simple_index(input: Input<'_>) -> Match<'_, SimpleIndexDefinition> {
    let (input, _) = index_or_key(input)?;
    let (input, name) = optional(ident)(input)?;
    let (input, index_type) = optional(index_type)(input)?;
    let (input, key_parts) = key_parts(input)?;
    let (input, options) = index_options(input)?;
    Ok((
        input,
        SimpleIndexDefinition {
            name,
            index_type,
            key_parts,
            options,
        },
    ))
}

fn primary_key(input: Input<'_>) -> Match<'_, PrimaryKeyDefinition> {
    let (input, _) = sequence((literal("PRIMARY"), literal("KEY")))(input)?;
    let (input, index_type) = optional(index_type)(input)?;
    let (input, key_parts) = key_parts(input)?;
    let (input, options) = index_options(input)?;
    Ok((
        input,
        PrimaryKeyDefinition {
            constraint: None,
            index_type,
            key_parts,
            options,
        },
    ))
}

fn unique_key(input: Input<'_>) -> Match<'_, UniqueKeyDefinition> {
    let (input, _) = literal("UNIQUE")(input)?;
    let (input, _) = optional(index_or_key)(input)?;
    let (input, name) = optional(ident)(input)?;
    let (input, index_type) = optional(index_type)(input)?;
    let (input, key_parts) = key_parts(input)?;
    let (input, options) = index_options(input)?;
    Ok((
        input,
        UniqueKeyDefinition {
            constraint: None,
            name,
            index_type,
            key_parts,
            options,
        },
    ))
}

fn foreign_key(input: Input<'_>) -> Match<'_, ForeignKeyDefinition> {
    let (input, _) = sequence((literal("FOREIGN"), literal("KEY")))(input)?;
    let (input, name) = optional(ident)(input)?;
    let (input, columns) = parenthesized(comma_list(ident))(input)?;
    let (input, reference) = reference_definition(input)?;
    Ok((
        input,
        ForeignKeyDefinition {
            constraint: None,
            name,
            columns,
            reference,
        },
    ))
}

fn special_index(input: Input<'_>) -> Match<'_, SpecialIndexDefinition> {
    let (input, kind) = choice((
        value(SpecialIndexKind::Fulltext, literal("FULLTEXT")),
        value(SpecialIndexKind::Spatial, literal("SPATIAL")),
    ))(input)?;
    let (input, _) = optional(index_or_key)(input)?;
    let (input, name) = optional(ident)(input)?;
    let (input, key_parts) = key_parts(input)?;
    let (input, options) = index_options(input)?;
    Ok((
        input,
        SpecialIndexDefinition {
            kind,
            name,
            key_parts,
            options,
        },
    ))
}

/// `[CONSTRAINT [symbol]] CHECK (expr) [[NOT] ENFORCED]`
pub(super) fn check_constraint(input: Input<'_>) -> Match<'_, CheckConstraintDefinition> {
    let (input, constraint) = optional(constraint)(input)?;
    let (input, mut check) = check_body(input)?;
    check.constraint = constraint;
    Ok((input, check))
}

fn check_body(input: Input<'_>) -> Match<'_, CheckConstraintDefinition> {
    let (input, _) = literal("CHECK")(input)?;
    let (input, expression) = parenthesized(expression)(input)?;
    let (input, enforced) = optional(enforcement)(input)?;
    Ok((
        input,
        CheckConstraintDefinition {
            constraint: None,
            expression,
            enforced,
        },
    ))
}

/// `ENFORCED` is `true`, `NOT ENFORCED` is `false`.
pub(super) fn enforcement(input: Input<'_>) -> Match<'_, bool> {
    choice((
        value(true, literal("ENFORCED")),
        value(false, sequence((literal("NOT"), literal("ENFORCED")))),
    ))(input)
}

enum Trigger {
    Delete(ReferentialAction),
    Update(ReferentialAction),
}

/// `REFERENCES table (key_parts) [MATCH ...] [ON DELETE ...] [ON UPDATE ...]`
pub(super) fn reference_definition(input: Input<'_>) -> Match<'_, ReferenceDefinition> {
    let (input, _) = literal("REFERENCES")(input)?;
    let (input, table) = table_name(input)?;
    let (input, key_parts) = key_parts(input)?;
    let (input, match_type) = optional(preceded(
        literal("MATCH"),
        choice((
            value(MatchType::Full, literal("FULL")),
            value(MatchType::Partial, literal("PARTIAL")),
            value(MatchType::Simple, literal("SIMPLE")),
        )),
    ))(input)?;
    let (input, triggers) = repeat(preceded(
        literal("ON"),
        choice((
            map(
                preceded(literal("DELETE"), referential_action),
                Trigger::Delete,
            ),
            map(
                preceded(literal("UPDATE"), referential_action),
                Trigger::Update,
            ),
        )),
    ))(input)?;

    let mut reference = ReferenceDefinition {
        table,
        key_parts,
        match_type,
        on_delete: None,
        on_update: None,
    };
    for trigger in triggers {
        match trigger {
            Trigger::Delete(action) => reference.on_delete = Some(action),
            Trigger::Update(action) => reference.on_update = Some(action),
        }
    }
    Ok((input, reference))
}

fn referential_action(input: Input<'_>) -> Match<'_, ReferentialAction> {
    choice((
        value(ReferentialAction::Restrict, literal("RESTRICT")),
        value(ReferentialAction::Cascade, literal("CASCADE")),
        value(
            ReferentialAction::SetNull,
            sequence((literal("SET"), literal("NULL"))),
        ),
        value(
            ReferentialAction::NoAction,
            sequence((literal("NO"), literal("ACTION"))),
        ),
        value(
            ReferentialAction::SetDefault,
            sequence((literal("SET"), literal("DEFAULT"))),
        ),
    ))(input)
}
