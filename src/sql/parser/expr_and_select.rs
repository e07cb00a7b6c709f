use super::*;

/// `or_condition ("OR" or_condition)*`
pub(super) fn expression(input: Input<'_>) -> Match<'_, Expression> {
    nested(map(separated1(or_condition, literal("OR")), |or| Expression { or }))(input)
}

fn or_condition(input: Input<'_>) -> Match<'_, OrCondition> {
    map(separated1(condition, literal("AND")), |and| OrCondition {
        and,
    })(input)
}

fn condition(input: Input<'_>) -> Match<'_, Condition> {
    choice((
        map(preceded(literal("NOT"), nested(condition)), |c| {
            Condition::Not(Box::new(c))
        }),
        map(preceded(literal("EXISTS"), parenthesized(select)), |s| {
            Condition::Exists(Box::new(s))
        }),
        map(condition_operand, Condition::Operand),
    ))(input)
}

fn condition_operand(input: Input<'_>) -> Match<'_, ConditionOperand> {
    let (input, operand) = operand(input)?;
    let (input, predicate) = optional(predicate)(input)?;
    Ok((input, ConditionOperand { operand, predicate }))
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn predicate(input: Input<'_>) -> Match<'_, Predicate> {
    choice((
        map(sequence((compare_op, compare_rhs)), |(op, rhs)| {
            Predicate::Compare { op, rhs }
        }),
        map(
            preceded(literal("IS"), sequence((flag(literal("NOT")), is_rhs))),
            |(not, rhs)| Predicate::Is { not, rhs },
        ),
        map(preceded(literal("NOT"), negatable_predicate), negate),
        negatable_predicate,
    ))(input)
}

fn compare_op(input: Input<'_>) -> Match<'_, CompareOp> {
    choice((
        value(CompareOp::NotEq, literal("<>")),
        value(CompareOp::LtEq, literal("<=")),
        value(CompareOp::GtEq, literal(">=")),
        value(CompareOp::Eq, literal("=")),
        value(CompareOp::Lt, literal("<")),
        value(CompareOp::Gt, literal(">")),
        value(CompareOp::NotEq, literal("!=")),
    ))(input)
}

fn compare_rhs(input: Input<'_>) -> Match<'_, CompareRhs> {
    choice((
        map(
            sequence((quantifier, parenthesized(select))),
            |(quantifier, select)| CompareRhs::Quantified {
                quantifier,
                select: Box::new(select),
            },
        ),
        map(operand, CompareRhs::Operand),
    ))(input)
}

fn quantifier(input: Input<'_>) -> Match<'_, Quantifier> {
    choice((
        value(Quantifier::All, literal("ALL")),
        value(Quantifier::Any, literal("ANY")),
        value(Quantifier::Some, literal("SOME")),
    ))(input)
}

fn is_rhs(input: Input<'_>) -> Match<'_, IsRhs> {
    choice((
        value(IsRhs::Null, literal("NULL")),
        map(
            preceded(sequence((literal("DISTINCT"), literal("FROM"))), operand),
            IsRhs::DistinctFrom,
        ),
    ))(input)
}

/// BETWEEN, IN and LIKE, which accept a leading NOT.
fn negatable_predicate(input: Input<'_>) -> Match<'_, Predicate> {
    choice((
        map(
            preceded(
                literal("BETWEEN"),
                sequence((operand, preceded(literal("AND"), operand))),
            ),
            |(low, high)| Predicate::Between {
                not: false,
                low,
                high,
            },
        ),
        map(
            preceded(literal("IN"), parenthesized(in_list)),
            |list| Predicate::In { not: false, list },
        ),
        map(preceded(literal("LIKE"), operand), |pattern| {
            Predicate::Like {
                not: false,
                pattern,
            }
        }),
    ))(input)
}

fn negate(predicate: Predicate) -> Predicate {
    match predicate {
        Predicate::Between { low, high, .. } => Predicate::Between {
            not: true,
            low,
            high,
        },
        Predicate::In { list, .. } => Predicate::In { not: true, list },
        Predicate::Like { pattern, .. } => Predicate::Like { not: true, pattern },
        other => other,
    }
}

fn in_list(input: Input<'_>) -> Match<'_, InList> {
    choice((
        map(select, |s| InList::Select(Box::new(s))),
        map(comma_list(expression), InList::Expressions),
    ))(input)
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

/// `summand ("||" summand)*`
fn operand(input: Input<'_>) -> Match<'_, Operand> {
    map(separated1(summand, literal("||")), |summands| Operand {
        summands,
    })(input)
}

fn summand(input: Input<'_>) -> Match<'_, Summand> {
    let (input, first) = factor(input)?;
    let (input, rest) = repeat(sequence((
        choice((
            value(AddOp::Add, literal("+")),
            value(AddOp::Sub, literal("-")),
        )),
        factor,
    )))(input)?;
    Ok((input, Summand { first, rest }))
}

fn factor(input: Input<'_>) -> Match<'_, Factor> {
    let (input, first) = term(input)?;
    let (input, rest) = repeat(sequence((
        choice((
            value(MulOp::Mul, literal("*")),
            value(MulOp::Div, literal("/")),
            value(MulOp::Mod, literal("%")),
        )),
        term,
    )))(input)?;
    Ok((input, Factor { first, rest }))
}

fn term(input: Input<'_>) -> Match<'_, Term> {
    choice((
        map(select, |s| Term::Select(Box::new(s))),
        map(scalar_value, Term::Value),
        map(symbol_ref, Term::SymbolRef),
        parenthesized_term,
    ))(input)
}

fn scalar_value(input: Input<'_>) -> Match<'_, Value> {
    choice((
        value(Value::Wildcard, literal("*")),
        map(number, Value::Number),
        map(string, Value::String),
        map(boolean, Value::Boolean),
        value(Value::Null, literal("NULL")),
    ))(input)
}

/// `(e)` is a sub-expression; `(a, b, ...)` is an array value.
fn parenthesized_term(input: Input<'_>) -> Match<'_, Term> {
    map(
        parenthesized(comma_list(expression)),
        |mut items: Vec<Expression>| {
            if items.len() == 1 {
                Term::SubExpression(Box::new(items.remove(0)))
            } else {
                Term::Value(Value::Array(items))
            }
        },
    )(input)
}

/// `name ("." name)* ["(" [expression ("," expression)*] ")"]`
fn symbol_ref(input: Input<'_>) -> Match<'_, SymbolRef> {
    let (input, head) = choice((ident, time_function_name))(input)?;
    let (input, rest) = repeat(preceded(literal("."), ident))(input)?;
    let (input, arguments) =
        optional(parenthesized(separated0(expression, literal(","))))(input)?;

    let mut path = Vec::with_capacity(rest.len() + 1);
    path.push(head);
    path.extend(rest);
    Ok((input, SymbolRef { path, arguments }))
}

/// Time functions MySQL reserves, so `ident` alone would reject them.
fn time_function_name(input: Input<'_>) -> Match<'_, String> {
    choice((
        value("CURRENT_TIMESTAMP".to_string(), literal("CURRENT_TIMESTAMP")),
        value("LOCALTIME".to_string(), literal("LOCALTIME")),
        value("LOCALTIMESTAMP".to_string(), literal("LOCALTIMESTAMP")),
        value("NOW".to_string(), literal("NOW")),
    ))(input)
}

// ---------------------------------------------------------------------------
// SELECT
// ---------------------------------------------------------------------------

pub(super) fn select(input: Input<'_>) -> Match<'_, Select> {
    let (input, _) = literal("SELECT")(input)?;
    nested(select_body)(input)
}

fn select_body(input: Input<'_>) -> Match<'_, Select> {
    let (input, top) = optional(preceded(literal("TOP"), term))(input)?;
    let (input, quantifier) = optional(choice((
        value(SelectQuantifier::Distinct, literal("DISTINCT")),
        value(SelectQuantifier::All, literal("ALL")),
    )))(input)?;
    let (input, projection) = choice((
        value(Projection::Wildcard, literal("*")),
        map(comma_list(aliased_expression), Projection::Expressions),
    ))(input)?;
    let (input, _) = literal("FROM")(input)?;
    let (input, from) = comma_list(table_expression)(input)?;
    let (input, where_clause) = optional(preceded(literal("WHERE"), expression))(input)?;
    let (input, limit) = optional(preceded(literal("LIMIT"), expression))(input)?;
    let (input, offset) = optional(preceded(literal("OFFSET"), expression))(input)?;
    let (input, group_by) = optional(preceded(
        sequence((literal("GROUP"), literal("BY"))),
        expression,
    ))(input)?;

    Ok((
        input,
        Select {
            top: top.map(Box::new),
            quantifier,
            projection,
            from,
            where_clause,
            limit,
            offset,
            group_by,
        },
    ))
}

fn aliased_expression(input: Input<'_>) -> Match<'_, AliasedExpression> {
    let (input, expression) = expression(input)?;
    let (input, alias) = optional(preceded(literal("AS"), ident))(input)?;
    Ok((input, AliasedExpression { expression, alias }))
}

fn table_expression(input: Input<'_>) -> Match<'_, TableExpression> {
    let (input, source) = choice((
        map(
            preceded(literal("VALUES"), parenthesized(comma_list(expression))),
            TableSource::Values,
        ),
        map(parenthesized(select), |s| TableSource::Subquery(Box::new(s))),
        map(separated1(ident, literal(".")), TableSource::Table),
    ))(input)?;
    let (input, alias) = optional(preceded(literal("AS"), ident))(input)?;
    Ok((input, TableExpression { source, alias }))
}
