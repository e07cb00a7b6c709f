//! Expression and SELECT syntax tree.
//!
//! The nesting mirrors operator precedence: OR binds loosest, then AND, then
//! NOT/EXISTS, comparison predicates, `||`, `+`/`-`, and `*`/`/`/`%`.

use serde::Serialize;

/// `OrCondition ("OR" OrCondition)*`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expression {
    pub or: Vec<OrCondition>,
}

/// `Condition ("AND" Condition)*`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrCondition {
    pub and: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Condition {
    Operand(ConditionOperand),
    Not(Box<Condition>),
    Exists(Box<Select>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionOperand {
    pub operand: Operand,
    pub predicate: Option<Predicate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Predicate {
    Compare { op: CompareOp, rhs: CompareRhs },
    Is { not: bool, rhs: IsRhs },
    Between { not: bool, low: Operand, high: Operand },
    In { not: bool, list: InList },
    Like { not: bool, pattern: Operand },
}

/// `<>` and `!=` are the same operator and both parse to `NotEq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompareOp {
    NotEq,
    LtEq,
    GtEq,
    Eq,
    Lt,
    Gt,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CompareRhs {
    Operand(Operand),
    Quantified {
        quantifier: Quantifier,
        select: Box<Select>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Quantifier {
    All,
    Any,
    Some,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum IsRhs {
    Null,
    DistinctFrom(Operand),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InList {
    Select(Box<Select>),
    Expressions(Vec<Expression>),
}

/// `Summand ("||" Summand)*`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operand {
    pub summands: Vec<Summand>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summand {
    pub first: Factor,
    pub rest: Vec<(AddOp, Factor)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddOp {
    Add,
    Sub,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Factor {
    pub first: Term,
    pub rest: Vec<(MulOp, Term)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MulOp {
    Mul,
    Div,
    Mod,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Term {
    Select(Box<Select>),
    Value(Value),
    SymbolRef(SymbolRef),
    SubExpression(Box<Expression>),
}

/// A column or function reference: `a`, `t.a`, `now()`, `concat(a, b)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolRef {
    pub path: Vec<String>,
    /// `None` for a plain reference, `Some` (possibly empty) for a call.
    pub arguments: Option<Vec<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Wildcard,
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
    Array(Vec<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Select {
    pub top: Option<Box<Term>>,
    pub quantifier: Option<SelectQuantifier>,
    pub projection: Projection,
    pub from: Vec<TableExpression>,
    pub where_clause: Option<Expression>,
    pub limit: Option<Expression>,
    pub offset: Option<Expression>,
    pub group_by: Option<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectQuantifier {
    Distinct,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Projection {
    Wildcard,
    Expressions(Vec<AliasedExpression>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AliasedExpression {
    pub expression: Expression,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableExpression {
    pub source: TableSource,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TableSource {
    Values(Vec<Expression>),
    Subquery(Box<Select>),
    Table(Vec<String>),
}

impl Expression {
    /// The expression as a single term when it has no operators at all.
    pub fn as_term(&self) -> Option<&Term> {
        match self.or.as_slice() {
            [or] => match or.and.as_slice() {
                [Condition::Operand(ConditionOperand {
                    operand,
                    predicate: None,
                })] => operand.as_term(),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Operand {
    pub fn as_term(&self) -> Option<&Term> {
        match self.summands.as_slice() {
            [Summand { first, rest }] if rest.is_empty() && first.rest.is_empty() => {
                Some(&first.first)
            }
            _ => None,
        }
    }
}

impl From<Term> for Operand {
    fn from(term: Term) -> Self {
        Operand {
            summands: vec![Summand {
                first: Factor {
                    first: term,
                    rest: Vec::new(),
                },
                rest: Vec::new(),
            }],
        }
    }
}

impl From<Operand> for Expression {
    fn from(operand: Operand) -> Self {
        Expression {
            or: vec![OrCondition {
                and: vec![Condition::Operand(ConditionOperand {
                    operand,
                    predicate: None,
                })],
            }],
        }
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Expression::from(Operand::from(term))
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Expression::from(Term::Value(value))
    }
}
