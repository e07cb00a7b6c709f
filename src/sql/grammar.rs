//! Grammar engine: combinators over the token stream.
//!
//! Rules are plain functions `fn(Input) -> Match<T>`. The combinators below
//! (`literal`, `sequence`, `choice`, `optional`, `repeat`, `capture`, ...)
//! build larger rules from smaller ones, in the spirit of nom's `alt` and
//! `tuple` but over tokens instead of characters.
//!
//! Ordered choice uses one token of lookahead. An alternative that fails
//! after advancing more than [`LOOKAHEAD`] tokens past the choice point is
//! *committed*: its failure is final and later alternatives are not tried.
//! `optional` and `repeat` follow the same rule. Alternative order is
//! therefore part of every rule's contract.
//!
//! Every failure is also reported to a per-parse tracker that keeps the
//! furthest one seen, which is what callers get back as the syntax error.

use std::cell::RefCell;
use std::fmt;

use crate::sql::keywords::Keywords;
use crate::sql::lexer::{Token, TokenKind};

/// Tokens an alternative may consume before its failure becomes final.
pub const LOOKAHEAD: usize = 1;

/// What the grammar wanted at a failure point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// A specific keyword or operator.
    Literal(&'static str),
    /// A token class such as "identifier" or "string".
    Rule(&'static str),
    /// The token matched but its value could not be converted.
    Invalid(String),
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Literal(s) => write!(f, "'{}'", s),
            Expected::Rule(s) => write!(f, "{}", s),
            Expected::Invalid(msg) => write!(f, "{}", msg),
            Expected::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A failed match: the token index it happened at and what was expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub pos: usize,
    pub expected: Vec<Expected>,
}

impl Failure {
    fn new(pos: usize, expected: Expected) -> Self {
        Failure {
            pos,
            expected: vec![expected],
        }
    }

    /// Keep the deeper of two failures, merging expectations on a tie.
    fn deeper(self, other: Failure) -> Failure {
        if other.pos > self.pos {
            other
        } else if other.pos < self.pos {
            self
        } else {
            let mut merged = self;
            for e in other.expected {
                if !merged.expected.contains(&e) {
                    merged.expected.push(e);
                }
            }
            merged
        }
    }

    fn is_committed(&self, start: usize) -> bool {
        self.pos > start + LOOKAHEAD
    }
}

/// Cursor over the token stream. Cheap to copy; rules return the advanced
/// copy on success and leave the original untouched on failure.
#[derive(Clone, Copy)]
pub struct Input<'t> {
    tokens: &'t [Token],
    pos: usize,
    keywords: &'t Keywords,
    furthest: &'t RefCell<Option<Failure>>,
    depth: usize,
}

pub type Match<'t, T> = Result<(Input<'t>, T), Failure>;

impl<'t> Input<'t> {
    pub fn new(
        tokens: &'t [Token],
        keywords: &'t Keywords,
        furthest: &'t RefCell<Option<Failure>>,
    ) -> Self {
        Input {
            tokens,
            pos: 0,
            keywords,
            furthest,
            depth: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn keywords(&self) -> &'t Keywords {
        self.keywords
    }

    fn advance(self) -> Input<'t> {
        Input {
            pos: self.pos + 1,
            ..self
        }
    }

    /// Fail at the current token, recording the failure with the tracker.
    pub fn fail<T>(&self, expected: Expected) -> Match<'t, T> {
        let failure = Failure::new(self.pos, expected);
        let mut furthest = self.furthest.borrow_mut();
        *furthest = Some(match furthest.take() {
            Some(prev) => prev.deeper(failure.clone()),
            None => failure.clone(),
        });
        Err(failure)
    }
}

impl fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("pos", &self.pos)
            .field("next", &self.peek().map(|t| t.text.as_str()))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Terminals
// ---------------------------------------------------------------------------

/// Match one token spelling `text`.
pub fn literal<'t>(text: &'static str) -> impl Fn(Input<'t>) -> Match<'t, ()> {
    move |input: Input<'t>| match input.peek() {
        Some(token) if token.is(text) => Ok((input.advance(), ())),
        _ => input.fail(Expected::Literal(text)),
    }
}

/// A name: an identifier (backticks removed) or a keyword MySQL does not
/// reserve.
pub fn ident(input: Input<'_>) -> Match<'_, String> {
    match input.peek() {
        Some(t) if t.kind == TokenKind::Identifier => Ok((input.advance(), unquote_ident(&t.text))),
        Some(t) if t.kind == TokenKind::Keyword && !input.keywords().is_reserved(&t.text) => {
            Ok((input.advance(), t.text.clone()))
        }
        _ => input.fail(Expected::Rule("identifier")),
    }
}

/// A quoted string with its quotes removed.
pub fn string(input: Input<'_>) -> Match<'_, String> {
    match input.peek() {
        Some(t) if t.kind == TokenKind::String => {
            Ok((input.advance(), t.text[1..t.text.len() - 1].to_string()))
        }
        _ => input.fail(Expected::Rule("string")),
    }
}

fn number_text(input: Input<'_>) -> Match<'_, &str> {
    match input.peek() {
        Some(t) if t.kind == TokenKind::Number => Ok((input.advance(), t.text.as_str())),
        _ => input.fail(Expected::Rule("number")),
    }
}

/// A finite floating point number.
pub fn number(input: Input<'_>) -> Match<'_, f64> {
    capture(number_text, |text| match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("finite number (got {})", text)),
    })(input)
}

/// A non-negative integer that fits in `u32`; used for lengths and counts.
pub fn integer(input: Input<'_>) -> Match<'_, u32> {
    capture(number_text, |text| {
        text.parse::<u32>()
            .map_err(|_| format!("unsigned integer (got {})", text))
    })(input)
}

/// A non-negative integer that fits in `u64`; used for table option values.
pub fn long(input: Input<'_>) -> Match<'_, u64> {
    capture(number_text, |text| {
        text.parse::<u64>()
            .map_err(|_| format!("unsigned integer (got {})", text))
    })(input)
}

pub fn boolean(input: Input<'_>) -> Match<'_, bool> {
    choice((value(true, literal("TRUE")), value(false, literal("FALSE"))))(input)
}

fn unquote_ident(text: &str) -> String {
    text.strip_prefix('`')
        .and_then(|s| s.strip_suffix('`'))
        .unwrap_or(text)
        .to_string()
}

// ---------------------------------------------------------------------------
// Combinators
// ---------------------------------------------------------------------------

/// Deepest allowed nesting of expressions and subqueries.
pub const MAX_DEPTH: usize = 32;

/// Run `rule` one nesting level deeper, failing once `MAX_DEPTH` is reached.
pub fn nested<'t, T>(
    rule: impl Fn(Input<'t>) -> Match<'t, T>,
) -> impl Fn(Input<'t>) -> Match<'t, T> {
    move |input: Input<'t>| {
        if input.depth >= MAX_DEPTH {
            return input.fail(Expected::Invalid("nesting too deep".to_string()));
        }
        let (rest, out) = rule(Input {
            depth: input.depth + 1,
            ..input
        })?;
        Ok((
            Input {
                depth: input.depth,
                ..rest
            },
            out,
        ))
    }
}

/// Parse with `rule`, then convert the result. A conversion error is
/// reported at the first token of the capture, like a mismatch.
pub fn capture<'t, T, U>(
    rule: impl Fn(Input<'t>) -> Match<'t, T>,
    convert: impl Fn(T) -> Result<U, String>,
) -> impl Fn(Input<'t>) -> Match<'t, U> {
    move |input: Input<'t>| {
        let (rest, raw) = rule(input)?;
        match convert(raw) {
            Ok(v) => Ok((rest, v)),
            Err(msg) => input.fail(Expected::Invalid(msg)),
        }
    }
}

pub fn map<'t, T, U>(
    rule: impl Fn(Input<'t>) -> Match<'t, T>,
    f: impl Fn(T) -> U,
) -> impl Fn(Input<'t>) -> Match<'t, U> {
    move |input: Input<'t>| {
        let (rest, v) = rule(input)?;
        Ok((rest, f(v)))
    }
}

/// Match `rule` and produce a fixed value.
pub fn value<'t, T: Clone, U>(
    v: T,
    rule: impl Fn(Input<'t>) -> Match<'t, U>,
) -> impl Fn(Input<'t>) -> Match<'t, T> {
    move |input: Input<'t>| {
        let (rest, _) = rule(input)?;
        Ok((rest, v.clone()))
    }
}

pub fn preceded<'t, T, U>(
    first: impl Fn(Input<'t>) -> Match<'t, T>,
    second: impl Fn(Input<'t>) -> Match<'t, U>,
) -> impl Fn(Input<'t>) -> Match<'t, U> {
    move |input: Input<'t>| {
        let (rest, _) = first(input)?;
        second(rest)
    }
}

pub fn terminated<'t, T, U>(
    first: impl Fn(Input<'t>) -> Match<'t, T>,
    second: impl Fn(Input<'t>) -> Match<'t, U>,
) -> impl Fn(Input<'t>) -> Match<'t, T> {
    move |input: Input<'t>| {
        let (rest, v) = first(input)?;
        let (rest, _) = second(rest)?;
        Ok((rest, v))
    }
}

pub fn delimited<'t, A, T, B>(
    open: impl Fn(Input<'t>) -> Match<'t, A>,
    inner: impl Fn(Input<'t>) -> Match<'t, T>,
    close: impl Fn(Input<'t>) -> Match<'t, B>,
) -> impl Fn(Input<'t>) -> Match<'t, T> {
    move |input: Input<'t>| {
        let (rest, _) = open(input)?;
        let (rest, v) = inner(rest)?;
        let (rest, _) = close(rest)?;
        Ok((rest, v))
    }
}

/// `"(" inner ")"`
pub fn parenthesized<'t, T>(
    inner: impl Fn(Input<'t>) -> Match<'t, T>,
) -> impl Fn(Input<'t>) -> Match<'t, T> {
    delimited(literal("("), inner, literal(")"))
}

/// Zero or one. An uncommitted failure yields `None` without consuming.
pub fn optional<'t, T>(
    rule: impl Fn(Input<'t>) -> Match<'t, T>,
) -> impl Fn(Input<'t>) -> Match<'t, Option<T>> {
    move |input: Input<'t>| match rule(input) {
        Ok((rest, v)) => Ok((rest, Some(v))),
        Err(f) if f.is_committed(input.pos) => Err(f),
        Err(_) => Ok((input, None)),
    }
}

/// Whether the optional `rule` matched.
pub fn flag<'t, T>(
    rule: impl Fn(Input<'t>) -> Match<'t, T>,
) -> impl Fn(Input<'t>) -> Match<'t, bool> {
    map(optional(rule), |v| v.is_some())
}

/// Zero or more, greedy. Stops at the first uncommitted failure or at a
/// match that consumed nothing.
pub fn repeat<'t, T>(
    rule: impl Fn(Input<'t>) -> Match<'t, T>,
) -> impl Fn(Input<'t>) -> Match<'t, Vec<T>> {
    move |input: Input<'t>| {
        let mut items = Vec::new();
        let mut cur = input;
        loop {
            match rule(cur) {
                Ok((rest, _)) if rest.pos == cur.pos => break,
                Ok((rest, v)) => {
                    items.push(v);
                    cur = rest;
                }
                Err(f) if f.is_committed(cur.pos) => return Err(f),
                Err(_) => break,
            }
        }
        Ok((cur, items))
    }
}

/// One or more `rule`, separated by `sep`.
pub fn separated1<'t, T, S>(
    rule: impl Fn(Input<'t>) -> Match<'t, T>,
    sep: impl Fn(Input<'t>) -> Match<'t, S>,
) -> impl Fn(Input<'t>) -> Match<'t, Vec<T>> {
    move |input: Input<'t>| {
        let (mut cur, first) = rule(input)?;
        let mut items = vec![first];
        loop {
            let attempt = sep(cur).and_then(|(rest, _)| rule(rest));
            match attempt {
                Ok((rest, v)) => {
                    items.push(v);
                    cur = rest;
                }
                Err(f) if f.is_committed(cur.pos) => return Err(f),
                Err(_) => break,
            }
        }
        Ok((cur, items))
    }
}

/// Zero or more `rule`, separated by `sep`.
pub fn separated0<'t, T, S>(
    rule: impl Fn(Input<'t>) -> Match<'t, T>,
    sep: impl Fn(Input<'t>) -> Match<'t, S>,
) -> impl Fn(Input<'t>) -> Match<'t, Vec<T>> {
    map(optional(separated1(rule, sep)), Option::unwrap_or_default)
}

/// `rule ("," rule)*`
pub fn comma_list<'t, T>(
    rule: impl Fn(Input<'t>) -> Match<'t, T>,
) -> impl Fn(Input<'t>) -> Match<'t, Vec<T>> {
    separated1(rule, literal(","))
}

/// Parts matched in order, collected into a tuple.
pub trait Sequence<'t> {
    type Output;
    fn parse_sequence(&self, input: Input<'t>) -> Match<'t, Self::Output>;
}

/// Alternatives tried in order; see the module docs for commit rules.
pub trait Alternatives<'t> {
    type Output;
    fn parse_choice(&self, input: Input<'t>) -> Match<'t, Self::Output>;
}

pub fn sequence<'t, S: Sequence<'t>>(parts: S) -> impl Fn(Input<'t>) -> Match<'t, S::Output> {
    move |input: Input<'t>| parts.parse_sequence(input)
}

pub fn choice<'t, A: Alternatives<'t>>(alts: A) -> impl Fn(Input<'t>) -> Match<'t, A::Output> {
    move |input: Input<'t>| alts.parse_choice(input)
}

macro_rules! impl_sequence {
    ($(($R:ident, $O:ident, $r:ident, $o:ident)),+) => {
        impl<'t, $($R, $O),+> Sequence<'t> for ($($R,)+)
        where
            $($R: Fn(Input<'t>) -> Match<'t, $O>),+
        {
            type Output = ($($O,)+);

            fn parse_sequence(&self, input: Input<'t>) -> Match<'t, Self::Output> {
                let ($($r,)+) = self;
                $(let (input, $o) = $r(input)?;)+
                Ok((input, ($($o,)+)))
            }
        }
    };
}

macro_rules! impl_alternatives {
    ($(($R:ident, $r:ident)),+) => {
        impl<'t, T, $($R),+> Alternatives<'t> for ($($R,)+)
        where
            $($R: Fn(Input<'t>) -> Match<'t, T>),+
        {
            type Output = T;

            fn parse_choice(&self, input: Input<'t>) -> Match<'t, T> {
                let ($($r,)+) = self;
                let mut deepest = Failure {
                    pos: input.pos,
                    expected: Vec::new(),
                };
                $(
                    match $r(input) {
                        Ok(ok) => return Ok(ok),
                        Err(f) if f.is_committed(input.pos) => return Err(f),
                        Err(f) => deepest = deepest.deeper(f),
                    }
                )+
                Err(deepest)
            }
        }
    };
}

impl_sequence!((R1, O1, r1, o1), (R2, O2, r2, o2));
impl_sequence!((R1, O1, r1, o1), (R2, O2, r2, o2), (R3, O3, r3, o3));
impl_sequence!((R1, O1, r1, o1), (R2, O2, r2, o2), (R3, O3, r3, o3), (R4, O4, r4, o4));
impl_sequence!(
    (R1, O1, r1, o1),
    (R2, O2, r2, o2),
    (R3, O3, r3, o3),
    (R4, O4, r4, o4),
    (R5, O5, r5, o5)
);
impl_sequence!(
    (R1, O1, r1, o1),
    (R2, O2, r2, o2),
    (R3, O3, r3, o3),
    (R4, O4, r4, o4),
    (R5, O5, r5, o5),
    (R6, O6, r6, o6)
);

impl_alternatives!((R1, r1), (R2, r2));
impl_alternatives!((R1, r1), (R2, r2), (R3, r3));
impl_alternatives!((R1, r1), (R2, r2), (R3, r3), (R4, r4));
impl_alternatives!((R1, r1), (R2, r2), (R3, r3), (R4, r4), (R5, r5));
impl_alternatives!((R1, r1), (R2, r2), (R3, r3), (R4, r4), (R5, r5), (R6, r6));
impl_alternatives!((R1, r1), (R2, r2), (R3, r3), (R4, r4), (R5, r5), (R6, r6), (R7, r7));
impl_alternatives!(
    (R1, r1),
    (R2, r2),
    (R3, r3),
    (R4, r4),
    (R5, r5),
    (R6, r6),
    (R7, r7),
    (R8, r8)
);
impl_alternatives!(
    (R1, r1),
    (R2, r2),
    (R3, r3),
    (R4, r4),
    (R5, r5),
    (R6, r6),
    (R7, r7),
    (R8, r8),
    (R9, r9)
);
impl_alternatives!(
    (R1, r1),
    (R2, r2),
    (R3, r3),
    (R4, r4),
    (R5, r5),
    (R6, r6),
    (R7, r7),
    (R8, r8),
    (R9, r9),
    (R10, r10)
);
impl_alternatives!(
    (R1, r1),
    (R2, r2),
    (R3, r3),
    (R4, r4),
    (R5, r5),
    (R6, r6),
    (R7, r7),
    (R8, r8),
    (R9, r9),
    (R10, r10),
    (R11, r11)
);
impl_alternatives!(
    (R1, r1),
    (R2, r2),
    (R3, r3),
    (R4, r4),
    (R5, r5),
    (R6, r6),
    (R7, r7),
    (R8, r8),
    (R9, r9),
    (R10, r10),
    (R11, r11),
    (R12, r12)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::lexer::tokenize;

    /// Run `rule` over `sql`, returning the result, the index the cursor
    /// stopped at, and the furthest recorded failure.
    fn run<T>(
        sql: &str,
        rule: impl for<'t> Fn(Input<'t>) -> Match<'t, T>,
    ) -> (Result<(usize, T), Failure>, Option<Failure>) {
        let tokens = tokenize(sql).unwrap();
        let furthest = RefCell::new(None);
        let input = Input::new(&tokens, Keywords::mysql(), &furthest);
        let result = rule(input).map(|(rest, v)| (rest.pos(), v));
        (result, furthest.into_inner())
    }

    #[test]
    fn test_literal_case_insensitive() {
        let (r, _) = run("create", |i| literal("CREATE")(i));
        assert_eq!(r.unwrap().0, 1);
        let (r, _) = run("(", |i| literal("(")(i));
        assert!(r.is_ok());
    }

    #[test]
    fn test_literal_mismatch_records_failure() {
        let (r, furthest) = run("drop", |i| literal("CREATE")(i));
        let failure = r.unwrap_err();
        assert_eq!(failure.pos, 0);
        assert_eq!(failure.expected, vec![Expected::Literal("CREATE")]);
        assert_eq!(furthest, Some(failure));
    }

    #[test]
    fn test_ident_accepts_unreserved_keywords() {
        let (r, _) = run("comment", ident);
        assert_eq!(r.unwrap().1, "comment");
        let (r, _) = run("`key`", ident);
        assert_eq!(r.unwrap().1, "key");
        let (r, _) = run("key", ident);
        assert!(r.is_err());
    }

    #[test]
    fn test_string_and_number_captures() {
        let (r, _) = run("'foo'", string);
        assert_eq!(r.unwrap().1, "foo");
        let (r, _) = run("\"bar\"", string);
        assert_eq!(r.unwrap().1, "bar");
        let (r, _) = run("-2.5", number);
        assert_eq!(r.unwrap().1, -2.5);
        let (r, _) = run("42", integer);
        assert_eq!(r.unwrap().1, 42);
    }

    #[test]
    fn test_capture_conversion_failure() {
        let (r, furthest) = run("1.5", integer);
        let failure = r.unwrap_err();
        assert_eq!(failure.pos, 0);
        assert!(matches!(failure.expected[0], Expected::Invalid(_)));
        assert!(furthest.is_some());
    }

    #[test]
    fn test_number_must_be_finite() {
        let (r, _) = run("1e400", number);
        let failure = r.unwrap_err();
        assert_eq!(
            failure.expected,
            vec![Expected::Invalid("finite number (got 1e400)".into())]
        );
        let (r, _) = run("-1e308", number);
        assert_eq!(r.unwrap().1, -1e308);
    }

    fn parens(i: Input<'_>) -> Match<'_, usize> {
        choice((
            map(parenthesized(nested(parens)), |d| d + 1),
            value(0, literal("x")),
        ))(i)
    }

    #[test]
    fn test_nested_depth_limit() {
        let at_limit = format!("{}x{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        let (r, _) = run(&at_limit, parens);
        assert_eq!(r.unwrap().1, MAX_DEPTH);

        let too_deep = format!("{}x{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        let (r, furthest) = run(&too_deep, parens);
        assert!(r.is_err());
        assert_eq!(
            furthest.unwrap().expected,
            vec![Expected::Invalid("nesting too deep".into())]
        );
    }

    #[test]
    fn test_nested_depth_is_restored_after_each_rule() {
        let siblings = "(x)".repeat(MAX_DEPTH * 2);
        let (r, _) = run(&siblings, |i| repeat(parens)(i));
        assert_eq!(r.unwrap().1, vec![1; MAX_DEPTH * 2]);
    }

    fn not_null(i: Input<'_>) -> Match<'_, ((), ())> {
        sequence((literal("NOT"), literal("NULL")))(i)
    }

    #[test]
    fn test_sequence_all_or_nothing() {
        let (r, _) = run("NOT NULL", not_null);
        assert_eq!(r.unwrap().0, 2);
        let (r, _) = run("NOT FOO", not_null);
        assert_eq!(r.unwrap_err().pos, 1);
    }

    fn key_kind(i: Input<'_>) -> Match<'_, u8> {
        choice((
            value(1, literal("KEY")),
            value(2, sequence((literal("PRIMARY"), literal("KEY")))),
            value(3, literal("PRIMARY")),
        ))(i)
    }

    #[test]
    fn test_choice_first_match_wins() {
        assert_eq!(run("KEY", key_kind).0.unwrap().1, 1);
        assert_eq!(run("PRIMARY KEY", key_kind).0.unwrap().1, 2);
        // second alternative consumed one token: within lookahead, so the
        // third is still tried
        assert_eq!(run("PRIMARY", key_kind).0.unwrap(), (1, 3));
    }

    #[test]
    fn test_choice_commits_beyond_lookahead() {
        fn rule(i: Input<'_>) -> Match<'_, u8> {
            choice((
                value(1, sequence((literal("A"), literal("B"), literal("C")))),
                value(2, sequence((literal("A"), literal("B")))),
            ))(i)
        }
        // first alternative reached C's slot (two tokens in) before failing
        let failure = run("A B D", rule).0.unwrap_err();
        assert_eq!(failure.pos, 2);
        assert_eq!(failure.expected, vec![Expected::Literal("C")]);
    }

    #[test]
    fn test_choice_reports_deepest_failure() {
        fn rule(i: Input<'_>) -> Match<'_, u8> {
            choice((
                value(1, sequence((literal("A"), literal("B")))),
                value(2, literal("C")),
            ))(i)
        }
        let failure = run("A X", rule).0.unwrap_err();
        assert_eq!(failure.pos, 1);
        assert_eq!(failure.expected, vec![Expected::Literal("B")]);
    }

    #[test]
    fn test_choice_merges_expectations_at_same_position() {
        let failure = run("C", |i| choice((literal("A"), literal("B")))(i))
            .0
            .unwrap_err();
        assert_eq!(
            failure.expected,
            vec![Expected::Literal("A"), Expected::Literal("B")]
        );
    }

    #[test]
    fn test_optional() {
        fn rule(i: Input<'_>) -> Match<'_, Option<((), ())>> {
            optional(not_null)(i)
        }
        assert_eq!(run("NOT NULL", rule).0.unwrap(), (2, Some(((), ()))));
        assert_eq!(run("NULL", rule).0.unwrap(), (0, None));
        // one token in is still within lookahead
        assert_eq!(run("NOT FOO", rule).0.unwrap(), (0, None));
    }

    #[test]
    fn test_optional_propagates_committed_failure() {
        let (r, _) = run("A B X", |i| {
            optional(sequence((literal("A"), literal("B"), literal("C"))))(i)
        });
        assert!(r.is_err());
    }

    #[test]
    fn test_repeat_greedy() {
        fn rule(i: Input<'_>) -> Match<'_, Vec<String>> {
            repeat(ident)(i)
        }
        let (pos, names) = run("a b c (", rule).0.unwrap();
        assert_eq!(pos, 3);
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(run("(", rule).0.unwrap(), (0, Vec::new()));
    }

    #[test]
    fn test_separated_leaves_dangling_separator() {
        let (r, furthest) = run("a, b, )", |i| comma_list(ident)(i));
        let (pos, names) = r.unwrap();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(pos, 3);
        let furthest = furthest.unwrap();
        assert_eq!(furthest.pos, 4);
        assert_eq!(furthest.expected, vec![Expected::Rule("identifier")]);
    }

    #[test]
    fn test_separated0_empty() {
        let (r, _) = run(")", |i| separated0(ident, literal(","))(i));
        assert_eq!(r.unwrap(), (0, Vec::new()));
    }
}
