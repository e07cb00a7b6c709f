//! DDL parser: converts a token stream into a syntax tree.
//!
//! Each grammar rule is a function over [`Input`], built from the
//! combinators in [`crate::sql::grammar`]. The order of alternatives inside
//! a `choice` matters: the first one that matches wins, and an alternative
//! that fails more than one token past the choice point ends the parse.

use std::cell::RefCell;

use crate::error::{DdlError, Result};
use crate::sql::ast::*;
use crate::sql::grammar::*;
use crate::sql::keywords::Keywords;
use crate::sql::lexer::{self, Token};

mod alter;
mod columns;
mod expr_and_select;
mod indexes;
mod partition;

/// Parser entry point. Holds the keyword table used to tokenize input.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'k> {
    keywords: &'k Keywords,
}

impl Parser<'static> {
    pub fn new() -> Self {
        Parser {
            keywords: Keywords::mysql(),
        }
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'k> Parser<'k> {
    pub fn with_keywords(keywords: &'k Keywords) -> Self {
        Parser { keywords }
    }

    pub fn keywords(&self) -> &'k Keywords {
        self.keywords
    }

    /// Parse one CREATE TABLE or ALTER TABLE statement. A trailing `;` is
    /// allowed; anything after it is an error.
    pub fn parse(&self, sql: &str) -> Result<Statement> {
        self.run(sql, statement)
    }

    pub fn parse_create_table(&self, sql: &str) -> Result<CreateTable> {
        self.run(sql, create_table)
    }

    pub fn parse_alter_table(&self, sql: &str) -> Result<AlterTable> {
        self.run(sql, alter::alter_table)
    }

    /// Parse a standalone expression, e.g. the body of a CHECK constraint.
    pub fn parse_expression(&self, sql: &str) -> Result<Expression> {
        self.run(sql, expr_and_select::expression)
    }

    fn run<T>(
        &self,
        sql: &str,
        rule: impl for<'t> Fn(Input<'t>) -> Match<'t, T>,
    ) -> Result<T> {
        let span = tracing::debug_span!(target: "myddl::parse", "parse", bytes = sql.len());
        let _guard = span.enter();

        let tokens = lexer::tokenize_with(sql, self.keywords)?;
        let furthest = RefCell::new(None);
        let input = Input::new(&tokens, self.keywords, &furthest);

        let outcome = rule(input).and_then(|(rest, value)| {
            let (rest, _) = end_of_statement(rest)?;
            Ok((rest, value))
        });
        match outcome {
            Ok((_, value)) => {
                tracing::debug!(tokens = tokens.len(), "parsed statement");
                Ok(value)
            }
            Err(failure) => {
                let failure = furthest.into_inner().unwrap_or(failure);
                let err = syntax_error(sql, &tokens, failure);
                tracing::debug!(error = %err, "rejected statement");
                Err(err)
            }
        }
    }
}

/// Parse a single statement with the default MySQL keyword table.
pub fn parse_sql(sql: &str) -> Result<Statement> {
    Parser::new().parse(sql)
}

fn end_of_statement(input: Input<'_>) -> Match<'_, ()> {
    let (input, _) = optional(literal(";"))(input)?;
    if input.is_at_end() {
        Ok((input, ()))
    } else {
        input.fail(Expected::EndOfInput)
    }
}

fn syntax_error(sql: &str, tokens: &[Token], failure: Failure) -> DdlError {
    let (position, found) = match tokens.get(failure.pos) {
        Some(token) => (token.position, format!("'{}'", token.text)),
        None => (lexer::end_position(sql), "end of input".to_string()),
    };
    let mut expected: Vec<String> = Vec::new();
    for e in &failure.expected {
        let e = e.to_string();
        if !expected.contains(&e) {
            expected.push(e);
        }
    }
    DdlError::Syntax {
        position,
        expected,
        found,
    }
}

fn statement(input: Input<'_>) -> Match<'_, Statement> {
    choice((
        map(create_table, Statement::CreateTable),
        map(alter::alter_table, Statement::AlterTable),
    ))(input)
}

// ---------------------------------------------------------------------------
// CREATE TABLE
// ---------------------------------------------------------------------------

fn create_table(input: Input<'_>) -> Match<'_, CreateTable> {
    let (input, _) = literal("CREATE")(input)?;
    let (input, temporary) = flag(literal("TEMPORARY"))(input)?;
    let (input, _) = literal("TABLE")(input)?;
    let (input, if_not_exists) =
        flag(sequence((literal("IF"), literal("NOT"), literal("EXISTS"))))(input)?;
    let (input, name) = table_name(input)?;
    let (input, definitions) =
        parenthesized(separated0(indexes::create_definition, literal(",")))(input)?;
    let (input, table_options) = table_options(input)?;
    let (input, partition_options) = optional(preceded(
        sequence((literal("PARTITION"), literal("BY"))),
        partition::partition_options,
    ))(input)?;

    Ok((
        input,
        CreateTable {
            temporary,
            if_not_exists,
            name,
            definitions,
            table_options,
            partition_options,
        },
    ))
}

/// `[schema "."] name`
pub(super) fn table_name(input: Input<'_>) -> Match<'_, TableName> {
    let (input, first) = ident(input)?;
    let (input, second) = optional(preceded(literal("."), ident))(input)?;
    let table = match second {
        Some(name) => TableName {
            schema: Some(first),
            name,
        },
        None => TableName::new(first),
    };
    Ok((input, table))
}

/// An engine, charset or collation name: bare or quoted.
pub(super) fn name(input: Input<'_>) -> Match<'_, String> {
    choice((ident, string))(input)
}

/// `key ["="] value`
pub(super) fn setting<'t, K, T>(
    key: impl Fn(Input<'t>) -> Match<'t, K>,
    value: impl Fn(Input<'t>) -> Match<'t, T>,
) -> impl Fn(Input<'t>) -> Match<'t, T> {
    preceded(terminated(key, optional(literal("="))), value)
}

/// `CHARACTER SET` or `CHARSET`
pub(super) fn charset_keyword(input: Input<'_>) -> Match<'_, ()> {
    choice((
        value((), sequence((literal("CHARACTER"), literal("SET")))),
        literal("CHARSET"),
    ))(input)
}

pub(super) fn storage_medium(input: Input<'_>) -> Match<'_, StorageMedium> {
    choice((
        value(StorageMedium::Disk, literal("DISK")),
        value(StorageMedium::Memory, literal("MEMORY")),
    ))(input)
}

pub(super) fn visibility(input: Input<'_>) -> Match<'_, bool> {
    choice((
        value(true, literal("VISIBLE")),
        value(false, literal("INVISIBLE")),
    ))(input)
}

/// Table options, optionally separated by commas.
fn table_options(input: Input<'_>) -> Match<'_, Vec<TableOption>> {
    repeat(preceded(optional(literal(",")), table_option))(input)
}

pub(super) fn table_option(input: Input<'_>) -> Match<'_, TableOption> {
    choice((
        choice((
            map(
                setting(literal("AUTOEXTEND_SIZE"), long),
                TableOption::AutoextendSize,
            ),
            map(
                setting(literal("AUTO_INCREMENT"), long),
                TableOption::AutoIncrement,
            ),
            map(
                setting(literal("AVG_ROW_LENGTH"), long),
                TableOption::AvgRowLength,
            ),
            map(
                preceded(optional(literal("DEFAULT")), setting(charset_keyword, name)),
                TableOption::CharacterSet,
            ),
            map(setting(literal("CHECKSUM"), long), TableOption::Checksum),
            map(
                preceded(optional(literal("DEFAULT")), setting(literal("COLLATE"), name)),
                TableOption::Collate,
            ),
            map(setting(literal("COMMENT"), string), TableOption::Comment),
            map(
                setting(literal("COMPRESSION"), string),
                TableOption::Compression,
            ),
            map(
                setting(literal("CONNECTION"), string),
                TableOption::Connection,
            ),
            map(
                setting(sequence((literal("DATA"), literal("DIRECTORY"))), string),
                TableOption::DataDirectory,
            ),
            map(
                setting(sequence((literal("INDEX"), literal("DIRECTORY"))), string),
                TableOption::IndexDirectory,
            ),
            map(
                setting(literal("DELAY_KEY_WRITE"), long),
                TableOption::DelayKeyWrite,
            ),
        )),
        choice((
            map(
                setting(literal("ENCRYPTION"), string),
                TableOption::Encryption,
            ),
            map(setting(literal("ENGINE"), name), TableOption::Engine),
            map(
                setting(literal("ENGINE_ATTRIBUTE"), string),
                TableOption::EngineAttribute,
            ),
            map(
                setting(literal("INSERT_METHOD"), insert_method),
                TableOption::InsertMethod,
            ),
            map(
                setting(literal("SECONDARY_ENGINE_ATTRIBUTE"), string),
                TableOption::SecondaryEngineAttribute,
            ),
            map(
                setting(literal("KEY_BLOCK_SIZE"), long),
                TableOption::KeyBlockSize,
            ),
            map(setting(literal("MAX_ROWS"), long), TableOption::MaxRows),
            map(setting(literal("MIN_ROWS"), long), TableOption::MinRows),
            map(
                setting(literal("PACK_KEYS"), default_or),
                TableOption::PackKeys,
            ),
            map(setting(literal("PASSWORD"), string), TableOption::Password),
            map(
                setting(literal("ROW_FORMAT"), row_format),
                TableOption::RowFormat,
            ),
            map(
                setting(literal("STATS_AUTO_RECALC"), default_or),
                TableOption::StatsAutoRecalc,
            ),
        )),
        choice((
            map(
                setting(literal("STATS_PERSISTENT"), default_or),
                TableOption::StatsPersistent,
            ),
            map(
                setting(literal("STATS_SAMPLE_PAGES"), long),
                TableOption::StatsSamplePages,
            ),
            tablespace_option,
            map(
                setting(
                    literal("UNION"),
                    parenthesized(separated0(ident, literal(","))),
                ),
                TableOption::Union,
            ),
        )),
    ))(input)
}

fn tablespace_option(input: Input<'_>) -> Match<'_, TableOption> {
    let (input, name) = setting(literal("TABLESPACE"), name)(input)?;
    let (input, storage) = optional(preceded(literal("STORAGE"), storage_medium))(input)?;
    Ok((input, TableOption::Tablespace { name, storage }))
}

fn default_or(input: Input<'_>) -> Match<'_, DefaultOr> {
    choice((
        value(DefaultOr::Default, literal("DEFAULT")),
        map(long, DefaultOr::Value),
    ))(input)
}

fn insert_method(input: Input<'_>) -> Match<'_, InsertMethod> {
    choice((
        value(InsertMethod::No, literal("NO")),
        value(InsertMethod::First, literal("FIRST")),
        value(InsertMethod::Last, literal("LAST")),
    ))(input)
}

fn row_format(input: Input<'_>) -> Match<'_, RowFormat> {
    choice((
        value(RowFormat::Default, literal("DEFAULT")),
        value(RowFormat::Dynamic, literal("DYNAMIC")),
        value(RowFormat::Fixed, literal("FIXED")),
        value(RowFormat::Compressed, literal("COMPRESSED")),
        value(RowFormat::Redundant, literal("REDUNDANT")),
        value(RowFormat::Compact, literal("COMPACT")),
    ))(input)
}

#[cfg(test)]
mod tests;
