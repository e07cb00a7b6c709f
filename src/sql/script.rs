//! Multi-statement scripts, such as a `mysqldump --no-data` schema dump.

use crate::error::Result;
use crate::sql::ast::Statement;
use crate::sql::lexer::{self, TokenKind};
use crate::sql::parser::Parser;

/// Split a script into statements on top-level `;`.
///
/// Semicolons inside strings, backtick identifiers and comments do not
/// split. Pieces are trimmed and the `;` itself is dropped; pieces holding
/// nothing but whitespace and comments are skipped.
pub fn split_statements(sql: &str) -> Result<Vec<String>> {
    let tokens = lexer::tokenize(sql)?;
    let mut statements = Vec::new();
    let mut start = 0;
    let mut has_tokens = false;

    for token in &tokens {
        if token.kind == TokenKind::Operator && token.text == ";" {
            if has_tokens {
                statements.push(sql[start..token.position.offset].trim().to_string());
            }
            start = token.position.offset + 1;
            has_tokens = false;
        } else {
            has_tokens = true;
        }
    }
    if has_tokens {
        statements.push(sql[start..].trim().to_string());
    }

    tracing::debug!(statements = statements.len(), "split script");
    Ok(statements)
}

impl Parser<'_> {
    /// Parse every statement of a script. A failing statement does not stop
    /// the rest; each result is paired with its statement text. Error
    /// positions are relative to that text.
    pub fn parse_script(&self, sql: &str) -> Vec<(String, Result<Statement>)> {
        match split_statements(sql) {
            Ok(pieces) => pieces
                .into_iter()
                .map(|piece| {
                    let result = self.parse(&piece);
                    (piece, result)
                })
                .collect(),
            Err(e) => vec![(sql.trim().to_string(), Err(e))],
        }
    }
}

/// Parse a script with the default MySQL keyword table.
pub fn parse_script(sql: &str) -> Vec<(String, Result<Statement>)> {
    Parser::new().parse_script(sql)
}
