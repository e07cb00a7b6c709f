//! myddl: MySQL DDL parser
//!
//! Parses `CREATE TABLE` and `ALTER TABLE` statements, as found in schema
//! dumps and migrations, into a typed syntax tree:
//! - nom-based tokenizer with MySQL comment styles and backtick identifiers
//! - combinator grammar with one token of lookahead and deepest-error reporting
//! - column, index, constraint, table option and partition definitions
//! - CHECK / generated-column expressions, including subqueries
//! - canonical SQL re-emission through `Display`

pub mod error;
pub mod sql;
pub mod types;

pub use crate::error::{DdlError, Result};
pub use crate::sql::ast::Statement;
pub use crate::sql::parser::{parse_sql, Parser};
pub use crate::sql::script::parse_script;
