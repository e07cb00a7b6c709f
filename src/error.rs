use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Location of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Error, Debug)]
pub enum DdlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("lexical error at {position}: unexpected input '{found}'")]
    Lexical { position: Position, found: String },

    #[error("syntax error at {position}: expected {}, found {found}", .expected.join(" or "))]
    Syntax {
        position: Position,
        expected: Vec<String>,
        found: String,
    },

    #[error("keyword configuration error: {0}")]
    Keywords(String),
}

impl DdlError {
    /// Source position of a lexical or syntax error.
    pub fn position(&self) -> Option<Position> {
        match self {
            DdlError::Lexical { position, .. } | DdlError::Syntax { position, .. } => {
                Some(*position)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DdlError>;
