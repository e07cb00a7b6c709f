/// SQL lexer (tokenizer) using nom.
use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while, take_while1},
    character::complete::{char, digit0, digit1, multispace1, not_line_ending, one_of, satisfy},
    combinator::{cut, eof, opt, peek, recognize, value},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use crate::error::{DdlError, Result};
use crate::sql::keywords::Keywords;

pub use crate::error::Position;

/// Reserved words that are values in their own right.
const OPERAND_KEYWORDS: &[&str] = &[
    "TRUE",
    "FALSE",
    "NULL",
    "CURRENT_TIMESTAMP",
    "LOCALTIME",
    "LOCALTIMESTAMP",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    Keyword,
    Whitespace,
    Identifier,
    Number,
    String,
    Operator,
}

/// A classified slice of the input. `text` is the exact source text,
/// quotes and backticks included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    /// Keyword or unquoted identifier.
    pub fn is_word(&self) -> bool {
        match self.kind {
            TokenKind::Keyword => true,
            TokenKind::Identifier => !self.text.starts_with('`'),
            _ => false,
        }
    }

    /// Whether this token spells `literal`: case-insensitively for words,
    /// exactly for operators.
    pub fn is(&self, literal: &str) -> bool {
        if self.is_word() {
            self.text.eq_ignore_ascii_case(literal)
        } else {
            self.kind == TokenKind::Operator && self.text == literal
        }
    }

    /// Whether an operand can end at this token. A sign directly after one
    /// is a binary operator, not part of a number. Non-reserved keywords
    /// may be column names, so they count as operands, as do the reserved
    /// value words.
    fn ends_operand(&self, keywords: &Keywords) -> bool {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number | TokenKind::String => true,
            TokenKind::Keyword => {
                !keywords.is_reserved(&self.text)
                    || OPERAND_KEYWORDS
                        .iter()
                        .any(|w| self.text.eq_ignore_ascii_case(w))
            }
            TokenKind::Operator => self.text == ")",
            _ => false,
        }
    }
}

/// Tokenize a SQL string with the default MySQL keyword table.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    tokenize_with(input, Keywords::mysql())
}

/// Tokenize a SQL string. Comments and whitespace are dropped.
pub fn tokenize_with(input: &str, keywords: &Keywords) -> Result<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut remaining = input;
    let mut position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    while !remaining.is_empty() {
        let signed = tokens.last().map_or(true, |t| !t.ends_operand(keywords));
        let (rest, kind) = match lex_token(remaining, keywords, signed) {
            Ok(ok) => ok,
            Err(_) => {
                return Err(DdlError::Lexical {
                    position,
                    found: remaining.chars().take(20).collect(),
                });
            }
        };
        let text = &remaining[..remaining.len() - rest.len()];
        if !matches!(kind, TokenKind::Comment | TokenKind::Whitespace) {
            tokens.push(Token {
                kind,
                text: text.to_string(),
                position,
            });
        }
        position = advance(position, text);
        remaining = rest;
    }

    tracing::trace!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

/// The position just past the last character of `input`.
pub fn end_position(input: &str) -> Position {
    let start = Position {
        offset: 0,
        line: 1,
        column: 1,
    };
    advance(start, input)
}

fn advance(mut position: Position, text: &str) -> Position {
    position.offset += text.len();
    for c in text.chars() {
        if c == '\n' {
            position.line += 1;
            position.column = 1;
        } else {
            position.column += 1;
        }
    }
    position
}

fn lex_token<'a>(
    input: &'a str,
    keywords: &Keywords,
    signed: bool,
) -> IResult<&'a str, TokenKind> {
    alt((
        value(TokenKind::Comment, lex_comment),
        |i: &'a str| lex_word(i, keywords),
        value(TokenKind::Whitespace, multispace1),
        value(TokenKind::Identifier, lex_quoted_ident),
        value(TokenKind::Number, |i: &'a str| lex_number(i, signed)),
        value(TokenKind::String, lex_string),
        value(TokenKind::Operator, lex_operator),
    ))(input)
}

fn lex_comment(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(preceded(
            tag("/*"),
            cut(terminated(take_until("*/"), tag("*/"))),
        )),
        recognize(pair(char('#'), not_line_ending)),
        recognize(tuple((
            tag("--"),
            alt((eof, peek(recognize(satisfy(char::is_whitespace))))),
            not_line_ending,
        ))),
    ))(input)
}

/// A whole word, classified as keyword or identifier.
fn lex_word<'a>(input: &'a str, keywords: &Keywords) -> IResult<&'a str, TokenKind> {
    let (rest, word) = recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))(input)?;
    let kind = if keywords.is_keyword(word) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };
    Ok((rest, kind))
}

fn lex_quoted_ident(input: &str) -> IResult<&str, &str> {
    recognize(delimited(char('`'), take_while1(|c: char| c != '`'), char('`')))(input)
}

fn lex_number<'a>(input: &'a str, signed: bool) -> IResult<&'a str, &'a str> {
    recognize(tuple((
        |i: &'a str| lex_sign(i, signed),
        alt((recognize(tuple((digit0, char('.'), digit1))), digit1)),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

fn lex_sign(input: &str, signed: bool) -> IResult<&str, Option<char>> {
    if signed {
        opt(one_of("+-"))(input)
    } else {
        Ok((input, None))
    }
}

fn lex_string(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(delimited(char('\''), take_while(|c: char| c != '\''), char('\''))),
        recognize(delimited(char('"'), take_while(|c: char| c != '"'), char('"'))),
    ))(input)
}

fn lex_operator(input: &str) -> IResult<&str, &str> {
    alt((
        tag("<>"),
        tag("!="),
        tag("<="),
        tag(">="),
        tag("||"),
        recognize(one_of("-+*/%,.()=<>;")),
    ))(input)
}
