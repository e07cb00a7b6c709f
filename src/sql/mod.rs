pub mod ast;
pub mod grammar;
pub mod keywords;
pub mod lexer;
pub mod parser;
pub mod script;
