//! SQL Lexer/Tokenizer
//!
//! A hand-written, total lexer for a Postgres-flavored SQL dialect. Every
//! input, however malformed, produces a finite token sequence.

mod token;
mod tokenizer;

pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
