//! # sqlscope-core
//!
//! A lexer, a canonicalizing pretty-printer and a rule-based static analyzer
//! for a Postgres-flavored SQL dialect.
//!
//! This crate provides:
//! - A hand-written lexer that accepts any input and never fails
//! - A single-pass formatter driven by clause keywords and paren depth
//! - An analyzer that reports likely correctness and performance problems
//!
//! No syntax tree is built. Malformed SQL is not an error: it gets a
//! best-effort layout and whatever findings apply.
//!
//! ## Formatting
//!
//! ```rust
//! use sqlscope_core::format_sql;
//!
//! let sql = format_sql("select id, name from users where active and age > 18");
//! assert_eq!(
//!     sql,
//!     "SELECT\n  id,\n  name\nFROM users\nWHERE active\n  AND age > 18\n"
//! );
//! ```
//!
//! ## Analysis
//!
//! ```rust
//! use sqlscope_core::{Level, analyze_sql};
//!
//! let findings = analyze_sql("DELETE FROM sessions");
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].level, Level::Error);
//! ```

pub mod analyzer;
pub mod formatter;
pub mod lexer;

pub use analyzer::{Finding, Level, analyze_sql, analyze_tokens};
pub use formatter::{format_sql, format_tokens};
pub use lexer::{Keyword, Lexer, Token, TokenKind};
