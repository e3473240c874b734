#![allow(dead_code)]

use sqlscope_core::{Finding, Level, Lexer, TokenKind, analyze_sql, format_sql};

pub fn kinds(sql: &str) -> Vec<TokenKind> {
    Lexer::tokenize(sql).into_iter().map(|t| t.kind).collect()
}

/// Canonical token values joined by single spaces.
pub fn values(sql: &str) -> String {
    Lexer::tokenize(sql)
        .iter()
        .map(|t| t.value().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats `sql` and checks that formatting the result changes nothing.
pub fn format(sql: &str) -> String {
    let once = format_sql(sql);
    let twice = format_sql(&once);
    assert_eq!(
        once, twice,
        "Formatting is not idempotent.\n  Input:  {sql}\n  First:  {once:?}\n  Second: {twice:?}"
    );
    once
}

pub fn lines(sql: &str) -> Vec<String> {
    format(sql).lines().map(str::to_string).collect()
}

pub fn findings(sql: &str) -> Vec<Finding> {
    analyze_sql(sql)
}

pub fn count(findings: &[Finding], level: Level) -> usize {
    findings.iter().filter(|f| f.level == level).count()
}

/// True if some finding has `level` and a message containing `needle`
/// (case-insensitive).
pub fn has(findings: &[Finding], level: Level, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    findings
        .iter()
        .any(|f| f.level == level && f.message.to_lowercase().contains(&needle))
}
