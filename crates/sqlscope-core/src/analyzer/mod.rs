//! Rule-based static analysis of SQL text.
//!
//! The analyzer runs a fixed, ordered set of rules over the token stream
//! (and, for a few rules, over the raw text). Every rule is evaluated
//! independently, so several may fire for the same query. Findings come
//! back in rule order and, within a rule, in the order they were found.

mod finding;
mod rules;

use tracing::{debug, trace};

use crate::lexer::{Lexer, Token};

pub use finding::{Finding, Level};

use rules::{Context, RULES};

/// Analyzes SQL text and returns the findings in a stable order.
///
/// Never fails: text that no rule recognizes simply yields no findings.
#[must_use]
pub fn analyze_sql(sql: &str) -> Vec<Finding> {
    let tokens = Lexer::tokenize(sql);
    analyze_tokens(&tokens, sql)
}

/// Analyzes an already lexed token sequence. `sql` must be the text the
/// tokens came from; some rules match against it directly.
#[must_use]
pub fn analyze_tokens(tokens: &[Token], sql: &str) -> Vec<Finding> {
    let ctx = Context::new(tokens, sql);
    let mut findings = Vec::new();

    for rule in RULES {
        let before = findings.len();
        rule.check(&ctx, &mut findings);
        for finding in &findings[before..] {
            trace!(rule = rule.name(), level = %finding.level, "{}", finding.message);
        }
    }

    debug!(tokens = tokens.len(), findings = findings.len(), "analyzed SQL");
    findings
}
