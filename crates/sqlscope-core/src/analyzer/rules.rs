//! The analyzer rule set.
//!
//! Each rule looks at the comment-free token stream, the raw SQL text, or
//! both, and appends zero or more findings. Rules never fail.

use std::sync::LazyLock;

use regex::Regex;

use super::Finding;
use crate::lexer::{Keyword, Token, TokenKind};

/// Offsets above this value are reported as deep pagination.
const OFFSET_THRESHOLD: u64 = 1000;

/// Join counts at or above this value are reported.
const JOIN_THRESHOLD: usize = 5;

static LEADING_WILDCARD_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bI?LIKE\s+'%").expect("valid LIKE pattern"));

static NOT_IN_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bNOT\s+IN\s*\(").expect("valid NOT IN pattern"));

static NOW_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bnow\s*\(\s*\)").expect("valid now() pattern"));

static COALESCE_AFTER_WHERE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bWHERE\b.*\bCOALESCE\b").expect("valid COALESCE pattern")
});

/// Input shared by all rules for one analysis.
pub(crate) struct Context<'a> {
    /// Tokens with comments removed.
    pub code: Vec<&'a Token>,
    /// The original SQL text.
    pub raw: &'a str,
}

impl<'a> Context<'a> {
    pub fn new(tokens: &'a [Token], raw: &'a str) -> Self {
        Self {
            code: tokens.iter().filter(|t| !t.is_comment()).collect(),
            raw,
        }
    }

    fn has_keyword(&self, keyword: Keyword) -> bool {
        self.code.iter().any(|t| t.is(keyword))
    }

    /// Pairs of adjacent code tokens.
    fn pairs(&self) -> impl Iterator<Item = (&'a Token, &'a Token)> + '_ {
        self.code.windows(2).map(|w| (w[0], w[1]))
    }

    /// Code tokens grouped by `;`-terminated statement.
    fn statements(&self) -> impl Iterator<Item = &[&'a Token]> {
        self.code.split(|t| t.is_symbol(";"))
    }
}

/// A single analysis rule.
pub(crate) trait Rule: Send + Sync {
    /// Short, stable rule name used in logs.
    fn name(&self) -> &'static str;

    /// Appends any findings for `ctx` to `findings`.
    fn check(&self, ctx: &Context<'_>, findings: &mut Vec<Finding>);
}

/// All rules, in evaluation order.
pub(crate) static RULES: &[&dyn Rule] = &[
    &WildcardProjection,
    &UnboundedWrite,
    &LeadingWildcardLike,
    &NotInList,
    &UnboundedSort,
    &DeepOffset,
    &ManyJoins,
    &NowCall,
    &CoalesceInWhere,
];

/// `SELECT *` and `SELECT DISTINCT *`.
struct WildcardProjection;

impl Rule for WildcardProjection {
    fn name(&self) -> &'static str {
        "wildcard-projection"
    }

    fn check(&self, ctx: &Context<'_>, findings: &mut Vec<Finding>) {
        for (i, token) in ctx.code.iter().enumerate() {
            if !token.is(Keyword::Select) {
                continue;
            }
            let mut rest = ctx.code[i + 1..].iter();
            let mut next = rest.next();
            if next.is_some_and(|t| t.is(Keyword::Distinct)) {
                next = rest.next();
            }
            if next.is_some_and(|t| t.is_symbol("*")) {
                findings.push(Finding::warn(
                    "SELECT * is a wildcard projection: it fetches every column and breaks \
                     when the table changes; list the columns you need",
                ));
            }
        }
    }
}

/// Top-level `UPDATE` / `DELETE` without a `WHERE` clause.
struct UnboundedWrite;

impl UnboundedWrite {
    /// Tokens that put `UPDATE`/`DELETE` in a non-statement position, as in
    /// `FOR UPDATE`, `ON DELETE CASCADE`, `AFTER INSERT OR UPDATE ON t` or
    /// `GRANT SELECT, UPDATE ON t`.
    fn is_qualifier(token: &Token) -> bool {
        match token.kind {
            TokenKind::Keyword(kw) => {
                matches!(kw, Keyword::Do | Keyword::For | Keyword::On | Keyword::Or)
            }
            TokenKind::Identifier => ["AFTER", "BEFORE", "OF", "GRANT", "REVOKE"]
                .iter()
                .any(|word| token.text.eq_ignore_ascii_case(word)),
            TokenKind::Symbol => token.text == ",",
            _ => false,
        }
    }

    /// Returns the statement kind if `statement` writes without a `WHERE`.
    fn unbounded(statement: &[&Token]) -> Option<Keyword> {
        let mut depth = 0usize;
        let mut prev: Option<&Token> = None;
        for (i, token) in statement.iter().enumerate() {
            if token.is_symbol("(") {
                depth += 1;
            } else if token.is_symbol(")") {
                depth = depth.saturating_sub(1);
            } else if depth == 0 {
                if let Some(kw @ (Keyword::Update | Keyword::Delete)) = token.as_keyword() {
                    if !prev.is_some_and(Self::is_qualifier) {
                        let has_where = statement[i + 1..].iter().any(|t| t.is(Keyword::Where));
                        return (!has_where).then_some(kw);
                    }
                }
            }
            prev = Some(*token);
        }
        None
    }
}

impl Rule for UnboundedWrite {
    fn name(&self) -> &'static str {
        "unbounded-write"
    }

    fn check(&self, ctx: &Context<'_>, findings: &mut Vec<Finding>) {
        for statement in ctx.statements() {
            match Self::unbounded(statement) {
                Some(Keyword::Update) => findings.push(Finding::error(
                    "UPDATE without a WHERE clause modifies every row in the table",
                )),
                Some(kw) => findings.push(Finding::error(format!(
                    "{kw} without a WHERE clause removes every row in the table"
                ))),
                None => {}
            }
        }
    }
}

/// `LIKE '%...'` and `ILIKE '%...'` patterns.
struct LeadingWildcardLike;

impl Rule for LeadingWildcardLike {
    fn name(&self) -> &'static str {
        "leading-wildcard-like"
    }

    fn check(&self, ctx: &Context<'_>, findings: &mut Vec<Finding>) {
        if LEADING_WILDCARD_LIKE.is_match(ctx.raw) {
            findings.push(Finding::warn(
                "LIKE pattern with a leading wildcard ('%...') cannot use a B-tree index \
                 and forces a full scan",
            ));
        }
    }
}

/// `NOT IN (...)`.
struct NotInList;

impl Rule for NotInList {
    fn name(&self) -> &'static str {
        "not-in-null-trap"
    }

    fn check(&self, ctx: &Context<'_>, findings: &mut Vec<Finding>) {
        if NOT_IN_LIST.is_match(ctx.raw) {
            findings.push(Finding::warn(
                "NOT IN (...) returns no rows when the list or subquery yields a NULL; \
                 prefer NOT EXISTS",
            ));
        }
    }
}

/// `ORDER BY` with neither `LIMIT` nor `FETCH`.
struct UnboundedSort;

impl Rule for UnboundedSort {
    fn name(&self) -> &'static str {
        "unbounded-sort"
    }

    fn check(&self, ctx: &Context<'_>, findings: &mut Vec<Finding>) {
        let sorts = ctx
            .pairs()
            .any(|(a, b)| a.is(Keyword::Order) && b.is(Keyword::By));
        if sorts && !ctx.has_keyword(Keyword::Limit) && !ctx.has_keyword(Keyword::Fetch) {
            findings.push(Finding::info(
                "ORDER BY without LIMIT or FETCH sorts the entire result set",
            ));
        }
    }
}

/// `OFFSET n` with a large literal `n`.
struct DeepOffset;

impl Rule for DeepOffset {
    fn name(&self) -> &'static str {
        "deep-offset"
    }

    fn check(&self, ctx: &Context<'_>, findings: &mut Vec<Finding>) {
        for (keyword, value) in ctx.pairs() {
            if !keyword.is(Keyword::Offset) || value.kind != TokenKind::Number {
                continue;
            }
            let digits = value.text.as_str();
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            // Literals too large for u64 are certainly over the threshold.
            if digits.parse::<u64>().map_or(true, |n| n > OFFSET_THRESHOLD) {
                findings.push(Finding::warn(format!(
                    "OFFSET {digits} makes the database read and discard {digits} rows; \
                     consider keyset pagination"
                )));
            }
        }
    }
}

/// Queries with many joins.
struct ManyJoins;

impl Rule for ManyJoins {
    fn name(&self) -> &'static str {
        "many-joins"
    }

    fn check(&self, ctx: &Context<'_>, findings: &mut Vec<Finding>) {
        let joins = ctx.code.iter().filter(|t| t.is(Keyword::Join)).count();
        if joins >= JOIN_THRESHOLD {
            findings.push(Finding::info(format!(
                "Query has {joins} joins; check that every join key is indexed and the plan \
                 is what you expect"
            )));
        }
    }
}

/// `now()` calls.
struct NowCall;

impl Rule for NowCall {
    fn name(&self) -> &'static str {
        "now-call"
    }

    fn check(&self, ctx: &Context<'_>, findings: &mut Vec<Finding>) {
        if NOW_CALL.is_match(ctx.raw) {
            findings.push(Finding::info(
                "now() returns the transaction start time and stays fixed for the whole \
                 transaction; use clock_timestamp() for wall-clock time",
            ));
        }
    }
}

/// `COALESCE` anywhere after a `WHERE`. Positional only: it does not track
/// statement or subquery scope.
struct CoalesceInWhere;

impl Rule for CoalesceInWhere {
    fn name(&self) -> &'static str {
        "coalesce-in-where"
    }

    fn check(&self, ctx: &Context<'_>, findings: &mut Vec<Finding>) {
        if COALESCE_AFTER_WHERE.is_match(ctx.raw) {
            findings.push(Finding::info(
                "COALESCE in a WHERE clause can stop the planner from using an index on \
                 the wrapped column",
            ));
        }
    }
}
