//! Canonicalizing SQL pretty-printer.
//!
//! The formatter makes one left-to-right pass over the token stream. It
//! never builds a tree: layout decisions come from a handful of pieces of
//! state (indent level, paren depth, whether the output is at the start of
//! a line, and the previous token) plus one token of lookahead.
//!
//! ```rust
//! use sqlscope_core::format_sql;
//!
//! let formatted = format_sql("select id,name from users where id=1");
//! assert_eq!(formatted, "SELECT\n  id,\n  name\nFROM users\nWHERE id = 1\n");
//! ```

mod clause;

use tracing::debug;

use crate::lexer::{Keyword, Lexer, Token, TokenKind};

use clause::{Clause, ClauseKind};

/// One indent step.
const INDENT: &str = "  ";

/// Formats SQL text.
///
/// Always succeeds; malformed input yields a best-effort layout. The output
/// ends with exactly one newline.
#[must_use]
pub fn format_sql(sql: &str) -> String {
    let tokens = Lexer::tokenize(sql);
    format_tokens(&tokens)
}

/// Formats an already lexed token sequence.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    let output = Formatter::new(tokens).run();
    debug!(tokens = tokens.len(), bytes = output.len(), "formatted SQL");
    output
}

/// Mutable state for a single formatting pass.
struct Formatter<'t> {
    tokens: &'t [Token],
    out: String,
    /// Base indent level for clause lines.
    indent: usize,
    /// Current parenthesis nesting.
    depth: usize,
    /// True when nothing has been written on the current line yet.
    line_start: bool,
    /// Indent level the current line is (or will be) written at.
    line_indent: usize,
    prev: Option<&'t Token>,
    /// One entry per open paren; true if it opened a subquery and raised
    /// the indent.
    parens: Vec<bool>,
    /// Suppresses the separating space before the next token.
    glue_next: bool,
    /// Paren depth of a `BETWEEN` still waiting for its `AND`.
    between: Option<usize>,
}

impl<'t> Formatter<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            out: String::new(),
            indent: 0,
            depth: 0,
            line_start: true,
            line_indent: 0,
            prev: None,
            parens: Vec::new(),
            glue_next: false,
            between: None,
        }
    }

    fn run(mut self) -> String {
        let mut index = 0;
        while index < self.tokens.len() {
            index += self.step(index);
        }
        let mut output = self.out.trim_end().to_string();
        output.push('\n');
        output
    }

    /// Emits the token at `index` and returns how many tokens were consumed.
    fn step(&mut self, index: usize) -> usize {
        let tokens = self.tokens;
        let token = &tokens[index];
        let next = tokens.get(index + 1);

        if token.is_comment() {
            self.comment(token);
            return 1;
        }

        if token.is(Keyword::And) && self.between == Some(self.depth) {
            self.between = None;
            self.word(token);
            return 1;
        }

        if self.depth == 0 {
            if let Some(clause) = clause::detect(tokens, index, self.prev) {
                self.clause(&tokens[index..index + clause.len], clause);
                return clause.len;
            }
        }

        match token.kind {
            TokenKind::Symbol | TokenKind::Operator => self.symbol(token, next),
            TokenKind::Keyword(Keyword::Between) => {
                self.between = Some(self.depth);
                self.word(token);
            }
            _ => self.word(token),
        }
        1
    }

    /// Writes a clause phrase on a fresh line.
    fn clause(&mut self, words: &'t [Token], clause: Clause) {
        let level = match clause.kind {
            ClauseKind::SetOperation => {
                self.indent = 0;
                0
            }
            ClauseKind::Conjunction => self.indent + 1,
            ClauseKind::Plain | ClauseKind::Projection => self.indent,
        };
        self.newline(level);

        let phrase = words.iter().map(Token::value).collect::<Vec<_>>().join(" ");
        self.write(&phrase, true);
        self.prev = words.last();

        if clause.kind == ClauseKind::Projection {
            self.newline(self.indent + 1);
        }
    }

    fn symbol(&mut self, token: &'t Token, next: Option<&Token>) {
        match token.text.as_str() {
            "(" => {
                let call = self
                    .prev
                    .is_some_and(|p| p.kind == TokenKind::Identifier || p.is_keyword());
                self.write("(", !call);
                self.glue_next = true;
                self.depth += 1;

                let subquery = next.is_some_and(|n| n.is(Keyword::Select));
                self.parens.push(subquery);
                if subquery {
                    self.indent += 1;
                    self.newline(self.indent);
                }
            }
            ")" => {
                self.depth = self.depth.saturating_sub(1);
                if self.parens.pop() == Some(true) {
                    self.indent = self.indent.saturating_sub(1);
                }
                self.write(")", false);
            }
            "," => {
                self.write(",", false);
                if self.depth == 0 {
                    self.newline(self.indent + 1);
                }
            }
            ";" => {
                self.write(";", false);
                self.indent = 0;
                self.depth = 0;
                self.parens.clear();
                self.between = None;
                self.newline(0);
            }
            "::" => {
                self.write("::", false);
                self.glue_next = true;
            }
            "." | "->" | "->>" => {
                // `1.` would lex as a number and `-->` as a comment.
                let apart = self
                    .prev
                    .is_some_and(|p| p.kind == TokenKind::Number || p.is_symbol("-"));
                self.write(&token.text, apart);
                self.glue_next = !(token.text == "." && next.is_some_and(|n| n.kind == TokenKind::Number));
            }
            "[" => {
                let subscript = self.prev.is_some_and(|p| {
                    p.kind == TokenKind::Identifier || p.is_symbol("]") || p.is_symbol(")")
                });
                self.write("[", !subscript);
                self.glue_next = true;
            }
            "]" => self.write("]", false),
            "$" => {
                self.write("$", true);
                self.glue_next = next.is_some_and(|n| n.kind == TokenKind::Number);
            }
            text => self.write(text, true),
        }
        self.prev = Some(token);
    }

    fn word(&mut self, token: &'t Token) {
        self.write(token.value(), true);
        self.prev = Some(token);
    }

    /// Writes a comment on a line of its own.
    fn comment(&mut self, token: &'t Token) {
        let level = if self.line_start {
            self.line_indent
        } else {
            self.indent
        };
        self.newline(level);
        self.write(&token.text, false);
        self.newline(level);
    }

    /// Ends the current line; the next write starts at `level`.
    fn newline(&mut self, level: usize) {
        let trimmed = self.out.trim_end_matches(' ').len();
        self.out.truncate(trimmed);
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
        self.line_start = true;
        self.line_indent = level;
        self.glue_next = false;
    }

    fn write(&mut self, text: &str, spaced: bool) {
        if self.line_start {
            self.out.push_str(&INDENT.repeat(self.line_indent));
            self.line_start = false;
        } else if spaced && !self.glue_next && !matches!(self.out.chars().last(), None | Some('(' | ' ' | '\n')) {
            self.out.push(' ');
        }
        self.glue_next = false;
        self.out.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(format_sql(""), "\n");
        assert_eq!(format_sql("   \n "), "\n");
    }

    #[test]
    fn test_simple_select() {
        assert_eq!(
            format_sql("select id,name from users where id=1"),
            "SELECT\n  id,\n  name\nFROM users\nWHERE id = 1\n"
        );
    }

    #[test]
    fn test_select_distinct_stays_together() {
        assert_eq!(
            format_sql("select distinct a from t"),
            "SELECT DISTINCT\n  a\nFROM t\n"
        );
    }

    #[test]
    fn test_conjunctions_are_indented() {
        assert_eq!(
            format_sql("select a from t where x = 1 and y = 2 or z = 3"),
            "SELECT\n  a\nFROM t\nWHERE x = 1\n  AND y = 2\n  OR z = 3\n"
        );
    }

    #[test]
    fn test_between_and_stays_inline() {
        assert_eq!(
            format_sql("select a from t where x between 1 and 5 and y = 2"),
            "SELECT\n  a\nFROM t\nWHERE x BETWEEN 1 AND 5\n  AND y = 2\n"
        );
    }

    #[test]
    fn test_function_call_hugs_paren() {
        assert_eq!(
            format_sql("select count(*), lower(name) from t"),
            "SELECT\n  COUNT(*),\n  lower(name)\nFROM t\n"
        );
    }

    #[test]
    fn test_commas_inside_parens() {
        assert_eq!(
            format_sql("insert into t (a,b) values (1,2)"),
            "INSERT INTO t(a, b)\nVALUES(1, 2)\n"
        );
    }

    #[test]
    fn test_subquery_is_indented() {
        assert_eq!(
            format_sql("select a from t where id in (select id from u) and b = 1"),
            "SELECT\n  a\nFROM t\nWHERE id IN(\n  SELECT id FROM u)\n  AND b = 1\n"
        );
    }

    #[test]
    fn test_paren_hugs_any_keyword() {
        assert_eq!(
            format_sql("select a from t where id in (1,2)"),
            "SELECT\n  a\nFROM t\nWHERE id IN(1, 2)\n"
        );
        assert_eq!(
            format_sql("insert into t (a) values (1)"),
            "INSERT INTO t(a)\nVALUES(1)\n"
        );
    }

    #[test]
    fn test_paren_after_symbol_keeps_space() {
        assert_eq!(
            format_sql("select a from t where x = (1 + 2) * 3"),
            "SELECT\n  a\nFROM t\nWHERE x = (1 + 2) * 3\n"
        );
    }

    #[test]
    fn test_arrow_after_number_or_minus_keeps_space() {
        assert_eq!(format_sql("select 1 -> y"), "SELECT\n  1 ->y\n");
        assert_eq!(format_sql("select - ->> y"), "SELECT\n  - ->>y\n");
        assert_eq!(format_sql("select x . 1"), "SELECT\n  x. 1\n");
        for sql in ["select 1 -> y", "select - ->> y", "select x . 1", "select 1 . x"] {
            let once = format_sql(sql);
            assert_eq!(format_sql(&once), once, "{sql}");
        }
    }

    #[test]
    fn test_casts_and_json_operators_have_no_spaces() {
        assert_eq!(
            format_sql("select data -> 'a' ->> 'b', x :: int from t"),
            "SELECT\n  data->'a'->>'b',\n  x::int\nFROM t\n"
        );
    }

    #[test]
    fn test_qualified_names() {
        assert_eq!(
            format_sql("select u . id from users u"),
            "SELECT\n  u.id\nFROM users u\n"
        );
    }

    #[test]
    fn test_semicolon_separates_statements() {
        assert_eq!(
            format_sql("select 1; select 2;"),
            "SELECT\n  1;\nSELECT\n  2;\n"
        );
    }

    #[test]
    fn test_union_resets_indent() {
        assert_eq!(
            format_sql("select a from t union all select b from u"),
            "SELECT\n  a\nFROM t\nUNION ALL\nSELECT\n  b\nFROM u\n"
        );
    }

    #[test]
    fn test_comments_get_their_own_line() {
        assert_eq!(
            format_sql("select a -- first\n, b /* second */ from t"),
            "SELECT\n  a\n-- first\n,\n  b\n/* second */\nFROM t\n"
        );
    }

    #[test]
    fn test_join_variants() {
        assert_eq!(
            format_sql("select * from a left outer join b on a.id = b.id inner join c using (id)"),
            "SELECT\n  *\nFROM a\nLEFT OUTER JOIN b\nON a.id = b.id\nINNER JOIN c\nUSING(id)\n"
        );
    }

    #[test]
    fn test_upsert() {
        assert_eq!(
            format_sql("insert into t (id) values (1) on conflict (id) do update set n = 2"),
            "INSERT INTO t(id)\nVALUES(1)\nON CONFLICT(id)\nDO UPDATE\nSET n = 2\n"
        );
    }

    #[test]
    fn test_unbalanced_close_paren_is_harmless() {
        assert_eq!(format_sql(") select 1"), ")\nSELECT\n  1\n");
    }

    #[test]
    fn test_positional_parameters() {
        assert_eq!(
            format_sql("select a from t where id = $1"),
            "SELECT\n  a\nFROM t\nWHERE id = $1\n"
        );
    }
}
