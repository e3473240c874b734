//! Clause boundary detection.
//!
//! Decides whether the token at a given position opens a clause that
//! should start on a fresh line, and how many tokens belong to the clause
//! phrase (`GROUP BY`, `UNION ALL`, `ON CONFLICT`, ...).

use crate::lexer::{Keyword, Token};

/// How a clause affects layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    /// An ordinary clause written at the current indent.
    Plain,
    /// `SELECT [DISTINCT]`; its items go on the following lines.
    Projection,
    /// `AND` / `OR`, written one step deeper than the current indent.
    Conjunction,
    /// `UNION [ALL]`, `INTERSECT`, `EXCEPT`; resets the indent.
    SetOperation,
}

/// A clause phrase found in the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause {
    pub kind: ClauseKind,
    /// Number of tokens in the phrase, starting at the detected position.
    pub len: usize,
}

impl Clause {
    const fn new(kind: ClauseKind, len: usize) -> Self {
        Self { kind, len }
    }
}

/// Detects a clause at `tokens[index]`, using the previous token and one
/// token of lookahead.
pub fn detect(tokens: &[Token], index: usize, prev: Option<&Token>) -> Option<Clause> {
    let keyword = tokens.get(index)?.as_keyword()?;
    let next = tokens.get(index + 1).and_then(Token::as_keyword);
    let prev = prev.and_then(Token::as_keyword);

    let followed_by = |kw: Keyword| next == Some(kw);

    let clause = match keyword {
        Keyword::Select if followed_by(Keyword::Distinct) => {
            Clause::new(ClauseKind::Projection, 2)
        }
        Keyword::Select => Clause::new(ClauseKind::Projection, 1),

        Keyword::Group | Keyword::Order if followed_by(Keyword::By) => {
            Clause::new(ClauseKind::Plain, 2)
        }
        Keyword::Insert if followed_by(Keyword::Into) => Clause::new(ClauseKind::Plain, 2),
        Keyword::Delete if followed_by(Keyword::From) => Clause::new(ClauseKind::Plain, 2),
        Keyword::On if followed_by(Keyword::Conflict) => Clause::new(ClauseKind::Plain, 2),
        Keyword::Do if followed_by(Keyword::Update) || followed_by(Keyword::Nothing) => {
            Clause::new(ClauseKind::Plain, 2)
        }

        Keyword::Union if followed_by(Keyword::All) => Clause::new(ClauseKind::SetOperation, 2),
        Keyword::Union | Keyword::Intersect | Keyword::Except => {
            Clause::new(ClauseKind::SetOperation, 1)
        }

        Keyword::And | Keyword::Or => Clause::new(ClauseKind::Conjunction, 1),

        // `LEFT JOIN`, `LEFT OUTER JOIN`: the modifier opens the line and
        // the rest of the phrase follows inline.
        kw if kw.is_join_modifier()
            && kw != Keyword::Outer
            && (followed_by(Keyword::Join) || followed_by(Keyword::Outer)) =>
        {
            Clause::new(ClauseKind::Plain, 1)
        }
        Keyword::Join if prev.is_some_and(|p| p.is_join_modifier()) => return None,
        Keyword::Join => Clause::new(ClauseKind::Plain, 1),

        // `FOR UPDATE` locks and `ON UPDATE` actions stay inline.
        Keyword::Update if matches!(prev, Some(Keyword::For | Keyword::On)) => return None,

        Keyword::From
        | Keyword::Where
        | Keyword::Having
        | Keyword::Limit
        | Keyword::Offset
        | Keyword::Fetch
        | Keyword::Values
        | Keyword::Update
        | Keyword::Set
        | Keyword::On
        | Keyword::Using
        | Keyword::Returning
        | Keyword::With
        | Keyword::Do
        | Keyword::Window => Clause::new(ClauseKind::Plain, 1),

        _ => return None,
    };
    Some(clause)
}
