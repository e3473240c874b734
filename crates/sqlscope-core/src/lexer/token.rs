//! Token types for the SQL lexer.

/// SQL keywords recognized by the lexer.
///
/// Any word not listed here lexes as an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Queries
    Select,
    From,
    Where,
    Order,
    Group,
    By,
    Having,
    Limit,
    Offset,
    Fetch,
    First,
    Next,
    Only,
    Distinct,
    All,
    As,

    // Joins
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    Natural,
    Lateral,
    On,
    Using,

    // Set operations
    Union,
    Intersect,
    Except,

    // Data manipulation
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,
    Returning,
    Conflict,
    Do,
    Nothing,
    Truncate,

    // Data definition
    Create,
    Drop,
    Alter,
    Add,
    Column,
    Table,
    Index,
    View,
    Primary,
    Key,
    Foreign,
    References,
    Unique,
    Check,
    Default,
    Constraint,
    Cascade,

    // Predicates and logic
    And,
    Or,
    Not,
    In,
    Between,
    Like,
    Ilike,
    Is,
    Null,
    True,
    False,
    Exists,
    Any,

    // Ordering
    Asc,
    Desc,
    Nulls,
    Last,

    // Expressions
    Case,
    When,
    Then,
    Else,
    End,
    Cast,
    Coalesce,
    Nullif,

    // Aggregates
    Count,
    Sum,
    Avg,
    Min,
    Max,

    // Common table expressions and windows
    With,
    Recursive,
    Over,
    Partition,
    Window,
    Rows,
    Range,
    RowNumber,
    Rank,
    DenseRank,
    Lag,
    Lead,

    // Transactions and locking
    Begin,
    Commit,
    Rollback,
    For,
    If,
}

impl Keyword {
    /// Attempts to parse a keyword from a word (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "ORDER" => Some(Self::Order),
            "GROUP" => Some(Self::Group),
            "BY" => Some(Self::By),
            "HAVING" => Some(Self::Having),
            "LIMIT" => Some(Self::Limit),
            "OFFSET" => Some(Self::Offset),
            "FETCH" => Some(Self::Fetch),
            "FIRST" => Some(Self::First),
            "NEXT" => Some(Self::Next),
            "ONLY" => Some(Self::Only),
            "DISTINCT" => Some(Self::Distinct),
            "ALL" => Some(Self::All),
            "AS" => Some(Self::As),
            "JOIN" => Some(Self::Join),
            "INNER" => Some(Self::Inner),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "FULL" => Some(Self::Full),
            "OUTER" => Some(Self::Outer),
            "CROSS" => Some(Self::Cross),
            "NATURAL" => Some(Self::Natural),
            "LATERAL" => Some(Self::Lateral),
            "ON" => Some(Self::On),
            "USING" => Some(Self::Using),
            "UNION" => Some(Self::Union),
            "INTERSECT" => Some(Self::Intersect),
            "EXCEPT" => Some(Self::Except),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "UPDATE" => Some(Self::Update),
            "SET" => Some(Self::Set),
            "DELETE" => Some(Self::Delete),
            "RETURNING" => Some(Self::Returning),
            "CONFLICT" => Some(Self::Conflict),
            "DO" => Some(Self::Do),
            "NOTHING" => Some(Self::Nothing),
            "TRUNCATE" => Some(Self::Truncate),
            "CREATE" => Some(Self::Create),
            "DROP" => Some(Self::Drop),
            "ALTER" => Some(Self::Alter),
            "ADD" => Some(Self::Add),
            "COLUMN" => Some(Self::Column),
            "TABLE" => Some(Self::Table),
            "INDEX" => Some(Self::Index),
            "VIEW" => Some(Self::View),
            "PRIMARY" => Some(Self::Primary),
            "KEY" => Some(Self::Key),
            "FOREIGN" => Some(Self::Foreign),
            "REFERENCES" => Some(Self::References),
            "UNIQUE" => Some(Self::Unique),
            "CHECK" => Some(Self::Check),
            "DEFAULT" => Some(Self::Default),
            "CONSTRAINT" => Some(Self::Constraint),
            "CASCADE" => Some(Self::Cascade),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IN" => Some(Self::In),
            "BETWEEN" => Some(Self::Between),
            "LIKE" => Some(Self::Like),
            "ILIKE" => Some(Self::Ilike),
            "IS" => Some(Self::Is),
            "NULL" => Some(Self::Null),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            "EXISTS" => Some(Self::Exists),
            "ANY" => Some(Self::Any),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "NULLS" => Some(Self::Nulls),
            "LAST" => Some(Self::Last),
            "CASE" => Some(Self::Case),
            "WHEN" => Some(Self::When),
            "THEN" => Some(Self::Then),
            "ELSE" => Some(Self::Else),
            "END" => Some(Self::End),
            "CAST" => Some(Self::Cast),
            "COALESCE" => Some(Self::Coalesce),
            "NULLIF" => Some(Self::Nullif),
            "COUNT" => Some(Self::Count),
            "SUM" => Some(Self::Sum),
            "AVG" => Some(Self::Avg),
            "MIN" => Some(Self::Min),
            "MAX" => Some(Self::Max),
            "WITH" => Some(Self::With),
            "RECURSIVE" => Some(Self::Recursive),
            "OVER" => Some(Self::Over),
            "PARTITION" => Some(Self::Partition),
            "WINDOW" => Some(Self::Window),
            "ROWS" => Some(Self::Rows),
            "RANGE" => Some(Self::Range),
            "ROW_NUMBER" => Some(Self::RowNumber),
            "RANK" => Some(Self::Rank),
            "DENSE_RANK" => Some(Self::DenseRank),
            "LAG" => Some(Self::Lag),
            "LEAD" => Some(Self::Lead),
            "BEGIN" => Some(Self::Begin),
            "COMMIT" => Some(Self::Commit),
            "ROLLBACK" => Some(Self::Rollback),
            "FOR" => Some(Self::For),
            "IF" => Some(Self::If),
            _ => None,
        }
    }

    /// Returns the canonical uppercase spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Order => "ORDER",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Fetch => "FETCH",
            Self::First => "FIRST",
            Self::Next => "NEXT",
            Self::Only => "ONLY",
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
            Self::As => "AS",
            Self::Join => "JOIN",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Outer => "OUTER",
            Self::Cross => "CROSS",
            Self::Natural => "NATURAL",
            Self::Lateral => "LATERAL",
            Self::On => "ON",
            Self::Using => "USING",
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::Returning => "RETURNING",
            Self::Conflict => "CONFLICT",
            Self::Do => "DO",
            Self::Nothing => "NOTHING",
            Self::Truncate => "TRUNCATE",
            Self::Create => "CREATE",
            Self::Drop => "DROP",
            Self::Alter => "ALTER",
            Self::Add => "ADD",
            Self::Column => "COLUMN",
            Self::Table => "TABLE",
            Self::Index => "INDEX",
            Self::View => "VIEW",
            Self::Primary => "PRIMARY",
            Self::Key => "KEY",
            Self::Foreign => "FOREIGN",
            Self::References => "REFERENCES",
            Self::Unique => "UNIQUE",
            Self::Check => "CHECK",
            Self::Default => "DEFAULT",
            Self::Constraint => "CONSTRAINT",
            Self::Cascade => "CASCADE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
            Self::Ilike => "ILIKE",
            Self::Is => "IS",
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Exists => "EXISTS",
            Self::Any => "ANY",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Nulls => "NULLS",
            Self::Last => "LAST",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Cast => "CAST",
            Self::Coalesce => "COALESCE",
            Self::Nullif => "NULLIF",
            Self::Count => "COUNT",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::With => "WITH",
            Self::Recursive => "RECURSIVE",
            Self::Over => "OVER",
            Self::Partition => "PARTITION",
            Self::Window => "WINDOW",
            Self::Rows => "ROWS",
            Self::Range => "RANGE",
            Self::RowNumber => "ROW_NUMBER",
            Self::Rank => "RANK",
            Self::DenseRank => "DENSE_RANK",
            Self::Lag => "LAG",
            Self::Lead => "LEAD",
            Self::Begin => "BEGIN",
            Self::Commit => "COMMIT",
            Self::Rollback => "ROLLBACK",
            Self::For => "FOR",
            Self::If => "IF",
        }
    }

    /// Returns true for keywords that may precede `JOIN` in a join clause.
    #[must_use]
    pub const fn is_join_modifier(&self) -> bool {
        matches!(
            self,
            Self::Inner | Self::Left | Self::Right | Self::Full | Self::Cross | Self::Natural | Self::Outer
        )
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A recognized SQL keyword.
    Keyword(Keyword),
    /// A bare or double-quoted identifier.
    Identifier,
    /// A single-quoted or dollar-quoted string literal.
    String,
    /// A numeric literal.
    Number,
    /// A multi-character operator such as `::` or `->>`.
    Operator,
    /// Any single character that is not part of a longer token.
    Symbol,
    /// A line or block comment.
    Comment,
}

/// A token together with its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The text as written in the source (original casing for keywords).
    pub text: String,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Returns the canonical value: uppercase for keywords, the source
    /// text for everything else.
    #[must_use]
    pub fn value(&self) -> &str {
        match self.kind {
            TokenKind::Keyword(kw) => kw.as_str(),
            _ => &self.text,
        }
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_))
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Returns true if this is the given keyword.
    #[must_use]
    pub fn is(&self, keyword: Keyword) -> bool {
        self.as_keyword() == Some(keyword)
    }

    /// Returns true if this is a symbol or operator spelled `text`.
    #[must_use]
    pub fn is_symbol(&self, text: &str) -> bool {
        matches!(self.kind, TokenKind::Symbol | TokenKind::Operator) && self.text == text
    }

    /// Returns true if this is a comment.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::Comment)
    }
}
