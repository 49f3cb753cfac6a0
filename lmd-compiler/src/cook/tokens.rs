use std::fmt;

use malachite::Integer;

use crate::errors::ErrorId;
use crate::lex::Base;
use crate::tokens::Token;

pub type CookedToken<'src> = Token<'src, Kind>;

#[derive(Clone, Debug, PartialEq)]
pub enum Kind {
    Whitespace,
    Comment,

    Keyword(Keyword),
    Identifier,
    Type,

    Bool(bool),
    Integer { base: Base, value: Integer, suffix: Option<Suffix> },
    Float { value: f64, suffix: Option<Suffix> },
    String(String),

    Open(Delimiter),
    Close(Delimiter),
    Operator,
    Symbol(Symbol),

    /// Text the lexer could not classify.
    Unknown(ErrorId),
    /// A token that was classified but could not be cooked.
    Invalid(ErrorId),

    Eof,
}

impl Kind {
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Integer { .. } | Self::Float { .. } | Self::String(_)
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Keyword {
    Const,
    Pub,
    Use,
    If,
    Then,
    Else,
    Let,
    In,
    Where,
    Infix,
    Infixr,
    Infixl,
    Fn,
}

impl Keyword {
    pub const ALL: [Keyword; 13] = [
        Self::Const,
        Self::Pub,
        Self::Use,
        Self::If,
        Self::Then,
        Self::Else,
        Self::Let,
        Self::In,
        Self::Where,
        Self::Infix,
        Self::Infixr,
        Self::Infixl,
        Self::Fn,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| keyword.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Const => "const",
            Self::Pub => "pub",
            Self::Use => "use",
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::Let => "let",
            Self::In => "in",
            Self::Where => "where",
            Self::Infix => "infix",
            Self::Infixr => "infixr",
            Self::Infixl => "infixl",
            Self::Fn => "fn",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Delimiter {
    Paren,
    Bracket,
    Brace,
}

impl Delimiter {
    pub fn open(&self) -> char {
        match self {
            Self::Paren => '(',
            Self::Bracket => '[',
            Self::Brace => '{',
        }
    }

    pub fn close(&self) -> char {
        match self {
            Self::Paren => ')',
            Self::Bracket => ']',
            Self::Brace => '}',
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Symbol {
    Colon,
    Semicolon,
    Comma,
    Dot,
    Assign,
}

impl Symbol {
    pub fn from_text(text: &str) -> Option<Self> {
        Some(match text {
            ":" => Self::Colon,
            ";" => Self::Semicolon,
            "," => Self::Comma,
            "." => Self::Dot,
            "=" => Self::Assign,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Assign => "=",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Suffix {
    Unsigned,
    Float,
}

impl Suffix {
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "u" => Some(Self::Unsigned),
            "f" => Some(Self::Float),
            _ => None,
        }
    }
}

/// A structural pattern over cooked tokens. A class names a token variant and
/// optionally some of its fields; a token matches if the variant and every
/// named field agree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Class {
    Keyword(Keyword),
    AnyKeyword,
    Identifier,
    Type,
    Literal,
    Operator,
    OperatorText(&'static str),
    Symbol(Symbol),
    Open(Delimiter),
    Close(Delimiter),
    Eof,
}

impl Class {
    pub fn matches(&self, token: &CookedToken) -> bool {
        match (self, &token.kind) {
            (Self::Keyword(expected), Kind::Keyword(actual)) => expected == actual,
            (Self::AnyKeyword, Kind::Keyword(_)) => true,
            (Self::Identifier, Kind::Identifier) => true,
            (Self::Type, Kind::Type) => true,
            (Self::Literal, kind) => kind.is_literal(),
            (Self::Operator, Kind::Operator) => true,
            (Self::OperatorText(text), Kind::Operator) => token.text == *text,
            (Self::Symbol(expected), Kind::Symbol(actual)) => expected == actual,
            (Self::Open(expected), Kind::Open(actual)) => expected == actual,
            (Self::Close(expected), Kind::Close(actual)) => expected == actual,
            (Self::Eof, Kind::Eof) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => write!(f, "`{}`", keyword.as_str()),
            Self::AnyKeyword => write!(f, "keyword"),
            Self::Identifier => write!(f, "identifier"),
            Self::Type => write!(f, "type"),
            Self::Literal => write!(f, "literal"),
            Self::Operator => write!(f, "operator"),
            Self::OperatorText(text) => write!(f, "`{text}`"),
            Self::Symbol(symbol) => write!(f, "`{}`", symbol.as_str()),
            Self::Open(delimiter) => write!(f, "`{}`", delimiter.open()),
            Self::Close(delimiter) => write!(f, "`{}`", delimiter.close()),
            Self::Eof => write!(f, "end of file"),
        }
    }
}
