use logos::{Lexer, Logos};

/// The coarse classification of a piece of source text.
#[derive(Logos, Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RawKind {
    #[regex(r"[ \t\r\n]+", priority = 3)]
    Whitespace,

    #[regex(r"--[^\n]*", priority = 4)]
    LineComment,

    /// A possibly nested `{- ... -}` comment. The flag is `false` if the input
    /// ended before every opened comment was closed.
    #[token("{-", block_comment)]
    BlockComment(bool),

    #[regex(r"[\p{Letter}_'][\p{Letter}_'0-9]*", priority = 3)]
    Name,

    /// A number literal. Only the base is known at this point; the digits are
    /// validated by the cooker.
    #[regex(r"[0-9]", number, priority = 3)]
    Number(Base),

    /// A string literal, which is `false` if the closing quote is missing.
    #[token("\"", string)]
    String(bool),

    #[regex(r"[()\[\]{}]", priority = 3)]
    Delimiter,

    #[regex(r"[+\-*/%&|^~<=>$.]+", priority = 3)]
    Operator,

    #[regex(r"[:;,]", priority = 3)]
    Symbol,

    /// A single character that starts nothing else.
    #[regex(r"[^ \t\r\n]", whole_char, priority = 1)]
    Unknown,
}

impl RawKind {
    pub fn is_terminated(&self) -> bool {
        match self {
            Self::BlockComment(terminated) | Self::String(terminated) => *terminated,
            _ => true,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    pub fn radix(&self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// The number of characters used by the prefix of a literal in this base.
    pub fn prefix_len(&self) -> usize {
        match self {
            Self::Decimal => 0,
            _ => 2,
        }
    }

    fn from_prefix(c: u8) -> Option<Self> {
        match c {
            b'b' => Some(Self::Binary),
            b'o' => Some(Self::Octal),
            b'x' => Some(Self::Hexadecimal),
            _ => None,
        }
    }
}

fn is_number_char(c: &u8) -> bool {
    c.is_ascii_alphanumeric() || *c == b'_'
}

/// Continue a number after its first digit. A `.` is only part of the number
/// if it is followed by another number character, so that `1.` and `1..2`
/// leave the dots for an operator.
fn number(lex: &mut Lexer<RawKind>) -> Base {
    let rest = lex.remainder().as_bytes();

    let base = match (lex.slice(), rest.first()) {
        ("0", Some(&c)) => Base::from_prefix(c).unwrap_or(Base::Decimal),
        _ => Base::Decimal,
    };

    let mut at = 0;
    loop {
        match rest.get(at) {
            Some(c) if is_number_char(c) => at += 1,
            Some(b'.') if rest.get(at + 1).is_some_and(is_number_char) => at += 2,
            _ => break,
        }
    }

    lex.bump(at);
    base
}

/// Extend a token to the end of the character it starts in. The negated
/// class of `Unknown` matches single bytes, which may cut a multi-byte
/// character apart.
fn whole_char(lex: &mut Lexer<RawKind>) {
    let start = lex.span().start;
    let len = lex.source()[start..].chars().next().map_or(0, char::len_utf8);
    lex.bump(len.saturating_sub(lex.span().len()));
}

/// Consume a string after its opening quote. A backslash consumes the
/// character after it without interpreting it.
fn string(lex: &mut Lexer<RawKind>) -> bool {
    let rest = lex.remainder();
    let mut chars = rest.char_indices();

    while let Some((at, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(at + 1);
                return true;
            }

            '\\' => {
                chars.next();
            }

            _ => {}
        }
    }

    lex.bump(rest.len());
    false
}

/// Consume a block comment after its opening `{-`, tracking nesting depth.
fn block_comment(lex: &mut Lexer<RawKind>) -> bool {
    let rest = lex.remainder();
    let mut depth = 1usize;
    let mut at = 0;

    while at < rest.len() {
        let tail = &rest[at..];
        if tail.starts_with("{-") {
            depth += 1;
            at += 2;
        } else if tail.starts_with("-}") {
            depth -= 1;
            at += 2;

            if depth == 0 {
                lex.bump(at);
                return true;
            }
        } else {
            at += tail.chars().next().map_or(1, char::len_utf8);
        }
    }

    lex.bump(rest.len());
    false
}
