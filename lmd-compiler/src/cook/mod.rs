//! Turns raw tokens into tokens the parser can work with: names are split into
//! keywords, types and identifiers, literals get their values, and operators
//! are told apart from the fixed symbols. Every raw token produces exactly one
//! cooked token; problems are reported and the token becomes `Invalid` or
//! `Unknown`.

pub use self::tokens::{Class, CookedToken, Delimiter, Keyword, Kind, Suffix, Symbol};

mod tokens;


use log::trace;
use malachite::num::basic::traits::Zero;
use malachite::Integer;

use crate::errors::Errors;
use crate::lex::{Base, RawKind, RawToken};

pub fn cook<'src>(raw: &[RawToken<'src>], errors: &mut Errors) -> Vec<CookedToken<'src>> {
    let mut cooker = Cooker { errors };
    let cooked: Vec<_> = raw.iter().map(|token| cooker.cook(token)).collect();
    trace!("cooked {} tokens", cooked.len());
    cooked
}

/// Whitespace and comments carry no meaning for the parser.
pub fn is_trivia(token: &CookedToken) -> bool {
    matches!(token.kind, Kind::Whitespace | Kind::Comment)
}

struct Cooker<'e> {
    errors: &'e mut Errors,
}

impl Cooker<'_> {
    fn cook<'src>(&mut self, token: &RawToken<'src>) -> CookedToken<'src> {
        let kind = match token.kind {
            RawKind::Whitespace => Kind::Whitespace,
            RawKind::LineComment => Kind::Comment,
            RawKind::BlockComment(terminated) => {
                if !terminated {
                    self.errors.cook_error(token.span).unterminated_comment();
                }
                Kind::Comment
            }

            RawKind::Name => Self::name(token.text),
            RawKind::Number(base) => self.number(token, base),
            RawKind::String(terminated) => self.string(token, terminated),

            RawKind::Delimiter => Self::delimiter(token.text),
            RawKind::Operator | RawKind::Symbol => match Symbol::from_text(token.text) {
                Some(symbol) => Kind::Symbol(symbol),
                None => Kind::Operator,
            },

            RawKind::Unknown => {
                let e = self.errors.cook_error(token.span).unknown_token(token.text);
                Kind::Unknown(e)
            }
        };

        token.with_kind(kind)
    }

    fn name(text: &str) -> Kind {
        if let Some(keyword) = Keyword::from_name(text) {
            return Kind::Keyword(keyword);
        }

        match text {
            "True" => Kind::Bool(true),
            "False" => Kind::Bool(false),
            _ if text.starts_with(char::is_uppercase) => Kind::Type,
            _ => Kind::Identifier,
        }
    }

    fn delimiter(text: &str) -> Kind {
        match text {
            "(" => Kind::Open(Delimiter::Paren),
            ")" => Kind::Close(Delimiter::Paren),
            "[" => Kind::Open(Delimiter::Bracket),
            "]" => Kind::Close(Delimiter::Bracket),
            "{" => Kind::Open(Delimiter::Brace),
            "}" => Kind::Close(Delimiter::Brace),
            _ => unreachable!("the lexer only produces single character delimiters"),
        }
    }

    fn number(&mut self, token: &RawToken, base: Base) -> Kind {
        let (digits, suffix_text) = split_number(token.text, base);

        let suffix = match suffix_text {
            "" => None,
            text => match Suffix::from_text(text) {
                Some(suffix) => Some(suffix),
                None => {
                    let e = self.errors.cook_error(token.span).invalid_suffix(text);
                    return Kind::Invalid(e);
                }
            },
        };

        if digits.contains('.') || suffix == Some(Suffix::Float) {
            self.float(token, base, digits, suffix)
        } else {
            self.integer(token, base, digits, suffix)
        }
    }

    fn float(&mut self, token: &RawToken, base: Base, digits: &str, suffix: Option<Suffix>) -> Kind {
        if digits.matches('.').count() > 1 {
            let e = self.errors.cook_error(token.span).invalid_float(token.text);
            return Kind::Invalid(e);
        }

        if base != Base::Decimal {
            let e = self.errors.cook_error(token.span).float_in_base(base);
            return Kind::Invalid(e);
        }

        let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
        match cleaned.parse() {
            Ok(value) => Kind::Float { value, suffix },
            Err(_) => Kind::Invalid(self.errors.cook_error(token.span).invalid_float(token.text)),
        }
    }

    fn integer(&mut self, token: &RawToken, base: Base, digits: &str, suffix: Option<Suffix>) -> Kind {
        match parse_integer(digits, base) {
            Some(value) => Kind::Integer { base, value, suffix },
            None => Kind::Invalid(self.errors.cook_error(token.span).number_without_digits()),
        }
    }

    fn string(&mut self, token: &RawToken, terminated: bool) -> Kind {
        let content = if terminated {
            &token.text[1..token.text.len() - 1]
        } else {
            self.errors.cook_error(token.span).unterminated_string();
            &token.text[1..]
        };

        Kind::String(unescape(content))
    }
}

/// Split the text of a number (after its base prefix) into the digit run and
/// the suffix. The digit run is the longest prefix made of digits valid in the
/// base, separating underscores, and dots.
pub(crate) fn split_number(text: &str, base: Base) -> (&str, &str) {
    let text = &text[base.prefix_len()..];
    let radix = base.radix();

    let end = text
        .find(|c: char| !(c.is_digit(radix) || c == '_' || c == '.'))
        .unwrap_or(text.len());

    text.split_at(end)
}

/// Parse a run of digits in the given base, ignoring underscores. Gives `None`
/// if there are no digits at all.
pub(crate) fn parse_integer(digits: &str, base: Base) -> Option<Integer> {
    let radix = base.radix();
    let mut res = Integer::ZERO;
    let mut any = false;

    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            continue;
        };

        res = res * Integer::from(radix) + Integer::from(digit);
        any = true;
    }

    any.then_some(res)
}

/// Replace the escape sequences `\"`, `\n`, `\t`, `\r` and `\\`, left to right.
/// Any other backslash is kept as is.
pub(crate) fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        let escaped = match chars.peek() {
            Some('"') => '"',
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('\\') => '\\',
            _ => {
                result.push(c);
                continue;
            }
        };

        chars.next();
        result.push(escaped);
    }

    result
}
