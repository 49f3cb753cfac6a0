//! Splits source text into raw tokens. Lexing is total and lossless: every
//! byte of the source ends up in exactly one token, and malformed input only
//! ever produces `Unknown` tokens or tokens flagged as unterminated. No errors
//! are reported here; they are left for the cooker.

pub use self::raw::{Base, RawKind};

mod raw;

#[cfg(test)]
mod tests;

use log::trace;
use logos::Logos;

use crate::source::Source;
use crate::tokens::Token;

pub type RawToken<'src> = Token<'src, RawKind>;

pub fn tokens(source: &Source) -> impl Iterator<Item = RawToken<'_>> {
    RawKind::lexer(&source.content).spanned().map(|(result, range)| {
        let span = source.id.span(range.start, range.end);
        let kind = result.unwrap_or(RawKind::Unknown);
        Token::new(span, kind, &source.content[range])
    })
}

pub fn lex(source: &Source) -> Vec<RawToken<'_>> {
    let tokens: Vec<_> = tokens(source).collect();
    trace!("lexed {} raw tokens from `{}`", tokens.len(), source.name);
    tokens
}
