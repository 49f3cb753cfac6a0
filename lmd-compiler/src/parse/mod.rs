//! Builds a syntax tree out of cooked, trivia-free tokens. Expressions come
//! out flat; see [`reshape`](crate::reshape) for precedence.

mod combinators;
mod grammar;


use bumpalo::Bump;
use log::debug;

use crate::cook::{CookedToken, Kind};
use crate::errors::Errors;
use crate::source::Source;
use crate::tokens::Token;
use crate::trees::{Node, NodeKind};

use self::combinators::Cursor;

/// Parse a whole program. Syntax errors are added to `errors`; the returned
/// program then contains every statement that was parsed completely before
/// the first error.
pub fn parse<'a>(
    alloc: &'a Bump,
    source: &Source,
    tokens: &'a [CookedToken<'a>],
    errors: &mut Errors,
) -> &'a Node<'a> {
    debug!("parsing {} tokens", tokens.len());

    let eof: &'a CookedToken<'a> = alloc.alloc(eof_token(source, tokens));
    let cursor = Cursor::new(alloc, tokens, eof);

    let outcome = grammar::program().parse(cursor, false);
    debug!("parsed with {:?}", outcome.state);
    errors.extend(outcome.errors);

    let start = cursor.peek().span.start;
    let span = source.id.span(start, eof.span.end.max(start));
    let statements = alloc.alloc_slice_copy(&outcome.values);
    alloc.alloc(Node::new(NodeKind::Program(statements), span))
}

/// The end of input is an empty span just past the last token.
fn eof_token<'a>(source: &Source, tokens: &[CookedToken<'a>]) -> CookedToken<'a> {
    let end = tokens.last().map_or(0, |token| token.span.end);
    Token::new(source.id.span(end, end), Kind::Eof, "")
}
