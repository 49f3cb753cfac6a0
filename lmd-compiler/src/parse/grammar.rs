use crate::cook::{Class, Delimiter, Keyword, Symbol};
use crate::trees::{Node, NodeKind};

use super::combinators::{fail, kind, lazy, Parser};

fn keyword<'a>(keyword: Keyword) -> Parser<'a> {
    kind(Class::Keyword(keyword)).drop()
}

fn symbol<'a>(symbol: Symbol) -> Parser<'a> {
    kind(Class::Symbol(symbol)).drop()
}

/// Every statement of a program, followed by the end of the input.
pub fn program<'a>() -> Parser<'a> {
    statement().repeat() + (kind(Class::Eof).drop() | fail(|e| e.expected_statement()))
}

fn statement<'a>() -> Parser<'a> {
    use_path() | pub_const() | constant()
}

fn use_path<'a>() -> Parser<'a> {
    (keyword(Keyword::Use) >> path().map(segments)).map(|_, values| NodeKind::Use(only(values)))
}

/// `(Type '.')* (Type | Identifier)`
fn path<'a>() -> Parser<'a> {
    kind(Class::Identifier)
        | (kind(Class::Type) + (symbol(Symbol::Dot) + lazy(path)).maybe())
        | fail(|e| e.expected_path())
}

fn pub_const<'a>() -> Parser<'a> {
    (keyword(Keyword::Pub) >> constant()).map(|_, values| NodeKind::Pub(only(values)))
}

fn constant<'a>() -> Parser<'a> {
    let body = kind(Class::Identifier).repeat1() + symbol(Symbol::Assign) + expression();
    (keyword(Keyword::Const) >> body).map(|alloc, values| {
        let (value, names) = split_last(&values);
        NodeKind::Const(alloc.alloc_slice_copy(names), value)
    })
}

/// A flat sequence of terms and operators. Precedence is sorted out later.
pub fn expression<'a>() -> Parser<'a> {
    let terms = || lazy(term).nested().repeat1();
    (terms() + (kind(Class::Operator) + terms()).repeat())
        .map(|alloc, values| NodeKind::Expression(alloc.alloc_slice_copy(&values)))
}

fn term<'a>() -> Parser<'a> {
    qualified_identifier()
        | kind(Class::Literal)
        | parenthesised()
        | if_expression()
        | fn_expression()
        | let_expression()
        | fail(|e| e.expected_expression())
}

/// `(Type '.')* Identifier`, as a single token when there is no qualification.
fn qualified_identifier<'a>() -> Parser<'a> {
    kind(Class::Identifier) | qualified_segments().map(segments)
}

fn qualified_segments<'a>() -> Parser<'a> {
    kind(Class::Identifier)
        | (kind(Class::Type) + symbol(Symbol::Dot) + lazy(qualified_segments))
}

fn parenthesised<'a>() -> Parser<'a> {
    let open = kind(Class::Open(Delimiter::Paren)).drop();
    let close = kind(Class::Close(Delimiter::Paren)).drop();
    (open >> (lazy(expression) + close)).map(|_, values| NodeKind::Parenthesised(only(values)))
}

fn if_expression<'a>() -> Parser<'a> {
    let branches = lazy(expression)
        + keyword(Keyword::Then)
        + lazy(expression)
        + keyword(Keyword::Else)
        + lazy(expression);

    (keyword(Keyword::If) >> branches).map(|_, values| {
        let [condition, then, elze] = exactly(values);
        NodeKind::If(condition, then, elze)
    })
}

fn fn_expression<'a>() -> Parser<'a> {
    let arrow = kind(Class::OperatorText("=>")).drop();
    let rest = lazy(qualified_identifier).repeat1() + arrow + lazy(expression);

    (keyword(Keyword::Fn) >> rest).map(|alloc, values| {
        let (body, args) = split_last(&values);
        NodeKind::Fn(alloc.alloc_slice_copy(args), body)
    })
}

fn let_expression<'a>() -> Parser<'a> {
    let rest = kind(Class::Identifier)
        + symbol(Symbol::Assign)
        + lazy(expression)
        + keyword(Keyword::In)
        + lazy(expression);

    (keyword(Keyword::Let) >> rest).map(|_, values| {
        let [name, value, body] = exactly(values);
        NodeKind::Let(name, value, body)
    })
}

/// A single token, or a qualified identifier of several.
fn segments<'a>(alloc: &'a bumpalo::Bump, values: Vec<&'a Node<'a>>) -> NodeKind<'a> {
    match values.as_slice() {
        [single] => match single.kind {
            NodeKind::Token(token) => NodeKind::Token(token),
            _ => unreachable!("path segments are always tokens"),
        },
        _ => NodeKind::QualifiedIdentifier(alloc.alloc_slice_copy(&values)),
    }
}

fn only<'a>(values: Vec<&'a Node<'a>>) -> &'a Node<'a> {
    let [node] = exactly(values);
    node
}

fn exactly<'a, const N: usize>(values: Vec<&'a Node<'a>>) -> [&'a Node<'a>; N] {
    let count = values.len();
    values
        .try_into()
        .unwrap_or_else(|_| unreachable!("expected {} values from a successful parse, got {}", N, count))
}

fn split_last<'v, 'a>(values: &'v [&'a Node<'a>]) -> (&'a Node<'a>, &'v [&'a Node<'a>]) {
    match values.split_last() {
        Some((last, rest)) => (*last, rest),
        None => unreachable!("a successful parse always produces its final value"),
    }
}
