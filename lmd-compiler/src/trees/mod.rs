//! The syntax tree. Nodes live in an arena and refer to their children and
//! tokens by reference only, so dropping the arena never needs to run any
//! destructors.

pub use self::pretty::Pretty;

mod pretty;

use crate::cook::{CookedToken, Kind};
use crate::errors::ErrorId;
use crate::source::Span;

#[derive(Debug)]
pub struct Node<'a> {
    pub kind: NodeKind<'a>,
    pub span: Span,
}

#[derive(Debug)]
pub enum NodeKind<'a> {
    Program(&'a [&'a Node<'a>]),

    /// A `pub` marker wrapping a declaration.
    Pub(&'a Node<'a>),
    Use(&'a Node<'a>),
    /// `const` with the declared name first, followed by any parameters.
    Const(&'a [&'a Node<'a>], &'a Node<'a>),

    Fn(&'a [&'a Node<'a>], &'a Node<'a>),
    Let(&'a Node<'a>, &'a Node<'a>, &'a Node<'a>),
    If(&'a Node<'a>, &'a Node<'a>, &'a Node<'a>),

    Token(&'a CookedToken<'a>),
    /// A dotted path with at least two segments.
    QualifiedIdentifier(&'a [&'a Node<'a>]),

    /// A flat run of terms and operators whose precedence is not yet known.
    /// Never present after reshaping.
    Expression(&'a [&'a Node<'a>]),
    Parenthesised(&'a Node<'a>),
    Binary(&'a Node<'a>, &'a Node<'a>, &'a Node<'a>),
    Call(&'a Node<'a>, &'a [&'a Node<'a>]),

    /// A subtree that could not be built. The error has been reported.
    Invalid(ErrorId),
}

impl<'a> Node<'a> {
    pub fn new(kind: NodeKind<'a>, span: Span) -> Self {
        Self { kind, span }
    }

    /// The token this node consists of, if it is a single token.
    pub fn as_token(&self) -> Option<&'a CookedToken<'a>> {
        match self.kind {
            NodeKind::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn is_operator(&self) -> bool {
        self.as_token().is_some_and(|token| matches!(token.kind, Kind::Operator))
    }

    /// Iterate over the immediate children of this node, in source order.
    pub fn children(&self) -> Vec<&'a Node<'a>> {
        match &self.kind {
            NodeKind::Program(nodes)
            | NodeKind::QualifiedIdentifier(nodes)
            | NodeKind::Expression(nodes) => nodes.to_vec(),

            NodeKind::Pub(inner) | NodeKind::Use(inner) | NodeKind::Parenthesised(inner) => {
                vec![*inner]
            }

            NodeKind::Const(names, value) | NodeKind::Fn(names, value) => {
                names.iter().copied().chain([*value]).collect()
            }

            NodeKind::Call(function, arguments) => {
                std::iter::once(*function).chain(arguments.iter().copied()).collect()
            }

            NodeKind::Let(a, b, c) | NodeKind::If(a, b, c) | NodeKind::Binary(a, b, c) => {
                vec![*a, *b, *c]
            }

            NodeKind::Token(_) | NodeKind::Invalid(_) => Vec::new(),
        }
    }

    /// Check whether any node in this tree is a flat, unreshaped expression.
    pub fn has_flat_expressions(&self) -> bool {
        matches!(self.kind, NodeKind::Expression(_))
            || self.children().into_iter().any(Node::has_flat_expressions)
    }
}
