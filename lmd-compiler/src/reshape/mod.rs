//! Gives flat expressions their final shape. Application binds tightest, and
//! the binary operators are arranged by precedence climbing using a table
//! supplied by the caller.

pub use self::operators::{Associativity, OperatorTable, Precedence};

mod operators;


use bumpalo::Bump;
use log::debug;

use crate::errors::{ErrorId, Errors};
use crate::source::Span;
use crate::trees::{Node, NodeKind};

/// Rebuild `node` with every flat expression replaced by its reshaped form.
/// An expression using an undeclared operator becomes an `Invalid` node.
pub fn reshape<'a>(
    alloc: &'a Bump,
    node: &'a Node<'a>,
    table: &OperatorTable,
    errors: &mut Errors,
) -> &'a Node<'a> {
    debug!("reshaping with {} operators", table.len());
    let mut reshaper = Reshaper { alloc, table, errors };
    reshaper.node(node)
}

struct Reshaper<'a, 't, 'e> {
    alloc: &'a Bump,
    table: &'t OperatorTable,
    errors: &'e mut Errors,
}

impl<'a> Reshaper<'a, '_, '_> {
    fn node(&mut self, node: &'a Node<'a>) -> &'a Node<'a> {
        let kind = match node.kind {
            NodeKind::Program(statements) => NodeKind::Program(self.nodes(statements)),
            NodeKind::Pub(inner) => NodeKind::Pub(self.node(inner)),
            NodeKind::Use(_) => return node,
            NodeKind::Const(names, value) => NodeKind::Const(names, self.node(value)),
            NodeKind::Fn(args, body) => NodeKind::Fn(args, self.node(body)),
            NodeKind::Let(name, value, body) => {
                NodeKind::Let(name, self.node(value), self.node(body))
            }
            NodeKind::If(condition, then, elze) => {
                NodeKind::If(self.node(condition), self.node(then), self.node(elze))
            }

            NodeKind::Token(_) | NodeKind::QualifiedIdentifier(_) | NodeKind::Invalid(_) => {
                return node
            }

            NodeKind::Expression(items) => return self.expression(node.span, items),
            NodeKind::Parenthesised(inner) => NodeKind::Parenthesised(self.node(inner)),
            NodeKind::Binary(left, op, right) => {
                NodeKind::Binary(self.node(left), op, self.node(right))
            }
            NodeKind::Call(function, arguments) => {
                NodeKind::Call(self.node(function), self.nodes(arguments))
            }
        };

        self.alloc.alloc(Node::new(kind, node.span))
    }

    fn nodes(&mut self, nodes: &'a [&'a Node<'a>]) -> &'a [&'a Node<'a>] {
        let nodes: Vec<_> = nodes.iter().map(|&node| self.node(node)).collect();
        self.alloc.alloc_slice_copy(&nodes)
    }

    fn expression(&mut self, span: Span, items: &'a [&'a Node<'a>]) -> &'a Node<'a> {
        let items: Vec<_> = items.iter().map(|&item| self.node(item)).collect();

        let mut climber = Climber {
            alloc: self.alloc,
            table: self.table,
            errors: &mut *self.errors,
            items: &items,
            at: 0,
            failed: None,
        };

        let shaped = climber.climb(None);
        match climber.failed {
            Some(e) => &*self.alloc.alloc(Node::new(NodeKind::Invalid(e), span)),
            None => shaped,
        }
    }
}

/// Precedence climbing over the items of a single flat expression.
struct Climber<'a, 'r> {
    alloc: &'a Bump,
    table: &'r OperatorTable,
    errors: &'r mut Errors,

    items: &'r [&'a Node<'a>],
    at: usize,

    /// Set once an undeclared operator has been reported.
    failed: Option<ErrorId>,
}

impl<'a> Climber<'a, '_> {
    /// Parse a term followed by every operator that binds tighter than
    /// `governing`, which is the operator to the left of the term.
    fn climb(&mut self, governing: Option<(&'a Node<'a>, Precedence)>) -> &'a Node<'a> {
        let mut left = self.term();

        while let Some(op) = self.items.get(self.at).copied().filter(|item| item.is_operator()) {
            let Some(precedence) = self.precedence(op) else {
                self.at = self.items.len();
                break;
            };

            if !binds_before(governing, op, precedence) {
                break;
            }

            self.at += 1;
            let right = self.climb(Some((op, precedence)));
            let span = left.span + op.span + right.span;
            left = self.alloc.alloc(Node::new(NodeKind::Binary(left, op, right), span));
        }

        left
    }

    /// The maximal run of non-operators. Two or more make an application.
    fn term(&mut self) -> &'a Node<'a> {
        let start = self.at;
        while self.items.get(self.at).is_some_and(|item| !item.is_operator()) {
            self.at += 1;
        }

        let items = self.items;
        match &items[start..self.at] {
            [] => unreachable!("every operator in a flat expression is followed by a term"),
            [single] => *single,
            [function, arguments @ ..] => {
                let function = *function;
                let span = Span::wrapping(arguments.iter().map(|node| node.span))
                    .map_or(function.span, |span| function.span + span);
                let arguments = self.alloc.alloc_slice_copy(arguments);
                &*self.alloc.alloc(Node::new(NodeKind::Call(function, arguments), span))
            }
        }
    }

    fn precedence(&mut self, op: &'a Node<'a>) -> Option<Precedence> {
        let text = op.as_token().map(|token| token.text).unwrap_or_default();
        let precedence = self.table.get(text);

        if precedence.is_none() && self.failed.is_none() {
            self.failed = Some(self.errors.reshape_error(op.span).unknown_operator(text));
        }

        precedence
    }
}

/// Whether the operator `op` to the right of a term takes that term before
/// the operator `governing` on its left does.
fn binds_before(
    governing: Option<(&Node, Precedence)>,
    op: &Node,
    precedence: Precedence,
) -> bool {
    let Some((left, left_precedence)) = governing else {
        return true;
    };

    let same = left.as_token().map(|token| token.text) == op.as_token().map(|token| token.text);
    if same {
        precedence.associativity == Associativity::Right
    } else {
        left_precedence.priority < precedence.priority
    }
}
