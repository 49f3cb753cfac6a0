use std::fmt::Write;

use crate::cook::Kind;
use crate::errors::ErrorId;

use super::{Node, NodeKind};

/// Renders a tree as an indented outline, one node per line.
#[derive(Debug, Default)]
pub struct Pretty {
    show_spans: bool,
    show_error_id: bool,
}

impl Pretty {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_show_spans(self, show_spans: bool) -> Self {
        Self { show_spans, ..self }
    }

    pub fn with_show_error_id(self, show_error_id: bool) -> Self {
        Self { show_error_id, ..self }
    }

    pub fn node(&self, node: &Node) -> String {
        let mut printer = Printer { pretty: self, out: String::new(), depth: 0 };
        printer.node(node);
        printer.out
    }
}

struct Printer<'p> {
    pretty: &'p Pretty,
    out: String,
    depth: usize,
}

impl Printer<'_> {
    fn node(&mut self, node: &Node) {
        match &node.kind {
            NodeKind::Program(statements) => {
                self.line(node, "program");
                self.nested(statements.iter().copied());
            }

            NodeKind::Pub(inner) => {
                self.line(node, "pub");
                self.nested([*inner]);
            }

            NodeKind::Use(path) => {
                self.line(node, "use");
                self.nested([*path]);
            }

            NodeKind::Const(names, value) => {
                self.line(node, "const");
                self.nested(names.iter().copied().chain([*value]));
            }

            NodeKind::Fn(args, body) => {
                self.line(node, "fn");
                self.nested(args.iter().copied());
                self.label("=>", body);
            }

            NodeKind::Let(name, value, body) => {
                self.line(node, "let");
                self.nested([*name, *value]);
                self.label("in", body);
            }

            NodeKind::If(condition, then, elze) => {
                self.line(node, "if");
                self.nested([*condition]);
                self.label("then", then);
                self.label("else", elze);
            }

            NodeKind::Token(token) => {
                let text = format!("token {} `{}`", describe(&token.kind), token.text);
                self.line(node, &text);
            }

            NodeKind::QualifiedIdentifier(segments) => {
                self.line(node, "qualified identifier");
                self.nested(segments.iter().copied());
            }

            NodeKind::Expression(items) => {
                self.line(node, "expr");
                self.nested(items.iter().copied());
            }

            NodeKind::Parenthesised(inner) => {
                self.line(node, "paren_expr");
                self.nested([*inner]);
            }

            NodeKind::Binary(left, op, right) => {
                self.line(node, "binary");
                self.depth += 1;
                self.label("left", left);
                self.label("operator", op);
                self.label("right", right);
                self.depth -= 1;
            }

            NodeKind::Call(function, arguments) => {
                self.line(node, "call");
                self.nested(std::iter::once(*function).chain(arguments.iter().copied()));
            }

            NodeKind::Invalid(e) => {
                let text = self.error(e);
                self.line(node, &text);
            }
        }
    }

    fn nested<'a>(&mut self, nodes: impl IntoIterator<Item = &'a Node<'a>>) {
        self.depth += 1;
        for node in nodes {
            self.node(node);
        }
        self.depth -= 1;
    }

    fn label(&mut self, label: &str, node: &Node) {
        self.indent();
        self.out.push_str(label);
        self.out.push('\n');
        self.nested([node]);
    }

    fn line(&mut self, node: &Node, text: &str) {
        self.indent();
        if self.pretty.show_spans {
            let _ = write!(self.out, "{}..{} ", node.span.start, node.span.end);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    fn error(&self, e: &ErrorId) -> String {
        if self.pretty.show_error_id {
            format!("<error {}>", e.as_usize())
        } else {
            "<error>".into()
        }
    }
}

fn describe(kind: &Kind) -> &'static str {
    match kind {
        Kind::Whitespace => "whitespace",
        Kind::Comment => "comment",
        Kind::Keyword(_) => "keyword",
        Kind::Identifier => "identifier",
        Kind::Type => "type",
        Kind::Bool(_) => "bool",
        Kind::Integer { .. } => "integer",
        Kind::Float { .. } => "float",
        Kind::String(_) => "string",
        Kind::Open(_) | Kind::Close(_) => "delimiter",
        Kind::Operator => "operator",
        Kind::Symbol(_) => "symbol",
        Kind::Unknown(_) => "unknown",
        Kind::Invalid(_) => "invalid",
        Kind::Eof => "eof",
    }
}
