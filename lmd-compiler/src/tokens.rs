use std::fmt;

use crate::source::Span;

/// A classified slice of source text. The kind depends on the stage: raw
/// tokens carry a [`RawKind`](crate::lex::RawKind), cooked tokens a
/// [`Kind`](crate::cook::Kind).
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src, K> {
    pub span: Span,
    pub kind: K,

    /// Always exactly the source text covered by `span`.
    pub text: &'src str,
}

impl<'src, K> Token<'src, K> {
    pub fn new(span: Span, kind: K, text: &'src str) -> Self {
        debug_assert_eq!(span.len(), text.len());
        Self { span, kind, text }
    }

    /// Create a token with a new kind covering the same text.
    pub fn with_kind<L>(&self, kind: L) -> Token<'src, L> {
        Token { span: self.span, kind, text: self.text }
    }
}

impl<K: fmt::Debug> fmt::Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}: {:?} {:?}", self.span.start, self.span.end, self.kind, self.text)
    }
}
