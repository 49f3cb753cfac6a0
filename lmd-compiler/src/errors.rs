use crate::source::Span;

/// Identifies a particular reported message.
#[must_use]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ErrorId(usize);

impl ErrorId {
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

/// Stores reported errors in the order they were reported.
#[derive(Clone, Debug, Default)]
pub struct Errors {
    errors: Vec<Error>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: Error) -> ErrorId {
        let id = ErrorId(self.errors.len());
        self.errors.push(error);
        id
    }

    /// Record an error that no tree node refers to.
    pub fn report(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, errors: impl IntoIterator<Item = Error>) {
        self.errors.extend(errors);
    }

    pub fn get(&self, id: ErrorId) -> &Error {
        &self.errors[id.0]
    }

    pub fn is_perfect(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn num_errors(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Error> + '_ {
        self.errors.iter()
    }
}

/// A piece of text attached to a particular span.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    pub span: Span,
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct Error {
    pub ty: ErrorType,
    pub primary: Message,
    pub secondary: Vec<Message>,
}

impl Error {
    pub fn new(ty: ErrorType, at: Span, text: impl Into<String>) -> Self {
        Self {
            ty,
            primary: Message { span: at, text: text.into() },
            secondary: Vec::new(),
        }
    }

    pub fn with_label(mut self, at: Span, text: impl Into<String>) -> Self {
        self.secondary.push(Message { span: at, text: text.into() });
        self
    }

    pub fn title(&self) -> &str {
        &self.primary.text
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ErrorType {
    /// Malformed tokens, reported while cooking.
    Lexical,
    Syntax,
    Operator,
    Name,
}
