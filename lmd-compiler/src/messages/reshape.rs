use crate::errors::{Error, ErrorId, ErrorType, Errors};
use crate::source::Span;

impl Errors {
    pub(crate) fn reshape_error(&mut self, at: Span) -> ReshapeErrors {
        ReshapeErrors { errors: self, primary: at }
    }
}

pub(crate) struct ReshapeErrors<'a> {
    errors: &'a mut Errors,
    primary: Span,
}

impl ReshapeErrors<'_> {
    pub fn unknown_operator(&mut self, op: &str) -> ErrorId {
        let error = self.error(format!("Unknown operator: `{op}`"));
        self.errors.add(error)
    }

    fn error(&mut self, title: impl Into<String>) -> Error {
        Error::new(ErrorType::Operator, self.primary, title)
    }
}
