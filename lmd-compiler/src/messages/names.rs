use crate::errors::{Error, ErrorId, ErrorType, Errors};
use crate::source::Span;

impl Errors {
    pub(crate) fn name_error(&mut self, at: Span) -> NameErrors {
        NameErrors { errors: self, primary: at }
    }
}

pub(crate) struct NameErrors<'a> {
    errors: &'a mut Errors,
    primary: Span,
}

impl NameErrors<'_> {
    pub fn multiple_definitions(&mut self, name: &str, definitions: &[Span]) -> ErrorId {
        let error = definitions
            .iter()
            .fold(self.error(format!("Multiple definitions of `{name}`")), |error, span| {
                error.with_label(*span, "Defined here")
            });
        self.errors.add(error)
    }

    fn error(&mut self, title: impl Into<String>) -> Error {
        Error::new(ErrorType::Name, self.primary, title)
    }
}
