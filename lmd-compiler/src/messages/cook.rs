use crate::errors::{Error, ErrorId, ErrorType, Errors};
use crate::lex::Base;
use crate::source::Span;

impl Errors {
    pub(crate) fn cook_error(&mut self, at: Span) -> CookErrors {
        CookErrors { errors: self, primary: at }
    }
}

pub(crate) struct CookErrors<'a> {
    errors: &'a mut Errors,
    primary: Span,
}

impl CookErrors<'_> {
    pub fn float_in_base(&mut self, base: Base) -> ErrorId {
        let name = match base {
            Base::Binary => "Binary",
            Base::Octal => "Octal",
            Base::Decimal => "Decimal",
            Base::Hexadecimal => "Hexadecimal",
        };

        let error = self.error(format!("{name} float literals are not supported"));
        self.errors.add(error)
    }

    pub fn invalid_float(&mut self, text: &str) -> ErrorId {
        let error = self.error(format!("Invalid float literal: `{text}`"));
        self.errors.add(error)
    }

    pub fn invalid_suffix(&mut self, suffix: &str) -> ErrorId {
        let error = self.error(format!("Invalid number suffix: `{suffix}`"));
        self.errors.add(error)
    }

    pub fn number_without_digits(&mut self) -> ErrorId {
        let error = self.error("Number without digits");
        self.errors.add(error)
    }

    pub fn unknown_token(&mut self, text: &str) -> ErrorId {
        let error = self.error(format!("Unknown token: `{text}`"));
        self.errors.add(error)
    }

    /// The comment still becomes trivia, so nothing refers to this error.
    pub fn unterminated_comment(&mut self) {
        let error = self.error("Unterminated comment");
        self.errors.report(error);
    }

    /// The string keeps its content, so nothing refers to this error.
    pub fn unterminated_string(&mut self) {
        let error = self.error("Unterminated string");
        self.errors.report(error);
    }

    fn error(&mut self, title: impl Into<String>) -> Error {
        Error::new(ErrorType::Lexical, self.primary, title)
    }
}
