use crate::cook::{Class, CookedToken, Kind};
use crate::errors::{Error, ErrorType};
use crate::source::Span;

/// Parse errors are built as values rather than reported directly, since an
/// alternative that backtracks throws its errors away.
pub struct ParseErrors<'t> {
    primary: Span,
    found: &'t str,
}

impl<'t> ParseErrors<'t> {
    pub fn at(token: &'t CookedToken<'t>) -> Self {
        let found = match token.kind {
            Kind::Eof => "<eof>",
            _ => token.text,
        };

        Self { primary: token.span, found }
    }

    pub fn expected_statement(self) -> Error {
        self.unexpected("`use` or declaration")
    }

    pub fn expected_expression(self) -> Error {
        self.unexpected("expression")
    }

    pub fn expected_path(self) -> Error {
        self.unexpected("identifier or type")
    }

    pub fn nested_too_deeply(self) -> Error {
        Error::new(ErrorType::Syntax, self.primary, "Expression nested too deeply")
    }

    pub fn expected(self, class: Class) -> Error {
        self.unexpected(&class.to_string())
    }

    fn unexpected(self, expected: &str) -> Error {
        let title = format!("Unexpected token: `{}`, expected {expected}", self.found);
        Error::new(ErrorType::Syntax, self.primary, title)
    }
}
