//! Runs the front end stage by stage. A stage only ever sees the output of a
//! previous stage if that stage reported nothing.

use bumpalo::Bump;
use log::debug;

use crate::cook::{self, CookedToken};
use crate::errors::Errors;
use crate::lex;
use crate::parse;
use crate::reshape::{self, OperatorTable};
use crate::source::Source;
use crate::trees::Node;

/// Lex and cook a source, dropping whitespace and comments. Gives `None` if
/// cooking reported any errors.
pub fn tokens<'src>(source: &'src Source, errors: &mut Errors) -> Option<Vec<CookedToken<'src>>> {
    let reported = errors.num_errors();

    debug!("lexing `{}`", source.name);
    let raw = lex::lex(source);

    debug!("cooking `{}`", source.name);
    let cooked = cook::cook(&raw, errors);

    if errors.num_errors() > reported {
        debug!("cooking `{}` failed with {} errors", source.name, errors.num_errors() - reported);
        return None;
    }

    Some(cooked.into_iter().filter(|token| !cook::is_trivia(token)).collect())
}

/// Parse and reshape the tokens of a source. Gives `None` if either stage
/// reported any errors.
pub fn check<'a>(
    alloc: &'a Bump,
    source: &Source,
    tokens: &'a [CookedToken<'a>],
    table: &OperatorTable,
    errors: &mut Errors,
) -> Option<&'a Node<'a>> {
    let reported = errors.num_errors();

    debug!("parsing `{}`", source.name);
    let program = parse::parse(alloc, source, tokens, errors);
    if errors.num_errors() > reported {
        debug!("parsing `{}` failed", source.name);
        return None;
    }

    debug!("reshaping `{}`", source.name);
    let program = reshape::reshape(alloc, program, table, errors);
    if errors.num_errors() > reported {
        debug!("reshaping `{}` failed", source.name);
        return None;
    }

    Some(program)
}
