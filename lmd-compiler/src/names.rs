use std::collections::HashMap;

use log::debug;

use crate::errors::{ErrorId, Errors};
use crate::source::Span;
use crate::trees::{Node, NodeKind};

/// Report every top-level name that is declared more than once across the
/// given programs. The first name of a `const` (public or not) is the one it
/// declares. Gives the reported errors, one per duplicated name.
pub fn check_definitions<'a>(
    programs: impl IntoIterator<Item = &'a Node<'a>>,
    errors: &mut Errors,
) -> Vec<ErrorId> {
    let mut definitions: HashMap<&str, Vec<Span>> = HashMap::new();

    for program in programs {
        let NodeKind::Program(statements) = program.kind else {
            continue;
        };

        for statement in statements {
            if let Some(name) = declared_name(statement) {
                definitions.entry(name).or_default().push(statement.span);
            }
        }
    }

    let mut duplicates: Vec<_> = definitions
        .into_iter()
        .filter(|(_, spans)| spans.len() > 1)
        .map(|(name, mut spans)| {
            spans.sort();
            (name, spans)
        })
        .collect();

    duplicates.sort_by_key(|(_, spans)| spans[0]);
    debug!("found {} names with multiple definitions", duplicates.len());

    duplicates
        .into_iter()
        .map(|(name, spans)| errors.name_error(spans[0]).multiple_definitions(name, &spans))
        .collect()
}

fn declared_name<'a>(statement: &Node<'a>) -> Option<&'a str> {
    match statement.kind {
        NodeKind::Pub(inner) => declared_name(inner),
        NodeKind::Const(names, _) => names.first()?.as_token().map(|token| token.text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;

    use crate::errors::Errors;
    use crate::pipeline;
    use crate::reshape::OperatorTable;
    use crate::source::Sources;

    use super::check_definitions;

    #[test]
    fn duplicates_across_sources() {
        let _ = pretty_env_logger::try_init();

        let mut sources = Sources::new();
        let a = sources.add("a", "const x = 1\npub const y = 2");
        let b = sources.add("b", "pub const x = 3\nconst z = 4\nconst y = 5");

        let alloc = Bump::new();
        let table = OperatorTable::new();
        let mut errors = Errors::new();

        let a_tokens = pipeline::tokens(sources.get(a), &mut errors).unwrap();
        let b_tokens = pipeline::tokens(sources.get(b), &mut errors).unwrap();
        let a_program = pipeline::check(&alloc, sources.get(a), &a_tokens, &table, &mut errors);
        let b_program = pipeline::check(&alloc, sources.get(b), &b_tokens, &table, &mut errors);
        assert!(errors.is_perfect());

        let programs = [a_program.unwrap(), b_program.unwrap()];
        let reported = check_definitions(programs, &mut errors);
        assert_eq!(2, reported.len());
        assert_eq!("Multiple definitions of `y`", errors.get(reported[1]).title());

        let found: Vec<_> = errors
            .iter()
            .map(|error| (error.title().to_string(), error.primary.span, error.secondary.len()))
            .collect();

        assert_eq!(
            vec![
                ("Multiple definitions of `x`".to_string(), a.span(0, 12), 2),
                ("Multiple definitions of `y`".to_string(), a.span(12, 27), 2),
            ],
            found
        );

        let labels: Vec<_> = errors.iter().next().unwrap().secondary.iter().map(|m| m.span).collect();
        assert_eq!(vec![a.span(0, 12), b.span(0, 16)], labels);
    }

    #[test]
    fn distinct_names_are_fine() {
        let mut sources = Sources::new();
        let id = sources.add("a", "const x = 1\nconst y = 2\nconst f a b = a");

        let alloc = Bump::new();
        let mut errors = Errors::new();
        let tokens = pipeline::tokens(sources.get(id), &mut errors).unwrap();
        let program =
            pipeline::check(&alloc, sources.get(id), &tokens, &OperatorTable::new(), &mut errors)
                .unwrap();

        assert!(check_definitions([program], &mut errors).is_empty());
        assert!(errors.is_perfect());
    }
}
