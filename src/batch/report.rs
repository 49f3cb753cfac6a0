//! Renders errors for the terminal, pointing at the offending source lines.

use std::fmt::Write;

use lmd_compiler::errors::{Error, Message};
use lmd_compiler::source::Sources;

pub fn render(sources: &Sources, error: &Error) -> String {
    let mut out = String::new();

    message(&mut out, sources, "error", &error.primary, '^');
    for label in error.secondary.iter() {
        message(&mut out, sources, "note", label, '-');
    }

    out
}

fn message(out: &mut String, sources: &Sources, level: &str, message: &Message, mark: char) {
    let source = sources.get(message.span.source);
    let at = source.line_col(message.span.start);
    let column = source.line(at.line)[..at.column].chars().count();

    let _ = writeln!(out, "{level}: {}", message.text);
    let _ = writeln!(out, "  --> {}:{}:{}", source.name, at.line + 1, column + 1);

    let parts = source.split(message.span);
    let gutter = parts
        .last()
        .map(|part| (source.line_col(part.start).line + 1).to_string().len())
        .unwrap_or(1);

    let _ = writeln!(out, "{:gutter$} |", "");
    for part in parts {
        let at = source.line_col(part.start);
        let line = source.line(at.line);
        let indent = line[..at.column].chars().count();
        let width = source.slice(part).chars().count().max(1);

        let _ = writeln!(out, "{:>gutter$} | {line}", at.line + 1);
        let _ = writeln!(
            out,
            "{:gutter$} | {}{}",
            "",
            " ".repeat(indent),
            mark.to_string().repeat(width)
        );
    }
}

#[cfg(test)]
mod tests {
    use lmd_compiler::errors::{Error, ErrorType};
    use lmd_compiler::source::Sources;

    use super::render;

    #[test]
    fn single_line() {
        let mut sources = Sources::new();
        let id = sources.add("main.lmd", "const x = 1\nconst y = a $$ b\n");

        let error = Error::new(ErrorType::Operator, id.span(24, 26), "Unknown operator: `$$`");
        let expected = "\
error: Unknown operator: `$$`
  --> main.lmd:2:13
  |
2 | const y = a $$ b
  |             ^^
";

        assert_eq!(expected, render(&sources, &error));
    }

    #[test]
    fn end_of_input() {
        let mut sources = Sources::new();
        let id = sources.add("main.lmd", "const x =");

        let error = Error::new(ErrorType::Syntax, id.span(9, 9), "Unexpected token: `<eof>`");
        let expected = "\
error: Unexpected token: `<eof>`
  --> main.lmd:1:10
  |
1 | const x =
  |          ^
";

        assert_eq!(expected, render(&sources, &error));
    }

    #[test]
    fn labels_and_multiple_lines() {
        let mut sources = Sources::new();
        let a = sources.add("a", "const x =\n  1");
        let b = sources.add("b", "const x = 2");

        let error = Error::new(ErrorType::Name, a.span(0, 13), "Multiple definitions of `x`")
            .with_label(b.span(0, 11), "Defined here");

        let expected = "\
error: Multiple definitions of `x`
  --> a:1:1
  |
1 | const x =
  | ^^^^^^^^^
2 |   1
  | ^^^
note: Defined here
  --> b:1:1
  |
1 | const x = 2
  | -----------
";

        assert_eq!(expected, render(&sources, &error));
    }
}
