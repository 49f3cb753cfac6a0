use proptest::{prop_assert, prop_assert_eq, proptest};

use super::{lex, Base, RawKind};
use crate::source::Sources;

fn kinds(text: &str) -> Vec<(RawKind, String)> {
    let mut sources = Sources::new();
    let id = sources.add("test", text);
    lex(sources.get(id))
        .into_iter()
        .map(|token| (token.kind, token.text.to_string()))
        .collect()
}

fn single(kind: RawKind, text: &str) -> Vec<(RawKind, String)> {
    vec![(kind, text.to_string())]
}

#[test]
fn names() {
    assert_eq!(single(RawKind::Name, "abc"), kinds("abc"));
    assert_eq!(single(RawKind::Name, "_x'1"), kinds("_x'1"));
    assert_eq!(single(RawKind::Name, "'a"), kinds("'a"));
    assert_eq!(single(RawKind::Name, "æøå"), kinds("æøå"));
}

#[test]
fn whitespace_runs() {
    let expected = vec![
        (RawKind::Name, "a".to_string()),
        (RawKind::Whitespace, " \t\r\n ".to_string()),
        (RawKind::Name, "b".to_string()),
    ];
    assert_eq!(expected, kinds("a \t\r\n b"));
}

#[test]
fn number_bases() {
    assert_eq!(single(RawKind::Number(Base::Decimal), "123"), kinds("123"));
    assert_eq!(single(RawKind::Number(Base::Decimal), "1_2_3"), kinds("1_2_3"));
    assert_eq!(single(RawKind::Number(Base::Decimal), "0123"), kinds("0123"));
    assert_eq!(single(RawKind::Number(Base::Hexadecimal), "0xdead_beef"), kinds("0xdead_beef"));
    assert_eq!(single(RawKind::Number(Base::Octal), "0o777"), kinds("0o777"));
    assert_eq!(single(RawKind::Number(Base::Binary), "0b101"), kinds("0b101"));
}

#[test]
fn numbers_are_not_validated() {
    assert_eq!(single(RawKind::Number(Base::Decimal), "123ab"), kinds("123ab"));
    assert_eq!(single(RawKind::Number(Base::Octal), "0o8"), kinds("0o8"));
    assert_eq!(single(RawKind::Number(Base::Decimal), "1.2.3"), kinds("1.2.3"));
}

#[test]
fn number_leaves_trailing_dot() {
    let expected = vec![
        (RawKind::Number(Base::Decimal), "1".to_string()),
        (RawKind::Operator, ".".to_string()),
    ];
    assert_eq!(expected, kinds("1."));
}

#[test]
fn number_leaves_double_dot() {
    let expected = vec![
        (RawKind::Number(Base::Decimal), "1".to_string()),
        (RawKind::Operator, "..".to_string()),
        (RawKind::Number(Base::Decimal), "2".to_string()),
    ];
    assert_eq!(expected, kinds("1..2"));
}

#[test]
fn floats() {
    assert_eq!(single(RawKind::Number(Base::Decimal), "123.456"), kinds("123.456"));
    assert_eq!(single(RawKind::Number(Base::Hexadecimal), "0x1.0"), kinds("0x1.0"));
}

#[test]
fn strings() {
    assert_eq!(single(RawKind::String(true), r#""abc""#), kinds(r#""abc""#));
    assert_eq!(single(RawKind::String(true), r#""a\"b""#), kinds(r#""a\"b""#));
    assert_eq!(single(RawKind::String(true), r#""a\qb""#), kinds(r#""a\qb""#));
    assert_eq!(single(RawKind::String(false), r#""abc"#), kinds(r#""abc"#));
    assert_eq!(single(RawKind::String(false), r#""abc\""#), kinds(r#""abc\""#));
}

#[test]
fn line_comment_stops_at_newline() {
    let expected = vec![
        (RawKind::LineComment, "-- hi".to_string()),
        (RawKind::Whitespace, "\n".to_string()),
        (RawKind::Name, "x".to_string()),
    ];
    assert_eq!(expected, kinds("-- hi\nx"));
}

#[test]
fn nested_block_comments() {
    let expected = vec![
        (RawKind::BlockComment(true), "{- a {- b -} c -}".to_string()),
        (RawKind::Name, "x".to_string()),
    ];
    assert_eq!(expected, kinds("{- a {- b -} c -}x"));
}

#[test]
fn unterminated_block_comment() {
    assert_eq!(single(RawKind::BlockComment(false), "{- a {- b -} c"), kinds("{- a {- b -} c"));
}

#[test]
fn symbols() {
    let expected = vec![
        (RawKind::Delimiter, "(".to_string()),
        (RawKind::Operator, "+=>".to_string()),
        (RawKind::Delimiter, ")".to_string()),
        (RawKind::Symbol, ":".to_string()),
        (RawKind::Symbol, ";".to_string()),
        (RawKind::Symbol, ",".to_string()),
        (RawKind::Delimiter, "{".to_string()),
        (RawKind::Delimiter, "]".to_string()),
    ];
    assert_eq!(expected, kinds("(+=>):;,{]"));
}

#[test]
fn unknown_characters_are_single() {
    let expected = vec![
        (RawKind::Unknown, "@".to_string()),
        (RawKind::Unknown, "#".to_string()),
        (RawKind::Unknown, "€".to_string()),
    ];
    assert_eq!(expected, kinds("@#€"));
}

#[test]
fn multi_byte_characters_stay_whole() {
    let expected = vec![
        (RawKind::Unknown, "☃".to_string()),
        (RawKind::Unknown, "🦀".to_string()),
        (RawKind::Whitespace, " ".to_string()),
        (RawKind::Name, "e".to_string()),
        (RawKind::Unknown, "\u{301}".to_string()),
    ];
    assert_eq!(expected, kinds("☃🦀 e\u{301}"));
}

#[test]
fn empty_source() {
    assert!(kinds("").is_empty());
}

proptest! {
    #[test]
    fn lossless(s in r"\PC*") {
        let lexed = kinds(&s);
        let joined: String = lexed.iter().map(|(_, text)| text.as_str()).collect();
        prop_assert_eq!(s, joined);
    }

    #[test]
    fn spans_are_contiguous(s in r"[a-z0-9 \n\-{}()+.\x22\\]*") {
        let mut sources = Sources::new();
        let id = sources.add("test", s.clone());
        let source = sources.get(id);

        let mut at = 0;
        for token in lex(source) {
            prop_assert_eq!(at, token.span.start);
            prop_assert!(token.span.start < token.span.end);
            prop_assert_eq!(source.slice(token.span), token.text);
            at = token.span.end;
        }

        prop_assert_eq!(s.len(), at);
    }
}
