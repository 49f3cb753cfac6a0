//! A small backtracking parser combinator runtime over cooked tokens.
//!
//! Every parser is called with a `backtrack` flag. A parser that fails while
//! the flag is set gives back [`State::Backtracked`] and leaves the cursor
//! where it was, letting an enclosing alternative try something else. Without
//! the flag, failure is a hard [`State::Err`] carrying a message.

use std::cell::OnceCell;
use std::ops::{Add, BitOr, Shr};
use std::rc::Rc;

use bumpalo::Bump;

use crate::cook::{Class, CookedToken};
use crate::errors::Error;
use crate::messages::ParseErrors;
use crate::trees::{Node, NodeKind};

/// How many [`Parser::nested`] parsers may be active at once.
pub const MAX_DEPTH: usize = 64;

/// A position in a token stream. Copying a cursor is how the parser
/// backtracks.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    tokens: &'a [CookedToken<'a>],
    eof: &'a CookedToken<'a>,
    alloc: &'a Bump,
    index: usize,
    depth: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(alloc: &'a Bump, tokens: &'a [CookedToken<'a>], eof: &'a CookedToken<'a>) -> Self {
        Self { tokens, eof, alloc, index: 0, depth: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn alloc(&self) -> &'a Bump {
        self.alloc
    }

    /// The next token, or the end-of-file token once the stream is exhausted.
    pub fn peek(&self) -> &'a CookedToken<'a> {
        self.tokens.get(self.index).unwrap_or(self.eof)
    }

    fn advance(self) -> Self {
        Self { index: (self.index + 1).min(self.tokens.len()), ..self }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    Ok,
    Backtracked,
    Err,
}

pub struct Outcome<'a> {
    pub cursor: Cursor<'a>,
    pub values: Vec<&'a Node<'a>>,
    pub errors: Vec<Error>,
    pub state: State,
}

impl<'a> Outcome<'a> {
    pub fn ok(cursor: Cursor<'a>, values: Vec<&'a Node<'a>>) -> Self {
        Self { cursor, values, errors: Vec::new(), state: State::Ok }
    }

    pub fn backtracked(cursor: Cursor<'a>) -> Self {
        Self { cursor, values: Vec::new(), errors: Vec::new(), state: State::Backtracked }
    }

    pub fn err(cursor: Cursor<'a>, error: Error) -> Self {
        Self { cursor, values: Vec::new(), errors: vec![error], state: State::Err }
    }

    pub fn is_ok(&self) -> bool {
        self.state == State::Ok
    }

    /// Continue with a later outcome, keeping the values and errors gathered so
    /// far in front of the new ones.
    fn then(mut self, next: Outcome<'a>) -> Self {
        self.values.extend(next.values);
        self.errors.extend(next.errors);
        Self { cursor: next.cursor, state: next.state, ..self }
    }
}

type ParseFn<'a> = Rc<dyn Fn(Cursor<'a>, bool) -> Outcome<'a> + 'a>;

/// A type-erased, cheaply cloneable parser producing any number of nodes.
#[derive(Clone)]
pub struct Parser<'a> {
    run: ParseFn<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(run: impl Fn(Cursor<'a>, bool) -> Outcome<'a> + 'a) -> Self {
        Self { run: Rc::new(run) }
    }

    pub fn parse(&self, cursor: Cursor<'a>, backtrack: bool) -> Outcome<'a> {
        (self.run)(cursor, backtrack)
    }

    /// Run the parser but throw away the values it produces.
    pub fn drop(self) -> Self {
        Self::new(move |cursor, backtrack| Outcome { values: Vec::new(), ..self.parse(cursor, backtrack) })
    }

    /// Zero or one. Only a hard error is passed on.
    pub fn maybe(self) -> Self {
        Self::new(move |cursor, _| {
            let outcome = self.parse(cursor, true);
            match outcome.state {
                State::Backtracked => Outcome::ok(cursor, Vec::new()),
                State::Ok | State::Err => outcome,
            }
        })
    }

    /// Zero or more, as many as possible. Stops on the first iteration that
    /// backtracks or succeeds without consuming anything.
    pub fn repeat(self) -> Self {
        Self::new(move |cursor, _| {
            let mut result = Outcome::ok(cursor, Vec::new());

            loop {
                let at = result.cursor;
                let outcome = self.parse(at, true);

                match outcome.state {
                    State::Backtracked => break result,
                    State::Err => {
                        result.errors.extend(outcome.errors);
                        result.state = State::Err;
                        result.cursor = outcome.cursor;
                        break result;
                    }

                    State::Ok => {
                        let stalled = outcome.cursor.index() == at.index();
                        result = result.then(outcome);
                        if stalled {
                            break result;
                        }
                    }
                }
            }
        })
    }

    /// One or more.
    pub fn repeat1(self) -> Self {
        self.clone() + self.repeat()
    }

    /// Mark a point of recursion. Past [`MAX_DEPTH`] nested parsers, this is
    /// a hard error even when backtracking is allowed.
    pub fn nested(self) -> Self {
        Self::new(move |cursor, backtrack| {
            if cursor.depth >= MAX_DEPTH {
                return Outcome::err(cursor, ParseErrors::at(cursor.peek()).nested_too_deeply());
            }

            let inner = Cursor { depth: cursor.depth + 1, ..cursor };
            let outcome = self.parse(inner, backtrack);
            let cursor = Cursor { depth: cursor.depth, ..outcome.cursor };
            Outcome { cursor, ..outcome }
        })
    }

    /// Build a single node out of the produced values. The node spans from
    /// the first token under the cursor to the first token after the parse.
    pub fn map<F>(self, f: F) -> Self
    where
        F: Fn(&'a Bump, Vec<&'a Node<'a>>) -> NodeKind<'a> + 'a,
    {
        Self::new(move |cursor, backtrack| {
            let outcome = self.parse(cursor, backtrack);
            match outcome.state {
                State::Ok => {
                    let start = cursor.peek().span;
                    let end = outcome.cursor.peek().span;
                    let span = start.source.span(start.start, end.start.max(start.start));

                    let alloc = cursor.alloc();
                    let node = &*alloc.alloc(Node::new(f(alloc, outcome.values), span));
                    Outcome { values: vec![node], ..outcome }
                }

                State::Backtracked | State::Err => Outcome { values: Vec::new(), ..outcome },
            }
        })
    }
}

/// Sequence. Once the sequence has consumed any input, every later step is
/// committed and cannot backtrack.
impl<'a> Add for Parser<'a> {
    type Output = Parser<'a>;

    fn add(self, rhs: Self) -> Self::Output {
        Parser::new(move |cursor, backtrack| {
            let first = self.parse(cursor, backtrack);
            match first.state {
                State::Ok => {}
                State::Backtracked => return Outcome::backtracked(cursor),
                State::Err => return first,
            }

            let fresh = first.cursor.index() == cursor.index();
            let second = rhs.parse(first.cursor, backtrack && fresh);
            match second.state {
                State::Backtracked => Outcome::backtracked(cursor),
                State::Ok | State::Err => first.then(second),
            }
        })
    }
}

/// Ordered choice. Every alternative but the last is allowed to backtrack.
impl<'a> BitOr for Parser<'a> {
    type Output = Parser<'a>;

    fn bitor(self, rhs: Self) -> Self::Output {
        Parser::new(move |cursor, backtrack| {
            let first = self.parse(cursor, true);
            match first.state {
                State::Backtracked => rhs.parse(cursor, backtrack),
                State::Ok | State::Err => first,
            }
        })
    }
}

/// Commit. If the left side succeeds, the right side must succeed too.
impl<'a> Shr for Parser<'a> {
    type Output = Parser<'a>;

    fn shr(self, rhs: Self) -> Self::Output {
        Parser::new(move |cursor, backtrack| {
            let condition = self.parse(cursor, backtrack);
            if condition.is_ok() {
                let then = rhs.parse(condition.cursor, false);
                condition.then(then)
            } else {
                condition
            }
        })
    }
}

/// A single token of the given class.
pub fn kind<'a>(class: Class) -> Parser<'a> {
    Parser::new(move |cursor: Cursor<'a>, backtrack| {
        let token = cursor.peek();
        if class.matches(token) {
            let node = &*cursor.alloc().alloc(Node::new(NodeKind::Token(token), token.span));
            Outcome::ok(cursor.advance(), vec![node])
        } else if backtrack {
            Outcome::backtracked(cursor)
        } else {
            Outcome::err(cursor, ParseErrors::at(token).expected(class))
        }
    })
}

/// Always fail, reporting the message built from the next token.
pub fn fail<'a>(message: fn(ParseErrors) -> Error) -> Parser<'a> {
    Parser::new(move |cursor: Cursor<'a>, backtrack| {
        if backtrack {
            Outcome::backtracked(cursor)
        } else {
            Outcome::err(cursor, message(ParseErrors::at(cursor.peek())))
        }
    })
}

/// Defer building a parser until it is first used, for recursive rules.
pub fn lazy<'a>(make: fn() -> Parser<'a>) -> Parser<'a> {
    let parser = OnceCell::new();
    Parser::new(move |cursor, backtrack| parser.get_or_init(make).parse(cursor, backtrack))
}
