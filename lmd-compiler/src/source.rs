use std::collections::HashMap;
use std::ops::{Add, AddAssign};

/// Identifies a particular source.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SourceId(usize);

impl SourceId {
    pub fn span(&self, start: usize, end: usize) -> Span {
        debug_assert!(start <= end, "span ends before it starts");
        Span { source: *self, start, end }
    }
}

/// Identifies some portion of the source text as a half-open byte range.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Span {
    pub source: SourceId,
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// The smallest span covering every span in `spans`, or `None` if there
    /// are none.
    pub fn wrapping(spans: impl IntoIterator<Item = Span>) -> Option<Span> {
        spans.into_iter().reduce(Add::add)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Add for Span {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(
            self.source, rhs.source,
            "only spans from the same source can be combined"
        );
        Self { source: self.source, start: self.start.min(rhs.start), end: self.end.max(rhs.end) }
    }
}

impl AddAssign for Span {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// A zero-based line and column (in bytes) within a source.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LineCol {
    pub line: usize,
    pub column: usize,
}

/// A named, immutable piece of source text.
#[derive(Debug)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
    pub content: String,

    /// The byte offset at which each line begins. Always starts with `0`.
    line_starts: Vec<usize>,
}

impl Source {
    fn new(id: SourceId, name: String, content: String) -> Self {
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(at, _)| at + 1))
            .collect();

        Self { id, name, content, line_starts }
    }

    /// A span covering the whole source.
    pub fn span(&self) -> Span {
        self.id.span(0, self.content.len())
    }

    pub fn slice(&self, span: Span) -> &str {
        debug_assert_eq!(self.id, span.source);
        &self.content[span.start..span.end]
    }

    pub fn num_lines(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the text of the given line without its terminator.
    pub fn line(&self, line: usize) -> &str {
        let start = self.line_starts[line];
        &self.content[start..self.line_end(line)]
    }

    pub fn line_col(&self, offset: usize) -> LineCol {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = offset - self.line_starts[line];
        LineCol { line, column }
    }

    /// Split a span into one span per line it touches. Line terminators are
    /// not part of any of the returned spans.
    pub fn split(&self, span: Span) -> Vec<Span> {
        debug_assert_eq!(self.id, span.source);

        let first = self.line_col(span.start).line;
        let last = self.line_col(span.end).line;

        if first == last {
            return vec![span];
        }

        (first..=last)
            .filter_map(|line| {
                let start = span.start.max(self.line_starts[line]);
                let end = span.end.min(self.line_end(line));
                (start < end || line == first).then(|| self.id.span(start, end.max(start)))
            })
            .collect()
    }

    /// The offset just before the terminator of the given line.
    fn line_end(&self, line: usize) -> usize {
        match self.line_starts.get(line + 1) {
            Some(&next) => next - 1,
            None => self.content.len(),
        }
    }
}

/// Stores individual source files.
#[derive(Debug, Default)]
pub struct Sources {
    sources: HashMap<SourceId, Source>,
    counter: usize,
}

impl Sources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, content: impl Into<String>) -> SourceId {
        self.counter += 1;
        let id = SourceId(self.counter);
        self.sources.insert(id, Source::new(id, name.into(), content.into()));
        id
    }

    pub fn get(&self, id: SourceId) -> &Source {
        self.sources
            .get(&id)
            .expect("source ids from separate source stores are never mixed")
    }
}

#[cfg(test)]
mod tests {
    use super::Sources;

    #[test]
    fn line_columns() {
        let mut sources = Sources::new();
        let id = sources.add("main", "ab\ncd\n\nef");
        let source = sources.get(id);

        assert_eq!(4, source.num_lines());
        assert_eq!((0, 0), pair(source.line_col(0)));
        assert_eq!((0, 2), pair(source.line_col(2)));
        assert_eq!((1, 0), pair(source.line_col(3)));
        assert_eq!((2, 0), pair(source.line_col(6)));
        assert_eq!((3, 1), pair(source.line_col(8)));
        assert_eq!((3, 2), pair(source.line_col(9)));
        assert_eq!("cd", source.line(1));
        assert_eq!("", source.line(2));
    }

    #[test]
    fn split_single_line() {
        let mut sources = Sources::new();
        let id = sources.add("main", "abc\ndef");
        let source = sources.get(id);

        assert_eq!(vec![id.span(1, 2)], source.split(id.span(1, 2)));
        assert_eq!(vec![id.span(5, 5)], source.split(id.span(5, 5)));
    }

    #[test]
    fn split_across_lines() {
        let mut sources = Sources::new();
        let id = sources.add("main", "abc\ndef\nghi");
        let source = sources.get(id);

        let spans = source.split(id.span(1, 10));
        assert_eq!(vec![id.span(1, 3), id.span(4, 7), id.span(8, 10)], spans);

        let texts: Vec<_> = spans.iter().map(|span| source.slice(*span)).collect();
        assert_eq!(vec!["bc", "def", "gh"], texts);
    }

    #[test]
    fn split_ending_at_line_start() {
        let mut sources = Sources::new();
        let id = sources.add("main", "abc\ndef");
        let source = sources.get(id);

        assert_eq!(vec![id.span(0, 3)], source.split(id.span(0, 4)));
    }

    #[test]
    fn wrapping_spans() {
        let mut sources = Sources::new();
        let id = sources.add("main", "abcdef");

        let spans = [id.span(3, 4), id.span(1, 2), id.span(2, 6)];
        assert_eq!(Some(id.span(1, 6)), super::Span::wrapping(spans));
        assert_eq!(None, super::Span::wrapping([]));
    }

    fn pair(lc: super::LineCol) -> (usize, usize) {
        (lc.line, lc.column)
    }
}
