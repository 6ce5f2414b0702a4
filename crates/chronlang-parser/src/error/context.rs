use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::ops::Range;
use std::sync::Arc;

use chronlang_ast::{Position, Span};

use super::SyntaxError;

/// Shared per-parse state, threaded through the parser via
/// [`winnow::stream::Stateful`].
///
/// Interior mutability keeps the parser functions pure-looking while every
/// failed alternative records how far it got. When the whole parse fails,
/// the furthest offset and the expectations gathered there become the
/// [`SyntaxError`].
///
/// The line-start index is built once up front, so position lookups during
/// span construction are a binary search instead of a rescan.
#[derive(Debug)]
pub(crate) struct ParseContext<'src> {
    source: &'src str,
    source_id: Arc<str>,
    line_starts: Vec<usize>,
    furthest: Cell<usize>,
    expected: RefCell<BTreeSet<&'static str>>,
}

impl<'src> ParseContext<'src> {
    pub(crate) fn new(source: &'src str, source_id: &str) -> Self {
        Self {
            source,
            source_id: Arc::from(source_id),
            line_starts: line_starts(source),
            furthest: Cell::new(0),
            expected: RefCell::new(BTreeSet::new()),
        }
    }

    /// Line/column coordinates for a byte offset.
    pub(crate) fn position(&self, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = 1 + self.source[line_start..offset].chars().count();
        Position::new(offset, line + 1, column)
    }

    pub(crate) fn span(&self, range: Range<usize>) -> Span {
        Span::new(
            Arc::clone(&self.source_id),
            self.position(range.start),
            self.position(range.end),
        )
    }

    /// Record a failed match at `offset`.
    pub(crate) fn note_failure(&self, offset: usize) {
        if offset > self.furthest.get() {
            self.furthest.set(offset);
            self.expected.borrow_mut().clear();
        }
    }

    /// Record that `description` was expected at `offset`.
    ///
    /// Only expectations at the furthest failure survive; nearer ones are
    /// stale diagnoses from alternatives that were outrun.
    pub(crate) fn note_expected(&self, offset: usize, description: &'static str) {
        self.note_failure(offset);
        if offset == self.furthest.get() {
            self.expected.borrow_mut().insert(description);
        }
    }

    /// Convert the tracked failure state into the public error.
    pub(crate) fn syntax_error(&self) -> SyntaxError {
        let offset = self.furthest.get();
        let expected = self.expected.borrow().clone();
        let found = self.source[offset..].chars().next();

        let expected_text = if expected.is_empty() {
            String::from("valid syntax")
        } else {
            expected.iter().copied().collect::<Vec<_>>().join(", ")
        };
        let found_text = match found {
            Some(c) => format!("'{}'", c.escape_debug()),
            None => String::from("end of input"),
        };

        SyntaxError {
            position: self.position(offset),
            span: found.map(|c| self.span(offset..offset + c.len_utf8())),
            message: format!("expected {expected_text} but found {found_text}"),
            expected,
        }
    }
}

/// Byte offsets of the first character of each line. `\r\n` counts as one
/// terminator; a lone `\r` or `\n` also ends a line.
fn line_starts(source: &str) -> Vec<usize> {
    let mut starts = vec![0];
    let bytes = source.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'\n' => starts.push(i + 1),
            b'\r' if bytes.get(i + 1) != Some(&b'\n') => starts.push(i + 1),
            _ => {}
        }
    }
    starts
}
