//! Source positions and spans.
//!
//! Every structural node produced by the parser carries a [`Span`]: the
//! half-open byte range of source text that produced it, with line/column
//! coordinates and the caller-supplied source identifier attached.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A location in source text.
///
/// `offset` is a byte offset into the source buffer. `line` and `column`
/// are 1-based; `column` counts characters from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The extent of source text backing a syntax node.
///
/// The substring of the source at `[start.offset, end.offset)` is exactly
/// the text the node was parsed from. `source` is the identifier the caller
/// passed to `parse`; it is an opaque label, not a validated path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub source: Arc<str>,
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(source: Arc<str>, start: Position, end: Position) -> Self {
        debug_assert!(start.offset <= end.offset);
        Self { source, start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.start)
    }
}

/// A value paired with the span it was parsed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spanned<T> {
    value: T,
    span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Get a reference to the underlying value.
    pub fn inner(&self) -> &T {
        &self.value
    }

    /// Consume the wrapper and return just the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Transform the value while keeping the span.
    pub fn map<F, U>(self, f: F) -> Spanned<U>
    where
        F: FnOnce(T) -> U,
    {
        Spanned {
            value: f(self.value),
            span: self.span,
        }
    }
}

impl<T> std::ops::Deref for Spanned<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T: fmt::Display> fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
