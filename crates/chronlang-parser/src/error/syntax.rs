use std::collections::BTreeSet;

use chronlang_ast::{Position, Span};
use thiserror::Error;

/// A parse failure: the furthest point the grammar reached and what it
/// would have accepted there.
///
/// One error per parse; there is no recovery or multi-error collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {position}")]
pub struct SyntaxError {
    /// Furthest position reached by any grammar alternative.
    pub position: Position,
    /// Descriptions of the tokens that could have continued the parse.
    pub expected: BTreeSet<&'static str>,
    /// Human-readable summary of `expected` and the offending character.
    pub message: String,
    /// The character that could not be consumed; `None` at end of input.
    pub span: Option<Span>,
}
