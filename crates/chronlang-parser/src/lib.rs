//! # Chronlang Parser
//!
//! Parser for Chronlang, a textual language describing the historical
//! phonology of constructed languages: language genealogies, phoneme
//! traits and classes, chronological milestones, lexicon entries, and
//! sound-change rules with conditioning environments.
//!
//! ## Usage
//!
//! ```
//! use chronlang_parser::ast::Stmt;
//!
//! let statements = chronlang_parser::parse(
//!     "lang PAM < PAu: Proto-Auzger-Morlan",
//!     "intro.cl",
//! )?;
//!
//! match &statements[0] {
//!     Stmt::Language(language) => assert_eq!(language.id.inner(), "PAM"),
//!     other => panic!("expected a language statement, got {other:?}"),
//! }
//! # Ok::<(), chronlang_parser::SyntaxError>(())
//! ```
//!
//! The grammar is a fully backtracking ordered choice over eight statement
//! forms, separated by newlines. Every node in the resulting tree carries
//! the span of source text it was parsed from. On malformed input, [`parse`]
//! returns a [`SyntaxError`] pointing at the furthest position any grammar
//! alternative reached and the tokens expected there.

mod chars;
mod error;
mod parser;

pub use chronlang_ast as ast;
pub use error::SyntaxError;

use log::debug;

use ast::Stmt;
use error::ParseContext;

/// Parse a Chronlang document into its statement list.
///
/// `source_id` is an opaque label attached to every span, typically the
/// file name; it is never interpreted.
///
/// Comments are recognized but filtered from the result. Parsing is pure:
/// the same `source` and `source_id` always produce the same value.
pub fn parse(source: &str, source_id: &str) -> Result<Vec<Stmt>, SyntaxError> {
    let context = ParseContext::new(source, source_id);
    let mut input = parser::stream(source, &context);

    match parser::document(&mut input) {
        Ok(statements) => {
            debug!(statements = statements.len(), source = source_id; "Parsed document");
            Ok(statements)
        }
        Err(_) => {
            let error = context.syntax_error();
            debug!(offset = error.position.offset, line = error.position.line, column = error.position.column, source = source_id; "Failed to parse document");
            Err(error)
        }
    }
}
