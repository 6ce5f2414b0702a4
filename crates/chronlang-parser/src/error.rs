//! Error reporting for the Chronlang parser.
//!
//! Failures never unwind out of [`crate::parse`]; every malformed input is
//! reported as a single [`SyntaxError`]. Because the grammar backtracks
//! freely, the alternative that failed last is rarely the interesting one,
//! so the parser tracks the furthest offset any alternative reached and
//! reports that position together with every token description that was
//! expected there.

mod context;
mod failure;
mod syntax;

pub(crate) use context::ParseContext;
pub(crate) use failure::ParseFailure;
pub use syntax::SyntaxError;
