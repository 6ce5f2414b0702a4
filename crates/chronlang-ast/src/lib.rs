//! Chronlang Syntax Tree
//!
//! This crate provides the syntax tree for the Chronlang historical
//! phonology language. It includes:
//!
//! - **Spans**: Source locations attached to every node ([`span`] module)
//! - **Statements**: The eight top-level statement forms ([`statements`] module)
//! - **Sound changes**: Patterns, categories and environments
//!   ([`sound_change`] module)
//!
//! Nodes are plain data: the parser in `chronlang-parser` produces them and
//! downstream tools (simulators, linters, formatters) consume them. All types
//! serialize with serde.

pub mod sound_change;
pub mod span;
pub mod statements;

pub use sound_change::{
    Category, EnvElement, EnvPattern, Environment, Feature, FeatureSign, Pattern, Segment,
    SoundChange, Source, Target,
};
pub use span::{Position, Span, Spanned};
pub use statements::{
    Class, Definition, Import, ImportNames, ImportPath, Language, Milestone, PhonemeDef, Series,
    SeriesKind, Stmt, Time, Trait, TraitMember, Word,
};
