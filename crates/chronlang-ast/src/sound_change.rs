//! The sound-change sub-tree: patterns, categories, features, environments.

use serde::{Deserialize, Serialize};

use crate::span::{Span, Spanned};

/// A sound-change rule: `$ source > target / environment : description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundChange {
    pub source: Spanned<Source>,
    pub target: Spanned<Target>,
    pub environment: Option<Environment>,
    pub description: Option<Spanned<String>>,
}

/// What a sound change matches: a phoneme pattern, or nothing (`[]`,
/// an insertion rule).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Source {
    Pattern(Pattern),
    Empty,
}

/// What a sound change rewrites to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Target {
    /// Feature modifications applied to the matched phonemes, e.g. `[+flap]`.
    Modification(Vec<Feature>),
    /// Replacement glyphs, e.g. `tʃ`.
    Phonemes(String),
    /// Deletion (`[]`).
    Empty,
}

/// One or more segments matched in sequence, e.g. `a[C+stop]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub segments: Vec<Segment>,
}

/// A single element of a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// A bracketed feature matcher, e.g. `[C+alveolar+stop]`.
    Category(Category),
    /// A literal glyph run, e.g. `tʃ`.
    Phonemes(Spanned<String>),
}

/// A bracketed feature-set matcher, optionally anchored to a phoneme class:
/// `[C+alveolar-voiced]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub base_class: Option<Spanned<String>>,
    pub features: Vec<Feature>,
    pub span: Span,
}

/// A signed feature, e.g. `+voiced` or `-nasal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub sign: FeatureSign,
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureSign {
    Positive,
    Negative,
}

/// The phonetic context conditioning a sound change: `#before_after#`.
///
/// `anchor_start`/`anchor_end` record the presence of the word-boundary
/// markers on either side of the pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub before: EnvPattern,
    pub after: EnvPattern,
    pub anchor_start: bool,
    pub anchor_end: bool,
    pub span: Span,
}

/// The elements on one side of the `_` placeholder.
pub type EnvPattern = Vec<Spanned<EnvElement>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnvElement {
    Pattern(Pattern),
    /// A `.` marker.
    SyllableBoundary,
}
