//! Statement payloads for the eight Chronlang statement kinds.

use serde::{Deserialize, Serialize};

use crate::sound_change::SoundChange;
use crate::span::{Span, Spanned};

/// A top-level Chronlang statement.
///
/// Statements are produced in source order; comments are recognized during
/// parsing but never appear in the parsed output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Import(Import),
    Language(Language),
    Milestone(Milestone),
    Trait(Trait),
    Class(Class),
    Series(Series),
    Word(Word),
    SoundChange(SoundChange),
}

/// `import { a, b } from some/module`, `import * from @core/ipa`.
///
/// The path is recorded verbatim; resolving it against a filesystem or
/// module namespace is the consumer's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Import {
    pub names: ImportNames,
    pub path: ImportPath,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImportNames {
    /// A `*` wildcard, with the span of the star.
    All(Span),
    /// An explicit, non-empty name list.
    Names(Vec<Spanned<String>>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImportPath {
    /// `some/module`, `./vowels`, `/absolute/path`. A leading `/` sets
    /// `absolute` and is covered by the span but stripped from the text.
    Local {
        path: Spanned<String>,
        absolute: bool,
    },
    /// `@scope/path`. The scope span covers the `@`; the path text keeps
    /// its leading slash.
    Scoped {
        scope: Spanned<String>,
        path: Spanned<String>,
    },
}

/// `lang PAM < PAu: Proto-Auzger-Morlan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: Spanned<String>,
    pub parent: Option<Spanned<String>>,
    /// Display name, running to the end of the line. A trailing `//`
    /// comment is not part of the name.
    pub name: Option<Spanned<String>>,
}

/// `@ 1000, OEng` — a point or interval in in-world historical time,
/// optionally switching the active language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub time: Option<Spanned<Time>>,
    pub language: Option<Spanned<String>>,
}

/// Range bounds are not validated for ordering at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Time {
    Instant(u64),
    Range { start: u64, end: u64 },
}

/// `trait Voice { default voiced, unvoiced|voiceless }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    pub label: Spanned<String>,
    pub members: Vec<TraitMember>,
}

/// One trait member: aliased labels with an optional `default` marker.
/// The span runs from the `default` keyword (when present) through the
/// last label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitMember {
    pub labels: Vec<Spanned<String>>,
    pub default: bool,
    pub span: Span,
}

/// `class Consonant encodes (Voice Place Manner) { p = unvoiced bilabial stop }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub label: Spanned<String>,
    pub encodes: Vec<Spanned<String>>,
    /// Reserved; currently always empty.
    pub annotates: Vec<Spanned<String>>,
    pub phonemes: Vec<PhonemeDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhonemeDef {
    pub label: Spanned<String>,
    pub traits: Vec<Spanned<String>>,
    pub span: Span,
}

/// `series F = [C+fricative]` or `series P = { p, t, k }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: Spanned<String>,
    pub kind: SeriesKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeriesKind {
    Category(crate::sound_change::Category),
    List(Vec<Spanned<String>>),
}

/// `- water /ˈwæ.ter/ { noun. a liquid }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub gloss: Spanned<String>,
    /// The text between the slashes; the span covers the slashes too.
    pub pronunciation: Spanned<String>,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub part_of_speech: Option<Spanned<String>>,
    pub text: Spanned<String>,
}
