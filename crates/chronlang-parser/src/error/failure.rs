use std::num::ParseIntError;

use winnow::error::{FromExternalError, ParserError};
use winnow::stream::{Location, Stream};

use crate::parser::Input;

/// The error type winnow threads through the grammar: just the byte offset
/// where a rule failed.
///
/// Construction reports the offset to the shared `ParseContext`, which
/// keeps the furthest one. `or` keeps whichever error got further, so an
/// ordered choice never discards the best diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParseFailure {
    pub(crate) offset: usize,
}

impl<'src> ParserError<Input<'src>> for ParseFailure {
    type Inner = Self;

    fn from_input(input: &Input<'src>) -> Self {
        let offset = input.current_token_start();
        input.state.note_failure(offset);
        Self { offset }
    }

    fn append(self, _input: &Input<'src>, _checkpoint: &<Input<'src> as Stream>::Checkpoint) -> Self {
        self
    }

    fn or(self, other: Self) -> Self {
        if other.offset > self.offset { other } else { self }
    }

    fn into_inner(self) -> Result<Self::Inner, Self> {
        Ok(self)
    }
}

impl<'src> FromExternalError<Input<'src>, ParseIntError> for ParseFailure {
    fn from_external_error(input: &Input<'src>, _cause: ParseIntError) -> Self {
        let offset = input.current_token_start();
        input.state.note_failure(offset);
        Self { offset }
    }
}
