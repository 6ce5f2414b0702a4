//! Parser for Chronlang source text.
//!
//! A scannerless, fully backtracking ordered-choice grammar over
//! [`LocatingSlice`]: each rule either consumes its whole construct or
//! fails with no effect beyond the failure bookkeeping in [`ParseContext`].
//! The top-level rule is [`document`]; the public entry point wrapping it
//! is [`crate::parse`].
//!
//! Whitespace handling follows two distinct idioms. Inside a statement only
//! inline whitespace (spaces and tabs) is allowed, so a statement never
//! spans lines except inside a braced list. Between statements, [`eol`]
//! consumes at least one newline plus any surrounding whitespace and an
//! optional trailing comment.

use winnow::combinator::{alt, delimited, eof, opt, peek, preceded, repeat, separated};
use winnow::error::ErrMode;
use winnow::stream::{LocatingSlice, Location, Stateful, Stream};
use winnow::token::{literal, rest, take_while};
use winnow::{ModalResult, Parser};

use chronlang_ast::{
    Category, Class, Definition, EnvElement, EnvPattern, Environment, Feature, FeatureSign, Import,
    ImportNames, ImportPath, Language, Milestone, Pattern, PhonemeDef, Segment, Series, SeriesKind,
    SoundChange, Source, Spanned, Stmt, Target, Time, Trait, TraitMember, Word,
};

use crate::chars;
use crate::error::{ParseContext, ParseFailure};

/// Character-level input: source text with position tracking and the shared
/// per-parse context.
pub(crate) type Input<'src> = Stateful<LocatingSlice<&'src str>, &'src ParseContext<'src>>;

pub(crate) type IResult<O> = ModalResult<O, ParseFailure>;

pub(crate) fn stream<'src>(source: &'src str, context: &'src ParseContext<'src>) -> Input<'src> {
    Stateful {
        input: LocatingSlice::new(source),
        state: context,
    }
}

/// Wrap `parser` so that its failures at the wrapped rule's own start
/// position are reported to the context as "expected `description`".
///
/// Failures deeper inside `parser` keep their own positions and labels.
fn expect<'src, O, P>(
    description: &'static str,
    mut parser: P,
) -> impl FnMut(&mut Input<'src>) -> IResult<O>
where
    P: Parser<Input<'src>, O, ErrMode<ParseFailure>>,
{
    move |input: &mut Input<'src>| {
        let start = input.current_token_start();
        let result = parser.parse_next(input);
        if let Err(ErrMode::Backtrack(failure) | ErrMode::Cut(failure)) = &result {
            if failure.offset == start {
                input.state.note_expected(start, description);
            }
        }
        result
    }
}

/// A literal token, reported by its own text when missing.
fn token<'src>(text: &'static str) -> impl FnMut(&mut Input<'src>) -> IResult<&'src str> {
    expect(text, literal(text))
}

/// Run `parser` and pair its output with the [`Spanned`] span of the
/// consumed text.
fn spanned<'src, O, P>(mut parser: P) -> impl FnMut(&mut Input<'src>) -> IResult<Spanned<O>>
where
    P: Parser<Input<'src>, O, ErrMode<ParseFailure>>,
{
    move |input: &mut Input<'src>| {
        let (value, range) = parser.by_ref().with_span().parse_next(input)?;
        Ok(Spanned::new(value, input.state.span(range)))
    }
}

/// Inline whitespace, zero or more. Never fails.
fn inline_ws(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., (' ', '\t')).void().parse_next(input)
}

fn inline_ws1(input: &mut Input<'_>) -> IResult<()> {
    take_while(1.., (' ', '\t')).void().parse_next(input)
}

/// Any whitespace including newlines, zero or more. Only valid inside
/// braced lists, where a construct may span lines.
fn full_ws(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., (' ', '\t', '\r', '\n')).void().parse_next(input)
}

/// The statement separator: optional inline whitespace and comment, one or
/// more newline characters, then any whitespace.
fn eol(input: &mut Input<'_>) -> IResult<()> {
    (
        inline_ws,
        opt(comment),
        expect("newline", take_while(1.., ('\r', '\n'))),
        full_ws,
    )
        .void()
        .parse_next(input)
}

/// `// ...` to the end of the line, yielding the trimmed comment text.
fn comment<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    let _ = token("//").parse_next(input)?;
    let body = line_text(input)?;
    Ok(body.trim())
}

/// Free text running to the end of the line.
///
/// Stops at the earliest position from which an [`eol`] could match, so a
/// trailing comment and the whitespace before the newline are left for the
/// separator to consume. With no newline ahead it runs to end of input.
/// Never fails; may be empty.
fn line_text<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    let remaining = peek(rest).parse_next(input)?;
    let length = line_text_length(remaining);
    Ok(input.next_slice(length))
}

fn line_text_length(remaining: &str) -> usize {
    let Some(line_end) = remaining.find(['\r', '\n']) else {
        return remaining.len();
    };
    let line = &remaining[..line_end];
    let without_trailing_ws = line.trim_end_matches([' ', '\t']);
    if without_trailing_ws.len() < line.len() {
        // Whitespace before the newline: a comment there would itself end
        // the line, so everything up to that whitespace is text. A `//`
        // earlier in the line is part of the text, not a comment.
        return without_trailing_ws.len();
    }
    match line.rfind("//") {
        Some(comment_start) => line[..comment_start].trim_end_matches([' ', '\t']).len(),
        None => line.len(),
    }
}

/// Like [`line_text`] but requires at least one character.
fn line_text1<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    let text = line_text(input)?;
    if text.is_empty() {
        let offset = input.current_token_start();
        input.state.note_expected(offset, "text");
        return Err(ErrMode::Backtrack(ParseFailure { offset }));
    }
    Ok(text)
}

fn ident_text<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    expect("identifier", take_while(1.., chars::is_ident_char)).parse_next(input)
}

/// An identifier with its span: a maximal run of identifier characters.
fn ident(input: &mut Input<'_>) -> IResult<Spanned<String>> {
    spanned(ident_text.map(str::to_owned)).parse_next(input)
}

fn number(input: &mut Input<'_>) -> IResult<u64> {
    expect(
        "number",
        take_while(1.., '0'..='9').try_map(|digits: &str| digits.parse::<u64>()),
    )
    .parse_next(input)
}

/// A path segment of an import: ASCII letters, digits and hyphens.
fn project_ident<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    expect(
        "path segment",
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-'),
    )
    .parse_next(input)
}

/// `import { Voice, Place } from @core/ipa`
fn import(input: &mut Input<'_>) -> IResult<Import> {
    let (_, _, names, _, _, _, path) = (
        token("import"),
        inline_ws,
        import_list,
        inline_ws,
        token("from"),
        inline_ws,
        import_path,
    )
        .parse_next(input)?;
    Ok(Import { names, path })
}

fn import_list(input: &mut Input<'_>) -> IResult<ImportNames> {
    alt((import_names.map(ImportNames::Names), import_star)).parse_next(input)
}

fn import_star(input: &mut Input<'_>) -> IResult<ImportNames> {
    let (_, range) = token("*").with_span().parse_next(input)?;
    Ok(ImportNames::All(input.state.span(range)))
}

fn import_names(input: &mut Input<'_>) -> IResult<Vec<Spanned<String>>> {
    delimited(
        (token("{"), full_ws),
        separated(1.., ident, (token(","), full_ws)),
        (opt(token(",")), full_ws, token("}")),
    )
    .parse_next(input)
}

fn import_path(input: &mut Input<'_>) -> IResult<ImportPath> {
    alt((scoped_import_path, local_import_path)).parse_next(input)
}

/// `@scope/and/path`. The scope span covers the `@`; the path keeps its
/// leading slash.
fn scoped_import_path(input: &mut Input<'_>) -> IResult<ImportPath> {
    let scope = spanned(preceded(token("@"), project_ident).map(str::to_owned)).parse_next(input)?;
    let path = spanned(scoped_segments.take().map(str::to_owned)).parse_next(input)?;
    Ok(ImportPath::Scoped { scope, path })
}

fn scoped_segments(input: &mut Input<'_>) -> IResult<()> {
    repeat(1.., (token("/"), project_ident).void()).parse_next(input)
}

/// `some/module`, `./vowels`, `/absolute/path`. A leading slash marks the
/// path absolute; it is covered by the span but not part of the text.
fn local_import_path(input: &mut Input<'_>) -> IResult<ImportPath> {
    let ((slash, path), range) = (opt(token("/")), local_segments.take().map(str::to_owned))
        .with_span()
        .parse_next(input)?;
    Ok(ImportPath::Local {
        path: Spanned::new(path, input.state.span(range)),
        absolute: slash.is_some(),
    })
}

fn local_segments(input: &mut Input<'_>) -> IResult<()> {
    separated(1.., local_segment, token("/")).parse_next(input)
}

fn local_segment(input: &mut Input<'_>) -> IResult<()> {
    alt((project_ident.void(), token("..").void(), token(".").void())).parse_next(input)
}

/// `lang PAM < PAu: Proto-Auzger-Morlan`
///
/// The display name runs to the end of the line; a trailing comment is not
/// part of it.
fn language(input: &mut Input<'_>) -> IResult<Language> {
    let (_, _, id) = (token("lang"), inline_ws, ident).parse_next(input)?;
    let parent = opt(preceded((inline_ws, token("<"), inline_ws), ident)).parse_next(input)?;
    let name = opt(preceded(
        (inline_ws, token(":"), inline_ws),
        spanned(line_text.map(str::to_owned)),
    ))
    .parse_next(input)?;
    Ok(Language { id, parent, name })
}

/// `@ 1000..1400, PAu`
///
/// Both the time and the language are optional; a bare `@` is a valid
/// milestone.
fn milestone(input: &mut Input<'_>) -> IResult<Milestone> {
    let (_, _, time) = (token("@"), inline_ws, opt(spanned(time_body))).parse_next(input)?;
    let language = opt(preceded((inline_ws, token(","), inline_ws), ident)).parse_next(input)?;
    Ok(Milestone { time, language })
}

fn time_body(input: &mut Input<'_>) -> IResult<Time> {
    alt((
        (number, inline_ws, token(".."), inline_ws, number)
            .map(|(start, _, _, _, end)| Time::Range { start, end }),
        number.map(Time::Instant),
    ))
    .parse_next(input)
}

/// `trait Voice { default voiced, unvoiced|voiceless }`
fn trait_definition(input: &mut Input<'_>) -> IResult<Trait> {
    let (_, _, label, _, members) =
        (token("trait"), inline_ws, ident, inline_ws, trait_members).parse_next(input)?;
    Ok(Trait { label, members })
}

fn trait_members(input: &mut Input<'_>) -> IResult<Vec<TraitMember>> {
    delimited(
        (token("{"), full_ws),
        separated(1.., trait_member, (token(","), full_ws)),
        (inline_ws, opt(token(",")), full_ws, token("}")),
    )
    .parse_next(input)
}

/// One member: `|`-aliased labels, optionally marked `default`. The span
/// runs from the `default` keyword through the last label.
fn trait_member(input: &mut Input<'_>) -> IResult<TraitMember> {
    let ((default, _, labels), range) = (
        opt(token("default")),
        inline_ws,
        separated(1.., ident, (inline_ws, token("|"), inline_ws)),
    )
        .with_span()
        .parse_next(input)?;
    Ok(TraitMember {
        labels,
        default: default.is_some(),
        span: input.state.span(range),
    })
}

/// `class Consonant encodes (Voice Place Manner) { p = unvoiced bilabial stop }`
fn class_definition(input: &mut Input<'_>) -> IResult<Class> {
    let (_, _, label, _, encodes, _, phonemes) = (
        token("class"),
        inline_ws,
        ident,
        inline_ws,
        opt(encodes_clause),
        inline_ws,
        class_body,
    )
        .parse_next(input)?;
    Ok(Class {
        label,
        encodes: encodes.unwrap_or_default(),
        annotates: Vec::new(),
        phonemes,
    })
}

fn encodes_clause(input: &mut Input<'_>) -> IResult<Vec<Spanned<String>>> {
    delimited(
        (token("encodes"), inline_ws, token("(")),
        repeat(1.., preceded(inline_ws, ident)),
        (inline_ws, token(")")),
    )
    .parse_next(input)
}

fn class_body(input: &mut Input<'_>) -> IResult<Vec<PhonemeDef>> {
    delimited(
        (token("{"), full_ws),
        separated(1.., class_member, (token(","), full_ws)),
        (inline_ws, opt(token(",")), full_ws, token("}")),
    )
    .parse_next(input)
}

/// `p = unvoiced bilabial stop`, or a bare label with no trait list.
fn class_member(input: &mut Input<'_>) -> IResult<PhonemeDef> {
    let ((label, traits), range) = (
        ident,
        opt(preceded((inline_ws, token("="), inline_ws), trait_list)),
    )
        .with_span()
        .parse_next(input)?;
    Ok(PhonemeDef {
        label,
        traits: traits.unwrap_or_default(),
        span: input.state.span(range),
    })
}

fn trait_list(input: &mut Input<'_>) -> IResult<Vec<Spanned<String>>> {
    separated(1.., ident, inline_ws1).parse_next(input)
}

/// `series F = [C+fricative]` or `series P = { p, t, k }`
fn series_definition(input: &mut Input<'_>) -> IResult<Series> {
    let (_, _, label, _, _, _, kind) = (
        token("series"),
        inline_ws,
        ident,
        inline_ws,
        token("="),
        inline_ws,
        series_body,
    )
        .parse_next(input)?;
    Ok(Series { label, kind })
}

fn series_body(input: &mut Input<'_>) -> IResult<SeriesKind> {
    alt((
        category.map(SeriesKind::Category),
        phoneme_list.map(SeriesKind::List),
    ))
    .parse_next(input)
}

fn phoneme_list(input: &mut Input<'_>) -> IResult<Vec<Spanned<String>>> {
    delimited(
        (token("{"), full_ws),
        separated(1.., ident, (token(","), full_ws)),
        (opt(token(",")), full_ws, token("}")),
    )
    .parse_next(input)
}

/// `- water /wa.ter/ : the liquid form of H2O`
fn word_definition(input: &mut Input<'_>) -> IResult<Word> {
    let (_, _, gloss, _, pronunciation, definitions) = (
        token("-"),
        inline_ws,
        ident,
        inline_ws,
        ipa_string,
        opt(word_meaning),
    )
        .parse_next(input)?;
    Ok(Word {
        gloss,
        pronunciation,
        definitions: definitions.unwrap_or_default(),
    })
}

/// `/wa.ter/`: any non-slash text between slashes. The span covers the
/// slashes; the text excludes them.
fn ipa_string(input: &mut Input<'_>) -> IResult<Spanned<String>> {
    let (text, range) = delimited(
        token("/"),
        expect("text", take_while(1.., |c: char| c != '/')),
        token("/"),
    )
        .with_span()
        .parse_next(input)?;
    Ok(Spanned::new(text.to_owned(), input.state.span(range)))
}

/// A single anonymous definition, or a braced block of per-part-of-speech
/// senses.
fn word_meaning(input: &mut Input<'_>) -> IResult<Vec<Definition>> {
    alt((simple_meaning, senses_block)).parse_next(input)
}

fn simple_meaning(input: &mut Input<'_>) -> IResult<Vec<Definition>> {
    let text = preceded(
        (inline_ws, token(":"), inline_ws),
        spanned(line_text.map(str::to_owned)),
    )
    .parse_next(input)?;
    Ok(vec![Definition {
        part_of_speech: None,
        text,
    }])
}

fn senses_block(input: &mut Input<'_>) -> IResult<Vec<Definition>> {
    delimited(
        (inline_ws, token("{"), full_ws),
        separated(1.., word_sense, eol),
        (full_ws, token("}")),
    )
    .parse_next(input)
}

/// `noun. the liquid form of H2O`
fn word_sense(input: &mut Input<'_>) -> IResult<Definition> {
    let (part_of_speech, _, _, text) = (
        ident,
        token("."),
        inline_ws,
        spanned(line_text1.map(str::to_owned)),
    )
        .parse_next(input)?;
    Ok(Definition {
        part_of_speech: Some(part_of_speech),
        text,
    })
}

/// `$ [C+alveolar+stop] > [+flap] / V_V : flapping`
fn sound_change(input: &mut Input<'_>) -> IResult<SoundChange> {
    let (_, _, source, _, _, _, target) = (
        token("$"),
        inline_ws,
        spanned(source_body),
        inline_ws,
        token(">"),
        inline_ws,
        spanned(target_body),
    )
        .parse_next(input)?;
    let environment =
        opt(preceded((inline_ws, token("/"), inline_ws), condition)).parse_next(input)?;
    let description = opt(preceded(
        (inline_ws, token(":"), inline_ws),
        spanned(line_text.map(str::to_owned)),
    ))
    .parse_next(input)?;
    Ok(SoundChange {
        source,
        target,
        environment,
        description,
    })
}

fn source_body(input: &mut Input<'_>) -> IResult<Source> {
    alt((pattern.map(Source::Pattern), token("[]").value(Source::Empty))).parse_next(input)
}

fn target_body(input: &mut Input<'_>) -> IResult<Target> {
    alt((
        modification.map(Target::Modification),
        ident_text.map(|glyphs| Target::Phonemes(glyphs.to_owned())),
        token("[]").value(Target::Empty),
    ))
    .parse_next(input)
}

/// `[+flap-stop]`: a bare feature list applied as a modification.
fn modification(input: &mut Input<'_>) -> IResult<Vec<Feature>> {
    delimited(token("["), repeat(1.., feature), token("]")).parse_next(input)
}

fn pattern(input: &mut Input<'_>) -> IResult<Pattern> {
    repeat(1.., segment)
        .map(|segments: Vec<Segment>| Pattern { segments })
        .parse_next(input)
}

// Glyph runs are tried before categories; both `a[C+stop]` orders of
// segment therefore parse greedily left to right.
fn segment(input: &mut Input<'_>) -> IResult<Segment> {
    alt((
        spanned(ident_text.map(str::to_owned)).map(Segment::Phonemes),
        category.map(Segment::Category),
    ))
    .parse_next(input)
}

/// `[C+alveolar-voiced]`: an optional base class and at least one signed
/// feature, with no interior whitespace. The span includes the brackets.
fn category(input: &mut Input<'_>) -> IResult<Category> {
    let ((_, base_class, features, _), range) =
        (token("["), opt(ident), repeat(1.., feature), token("]"))
            .with_span()
            .parse_next(input)?;
    Ok(Category {
        base_class,
        features,
        span: input.state.span(range),
    })
}

/// `+voiced` or `-nasal`. The span covers the sign and the name.
fn feature(input: &mut Input<'_>) -> IResult<Feature> {
    let ((sign, name), range) = (feature_sign, ident_text).with_span().parse_next(input)?;
    Ok(Feature {
        sign,
        name: name.to_owned(),
        span: input.state.span(range),
    })
}

fn feature_sign(input: &mut Input<'_>) -> IResult<FeatureSign> {
    alt((
        token("+").value(FeatureSign::Positive),
        token("-").value(FeatureSign::Negative),
    ))
    .parse_next(input)
}

/// `#before_after#`: patterns and syllable boundaries around the `_`
/// placeholder, with optional word-boundary anchors. The span covers the
/// whole condition.
fn condition(input: &mut Input<'_>) -> IResult<Environment> {
    let ((anchor_start, before, _, after, anchor_end), range) = (
        opt(token("#")),
        opt(env_pattern),
        token("_"),
        opt(env_pattern),
        opt(token("#")),
    )
        .with_span()
        .parse_next(input)?;
    Ok(Environment {
        before: before.unwrap_or_default(),
        after: after.unwrap_or_default(),
        anchor_start: anchor_start.is_some(),
        anchor_end: anchor_end.is_some(),
        span: input.state.span(range),
    })
}

fn env_pattern(input: &mut Input<'_>) -> IResult<EnvPattern> {
    repeat(1.., env_element).parse_next(input)
}

fn env_element(input: &mut Input<'_>) -> IResult<Spanned<EnvElement>> {
    spanned(alt((
        token(".").value(EnvElement::SyllableBoundary),
        pattern.map(EnvElement::Pattern),
    )))
    .parse_next(input)
}

/// One top-level alternative: a real statement, or a comment line that is
/// recognized and dropped.
enum Item {
    Statement(Stmt),
    Comment,
}

// Ordered choice: each alternative starts with a distinct token, except
// that comments must come last so `//` is never shadowed.
fn statement(input: &mut Input<'_>) -> IResult<Item> {
    alt((
        import.map(Stmt::Import).map(Item::Statement),
        language.map(Stmt::Language).map(Item::Statement),
        milestone.map(Stmt::Milestone).map(Item::Statement),
        trait_definition.map(Stmt::Trait).map(Item::Statement),
        class_definition.map(Stmt::Class).map(Item::Statement),
        series_definition.map(Stmt::Series).map(Item::Statement),
        word_definition.map(Stmt::Word).map(Item::Statement),
        sound_change.map(Stmt::SoundChange).map(Item::Statement),
        comment.map(|_| Item::Comment),
    ))
    .parse_next(input)
}

/// A whole source file: newline-separated statements with optional leading
/// and trailing whitespace, parsed to end of input.
pub(crate) fn document(input: &mut Input<'_>) -> IResult<Vec<Stmt>> {
    let _ = opt(eol).parse_next(input)?;
    let items: Vec<Item> = separated(1.., statement, eol).parse_next(input)?;
    let _ = opt(eol).parse_next(input)?;
    let _ = expect("end of input", eof).parse_next(input)?;
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Item::Statement(stmt) => Some(stmt),
            Item::Comment => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<O>(source: &str, parser: fn(&mut Input<'_>) -> IResult<O>) -> IResult<O> {
        let context = ParseContext::new(source, "test");
        let mut input = stream(source, &context);
        parser(&mut input)
    }

    #[test]
    fn test_line_text_length_plain() {
        assert_eq!(line_text_length("hello\nmore"), 5);
        assert_eq!(line_text_length("no newline"), 10);
        assert_eq!(line_text_length("\nx"), 0);
    }

    #[test]
    fn test_line_text_length_trailing_whitespace() {
        assert_eq!(line_text_length("name  \nx"), 4);
        assert_eq!(line_text_length("name\t\r\nx"), 4);
    }

    #[test]
    fn test_line_text_length_trailing_comment() {
        assert_eq!(line_text_length("name // note\nx"), 4);
        assert_eq!(line_text_length("a //b\nx"), 1);
        // Whitespace after the comment keeps it: the comment itself is
        // then what ends the line.
        assert_eq!(line_text_length("name // note \nx"), 12);
        // Only the last run of slashes can start the line-ending comment.
        assert_eq!(line_text_length("x // a // b\nx"), 6);
    }

    #[test]
    fn test_ident_stops_at_reserved() {
        let parsed = run("stop[x", ident).unwrap();
        assert_eq!(parsed.inner(), "stop");
        assert_eq!(parsed.span().start.offset, 0);
        assert_eq!(parsed.span().end.offset, 4);
    }

    #[test]
    fn test_ident_rejects_reserved_start() {
        assert!(run("[x]", ident).is_err());
        assert!(run("", ident).is_err());
    }

    #[test]
    fn test_number() {
        assert_eq!(run("1400", number).unwrap(), 1400);
        assert!(run("x", number).is_err());
    }

    #[test]
    fn test_time_range_vs_instant() {
        assert_eq!(
            run("1000..1400", time_body).unwrap(),
            Time::Range {
                start: 1000,
                end: 1400
            }
        );
        assert_eq!(run("1000", time_body).unwrap(), Time::Instant(1000));
    }

    #[test]
    fn test_comment_trims_body() {
        let owned_comment = |input: &mut Input<'_>| comment(input).map(str::to_owned);
        assert_eq!(run("//   spaced out  ", owned_comment).unwrap(), "spaced out");
        assert_eq!(run("//", owned_comment).unwrap(), "");
    }

    #[test]
    fn test_eol_requires_newline() {
        assert!(run("\n", eol).is_ok());
        assert!(run("  // note\n\n  ", eol).is_ok());
        assert!(run("  ", eol).is_err());
        assert!(run("// unterminated", eol).is_err());
    }

    #[test]
    fn test_category_requires_feature() {
        let parsed = run("[C+stop-voiced]", category).unwrap();
        assert_eq!(parsed.base_class.as_ref().unwrap().inner(), "C");
        assert_eq!(parsed.features.len(), 2);
        assert_eq!(parsed.features[1].sign, FeatureSign::Negative);
        assert_eq!(parsed.span.start.offset, 0);
        assert_eq!(parsed.span.end.offset, 15);

        assert!(run("[C]", category).is_err());
    }

    #[test]
    fn test_feature_span_covers_sign() {
        let parsed = run("+fricative", feature).unwrap();
        assert_eq!(parsed.name, "fricative");
        assert_eq!(parsed.sign, FeatureSign::Positive);
        assert_eq!(parsed.span.start.offset, 0);
        assert_eq!(parsed.span.end.offset, 10);
    }

    #[test]
    fn test_pattern_mixes_glyphs_and_categories() {
        let parsed = run("a[C+stop]b", pattern).unwrap();
        assert_eq!(parsed.segments.len(), 3);
        assert!(matches!(parsed.segments[0], Segment::Phonemes(_)));
        assert!(matches!(parsed.segments[1], Segment::Category(_)));
    }

    #[test]
    fn test_condition_anchors_and_sides() {
        let parsed = run("#_i", condition).unwrap();
        assert!(parsed.anchor_start);
        assert!(!parsed.anchor_end);
        assert!(parsed.before.is_empty());
        assert_eq!(parsed.after.len(), 1);

        let parsed = run("a._b#", condition).unwrap();
        assert_eq!(parsed.before.len(), 2);
        assert!(matches!(
            parsed.before[1].inner(),
            EnvElement::SyllableBoundary
        ));
        assert_eq!(parsed.after.len(), 1);
        assert!(parsed.anchor_end);
    }

    #[test]
    fn test_keywords_are_not_reserved_words() {
        // Keywords are plain literals with no word-boundary check, so
        // "langX" parses as `lang` followed by the identifier `X`.
        let parsed = run("langX", language).unwrap();
        assert_eq!(parsed.id.inner(), "X");
    }

    #[test]
    fn test_trait_member_default_and_aliases() {
        let parsed = run("default voiced", trait_member).unwrap();
        assert!(parsed.default);
        assert_eq!(parsed.labels.len(), 1);
        assert_eq!(parsed.span.start.offset, 0);
        assert_eq!(parsed.span.end.offset, 14);

        let parsed = run("unvoiced|voiceless", trait_member).unwrap();
        assert!(!parsed.default);
        assert_eq!(parsed.labels.len(), 2);
        assert_eq!(parsed.labels[1].inner(), "voiceless");
    }

    #[test]
    fn test_import_path_forms() {
        match run("@core/ipa", import_path).unwrap() {
            ImportPath::Scoped { scope, path } => {
                assert_eq!(scope.inner(), "core");
                assert_eq!(path.inner(), "/ipa");
            }
            other => panic!("expected scoped path, got {other:?}"),
        }
        match run("../lib/vowels", import_path).unwrap() {
            ImportPath::Local { path, absolute } => {
                assert_eq!(path.inner(), "../lib/vowels");
                assert!(!absolute);
            }
            other => panic!("expected local path, got {other:?}"),
        }
        match run("/absolute/path", import_path).unwrap() {
            ImportPath::Local { path, absolute } => {
                assert_eq!(path.inner(), "absolute/path");
                assert!(absolute);
            }
            other => panic!("expected local path, got {other:?}"),
        }
    }

    #[test]
    fn test_source_and_target_empty_forms() {
        assert_eq!(run("[]", source_body).unwrap(), Source::Empty);
        assert_eq!(run("[]", target_body).unwrap(), Target::Empty);
        assert_eq!(
            run("x", target_body).unwrap(),
            Target::Phonemes(String::from("x"))
        );
        match run("[+flap]", target_body).unwrap() {
            Target::Modification(features) => assert_eq!(features[0].name, "flap"),
            other => panic!("expected modification, got {other:?}"),
        }
    }

    #[test]
    fn test_document_separates_statements_by_newline() {
        assert!(run("lang A\nlang B", document).is_ok());
        assert!(run("lang A lang B", document).is_err());
        assert!(run("", document).is_err());
    }
}
