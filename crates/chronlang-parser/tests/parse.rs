//! End-to-end tests: complete documents in, statement lists or errors out.

use chronlang_parser::ast::{Span, Stmt};
use chronlang_parser::parse;

const DOCUMENT: &str = "\
import { Voice, Place, Manner } from @core/ipa

trait Voice { default voiced, unvoiced|voiceless }

class Consonant encodes (Voice Place Manner) {
  p = unvoiced bilabial stop,
  b = voiced bilabial stop,
  s = unvoiced alveolar fricative
}

lang PAu: Proto-Auzger // the common ancestor
lang PAM < PAu

@ 1000, PAM

- water /wa.ter/ : the liquid form of H2O

$ [C+stop-voiced] > [+voiced] / V_V : intervocalic voicing
";

fn slice<'a>(source: &'a str, span: &Span) -> &'a str {
    &source[span.start.offset..span.end.offset]
}

#[test]
fn test_realistic_document() {
    let statements = parse(DOCUMENT, "document.cl").unwrap();
    assert_eq!(statements.len(), 8);

    let class = match &statements[2] {
        Stmt::Class(class) => class,
        other => panic!("expected a class, got {other:?}"),
    };
    assert_eq!(class.label.inner(), "Consonant");
    assert_eq!(class.phonemes.len(), 3);
    assert_eq!(class.phonemes[2].traits[1].inner(), "alveolar");

    let language = match &statements[3] {
        Stmt::Language(language) => language,
        other => panic!("expected a language, got {other:?}"),
    };
    assert_eq!(
        language.name.as_ref().map(|name| name.inner().as_str()),
        Some("Proto-Auzger")
    );
}

#[test]
fn test_spans_slice_back_to_source() {
    let statements = parse(DOCUMENT, "document.cl").unwrap();

    for statement in &statements {
        match statement {
            Stmt::Import(import) => {
                if let chronlang_parser::ast::ImportNames::Names(names) = &import.names {
                    for name in names {
                        assert_eq!(slice(DOCUMENT, name.span()), name.inner());
                    }
                }
            }
            Stmt::Language(language) => {
                assert_eq!(slice(DOCUMENT, language.id.span()), language.id.inner());
                if let Some(name) = &language.name {
                    assert_eq!(slice(DOCUMENT, name.span()), name.inner());
                }
            }
            Stmt::Class(class) => {
                for phoneme in &class.phonemes {
                    assert_eq!(slice(DOCUMENT, phoneme.label.span()), phoneme.label.inner());
                    for t in &phoneme.traits {
                        assert_eq!(slice(DOCUMENT, t.span()), t.inner());
                    }
                }
            }
            Stmt::Trait(definition) => {
                for member in &definition.members {
                    for label in &member.labels {
                        assert_eq!(slice(DOCUMENT, label.span()), label.inner());
                    }
                }
            }
            _ => {}
        }
    }
}

#[test]
fn test_every_span_names_the_source() {
    let statements = parse(DOCUMENT, "document.cl").unwrap();
    let word = match &statements[6] {
        Stmt::Word(word) => word,
        other => panic!("expected a word, got {other:?}"),
    };
    assert_eq!(word.gloss.span().source.as_ref(), "document.cl");
    assert_eq!(word.pronunciation.span().source.as_ref(), "document.cl");
}

#[test]
fn test_crlf_line_endings() {
    let statements = parse("lang A\r\nlang B < A\r\n", "crlf.cl").unwrap();
    assert_eq!(statements.len(), 2);
    match &statements[1] {
        Stmt::Language(language) => {
            assert_eq!(language.id.inner(), "B");
            assert_eq!(language.id.span().start.line, 2);
        }
        other => panic!("expected a language, got {other:?}"),
    }
}

#[test]
fn test_parsing_is_deterministic() {
    assert_eq!(
        parse(DOCUMENT, "document.cl"),
        parse(DOCUMENT, "document.cl")
    );
}

#[test]
fn test_error_display() {
    let error = parse("lang ,", "bad.cl").unwrap_err();
    assert_eq!(error.to_string(), "expected identifier but found ',' at 1:6");
}

#[test]
fn test_error_at_end_of_input_has_no_span() {
    let error = parse("import *", "bad.cl").unwrap_err();
    assert_eq!(
        error.to_string(),
        "expected from but found end of input at 1:9"
    );
    assert_eq!(error.span, None);
}

#[test]
fn test_empty_input_is_an_error() {
    assert!(parse("", "empty.cl").is_err());
}
