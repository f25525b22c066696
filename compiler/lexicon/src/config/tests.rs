#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use pretty_assertions::assert_eq;

// === Defaults ===

#[test]
fn default_operators_are_longest_first() {
    let config = ScannerConfig::default();
    let lens: Vec<usize> = config
        .operators()
        .iter()
        .map(|op| op.chars().count())
        .collect();
    let mut sorted = lens.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(lens, sorted);
    assert_eq!(config.operators().first().map(|op| op.len()), Some(3));
}

#[test]
fn default_punctuation_and_quotes() {
    let config = ScannerConfig::default();
    for c in [',', ';', '(', ')', '{', '}', '[', ']', ':', '.'] {
        assert!(config.is_punctuation(c), "{c:?}");
    }
    assert!(!config.is_punctuation('+'));
    assert_eq!(config.quote_kind('"'), Some(QuoteKind::String));
    assert_eq!(config.quote_kind('\''), Some(QuoteKind::Char));
    assert_eq!(config.quote_kind('`'), None);
}

#[test]
fn default_comment_styles() {
    let config = ScannerConfig::default();
    assert_eq!(
        config.comments(),
        &[
            CommentStyle::Line { open: "//".into() },
            CommentStyle::Block {
                open: "/*".into(),
                close: "*/".into()
            },
        ]
    );
    assert!(config.emit_comments());
}

#[test]
fn standard_keywords_include_type_names() {
    let config = ScannerConfig::builder()
        .keywords(STANDARD_KEYWORDS.iter().copied())
        .build()
        .unwrap();
    for kw in ["Bool", "Float", "Int", "UInt", "Void", "while"] {
        assert!(config.is_keyword(kw), "{kw}");
    }
    assert!(!config.is_keyword("int"));
}

#[test]
fn default_has_no_keywords() {
    assert!(!ScannerConfig::default().is_keyword("if"));
}

#[test]
fn default_identifier_classes_are_unicode() {
    let config = ScannerConfig::default();
    assert!(config.is_ident_start('_'));
    assert!(config.is_ident_start('λ'));
    assert!(!config.is_ident_start('1'));
    assert!(config.is_ident_continue('1'));
    assert!(!config.is_ident_continue('-'));
}

#[test]
fn shared_default_is_one_instance() {
    assert!(std::ptr::eq(
        ScannerConfig::shared_default(),
        ScannerConfig::shared_default()
    ));
}

// === Builder ===

#[test]
fn builder_replaces_and_extends() {
    let config = ScannerConfig::builder()
        .operators(["->", "="])
        .add_operator("=>")
        .punctuation(['(', ')'])
        .keywords(STANDARD_KEYWORDS.iter().copied())
        .add_keyword("let")
        .build()
        .unwrap();
    let expected: Vec<Box<str>> = vec!["->".into(), "=>".into(), "=".into()];
    assert_eq!(config.operators(), expected.as_slice());
    assert!(!config.is_punctuation(','));
    assert!(config.is_keyword("while"));
    assert!(config.is_keyword("let"));
}

#[test]
fn builder_dedups_operators() {
    let config = ScannerConfig::builder()
        .operators(["+", "+", "++"])
        .build()
        .unwrap();
    assert_eq!(config.operators().len(), 2);
}

#[test]
fn comment_openers_sorted_longest_first() {
    let config = ScannerConfig::builder()
        .line_comments(["#"])
        .block_comments([("#[[", "]]")])
        .build()
        .unwrap();
    assert_eq!(config.comments()[0].open(), "#[[");
    assert_eq!(config.comments()[1].open(), "#");
}

#[test]
fn ascii_identifier_classes() {
    let config = ScannerConfig::builder()
        .identifier_classes(ascii_ident_start, ascii_ident_continue)
        .build()
        .unwrap();
    assert!(!config.is_ident_start('λ'));
    assert!(config.is_ident_start('a'));
    assert!(config.is_ident_continue('9'));
}

// === Validation ===

#[test]
fn rejects_empty_operator() {
    let err = ScannerConfig::builder().add_operator("").build().unwrap_err();
    assert_eq!(err, ConfigError::EmptyOperator);
}

#[test]
fn rejects_long_operator() {
    let err = ScannerConfig::builder()
        .add_operator("<<<=")
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::OperatorTooLong {
            operator: "<<<=".to_owned(),
            len: 4
        }
    );
    assert_eq!(
        err.to_string(),
        "operator `<<<=` is 4 code points long; at most 3 are supported"
    );
}

#[test]
fn operator_length_counts_code_points() {
    assert!(ScannerConfig::builder().add_operator("→→→").build().is_ok());
}

#[test]
fn rejects_empty_comment_delimiters() {
    let err = ScannerConfig::builder()
        .line_comments([""])
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::EmptyCommentDelimiter);

    let err = ScannerConfig::builder()
        .block_comments([("(*", "")])
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::EmptyCommentDelimiter);
}

#[test]
fn rejects_whitespace_delimiters() {
    let err = ScannerConfig::builder()
        .punctuation([' '])
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::WhitespaceDelimiter(' '));

    let err = ScannerConfig::builder()
        .add_operator("\t+")
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::WhitespaceDelimiter('\t'));
}

#[test]
fn rejects_backslash_quote() {
    let err = ScannerConfig::builder()
        .quotes([('\\', QuoteKind::String)])
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::BackslashQuote);
}

#[test]
fn rejects_operator_starting_like_identifier() {
    let err = ScannerConfig::builder()
        .add_operator("and")
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::ShadowedDelimiter('a'));
}

#[test]
fn rejects_operator_starting_with_digit_or_quote() {
    let err = ScannerConfig::builder().add_operator("1+").build().unwrap_err();
    assert_eq!(err, ConfigError::ShadowedDelimiter('1'));

    let err = ScannerConfig::builder().add_operator("'").build().unwrap_err();
    assert_eq!(err, ConfigError::ShadowedDelimiter('\''));
}

#[test]
fn rejects_shadowed_punctuation() {
    let err = ScannerConfig::builder()
        .punctuation(['_'])
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::ShadowedDelimiter('_'));

    let err = ScannerConfig::builder()
        .punctuation(['"'])
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::ShadowedDelimiter('"'));
}

#[test]
fn rejects_quote_that_starts_identifier() {
    let err = ScannerConfig::builder()
        .quotes([('q', QuoteKind::String)])
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::ShadowedDelimiter('q'));
}

#[test]
fn identifier_classes_decide_what_is_shadowed() {
    // `$` is not an identifier start under the default classes.
    assert!(ScannerConfig::builder().add_operator("$").build().is_ok());
    assert!(ScannerConfig::builder()
        .identifier_classes(crate::ascii_ident_start, crate::ascii_ident_continue)
        .punctuation(['#'])
        .build()
        .is_ok());
}
