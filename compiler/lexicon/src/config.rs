//! Scanner configuration.
//!
//! A [`ScannerConfig`] is an immutable value handed to the scanner by
//! reference. Scanners never mutate it, so one configuration can back any
//! number of scanners, on any number of threads.
//!
//! Build a custom configuration with [`ScannerConfig::builder()`], which
//! starts from the defaults and validates on [`build()`](ScannerConfigBuilder::build).

use std::sync::OnceLock;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::{LexErrorKind, TokenKind};

/// Longest supported operator, in code points.
///
/// Operators are matched against a fixed three code point lookahead window.
pub const MAX_OPERATOR_LEN: usize = 3;

/// Total classification function over characters.
pub type CharPredicate = fn(char) -> bool;

/// Keyword list of the C-family baseline language, including its builtin
/// type names. Not enabled by default; pass it to
/// [`ScannerConfigBuilder::keywords`].
pub const STANDARD_KEYWORDS: &[&str] = &[
    "Bool",
    "Float",
    "Int",
    "UInt",
    "Void",
    "as",
    "break",
    "case",
    "const",
    "continue",
    "default",
    "do",
    "else",
    "false",
    "fn",
    "for",
    "if",
    "import",
    "in",
    "inout",
    "interface",
    "new",
    "return",
    "struct",
    "switch",
    "true",
    "try",
    "typealias",
    "var",
    "void",
    "while",
];

const DEFAULT_OPERATORS: &[&str] = &[
    "<<=", ">>=", "==", "!=", "<=", ">=", "<<", ">>", "&&", "||", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "..", "=", "<", ">", "+", "-", "*", "/", "%", "&", "|", "^", "!", "~",
];

const DEFAULT_PUNCTUATION: &[char] = &[',', ':', ';', '(', ')', '[', ']', '{', '}', '.'];

/// `XID_Start` or `_`.
pub fn unicode_ident_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// `XID_Continue` (which includes `_` and ASCII digits).
pub fn unicode_ident_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// ASCII letter or `_`.
pub fn ascii_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// ASCII letter, digit, or `_`.
pub fn ascii_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Which literal a quote character opens.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QuoteKind {
    String,
    Char,
}

impl QuoteKind {
    pub(crate) fn token_kind(self) -> TokenKind {
        match self {
            QuoteKind::String => TokenKind::StringLiteral,
            QuoteKind::Char => TokenKind::CharLiteral,
        }
    }

    pub(crate) fn unterminated(self) -> LexErrorKind {
        match self {
            QuoteKind::String => LexErrorKind::UnterminatedString,
            QuoteKind::Char => LexErrorKind::UnterminatedChar,
        }
    }
}

/// A comment delimiter pair.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum CommentStyle {
    /// Runs to the end of the line; the newline is not part of the comment.
    Line { open: Box<str> },
    /// Runs through the first `close` after `open`. Does not nest.
    Block { open: Box<str>, close: Box<str> },
}

impl CommentStyle {
    pub fn open(&self) -> &str {
        match self {
            CommentStyle::Line { open } | CommentStyle::Block { open, .. } => open,
        }
    }
}

/// Invalid builder input.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("operator must not be empty")]
    EmptyOperator,
    #[error("operator `{operator}` is {len} code points long; at most 3 are supported")]
    OperatorTooLong { operator: String, len: usize },
    #[error("comment delimiter must not be empty")]
    EmptyCommentDelimiter,
    #[error("delimiter {0:?} starts with whitespace and could never be matched")]
    WhitespaceDelimiter(char),
    #[error("backslash cannot be a quote character")]
    BackslashQuote,
    #[error("delimiter {0:?} can never match; it starts an identifier, number or quote")]
    ShadowedDelimiter(char),
}

/// Immutable scanner configuration.
#[derive(Clone, Debug)]
pub struct ScannerConfig {
    /// Sorted longest first.
    operators: Vec<Box<str>>,
    punctuation: FxHashSet<char>,
    /// Sorted by opener length, longest first.
    comments: Vec<CommentStyle>,
    quotes: FxHashMap<char, QuoteKind>,
    keywords: FxHashSet<Box<str>>,
    ident_start: CharPredicate,
    ident_continue: CharPredicate,
    whitespace: CharPredicate,
    emit_comments: bool,
}

static DEFAULT_CONFIG: OnceLock<ScannerConfig> = OnceLock::new();

impl ScannerConfig {
    /// Builder seeded with the default configuration.
    pub fn builder() -> ScannerConfigBuilder {
        ScannerConfigBuilder::default()
    }

    /// Process-wide default configuration, built once and never mutated.
    pub fn shared_default() -> &'static ScannerConfig {
        DEFAULT_CONFIG.get_or_init(ScannerConfig::default)
    }

    /// Operators, longest first.
    pub fn operators(&self) -> &[Box<str>] {
        &self.operators
    }

    /// Comment styles, longest opener first.
    pub fn comments(&self) -> &[CommentStyle] {
        &self.comments
    }

    #[inline]
    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }

    #[inline]
    pub fn quote_kind(&self, c: char) -> Option<QuoteKind> {
        self.quotes.get(&c).copied()
    }

    #[inline]
    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    #[inline]
    pub fn is_ident_start(&self, c: char) -> bool {
        (self.ident_start)(c)
    }

    #[inline]
    pub fn is_ident_continue(&self, c: char) -> bool {
        (self.ident_continue)(c)
    }

    #[inline]
    pub fn is_whitespace(&self, c: char) -> bool {
        (self.whitespace)(c)
    }

    /// When `false`, comments are skipped like whitespace.
    pub fn emit_comments(&self) -> bool {
        self.emit_comments
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfigBuilder::default().finish()
    }
}

/// Builder for [`ScannerConfig`].
///
/// Set-valued methods replace the current set; `add_*` methods extend it.
#[derive(Clone, Debug)]
pub struct ScannerConfigBuilder {
    operators: Vec<String>,
    punctuation: Vec<char>,
    line_comments: Vec<String>,
    block_comments: Vec<(String, String)>,
    quotes: Vec<(char, QuoteKind)>,
    keywords: Vec<String>,
    ident_start: CharPredicate,
    ident_continue: CharPredicate,
    whitespace: CharPredicate,
    emit_comments: bool,
}

impl Default for ScannerConfigBuilder {
    fn default() -> Self {
        Self {
            operators: DEFAULT_OPERATORS.iter().map(ToString::to_string).collect(),
            punctuation: DEFAULT_PUNCTUATION.to_vec(),
            line_comments: vec!["//".to_owned()],
            block_comments: vec![("/*".to_owned(), "*/".to_owned())],
            quotes: vec![('"', QuoteKind::String), ('\'', QuoteKind::Char)],
            keywords: Vec::new(),
            ident_start: unicode_ident_start,
            ident_continue: unicode_ident_continue,
            whitespace: char::is_whitespace,
            emit_comments: true,
        }
    }
}

impl ScannerConfigBuilder {
    #[must_use]
    pub fn operators<I, S>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators = operators.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn add_operator(mut self, operator: impl Into<String>) -> Self {
        self.operators.push(operator.into());
        self
    }

    #[must_use]
    pub fn punctuation(mut self, punctuation: impl IntoIterator<Item = char>) -> Self {
        self.punctuation = punctuation.into_iter().collect();
        self
    }

    #[must_use]
    pub fn line_comments<I, S>(mut self, openers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.line_comments = openers.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn block_comments<I, S>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        self.block_comments = pairs
            .into_iter()
            .map(|(open, close)| (open.into(), close.into()))
            .collect();
        self
    }

    #[must_use]
    pub fn quotes(mut self, quotes: impl IntoIterator<Item = (char, QuoteKind)>) -> Self {
        self.quotes = quotes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn add_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Identifier classification. Both predicates must be total.
    #[must_use]
    pub fn identifier_classes(mut self, start: CharPredicate, cont: CharPredicate) -> Self {
        self.ident_start = start;
        self.ident_continue = cont;
        self
    }

    #[must_use]
    pub fn whitespace(mut self, whitespace: CharPredicate) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// Emit comments as `Comment` tokens (`true`, default) or skip them.
    #[must_use]
    pub fn emit_comments(mut self, emit: bool) -> Self {
        self.emit_comments = emit;
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<ScannerConfig, ConfigError> {
        self.validate()?;
        Ok(self.finish())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for operator in &self.operators {
            let len = operator.chars().count();
            match operator.chars().next() {
                None => return Err(ConfigError::EmptyOperator),
                Some(first) if (self.whitespace)(first) => {
                    return Err(ConfigError::WhitespaceDelimiter(first));
                }
                Some(_) => {}
            }
            if len > MAX_OPERATOR_LEN {
                return Err(ConfigError::OperatorTooLong {
                    operator: operator.clone(),
                    len,
                });
            }
        }

        let openers = self
            .line_comments
            .iter()
            .chain(self.block_comments.iter().map(|(open, _)| open));
        for opener in openers {
            match opener.chars().next() {
                None => return Err(ConfigError::EmptyCommentDelimiter),
                Some(first) if (self.whitespace)(first) => {
                    return Err(ConfigError::WhitespaceDelimiter(first));
                }
                Some(_) => {}
            }
        }
        if self.block_comments.iter().any(|(_, close)| close.is_empty()) {
            return Err(ConfigError::EmptyCommentDelimiter);
        }

        for &c in self.punctuation.iter().chain(self.quotes.iter().map(|(q, _)| q)) {
            if (self.whitespace)(c) {
                return Err(ConfigError::WhitespaceDelimiter(c));
            }
        }
        if self.quotes.iter().any(|&(q, _)| q == '\\') {
            return Err(ConfigError::BackslashQuote);
        }

        // Identifiers, numbers and quotes are dispatched before operators and
        // punctuation, so a delimiter starting with one of them never matches.
        for &(q, _) in &self.quotes {
            if self.starts_identifier_or_number(q) {
                return Err(ConfigError::ShadowedDelimiter(q));
            }
        }
        let firsts = self
            .operators
            .iter()
            .filter_map(|op| op.chars().next())
            .chain(self.punctuation.iter().copied());
        for c in firsts {
            if self.starts_identifier_or_number(c) || self.quotes.iter().any(|&(q, _)| q == c) {
                return Err(ConfigError::ShadowedDelimiter(c));
            }
        }
        Ok(())
    }

    fn starts_identifier_or_number(&self, c: char) -> bool {
        (self.ident_start)(c) || c.is_ascii_digit()
    }

    /// Normalize without validating. Only called on validated or default input.
    fn finish(self) -> ScannerConfig {
        let mut operators: Vec<Box<str>> = self
            .operators
            .into_iter()
            .map(String::into_boxed_str)
            .collect();
        operators.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        operators.dedup();

        let mut comments: Vec<CommentStyle> = self
            .line_comments
            .into_iter()
            .map(|open| CommentStyle::Line {
                open: open.into_boxed_str(),
            })
            .chain(
                self.block_comments
                    .into_iter()
                    .map(|(open, close)| CommentStyle::Block {
                        open: open.into_boxed_str(),
                        close: close.into_boxed_str(),
                    }),
            )
            .collect();
        comments.sort_by(|a, b| b.open().len().cmp(&a.open().len()));

        ScannerConfig {
            operators,
            punctuation: self.punctuation.into_iter().collect(),
            comments,
            quotes: self.quotes.into_iter().collect(),
            keywords: self
                .keywords
                .into_iter()
                .map(String::into_boxed_str)
                .collect(),
            ident_start: self.ident_start,
            ident_continue: self.ident_continue,
            whitespace: self.whitespace,
            emit_comments: self.emit_comments,
        }
    }
}

#[cfg(test)]
mod tests;
