//! The parser's error taxonomy.
//!
//! Every variant carries the failing token's literal text, its [`Location`],
//! and the [`Locale`] that was active. No variant renders a human message —
//! `#[error(...)]` strings here are for `Display`/debugging convenience only,
//! not for end users who want localized text.

use crate::lexer::TokenKind;
use crate::locale::Locale;
use std::fmt;

/// A byte offset plus the grapheme-aware line/column/grapheme-column it maps
/// to. Computed once by the lexer snapshot and copied onto
/// every error, since re-deriving it after the fact would need the text
/// buffer again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub code_unit_offset: u32,
    pub line: u32,
    pub column: u32,
    pub grapheme_column: u32,
}

impl Location {
    pub const fn new(code_unit_offset: u32, line: u32, column: u32, grapheme_column: u32) -> Self {
        Self {
            code_unit_offset,
            line,
            column,
            grapheme_column,
        }
    }

    /// The synthesized "virtual" position used when a required read runs off
    /// the end of the token stream: the position of
    /// the last real token's end, reused for every subsequent failure.
    pub const fn synthesized(end_of_last_token: Location) -> Self {
        end_of_last_token
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// What a token-shape error expected, for `ExpectedTokenKind`/`ExpectedAnyTokenKind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    Kind(TokenKind),
    AnyOf(Vec<TokenKind>),
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Kind(kind) => write!(f, "{kind:?}"),
            Expectation::AnyOf(kinds) => {
                let rendered = kinds
                    .iter()
                    .map(|k| format!("{k:?}"))
                    .collect::<Vec<_>>()
                    .join(" | ");
                write!(f, "one of [{rendered}]")
            }
        }
    }
}

/// What was actually found where an expectation failed. `EndOfInput` backs
/// the synthesized virtual-token case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token { kind: TokenKind, text: Box<str> },
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token { kind, text } => write!(f, "{kind:?} {text:?}"),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// The parser's full error taxonomy. `InvariantError` is
/// reserved for bugs in the parser itself, never a malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found} at {location} [{locale}]")]
    ExpectedTokenKind {
        expected: TokenKind,
        found: Found,
        location: Location,
        locale: Locale,
    },

    #[error("expected {expected}, found {found} at {location} [{locale}]")]
    ExpectedAnyTokenKind {
        expected: Expectation,
        found: Found,
        location: Location,
        locale: Locale,
    },

    #[error("expected a generalized identifier, found {found} at {location} [{locale}]")]
    ExpectedGeneralizedIdentifier {
        found: Found,
        location: Location,
        locale: Locale,
    },

    #[error("unexpected trailing comma before closing delimiter at {location} [{locale}]")]
    ExpectedCsvContinuation { location: Location, locale: Locale },

    #[error("{text:?} is not a valid primitive type at {location} [{locale}]")]
    InvalidPrimitiveType {
        text: Box<str>,
        location: Location,
        locale: Locale,
    },

    #[error("a required parameter cannot follow an optional parameter at {location} [{locale}]")]
    RequiredParameterAfterOptional { location: Location, locale: Locale },

    #[error("unused tokens remain after the document was parsed, starting at {location} [{locale}]")]
    UnusedTokensRemain { location: Location, locale: Locale },

    #[error("parser invariant violated: {message}")]
    InvariantError {
        message: Box<str>,
        location: Option<Location>,
    },

    #[error("parser recursion limit ({limit}) reached at {location} [{locale}]")]
    RecursionLimitExceeded {
        limit: usize,
        location: Location,
        locale: Locale,
    },

    #[error("token limit ({limit}) reached at {location} [{locale}]")]
    TokenLimitExceeded {
        limit: usize,
        location: Location,
        locale: Locale,
    },

    #[error("parse cancelled")]
    Cancelled,
}

impl ParseError {
    /// How many tokens the attempt that raised this error had consumed,
    /// approximated by its location's code-unit offset. Used by the two
    /// speculative sites
    /// to pick the "more informative" of two failing branches.
    pub fn progress(&self) -> u32 {
        match self {
            ParseError::ExpectedTokenKind { location, .. }
            | ParseError::ExpectedAnyTokenKind { location, .. }
            | ParseError::ExpectedGeneralizedIdentifier { location, .. }
            | ParseError::ExpectedCsvContinuation { location, .. }
            | ParseError::InvalidPrimitiveType { location, .. }
            | ParseError::RequiredParameterAfterOptional { location, .. }
            | ParseError::UnusedTokensRemain { location, .. }
            | ParseError::RecursionLimitExceeded { location, .. }
            | ParseError::TokenLimitExceeded { location, .. } => location.code_unit_offset,
            ParseError::InvariantError { location, .. } => {
                location.map(|l| l.code_unit_offset).unwrap_or(0)
            }
            ParseError::Cancelled => 0,
        }
    }

    pub fn is_cancellation(&self) -> bool {
        matches!(self, ParseError::Cancelled)
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
