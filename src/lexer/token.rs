//! `Token` and `LexerSnapshot` are the parser's input boundary: a finite
//! ordered sequence of read-only tokens plus the text buffer they slice
//! into. The parser never mutates either.

use crate::error::Location;
use crate::lexer::TokenKind;
use std::rc::Rc;

/// A single lexed token. Read-only; owned by the [`LexerSnapshot`] that
/// produced it and indexed by position, never by reference, so that
/// [`crate::state::checkpoint::Checkpoint`] can rewind to any prior index
/// for free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Box<str>,
    pub start: Location,
    pub end: Location,
}

impl Token {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The lexer's complete, immutable output: the text buffer plus every
/// non-trivia token in source order, with random access by index.
#[derive(Debug, Clone)]
pub struct LexerSnapshot {
    text: Rc<str>,
    tokens: Rc<[Token]>,
}

impl LexerSnapshot {
    pub(crate) fn new(text: Rc<str>, tokens: Vec<Token>) -> Self {
        Self {
            text,
            tokens: tokens.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Random access by token index.
    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The slice of the original text spanning `[start, end)`, used by
    /// `readGeneralizedIdentifier` to compute the *original*
    /// text between two token boundaries rather than concatenating token
    /// texts (which would lose inter-token whitespace that is part of a
    /// generalized identifier).
    pub fn slice(&self, start: Location, end: Location) -> &str {
        &self.text[start.code_unit_offset as usize..end.code_unit_offset as usize]
    }

    /// The position one past the final real token, used to synthesize the
    /// "virtual" end-of-input token a failing read reports a position
    /// against once the stream is exhausted.
    pub fn end_of_input(&self) -> Location {
        self.tokens
            .last()
            .map(|t| t.end)
            .unwrap_or(Location::new(0, 1, 1, 1))
    }
}
