//! The lexer is an external collaborator of the parser core:
//! it supplies a finite token stream with position info and a text buffer,
//! nothing more. `grammar::*` only ever depends on [`Token`]/[`TokenKind`]/
//! [`LexerSnapshot`], never on anything in this module's private tokenizing
//! logic.
//!
//! A real tokenizer is still included (rather than left as a trait with no
//! implementation) because a parser crate that cannot turn source text into
//! tokens cannot be exercised or trusted.

mod cursor;
mod token;
mod token_kind;

use crate::error::Location;
use cursor::Cursor;
use std::rc::Rc;

pub use token::{LexerSnapshot, Token};
pub use token_kind::TokenKind;

/// Tokenizes `input` into a [`LexerSnapshot`]. Trivia (comments, whitespace)
/// is consumed for position-tracking purposes but never appears in the
/// returned token stream — the grammar has no notion of trivia to skip, so
/// it is simpler to never hand it any; the round-trip property this crate
/// cares about only concerns leaf literal spans, which are unaffected by
/// dropping trivia from the stream.
pub fn tokenize(input: &str) -> LexerSnapshot {
    let text: Rc<str> = Rc::from(input);
    let mut tokens = Vec::new();
    let mut cursor = Cursor::new(input);
    let mut line = 1u32;
    let mut column = 1u32;
    let mut grapheme_column = 1u32;
    let mut byte_offset = 0u32;

    loop {
        let start_offset = cursor.offset();
        let start = Location::new(byte_offset, line, column, grapheme_column);
        if cursor.is_eof() {
            tokens.push(Token {
                kind: TokenKind::Eof,
                text: "".into(),
                start,
                end: start,
            });
            break;
        }

        let mut kind = advance(&mut cursor);
        let end_offset = cursor.offset();
        let slice = &input[start_offset..end_offset];
        if kind == TokenKind::Identifier {
            kind = keyword_or_identifier(slice);
        }
        advance_position(slice, &mut line, &mut column, &mut grapheme_column, &mut byte_offset);
        let end = Location::new(byte_offset, line, column, grapheme_column);

        if !kind.is_trivia() {
            tokens.push(Token {
                kind,
                text: slice.into(),
                start,
                end,
            });
        }
    }

    LexerSnapshot::new(text, tokens)
}

fn advance_position(
    consumed: &str,
    line: &mut u32,
    column: &mut u32,
    grapheme_column: &mut u32,
    byte_offset: &mut u32,
) {
    for c in consumed.chars() {
        *byte_offset += c.len_utf8() as u32;
        if c == '\n' {
            *line += 1;
            *column = 1;
            *grapheme_column = 1;
        } else {
            *column += 1;
            *grapheme_column += 1;
        }
    }
}

fn advance(cursor: &mut Cursor<'_>) -> TokenKind {
    let first = cursor.bump().expect("advance called at EOF");

    match first {
        c if is_whitespace(c) => {
            cursor.eat_while(is_whitespace);
            TokenKind::Whitespace
        }
        '/' if cursor.first() == '/' => {
            cursor.eat_while(|c| c != '\n');
            TokenKind::Comment
        }
        '/' if cursor.first() == '*' => {
            cursor.bump();
            loop {
                if cursor.is_eof() {
                    break;
                }
                if cursor.first() == '*' && cursor.second() == '/' {
                    cursor.bump();
                    cursor.bump();
                    break;
                }
                cursor.bump();
            }
            TokenKind::Comment
        }
        '/' => TokenKind::Division,
        '"' => {
            string_literal(cursor);
            TokenKind::TextLiteral
        }
        '#' => hash_keyword_or_quoted_identifier(cursor),
        c if is_identifier_start(c) => {
            cursor.eat_while(is_identifier_continue);
            TokenKind::Identifier
        }
        c if c.is_ascii_digit() => {
            number_literal(cursor, c);
            TokenKind::NumericLiteral
        }
        '.' if cursor.first() == '.' && cursor.second() == '.' => {
            cursor.bump();
            cursor.bump();
            TokenKind::Ellipsis
        }
        '.' if cursor.first().is_ascii_digit() => {
            cursor.eat_while(|c| c.is_ascii_digit());
            maybe_exponent(cursor);
            TokenKind::NumericLiteral
        }
        '?' if cursor.first() == '?' => {
            cursor.bump();
            TokenKind::NullCoalescingOperator
        }
        '=' if cursor.first() == '>' => {
            cursor.bump();
            TokenKind::FatArrow
        }
        '<' if cursor.first() == '>' => {
            cursor.bump();
            TokenKind::NotEqual
        }
        '<' if cursor.first() == '=' => {
            cursor.bump();
            TokenKind::LessThanEqualTo
        }
        '>' if cursor.first() == '=' => {
            cursor.bump();
            TokenKind::GreaterThanEqualTo
        }
        '(' => TokenKind::LeftParenthesis,
        ')' => TokenKind::RightParenthesis,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        '=' => TokenKind::Equal,
        '<' => TokenKind::LessThan,
        '>' => TokenKind::GreaterThan,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Asterisk,
        '&' => TokenKind::Ampersand,
        '@' => TokenKind::At,
        '?' => TokenKind::QuestionMark,
        '.' => TokenKind::Unknown,
        _ => TokenKind::Unknown,
    }
}

fn string_literal(cursor: &mut Cursor<'_>) {
    loop {
        if cursor.is_eof() {
            break;
        }
        match cursor.first() {
            '"' if cursor.second() == '"' => {
                cursor.bump();
                cursor.bump();
            }
            '"' => {
                cursor.bump();
                break;
            }
            _ => {
                cursor.bump();
            }
        }
    }
}

/// `#"..."` quoted identifiers, and the fixed set of `#`-prefixed keywords
///. Any other text after `#` is a lone
/// `Unknown` token for the `#` itself plus whatever follows it lexes to.
fn hash_keyword_or_quoted_identifier(cursor: &mut Cursor<'_>) -> TokenKind {
    if cursor.first() == '"' {
        cursor.bump();
        string_literal(cursor);
        return TokenKind::QuotedIdentifier;
    }

    let start = cursor.rest();
    cursor.eat_while(is_identifier_continue);
    let consumed_len = start.len() - cursor.rest().len();
    let word = &start[..consumed_len];

    match word {
        "section" => TokenKind::HashSection,
        "shared" => TokenKind::HashShared,
        "binary" => TokenKind::HashBinary,
        "date" => TokenKind::HashDate,
        "datetime" => TokenKind::HashDateTime,
        "datetimezone" => TokenKind::HashDateTimeZone,
        "duration" => TokenKind::HashDuration,
        "table" => TokenKind::HashTable,
        "time" => TokenKind::HashTime,
        _ => TokenKind::Unknown,
    }
}

fn keyword_or_identifier(word: &str) -> TokenKind {
    match word {
        "and" => TokenKind::And,
        "as" => TokenKind::As,
        "each" => TokenKind::Each,
        "else" => TokenKind::Else,
        "error" => TokenKind::Error,
        "false" => TokenKind::False,
        "if" => TokenKind::If,
        "in" => TokenKind::In,
        "is" => TokenKind::Is,
        "let" => TokenKind::Let,
        "meta" => TokenKind::Meta,
        "not" => TokenKind::Not,
        "null" => TokenKind::Null,
        "or" => TokenKind::Or,
        "otherwise" => TokenKind::Otherwise,
        "section" => TokenKind::Section,
        "shared" => TokenKind::Shared,
        "then" => TokenKind::Then,
        "true" => TokenKind::True,
        "try" => TokenKind::Try,
        "type" => TokenKind::Type,
        _ => TokenKind::Identifier,
    }
}

fn number_literal(cursor: &mut Cursor<'_>, first: char) {
    if first == '0' && (cursor.first() == 'x' || cursor.first() == 'X') {
        cursor.bump();
        cursor.eat_while(|c| c.is_ascii_hexdigit());
        return;
    }

    cursor.eat_while(|c| c.is_ascii_digit());
    if cursor.first() == '.' && cursor.second().is_ascii_digit() {
        cursor.bump();
        cursor.eat_while(|c| c.is_ascii_digit());
    }
    maybe_exponent(cursor);
}

fn maybe_exponent(cursor: &mut Cursor<'_>) {
    if matches!(cursor.first(), 'e' | 'E') {
        cursor.bump();
        if matches!(cursor.first(), '+' | '-') {
            cursor.bump();
        }
        cursor.eat_while(|c| c.is_ascii_digit());
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// Classifies a generalized identifier's already-extracted text the way
/// `readGeneralizedIdentifier` requires: it must look like an
/// identifier-ish run of characters, not e.g. contain a bracket.
pub fn looks_like_generalized_identifier(text: &str) -> bool {
    !text.is_empty()
        && !text.contains(['[', ']', '{', '}', '(', ')', '"'])
        && !text.trim().is_empty()
}

/// The fixed set of 17 primitive-type names `read_primitive_type` checks
/// against. `type` and `null` are recognized by the caller as two further,
/// separately-handled primitive type spellings.
pub const PRIMITIVE_TYPE_NAMES: &[&str] = &[
    "action",
    "any",
    "anynonnull",
    "binary",
    "date",
    "datetime",
    "datetimezone",
    "duration",
    "function",
    "list",
    "logical",
    "none",
    "number",
    "record",
    "table",
    "text",
    "time",
];
