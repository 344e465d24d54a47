#![doc = include_str!("../README.md")]

pub mod ast;
mod cancellation;
mod context;
mod error;
mod grammar;
mod lexer;
mod limit;
mod locale;
mod parser;
mod state;
mod strategy;
#[cfg(test)]
mod tests;
mod trace;

pub use crate::cancellation::{CancellationToken, FlagCancellationToken, NeverCancelled};
pub use crate::context::{ContextNode, NodeIdMapCollection};
pub use crate::error::{Expectation, Found, Location, ParseError, ParseResult};
pub use crate::lexer::{Token, TokenKind};
pub use crate::locale::Locale;
pub use crate::parser::{ParseTree, Parser};
pub use crate::strategy::{CombinatorialParser, NaiveParser, ParserStrategy};
pub use crate::trace::{CorrelationId, NullTraceSink, TraceSink};
