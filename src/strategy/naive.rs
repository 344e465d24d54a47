//! The default strategy: every method falls through to
//! [`super::ParserStrategy`]'s default, which is itself just a direct call
//! into the matching `grammar::*` production. A unit struct rather than a
//! bare `impl ParserStrategy for ()` so call sites read `NaiveParser` rather
//! than the opaque `()`.

/// Reads the BinOp ladder and unary expressions one recursive-descent level
/// at a time — nine stack frames deep for a primary expression with no
/// operators at all. [`super::CombinatorialParser`]
/// is the faster alternative; this one is the one to reach for when the
/// nesting needs to show up in a debugger backtrace one level per precedence
/// tier.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveParser;

impl super::ParserStrategy for NaiveParser {}
