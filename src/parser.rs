//! The public entry point: a consuming builder over `&str` input that
//! configures the external collaborators and limits before the one method
//! that actually runs a production (`parse`/`parse_expression`/`parse_type`)
//! takes ownership of `self` and returns a result.

use std::rc::Rc;

use crate::ast::node::NodeId;
use crate::ast::view::NodeView;
use crate::cancellation::{CancellationToken, NeverCancelled};
use crate::context::NodeIdMapCollection;
use crate::error::ParseResult;
use crate::grammar;
use crate::lexer;
use crate::locale::Locale;
use crate::state::ParseState;
use crate::strategy::{NaiveParser, ParserStrategy};
use crate::trace::{NullTraceSink, TraceSink};

/// Chosen empirically as a safety margin under whatever depth first
/// overflows the stack in an unoptimized build. This crate's recursion is
/// one level per nested expression, not per BinOp layer, so a generous
/// ceiling still leaves headroom for deeply nested real-world queries.
const DEFAULT_RECURSION_LIMIT: usize = 512;

/// The completed output of a parse.
pub struct ParseTree {
    id_map: Rc<NodeIdMapCollection>,
    root: NodeId,
    recursion_high_water: usize,
}

impl ParseTree {
    /// The root [`NodeView`], castable to whatever AST wrapper the caller
    /// expects (`crate::ast::nodes::Document` for `parse`, an
    /// [`crate::ast::nodes::ExpressionNode`] for `parse_expression`, a
    /// [`crate::ast::nodes::PrimaryType`] for `parse_type`).
    pub fn root(&self) -> NodeView {
        NodeView::new(Rc::clone(&self.id_map), self.root)
    }

    pub fn id_map(&self) -> &NodeIdMapCollection {
        &self.id_map
    }

    pub fn leaf_node_ids(&self) -> &[NodeId] {
        self.id_map.leaf_node_ids()
    }

    /// How deep the recursion guard's high-water mark reached during this
    /// parse, for callers tuning `.recursion_limit()`.
    pub fn recursion_high_water(&self) -> usize {
        self.recursion_high_water
    }
}

pub struct Parser<'input> {
    input: &'input str,
    locale: Locale,
    cancellation_token: Rc<dyn CancellationToken>,
    trace_sink: Rc<dyn TraceSink>,
    strategy: Box<dyn ParserStrategy>,
    recursion_limit: usize,
    token_limit: Option<usize>,
}

impl<'input> Parser<'input> {
    pub fn new(input: &'input str) -> Self {
        Self {
            input,
            locale: Locale::default(),
            cancellation_token: Rc::new(NeverCancelled),
            trace_sink: Rc::new(NullTraceSink::new()),
            strategy: Box::new(NaiveParser),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            token_limit: None,
        }
    }

    pub fn recursion_limit(mut self, recursion_limit: usize) -> Self {
        self.recursion_limit = recursion_limit;
        self
    }

    /// Caps the number of tokens the lexer is allowed to have produced
    /// before parsing even starts. By default, there is no limit.
    pub fn token_limit(mut self, token_limit: usize) -> Self {
        self.token_limit = Some(token_limit);
        self
    }

    pub fn locale(mut self, locale: impl Into<Locale>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn cancellation_token(mut self, token: Rc<dyn CancellationToken>) -> Self {
        self.cancellation_token = token;
        self
    }

    pub fn trace_sink(mut self, sink: Rc<dyn TraceSink>) -> Self {
        self.trace_sink = sink;
        self
    }

    /// Swaps in [`crate::strategy::CombinatorialParser`], or any other
    /// `ParserStrategy`, in place of the default [`NaiveParser`].
    pub fn strategy(mut self, strategy: Box<dyn ParserStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    fn into_state(self) -> ParseResult<(Box<dyn ParserStrategy>, ParseState)> {
        let lexer = lexer::tokenize(self.input);
        if let Some(limit) = self.token_limit {
            if lexer.len() > limit {
                return Err(crate::error::ParseError::TokenLimitExceeded {
                    limit,
                    location: lexer.end_of_input(),
                    locale: self.locale,
                });
            }
        }
        let state = ParseState::new(
            lexer,
            self.recursion_limit,
            self.locale,
            self.cancellation_token,
            self.trace_sink,
        );
        Ok((self.strategy, state))
    }

    /// Runs `readDocument`: an expression document, or a
    /// section document, whichever the speculative race settles on.
    pub fn parse(self) -> ParseResult<ParseTree> {
        let (strategy, mut state) = self.into_state()?;
        let root = grammar::document::read_document(strategy.as_ref(), &mut state)?;
        Ok(finish(state, root))
    }

    /// Parses a single expression with no document/section wrapper, for
    /// callers that already know their input is exactly one expression —
    /// a convenience entry point parallel to the full document grammar.
    pub fn parse_expression(self) -> ParseResult<ParseTree> {
        let (strategy, mut state) = self.into_state()?;
        let root = strategy.read_expression(&mut state)?;
        state.assert_done_parsing()?;
        Ok(finish(state, root))
    }

    /// Parses a single type expression with no document/section wrapper.
    pub fn parse_type(self) -> ParseResult<ParseTree> {
        let (_strategy, mut state) = self.into_state()?;
        let root = grammar::type_::read_primary_type(&NaiveParser, &mut state)?;
        state.assert_done_parsing()?;
        Ok(finish(state, root))
    }
}

fn finish(state: ParseState, root: NodeId) -> ParseTree {
    let recursion_high_water = state.recursion_high_water();
    ParseTree {
        id_map: Rc::new(state.into_id_map()),
        root,
        recursion_high_water,
    }
}
