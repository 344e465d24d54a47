//! [`ParseState`] — the single mutable cursor every `grammar::*` function and
//! every [`crate::strategy::ParserStrategy`] method threads through. Bundles the lexer snapshot, the in-progress id map, the
//! token cursor, and the three external collaborators (locale, cancellation
//! token, trace sink) behind one `&mut` borrow.

pub mod checkpoint;

use std::rc::Rc;

use crate::ast::kind::NodeKind;
use crate::ast::node::{AstNode, NodeId};
use crate::cancellation::CancellationToken;
use crate::context::NodeIdMapCollection;
use crate::error::{Expectation, Found, Location, ParseError, ParseResult};
use crate::lexer::{LexerSnapshot, Token, TokenKind};
use crate::limit::LimitTracker;
use crate::locale::Locale;
use crate::trace::{CorrelationId, TraceSink};

pub use checkpoint::Checkpoint;

pub struct ParseState {
    lexer: LexerSnapshot,
    token_index: u32,
    id_map: NodeIdMapCollection,
    id_counter: u32,
    current_context_id: Option<NodeId>,
    recursion: LimitTracker,
    pub locale: Locale,
    pub cancellation_token: Rc<dyn CancellationToken>,
    pub trace_sink: Rc<dyn TraceSink>,
}

impl ParseState {
    pub fn new(
        lexer: LexerSnapshot,
        recursion_limit: usize,
        locale: Locale,
        cancellation_token: Rc<dyn CancellationToken>,
        trace_sink: Rc<dyn TraceSink>,
    ) -> Self {
        Self {
            lexer,
            token_index: 0,
            id_map: NodeIdMapCollection::new(),
            id_counter: 0,
            current_context_id: None,
            recursion: LimitTracker::new(recursion_limit),
            locale,
            cancellation_token,
            trace_sink,
        }
    }

    /// Runs `f` one recursion level deeper. Every
    /// [`crate::grammar::expression::read_expression`] call goes through
    /// this, since that is the one production every nested sub-expression
    /// (parenthesized, list item, invoke argument, record field, ...)
    /// recurses back into — which makes it the one place a cancellation poll
    /// reaches every production entry/exit without threading a check through
    /// each of them individually.
    pub fn with_recursion_guard<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.check_cancellation()?;
        self.recursion.enter();
        if self.recursion.limited() {
            self.recursion.exit();
            return Err(ParseError::RecursionLimitExceeded {
                limit: self.recursion.limit,
                location: self.current_location(),
                locale: self.locale.clone(),
            });
        }
        let result = f(self);
        self.recursion.exit();
        result
    }

    pub fn recursion_high_water(&self) -> usize {
        self.recursion.high
    }

    // --- Token cursor ---------------------------------------------------------

    pub fn current_token(&self) -> Option<&Token> {
        self.lexer.token(self.token_index as usize)
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.current_token().map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    pub fn peek_kind_at(&self, offset: u32) -> TokenKind {
        self.lexer
            .token((self.token_index + offset) as usize)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    pub fn is_done(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    pub fn current_location(&self) -> Location {
        self.current_token().map(|t| t.start).unwrap_or_else(|| self.lexer.end_of_input())
    }

    pub fn token_index(&self) -> u32 {
        self.token_index
    }

    /// Unconditionally consumes the current token, returning its text. Only
    /// called after `test_kind`/`expect_kind` has already confirmed the
    /// token's shape.
    pub fn advance(&mut self) -> Box<str> {
        let text = self
            .current_token()
            .map(|t| t.text.clone())
            .unwrap_or_default();
        self.token_index += 1;
        text
    }

    pub fn test_kind(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn found(&self) -> Found {
        match self.current_token() {
            Some(t) => Found::Token {
                kind: t.kind,
                text: t.text.clone(),
            },
            None => Found::EndOfInput,
        }
    }

    /// Consumes the current token if it matches `kind`, otherwise raises
    /// `ExpectedTokenKind`.
    pub fn expect_kind(&mut self, kind: TokenKind) -> ParseResult<Box<str>> {
        if self.test_kind(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::ExpectedTokenKind {
                expected: kind,
                found: self.found(),
                location: self.current_location(),
                locale: self.locale.clone(),
            })
        }
    }

    pub fn expect_any_kind(&mut self, kinds: &[TokenKind]) -> ParseResult<Box<str>> {
        if kinds.iter().any(|k| self.test_kind(*k)) {
            Ok(self.advance())
        } else {
            Err(ParseError::ExpectedAnyTokenKind {
                expected: Expectation::AnyOf(kinds.to_vec()),
                found: self.found(),
                location: self.current_location(),
                locale: self.locale.clone(),
            })
        }
    }

    pub fn check_cancellation(&self) -> ParseResult<()> {
        if self.cancellation_token.is_cancelled() {
            Err(ParseError::Cancelled)
        } else {
            Ok(())
        }
    }

    // --- Trace instrumentation -------------------------------------------------

    pub fn trace_enter(&self, category: &str, name: &str, parent: Option<CorrelationId>) -> CorrelationId {
        self.trace_sink.enter(category, name, parent)
    }

    pub fn trace_exit(&self, id: CorrelationId) {
        self.trace_sink.exit(id);
    }

    // --- Context graph ----------------------------------------------------------

    pub fn start_context(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::new(self.id_counter);
        self.id_counter += 1;
        let parent = self.current_context_id;
        self.id_map.start_context(id, kind, parent, self.token_index);
        self.current_context_id = Some(id);
        id
    }

    /// Closes the context opened last. `id` is asserted against the current
    /// context as a guard against a grammar production closing the wrong
    /// node.
    pub fn end_context(&mut self, id: NodeId, leaf_text: Option<Box<str>>) -> &AstNode {
        debug_assert_eq!(
            self.current_context_id,
            Some(id),
            "end_context called out of order"
        );
        let node = self.id_map.end_context(id, self.token_index, leaf_text);
        self.current_context_id = self.id_map.parent_id(id);
        node
    }

    pub fn delete_context(&mut self, id: NodeId) {
        if self.current_context_id == Some(id) {
            self.current_context_id = self.id_map.parent_id(id);
        }
        self.id_map.delete_context(id);
    }

    pub fn current_context_id(&self) -> Option<NodeId> {
        self.current_context_id
    }

    pub fn id_map(&self) -> &NodeIdMapCollection {
        &self.id_map
    }

    pub fn id_map_mut(&mut self) -> &mut NodeIdMapCollection {
        &mut self.id_map
    }

    /// Consumes the state to hand back ownership of the completed id map
    ///, once parsing has
    /// finished and there is no more need for the rest of `ParseState`.
    pub fn into_id_map(self) -> NodeIdMapCollection {
        self.id_map
    }

    /// Renumbers the subtree rooted at `root` into a fresh, contiguous id
    /// run, advances the id counter past the ids it just
    /// handed out, and — since the renumbered subtree's root is very often
    /// the context currently open — remaps `current_context_id` too so a
    /// caller's subsequent `end_context` call still finds the context it
    /// expects under its (now different) id. Returns `root`'s new id.
    pub fn renumber_subtree(&mut self, root: NodeId) -> NodeId {
        let mapping = self.id_map.recalculate_ids(root, self.id_counter);
        self.id_map.update_node_ids(&mapping);

        if let Some(max) = mapping.values().map(|id| id.value()).max() {
            self.id_counter = self.id_counter.max(max + 1);
        }
        if let Some(current) = self.current_context_id {
            self.current_context_id = Some(*mapping.get(&current).unwrap_or(&current));
        }

        *mapping.get(&root).unwrap_or(&root)
    }

    pub fn lexer(&self) -> &LexerSnapshot {
        &self.lexer
    }

    /// Allocates the next id without opening a context — used only by
    /// recursive-primary-expression reparenting, which creates
    /// the `RecursivePrimaryExpression` wrapper node directly rather than by
    /// the usual start/end-context pair around a sequence of reads.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId::new(self.id_counter);
        self.id_counter += 1;
        id
    }

    pub fn id_counter(&self) -> u32 {
        self.id_counter
    }

    pub fn set_id_counter(&mut self, value: u32) {
        self.id_counter = value;
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::capture(self)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        checkpoint.restore(self);
    }

    fn id_map_snapshot(&self) -> NodeIdMapCollection {
        self.id_map.clone()
    }

    fn restore_id_map(&mut self, snapshot: NodeIdMapCollection) {
        self.id_map = snapshot;
    }

    pub fn assert_done_parsing(&self) -> ParseResult<()> {
        if self.is_done() {
            Ok(())
        } else {
            Err(ParseError::UnusedTokensRemain {
                location: self.current_location(),
                locale: self.locale.clone(),
            })
        }
    }
}
