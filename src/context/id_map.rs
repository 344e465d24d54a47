//! [`NodeIdMapCollection`] — the incrementally-maintained parse-context graph
//!. Every id the parser ever allocates
//! lives in exactly one of `ast_node_by_id`/`context_node_by_id` at a time;
//! `parent_id_by_id`/`child_ids_by_id` mirror each other in both directions;
//! `ids_by_node_kind` is a secondary index existing only so callers (and the
//! invariant checks in the test suite) can answer "every node of kind K"
//! without a full scan.

use std::collections::HashMap;
use std::fmt;

use crate::ast::kind::NodeKind;
use crate::ast::node::{AstNode, NodeId, TokenRange};
use crate::context::context_node::ContextNode;

/// The full id-indexed graph a single parse attempt builds up. Cloned
/// wholesale by [`crate::state::checkpoint::Checkpoint::create`] — fine for
/// the tree sizes this parser is built for, and far simpler than a persistent
/// structure or an undo log.
#[derive(Clone, Default)]
pub struct NodeIdMapCollection {
    ast_node_by_id: HashMap<NodeId, AstNode>,
    context_node_by_id: HashMap<NodeId, ContextNode>,
    parent_id_by_id: HashMap<NodeId, NodeId>,
    child_ids_by_id: HashMap<NodeId, Vec<NodeId>>,
    ids_by_node_kind: HashMap<NodeKind, Vec<NodeId>>,
    /// Ids of every node the parser created directly from a single token
    /// rather than by closing a multi-child
    /// context. Tracked separately because recursive-primary-expression
    /// renumbering must rewrite this list too, and it is the
    /// detail easiest to forget when rewriting ids elsewhere.
    leaf_node_ids: Vec<NodeId>,
}

impl NodeIdMapCollection {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Read access --------------------------------------------------------

    pub fn ast_node(&self, id: NodeId) -> Option<&AstNode> {
        self.ast_node_by_id.get(&id)
    }

    pub fn context_node(&self, id: NodeId) -> Option<&ContextNode> {
        self.context_node_by_id.get(&id)
    }

    pub fn context_node_mut(&mut self, id: NodeId) -> Option<&mut ContextNode> {
        self.context_node_by_id.get_mut(&id)
    }

    pub fn parent_id(&self, id: NodeId) -> Option<NodeId> {
        self.parent_id_by_id.get(&id).copied()
    }

    pub fn child_ids(&self, id: NodeId) -> &[NodeId] {
        self.child_ids_by_id.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn ids_by_kind(&self, kind: NodeKind) -> &[NodeId] {
        self.ids_by_node_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn leaf_node_ids(&self) -> &[NodeId] {
        &self.leaf_node_ids
    }

    /// Every id currently occupying either map — used by the invariant
    /// checks in the test suite.
    pub fn all_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ast_node_by_id.keys().copied().chain(self.context_node_by_id.keys().copied())
    }

    // --- Mutation: opening/closing contexts ----------------------------------

    /// Opens a new context as a child of `parent_id`.
    /// The caller supplies the fresh `id`; the id counter itself lives on
    /// [`crate::state::ParseState`], not here, so that a checkpoint restore
    /// can roll the counter back independently of any particular collection
    /// snapshot.
    pub fn start_context(
        &mut self,
        id: NodeId,
        kind: NodeKind,
        parent_id: Option<NodeId>,
        start_token_index: u32,
    ) {
        if let Some(parent) = parent_id {
            if let Some(p) = self.context_node_by_id.get_mut(&parent) {
                p.attribute_counter += 1;
            }
            self.child_ids_by_id.entry(parent).or_default().push(id);
            self.parent_id_by_id.insert(id, parent);
        }

        let context = ContextNode::new(id, kind, parent_id, start_token_index);
        self.ids_by_node_kind.entry(kind).or_default().push(id);
        self.context_node_by_id.insert(id, context);
    }

    /// Closes a context into a completed [`AstNode`],
    /// moving its id from `context_node_by_id` to `ast_node_by_id`.
    pub fn end_context(
        &mut self,
        id: NodeId,
        end_token_index: u32,
        leaf_text: Option<Box<str>>,
    ) -> &AstNode {
        let context = self
            .context_node_by_id
            .remove(&id)
            .expect("end_context called on an id with no open context");

        let attribute_index = self
            .parent_id_by_id
            .get(&id)
            .and_then(|parent| self.context_node_by_id.get(parent))
            .map(|_| self.sibling_index(id));

        if leaf_text.is_some() {
            self.leaf_node_ids.push(id);
        }

        let node = AstNode {
            id,
            kind: context.kind,
            token_range: TokenRange::new(context.start_token_index, end_token_index),
            attribute_index,
            leaf_text,
        };
        self.ast_node_by_id.insert(id, node);
        self.ast_node_by_id.get(&id).expect("just inserted")
    }

    fn sibling_index(&self, id: NodeId) -> u32 {
        let Some(parent) = self.parent_id_by_id.get(&id) else {
            return 0;
        };
        self.child_ids_by_id
            .get(parent)
            .and_then(|children| children.iter().position(|c| *c == id))
            .unwrap_or(0) as u32
    }

    /// Abandons an open context without producing a node — used by the
    /// bracket/parenthesis disambiguators when a bounded
    /// lookahead attempt must be unwound without a full checkpoint restore.
    pub fn delete_context(&mut self, id: NodeId) {
        self.context_node_by_id.remove(&id);
        if let Some(parent) = self.parent_id_by_id.remove(&id) {
            if let Some(siblings) = self.child_ids_by_id.get_mut(&parent) {
                siblings.retain(|c| *c != id);
            }
            if let Some(p) = self.context_node_by_id.get_mut(&parent) {
                p.attribute_counter = p.attribute_counter.saturating_sub(1);
            }
        }
        self.child_ids_by_id.remove(&id);
        for ids in self.ids_by_node_kind.values_mut() {
            ids.retain(|existing| *existing != id);
        }
    }

    /// Attaches an already-completed node (`child_id`) as the new child of
    /// `parent_id`, at the end of its child list — used when splicing the
    /// freshly created `RecursivePrimaryExpression` wrapper in above the old
    /// primary-expression head.
    pub fn reparent(&mut self, child_id: NodeId, parent_id: NodeId) {
        if let Some(old_parent) = self.parent_id_by_id.insert(child_id, parent_id) {
            if let Some(siblings) = self.child_ids_by_id.get_mut(&old_parent) {
                siblings.retain(|c| *c != child_id);
            }
        }
        let siblings = self.child_ids_by_id.entry(parent_id).or_default();
        siblings.push(child_id);
        let new_index = (siblings.len() - 1) as u32;
        // Keeps the moved node's attribute_index truthful to its position
        // among its *new* parent's children — load-bearing for both the left-associative
        // BinOp fold (`grammar::binop::read_left_assoc_binop`) and recursive
        // primary expression reparenting, which both splice an
        // already-completed node under a brand-new parent.
        if let Some(node) = self.ast_node_by_id.get_mut(&child_id) {
            node.attribute_index = Some(new_index);
        }
    }

    /// Renumbers the subtree rooted at `root` into a fresh, contiguous,
    /// structurally-monotonic id run starting at `base`. Returns the old→new mapping; the caller applies it
    /// with [`Self::update_node_ids`] and advances its id counter past the
    /// highest id returned.
    ///
    /// Breadth-first so a parent is always assigned before any of its
    /// children are enqueued, which keeps "parent id < child id" true
    /// without needing a second pass.
    pub fn recalculate_ids(&self, root: NodeId, base: u32) -> HashMap<NodeId, NodeId> {
        let mut mapping = HashMap::new();
        let mut next = base;
        let mut queue = std::collections::VecDeque::new();
        queue.push_back(root);
        while let Some(id) = queue.pop_front() {
            mapping.insert(id, NodeId::new(next));
            next += 1;
            for child in self.child_ids(id) {
                queue.push_back(*child);
            }
        }
        mapping
    }

    /// Applies a renumbering computed by [`Self::recalculate_ids`] across
    /// every map that can mention one of the affected ids.
    pub fn update_node_ids(&mut self, mapping: &HashMap<NodeId, NodeId>) {
        let remap = |id: &NodeId| *mapping.get(id).unwrap_or(id);

        self.ast_node_by_id = std::mem::take(&mut self.ast_node_by_id)
            .into_iter()
            .map(|(id, mut node)| {
                node.id = remap(&id);
                (node.id, node)
            })
            .collect();

        self.context_node_by_id = std::mem::take(&mut self.context_node_by_id)
            .into_iter()
            .map(|(id, mut ctx)| {
                ctx.id = remap(&id);
                ctx.parent_id = ctx.parent_id.map(|p| remap(&p));
                (ctx.id, ctx)
            })
            .collect();

        self.parent_id_by_id = std::mem::take(&mut self.parent_id_by_id)
            .into_iter()
            .map(|(id, parent)| (remap(&id), remap(&parent)))
            .collect();

        self.child_ids_by_id = std::mem::take(&mut self.child_ids_by_id)
            .into_iter()
            .map(|(id, children)| (remap(&id), children.iter().map(remap).collect()))
            .collect();

        for ids in self.ids_by_node_kind.values_mut() {
            for id in ids.iter_mut() {
                *id = remap(id);
            }
        }

        for id in self.leaf_node_ids.iter_mut() {
            *id = remap(id);
        }
    }
}

/// A `{:#?}`-style tree dump, one line per completed node, children indented
/// under their parent in source order — useful for comparing a parsed tree
/// against a golden-file fixture in tests. Any still-open context (a
/// malformed dump, or one taken mid-parse) is listed after the completed
/// tree rather than silently dropped.
impl fmt::Debug for NodeIdMapCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roots = self
            .ast_node_by_id
            .keys()
            .copied()
            .filter(|id| !self.parent_id_by_id.contains_key(id))
            .collect::<std::collections::BTreeSet<_>>();

        for root in roots {
            self.fmt_node(f, root, 0)?;
        }

        let mut open: Vec<_> = self.context_node_by_id.keys().copied().collect();
        if !open.is_empty() {
            open.sort();
            writeln!(f, "- (still open)")?;
            for id in open.drain(..) {
                let context = &self.context_node_by_id[&id];
                writeln!(f, "    - {:?}{} (incomplete)", context.kind, id)?;
            }
        }

        Ok(())
    }
}

impl NodeIdMapCollection {
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let Some(node) = self.ast_node_by_id.get(&id) else {
            return Ok(());
        };

        writeln!(
            f,
            "{}- {:?}{}@{}..{}{}",
            "    ".repeat(depth),
            node.kind,
            id,
            node.token_range.start,
            node.token_range.end,
            node.leaf_text
                .as_ref()
                .map(|text| format!(" {text:?}"))
                .unwrap_or_default(),
        )?;

        for child in self.child_ids(id) {
            self.fmt_node(f, *child, depth + 1)?;
        }

        Ok(())
    }
}
