//! Conversion of the parser's builder graph into a finished tree.

use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::ast::NodeKind;

use super::arena::{Children, HiddenToken, Node, NodeArena, NodeId, NodeShape, Span};
use super::error::TreeError;
use super::SyntaxTree;

/// Contextual flags the parser sets per builder entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFlags(u8);

impl EntryFlags {
    /// Node heads a statement.
    pub const STATEMENT_HEAD: EntryFlags = EntryFlags(1 << 0);
    /// Node opens a block.
    pub const BLOCK: EntryFlags = EntryFlags(1 << 1);
    /// Operator token used infix with two operands.
    pub const BINARY_OP: EntryFlags = EntryFlags(1 << 2);
    /// Operator token used prefix with one operand.
    pub const UNARY_OP: EntryFlags = EntryFlags(1 << 3);
    /// Keyword used as a builtin function call.
    pub const FUNC_CALL: EntryFlags = EntryFlags(1 << 4);
    /// NEW keyword used as a constructor invocation.
    pub const CONSTRUCTOR: EntryFlags = EntryFlags(1 << 5);

    /// Combine two flag sets.
    pub fn union(self, other: EntryFlags) -> EntryFlags {
        EntryFlags(self.0 | other.0)
    }

    /// Whether every bit of `other` is set.
    pub fn contains(self, other: EntryFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for EntryFlags {
    type Output = EntryFlags;
    fn bitor(self, rhs: EntryFlags) -> EntryFlags {
        self.union(rhs)
    }
}

/// One node of the intermediate builder graph.
///
/// `down` points at the first child, `right` at the next sibling, mirroring
/// the order tokens arrived from the parser.
#[derive(Debug)]
pub struct BuilderEntry {
    /// Token or synthetic kind
    pub kind: NodeKind,
    /// Exact token text; empty for synthetic entries
    pub text: String,
    /// Source span
    pub span: Span,
    /// Contextual flags from the parser
    pub flags: EntryFlags,
    /// Hidden tokens preceding the node
    pub hidden_before: Vec<HiddenToken>,
    /// Hidden tokens trailing the node
    pub hidden_after: Vec<HiddenToken>,
    pub(crate) down: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl BuilderEntry {
    /// A positioned token entry.
    pub fn token(kind: NodeKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            flags: EntryFlags::default(),
            hidden_before: Vec::new(),
            hidden_after: Vec::new(),
            down: None,
            right: None,
        }
    }

    /// A synthetic entry with no source text of its own.
    pub fn synthetic(kind: NodeKind) -> Self {
        Self::token(kind, "", Span::default())
    }

    /// Attach contextual flags.
    pub fn with_flags(mut self, flags: EntryFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Attach a hidden token before the node.
    pub fn with_hidden_before(mut self, kind: NodeKind, text: impl Into<String>) -> Self {
        self.hidden_before.push(HiddenToken {
            kind,
            text: text.into(),
        });
        self
    }

    /// Attach a hidden token after the node.
    pub fn with_hidden_after(mut self, kind: NodeKind, text: impl Into<String>) -> Self {
        self.hidden_after.push(HiddenToken {
            kind,
            text: text.into(),
        });
        self
    }
}

/// Collects builder entries and converts them into a [`SyntaxTree`].
#[derive(Debug, Default)]
pub struct TreeBuilder {
    entries: Vec<BuilderEntry>,
}

/// Literal token kinds that can never carry children.
fn is_leaf_kind(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::QuotedString
            | NodeKind::NumberLiteral
            | NodeKind::Filename
            | NodeKind::UnknownLiteral
            | NodeKind::EndOfFile
    ) || kind.is_nonprintable()
}

fn classify(kind: NodeKind, flags: EntryFlags) -> NodeShape {
    if flags.contains(EntryFlags::BINARY_OP) {
        return NodeShape::BinaryOp;
    }
    if flags.contains(EntryFlags::UNARY_OP) {
        return NodeShape::UnaryOp;
    }
    match kind {
        NodeKind::ArraySubscript => NodeShape::Subscript,
        NodeKind::AttributeRef => NodeShape::AttributeAccess,
        NodeKind::MethodRef | NodeKind::LocalMethodRef => NodeShape::MethodCall,
        NodeKind::NamedMember => NodeShape::NamedMember,
        NodeKind::ParenExpr => NodeShape::Paren,
        NodeKind::FieldRef => NodeShape::FieldRef,
        NodeKind::RecordName => NodeShape::RecordRef,
        NodeKind::AggregatePhrase => NodeShape::Aggregate,
        NodeKind::UserFunc => NodeShape::UserFuncCall,
        NodeKind::WidgetRef => NodeShape::WidgetRef,
        NodeKind::TypeName => NodeShape::TypeNameRef,
        NodeKind::QuotedString
        | NodeKind::NumberLiteral
        | NodeKind::True
        | NodeKind::False
        | NodeKind::Yes
        | NodeKind::No
        | NodeKind::Null
        | NodeKind::UnknownLiteral => NodeShape::Constant,
        NodeKind::New | NodeKind::DynamicNew if flags.contains(EntryFlags::CONSTRUCTOR) => {
            NodeShape::ConstructorCall
        }
        kind if kind.is_system_handle() => NodeShape::SystemHandleRef,
        kind if flags.contains(EntryFlags::FUNC_CALL)
            && (kind.is_regular_function()
                || kind.is_no_arg_function()
                || kind.is_record_function()) =>
        {
            NodeShape::BuiltinFunc
        }
        _ => NodeShape::Plain,
    }
}

impl TreeBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, returning its graph index.
    pub fn push(&mut self, entry: BuilderEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Link `child` as the first child of `parent`.
    pub fn set_first_child(&mut self, parent: usize, child: usize) {
        self.entries[parent].down = Some(child);
    }

    /// Link `sibling` as the next sibling of `entry`.
    pub fn set_next_sibling(&mut self, entry: usize, sibling: usize) {
        self.entries[entry].right = Some(sibling);
    }

    /// Link a full child list under `parent` in order.
    pub fn attach_children(&mut self, parent: usize, children: &[usize]) {
        if let Some((&first, rest)) = children.split_first() {
            self.set_first_child(parent, first);
            let mut prev = first;
            for &next in rest {
                self.set_next_sibling(prev, next);
                prev = next;
            }
        }
    }

    /// Convert the graph into a finished tree rooted at `root`.
    ///
    /// Placeholder entries are pruned; a placeholder with children fails the
    /// build. The conversion also rejects dangling and cyclic links, so a
    /// malformed graph can never produce a half-built tree.
    pub fn build(self, root: usize) -> Result<SyntaxTree, TreeError> {
        if root >= self.entries.len() {
            return Err(TreeError::MissingRoot);
        }
        let mut arena = NodeArena::new();
        let mut visited = FxHashSet::default();
        let root_id = self
            .convert(root, None, 0, &mut arena, &mut visited)?
            .ok_or(TreeError::MissingRoot)?;
        Ok(SyntaxTree {
            arena,
            root: root_id,
        })
    }

    fn link_target(&self, entry: usize, target: Option<usize>) -> Result<(), TreeError> {
        if let Some(t) = target {
            if t >= self.entries.len() {
                return Err(TreeError::DanglingLink { entry, target: t });
            }
        }
        Ok(())
    }

    fn convert(
        &self,
        idx: usize,
        parent: Option<NodeId>,
        sibling_index: u32,
        arena: &mut NodeArena,
        visited: &mut FxHashSet<usize>,
    ) -> Result<Option<NodeId>, TreeError> {
        if !visited.insert(idx) {
            return Err(TreeError::CyclicLink { entry: idx });
        }
        let entry = &self.entries[idx];
        self.link_target(idx, entry.down)?;
        self.link_target(idx, entry.right)?;

        if entry.kind.is_placeholder() {
            if entry.down.is_some() {
                return Err(TreeError::PlaceholderWithChildren {
                    kind: entry.kind,
                    entry: idx,
                });
            }
            return Ok(None);
        }

        let children = if is_leaf_kind(entry.kind) && entry.down.is_none() {
            Children::Leaf
        } else {
            Children::Nodes(Vec::new())
        };

        let id = arena.alloc(Node {
            kind: entry.kind,
            shape: classify(entry.kind, entry.flags),
            text: entry.text.clone(),
            span: entry.span,
            parent,
            sibling_index,
            children,
            hidden_before: SmallVec::from_vec(entry.hidden_before.clone()),
            hidden_after: SmallVec::from_vec(entry.hidden_after.clone()),
            statement_head: entry.flags.contains(EntryFlags::STATEMENT_HEAD),
            block: entry.flags.contains(EntryFlags::BLOCK),
            symbol: OnceCell::new(),
        });

        let mut child_ids = Vec::new();
        let mut next = entry.down;
        while let Some(child_idx) = next {
            self.link_target(idx, Some(child_idx))?;
            if let Some(child_id) =
                self.convert(child_idx, Some(id), child_ids.len() as u32, arena, visited)?
            {
                child_ids.push(child_id);
            }
            next = self.entries[child_idx].right;
        }

        if !child_ids.is_empty() {
            match &mut arena.node_mut(id).children {
                Children::Nodes(slot) => *slot = child_ids,
                // is_leaf_kind nodes only become Leaf when no down link exists
                Children::Leaf => unreachable!("leaf chosen only for childless entries"),
            }
        }

        Ok(Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;
    use pretty_assertions::assert_eq;

    fn span(line: u32, col: u32) -> Span {
        Span {
            file: 0,
            start_line: line,
            start_col: col,
            end_line: line,
            end_col: col + 1,
        }
    }

    #[test]
    fn two_phase_build_preserves_source_order() {
        let mut b = TreeBuilder::new();
        let root = b.push(BuilderEntry::synthetic(NodeKind::ProgramRoot));
        let stmt = b.push(
            BuilderEntry::synthetic(NodeKind::ExprStatement)
                .with_flags(EntryFlags::STATEMENT_HEAD),
        );
        let lhs = b.push(BuilderEntry::token(NodeKind::NumberLiteral, "1", span(1, 1)));
        let op = b.push(
            BuilderEntry::token(NodeKind::Plus, "+", span(1, 3)).with_flags(EntryFlags::BINARY_OP),
        );
        let rhs = b.push(BuilderEntry::token(NodeKind::NumberLiteral, "2", span(1, 5)));
        b.attach_children(op, &[lhs, rhs]);
        b.attach_children(stmt, &[op]);
        b.attach_children(root, &[stmt]);

        let tree = b.build(root).unwrap();
        let root_node = tree.node(tree.root());
        assert_eq!(root_node.kind(), NodeKind::ProgramRoot);
        let stmt_id = root_node.children().ids()[0];
        let op_id = tree.node(stmt_id).children().ids()[0];
        let op_node = tree.node(op_id);
        assert_eq!(op_node.shape(), NodeShape::BinaryOp);
        let kids = op_node.children().ids();
        assert_eq!(tree.node(kids[0]).text(), "1");
        assert_eq!(tree.node(kids[1]).text(), "2");
        assert_eq!(tree.node(kids[0]).sibling_index(), 0);
        assert_eq!(tree.node(kids[1]).sibling_index(), 1);
        assert_eq!(tree.node(kids[1]).parent(), Some(op_id));
    }

    #[test]
    fn placeholders_are_pruned() {
        let mut b = TreeBuilder::new();
        let root = b.push(BuilderEntry::synthetic(NodeKind::ProgramRoot));
        let gone = b.push(BuilderEntry::synthetic(NodeKind::NullNode));
        let kept = b.push(BuilderEntry::token(NodeKind::NumberLiteral, "7", span(1, 1)));
        b.attach_children(root, &[gone, kept]);

        let tree = b.build(root).unwrap();
        let kids = tree.node(tree.root()).children().ids();
        assert_eq!(kids.len(), 1);
        assert_eq!(tree.node(kids[0]).text(), "7");
        // Pruning renumbers siblings.
        assert_eq!(tree.node(kids[0]).sibling_index(), 0);
    }

    #[test]
    fn placeholder_with_children_is_fatal() {
        let mut b = TreeBuilder::new();
        let root = b.push(BuilderEntry::synthetic(NodeKind::ProgramRoot));
        let bad = b.push(BuilderEntry::synthetic(NodeKind::NullNode));
        let child = b.push(BuilderEntry::token(NodeKind::NumberLiteral, "1", span(1, 1)));
        b.attach_children(root, &[bad]);
        b.attach_children(bad, &[child]);

        assert_eq!(
            b.build(root).unwrap_err(),
            TreeError::PlaceholderWithChildren {
                kind: NodeKind::NullNode,
                entry: bad,
            }
        );
    }

    #[test]
    fn cyclic_links_are_rejected() {
        let mut b = TreeBuilder::new();
        let root = b.push(BuilderEntry::synthetic(NodeKind::ProgramRoot));
        let a = b.push(BuilderEntry::synthetic(NodeKind::CodeBlock));
        b.attach_children(root, &[a]);
        b.set_first_child(a, a);

        assert!(matches!(
            b.build(root).unwrap_err(),
            TreeError::CyclicLink { .. }
        ));
    }

    #[test]
    fn leaf_vs_empty_children() {
        let mut b = TreeBuilder::new();
        let root = b.push(BuilderEntry::synthetic(NodeKind::ProgramRoot));
        let block = b.push(BuilderEntry::synthetic(NodeKind::CodeBlock).with_flags(EntryFlags::BLOCK));
        let lit = b.push(BuilderEntry::token(NodeKind::NumberLiteral, "3", span(1, 1)));
        b.attach_children(root, &[block, lit]);

        let tree = b.build(root).unwrap();
        let kids = tree.node(tree.root()).children().ids();
        // The block may later have had children; the literal never can.
        assert_eq!(
            tree.node(kids[0]).children(),
            &Children::Nodes(Vec::new())
        );
        assert_eq!(tree.node(kids[1]).children(), &Children::Leaf);
        assert!(tree.node(kids[0]).is_block());
    }

    #[test]
    fn builtin_call_flag_drives_shape() {
        let mut b = TreeBuilder::new();
        let root = b.push(BuilderEntry::synthetic(NodeKind::ProgramRoot));
        let call = b.push(
            BuilderEntry::token(NodeKind::Substring, "SUBSTRING", span(1, 1))
                .with_flags(EntryFlags::FUNC_CALL),
        );
        let plain = b.push(BuilderEntry::token(NodeKind::Substring, "SUBSTRING", span(2, 1)));
        b.attach_children(root, &[call, plain]);

        let tree = b.build(root).unwrap();
        let kids = tree.node(tree.root()).children().ids();
        assert_eq!(tree.node(kids[0]).shape(), NodeShape::BuiltinFunc);
        assert_eq!(tree.node(kids[1]).shape(), NodeShape::Plain);
    }
}
