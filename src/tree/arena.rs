//! Index-addressed node storage.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::ast::NodeKind;
use crate::model::DataType;

/// Arena index of a node. Stable for the life of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Source position of a node: file index plus start/end line and column.
///
/// File index 0 is the primary file of the unit; higher indices are include
/// files, in first-reference order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// File index within the unit's file table
    pub file: u32,
    /// 1-based first line
    pub start_line: u32,
    /// 1-based first column
    pub start_col: u32,
    /// 1-based last line
    pub end_line: u32,
    /// 1-based last column
    pub end_col: u32,
}

/// A hidden-channel token (comment or whitespace) attached to a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenToken {
    /// Comment, whitespace or newline kind
    pub kind: NodeKind,
    /// Exact source text
    pub text: String,
}

/// Child storage distinguishing "cannot have children" from "has none yet".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children {
    /// Terminal node; attaching children is a structural impossibility
    Leaf,
    /// Interior node; the list may be empty
    Nodes(Vec<NodeId>),
}

impl Children {
    /// The child list, empty for leaves.
    pub fn ids(&self) -> &[NodeId] {
        match self {
            Children::Leaf => &[],
            Children::Nodes(ids) => ids,
        }
    }
}

/// Expression shape assigned by the builder from kind plus build-time flags.
///
/// The type engine dispatches on this; nodes that are not expressions stay
/// `Plain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeShape {
    /// Not an expression node
    Plain,
    /// Infix binary operator; walked left, self, right
    BinaryOp,
    /// Prefix unary operator
    UnaryOp,
    /// Array subscript over an extent field or variable
    Subscript,
    /// `receiver:attribute` access
    AttributeAccess,
    /// `receiver:method(...)` call
    MethodCall,
    /// Qualified member of a dataset or buffer
    NamedMember,
    /// Builtin function call
    BuiltinFunc,
    /// `NEW TypeName(...)` constructor call
    ConstructorCall,
    /// Literal constant
    Constant,
    /// Database or temp-table field reference
    FieldRef,
    /// Record (buffer) reference
    RecordRef,
    /// System handle reference (SESSION, COMPILER, ...)
    SystemHandleRef,
    /// Aggregate phrase (COUNT/SUM/AVERAGE ...)
    Aggregate,
    /// Parenthesized sub-expression
    Paren,
    /// User-defined function call
    UserFuncCall,
    /// Widget reference in a frame phrase
    WidgetRef,
    /// Dotted type name
    TypeNameRef,
}

/// Later-bound symbol information attached by an external resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolLink {
    /// Resolved symbol name
    pub name: String,
    /// Declared type of the symbol
    pub data_type: DataType,
}

/// One node of the syntax tree.
#[derive(Debug)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) shape: NodeShape,
    pub(crate) text: String,
    pub(crate) span: Span,
    pub(crate) parent: Option<NodeId>,
    pub(crate) sibling_index: u32,
    pub(crate) children: Children,
    pub(crate) hidden_before: SmallVec<[HiddenToken; 2]>,
    pub(crate) hidden_after: SmallVec<[HiddenToken; 2]>,
    pub(crate) statement_head: bool,
    pub(crate) block: bool,
    pub(crate) symbol: OnceCell<SymbolLink>,
}

impl Node {
    /// The node's kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The expression shape assigned at build time.
    pub fn shape(&self) -> NodeShape {
        self.shape
    }

    /// Exact source text of the token; empty for synthetic nodes.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Source span.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Position among the parent's children.
    pub fn sibling_index(&self) -> u32 {
        self.sibling_index
    }

    /// Child storage; distinguishes leaves from childless interior nodes.
    pub fn children(&self) -> &Children {
        &self.children
    }

    /// Hidden tokens preceding this node.
    pub fn hidden_before(&self) -> &[HiddenToken] {
        &self.hidden_before
    }

    /// Hidden tokens trailing this node.
    pub fn hidden_after(&self) -> &[HiddenToken] {
        &self.hidden_after
    }

    /// Whether this node heads a statement.
    pub fn is_statement_head(&self) -> bool {
        self.statement_head
    }

    /// Whether this node opens a block.
    pub fn is_block(&self) -> bool {
        self.block
    }

    /// The later-bound symbol link, if the resolution pass has run.
    pub fn symbol(&self) -> Option<&SymbolLink> {
        self.symbol.get()
    }

    /// Bind the symbol link. The first binding wins; a second binding for
    /// the same node is ignored and reported as `false`.
    pub fn bind_symbol(&self, link: SymbolLink) -> bool {
        self.symbol.set(link).is_ok()
    }
}

/// Owning storage for every node of one tree.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
