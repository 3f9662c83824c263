//! The syntax tree: an arena of kinded nodes with typed navigation.
//!
//! Trees are assembled in two phases. The parser hands the builder a graph
//! of first-child/next-sibling linked entries mirroring parse order; one
//! conversion pass turns that graph into an index-addressed arena, prunes
//! placeholder entries and classifies each node's expression shape. After
//! construction the tree is immutable, with the single exception of the
//! later-bound symbol link an external resolution pass may set per node.

mod arena;
mod builder;
mod error;
mod navigate;

pub use arena::{Children, HiddenToken, Node, NodeArena, NodeId, NodeShape, Span, SymbolLink};
pub use builder::{BuilderEntry, EntryFlags, TreeBuilder};
pub use error::TreeError;
pub use navigate::QueryScope;

/// A finished syntax tree for one compiled source unit.
#[derive(Debug)]
pub struct SyntaxTree {
    pub(crate) arena: NodeArena,
    pub(crate) root: NodeId,
}

impl SyntaxTree {
    /// The root node, always a `ProgramRoot`.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrow a node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.node(id)
    }

    /// Number of nodes in the whole tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree holds no nodes besides the root.
    pub fn is_empty(&self) -> bool {
        self.arena.len() <= 1
    }
}
