//! Navigation and structural queries over a finished tree.
//!
//! Walk order is part of the tree's contract: binary-operator nodes are
//! visited infix (left operand, operator, right operand), every other node
//! pre-order. Text reconstruction and kind queries both follow it, so the
//! emitted order always matches source order.

use crate::ast::NodeKind;

use super::arena::{Node, NodeId, NodeShape};
use super::SyntaxTree;

/// Restriction applied to a depth-first query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryScope {
    /// The whole subtree
    Subtree,
    /// Only nodes inside the nearest enclosing statement
    CurrentStatement,
    /// Only nodes positioned in the unit's primary file
    MainFile,
}

impl SyntaxTree {
    /// First child of a node.
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children().ids().first().copied()
    }

    /// Last child of a node.
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children().ids().last().copied()
    }

    /// Next sibling under the same parent.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        let parent = self.node(node.parent()?);
        parent
            .children()
            .ids()
            .get(node.sibling_index() as usize + 1)
            .copied()
    }

    /// Previous sibling under the same parent.
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        let idx = node.sibling_index() as usize;
        if idx == 0 {
            return None;
        }
        let parent = self.node(node.parent()?);
        parent.children().ids().get(idx - 1).copied()
    }

    /// The nearest enclosing statement head, including `id` itself.
    pub fn enclosing_statement(&self, id: NodeId) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(cur) = current {
            if self.node(cur).is_statement_head() {
                return Some(cur);
            }
            current = self.node(cur).parent();
        }
        None
    }

    /// Visit every node of the subtree in walk order.
    pub fn walk(&self, id: NodeId, visit: &mut impl FnMut(NodeId)) {
        let node = self.node(id);
        let children = node.children().ids();
        if node.shape() == NodeShape::BinaryOp && children.len() == 2 {
            self.walk(children[0], visit);
            visit(id);
            self.walk(children[1], visit);
        } else {
            visit(id);
            for &child in children {
                self.walk(child, visit);
            }
        }
    }

    /// All nodes of the given kinds, in walk order from the root.
    pub fn query_kinds(&self, kinds: &[NodeKind]) -> Vec<NodeId> {
        self.query_from(self.root(), QueryScope::Subtree, |node| {
            kinds.contains(&node.kind())
        })
    }

    /// All nodes matching a predicate, in walk order, restricted to `scope`.
    ///
    /// `CurrentStatement` re-roots the query at the statement enclosing
    /// `start`; `MainFile` drops nodes whose span lies in an include file.
    pub fn query_from(
        &self,
        start: NodeId,
        scope: QueryScope,
        matches: impl Fn(&Node) -> bool,
    ) -> Vec<NodeId> {
        let origin = match scope {
            QueryScope::CurrentStatement => self.enclosing_statement(start).unwrap_or(start),
            _ => start,
        };
        let mut hits = Vec::new();
        self.walk(origin, &mut |id| {
            let node = self.node(id);
            if scope == QueryScope::MainFile && node.span().file != 0 {
                return;
            }
            if matches(node) {
                hits.push(id);
            }
        });
        hits
    }

    /// Number of nodes in the subtree rooted at `id`.
    pub fn subtree_size(&self, id: NodeId) -> usize {
        let mut count = 0usize;
        self.walk(id, &mut |_| count += 1);
        count
    }

    /// Reconstruct the source text of the subtree, hidden tokens included.
    ///
    /// A pure function of the tree: repeated calls yield identical text.
    pub fn source_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.walk(id, &mut |node_id| {
            let node = self.node(node_id);
            for hidden in node.hidden_before() {
                out.push_str(&hidden.text);
            }
            out.push_str(node.text());
            for hidden in node.hidden_after() {
                out.push_str(&hidden.text);
            }
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::builder::{BuilderEntry, EntryFlags, TreeBuilder};
    use crate::tree::Span;
    use pretty_assertions::assert_eq;

    fn at(file: u32, line: u32, col: u32) -> Span {
        Span {
            file,
            start_line: line,
            start_col: col,
            end_line: line,
            end_col: col,
        }
    }

    /// `x = 1 + 2.` as the parser would shape it.
    fn sample_tree() -> SyntaxTree {
        let mut b = TreeBuilder::new();
        let root = b.push(BuilderEntry::synthetic(NodeKind::ProgramRoot));
        let stmt = b.push(
            BuilderEntry::synthetic(NodeKind::ExprStatement)
                .with_flags(EntryFlags::STATEMENT_HEAD),
        );
        let assign = b.push(
            BuilderEntry::token(NodeKind::EqualSign, "=", at(0, 1, 3))
                .with_flags(EntryFlags::BINARY_OP),
        );
        let x = b.push(
            BuilderEntry::token(NodeKind::Identifier, "x", at(0, 1, 1))
                .with_hidden_after(NodeKind::WhiteSpace, " "),
        );
        let plus = b.push(
            BuilderEntry::token(NodeKind::Plus, "+", at(0, 1, 7))
                .with_flags(EntryFlags::BINARY_OP)
                .with_hidden_before(NodeKind::WhiteSpace, " "),
        );
        let one = b.push(
            BuilderEntry::token(NodeKind::NumberLiteral, "1", at(0, 1, 5))
                .with_hidden_before(NodeKind::WhiteSpace, " "),
        );
        let two = b.push(
            BuilderEntry::token(NodeKind::NumberLiteral, "2", at(0, 1, 9))
                .with_hidden_before(NodeKind::WhiteSpace, " "),
        );
        let dot = b.push(BuilderEntry::token(NodeKind::Period, ".", at(0, 1, 10)));
        b.attach_children(plus, &[one, two]);
        b.attach_children(assign, &[x, plus]);
        b.attach_children(stmt, &[assign, dot]);
        b.attach_children(root, &[stmt]);
        b.build(root).unwrap()
    }

    #[test]
    fn infix_walk_reconstructs_source() {
        let tree = sample_tree();
        let text = tree.source_text(tree.root());
        assert_eq!(text, "x = 1 + 2.");
        // Reconstruction is a pure function of the tree.
        assert_eq!(tree.source_text(tree.root()), text);
    }

    #[test]
    fn sibling_navigation() {
        let tree = sample_tree();
        let stmt = tree.first_child(tree.root()).unwrap();
        let assign = tree.first_child(stmt).unwrap();
        let dot = tree.next_sibling(assign).unwrap();
        assert_eq!(tree.node(dot).kind(), NodeKind::Period);
        assert_eq!(tree.prev_sibling(dot), Some(assign));
        assert_eq!(tree.prev_sibling(assign), None);
        assert_eq!(tree.last_child(stmt), Some(dot));
    }

    #[test]
    fn enclosing_statement_walks_up() {
        let tree = sample_tree();
        let hits = tree.query_kinds(&[NodeKind::NumberLiteral]);
        assert_eq!(hits.len(), 2);
        let stmt = tree.enclosing_statement(hits[0]).unwrap();
        assert!(tree.node(stmt).is_statement_head());
        assert_eq!(tree.node(stmt).kind(), NodeKind::ExprStatement);
    }

    #[test]
    fn query_orders_match_walk_order() {
        let tree = sample_tree();
        let texts: Vec<String> = tree
            .query_from(tree.root(), QueryScope::Subtree, |n| !n.text().is_empty())
            .into_iter()
            .map(|id| tree.node(id).text().to_string())
            .collect();
        assert_eq!(texts, vec!["x", "=", "1", "+", "2", "."]);
    }

    #[test]
    fn main_file_scope_drops_include_nodes() {
        let mut b = TreeBuilder::new();
        let root = b.push(BuilderEntry::synthetic(NodeKind::ProgramRoot));
        let local = b.push(BuilderEntry::token(NodeKind::NumberLiteral, "1", at(0, 1, 1)));
        let included = b.push(BuilderEntry::token(NodeKind::NumberLiteral, "2", at(1, 1, 1)));
        b.attach_children(root, &[local, included]);
        let tree = b.build(root).unwrap();

        let all = tree.query_kinds(&[NodeKind::NumberLiteral]);
        assert_eq!(all.len(), 2);
        let main_only =
            tree.query_from(tree.root(), QueryScope::MainFile, |n| {
                n.kind() == NodeKind::NumberLiteral
            });
        assert_eq!(main_only.len(), 1);
        assert_eq!(tree.node(main_only[0]).text(), "1");
    }

    #[test]
    fn subtree_size_counts_every_node() {
        let tree = sample_tree();
        assert_eq!(tree.subtree_size(tree.root()), 8);
        let stmt = tree.first_child(tree.root()).unwrap();
        assert_eq!(tree.subtree_size(stmt), 7);
    }
}
