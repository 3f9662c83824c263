//! Static type inference for expression nodes.
//!
//! The engine computes a [`DataType`] for any expression-shaped node,
//! memoizing per node index. Results are a pure function of the tree and
//! the provider's (immutable) metadata, so the cache never invalidates.
//! Unresolvable references produce `DataType::NotComputed` — never an
//! error — so downstream passes degrade gracefully.

mod arithmetic;
mod functions;
mod handles;
mod resolve;

pub use resolve::LocalScope;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::ast::NodeKind;
use crate::model::DataType;
use crate::provider::TypeInfoProvider;
use crate::tree::{NodeId, NodeShape, SyntaxTree};

/// Where the analyzed unit sits in the class hierarchy.
#[derive(Debug, Default, Clone)]
pub struct UnitContext {
    enclosing_class: Option<String>,
    parent_class: Option<String>,
    local_scope: Option<LocalScope>,
}

impl UnitContext {
    /// Context for a plain procedure unit outside any class.
    pub fn procedure() -> Self {
        Self::default()
    }

    /// Context for a class unit whose own r-code is already available.
    pub fn in_class(class_name: impl Into<String>) -> Self {
        Self {
            enclosing_class: Some(class_name.into()),
            ..Default::default()
        }
    }

    /// Context for a class unit still being compiled, backed by an
    /// in-progress scope.
    pub fn with_scope(scope: LocalScope) -> Self {
        Self {
            enclosing_class: Some(scope.class_name().to_string()),
            parent_class: Some(scope.parent_class_name().to_string())
                .filter(|p| !p.is_empty()),
            local_scope: Some(scope),
        }
    }
}

/// Memoizing expression type engine for one syntax tree.
///
/// Create one engine per tree; the cache is keyed by node index. A provider
/// shared between engines supplies its own thread safety.
pub struct ExpressionTypeEngine<P> {
    provider: P,
    context: UnitContext,
    cache: RwLock<FxHashMap<NodeId, DataType>>,
}

impl<P: TypeInfoProvider> ExpressionTypeEngine<P> {
    /// Engine with an empty unit context.
    pub fn new(provider: P) -> Self {
        Self::with_context(provider, UnitContext::default())
    }

    /// Engine for a unit with hierarchy context.
    pub fn with_context(provider: P, context: UnitContext) -> Self {
        Self {
            provider,
            context,
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    /// The memoized static type of a node.
    pub fn data_type(&self, tree: &SyntaxTree, id: NodeId) -> DataType {
        if let Some(cached) = self.cache.read().get(&id) {
            return cached.clone();
        }
        let computed = self.compute(tree, id);
        self.cache.write().insert(id, computed.clone());
        computed
    }

    fn compute(&self, tree: &SyntaxTree, id: NodeId) -> DataType {
        let node = tree.node(id);
        let kids = node.children().ids();

        // IF cond THEN a ELSE b takes the THEN branch's type.
        if node.kind() == NodeKind::If && !node.is_statement_head() && kids.len() >= 2 {
            return self.data_type(tree, kids[1]);
        }
        match node.kind() {
            NodeKind::ThisObject => {
                return self
                    .context
                    .enclosing_class
                    .as_deref()
                    .map(DataType::class)
                    .unwrap_or(DataType::NotComputed);
            }
            NodeKind::Super => {
                return self
                    .enclosing_parent()
                    .map(|p| DataType::class(&p))
                    .unwrap_or(DataType::NotComputed);
            }
            _ => {}
        }

        match node.shape() {
            NodeShape::Constant => constant_type(node.kind(), node.text()),
            NodeShape::BinaryOp => {
                if kids.len() != 2 {
                    return DataType::NotComputed;
                }
                let left = self.data_type(tree, kids[0]);
                let right = self.data_type(tree, kids[1]);
                arithmetic::binary_type(node.kind(), &left, &right)
            }
            NodeShape::UnaryOp => {
                let Some(&operand) = kids.first() else {
                    return DataType::NotComputed;
                };
                let operand = self.data_type(tree, operand);
                arithmetic::unary_type(node.kind(), &operand)
            }
            NodeShape::Paren | NodeShape::Subscript => kids
                .first()
                .map(|&child| self.data_type(tree, child))
                .unwrap_or(DataType::NotComputed),
            NodeShape::BuiltinFunc => {
                let args = self.call_args(tree, id);
                let arg_types: Vec<DataType> =
                    args.iter().map(|&arg| self.data_type(tree, arg)).collect();
                let cast_target = self.cast_target(tree, &args);
                functions::builtin_return_type(node.kind(), &arg_types, cast_target.as_deref())
            }
            NodeShape::ConstructorCall => self
                .find_type_name(tree, id)
                .map(|name| DataType::class(&name))
                .unwrap_or(DataType::NotComputed),
            NodeShape::AttributeAccess => self.member_access(tree, id, false),
            NodeShape::MethodCall => self.member_access(tree, id, true),
            NodeShape::NamedMember | NodeShape::FieldRef => node
                .symbol()
                .map(|link| link.data_type.clone())
                .unwrap_or(DataType::NotComputed),
            NodeShape::SystemHandleRef => DataType::Handle,
            NodeShape::WidgetRef => DataType::WidgetHandle,
            NodeShape::TypeNameRef => DataType::class(&self.type_name_text(tree, id)),
            NodeShape::Aggregate => self.aggregate_type(tree, id),
            NodeShape::UserFuncCall => self
                .context
                .local_scope
                .as_ref()
                .and_then(|scope| scope.function_type(tree.node(id).text()))
                .cloned()
                .unwrap_or(DataType::NotComputed),
            NodeShape::RecordRef | NodeShape::Plain => DataType::NotComputed,
        }
    }

    /// Argument expressions of a call node: the children of its parameter
    /// list when one exists, otherwise its direct expression children.
    fn call_args(&self, tree: &SyntaxTree, id: NodeId) -> Vec<NodeId> {
        let kids = tree.node(id).children().ids();
        for &child in kids {
            let kind = tree.node(child).kind();
            if kind == NodeKind::ParameterList || kind == NodeKind::MethodParamList {
                return tree.node(child).children().ids().to_vec();
            }
        }
        kids.to_vec()
    }

    /// The CAST/DYNAMIC-CAST target: a type-name argument, or a string
    /// literal naming the class.
    fn cast_target(&self, tree: &SyntaxTree, args: &[NodeId]) -> Option<String> {
        let &target = args.get(1)?;
        let node = tree.node(target);
        match node.shape() {
            NodeShape::TypeNameRef => Some(self.type_name_text(tree, target)),
            NodeShape::Constant if node.kind() == NodeKind::QuotedString => {
                Some(trim_quotes(node.text()).to_string())
            }
            _ => None,
        }
    }

    /// The dotted text of a type-name node, assembled from its tokens.
    fn type_name_text(&self, tree: &SyntaxTree, id: NodeId) -> String {
        let node = tree.node(id);
        if !node.text().is_empty() {
            return node.text().to_string();
        }
        let mut out = String::new();
        tree.walk(id, &mut |child| out.push_str(tree.node(child).text()));
        out
    }

    /// First type-name child of a constructor call.
    fn find_type_name(&self, tree: &SyntaxTree, id: NodeId) -> Option<String> {
        tree.node(id)
            .children()
            .ids()
            .iter()
            .find(|&&child| tree.node(child).shape() == NodeShape::TypeNameRef)
            .map(|&child| self.type_name_text(tree, child))
    }

    fn aggregate_type(&self, tree: &SyntaxTree, id: NodeId) -> DataType {
        let kids = tree.node(id).children().ids();
        if kids
            .iter()
            .any(|&child| tree.node(child).kind() == NodeKind::Count)
        {
            return DataType::Integer;
        }
        kids.last()
            .map(|&child| self.data_type(tree, child))
            .unwrap_or(DataType::NotComputed)
    }

    fn enclosing_parent(&self) -> Option<String> {
        if let Some(parent) = &self.context.parent_class {
            return Some(parent.clone());
        }
        let class = self.context.enclosing_class.as_deref()?;
        if let Some(info) = self.provider.lookup(class) {
            return Some(info.parent_type_name.clone()).filter(|p| !p.is_empty());
        }
        self.context
            .local_scope
            .as_ref()
            .map(|scope| scope.parent_class_name().to_string())
            .filter(|p| !p.is_empty())
    }

    fn member_access(&self, tree: &SyntaxTree, id: NodeId, is_method: bool) -> DataType {
        let kids = tree.node(id).children().ids();
        let (Some(&receiver), Some(&member_node)) = (kids.first(), kids.get(1)) else {
            return DataType::NotComputed;
        };
        let member = tree.node(member_node).text().to_string();
        if member.is_empty() {
            return DataType::NotComputed;
        }
        let args = if is_method {
            self.call_args(tree, id)
                .into_iter()
                .filter(|&arg| arg != receiver && arg != member_node)
                .map(|arg| self.data_type(tree, arg))
                .collect()
        } else {
            Vec::new()
        };

        let receiver_node = tree.node(receiver);
        if receiver_node.shape() == NodeShape::SystemHandleRef {
            return handles::member_type(receiver_node.kind(), &member, is_method);
        }
        match receiver_node.kind() {
            NodeKind::ThisObject => return self.member_on_enclosing(&member, &args, is_method),
            NodeKind::Super => return self.member_on_parent(&member, &args, is_method),
            _ => {}
        }

        match self.data_type(tree, receiver) {
            DataType::Class(class_name) => {
                let scope = self.context.local_scope.as_ref();
                if is_method {
                    resolve::resolve_method(&self.provider, &class_name, &member, &args, scope)
                } else {
                    resolve::resolve_attribute(&self.provider, &class_name, &member, scope)
                }
            }
            _ => DataType::NotComputed,
        }
    }

    /// THIS-OBJECT member: the enclosing class itself, falling back to the
    /// in-progress scope when it has no r-code yet.
    fn member_on_enclosing(&self, member: &str, args: &[DataType], is_method: bool) -> DataType {
        let Some(class) = self.context.enclosing_class.as_deref() else {
            return DataType::NotComputed;
        };
        let scope = self.context.local_scope.as_ref();
        if is_method {
            resolve::resolve_method(&self.provider, class, member, args, scope)
        } else {
            resolve::resolve_attribute(&self.provider, class, member, scope)
        }
    }

    /// SUPER member: resolution starts at the enclosing class's parent.
    fn member_on_parent(&self, member: &str, args: &[DataType], is_method: bool) -> DataType {
        let Some(parent) = self.enclosing_parent() else {
            return DataType::NotComputed;
        };
        if is_method {
            resolve::resolve_method(&self.provider, &parent, member, args, None)
        } else {
            resolve::resolve_attribute(&self.provider, &parent, member, None)
        }
    }
}

fn trim_quotes(text: &str) -> &str {
    text.trim_matches(|c| c == '"' || c == '\'')
}

fn constant_type(kind: NodeKind, text: &str) -> DataType {
    match kind {
        NodeKind::QuotedString => DataType::Character,
        NodeKind::NumberLiteral => {
            if text.contains('.') {
                DataType::Decimal
            } else {
                DataType::Integer
            }
        }
        NodeKind::True | NodeKind::False | NodeKind::Yes | NodeKind::No => DataType::Logical,
        NodeKind::UnknownLiteral | NodeKind::Null => DataType::Unknown,
        _ => DataType::NotComputed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::EmptyTypeProvider;
    use crate::tree::{BuilderEntry, Span, TreeBuilder};
    use pretty_assertions::assert_eq;

    fn leaf(b: &mut TreeBuilder, kind: NodeKind, text: &str) -> usize {
        b.push(BuilderEntry::token(kind, text, Span::default()))
    }

    /// Wrap an expression entry in a one-statement program.
    fn finish(mut b: TreeBuilder, root: usize, expr: usize) -> SyntaxTree {
        b.attach_children(root, &[expr]);
        b.build(root).unwrap()
    }

    #[test]
    fn constants() {
        let mut b = TreeBuilder::new();
        let root = b.push(BuilderEntry::synthetic(NodeKind::ProgramRoot));
        let lit = leaf(&mut b, NodeKind::NumberLiteral, "3.14");
        let tree = finish(b, root, lit);

        let engine = ExpressionTypeEngine::new(EmptyTypeProvider);
        let id = tree.first_child(tree.root()).unwrap();
        assert_eq!(engine.data_type(&tree, id), DataType::Decimal);
        // Memoized result is stable.
        assert_eq!(engine.data_type(&tree, id), DataType::Decimal);
    }

    #[test]
    fn if_expression_takes_then_branch() {
        let mut b = TreeBuilder::new();
        let root = b.push(BuilderEntry::synthetic(NodeKind::ProgramRoot));
        let iff = b.push(BuilderEntry::token(NodeKind::If, "IF", Span::default()));
        let cond = leaf(&mut b, NodeKind::True, "TRUE");
        let then = leaf(&mut b, NodeKind::QuotedString, "\"a\"");
        let els = leaf(&mut b, NodeKind::NumberLiteral, "1");
        b.attach_children(iff, &[cond, then, els]);
        let tree = finish(b, root, iff);

        let engine = ExpressionTypeEngine::new(EmptyTypeProvider);
        let id = tree.first_child(tree.root()).unwrap();
        assert_eq!(engine.data_type(&tree, id), DataType::Character);
    }

    #[test]
    fn unresolved_member_is_data_not_error() {
        let mut b = TreeBuilder::new();
        let root = b.push(BuilderEntry::synthetic(NodeKind::ProgramRoot));
        let access = b.push(BuilderEntry::synthetic(NodeKind::AttributeRef));
        let recv = leaf(&mut b, NodeKind::Identifier, "obj");
        let member = leaf(&mut b, NodeKind::Identifier, "Whatever");
        b.attach_children(access, &[recv, member]);
        let tree = finish(b, root, access);

        let engine = ExpressionTypeEngine::new(EmptyTypeProvider);
        let id = tree.first_child(tree.root()).unwrap();
        assert_eq!(engine.data_type(&tree, id), DataType::NotComputed);
    }
}
