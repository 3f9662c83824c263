//! Class-member resolution against provider-supplied metadata.
//!
//! Attribute and method lookups search the receiver class first, then walk
//! `parent_type_name` upward. The walk is a plain loop with a visited set;
//! metadata with a cyclic parent chain resolves to nothing instead of
//! looping.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::model::DataType;
use crate::provider::TypeInfoProvider;
use crate::rcode::TypeInfo;

/// Member tables for the unit currently being analyzed.
///
/// A class under analysis has no r-code yet; THIS-OBJECT member access falls
/// back to this scope so a class can reference its own members before its
/// first successful compile.
#[derive(Debug, Default, Clone)]
pub struct LocalScope {
    class_name: String,
    parent_class_name: String,
    attributes: FxHashMap<String, DataType>,
    methods: Vec<LocalMethod>,
    functions: FxHashMap<String, DataType>,
}

#[derive(Debug, Clone)]
struct LocalMethod {
    name: String,
    param_types: Vec<DataType>,
    return_type: DataType,
}

impl LocalScope {
    /// A scope for the named class.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Default::default()
        }
    }

    /// Record the parent class named in the INHERITS phrase.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_class_name = parent.into();
        self
    }

    /// The class this scope describes.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The declared parent class; empty when none.
    pub fn parent_class_name(&self) -> &str {
        &self.parent_class_name
    }

    /// Register a property or variable declared in the unit.
    pub fn add_attribute(&mut self, name: &str, data_type: DataType) {
        self.attributes
            .insert(name.to_ascii_uppercase(), data_type);
    }

    /// Register a method declared in the unit.
    pub fn add_method(&mut self, name: &str, param_types: Vec<DataType>, return_type: DataType) {
        self.methods.push(LocalMethod {
            name: name.to_string(),
            param_types,
            return_type,
        });
    }

    /// Register a user-defined function declared in the unit.
    pub fn add_function(&mut self, name: &str, return_type: DataType) {
        self.functions
            .insert(name.to_ascii_uppercase(), return_type);
    }

    /// Declared return type of a user-defined function.
    pub fn function_type(&self, name: &str) -> Option<&DataType> {
        self.functions.get(&name.to_ascii_uppercase())
    }

    fn attribute(&self, name: &str) -> Option<&DataType> {
        self.attributes.get(&name.to_ascii_uppercase())
    }

    fn method(&self, name: &str, args: &[DataType]) -> Option<&DataType> {
        pick_overload(
            self.methods
                .iter()
                .filter(|m| m.name.eq_ignore_ascii_case(name))
                .map(|m| (m.param_types.as_slice(), &m.return_type)),
            args,
        )
    }
}

/// Whether an argument of type `arg` can bind a parameter of type `param`.
///
/// Unknown arguments bind anything; numeric arguments widen, character
/// kinds interchange; everything else must match structurally.
fn param_compatible(param: &DataType, arg: &DataType) -> bool {
    if arg == param {
        return true;
    }
    match (param, arg) {
        (_, DataType::NotComputed | DataType::Unknown) => true,
        (DataType::Int64 | DataType::Decimal, DataType::Integer) => true,
        (DataType::Decimal, DataType::Int64) => true,
        (DataType::Character, DataType::Longchar) => true,
        (DataType::Longchar, DataType::Character) => true,
        (DataType::Datetime | DataType::DatetimeTz, DataType::Date) => true,
        _ => false,
    }
}

/// Overload selection over (parameter list, return type) candidates.
///
/// One compatible candidate wins; among several, a single exact signature
/// match wins; anything else is ambiguous and resolves to nothing.
fn pick_overload<'a>(
    candidates: impl Iterator<Item = (&'a [DataType], &'a DataType)>,
    args: &[DataType],
) -> Option<&'a DataType> {
    let viable: Vec<(&[DataType], &DataType)> = candidates
        .filter(|(params, _)| {
            params.len() == args.len()
                && params
                    .iter()
                    .zip(args)
                    .all(|(param, arg)| param_compatible(param, arg))
        })
        .collect();

    match viable.as_slice() {
        [] => None,
        [(_, ret)] => Some(*ret),
        _ => {
            let exact: Vec<&DataType> = viable
                .iter()
                .filter(|(params, _)| params.iter().eq(args.iter()))
                .map(|(_, ret)| *ret)
                .collect();
            match exact.as_slice() {
                [ret] => Some(*ret),
                _ => {
                    debug!("ambiguous overload for {} arguments", args.len());
                    None
                }
            }
        }
    }
}

/// Walk the class hierarchy from `start`, applying `visit` at each level.
///
/// Stops at the first `Some`, at a class the provider does not know, at the
/// hierarchy root, or when the parent chain revisits a name.
fn walk_hierarchy<P: TypeInfoProvider, R>(
    provider: &P,
    start: &str,
    mut visit: impl FnMut(&TypeInfo) -> Option<R>,
) -> Option<R> {
    let mut visited = FxHashSet::default();
    let mut current = start.to_string();
    loop {
        if !visited.insert(current.to_ascii_uppercase()) {
            debug!("cyclic parent chain through {current}");
            return None;
        }
        let info = provider.lookup(&current)?;
        if let Some(found) = visit(&info) {
            return Some(found);
        }
        if info.parent_type_name.is_empty() {
            return None;
        }
        current = info.parent_type_name.clone();
    }
}

/// Type of attribute `member` on class `class_name`, searching properties
/// then variables, then the parent chain.
pub(crate) fn resolve_attribute<P: TypeInfoProvider>(
    provider: &P,
    class_name: &str,
    member: &str,
    local: Option<&LocalScope>,
) -> DataType {
    if let Some(found) =
        walk_hierarchy(provider, class_name, |info| info.attribute_type(member).cloned())
    {
        return found;
    }
    // A class not yet compiled resolves through the in-progress scope.
    if let Some(scope) = local.filter(|s| s.class_name().eq_ignore_ascii_case(class_name)) {
        if let Some(found) = scope.attribute(member) {
            return found.clone();
        }
        if !scope.parent_class_name().is_empty() {
            return resolve_attribute(provider, scope.parent_class_name(), member, None);
        }
    }
    DataType::NotComputed
}

/// Return type of method `member` on class `class_name`, overload-matched on
/// positional argument types, searching the parent chain on miss.
pub(crate) fn resolve_method<P: TypeInfoProvider>(
    provider: &P,
    class_name: &str,
    member: &str,
    args: &[DataType],
    local: Option<&LocalScope>,
) -> DataType {
    // Parameters carry mode and extent alongside the type; project each
    // level's overloads to plain type lists before selection.
    if let Some(found) = walk_hierarchy(provider, class_name, |info| {
        let projected: Vec<(Vec<DataType>, DataType)> = info
            .methods_named(member)
            .map(|m| {
                (
                    m.parameters.iter().map(|p| p.data_type.clone()).collect(),
                    m.return_type.clone(),
                )
            })
            .collect();
        pick_overload(
            projected.iter().map(|(params, ret)| (params.as_slice(), ret)),
            args,
        )
        .cloned()
    }) {
        return found;
    }

    if let Some(scope) = local.filter(|s| s.class_name().eq_ignore_ascii_case(class_name)) {
        if let Some(found) = scope.method(member, args) {
            return found.clone();
        }
        if !scope.parent_class_name().is_empty() {
            return resolve_method(provider, scope.parent_class_name(), member, args, None);
        }
    }
    DataType::NotComputed
}
