#![allow(dead_code)]
//! Shared fixture builders for the integration tests.

use openabl_analysis::ast::NodeKind;
use openabl_analysis::rcode::{
    AccessMode, IndexComponent, MethodElement, ParamMode, Parameter, PropertyElement,
    TableElement, TableField, TableIndex, TypeInfo, VariableElement,
};
use openabl_analysis::tree::{BuilderEntry, EntryFlags, Span, SyntaxTree, TreeBuilder};
use openabl_analysis::DataType;
use smallvec::smallvec;

/// Build a one-expression program tree and return it with the expression id.
pub fn expr_tree(
    build: impl FnOnce(&mut TreeBuilder) -> usize,
) -> (SyntaxTree, openabl_analysis::NodeId) {
    let mut b = TreeBuilder::new();
    let root = b.push(BuilderEntry::synthetic(NodeKind::ProgramRoot));
    let expr = build(&mut b);
    b.attach_children(root, &[expr]);
    let tree = b.build(root).unwrap();
    let id = tree.first_child(tree.root()).unwrap();
    (tree, id)
}

pub fn token(b: &mut TreeBuilder, kind: NodeKind, text: &str) -> usize {
    b.push(BuilderEntry::token(kind, text, Span::default()))
}

pub fn binary(b: &mut TreeBuilder, kind: NodeKind, text: &str, left: usize, right: usize) -> usize {
    let op = b.push(
        BuilderEntry::token(kind, text, Span::default()).with_flags(EntryFlags::BINARY_OP),
    );
    b.attach_children(op, &[left, right]);
    op
}

pub fn builtin(b: &mut TreeBuilder, kind: NodeKind, text: &str, args: &[usize]) -> usize {
    let call = b.push(
        BuilderEntry::token(kind, text, Span::default()).with_flags(EntryFlags::FUNC_CALL),
    );
    b.attach_children(call, args);
    call
}

pub fn property(name: &str, data_type: DataType) -> PropertyElement {
    PropertyElement {
        name: name.to_string(),
        access: AccessMode::Public,
        is_static: false,
        data_type,
        extent: 0,
        variable: None,
        getter: None,
        setter: None,
    }
}

pub fn variable(name: &str, data_type: DataType) -> VariableElement {
    VariableElement {
        name: name.to_string(),
        access: AccessMode::Private,
        is_static: false,
        data_type,
        extent: 0,
    }
}

pub fn method(name: &str, params: &[DataType], ret: DataType) -> MethodElement {
    MethodElement {
        name: name.to_string(),
        access: AccessMode::Public,
        is_static: false,
        is_constructor: false,
        return_type: ret,
        extent: 0,
        parameters: params
            .iter()
            .enumerate()
            .map(|(i, t)| Parameter {
                name: format!("p{i}"),
                mode: ParamMode::Input,
                data_type: t.clone(),
                extent: 0,
            })
            .collect(),
    }
}

/// A representative TypeInfo with methods, properties, variables and a
/// keyed temp-table.
pub fn order_type() -> TypeInfo {
    let mut info = TypeInfo::named("acme.Order", "acme.Document");
    info.interfaces.push("acme.ITrackable".to_string());
    info.flags.is_serializable = true;

    info.methods.push(method(
        "AddLine",
        &[DataType::Integer, DataType::Decimal],
        DataType::Logical,
    ));
    info.methods
        .push(method("AddLine", &[DataType::Character], DataType::Logical));
    info.methods.push(MethodElement {
        is_constructor: true,
        ..method("Order", &[], DataType::Void)
    });

    info.properties
        .insert("TOTAL".into(), property("Total", DataType::Decimal));
    info.properties.insert(
        "CUSTOMER".into(),
        PropertyElement {
            variable: Some(variable("Customer", DataType::class("acme.Customer"))),
            getter: Some(method("Customer", &[], DataType::class("acme.Customer"))),
            ..property("Customer", DataType::class("acme.Customer"))
        },
    );

    info.variables
        .insert("MLINES".into(), variable("mLines", DataType::Integer));

    info.tables.insert(
        "TTLINE".into(),
        TableElement {
            name: "ttLine".to_string(),
            access: AccessMode::Protected,
            is_static: false,
            fields: vec![
                TableField {
                    name: "LineNum".to_string(),
                    data_type: DataType::Integer,
                    extent: 0,
                },
                TableField {
                    name: "Amount".to_string(),
                    data_type: DataType::Decimal,
                    extent: 0,
                },
                TableField {
                    name: "Tags".to_string(),
                    data_type: DataType::Character,
                    extent: 5,
                },
            ],
            indexes: vec![TableIndex {
                name: "idxLine".to_string(),
                primary: true,
                unique: true,
                word: false,
                components: smallvec![IndexComponent {
                    field_ordinal: 0,
                    descending: false,
                }],
            }],
        },
    );

    info
}
