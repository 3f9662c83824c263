//! Decoded reflection metadata for one compiled class or interface.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::model::DataType;

/// Access mode of a declared member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessMode {
    /// Visible to all callers
    Public,
    /// Visible to the class and its subclasses
    Protected,
    /// Visible to the class only
    Private,
}

/// Class-level flags decoded from the unit header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeFlags {
    /// FINAL class; cannot be subclassed
    pub is_final: bool,
    /// Interface rather than class
    pub is_interface: bool,
    /// ABSTRACT class
    pub is_abstract: bool,
    /// SERIALIZABLE class
    pub is_serializable: bool,
    /// Compiled with USE-WIDGET-POOL
    pub use_widget_pool: bool,
    /// Declares at least one static member
    pub has_statics: bool,
}

/// Parameter passing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamMode {
    /// INPUT parameter
    Input,
    /// OUTPUT parameter
    Output,
    /// INPUT-OUTPUT parameter
    InputOutput,
    /// BUFFER parameter
    Buffer,
}

/// One formal parameter of a method or event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Passing mode
    pub mode: ParamMode,
    /// Declared type
    pub data_type: DataType,
    /// Array extent; 0 for scalars, -1 for indeterminate
    pub extent: i32,
}

/// A method declaration, also used for property getters/setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodElement {
    /// Method name
    pub name: String,
    /// Access mode
    pub access: AccessMode,
    /// Declared STATIC
    pub is_static: bool,
    /// Constructor rather than ordinary method
    pub is_constructor: bool,
    /// Return type; `Void` for procedures-with-no-return
    pub return_type: DataType,
    /// Return array extent; 0 for scalars
    pub extent: i32,
    /// Formal parameters in declaration order
    pub parameters: SmallVec<[Parameter; 4]>,
}

impl MethodElement {
    /// Number of formal parameters.
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// A variable declaration (class-level or property backing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableElement {
    /// Variable name
    pub name: String,
    /// Access mode
    pub access: AccessMode,
    /// Declared STATIC
    pub is_static: bool,
    /// Declared type
    pub data_type: DataType,
    /// Array extent; 0 for scalars
    pub extent: i32,
}

/// A property declaration with optional backing variable and accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyElement {
    /// Property name
    pub name: String,
    /// Access mode
    pub access: AccessMode,
    /// Declared STATIC
    pub is_static: bool,
    /// Declared type
    pub data_type: DataType,
    /// Array extent; 0 for scalars
    pub extent: i32,
    /// Compiler-generated backing variable, when present
    pub variable: Option<VariableElement>,
    /// GET accessor, when present
    pub getter: Option<MethodElement>,
    /// SET accessor, when present
    pub setter: Option<MethodElement>,
}

/// An event declaration; carries a method-like signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventElement {
    /// Event name
    pub name: String,
    /// Access mode
    pub access: AccessMode,
    /// Declared STATIC
    pub is_static: bool,
    /// Signature return type; `Void` for plain events
    pub return_type: DataType,
    /// Handler parameters in declaration order
    pub parameters: SmallVec<[Parameter; 4]>,
}

/// One field of a temp-table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableField {
    /// Field name
    pub name: String,
    /// Declared type
    pub data_type: DataType,
    /// Array extent; 0 for scalars
    pub extent: i32,
}

/// One component of a table index, referring to a field by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexComponent {
    /// Zero-based ordinal into the table's field list
    pub field_ordinal: u16,
    /// Descending collation for this component
    pub descending: bool,
}

/// One index of a temp-table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableIndex {
    /// Index name
    pub name: String,
    /// PRIMARY index
    pub primary: bool,
    /// UNIQUE index
    pub unique: bool,
    /// WORD index
    pub word: bool,
    /// Key components in order
    pub components: SmallVec<[IndexComponent; 4]>,
}

/// A temp-table declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableElement {
    /// Table name
    pub name: String,
    /// Access mode
    pub access: AccessMode,
    /// Declared STATIC
    pub is_static: bool,
    /// Fields in declaration order
    pub fields: Vec<TableField>,
    /// Indexes in declaration order
    pub indexes: Vec<TableIndex>,
}

/// A named buffer over a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferElement {
    /// Buffer name
    pub name: String,
    /// Access mode
    pub access: AccessMode,
    /// Declared STATIC
    pub is_static: bool,
    /// Name of the table the buffer ranges over
    pub table_name: String,
    /// Owning database; empty for temp-tables
    pub database_name: String,
}

/// A data-relation between two buffers of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRelation {
    /// Relation name
    pub name: String,
    /// Ordinal of the parent buffer within the dataset's buffer list
    pub parent_buffer: u16,
    /// Ordinal of the child buffer within the dataset's buffer list
    pub child_buffer: u16,
    /// Comma-separated field pair list, as compiled
    pub pairs: String,
}

/// A dataset declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetElement {
    /// Dataset name
    pub name: String,
    /// Access mode
    pub access: AccessMode,
    /// Declared STATIC
    pub is_static: bool,
    /// Member buffer names in declaration order
    pub buffer_names: Vec<String>,
    /// Data relations in declaration order
    pub relations: Vec<DatasetRelation>,
}

/// A query declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryElement {
    /// Query name
    pub name: String,
    /// Access mode
    pub access: AccessMode,
    /// Declared STATIC
    pub is_static: bool,
    /// Buffer names the query joins, in declaration order
    pub buffer_names: Vec<String>,
}

/// Reflection metadata for one compiled class or interface.
///
/// Immutable once decoded. Member collections preserve declaration order;
/// name keys are stored uppercase because ABL member lookup is
/// case-insensitive. Methods live in a plain list since overloads share a
/// name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Fully-qualified type name
    pub type_name: String,
    /// Fully-qualified parent type name; empty at the hierarchy root
    pub parent_type_name: String,
    /// Assembly the type came from; empty for ABL-compiled types
    pub assembly_name: String,
    /// Implemented interface names
    pub interfaces: Vec<String>,
    /// Class-level flags
    pub flags: TypeFlags,
    /// Methods, in declaration order; overloads share a name
    pub methods: Vec<MethodElement>,
    /// Properties keyed by uppercase name
    pub properties: IndexMap<String, PropertyElement>,
    /// Variables keyed by uppercase name
    pub variables: IndexMap<String, VariableElement>,
    /// Events keyed by uppercase name
    pub events: IndexMap<String, EventElement>,
    /// Temp-tables keyed by uppercase name
    pub tables: IndexMap<String, TableElement>,
    /// Buffers keyed by uppercase name
    pub buffers: IndexMap<String, BufferElement>,
    /// Datasets keyed by uppercase name
    pub datasets: IndexMap<String, DatasetElement>,
    /// Queries keyed by uppercase name
    pub queries: IndexMap<String, QueryElement>,
}

impl TypeInfo {
    /// A bare TypeInfo with just the names filled in.
    pub fn named(type_name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            parent_type_name: parent.into(),
            ..Default::default()
        }
    }

    /// Case-insensitive property lookup.
    pub fn property(&self, name: &str) -> Option<&PropertyElement> {
        self.properties.get(&name.to_ascii_uppercase())
    }

    /// Case-insensitive variable lookup.
    pub fn variable(&self, name: &str) -> Option<&VariableElement> {
        self.variables.get(&name.to_ascii_uppercase())
    }

    /// Case-insensitive event lookup.
    pub fn event(&self, name: &str) -> Option<&EventElement> {
        self.events.get(&name.to_ascii_uppercase())
    }

    /// Case-insensitive buffer lookup.
    pub fn buffer(&self, name: &str) -> Option<&BufferElement> {
        self.buffers.get(&name.to_ascii_uppercase())
    }

    /// All method overloads sharing `name`, case-insensitively.
    pub fn methods_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a MethodElement> + 'a {
        self.methods
            .iter()
            .filter(move |m| m.name.eq_ignore_ascii_case(name))
    }

    /// Declared type of an attribute: a property, or failing that a variable.
    pub fn attribute_type(&self, name: &str) -> Option<&DataType> {
        if let Some(property) = self.property(name) {
            return Some(&property.data_type);
        }
        self.variable(name).map(|v| &v.data_type)
    }

    /// Total number of declared members across every collection.
    pub fn member_count(&self) -> usize {
        self.methods.len()
            + self.properties.len()
            + self.variables.len()
            + self.events.len()
            + self.tables.len()
            + self.buffers.len()
            + self.datasets.len()
            + self.queries.len()
    }
}
