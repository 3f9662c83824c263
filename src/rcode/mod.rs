//! Compiled-unit ("r-code") reflection metadata: model, decoder and the
//! reference encoder used by tests and fixtures.
//!
//! Buffers are fully in memory before decoding starts; no I/O happens here.
//! A decode either produces a complete [`TypeInfo`] or fails with a
//! [`DecodeError`] — the format has no partial or best-effort result.

mod decode;
mod encode;
mod error;
mod type_info;

pub use decode::{FORMAT_VERSION, HEADER_SIZE, MAGIC, decode_unit};
pub use encode::encode_unit;
pub use error::DecodeError;
pub use type_info::{
    AccessMode, BufferElement, DatasetElement, DatasetRelation, EventElement, IndexComponent,
    MethodElement, ParamMode, Parameter, PropertyElement, QueryElement, TableElement, TableField,
    TableIndex, TypeFlags, TypeInfo, VariableElement,
};

/// Byte order of a compiled unit's multibyte fields, explicit per decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least-significant byte first
    Little,
    /// Most-significant byte first
    Big,
}
