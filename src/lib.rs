//! Static-analysis front end for OpenEdge ABL
//!
//! Turns parsed source into a typed syntax tree and infers the static type
//! of every expression, using reflection metadata decoded from compiled
//! r-code units.
//!
//! The crate has four cooperating subsystems:
//! - [`ast`]: the token/node kind taxonomy and the process-wide catalog
//!   with keyword abbreviation lookup.
//! - [`tree`]: the arena-backed syntax tree built from the parser's
//!   builder graph, with typed navigation and text reconstruction.
//! - [`rcode`]: the compiled-unit metadata reader producing [`rcode::TypeInfo`]
//!   records, plus the reference encoder used by tests.
//! - [`typing`]: the memoizing expression type engine, resolving class
//!   members through a [`provider::TypeInfoProvider`].

pub mod ast;
pub mod model;
pub mod provider;
pub mod rcode;
pub mod tree;
pub mod typing;

// Re-export main types
pub use ast::{CatalogError, NodeKind};
pub use model::DataType;
pub use provider::{CachingTypeProvider, EmptyTypeProvider, MapTypeProvider, RcodeTypeProvider,
    TypeInfoProvider};
pub use rcode::{ByteOrder, DecodeError, TypeInfo, decode_unit, encode_unit};
pub use tree::{NodeId, SyntaxTree, TreeBuilder, TreeError};
pub use typing::{ExpressionTypeEngine, LocalScope, UnitContext};
