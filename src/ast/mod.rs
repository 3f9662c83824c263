//! Token/node kind taxonomy and the process-wide token catalog

pub mod catalog;
pub mod node_type;

pub use catalog::{CatalogError, lookup, self_check};
pub use node_type::{NodeKind, Spelling};
