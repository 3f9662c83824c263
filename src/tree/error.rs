//! Tree construction errors

use thiserror::Error;

use crate::ast::NodeKind;

/// Structural failure while converting a builder graph into a tree.
///
/// Fatal to the one unit being built; other units are unaffected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A placeholder entry carries children; placeholders are pruned and
    /// must always be childless.
    #[error("placeholder node {kind} at entry {entry} has children")]
    PlaceholderWithChildren {
        /// Kind of the offending placeholder
        kind: NodeKind,
        /// Builder entry index
        entry: usize,
    },
    /// A first-child or next-sibling link points outside the builder graph.
    #[error("builder link to unknown entry {target} from entry {entry}")]
    DanglingLink {
        /// Entry holding the bad link
        entry: usize,
        /// The out-of-range target
        target: usize,
    },
    /// Following sibling/child links revisited an entry.
    #[error("builder graph links form a cycle through entry {entry}")]
    CyclicLink {
        /// First entry seen twice
        entry: usize,
    },
    /// The designated root entry was pruned or missing.
    #[error("builder graph has no usable root")]
    MissingRoot,
}
