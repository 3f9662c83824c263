//! Decode failures for compiled-unit buffers.

use thiserror::Error;

/// Failure while decoding one compiled unit.
///
/// The format has no resynchronization point; every variant fails the whole
/// decode call and no partial [`TypeInfo`](super::TypeInfo) is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer ended before a read completed.
    #[error("unexpected end of buffer at offset {offset}")]
    UnexpectedEnd {
        /// Offset of the failed read
        offset: usize,
    },
    /// Leading magic number did not match.
    #[error("bad magic number 0x{found:08x}")]
    BadMagic {
        /// Value actually read
        found: u32,
    },
    /// Header declared a format version this reader does not handle.
    #[error("unsupported format version {version}")]
    UnsupportedVersion {
        /// Declared version
        version: u16,
    },
    /// Member index carried a kind code outside the known set.
    #[error("unknown member kind code {code} at index entry {entry}")]
    UnknownMemberKind {
        /// The unrecognized code
        code: u8,
        /// Index-entry ordinal
        entry: usize,
    },
    /// An access byte carried no recognizable mode bit.
    #[error("unknown access flags 0x{flags:02x} for member '{name}'")]
    UnknownAccess {
        /// The flag byte
        flags: u8,
        /// Member being decoded
        name: String,
    },
    /// A data-type code outside the known set.
    #[error("unknown data-type code {code} in member '{name}'")]
    UnknownDataType {
        /// The unrecognized code
        code: u8,
        /// Member being decoded
        name: String,
    },
    /// An element consumed a different number of bytes than it declared.
    ///
    /// This is the invariant that keeps the shared cursor synchronized; a
    /// mismatch means the rest of the unit cannot be trusted.
    #[error("member '{name}' declared {declared} bytes but consumed {consumed}")]
    SizeMismatch {
        /// Member being decoded
        name: String,
        /// Size from the record header
        declared: u32,
        /// Bytes actually consumed
        consumed: u32,
    },
    /// A string offset pointed outside the text segment.
    #[error("string offset {offset} outside text segment of {size} bytes")]
    BadStringOffset {
        /// Offending segment-relative offset
        offset: u32,
        /// Text segment size
        size: u32,
    },
    /// A string ran to the end of the text segment without a terminator.
    #[error("unterminated string at text offset {offset}")]
    UnterminatedString {
        /// Offending segment-relative offset
        offset: u32,
    },
    /// String bytes were not valid UTF-8.
    #[error("invalid UTF-8 in string at text offset {offset}")]
    InvalidUtf8 {
        /// Offending segment-relative offset
        offset: u32,
    },
    /// A region offset or count in the header is inconsistent with the
    /// buffer.
    #[error("inconsistent layout: {detail}")]
    BadLayout {
        /// Human-readable description of the inconsistency
        detail: String,
    },
    /// An index or relation referred to an out-of-range ordinal.
    #[error("ordinal {ordinal} out of range ({limit}) in member '{name}'")]
    BadOrdinal {
        /// The offending ordinal
        ordinal: u16,
        /// Exclusive upper bound
        limit: u16,
        /// Member being decoded
        name: String,
    },
}
