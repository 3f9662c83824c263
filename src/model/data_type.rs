//! Static type representation for ABL expressions, variables and members

use serde::{Deserialize, Serialize};
use std::fmt;

/// The inferred or declared static type of an expression, variable or member.
///
/// Equality is structural: two `Class` values are equal when their
/// fully-qualified names are equal. `NotComputed` marks expressions whose
/// type could not be resolved; it is ordinary data, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Fixed-length character value
    Character,
    /// Unbounded character value
    Longchar,
    /// 32-bit integer value
    Integer,
    /// 64-bit integer value
    Int64,
    /// Arbitrary-precision decimal value
    Decimal,
    /// Boolean value (yes/no, true/false)
    Logical,
    /// Calendar date
    Date,
    /// Date with time-of-day
    Datetime,
    /// Date with time-of-day and timezone offset
    DatetimeTz,
    /// Runtime handle to a procedure, widget or system object
    Handle,
    /// Raw memory pointer
    Memptr,
    /// Untyped byte sequence
    Raw,
    /// Physical record id
    Recid,
    /// Logical record id
    Rowid,
    /// COM automation handle
    ComHandle,
    /// Widget handle
    WidgetHandle,
    /// Binary large object field
    Blob,
    /// Character large object field
    Clob,
    /// No value (procedures, VOID methods)
    Void,
    /// Type decided at run time (untyped RUN VALUE targets)
    Runtype,
    /// The unknown value `?`
    Unknown,
    /// Reference to a class or interface, by fully-qualified type name
    Class(String),
    /// Sentinel for "the engine could not determine a type"
    NotComputed,
}

impl DataType {
    /// Build a class reference type from a fully-qualified type name.
    pub fn class(name: impl Into<String>) -> Self {
        DataType::Class(name.into())
    }

    /// The fully-qualified class name, when this is a class reference.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            DataType::Class(name) => Some(name),
            _ => None,
        }
    }

    /// Whether this type is one of the character kinds.
    pub fn is_character_like(&self) -> bool {
        matches!(self, DataType::Character | DataType::Longchar)
    }

    /// Whether this type participates in numeric promotion.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataType::Integer | DataType::Int64 | DataType::Decimal
        )
    }

    /// Whether this type is a date kind (date arithmetic applies).
    pub fn is_date_like(&self) -> bool {
        matches!(
            self,
            DataType::Date | DataType::Datetime | DataType::DatetimeTz
        )
    }

    /// Whether the type was successfully resolved.
    pub fn is_computed(&self) -> bool {
        !matches!(self, DataType::NotComputed)
    }

    /// The numeric wire code for this type.
    ///
    /// `Class` carries its name out of band; the code only says "class".
    /// `NotComputed` has no wire representation and maps to the UNKNOWN code.
    pub fn code(&self) -> u8 {
        match self {
            DataType::Void => 0,
            DataType::Character => 1,
            DataType::Date => 2,
            DataType::Logical => 3,
            DataType::Integer => 4,
            DataType::Decimal => 5,
            DataType::Recid => 6,
            DataType::Raw => 7,
            DataType::Handle => 8,
            DataType::Memptr => 9,
            DataType::Rowid => 10,
            DataType::ComHandle => 11,
            DataType::Blob => 13,
            DataType::Clob => 14,
            DataType::Longchar => 15,
            DataType::Datetime => 16,
            DataType::DatetimeTz => 17,
            DataType::Int64 => 18,
            DataType::WidgetHandle => 19,
            DataType::Runtype => 20,
            DataType::Class(_) => 21,
            DataType::Unknown | DataType::NotComputed => 255,
        }
    }

    /// Decode a wire code back into a type.
    ///
    /// The class code yields `Class` with an empty name; the reader fills in
    /// the name from the record's class-name string. Unrecognized codes
    /// return `None` so the decoder can fail the unit.
    pub fn from_code(code: u8) -> Option<DataType> {
        Some(match code {
            0 => DataType::Void,
            1 => DataType::Character,
            2 => DataType::Date,
            3 => DataType::Logical,
            4 => DataType::Integer,
            5 => DataType::Decimal,
            6 => DataType::Recid,
            7 => DataType::Raw,
            8 => DataType::Handle,
            9 => DataType::Memptr,
            10 => DataType::Rowid,
            11 => DataType::ComHandle,
            13 => DataType::Blob,
            14 => DataType::Clob,
            15 => DataType::Longchar,
            16 => DataType::Datetime,
            17 => DataType::DatetimeTz,
            18 => DataType::Int64,
            19 => DataType::WidgetHandle,
            20 => DataType::Runtype,
            21 => DataType::Class(String::new()),
            255 => DataType::Unknown,
            _ => return None,
        })
    }

    /// Every kind with a wire representation, in code order.
    pub fn wire_kinds() -> &'static [DataType] {
        use DataType::*;
        &[
            Void,
            Character,
            Date,
            Logical,
            Integer,
            Decimal,
            Recid,
            Raw,
            Handle,
            Memptr,
            Rowid,
            ComHandle,
            Blob,
            Clob,
            Longchar,
            Datetime,
            DatetimeTz,
            Int64,
            WidgetHandle,
            Runtype,
            Unknown,
        ]
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DataType::Character => "CHARACTER",
            DataType::Longchar => "LONGCHAR",
            DataType::Integer => "INTEGER",
            DataType::Int64 => "INT64",
            DataType::Decimal => "DECIMAL",
            DataType::Logical => "LOGICAL",
            DataType::Date => "DATE",
            DataType::Datetime => "DATETIME",
            DataType::DatetimeTz => "DATETIME-TZ",
            DataType::Handle => "HANDLE",
            DataType::Memptr => "MEMPTR",
            DataType::Raw => "RAW",
            DataType::Recid => "RECID",
            DataType::Rowid => "ROWID",
            DataType::ComHandle => "COM-HANDLE",
            DataType::WidgetHandle => "WIDGET-HANDLE",
            DataType::Blob => "BLOB",
            DataType::Clob => "CLOB",
            DataType::Void => "VOID",
            DataType::Runtype => "RUNTYPE",
            DataType::Unknown => "UNKNOWN",
            DataType::Class(name) => return write!(f, "CLASS {name}"),
            DataType::NotComputed => "NOT-COMPUTED",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn code_roundtrip_is_inverse() {
        for kind in DataType::wire_kinds() {
            let code = kind.code();
            let back = DataType::from_code(code).unwrap();
            assert_eq!(&back, kind, "code {code} did not round-trip");
        }
        // The class code round-trips to a class with the name cleared.
        let class = DataType::class("com.acme.Thing");
        assert_eq!(
            DataType::from_code(class.code()),
            Some(DataType::Class(String::new()))
        );
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(DataType::from_code(12), None);
        assert_eq!(DataType::from_code(99), None);
    }

    #[test]
    fn structural_equality_for_classes() {
        assert_eq!(DataType::class("a.B"), DataType::class("a.B"));
        assert_ne!(DataType::class("a.B"), DataType::class("a.C"));
    }

    #[test]
    fn predicates() {
        assert!(DataType::Longchar.is_character_like());
        assert!(DataType::Int64.is_numeric());
        assert!(DataType::DatetimeTz.is_date_like());
        assert!(!DataType::NotComputed.is_computed());
        assert!(!DataType::Handle.is_numeric());
    }
}
