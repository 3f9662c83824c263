//! Builtin-function return types.

use crate::ast::NodeKind;
use crate::model::DataType;

/// Return type of a builtin function call.
///
/// Most entries are static. The structural cases: CAST and DYNAMIC-CAST
/// take their target from the type-name argument, ADD-INTERVAL and ABSOLUTE
/// return their first argument's type, and MIN/MAX promote to DECIMAL when
/// any argument is DECIMAL.
pub(crate) fn builtin_return_type(
    kind: NodeKind,
    args: &[DataType],
    cast_target: Option<&str>,
) -> DataType {
    use DataType::*;
    use NodeKind as K;

    match kind {
        K::Cast | K::DynamicCast => {
            return cast_target
                .map(|name| DataType::class(name))
                .unwrap_or(NotComputed);
        }
        K::AddInterval | K::Absolute => {
            return args.first().cloned().unwrap_or(NotComputed);
        }
        K::Maximum | K::Minimum => {
            return if args.contains(&Decimal) {
                Decimal
            } else {
                Integer
            };
        }
        _ => {}
    }

    match kind {
        // Character producers
        K::Caps
        | K::Chr
        | K::CodepageConvert
        | K::CurrentLanguage
        | K::DbName
        | K::DbType
        | K::Encode
        | K::Entry
        | K::Fill
        | K::FrameDb
        | K::FrameField
        | K::FrameFile
        | K::FrameName
        | K::FrameValue
        | K::Gateways
        | K::GetCodepage
        | K::GetString
        | K::Guid
        | K::HexEncode
        | K::Kblabel
        | K::KeyFunction
        | K::KeyLabel
        | K::Keyword
        | K::KeywordAll
        | K::Lc
        | K::LdbName
        | K::LeftTrim
        | K::ListEvents
        | K::MachineClass
        | K::Opsys
        | K::PdbName
        | K::Progress
        | K::Promsgs
        | K::Propath
        | K::Proversion
        | K::Quoter
        | K::Replace
        | K::ReturnValue
        | K::RightTrim
        | K::SdbName
        | K::Search
        | K::String
        | K::Substitute
        | K::Substring
        | K::Terminal
        | K::Trim
        | K::Userid
        | K::Xcode => Character,

        // Integer producers
        K::Asc
        | K::Day
        | K::Etime
        | K::FrameDown
        | K::FrameIndex
        | K::FrameLine
        | K::GetByte
        | K::GetLong
        | K::GetShort
        | K::GetSize
        | K::GetUnsignedShort
        | K::Index
        | K::KeyCode
        | K::Lastkey
        | K::Length
        | K::Lookup
        | K::MessageLines
        | K::Month
        | K::Mtime
        | K::NumAliases
        | K::NumDbs
        | K::NumEntries
        | K::NumResults
        | K::PageNumber
        | K::PageSize
        | K::ProcessArchitecture
        | K::RIndex
        | K::Random
        | K::RowState
        | K::ScreenLines
        | K::Seek
        | K::Time
        | K::Timezone
        | K::Weekday
        | K::Year => Integer,

        // Decimal producers
        K::Exp
        | K::FrameCol
        | K::FrameRow
        | K::GetDouble
        | K::GetFloat
        | K::Log
        | K::Round
        | K::Sqrt
        | K::Truncate => Decimal,

        // Int64 producers
        K::GetPointerValue | K::Interval => Int64,

        // Logical producers
        K::Ambiguous
        | K::Available
        | K::CanDo
        | K::CanFind
        | K::CanQuery
        | K::CanSet
        | K::Connected
        | K::CurrentChanged
        | K::DataSourceModified
        | K::FirstOf
        | K::GoPending
        | K::IsAttrSpace
        | K::IsLeadByte
        | K::LastOf
        | K::Locked
        | K::Member
        | K::New
        | K::Retry
        | K::Transaction
        | K::TypeOf
        | K::ValidEvent
        | K::ValidHandle
        | K::ValidObject => Logical,

        // Temporal producers
        K::Today => Date,
        K::Date => Date,
        K::Datetime => Datetime,
        K::DatetimeTz | K::Now => DatetimeTz,

        // Conversion functions named after their result
        K::Integer => Integer,
        K::Int64 => Int64,
        K::Decimal => Decimal,
        K::Logical => Logical,

        // Handles and records
        K::GetBuffer => Handle,
        K::Handle => Handle,
        K::WidgetHandle => WidgetHandle,
        K::Recid => Recid,
        K::Rowid => Rowid,

        // Binary producers
        K::GetBytes | K::Md5Digest | K::Raw | K::Sha1Digest => Raw,
        K::Base64Encode => Longchar,
        K::Base64Decode | K::HexDecode => Memptr,

        // Reflection
        K::GetClass => DataType::class("Progress.Lang.Class"),

        // Resolved only at run time
        K::DynamicFunction | K::DynamicInvoke => Runtype,

        K::CountOf => Integer,
        _ => NotComputed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use DataType::*;

    #[test]
    fn static_entries() {
        assert_eq!(builtin_return_type(NodeKind::Substring, &[], None), Character);
        assert_eq!(builtin_return_type(NodeKind::Length, &[], None), Integer);
        assert_eq!(builtin_return_type(NodeKind::Today, &[], None), Date);
        assert_eq!(builtin_return_type(NodeKind::Now, &[], None), DatetimeTz);
        assert_eq!(builtin_return_type(NodeKind::Slash, &[], None), NotComputed);
        assert_eq!(
            builtin_return_type(NodeKind::DynamicFunction, &[], None),
            Runtype
        );
    }

    #[test]
    fn cast_reads_its_type_argument() {
        assert_eq!(
            builtin_return_type(NodeKind::Cast, &[NotComputed], Some("acme.Order")),
            DataType::class("acme.Order")
        );
        assert_eq!(builtin_return_type(NodeKind::Cast, &[], None), NotComputed);
    }

    #[test]
    fn min_max_promote_on_decimal() {
        assert_eq!(
            builtin_return_type(NodeKind::Maximum, &[Integer, Decimal], None),
            Decimal
        );
        assert_eq!(
            builtin_return_type(NodeKind::Minimum, &[Integer, Integer], None),
            Integer
        );
    }

    #[test]
    fn first_argument_pass_through() {
        assert_eq!(
            builtin_return_type(NodeKind::AddInterval, &[Datetime, Integer, Character], None),
            Datetime
        );
        assert_eq!(
            builtin_return_type(NodeKind::Absolute, &[Int64], None),
            Int64
        );
    }
}
