//! Process-wide token catalog.
//!
//! Two maps are built once from the static kind table: numeric id to kind,
//! and every legal abbreviation prefix of every spelling to its kind. A
//! prefix that maps to two different kinds means a typo in the table, and
//! construction fails rather than silently shadowing one spelling with
//! another.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use super::node_type::{KIND_TABLE, KindSpec, NodeKind};

/// Catalog construction failure. Fatal at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two different kinds resolve from the same abbreviation prefix.
    #[error("abbreviation '{prefix}' maps to both {first} and {second}")]
    AbbreviationCollision {
        /// The colliding prefix
        prefix: String,
        /// Kind registered first
        first: NodeKind,
        /// Kind that attempted to claim the same prefix
        second: NodeKind,
    },
    /// A spelling declares a minimum abbreviation longer than itself.
    #[error("kind {kind} spelling '{text}' has min length {min} > {len}")]
    BadMinimumLength {
        /// The offending kind
        kind: NodeKind,
        /// The spelling text
        text: String,
        /// Declared minimum
        min: usize,
        /// Actual spelling length
        len: usize,
    },
}

#[derive(Debug)]
pub(crate) struct CatalogMaps {
    by_id: FxHashMap<u16, NodeKind>,
    by_text: FxHashMap<String, NodeKind>,
    spec_of: FxHashMap<NodeKind, &'static KindSpec>,
}

/// Build the lookup maps from a kind table, validating abbreviations.
pub(crate) fn build_maps(table: &'static [KindSpec]) -> Result<CatalogMaps, CatalogError> {
    let mut by_id = FxHashMap::default();
    let mut by_text: FxHashMap<String, NodeKind> = FxHashMap::default();
    let mut spec_of = FxHashMap::default();

    for spec in table {
        by_id.insert(spec.kind.id(), spec.kind);
        spec_of.insert(spec.kind, spec);

        for spelling in spec.spellings {
            let len = spelling.text.chars().count();
            if spelling.min_len == 0 || spelling.min_len > len {
                return Err(CatalogError::BadMinimumLength {
                    kind: spec.kind,
                    text: spelling.text.to_string(),
                    min: spelling.min_len,
                    len,
                });
            }
            for end in spelling.min_len..=len {
                let prefix: String = spelling.text.chars().take(end).collect();
                match by_text.get(&prefix) {
                    Some(&existing) if existing != spec.kind => {
                        return Err(CatalogError::AbbreviationCollision {
                            prefix,
                            first: existing,
                            second: spec.kind,
                        });
                    }
                    _ => {
                        by_text.insert(prefix, spec.kind);
                    }
                }
            }
        }
    }

    Ok(CatalogMaps {
        by_id,
        by_text,
        spec_of,
    })
}

static MAPS: Lazy<CatalogMaps> = Lazy::new(|| match build_maps(KIND_TABLE) {
    Ok(maps) => maps,
    Err(err) => panic!("token catalog is misconfigured: {err}"),
});

/// Run the catalog self-test eagerly.
///
/// The same validation runs lazily on first use and panics there; embedders
/// that prefer a `Result` at startup call this first.
pub fn self_check() -> Result<(), CatalogError> {
    build_maps(KIND_TABLE).map(|_| ())
}

/// Resolve a kind from its numeric id; unknown ids yield `Invalid`.
pub(crate) fn kind_by_id(id: u16) -> NodeKind {
    MAPS.by_id.get(&id).copied().unwrap_or(NodeKind::Invalid)
}

pub(crate) fn spec_of(kind: NodeKind) -> &'static KindSpec {
    MAPS.spec_of
        .get(&kind)
        .expect("every kind has a table row")
}

/// Resolve text to a kind, honoring keyword abbreviations.
///
/// Lookup is case-insensitive. Text shorter than a spelling's declared
/// minimum abbreviation does not match it; unmatched text yields `default`.
pub fn lookup(text: &str, default: NodeKind) -> NodeKind {
    let upper = text.to_ascii_uppercase();
    MAPS.by_text.get(&upper).copied().unwrap_or(default)
}

/// System handles (SESSION, COMPILER, ...); each has a member dispatch table
/// in the type engine.
pub(crate) static SYSTEM_HANDLES: Lazy<FxHashSet<NodeKind>> = Lazy::new(|| {
    use NodeKind::*;
    [
        ActiveForm,
        ActiveWindow,
        AuditControl,
        AuditPolicy,
        Clipboard,
        CodebaseLocator,
        ColorTable,
        Compiler,
        CurrentWindow,
        Debugger,
        DsLogManager,
        ErrorStatus,
        FileInfo,
        Focus,
        FontTable,
        LastEvent,
        LogManager,
        Profiler,
        RcodeInfo,
        SecurityPolicy,
        SelfKw,
        Session,
        SourceProcedure,
        TargetProcedure,
        ThisProcedure,
        WebContext,
    ]
    .into_iter()
    .collect()
});

/// Keywords legal as the datatype of a DEFINE ... AS phrase.
pub(crate) static DATATYPE_KEYWORDS: Lazy<FxHashSet<NodeKind>> = Lazy::new(|| {
    use NodeKind::*;
    [
        Blob,
        Character,
        Class,
        Clob,
        ComHandle,
        Date,
        Datetime,
        DatetimeTz,
        Decimal,
        Handle,
        Int64,
        Integer,
        Logical,
        Longchar,
        Memptr,
        Raw,
        Recid,
        Rowid,
        Void,
        WidgetHandle,
    ]
    .into_iter()
    .collect()
});

/// Builtin functions callable without an argument list.
pub(crate) static NO_ARG_FUNCTIONS: Lazy<FxHashSet<NodeKind>> = Lazy::new(|| {
    use NodeKind::*;
    [
        CurrentLanguage,
        DbName,
        Etime,
        FrameCol,
        FrameDb,
        FrameDown,
        FrameField,
        FrameFile,
        FrameIndex,
        FrameLine,
        FrameName,
        FrameRow,
        FrameValue,
        Gateways,
        GoPending,
        Guid,
        IsAttrSpace,
        Lastkey,
        MachineClass,
        MessageLines,
        Mtime,
        Now,
        NumAliases,
        NumDbs,
        Opsys,
        PageNumber,
        ProcessArchitecture,
        Progress,
        Promsgs,
        Propath,
        Proversion,
        Retry,
        ReturnValue,
        ScreenLines,
        Terminal,
        Time,
        Today,
        Transaction,
        Userid,
    ]
    .into_iter()
    .collect()
});

/// Builtin functions taking a parenthesized argument list.
pub(crate) static REGULAR_FUNCTIONS: Lazy<FxHashSet<NodeKind>> = Lazy::new(|| {
    use NodeKind::*;
    [
        Absolute,
        AddInterval,
        Asc,
        Base64Decode,
        Base64Encode,
        CanDo,
        CanQuery,
        CanSet,
        Caps,
        Cast,
        Chr,
        CodepageConvert,
        Connected,
        CountOf,
        Date,
        Datetime,
        DatetimeTz,
        Day,
        DbType,
        Decimal,
        DynamicCast,
        DynamicFunction,
        DynamicInvoke,
        Encode,
        Entry,
        Etime,
        Exp,
        Fill,
        FirstOf,
        GetByte,
        GetBytes,
        GetClass,
        GetCodepage,
        GetDouble,
        GetFloat,
        GetLong,
        GetPointerValue,
        GetShort,
        GetSize,
        GetString,
        GetUnsignedShort,
        Guid,
        Handle,
        HexDecode,
        HexEncode,
        Index,
        Int64,
        Integer,
        Interval,
        IsLeadByte,
        Kblabel,
        KeyCode,
        KeyFunction,
        KeyLabel,
        Keyword,
        KeywordAll,
        LastOf,
        Lc,
        LdbName,
        LeftTrim,
        Length,
        ListEvents,
        Log,
        Logical,
        Lookup,
        Maximum,
        Md5Digest,
        Member,
        Minimum,
        Month,
        NumEntries,
        NumResults,
        PdbName,
        Quoter,
        RIndex,
        Random,
        Raw,
        Replace,
        RightTrim,
        Round,
        SdbName,
        Search,
        Seek,
        Sha1Digest,
        Sqrt,
        String,
        Substitute,
        Substring,
        Timezone,
        Trim,
        Truncate,
        TypeOf,
        ValidEvent,
        ValidHandle,
        ValidObject,
        Weekday,
        WidgetHandle,
        Xcode,
        Year,
    ]
    .into_iter()
    .collect()
});

/// Builtin functions whose argument is a record buffer.
pub(crate) static RECORD_FUNCTIONS: Lazy<FxHashSet<NodeKind>> = Lazy::new(|| {
    use NodeKind::*;
    [
        Ambiguous,
        Available,
        CanFind,
        CurrentChanged,
        DataSourceModified,
        Locked,
        New,
        Recid,
        RowState,
        Rowid,
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::node_type::{Spelling, flags};
    use pretty_assertions::assert_eq;

    #[test]
    fn self_check_passes_on_shipped_table() {
        self_check().expect("shipped table must be collision-free");
    }

    #[test]
    fn full_spelling_resolves() {
        assert_eq!(
            lookup("DEFINE", NodeKind::Identifier),
            NodeKind::Define
        );
        assert_eq!(lookup("define", NodeKind::Identifier), NodeKind::Define);
    }

    #[test]
    fn every_abbreviation_at_or_above_minimum_resolves() {
        for spec in KIND_TABLE {
            for spelling in spec.spellings {
                for end in spelling.min_len..=spelling.text.len() {
                    let prefix = &spelling.text[..end];
                    assert_eq!(
                        lookup(prefix, NodeKind::Invalid),
                        spec.kind,
                        "prefix {prefix:?} of {:?}",
                        spelling.text
                    );
                }
            }
        }
    }

    #[test]
    fn below_minimum_falls_back_to_default() {
        // VARIABLE abbreviates to VAR but not to VA.
        assert_eq!(lookup("VAR", NodeKind::Identifier), NodeKind::Variable);
        assert_eq!(lookup("VA", NodeKind::Identifier), NodeKind::Identifier);
        // DEFINE abbreviates to DEF but not DE (DESCENDING has DESC).
        assert_eq!(lookup("DEF", NodeKind::Identifier), NodeKind::Define);
        assert_eq!(lookup("DE", NodeKind::Identifier), NodeKind::Identifier);
    }

    #[test]
    fn alternate_spellings_resolve_to_same_kind() {
        assert_eq!(lookup("THROUGH", NodeKind::Invalid), NodeKind::Through);
        assert_eq!(lookup("THRU", NodeKind::Invalid), NodeKind::Through);
        assert_eq!(lookup("USERID", NodeKind::Invalid), NodeKind::Userid);
        assert_eq!(lookup("USER", NodeKind::Invalid), NodeKind::Userid);
    }

    #[test]
    fn unmatched_text_yields_default() {
        assert_eq!(
            lookup("not-a-keyword", NodeKind::Identifier),
            NodeKind::Identifier
        );
    }

    #[test]
    fn synthetic_duplicate_abbreviation_fails_construction() {
        // Two kinds claiming the prefix "DEF".
        static BROKEN: &[KindSpec] = &[
            KindSpec {
                kind: NodeKind::Define,
                text: "DEFINE",
                spellings: &[Spelling {
                    text: "DEFINE",
                    min_len: 3,
                }],
                flags: flags::KW,
            },
            KindSpec {
                kind: NodeKind::Default,
                text: "DEFAULT",
                spellings: &[Spelling {
                    text: "DEFAULT",
                    min_len: 3,
                }],
                flags: flags::KW,
            },
        ];
        let err = build_maps(BROKEN).unwrap_err();
        assert_eq!(
            err,
            CatalogError::AbbreviationCollision {
                prefix: "DEF".into(),
                first: NodeKind::Define,
                second: NodeKind::Default,
            }
        );
    }

    #[test]
    fn zero_minimum_is_rejected() {
        static BROKEN: &[KindSpec] = &[KindSpec {
            kind: NodeKind::Define,
            text: "DEFINE",
            spellings: &[Spelling {
                text: "DEFINE",
                min_len: 0,
            }],
            flags: flags::KW,
        }];
        assert!(matches!(
            build_maps(BROKEN).unwrap_err(),
            CatalogError::BadMinimumLength { .. }
        ));
    }

    #[test]
    fn category_sets() {
        assert!(NodeKind::Session.is_system_handle());
        assert!(NodeKind::Compiler.is_system_handle());
        assert!(!NodeKind::Define.is_system_handle());

        assert!(NodeKind::Character.is_valid_datatype());
        assert!(NodeKind::DatetimeTz.is_valid_datatype());
        assert!(!NodeKind::Where.is_valid_datatype());

        assert!(NodeKind::Today.is_no_arg_function());
        assert!(NodeKind::Substring.is_regular_function());
        assert!(NodeKind::Available.is_record_function());
        assert!(!NodeKind::Available.is_regular_function());
    }
}
