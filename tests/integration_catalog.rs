//! Catalog lookup behavior over the public API.

use openabl_analysis::ast::{self, NodeKind};
use pretty_assertions::assert_eq;

/// Every id that resolves to a real kind, by scanning the id space.
fn all_kinds() -> Vec<NodeKind> {
    (0..=NodeKind::LooseEnd as u16)
        .map(NodeKind::from_id)
        .filter(|&kind| kind != NodeKind::Invalid)
        .collect()
}

#[test]
fn startup_self_check_passes() {
    ast::self_check().expect("shipped catalog must build");
}

#[test]
fn every_spelling_prefix_at_or_above_minimum_resolves() {
    for kind in all_kinds() {
        for spelling in kind.spellings() {
            for end in spelling.min_len..=spelling.text.len() {
                let prefix = &spelling.text[..end];
                assert_eq!(
                    ast::lookup(prefix, NodeKind::Invalid),
                    kind,
                    "prefix {prefix:?} of spelling {:?}",
                    spelling.text
                );
            }
        }
    }
}

#[test]
fn below_minimum_prefixes_fall_back_to_the_default() {
    // VARIABLE abbreviates down to VAR, DEFINE to DEF; one character less
    // matches nothing.
    assert_eq!(ast::lookup("VAR", NodeKind::Identifier), NodeKind::Variable);
    assert_eq!(ast::lookup("VA", NodeKind::Identifier), NodeKind::Identifier);
    assert_eq!(ast::lookup("DEF", NodeKind::Identifier), NodeKind::Define);
    assert_eq!(ast::lookup("DE", NodeKind::Identifier), NodeKind::Identifier);
    assert_eq!(
        ast::lookup("SUBSTRIN", NodeKind::Identifier),
        NodeKind::Substring
    );
    assert_eq!(
        ast::lookup("SUBS", NodeKind::Identifier),
        NodeKind::Identifier
    );
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(
        ast::lookup("substring", NodeKind::Invalid),
        NodeKind::Substring
    );
    assert_eq!(
        ast::lookup("SubString", NodeKind::Invalid),
        NodeKind::Substring
    );
}

#[test]
fn id_round_trip() {
    for kind in all_kinds() {
        assert_eq!(NodeKind::from_id(kind.id()), kind);
    }
}

#[test]
fn unknown_id_is_the_invalid_sentinel() {
    assert_eq!(NodeKind::from_id(65_000), NodeKind::Invalid);
}

#[test]
fn category_predicates_partition_sensibly() {
    let kinds = all_kinds();
    // Reserved keywords are always keywords.
    for &kind in &kinds {
        if kind.is_reserved_keyword() {
            assert!(kind.is_keyword(), "{kind:?} reserved but not keyword");
        }
    }
    // System handles and datatype keywords are keyword-classified.
    for &kind in &kinds {
        if kind.is_system_handle() || kind.is_valid_datatype() {
            assert!(kind.is_keyword(), "{kind:?}");
        }
    }
    // Placeholders never overlap keywords.
    for &kind in &kinds {
        if kind.is_placeholder() {
            assert!(!kind.is_keyword(), "{kind:?}");
        }
    }
}
