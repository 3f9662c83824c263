//! Encode/decode round-trips and decode-failure behavior for the metadata
//! format.

mod test_utils;

use openabl_analysis::rcode::{ByteOrder, DecodeError, decode_unit, encode_unit};
use openabl_analysis::{DataType, TypeInfo};
use pretty_assertions::assert_eq;
use rstest::rstest;
use test_utils::order_type;

#[rstest]
#[case(ByteOrder::Little)]
#[case(ByteOrder::Big)]
fn full_type_round_trips(#[case] order: ByteOrder) {
    let info = order_type();
    let bytes = encode_unit(&info, order);
    let back = decode_unit(&bytes, order).expect("well-formed buffer decodes");
    assert_eq!(back, info);
}

#[test]
fn nested_collections_keep_declaration_order() {
    let info = order_type();
    let bytes = encode_unit(&info, ByteOrder::Little);
    let back = decode_unit(&bytes, ByteOrder::Little).unwrap();

    let names: Vec<&str> = back.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["AddLine", "AddLine", "Order"]);

    let table = back.tables.get("TTLINE").unwrap();
    let fields: Vec<&str> = table.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, ["LineNum", "Amount", "Tags"]);
    assert_eq!(table.fields[2].extent, 5);
    assert!(table.indexes[0].primary);

    let customer = back.properties.get("CUSTOMER").unwrap();
    assert_eq!(
        customer.data_type,
        DataType::class("acme.Customer")
    );
    assert!(customer.variable.is_some());
    assert!(customer.getter.is_some());
    assert!(customer.setter.is_none());
}

#[test]
fn wrong_byte_order_is_a_decode_error() {
    let bytes = encode_unit(&order_type(), ByteOrder::Little);
    assert!(decode_unit(&bytes, ByteOrder::Big).is_err());
}

#[test]
fn truncation_anywhere_never_yields_a_partial_result() {
    let bytes = encode_unit(&order_type(), ByteOrder::Little);
    // Every proper prefix must fail; a partial TypeInfo is never returned.
    for len in 0..bytes.len() {
        let result = decode_unit(&bytes[..len], ByteOrder::Little);
        assert!(result.is_err(), "prefix of {len} bytes decoded");
    }
}

#[test]
fn corrupt_magic_is_rejected() {
    let mut bytes = encode_unit(&order_type(), ByteOrder::Little);
    bytes[0] ^= 0xff;
    assert!(matches!(
        decode_unit(&bytes, ByteOrder::Little).unwrap_err(),
        DecodeError::BadMagic { .. }
    ));
}

#[test]
fn corrupt_element_size_desynchronizes_the_cursor() {
    let info = order_type();
    let clean = encode_unit(&info, ByteOrder::Little);

    // Find the first element record (right after the member index) and bump
    // its declared size.
    let header = 46 + info.interfaces.len() * 4;
    let data_start = header + info.member_count() * 6;
    let mut bytes = clean.clone();
    bytes[data_start] = bytes[data_start].wrapping_add(1);

    let err = decode_unit(&bytes, ByteOrder::Little).unwrap_err();
    assert!(
        matches!(
            err,
            DecodeError::SizeMismatch { .. } | DecodeError::BadLayout { .. }
        ),
        "unexpected error {err:?}"
    );
}

#[test]
fn bad_string_offset_is_rejected() {
    let mut info = TypeInfo::named("acme.Tiny", "");
    info.variables.insert(
        "V".into(),
        test_utils::variable("V", DataType::Character),
    );
    let mut bytes = encode_unit(&info, ByteOrder::Little);
    // Point the sole index entry's name offset far outside the text segment.
    // With no interfaces the index starts right after the 46-byte header;
    // the name offset sits two bytes into the entry.
    bytes[48..52].copy_from_slice(&u32::MAX.to_le_bytes());
    assert!(matches!(
        decode_unit(&bytes, ByteOrder::Little).unwrap_err(),
        DecodeError::BadStringOffset { .. }
    ));
}

#[test]
fn unknown_version_is_rejected() {
    let mut bytes = encode_unit(&TypeInfo::named("acme.T", ""), ByteOrder::Little);
    bytes[4] = 0x7f;
    assert!(matches!(
        decode_unit(&bytes, ByteOrder::Little).unwrap_err(),
        DecodeError::UnsupportedVersion { .. }
    ));
}

#[test]
fn type_info_serializes_for_report_writers() {
    let info = order_type();
    let json = serde_json::to_string(&info).unwrap();
    let back: TypeInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, info);
}

#[test]
fn type_level_metadata_survives() {
    let info = order_type();
    let back = decode_unit(&encode_unit(&info, ByteOrder::Big), ByteOrder::Big).unwrap();
    assert_eq!(back.type_name, "acme.Order");
    assert_eq!(back.parent_type_name, "acme.Document");
    assert_eq!(back.interfaces, vec!["acme.ITrackable".to_string()]);
    assert!(back.flags.is_serializable);
    assert!(!back.flags.is_interface);
    let constructor = back.methods.iter().find(|m| m.is_constructor).unwrap();
    assert_eq!(constructor.return_type, DataType::Void);
}
