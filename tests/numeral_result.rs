use binary_numeral::{Mode, NumeralResult, decode};
use dcbor::prelude::*;
use hex_literal::hex;
use indoc::indoc;

#[test]
fn display_under_every_mode() {
    let raw = "11000000001000000000000000000000";
    let lines: Vec<String> = Mode::ALL
        .into_iter()
        .map(|mode| decode(raw, mode).unwrap().to_string())
        .collect();
    assert_eq!(
        lines.join("\n"),
        indoc! {"
            11000000001000000000000000000000 [STANDARD]: decimal=3223322624 hex=C0200000
            11000000001000000000000000000000 [SIGNED]: decimal=-1071644672 hex=3FE00000
            11000000001000000000000000000000 [FLOATING_POINT]: decimal=-2.5 hex=3"}
    );
}

#[test]
fn cbor_map_is_deterministic() {
    let r = decode("1011", Mode::Unsigned).unwrap();
    let data = CBOR::from(r).to_cbor_data();
    // {"hex": "B", "bits": "1011", "mode": "STANDARD", "decimal": "11"}
    assert_eq!(
        data,
        hex!(
            "a4"
            "63686578" "6142"
            "6462697473" "6431303131"
            "646d6f6465" "685354414e44415244"
            "67646563696d616c" "623131"
        )
    );
}

#[test]
fn cbor_roundtrip() {
    for (raw, mode) in [
        ("1011", Mode::Unsigned),
        ("10000000", Mode::Signed),
        ("00111111110000000000000000000000", Mode::FloatingPoint),
    ] {
        let r = decode(raw, mode).unwrap();
        let data = CBOR::from(r.clone()).to_cbor_data();
        let back = NumeralResult::try_from(CBOR::try_from_data(data).unwrap())
            .unwrap();
        assert_eq!(r, back);
    }
}

#[test]
fn cbor_rejects_inconsistent_fields() {
    let mut map = Map::new();
    map.insert("bits", "1011");
    map.insert("mode", "STANDARD");
    map.insert("decimal", "11");
    map.insert("hex", "C");
    assert!(NumeralResult::try_from(CBOR::from(map)).is_err());
}

#[test]
fn cbor_rejects_invalid_bits_and_modes() {
    let mut map = Map::new();
    map.insert("bits", "1021");
    map.insert("mode", "STANDARD");
    map.insert("decimal", "0");
    map.insert("hex", "0");
    assert!(NumeralResult::try_from(CBOR::from(map)).is_err());

    let mut map = Map::new();
    map.insert("bits", "1011");
    map.insert("mode", "OCTAL");
    map.insert("decimal", "11");
    map.insert("hex", "B");
    assert!(NumeralResult::try_from(CBOR::from(map)).is_err());

    assert!(NumeralResult::try_from(CBOR::from("1011")).is_err());
}

#[test]
fn json_form() {
    let r = decode("11110000", Mode::Signed).unwrap();
    assert_eq!(
        serde_json::to_string(&r).unwrap(),
        r#"{"bits":"11110000","mode":"SIGNED","decimal":"-16","hex":"10"}"#
    );
}

#[test]
fn pattern_hex_keeps_leading_nibbles() {
    let r = decode("00001010", Mode::Unsigned).unwrap();
    assert_eq!(r.hex(), "A");
    assert_eq!(r.literal().pattern_hex(), "0A");
    assert_eq!(r.literal().to_be_bytes(), hex!("0a"));

    let r = decode("11110000", Mode::Signed).unwrap();
    assert_eq!(r.literal().pattern_hex(), "F0");
}
