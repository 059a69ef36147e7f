use defdump_core::{DecodeError, Definition, RecordKind, decode_definition, rgb_to_hsl};
use defdump_definitions::UnderlayDefinition;

fn decode(id: u32, data: &[u8]) -> UnderlayDefinition {
    decode_definition(data.to_vec(), UnderlayDefinition::blank(id)).expect("decode should succeed")
}

#[test]
fn blank_carries_documented_defaults() {
    let blank = UnderlayDefinition::blank(4);
    assert_eq!(blank.id, 4);
    assert_eq!(blank.color, 0);
    assert_eq!(blank.texture, -1);
    assert_eq!(blank.scale, -1);
    assert!(blank.block_shadow);
    assert!(blank.secondary_flag);
    assert_eq!(blank.lightness, -1);
    assert_eq!(blank.hue_multiplier, 0);
}

#[test]
fn terminator_only_equals_blank() {
    assert_eq!(decode(9, &[0x00]), UnderlayDefinition::blank(9));
}

#[test]
fn color_sets_field_and_derives_hsl() {
    let underlay = decode(5, &[0x01, 0x00, 0x10, 0x20, 0x00]);
    let hsl = rgb_to_hsl(0x001020);
    assert_eq!(underlay.color, 0x001020);
    assert_eq!(underlay.hue, hsl.hue);
    assert_eq!(underlay.saturation, hsl.saturation);
    assert_eq!(underlay.lightness, hsl.lightness);
    assert_eq!(underlay.hue_multiplier, hsl.hue_multiplier);
}

#[test]
fn explicit_black_still_derives_hsl() {
    let underlay = decode(1, &[0x01, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(underlay.color, 0);
    assert_eq!(underlay.hue, 0);
    assert_eq!(underlay.saturation, 0);
    assert_eq!(underlay.lightness, 0);
    assert_eq!(underlay.hue_multiplier, 1);
}

#[test]
fn texture_above_signed_short_max_is_none() {
    assert_eq!(decode(1, &[0x02, 0x80, 0x00, 0x00]).texture, -1);
    assert_eq!(decode(1, &[0x02, 0xFF, 0xFF, 0x00]).texture, -1);
    assert_eq!(decode(1, &[0x02, 0x7F, 0xFF, 0x00]).texture, 32767);
    assert_eq!(decode(1, &[0x02, 0x00, 0x2A, 0x00]).texture, 42);
}

#[test]
fn scale_is_shifted_by_two() {
    assert_eq!(decode(1, &[0x03, 0x00, 0x80, 0x00]).scale, 512);
}

#[test]
fn flag_opcodes_clear_booleans() {
    let underlay = decode(1, &[0x04, 0x05, 0x00]);
    assert!(!underlay.block_shadow);
    assert!(!underlay.secondary_flag);
}

#[test]
fn unknown_opcode_changes_nothing() {
    let base = [0x01, 0x12, 0x34, 0x56, 0x02, 0x00, 0x07, 0x04];
    let mut plain = base.to_vec();
    plain.push(0x00);
    let mut noisy = base.to_vec();
    noisy.extend_from_slice(&[0x06, 0x00]);

    assert_eq!(decode(3, &plain), decode(3, &noisy));
}

#[test]
fn missing_color_operands_is_truncated() {
    let err = decode_definition(vec![0x01, 0x00, 0x10], UnderlayDefinition::blank(12)).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TruncatedPayload {
            kind: RecordKind::Underlay,
            id: 12,
            ..
        }
    ));
}

#[test]
fn serializes_with_camel_case_names() {
    let underlay = decode(5, &[0x01, 0x00, 0x10, 0x20, 0x00]);
    let json = serde_json::to_value(&underlay).unwrap();
    assert_eq!(json["id"], 5);
    assert_eq!(json["color"], 0x001020);
    assert_eq!(json["blockShadow"], true);
    assert_eq!(json["hueMultiplier"], underlay.hue_multiplier);
    assert!(json.get("hasColor").is_none());
}
