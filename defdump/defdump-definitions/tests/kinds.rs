use defdump_core::{DecodeError, Definition, decode_definition};
use defdump_definitions::{
    AreaDefinition, KitDefinition, MapSceneDefinition, SequenceDefinition,
    SpotAnimationDefinition, SpriteDefinition, TextureDefinition, VarbitDefinition,
};

fn decode<D: Definition>(data: &[u8]) -> D {
    decode_definition(data.to_vec(), D::blank(7)).expect("decode should succeed")
}

#[test]
fn texture_file_ids_and_animation() {
    let texture: TextureDefinition =
        decode(&[1, 0x12, 0x34, 2, 3, 2, 0x00, 0x01, 0x00, 0x02, 4, 1, 5, 3, 0]);
    assert_eq!(texture.average_color, 0x1234);
    assert!(texture.opaque);
    assert_eq!(texture.file_ids, vec![1, 2]);
    assert_eq!(texture.animation_direction, 1);
    assert_eq!(texture.animation_speed, 3);
}

#[test]
fn sprite_signed_offsets_and_palette() {
    let sprite: SpriteDefinition = decode(&[
        1, 0x00, 0x20, 2, 0x00, 0x10, 3, 0xFF, 0xFF, 0x00, 0x02, 5, 2, 0x00, 0x00, 0x00, 0xFF,
        0x00, 0xFF, 0,
    ]);
    assert_eq!(sprite.width, 32);
    assert_eq!(sprite.height, 16);
    assert_eq!(sprite.offset_x, -1);
    assert_eq!(sprite.offset_y, 2);
    assert_eq!(sprite.frame_count, 1);
    assert_eq!(sprite.palette, vec![0, 0xFF00FF]);
}

#[test]
fn map_scene_sprite_and_flags() {
    let scene: MapSceneDefinition = decode(&[1, 0x01, 0x00, 3, 5, 0]);
    assert_eq!(scene.sprite_id, 256);
    assert!(scene.rotate);
    assert!(!scene.flip_vertical);
    assert!(scene.flip_horizontal);
    assert_eq!(scene.tint_color, -1);
}

#[test]
fn varbit_reads_index_and_bit_range() {
    let varbit: VarbitDefinition = decode(&[1, 0x01, 0x2C, 4, 7, 0]);
    assert_eq!(varbit.index, 300);
    assert_eq!(varbit.least_significant_bit, 4);
    assert_eq!(varbit.most_significant_bit, 7);
}

#[test]
fn varbit_skips_unknown_opcodes() {
    let varbit: VarbitDefinition = decode(&[9, 0]);
    assert_eq!(varbit, VarbitDefinition::blank(7));
}

#[test]
fn kit_chathead_slots() {
    let kit: KitDefinition = decode(&[1, 3, 2, 1, 0x00, 0x09, 62, 0x00, 0x05, 3, 0]);
    assert_eq!(kit.body_part_id, 3);
    assert_eq!(kit.models, vec![9]);
    assert_eq!(kit.chathead_models.len(), 10);
    assert_eq!(kit.chathead_models[2], 5);
    assert_eq!(kit.chathead_models[0], -1);
    assert!(kit.non_selectable);
}

#[test]
fn sequence_frames_combine_high_and_low_halves() {
    let sequence: SequenceDefinition = decode(&[
        1, 0x00, 0x02, // count
        0x00, 0x04, 0x00, 0x05, // lengths
        0x00, 0x01, 0x00, 0x02, // low halves
        0x00, 0x10, 0x00, 0x00, // high halves
        5, 9, 11, 1, 0,
    ]);
    assert_eq!(sequence.frame_lengths, vec![4, 5]);
    assert_eq!(sequence.frame_ids, vec![0x0010_0001, 2]);
    assert_eq!(sequence.forced_priority, 9);
    assert_eq!(sequence.reply_mode, 1);
    assert_eq!(sequence.max_loops, 99);
}

#[test]
fn sequence_truncated_frame_table_fails() {
    let err = decode_definition(
        vec![1, 0x00, 0x02, 0x00, 0x04],
        SequenceDefinition::blank(3),
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::TruncatedPayload { id: 3, .. }));
}

#[test]
fn spot_animation_resize_and_swaps() {
    let spot: SpotAnimationDefinition =
        decode(&[1, 0x00, 0x2A, 2, 0xFF, 0xFF, 4, 0x00, 0x40, 41, 1, 0x00, 0x01, 0x00, 0x02, 0]);
    assert_eq!(spot.model_id, 42);
    assert_eq!(spot.animation_id, -1);
    assert_eq!(spot.resize_x, 64);
    assert_eq!(spot.resize_y, 128);
    assert_eq!(spot.retexture_to_find, vec![1]);
    assert_eq!(spot.retexture_to_replace, vec![2]);
}

#[test]
fn area_sprite_uses_big_smart() {
    let small: AreaDefinition = decode(&[1, 0x00, 0x05, 0]);
    assert_eq!(small.sprite_id, 5);

    let none: AreaDefinition = decode(&[1, 0x7F, 0xFF, 0]);
    assert_eq!(none.sprite_id, -1);

    let big: AreaDefinition = decode(&[1, 0x80, 0x01, 0x00, 0x00, 0]);
    assert_eq!(big.sprite_id, 65536);
}

#[test]
fn area_name_options_and_polygon() {
    let mut data = vec![3];
    data.extend(b"Bank\0");
    data.push(10);
    data.extend(b"Hidden\0");
    data.push(11);
    data.extend(b"Travel\0");
    data.extend([
        15, 2, // vertices
        0x00, 0x01, 0x00, 0x02, 0xFF, 0xFD, 0x00, 0x04, // points
        0x00, 0xFF, 0x00, 0x00, // color
        1, 0x00, 0x00, 0x00, 0x09, // keys
        1, 0xFF, // flags
        19, 0x00, 0x0C, 0,
    ]);

    let area: AreaDefinition = decode(&data);
    assert_eq!(area.name.as_deref(), Some("Bank"));
    assert_eq!(area.options[0], None);
    assert_eq!(area.options[1].as_deref(), Some("Travel"));
    assert_eq!(area.polygon, vec![1, 2, -3, 4]);
    assert_eq!(area.polygon_color, 0x00FF0000);
    assert_eq!(area.polygon_keys, vec![9]);
    assert_eq!(area.polygon_flags, vec![1, -1]);
    assert_eq!(area.category, 12);
}

#[test]
fn area_discarded_operands_are_consumed() {
    let area: AreaDefinition = decode(&[
        21, 0, 0, 0, 1, 23, 1, 2, 3, 24, 0, 1, 0, 2, 28, 4, 29, 0, 0,
    ]);
    let mut expected = AreaDefinition::blank(7);
    expected.horizontal_alignment = 0;
    assert_eq!(area, expected);
}
