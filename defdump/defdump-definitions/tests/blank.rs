use std::fmt::Debug;

use defdump_core::{Definition, RecordKind, decode_definition};
use defdump_definitions::{
    AreaDefinition, ItemDefinition, KitDefinition, MapSceneDefinition, NpcDefinition,
    ObjectDefinition, OverlayDefinition, SequenceDefinition, SpotAnimationDefinition,
    SpriteDefinition, TextureDefinition, UnderlayDefinition, VarbitDefinition,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Opcode no kind's table assigns.
const UNASSIGNED: u8 = 250;

fn assert_decodes_to_blank<D: Definition + PartialEq + Debug>(kind: RecordKind) {
    for id in [0, 42] {
        let terminator_only = decode_definition(vec![0], D::blank(id)).unwrap();
        assert_eq!(terminator_only, D::blank(id), "{kind}: terminator only");

        let unknown_tag = decode_definition(vec![UNASSIGNED, 0], D::blank(id)).unwrap();
        assert_eq!(unknown_tag, D::blank(id), "{kind}: unknown opcode");
    }
}

fn check(kind: RecordKind) {
    match kind {
        RecordKind::Underlay => assert_decodes_to_blank::<UnderlayDefinition>(kind),
        RecordKind::Overlay => assert_decodes_to_blank::<OverlayDefinition>(kind),
        RecordKind::Texture => assert_decodes_to_blank::<TextureDefinition>(kind),
        RecordKind::Sprite => assert_decodes_to_blank::<SpriteDefinition>(kind),
        RecordKind::Varbit => assert_decodes_to_blank::<VarbitDefinition>(kind),
        RecordKind::Kit => assert_decodes_to_blank::<KitDefinition>(kind),
        RecordKind::Sequence => assert_decodes_to_blank::<SequenceDefinition>(kind),
        RecordKind::SpotAnimation => assert_decodes_to_blank::<SpotAnimationDefinition>(kind),
        RecordKind::Area => assert_decodes_to_blank::<AreaDefinition>(kind),
        RecordKind::MapScene => assert_decodes_to_blank::<MapSceneDefinition>(kind),
        RecordKind::Object => assert_decodes_to_blank::<ObjectDefinition>(kind),
        RecordKind::Npc => assert_decodes_to_blank::<NpcDefinition>(kind),
        RecordKind::Item => assert_decodes_to_blank::<ItemDefinition>(kind),
    }
}

// ── tests ────────────────────────────────────────────────────────────────────

#[test]
fn every_kind_decodes_terminator_and_unknown_tag_to_blank() {
    assert_eq!(RecordKind::ALL.len(), 13);
    for kind in RecordKind::ALL {
        check(kind);
    }
}
