use std::collections::BTreeSet;
use std::sync::Arc;

use crate::assessment::domain::{
    Answer, AnswerSet, Classification, DamageExtent, FireClassification, FireSignal, FloorType,
    LineItem, MoldClassification, MoldDepth, MoldSignal, OptionSignal, Room, RoomDraft, RoomId,
    RoomKind, SootLevel, SootType, WallSide, WaterClassification, WaterSignal,
};
use crate::assessment::repository::MemoryProjectRepository;
use crate::assessment::service::AssessmentService;
use crate::config::EquipmentTunables;
use crate::knowledge::ReferenceDataset;

pub(super) fn dataset() -> ReferenceDataset {
    ReferenceDataset::load(&EquipmentTunables::default()).expect("reference dataset is consistent")
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryProjectRepository>,
    Arc<MemoryProjectRepository>,
) {
    let repository = Arc::new(MemoryProjectRepository::default());
    let service = AssessmentService::new(Arc::new(dataset()), repository.clone());
    (service, repository)
}

fn answer(index: usize, signal: OptionSignal) -> Answer {
    Answer {
        prompt: format!("question {index}"),
        selected: format!("option for question {index}"),
        signal,
    }
}

pub(super) fn water_answers(signals: &[WaterSignal]) -> AnswerSet {
    signals
        .iter()
        .enumerate()
        .map(|(index, signal)| (index, answer(index, OptionSignal::Water(*signal))))
        .collect()
}

pub(super) fn fire_answers(signals: &[FireSignal]) -> AnswerSet {
    signals
        .iter()
        .enumerate()
        .map(|(index, signal)| (index, answer(index, OptionSignal::Fire(*signal))))
        .collect()
}

pub(super) fn mold_answers(signals: &[MoldSignal]) -> AnswerSet {
    signals
        .iter()
        .enumerate()
        .map(|(index, signal)| (index, answer(index, OptionSignal::Mold(*signal))))
        .collect()
}

pub(super) fn water_classification(category: u8, class: u8, has_mold: bool) -> Classification {
    Classification::Water(WaterClassification {
        category,
        category_name: format!("Category {category}"),
        category_description: String::new(),
        class,
        class_name: format!("Class {class}"),
        class_description: String::new(),
        has_mold,
        ppe_required: "Basic".to_string(),
        estimate_modifier: None,
    })
}

pub(super) fn fire_classification(
    soot_type: SootType,
    soot_level: SootLevel,
    hvac_affected: bool,
) -> Classification {
    Classification::Fire(FireClassification {
        soot_type,
        soot_type_name: soot_type.label().to_string(),
        cleaning_method: String::new(),
        extent: DamageExtent::Minor,
        soot_level,
        hvac_affected,
    })
}

pub(super) fn mold_classification(level: u8, depth: MoldDepth) -> Classification {
    Classification::Mold(MoldClassification {
        level,
        level_name: format!("Level {level}"),
        size: String::new(),
        ppe: String::new(),
        containment: String::new(),
        personnel: String::new(),
        depth,
        moisture_active: false,
        health_concerns: false,
    })
}

/// 20 ft x 15 ft x 9 ft carpeted bedroom, half the floor affected, water
/// wicked 12 inches up the north and east walls. Floor 300 SF, perimeter
/// 70 LF, volume 2700 CF, affected wall 35 LF, affected floor 150 SF.
pub(super) fn carpet_room() -> Room {
    Room {
        id: RoomId("room-test-01".to_string()),
        name: "Master Bedroom".to_string(),
        kind: Some(RoomKind::Bedroom),
        length_ft: 20.0,
        width_ft: 15.0,
        height_ft: Some(9.0),
        floor_type: FloorType::Carpet,
        damage_percent: 50.0,
        wall_wick_height_in: 12.0,
        affected_walls: BTreeSet::from([WallSide::North, WallSide::East]),
        notes: String::new(),
    }
}

pub(super) fn room_draft(name: &str, floor_type: FloorType) -> RoomDraft {
    RoomDraft {
        id: None,
        name: name.to_string(),
        kind: Some(RoomKind::Bedroom),
        length_ft: 20.0,
        width_ft: 15.0,
        height_ft: Some(9.0),
        floor_type,
        damage_percent: 50.0,
        wall_wick_height_in: 12.0,
        affected_walls: BTreeSet::from([WallSide::North, WallSide::East]),
        notes: String::new(),
    }
}

pub(super) fn find<'a>(items: &'a [LineItem], code: &str) -> Option<&'a LineItem> {
    items.iter().find(|item| item.code == code)
}
