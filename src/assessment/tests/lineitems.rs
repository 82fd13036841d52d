use super::common::*;
use crate::assessment::domain::{FloorType, MoldDepth, SootLevel, SootType, WallSide};
use crate::assessment::geometry::derive_geometry;
use crate::assessment::lineitems::{generate, ItemScope, ESTIMATE_PENDING_LABEL};

fn room_scope_items(
    classification: &crate::assessment::domain::Classification,
    room: &crate::assessment::domain::Room,
) -> Vec<crate::assessment::domain::LineItem> {
    let geometry = derive_geometry(room);
    generate(
        &dataset(),
        classification,
        ItemScope::Room {
            room,
            geometry: &geometry,
        },
    )
}

#[test]
fn water_room_items_for_a_category_three_loss() {
    let room = carpet_room();
    let items = room_scope_items(&water_classification(3, 2, false), &room);

    assert_eq!(find(&items, "WTRDRY").expect("air movers").quantity, 3.0);
    assert_eq!(find(&items, "WTRDHM").expect("dehumidifier").quantity, 1.0);
    assert_eq!(find(&items, "WTREQ").expect("monitoring").quantity, 3.0);
    assert_eq!(find(&items, "WTREXT").expect("extraction").quantity, 150.0);
    assert_eq!(find(&items, "WTRPAD").expect("pad removal").quantity, 150.0);
    assert_eq!(find(&items, "WTRGRM").expect("antimicrobial").quantity, 150.0);
    assert_eq!(find(&items, "WTRCNTLF").expect("containment").quantity, 70.0);
    assert_eq!(find(&items, "WTRDRYWLF").expect("flood cut").quantity, 35.0);
    assert_eq!(find(&items, "WTRBLK").expect("blocking").quantity, 6.0);
    assert!(find(&items, "WTRINS").is_none());
    assert!(find(&items, "HMRDIS").is_none());
}

#[test]
fn room_flood_cut_requires_walls_and_wick() {
    let mut room = carpet_room();
    room.affected_walls.clear();
    let items = room_scope_items(&water_classification(3, 2, false), &room);
    assert!(find(&items, "WTRDRYWLF").is_none());
    assert!(find(&items, "WTRDRYW4").is_none());

    let mut room = carpet_room();
    room.wall_wick_height_in = 0.0;
    let items = room_scope_items(&water_classification(3, 2, false), &room);
    assert!(find(&items, "WTRDRYWLF").is_none());
}

#[test]
fn tall_wick_switches_to_the_four_foot_cut() {
    let mut room = carpet_room();
    room.wall_wick_height_in = 24.0;
    let items = room_scope_items(&water_classification(1, 2, false), &room);
    assert_eq!(find(&items, "WTRDRYWLF").expect("2 ft cut").quantity, 35.0);

    room.wall_wick_height_in = 30.0;
    let items = room_scope_items(&water_classification(1, 2, false), &room);
    assert!(find(&items, "WTRDRYWLF").is_none());
    assert_eq!(find(&items, "WTRDRYW4").expect("4 ft cut").quantity, 35.0);
}

#[test]
fn hard_floors_use_the_hard_surface_codes() {
    let mut room = carpet_room();
    room.floor_type = FloorType::Tile;
    let items = room_scope_items(&water_classification(2, 2, false), &room);
    assert_eq!(find(&items, "WTREXTH").expect("extraction").quantity, 150.0);
    assert!(find(&items, "WTREXT").is_none());
    assert!(find(&items, "WTRPAD").is_none());
    assert!(find(&items, "WTRBLK").is_none());
}

#[test]
fn severe_classes_add_demo_and_fogging() {
    let room = carpet_room();
    let items = room_scope_items(&water_classification(3, 3, true), &room);
    assert_eq!(find(&items, "WTRINS").expect("insulation").quantity, 150.0);
    assert_eq!(find(&items, "HMRDIS").expect("fogging").quantity, 150.0);
}

#[test]
fn water_estimate_scope_assumes_the_default_room() {
    let items = generate(
        &dataset(),
        &water_classification(3, 2, false),
        ItemScope::Estimate,
    );

    assert_eq!(find(&items, "WTRDRY").expect("air movers").quantity, 4.0);
    assert_eq!(find(&items, "WTRDHM").expect("dehumidifier").quantity, 1.0);
    assert_eq!(find(&items, "WTREXT").expect("extraction").quantity, 200.0);
    assert_eq!(find(&items, "WTRCNTLF").expect("containment").quantity, 60.0);
    // Class 2 triggers the flood cut unconditionally before measurements.
    assert_eq!(find(&items, "WTRDRYWLF").expect("flood cut").quantity, 60.0);

    for item in &items {
        assert!(item.room.is_none());
        assert!(
            item.description.contains(ESTIMATE_PENDING_LABEL),
            "{} missing the estimate label",
            item.code
        );
    }
}

#[test]
fn estimate_flood_cut_waits_for_class_two() {
    let items = generate(
        &dataset(),
        &water_classification(3, 1, false),
        ItemScope::Estimate,
    );
    assert!(find(&items, "WTRDRYWLF").is_none());
}

#[test]
fn room_descriptions_are_room_qualified() {
    let room = carpet_room();
    let items = room_scope_items(&water_classification(1, 1, false), &room);
    let extraction = find(&items, "WTREXT").expect("extraction");
    assert!(extraction.description.ends_with("- Master Bedroom"));
    assert_eq!(extraction.room_name.as_deref(), Some("Master Bedroom"));
    assert_eq!(extraction.unit, "SF");
}

#[test]
fn quantities_round_to_two_decimals() {
    let mut room = carpet_room();
    room.length_ft = 10.33;
    room.width_ft = 10.33;
    room.damage_percent = 33.0;
    let items = room_scope_items(&water_classification(1, 1, false), &room);
    assert_eq!(find(&items, "WTREXT").expect("extraction").quantity, 35.21);
    assert_eq!(find(&items, "WTRBLK").expect("blocking").quantity, 3.0);
}

#[test]
fn fire_room_items_follow_soot_type_and_level() {
    let room = carpet_room();
    let items = room_scope_items(
        &fire_classification(SootType::Dry, SootLevel::Heavy, true),
        &room,
    );

    assert_eq!(find(&items, "WTRNAFAN").expect("scrubber").quantity, 3.0);
    assert_eq!(find(&items, "CLNFOG").expect("fogging").quantity, 2700.0);
    assert_eq!(find(&items, "CLNFOG").expect("fogging").unit, "CF");
    assert_eq!(find(&items, "HEPAFSH").expect("hepa").quantity, 300.0);
    assert_eq!(find(&items, "CLNSOOT").expect("dry soot").quantity, 300.0);
    assert_eq!(
        find(&items, "CLNSMOKEH").expect("heavy smoke").quantity,
        315.0
    );
    assert_eq!(find(&items, "CLNDUCT").expect("ducts").quantity, 1.0);
    assert!(find(&items, "CLNSOOTW").is_none());
    assert!(find(&items, "CLNSMOKE").is_none());
}

#[test]
fn wet_soot_and_light_residue_use_the_wet_and_light_codes() {
    let room = carpet_room();
    let items = room_scope_items(
        &fire_classification(SootType::Protein, SootLevel::OdorOnly, false),
        &room,
    );
    assert_eq!(find(&items, "CLNSOOTW").expect("wet soot").quantity, 300.0);
    assert_eq!(find(&items, "CLNSMOKE").expect("light smoke").quantity, 315.0);
    assert!(find(&items, "CLNSOOT").is_none());
    assert!(find(&items, "CLNDUCT").is_none());
}

#[test]
fn fire_estimate_scope_uses_the_default_volume() {
    let items = generate(
        &dataset(),
        &fire_classification(SootType::Dry, SootLevel::Light, false),
        ItemScope::Estimate,
    );
    assert_eq!(find(&items, "CLNFOG").expect("fogging").quantity, 1800.0);
    assert_eq!(find(&items, "CLNSMOKE").expect("light smoke").quantity, 540.0);
}

#[test]
fn mold_room_items_scale_with_level_and_depth() {
    let room = carpet_room();
    let items = room_scope_items(&mold_classification(3, MoldDepth::Hidden), &room);

    assert_eq!(find(&items, "HEPAFSH").expect("hepa").quantity, 300.0);
    assert_eq!(find(&items, "WTRGRM").expect("antimicrobial").quantity, 300.0);
    assert_eq!(find(&items, "HMRCNT").expect("containment").quantity, 70.0);
    assert_eq!(find(&items, "WTRCNTLF").expect("poly walls").quantity, 70.0);
    assert_eq!(find(&items, "WTRNAFAN").expect("scrubber").quantity, 3.0);
    assert_eq!(find(&items, "WTRDRYWLF").expect("drywall").quantity, 35.0);
    assert_eq!(find(&items, "HMRABR").expect("framing").quantity, 300.0);
    assert!(find(&items, "HMREQD").is_none());
    assert!(find(&items, "HMRASBTS").is_none());
}

#[test]
fn mold_drywall_removal_falls_back_to_the_perimeter() {
    let mut room = carpet_room();
    room.affected_walls.clear();
    let items = room_scope_items(&mold_classification(2, MoldDepth::Deep), &room);
    assert_eq!(find(&items, "WTRDRYWLF").expect("drywall").quantity, 70.0);
}

#[test]
fn level_four_mold_adds_decontamination() {
    let room = carpet_room();
    let items = room_scope_items(&mold_classification(4, MoldDepth::Surface), &room);
    assert_eq!(find(&items, "HMREQD").expect("decon").quantity, 1.0);
    assert_eq!(find(&items, "HMRDIS").expect("fogging").quantity, 300.0);
}

#[test]
fn surface_mold_below_level_three_stays_minimal() {
    let room = carpet_room();
    let items = room_scope_items(&mold_classification(1, MoldDepth::Surface), &room);
    let codes: Vec<&str> = items.iter().map(|item| item.code.as_str()).collect();
    assert_eq!(codes, ["HEPAFSH", "WTRGRM"]);
}

#[test]
fn mold_estimate_scope_adds_sampling() {
    let items = generate(
        &dataset(),
        &mold_classification(2, MoldDepth::Surface),
        ItemScope::Estimate,
    );
    let sampling = find(&items, "HMRASBTS").expect("sampling");
    assert_eq!(sampling.quantity, 2.0);
    assert_eq!(sampling.unit, "EA");
}

#[test]
fn generate_is_deterministic() {
    let dataset = dataset();
    let room = carpet_room();
    let geometry = derive_geometry(&room);
    let classification = water_classification(3, 4, true);
    let scope = ItemScope::Room {
        room: &room,
        geometry: &geometry,
    };
    assert_eq!(
        generate(&dataset, &classification, scope),
        generate(&dataset, &classification, scope)
    );
}

#[test]
fn walls_affect_fire_wall_math() {
    let mut room = carpet_room();
    room.affected_walls = [WallSide::North].into_iter().collect();
    let items = room_scope_items(
        &fire_classification(SootType::Dry, SootLevel::Severe, false),
        &room,
    );
    assert_eq!(
        find(&items, "CLNSMOKEH").expect("heavy smoke").quantity,
        135.0
    );
}
