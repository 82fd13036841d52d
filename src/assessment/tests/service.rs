use super::common::*;
use crate::assessment::domain::{FloorType, ValidationError};
use crate::assessment::repository::ProjectRepository;
use crate::assessment::service::ServiceError;

#[test]
fn start_project_persists_an_empty_aggregate() {
    let (service, repository) = build_service();
    let project = service.start_project(None).expect("project starts");

    assert!(project.name.starts_with("Assessment "));
    let stored = repository
        .fetch(&project.id)
        .expect("store reachable")
        .expect("project stored");
    assert_eq!(stored, project);
    assert!(stored.rooms.is_empty());
    assert!(stored.line_items.is_empty());
}

#[test]
fn apply_classification_records_estimate_items() {
    let (service, _) = build_service();
    let project = service.start_project(None).expect("project starts");

    let updated = service
        .apply_classification(&project.id, water_classification(3, 2, false))
        .expect("classification applies");

    assert!(updated.classification.is_some());
    assert!(updated
        .line_items
        .keys()
        .all(|key| key.room.is_none()));
    assert!(updated
        .line_items
        .keys()
        .any(|key| key.code == "WTRCNTLF"));
}

#[test]
fn reapplying_a_classification_replaces_estimate_items() {
    let (service, _) = build_service();
    let project = service.start_project(None).expect("project starts");

    service
        .apply_classification(&project.id, water_classification(3, 2, false))
        .expect("first application");
    let updated = service
        .apply_classification(&project.id, water_classification(1, 1, false))
        .expect("second application");

    // Category dropped on re-assessment; the stale containment row must go.
    assert!(!updated
        .line_items
        .keys()
        .any(|key| key.code == "WTRCNTLF"));
}

#[test]
fn save_room_generates_room_scoped_items() {
    let (service, _) = build_service();
    let project = service.start_project(None).expect("project starts");
    service
        .apply_classification(&project.id, water_classification(2, 2, false))
        .expect("classification applies");

    let updated = service
        .save_room(&project.id, room_draft("Master Bedroom", FloorType::Carpet))
        .expect("room saves");

    assert_eq!(updated.rooms.len(), 1);
    let room_id = updated.rooms[0].id.clone();
    let room_items: Vec<_> = updated
        .line_items
        .values()
        .filter(|item| item.room.as_ref() == Some(&room_id))
        .collect();
    assert!(!room_items.is_empty());
    assert!(room_items
        .iter()
        .all(|item| item.room_name.as_deref() == Some("Master Bedroom")));
}

#[test]
fn regenerating_a_room_is_idempotent() {
    let (service, _) = build_service();
    let project = service.start_project(None).expect("project starts");
    service
        .apply_classification(&project.id, water_classification(3, 2, false))
        .expect("classification applies");

    let first = service
        .save_room(&project.id, room_draft("Master Bedroom", FloorType::Carpet))
        .expect("room saves");
    let room_id = first.rooms[0].id.clone();

    let mut draft = room_draft("Master Bedroom", FloorType::Carpet);
    draft.id = Some(room_id);
    let second = service.save_room(&project.id, draft).expect("room re-saves");

    assert_eq!(second.rooms.len(), 1);
    assert_eq!(first.line_items, second.line_items);
}

#[test]
fn regeneration_drops_items_the_room_no_longer_derives() {
    let (service, _) = build_service();
    let project = service.start_project(None).expect("project starts");
    service
        .apply_classification(&project.id, water_classification(2, 2, false))
        .expect("classification applies");

    let first = service
        .save_room(&project.id, room_draft("Kitchen", FloorType::Carpet))
        .expect("room saves");
    let room_id = first.rooms[0].id.clone();
    assert!(first
        .line_items
        .keys()
        .any(|key| key.code == "WTRPAD" && key.room.as_ref() == Some(&room_id)));

    let mut draft = room_draft("Kitchen", FloorType::Tile);
    draft.id = Some(room_id.clone());
    let second = service.save_room(&project.id, draft).expect("room re-saves");
    assert!(!second
        .line_items
        .keys()
        .any(|key| key.code == "WTRPAD" && key.room.as_ref() == Some(&room_id)));
}

#[test]
fn other_rooms_survive_a_regeneration() {
    let (service, _) = build_service();
    let project = service.start_project(None).expect("project starts");
    service
        .apply_classification(&project.id, water_classification(2, 2, false))
        .expect("classification applies");

    let with_bedroom = service
        .save_room(&project.id, room_draft("Bedroom", FloorType::Carpet))
        .expect("bedroom saves");
    let bedroom_id = with_bedroom.rooms[0].id.clone();

    let with_kitchen = service
        .save_room(&project.id, room_draft("Kitchen", FloorType::Tile))
        .expect("kitchen saves");
    let kitchen_id = with_kitchen
        .rooms
        .iter()
        .find(|room| room.name == "Kitchen")
        .expect("kitchen stored")
        .id
        .clone();

    let mut redraft = room_draft("Kitchen", FloorType::Tile);
    redraft.id = Some(kitchen_id);
    let final_state = service
        .save_room(&project.id, redraft)
        .expect("kitchen re-saves");

    let bedroom_items_before: Vec<_> = with_kitchen
        .line_items
        .values()
        .filter(|item| item.room.as_ref() == Some(&bedroom_id))
        .cloned()
        .collect();
    let bedroom_items_after: Vec<_> = final_state
        .line_items
        .values()
        .filter(|item| item.room.as_ref() == Some(&bedroom_id))
        .cloned()
        .collect();
    assert_eq!(bedroom_items_before, bedroom_items_after);
}

#[test]
fn invalid_rooms_leave_the_project_untouched() {
    let (service, repository) = build_service();
    let project = service.start_project(None).expect("project starts");
    service
        .apply_classification(&project.id, water_classification(2, 2, false))
        .expect("classification applies");
    let before = repository
        .fetch(&project.id)
        .expect("store reachable")
        .expect("project stored");

    let mut draft = room_draft("Bad Room", FloorType::Carpet);
    draft.length_ft = 0.0;
    match service.save_room(&project.id, draft) {
        Err(ServiceError::Validation(ValidationError::NonPositiveDimensions { .. })) => {}
        other => panic!("expected dimension validation error, got {other:?}"),
    }

    let after = repository
        .fetch(&project.id)
        .expect("store reachable")
        .expect("project stored");
    assert_eq!(before, after);
}

#[test]
fn rooms_saved_before_classification_carry_no_items() {
    let (service, _) = build_service();
    let project = service.start_project(None).expect("project starts");
    let updated = service
        .save_room(&project.id, room_draft("Early Room", FloorType::Carpet))
        .expect("room saves");
    assert_eq!(updated.rooms.len(), 1);
    assert!(updated.line_items.is_empty());
}

#[test]
fn export_payload_uses_the_contract_field_names() {
    let (service, _) = build_service();
    let project = service.start_project(Some("Smith Loss".to_string())).expect("project starts");
    service
        .apply_classification(&project.id, water_classification(2, 2, false))
        .expect("classification applies");
    service
        .save_room(&project.id, room_draft("Master Bedroom", FloorType::Carpet))
        .expect("room saves");

    let payload = service.export_payload(&project.id).expect("payload shapes");
    let json = serde_json::to_value(&payload).expect("payload serializes");

    assert_eq!(json["project"]["name"], "Smith Loss");
    assert_eq!(json["project"]["damageType"], "water");
    let room = &json["rooms"][0];
    assert_eq!(room["name"], "Master Bedroom");
    assert_eq!(room["type"], "bedroom");
    assert_eq!(room["length"], 20.0);
    assert_eq!(room["width"], 15.0);
    assert_eq!(room["height"], 9.0);
    let item = &json["lineItems"][0];
    assert!(item["code"].is_string());
    assert!(item["description"].is_string());
    assert!(item["quantity"].is_number());
    assert!(item["unit"].is_string());
}

#[test]
fn export_csv_renders_the_item_table() {
    let (service, _) = build_service();
    let project = service.start_project(None).expect("project starts");
    service
        .apply_classification(&project.id, water_classification(2, 2, false))
        .expect("classification applies");

    let csv = service.export_csv(&project.id).expect("csv renders");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Code,Description,Quantity,Unit,Category,Room")
    );
    assert!(csv.contains("WTREXT"));
}

#[test]
fn list_projects_summarizes_the_store() {
    let (service, _) = build_service();
    let project = service.start_project(None).expect("project starts");
    service
        .apply_classification(&project.id, water_classification(1, 1, false))
        .expect("classification applies");

    let summaries = service.list_projects().expect("listing works");
    let summary = summaries
        .iter()
        .find(|summary| summary.id == project.id)
        .expect("project listed");
    assert!(summary.item_count > 0);
    assert_eq!(summary.room_count, 0);
}
