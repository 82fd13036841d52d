//! Shaping project data for the export collaborators: the conversion
//! service's request payload and a spreadsheet-friendly CSV rendering.

use serde::Serialize;

use crate::assessment::domain::{Classification, DamageType, Project, Room, RoomKind};

/// Request body for the external estimate-conversion service.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionRequest {
    pub project: ProjectMeta,
    pub rooms: Vec<RoomPayload>,
    #[serde(rename = "lineItems")]
    pub line_items: Vec<ItemPayload>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectMeta {
    pub name: String,
    #[serde(rename = "damageType")]
    pub damage_type: Option<DamageType>,
    pub classification: Option<Classification>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<RoomKind>,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemPayload {
    pub code: String,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
}

impl RoomPayload {
    fn of(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            kind: room.kind,
            length: room.length_ft,
            width: room.width_ft,
            height: room.height_ft(),
        }
    }
}

/// Shape a project into the conversion request payload.
pub fn conversion_request(project: &Project) -> ConversionRequest {
    ConversionRequest {
        project: ProjectMeta {
            name: project.name.clone(),
            damage_type: project.damage_type,
            classification: project.classification.clone(),
        },
        rooms: project.rooms.iter().map(RoomPayload::of).collect(),
        line_items: project
            .line_items
            .values()
            .map(|item| ItemPayload {
                code: item.code.clone(),
                description: item.description.clone(),
                quantity: item.quantity,
                unit: item.unit.clone(),
            })
            .collect(),
    }
}

/// Error raised while rendering the CSV export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv rendering failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer unavailable: {0}")]
    Buffer(String),
}

/// Render the project's line items as CSV with a fixed header row.
pub fn write_csv(project: &Project) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Code", "Description", "Quantity", "Unit", "Category", "Room"])?;

    for item in project.line_items.values() {
        let quantity = item.quantity.to_string();
        writer.write_record([
            item.code.as_str(),
            item.description.as_str(),
            quantity.as_str(),
            item.unit.as_str(),
            item.category.label(),
            item.room_name.as_deref().unwrap_or(""),
        ])?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))?;
    String::from_utf8(buffer).map_err(|err| ExportError::Buffer(err.to_string()))
}
