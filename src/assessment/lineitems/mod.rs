//! Deterministic line-item generation from a classification.
//!
//! Two scopes exist on purpose: `Estimate` produces a rough pre-measurement
//! list from the named default geometry, `Room` produces exact quantities
//! once a room has been measured. The rule tables differ where the field
//! workflow differs (flood-cut gating, sampling, fogging size) and those
//! differences are part of the contract.

mod fire;
mod mold;
mod water;

use crate::assessment::domain::{
    round2, Classification, DamageType, FloorType, Geometry, ItemCategory, LineItem, Room,
};
use crate::knowledge::ReferenceDataset;

/// Geometry assumed by the estimate scope before any room is measured:
/// 200 SF of affected floor under a 9 ft ceiling, realized as 20 ft x 10 ft
/// so perimeter-sized rules stay computable. Every estimate-scope item is
/// labeled as pending actual measurements.
pub const ESTIMATE_DEFAULT_GEOMETRY: Geometry = Geometry {
    floor_area_sf: 200.0,
    perimeter_lf: 60.0,
    cubic_volume_cf: 1800.0,
    affected_wall_lf: 60.0,
    affected_floor_sf: 200.0,
};

/// Ceiling height backing [`ESTIMATE_DEFAULT_GEOMETRY`].
pub const ESTIMATE_DEFAULT_HEIGHT_FT: f64 = 9.0;

/// Qualifier appended to every estimate-scope item description.
pub const ESTIMATE_PENDING_LABEL: &str = "estimate, pending actual measurements";

/// Assumed daily monitoring labor, in hours, for drying jobs.
pub(crate) const MONITORING_HOURS: f64 = 3.0;

/// Assumed air-scrubber rental days for fire and mold containments.
pub(crate) const SCRUBBER_RENTAL_DAYS: f64 = 3.0;

/// Generation scope: rough pre-room estimate or exact per-room quantities.
#[derive(Debug, Clone, Copy)]
pub enum ItemScope<'a> {
    Estimate,
    Room {
        room: &'a Room,
        geometry: &'a Geometry,
    },
}

/// Generate the deduplicated line-item list for a classification.
///
/// Pure: identical inputs always produce the identical ordered list. Every
/// emitted code resolves against the catalog (enforced at dataset load).
pub fn generate(
    dataset: &ReferenceDataset,
    classification: &Classification,
    scope: ItemScope<'_>,
) -> Vec<LineItem> {
    let mut emitter = ItemEmitter::new(dataset, scope);
    match classification {
        Classification::Water(water) => water::generate(dataset, water, &mut emitter),
        Classification::Fire(fire) => fire::generate(fire, &mut emitter),
        Classification::Mold(mold) => mold::generate(mold, &mut emitter),
    }
    emitter.finish()
}

/// Codes each damage type's rules can emit; checked against the catalog
/// when the reference dataset loads.
pub(crate) fn referenced_codes(damage_type: DamageType) -> &'static [&'static str] {
    match damage_type {
        DamageType::Water => water::REFERENCED_CODES,
        DamageType::Fire => fire::REFERENCED_CODES,
        DamageType::Mold => mold::REFERENCED_CODES,
    }
}

/// Accumulates items for one generation pass, resolving units from the
/// catalog and qualifying descriptions by scope.
pub(crate) struct ItemEmitter<'a> {
    dataset: &'a ReferenceDataset,
    room: Option<&'a Room>,
    geometry: Geometry,
    items: Vec<LineItem>,
}

impl<'a> ItemEmitter<'a> {
    fn new(dataset: &'a ReferenceDataset, scope: ItemScope<'a>) -> Self {
        let (room, geometry) = match scope {
            ItemScope::Estimate => (None, ESTIMATE_DEFAULT_GEOMETRY),
            ItemScope::Room { room, geometry } => (Some(room), *geometry),
        };
        Self {
            dataset,
            room,
            geometry,
            items: Vec::new(),
        }
    }

    pub(crate) fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub(crate) fn is_estimate(&self) -> bool {
        self.room.is_none()
    }

    /// Flooring the rules should assume; the estimate scope assumes carpet.
    pub(crate) fn floor_type(&self) -> FloorType {
        self.room
            .map(|room| room.floor_type)
            .unwrap_or(FloorType::Carpet)
    }

    pub(crate) fn wall_wick_height_in(&self) -> f64 {
        self.room.map(|room| room.wall_wick_height_in).unwrap_or(0.0)
    }

    pub(crate) fn height_ft(&self) -> f64 {
        self.room
            .map(Room::height_ft)
            .unwrap_or(ESTIMATE_DEFAULT_HEIGHT_FT)
    }

    pub(crate) fn push(
        &mut self,
        code: &str,
        description: &str,
        quantity: f64,
        category: ItemCategory,
    ) {
        let unit = match self.dataset.catalog_entry(code) {
            Some(entry) => entry.unit.to_string(),
            None => {
                // Unreachable after the startup consistency check.
                tracing::warn!(code, "code missing from catalog; defaulting unit");
                "EA".to_string()
            }
        };

        let description = match self.room {
            Some(room) => format!("{description} - {}", room.name),
            None => format!("{description} ({ESTIMATE_PENDING_LABEL})"),
        };

        self.items.push(LineItem {
            code: code.to_string(),
            description,
            quantity: round2(quantity.max(0.0)),
            unit,
            category,
            room: self.room.map(|room| room.id.clone()),
            room_name: self.room.map(|room| room.name.clone()),
        });
    }

    fn finish(self) -> Vec<LineItem> {
        self.items
    }
}
