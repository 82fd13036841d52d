//! Room geometry derivation and drying-equipment sizing.

use crate::assessment::domain::{EquipmentCounts, Geometry, Room, WallSide};
use crate::knowledge::{SizingFactors, FALLBACK_CLASS_FACTOR};

/// Derive the physical quantities the rule tables consume from a room's
/// measurements. Callers must reject non-positive length/width before
/// invoking; the arithmetic itself has no failure cases.
pub fn derive_geometry(room: &Room) -> Geometry {
    let floor_area_sf = room.length_ft * room.width_ft;
    let perimeter_lf = 2.0 * (room.length_ft + room.width_ft);
    let cubic_volume_cf = floor_area_sf * room.height_ft();
    let affected_wall_lf = room
        .affected_walls
        .iter()
        .map(|wall| match wall {
            WallSide::North | WallSide::South => room.width_ft,
            WallSide::East | WallSide::West => room.length_ft,
        })
        .sum();
    let affected_floor_sf = floor_area_sf * room.damage_percent / 100.0;

    Geometry {
        floor_area_sf,
        perimeter_lf,
        cubic_volume_cf,
        affected_wall_lf,
        affected_floor_sf,
    }
}

/// Size LGR dehumidifiers and air movers for a drying class.
///
/// Required AHAM pints = ceil(cubic volume / class factor); units divide by
/// the reference machine capacity. An unmodeled class number falls back to
/// the class-2 factor so equipment stays computable once geometry exists.
pub fn size_equipment(
    sizing: &SizingFactors,
    class_number: u8,
    geometry: &Geometry,
) -> EquipmentCounts {
    let factor = match sizing.lgr_class_factors.get(&class_number) {
        Some(factor) => *factor,
        None => {
            tracing::warn!(class_number, "unknown drying class; using class 2 factor");
            FALLBACK_CLASS_FACTOR
        }
    };

    let dehumidifier_pints = (geometry.cubic_volume_cf / factor).ceil() as u32;
    let dehumidifier_units =
        (f64::from(dehumidifier_pints) / sizing.dehumidifier_capacity_pints).ceil() as u32;
    let air_movers = (geometry.affected_floor_sf / sizing.air_mover_coverage_sf).ceil() as u32;

    EquipmentCounts {
        dehumidifier_pints,
        dehumidifier_units,
        air_movers,
    }
}

/// CFM required to hold a containment at the given air-changes-per-hour.
pub fn negative_air_cfm(geometry: &Geometry, air_changes_per_hour: f64) -> f64 {
    geometry.cubic_volume_cf * air_changes_per_hour / 60.0
}
