use super::{ItemEmitter, SCRUBBER_RENTAL_DAYS};
use crate::assessment::domain::{FireClassification, ItemCategory, SootLevel, SootType};

pub(crate) const REFERENCED_CODES: &[&str] = &[
    "WTRNAFAN",
    "CLNFOG",
    "HEPAFSH",
    "CLNSOOT",
    "CLNSOOTW",
    "CLNSMOKE",
    "CLNSMOKEH",
    "CLNDUCT",
];

pub(crate) fn generate(fire: &FireClassification, out: &mut ItemEmitter<'_>) {
    let geometry = out.geometry();

    out.push(
        "WTRNAFAN",
        "Air scrubber",
        SCRUBBER_RENTAL_DAYS,
        ItemCategory::Equipment,
    );
    out.push(
        "CLNFOG",
        "Thermal fogging",
        geometry.cubic_volume_cf,
        ItemCategory::Deodorization,
    );

    match fire.soot_type {
        SootType::Dry | SootType::Synthetic => {
            out.push(
                "HEPAFSH",
                "HEPA vacuum surfaces",
                geometry.floor_area_sf,
                ItemCategory::Cleaning,
            );
            out.push(
                "CLNSOOT",
                "Dry soot cleaning",
                geometry.floor_area_sf,
                ItemCategory::Cleaning,
            );
        }
        SootType::Wet | SootType::Protein | SootType::Mixed => {
            out.push(
                "CLNSOOTW",
                "Wet soot cleaning",
                geometry.floor_area_sf,
                ItemCategory::Cleaning,
            );
        }
    }

    let wall_area_sf = geometry.affected_wall_lf * out.height_ft();
    match fire.soot_level {
        SootLevel::OdorOnly | SootLevel::Light => {
            out.push(
                "CLNSMOKE",
                "Light smoke cleaning - walls",
                wall_area_sf,
                ItemCategory::Cleaning,
            );
        }
        SootLevel::Heavy | SootLevel::Severe => {
            out.push(
                "CLNSMOKEH",
                "Heavy smoke cleaning - walls",
                wall_area_sf,
                ItemCategory::Cleaning,
            );
        }
    }

    if fire.hvac_affected {
        out.push("CLNDUCT", "HVAC duct cleaning", 1.0, ItemCategory::Hvac);
    }
}
