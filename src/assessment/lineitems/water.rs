use super::{ItemEmitter, MONITORING_HOURS};
use crate::assessment::domain::{ItemCategory, WaterClassification};
use crate::assessment::geometry::size_equipment;
use crate::knowledge::ReferenceDataset;

/// Wick height at or below which the 2 ft flood cut suffices.
const TWO_FOOT_CUT_MAX_WICK_IN: f64 = 24.0;

/// One furniture-blocking charge covers roughly this much carpeted floor.
const BLOCKING_COVERAGE_SF: f64 = 50.0;

pub(crate) const REFERENCED_CODES: &[&str] = &[
    "WTRDRY",
    "WTRDHM",
    "WTREQ",
    "WTREXT",
    "WTREXTH",
    "WTRPAD",
    "WTRGRM",
    "WTRCNTLF",
    "WTRDRYWLF",
    "WTRDRYW4",
    "WTRINS",
    "HMRDIS",
    "WTRBLK",
];

pub(crate) fn generate(
    dataset: &ReferenceDataset,
    water: &WaterClassification,
    out: &mut ItemEmitter<'_>,
) {
    let geometry = out.geometry();
    let equipment = size_equipment(&dataset.sizing, water.class, &geometry);

    out.push(
        "WTRDRY",
        "Air mover",
        f64::from(equipment.air_movers),
        ItemCategory::Equipment,
    );
    out.push(
        "WTRDHM",
        "LGR dehumidifier",
        f64::from(equipment.dehumidifier_units),
        ItemCategory::Equipment,
    );
    out.push(
        "WTREQ",
        "Equipment setup and daily monitoring",
        MONITORING_HOURS,
        ItemCategory::Labor,
    );

    if out.floor_type().is_carpet() {
        out.push(
            "WTREXT",
            "Water extraction - carpet",
            geometry.affected_floor_sf,
            ItemCategory::Extraction,
        );
        out.push(
            "WTRPAD",
            "Carpet pad removal",
            geometry.affected_floor_sf,
            ItemCategory::Demo,
        );
    } else {
        out.push(
            "WTREXTH",
            "Water extraction - hard surface",
            geometry.affected_floor_sf,
            ItemCategory::Extraction,
        );
    }

    if water.category >= 2 {
        out.push(
            "WTRGRM",
            "Antimicrobial application",
            geometry.affected_floor_sf,
            ItemCategory::Treatment,
        );
    }

    if water.category >= 3 {
        out.push(
            "WTRCNTLF",
            "Poly containment",
            geometry.perimeter_lf,
            ItemCategory::Containment,
        );
    }

    if out.is_estimate() {
        // No wall selection exists yet; a class 2 loss has wicked into the
        // walls, so assume the full default perimeter needs a cut.
        if water.class >= 2 {
            out.push(
                "WTRDRYWLF",
                "Flood cut drywall (2 ft)",
                geometry.affected_wall_lf,
                ItemCategory::Demo,
            );
        }
    } else if geometry.affected_wall_lf > 0.0 && out.wall_wick_height_in() > 0.0 {
        if out.wall_wick_height_in() <= TWO_FOOT_CUT_MAX_WICK_IN {
            out.push(
                "WTRDRYWLF",
                "Flood cut drywall (2 ft)",
                geometry.affected_wall_lf,
                ItemCategory::Demo,
            );
        } else {
            out.push(
                "WTRDRYW4",
                "Flood cut drywall (4 ft)",
                geometry.affected_wall_lf,
                ItemCategory::Demo,
            );
        }
    }

    if water.class >= 3 {
        out.push(
            "WTRINS",
            "Insulation removal",
            geometry.affected_floor_sf,
            ItemCategory::Demo,
        );
    }

    if water.has_mold {
        out.push(
            "HMRDIS",
            "Antimicrobial fogging",
            geometry.affected_floor_sf,
            ItemCategory::Treatment,
        );
    }

    if out.floor_type().is_carpet() {
        out.push(
            "WTRBLK",
            "Block and pad furniture",
            (geometry.floor_area_sf / BLOCKING_COVERAGE_SF).ceil(),
            ItemCategory::Contents,
        );
    }
}
