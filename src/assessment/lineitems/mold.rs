use super::{ItemEmitter, SCRUBBER_RENTAL_DAYS};
use crate::assessment::domain::{ItemCategory, MoldClassification, MoldDepth};

/// Baseline sample count for the pre-room assessment (one air, one surface).
const ROUGH_SAMPLE_COUNT: f64 = 2.0;

pub(crate) const REFERENCED_CODES: &[&str] = &[
    "HEPAFSH",
    "WTRGRM",
    "HMRCNT",
    "WTRCNTLF",
    "WTRNAFAN",
    "WTRDRYWLF",
    "HMRABR",
    "HMREQD",
    "HMRDIS",
    "HMRASBTS",
];

pub(crate) fn generate(mold: &MoldClassification, out: &mut ItemEmitter<'_>) {
    let geometry = out.geometry();

    out.push(
        "HEPAFSH",
        "HEPA vacuum - floor",
        geometry.floor_area_sf,
        ItemCategory::Cleaning,
    );
    out.push(
        "WTRGRM",
        "Antimicrobial application",
        geometry.floor_area_sf,
        ItemCategory::Treatment,
    );

    if mold.level >= 3 {
        out.push(
            "HMRCNT",
            "Containment setup",
            geometry.perimeter_lf,
            ItemCategory::Containment,
        );
        out.push(
            "WTRCNTLF",
            "Poly containment walls",
            geometry.perimeter_lf,
            ItemCategory::Containment,
        );
        out.push(
            "WTRNAFAN",
            "HEPA air scrubber",
            SCRUBBER_RENTAL_DAYS,
            ItemCategory::Equipment,
        );
    }

    if matches!(mold.depth, MoldDepth::Deep | MoldDepth::Hidden) {
        // Walls may not have been tagged for a mold loss; fall back to the
        // full perimeter when no selection exists.
        let wall_lf = if geometry.affected_wall_lf > 0.0 {
            geometry.affected_wall_lf
        } else {
            geometry.perimeter_lf
        };
        out.push(
            "WTRDRYWLF",
            "Drywall removal - affected area",
            wall_lf,
            ItemCategory::Demo,
        );
        out.push(
            "HMRABR",
            "Wood framing cleaning",
            geometry.floor_area_sf,
            ItemCategory::Cleaning,
        );
    }

    if mold.level >= 4 {
        out.push(
            "HMREQD",
            "Equipment decontamination",
            1.0,
            ItemCategory::Safety,
        );
        out.push(
            "HMRDIS",
            "Post-remediation fogging",
            geometry.floor_area_sf,
            ItemCategory::Treatment,
        );
    }

    if out.is_estimate() {
        out.push(
            "HMRASBTS",
            "Air/surface sampling",
            ROUGH_SAMPLE_COUNT,
            ItemCategory::Testing,
        );
    }
}
