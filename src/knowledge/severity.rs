use std::collections::BTreeMap;

use crate::assessment::domain::SootType;

/// S500 contamination category profile (1 clean through 3 grossly
/// contaminated).
#[derive(Debug, Clone, Copy)]
pub struct WaterCategoryProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub ppe_required: &'static str,
    /// Suffix appended to estimate codes for contaminated work (G/S).
    pub estimate_modifier: Option<char>,
}

/// S500 evaporation-load class profile (1 limited through 4 bound water).
#[derive(Debug, Clone, Copy)]
pub struct WaterClassProfile {
    pub name: &'static str,
    pub description: &'static str,
}

/// S520 remediation scope tier keyed by contaminated-area size.
#[derive(Debug, Clone, Copy)]
pub struct RemediationLevelProfile {
    pub size: &'static str,
    pub ppe: &'static str,
    pub containment: &'static str,
    pub personnel: &'static str,
}

/// S700 soot profile; `Mixed` residues intentionally have no entry and fall
/// back to a synthesized label at classification time.
#[derive(Debug, Clone, Copy)]
pub struct SootProfile {
    pub name: &'static str,
    pub cleaning: &'static str,
    pub caution: &'static str,
}

/// Severity lookup tables for all three damage types.
#[derive(Debug, Clone)]
pub struct SeverityDefinitions {
    pub water_categories: BTreeMap<u8, WaterCategoryProfile>,
    pub water_classes: BTreeMap<u8, WaterClassProfile>,
    pub mold_levels: BTreeMap<u8, RemediationLevelProfile>,
    pub soot_types: BTreeMap<SootType, SootProfile>,
}

pub(crate) fn load() -> SeverityDefinitions {
    let water_categories = BTreeMap::from([
        (
            1,
            WaterCategoryProfile {
                name: "Category 1 - Clean Water",
                description: "Water from a sanitary source with no substantial health risk",
                ppe_required: "Basic - gloves recommended",
                estimate_modifier: None,
            },
        ),
        (
            2,
            WaterCategoryProfile {
                name: "Category 2 - Gray Water",
                description: "Water with significant contamination, potential health risk",
                ppe_required: "Enhanced - respirator, gloves, coveralls",
                estimate_modifier: Some('G'),
            },
        ),
        (
            3,
            WaterCategoryProfile {
                name: "Category 3 - Black Water",
                description: "Grossly unsanitary water with pathogenic agents",
                ppe_required: "Full PPE - full-face respirator, suit, rubber boots, double gloves",
                estimate_modifier: Some('S'),
            },
        ),
    ]);

    let water_classes = BTreeMap::from([
        (
            1,
            WaterClassProfile {
                name: "Class 1 - Slow Evaporation",
                description: "Least amount of water affecting a limited area",
            },
        ),
        (
            2,
            WaterClassProfile {
                name: "Class 2 - Fast Evaporation",
                description: "Large area with significant moisture, wicking up to 24 inches",
            },
        ),
        (
            3,
            WaterClassProfile {
                name: "Class 3 - Fastest Evaporation",
                description: "Greatest amount of moisture, overhead water, saturated surfaces",
            },
        ),
        (
            4,
            WaterClassProfile {
                name: "Class 4 - Specialty Drying",
                description: "Bound water in dense, low-porosity materials",
            },
        ),
    ]);

    let mold_levels = BTreeMap::from([
        (
            1,
            RemediationLevelProfile {
                size: "10 square feet or less",
                ppe: "N95 respirator, gloves",
                containment: "Minimal - work area isolation",
                personnel: "Building maintenance staff",
            },
        ),
        (
            2,
            RemediationLevelProfile {
                size: "10-30 square feet",
                ppe: "N95 respirator, gloves, coveralls",
                containment: "Limited - plastic sheeting",
                personnel: "Trained maintenance staff",
            },
        ),
        (
            3,
            RemediationLevelProfile {
                size: "30-100 square feet",
                ppe: "Full PPE required",
                containment: "Full containment with negative air",
                personnel: "Professional remediation recommended",
            },
        ),
        (
            4,
            RemediationLevelProfile {
                size: "100+ square feet",
                ppe: "Full PPE with supplied air if needed",
                containment: "Full containment, decontamination chamber",
                personnel: "Professional remediation required",
            },
        ),
        (
            5,
            RemediationLevelProfile {
                size: "HVAC system contamination",
                ppe: "Full PPE required",
                containment: "Ductwork isolation, negative air",
                personnel: "HVAC cleaning specialist plus remediator",
            },
        ),
    ]);

    let soot_types = BTreeMap::from([
        (
            SootType::Dry,
            SootProfile {
                name: "Dry Soot",
                cleaning: "HEPA vacuum first, then dry-chem sponge",
                caution: "Falls into cracks easily - careful not to spread",
            },
        ),
        (
            SootType::Wet,
            SootProfile {
                name: "Wet/Oily Soot",
                cleaning: "Degreasers, specialized detergents, wet sponging",
                caution: "Do not wipe without proper cleaners - will spread",
            },
        ),
        (
            SootType::Protein,
            SootProfile {
                name: "Protein Soot",
                cleaning: "Enzyme cleaners, ozone/hydroxyl for odor",
                caution: "Detected by smell more than sight",
            },
        ),
        (
            SootType::Synthetic,
            SootProfile {
                name: "Synthetic Soot",
                cleaning: "Alkaline solutions, dry-chem sponge after HEPA",
                caution: "Very adhesive - sticks to everything",
            },
        ),
    ]);

    SeverityDefinitions {
        water_categories,
        water_classes,
        mold_levels,
        soot_types,
    }
}
