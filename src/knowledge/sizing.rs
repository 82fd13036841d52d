use std::collections::BTreeMap;

use crate::config::EquipmentTunables;

/// Containment purposes with a recommended negative-air exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContainmentPurpose {
    MoldRemediation,
    Cat3Water,
    SmokeCleanup,
    Asbestos,
}

/// Numeric factors behind the equipment-count formulas.
///
/// Dehumidifier tables map drying class to the cubic-feet divisor that
/// yields required AHAM pints; the reference unit capacity and air-mover
/// coverage come from the equipment tunables.
#[derive(Debug, Clone)]
pub struct SizingFactors {
    pub lgr_class_factors: BTreeMap<u8, f64>,
    pub conventional_class_factors: BTreeMap<u8, f64>,
    pub desiccant_class_factors: BTreeMap<u8, f64>,
    pub air_mover_coverage_sf: f64,
    pub dehumidifier_capacity_pints: f64,
    pub negative_air_ach: BTreeMap<ContainmentPurpose, f64>,
}

/// Divisor assumed when a class has no table entry; matches the class-2 LGR
/// factor so equipment stays computable for any input.
pub const FALLBACK_CLASS_FACTOR: f64 = 50.0;

pub(crate) fn load(tunables: &EquipmentTunables) -> SizingFactors {
    SizingFactors {
        lgr_class_factors: BTreeMap::from([(1, 100.0), (2, 50.0), (3, 40.0), (4, 40.0)]),
        conventional_class_factors: BTreeMap::from([(1, 100.0), (2, 40.0), (3, 30.0)]),
        desiccant_class_factors: BTreeMap::from([(1, 60.0), (2, 30.0), (3, 20.0), (4, 30.0)]),
        air_mover_coverage_sf: tunables.air_mover_coverage_sf,
        dehumidifier_capacity_pints: tunables.dehumidifier_capacity_pints,
        negative_air_ach: BTreeMap::from([
            (ContainmentPurpose::MoldRemediation, 4.0),
            (ContainmentPurpose::Cat3Water, 4.0),
            (ContainmentPurpose::SmokeCleanup, 4.0),
            (ContainmentPurpose::Asbestos, 6.0),
        ]),
    }
}
