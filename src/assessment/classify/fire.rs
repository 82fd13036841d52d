use crate::assessment::domain::{
    AnswerSet, DamageExtent, FireClassification, FireSignal, HvacExposure, OptionSignal, SootLevel,
    SootType,
};
use crate::knowledge::SeverityDefinitions;

/// S700 fire rules: soot type, extent, and residue level describe the most
/// recently confirmed observation (last write wins), while HVAC exposure is
/// sticky once any answer reports the system ran.
pub(crate) fn classify(severity: &SeverityDefinitions, answers: &AnswerSet) -> FireClassification {
    let mut soot_type = SootType::Dry;
    let mut extent = DamageExtent::Minor;
    let mut soot_level = SootLevel::Light;
    let mut hvac_affected = false;

    for answer in answers.values() {
        let OptionSignal::Fire(signal) = answer.signal else {
            continue;
        };
        match signal {
            FireSignal::Source(value) => soot_type = value,
            FireSignal::Extent(value) => extent = value,
            FireSignal::Residue(value) => soot_level = value,
            FireSignal::Hvac(HvacExposure::Possible | HvacExposure::Confirmed) => {
                hvac_affected = true;
            }
            FireSignal::Hvac(HvacExposure::Off) => {}
        }
    }

    let (soot_type_name, cleaning_method) = match severity.soot_types.get(&soot_type) {
        Some(profile) => (profile.name.to_string(), profile.cleaning.to_string()),
        None => {
            tracing::warn!(?soot_type, "no soot profile; synthesizing label");
            (soot_type.label().to_string(), String::new())
        }
    };

    FireClassification {
        soot_type,
        soot_type_name,
        cleaning_method,
        extent,
        soot_level,
        hvac_affected,
    }
}
