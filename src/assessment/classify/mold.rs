use crate::assessment::domain::{
    AnswerSet, HealthSymptoms, MoistureState, MoldClassification, MoldDepth, MoldSignal,
    OptionSignal,
};
use crate::knowledge::SeverityDefinitions;

const HVAC_CONTAMINATION_LEVEL: u8 = 5;

/// S520 mold rules: the remediation level is a running maximum, depth is
/// last-write-wins (an HVAC depth forces the dedicated HVAC level when the
/// dataset defines one), and the moisture/health flags are sticky.
pub(crate) fn classify(severity: &SeverityDefinitions, answers: &AnswerSet) -> MoldClassification {
    let mut level: u8 = 1;
    let mut depth = MoldDepth::Surface;
    let mut moisture_active = false;
    let mut health_concerns = false;

    for answer in answers.values() {
        let OptionSignal::Mold(signal) = answer.signal else {
            continue;
        };
        match signal {
            MoldSignal::GrowthArea(hint) => level = level.max(hint),
            MoldSignal::Depth(value) => {
                depth = value;
                if matches!(value, MoldDepth::Hvac)
                    && severity.mold_levels.contains_key(&HVAC_CONTAMINATION_LEVEL)
                {
                    level = level.max(HVAC_CONTAMINATION_LEVEL);
                }
            }
            MoldSignal::Moisture(MoistureState::Active) => moisture_active = true,
            MoldSignal::Moisture(_) => {}
            MoldSignal::Health(HealthSymptoms::Mild | HealthSymptoms::Significant) => {
                health_concerns = true;
            }
            MoldSignal::Health(HealthSymptoms::None) => {}
        }
    }

    let (size, ppe, containment, personnel) = match severity.mold_levels.get(&level) {
        Some(profile) => (
            profile.size.to_string(),
            profile.ppe.to_string(),
            profile.containment.to_string(),
            profile.personnel.to_string(),
        ),
        None => {
            tracing::warn!(level, "no remediation level definition; synthesizing label");
            (
                "Unknown".to_string(),
                "N95 respirator".to_string(),
                "None".to_string(),
                "Building maintenance".to_string(),
            )
        }
    };

    MoldClassification {
        level,
        level_name: format!("Level {level}"),
        size,
        ppe,
        containment,
        personnel,
        depth,
        moisture_active,
        health_concerns,
    }
}
