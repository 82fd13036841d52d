use std::collections::BTreeMap;

use crate::assessment::domain::{
    DamageExtent, DamageType, FireSignal, HealthSymptoms, HvacExposure, MoistureState, MoldDepth,
    MoldSighting, MoldSignal, OptionSignal, SootLevel, SootType, TimeModifier, WaterSignal,
};

/// One selectable answer with its typed classification payload.
#[derive(Debug, Clone)]
pub struct QuestionOption {
    pub label: &'static str,
    pub signal: OptionSignal,
}

/// One scripted question with its ordered options.
#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: &'static str,
    pub options: Vec<QuestionOption>,
}

fn option(label: &'static str, signal: OptionSignal) -> QuestionOption {
    QuestionOption { label, signal }
}

fn water(label: &'static str, signal: WaterSignal) -> QuestionOption {
    option(label, OptionSignal::Water(signal))
}

fn fire(label: &'static str, signal: FireSignal) -> QuestionOption {
    option(label, OptionSignal::Fire(signal))
}

fn mold(label: &'static str, signal: MoldSignal) -> QuestionOption {
    option(label, OptionSignal::Mold(signal))
}

fn water_script() -> Vec<Question> {
    vec![
        Question {
            prompt: "What is the water source?",
            options: vec![
                water("Clean supply line / sink overflow", WaterSignal::Category(1)),
                water("Dishwasher / washing machine", WaterSignal::Category(2)),
                water("Toilet overflow (no feces)", WaterSignal::Category(2)),
                water("Toilet overflow with feces / sewage", WaterSignal::Category(3)),
                water("Flood water / ground water", WaterSignal::Category(3)),
                water("Unknown / standing for days", WaterSignal::Category(3)),
            ],
        },
        Question {
            prompt: "How long has the water been present?",
            options: vec![
                water(
                    "Less than 24 hours",
                    WaterSignal::ElapsedTime(TimeModifier::None),
                ),
                water(
                    "24-48 hours",
                    WaterSignal::ElapsedTime(TimeModifier::MayUpgradeCategory),
                ),
                water(
                    "More than 48 hours",
                    WaterSignal::ElapsedTime(TimeModifier::UpgradeCategory),
                ),
                water(
                    "Unknown / several days",
                    WaterSignal::ElapsedTime(TimeModifier::AssumeCat3),
                ),
            ],
        },
        Question {
            prompt: "What materials are affected?",
            options: vec![
                water("Carpet only", WaterSignal::Class(1)),
                water("Carpet and pad, walls under 2 ft", WaterSignal::Class(2)),
                water("Walls over 2 ft, ceiling, insulation", WaterSignal::Class(3)),
                water("Hardwood floors, concrete, plaster", WaterSignal::Class(4)),
            ],
        },
        Question {
            prompt: "Approximately what percentage of the room is affected?",
            options: vec![
                water("Less than 5%", WaterSignal::Class(1)),
                water("5-40%", WaterSignal::Class(2)),
                water("More than 40%", WaterSignal::Class(3)),
            ],
        },
        Question {
            prompt: "Is there any visible mold growth?",
            options: vec![
                water("No", WaterSignal::MoldObserved(MoldSighting::None)),
                water(
                    "Yes - small spots",
                    WaterSignal::MoldObserved(MoldSighting::Minor),
                ),
                water(
                    "Yes - significant growth",
                    WaterSignal::MoldObserved(MoldSighting::Major),
                ),
            ],
        },
    ]
}

fn fire_script() -> Vec<Question> {
    vec![
        Question {
            prompt: "What was the fire source?",
            options: vec![
                fire("Kitchen fire / cooking", FireSignal::Source(SootType::Protein)),
                fire("Paper / wood fire", FireSignal::Source(SootType::Dry)),
                fire(
                    "Plastic / synthetic materials",
                    FireSignal::Source(SootType::Synthetic),
                ),
                fire("Electrical fire", FireSignal::Source(SootType::Wet)),
                fire("Unknown / mixed", FireSignal::Source(SootType::Mixed)),
            ],
        },
        Question {
            prompt: "What is the extent of smoke damage?",
            options: vec![
                fire("Contained to one room", FireSignal::Extent(DamageExtent::Minor)),
                fire(
                    "Multiple rooms affected",
                    FireSignal::Extent(DamageExtent::Moderate),
                ),
                fire(
                    "Entire structure affected",
                    FireSignal::Extent(DamageExtent::Major),
                ),
            ],
        },
        Question {
            prompt: "Is there visible soot on surfaces?",
            options: vec![
                fire(
                    "No visible soot, just odor",
                    FireSignal::Residue(SootLevel::OdorOnly),
                ),
                fire("Light soot film", FireSignal::Residue(SootLevel::Light)),
                fire("Heavy soot deposits", FireSignal::Residue(SootLevel::Heavy)),
                fire("Thick black coating", FireSignal::Residue(SootLevel::Severe)),
            ],
        },
        Question {
            prompt: "Is the HVAC system affected?",
            options: vec![
                fire("No - was off during fire", FireSignal::Hvac(HvacExposure::Off)),
                fire(
                    "Possibly - was running",
                    FireSignal::Hvac(HvacExposure::Possible),
                ),
                fire(
                    "Yes - soot visible in vents",
                    FireSignal::Hvac(HvacExposure::Confirmed),
                ),
            ],
        },
    ]
}

fn mold_script() -> Vec<Question> {
    vec![
        Question {
            prompt: "What is the size of visible mold growth?",
            options: vec![
                mold("Less than 10 square feet", MoldSignal::GrowthArea(1)),
                mold("10-30 square feet", MoldSignal::GrowthArea(2)),
                mold("30-100 square feet", MoldSignal::GrowthArea(3)),
                mold("More than 100 square feet", MoldSignal::GrowthArea(4)),
            ],
        },
        Question {
            prompt: "Where is the mold located?",
            options: vec![
                mold("Surface of materials only", MoldSignal::Depth(MoldDepth::Surface)),
                mold(
                    "Has penetrated into materials",
                    MoldSignal::Depth(MoldDepth::Deep),
                ),
                mold(
                    "In wall cavities / behind surfaces",
                    MoldSignal::Depth(MoldDepth::Hidden),
                ),
                mold("In HVAC system", MoldSignal::Depth(MoldDepth::Hvac)),
            ],
        },
        Question {
            prompt: "Is there an active moisture source?",
            options: vec![
                mold(
                    "No - moisture issue resolved",
                    MoldSignal::Moisture(MoistureState::Resolved),
                ),
                mold("Yes - still wet", MoldSignal::Moisture(MoistureState::Active)),
                mold("Unknown", MoldSignal::Moisture(MoistureState::Unknown)),
            ],
        },
        Question {
            prompt: "Are occupants experiencing health symptoms?",
            options: vec![
                mold("No symptoms reported", MoldSignal::Health(HealthSymptoms::None)),
                mold(
                    "Mild symptoms (sneezing, irritation)",
                    MoldSignal::Health(HealthSymptoms::Mild),
                ),
                mold(
                    "Significant symptoms",
                    MoldSignal::Health(HealthSymptoms::Significant),
                ),
            ],
        },
    ]
}

pub(crate) fn load() -> BTreeMap<DamageType, Vec<Question>> {
    BTreeMap::from([
        (DamageType::Water, water_script()),
        (DamageType::Fire, fire_script()),
        (DamageType::Mold, mold_script()),
    ])
}
