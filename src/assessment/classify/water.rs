use crate::assessment::domain::{
    AnswerSet, MoldSighting, OptionSignal, TimeModifier, WaterClassification, WaterSignal,
};
use crate::knowledge::SeverityDefinitions;

const MAX_CATEGORY: u8 = 3;

/// S500 water rules: category and class are running maxima over every
/// answer that supplied a hint, elapsed-time modifiers escalate the
/// category per matching answer in answer order, and the mold flag is
/// sticky once set.
pub(crate) fn classify(severity: &SeverityDefinitions, answers: &AnswerSet) -> WaterClassification {
    let mut category: u8 = 1;
    let mut class: u8 = 1;
    let mut has_mold = false;

    for answer in answers.values() {
        let OptionSignal::Water(signal) = answer.signal else {
            continue;
        };
        match signal {
            WaterSignal::Category(hint) => category = category.max(hint),
            WaterSignal::ElapsedTime(modifier) => match modifier {
                TimeModifier::UpgradeCategory | TimeModifier::AssumeCat3 => {
                    category = (category + 1).min(MAX_CATEGORY);
                }
                TimeModifier::MayUpgradeCategory if category < MAX_CATEGORY => {
                    category = category.max(2);
                }
                _ => {}
            },
            WaterSignal::Class(hint) => class = class.max(hint),
            WaterSignal::MoldObserved(MoldSighting::Minor | MoldSighting::Major) => {
                has_mold = true;
            }
            WaterSignal::MoldObserved(MoldSighting::None) => {}
        }
    }

    let (category_name, category_description, ppe_required, estimate_modifier) =
        match severity.water_categories.get(&category) {
            Some(profile) => (
                profile.name.to_string(),
                profile.description.to_string(),
                profile.ppe_required.to_string(),
                profile.estimate_modifier,
            ),
            None => {
                tracing::warn!(category, "no water category definition; synthesizing label");
                (
                    format!("Category {category}"),
                    String::new(),
                    "Basic".to_string(),
                    None,
                )
            }
        };

    let (class_name, class_description) = match severity.water_classes.get(&class) {
        Some(profile) => (profile.name.to_string(), profile.description.to_string()),
        None => {
            tracing::warn!(class, "no water class definition; synthesizing label");
            (format!("Class {class}"), String::new())
        }
    };

    WaterClassification {
        category,
        category_name,
        category_description,
        class,
        class_name,
        class_description,
        has_mold,
        ppe_required,
        estimate_modifier,
    }
}
