//! Immutable reference dataset: severity definitions, sizing factors,
//! question scripts, room profiles, and the estimate-code catalog.
//!
//! Loaded once at startup; [`ReferenceDataset::load`] runs a consistency
//! check so a code referenced by the generation rules without a catalog
//! entry is a startup failure, never a generation-time surprise.

mod catalog;
mod questions;
mod rooms;
mod severity;
mod sizing;

use std::collections::BTreeMap;

use crate::assessment::domain::{DamageType, RoomKind};
use crate::assessment::lineitems;
use crate::config::EquipmentTunables;

pub use catalog::CatalogEntry;
pub use questions::{Question, QuestionOption};
pub use rooms::RoomProfile;
pub use severity::{
    RemediationLevelProfile, SeverityDefinitions, SootProfile, WaterCategoryProfile,
    WaterClassProfile,
};
pub use sizing::{ContainmentPurpose, SizingFactors, FALLBACK_CLASS_FACTOR};

/// Fatal inconsistency in the reference data; aborts startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("line-item code {code} referenced by the {damage_type:?} rules has no catalog entry")]
    MissingCatalogEntry {
        damage_type: DamageType,
        code: String,
    },
    #[error("no question script registered for {0:?}")]
    MissingQuestionScript(DamageType),
    #[error("severity definitions missing for {0:?}")]
    MissingSeverityDefinitions(DamageType),
    #[error("question {question} of the {expected:?} script carries a {found:?} payload")]
    ForeignScriptPayload {
        expected: DamageType,
        found: DamageType,
        question: usize,
    },
}

/// The fully-resolved in-memory reference dataset.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    pub severity: SeverityDefinitions,
    pub sizing: SizingFactors,
    pub question_scripts: BTreeMap<DamageType, Vec<Question>>,
    pub room_profiles: BTreeMap<RoomKind, RoomProfile>,
    pub catalog: BTreeMap<String, CatalogEntry>,
}

impl ReferenceDataset {
    /// Build the dataset and verify it is internally consistent.
    pub fn load(tunables: &EquipmentTunables) -> Result<Self, ConfigurationError> {
        let dataset = Self {
            severity: severity::load(),
            sizing: sizing::load(tunables),
            question_scripts: questions::load(),
            room_profiles: rooms::load(),
            catalog: catalog::load(),
        };
        dataset.verify_consistency()?;
        tracing::debug!(
            codes = dataset.catalog.len(),
            scripts = dataset.question_scripts.len(),
            "reference dataset loaded"
        );
        Ok(dataset)
    }

    pub fn script(&self, damage_type: DamageType) -> Option<&[Question]> {
        self.question_scripts
            .get(&damage_type)
            .map(Vec::as_slice)
    }

    pub fn catalog_entry(&self, code: &str) -> Option<&CatalogEntry> {
        self.catalog.get(code)
    }

    pub fn room_profile(&self, kind: RoomKind) -> Option<&RoomProfile> {
        self.room_profiles.get(&kind)
    }

    fn verify_consistency(&self) -> Result<(), ConfigurationError> {
        for damage_type in DamageType::ALL {
            let script = self
                .question_scripts
                .get(&damage_type)
                .filter(|script| !script.is_empty())
                .ok_or(ConfigurationError::MissingQuestionScript(damage_type))?;

            for (question, record) in script.iter().enumerate() {
                for option in &record.options {
                    let found = option.signal.damage_type();
                    if found != damage_type {
                        return Err(ConfigurationError::ForeignScriptPayload {
                            expected: damage_type,
                            found,
                            question,
                        });
                    }
                }
            }

            let has_definitions = match damage_type {
                DamageType::Water => {
                    !self.severity.water_categories.is_empty()
                        && !self.severity.water_classes.is_empty()
                }
                DamageType::Fire => !self.severity.soot_types.is_empty(),
                DamageType::Mold => !self.severity.mold_levels.is_empty(),
            };
            if !has_definitions {
                return Err(ConfigurationError::MissingSeverityDefinitions(damage_type));
            }

            for code in lineitems::referenced_codes(damage_type) {
                if !self.catalog.contains_key(*code) {
                    return Err(ConfigurationError::MissingCatalogEntry {
                        damage_type,
                        code: (*code).to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
