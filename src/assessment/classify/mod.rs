//! Pure classification rules mapping an accumulated answer set to a
//! severity classification. Worst-observed-condition wins for the
//! safety-critical fields; purely descriptive fields are last-write-wins.

mod fire;
mod mold;
mod water;

use crate::assessment::domain::{AnswerSet, Classification, DamageType, ValidationError};
use crate::knowledge::ReferenceDataset;

/// Classify a completed answer set for the given damage type.
///
/// Deterministic and total over answer sets drawn from the matching
/// question script; answers from another script or beyond the script
/// length are rejected up front so the rules never see them.
pub fn classify(
    dataset: &ReferenceDataset,
    damage_type: DamageType,
    answers: &AnswerSet,
) -> Result<Classification, ValidationError> {
    let script = dataset
        .script(damage_type)
        .ok_or(ValidationError::ScriptUnavailable(damage_type))?;

    for (&index, answer) in answers {
        if index >= script.len() {
            return Err(ValidationError::AnswerBeyondScript {
                index,
                script_len: script.len(),
            });
        }
        let found = answer.signal.damage_type();
        if found != damage_type {
            return Err(ValidationError::MismatchedScript {
                index,
                expected: damage_type,
                found,
            });
        }
    }

    Ok(match damage_type {
        DamageType::Water => Classification::Water(water::classify(&dataset.severity, answers)),
        DamageType::Fire => Classification::Fire(fire::classify(&dataset.severity, answers)),
        DamageType::Mold => Classification::Mold(mold::classify(&dataset.severity, answers)),
    })
}
