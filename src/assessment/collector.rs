//! Resumable walk through a damage-type question script.
//!
//! The collector is an explicit state machine decoupled from any
//! presentation layer: the UI calls [`AnswerCollector::submit_answer`] and
//! [`AnswerCollector::go_back`] and renders whatever state results.

use crate::assessment::classify::classify;
use crate::assessment::domain::{
    Answer, AnswerSet, Classification, DamageType, ValidationError,
};
use crate::knowledge::{Question, ReferenceDataset};

/// Where the flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorState {
    SelectingDamageType,
    AnsweringQuestion(usize),
    Complete,
}

/// One in-progress assessment flow. `Complete` is terminal; starting over
/// means constructing a fresh instance.
pub struct AnswerCollector<'a> {
    dataset: &'a ReferenceDataset,
    state: CollectorState,
    damage_type: Option<DamageType>,
    answers: AnswerSet,
}

impl<'a> AnswerCollector<'a> {
    pub fn new(dataset: &'a ReferenceDataset) -> Self {
        Self {
            dataset,
            state: CollectorState::SelectingDamageType,
            damage_type: None,
            answers: AnswerSet::new(),
        }
    }

    pub fn state(&self) -> CollectorState {
        self.state
    }

    pub fn damage_type(&self) -> Option<DamageType> {
        self.damage_type
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Answer previously recorded at an index, if any; still visible after
    /// navigating back until it is overwritten.
    pub fn answer_at(&self, index: usize) -> Option<&Answer> {
        self.answers.get(&index)
    }

    fn script(&self) -> Result<&'a [Question], ValidationError> {
        let damage_type = self
            .damage_type
            .ok_or(ValidationError::NoActiveQuestion)?;
        self.dataset
            .script(damage_type)
            .ok_or(ValidationError::ScriptUnavailable(damage_type))
    }

    /// Question the flow is currently waiting on, if any.
    pub fn current_question(&self) -> Option<&'a Question> {
        match self.state {
            CollectorState::AnsweringQuestion(index) => {
                self.script().ok().and_then(|script| script.get(index))
            }
            _ => None,
        }
    }

    /// Enter the question flow for a damage type with an empty answer set.
    pub fn select_damage_type(
        &mut self,
        damage_type: DamageType,
    ) -> Result<CollectorState, ValidationError> {
        if self.state != CollectorState::SelectingDamageType {
            return Err(ValidationError::DamageTypeAlreadySelected);
        }
        self.dataset
            .script(damage_type)
            .ok_or(ValidationError::ScriptUnavailable(damage_type))?;

        self.damage_type = Some(damage_type);
        self.answers.clear();
        self.state = CollectorState::AnsweringQuestion(0);
        Ok(self.state)
    }

    /// Record (or overwrite) the answer at `index` and advance. `index`
    /// must be the active question.
    pub fn submit_answer(
        &mut self,
        index: usize,
        option: usize,
    ) -> Result<CollectorState, ValidationError> {
        let active = match self.state {
            CollectorState::AnsweringQuestion(active) => active,
            _ => return Err(ValidationError::NoActiveQuestion),
        };
        if index != active {
            return Err(ValidationError::QuestionNotActive {
                submitted: index,
                active,
            });
        }

        let script = self.script()?;
        let question = &script[index];
        let selected = question
            .options
            .get(option)
            .ok_or(ValidationError::OptionOutOfRange {
                question: index,
                option,
            })?;

        self.answers.insert(
            index,
            Answer {
                prompt: question.prompt.to_string(),
                selected: selected.label.to_string(),
                signal: selected.signal,
            },
        );

        self.state = if index + 1 == script.len() {
            CollectorState::Complete
        } else {
            CollectorState::AnsweringQuestion(index + 1)
        };
        Ok(self.state)
    }

    /// Navigate backward. From question 0 this abandons the nascent answer
    /// set and returns to damage-type selection; from any later question it
    /// steps back without discarding that index's prior answer.
    pub fn go_back(&mut self) -> CollectorState {
        self.state = match self.state {
            CollectorState::AnsweringQuestion(0) => {
                self.damage_type = None;
                self.answers.clear();
                CollectorState::SelectingDamageType
            }
            CollectorState::AnsweringQuestion(index) => {
                CollectorState::AnsweringQuestion(index - 1)
            }
            other => other,
        };
        self.state
    }

    /// Classify the completed answer set.
    pub fn classification(&self) -> Result<Classification, ValidationError> {
        if self.state != CollectorState::Complete {
            return Err(ValidationError::FlowIncomplete);
        }
        let damage_type = self
            .damage_type
            .ok_or(ValidationError::FlowIncomplete)?;
        classify(self.dataset, damage_type, &self.answers)
    }
}
