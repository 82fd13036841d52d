//! Estimating aid for property-damage restoration contractors: classifies
//! water, fire, and mold damage against the industry severity standards,
//! derives drying-equipment counts from room geometry, and generates a
//! deduplicated, coded line-item list for the repair estimate.
//!
//! The crate is UI-agnostic. A presentation layer drives the
//! [`assessment::AnswerCollector`] state machine, hands the resulting
//! classification to an [`assessment::AssessmentService`], and renders the
//! project aggregate the service maintains.

pub mod assessment;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod telemetry;

pub use error::Error;
