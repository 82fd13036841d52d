//! Assessment flow: answer collection, damage classification, geometry and
//! equipment sizing, line-item generation, and the project aggregate they
//! feed.
//!
//! The classifier and generator are pure functions; the only write points
//! are the collector mutating its own answer set and the service upserting
//! generated items into the project aggregate.

pub mod classify;
pub mod collector;
pub mod domain;
pub mod export;
pub mod geometry;
pub mod lineitems;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use classify::classify;
pub use collector::{AnswerCollector, CollectorState};
pub use domain::{
    Answer, AnswerSet, Classification, DamageExtent, DamageType, EquipmentCounts,
    FireClassification, FireSignal, FloorType, Geometry, HealthSymptoms, HvacExposure,
    ItemCategory, LineItem, LineItemKey, MoistureState, MoldClassification, MoldDepth,
    MoldSighting, MoldSignal, OptionSignal, PhotoAttachment, Project, ProjectId, Room, RoomDraft,
    RoomId, RoomKind, SootLevel, SootType, TimeModifier, ValidationError, WallSide,
    WaterClassification, WaterSignal,
};
pub use export::{conversion_request, write_csv, ConversionRequest, ExportError};
pub use geometry::{derive_geometry, negative_air_cfm, size_equipment};
pub use lineitems::{
    generate, ItemScope, ESTIMATE_DEFAULT_GEOMETRY, ESTIMATE_DEFAULT_HEIGHT_FT,
    ESTIMATE_PENDING_LABEL,
};
pub use repository::{
    MemoryProjectRepository, ProjectRepository, ProjectSummary, RepositoryError,
};
pub use service::{AssessmentService, ServiceError};
