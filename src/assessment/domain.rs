use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Primary damage type; selects the question script and rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    Water,
    Fire,
    Mold,
}

impl DamageType {
    pub const ALL: [DamageType; 3] = [DamageType::Water, DamageType::Fire, DamageType::Mold];

    pub const fn label(self) -> &'static str {
        match self {
            DamageType::Water => "Water Damage",
            DamageType::Fire => "Fire & Smoke",
            DamageType::Mold => "Mold Remediation",
        }
    }
}

/// Elapsed-time escalation carried by the "how long has the water been present" answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeModifier {
    None,
    MayUpgradeCategory,
    UpgradeCategory,
    AssumeCat3,
}

/// Visible mold growth reported during a water assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoldSighting {
    None,
    Minor,
    Major,
}

/// Fire-residue classification governing cleaning method choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SootType {
    Dry,
    Wet,
    Protein,
    Synthetic,
    Mixed,
}

impl SootType {
    pub const fn label(self) -> &'static str {
        match self {
            SootType::Dry => "Dry",
            SootType::Wet => "Wet",
            SootType::Protein => "Protein",
            SootType::Synthetic => "Synthetic",
            SootType::Mixed => "Mixed",
        }
    }
}

/// How far the smoke damage spread through the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageExtent {
    Minor,
    Moderate,
    Major,
}

/// Visible soot deposit severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SootLevel {
    OdorOnly,
    Light,
    Heavy,
    Severe,
}

/// Whether the HVAC system ran during (or after) the fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HvacExposure {
    Off,
    Possible,
    Confirmed,
}

/// Where mold growth sits relative to the material surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoldDepth {
    Surface,
    Deep,
    Hidden,
    Hvac,
}

/// State of the moisture source feeding the growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoistureState {
    Resolved,
    Active,
    Unknown,
}

/// Occupant health symptoms reported during a mold assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthSymptoms {
    None,
    Mild,
    Significant,
}

/// Classification hint carried by a water-script answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterSignal {
    Category(u8),
    ElapsedTime(TimeModifier),
    Class(u8),
    MoldObserved(MoldSighting),
}

/// Classification hint carried by a fire-script answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FireSignal {
    Source(SootType),
    Extent(DamageExtent),
    Residue(SootLevel),
    Hvac(HvacExposure),
}

/// Classification hint carried by a mold-script answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoldSignal {
    GrowthArea(u8),
    Depth(MoldDepth),
    Moisture(MoistureState),
    Health(HealthSymptoms),
}

/// Closed payload union so the classification rules can match exhaustively
/// instead of probing loosely-typed option data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSignal {
    Water(WaterSignal),
    Fire(FireSignal),
    Mold(MoldSignal),
}

impl OptionSignal {
    pub const fn damage_type(&self) -> DamageType {
        match self {
            OptionSignal::Water(_) => DamageType::Water,
            OptionSignal::Fire(_) => DamageType::Fire,
            OptionSignal::Mold(_) => DamageType::Mold,
        }
    }
}

/// Recorded answer: prompt and option label are snapshotted so the record
/// stays meaningful if the script text is revised later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub prompt: String,
    pub selected: String,
    pub signal: OptionSignal,
}

/// Answers keyed by question index, dense from 0 while a flow is in progress.
pub type AnswerSet = BTreeMap<usize, Answer>;

/// Classification produced once per completed answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "damageType", rename_all = "lowercase")]
pub enum Classification {
    Water(WaterClassification),
    Fire(FireClassification),
    Mold(MoldClassification),
}

impl Classification {
    pub const fn damage_type(&self) -> DamageType {
        match self {
            Classification::Water(_) => DamageType::Water,
            Classification::Fire(_) => DamageType::Fire,
            Classification::Mold(_) => DamageType::Mold,
        }
    }
}

/// S500 water damage outcome: contamination category plus evaporation class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterClassification {
    pub category: u8,
    pub category_name: String,
    pub category_description: String,
    pub class: u8,
    pub class_name: String,
    pub class_description: String,
    pub has_mold: bool,
    pub ppe_required: String,
    pub estimate_modifier: Option<char>,
}

/// S700 fire damage outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireClassification {
    pub soot_type: SootType,
    pub soot_type_name: String,
    pub cleaning_method: String,
    pub extent: DamageExtent,
    pub soot_level: SootLevel,
    pub hvac_affected: bool,
}

/// S520 mold remediation outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoldClassification {
    pub level: u8,
    pub level_name: String,
    pub size: String,
    pub ppe: String,
    pub containment: String,
    pub personnel: String,
    pub depth: MoldDepth,
    pub moisture_active: bool,
    pub health_concerns: bool,
}

/// Compass wall tags used for the affected-wall selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    North,
    East,
    South,
    West,
}

/// Flooring material; drives the extraction and contents rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorType {
    Carpet,
    Hardwood,
    Laminate,
    Tile,
    Vinyl,
    Concrete,
}

impl FloorType {
    pub const fn is_carpet(self) -> bool {
        matches!(self, FloorType::Carpet)
    }
}

/// Room archetypes with advisory scope profiles in the reference dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomKind {
    Bathroom,
    Kitchen,
    Bedroom,
    LivingRoom,
    Basement,
    Attic,
    Crawlspace,
}

/// Identifier wrapper for persisted projects.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

/// Identifier wrapper for rooms within a project.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub String);

static PROJECT_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static ROOM_SEQUENCE: AtomicU64 = AtomicU64::new(1);

impl ProjectId {
    pub fn generate() -> Self {
        let id = PROJECT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        ProjectId(format!("prj-{id:06}"))
    }
}

impl RoomId {
    pub fn generate() -> Self {
        let id = ROOM_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        RoomId(format!("room-{id:04}"))
    }
}

/// A measured room. Derived quantities are recomputed via
/// [`crate::assessment::geometry::derive_geometry`] on every save rather
/// than stored authoritatively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub kind: Option<RoomKind>,
    pub length_ft: f64,
    pub width_ft: f64,
    pub height_ft: Option<f64>,
    pub floor_type: FloorType,
    pub damage_percent: f64,
    pub wall_wick_height_in: f64,
    pub affected_walls: BTreeSet<WallSide>,
    pub notes: String,
}

impl Room {
    pub const DEFAULT_CEILING_HEIGHT_FT: f64 = 9.0;

    /// Ceiling height, defaulting to 9 ft when unmeasured.
    pub fn height_ft(&self) -> f64 {
        self.height_ft.unwrap_or(Self::DEFAULT_CEILING_HEIGHT_FT)
    }
}

/// Inbound room form data; validated before it becomes a [`Room`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDraft {
    pub id: Option<RoomId>,
    pub name: String,
    pub kind: Option<RoomKind>,
    pub length_ft: f64,
    pub width_ft: f64,
    pub height_ft: Option<f64>,
    pub floor_type: FloorType,
    pub damage_percent: f64,
    pub wall_wick_height_in: f64,
    pub affected_walls: BTreeSet<WallSide>,
    pub notes: String,
}

impl RoomDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.length_ft <= 0.0 || self.width_ft <= 0.0 {
            return Err(ValidationError::NonPositiveDimensions {
                length: self.length_ft,
                width: self.width_ft,
            });
        }
        if !(0.0..=100.0).contains(&self.damage_percent) {
            return Err(ValidationError::DamagePercentOutOfRange(self.damage_percent));
        }
        if self.wall_wick_height_in < 0.0 {
            return Err(ValidationError::NegativeWickHeight(self.wall_wick_height_in));
        }
        Ok(())
    }

    pub fn into_room(self, id: RoomId) -> Room {
        Room {
            id,
            name: self.name,
            kind: self.kind,
            length_ft: self.length_ft,
            width_ft: self.width_ft,
            height_ft: self.height_ft,
            floor_type: self.floor_type,
            damage_percent: self.damage_percent,
            wall_wick_height_in: self.wall_wick_height_in,
            affected_walls: self.affected_walls,
            notes: self.notes,
        }
    }
}

/// Quantities derived from room measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub floor_area_sf: f64,
    pub perimeter_lf: f64,
    pub cubic_volume_cf: f64,
    pub affected_wall_lf: f64,
    pub affected_floor_sf: f64,
}

/// Drying equipment counts sized from geometry and drying class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentCounts {
    pub dehumidifier_pints: u32,
    pub dehumidifier_units: u32,
    pub air_movers: u32,
}

/// Estimate category grouping for generated line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Equipment,
    Labor,
    Extraction,
    Demo,
    Treatment,
    Containment,
    Cleaning,
    Deodorization,
    Hvac,
    Contents,
    Safety,
    Testing,
}

impl ItemCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ItemCategory::Equipment => "Equipment",
            ItemCategory::Labor => "Labor",
            ItemCategory::Extraction => "Extraction",
            ItemCategory::Demo => "Demo",
            ItemCategory::Treatment => "Treatment",
            ItemCategory::Containment => "Containment",
            ItemCategory::Cleaning => "Cleaning",
            ItemCategory::Deodorization => "Deodorization",
            ItemCategory::Hvac => "HVAC",
            ItemCategory::Contents => "Contents",
            ItemCategory::Safety => "Safety",
            ItemCategory::Testing => "Testing",
        }
    }
}

/// Identity of a line item within a project: one entry per code per room
/// scope (`None` = project-level estimate items).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineItemKey {
    pub code: String,
    pub room: Option<RoomId>,
}

/// A coded, unit-quantified estimate entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub code: String,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    pub category: ItemCategory,
    pub room: Option<RoomId>,
    pub room_name: Option<String>,
}

impl LineItem {
    pub fn key(&self) -> LineItemKey {
        LineItemKey {
            code: self.code.clone(),
            room: self.room.clone(),
        }
    }
}

/// Opaque photo-attachment record produced by the capture collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoAttachment {
    pub id: String,
    pub caption: String,
    pub storage_key: String,
    pub taken_at: DateTime<Utc>,
}

/// Persisted assessment aggregate: classification, rooms, and the keyed
/// line-item map. Keying by (code, room) makes the upsert invariant
/// structural instead of a linear dedup scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub damage_type: Option<DamageType>,
    pub classification: Option<Classification>,
    pub rooms: Vec<Room>,
    #[serde(with = "line_item_map")]
    pub line_items: BTreeMap<LineItemKey, LineItem>,
    pub photos: Vec<PhotoAttachment>,
    pub notes: String,
}

impl Project {
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| &room.id == id)
    }

    /// Insert or replace a room, preserving insertion order for existing ids.
    pub fn upsert_room(&mut self, room: Room) {
        match self.rooms.iter_mut().find(|existing| existing.id == room.id) {
            Some(existing) => *existing = room,
            None => self.rooms.push(room),
        }
    }

    pub fn upsert_line_item(&mut self, item: LineItem) {
        self.line_items.insert(item.key(), item);
    }

    /// Drop every line item scoped to the given room, leaving other rooms'
    /// entries and project-level estimate items untouched.
    pub fn clear_room_items(&mut self, room: &RoomId) {
        self.line_items
            .retain(|key, _| key.room.as_ref() != Some(room));
    }

    /// Drop the project-level (pre-measurement) estimate items.
    pub fn clear_estimate_items(&mut self) {
        self.line_items.retain(|key, _| key.room.is_some());
    }
}

/// Serialize the keyed line-item map as a plain ordered sequence; the keys
/// are recoverable from each item.
mod line_item_map {
    use std::collections::BTreeMap;

    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{LineItem, LineItemKey};

    pub fn serialize<S>(
        map: &BTreeMap<LineItemKey, LineItem>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for item in map.values() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<LineItemKey, LineItem>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<LineItem>::deserialize(deserializer)?;
        Ok(items.into_iter().map(|item| (item.key(), item)).collect())
    }
}

/// Recoverable input errors surfaced to the immediate caller; these never
/// leave partial writes behind.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("room dimensions must be positive (length {length}, width {width})")]
    NonPositiveDimensions { length: f64, width: f64 },
    #[error("damage percent {0} outside the 0-100 range")]
    DamagePercentOutOfRange(f64),
    #[error("wall wick height {0} cannot be negative")]
    NegativeWickHeight(f64),
    #[error("no question script registered for {0:?}")]
    ScriptUnavailable(DamageType),
    #[error("answer index {index} exceeds the script length {script_len}")]
    AnswerBeyondScript { index: usize, script_len: usize },
    #[error("answer {index} was drawn from the {found:?} script, expected {expected:?}")]
    MismatchedScript {
        index: usize,
        expected: DamageType,
        found: DamageType,
    },
    #[error("option {option} out of range for question {question}")]
    OptionOutOfRange { question: usize, option: usize },
    #[error("question {submitted} is not the active question {active}")]
    QuestionNotActive { submitted: usize, active: usize },
    #[error("no question is currently active")]
    NoActiveQuestion,
    #[error("a damage type has already been selected for this flow")]
    DamageTypeAlreadySelected,
    #[error("the question flow has not been completed")]
    FlowIncomplete,
}

/// Round a derived quantity to two decimal places before storage.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
