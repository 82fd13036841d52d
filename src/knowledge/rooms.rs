use std::collections::BTreeMap;

use crate::assessment::domain::RoomKind;

/// Advisory scope profile for a room archetype. Surfaced to estimators as
/// hints; the deterministic generation rules never read these.
#[derive(Debug, Clone)]
pub struct RoomProfile {
    pub typical_materials: &'static [&'static str],
    pub scope_hints: &'static [&'static str],
    pub common_codes: &'static [&'static str],
    pub notes: Option<&'static str>,
}

pub(crate) fn load() -> BTreeMap<RoomKind, RoomProfile> {
    BTreeMap::from([
        (
            RoomKind::Bathroom,
            RoomProfile {
                typical_materials: &["Tile", "Drywall", "Vanity cabinet", "Toilet", "Tub/shower"],
                scope_hints: &[
                    "Floor extraction",
                    "Vanity removal if wet",
                    "Toilet reset",
                    "Wall drying",
                ],
                common_codes: &["WTREXTH", "WTRDRYWLF"],
                notes: None,
            },
        ),
        (
            RoomKind::Kitchen,
            RoomProfile {
                typical_materials: &["Cabinets", "Flooring", "Drywall", "Appliances"],
                scope_hints: &[
                    "Floor extraction",
                    "Cabinet removal/detach",
                    "Appliance disconnect",
                ],
                common_codes: &["WTREXT", "WTRBASE"],
                notes: None,
            },
        ),
        (
            RoomKind::Bedroom,
            RoomProfile {
                typical_materials: &["Carpet", "Drywall", "Closet"],
                scope_hints: &["Carpet extraction", "Pad removal", "Flood cuts", "Contents move"],
                common_codes: &["WTREXT", "WTRPAD", "WTRDRYWLF", "CONMOV"],
                notes: None,
            },
        ),
        (
            RoomKind::LivingRoom,
            RoomProfile {
                typical_materials: &["Carpet/hardwood", "Drywall", "Large furniture"],
                scope_hints: &["Floor extraction", "Flood cuts", "Furniture protection"],
                common_codes: &["WTREXT", "WTRDRYWLF", "WTRBLK", "CONMOVH"],
                notes: None,
            },
        ),
        (
            RoomKind::Basement,
            RoomProfile {
                typical_materials: &["Concrete", "Drywall", "Insulation"],
                scope_hints: &[
                    "Full extraction",
                    "Drywall removal",
                    "Insulation removal",
                    "Dehumidification",
                ],
                common_codes: &["WTREXTH", "WTRINS", "WTRDHMD"],
                notes: Some("Often Category 3 from groundwater - full containment may be needed"),
            },
        ),
        (
            RoomKind::Attic,
            RoomProfile {
                typical_materials: &["Insulation", "Framing", "Roof sheathing"],
                scope_hints: &[
                    "Insulation removal",
                    "Structural drying",
                    "Roof repair coordination",
                ],
                common_codes: &["WTRINS", "HEPAWSH"],
                notes: None,
            },
        ),
        (
            RoomKind::Crawlspace,
            RoomProfile {
                typical_materials: &["Vapor barrier", "Insulation", "Floor joists"],
                scope_hints: &[
                    "Vapor barrier removal",
                    "Insulation removal",
                    "Floor drying from below",
                ],
                common_codes: &["WTRINS", "HMRDIS"],
                notes: Some("Confined space - additional labor for access"),
            },
        ),
    ])
}
