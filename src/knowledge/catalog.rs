use std::collections::BTreeMap;

/// Catalog record for one estimate code.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub description: &'static str,
    pub unit: &'static str,
}

/// Estimate-code catalog covering every code the generation rules can emit
/// plus the quick-reference codes estimators reach for by hand. The unit of
/// measure recorded here is authoritative for generated items.
pub(crate) fn load() -> BTreeMap<String, CatalogEntry> {
    let entries: [(&str, &str, &str); 36] = [
        // Water extraction and drying
        ("WTREXT", "Water extraction with carpet wand", "SF"),
        ("WTREXTH", "Water extraction - hard surfaces", "SF"),
        ("WTRDRY", "Air mover rental (per 24 hr period)", "EA"),
        ("WTRDHM", "Dehumidifier rental (per 24 hr period)", "EA"),
        ("WTRDHMD", "Desiccant dehumidifier", "EA"),
        ("WTRNAFAN", "Air filtration device / HEPA scrubber", "DAY"),
        ("WTRNEG", "Negative air machine", "DAY"),
        ("WTREQ", "Equipment setup, monitoring, and removal", "HR"),
        // Water demolition
        ("WTRDRYWLF", "Drywall flood cut - 2 ft", "LF"),
        ("WTRDRYW4", "Drywall flood cut - 4 ft", "LF"),
        ("WTRINS", "Insulation removal and bagging", "SF"),
        ("WTRFCC", "Carpet removal and disposal", "SF"),
        ("WTRPAD", "Carpet pad removal", "SF"),
        ("WTRBASE", "Baseboard removal", "LF"),
        // Water treatment and containment
        ("WTRGRM", "Antimicrobial application", "SF"),
        ("WTRGRMB", "Antimicrobial - botanical product", "SF"),
        ("WTRCNTLF", "Containment wall installation", "LF"),
        ("WTRBLK", "Block and pad under furniture", "RM"),
        // Fire and smoke cleaning
        ("CLNSOOT", "Soot cleaning - dry method", "SF"),
        ("CLNSOOTW", "Soot cleaning - wet method", "SF"),
        ("CLNSMOKE", "Smoke residue cleaning", "SF"),
        ("CLNSMOKEH", "Smoke residue cleaning - heavy", "SF"),
        ("CLNOZONE", "Ozone treatment", "HR"),
        ("CLNFOG", "Thermal fogging", "CF"),
        ("CLNHYDROX", "Hydroxyl treatment", "DAY"),
        ("CLNDUCT", "HVAC ductwork cleaning", "EA"),
        // HEPA vacuuming
        ("HEPAFSH", "HEPA vacuum exposed framing - floors", "SF"),
        ("HEPAWSH", "HEPA vacuum exposed framing - walls", "SF"),
        // Mold remediation
        ("HMRDIS", "Disinfecting via fog", "SF"),
        ("HMREQD", "Equipment decontamination", "EA"),
        ("HMRASBTS", "Sample collection and lab testing", "EA"),
        ("HMRCNT", "Mold containment setup", "LF"),
        ("HMRHEPAW", "HEPA vacuum mold-affected surfaces", "SF"),
        ("HMRABR", "Abrasive cleaning - wood framing", "SF"),
        // Contents
        ("CONMOV", "Content manipulation - move within room", "RM"),
        ("CONMOVH", "Content manipulation - heavy items", "RM"),
    ];

    entries
        .into_iter()
        .map(|(code, description, unit)| (code.to_string(), CatalogEntry { description, unit }))
        .collect()
}
