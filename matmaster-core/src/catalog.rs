//! Static SAP lookup tables.
//!
//! These tables are the only knowledge the suggestion scorer consults. Order
//! matters: ties in scoring are broken by table order.

use serde::Serialize;
use utoipa::ToSchema;

/// A code with its human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CodeEntry {
    pub code: &'static str,
    pub description: &'static str,
}

const fn entry(code: &'static str, description: &'static str) -> CodeEntry {
    CodeEntry { code, description }
}

pub const MATERIAL_TYPES: &[CodeEntry] = &[
    entry("ZDRL", "Drilling Materials"),
    entry("ZCHM", "Chemical Materials"),
    entry("ZELE", "Electrical Materials"),
    entry("ZPIP", "Piping Materials"),
    entry("ZSTL", "Steel Materials"),
    entry("ZCEM", "Cement Materials"),
];

pub const BASE_UNITS_OF_MEASURE: &[CodeEntry] = &[
    entry("EA", "Each"),
    entry("PCS", "Pieces"),
    entry("KG", "Kilogram"),
    entry("M", "Meter"),
    entry("LTR", "Liter"),
    entry("FT", "Feet"),
    entry("BAG", "Bag"),
    entry("MT", "Metric Ton"),
    entry("L", "Length"),
    entry("CM", "Centimeter"),
    entry("MM", "Millimeter"),
    entry("IN", "Inch"),
    entry("GAL", "Gallon"),
    entry("BBL", "Barrel"),
];

pub const INDUSTRY_SECTORS: &[CodeEntry] = &[
    entry("O", "Oil & Gas Industry"),
    entry("C", "Chemical Industry"),
    entry("M", "Manufacturing Industry"),
    entry("B", "Construction Industry"),
    entry("E", "Electrical Industry"),
    entry("P", "Petrochemical Industry"),
    entry("R", "Refinery Industry"),
];

/// Material groups keyed by material type, in display order.
pub const MATERIAL_GROUPS: &[(&str, &[CodeEntry])] = &[
    (
        "ZDRL",
        &[
            entry("43JDX", "SELF INDEXING GUIDE"),
            entry("43KLM", "DRILLING TOOLS"),
            entry("43MNP", "DRILL BITS"),
            entry("43ABC", "DRILL PIPES"),
            entry("43DEF", "DRILL COLLARS"),
            entry("43GHI", "DRILLING ACCESSORIES"),
        ],
    ),
    (
        "ZCHM",
        &[
            entry("44ABC", "CHEMICAL COMPOUNDS"),
            entry("44DEF", "DRILLING FLUIDS"),
            entry("44GHI", "CEMENT ADDITIVES"),
            entry("44JKL", "CORROSION INHIBITORS"),
            entry("44MNO", "CLEANING CHEMICALS"),
            entry("44PQR", "PRODUCTION CHEMICALS"),
        ],
    ),
    (
        "ZELE",
        &[
            entry("45XYZ", "ELECTRICAL COMPONENTS"),
            entry("45UVW", "CONTROL SYSTEMS"),
            entry("45RST", "POWER SUPPLIES"),
            entry("45ABC", "CABLES & WIRING"),
            entry("45DEF", "INSTRUMENTATION"),
            entry("45GHI", "ELECTRICAL PANELS"),
        ],
    ),
    (
        "ZPIP",
        &[
            entry("46ABC", "STEEL PIPES"),
            entry("46DEF", "PIPE FITTINGS"),
            entry("46GHI", "VALVES"),
            entry("46JKL", "FLANGES"),
            entry("46MNO", "GASKETS"),
            entry("46PQR", "PIPE SUPPORTS"),
        ],
    ),
    (
        "ZSTL",
        &[
            entry("47ABC", "STRUCTURAL STEEL"),
            entry("47DEF", "STEEL BARS"),
            entry("47GHI", "STEEL PLATES"),
            entry("47JKL", "STEEL TUBES"),
            entry("47MNO", "STEEL FASTENERS"),
            entry("47PQR", "STEEL MESH"),
        ],
    ),
    (
        "ZCEM",
        &[
            entry("48ABC", "PORTLAND CEMENT"),
            entry("48DEF", "CEMENT ADDITIVES"),
            entry("48GHI", "CONCRETE MIX"),
            entry("48JKL", "CEMENT SLURRY"),
            entry("48MNO", "GROUT MATERIALS"),
            entry("48PQR", "CEMENT RETARDERS"),
        ],
    ),
];

pub const MATERIAL_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "ZDRL",
        &["drill", "drilling", "bit", "pipe", "collar", "guide", "tool", "bore", "hole"],
    ),
    (
        "ZCHM",
        &["chemical", "fluid", "cement", "additive", "compound", "inhibitor", "cleaning", "production"],
    ),
    (
        "ZELE",
        &["electrical", "cable", "wire", "power", "control", "system", "panel", "instrument"],
    ),
    (
        "ZPIP",
        &["pipe", "piping", "fitting", "valve", "flange", "gasket", "support", "tube"],
    ),
    (
        "ZSTL",
        &["steel", "structural", "bar", "plate", "fastener", "mesh", "metal", "iron"],
    ),
    (
        "ZCEM",
        &["cement", "concrete", "portland", "grout", "slurry", "retarder", "mix"],
    ),
];

pub const UNIT_KEYWORDS: &[(&str, &[&str])] = &[
    ("EA", &["each", "piece", "item", "unit", "component", "part"]),
    ("PCS", &["pieces", "parts", "components", "items"]),
    ("KG", &["kilogram", "weight", "mass", "powder", "chemical", "additive"]),
    ("M", &["meter", "length", "pipe", "cable", "wire", "rod", "bar"]),
    ("LTR", &["liter", "liquid", "fluid", "chemical", "oil"]),
    ("FT", &["feet", "foot", "length", "pipe", "cable"]),
    ("BAG", &["bag", "sack", "cement", "powder", "additive"]),
    ("MT", &["metric ton", "tonne", "bulk", "steel", "cement"]),
    ("BBL", &["barrel", "oil", "chemical", "fluid"]),
    ("GAL", &["gallon", "liquid", "paint", "chemical"]),
];

pub const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    ("O", &["oil", "gas", "petroleum", "drilling", "upstream", "downstream", "refinery"]),
    ("C", &["chemical", "petrochemical", "process", "reaction", "catalyst"]),
    ("M", &["manufacturing", "production", "assembly", "fabrication"]),
    ("B", &["construction", "building", "infrastructure", "concrete", "structural"]),
    ("E", &["electrical", "power", "energy", "electronics", "instrumentation"]),
    ("P", &["petrochemical", "refining", "processing", "distillation"]),
    ("R", &["refinery", "refining", "crude", "distillation", "processing"]),
];

/// Units that get a bonus when the material type is already chosen.
pub const UNIT_TYPE_AFFINITY: &[(&str, &[&str])] = &[
    ("ZDRL", &["EA", "PCS", "M", "FT"]),
    ("ZCHM", &["KG", "LTR", "BAG", "MT"]),
    ("ZELE", &["EA", "PCS", "M"]),
    ("ZPIP", &["M", "FT", "PCS", "EA"]),
    ("ZSTL", &["KG", "MT", "M", "PCS"]),
    ("ZCEM", &["BAG", "KG", "MT"]),
];

/// Industry sectors that get a bonus when the material type is already chosen.
pub const SECTOR_TYPE_AFFINITY: &[(&str, &[&str])] = &[
    ("ZDRL", &["O"]),
    ("ZCHM", &["C", "P"]),
    ("ZELE", &["E"]),
    ("ZPIP", &["O", "M"]),
    ("ZSTL", &["M", "B"]),
    ("ZCEM", &["B", "O"]),
];

/// Description words that pull a material group up when its label shares them.
pub const GROUP_DOMAIN_TERMS: &[(&str, &str)] = &[
    ("bit", "BITS"),
    ("drill", "DRILL"),
    ("pipe", "PIPE"),
    ("chemical", "CHEMICAL"),
    ("electrical", "ELECTRICAL"),
    ("cement", "CEMENT"),
    ("steel", "STEEL"),
];

/// A plant with its location.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Plant {
    pub code: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
}

pub const PLANT_CODES: &[Plant] = &[
    Plant { code: "P001", name: "Plant 001 - Mumbai", location: "Mumbai, India", kind: "Manufacturing" },
    Plant { code: "P002", name: "Plant 002 - Delhi", location: "Delhi, India", kind: "Assembly" },
    Plant { code: "P003", name: "Plant 003 - Bangalore", location: "Bangalore, India", kind: "R&D" },
    Plant { code: "P004", name: "Plant 004 - Chennai", location: "Chennai, India", kind: "Manufacturing" },
    Plant { code: "P005", name: "Plant 005 - Pune", location: "Pune, India", kind: "Distribution" },
];

/// Look up the entries paired with `key` in a keyed table.
pub fn lookup<'a, T: ?Sized>(table: &'a [(&'static str, &'a T)], key: &str) -> Option<&'a T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Material groups for a type, or every group when the type is unknown or empty.
pub fn material_groups_for(material_type: &str) -> Vec<&'static CodeEntry> {
    match lookup(MATERIAL_GROUPS, material_type) {
        Some(groups) => groups.iter().collect(),
        None => MATERIAL_GROUPS
            .iter()
            .flat_map(|(_, groups)| groups.iter())
            .collect(),
    }
}
