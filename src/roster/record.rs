//! Normalized output records (MUSTER schema). One flat record per discovered
//! unit; serialized as camelCase JSON for export and downstream rendering.

use std::collections::BTreeMap;

use serde::Serialize;

/// Flat unit card: everything display/export needs for one unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRecord {
    pub name: String,
    /// Category names, source order.
    pub keywords: Vec<String>,
    pub generic_abilities: Vec<Ability>,
    pub unique_abilities: Vec<Ability>,
    /// One entry per distinct model statline.
    pub characteristics: Vec<StatProfile>,
    pub weapons: Vec<WeaponEntry>,
    pub wargear: Vec<WargearEntry>,
    pub enhancements: Vec<EnhancementEntry>,
    /// Human-readable model count, e.g. "5 models".
    pub composition: String,
}

/// Ability with its rule text when the export carries one. Synthesized
/// entries (e.g. "Capacity: 6") have no description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ability {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One model statline. Values stay textual ("6\"", "3+") as exported.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatProfile {
    pub name: String,
    #[serde(rename = "M")]
    pub movement: String,
    #[serde(rename = "T")]
    pub toughness: String,
    #[serde(rename = "SV")]
    pub save: String,
    #[serde(rename = "W")]
    pub wounds: String,
    #[serde(rename = "LD")]
    pub leadership: String,
    #[serde(rename = "OC")]
    pub objective_control: String,
}

/// Deduplicated weapon line; identical selections aggregate into `count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeaponEntry {
    pub name: String,
    pub count: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub characteristics: BTreeMap<String, String>,
}

/// Wargear is identified by name only and never merged: each matching
/// selection yields its own entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WargearEntry {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancementEntry {
    pub name: String,
    pub count: u32,
    pub cost: Option<f64>,
}
