//! Pipeline orchestration: discovery, then one record per unit. Pure over
//! the input tree, so repeated runs on the same document are structurally
//! identical.

use serde_json::Value;

use super::extract::{
    extract_characteristics, extract_composition, extract_enhancements,
    extract_generic_abilities, extract_unique_abilities, extract_wargear, extract_weapons,
};
use super::node::SelectionNode;
use super::record::UnitRecord;
use super::walker::discover_units;

/// Flatten one discovered unit into its normalized record.
pub fn parse_unit(unit: &SelectionNode) -> UnitRecord {
    UnitRecord {
        name: unit.name.clone(),
        keywords: unit.categories.iter().map(|c| c.name.clone()).collect(),
        generic_abilities: extract_generic_abilities(unit),
        unique_abilities: extract_unique_abilities(unit),
        characteristics: extract_characteristics(unit),
        weapons: extract_weapons(unit),
        wargear: extract_wargear(unit),
        enhancements: extract_enhancements(unit),
        composition: extract_composition(unit),
    }
}

/// The pipeline's sole entry point: every unit-like node in the document,
/// normalized, in document order.
pub fn normalize(root: &Value) -> Vec<UnitRecord> {
    discover_units(root).iter().map(parse_unit).collect()
}
