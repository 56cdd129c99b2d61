pub mod assemble;
pub mod extract;
pub mod node;
pub mod profile;
pub mod record;
pub mod walker;

pub use assemble::{normalize, parse_unit};
pub use extract::{
    constituent_models, extract_characteristics, extract_composition, extract_enhancements,
    extract_generic_abilities, extract_unique_abilities, extract_wargear, extract_weapons,
};
pub use node::{
    CategoryRef, Characteristic, CostEntry, NodeKind, ProfileKind, ProfileNode, RuleRef,
    SelectionNode,
};
pub use profile::{characteristic_map, profile_key, stat_profile};
pub use record::{
    Ability, EnhancementEntry, StatProfile, UnitRecord, WargearEntry, WeaponEntry,
};
pub use walker::discover_units;
