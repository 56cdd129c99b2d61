//! Raw selection-tree data model (list-builder export schema, partial).
//! The export is loosely typed: every field may be absent depending on node
//! kind, so everything defaults. The tree is read-only input; it is walked
//! once and discarded.

use serde::Deserialize;

/// Node discriminator from the export's `type` field. Anything outside the
/// three kinds the pipeline cares about collapses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum NodeKind {
    Unit,
    Model,
    Upgrade,
    #[default]
    Other,
}

impl From<String> for NodeKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "unit" => Self::Unit,
            "model" => Self::Model,
            "upgrade" => Self::Upgrade,
            _ => Self::Other,
        }
    }
}

/// Profile discriminator from `typeName`. The export uses human-readable
/// names ("Ranged Weapons"), preserved by [ProfileKind::display_name].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum ProfileKind {
    Unit,
    Abilities,
    RangedWeapons,
    MeleeWeapons,
    Transport,
    #[default]
    Other,
}

impl From<String> for ProfileKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Unit" => Self::Unit,
            "Abilities" => Self::Abilities,
            "Ranged Weapons" => Self::RangedWeapons,
            "Melee Weapons" => Self::MeleeWeapons,
            "Transport" => Self::Transport,
            _ => Self::Other,
        }
    }
}

impl ProfileKind {
    pub fn is_weapon(self) -> bool {
        matches!(self, Self::RangedWeapons | Self::MeleeWeapons)
    }

    /// Original export spelling, for the normalized weapon record.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Unit => "Unit",
            Self::Abilities => "Abilities",
            Self::RangedWeapons => "Ranged Weapons",
            Self::MeleeWeapons => "Melee Weapons",
            Self::Transport => "Transport",
            Self::Other => "Other",
        }
    }
}

/// One node of the selection tree: a unit, model, or upgrade choice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionNode {
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
    #[serde(default)]
    pub rules: Vec<RuleRef>,
    #[serde(default)]
    pub profiles: Vec<ProfileNode>,
    #[serde(default)]
    pub selections: Vec<SelectionNode>,
    #[serde(default)]
    pub costs: Vec<CostEntry>,
}

/// Named, typed bundle of characteristics (a statline or weapon line).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileNode {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "typeName", default)]
    pub kind: ProfileKind,
    #[serde(default)]
    pub characteristics: Vec<Characteristic>,
}

/// Characteristic values are always textual in the export, numeric-looking
/// ones ("6", "3+") included.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Characteristic {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "$text", default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_kind_from_export_strings() {
        assert_eq!(NodeKind::from("unit".to_string()), NodeKind::Unit);
        assert_eq!(NodeKind::from("model".to_string()), NodeKind::Model);
        assert_eq!(NodeKind::from("upgrade".to_string()), NodeKind::Upgrade);
        assert_eq!(NodeKind::from("force".to_string()), NodeKind::Other);
    }

    #[test]
    fn selection_node_deserializes_with_all_fields_absent() {
        let node: SelectionNode = serde_json::from_str("{}").expect("empty object should parse");
        assert_eq!(node.kind, NodeKind::Other);
        assert!(node.selections.is_empty());
        assert!(node.number.is_none());
    }

    #[test]
    fn profile_node_reads_vendor_field_names() {
        let raw = r#"{
            "name": "Bolt rifle",
            "typeName": "Ranged Weapons",
            "characteristics": [{"name": "Range", "$text": "24\""}]
        }"#;
        let profile: ProfileNode = serde_json::from_str(raw).expect("profile should parse");
        assert_eq!(profile.kind, ProfileKind::RangedWeapons);
        assert!(profile.kind.is_weapon());
        assert_eq!(profile.characteristics[0].text, "24\"");
    }
}
