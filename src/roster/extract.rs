//! Category extractors: each consumes one discovered unit's subtree and
//! produces one facet of the normalized record. A unit is either itself a
//! model (standalone character) or a squad whose direct selections include
//! the constituent models; extractors resolve that once via
//! [constituent_models] and never mutate the input tree.

use std::collections::{HashMap, HashSet};

use super::node::{NodeKind, ProfileKind, ProfileNode, SelectionNode};
use super::profile::{characteristic_map, profile_key, stat_profile};
use super::record::{Ability, EnhancementEntry, StatProfile, WargearEntry, WeaponEntry};

/// Marker glyph the builder prefixes to multi-profile weapon names.
const MULTI_PROFILE_MARKER: char = '➤';

/// The model set the per-model extractors iterate: the unit itself when it
/// is a lone model, else its direct model selections. May be empty.
pub fn constituent_models(unit: &SelectionNode) -> Vec<&SelectionNode> {
    if unit.kind == NodeKind::Model {
        vec![unit]
    } else {
        unit.selections
            .iter()
            .filter(|s| s.kind == NodeKind::Model)
            .collect()
    }
}

/// Distinct model statlines, first-seen order. N identical models collapse
/// to one entry. Falls back to the unit node's own profiles when no
/// constituent model carries a Unit-typed profile.
pub fn extract_characteristics(unit: &SelectionNode) -> Vec<StatProfile> {
    if unit.kind == NodeKind::Model {
        return unit
            .profiles
            .iter()
            .find(|p| p.kind == ProfileKind::Unit)
            .map(stat_profile)
            .into_iter()
            .collect();
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for model in unit.selections.iter().filter(|s| s.kind == NodeKind::Model) {
        collect_unit_profiles(model, &mut seen, &mut out);
    }
    if out.is_empty() {
        collect_unit_profiles(unit, &mut seen, &mut out);
    }
    out
}

fn collect_unit_profiles(
    node: &SelectionNode,
    seen: &mut HashSet<String>,
    out: &mut Vec<StatProfile>,
) {
    for profile in node.profiles.iter().filter(|p| p.kind == ProfileKind::Unit) {
        if seen.insert(profile_key(profile)) {
            out.push(stat_profile(profile));
        }
    }
}

/// Weapons from every nested selection under each constituent model,
/// deduplicated by cleaned name + characteristic map and count-aggregated
/// across the whole unit. First-seen order is preserved for display.
pub fn extract_weapons(unit: &SelectionNode) -> Vec<WeaponEntry> {
    let mut entries: Vec<WeaponEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for model in constituent_models(unit) {
        scan_weapons(&model.selections, &mut entries, &mut index);
    }
    entries
}

fn scan_weapons(
    selections: &[SelectionNode],
    entries: &mut Vec<WeaponEntry>,
    index: &mut HashMap<String, usize>,
) {
    for sel in selections {
        if sel.kind == NodeKind::Upgrade {
            for profile in sel.profiles.iter().filter(|p| p.kind.is_weapon()) {
                add_weapon(profile, sel.number.unwrap_or(1), entries, index);
            }
        }
        scan_weapons(&sel.selections, entries, index);
    }
}

fn add_weapon(
    profile: &ProfileNode,
    count: u32,
    entries: &mut Vec<WeaponEntry>,
    index: &mut HashMap<String, usize>,
) {
    let name = clean_weapon_name(&profile.name);
    let characteristics = characteristic_map(profile);

    let mut key = name.clone();
    for (ch_name, ch_text) in &characteristics {
        key.push('|');
        key.push_str(ch_name);
        key.push(':');
        key.push_str(ch_text);
    }

    let at = *index.entry(key).or_insert_with(|| {
        entries.push(WeaponEntry {
            name,
            count: 0,
            kind: profile.kind.display_name().to_string(),
            characteristics,
        });
        entries.len() - 1
    });
    entries[at].count += count;
}

fn clean_weapon_name(name: &str) -> String {
    name.strip_prefix(MULTI_PROFILE_MARKER)
        .map(str::trim_start)
        .unwrap_or(name)
        .to_string()
}

/// Wargear: upgrades outside any enhancement group that carry at least one
/// Abilities profile. Identified by name only; repeated matches each yield
/// their own entry, never merged (asymmetric to weapons on purpose).
pub fn extract_wargear(unit: &SelectionNode) -> Vec<WargearEntry> {
    let mut out = Vec::new();
    for model in constituent_models(unit) {
        scan_wargear(&model.selections, &mut out);
    }
    out
}

fn scan_wargear(selections: &[SelectionNode], out: &mut Vec<WargearEntry>) {
    for sel in selections {
        let qualifies = sel.kind == NodeKind::Upgrade
            && !in_enhancement_group(sel)
            && sel.profiles.iter().any(|p| p.kind == ProfileKind::Abilities);
        if qualifies {
            out.push(WargearEntry {
                name: sel.name.clone(),
                count: sel.number.unwrap_or(1),
            });
        }
        scan_wargear(&sel.selections, out);
    }
}

/// Enhancements: upgrades whose group label names an enhancement. They do
/// not stack, so count is fixed at 1 per match.
pub fn extract_enhancements(unit: &SelectionNode) -> Vec<EnhancementEntry> {
    let mut out = Vec::new();
    for model in constituent_models(unit) {
        scan_enhancements(&model.selections, &mut out);
    }
    out
}

fn scan_enhancements(selections: &[SelectionNode], out: &mut Vec<EnhancementEntry>) {
    for sel in selections {
        if sel.kind == NodeKind::Upgrade && in_enhancement_group(sel) {
            out.push(EnhancementEntry {
                name: sel.name.clone(),
                count: 1,
                cost: sel.costs.iter().find(|c| c.name == "pts").map(|c| c.value),
            });
        }
        scan_enhancements(&sel.selections, out);
    }
}

fn in_enhancement_group(sel: &SelectionNode) -> bool {
    sel.group
        .as_deref()
        .is_some_and(|group| group.to_lowercase().contains("enhancement"))
}

/// Non-hidden rules in source order, plus a synthesized `Capacity: N` entry
/// when a Transport profile exposes a numeric capacity.
pub fn extract_generic_abilities(unit: &SelectionNode) -> Vec<Ability> {
    let mut abilities: Vec<Ability> = unit
        .rules
        .iter()
        .filter(|r| !r.hidden)
        .map(|r| Ability {
            name: r.name.trim().to_string(),
            description: r.description.clone(),
        })
        .collect();

    let transport = unit
        .profiles
        .iter()
        .find(|p| p.kind == ProfileKind::Transport);
    if let Some(profile) = transport {
        let capacity = profile
            .characteristics
            .iter()
            .find(|ch| ch.name == "Capacity")
            .and_then(|ch| first_integer(&ch.text));
        if let Some(n) = capacity {
            abilities.push(Ability {
                name: format!("Capacity: {n}"),
                description: None,
            });
        }
    }
    abilities
}

/// First run of ASCII digits anywhere in the text ("6 (see rules)" -> "6").
fn first_integer(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Names of the unit's own Abilities-typed profiles, source order. Not
/// recursive into constituent models.
pub fn extract_unique_abilities(unit: &SelectionNode) -> Vec<Ability> {
    unit.profiles
        .iter()
        .filter(|p| p.kind == ProfileKind::Abilities)
        .map(|p| Ability {
            name: p.name.trim().to_string(),
            description: p
                .characteristics
                .iter()
                .find(|ch| ch.name == "Description")
                .map(|ch| ch.text.clone()),
        })
        .collect()
}

/// "1 model" for a lone model, else the summed multiplicity of direct model
/// selections. A model with no `number` contributes 0 here (unlike weapon
/// counts, which default to 1).
pub fn extract_composition(unit: &SelectionNode) -> String {
    if unit.kind == NodeKind::Model {
        return "1 model".to_string();
    }
    let total: u32 = unit
        .selections
        .iter()
        .filter(|s| s.kind == NodeKind::Model)
        .map(|s| s.number.unwrap_or(0))
        .sum();
    format!("{total} models")
}
