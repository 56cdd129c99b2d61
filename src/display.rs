//! Presentation-facing helpers over normalized records: defensive-save
//! badges, ability filtering, weapon-profile grouping, and rule-text
//! cleanup. These do not change identity or count semantics; they only
//! reshape records for a renderer.

use crate::roster::{Ability, UnitRecord, WeaponEntry};

/// Invulnerable save badge ("4+"), pattern-matched over the raw unique
/// ability names.
pub fn invulnerable_save(record: &UnitRecord) -> Option<String> {
    record
        .unique_abilities
        .iter()
        .find_map(|a| match_save_value(&a.name, "invulnerable save"))
}

/// Feel No Pain badge; unique abilities take precedence over generic ones.
pub fn feel_no_pain(record: &UnitRecord) -> Option<String> {
    record
        .unique_abilities
        .iter()
        .find_map(|a| match_save_value(&a.name, "feel no pain"))
        .or_else(|| {
            record
                .generic_abilities
                .iter()
                .find_map(|a| match_save_value(&a.name, "feel no pain"))
        })
}

/// Case-insensitive "<phrase> N+" match, e.g. "Invulnerable Save 4+".
fn match_save_value(text: &str, phrase: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let at = lower.find(phrase)?;
    let rest = lower[at + phrase.len()..].trim_start();
    let mut chars = rest.chars();
    let digit = chars.next().filter(char::is_ascii_digit)?;
    match chars.next() {
        Some('+') => Some(format!("{digit}+")),
        _ => None,
    }
}

/// Abilities surfaced as badges are filtered out of the ability listing.
/// Anchored at the start of the name: "Invulnerable Save 4+" is a badge,
/// "Ignores Invulnerable Saves" is a regular ability.
pub fn is_badge_ability(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.starts_with("invulnerable save") || lower.starts_with("feel no pain")
}

/// The ability list a renderer should show: everything except badge entries.
pub fn display_abilities(abilities: &[Ability]) -> Vec<&Ability> {
    abilities
        .iter()
        .filter(|a| !is_badge_ability(&a.name))
        .collect()
}

/// Strip the builder's inline emphasis markers (`^^`, `**`, `__`) from rule
/// text.
pub fn clean_rule_text(text: &str) -> String {
    text.replace("^^", "")
        .replace("**", "")
        .replace("__", "")
        .trim()
        .to_string()
}

/// One weapon with several firing profiles, grouped for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponGroup {
    pub name: String,
    pub profiles: Vec<WeaponProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponProfile {
    /// Variant label from the name suffix ("standard", "supercharge"),
    /// absent for single-profile weapons.
    pub label: Option<String>,
    pub entry: WeaponEntry,
}

/// Group weapons by the base name before a `" - "` separator; the suffix
/// becomes the profile's variant label. Counts and identity are untouched —
/// this runs downstream of deduplication.
pub fn group_weapons(weapons: &[WeaponEntry]) -> Vec<WeaponGroup> {
    let mut groups: Vec<WeaponGroup> = Vec::new();
    for weapon in weapons {
        let (base, label) = match weapon.name.split_once(" - ") {
            Some((base, suffix)) => (base.to_string(), Some(suffix.to_string())),
            None => (weapon.name.clone(), None),
        };
        let profile = WeaponProfile {
            label,
            entry: weapon.clone(),
        };
        match groups.iter_mut().find(|g| g.name == base) {
            Some(group) => group.profiles.push(profile),
            None => groups.push(WeaponGroup {
                name: base,
                profiles: vec![profile],
            }),
        }
    }
    groups
}
