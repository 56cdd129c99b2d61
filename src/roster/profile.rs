//! Profile conversion and identity keys. Statlines dedupe on the sorted
//! characteristic set so identical models collapse regardless of order.

use std::collections::BTreeMap;

use super::node::ProfileNode;
use super::record::StatProfile;

/// Convert a Unit-typed profile into a semantic statline record. Unknown
/// characteristic names are ignored; missing ones stay empty.
pub fn stat_profile(profile: &ProfileNode) -> StatProfile {
    let mut out = StatProfile {
        name: profile.name.clone(),
        ..StatProfile::default()
    };
    for ch in &profile.characteristics {
        match ch.name.as_str() {
            "M" => out.movement = ch.text.clone(),
            "T" => out.toughness = ch.text.clone(),
            "SV" => out.save = ch.text.clone(),
            "W" => out.wounds = ch.text.clone(),
            "LD" => out.leadership = ch.text.clone(),
            "OC" => out.objective_control = ch.text.clone(),
            _ => {}
        }
    }
    out
}

/// Stable identity key over a profile's characteristics: sorted `name:value`
/// pairs joined with `|`. Excludes the profile name, so two differently
/// named models with the same statline share a key.
pub fn profile_key(profile: &ProfileNode) -> String {
    let mut parts: Vec<String> = profile
        .characteristics
        .iter()
        .map(|ch| format!("{}:{}", ch.name, ch.text))
        .collect();
    parts.sort();
    parts.join("|")
}

/// Characteristic name/value pairs as an ordered map (weapon lines).
pub fn characteristic_map(profile: &ProfileNode) -> BTreeMap<String, String> {
    profile
        .characteristics
        .iter()
        .map(|ch| (ch.name.clone(), ch.text.clone()))
        .collect()
}
