//! Unit discovery: depth-first walk of the untyped export tree. Wrapper
//! shapes vary between builder versions (roster/forces/selections nesting),
//! so discovery runs over raw JSON and only the emitted unit subtrees are
//! converted to typed [SelectionNode]s.

use serde_json::{Map, Value};

use super::node::SelectionNode;

/// Collect every unit-like node in document order. `inside_unit` is threaded
/// as an explicit parameter: set when entering a `unit` subtree, never
/// cleared along a path, so standalone characters nested inside a unit are
/// not double-counted while sibling units remain independent.
pub fn discover_units(root: &Value) -> Vec<SelectionNode> {
    let mut units = Vec::new();
    walk(root, false, &mut units);
    units
}

fn walk(value: &Value, inside_unit: bool, units: &mut Vec<SelectionNode>) {
    match value {
        Value::Object(fields) => {
            let mut inside = inside_unit;
            match fields.get("type").and_then(Value::as_str) {
                Some("unit") => {
                    emit(value, units);
                    inside = true;
                }
                Some("model") if !inside_unit && has_unit_profile(fields) => {
                    emit(value, units);
                }
                _ => {}
            }
            for child in fields.values() {
                walk(child, inside, units);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, inside_unit, units);
            }
        }
        _ => {}
    }
}

/// A standalone model only counts as a unit when it carries its own
/// Unit-typed profile (independent characters).
fn has_unit_profile(fields: &Map<String, Value>) -> bool {
    fields
        .get("profiles")
        .and_then(Value::as_array)
        .is_some_and(|profiles| {
            profiles
                .iter()
                .any(|p| p.get("typeName").and_then(Value::as_str) == Some("Unit"))
        })
}

/// Best-effort typed conversion; a subtree the typed model cannot represent
/// is skipped rather than failing the roster.
fn emit(value: &Value, units: &mut Vec<SelectionNode>) {
    if let Ok(node) = serde_json::from_value::<SelectionNode>(value.clone()) {
        units.push(node);
    }
}
