//! Recursive comparison of two JSON values

use crate::report::{DiffReport, TypeChange, ValueChange};
use serde_json::Value;

/// Compare `left` against `right` and collect every divergence.
///
/// The left side is treated as the baseline: keys and elements that only
/// exist on the right are reported as added, those only on the left as
/// removed.
pub fn diff(left: &Value, right: &Value) -> DiffReport {
    let mut report = DiffReport::default();
    diff_at("root", left, right, &mut report);
    report
}

/// Name of the JSON kind of a value, as shown in `type_changes`.
///
/// Numbers are split into `integer` and `float` so that `1` and `1.0` are
/// reported as a type change rather than silently treated as equal.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn key_path(path: &str, key: &str) -> String {
    format!("{}['{}']", path, key.replace('\'', "\\'"))
}

fn index_path(path: &str, index: usize) -> String {
    format!("{}[{}]", path, index)
}

fn diff_at(path: &str, left: &Value, right: &Value, report: &mut DiffReport) {
    match (left, right) {
        (Value::Object(left_obj), Value::Object(right_obj)) => {
            for (key, left_value) in left_obj {
                let new_path = key_path(path, key);
                match right_obj.get(key) {
                    Some(right_value) => diff_at(&new_path, left_value, right_value, report),
                    None => {
                        report.dictionary_item_removed.insert(new_path);
                    }
                }
            }

            for key in right_obj.keys() {
                if !left_obj.contains_key(key) {
                    report.dictionary_item_added.insert(key_path(path, key));
                }
            }
        }
        (Value::Array(left_arr), Value::Array(right_arr)) => {
            // Compared by position; reordering shows up as changed values.
            for (i, (left_elem, right_elem)) in left_arr.iter().zip(right_arr.iter()).enumerate() {
                diff_at(&index_path(path, i), left_elem, right_elem, report);
            }

            for (i, elem) in left_arr.iter().enumerate().skip(right_arr.len()) {
                report
                    .iterable_item_removed
                    .insert(index_path(path, i), elem.clone());
            }
            for (i, elem) in right_arr.iter().enumerate().skip(left_arr.len()) {
                report
                    .iterable_item_added
                    .insert(index_path(path, i), elem.clone());
            }
        }
        _ => {
            let left_type = json_type_name(left);
            let right_type = json_type_name(right);

            if left_type != right_type {
                report.type_changes.insert(
                    path.to_string(),
                    TypeChange {
                        left_type,
                        right_type,
                        left: left.clone(),
                        right: right.clone(),
                    },
                );
            } else if left != right {
                report.values_changed.insert(
                    path.to_string(),
                    ValueChange {
                        left: left.clone(),
                        right: right.clone(),
                    },
                );
            }
        }
    }
}
