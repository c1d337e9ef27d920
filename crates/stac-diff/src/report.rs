//! Diff report and its labeled YAML rendering

use serde_json::Value;
use serde_yaml::{Mapping, Value as YamlValue};
use std::collections::{BTreeMap, BTreeSet};

/// Names given to the two sides of a diff when it is rendered.
///
/// Each label prefixes the field names of a change entry, e.g. `ref_value`
/// and `com_value` for [`SideLabels::REF_COM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideLabels {
    pub left: &'static str,
    pub right: &'static str,
}

impl SideLabels {
    /// Generic before/after labels
    pub const OLD_NEW: Self = Self {
        left: "old",
        right: "new",
    };

    /// Reference/comparison labels used when validating two catalogs
    pub const REF_COM: Self = Self {
        left: "ref",
        right: "com",
    };
}

impl Default for SideLabels {
    fn default() -> Self {
        Self::OLD_NEW
    }
}

/// A scalar that kept its JSON kind but changed value
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChange {
    pub left: Value,
    pub right: Value,
}

/// A value whose JSON kind differs between the two sides
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChange {
    pub left_type: &'static str,
    pub right_type: &'static str,
    pub left: Value,
    pub right: Value,
}

/// All differences between two values, grouped by category and keyed by path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffReport {
    pub values_changed: BTreeMap<String, ValueChange>,
    pub type_changes: BTreeMap<String, TypeChange>,
    pub dictionary_item_added: BTreeSet<String>,
    pub dictionary_item_removed: BTreeSet<String>,
    pub iterable_item_added: BTreeMap<String, Value>,
    pub iterable_item_removed: BTreeMap<String, Value>,
}

impl DiffReport {
    /// True when both sides were structurally equal
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of recorded differences across all categories
    pub fn len(&self) -> usize {
        self.values_changed.len()
            + self.type_changes.len()
            + self.dictionary_item_added.len()
            + self.dictionary_item_removed.len()
            + self.iterable_item_added.len()
            + self.iterable_item_removed.len()
    }

    /// Render the report as a YAML document, naming the sides with `labels`.
    ///
    /// Empty categories are omitted, so an empty report renders as `{}`.
    pub fn to_yaml(&self, labels: SideLabels) -> Result<String, serde_yaml::Error> {
        let mut doc = Mapping::new();

        if !self.dictionary_item_added.is_empty() {
            doc.insert(
                "dictionary_item_added".into(),
                path_list(&self.dictionary_item_added),
            );
        }
        if !self.dictionary_item_removed.is_empty() {
            doc.insert(
                "dictionary_item_removed".into(),
                path_list(&self.dictionary_item_removed),
            );
        }
        if !self.iterable_item_added.is_empty() {
            doc.insert(
                "iterable_item_added".into(),
                path_values(&self.iterable_item_added)?,
            );
        }
        if !self.iterable_item_removed.is_empty() {
            doc.insert(
                "iterable_item_removed".into(),
                path_values(&self.iterable_item_removed)?,
            );
        }

        if !self.type_changes.is_empty() {
            let mut section = Mapping::new();
            for (path, change) in &self.type_changes {
                let mut entry = Mapping::new();
                entry.insert(
                    format!("{}_type", labels.left).into(),
                    change.left_type.into(),
                );
                entry.insert(
                    format!("{}_type", labels.right).into(),
                    change.right_type.into(),
                );
                entry.insert(
                    format!("{}_value", labels.left).into(),
                    serde_yaml::to_value(&change.left)?,
                );
                entry.insert(
                    format!("{}_value", labels.right).into(),
                    serde_yaml::to_value(&change.right)?,
                );
                section.insert(path.as_str().into(), YamlValue::Mapping(entry));
            }
            doc.insert("type_changes".into(), YamlValue::Mapping(section));
        }

        if !self.values_changed.is_empty() {
            let mut section = Mapping::new();
            for (path, change) in &self.values_changed {
                let mut entry = Mapping::new();
                entry.insert(
                    format!("{}_value", labels.left).into(),
                    serde_yaml::to_value(&change.left)?,
                );
                entry.insert(
                    format!("{}_value", labels.right).into(),
                    serde_yaml::to_value(&change.right)?,
                );
                section.insert(path.as_str().into(), YamlValue::Mapping(entry));
            }
            doc.insert("values_changed".into(), YamlValue::Mapping(section));
        }

        serde_yaml::to_string(&YamlValue::Mapping(doc))
    }
}

fn path_list(paths: &BTreeSet<String>) -> YamlValue {
    YamlValue::Sequence(paths.iter().map(|p| p.as_str().into()).collect())
}

fn path_values(items: &BTreeMap<String, Value>) -> Result<YamlValue, serde_yaml::Error> {
    let mut section = Mapping::new();
    for (path, value) in items {
        section.insert(path.as_str().into(), serde_yaml::to_value(value)?);
    }
    Ok(YamlValue::Mapping(section))
}
