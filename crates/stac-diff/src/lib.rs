//! Structural diff of JSON records
//!
//! Recursively compares two [`serde_json::Value`] trees and groups every
//! divergence by category, keyed by the path at which it occurs:
//!
//! | category                  | meaning                                    |
//! |---------------------------|--------------------------------------------|
//! | `values_changed`          | same kind of scalar, different value       |
//! | `type_changes`            | different JSON kinds at the same path      |
//! | `dictionary_item_added`   | key only present on the right              |
//! | `dictionary_item_removed` | key only present on the left               |
//! | `iterable_item_added`     | array element only present on the right    |
//! | `iterable_item_removed`   | array element only present on the left     |
//!
//! Paths look like `root['properties']['datetime']` or `root['links'][2]`.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use stac_diff::{diff, SideLabels};
//!
//! let report = diff(&json!({"id": "A", "v": 1}), &json!({"id": "A", "v": 2}));
//! assert_eq!(report.len(), 1);
//!
//! let yaml = report.to_yaml(SideLabels::REF_COM).unwrap();
//! assert!(yaml.contains("ref_value: 1"));
//! assert!(yaml.contains("com_value: 2"));
//! ```

mod diff;
mod report;

pub use diff::{diff, json_type_name};
pub use report::{DiffReport, SideLabels, TypeChange, ValueChange};
