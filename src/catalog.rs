// Copyright 2025 NewCo

//! The label catalog: which labels to seed and in which colors.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One label to ensure exists on the target repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSpec {
    /// Label name, unique within the catalog.
    pub name: String,

    /// Display color as six hex digits, without a leading `#`.
    pub color: String,

    /// Optional description shown next to the label in the repository UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LabelSpec {
    fn new(name: &str, color: &str) -> Self {
        LabelSpec {
            name: name.to_string(),
            color: color.to_string(),
            description: None,
        }
    }
}

/// The built-in label set: three review-risk tiers and a draft marker.
pub fn builtin_catalog() -> Vec<LabelSpec> {
    vec![
        LabelSpec::new("Low risk", "3CD616"),
        LabelSpec::new("Medium risk", "FFCE33"),
        LabelSpec::new("High risk", "FF3C33"),
        LabelSpec::new("Draft", "B316D6"),
    ]
}

/// Check a catalog before any remote calls are made.
///
/// Names must be unique (duplicates would issue conflicting calls for the
/// same remote resource) and colors must be exactly six hex digits.
pub fn validate(catalog: &[LabelSpec]) -> Result<()> {
    if catalog.is_empty() {
        return Err(Error::Config("label catalog is empty".to_string()));
    }
    let mut seen = HashSet::new();
    for label in catalog {
        if !seen.insert(label.name.as_str()) {
            return Err(Error::Config(format!(
                "duplicate label name {:?}",
                label.name
            )));
        }
        if label.color.len() != 6 || !label.color.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::Config(format!(
                "label {:?} has color {:?}, expected six hex digits without '#'",
                label.name, label.color
            )));
        }
    }
    Ok(())
}
