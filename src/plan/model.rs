//! Serde model for the plan document.
//!
//! Only the fields the diff core consumes are modeled; unknown keys in the
//! document are ignored so newer plan schema versions still load. Every
//! value mapping is optional and tolerates an explicit `null` - a missing
//! `before`, `after`, `before_sensitive`, `after_sensitive`, or
//! `after_unknown` is never an error.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{PlanError, Result};

/// The root plan document: an ordered sequence of resource changes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Plan {
    /// All resource changes, in plan order.
    #[serde(default)]
    pub resource_changes: Vec<ResourceChange>,
}

/// One resource's entry in the plan.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceChange {
    /// Unique resource identifier, e.g. `aws_instance.web`.
    pub address: String,

    /// Why the planner chose this action. Historically used to tell
    /// replace-because-update-impossible apart from other replace reasons;
    /// absent in most plans.
    #[serde(default)]
    pub action_reason: Option<String>,

    /// The change record for this resource.
    pub change: ChangeRecord,
}

/// The field-level change description for one resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeRecord {
    /// Ordered action tokens: `no-op`, `create`, `update`, `delete`,
    /// `read`, or the pair `create`+`delete` signifying replacement.
    #[serde(default)]
    pub actions: Vec<String>,

    /// Field values before the change. Absent when creating.
    #[serde(default)]
    pub before: Option<Map<String, Value>>,

    /// Field values after the change. Absent when destroying.
    #[serde(default)]
    pub after: Option<Map<String, Value>>,

    /// Sensitive-value mask for the before state. Absent or `null` when the
    /// resource is being created.
    #[serde(default)]
    pub before_sensitive: Option<SensitiveValues>,

    /// Sensitive-value mask for the after state. Absent or `null` when the
    /// resource is being destroyed.
    #[serde(default)]
    pub after_sensitive: Option<SensitiveValues>,

    /// Fields whose after value is not known until the plan is applied.
    #[serde(default)]
    pub after_unknown: Option<Map<String, Value>>,
}

/// A sensitive-value mapping, which the plan format encodes either as a
/// boolean mask (`false` meaning "nothing sensitive") or as a field->value
/// mapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SensitiveValues {
    /// Whole-record mask; exposes no per-field entries.
    Mask(bool),

    /// Per-field sensitive values.
    Values(Map<String, Value>),
}

impl SensitiveValues {
    /// Looks up a field's sensitive value, if the record carries a mapping.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self {
            Self::Mask(_) => None,
            Self::Values(map) => map.get(field),
        }
    }

    /// Iterates the field names in the mapping, if any.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        match self {
            Self::Mask(_) => None,
            Self::Values(map) => Some(map.keys()),
        }
        .into_iter()
        .flatten()
    }
}

impl Plan {
    /// Decodes a plan from its JSON text form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlanDiffError::Decode`] if the document is not
    /// structurally valid.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Loads and decodes a plan from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::FileNotFound`] if the path does not exist, or a
    /// decode/IO error otherwise.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlanError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
