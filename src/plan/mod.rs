//! Plan document model.
//!
//! This module defines the structured form of an infrastructure change
//! plan: the root document, per-resource change records, and the parallel
//! sensitive/unknown value mappings.

mod model;

pub use model::{ChangeRecord, Plan, ResourceChange, SensitiveValues};
