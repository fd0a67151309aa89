//! Diff computation core.
//!
//! This module classifies each resource's action list into a change verb,
//! resolves field-level before/after values under the three competing value
//! states (known, sensitive, known-after-apply), and aggregates everything
//! into a nested diff structure plus per-verb counts.

mod engine;
mod fields;
mod summary;
mod verb;

pub use engine::{DiffEngine, DiffEntry, DiffTree, VerbCounts};
pub use fields::{
    all_field_names, field_after, field_before, render_before_after, FieldAfter, FieldBefore,
    KNOWN_AFTER_APPLY, SENSITIVE_VALUE,
};
pub use summary::format_summary;
pub use verb::{Verb, VerbStyle};
