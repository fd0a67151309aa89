// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::print_stdout)]        // println!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::unwrap_in_result)]    // unwrap() in Result warning
#![warn(clippy::redundant_clone)]     // Useless clones warning

// ============================================================================
// Crate Documentation
// ============================================================================

//! # Plandiff
//!
//! Human-navigable tree summaries of infrastructure change plans.
//!
//! ## Overview
//!
//! Plandiff takes a structured plan document - the JSON description of
//! resources that will be created, updated, replaced, destroyed, or read -
//! and renders it as a labeled tree plus a compact per-verb summary line.
//!
//! The core is the diff-computation model:
//!
//! 1. **Verb classification**: each resource's action list maps to one
//!    semantic change verb, or fails fast on an unrecognized combination.
//! 2. **Field diffing**: each field's before/after pair is resolved under
//!    three competing states - known value, sensitive value, and value
//!    unknown until apply - with a fixed precedence.
//! 3. **Aggregation**: one pass over the plan produces the nested diff
//!    structure and the per-verb counts, skipping no-op resources.
//! 4. **Projection**: a generic structural tree builder turns the diff (or
//!    any nested mapping/sequence/scalar input) into a displayable tree.
//!
//! ## Modules
//!
//! - [`plan`]: the structured plan document model
//! - [`diff`]: verb classification, field diffing, aggregation, summary
//! - [`tree`]: generic structural tree projection
//! - [`cli`]: argument parsing and output formatting
//! - [`error`]: the error hierarchy
//!
//! ## Example
//!
//! ```
//! use plandiff::diff::DiffEngine;
//! use plandiff::plan::Plan;
//!
//! let plan = Plan::from_json(r#"{
//!     "resource_changes": [{
//!         "address": "aws_instance.web",
//!         "change": {
//!             "actions": ["update"],
//!             "before": {"ami": "a1"},
//!             "after": {"ami": "a2"}
//!         }
//!     }]
//! }"#)?;
//!
//! let engine = DiffEngine::new();
//! let diff = engine.parse_diff(&plan)?;
//! assert_eq!(diff.entries()[0].label, "aws_instance.web will be updated");
//! # Ok::<(), plandiff::error::PlanDiffError>(())
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod cli;
pub mod diff;
pub mod error;
pub mod plan;
pub mod tree;

// ============================================================================
// Re-exports
// ============================================================================

pub use cli::{Cli, OutputFormat, OutputFormatter};
pub use diff::{
    format_summary, DiffEngine, DiffEntry, DiffTree, Verb, VerbCounts, VerbStyle,
};
pub use error::{PlanDiffError, PlanError, Result};
pub use plan::{ChangeRecord, Plan, ResourceChange, SensitiveValues};
pub use tree::{project, Structure, TreeNode};
