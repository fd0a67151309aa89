//! Error types for the plandiff system.
//!
//! This module provides the error hierarchy for all operations in the
//! plan-rendering lifecycle: plan loading, verb classification, and diff
//! computation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the plandiff system.
#[derive(Debug, Error)]
pub enum PlanDiffError {
    /// Plan classification and diffing errors.
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    /// The plan document could not be decoded.
    #[error("Failed to decode plan JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading, classifying, and diffing a plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The actions list on a change record matched no recognized pattern.
    ///
    /// This is fatal rather than skippable: an unrecognized action
    /// combination means the plan was produced by an unsupported schema
    /// version, and a partially rendered plan would be misleading.
    #[error("Unrecognized action combination: {actions:?}")]
    InvalidActionSet {
        /// The offending action tokens, in plan order.
        actions: Vec<String>,
    },

    /// The plan file was not found.
    #[error("Plan file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },
}

/// Result type alias for plandiff operations.
pub type Result<T> = std::result::Result<T, PlanDiffError>;

impl PlanError {
    /// Creates an invalid-action-set error from the offending tokens.
    #[must_use]
    pub fn invalid_actions(actions: &[String]) -> Self {
        Self::InvalidActionSet {
            actions: actions.to_vec(),
        }
    }
}
