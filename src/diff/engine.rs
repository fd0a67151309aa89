//! Diff aggregation engine.
//!
//! Walks every resource in a plan once, skipping no-ops, and produces the
//! two derived structures the presentation layer consumes: a nested diff
//! tree (resource label -> changed-field lines) and per-verb counts.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::diff::fields::{all_field_names, render_before_after};
use crate::diff::verb::Verb;
use crate::error::Result;
use crate::plan::Plan;
use crate::tree::Structure;

/// Occurrence count per change verb, accumulated across all non-no-op
/// resources in one pass. No-op resources never contribute.
pub type VerbCounts = HashMap<Verb, usize>;

/// Engine for computing diffs over a plan document.
#[derive(Debug, Default)]
pub struct DiffEngine;

/// The nested diff structure: one entry per resource label, in plan order.
///
/// Built fresh per render pass and never mutated afterwards. Entries are
/// keyed by label; two resources that format to the same label (addresses
/// are unique, so this should not normally occur) share one bucket, with
/// the later resource's lines appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffTree {
    entries: Vec<DiffEntry>,
}

/// One resource's entry in the diff tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    /// The resource's change verb.
    pub verb: Verb,
    /// Verb-qualified resource label, e.g. `aws_instance.web will be updated`.
    pub label: String,
    /// Changed-field lines (`<field> <before> -> <after>`), followed by a
    /// trailing `<n> unchanged` line per resource, even when n is zero.
    pub lines: Vec<String>,
}

impl DiffEngine {
    /// Creates a new diff engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Accumulates per-verb counts across all non-no-op resources.
    ///
    /// # Errors
    ///
    /// Fails on the first unrecognized action combination; a partially
    /// counted plan is never returned.
    pub fn parse_counts(&self, plan: &Plan) -> Result<VerbCounts> {
        let mut counts = VerbCounts::new();

        for rc in &plan.resource_changes {
            let verb = Verb::classify(&rc.change.actions)?;
            if verb == Verb::NoOp {
                continue;
            }
            *counts.entry(verb).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Builds the nested diff structure for a plan, in plan order.
    ///
    /// # Errors
    ///
    /// Fails on the first unrecognized action combination.
    pub fn parse_diff(&self, plan: &Plan) -> Result<DiffTree> {
        let mut tree = DiffTree::default();

        for rc in &plan.resource_changes {
            let verb = Verb::classify(&rc.change.actions)?;
            if verb == Verb::NoOp {
                debug!("Skipping no-op resource: {}", rc.address);
                continue;
            }

            let label = format!("{} will be {}", rc.address, verb.style().past_tense);
            let mut unchanged: usize = 0;
            let mut lines = Vec::new();

            for field in all_field_names(&rc.change) {
                let (before_text, after_text) = render_before_after(&rc.change, &field);
                if before_text == after_text {
                    unchanged += 1;
                } else {
                    lines.push(format!("{field} {before_text} -> {after_text}"));
                }
            }
            lines.push(format!("{unchanged} unchanged"));

            debug!(
                "Resource {} classified as {verb}: {} changed field(s)",
                rc.address,
                lines.len() - 1
            );
            tree.bucket(verb, label).extend(lines);
        }

        Ok(tree)
    }
}

impl DiffTree {
    /// The diff entries, in plan order.
    #[must_use]
    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    /// True when no resource contributed output.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of resource entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Converts the diff into the generic structure consumed by the tree
    /// projector: a mapping of labels to sequences of line scalars.
    #[must_use]
    pub fn to_structure(&self) -> Structure {
        Structure::Mapping(
            self.entries
                .iter()
                .map(|e| {
                    let lines = e
                        .lines
                        .iter()
                        .map(|line| Structure::Scalar(Value::String(line.clone())))
                        .collect();
                    (e.label.clone(), Structure::Sequence(lines))
                })
                .collect(),
        )
    }

    /// Returns the line bucket for a label, creating the entry if new.
    fn bucket(&mut self, verb: Verb, label: String) -> &mut Vec<String> {
        let pos = match self.entries.iter().position(|e| e.label == label) {
            Some(pos) => pos,
            None => {
                self.entries.push(DiffEntry {
                    verb,
                    label,
                    lines: Vec::new(),
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].lines
    }
}
