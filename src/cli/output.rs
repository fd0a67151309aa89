//! Output formatting for the CLI.
//!
//! This module renders the diff tree, the detail table, and the compact
//! summary line to the terminal. Verb colors live here and only here; the
//! diff core carries no color or markup concepts.

use std::collections::HashMap;
use std::fmt::Write;

use colored::{Color, Colorize};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::diff::{format_summary, DiffEntry, DiffTree, Verb, VerbCounts};
use crate::tree::{project, TreeNode};

use super::commands::OutputFormat;

/// Output formatter for CLI.
#[derive(Debug)]
pub struct OutputFormatter {
    /// Output format.
    format: OutputFormat,
}

/// Resource row for the detail table.
#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "Resource")]
    resource: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Changed fields")]
    changed: usize,
}

/// JSON form of the full diff output.
#[derive(Serialize)]
struct DiffJson<'a> {
    resources: &'a [DiffEntry],
    counts: Vec<CountJson>,
    summary: String,
}

/// JSON form of one per-verb count.
#[derive(Serialize)]
struct CountJson {
    verb: Verb,
    count: usize,
}

impl OutputFormatter {
    /// Creates a new output formatter.
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the full diff (tree plus summary line) for display.
    #[must_use]
    pub fn format_diff(&self, diff: &DiffTree, counts: &VerbCounts) -> String {
        match self.format {
            OutputFormat::Json => {
                let json = DiffJson {
                    resources: diff.entries(),
                    counts: ordered_counts(counts),
                    summary: format_summary(counts),
                };
                serde_json::to_string_pretty(&json).unwrap_or_default()
            }
            OutputFormat::Text => Self::format_diff_text(diff, counts),
        }
    }

    /// Formats just the compact summary line.
    #[must_use]
    pub fn format_summary_line(&self, counts: &VerbCounts) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&ordered_counts(counts)).unwrap_or_default()
            }
            OutputFormat::Text => Self::colored_summary(counts),
        }
    }

    /// Formats the per-resource detail table (text output only).
    #[must_use]
    pub fn format_detail_table(diff: &DiffTree) -> String {
        let rows: Vec<ResourceRow> = diff
            .entries()
            .iter()
            .map(|entry| ResourceRow {
                resource: entry
                    .label
                    .split(" will be ")
                    .next()
                    .unwrap_or(&entry.label)
                    .to_string(),
                action: entry.verb.to_string(),
                changed: entry.lines.len().saturating_sub(1),
            })
            .collect();

        if rows.is_empty() {
            return String::new();
        }
        Table::new(rows).to_string()
    }

    /// Renders the diff as an indented text tree with verb-colored labels,
    /// followed by the colored summary line.
    fn format_diff_text(diff: &DiffTree, counts: &VerbCounts) -> String {
        if diff.is_empty() {
            return format!("{} No changes - plan is a no-op.\n", "✓".green());
        }

        let tree = project("Plan Output", &diff.to_structure());
        let colors: HashMap<&str, Color> = diff
            .entries()
            .iter()
            .map(|e| (e.label.as_str(), verb_color(e.verb)))
            .collect();

        let mut output = String::new();
        // The root node is a container; render its children at depth zero.
        for child in tree.children() {
            render_node(child, 0, &colors, &mut output);
        }
        let _ = write!(output, "\n{}\n", Self::colored_summary(counts));
        output
    }

    /// Builds the summary line with each `<icon><count>` in its verb color.
    fn colored_summary(counts: &VerbCounts) -> String {
        let parts: Vec<String> = ordered_counts(counts)
            .iter()
            .map(|c| {
                format!("{}{}", c.verb.style().icon, c.count)
                    .color(verb_color(c.verb))
                    .bold()
                    .to_string()
            })
            .collect();
        parts.join(" ")
    }
}

/// Per-verb counts ordered by the fixed summary priority.
fn ordered_counts(counts: &VerbCounts) -> Vec<CountJson> {
    let mut ordered: Vec<CountJson> = counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(verb, count)| CountJson {
            verb: *verb,
            count: *count,
        })
        .collect();
    ordered.sort_by_key(|c| c.verb.style().priority);
    ordered
}

/// Terminal color for a verb.
const fn verb_color(verb: Verb) -> Color {
    match verb {
        Verb::Create => Color::Green,
        Verb::Update => Color::Yellow,
        Verb::Replace => Color::Magenta,
        Verb::Destroy => Color::Red,
        Verb::Read => Color::Cyan,
        Verb::NoOp => Color::White,
    }
}

/// Writes one tree node and its children, two spaces of indent per level.
fn render_node(node: &TreeNode, depth: usize, colors: &HashMap<&str, Color>, output: &mut String) {
    let indent = "  ".repeat(depth);
    let text = node.text();

    let line = colors.get(text).map_or_else(
        || text.to_string(),
        |color| text.color(*color).bold().to_string(),
    );
    let _ = writeln!(output, "{indent}{line}");

    for child in node.children() {
        render_node(child, depth + 1, colors, output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::diff::DiffEngine;
    use crate::plan::Plan;

    fn sample_plan() -> Plan {
        serde_json::from_value(json!({
            "resource_changes": [
                {
                    "address": "aws_instance.web",
                    "change": {
                        "actions": ["update"],
                        "before": {"ami": "a1"},
                        "after": {"ami": "a2"}
                    }
                },
                {
                    "address": "aws_s3_bucket.logs",
                    "change": {"actions": ["delete"], "before": {"bucket": "logs"}}
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_text_output_contains_labels_and_lines() {
        colored::control::set_override(false);

        let engine = DiffEngine::new();
        let plan = sample_plan();
        let diff = engine.parse_diff(&plan).unwrap();
        let counts = engine.parse_counts(&plan).unwrap();

        let out = OutputFormatter::new(OutputFormat::Text).format_diff(&diff, &counts);
        assert!(out.contains("aws_instance.web will be updated"));
        assert!(out.contains("  ami \"a1\" -> \"a2\""));
        assert!(out.contains("aws_s3_bucket.logs will be destroyed"));
        assert!(out.contains("~1"));
        assert!(out.contains("-1"));
    }

    #[test]
    fn test_text_output_empty_diff() {
        colored::control::set_override(false);

        let out = OutputFormatter::new(OutputFormat::Text)
            .format_diff(&DiffTree::default(), &VerbCounts::new());
        assert!(out.contains("No changes"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let engine = DiffEngine::new();
        let plan = sample_plan();
        let diff = engine.parse_diff(&plan).unwrap();
        let counts = engine.parse_counts(&plan).unwrap();

        let out = OutputFormatter::new(OutputFormat::Json).format_diff(&diff, &counts);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["resources"].as_array().unwrap().len(), 2);
        assert_eq!(value["summary"], "-1 ~1");
        assert_eq!(value["counts"][0]["verb"], "Destroy");
        assert_eq!(value["counts"][0]["count"], 1);
    }

    #[test]
    fn test_detail_table_rows() {
        let engine = DiffEngine::new();
        let diff = engine.parse_diff(&sample_plan()).unwrap();

        let table = OutputFormatter::format_detail_table(&diff);
        assert!(table.contains("aws_instance.web"));
        assert!(table.contains("update"));
        assert!(table.contains("destroy"));
    }

    #[test]
    fn test_detail_table_empty() {
        assert_eq!(
            OutputFormatter::format_detail_table(&DiffTree::default()),
            ""
        );
    }
}
