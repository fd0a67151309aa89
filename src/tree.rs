//! Generic structural tree projection.
//!
//! Converts an arbitrary nested mapping/sequence/scalar structure into a
//! labeled tree for display. This module knows nothing about plans; it
//! works on any [`Structure`] input, including anything adapted from a raw
//! `serde_json::Value`.

use serde::Serialize;
use serde_json::Value;

/// A generic nested structure: the sum type the projector dispatches over.
#[derive(Debug, Clone, PartialEq)]
pub enum Structure {
    /// An ordered key/value mapping.
    Mapping(Vec<(String, Structure)>),
    /// An ordered sequence of items.
    Sequence(Vec<Structure>),
    /// A scalar value.
    Scalar(Value),
}

/// A displayable tree node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TreeNode {
    /// An expandable node with a label and children.
    Branch {
        /// Display label for the branch.
        label: String,
        /// Child nodes, in input order.
        children: Vec<TreeNode>,
    },
    /// A terminal node.
    Leaf {
        /// Display text for the leaf.
        text: String,
    },
}

impl Structure {
    /// Adapts a raw JSON value into a [`Structure`].
    ///
    /// Object key order follows the underlying map's iteration order.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::Mapping(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from_value(v)))
                    .collect(),
            ),
            Value::Array(items) => Self::Sequence(items.iter().map(Self::from_value).collect()),
            scalar => Self::Scalar(scalar.clone()),
        }
    }
}

/// Projects a structure into a displayable tree rooted at `label`.
///
/// Mapping keys become labeled branches over their value's contents;
/// sequence items become leaves, except in a top-level sequence where each
/// item becomes a branch labeled by its positional index; scalars become
/// leaves carrying the value's string form (JSON strings render unquoted).
#[must_use]
pub fn project(label: impl Into<String>, root: &Structure) -> TreeNode {
    match root {
        Structure::Scalar(value) => TreeNode::Leaf {
            text: scalar_text(value),
        },
        Structure::Sequence(items) => TreeNode::Branch {
            label: label.into(),
            children: items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Structure::Scalar(value) => TreeNode::Leaf {
                        text: scalar_text(value),
                    },
                    nested => TreeNode::Branch {
                        label: index.to_string(),
                        children: children_of(nested),
                    },
                })
                .collect(),
        },
        mapping => TreeNode::Branch {
            label: label.into(),
            children: children_of(mapping),
        },
    }
}

/// Projects a structure's contents as child nodes.
fn children_of(node: &Structure) -> Vec<TreeNode> {
    match node {
        Structure::Mapping(entries) => entries
            .iter()
            .map(|(key, value)| TreeNode::Branch {
                label: key.clone(),
                children: children_of(value),
            })
            .collect(),
        Structure::Sequence(items) => items
            .iter()
            .map(|item| TreeNode::Leaf {
                text: structure_text(item),
            })
            .collect(),
        Structure::Scalar(value) => vec![TreeNode::Leaf {
            text: scalar_text(value),
        }],
    }
}

/// String form of an arbitrary structure item, used for sequence leaves.
fn structure_text(item: &Structure) -> String {
    match item {
        Structure::Scalar(value) => scalar_text(value),
        Structure::Mapping(entries) => format!("<mapping of {} entries>", entries.len()),
        Structure::Sequence(items) => format!("<sequence of {} items>", items.len()),
    }
}

/// String form of a scalar: JSON strings unquoted, everything else as
/// canonical JSON text.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl TreeNode {
    /// Display text of the node: the label for branches, the text for leaves.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Branch { label, .. } => label,
            Self::Leaf { text } => text,
        }
    }

    /// Child nodes; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        match self {
            Self::Branch { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }

    /// True for terminal nodes.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_mapping_of_sequences() {
        let structure = Structure::Mapping(vec![(
            "aws_instance.web will be updated".to_string(),
            Structure::Sequence(vec![
                Structure::Scalar(json!("ami \"a1\" -> \"a2\"")),
                Structure::Scalar(json!("0 unchanged")),
            ]),
        )]);

        let tree = project("Plan Output", &structure);
        assert_eq!(tree.text(), "Plan Output");
        assert_eq!(tree.children().len(), 1);

        let resource = &tree.children()[0];
        assert_eq!(resource.text(), "aws_instance.web will be updated");
        assert!(!resource.is_leaf());

        let leaves: Vec<_> = resource.children().iter().map(TreeNode::text).collect();
        assert_eq!(leaves, vec!["ami \"a1\" -> \"a2\"", "0 unchanged"]);
        assert!(resource.children().iter().all(TreeNode::is_leaf));
    }

    #[test]
    fn test_project_nested_mapping() {
        let structure = Structure::from_value(&json!({
            "outer": {"inner": {"leaf": 42}}
        }));

        let tree = project("root", &structure);
        let outer = &tree.children()[0];
        let inner = &outer.children()[0];
        let leaf = &inner.children()[0];
        assert_eq!(outer.text(), "outer");
        assert_eq!(inner.text(), "inner");
        assert_eq!(leaf.text(), "leaf");
        assert_eq!(leaf.children()[0].text(), "42");
    }

    #[test]
    fn test_project_top_level_sequence_indexed() {
        let structure = Structure::from_value(&json!([{"a": 1}, {"b": 2}]));

        let tree = project("root", &structure);
        let labels: Vec<_> = tree.children().iter().map(TreeNode::text).collect();
        assert_eq!(labels, vec!["0", "1"]);
        assert_eq!(tree.children()[0].children()[0].text(), "a");
    }

    #[test]
    fn test_project_scalar_is_leaf() {
        let tree = project("root", &Structure::Scalar(json!("hello")));
        assert!(tree.is_leaf());
        assert_eq!(tree.text(), "hello");

        let tree = project("root", &Structure::Scalar(json!(null)));
        assert_eq!(tree.text(), "null");
    }

    #[test]
    fn test_string_scalars_render_unquoted() {
        let structure = Structure::from_value(&json!({"k": ["plain text"]}));
        let tree = project("root", &structure);
        assert_eq!(tree.children()[0].children()[0].text(), "plain text");
    }

    #[test]
    fn test_from_value_round_structure() {
        let value = json!({"m": {"x": 1}, "s": [true, null], "v": "str"});
        let structure = Structure::from_value(&value);

        match structure {
            Structure::Mapping(entries) => {
                assert_eq!(entries.len(), 3);
                assert!(matches!(entries[0].1, Structure::Mapping(_)));
                assert!(matches!(entries[1].1, Structure::Sequence(_)));
                assert!(matches!(entries[2].1, Structure::Scalar(_)));
            }
            other => panic!("expected mapping, got {other:?}"),
        }
    }
}
