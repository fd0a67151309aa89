//! Compact summary line formatting.

use crate::diff::engine::VerbCounts;
use crate::diff::verb::Verb;

/// Renders per-verb counts as a compact summary string.
///
/// Verbs are ordered by their fixed priority (create, destroy, replace,
/// update, read) independent of count; each present verb emits
/// `<icon><count>`, space-separated. Verbs absent from the counts map, or
/// present with a zero count, are omitted. Output is deterministic for a
/// given counts map.
#[must_use]
pub fn format_summary(counts: &VerbCounts) -> String {
    let mut present: Vec<(Verb, usize)> = counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(verb, count)| (*verb, *count))
        .collect();
    present.sort_by_key(|(verb, _)| verb.style().priority);

    present
        .iter()
        .map(|(verb, count)| format!("{}{count}", verb.style().icon))
        .collect::<Vec<_>>()
        .join(" ")
}
