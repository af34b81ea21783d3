//! Aggregate Recalculator
//!
//! Derived display values are recomputed from a snapshot of what is
//! rendered, never from deltas. All functions here are pure, so running
//! them twice over the same snapshot gives the same result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CategoryId;

/// Panel header text with an optional live count badge
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderLabel {
    pub title: String,
    pub badge: Option<usize>,
}

impl HeaderLabel {
    pub fn bare(title: impl Into<String>) -> Self {
        Self { title: title.into(), badge: None }
    }
}

impl fmt::Display for HeaderLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.badge {
            Some(count) => write!(f, "{} ({})", self.title, count),
            None => f.write_str(&self.title),
        }
    }
}

/// What the recount needs to know about one feedback panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub id: CategoryId,
    pub title: String,
    /// Rendered delimiter markers, one per existing comment
    pub delimiters: usize,
}

pub fn header_label(title: &str, count: usize) -> HeaderLabel {
    HeaderLabel {
        title: title.to_string(),
        badge: (count > 0).then_some(count),
    }
}

pub fn recompute_counts(panels: &[PanelSnapshot]) -> Vec<(CategoryId, HeaderLabel)> {
    panels
        .iter()
        .map(|panel| (panel.id, header_label(&panel.title, panel.delimiters)))
        .collect()
}

/// What the filter needs to know about one table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSnapshot {
    pub is_header: bool,
    /// Status icon currently shows "checked"
    pub checked: bool,
}

/// Hidden flag per row, in row order
///
/// A row is hidden iff the filter is active and its icon is checked.
/// Header rows always stay visible.
pub fn compute_visibility(rows: &[RowSnapshot], hide_completed: bool) -> Vec<bool> {
    rows.iter()
        .map(|row| !row.is_header && hide_completed && row.checked)
        .collect()
}
