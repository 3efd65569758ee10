//! Export row scoping.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use datagrid_model::Table;

/// Which rows an export visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportMode {
    /// Every row, in natural order.
    #[default]
    All,
    /// Only the current page window.
    PageOnly,
    /// Only the current selection, in selection order.
    SelectionOnly,
}

impl ExportMode {
    /// Map the legacy boolean flag pair; the page flag wins when both are
    /// set.
    pub fn from_flags(page_only: bool, selection_only: bool) -> Self {
        if page_only {
            Self::PageOnly
        } else if selection_only {
            Self::SelectionOnly
        } else {
            Self::All
        }
    }

    /// Canonical mode name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::PageOnly => "page-only",
            Self::SelectionOnly => "selection-only",
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "page" | "page-only" => Ok(Self::PageOnly),
            "selection" | "selection-only" => Ok(Self::SelectionOnly),
            other => Err(format!("unknown export mode: {other}")),
        }
    }
}

/// Produce the ordered row index sequence for an export.
///
/// The sequence never contains duplicates and is meant to be consumed
/// exactly once. The page window is taken as configured, not clamped to the
/// row count. Selection order is preserved; the first occurrence of a
/// duplicated index wins.
pub fn select_rows(table: &Table, mode: ExportMode) -> Vec<usize> {
    match mode {
        ExportMode::All => (0..table.row_count).collect(),
        ExportMode::PageOnly => (table.page.first..table.page.first + table.page.rows).collect(),
        ExportMode::SelectionOnly => {
            let mut seen = HashSet::with_capacity(table.selection.len());
            table
                .selection
                .iter()
                .copied()
                .filter(|index| seen.insert(*index))
                .collect()
        }
    }
}
