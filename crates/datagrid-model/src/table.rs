//! The exportable table entity.

use serde::{Deserialize, Serialize};

use crate::column::Column;

/// Current page window (offset + length) of a paginated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageWindow {
    /// Index of the first row on the current page.
    pub first: usize,
    /// Number of rows per page.
    pub rows: usize,
}

impl PageWindow {
    /// Window starting at `first`, spanning `rows` rows.
    pub fn new(first: usize, rows: usize) -> Self {
        Self { first, rows }
    }
}

/// The exportable entity: an ordered set of columns over `row_count` rows,
/// with the host component's pagination and selection state.
///
/// `id` names the root element of a serialized export and `var_name` names
/// the per-row elements; both must already be legal element names. The row
/// cursor mirrors the component's "current row" rendering state: it is
/// `None` outside an export pass, and the export engine restores it to
/// `None` on every exit path so the component's rendering state is
/// unaffected.
#[derive(Debug)]
pub struct Table {
    /// Stable identifier, used as the root element name.
    pub id: String,
    /// Per-row variable name, used as the row element name.
    pub var_name: String,
    /// Ordered columns; export visits them in declared order.
    pub columns: Vec<Column>,
    /// Total number of rows backing the table.
    pub row_count: usize,
    /// Current page window.
    pub page: PageWindow,
    /// Currently selected row indices, in selection order.
    pub selection: Vec<usize>,
    row_cursor: Option<usize>,
}

impl Table {
    /// Create an empty table with the given identifier and row variable name.
    pub fn new(id: impl Into<String>, var_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            var_name: var_name.into(),
            columns: Vec::new(),
            row_count: 0,
            page: PageWindow::default(),
            selection: Vec::new(),
            row_cursor: None,
        }
    }

    /// Set the ordered columns.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Set the total row count.
    #[must_use]
    pub fn with_row_count(mut self, row_count: usize) -> Self {
        self.row_count = row_count;
        self
    }

    /// Set the current page window.
    #[must_use]
    pub fn with_page(mut self, page: PageWindow) -> Self {
        self.page = page;
        self
    }

    /// Set the current selection.
    #[must_use]
    pub fn with_selection(mut self, selection: Vec<usize>) -> Self {
        self.selection = selection;
        self
    }

    /// The current row cursor, `None` when no row is current.
    pub fn row_cursor(&self) -> Option<usize> {
        self.row_cursor
    }

    /// Move the row cursor to `index`.
    pub fn set_row_cursor(&mut self, index: usize) {
        self.row_cursor = Some(index);
    }

    /// Reset the row cursor to its neutral "no row" state.
    pub fn clear_row_cursor(&mut self) {
        self.row_cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_has_neutral_cursor() {
        let table = Table::new("orders", "order");
        assert_eq!(table.id, "orders");
        assert_eq!(table.var_name, "order");
        assert_eq!(table.row_cursor(), None);
    }

    #[test]
    fn test_cursor_set_and_clear() {
        let mut table = Table::new("orders", "order").with_row_count(5);
        table.set_row_cursor(3);
        assert_eq!(table.row_cursor(), Some(3));
        table.clear_row_cursor();
        assert_eq!(table.row_cursor(), None);
    }

    #[test]
    fn test_builder_state() {
        let table = Table::new("orders", "order")
            .with_row_count(40)
            .with_page(PageWindow::new(10, 10))
            .with_selection(vec![2, 17]);
        assert_eq!(table.row_count, 40);
        assert_eq!(table.page, PageWindow::new(10, 10));
        assert_eq!(table.selection, vec![2, 17]);
    }

    #[test]
    fn test_page_window_serde_roundtrip() {
        let page = PageWindow::new(20, 10);
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(json, r#"{"first":20,"rows":10}"#);
        let back: PageWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }
}
