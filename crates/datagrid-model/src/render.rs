//! Render-tree handles and the render collaborator interface.

use serde::{Deserialize, Serialize};

/// Opaque handle into the host framework's render tree.
///
/// The export core never interprets `key`; it only forwards the node to the
/// [`TextRenderer`] collaborator and honors the `rendered` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderNode {
    /// Identifies the node to the render collaborator.
    pub key: String,
    /// Nodes not marked rendered contribute no content.
    pub rendered: bool,
}

impl RenderNode {
    /// Create a rendered node with the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            rendered: true,
        }
    }

    /// Set the rendered flag.
    #[must_use]
    pub fn with_rendered(mut self, rendered: bool) -> Self {
        self.rendered = rendered;
        self
    }
}

/// Row context passed explicitly down the resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowContext {
    /// Zero-based row index within the table.
    pub index: usize,
}

impl RowContext {
    /// Context for the given row index.
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

/// Render collaborator: produces the current textual value of a node.
///
/// `row` is `None` when the node is resolved outside any row, as for a
/// column's header facet.
pub trait TextRenderer {
    /// Render a node to text, or `None` when it has no textual value.
    fn render_to_text(&self, node: &RenderNode, row: Option<&RowContext>) -> Option<String>;
}
