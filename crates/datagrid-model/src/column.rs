//! Table columns and their per-cell callbacks.

use std::error::Error;
use std::fmt;

use crate::render::{RenderNode, RowContext};

/// Boxed error returned by caller-supplied cell extractors.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Caller-supplied extraction callback.
///
/// When present it takes priority over child-node rendering and its return
/// value is used verbatim. Failures abort the export; they are never
/// silently dropped.
pub type CellExtractor = Box<dyn Fn(&RowContext) -> Result<String, BoxError>>;

/// Per-row refresh capability for columns materialized from a model.
///
/// Implemented only by columns whose view must be re-materialized before
/// each row is read. Static columns carry no implementation.
pub trait DynamicModel {
    /// Re-materialize the column's stateless view for the given row.
    fn refresh_for_row(&mut self, row: &RowContext);
}

/// A named, orderable field of a table.
///
/// A column is eligible for export only when both `rendered` and
/// `exportable` are set. Its cell value comes from the extractor when one is
/// supplied, otherwise from its child render nodes.
pub struct Column {
    /// Columns not currently rendered are skipped by the export traversal.
    pub rendered: bool,
    /// Columns opted out of export are skipped even when rendered.
    pub exportable: bool,
    /// Explicit export tag override; wins over all other naming sources.
    pub export_header: Option<String>,
    /// Plain header text, the second naming source.
    pub header_text: Option<String>,
    /// Header facet render subtree, the last naming source.
    pub header_facet: Option<RenderNode>,
    /// Per-row cell render subtree, evaluated in declared order.
    pub children: Vec<RenderNode>,
    extractor: Option<CellExtractor>,
    dynamic: Option<Box<dyn DynamicModel>>,
}

impl Column {
    /// Create a rendered, exportable column with no content sources.
    pub fn new() -> Self {
        Self {
            rendered: true,
            exportable: true,
            export_header: None,
            header_text: None,
            header_facet: None,
            children: Vec::new(),
            extractor: None,
            dynamic: None,
        }
    }

    /// Set the rendered flag.
    #[must_use]
    pub fn with_rendered(mut self, rendered: bool) -> Self {
        self.rendered = rendered;
        self
    }

    /// Set the exportable flag.
    #[must_use]
    pub fn with_exportable(mut self, exportable: bool) -> Self {
        self.exportable = exportable;
        self
    }

    /// Set the explicit export tag override.
    #[must_use]
    pub fn with_export_header(mut self, text: impl Into<String>) -> Self {
        self.export_header = Some(text.into());
        self
    }

    /// Set the plain header text.
    #[must_use]
    pub fn with_header_text(mut self, text: impl Into<String>) -> Self {
        self.header_text = Some(text.into());
        self
    }

    /// Attach a header facet subtree.
    #[must_use]
    pub fn with_header_facet(mut self, facet: RenderNode) -> Self {
        self.header_facet = Some(facet);
        self
    }

    /// Append a child cell node.
    #[must_use]
    pub fn with_child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    /// Attach a cell extraction callback.
    #[must_use]
    pub fn with_extractor(mut self, extractor: CellExtractor) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Attach a dynamic model, enabling per-row refresh.
    #[must_use]
    pub fn with_dynamic(mut self, model: Box<dyn DynamicModel>) -> Self {
        self.dynamic = Some(model);
        self
    }

    /// The cell extraction callback, when one was supplied.
    pub fn extractor(&self) -> Option<&CellExtractor> {
        self.extractor.as_ref()
    }

    /// Whether this column is backed by a dynamic model.
    pub fn is_dynamic(&self) -> bool {
        self.dynamic.is_some()
    }

    /// Refresh the column's stateless view for the given row.
    ///
    /// No-op for static columns.
    pub fn refresh_for_row(&mut self, row: &RowContext) {
        if let Some(model) = self.dynamic.as_mut() {
            model.refresh_for_row(row);
        }
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("rendered", &self.rendered)
            .field("exportable", &self.exportable)
            .field("export_header", &self.export_header)
            .field("header_text", &self.header_text)
            .field("header_facet", &self.header_facet)
            .field("children", &self.children)
            .field("has_extractor", &self.extractor.is_some())
            .field("dynamic", &self.dynamic.is_some())
            .finish()
    }
}
