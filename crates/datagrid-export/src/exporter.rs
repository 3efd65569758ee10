//! Export façade and per-call configuration.

use std::fmt;

use datagrid_model::{Table, TextRenderer};

use crate::assemble::assemble;
use crate::document::{Document, DocumentBuilder};
use crate::encoding::Encoding;
use crate::error::{ExportError, Result};
use crate::scope::{ExportMode, select_rows};
use crate::transport::{DownloadMetadata, Transport};
use crate::xml::XmlBuilder;

/// Hook invoked with the in-progress document before or after traversal.
///
/// Hooks may rewrite the buffered text arbitrarily; their output is not
/// validated.
pub type DocumentHook = Box<dyn FnMut(&mut Document)>;

/// Hook invoked with the table before a render-based backend draws it.
pub type TableRenderHook = Box<dyn FnMut(&Table)>;

/// Styling options consumed by styled backends (spreadsheet, PDF).
///
/// Carried on every request for signature parity across the exporter
/// family; the XML backend has no styling to apply and ignores them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExporterOptions {
    /// Font color for header facets.
    pub facet_font_color: Option<String>,
    /// Background color for header facets.
    pub facet_bg_color: Option<String>,
    /// Font color for data cells.
    pub cell_font_color: Option<String>,
    /// Font family name.
    pub font_name: Option<String>,
}

/// One export call's configuration.
///
/// Constructed once per export and consumed by it.
pub struct ExportRequest {
    /// Output filename stem; the backend appends its extension.
    pub filename: String,
    /// Row scope.
    pub mode: ExportMode,
    /// Output charset.
    pub encoding: Encoding,
    /// Styling options for styled backends.
    pub options: Option<ExporterOptions>,
    pre_hook: Option<DocumentHook>,
    post_hook: Option<DocumentHook>,
    table_render_hook: Option<TableRenderHook>,
}

impl ExportRequest {
    /// Request exporting all rows as UTF-8 under the given filename stem.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            mode: ExportMode::default(),
            encoding: Encoding::default(),
            options: None,
            pre_hook: None,
            post_hook: None,
            table_render_hook: None,
        }
    }

    /// Set the row scope.
    #[must_use]
    pub fn with_mode(mut self, mode: ExportMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the output charset.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set styling options.
    #[must_use]
    pub fn with_options(mut self, options: ExporterOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Install a hook invoked with the empty document before traversal.
    #[must_use]
    pub fn with_pre_hook(mut self, hook: DocumentHook) -> Self {
        self.pre_hook = Some(hook);
        self
    }

    /// Install a hook invoked with the finished document after traversal.
    #[must_use]
    pub fn with_post_hook(mut self, hook: DocumentHook) -> Self {
        self.post_hook = Some(hook);
        self
    }

    /// Install a hook invoked before a render-based backend draws the
    /// table. The XML backend does not render and never calls it.
    #[must_use]
    pub fn with_table_render_hook(mut self, hook: TableRenderHook) -> Self {
        self.table_render_hook = Some(hook);
        self
    }
}

impl fmt::Debug for ExportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportRequest")
            .field("filename", &self.filename)
            .field("mode", &self.mode)
            .field("encoding", &self.encoding)
            .field("options", &self.options)
            .field("has_pre_hook", &self.pre_hook.is_some())
            .field("has_post_hook", &self.post_hook.is_some())
            .field("has_table_render_hook", &self.table_render_hook.is_some())
            .finish()
    }
}

/// Collaborators an export call runs against, passed explicitly.
pub struct ExportContext<'a> {
    /// Render collaborator resolving node text.
    pub renderer: &'a dyn TextRenderer,
    /// Transport receiving the finished document.
    pub transport: &'a mut dyn Transport,
}

impl<'a> ExportContext<'a> {
    /// Bundle the render and transport collaborators.
    pub fn new(renderer: &'a dyn TextRenderer, transport: &'a mut dyn Transport) -> Self {
        Self {
            renderer,
            transport,
        }
    }
}

/// One entry point per caller-addressing mode.
///
/// Only single-table export is implemented by the XML backend. The
/// by-identifier and multi-table forms are forward-declared extension
/// points that fail fast and perform no work.
pub trait Exporter {
    /// Export a single table.
    fn export(
        &self,
        ctx: &mut ExportContext<'_>,
        table: &mut Table,
        request: ExportRequest,
    ) -> Result<()>;

    /// Export the subset of tables named by identifier.
    fn export_by_ids(
        &self,
        ctx: &mut ExportContext<'_>,
        table_ids: &[&str],
        request: ExportRequest,
    ) -> Result<()>;

    /// Export an explicit list of tables into one document.
    fn export_many(
        &self,
        ctx: &mut ExportContext<'_>,
        tables: &mut [Table],
        request: ExportRequest,
    ) -> Result<()>;
}

/// XML rendition of the exporter family.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlExporter {
    builder: XmlBuilder,
}

impl XmlExporter {
    /// Create the XML exporter.
    pub fn new() -> Self {
        Self {
            builder: XmlBuilder::new(),
        }
    }
}

impl Exporter for XmlExporter {
    fn export(
        &self,
        ctx: &mut ExportContext<'_>,
        table: &mut Table,
        mut request: ExportRequest,
    ) -> Result<()> {
        let filename = format!("{}.{}", request.filename, self.builder.file_extension());
        ctx.transport
            .configure_download(DownloadMetadata::attachment(
                &filename,
                self.builder.content_type(),
            ))
            .map_err(ExportError::TransportWrite)?;

        let mut document = Document::new();
        if let Some(hook) = request.pre_hook.as_mut() {
            hook(&mut document);
        }

        let rows = select_rows(table, request.mode);
        tracing::debug!(
            table = %table.id,
            mode = %request.mode,
            rows = rows.len(),
            "exporting table"
        );
        assemble(table, &rows, &self.builder, ctx.renderer, &mut document)?;

        if let Some(hook) = request.post_hook.as_mut() {
            hook(&mut document);
        }

        let body = request.encoding.encode(document.as_str());
        ctx.transport
            .write_body(&body)
            .map_err(ExportError::TransportWrite)?;
        tracing::debug!(table = %table.id, bytes = body.len(), "export delivered");
        Ok(())
    }

    fn export_by_ids(
        &self,
        _ctx: &mut ExportContext<'_>,
        _table_ids: &[&str],
        _request: ExportRequest,
    ) -> Result<()> {
        Err(ExportError::unsupported("by-identifier"))
    }

    fn export_many(
        &self,
        _ctx: &mut ExportContext<'_>,
        _tables: &mut [Table],
        _request: ExportRequest,
    ) -> Result<()> {
        Err(ExportError::unsupported("multi-table"))
    }
}
