//! Export engine for grid components.
//!
//! Converts an in-memory table (rows of columns, each column backed by
//! child cell-renderers) into a serialized document representing the
//! table's visible or selected content, for user-triggered file download.
//!
//! The row/column traversal is shared across backend formats through the
//! [`DocumentBuilder`] seam; this crate ships the XML backend. Per cell,
//! the exportable value comes from a caller-supplied extractor or from the
//! rendered child nodes, the element name from the column's header sources,
//! and everything is escaped before it reaches the document buffer.
//!
//! # Example
//!
//! ```
//! use datagrid_export::{ExportContext, ExportRequest, Exporter, MemoryTransport, XmlExporter};
//! use datagrid_model::{Column, RenderNode, RowContext, Table, TextRenderer};
//!
//! struct Names(Vec<&'static str>);
//!
//! impl TextRenderer for Names {
//!     fn render_to_text(&self, _node: &RenderNode, row: Option<&RowContext>) -> Option<String> {
//!         row.map(|row| self.0[row.index].to_string())
//!     }
//! }
//!
//! let mut table = Table::new("people", "person")
//!     .with_row_count(2)
//!     .with_columns(vec![
//!         Column::new()
//!             .with_header_text("Name")
//!             .with_child(RenderNode::new("name")),
//!     ]);
//!
//! let renderer = Names(vec!["Ann", "Bo"]);
//! let mut transport = MemoryTransport::new();
//! let mut ctx = ExportContext::new(&renderer, &mut transport);
//! XmlExporter::new()
//!     .export(&mut ctx, &mut table, ExportRequest::new("people"))
//!     .unwrap();
//! assert!(transport.body_text().unwrap().contains("<name>Ann</name>"));
//! ```

mod assemble;
mod document;
mod encoding;
mod error;
mod escape;
mod exporter;
mod resolve;
mod scope;
mod tag;
mod transport;
mod xml;

pub use assemble::assemble;
pub use document::{Document, DocumentBuilder};
pub use encoding::Encoding;
pub use error::{ExportError, Result};
pub use escape::{escape_tag_name, escape_text, is_legal_tag_name};
pub use exporter::{
    DocumentHook, ExportContext, ExportRequest, Exporter, ExporterOptions, TableRenderHook,
    XmlExporter,
};
pub use resolve::resolve_cell;
pub use scope::{ExportMode, select_rows};
pub use tag::{TagSource, derive_tag, tag_source};
pub use transport::{DOWNLOAD_COOKIE, DownloadMetadata, FileTransport, MemoryTransport, Transport};
pub use xml::{XML_DECLARATION, XmlBuilder};
