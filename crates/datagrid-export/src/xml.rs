//! XML serialization backend.

use crate::document::{Document, DocumentBuilder};
use crate::escape::escape_text;

/// Document declaration emitted ahead of the root element.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\"?>\n";

/// Builds the XML rendition: one child element per exported row, one
/// grandchild element per exported column, all data as element content.
/// No namespaces and no attributes.
///
/// Rows are indented with one tab, cells with two; the root close tag
/// carries no trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlBuilder;

impl XmlBuilder {
    /// Create the XML builder.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentBuilder for XmlBuilder {
    fn content_type(&self) -> &'static str {
        "text/xml"
    }

    fn file_extension(&self) -> &'static str {
        "xml"
    }

    fn open_document(&self, document: &mut Document) {
        document.append(XML_DECLARATION);
    }

    fn open_root(&self, document: &mut Document, name: &str) {
        document.append(&format!("<{name}>\n"));
    }

    fn open_row(&self, document: &mut Document, name: &str) {
        document.append(&format!("\t<{name}>\n"));
    }

    fn open_cell(&self, document: &mut Document, tag: &str) {
        document.append(&format!("\t\t<{tag}>"));
    }

    fn append_value(&self, document: &mut Document, value: &str) {
        document.append(&escape_text(value));
    }

    fn close_cell(&self, document: &mut Document, tag: &str) {
        document.append(&format!("</{tag}>\n"));
    }

    fn close_row(&self, document: &mut Document, name: &str) {
        document.append(&format!("\t</{name}>\n"));
    }

    fn close_root(&self, document: &mut Document, name: &str) {
        document.append(&format!("</{name}>"));
    }
}
