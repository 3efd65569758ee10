//! The in-progress export document and the per-format builder seam.

use std::fmt;

/// Mutable text buffer holding one export's serialized output.
///
/// Owned by a single export call from creation to delivery; never shared
/// across exports. Pre/post hooks receive it mutably and may rewrite the
/// buffered text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw text to the buffer.
    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// The buffered text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Mutable access for hooks that rewrite the buffer.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Consume the document into its buffered text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Buffered length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether nothing has been buffered yet.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Per-format serialization backend driven by the document assembler.
///
/// The row/column traversal is shared across the exporter family (XML, CSV,
/// spreadsheet, PDF); implementations only decide how structure and values
/// are written. Escaping values is the builder's concern, since it is
/// format-specific. Names passed to the structural methods must already be
/// legal for the format.
pub trait DocumentBuilder {
    /// MIME type delivered with the finished document.
    fn content_type(&self) -> &'static str;

    /// File extension appended to the requested filename.
    fn file_extension(&self) -> &'static str;

    /// Write the document preamble.
    fn open_document(&self, document: &mut Document);

    /// Open the root element.
    fn open_root(&self, document: &mut Document, name: &str);

    /// Open one row element.
    fn open_row(&self, document: &mut Document, name: &str);

    /// Open one cell element.
    fn open_cell(&self, document: &mut Document, tag: &str);

    /// Append a cell value, escaped for the format.
    fn append_value(&self, document: &mut Document, value: &str);

    /// Close one cell element.
    fn close_cell(&self, document: &mut Document, tag: &str);

    /// Close one row element.
    fn close_row(&self, document: &mut Document, name: &str);

    /// Close the root element.
    fn close_root(&self, document: &mut Document, name: &str);
}
