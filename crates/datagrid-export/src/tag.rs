//! Column tag-name derivation.

use datagrid_model::{Column, TextRenderer};

use crate::error::{ExportError, Result};
use crate::escape::escape_tag_name;

/// Which naming source produced a column's tag.
///
/// The fallback chain is a three-way decision: explicit export header, plain
/// header text, then the rendered header facet. No source means the export
/// cannot proceed for that column, since an unnamed element is not
/// serializable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSource {
    /// Explicit export tag override on the column.
    ExportHeader(String),
    /// Plain header text.
    HeaderText(String),
    /// Text rendered from the column's header facet.
    HeaderFacet(String),
}

impl TagSource {
    /// The raw header text carried by this source.
    pub fn into_text(self) -> String {
        match self {
            Self::ExportHeader(text) | Self::HeaderText(text) | Self::HeaderFacet(text) => text,
        }
    }
}

/// Resolve the first available naming source for a column.
///
/// Header facets are rendered without row context.
pub fn tag_source(column: &Column, renderer: &dyn TextRenderer) -> Option<TagSource> {
    if let Some(text) = &column.export_header {
        return Some(TagSource::ExportHeader(text.clone()));
    }
    if let Some(text) = &column.header_text {
        return Some(TagSource::HeaderText(text.clone()));
    }
    let facet = column.header_facet.as_ref()?;
    renderer
        .render_to_text(facet, None)
        .map(TagSource::HeaderFacet)
}

/// Derive the sanitized element name for a column.
///
/// The chosen source text is lower-cased, then sanitized. No source, or a
/// name left empty by sanitization, aborts the export with the column's
/// index.
pub fn derive_tag(column: &Column, index: usize, renderer: &dyn TextRenderer) -> Result<String> {
    let source = tag_source(column, renderer).ok_or_else(|| ExportError::no_tag(index))?;
    let tag = escape_tag_name(&source.into_text().to_lowercase());
    if tag.is_empty() {
        return Err(ExportError::no_tag(index));
    }
    Ok(tag)
}
