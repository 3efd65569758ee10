//! Cell value resolution.

use datagrid_model::{Column, RowContext, TextRenderer};

use crate::error::{ExportError, Result};

/// Resolve the exportable string for one cell.
///
/// A caller-supplied extractor wins and its value is used verbatim; child
/// nodes are not visited. Otherwise the rendered children's texts are
/// concatenated in child order. `Ok(None)` means no source yielded a value
/// and the cell content is omitted — callers must not turn it into an empty
/// string.
pub fn resolve_cell(
    column: &Column,
    index: usize,
    row: &RowContext,
    renderer: &dyn TextRenderer,
) -> Result<Option<String>> {
    if let Some(extract) = column.extractor() {
        let value = extract(row).map_err(|source| ExportError::extractor_failed(index, source))?;
        return Ok(Some(value));
    }

    let mut value: Option<String> = None;
    for node in &column.children {
        if !node.rendered {
            continue;
        }
        if let Some(text) = renderer.render_to_text(node, Some(row)) {
            value.get_or_insert_with(String::new).push_str(&text);
        }
    }
    Ok(value)
}
