//! Row/column traversal and document assembly.

use datagrid_model::{RowContext, Table, TextRenderer};

use crate::document::{Document, DocumentBuilder};
use crate::error::Result;
use crate::resolve::resolve_cell;
use crate::tag::derive_tag;

/// Assemble the export document for the given row sequence.
///
/// Rows are visited in the order given; columns in declared order, skipping
/// those not both rendered and exportable. Dynamic columns are refreshed
/// before each row is read. `table.id` and `table.var_name` are emitted
/// as-is and must already be legal element names; derived cell tags are
/// sanitized.
///
/// The table's row cursor is restored to its neutral state on every exit
/// path, so even a failed export leaves the component's rendering state
/// untouched. Any tag-derivation or extractor failure aborts the whole
/// assembly; the partially built document must not be delivered.
pub fn assemble(
    table: &mut Table,
    rows: &[usize],
    builder: &dyn DocumentBuilder,
    renderer: &dyn TextRenderer,
    document: &mut Document,
) -> Result<()> {
    let result = assemble_rows(table, rows, builder, renderer, document);
    table.clear_row_cursor();
    result
}

fn assemble_rows(
    table: &mut Table,
    rows: &[usize],
    builder: &dyn DocumentBuilder,
    renderer: &dyn TextRenderer,
    document: &mut Document,
) -> Result<()> {
    builder.open_document(document);
    builder.open_root(document, &table.id);
    for &index in rows {
        table.set_row_cursor(index);
        let row = RowContext::new(index);
        builder.open_row(document, &table.var_name);
        export_cells(table, &row, builder, renderer, document)?;
        builder.close_row(document, &table.var_name);
    }
    builder.close_root(document, &table.id);
    Ok(())
}

fn export_cells(
    table: &mut Table,
    row: &RowContext,
    builder: &dyn DocumentBuilder,
    renderer: &dyn TextRenderer,
    document: &mut Document,
) -> Result<()> {
    for (index, column) in table.columns.iter_mut().enumerate() {
        column.refresh_for_row(row);
        let column = &*column;
        if !(column.rendered && column.exportable) {
            continue;
        }
        let tag = derive_tag(column, index, renderer)?;
        let value = resolve_cell(column, index, row, renderer)?;
        builder.open_cell(document, &tag);
        if let Some(value) = value.as_deref() {
            builder.append_value(document, value);
        }
        builder.close_cell(document, &tag);
    }
    Ok(())
}
