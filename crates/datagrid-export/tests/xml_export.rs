//! End-to-end XML export tests.

use std::collections::HashMap;

use datagrid_export::{
    Encoding, ExportContext, ExportError, ExportMode, ExportRequest, Exporter, MemoryTransport,
    XmlExporter,
};
use datagrid_model::{Column, PageWindow, RenderNode, RowContext, Table, TextRenderer};

/// Renderer backed by in-memory grid data: cell nodes resolve against the
/// current row, header facets against a row-less lookup.
struct GridRenderer {
    headers: HashMap<String, String>,
    rows: Vec<HashMap<String, String>>,
}

impl GridRenderer {
    fn new() -> Self {
        Self {
            headers: HashMap::new(),
            rows: Vec::new(),
        }
    }

    fn with_header(mut self, key: &str, text: &str) -> Self {
        self.headers.insert(key.to_string(), text.to_string());
        self
    }

    fn with_row(mut self, cells: &[(&str, &str)]) -> Self {
        self.rows.push(
            cells
                .iter()
                .map(|&(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        );
        self
    }
}

impl TextRenderer for GridRenderer {
    fn render_to_text(&self, node: &RenderNode, row: Option<&RowContext>) -> Option<String> {
        match row {
            Some(row) => self.rows.get(row.index)?.get(&node.key).cloned(),
            None => self.headers.get(&node.key).cloned(),
        }
    }
}

fn people_renderer() -> GridRenderer {
    GridRenderer::new()
        .with_row(&[("name", "Ann"), ("age", "30")])
        .with_row(&[("name", "Bo"), ("age", "<25>")])
}

fn people_table() -> Table {
    Table::new("tbl", "row").with_row_count(2).with_columns(vec![
        Column::new()
            .with_header_text("Name")
            .with_child(RenderNode::new("name")),
        Column::new()
            .with_header_text("Age")
            .with_child(RenderNode::new("age")),
    ])
}

fn run_export(
    table: &mut Table,
    renderer: &GridRenderer,
    request: ExportRequest,
) -> (MemoryTransport, Result<(), ExportError>) {
    let mut transport = MemoryTransport::new();
    let result = {
        let mut ctx = ExportContext::new(renderer, &mut transport);
        XmlExporter::new().export(&mut ctx, table, request)
    };
    (transport, result)
}

#[test]
fn test_exports_all_rows_exactly() {
    let renderer = people_renderer();
    let mut table = people_table();
    let (transport, result) = run_export(&mut table, &renderer, ExportRequest::new("tbl"));
    result.unwrap();

    assert_eq!(
        transport.body_text().as_deref(),
        Some(
            "<?xml version=\"1.0\"?>\n\
             <tbl>\n\
             \t<row>\n\
             \t\t<name>Ann</name>\n\
             \t\t<age>30</age>\n\
             \t</row>\n\
             \t<row>\n\
             \t\t<name>Bo</name>\n\
             \t\t<age>&lt;25&gt;</age>\n\
             \t</row>\n\
             </tbl>"
        )
    );

    let metadata = transport.metadata.unwrap();
    assert_eq!(metadata.filename, "tbl.xml");
    assert_eq!(metadata.content_type, "text/xml");
}

#[test]
fn test_page_only_exports_the_window() {
    let renderer = GridRenderer::new()
        .with_row(&[("name", "r0")])
        .with_row(&[("name", "r1")])
        .with_row(&[("name", "r2")])
        .with_row(&[("name", "r3")]);
    let mut table = Table::new("tbl", "row")
        .with_row_count(4)
        .with_page(PageWindow::new(1, 2))
        .with_columns(vec![
            Column::new()
                .with_header_text("Name")
                .with_child(RenderNode::new("name")),
        ]);

    let request = ExportRequest::new("tbl").with_mode(ExportMode::PageOnly);
    let (transport, result) = run_export(&mut table, &renderer, request);
    result.unwrap();

    let body = transport.body_text().unwrap();
    assert!(!body.contains("r0"));
    assert!(body.contains("r1"));
    assert!(body.contains("r2"));
    assert!(!body.contains("r3"));
}

#[test]
fn test_selection_only_exports_selection_order() {
    let renderer = GridRenderer::new()
        .with_row(&[("name", "r0")])
        .with_row(&[("name", "r1")])
        .with_row(&[("name", "r2")]);
    let mut table = Table::new("tbl", "row")
        .with_row_count(3)
        .with_selection(vec![2, 0, 2])
        .with_columns(vec![
            Column::new()
                .with_header_text("Name")
                .with_child(RenderNode::new("name")),
        ]);

    let request = ExportRequest::new("tbl").with_mode(ExportMode::SelectionOnly);
    let (transport, result) = run_export(&mut table, &renderer, request);
    result.unwrap();

    let body = transport.body_text().unwrap();
    assert_eq!(body.matches("<name>").count(), 2);
    assert!(body.find("r2").unwrap() < body.find("r0").unwrap());
    assert!(!body.contains("r1"));
}

#[test]
fn test_export_header_override_wins_over_header_text() {
    let renderer = people_renderer();
    let mut table = Table::new("tbl", "row").with_row_count(1).with_columns(vec![
        Column::new()
            .with_export_header("Full Name")
            .with_header_text("Name")
            .with_child(RenderNode::new("name")),
    ]);

    let (transport, result) = run_export(&mut table, &renderer, ExportRequest::new("tbl"));
    result.unwrap();
    assert!(transport.body_text().unwrap().contains("<full_name>Ann</full_name>"));
}

#[test]
fn test_facet_header_names_the_tag() {
    let renderer = people_renderer().with_header("age-header", "Age In Years");
    let mut table = Table::new("tbl", "row").with_row_count(1).with_columns(vec![
        Column::new()
            .with_header_facet(RenderNode::new("age-header"))
            .with_child(RenderNode::new("age")),
    ]);

    let (transport, result) = run_export(&mut table, &renderer, ExportRequest::new("tbl"));
    result.unwrap();
    assert!(
        transport
            .body_text()
            .unwrap()
            .contains("<age_in_years>30</age_in_years>")
    );
}

#[test]
fn test_unnamed_column_aborts_without_delivery() {
    let renderer = people_renderer();
    let mut table = Table::new("tbl", "row").with_row_count(2).with_columns(vec![
        Column::new()
            .with_header_text("Name")
            .with_child(RenderNode::new("name")),
        Column::new().with_child(RenderNode::new("age")),
    ]);

    let (transport, result) = run_export(&mut table, &renderer, ExportRequest::new("tbl"));
    let err = result.unwrap_err();
    assert!(matches!(err, ExportError::NoTagAvailable { index: 1 }));
    assert!(transport.body.is_none(), "no partial document may be delivered");
    assert_eq!(table.row_cursor(), None);
}

#[test]
fn test_extractor_failure_aborts_without_delivery() {
    let renderer = people_renderer();
    let mut table = Table::new("tbl", "row").with_row_count(2).with_columns(vec![
        Column::new()
            .with_header_text("Name")
            .with_extractor(Box::new(|row| {
                if row.index == 1 {
                    Err("lookup failed".into())
                } else {
                    Ok("fine".to_string())
                }
            })),
    ]);

    let (transport, result) = run_export(&mut table, &renderer, ExportRequest::new("tbl"));
    let err = result.unwrap_err();
    assert!(matches!(err, ExportError::ExtractorFailed { index: 0, .. }));
    assert!(transport.body.is_none());
    assert_eq!(table.row_cursor(), None);
}

#[test]
fn test_cursor_neutral_after_success() {
    let renderer = people_renderer();
    let mut table = people_table();
    let (_, result) = run_export(&mut table, &renderer, ExportRequest::new("tbl"));
    result.unwrap();
    assert_eq!(table.row_cursor(), None);
}

#[test]
fn test_pre_hook_output_precedes_root_content() {
    let renderer = people_renderer();
    let mut table = people_table();
    let request = ExportRequest::new("tbl")
        .with_pre_hook(Box::new(|document| {
            document.append("<!-- exported for audit -->\n");
        }))
        .with_post_hook(Box::new(|document| {
            document.append("\n<!-- end -->");
        }));

    let (transport, result) = run_export(&mut table, &renderer, request);
    result.unwrap();

    let body = transport.body_text().unwrap();
    assert!(body.starts_with("<!-- exported for audit -->\n<?xml"));
    assert!(body.ends_with("</tbl>\n<!-- end -->"));
    assert!(body.find("<!-- exported for audit -->").unwrap() < body.find("<tbl>").unwrap());
}

#[test]
fn test_missing_cell_value_yields_empty_element() {
    let renderer = GridRenderer::new().with_row(&[("name", "Ann")]);
    let mut table = Table::new("tbl", "row").with_row_count(1).with_columns(vec![
        Column::new()
            .with_header_text("Name")
            .with_child(RenderNode::new("name")),
        Column::new()
            .with_header_text("Nickname")
            .with_child(RenderNode::new("nickname")),
    ]);

    let (transport, result) = run_export(&mut table, &renderer, ExportRequest::new("tbl"));
    result.unwrap();
    assert!(transport.body_text().unwrap().contains("<nickname></nickname>"));
}

#[test]
fn test_latin1_body_is_encoded() {
    let renderer = GridRenderer::new().with_row(&[("name", "Aimée")]);
    let mut table = Table::new("tbl", "row").with_row_count(1).with_columns(vec![
        Column::new()
            .with_header_text("Name")
            .with_child(RenderNode::new("name")),
    ]);

    let request = ExportRequest::new("tbl").with_encoding(Encoding::Latin1);
    let (transport, result) = run_export(&mut table, &renderer, request);
    result.unwrap();

    let body = transport.body.unwrap();
    assert!(body.windows(5).any(|w| w == b"Aim\xe9e"));
}

#[test]
fn test_forward_declared_entry_points_fail_fast() {
    let renderer = people_renderer();
    let mut transport = MemoryTransport::new();
    let mut ctx = ExportContext::new(&renderer, &mut transport);
    let exporter = XmlExporter::new();

    let err = exporter
        .export_by_ids(&mut ctx, &["tbl"], ExportRequest::new("tbl"))
        .unwrap_err();
    assert!(matches!(err, ExportError::Unsupported { operation: "by-identifier" }));

    let err = exporter
        .export_many(&mut ctx, &mut [], ExportRequest::new("tbl"))
        .unwrap_err();
    assert!(matches!(err, ExportError::Unsupported { operation: "multi-table" }));

    assert!(transport.metadata.is_none());
    assert!(transport.body.is_none());
}

#[test]
fn test_inventory_snapshot() {
    let renderer = GridRenderer::new()
        .with_header("price-header", "Unit Price")
        .with_row(&[
            ("sku", "A-100"),
            ("desc", "Anvil & hammer"),
            ("price", "19.99"),
        ])
        .with_row(&[("sku", "B-200"), ("desc", "Rope (50')"), ("price", "7.50")])
        .with_row(&[("sku", "C-300"), ("price", "120")]);

    let mut table = Table::new("inventory", "item")
        .with_row_count(3)
        .with_columns(vec![
            Column::new()
                .with_export_header("SKU")
                .with_child(RenderNode::new("sku")),
            Column::new()
                .with_header_text("Description")
                .with_child(RenderNode::new("desc")),
            Column::new()
                .with_header_facet(RenderNode::new("price-header"))
                .with_child(RenderNode::new("price")),
        ]);

    let (transport, result) = run_export(&mut table, &renderer, ExportRequest::new("inventory"));
    result.unwrap();

    let document = transport.body_text().unwrap();
    insta::assert_snapshot!(document);
}
