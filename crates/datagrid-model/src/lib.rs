//! Data model for exportable grid components.
//!
//! This crate defines the table-side types the export backends traverse:
//! tables, columns, render-tree handles, and the collaborator interfaces the
//! export core needs from the host framework (text rendering, per-row column
//! refresh, caller-supplied cell extraction). It performs no I/O itself.

mod column;
mod render;
mod table;

pub use column::{BoxError, CellExtractor, Column, DynamicModel};
pub use render::{RenderNode, RowContext, TextRenderer};
pub use table::{PageWindow, Table};
