//! Pen Sketcher - renders pen-plotter coordinate tables to PDF
//!
//! This library parses comma-separated `x,y` (or `x,y,flag`) rows,
//! walks them once to emit straight line segments (a flag of 1 draws,
//! anything else lifts the pen), confines the drawing to a page of
//! configurable size, and serializes the result as a multi-page PDF
//! byte buffer.
//!
//! # Example
//!
//! ```rust
//! use pen_sketcher::{sketch, Columns, RenderParameters};
//!
//! let pdf = sketch(
//!     "0,0\n100,100\n200,50",
//!     Columns::Two,
//!     &RenderParameters::default(),
//! )
//! .unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

pub mod error;
pub mod export;
pub mod loader;
pub mod render;

pub use error::LoadError;
pub use export::{resolve_file_name, PDF_MIME};
pub use loader::{load, Columns, Record, Table};
pub use render::config::{ColorError, SettingsError};
pub use render::{
    render_pen_path, render_polyline, Color, Page, PageSize, Point, RenderParameters, Segment,
};

use thiserror::Error;

/// Errors that can occur in the sketch pipeline
///
/// Rendering and serialization have no failure modes of their own, so
/// everything that can go wrong happens while loading the table.
#[derive(Debug, Error)]
pub enum SketchError {
    /// Error while loading the coordinate table
    #[error("load error: {0}")]
    Load(#[from] LoadError),
}

/// Render the coordinate table into finished page drawings.
///
/// Two-column input always yields exactly one page (possibly with no
/// segments); three-column input yields zero or one pages depending on
/// where the pen comes to rest.
pub fn render_pages(
    source: &str,
    columns: Columns,
    params: &RenderParameters,
) -> Result<Vec<Page>, SketchError> {
    let table = loader::load(source, columns)?;
    let pages = match table.columns {
        Columns::Two => vec![render::render_polyline(&table, params)],
        Columns::Three => render::render_pen_path(&table, params),
    };
    Ok(pages)
}

/// Render the coordinate table and serialize it to PDF bytes.
///
/// This is the main entry point for the library.
pub fn sketch(
    source: &str,
    columns: Columns,
    params: &RenderParameters,
) -> Result<Vec<u8>, SketchError> {
    let pages = render_pages(source, columns, params)?;
    Ok(render::pdf::serialize(&pages))
}
