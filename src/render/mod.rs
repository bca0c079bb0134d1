//! Path renderers for coordinate tables
//!
//! Two variants share one page model: the polyline renderer joins every
//! consecutive pair of rows, the pen-path renderer draws only where the
//! row's flag asks for it. Both emit segments onto a page-bound
//! coordinate frame of 100 units per inch with the y axis growing
//! downward and no axis decoration.

pub mod config;
pub mod pdf;

pub use config::{Color, PageSize, RenderParameters};

use crate::loader::Table;

/// Coordinate frame scale: user units per inch of page
pub const UNITS_PER_INCH: f64 = 100.0;

/// A point in page user units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The plotter origin, top-left of the page
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// One drawn stroke between two consecutive pen positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Stroke styling applied to every segment on a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// One finished page drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Physical width in inches
    pub width: f64,
    /// Physical height in inches
    pub height: f64,
    pub stroke: Stroke,
    pub segments: Vec<Segment>,
}

impl Page {
    fn blank(params: &RenderParameters) -> Self {
        Self {
            width: params.page_width,
            height: params.page_height,
            stroke: Stroke {
                color: params.stroke_color,
                width: params.stroke_width,
            },
            segments: Vec::new(),
        }
    }

    /// Coordinate extent of the page in user units
    pub fn bounds(&self) -> (f64, f64) {
        (self.width * UNITS_PER_INCH, self.height * UNITS_PER_INCH)
    }
}

/// Render a two-column table as an unbroken polyline.
///
/// Every consecutive pair of rows becomes one segment; fewer than two
/// rows yields a page with no segments. Always exactly one page.
pub fn render_polyline(table: &Table, params: &RenderParameters) -> Page {
    let mut page = Page::blank(params);
    for pair in table.records.windows(2) {
        page.segments.push(Segment {
            from: Point::new(pair[0].x, pair[0].y),
            to: Point::new(pair[1].x, pair[1].y),
        });
    }
    page
}

/// Render a three-column table through the pen-position state machine.
///
/// The pen starts at the plotter origin and moves to every record's
/// position; a flag of 1 draws on the way, anything else lifts the pen
/// for that move. Only the position is tracked, so "down" is decided
/// per record rather than being a sticky mode.
///
/// The accumulated page is kept only when the final pen position is not
/// exactly the origin; a pass that parks the pen back at (0, 0) is
/// treated as having drawn nothing, even when segments were emitted
/// earlier. Output is therefore zero or one pages.
pub fn render_pen_path(table: &Table, params: &RenderParameters) -> Vec<Page> {
    let mut page = Page::blank(params);
    let mut last = Point::origin();

    for record in &table.records {
        let next = Point::new(record.x, record.y);
        if record.pen_down() {
            page.segments.push(Segment { from: last, to: next });
        }
        last = next;
    }

    if last == Point::origin() {
        return Vec::new();
    }
    vec![page]
}
