//! PDF document serializer
//!
//! Turns a list of page drawings into one multi-page PDF held entirely
//! in memory. Pure function of its input: the same pages always
//! produce byte-identical output, and a zero-page list still yields a
//! valid (empty) document.

use pdf_writer::{Content, Finish, Pdf, Rect, Ref};

use super::{Page, Point, UNITS_PER_INCH};

/// Physical points per inch of PDF page space
const POINTS_PER_INCH: f64 = 72.0;

/// Serialize the pages into a single PDF byte buffer, one document
/// page per drawing in input order, each at its declared physical
/// size.
pub fn serialize(pages: &[Page]) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);

    let ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (alloc.bump(), alloc.bump())).collect();

    pdf.pages(page_tree_id)
        .kids(ids.iter().map(|&(page_id, _)| page_id))
        .count(pages.len() as i32);

    for (page, &(page_id, content_id)) in pages.iter().zip(&ids) {
        let width_pt = (page.width * POINTS_PER_INCH) as f32;
        let height_pt = (page.height * POINTS_PER_INCH) as f32;

        let mut doc_page = pdf.page(page_id);
        doc_page.media_box(Rect::new(0.0, 0.0, width_pt, height_pt));
        doc_page.parent(page_tree_id);
        doc_page.contents(content_id);
        doc_page.finish();

        pdf.stream(content_id, &page_content(page, height_pt));
    }

    pdf.finish()
}

/// Build one page's content stream.
///
/// Segment endpoints live in user units: 100 per inch, y growing
/// downward from the top-left. PDF page space is 72 points per inch
/// with y growing upward from the bottom-left, so each endpoint is
/// scaled and mirrored here. Stroke width stays in points, matching
/// what the caller asked for.
fn page_content(page: &Page, height_pt: f32) -> Vec<u8> {
    let scale = POINTS_PER_INCH / UNITS_PER_INCH;
    let to_page_space = |p: Point| -> (f32, f32) {
        ((p.x * scale) as f32, height_pt - (p.y * scale) as f32)
    };

    let mut content = Content::new();
    content.set_line_width(page.stroke.width as f32);
    content.set_stroke_rgb(
        page.stroke.color.r as f32,
        page.stroke.color.g as f32,
        page.stroke.color.b as f32,
    );
    for segment in &page.segments {
        let (x1, y1) = to_page_space(segment.from);
        let (x2, y2) = to_page_space(segment.to);
        content.move_to(x1, y1);
        content.line_to(x2, y2);
        content.stroke();
    }
    content.finish().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Color, RenderParameters, Segment, Stroke};

    fn page_with_segments(segments: Vec<Segment>) -> Page {
        let params = RenderParameters::default();
        Page {
            width: params.page_width,
            height: params.page_height,
            stroke: Stroke {
                color: params.stroke_color,
                width: params.stroke_width,
            },
            segments,
        }
    }

    fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| w == &needle).count()
    }

    #[test]
    fn test_output_is_pdf() {
        let bytes = serialize(&[page_with_segments(vec![])]);
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_one_media_box_per_page() {
        let page = page_with_segments(vec![]);
        let bytes = serialize(&[page.clone(), page.clone(), page]);
        assert_eq!(count_occurrences(&bytes, b"/MediaBox"), 3);
    }

    #[test]
    fn test_empty_document_is_valid() {
        let bytes = serialize(&[]);
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count_occurrences(&bytes, b"/MediaBox"), 0);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let pages = vec![page_with_segments(vec![Segment {
            from: Point::new(0.0, 0.0),
            to: Point::new(100.0, 200.0),
        }])];
        assert_eq!(serialize(&pages), serialize(&pages));
    }

    #[test]
    fn test_stroke_color_written_to_content() {
        let params = RenderParameters::new().with_stroke_color(Color::rgb(1.0, 0.0, 0.0));
        let page = Page {
            width: params.page_width,
            height: params.page_height,
            stroke: Stroke { color: params.stroke_color, width: 2.0 },
            segments: vec![Segment {
                from: Point::new(0.0, 0.0),
                to: Point::new(10.0, 10.0),
            }],
        };
        let bytes = serialize(&[page]);
        // RG sets the stroking color in the content stream
        assert!(count_occurrences(&bytes, b" RG") > 0);
    }
}
