use eframe::egui::{pos2, vec2, Pos2, Rect, Vec2};

pub const MIN_FONT_PT: u32 = 12;
pub const MAX_FONT_PT: u32 = 500;
/// Horizontal gap kept between the text and the canvas edges.
pub const MARGIN: f32 = 2.0;

/// Smallest canvas the fit is expected to handle cleanly; the default
/// layout and the advertised minimum window size are both derived from it.
pub const CANVAS_MIN_WIDTH: f32 = 800.0;
pub const CANVAS_MIN_HEIGHT: f32 = 110.0;

/// Font ascent overshoots the visual cap height in typical fonts; the draw
/// origin is scaled down by this factor so the glyph tops are not pushed
/// off the canvas.
const FONT_ASCENT_CORRECTION: f32 = 0.8;

/// Text measurements for a monospaced font at an integer point size.
/// The production implementation is backed by egui's font atlas; tests
/// substitute a fixed glyph model.
pub trait TextMetrics {
    /// Width of [`crate::time_format::REFERENCE_TIME`] at the given size.
    fn reference_width(&self, pt: u32) -> f32;
    /// Baseline-to-top height of the font at the given size.
    fn ascent(&self, pt: u32) -> f32;
}

/// Layout derived from the canvas size: the fitted font size, where the
/// time string is drawn, and the region a redraw must cover.
///
/// Recomputed by [`fit_layout`] on resize only; read by every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    pub font_size_pt: u32,
    pub origin: Pos2,
    pub invalidation: Rect,
}

impl Default for LayoutState {
    /// Safe placeholder used before the first fit, sized for the minimum
    /// canvas.
    fn default() -> Self {
        Self {
            font_size_pt: MIN_FONT_PT,
            origin: pos2(15.0, 5.0),
            invalidation: Rect::from_min_size(
                pos2(MARGIN, MARGIN),
                vec2(CANVAS_MIN_WIDTH, CANVAS_MIN_HEIGHT),
            ),
        }
    }
}

/// Find the largest font size whose reference string fits the canvas, then
/// derive the draw origin and invalidation rectangle for it.
///
/// Ascending linear search over whole point sizes: the first size whose
/// ascent exceeds the canvas height or whose reference width exceeds
/// `width - 2 * margin` stops the search and the previous size wins. A
/// canvas too small even for the minimum settles one below it; a canvas
/// large enough for every candidate keeps the largest one tried.
pub fn fit_layout(metrics: &dyn TextMetrics, canvas: Vec2, margin: f32) -> LayoutState {
    let mut chosen = MAX_FONT_PT - 1;
    for pt in MIN_FONT_PT..MAX_FONT_PT {
        if too_large(metrics, pt, canvas, margin) {
            chosen = pt - 1;
            break;
        }
    }

    let ascent = metrics.ascent(chosen);
    let origin = pos2(margin, (ascent * FONT_ASCENT_CORRECTION).round());
    let invalidation = Rect::from_min_size(
        pos2(origin.x, 0.0),
        vec2(metrics.reference_width(chosen), origin.y + 10.0),
    );
    LayoutState {
        font_size_pt: chosen,
        origin,
        invalidation,
    }
}

fn too_large(metrics: &dyn TextMetrics, pt: u32, canvas: Vec2, margin: f32) -> bool {
    metrics.ascent(pt) > canvas.y || metrics.reference_width(pt) > canvas.x - 2.0 * margin
}
