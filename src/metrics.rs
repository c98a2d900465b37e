use crate::fit::TextMetrics;
use crate::time_format::REFERENCE_TIME;
use eframe::egui::{Color32, Context, FontId};

/// [`TextMetrics`] backed by the egui font atlas.
///
/// egui does not expose a font's ascent; the monospace row height stands in
/// for it, and the fit's ascent correction keeps the resulting placement
/// from clipping glyph tops.
pub struct CanvasMetrics<'a> {
    ctx: &'a Context,
}

impl<'a> CanvasMetrics<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }
}

impl TextMetrics for CanvasMetrics<'_> {
    fn reference_width(&self, pt: u32) -> f32 {
        self.ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(
                    REFERENCE_TIME.to_owned(),
                    FontId::monospace(pt as f32),
                    Color32::WHITE,
                )
                .size()
                .x
        })
    }

    fn ascent(&self, pt: u32) -> f32 {
        self.ctx
            .fonts(|fonts| fonts.row_height(&FontId::monospace(pt as f32)))
    }
}
