use crate::fit::{
    fit_layout, LayoutState, TextMetrics, CANVAS_MIN_HEIGHT, CANVAS_MIN_WIDTH, MARGIN,
};
use crate::log_sink::LogSink;
use crate::metrics::CanvasMetrics;
use crate::time_format;
use eframe::egui::{self, Align2, Color32, FontId, NumExt, Sense, Vec2};

/// The clock drawing surface: current layout, the size that layout was
/// fitted for, and the timestamp sink.
pub struct ClockCanvas {
    pub layout: LayoutState,
    fitted_size: Option<Vec2>,
    log: LogSink,
}

impl ClockCanvas {
    pub fn new(log: LogSink) -> Self {
        Self {
            layout: LayoutState::default(),
            fitted_size: None,
            log,
        }
    }

    pub fn min_size() -> Vec2 {
        egui::vec2(CANVAS_MIN_WIDTH, CANVAS_MIN_HEIGHT)
    }

    /// Recompute the layout for a new canvas size. No-op when the size is
    /// unchanged; the fit search is too expensive to run every frame.
    pub fn handle_resize(&mut self, size: Vec2, metrics: &dyn TextMetrics) {
        if self.fitted_size == Some(size) {
            return;
        }
        self.layout = fit_layout(metrics, size, MARGIN);
        self.fitted_size = Some(size);
        tracing::debug!(
            font_pt = self.layout.font_size_pt,
            width = size.x,
            height = size.y,
            "refitted clock layout"
        );
    }

    /// Draw one frame: refit if the canvas size changed, paint the current
    /// time, and forward the rendered string to the log sink.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let desired = ui.available_size().at_least(Self::min_size());
        let (rect, _response) = ui.allocate_exact_size(desired, Sense::hover());

        self.handle_resize(rect.size(), &CanvasMetrics::new(ui.ctx()));

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::BLACK);

        let time = time_format::now_string();
        let clip = self.layout.invalidation.translate(rect.min.to_vec2());
        painter.with_clip_rect(clip).text(
            rect.min + self.layout.origin.to_vec2(),
            Align2::LEFT_BOTTOM,
            &time,
            FontId::monospace(self.layout.font_size_pt as f32),
            Color32::WHITE,
        );

        self.log.record(&time);
    }
}
