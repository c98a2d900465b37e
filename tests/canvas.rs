use eframe::egui;
use milliclock::canvas::ClockCanvas;
use milliclock::fit::{LayoutState, TextMetrics, MARGIN};
use milliclock::log_sink::LogSink;
use tempfile::tempdir;

/// Linear glyph model with an adjustable scale, so a refit with different
/// metrics is observable.
struct FakeMetrics {
    em: f32,
}

impl TextMetrics for FakeMetrics {
    fn reference_width(&self, pt: u32) -> f32 {
        pt as f32 * 0.6 * self.em * 12.0
    }

    fn ascent(&self, pt: u32) -> f32 {
        pt as f32 * 0.75 * self.em
    }
}

fn disabled_sink() -> LogSink {
    let dir = tempdir().unwrap();
    LogSink::new(dir.path().join("ClockLog.txt"), 0)
}

#[test]
fn starts_with_the_default_layout() {
    let canvas = ClockCanvas::new(disabled_sink());
    assert_eq!(canvas.layout, LayoutState::default());
}

#[test]
fn resize_refits_the_layout() {
    let mut canvas = ClockCanvas::new(disabled_sink());

    canvas.handle_resize(egui::vec2(800.0, 110.0), &FakeMetrics { em: 1.0 });
    let small = canvas.layout.clone();
    assert_ne!(small, LayoutState::default());
    assert_eq!(small.origin.x, MARGIN);

    canvas.handle_resize(egui::vec2(1600.0, 220.0), &FakeMetrics { em: 1.0 });
    assert!(canvas.layout.font_size_pt >= small.font_size_pt);
}

#[test]
fn unchanged_size_does_not_refit() {
    let mut canvas = ClockCanvas::new(disabled_sink());

    canvas.handle_resize(egui::vec2(800.0, 110.0), &FakeMetrics { em: 1.0 });
    let fitted = canvas.layout.clone();

    // same size with different metrics: the fit must not run again
    canvas.handle_resize(egui::vec2(800.0, 110.0), &FakeMetrics { em: 2.0 });
    assert_eq!(canvas.layout, fitted);
}

#[test]
fn minimum_size_matches_the_advertised_canvas() {
    let min = ClockCanvas::min_size();
    assert_eq!(min.x, 800.0);
    assert_eq!(min.y, 110.0);
}
