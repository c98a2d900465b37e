use eframe::egui;
use milliclock::fit::TextMetrics;
use milliclock::metrics::CanvasMetrics;

#[test]
fn measurements_grow_with_the_point_size() {
    let ctx = egui::Context::default();
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        let metrics = CanvasMetrics::new(ctx);
        assert!(metrics.reference_width(24) > metrics.reference_width(12));
        assert!(metrics.ascent(24) > metrics.ascent(12));
        assert!(metrics.reference_width(12) > 0.0);
    });
}
