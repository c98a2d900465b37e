use milliclock::canvas::ClockCanvas;
use milliclock::window::ClockApp;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    milliclock::logging::init();

    let min_size = ClockCanvas::min_size();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([min_size.x, min_size.y])
            .with_min_inner_size([min_size.x, min_size.y]),
        ..Default::default()
    };

    eframe::run_native(
        "Clock",
        native_options,
        Box::new(|_cc| Box::new(ClockApp::new())),
    )
    .map_err(|err| anyhow::anyhow!("failed to start clock window: {err}"))?;

    Ok(())
}
