use crate::canvas::ClockCanvas;
use crate::log_sink::{LogSink, LOG_FILE};
use eframe::egui;
use std::time::Duration;

/// Timer period. Actual delivery is rate-limited by the compositor, which
/// collapses repaint requests into its own frame cadence.
pub const UPDATE_INTERVAL: Duration = Duration::from_millis(1);
/// Number of rendered timestamps written to [`LOG_FILE`].
pub const LOG_FIRST_N_UPDATES: u32 = 100;

/// The clock window: hosts the canvas and drives it with a periodic
/// repaint tick.
pub struct ClockApp {
    canvas: ClockCanvas,
}

impl ClockApp {
    pub fn new() -> Self {
        Self {
            canvas: ClockCanvas::new(LogSink::new(LOG_FILE, LOG_FIRST_N_UPDATES)),
        }
    }
}

impl Default for ClockApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for ClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| self.canvas.ui(ui));
        ctx.request_repaint_after(UPDATE_INTERVAL);
    }
}
