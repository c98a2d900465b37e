pub mod canvas;
pub mod fit;
pub mod log_sink;
pub mod logging;
pub mod metrics;
pub mod time_format;
pub mod window;
