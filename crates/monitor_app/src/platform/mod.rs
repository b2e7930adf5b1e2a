mod app;
mod config;
mod effects;
mod logging;
mod surface;
mod theme;
mod timers;

pub use app::run_app;
