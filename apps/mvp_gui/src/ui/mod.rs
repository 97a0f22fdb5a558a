//! UI layer: the eframe app shell.

pub mod app;

pub use app::MvpGuiApp;
