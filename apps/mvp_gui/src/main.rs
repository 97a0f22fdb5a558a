//! MVP variant: view, controller, and backend bridge are separate modules,
//! and the mediating logic lives behind the `form_core` contract traits
//! rather than in this binary at all.

mod backend_bridge;
mod controller;
mod ui;

use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::MvpGuiApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Form Patterns — MVP")
            .with_inner_size([420.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Form Patterns — MVP",
        options,
        Box::new(|_cc| Ok(Box::new(MvpGuiApp::new(cmd_tx, ui_rx)))),
    )
}
