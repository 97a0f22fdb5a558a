//! MVC variant: the data access code is split out into a model type
//! (`model::RecordModel`); this file keeps the view (widgets) and controller
//! (click handling, model calls) roles.
//!
//! Compared to the flat variant the business logic is reusable, but view and
//! controller still share a file, and the controller holds a concrete model
//! reference rather than a capability.

mod model;

use std::{env, path::PathBuf, thread};

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use eframe::egui;
use model::RecordModel;
use shared::domain::Record;
use storage::Storage;

const DATA_DIR_ENV: &str = "FORM_PATTERNS_DATA_DIR";
const DB_FILE: &str = "mvc.sqlite3";

enum BackendCommand {
    Save { name: String, email: String },
    Load,
}

enum UiEvent {
    RecordLoaded(Record),
    Status(String),
}

fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    if let Ok(cwd) = env::current_dir() {
        return Ok(cwd.join("data"));
    }
    let base = dirs::data_local_dir().ok_or_else(|| anyhow!("unable to resolve local app data dir"))?;
    Ok(base.join("form_patterns"))
}

fn sqlite_url(path: &std::path::Path) -> String {
    format!("sqlite://{}", path.to_string_lossy().replace('\\', "/"))
}

fn display_line(record: &Record) -> String {
    format!("{} - {}", record.name, record.email)
}

async fn open_model() -> Result<RecordModel> {
    let data_dir = resolve_data_dir()?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("could not prepare data directory '{}'", data_dir.display()))?;
    let storage = Storage::new(&sqlite_url(&data_dir.join(DB_FILE))).await?;
    Ok(RecordModel::new(storage))
}

fn start_backend(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::Status(format!("Backend startup failed: {err}")));
                return;
            }
        };

        runtime.block_on(async move {
            let model = match open_model().await {
                Ok(model) => model,
                Err(err) => {
                    tracing::error!("model init failed: {err:#}");
                    let _ = ui_tx.try_send(UiEvent::Status(format!("Storage unavailable: {err:#}")));
                    return;
                }
            };

            // Controller role: translate user intents into model calls and
            // hand results back to the view.
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Save { name, email } => {
                        match model.save_data(&name, &email).await {
                            Ok(()) => {
                                let _ = ui_tx.try_send(UiEvent::Status("Saved".to_string()));
                            }
                            Err(err) => {
                                tracing::error!("save failed: {err:#}");
                                let _ = ui_tx
                                    .try_send(UiEvent::Status(format!("Save failed: {err:#}")));
                            }
                        }
                    }
                    BackendCommand::Load => match model.load_data().await {
                        Ok(record) => {
                            let _ = ui_tx.try_send(UiEvent::RecordLoaded(record));
                        }
                        Err(err) => {
                            tracing::error!("load failed: {err:#}");
                            let _ =
                                ui_tx.try_send(UiEvent::Status(format!("Load failed: {err:#}")));
                        }
                    },
                }
            }
        });
    });
}

struct MvcApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    name_input: String,
    email_input: String,
    display: String,
    status: String,
}

impl MvcApp {
    fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            name_input: String::new(),
            email_input: String::new(),
            display: String::new(),
            status: "Ready".to_string(),
        }
    }

    fn queue(&mut self, cmd: BackendCommand) {
        match self.cmd_tx.try_send(cmd) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                self.status = "Command queue is full; please retry".to_string();
            }
            Err(TrySendError::Disconnected(_)) => {
                self.status = "Backend worker is gone; restart the app".to_string();
            }
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::RecordLoaded(record) => {
                    self.display = display_line(&record);
                    self.status = "Loaded".to_string();
                }
                UiEvent::Status(text) => self.status = text,
            }
        }
    }
}

impl eframe::App for MvcApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Form Patterns — MVC");
            ui.weak("Data access lives in the model; this file is view + controller.");
            ui.separator();

            ui.label("Name");
            ui.add(
                egui::TextEdit::singleline(&mut self.name_input)
                    .hint_text("Alice")
                    .desired_width(f32::INFINITY),
            );
            ui.label("Email");
            ui.add(
                egui::TextEdit::singleline(&mut self.email_input)
                    .hint_text("a@x.com")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    self.queue(BackendCommand::Save {
                        name: self.name_input.clone(),
                        email: self.email_input.clone(),
                    });
                }
                if ui.button("Load").clicked() {
                    self.queue(BackendCommand::Load);
                }
            });

            ui.add_space(8.0);
            ui.label(egui::RichText::new(&self.display).strong());

            ui.separator();
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    start_backend(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Form Patterns — MVC")
            .with_inner_size([420.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Form Patterns — MVC",
        options,
        Box::new(|_cc| Ok(Box::new(MvcApp::new(cmd_tx, ui_rx)))),
    )
}

#[cfg(test)]
mod tests {
    use super::display_line;
    use shared::domain::Record;

    #[test]
    fn display_uses_literal_dash_separator() {
        assert_eq!(
            display_line(&Record::new("Bob", "b@x.com")),
            "Bob - b@x.com"
        );
        assert_eq!(display_line(&Record::new("", "")), " - ");
    }
}
