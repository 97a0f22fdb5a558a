//! MVP variant surface. The app owns the widgets and forwards user intents
//! to the presenter through the backend command queue; records come back via
//! `UiEvent::RecordLoaded` and are rendered as `"<name> - <email>"`.

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::Record;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

pub fn display_line(record: &Record) -> String {
    format!("{} - {}", record.name, record.email)
}

pub struct MvpGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    name_input: String,
    email_input: String,
    display: String,
    status: String,
}

impl MvpGuiApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            name_input: String::new(),
            email_input: String::new(),
            display: String::new(),
            status: "Backend worker starting...".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::RecordLoaded(record) => {
                    self.display = display_line(&record);
                    self.status = "Loaded".to_string();
                }
                UiEvent::RecordSaved { at } => {
                    self.status = match at {
                        Some(at) => format!("Saved at {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
                        None => "Saved".to_string(),
                    };
                }
                UiEvent::Info(text) => self.status = text,
                UiEvent::Error(err) => self.status = err.status_line(),
            }
        }
    }
}

impl eframe::App for MvpGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Form Patterns — MVP");
            ui.weak("This surface only implements the view contract; the presenter mediates.");
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
                    dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::SaveRecord {
                            name: self.name_input.clone(),
                            email: self.email_input.clone(),
                        },
                        &mut self.status,
                    );
                }
                if ui.button("Load").clicked() {
                    dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::LoadRecord,
                        &mut self.status,
                    );
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

#[cfg(test)]
mod tests {
    use super::display_line;
    use shared::domain::Record;

    #[test]
    fn display_uses_literal_dash_separator() {
        assert_eq!(
            display_line(&Record::new("Alice", "a@x.com")),
            "Alice - a@x.com"
        );
    }

    #[test]
    fn empty_record_renders_bare_separator() {
        assert_eq!(display_line(&Record::default()), " - ");
    }

    #[test]
    fn fields_render_verbatim() {
        assert_eq!(
            display_line(&Record::new("  Alice  ", "A@X.COM ")),
            "  Alice   - A@X.COM "
        );
    }
}
