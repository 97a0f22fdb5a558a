//! Backend worker: owns the tokio runtime, the SQLite store, and the
//! presenter. The egui surface never touches storage; it only queues
//! `BackendCommand`s and receives `UiEvent`s.

use std::{env, path::PathBuf, sync::Arc, thread};

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{Receiver, Sender};
use form_core::{FormPresenter, RecordPresenter, RecordView};
use shared::domain::Record;
use storage::Storage;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

const DATA_DIR_ENV: &str = "FORM_PATTERNS_DATA_DIR";
const DB_FILE: &str = "mvp.sqlite3";

/// View half of the contract, implemented for the GUI: `show_record` hands
/// the record to the UI thread over the event channel. The presenter only
/// ever sees this as a `RecordView`.
struct BridgeView {
    ui_tx: Sender<UiEvent>,
}

impl RecordView for BridgeView {
    fn show_record(&self, record: Record) {
        if self.ui_tx.try_send(UiEvent::RecordLoaded(record)).is_err() {
            tracing::warn!("ui event queue unavailable; dropping loaded record");
        }
    }
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

async fn open_storage() -> Result<Storage> {
    let data_dir = resolve_data_dir()?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("could not prepare data directory '{}'", data_dir.display()))?;
    Storage::new(&sqlite_url(&data_dir.join(DB_FILE))).await
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("failed to build runtime: {err}"),
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let storage = match open_storage().await {
                Ok(storage) => storage,
                Err(err) => {
                    tracing::error!("storage init failed: {err:#}");
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("{err:#}"),
                    )));
                    return;
                }
            };

            let presenter = FormPresenter::new();
            let view = Arc::new(BridgeView {
                ui_tx: ui_tx.clone(),
            });
            if let Err(err) = presenter.bind(view, Arc::new(storage.clone())).await {
                // Unreachable with a freshly constructed presenter, but the
                // one-shot bind contract makes it a checked case.
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    err.to_string(),
                )));
                return;
            }

            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SaveRecord { name, email } => {
                        match presenter.save_requested(&name, &email).await {
                            Ok(()) => {
                                let at = storage.record_updated_at().await.unwrap_or_default();
                                let _ = ui_tx.try_send(UiEvent::RecordSaved { at });
                            }
                            Err(err) => {
                                tracing::error!("save failed: {err:#}");
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::Save,
                                    format!("{err:#}"),
                                )));
                            }
                        }
                    }
                    BackendCommand::LoadRecord => {
                        // On success the presenter pushes the record to the
                        // bound view; nothing to forward here.
                        if let Err(err) = presenter.load_requested().await {
                            tracing::error!("load failed: {err:#}");
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::Load,
                                format!("{err:#}"),
                            )));
                        }
                    }
                }
            }

            presenter.unbind().await;
        });
    });
}
