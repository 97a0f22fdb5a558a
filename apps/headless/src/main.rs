//! Terminal surface for the MVP core.
//!
//! Exists to back the contract's reuse claim: the same `FormPresenter` that
//! drives the desktop GUI drives this CLI, with stdout as the view. Shares
//! the MVP GUI's database file so a record saved in one surface loads in the
//! other.

use std::{env, path::PathBuf, sync::Arc};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use form_core::{FormPresenter, RecordPresenter, RecordView};
use shared::domain::Record;
use storage::Storage;

const DATA_DIR_ENV: &str = "FORM_PATTERNS_DATA_DIR";
const DB_FILE: &str = "mvp.sqlite3";

#[derive(Parser, Debug)]
#[command(about = "Headless view over the form presenter")]
struct Args {
    /// Data directory override; defaults to ./data or the env override.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Persist a record; fields are stored verbatim, empty strings included.
    Save {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Load the record and print it through the view.
    Load {
        /// Print the record as JSON instead of "<name> - <email>".
        #[arg(long)]
        json: bool,
    },
    /// Load the record and print it with the last-saved timestamp.
    Show,
}

/// View half of the contract with stdout as the rendering surface.
struct StdoutView {
    json: bool,
}

impl RecordView for StdoutView {
    fn show_record(&self, record: Record) {
        if self.json {
            match serde_json::to_string(&record) {
                Ok(text) => println!("{text}"),
                Err(err) => tracing::error!("failed to serialize record: {err}"),
            }
        } else {
            println!("{} - {}", record.name, record.email);
        }
    }
}

fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
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

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let data_dir = resolve_data_dir(args.data_dir)?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("could not prepare data directory '{}'", data_dir.display()))?;
    let storage = Storage::new(&sqlite_url(&data_dir.join(DB_FILE))).await?;

    let json = matches!(args.command, Command::Load { json: true });
    let presenter = FormPresenter::new();
    presenter
        .bind(Arc::new(StdoutView { json }), Arc::new(storage.clone()))
        .await
        .context("presenter bind failed")?;

    match args.command {
        Command::Save { name, email } => {
            presenter.save_requested(&name, &email).await?;
            println!("saved");
        }
        Command::Load { .. } => {
            presenter.load_requested().await?;
        }
        Command::Show => {
            presenter.load_requested().await?;
            match storage.record_updated_at().await? {
                Some(at) => println!("last saved: {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
                None => println!("last saved: never"),
            }
        }
    }

    presenter.unbind().await;
    Ok(())
}
