use std::sync::{Arc, Mutex};

use form_core::{FormPresenter, RecordPresenter, RecordView};
use shared::domain::Record;
use storage::Storage;

/// Stand-in surface that renders exactly like the GUI label.
#[derive(Default)]
struct LabelView {
    text: Mutex<String>,
}

impl LabelView {
    fn text(&self) -> String {
        self.text.lock().expect("label lock").clone()
    }
}

impl RecordView for LabelView {
    fn show_record(&self, record: Record) {
        *self.text.lock().expect("label lock") = format!("{} - {}", record.name, record.email);
    }
}

async fn presenter_over_memory_db() -> (FormPresenter, Arc<LabelView>) {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let view = Arc::new(LabelView::default());
    let presenter = FormPresenter::new();
    presenter
        .bind(view.clone(), Arc::new(storage))
        .await
        .expect("bind");
    (presenter, view)
}

#[tokio::test]
async fn save_then_load_renders_name_dash_email() {
    let (presenter, view) = presenter_over_memory_db().await;

    presenter
        .save_requested("Alice", "a@x.com")
        .await
        .expect("save");
    presenter.load_requested().await.expect("load");

    assert_eq!(view.text(), "Alice - a@x.com");
}

#[tokio::test]
async fn load_from_empty_store_renders_bare_separator() {
    let (presenter, view) = presenter_over_memory_db().await;

    presenter.load_requested().await.expect("load");

    assert_eq!(view.text(), " - ");
}

#[tokio::test]
async fn explicitly_saved_empty_fields_render_bare_separator() {
    let (presenter, view) = presenter_over_memory_db().await;

    presenter.save_requested("", "").await.expect("save");
    presenter.load_requested().await.expect("load");

    assert_eq!(view.text(), " - ");
}

#[tokio::test]
async fn sqlite_backed_round_trip_preserves_fields_exactly() {
    let (presenter, view) = presenter_over_memory_db().await;

    presenter
        .save_requested(" Ümit ", "ümit@example.örg")
        .await
        .expect("save");
    presenter.load_requested().await.expect("load");

    assert_eq!(view.text(), " Ümit  - ümit@example.örg");
}
