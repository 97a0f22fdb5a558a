//! Model role: owns data access and nothing else.
//!
//! No view type appears here, so the model can be reused from any surface
//! and swapped without touching the widgets. The controller still references
//! the model concretely; breaking that remaining coupling is what the MVP
//! variant's contract traits are for.

use anyhow::Result;
use shared::domain::Record;
use storage::Storage;

pub struct RecordModel {
    storage: Storage,
}

impl RecordModel {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub async fn save_data(&self, name: &str, email: &str) -> Result<()> {
        self.storage.save_record(&Record::new(name, email)).await
    }

    pub async fn load_data(&self) -> Result<Record> {
        self.storage.load_record().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn model_over_memory_db() -> RecordModel {
        let storage = Storage::new("sqlite::memory:").await.expect("db");
        RecordModel::new(storage)
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let model = model_over_memory_db().await;
        model.save_data("Alice", "a@x.com").await.expect("save");
        let record = model.load_data().await.expect("load");
        assert_eq!(record, Record::new("Alice", "a@x.com"));
    }

    #[tokio::test]
    async fn load_before_save_yields_empty_defaults() {
        let model = model_over_memory_db().await;
        let record = model.load_data().await.expect("load");
        assert_eq!(record, Record::default());
    }
}
