//! Backend commands queued from UI to the backend worker.

pub enum BackendCommand {
    SaveRecord { name: String, email: String },
    LoadRecord,
}
