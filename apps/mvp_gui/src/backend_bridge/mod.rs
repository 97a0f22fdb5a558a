//! Bridge between the synchronous egui surface and the async presenter/store
//! stack running on a dedicated worker thread.

pub mod commands;
pub mod runtime;
