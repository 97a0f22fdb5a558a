//! MVP core for the name/email form: the view/presenter contract traits, the
//! store contract, and the presenter that mediates between them.
//!
//! The presenter depends only on capabilities (`RecordView`, `RecordStore`),
//! never on a concrete rendering surface or storage backend, so the same
//! mediating logic drives the desktop GUI and the headless CLI and is unit
//! tested with stand-ins.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use shared::domain::Record;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Capability a rendering surface must offer: display a record.
///
/// Rendering is infallible; any string content is representable as text.
pub trait RecordView: Send + Sync {
    fn show_record(&self, record: Record);
}

/// Capability a persistence backend must offer.
///
/// `load` always yields a populated record, defaulting missing fields to the
/// empty string; a miss is not an error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn save(&self, record: Record) -> Result<()>;
    async fn load(&self) -> Result<Record>;
}

/// User intents a presenter handles on behalf of its view.
#[async_trait]
pub trait RecordPresenter: Send + Sync {
    /// "Save clicked": persist the raw, unvalidated field contents.
    async fn save_requested(&self, name: &str, email: &str) -> Result<()>;
    /// "Load clicked": read the store and push the result to the bound view.
    async fn load_requested(&self) -> Result<()>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("presenter is already bound to a view")]
    AlreadyBound,
}

/// Binding state as an explicit sum type: either nothing is attached, or a
/// view/store pair is. There is no half-bound state.
enum Binding {
    Unbound,
    Bound {
        view: Arc<dyn RecordView>,
        store: Arc<dyn RecordStore>,
    },
}

/// Mediator between a `RecordView` and a `RecordStore`.
///
/// Requests arriving while unbound are deliberately silent no-ops; store I/O
/// failures propagate to the caller like any other fallible operation.
pub struct FormPresenter {
    binding: RwLock<Binding>,
}

impl FormPresenter {
    pub fn new() -> Self {
        Self {
            binding: RwLock::new(Binding::Unbound),
        }
    }

    /// Attaches a view and store. Binding is one-shot: a second `bind`
    /// without an intervening `unbind` is rejected rather than silently
    /// replacing the live view.
    pub async fn bind(
        &self,
        view: Arc<dyn RecordView>,
        store: Arc<dyn RecordStore>,
    ) -> Result<(), BindError> {
        let mut binding = self.binding.write().await;
        if matches!(*binding, Binding::Bound { .. }) {
            return Err(BindError::AlreadyBound);
        }
        *binding = Binding::Bound { view, store };
        debug!("presenter bound to view and store");
        Ok(())
    }

    /// Drops the view/store pair so a torn-down surface is not retained.
    /// A later `bind` is permitted.
    pub async fn unbind(&self) {
        let mut binding = self.binding.write().await;
        if matches!(*binding, Binding::Unbound) {
            return;
        }
        *binding = Binding::Unbound;
        debug!("presenter unbound");
    }

    pub async fn is_bound(&self) -> bool {
        matches!(*self.binding.read().await, Binding::Bound { .. })
    }

    async fn bound_store(&self) -> Option<Arc<dyn RecordStore>> {
        match &*self.binding.read().await {
            Binding::Unbound => None,
            Binding::Bound { store, .. } => Some(Arc::clone(store)),
        }
    }

    async fn bound_pair(&self) -> Option<(Arc<dyn RecordView>, Arc<dyn RecordStore>)> {
        match &*self.binding.read().await {
            Binding::Unbound => None,
            Binding::Bound { view, store } => Some((Arc::clone(view), Arc::clone(store))),
        }
    }
}

impl Default for FormPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordPresenter for FormPresenter {
    async fn save_requested(&self, name: &str, email: &str) -> Result<()> {
        let Some(store) = self.bound_store().await else {
            warn!("save requested on unbound presenter; ignoring");
            return Ok(());
        };
        store.save(Record::new(name, email)).await
    }

    async fn load_requested(&self) -> Result<()> {
        let Some((view, store)) = self.bound_pair().await else {
            warn!("load requested on unbound presenter; ignoring");
            return Ok(());
        };
        let record = store.load().await?;
        view.show_record(record);
        Ok(())
    }
}

/// In-memory `RecordStore` for tests and anything that does not need the
/// record to survive the process.
#[derive(Default)]
pub struct MemoryStore {
    record: Mutex<Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn save(&self, record: Record) -> Result<()> {
        *self.record.lock().await = record;
        Ok(())
    }

    async fn load(&self) -> Result<Record> {
        Ok(self.record.lock().await.clone())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
