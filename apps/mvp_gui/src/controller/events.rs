//! UI/backend events and error modeling for the MVP GUI controller.

use chrono::{DateTime, Utc};
use shared::domain::Record;

pub enum UiEvent {
    /// The presenter pushed a record to the bound view.
    RecordLoaded(Record),
    /// A save committed; `at` is the store's write timestamp when known.
    RecordSaved { at: Option<DateTime<Utc>> },
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Save,
    Load,
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_line(&self) -> String {
        let label = match self.context {
            UiErrorContext::BackendStartup => "Backend startup",
            UiErrorContext::Save => "Save",
            UiErrorContext::Load => "Load",
        };
        format!("{label} failed: {}", self.message)
    }
}
