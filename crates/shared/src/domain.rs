use serde::{Deserialize, Serialize};

/// The persisted name/email pair exchanged between layers.
///
/// Both fields default to the empty string; there is no validation and no
/// identity beyond value equality. A `Record` is built fresh on every save
/// or load and is never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub email: String,
}

impl Record {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
