use serde::{Deserialize, Serialize};

/// One race entrant, fixed for the session lifetime.
///
/// The `id` is the stable lookup key every query uses; the `code` is the
/// short display label shown in the timing tower.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub code: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self { id: id.into(), code: code.into() }
    }
}
