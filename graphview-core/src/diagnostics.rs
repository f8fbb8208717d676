use serde::{Deserialize, Serialize};

/// Messages accumulated over the lifetime of one search. Merge is an
/// order-preserving concatenation and never deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub info: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Diagnostics {
    pub fn merge(&mut self, incoming: Diagnostics) {
        self.info.extend(incoming.info);
        self.warnings.extend(incoming.warnings);
        self.errors.extend(incoming.errors);
    }

    /// Replaces the live arrays with empty ones. Called at the start of
    /// every search, never mid-search.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.info.is_empty() && self.warnings.is_empty() && self.errors.is_empty()
    }
}
