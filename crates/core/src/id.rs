//! Strongly-typed identifiers.

use serde::Serialize;
use uuid::Uuid;

/// Identifier of a single planning invocation (returned to callers for log correlation).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlanRunId(Uuid);

impl PlanRunId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for PlanRunId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PlanRunId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
