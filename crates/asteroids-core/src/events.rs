//! Alerts emitted by the game world for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::AlertLevel;

/// Diagnostic record for an operation that could not complete (missing
/// player, no ammunition, invalid entity combination, ...).
///
/// Alerts are reports, never errors: the operation that produced one was
/// a no-op and the world remains fully usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    /// Frame at which the alert was raised.
    pub frame: u64,
}
