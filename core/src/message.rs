//! User-facing display messages.
//!
//! Executions describe what happened; delivery to an actual UI is the
//! outer game's job. The game buffers messages in order and a display
//! layer drains them once per frame.

use crate::types::{Gems, PlayerId, Tick};
use serde::{Deserialize, Serialize};

/// Closed set of message kinds the messaging layer understands.
/// Variants are added per feature — never removed or reordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    GemsMined,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayMessage {
    pub tick: Tick,
    pub text: String,
    pub category: MessageCategory,
    pub player: PlayerId,
    pub amount: Gems,
}
