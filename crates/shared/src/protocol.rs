use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Layout, LayoutId, PlacedSymbol, SessionId, SessionMode, SymbolId, SymbolSetId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Every slot of the fixed layout is already occupied.
    LayoutFull,
}

/// Transient notification raised by a session transition.
///
/// Carries no state of its own; the presentation layer shows it and drops it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SessionEvent {
    SymbolPlaced {
        placement: PlacedSymbol,
        /// Present when the write replaced an earlier placement at the same position.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        replaced: Option<PlacedSymbol>,
    },
    PlacementRejected {
        symbol_id: SymbolId,
        reason: RejectReason,
    },
    OrientationToggled {
        position: u32,
        reversed: bool,
    },
    PlacementUndone {
        placement: PlacedSymbol,
    },
    SessionCleared {
        removed: usize,
    },
    SymbolSetChanged {
        set_id: SymbolSetId,
        discarded: usize,
    },
    LayoutChanged {
        layout_id: LayoutId,
        mode: SessionMode,
        discarded: usize,
    },
}

/// Read-only copy of a session handed to the interpretation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSnapshot {
    pub session_id: SessionId,
    pub mode: SessionMode,
    pub layout: Layout,
    pub set_id: SymbolSetId,
    /// Sorted by `position`.
    pub placements: Vec<PlacedSymbol>,
    pub taken_at: DateTime<Utc>,
}

impl ReadingSnapshot {
    pub fn is_free_form(&self) -> bool {
        self.mode == SessionMode::FreeForm
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
