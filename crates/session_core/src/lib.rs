//! Reading session state: which symbols have been drawn, where, and in which
//! orientation.
//!
//! A [`ReadingSession`] is owned by a single presentation context and mutated
//! only through the transition methods below. Every transition runs to
//! completion synchronously; precondition violations are no-ops, never errors.

use chrono::Utc;
use shared::{
    domain::{Layout, PlacedSymbol, SessionId, SessionMode, SessionState, SymbolId, SymbolSetId},
    protocol::{ReadingSnapshot, RejectReason, SessionEvent},
};
use tracing::debug;

mod free_form;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingSession {
    id: SessionId,
    mode: SessionMode,
    layout: Layout,
    active_set: SymbolSetId,
    placements: Vec<PlacedSymbol>,
}

impl ReadingSession {
    /// Session that fills the slots of a catalog layout one-for-one.
    ///
    /// `layout` is expected to come from the catalog, which guarantees at
    /// least one slot numbered `1..=slot_count`.
    pub fn fixed(layout: Layout, set_id: SymbolSetId) -> Self {
        let session = Self {
            id: SessionId::random(),
            mode: SessionMode::FixedLayout,
            layout,
            active_set: set_id,
            placements: Vec::new(),
        };
        debug!(
            session_id = %session.id,
            layout_id = %session.layout.id,
            set_id = %session.active_set,
            "fixed-layout session started"
        );
        session
    }

    /// Session with no predetermined slot count.
    pub fn free_form(set_id: SymbolSetId) -> Self {
        let session = Self {
            id: SessionId::random(),
            mode: SessionMode::FreeForm,
            layout: Layout::free_form(),
            active_set: set_id,
            placements: Vec::new(),
        };
        debug!(session_id = %session.id, set_id = %session.active_set, "free-form session started");
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn active_set(&self) -> &SymbolSetId {
        &self.active_set
    }

    /// Placements in insertion order. Use [`Self::placements_by_position`] for display.
    pub fn placements(&self) -> &[PlacedSymbol] {
        &self.placements
    }

    pub fn placements_by_position(&self) -> Vec<PlacedSymbol> {
        let mut sorted = self.placements.clone();
        sorted.sort_by_key(|placement| placement.position);
        sorted
    }

    pub fn placement(&self, position: u32) -> Option<&PlacedSymbol> {
        self.placements
            .iter()
            .find(|placement| placement.position == position)
    }

    pub fn contains_symbol(&self, symbol_id: &SymbolId) -> bool {
        self.placements
            .iter()
            .any(|placement| &placement.symbol_id == symbol_id)
    }

    /// Position the next added symbol will occupy.
    ///
    /// For a full fixed layout this is `slot_count + 1`, a sentinel that no
    /// add will ever write to; check [`Self::is_complete`] first.
    pub fn next_open_position(&self) -> u32 {
        match self.mode {
            SessionMode::FreeForm => self.placements.len() as u32 + 1,
            SessionMode::FixedLayout => (1..=self.layout.slot_count)
                .find(|number| self.placement(*number).is_none())
                .unwrap_or(self.layout.slot_count + 1),
        }
    }

    /// Places `symbol_id` at the next open position.
    ///
    /// A complete fixed layout rejects the add and leaves placements untouched.
    /// A write to an already occupied position replaces the earlier placement.
    pub fn add_symbol(&mut self, symbol_id: SymbolId, reversed: bool) -> SessionEvent {
        let position = self.next_open_position();

        if self.mode == SessionMode::FixedLayout && position > self.layout.slot_count {
            debug!(
                session_id = %self.id,
                symbol_id = %symbol_id,
                slot_count = self.layout.slot_count,
                "layout full; add rejected"
            );
            return SessionEvent::PlacementRejected {
                symbol_id,
                reason: RejectReason::LayoutFull,
            };
        }

        if self.mode == SessionMode::FreeForm {
            free_form::grow_to(&mut self.layout, position);
        }

        let placement = PlacedSymbol {
            position,
            symbol_id,
            reversed,
            set_id: self.active_set.clone(),
        };

        let replaced = match self
            .placements
            .iter()
            .position(|existing| existing.position == position)
        {
            Some(index) => Some(std::mem::replace(
                &mut self.placements[index],
                placement.clone(),
            )),
            None => {
                self.placements.push(placement.clone());
                None
            }
        };

        debug!(
            session_id = %self.id,
            position,
            symbol_id = %placement.symbol_id,
            reversed,
            "symbol placed"
        );
        SessionEvent::SymbolPlaced {
            placement,
            replaced,
        }
    }

    /// Flips orientation at `position`; no-op when the position is empty.
    pub fn toggle_orientation(&mut self, position: u32) -> Option<SessionEvent> {
        let placement = self
            .placements
            .iter_mut()
            .find(|placement| placement.position == position)?;
        placement.reversed = !placement.reversed;
        let reversed = placement.reversed;

        debug!(session_id = %self.id, position, reversed, "orientation toggled");
        Some(SessionEvent::OrientationToggled { position, reversed })
    }

    /// Removes the placement with the highest position; no-op when empty.
    pub fn undo_last(&mut self) -> Option<SessionEvent> {
        let index = self
            .placements
            .iter()
            .enumerate()
            .max_by_key(|(_, placement)| placement.position)
            .map(|(index, _)| index)?;
        let placement = self.placements.remove(index);

        if self.mode == SessionMode::FreeForm {
            free_form::shrink_to(&mut self.layout, self.placements.len());
        }

        debug!(
            session_id = %self.id,
            position = placement.position,
            symbol_id = %placement.symbol_id,
            "placement undone"
        );
        Some(SessionEvent::PlacementUndone { placement })
    }

    /// Empties the session. Free-form sessions fall back to the one-slot layout;
    /// fixed sessions keep their catalog layout.
    pub fn clear_all(&mut self) -> SessionEvent {
        let removed = self.reset_placements();
        debug!(session_id = %self.id, removed, "session cleared");
        SessionEvent::SessionCleared { removed }
    }

    pub fn is_complete(&self) -> bool {
        match self.mode {
            SessionMode::FreeForm => !self.placements.is_empty(),
            SessionMode::FixedLayout => self.placements.len() == self.layout.slot_count as usize,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.is_complete() {
            SessionState::Complete
        } else if self.placements.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Filling
        }
    }

    /// Draws from a different symbol set. Mixing sets within one reading is
    /// not allowed, so any existing placements are discarded.
    pub fn switch_symbol_set(&mut self, set_id: SymbolSetId) -> Option<SessionEvent> {
        if self.active_set == set_id {
            return None;
        }
        let discarded = self.reset_placements();
        self.active_set = set_id.clone();

        debug!(session_id = %self.id, set_id = %set_id, discarded, "symbol set changed");
        Some(SessionEvent::SymbolSetChanged { set_id, discarded })
    }

    /// Moves to a fixed catalog layout, discarding current placements.
    pub fn switch_layout(&mut self, layout: Layout) -> Option<SessionEvent> {
        if self.mode == SessionMode::FixedLayout && self.layout.id == layout.id {
            return None;
        }
        let discarded = self.placements.len();
        self.placements.clear();
        self.mode = SessionMode::FixedLayout;
        self.layout = layout;

        debug!(
            session_id = %self.id,
            layout_id = %self.layout.id,
            discarded,
            "layout changed"
        );
        Some(SessionEvent::LayoutChanged {
            layout_id: self.layout.id.clone(),
            mode: self.mode,
            discarded,
        })
    }

    /// Moves to free-form mode, discarding current placements.
    pub fn switch_to_free_form(&mut self) -> Option<SessionEvent> {
        if self.mode == SessionMode::FreeForm {
            return None;
        }
        let discarded = self.placements.len();
        self.placements.clear();
        self.mode = SessionMode::FreeForm;
        self.layout = Layout::free_form();

        debug!(session_id = %self.id, discarded, "switched to free-form");
        Some(SessionEvent::LayoutChanged {
            layout_id: self.layout.id.clone(),
            mode: self.mode,
            discarded,
        })
    }

    /// Read-only copy for the interpretation view, placements sorted by position.
    pub fn snapshot(&self) -> ReadingSnapshot {
        ReadingSnapshot {
            session_id: self.id,
            mode: self.mode,
            layout: self.layout.clone(),
            set_id: self.active_set.clone(),
            placements: self.placements_by_position(),
            taken_at: Utc::now(),
        }
    }

    /// Snapshot gated on completeness; `None` while slots remain open.
    pub fn finalize(&self) -> Option<ReadingSnapshot> {
        self.is_complete().then(|| self.snapshot())
    }

    fn reset_placements(&mut self) -> usize {
        let removed = self.placements.len();
        self.placements.clear();
        if self.mode == SessionMode::FreeForm {
            self.layout = Layout::free_form();
        }
        removed
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/property_tests.rs"]
mod property_tests;
