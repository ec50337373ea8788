use super::*;
use shared::domain::{LayoutId, Slot};

fn three_slot_layout() -> Layout {
    Layout {
        id: LayoutId::new("pasado-presente-futuro"),
        name: "Pasado, Presente y Futuro".to_string(),
        description: String::new(),
        slot_count: 3,
        slots: ["Pasado", "Presente", "Futuro"]
            .iter()
            .enumerate()
            .map(|(idx, name)| Slot {
                number: idx as u32 + 1,
                name: name.to_string(),
                description: String::new(),
            })
            .collect(),
    }
}

fn tuples(session: &ReadingSession) -> Vec<(u32, String, bool)> {
    session
        .placements_by_position()
        .into_iter()
        .map(|placement| {
            (
                placement.position,
                placement.symbol_id.to_string(),
                placement.reversed,
            )
        })
        .collect()
}

fn filled_fixed_session() -> ReadingSession {
    let mut session = ReadingSession::fixed(three_slot_layout(), SymbolSetId::new("osho"));
    for id in ["A", "B", "C"] {
        session.add_symbol(SymbolId::new(id), false);
    }
    session
}

#[test]
fn fixed_layout_fills_slots_in_order_until_complete() {
    let session = filled_fixed_session();
    assert_eq!(
        tuples(&session),
        vec![
            (1, "A".to_string(), false),
            (2, "B".to_string(), false),
            (3, "C".to_string(), false),
        ]
    );
    assert!(session.is_complete());
    assert_eq!(session.state(), SessionState::Complete);
    assert!(session
        .placements()
        .iter()
        .all(|placement| placement.set_id.as_str() == "osho"));
}

#[test]
fn undo_reopens_the_last_slot() {
    let mut session = filled_fixed_session();
    let event = session.undo_last().expect("undo");
    assert!(matches!(
        event,
        SessionEvent::PlacementUndone { ref placement } if placement.position == 3
    ));
    assert_eq!(
        tuples(&session),
        vec![(1, "A".to_string(), false), (2, "B".to_string(), false)]
    );
    assert!(!session.is_complete());
    assert_eq!(session.state(), SessionState::Filling);
    assert_eq!(session.next_open_position(), 3);
}

#[test]
fn add_to_complete_fixed_layout_is_rejected_without_change() {
    let mut session = filled_fixed_session();
    let before = session.placements().to_vec();

    assert_eq!(session.next_open_position(), 4);
    let event = session.add_symbol(SymbolId::new("D"), true);
    assert_eq!(
        event,
        SessionEvent::PlacementRejected {
            symbol_id: SymbolId::new("D"),
            reason: RejectReason::LayoutFull,
        }
    );
    assert_eq!(session.placements(), before.as_slice());
    assert_eq!(session.layout().slot_count, 3);
}

#[test]
fn free_form_layout_grows_with_each_add() {
    let mut session = ReadingSession::free_form(SymbolSetId::new("tradicional"));
    session.add_symbol(SymbolId::new("X"), true);
    assert_eq!(tuples(&session), vec![(1, "X".to_string(), true)]);
    assert_eq!(session.layout().slot_count, 1);

    session.add_symbol(SymbolId::new("Y"), false);
    assert_eq!(
        tuples(&session),
        vec![(1, "X".to_string(), true), (2, "Y".to_string(), false)]
    );
    assert_eq!(session.layout().slot_count, 2);
    assert_eq!(
        session.layout().slot(2).map(|slot| slot.name.as_str()),
        Some("Symbol 2")
    );
    assert!(session.is_complete());
}

#[test]
fn toggle_flips_orientation_at_position() {
    let mut session = ReadingSession::free_form(SymbolSetId::new("tradicional"));
    session.add_symbol(SymbolId::new("X"), true);
    session.add_symbol(SymbolId::new("Y"), false);

    let event = session.toggle_orientation(1).expect("toggle");
    assert_eq!(
        event,
        SessionEvent::OrientationToggled {
            position: 1,
            reversed: false,
        }
    );
    assert_eq!(session.placement(1).map(|p| p.reversed), Some(false));
    assert_eq!(session.placement(2).map(|p| p.reversed), Some(false));
}

#[test]
fn toggle_on_empty_position_is_a_no_op() {
    let mut session = filled_fixed_session();
    let before = session.clone();
    assert!(session.toggle_orientation(7).is_none());
    assert_eq!(session, before);
}

#[test]
fn clear_resets_free_form_to_minimal_layout() {
    let mut session = ReadingSession::free_form(SymbolSetId::new("tradicional"));
    for id in ["X", "Y", "Z"] {
        session.add_symbol(SymbolId::new(id), false);
    }
    assert_eq!(session.layout().slot_count, 3);

    let event = session.clear_all();
    assert_eq!(event, SessionEvent::SessionCleared { removed: 3 });
    assert!(session.placements().is_empty());
    assert_eq!(session.layout(), &Layout::free_form());
    assert_eq!(session.state(), SessionState::Empty);
    assert!(!session.is_complete());
}

#[test]
fn clear_keeps_fixed_catalog_layout() {
    let mut session = filled_fixed_session();
    session.clear_all();
    assert!(session.placements().is_empty());
    assert_eq!(session.layout(), &three_slot_layout());
    assert!(!session.is_complete());
    assert_eq!(session.next_open_position(), 1);
}

#[test]
fn switching_symbol_set_discards_placements() {
    let mut session = ReadingSession::free_form(SymbolSetId::new("tradicional"));
    session.add_symbol(SymbolId::new("X"), true);
    session.add_symbol(SymbolId::new("Y"), false);

    let event = session
        .switch_symbol_set(SymbolSetId::new("osho"))
        .expect("set change");
    assert_eq!(
        event,
        SessionEvent::SymbolSetChanged {
            set_id: SymbolSetId::new("osho"),
            discarded: 2,
        }
    );
    assert!(session.placements().is_empty());
    assert_eq!(session.layout().slot_count, 1);
    assert_eq!(session.active_set().as_str(), "osho");

    session.add_symbol(SymbolId::new("Z"), false);
    assert_eq!(session.placements()[0].set_id.as_str(), "osho");
}

#[test]
fn switching_to_same_symbol_set_keeps_placements() {
    let mut session = filled_fixed_session();
    assert!(session.switch_symbol_set(SymbolSetId::new("osho")).is_none());
    assert_eq!(session.placements().len(), 3);
}

#[test]
fn switching_layout_resets_to_empty_fixed_session() {
    let mut session = ReadingSession::free_form(SymbolSetId::new("osho"));
    session.add_symbol(SymbolId::new("X"), false);

    let event = session.switch_layout(three_slot_layout()).expect("layout change");
    assert_eq!(
        event,
        SessionEvent::LayoutChanged {
            layout_id: LayoutId::new("pasado-presente-futuro"),
            mode: SessionMode::FixedLayout,
            discarded: 1,
        }
    );
    assert_eq!(session.mode(), SessionMode::FixedLayout);
    assert_eq!(session.state(), SessionState::Empty);
    assert!(session.switch_layout(three_slot_layout()).is_none());

    session.add_symbol(SymbolId::new("A"), false);
    let event = session.switch_to_free_form().expect("free-form");
    assert!(matches!(event, SessionEvent::LayoutChanged { discarded: 1, .. }));
    assert_eq!(session.mode(), SessionMode::FreeForm);
    assert_eq!(session.layout(), &Layout::free_form());
    assert!(session.switch_to_free_form().is_none());
}

#[test]
fn undo_on_empty_session_is_a_no_op() {
    let mut session = ReadingSession::free_form(SymbolSetId::new("runas"));
    assert!(session.undo_last().is_none());
    assert_eq!(session.layout(), &Layout::free_form());
}

#[test]
fn undo_in_free_form_shrinks_layout() {
    let mut session = ReadingSession::free_form(SymbolSetId::new("runas"));
    for id in ["fehu", "uruz", "thurisaz"] {
        session.add_symbol(SymbolId::new(id), false);
    }
    session.undo_last();
    assert_eq!(session.layout().slot_count, 2);
    session.undo_last();
    session.undo_last();
    assert_eq!(session.layout(), &Layout::free_form());
}

#[test]
fn finalize_requires_completion_and_sorts_placements() {
    let mut session = ReadingSession::fixed(three_slot_layout(), SymbolSetId::new("osho"));
    session.add_symbol(SymbolId::new("A"), false);
    assert!(session.finalize().is_none());

    session.add_symbol(SymbolId::new("B"), false);
    session.add_symbol(SymbolId::new("C"), false);
    let snapshot = session.finalize().expect("complete snapshot");
    assert_eq!(snapshot.session_id, session.id());
    assert_eq!(snapshot.mode, SessionMode::FixedLayout);
    assert_eq!(snapshot.set_id.as_str(), "osho");
    let positions: Vec<u32> = snapshot.placements.iter().map(|p| p.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);

    session.clear_all();
    assert_eq!(snapshot.placements.len(), 3);
}

#[test]
fn the_same_symbol_may_be_drawn_twice() {
    let mut session = ReadingSession::free_form(SymbolSetId::new("tradicional"));
    session.add_symbol(SymbolId::new("el-loco"), false);
    session.add_symbol(SymbolId::new("el-loco"), true);
    assert_eq!(session.placements().len(), 2);
    assert!(session.contains_symbol(&SymbolId::new("el-loco")));
}
