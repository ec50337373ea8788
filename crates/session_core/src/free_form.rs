//! Layout growth for free-form sessions.
//!
//! A free-form session has no catalog layout; it carries a synthetic one whose
//! slot count tracks the number of placements, never dropping below one.

use shared::domain::{Layout, Slot};

/// Appends `"Symbol n"` slots until `position` fits in the layout.
pub(crate) fn grow_to(layout: &mut Layout, position: u32) {
    while layout.slot_count < position {
        let number = layout.slot_count + 1;
        layout.slots.push(Slot::free_form(number));
        layout.slot_count = number;
    }
}

/// Drops trailing slots so the layout matches `occupied` placements.
pub(crate) fn shrink_to(layout: &mut Layout, occupied: usize) {
    let target = occupied.max(1);
    layout.slots.truncate(target);
    layout.slot_count = target as u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_one_named_slot_per_missing_position() {
        let mut layout = Layout::free_form();
        grow_to(&mut layout, 3);
        assert_eq!(layout.slot_count, 3);
        let names: Vec<&str> = layout.slots.iter().map(|slot| slot.name.as_str()).collect();
        assert_eq!(names, vec!["Symbol 1", "Symbol 2", "Symbol 3"]);
    }

    #[test]
    fn growing_to_an_existing_position_is_a_no_op() {
        let mut layout = Layout::free_form();
        grow_to(&mut layout, 1);
        assert_eq!(layout, Layout::free_form());
    }

    #[test]
    fn shrinking_never_goes_below_one_slot() {
        let mut layout = Layout::free_form();
        grow_to(&mut layout, 4);
        shrink_to(&mut layout, 2);
        assert_eq!(layout.slot_count, 2);
        assert_eq!(layout.slots.len(), 2);
        shrink_to(&mut layout, 0);
        assert_eq!(layout, Layout::free_form());
    }
}
