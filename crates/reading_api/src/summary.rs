//! Plain-text summaries meant for the clipboard.

use std::fmt::Write as _;

use shared::{domain::Layout, protocol::ReadingSnapshot};

use crate::ReadingContext;

/// One numbered line per placement: `"1. Pasado: El Loco (reversed)"` for
/// fixed layouts, `"1. El Loco"` for free-form readings.
pub fn reading_summary(ctx: &ReadingContext, snapshot: &ReadingSnapshot) -> String {
    let supports_reversal = ctx
        .catalog
        .symbol_set(&snapshot.set_id)
        .is_some_and(|set| set.supports_reversal);

    snapshot
        .placements
        .iter()
        .enumerate()
        .map(|(index, placement)| {
            let name = ctx
                .catalog
                .display_name(&placement.set_id, &placement.symbol_id);
            let mut line = format!("{}. ", index + 1);
            if !snapshot.is_free_form() {
                match snapshot.layout.slot(placement.position) {
                    Some(slot) => line.push_str(&slot.name),
                    None => {
                        let _ = write!(line, "Position {}", placement.position);
                    }
                }
                line.push_str(": ");
            }
            line.push_str(name);
            if supports_reversal && placement.reversed {
                line.push_str(" (reversed)");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn layout_summary(layout: &Layout) -> String {
    let mut text = format!("Layout: {}\n", layout.name);
    if !layout.description.is_empty() {
        let _ = writeln!(text, "Description: {}", layout.description);
    }
    text.push_str("\nPositions:\n");
    for slot in &layout.slots {
        if slot.description.is_empty() {
            let _ = writeln!(text, "{}. {}", slot.number, slot.name);
        } else {
            let _ = writeln!(text, "{}. {}: {}", slot.number, slot.name, slot.description);
        }
    }
    text
}
