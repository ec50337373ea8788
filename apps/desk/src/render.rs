//! Plain-text views printed by the CLI.

use catalog::{
    browse::SuitGroups, Catalog, ResolvedInterpretation, SymbolRecord, SymbolSet,
};
use reading_api::{InterpretedPlacement, ReadingContext};
use session_core::ReadingSession;
use shared::domain::{PlacedSymbol, SessionMode, SymbolSetId};

pub fn layouts(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();
    for (slot_count, group) in catalog.layouts_by_slot_count() {
        let noun = if slot_count == 1 { "position" } else { "positions" };
        lines.push(format!("{slot_count} {noun}:"));
        for layout in group {
            lines.push(format!("  {:<24} {}", layout.id.as_str(), layout.name));
        }
    }
    lines
}

pub fn symbol_sets(sets: &[SymbolSet]) -> Vec<String> {
    sets.iter()
        .map(|set| {
            let mut traits = Vec::new();
            if set.supports_reversal {
                traits.push("reversible");
            }
            if !set.allows_repeats {
                traits.push("no repeats");
            }
            if traits.is_empty() {
                format!("{:<16} {}", set.id.as_str(), set.name)
            } else {
                format!("{:<16} {} ({})", set.id.as_str(), set.name, traits.join(", "))
            }
        })
        .collect()
}

pub fn symbol_line(symbol: &SymbolRecord) -> String {
    let mut line = String::from("  ");
    if let Some(order) = symbol.order {
        line.push_str(&format!("{order:>3}. "));
    }
    if let Some(glyph) = &symbol.glyph {
        line.push_str(glyph);
        line.push(' ');
    }
    line.push_str(&format!("{} [{}]", symbol.name, symbol.id));
    line
}

/// Index letters separated by spaces, e.g. `"A C E"`.
pub fn letter_index(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn suit_bands(groups: &SuitGroups<'_>) -> Vec<String> {
    let bands = [
        ("Ace to Five", &groups.ace_to_five),
        ("Six to Ten", &groups.six_to_ten),
        ("Page and Knight", &groups.page_and_knight),
        ("Queen and King", &groups.queen_and_king),
    ];
    let mut lines = Vec::new();
    for (heading, symbols) in bands {
        if symbols.is_empty() {
            continue;
        }
        lines.push(format!("{heading}:"));
        lines.extend(symbols.iter().map(|symbol| symbol_line(symbol)));
    }
    lines
}

pub fn interpretation(text: &ResolvedInterpretation) -> Vec<String> {
    let mut lines = vec![format!("   {}", text.meaning)];
    if !text.detail.is_empty() {
        lines.push(format!("   {}", text.detail));
    }
    if !text.keywords.is_empty() {
        lines.push(format!("   keywords: {}", text.keywords.join(", ")));
    }
    if let Some(element) = &text.element {
        lines.push(format!("   element: {element}"));
    }
    if let Some(archetype) = &text.archetype {
        lines.push(format!("   archetype: {archetype}"));
    }
    for question in &text.reflection {
        lines.push(format!("   ? {question}"));
    }
    lines
}

/// Symbol name with its orientation, as shown in notifications and views.
pub fn placed_name(ctx: &ReadingContext, placement: &PlacedSymbol) -> String {
    let name = ctx
        .catalog
        .display_name(&placement.set_id, &placement.symbol_id);
    if placement.reversed {
        format!("{name} (reversed)")
    } else {
        name.to_string()
    }
}

pub fn set_name<'a>(ctx: &'a ReadingContext, set_id: &'a SymbolSetId) -> &'a str {
    ctx.catalog
        .symbol_set(set_id)
        .map(|set| set.name.as_str())
        .unwrap_or_else(|| set_id.as_str())
}

pub fn session(ctx: &ReadingContext, session: &ReadingSession) -> Vec<String> {
    let layout = session.layout();
    let mut lines = vec![format!(
        "{} | {} | {}/{} placed",
        layout.name,
        set_name(ctx, session.active_set()),
        session.placements().len(),
        layout.slot_count
    )];

    match session.mode() {
        SessionMode::FixedLayout => {
            for slot in &layout.slots {
                let symbol = session
                    .placement(slot.number)
                    .map(|placement| placed_name(ctx, placement))
                    .unwrap_or_else(|| "-".to_string());
                lines.push(format!("  {}. {}: {symbol}", slot.number, slot.name));
            }
        }
        SessionMode::FreeForm => {
            if session.placements().is_empty() {
                lines.push("  (no symbols yet)".to_string());
            }
            for placement in session.placements_by_position() {
                lines.push(format!("  {}. {}", placement.position, placed_name(ctx, &placement)));
            }
        }
    }
    lines
}

pub fn interpreted(mode: SessionMode, placements: &[InterpretedPlacement]) -> Vec<String> {
    let mut lines = Vec::new();
    for placement in placements {
        let mut heading = match mode {
            SessionMode::FixedLayout => format!(
                "{}. {}: {}",
                placement.position, placement.slot_name, placement.symbol_name
            ),
            SessionMode::FreeForm => format!("{}. {}", placement.position, placement.symbol_name),
        };
        if placement.reversed {
            heading.push_str(" (reversed)");
        }
        lines.push(heading);
        if mode == SessionMode::FixedLayout && !placement.slot_description.is_empty() {
            lines.push(format!("   ({})", placement.slot_description));
        }
        lines.extend(interpretation(&placement.interpretation));
    }
    lines
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
