use super::*;

use catalog::browse::{self, suit_groups, Suit};
use reading_api::{place_symbol, start_fixed, start_free_form};
use shared::domain::{LayoutId, SymbolId, SymbolSetId};

use crate::fixture;

#[test]
fn layouts_are_grouped_by_slot_count() {
    let ctx = fixture::context();
    let lines = layouts(&ctx.catalog);
    assert_eq!(lines[0], "1 position:");
    assert!(lines[1].contains("una-carta"));
    assert_eq!(lines[2], "3 positions:");
    assert!(lines[3].trim_start().starts_with("tres-cartas"));
    assert!(lines[3].ends_with("Tres Cartas"));
}

#[test]
fn symbol_sets_show_their_traits() {
    let ctx = fixture::context();
    let lines = symbol_sets(ctx.catalog.symbol_sets());
    assert!(lines[0].ends_with("Tarot Tradicional (reversible)"));
    assert!(lines[1].ends_with("Runas (no repeats)"));
}

#[test]
fn suit_bands_skip_empty_groups() {
    let ctx = fixture::context();
    let symbols = ctx.catalog.symbols_in_set(&SymbolSetId::new("tradicional"));
    let groups = suit_groups(symbols.iter().copied(), Suit::Copas);
    let lines = suit_bands(&groups);
    assert_eq!(
        lines,
        vec![
            "Ace to Five:".to_string(),
            "  As de Copas [as-de-copas]".to_string(),
            "Queen and King:".to_string(),
            "  Rey de Copas [rey-de-copas]".to_string(),
        ]
    );
}

#[test]
fn fixed_session_lists_every_slot() {
    let ctx = fixture::context();
    let mut session = start_fixed(
        &ctx,
        &LayoutId::new("tres-cartas"),
        &SymbolSetId::new("tradicional"),
    )
    .expect("session");
    place_symbol(&ctx, &mut session, &SymbolId::new("la-luna"), true).expect("placed");

    let lines = super::session(&ctx, &session);
    assert_eq!(lines[0], "Tres Cartas | Tarot Tradicional | 1/3 placed");
    assert_eq!(lines[1], "  1. Pasado: La Luna (reversed)");
    assert_eq!(lines[2], "  2. Presente: -");
    assert_eq!(lines.len(), 4);
}

#[test]
fn empty_free_form_session_says_so() {
    let ctx = fixture::context();
    let session = start_free_form(&ctx, &SymbolSetId::new("runas")).expect("session");
    let lines = super::session(&ctx, &session);
    assert_eq!(lines[0], "Free Selection | Runas | 0/1 placed");
    assert_eq!(lines[1], "  (no symbols yet)");
}

#[test]
fn interpretation_lists_optional_fields() {
    let ctx = fixture::context();
    let text = ctx
        .catalog
        .interpretation(&SymbolSetId::new("tradicional"), &SymbolId::new("el-loco"), false)
        .expect("interpretation");
    let lines = interpretation(&text);
    assert_eq!(
        lines,
        vec![
            "   nuevo comienzo".to_string(),
            "   keywords: inicio".to_string(),
            "   element: Aire".to_string(),
            "   ? ¿Qué salto te espera?".to_string(),
        ]
    );
}

#[test]
fn letter_index_lists_each_letter_once() {
    let ctx = fixture::context();
    let symbols = ctx.catalog.symbols_in_set(&SymbolSetId::new("tradicional"));
    let index = browse::letters(symbols.iter().copied());
    assert_eq!(letter_index(&index), "A L M R");
}
