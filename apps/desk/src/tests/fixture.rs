use catalog::{Catalog, InterpretationRecord, Reading, SymbolRecord, SymbolSet};
use reading_api::ReadingContext;
use shared::domain::{Layout, LayoutId, Slot, SymbolId, SymbolSetId};

fn slot(number: u32, name: &str, description: &str) -> Slot {
    Slot {
        number,
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn symbol(set: &str, id: &str, name: &str, order: Option<u32>) -> SymbolRecord {
    SymbolRecord {
        id: SymbolId::new(id),
        name: name.to_string(),
        set_id: SymbolSetId::new(set),
        order,
        glyph: None,
    }
}

fn reading(meaning: &str) -> Reading {
    Reading {
        meaning: meaning.to_string(),
        detail: String::new(),
        keywords: vec!["inicio".to_string()],
    }
}

pub fn context() -> ReadingContext {
    let layouts = vec![
        Layout {
            id: LayoutId::new("tres-cartas"),
            name: "Tres Cartas".to_string(),
            description: "Pasado, presente y futuro".to_string(),
            slot_count: 3,
            slots: vec![
                slot(1, "Pasado", "Lo que quedó atrás"),
                slot(2, "Presente", ""),
                slot(3, "Futuro", ""),
            ],
        },
        Layout {
            id: LayoutId::new("una-carta"),
            name: "Una Carta".to_string(),
            description: String::new(),
            slot_count: 1,
            slots: vec![slot(1, "Consejo", "")],
        },
    ];
    let sets = vec![
        SymbolSet {
            id: SymbolSetId::new("tradicional"),
            name: "Tarot Tradicional".to_string(),
            supports_reversal: true,
            allows_repeats: true,
        },
        SymbolSet {
            id: SymbolSetId::new("runas"),
            name: "Runas".to_string(),
            supports_reversal: false,
            allows_repeats: false,
        },
    ];
    let symbols = vec![
        symbol("tradicional", "el-loco", "El Loco", Some(0)),
        symbol("tradicional", "el-mago", "El Mago", Some(1)),
        symbol("tradicional", "la-luna", "La Luna", Some(18)),
        symbol("tradicional", "as-de-copas", "As de Copas", None),
        symbol("tradicional", "rey-de-copas", "Rey de Copas", None),
        symbol("runas", "fehu", "Fehu", Some(1)),
        symbol("runas", "uruz", "Uruz", Some(2)),
    ];
    let interpretations = vec![(
        SymbolSetId::new("tradicional"),
        vec![InterpretationRecord {
            id: SymbolId::new("el-loco"),
            name: "El Loco".to_string(),
            upright: reading("nuevo comienzo"),
            reversed: Some(reading("imprudencia")),
            element: Some("Aire".to_string()),
            archetype: None,
            reflection: vec!["¿Qué salto te espera?".to_string()],
        }],
    )];

    ReadingContext::new(
        Catalog::from_parts(layouts, sets, symbols, interpretations).expect("fixture catalog"),
    )
}
