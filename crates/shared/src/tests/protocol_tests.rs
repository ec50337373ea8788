use super::*;
use crate::domain::{Slot, FREE_FORM_LAYOUT_ID};

#[test]
fn session_event_uses_tagged_payload_shape() {
    let event = SessionEvent::OrientationToggled {
        position: 2,
        reversed: true,
    };
    let value = serde_json::to_value(&event).expect("serialize");
    assert_eq!(value["type"], "orientation_toggled");
    assert_eq!(value["payload"]["position"], 2);
    assert_eq!(value["payload"]["reversed"], true);
}

#[test]
fn symbol_placed_omits_missing_replacement() {
    let event = SessionEvent::SymbolPlaced {
        placement: PlacedSymbol {
            position: 1,
            symbol_id: SymbolId::new("el-loco"),
            reversed: false,
            set_id: SymbolSetId::new("tradicional"),
        },
        replaced: None,
    };
    let value = serde_json::to_value(&event).expect("serialize");
    assert!(value["payload"].get("replaced").is_none());
    assert_eq!(value["payload"]["placement"]["symbol_id"], "el-loco");
}

#[test]
fn layout_accepts_catalog_spanish_keys() {
    let raw = r#"{
        "id": "pasado-presente-futuro",
        "nombre": "Pasado, Presente y Futuro",
        "descripcion": "Tres cartas en línea",
        "numeroCartas": 3,
        "posiciones": [
            {"numero": 1, "nombre": "Pasado", "descripcion": "Lo que fue"},
            {"numero": 2, "nombre": "Presente", "descripcion": "Lo que es"},
            {"numero": 3, "nombre": "Futuro"}
        ]
    }"#;
    let layout: Layout = serde_json::from_str(raw).expect("parse layout");
    assert_eq!(layout.slot_count, 3);
    assert_eq!(layout.slot(2).map(|slot| slot.name.as_str()), Some("Presente"));
    assert_eq!(layout.slot(3).map(|slot| slot.description.as_str()), Some(""));
    assert!(layout.slot(4).is_none());
}

#[test]
fn free_form_layout_starts_with_one_slot() {
    let layout = Layout::free_form();
    assert_eq!(layout.id.as_str(), FREE_FORM_LAYOUT_ID);
    assert!(layout.is_free_form());
    assert_eq!(layout.slot_count, 1);
    assert_eq!(layout.slots, vec![Slot::free_form(1)]);
    assert_eq!(layout.slots[0].name, "Symbol 1");
}

#[test]
fn string_ids_serialize_transparently() {
    let id = SymbolSetId::new("runas");
    assert_eq!(serde_json::to_string(&id).expect("serialize"), "\"runas\"");
    assert_eq!(id.to_string(), "runas");
}
