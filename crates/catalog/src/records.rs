use serde::{Deserialize, Serialize};
use shared::domain::{SymbolId, SymbolSetId};

/// A named partition of the symbol catalog (a deck, the runes, the hexagrams).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSet {
    pub id: SymbolSetId,
    pub name: String,
    /// Whether placements from this set carry a meaningful reversed orientation.
    #[serde(default)]
    pub supports_reversal: bool,
    /// Whether the same symbol may be placed more than once in one reading.
    #[serde(default = "default_allows_repeats")]
    pub allows_repeats: bool,
}

fn default_allows_repeats() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub id: SymbolId,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "setId", alias = "baraja")]
    pub set_id: SymbolSetId,
    /// Canonical ordinal (rune order, hexagram number, arcana number).
    #[serde(default, alias = "orden", alias = "numero")]
    pub order: Option<u32>,
    #[serde(default, alias = "unicode", skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reading {
    pub meaning: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Pre-authored text for one symbol. `reversed` is only consulted for sets
/// that support reversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationRecord {
    pub id: SymbolId,
    pub name: String,
    pub upright: Reading,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reversed: Option<Reading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reflection: Vec<String>,
}

/// An interpretation with the orientation already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedInterpretation {
    pub name: String,
    pub reversed: bool,
    pub meaning: String,
    pub detail: String,
    pub keywords: Vec<String>,
    pub element: Option<String>,
    pub archetype: Option<String>,
    pub reflection: Vec<String>,
}

impl InterpretationRecord {
    pub fn resolve(&self, reversed: bool) -> ResolvedInterpretation {
        let (reading, applied) = match (&self.reversed, reversed) {
            (Some(reading), true) => (reading, true),
            _ => (&self.upright, false),
        };
        ResolvedInterpretation {
            name: self.name.clone(),
            reversed: applied,
            meaning: reading.meaning.clone(),
            detail: reading.detail.clone(),
            keywords: reading.keywords.clone(),
            element: self.element.clone(),
            archetype: self.archetype.clone(),
            reflection: self.reflection.clone(),
        }
    }
}
