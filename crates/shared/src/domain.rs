use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id_newtype!(SymbolId);
string_id_newtype!(SymbolSetId);
string_id_newtype!(LayoutId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

pub const FREE_FORM_LAYOUT_ID: &str = "free-form";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    FixedLayout,
    FreeForm,
}

/// One named position of a layout. `number` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(alias = "numero")]
    pub number: u32,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "descripcion")]
    pub description: String,
}

impl Slot {
    pub fn free_form(number: u32) -> Self {
        Self {
            number,
            name: format!("Symbol {number}"),
            description: String::new(),
        }
    }
}

/// A named, ordered set of slots.
///
/// Catalog files use Spanish keys (`nombre`, `numeroCartas`, `posiciones`, ...);
/// those are accepted as aliases so the files load unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub id: LayoutId,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "descripcion")]
    pub description: String,
    #[serde(alias = "numeroCartas")]
    pub slot_count: u32,
    #[serde(alias = "posiciones")]
    pub slots: Vec<Slot>,
}

impl Layout {
    /// The minimal synthetic layout a free-form session starts from.
    pub fn free_form() -> Self {
        Self {
            id: LayoutId::new(FREE_FORM_LAYOUT_ID),
            name: "Free Selection".to_string(),
            description: "Draw as many symbols as you like, without a fixed pattern".to_string(),
            slot_count: 1,
            slots: vec![Slot::free_form(1)],
        }
    }

    pub fn slot(&self, number: u32) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.number == number)
    }

    pub fn is_free_form(&self) -> bool {
        self.id.as_str() == FREE_FORM_LAYOUT_ID
    }
}

/// A symbol bound to a position within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedSymbol {
    pub position: u32,
    pub symbol_id: SymbolId,
    pub reversed: bool,
    pub set_id: SymbolSetId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Empty,
    Filling,
    Complete,
}
