use std::path::PathBuf;

use shared::domain::{LayoutId, SymbolId, SymbolSetId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("layout '{0}' is defined more than once")]
    DuplicateLayout(LayoutId),
    #[error("symbol '{symbol_id}' is defined more than once in set '{set_id}'")]
    DuplicateSymbol {
        set_id: SymbolSetId,
        symbol_id: SymbolId,
    },
    #[error("symbol set '{0}' is defined more than once")]
    DuplicateSymbolSet(SymbolSetId),
    #[error("layout '{layout_id}' is invalid: {reason}")]
    InvalidLayout { layout_id: LayoutId, reason: String },
    #[error("symbol set '{0}' is not declared in the catalog")]
    UnknownSymbolSet(SymbolSetId),
    #[error("layout '{0}' not found")]
    LayoutNotFound(LayoutId),
}
