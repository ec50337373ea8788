use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shared::domain::{Layout, SymbolSetId};

use crate::{
    error::CatalogError,
    records::{InterpretationRecord, SymbolRecord, SymbolSet},
};

pub const LAYOUTS_FILE: &str = "layouts.json";
pub const SYMBOL_SETS_FILE: &str = "symbol_sets.json";
pub const SYMBOLS_FILE: &str = "symbols.json";
pub const INTERPRETATIONS_DIR: &str = "interpretations";

/// Where catalog tables come from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn read_layouts(&self) -> Result<Vec<Layout>, CatalogError>;
    async fn read_symbol_sets(&self) -> Result<Vec<SymbolSet>, CatalogError>;
    async fn read_symbols(&self) -> Result<Vec<SymbolRecord>, CatalogError>;
    /// Sets without an interpretation table yield an empty list.
    async fn read_interpretations(
        &self,
        set_id: &SymbolSetId,
    ) -> Result<Vec<InterpretationRecord>, CatalogError>;
}

/// Reads JSON tables from a directory:
///
/// ```text
/// <root>/layouts.json
/// <root>/symbol_sets.json
/// <root>/symbols.json
/// <root>/interpretations/<set-id>.json
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryCatalogSource {
    root: PathBuf,
}

impl DirectoryCatalogSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn interpretations_path(&self, set_id: &SymbolSetId) -> PathBuf {
        self.root
            .join(INTERPRETATIONS_DIR)
            .join(format!("{}.json", set_id.as_str()))
    }
}

#[async_trait]
impl CatalogSource for DirectoryCatalogSource {
    async fn read_layouts(&self) -> Result<Vec<Layout>, CatalogError> {
        read_json(&self.root.join(LAYOUTS_FILE)).await
    }

    async fn read_symbol_sets(&self) -> Result<Vec<SymbolSet>, CatalogError> {
        read_json(&self.root.join(SYMBOL_SETS_FILE)).await
    }

    async fn read_symbols(&self) -> Result<Vec<SymbolRecord>, CatalogError> {
        read_json(&self.root.join(SYMBOLS_FILE)).await
    }

    async fn read_interpretations(
        &self,
        set_id: &SymbolSetId,
    ) -> Result<Vec<InterpretationRecord>, CatalogError> {
        let path = self.interpretations_path(set_id);
        match tokio::fs::try_exists(&path).await {
            Ok(true) => read_json(&path).await,
            Ok(false) => {
                tracing::debug!(set_id = %set_id, path = %path.display(), "no interpretation table");
                Ok(Vec::new())
            }
            Err(source) => Err(CatalogError::Io { path, source }),
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
