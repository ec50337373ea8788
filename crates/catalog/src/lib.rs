use std::{
    collections::{BTreeMap, HashMap, HashSet},
    path::Path,
};

use shared::domain::{Layout, LayoutId, SymbolId, SymbolSetId, FREE_FORM_LAYOUT_ID};

pub mod browse;
pub mod error;
pub mod records;
pub mod source;

pub use error::CatalogError;
pub use records::{InterpretationRecord, Reading, ResolvedInterpretation, SymbolRecord, SymbolSet};
pub use source::{CatalogSource, DirectoryCatalogSource};

type IndexKey = (SymbolSetId, String);

/// Canonical form used to match placement ids against catalog ids:
/// trimmed, lowercase, underscores replaced by hyphens.
pub fn normalize_symbol_id(raw: &str) -> String {
    raw.trim().to_lowercase().replace('_', "-")
}

/// Read-only layout, symbol and interpretation tables, indexed by normalized id.
#[derive(Debug, Clone)]
pub struct Catalog {
    layouts: Vec<Layout>,
    sets: Vec<SymbolSet>,
    symbols: Vec<SymbolRecord>,
    symbol_index: HashMap<IndexKey, usize>,
    interpretations: HashMap<IndexKey, InterpretationRecord>,
}

impl Catalog {
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::load(&DirectoryCatalogSource::new(root.as_ref())).await
    }

    pub async fn load(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let layouts = source.read_layouts().await?;
        let sets = source.read_symbol_sets().await?;
        let symbols = source.read_symbols().await?;

        let mut interpretations = Vec::with_capacity(sets.len());
        for set in &sets {
            let records = source.read_interpretations(&set.id).await?;
            interpretations.push((set.id.clone(), records));
        }

        let catalog = Self::from_parts(layouts, sets, symbols, interpretations)?;
        tracing::info!(
            layouts = catalog.layouts.len(),
            symbol_sets = catalog.sets.len(),
            symbols = catalog.symbols.len(),
            interpretations = catalog.interpretations.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_parts(
        layouts: Vec<Layout>,
        sets: Vec<SymbolSet>,
        symbols: Vec<SymbolRecord>,
        interpretations: Vec<(SymbolSetId, Vec<InterpretationRecord>)>,
    ) -> Result<Self, CatalogError> {
        let mut seen_layouts = HashSet::new();
        for layout in &layouts {
            validate_layout(layout)?;
            if !seen_layouts.insert(layout.id.clone()) {
                return Err(CatalogError::DuplicateLayout(layout.id.clone()));
            }
        }

        let mut seen_sets = HashSet::new();
        for set in &sets {
            if !seen_sets.insert(set.id.clone()) {
                return Err(CatalogError::DuplicateSymbolSet(set.id.clone()));
            }
        }

        let mut symbol_index = HashMap::with_capacity(symbols.len());
        for (idx, symbol) in symbols.iter().enumerate() {
            if !seen_sets.contains(&symbol.set_id) {
                return Err(CatalogError::UnknownSymbolSet(symbol.set_id.clone()));
            }
            let key = (symbol.set_id.clone(), normalize_symbol_id(symbol.id.as_str()));
            if symbol_index.insert(key, idx).is_some() {
                return Err(CatalogError::DuplicateSymbol {
                    set_id: symbol.set_id.clone(),
                    symbol_id: symbol.id.clone(),
                });
            }
        }

        let mut interpretation_index = HashMap::new();
        for (set_id, records) in interpretations {
            if !seen_sets.contains(&set_id) {
                return Err(CatalogError::UnknownSymbolSet(set_id));
            }
            for record in records {
                let key = (set_id.clone(), normalize_symbol_id(record.id.as_str()));
                if interpretation_index.contains_key(&key) {
                    tracing::warn!(
                        set_id = %set_id,
                        symbol_id = %record.id,
                        "duplicate interpretation ignored"
                    );
                    continue;
                }
                interpretation_index.insert(key, record);
            }
        }

        Ok(Self {
            layouts,
            sets,
            symbols,
            symbol_index,
            interpretations: interpretation_index,
        })
    }

    pub fn list_layouts(&self) -> &[Layout] {
        &self.layouts
    }

    pub fn get_layout(&self, id: &LayoutId) -> Result<&Layout, CatalogError> {
        self.layouts
            .iter()
            .find(|layout| &layout.id == id)
            .ok_or_else(|| CatalogError::LayoutNotFound(id.clone()))
    }

    /// Layouts keyed by slot count, ascending; catalog order within a group.
    pub fn layouts_by_slot_count(&self) -> BTreeMap<u32, Vec<&Layout>> {
        let mut grouped: BTreeMap<u32, Vec<&Layout>> = BTreeMap::new();
        for layout in &self.layouts {
            grouped.entry(layout.slot_count).or_default().push(layout);
        }
        grouped
    }

    pub fn symbol_sets(&self) -> &[SymbolSet] {
        &self.sets
    }

    pub fn symbol_set(&self, id: &SymbolSetId) -> Option<&SymbolSet> {
        self.sets.iter().find(|set| &set.id == id)
    }

    /// Symbols of one set, by `order` first and display name second.
    /// Unordered symbols sort after ordered ones.
    pub fn symbols_in_set(&self, id: &SymbolSetId) -> Vec<&SymbolRecord> {
        let mut symbols: Vec<&SymbolRecord> = self
            .symbols
            .iter()
            .filter(|symbol| &symbol.set_id == id)
            .collect();
        symbols.sort_by(|a, b| {
            let order_a = a.order.unwrap_or(u32::MAX);
            let order_b = b.order.unwrap_or(u32::MAX);
            order_a
                .cmp(&order_b)
                .then_with(|| browse::name_sort_key(&a.name).cmp(&browse::name_sort_key(&b.name)))
        });
        symbols
    }

    pub fn find_symbol(&self, set_id: &SymbolSetId, symbol_id: &SymbolId) -> Option<&SymbolRecord> {
        let key = (set_id.clone(), normalize_symbol_id(symbol_id.as_str()));
        self.symbol_index.get(&key).map(|idx| &self.symbols[*idx])
    }

    /// Finds a symbol by its ordinal, e.g. a hexagram number.
    pub fn find_by_order(&self, set_id: &SymbolSetId, order: u32) -> Option<&SymbolRecord> {
        self.symbols
            .iter()
            .find(|symbol| &symbol.set_id == set_id && symbol.order == Some(order))
    }

    /// Display name for a placed symbol, falling back to the raw id.
    pub fn display_name<'a>(&'a self, set_id: &SymbolSetId, symbol_id: &'a SymbolId) -> &'a str {
        self.find_symbol(set_id, symbol_id)
            .map(|symbol| symbol.name.as_str())
            .unwrap_or_else(|| symbol_id.as_str())
    }

    pub fn interpretation_record(
        &self,
        set_id: &SymbolSetId,
        symbol_id: &SymbolId,
    ) -> Option<&InterpretationRecord> {
        let key = (set_id.clone(), normalize_symbol_id(symbol_id.as_str()));
        self.interpretations.get(&key)
    }

    /// Looks up the text for a placement. `reversed` only has effect for sets
    /// that support reversal and records that carry a reversed reading.
    pub fn interpretation(
        &self,
        set_id: &SymbolSetId,
        symbol_id: &SymbolId,
        reversed: bool,
    ) -> Option<ResolvedInterpretation> {
        let supports_reversal = self
            .symbol_set(set_id)
            .is_some_and(|set| set.supports_reversal);
        self.interpretation_record(set_id, symbol_id)
            .map(|record| record.resolve(reversed && supports_reversal))
    }
}

fn validate_layout(layout: &Layout) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidLayout {
        layout_id: layout.id.clone(),
        reason,
    };

    if layout.id.as_str() == FREE_FORM_LAYOUT_ID {
        return Err(invalid(format!(
            "'{FREE_FORM_LAYOUT_ID}' is reserved for free selection"
        )));
    }
    if layout.slot_count == 0 {
        return Err(invalid("slot count must be at least 1".to_string()));
    }
    if layout.slots.len() != layout.slot_count as usize {
        return Err(invalid(format!(
            "declares {} slots but lists {}",
            layout.slot_count,
            layout.slots.len()
        )));
    }
    for (idx, slot) in layout.slots.iter().enumerate() {
        let expected = idx as u32 + 1;
        if slot.number != expected {
            return Err(invalid(format!(
                "slot at index {idx} is numbered {} (expected {expected})",
                slot.number
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
