use std::sync::Arc;

use catalog::{Catalog, ResolvedInterpretation, SymbolRecord, SymbolSet};
use serde::Serialize;
use session_core::ReadingSession;
use shared::{
    domain::{LayoutId, SessionMode, SymbolId, SymbolSetId},
    error::ApiError,
    protocol::{ReadingSnapshot, SessionEvent},
};
use tracing::warn;

mod summary;

pub use summary::{layout_summary, reading_summary};

pub const UNKNOWN_SYMBOL_NAME: &str = "Unknown symbol";
pub const INTERPRETATION_NOT_FOUND: &str = "interpretation not found";

#[derive(Debug, Clone)]
pub struct ReadingContext {
    pub catalog: Arc<Catalog>,
}

impl ReadingContext {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// One placement of a finalized reading, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpretedPlacement {
    pub position: u32,
    pub slot_name: String,
    pub slot_description: String,
    pub symbol_id: SymbolId,
    pub symbol_name: String,
    pub reversed: bool,
    /// `false` when the catalog had no entry and `interpretation` is the placeholder.
    pub found: bool,
    pub interpretation: ResolvedInterpretation,
}

pub fn start_fixed(
    ctx: &ReadingContext,
    layout_id: &LayoutId,
    set_id: &SymbolSetId,
) -> Result<ReadingSession, ApiError> {
    let set = symbol_set(ctx, set_id)?;
    let layout = ctx
        .catalog
        .get_layout(layout_id)
        .map_err(|err| ApiError::not_found(err.to_string()))?;
    Ok(ReadingSession::fixed(layout.clone(), set.id.clone()))
}

pub fn start_free_form(
    ctx: &ReadingContext,
    set_id: &SymbolSetId,
) -> Result<ReadingSession, ApiError> {
    let set = symbol_set(ctx, set_id)?;
    Ok(ReadingSession::free_form(set.id.clone()))
}

pub fn change_symbol_set(
    ctx: &ReadingContext,
    session: &mut ReadingSession,
    set_id: &SymbolSetId,
) -> Result<Option<SessionEvent>, ApiError> {
    let set = symbol_set(ctx, set_id)?;
    Ok(session.switch_symbol_set(set.id.clone()))
}

pub fn change_layout(
    ctx: &ReadingContext,
    session: &mut ReadingSession,
    layout_id: &LayoutId,
) -> Result<Option<SessionEvent>, ApiError> {
    let layout = ctx
        .catalog
        .get_layout(layout_id)
        .map_err(|err| ApiError::not_found(err.to_string()))?;
    Ok(session.switch_layout(layout.clone()))
}

/// Validates a symbol before it is handed to [`ReadingSession::add_symbol`].
///
/// The session itself never consults the catalog, so this is where unknown
/// ids, forbidden repeats and full layouts are caught.
pub fn check_addable<'a>(
    ctx: &'a ReadingContext,
    session: &ReadingSession,
    symbol_id: &SymbolId,
) -> Result<&'a SymbolRecord, ApiError> {
    let set = active_set(ctx, session)?;
    let record = ctx
        .catalog
        .find_symbol(&set.id, symbol_id)
        .ok_or_else(|| {
            ApiError::not_found(format!("symbol '{symbol_id}' is not part of '{}'", set.name))
        })?;

    if !set.allows_repeats && session.contains_symbol(&record.id) {
        return Err(ApiError::conflict(format!(
            "'{}' is already in this reading",
            record.name
        )));
    }

    if session.mode() == SessionMode::FixedLayout && session.is_complete() {
        return Err(ApiError::validation(format!(
            "all {} positions of '{}' are already filled",
            session.layout().slot_count,
            session.layout().name
        )));
    }

    Ok(record)
}

/// Validates and places a symbol. Orientation is dropped for sets that do not
/// support reversal.
pub fn place_symbol(
    ctx: &ReadingContext,
    session: &mut ReadingSession,
    symbol_id: &SymbolId,
    reversed: bool,
) -> Result<SessionEvent, ApiError> {
    let record = check_addable(ctx, session, symbol_id)?;
    let supports_reversal = active_set(ctx, session)?.supports_reversal;
    Ok(session.add_symbol(record.id.clone(), reversed && supports_reversal))
}

pub fn interpret(ctx: &ReadingContext, snapshot: &ReadingSnapshot) -> Vec<InterpretedPlacement> {
    snapshot
        .placements
        .iter()
        .map(|placement| {
            let slot = snapshot.layout.slot(placement.position);
            let slot_name = slot
                .map(|slot| slot.name.clone())
                .unwrap_or_else(|| format!("Symbol {}", placement.position));
            let slot_description = slot
                .map(|slot| slot.description.clone())
                .unwrap_or_default();

            let resolved = ctx.catalog.interpretation(
                &placement.set_id,
                &placement.symbol_id,
                placement.reversed,
            );
            let found = resolved.is_some();
            let interpretation = resolved.unwrap_or_else(|| {
                warn!(
                    session_id = %snapshot.session_id,
                    set_id = %placement.set_id,
                    symbol_id = %placement.symbol_id,
                    "no interpretation in catalog"
                );
                placeholder_interpretation(placement.reversed)
            });

            InterpretedPlacement {
                position: placement.position,
                slot_name,
                slot_description,
                symbol_id: placement.symbol_id.clone(),
                symbol_name: ctx
                    .catalog
                    .display_name(&placement.set_id, &placement.symbol_id)
                    .to_string(),
                reversed: placement.reversed,
                found,
                interpretation,
            }
        })
        .collect()
}

fn placeholder_interpretation(reversed: bool) -> ResolvedInterpretation {
    ResolvedInterpretation {
        name: UNKNOWN_SYMBOL_NAME.to_string(),
        reversed,
        meaning: INTERPRETATION_NOT_FOUND.to_string(),
        detail: "No text is available for this symbol; check the catalog data files.".to_string(),
        keywords: Vec::new(),
        element: None,
        archetype: None,
        reflection: Vec::new(),
    }
}

fn symbol_set<'a>(ctx: &'a ReadingContext, set_id: &SymbolSetId) -> Result<&'a SymbolSet, ApiError> {
    ctx.catalog
        .symbol_set(set_id)
        .ok_or_else(|| ApiError::not_found(format!("symbol set '{set_id}' not found")))
}

/// Sessions only start from sets the catalog knows, so a miss here means the
/// session and catalog are out of step.
fn active_set<'a>(
    ctx: &'a ReadingContext,
    session: &ReadingSession,
) -> Result<&'a SymbolSet, ApiError> {
    ctx.catalog.symbol_set(session.active_set()).ok_or_else(|| {
        ApiError::internal(format!(
            "session {} draws from '{}', which is not in the catalog",
            session.id(),
            session.active_set()
        ))
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
