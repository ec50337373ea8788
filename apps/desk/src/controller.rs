use reading_api::{
    change_layout, change_symbol_set, interpret, place_symbol, reading_summary, ReadingContext,
};
use session_core::ReadingSession;
use shared::{
    domain::SessionMode,
    error::ApiError,
    protocol::{RejectReason, SessionEvent},
};
use tracing::info;

use crate::{commands::ReadingCommand, commands::HELP, render};

/// What the read loop should do after a command.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    /// Text to hand to the clipboard task.
    pub clipboard: Option<String>,
    pub finished: bool,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            ..Self::default()
        }
    }

    fn error(err: ApiError) -> Self {
        Self::line(format!("! {}", err.message))
    }
}

/// Owns the one session of a `desk read` run and turns commands into output.
pub struct ReadingController {
    ctx: ReadingContext,
    session: ReadingSession,
}

impl ReadingController {
    pub fn new(ctx: ReadingContext, session: ReadingSession) -> Self {
        Self { ctx, session }
    }

    pub fn session(&self) -> &ReadingSession {
        &self.session
    }

    pub fn handle(&mut self, command: ReadingCommand) -> Reply {
        match command {
            ReadingCommand::Add {
                symbol_id,
                reversed,
            } => match place_symbol(&self.ctx, &mut self.session, &symbol_id, reversed) {
                Ok(event) => self.notify(&event),
                Err(err) => Reply::error(err),
            },
            ReadingCommand::Toggle { position } => {
                let supports_reversal = self
                    .ctx
                    .catalog
                    .symbol_set(self.session.active_set())
                    .is_some_and(|set| set.supports_reversal);
                if !supports_reversal {
                    return Reply::line(format!(
                        "! {} has no reversed orientation",
                        render::set_name(&self.ctx, self.session.active_set())
                    ));
                }
                match self.session.toggle_orientation(position) {
                    Some(event) => self.notify(&event),
                    None => Reply::line(format!("! position {position} is empty")),
                }
            }
            ReadingCommand::Undo => match self.session.undo_last() {
                Some(event) => self.notify(&event),
                None => Reply::line("! nothing to undo"),
            },
            ReadingCommand::Clear => {
                let event = self.session.clear_all();
                self.notify(&event)
            }
            ReadingCommand::SwitchSet(set_id) => {
                match change_symbol_set(&self.ctx, &mut self.session, &set_id) {
                    Ok(Some(event)) => self.notify(&event),
                    Ok(None) => Reply::line(format!(
                        "already drawing from {}",
                        render::set_name(&self.ctx, &set_id)
                    )),
                    Err(err) => Reply::error(err),
                }
            }
            ReadingCommand::SwitchLayout(layout_id) => {
                match change_layout(&self.ctx, &mut self.session, &layout_id) {
                    Ok(Some(event)) => self.notify(&event),
                    Ok(None) => Reply::line(format!("already using {}", self.session.layout().name)),
                    Err(err) => Reply::error(err),
                }
            }
            ReadingCommand::FreeForm => match self.session.switch_to_free_form() {
                Some(event) => self.notify(&event),
                None => Reply::line("already in free selection"),
            },
            ReadingCommand::Show => Reply {
                lines: render::session(&self.ctx, &self.session),
                ..Reply::default()
            },
            ReadingCommand::Copy => {
                if self.session.placements().is_empty() {
                    return Reply::line("! nothing to copy yet");
                }
                let summary = reading_summary(&self.ctx, &self.session.snapshot());
                Reply {
                    lines: vec!["copying reading to the clipboard".to_string()],
                    clipboard: Some(summary),
                    finished: false,
                }
            }
            ReadingCommand::Done => self.finish(),
            ReadingCommand::Quit => Reply {
                finished: true,
                ..Reply::default()
            },
            ReadingCommand::Help => Reply {
                lines: HELP.lines().map(str::to_string).collect(),
                ..Reply::default()
            },
        }
    }

    fn finish(&self) -> Reply {
        let Some(snapshot) = self.session.finalize() else {
            return Reply::line(format!(
                "! reading incomplete: {} of {} positions filled",
                self.session.placements().len(),
                self.session.layout().slot_count
            ));
        };

        info!(
            session_id = %snapshot.session_id,
            placements = snapshot.placements.len(),
            "reading finalized"
        );
        let placements = interpret(&self.ctx, &snapshot);
        Reply {
            lines: render::interpreted(snapshot.mode, &placements),
            clipboard: None,
            finished: true,
        }
    }

    fn notify(&self, event: &SessionEvent) -> Reply {
        Reply::line(self.describe(event))
    }

    /// One-line notification for a session event.
    fn describe(&self, event: &SessionEvent) -> String {
        match event {
            SessionEvent::SymbolPlaced {
                placement,
                replaced,
            } => {
                let mut text = format!(
                    "placed {} at {}",
                    render::placed_name(&self.ctx, placement),
                    self.position_label(placement.position)
                );
                if let Some(previous) = replaced {
                    text.push_str(&format!(
                        " (replacing {})",
                        render::placed_name(&self.ctx, previous)
                    ));
                }
                text
            }
            SessionEvent::PlacementRejected {
                symbol_id,
                reason: RejectReason::LayoutFull,
            } => format!(
                "! {} is full; {} was not placed",
                self.session.layout().name,
                self.ctx
                    .catalog
                    .display_name(self.session.active_set(), symbol_id)
            ),
            SessionEvent::OrientationToggled { position, reversed } => {
                let orientation = if *reversed { "reversed" } else { "upright" };
                format!("{} is now {orientation}", self.position_label(*position))
            }
            SessionEvent::PlacementUndone { placement } => format!(
                "removed {} from {}",
                render::placed_name(&self.ctx, placement),
                self.position_label(placement.position)
            ),
            SessionEvent::SessionCleared { removed } => {
                format!("cleared {removed} placement(s)")
            }
            SessionEvent::SymbolSetChanged { set_id, discarded } => format!(
                "now drawing from {}{}",
                render::set_name(&self.ctx, set_id),
                discarded_suffix(*discarded)
            ),
            SessionEvent::LayoutChanged {
                mode, discarded, ..
            } => {
                let target = match mode {
                    SessionMode::FixedLayout => format!(
                        "{} ({} positions)",
                        self.session.layout().name,
                        self.session.layout().slot_count
                    ),
                    SessionMode::FreeForm => "free selection".to_string(),
                };
                format!("layout is now {target}{}", discarded_suffix(*discarded))
            }
        }
    }

    fn position_label(&self, position: u32) -> String {
        match (self.session.mode(), self.session.layout().slot(position)) {
            (SessionMode::FixedLayout, Some(slot)) => format!("{position}. {}", slot.name),
            _ => format!("position {position}"),
        }
    }
}

fn discarded_suffix(discarded: usize) -> String {
    if discarded == 0 {
        String::new()
    } else {
        format!("; {discarded} placement(s) discarded")
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
