//! Line commands accepted by `desk read`.

use std::str::FromStr;

use shared::domain::{LayoutId, SymbolId, SymbolSetId, FREE_FORM_LAYOUT_ID};

pub const HELP: &str = "\
commands:
  add <symbol> [reversed]   place a symbol at the next open position
  toggle <position>         flip orientation at a position
  undo                      remove the last placement
  clear                     remove every placement
  set <set>                 draw from another symbol set (clears the reading)
  layout <layout>|free      change layout (clears the reading)
  show                      print the current reading
  copy                      copy the reading summary to the clipboard
  done                      interpret the reading and exit
  quit                      exit without interpreting";

const REVERSED_WORDS: [&str; 3] = ["reversed", "r", "invertida"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadingCommand {
    Add { symbol_id: SymbolId, reversed: bool },
    Toggle { position: u32 },
    Undo,
    Clear,
    SwitchSet(SymbolSetId),
    SwitchLayout(LayoutId),
    FreeForm,
    Show,
    Copy,
    Done,
    Quit,
    Help,
}

impl FromStr for ReadingCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err("empty command".to_string());
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_lowercase().as_str(), args.as_slice()) {
            ("add", [symbol]) => ReadingCommand::Add {
                symbol_id: SymbolId::from(*symbol),
                reversed: false,
            },
            ("add", [symbol, flag]) if is_reversed_flag(flag) => ReadingCommand::Add {
                symbol_id: SymbolId::from(*symbol),
                reversed: true,
            },
            ("add", [_, flag]) => return Err(format!("unknown orientation '{flag}'")),
            ("toggle", [position]) => {
                let position = position
                    .parse::<u32>()
                    .map_err(|_| format!("'{position}' is not a position number"))?;
                ReadingCommand::Toggle { position }
            }
            ("undo", []) => ReadingCommand::Undo,
            ("clear", []) => ReadingCommand::Clear,
            ("set", [set_id]) => ReadingCommand::SwitchSet(SymbolSetId::from(*set_id)),
            ("layout", [layout]) if *layout == "free" || *layout == FREE_FORM_LAYOUT_ID => {
                ReadingCommand::FreeForm
            }
            ("layout", [layout_id]) => ReadingCommand::SwitchLayout(LayoutId::from(*layout_id)),
            ("show", []) => ReadingCommand::Show,
            ("copy", []) => ReadingCommand::Copy,
            ("done", []) => ReadingCommand::Done,
            ("quit" | "exit", []) => ReadingCommand::Quit,
            ("help" | "?", []) => ReadingCommand::Help,
            (
                "add" | "toggle" | "undo" | "clear" | "set" | "layout" | "show" | "copy" | "done"
                | "quit" | "exit" | "help",
                _,
            ) => return Err(format!("wrong arguments for '{verb}' (try 'help')")),
            _ => return Err(format!("unknown command '{verb}' (try 'help')")),
        };
        Ok(command)
    }
}

fn is_reversed_flag(word: &str) -> bool {
    REVERSED_WORDS
        .iter()
        .any(|flag| flag.eq_ignore_ascii_case(word))
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
