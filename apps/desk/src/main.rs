use std::{ops::RangeInclusive, path::PathBuf};

use anyhow::{Context, Result};
use catalog::{
    browse::{self, Suit},
    Catalog,
};
use clap::{Parser, Subcommand};
use reading_api::{layout_summary, start_fixed, start_free_form, ReadingContext};
use shared::{
    domain::{LayoutId, SymbolSetId},
    error::ApiException,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod clipboard;
mod commands;
mod config;
mod controller;
mod render;

use commands::{ReadingCommand, HELP};

const ICHING_SET: &str = "iching";
const HEXAGRAM_NUMBERS: RangeInclusive<u32> = 1..=64;
use controller::ReadingController;

#[derive(Parser, Debug)]
#[command(name = "desk", about = "Browse divination catalogs and record readings")]
struct Args {
    /// Catalog directory; overrides desk.toml and the environment.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List layouts grouped by number of positions.
    Layouts,
    /// Show one layout's positions.
    Layout {
        id: String,
        #[arg(long)]
        copy: bool,
    },
    /// List symbol sets.
    Sets,
    /// Browse the symbols of a set.
    Symbols {
        #[arg(long)]
        set: Option<String>,
        #[arg(long)]
        letter: Option<char>,
        #[arg(long)]
        suit: Option<Suit>,
        #[arg(long)]
        major: bool,
        /// Print the index letters instead of the symbols.
        #[arg(long, conflicts_with_all = ["letter", "suit", "major"])]
        letters: bool,
    },
    /// Find a symbol by its number, e.g. a hexagram.
    Lookup {
        #[arg(long)]
        set: Option<String>,
        #[arg(long)]
        number: u32,
    },
    /// Record a reading from stdin or a script of line commands.
    Read {
        #[arg(long)]
        set: Option<String>,
        /// Fixed layout id; omit for free selection.
        #[arg(long)]
        layout: Option<String>,
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = config::load_settings()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let data_dir =
        config::prepare_data_dir(args.data_dir.as_ref().unwrap_or(&settings.data_dir))?;
    let catalog = Catalog::open(&data_dir)
        .await
        .with_context(|| format!("failed to load catalog from '{}'", data_dir.display()))?;
    let ctx = ReadingContext::new(catalog);
    let default_set =
        |set: Option<String>| SymbolSetId::new(set.unwrap_or_else(|| settings.default_set.clone()));

    match args.command {
        Command::Layouts => print_lines(render::layouts(&ctx.catalog)),
        Command::Layout { id, copy } => {
            let layout = ctx.catalog.get_layout(&LayoutId::new(id))?;
            let summary = layout_summary(layout);
            print!("{summary}");
            if copy {
                clipboard::copy_in_background(summary).await?;
            }
        }
        Command::Sets => print_lines(render::symbol_sets(ctx.catalog.symbol_sets())),
        Command::Symbols {
            set,
            letter,
            suit,
            major,
            letters,
        } => {
            let set_id = default_set(set);
            let symbols = ctx.catalog.symbols_in_set(&set_id);
            if symbols.is_empty() {
                anyhow::bail!("symbol set '{set_id}' has no symbols");
            }
            let lines = if letters {
                vec![render::letter_index(&browse::letters(symbols.iter().copied()))]
            } else if let Some(suit) = suit {
                render::suit_bands(&browse::suit_groups(symbols.iter().copied(), suit))
            } else {
                let listed = match (major, letter) {
                    (true, _) => browse::major_arcana(symbols.iter().copied()),
                    (false, Some(letter)) => browse::by_letter(symbols.iter().copied(), letter),
                    (false, None) => symbols,
                };
                listed.into_iter().map(render::symbol_line).collect()
            };
            print_lines(lines);
        }
        Command::Lookup { set, number } => {
            let set_id = default_set(set);
            check_lookup_number(&set_id, number)?;
            let symbol = ctx
                .catalog
                .find_by_order(&set_id, number)
                .with_context(|| format!("no symbol numbered {number} in '{set_id}'"))?;
            println!("{}", render::symbol_line(symbol).trim_start());
            match ctx.catalog.interpretation(&set_id, &symbol.id, false) {
                Some(text) => print_lines(render::interpretation(&text)),
                None => println!("   {}", reading_api::INTERPRETATION_NOT_FOUND),
            }
        }
        Command::Read {
            set,
            layout,
            script,
        } => {
            let set_id = default_set(set);
            let session = match layout {
                Some(layout_id) => start_fixed(&ctx, &LayoutId::new(layout_id), &set_id),
                None => start_free_form(&ctx, &set_id),
            }
            .map_err(ApiException::from)?;
            run_reading(ReadingController::new(ctx, session), script).await?;
        }
    }

    Ok(())
}

async fn run_reading(mut controller: ReadingController, script: Option<PathBuf>) -> Result<()> {
    let mut copies = Vec::new();

    let input = match &script {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read script '{}'", path.display()))?,
        None => String::new(),
    };
    let mut script_lines = input.lines();
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    if script.is_none() {
        println!("{HELP}");
        print_lines(controller.handle(ReadingCommand::Show).lines);
    }

    loop {
        let line = if script.is_some() {
            script_lines.next().map(str::to_string)
        } else {
            stdin.next_line().await?
        };
        let Some(line) = line else {
            break;
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let reply = match line.parse::<ReadingCommand>() {
            Ok(command) => controller.handle(command),
            Err(message) => {
                println!("! {message}");
                continue;
            }
        };
        print_lines(reply.lines);
        if let Some(text) = reply.clipboard {
            copies.push(clipboard::copy_in_background(text));
        }
        if reply.finished {
            break;
        }
    }

    for copy in copies {
        copy.await?;
    }
    Ok(())
}

/// Hexagram numbers run 1 to 64; other sets accept any ordinal.
fn check_lookup_number(set_id: &SymbolSetId, number: u32) -> Result<()> {
    if set_id.as_str() == ICHING_SET && !HEXAGRAM_NUMBERS.contains(&number) {
        anyhow::bail!(
            "invalid hexagram number {number} (expected {} to {})",
            HEXAGRAM_NUMBERS.start(),
            HEXAGRAM_NUMBERS.end()
        );
    }
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

#[cfg(test)]
#[path = "tests/fixture.rs"]
mod fixture;

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
