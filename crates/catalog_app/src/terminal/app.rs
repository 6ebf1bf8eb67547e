use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use catalog_core::{update, BrowseSession, Msg};
use engine_logging::{engine_info, engine_warn};
use log::LevelFilter;

use super::commands::{parse_command, Command, HELP};
use super::effects::EffectRunner;
use super::render::{render, render_genres, render_saved};
use super::shelf::Shelf;
use crate::config::AppConfig;

const LOG_FILENAME: &str = "catalog_browser.log";

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    engine_logging::initialize(
        config.log_destination.into(),
        LevelFilter::Info,
        Path::new(LOG_FILENAME),
    );
    engine_info!("Starting catalog browser against {}", config.catalog_base_url);

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    let runner = EffectRunner::new(config.fetch_settings(), cmd_tx.clone())
        .context("starting fetch engine")?;
    let shelf = Shelf::new(config.shelf_dir.clone());

    spawn_input_reader(cmd_tx.clone());

    let mut out = io::stdout().lock();
    print_lines(&mut out, HELP)?;

    let mut state = BrowseSession::new();
    let _ = cmd_tx.send(Command::Browse(Msg::SessionStarted));

    while let Ok(command) = cmd_rx.recv() {
        match command {
            Command::Browse(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.run(effects);
                if state.consume_dirty() {
                    print_lines(&mut out, &render(&state.view()))?;
                }
            }
            Command::Save(id) => match state.item(id) {
                Some(item) => match shelf.save(item) {
                    Ok(()) => writeln!(out, "Saved #{id} \"{}\" for offline reading.", item.title)?,
                    Err(err) => {
                        engine_warn!("Saving book {} failed: {:#}", id, err);
                        writeln!(out, "Could not save #{id}: {err:#}")?;
                    }
                },
                None => writeln!(out, "Book #{id} is not in the loaded list.")?,
            },
            Command::ShowSaved => print_lines(&mut out, &render_saved(&shelf.load()))?,
            Command::ShowGenres => print_lines(&mut out, &render_genres(&state.view()))?,
            Command::Help => print_lines(&mut out, HELP)?,
            Command::Unknown(line) => {
                writeln!(out, "Unknown command: {line}")?;
                print_lines(&mut out, HELP)?;
            }
            Command::Quit => break,
        }
        out.flush()?;
    }

    engine_info!("Catalog browser stopped");
    Ok(())
}

/// Stdin lines become commands. End of input quits.
fn spawn_input_reader(tx: mpsc::Sender<Command>) {
    thread::spawn(move || forward_lines(io::stdin().lock(), &tx));
}

/// Lines that are not valid UTF-8 are skipped; any other read error ends input.
fn forward_lines(reader: impl BufRead, tx: &mpsc::Sender<Command>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                engine_warn!("Skipping unreadable input line: {}", err);
                continue;
            }
            Err(err) => {
                engine_warn!("Stopped reading input: {}", err);
                break;
            }
        };
        if tx.send(parse_command(&line)).is_err() {
            return;
        }
    }
    let _ = tx.send(Command::Quit);
}

fn print_lines<S: AsRef<str>>(out: &mut impl Write, lines: &[S]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    Ok(())
}
