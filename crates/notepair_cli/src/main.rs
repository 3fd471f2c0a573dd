//! Terminal driver for the writer/reader page pair.
//!
//! # Responsibility
//! - Run one role of the pair against a shared store file.
//! - Keep the two roles integrated only through that store: start a
//!   `writer` session in one terminal and a `reader` in another.

use log::error;
use notepair_core::{
    default_log_level, init_logging, render_reader_page, render_writer_page, PeriodicTask, Reader,
    SqliteStore, UiConfig, Writer, SYNC_INTERVAL,
};
use std::error::Error;
use std::io::{self, BufRead, Write as _};
use std::sync::{Arc, Mutex};

const DEFAULT_STORE_PATH: &str = "notepair.db";
const UI_CONFIG_PATH: &str = "ui_config.json";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let store_path = args.get(1).map_or(DEFAULT_STORE_PATH, String::as_str);

    let outcome = match args.first().map(String::as_str) {
        Some("writer") => run_writer(store_path),
        Some("reader") => run_reader(store_path),
        Some("ping") => {
            println!("notepair_core ping={}", notepair_core::ping());
            println!("notepair_core version={}", notepair_core::core_version());
            Ok(())
        }
        _ => {
            eprintln!("usage: notepair <writer|reader|ping> [store-path]");
            std::process::exit(2);
        }
    };

    if let Err(err) = outcome {
        eprintln!("notepair: {err}");
        std::process::exit(1);
    }
}

fn run_writer(store_path: &str) -> Result<(), Box<dyn Error>> {
    setup_logging();
    let cfg = load_ui_config();
    let store = SqliteStore::open(store_path)?;
    let writer = Arc::new(Mutex::new(Writer::open(store)?));

    let flusher = Arc::clone(&writer);
    let autosave = PeriodicTask::spawn("writer-flush", SYNC_INTERVAL, move || {
        if let Ok(mut writer) = flusher.lock() {
            if let Err(err) = writer.tick() {
                error!("event=autosave module=cli status=error error={err}");
            }
        }
    });

    println!("writer session on `{store_path}`");
    println!("commands: add <text> | del <id> | edit <id> <text> | show | quit");
    print_writer_page(&writer, &cfg);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut guard = writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        match parse_command(&line) {
            Command::Add(text) => {
                guard.add_note(&text)?;
            }
            Command::Delete(id) => {
                if !guard.delete_note(id)? {
                    println!("no note with id {id}");
                }
            }
            Command::Edit(id, text) => {
                if !guard.edit_note(id, &text) {
                    println!("no note with id {id}");
                }
            }
            Command::Show => {}
            Command::Quit => break,
            Command::Unknown => {
                println!("commands: add <text> | del <id> | edit <id> <text> | show | quit");
                continue;
            }
        }

        drop(guard);
        print_writer_page(&writer, &cfg);
    }

    autosave.stop();
    // Final flush so a quit inside the save window loses nothing.
    writer
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .save_notes()?;
    println!("(return: {})", cfg.index);
    Ok(())
}

fn run_reader(store_path: &str) -> Result<(), Box<dyn Error>> {
    setup_logging();
    let cfg = load_ui_config();
    let store = SqliteStore::open(store_path)?;
    let mut reader = Reader::new(store);

    println!("reader session on `{store_path}` (press enter to leave)");
    let page_cfg = cfg.clone();
    let refresh = PeriodicTask::spawn("reader-refresh", SYNC_INTERVAL, move || {
        match reader.tick() {
            Ok(()) => {
                print!(
                    "\n{}",
                    render_reader_page(reader.notes(), &page_cfg, reader.last_fetched_ms())
                );
                let _ = io::stdout().flush();
            }
            Err(err) => error!("event=refresh module=cli status=error error={err}"),
        }
    });

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    refresh.stop();
    println!("(return: {})", cfg.index);
    Ok(())
}

enum Command {
    Add(String),
    Delete(u64),
    Edit(u64, String),
    Show,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let (verb, rest) = match trimmed.split_once(' ') {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };

    match verb {
        "add" => Command::Add(rest.to_string()),
        "del" => match rest.parse() {
            Ok(id) => Command::Delete(id),
            Err(_) => Command::Unknown,
        },
        "edit" => {
            let (id, text) = match rest.split_once(' ') {
                Some((id, text)) => (id, text),
                None => (rest, ""),
            };
            match id.parse() {
                Ok(id) => Command::Edit(id, text.to_string()),
                Err(_) => Command::Unknown,
            }
        }
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown,
    }
}

fn print_writer_page(writer: &Arc<Mutex<Writer<SqliteStore>>>, cfg: &UiConfig) {
    let guard = writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    print!(
        "\n{}",
        render_writer_page(guard.notes(), cfg, guard.last_saved_ms())
    );
    let _ = io::stdout().flush();
}

fn load_ui_config() -> UiConfig {
    match std::fs::read_to_string(UI_CONFIG_PATH) {
        Ok(text) => match UiConfig::from_json(&text) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("ignoring `{UI_CONFIG_PATH}`: {err}");
                UiConfig::default()
            }
        },
        Err(_) => UiConfig::default(),
    }
}

fn setup_logging() {
    let log_dir = std::env::temp_dir().join("notepair-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), dir) {
            eprintln!("logging disabled: {err}");
        }
    }
}
