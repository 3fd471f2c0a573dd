//! Text rendering for the writer and reader pages.
//!
//! # Responsibility
//! - Turn a note snapshot plus [`UiConfig`] labels into display text.
//! - Keep presentation strictly apart from the persisted data contract.
//!
//! # Invariants
//! - The reader rendering exposes no mutation affordances.
//! - Rendering is pure: same snapshot and labels, same output.

use crate::config::UiConfig;
use crate::model::note::Note;
use std::fmt::Write as _;

/// Renders the editable writer page: one line per note with its id and
/// the configured delete action, then the last-saved feedback line.
pub fn render_writer_page(notes: &[Note], cfg: &UiConfig, last_saved_ms: Option<u64>) -> String {
    let mut page = String::new();
    for note in notes {
        let _ = writeln!(page, "#{} {} [{}]", note.id, note.message, cfg.delete_label);
    }
    push_timestamp_line(&mut page, &cfg.last_saved_label, last_saved_ms);
    push_return_line(&mut page, cfg);
    page
}

/// Renders the read-only reader page: messages only, no ids or actions,
/// then the last-fetched feedback line.
pub fn render_reader_page(notes: &[Note], cfg: &UiConfig, last_fetched_ms: Option<u64>) -> String {
    let mut page = String::new();
    for note in notes {
        let _ = writeln!(page, "{}", note.message);
    }
    push_timestamp_line(&mut page, &cfg.last_fetched_label, last_fetched_ms);
    push_return_line(&mut page, cfg);
    page
}

fn push_timestamp_line(page: &mut String, label: &str, epoch_ms: Option<u64>) {
    if let Some(ms) = epoch_ms {
        let _ = writeln!(page, "{label} {}", format_clock_time(ms));
    }
}

fn push_return_line(page: &mut String, cfg: &UiConfig) {
    let _ = writeln!(page, "(return: {})", cfg.index);
}

/// Formats epoch milliseconds as a `HH:MM:SS` wall-clock reading (UTC).
fn format_clock_time(epoch_ms: u64) -> String {
    let day_seconds = (epoch_ms / 1000) % 86_400;
    let hours = day_seconds / 3_600;
    let minutes = (day_seconds % 3_600) / 60;
    let seconds = day_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
