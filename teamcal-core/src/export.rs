//! Plain-text summary export.

use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{TeamCalError, TeamCalResult};
use crate::state::AppState;
use crate::tally::TopDate;

/// e.g. "Thursday, August 1".
pub fn display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

pub fn export_file_name(today: NaiveDate) -> String {
    format!("calendar-summary-{}.txt", today.format("%Y-%m-%d"))
}

/// Ranked top dates followed by every selected date in insertion order.
pub fn render_summary(state: &AppState, limit: usize) -> TeamCalResult<String> {
    let top = state.top_dates(limit);
    if top.is_empty() {
        return Err(TeamCalError::NothingToExport);
    }

    let mut out = String::new();
    write_summary(&mut out, state, &top).map_err(|e| TeamCalError::Io(std::io::Error::other(e)))?;
    Ok(out)
}

fn write_summary(out: &mut impl Write, state: &AppState, top: &[TopDate]) -> fmt::Result {
    writeln!(out, "Calendar Summary - {}\n", state.current_month)?;
    writeln!(out, "Top {} Dates:\n", top.len())?;

    for (rank, item) in top.iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({})",
            rank + 1,
            display_date(item.date),
            item.headcount()
        )?;
        writeln!(out, "   Participants: {}\n", item.participants.join(", "))?;
    }

    writeln!(out, "All Selections:\n")?;
    for (date, participants) in state.selections.iter() {
        writeln!(out, "{}: {}", date.format("%Y-%m-%d"), participants.join(", "))?;
    }
    Ok(())
}

/// Write the summary into `dir` and return the file path.
pub fn export_summary(
    state: &AppState,
    limit: usize,
    dir: &Path,
    today: NaiveDate,
) -> TeamCalResult<PathBuf> {
    let text = render_summary(state, limit)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(today));
    std::fs::write(&path, text)?;
    tracing::info!(path = %path.display(), "exported summary");
    Ok(path)
}
