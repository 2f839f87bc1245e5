//! Terminal rendering for teamcal types.
//!
//! Extension traits and helpers that add colored output to teamcal-core
//! types using owo_colors.

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use teamcal_core::constants::{ROSTER_CAPACITY, TOP_DATES_LIMIT};
use teamcal_core::export::display_date;
use teamcal_core::roster::initials;
use teamcal_core::{AppState, Roster, Task, TopDate};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Task {
    fn render(&self) -> String {
        if self.completed {
            format!("{} {} {}", "[x]".green(), self.id.dimmed(), self.text.strikethrough().dimmed())
        } else {
            format!("{} {} {}", "[ ]", self.id.dimmed(), self.text)
        }
    }
}

impl Render for TopDate {
    fn render(&self) -> String {
        format!(
            "{}  {}\n   {}",
            display_date(self.date).bold(),
            self.headcount().dimmed(),
            self.participants.join(", ")
        )
    }
}

impl Render for Roster {
    fn render(&self) -> String {
        let duplicates = self.duplicates();
        (0..ROSTER_CAPACITY)
            .map(|slot| match self.get(slot) {
                Some(name) if duplicates.contains(&name) => {
                    format!("  {}. {} {}", slot + 1, name.red(), "(duplicate)".red())
                }
                Some(name) => format!("  {}. {}", slot + 1, name),
                None => format!("  {}. {}", slot + 1, "(empty)".dimmed()),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

const CELL_WIDTH: usize = 6;

/// Month grid, Sunday first. Selected days show their headcount; the top
/// dates are highlighted.
pub fn render_grid(state: &AppState, today: NaiveDate) -> String {
    let top: Vec<NaiveDate> = state
        .top_dates(TOP_DATES_LIMIT)
        .iter()
        .map(|t| t.date)
        .collect();

    let header = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        .iter()
        .map(|d| format!("{:<CELL_WIDTH$}", d))
        .collect::<String>();

    let mut lines = vec![header.dimmed().to_string()];
    for week in state.current_month.grid_cells().chunks(7) {
        let line = week
            .iter()
            .map(|cell| match cell {
                Some(date) => render_cell(state, *date, &top, today),
                None => " ".repeat(CELL_WIDTH),
            })
            .collect::<String>();
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn render_cell(state: &AppState, date: NaiveDate, top: &[NaiveDate], today: NaiveDate) -> String {
    let count = state.selections.get(date).map(|p| p.len()).unwrap_or(0);
    // Pad before coloring so escape codes do not break alignment.
    let plain = if count > 0 {
        format!("{:>2}({})", date.day(), count)
    } else {
        format!("{:>2}", date.day())
    };
    let plain = format!("{:<CELL_WIDTH$}", plain);

    if top.contains(&date) {
        plain.green().bold().to_string()
    } else if count > 0 {
        plain.yellow().to_string()
    } else if date < today {
        plain.dimmed().to_string()
    } else if date == today {
        plain.underline().to_string()
    } else {
        plain
    }
}

pub fn render_top_dates(top: &[TopDate]) -> String {
    if top.is_empty() {
        return "No dates selected yet. Use `teamcal cal select` to add availability."
            .dimmed()
            .to_string();
    }
    top.iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.render()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Selected days of the current month with participant initials.
pub fn render_availability(state: &AppState) -> String {
    let mut days: Vec<(NaiveDate, &[String])> = state
        .selections
        .iter()
        .filter(|(date, _)| state.current_month.contains(*date))
        .collect();
    days.sort_by_key(|(date, _)| *date);

    days.iter()
        .map(|(date, participants)| {
            let marks = participants
                .iter()
                .map(|p| initials(p))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "  {}  {} {}",
                date.format("%a %b %-d"),
                marks,
                format!("({})", participants.len()).dimmed()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_calendar(state: &AppState, today: NaiveDate) -> String {
    let mut lines = vec![state.current_month.to_string().bold().to_string()];

    match &state.person_of_the_month {
        Some(person) => lines.push(format!("Person of the month: {}", person.cyan().bold())),
        None => lines.push("Person of the month: (no participants)".dimmed().to_string()),
    }

    lines.push(String::new());
    lines.push(render_grid(state, today));

    let availability = render_availability(state);
    if !availability.is_empty() {
        lines.push(String::new());
        lines.push("Availability".bold().to_string());
        lines.push(availability);
    }

    lines.push(String::new());
    lines.push(format!("Top {} Dates", TOP_DATES_LIMIT).bold().to_string());
    lines.push(render_top_dates(&state.top_dates(TOP_DATES_LIMIT)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn state() -> AppState {
        let mut state = AppState::new(date("2024-08-01"));
        state.set_participants(Roster::new(["Amit Shah", "Ben", "Tom"]));
        state.set_selection(date("2024-08-14"), ["Amit Shah", "Ben"]);
        state.set_selection(date("2024-09-02"), ["Tom"]);
        state
    }

    #[test]
    fn test_grid_has_header_and_five_weeks() {
        let grid = render_grid(&state(), date("2024-08-01"));
        let lines: Vec<&str> = grid.lines().collect();
        // August 2024 starts on a Thursday and needs five rows.
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Sun"));
        assert!(grid.contains("14(2)"));
    }

    #[test]
    fn test_availability_lists_current_month_only() {
        let text = render_availability(&state());
        assert!(text.contains("Wed Aug 14"));
        assert!(text.contains("AS B"));
        assert!(!text.contains("Sep"));
    }

    #[test]
    fn test_empty_top_dates_message() {
        assert!(render_top_dates(&[]).contains("No dates selected yet"));
    }

    #[test]
    fn test_roster_marks_duplicates_and_empty_slots() {
        let text = Roster::new(["Ben", "Ben"]).render();
        assert_eq!(text.lines().count(), ROSTER_CAPACITY);
        assert!(text.contains("(duplicate)"));
        assert!(text.contains("(empty)"));
    }
}
