use anyhow::Result;
use chrono::NaiveDate;
use teamcal_core::month::parse_date;
use teamcal_core::remote::RemoteStore;
use teamcal_core::{CalendarSession, TeamCalError};

use crate::render::render_calendar;
use crate::utils::tui;

pub async fn run<R: RemoteStore>(
    session: &mut CalendarSession<R>,
    date: &str,
    names: Vec<String>,
    today: NaiveDate,
) -> Result<()> {
    let date = parse_date(date)?;

    let unknown: Vec<&String> = names
        .iter()
        .filter(|n| !session.state().participants.contains(n.trim()))
        .collect();
    if !unknown.is_empty() {
        let unknown: Vec<&str> = unknown.iter().map(|s| s.as_str()).collect();
        tui::warning(&format!("Not on the roster, skipped: {}", unknown.join(", ")));
    }

    match session.select(date, &names, today).await {
        Ok(outcome) => {
            tui::save_notice(&outcome, "Selections saved successfully!");
            println!();
            println!("{}", render_calendar(session.state(), today));
            Ok(())
        }
        Err(e @ TeamCalError::PastDate(_)) => {
            tui::warning(&e.to_string());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
