use anyhow::Result;
use chrono::NaiveDate;
use teamcal_core::CalendarSession;
use teamcal_core::remote::RemoteStore;

use crate::render::render_calendar;
use crate::utils::tui;

pub async fn run<R: RemoteStore>(
    session: &mut CalendarSession<R>,
    direction: i32,
    today: NaiveDate,
) -> Result<()> {
    match session.change_month(direction, today).await {
        Ok(_) => {}
        Err(e) if e.is_navigation_guard() => tui::warning(&e.to_string()),
        Err(e) => return Err(e.into()),
    }

    println!("{}", render_calendar(session.state(), today));
    Ok(())
}
