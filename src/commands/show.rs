use anyhow::Result;
use chrono::NaiveDate;
use teamcal_core::CalendarSession;
use teamcal_core::remote::RemoteStore;

use crate::render::render_calendar;

pub fn run<R: RemoteStore>(session: &CalendarSession<R>, today: NaiveDate) -> Result<()> {
    println!("{}", render_calendar(session.state(), today));
    Ok(())
}
