use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use teamcal_core::CalendarSession;
use teamcal_core::remote::RemoteStore;

use crate::render::render_calendar;

pub async fn run<R: RemoteStore>(session: &mut CalendarSession<R>, today: NaiveDate) -> Result<()> {
    println!("{}", render_calendar(session.state(), today));
    println!(
        "\n{}",
        format!(
            "Watching {} for changes (Ctrl-C to stop)",
            session.state().current_month
        )
        .dimmed()
    );

    tokio::select! {
        result = session.subscribe_remote(|state| {
            println!("\n{}", "Remote update".cyan());
            println!("{}", render_calendar(state, today));
        }) => result?,
        _ = tokio::signal::ctrl_c() => {}
    }

    Ok(())
}
