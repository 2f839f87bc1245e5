use anyhow::Result;
use teamcal_core::CalendarSession;
use teamcal_core::remote::RemoteStore;

use crate::utils::tui;

pub async fn run<R: RemoteStore>(session: &mut CalendarSession<R>) -> Result<()> {
    let outcome = session.save().await?;
    tui::save_notice(&outcome, "Selections saved successfully!");
    Ok(())
}
