use anyhow::Result;
use dialoguer::Confirm;
use teamcal_core::CalendarSession;
use teamcal_core::remote::RemoteStore;

use crate::utils::tui;

pub async fn run<R: RemoteStore>(session: &mut CalendarSession<R>, force: bool) -> Result<()> {
    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to clear all data? This action cannot be undone.")
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    let outcome = session.clear_all().await?;
    tui::save_notice(&outcome, "All data cleared successfully!");
    Ok(())
}
