use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use teamcal_core::constants::TOP_DATES_LIMIT;
use teamcal_core::export::export_summary;
use teamcal_core::remote::RemoteStore;
use teamcal_core::{CalendarSession, TeamCalError};

use crate::utils::tui;

pub fn run<R: RemoteStore>(
    session: &CalendarSession<R>,
    out: Option<PathBuf>,
    today: NaiveDate,
) -> Result<()> {
    let dir = match out {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match export_summary(session.state(), TOP_DATES_LIMIT, &dir, today) {
        Ok(path) => {
            tui::notice("Summary exported successfully!");
            println!("{}", path.display());
            Ok(())
        }
        Err(TeamCalError::NothingToExport) => {
            tui::warning(&TeamCalError::NothingToExport.to_string());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
