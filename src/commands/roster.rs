use anyhow::Result;
use teamcal_core::CalendarSession;
use teamcal_core::constants::ROSTER_CAPACITY;
use teamcal_core::remote::RemoteStore;

use crate::render::Render;
use crate::utils::tui;

pub async fn run<R: RemoteStore>(
    session: &mut CalendarSession<R>,
    set: Option<Vec<String>>,
) -> Result<()> {
    if let Some(args) = set {
        let [slot, name] = args.as_slice() else {
            anyhow::bail!("--set takes a slot number and a name");
        };
        let slot: usize = slot
            .parse()
            .ok()
            .filter(|s| (1..=ROSTER_CAPACITY).contains(s))
            .ok_or_else(|| anyhow::anyhow!("Slot must be between 1 and {}", ROSTER_CAPACITY))?;

        match session.set_participant(slot - 1, name).await? {
            Some(outcome) => tui::save_notice(&outcome, "Participants updated"),
            None => tui::warning("Nothing changed"),
        }
    }

    println!("{}", session.state().participants.render());

    let duplicates = session.state().duplicate_participants();
    if !duplicates.is_empty() {
        tui::warning(&format!("Listed more than once: {}", duplicates.join(", ")));
    }

    if let Some(person) = &session.state().person_of_the_month {
        println!("\nPerson of the month: {}", person);
    }
    Ok(())
}
