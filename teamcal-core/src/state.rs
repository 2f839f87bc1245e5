//! Calendar aggregate root.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TeamCalError, TeamCalResult};
use crate::month::Month;
use crate::roster::Roster;
use crate::rotation::RotationRule;
use crate::selections::Selections;
use crate::tally::{TopDate, compute_top_dates};

/// Calendar state owned by the running session.
///
/// Serialized as the local snapshot document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub current_month: Month,
    #[serde(default)]
    pub participants: Roster,
    #[serde(default)]
    pub selections: Selections,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub person_of_the_month: Option<String>,
}

impl AppState {
    /// Fresh state for `today`'s month with the default roster.
    pub fn new(today: NaiveDate) -> Self {
        AppState {
            current_month: Month::from_date(today),
            participants: Roster::default_roster(),
            selections: Selections::new(),
            last_updated: Utc::now(),
            person_of_the_month: None,
        }
    }

    /// Replace the participants available on `date`. An empty set removes the
    /// date.
    pub fn set_selection<I, S>(&mut self, date: NaiveDate, participants: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selections.set(date, participants);
    }

    pub fn top_dates(&self, limit: usize) -> Vec<TopDate> {
        compute_top_dates(&self.selections, limit)
    }

    /// Move one month back (`direction < 0`) or forward.
    ///
    /// Months before `today`'s month are rejected and state is left as is.
    pub fn change_month(&mut self, direction: i32, today: NaiveDate) -> TeamCalResult<Month> {
        let target = self.current_month.shift(direction.signum());
        ensure_not_past_month(target, today)?;
        self.current_month = target;
        Ok(target)
    }

    /// Move `current_month` forward to `today`'s month if it has fallen
    /// behind. Returns true when it moved.
    pub fn roll_to_current_month(&mut self, today: NaiveDate) -> bool {
        let now = Month::from_date(today);
        if self.current_month < now {
            self.current_month = now;
            true
        } else {
            false
        }
    }

    pub fn set_participant(&mut self, slot: usize, name: &str) -> bool {
        self.participants.set_slot(slot, name)
    }

    pub fn set_participants(&mut self, participants: Roster) {
        self.participants = participants;
    }

    pub fn duplicate_participants(&self) -> Vec<&str> {
        self.participants.duplicates()
    }

    /// Drop every selection and participant.
    pub fn clear_all(&mut self) {
        self.selections.clear();
        self.participants.clear();
    }

    /// Recompute derived fields after any change to roster or month.
    pub fn refresh_derived(&mut self, rule: RotationRule) {
        self.person_of_the_month = rule.person_of_the_month(&self.participants, &self.current_month);
    }

    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

pub fn ensure_not_past_month(month: Month, today: NaiveDate) -> TeamCalResult<()> {
    if month < Month::from_date(today) {
        return Err(TeamCalError::PastMonth(month));
    }
    Ok(())
}

/// Availability can only be recorded for today or later.
pub fn ensure_selectable_date(date: NaiveDate, today: NaiveDate) -> TeamCalResult<()> {
    if date < today {
        return Err(TeamCalError::PastDate(date));
    }
    Ok(())
}
