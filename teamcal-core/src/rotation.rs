//! Person-of-the-month rotation.

use serde::{Deserialize, Serialize};

use crate::constants::{ROTATION_ANCHOR_INDEX, ROTATION_ANCHOR_MONTH, ROTATION_ANCHOR_YEAR};
use crate::month::Month;
use crate::roster::Roster;

/// How the rotation index is derived from a month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RotationRule {
    /// `(month_index mod len + 1) mod len`, using only the zero-based
    /// calendar month. Repeats every 12 months and shifts meaning when the
    /// roster length changes.
    #[default]
    CalendarMonth,
    /// `(months since August 2024 + 1) mod len`.
    ElapsedMonths,
}

/// Roster index for a zero-based calendar month index (January = 0).
///
/// Anchored on "August (index 7) → roster index 1" for a seven-person
/// roster. Returns `None` for an empty roster.
pub fn compute_rotation(roster_len: usize, reference_month_index: u32) -> Option<usize> {
    if roster_len == 0 {
        return None;
    }
    Some((reference_month_index as usize % roster_len + ROTATION_ANCHOR_INDEX) % roster_len)
}

/// Roster index counting real elapsed months since the August 2024 anchor.
pub fn compute_elapsed_rotation(roster_len: usize, month: &Month) -> Option<usize> {
    if roster_len == 0 {
        return None;
    }
    let anchor = Month::new(ROTATION_ANCHOR_YEAR, ROTATION_ANCHOR_MONTH)?;
    let offset = month.months_since(&anchor) as i64 + ROTATION_ANCHOR_INDEX as i64;
    Some(offset.rem_euclid(roster_len as i64) as usize)
}

impl RotationRule {
    pub fn index_for(&self, roster_len: usize, month: &Month) -> Option<usize> {
        match self {
            RotationRule::CalendarMonth => compute_rotation(roster_len, month.index0()),
            RotationRule::ElapsedMonths => compute_elapsed_rotation(roster_len, month),
        }
    }

    pub fn person_of_the_month(&self, roster: &Roster, month: &Month) -> Option<String> {
        self.index_for(roster.len(), month)
            .and_then(|i| roster.get(i))
            .map(str::to_string)
    }
}
