//! Year + month pointer used for navigation and remote document keys.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{TeamCalError, TeamCalResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// `month` is 1-based. Returns `None` outside 1..=12, or when the year
    /// is at or past the edge of the representable date range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let year_ok = year > NaiveDate::MIN.year() && year < NaiveDate::MAX.year();
        ((1..=12).contains(&month) && year_ok).then_some(Month { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index (January = 0).
    pub fn index0(&self) -> u32 {
        self.month - 1
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.index0() as usize]
    }

    /// Document key, e.g. `2024-08`.
    pub fn key(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }

    /// Move by `delta` months, crossing year boundaries as needed.
    pub fn shift(&self, delta: i32) -> Month {
        let total = self.year * 12 + self.index0() as i32 + delta;
        Month {
            year: total.div_euclid(12),
            month: total.rem_euclid(12) as u32 + 1,
        }
    }

    /// Signed number of months from `other` to `self`.
    pub fn months_since(&self, other: &Month) -> i32 {
        (self.year - other.year) * 12 + self.month as i32 - other.month as i32
    }

    pub fn first_day(&self) -> NaiveDate {
        // Month invariants guarantee a valid first day.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        let first = self.first_day();
        first
            .checked_add_months(Months::new(1))
            .map(|next| (next - first).num_days() as u32)
            .unwrap_or(31)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Month::from_date(date) == *self
    }

    /// Every date of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let first = self.first_day();
        (0..self.days_in_month()).filter_map(move |offset| {
            first.checked_add_days(chrono::Days::new(offset as u64))
        })
    }

    /// Grid cells, Sunday first: `None` for each blank before the 1st, then
    /// one cell per day.
    pub fn grid_cells(&self) -> Vec<Option<NaiveDate>> {
        let lead = self.first_day().weekday().num_days_from_sunday() as usize;
        std::iter::repeat_n(None, lead)
            .chain(self.days().map(Some))
            .collect()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

impl FromStr for Month {
    type Err = TeamCalError;

    fn from_str(s: &str) -> TeamCalResult<Self> {
        let invalid = || TeamCalError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Month::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for Month {
    type Error = TeamCalError;

    fn try_from(value: String) -> TeamCalResult<Self> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.key()
    }
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> TeamCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TeamCalError::InvalidDate(s.to_string()))
}
