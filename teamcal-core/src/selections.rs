//! Per-date availability selections.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Map from date to the participants available that day.
///
/// Keeps insertion order: overwriting a date keeps its position, removing and
/// re-adding a date moves it to the end. A date is present only while its
/// participant list is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    entries: Vec<(NaiveDate, Vec<String>)>,
}

impl Selections {
    pub fn new() -> Self {
        Selections::default()
    }

    /// Replace the participants for `date`. An empty set removes the date.
    pub fn set<I, S>(&mut self, date: NaiveDate, participants: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let participants = dedup(participants);

        if participants.is_empty() {
            self.entries.retain(|(d, _)| *d != date);
            return;
        }

        match self.entries.iter_mut().find(|(d, _)| *d == date) {
            Some((_, existing)) => *existing = participants,
            None => self.entries.push((date, participants)),
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(d, _)| *d == date)
            .map(|(_, p)| p.as_slice())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.get(date).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[String])> {
        self.entries.iter().map(|(d, p)| (*d, p.as_slice()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn dedup<I, S>(participants: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for name in participants {
        let name = name.as_ref().trim();
        if !name.is_empty() && !out.iter().any(|n| n == name) {
            out.push(name.to_string());
        }
    }
    out
}

impl Serialize for Selections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, participants) in &self.entries {
            map.serialize_entry(&date.format("%Y-%m-%d").to_string(), participants)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Selections {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SelectionsVisitor)
    }
}

struct SelectionsVisitor;

impl<'de> Visitor<'de> for SelectionsVisitor {
    type Value = Selections;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of YYYY-MM-DD dates to participant lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Selections, A::Error> {
        let mut selections = Selections::new();
        while let Some((date, participants)) = access.next_entry::<NaiveDate, Vec<String>>()? {
            // Empty lists are dropped rather than stored.
            selections.set(date, participants);
        }
        Ok(selections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_set_empty_removes_date() {
        let mut selections = Selections::new();
        selections.set(date("2024-08-01"), ["A"]);
        selections.set(date("2024-08-01"), Vec::<String>::new());
        assert!(!selections.contains(date("2024-08-01")));
        assert!(selections.is_empty());
    }

    #[test]
    fn test_set_new_date_adds_one_entry() {
        let mut selections = Selections::new();
        selections.set(date("2024-08-01"), ["A"]);
        selections.set(date("2024-08-02"), ["A", "B"]);
        assert_eq!(selections.len(), 2);
    }

    #[test]
    fn test_set_overwrites_without_merging() {
        let mut selections = Selections::new();
        selections.set(date("2024-08-01"), ["A", "B"]);
        selections.set(date("2024-08-01"), ["C"]);
        assert_eq!(selections.get(date("2024-08-01")).unwrap(), ["C"]);
    }

    #[test]
    fn test_overwrite_keeps_position_and_readd_moves_to_end() {
        let mut selections = Selections::new();
        selections.set(date("2024-08-05"), ["A"]);
        selections.set(date("2024-08-01"), ["A"]);
        selections.set(date("2024-08-05"), ["B"]);

        let order: Vec<_> = selections.iter().map(|(d, _)| d).collect();
        assert_eq!(order, vec![date("2024-08-05"), date("2024-08-01")]);

        selections.set(date("2024-08-05"), Vec::<String>::new());
        selections.set(date("2024-08-05"), ["C"]);
        let order: Vec<_> = selections.iter().map(|(d, _)| d).collect();
        assert_eq!(order, vec![date("2024-08-01"), date("2024-08-05")]);
    }

    #[test]
    fn test_set_dedups_and_trims() {
        let mut selections = Selections::new();
        selections.set(date("2024-08-01"), ["A", " A ", "", "B"]);
        assert_eq!(selections.get(date("2024-08-01")).unwrap(), ["A", "B"]);
    }

    #[test]
    fn test_json_preserves_document_order() {
        let json = r#"{"2024-08-09":["A"],"2024-08-01":["B","C"],"2024-08-03":[]}"#;
        let selections: Selections = serde_json::from_str(json).unwrap();

        let order: Vec<_> = selections.iter().map(|(d, _)| d).collect();
        assert_eq!(order, vec![date("2024-08-09"), date("2024-08-01")]);

        let out = serde_json::to_string(&selections).unwrap();
        assert_eq!(out, r#"{"2024-08-09":["A"],"2024-08-01":["B","C"]}"#);
    }
}
