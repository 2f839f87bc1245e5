//! Participant roster.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PARTICIPANTS, ROSTER_CAPACITY};

/// Ordered list of participant display names.
///
/// Names are trimmed and empty entries are pruned on every edit. Duplicates
/// are allowed but reported through [`Roster::duplicates`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<String>);

impl Roster {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Roster(names.into_iter().map(|n| n.as_ref().to_string()).collect());
        roster.prune();
        roster
    }

    pub fn default_roster() -> Self {
        Roster::new(DEFAULT_PARTICIPANTS)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Write `name` into editing slot `slot`, then prune empty entries.
    ///
    /// Slots past the end are padded with empty entries first, so writing
    /// slot 5 of a 3-name roster appends. An empty `name` clears the slot.
    /// Returns false when `slot` is outside the editable capacity.
    pub fn set_slot(&mut self, slot: usize, name: &str) -> bool {
        if slot >= ROSTER_CAPACITY {
            return false;
        }
        if self.0.len() <= slot {
            self.0.resize(slot + 1, String::new());
        }
        self.0[slot] = name.trim().to_string();
        self.prune();
        true
    }

    /// Names that appear more than once, in first-seen order.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut dupes: Vec<&str> = Vec::new();
        for (i, name) in self.0.iter().enumerate() {
            if self.0[..i].contains(name) && !dupes.contains(&name.as_str()) {
                dupes.push(name);
            }
        }
        dupes
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    fn prune(&mut self) {
        for name in self.0.iter_mut() {
            *name = name.trim().to_string();
        }
        self.0.retain(|n| !n.is_empty());
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Up to two upper-cased initials, one per word.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_prunes() {
        let roster = Roster::new([" Amit ", "", "  ", "Ben"]);
        assert_eq!(roster.names(), ["Amit", "Ben"]);
    }

    #[test]
    fn test_set_slot_replaces_in_place() {
        let mut roster = Roster::new(["A", "B", "C"]);
        assert!(roster.set_slot(1, "Bea"));
        assert_eq!(roster.names(), ["A", "Bea", "C"]);
    }

    #[test]
    fn test_set_slot_empty_removes_and_shifts() {
        let mut roster = Roster::new(["A", "B", "C"]);
        roster.set_slot(0, "   ");
        assert_eq!(roster.names(), ["B", "C"]);
    }

    #[test]
    fn test_set_slot_past_end_appends() {
        let mut roster = Roster::new(["A"]);
        roster.set_slot(4, "E");
        assert_eq!(roster.names(), ["A", "E"]);
    }

    #[test]
    fn test_set_slot_rejects_out_of_capacity() {
        let mut roster = Roster::new(["A"]);
        assert!(!roster.set_slot(ROSTER_CAPACITY, "X"));
        assert_eq!(roster.names(), ["A"]);
    }

    #[test]
    fn test_duplicates_are_reported_not_rejected() {
        let roster = Roster::new(["Tom", "Ben", "Tom", "Tom", "Ben", "Ilya"]);
        assert_eq!(roster.len(), 6);
        assert_eq!(roster.duplicates(), vec!["Tom", "Ben"]);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("amit"), "A");
        assert_eq!(initials("Mary Jane Watson"), "MJ");
        assert_eq!(initials("Krystian"), "K");
    }

    #[test]
    fn test_default_roster() {
        let roster = Roster::default_roster();
        assert_eq!(roster.len(), 7);
        assert_eq!(roster.get(1), Some("Ben"));
    }
}
