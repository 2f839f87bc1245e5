//! Most popular dates.

use chrono::NaiveDate;
use serde::Serialize;

use crate::selections::Selections;

/// One ranked date in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopDate {
    pub date: NaiveDate,
    pub count: usize,
    /// Sorted lexicographically.
    pub participants: Vec<String>,
}

impl TopDate {
    /// "1 person" / "3 people".
    pub fn headcount(&self) -> String {
        if self.count == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.count)
        }
    }
}

/// Rank dates by descending participant count and keep at most `limit`.
///
/// Ties keep the selections' insertion order (the sort is stable), so equal
/// counts come back in the order they were first selected.
pub fn compute_top_dates(selections: &Selections, limit: usize) -> Vec<TopDate> {
    let mut ranked: Vec<TopDate> = selections
        .iter()
        .map(|(date, participants)| {
            let mut participants = participants.to_vec();
            participants.sort();
            TopDate {
                date,
                count: participants.len(),
                participants,
            }
        })
        .filter(|item| item.count > 0)
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOP_DATES_LIMIT;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_scenario_two_dates() {
        let mut selections = Selections::new();
        selections.set(date("2024-08-01"), ["B", "A"]);
        selections.set(date("2024-08-02"), ["A"]);

        let top = compute_top_dates(&selections, TOP_DATES_LIMIT);
        assert_eq!(
            top,
            vec![
                TopDate {
                    date: date("2024-08-01"),
                    count: 2,
                    participants: vec!["A".into(), "B".into()],
                },
                TopDate {
                    date: date("2024-08-02"),
                    count: 1,
                    participants: vec!["A".into()],
                },
            ]
        );
    }

    #[test]
    fn test_limit_and_descending_order() {
        let mut selections = Selections::new();
        selections.set(date("2024-08-01"), ["A"]);
        selections.set(date("2024-08-02"), ["A", "B", "C"]);
        selections.set(date("2024-08-03"), ["A", "B"]);
        selections.set(date("2024-08-04"), ["A", "B", "C", "D"]);
        selections.set(date("2024-08-05"), ["C"]);

        let top = compute_top_dates(&selections, 3);
        assert_eq!(top.len(), 3);
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
        assert!(top.iter().all(|t| t.count > 0));
        assert_eq!(top[0].date, date("2024-08-04"));
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut selections = Selections::new();
        selections.set(date("2024-08-20"), ["A"]);
        selections.set(date("2024-08-02"), ["B"]);
        selections.set(date("2024-08-11"), ["C"]);

        let dates: Vec<_> = compute_top_dates(&selections, 3)
            .into_iter()
            .map(|t| t.date)
            .collect();
        assert_eq!(
            dates,
            vec![date("2024-08-20"), date("2024-08-02"), date("2024-08-11")]
        );
    }

    #[test]
    fn test_empty_selections() {
        assert!(compute_top_dates(&Selections::new(), 3).is_empty());
    }

    #[test]
    fn test_headcount() {
        let mut item = TopDate {
            date: date("2024-08-01"),
            count: 1,
            participants: vec!["A".into()],
        };
        assert_eq!(item.headcount(), "1 person");
        item.count = 4;
        assert_eq!(item.headcount(), "4 people");
    }
}
