use chrono::NaiveDate;
use teamcal_core::constants::TOP_DATES_LIMIT;
use teamcal_core::remote::LocalOnly;
use teamcal_core::{
    CalendarSession, LoadSource, LocalStorage, Roster, RotationRule, TaskStore,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn save_then_load_without_remote_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let today = date("2024-08-10");

    let mut session = CalendarSession::load(
        LocalStorage::new(dir.path()),
        LocalOnly,
        RotationRule::CalendarMonth,
        today,
    )
    .await
    .unwrap();

    session
        .set_participants(Roster::new(["A", "B", "C"]))
        .await
        .unwrap();
    session
        .select(date("2024-08-12"), &["A".to_string(), "B".to_string()], today)
        .await
        .unwrap();
    let outcome = session
        .select(date("2024-08-11"), &["C".to_string()], today)
        .await
        .unwrap();
    assert!(outcome.is_local_only());

    let saved = session.state().clone();

    let reloaded = CalendarSession::load(
        LocalStorage::new(dir.path()),
        LocalOnly,
        RotationRule::CalendarMonth,
        today,
    )
    .await
    .unwrap();

    assert_eq!(reloaded.source(), LoadSource::Local);
    assert_eq!(reloaded.state().selections, saved.selections);
    assert_eq!(reloaded.state().participants, saved.participants);
    assert_eq!(reloaded.state().current_month, saved.current_month);

    let top = reloaded.state().top_dates(TOP_DATES_LIMIT);
    assert_eq!(top[0].date, date("2024-08-12"));
    assert_eq!(top[0].count, 2);
}

#[tokio::test]
async fn stale_month_rolls_forward_on_load() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = CalendarSession::load(
        LocalStorage::new(dir.path()),
        LocalOnly,
        RotationRule::CalendarMonth,
        date("2024-06-03"),
    )
    .await
    .unwrap();
    session.save().await.unwrap();

    let reloaded = CalendarSession::load(
        LocalStorage::new(dir.path()),
        LocalOnly,
        RotationRule::CalendarMonth,
        date("2024-08-10"),
    )
    .await
    .unwrap();

    assert!(reloaded.rolled_forward());
    assert_eq!(reloaded.state().current_month.key(), "2024-08");
}

#[tokio::test]
async fn corrupt_snapshot_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("calendar.json"), "{oops").unwrap();

    let session = CalendarSession::load(
        LocalStorage::new(dir.path()),
        LocalOnly,
        RotationRule::ElapsedMonths,
        date("2025-02-01"),
    )
    .await
    .unwrap();

    assert_eq!(session.source(), LoadSource::Defaults);
    // February 2025 is six months after the anchor: (6 + 1) mod 7 = 0.
    assert_eq!(session.state().person_of_the_month.as_deref(), Some("Amit"));
}

#[test]
fn task_list_and_calendar_use_separate_documents() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(dir.path());

    let mut tasks = TaskStore::open(storage.clone()).unwrap();
    assert!(tasks.add_task("   ").unwrap().is_none());
    let task = tasks.add_task("book the room").unwrap().unwrap();
    assert!(!task.completed);

    assert!(dir.path().join("tasks.json").exists());
    assert!(!dir.path().join("calendar.json").exists());
}
