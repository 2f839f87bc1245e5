/// Roster used when neither the remote store nor local storage has one.
pub const DEFAULT_PARTICIPANTS: [&str; 7] =
    ["Amit", "Ben", "Brian", "Chris", "Ilya", "Krystian", "Tom"];

/// Number of participant slots offered for editing.
pub const ROSTER_CAPACITY: usize = 7;

/// Number of dates shown in the summary and the export.
pub const TOP_DATES_LIMIT: usize = 3;

/// Rotation anchor: in August 2024 the person of the month was roster index 1.
pub const ROTATION_ANCHOR_YEAR: i32 = 2024;
pub const ROTATION_ANCHOR_MONTH: u32 = 8;
pub const ROTATION_ANCHOR_INDEX: usize = 1;

/// Local storage key for the task list.
pub const TASKS_KEY: &str = "tasks";

/// Local storage key for the calendar state.
pub const CALENDAR_KEY: &str = "calendar";

/// Remote path prefix for month documents.
pub const REMOTE_CALENDAR_PATH: &str = "calendar";

/// Timeout for one-shot remote requests, in seconds.
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;
