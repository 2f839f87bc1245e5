//! Core types for teamcal.
//!
//! - `task` for the write-through task list
//! - `state`, `selections`, `tally` and `rotation` for the availability
//!   calendar
//! - `session` for loading and saving the calendar through local storage and
//!   an optional `remote` mirror

pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod import;
pub mod month;
pub mod remote;
pub mod roster;
pub mod rotation;
pub mod selections;
pub mod session;
pub mod state;
pub mod storage;
pub mod tally;
pub mod task;

pub use error::{TeamCalError, TeamCalResult};
pub use month::Month;
pub use roster::Roster;
pub use rotation::{RotationRule, compute_rotation};
pub use selections::Selections;
pub use session::{CalendarSession, LoadSource, SaveOutcome};
pub use state::AppState;
pub use storage::LocalStorage;
pub use tally::{TopDate, compute_top_dates};
pub use task::{Task, TaskId, TaskList, TaskStore};
