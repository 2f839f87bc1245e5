//! Remote mirror of the calendar, keyed by month.
//!
//! The session only talks to a [`RemoteStore`]; which implementation backs
//! it is decided once at startup from configuration. A store that cannot be
//! reached simply returns errors, and callers fall back to local storage.

pub mod firebase;
pub mod sse;

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TeamCalError, TeamCalResult};
use crate::month::Month;
use crate::roster::Roster;
use crate::selections::Selections;
use crate::state::AppState;

pub use firebase::FirebaseStore;

/// Month document as stored remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDocument {
    #[serde(default)]
    pub selections: Selections,
    #[serde(default)]
    pub participants: Roster,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl CalendarDocument {
    pub fn from_state(state: &AppState) -> Self {
        CalendarDocument {
            selections: state.selections.clone(),
            participants: state.participants.clone(),
            last_updated: Some(state.last_updated),
        }
    }
}

/// One pushed value of a month document. `document` is `None` when the
/// month has no data.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub document: Option<CalendarDocument>,
}

pub trait RemoteStore {
    type Subscription: RemoteSubscription;

    /// One-shot read of the month document.
    fn fetch(&self, month: &Month)
    -> impl Future<Output = TeamCalResult<Option<CalendarDocument>>>;

    /// Overwrite the month document.
    fn write(
        &self,
        month: &Month,
        document: &CalendarDocument,
    ) -> impl Future<Output = TeamCalResult<()>>;

    /// Start receiving pushed snapshots of the month document. The first
    /// snapshot reflects the document as it was when the subscription opened.
    fn subscribe(&self, month: &Month) -> impl Future<Output = TeamCalResult<Self::Subscription>>;
}

pub trait RemoteSubscription {
    /// Wait for the next snapshot. `Ok(None)` once the stream has ended.
    fn next_snapshot(&mut self) -> impl Future<Output = TeamCalResult<Option<Snapshot>>>;
}

/// Store used when no remote is configured. Every call fails with
/// [`TeamCalError::RemoteUnavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalOnly;

/// A subscription that can never exist.
pub enum NoSubscription {}

const NO_REMOTE: &str = "no remote configured";

impl RemoteStore for LocalOnly {
    type Subscription = NoSubscription;

    async fn fetch(&self, _month: &Month) -> TeamCalResult<Option<CalendarDocument>> {
        Err(TeamCalError::RemoteUnavailable(NO_REMOTE.into()))
    }

    async fn write(&self, _month: &Month, _document: &CalendarDocument) -> TeamCalResult<()> {
        Err(TeamCalError::RemoteUnavailable(NO_REMOTE.into()))
    }

    async fn subscribe(&self, _month: &Month) -> TeamCalResult<NoSubscription> {
        Err(TeamCalError::RemoteUnavailable(NO_REMOTE.into()))
    }
}

impl RemoteSubscription for NoSubscription {
    async fn next_snapshot(&mut self) -> TeamCalResult<Option<Snapshot>> {
        match *self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_tolerates_missing_fields() {
        let doc: CalendarDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.selections.is_empty());
        assert!(doc.participants.is_empty());
        assert!(doc.last_updated.is_none());
    }

    #[test]
    fn test_document_json_shape() {
        let json = r#"{
            "selections": {"2024-08-01": ["Amit", "Ben"]},
            "participants": ["Amit", "Ben"],
            "lastUpdated": "2024-08-01T10:00:00.000Z"
        }"#;
        let doc: CalendarDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.participants.names(), ["Amit", "Ben"]);
        assert_eq!(doc.selections.len(), 1);

        let value = serde_json::to_value(&doc).unwrap();
        assert!(value["lastUpdated"].as_str().unwrap().starts_with("2024-08-01T10:00:00"));
    }

    #[tokio::test]
    async fn test_local_only_is_unavailable() {
        let month = Month::new(2024, 8).unwrap();
        let err = LocalOnly.fetch(&month).await.unwrap_err();
        assert!(matches!(err, TeamCalError::RemoteUnavailable(_)));
        assert!(LocalOnly.subscribe(&month).await.is_err());
    }
}
