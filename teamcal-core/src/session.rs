//! Calendar session: owns the state and coordinates local and remote
//! persistence.

use chrono::NaiveDate;

use crate::constants::CALENDAR_KEY;
use crate::error::TeamCalResult;
use crate::month::Month;
use crate::remote::{CalendarDocument, RemoteStore, RemoteSubscription};
use crate::roster::Roster;
use crate::rotation::RotationRule;
use crate::state::{AppState, ensure_selectable_date};
use crate::storage::LocalStorage;

/// Where the state came from on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Remote,
    Local,
    Defaults,
}

/// Result of a save. A remote failure is not an error: the local snapshot
/// was still written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Remote,
    SavedLocally { reason: String },
}

impl SaveOutcome {
    pub fn is_local_only(&self) -> bool {
        matches!(self, SaveOutcome::SavedLocally { .. })
    }
}

pub struct CalendarSession<R: RemoteStore> {
    state: AppState,
    storage: LocalStorage,
    remote: R,
    rotation: RotationRule,
    source: LoadSource,
    rolled_forward: bool,
}

impl<R: RemoteStore> CalendarSession<R> {
    /// Load state: the remote month document if there is one, otherwise the
    /// local snapshot, otherwise a fresh state with the default roster.
    pub async fn load(
        storage: LocalStorage,
        remote: R,
        rotation: RotationRule,
        today: NaiveDate,
    ) -> TeamCalResult<Self> {
        let local = match storage.get_item::<AppState>(CALENDAR_KEY) {
            Ok(local) => local,
            Err(e) => {
                tracing::warn!("local calendar snapshot unreadable, ignoring: {e}");
                None
            }
        };

        let (mut state, mut source) = match local {
            Some(state) => (state, LoadSource::Local),
            None => (AppState::new(today), LoadSource::Defaults),
        };

        let rolled_forward = state.roll_to_current_month(today);
        if rolled_forward {
            tracing::info!(month = %state.current_month.key(), "moved calendar to current month");
        }

        match remote.fetch(&state.current_month).await {
            Ok(Some(document)) => {
                apply_document(&mut state, document);
                source = LoadSource::Remote;
            }
            Ok(None) => {
                tracing::debug!(month = %state.current_month.key(), "no remote document");
            }
            Err(e) => tracing::warn!("remote load failed, using local data: {e}"),
        }

        state.refresh_derived(rotation);
        tracing::info!(?source, month = %state.current_month.key(), "calendar loaded");

        Ok(CalendarSession {
            state,
            storage,
            remote,
            rotation,
            source,
            rolled_forward,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn source(&self) -> LoadSource {
        self.source
    }

    /// True when load moved a stale month forward to the current one.
    pub fn rolled_forward(&self) -> bool {
        self.rolled_forward
    }

    /// Stamp `lastUpdated`, write the month document remotely, then write the
    /// local snapshot.
    pub async fn save(&mut self) -> TeamCalResult<SaveOutcome> {
        self.state.touch();
        self.state.refresh_derived(self.rotation);

        let document = CalendarDocument::from_state(&self.state);
        let outcome = match self.remote.write(&self.state.current_month, &document).await {
            Ok(()) => SaveOutcome::Remote,
            Err(e) => {
                tracing::warn!("remote save failed, saved locally: {e}");
                SaveOutcome::SavedLocally {
                    reason: e.to_string(),
                }
            }
        };

        self.storage.set_item(CALENDAR_KEY, &self.state)?;
        Ok(outcome)
    }

    /// Replace the participants available on `date` and save. Dates before
    /// `today` are rejected, and names not on the roster are dropped.
    pub async fn select(
        &mut self,
        date: NaiveDate,
        participants: &[String],
        today: NaiveDate,
    ) -> TeamCalResult<SaveOutcome> {
        ensure_selectable_date(date, today)?;

        let roster = &self.state.participants;
        let (known, unknown): (Vec<&str>, Vec<&str>) = participants
            .iter()
            .map(|name| name.trim())
            .partition(|name| roster.contains(name));
        if !unknown.is_empty() {
            tracing::warn!(names = ?unknown, "ignoring names not on the roster");
        }

        self.state.set_selection(date, known);
        self.save().await
    }

    pub async fn set_participant(&mut self, slot: usize, name: &str) -> TeamCalResult<Option<SaveOutcome>> {
        if !self.state.set_participant(slot, name) {
            return Ok(None);
        }
        self.save().await.map(Some)
    }

    pub async fn set_participants(&mut self, roster: Roster) -> TeamCalResult<SaveOutcome> {
        self.state.set_participants(roster);
        self.save().await
    }

    pub async fn clear_all(&mut self) -> TeamCalResult<SaveOutcome> {
        self.state.clear_all();
        self.save().await
    }

    /// Move one month back or forward, pick up that month's remote document
    /// if it has one, and save.
    pub async fn change_month(&mut self, direction: i32, today: NaiveDate) -> TeamCalResult<Month> {
        let month = self.state.change_month(direction, today)?;

        match self.remote.fetch(&month).await {
            Ok(Some(document)) => apply_document(&mut self.state, document),
            Ok(None) => {}
            Err(e) => tracing::warn!("remote load for {} failed: {e}", month.key()),
        }

        let outcome = self.save().await?;
        tracing::debug!(?outcome, "saved after month change");
        Ok(month)
    }

    /// Follow remote changes to the current month until the stream ends.
    ///
    /// The first snapshot after subscribing only echoes what was just read,
    /// so it is skipped to avoid clobbering an in-progress local edit. Each
    /// later snapshot replaces selections and participants, is written to the
    /// local snapshot, and is handed to `on_update`.
    pub async fn subscribe_remote<F>(&mut self, mut on_update: F) -> TeamCalResult<()>
    where
        F: FnMut(&AppState),
    {
        let month = self.state.current_month;
        let mut subscription = self.remote.subscribe(&month).await?;
        let mut initial = true;

        while let Some(snapshot) = subscription.next_snapshot().await? {
            if std::mem::take(&mut initial) {
                tracing::debug!(month = %month.key(), "skipping initial snapshot");
                continue;
            }
            let Some(document) = snapshot.document else {
                continue;
            };

            apply_document(&mut self.state, document);
            self.state.refresh_derived(self.rotation);
            if let Err(e) = self.storage.set_item(CALENDAR_KEY, &self.state) {
                tracing::warn!("could not write remote update locally: {e}");
            }
            on_update(&self.state);
        }

        tracing::info!(month = %month.key(), "remote subscription ended");
        Ok(())
    }
}

fn apply_document(state: &mut AppState, document: CalendarDocument) {
    state.selections = document.selections;
    state.participants = document.participants;
}
