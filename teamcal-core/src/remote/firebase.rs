//! Hosted real-time database mirror over its REST interface.
//!
//! Documents live at `{database_url}/calendar/{YYYY-MM}.json`. Reads are
//! `GET`, writes are full-document `PUT`, and subscriptions use the same URL
//! with `Accept: text/event-stream`.

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::Deserialize;
use url::Url;

use crate::config::RemoteSettings;
use crate::constants::REMOTE_CALENDAR_PATH;
use crate::error::{TeamCalError, TeamCalResult};
use crate::month::Month;
use crate::remote::sse::{SseEvent, SseParser};
use crate::remote::{CalendarDocument, RemoteStore, RemoteSubscription, Snapshot};

#[derive(Debug, Clone)]
pub struct FirebaseStore {
    base: Url,
    client: reqwest::Client,
    stream_client: reqwest::Client,
}

impl FirebaseStore {
    pub fn new(settings: &RemoteSettings) -> TeamCalResult<Self> {
        let mut base = settings.database_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base).map_err(|e| {
            TeamCalError::Config(format!("Invalid database_url '{}': {e}", settings.database_url))
        })?;

        let timeout = Duration::from_secs(settings.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TeamCalError::RemoteUnavailable(e.to_string()))?;
        // Subscriptions stay open indefinitely, so only connecting is bounded.
        let stream_client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(|e| TeamCalError::RemoteUnavailable(e.to_string()))?;

        Ok(FirebaseStore {
            base,
            client,
            stream_client,
        })
    }

    pub fn document_url(&self, month: &Month) -> TeamCalResult<Url> {
        self.base
            .join(&format!("{}/{}.json", REMOTE_CALENDAR_PATH, month.key()))
            .map_err(|e| TeamCalError::Config(e.to_string()))
    }
}

async fn check_status(response: reqwest::Response) -> TeamCalResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(TeamCalError::RemoteStatus {
        status: status.as_u16(),
        body,
    })
}

impl RemoteStore for FirebaseStore {
    type Subscription = FirebaseSubscription;

    async fn fetch(&self, month: &Month) -> TeamCalResult<Option<CalendarDocument>> {
        let url = self.document_url(month)?;
        tracing::debug!(%url, "fetching month document");

        let response = check_status(self.client.get(url).send().await?).await?;
        // The database answers `null` for a path with no data.
        let document: Option<CalendarDocument> = response.json().await?;
        Ok(document)
    }

    async fn write(&self, month: &Month, document: &CalendarDocument) -> TeamCalResult<()> {
        let url = self.document_url(month)?;
        tracing::debug!(%url, "writing month document");

        check_status(self.client.put(url).json(document).send().await?).await?;
        Ok(())
    }

    async fn subscribe(&self, month: &Month) -> TeamCalResult<FirebaseSubscription> {
        let url = self.document_url(month)?;
        tracing::debug!(%url, "opening event stream");

        let response = self
            .stream_client
            .get(url)
            .header(ACCEPT, "text/event-stream")
            .send()
            .await?;
        let response = check_status(response).await?;

        Ok(FirebaseSubscription {
            store: self.clone(),
            month: *month,
            response,
            parser: SseParser::new(),
        })
    }
}

/// Open event stream for one month document.
pub struct FirebaseSubscription {
    store: FirebaseStore,
    month: Month,
    response: reqwest::Response,
    parser: SseParser,
}

#[derive(Debug, Deserialize)]
struct StreamPayload {
    path: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// What a single stream event means for the document.
#[derive(Debug, PartialEq)]
enum StreamAction {
    /// The event carried the whole document.
    Replace(Option<CalendarDocument>),
    /// Part of the document changed; read it again.
    Refetch,
    Ignore,
    Close(String),
}

fn interpret(event: &SseEvent) -> TeamCalResult<StreamAction> {
    match event.event.as_str() {
        "put" | "patch" => {
            let payload: StreamPayload = serde_json::from_str(&event.data)?;
            if event.event == "put" && payload.path == "/" {
                let document = serde_json::from_value(payload.data)?;
                Ok(StreamAction::Replace(document))
            } else {
                Ok(StreamAction::Refetch)
            }
        }
        "keep-alive" => Ok(StreamAction::Ignore),
        "cancel" | "auth_revoked" => Ok(StreamAction::Close(format!(
            "{}: {}",
            event.event, event.data
        ))),
        other => {
            tracing::debug!(kind = other, "ignoring unknown stream event");
            Ok(StreamAction::Ignore)
        }
    }
}

impl RemoteSubscription for FirebaseSubscription {
    async fn next_snapshot(&mut self) -> TeamCalResult<Option<Snapshot>> {
        loop {
            while let Some(event) = self.parser.next_event() {
                match interpret(&event)? {
                    StreamAction::Replace(document) => return Ok(Some(Snapshot { document })),
                    StreamAction::Refetch => {
                        let document = self.store.fetch(&self.month).await?;
                        return Ok(Some(Snapshot { document }));
                    }
                    StreamAction::Ignore => {}
                    StreamAction::Close(reason) => {
                        return Err(TeamCalError::SubscriptionClosed(reason));
                    }
                }
            }

            match self.response.chunk().await? {
                Some(bytes) => self.parser.push(&bytes),
                None => return Ok(None),
            }
        }
    }
}
