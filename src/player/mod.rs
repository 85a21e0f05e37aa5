use std::time::Duration;

use reqwest::{Client, StatusCode};

mod de;
pub mod record;


pub use record::PlayerRecord;

#[derive(Debug, thiserror::Error)]
pub enum FetchFailure {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The player API could not be reached or did not answer with a 2xx.
    #[error("failed to fetch player data: {0}")]
    FetchFailed(#[from] FetchFailure),
    /// The player API answered but the body is not JSON.
    #[error("invalid response from player api: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl FetchError {
    /// Text shown to the person who submitted the lookup.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::FetchFailed(_) => "Failed to fetch player data. Please check the UID and try again.",
            Self::InvalidResponse(_) => "Invalid response from API",
        }
    }
}

/// Client for the player stats API.
#[derive(Debug, Clone)]
pub struct PlayerApi {
    client: Client,
    base: String,
    timeout: Duration,
}

impl PlayerApi {
    pub fn new(client: Client, base: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            base: base.into(),
            timeout,
        }
    }

    /// Fetch one account. `uid` and `region` go through the query encoder
    /// untouched; there is no retry.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_player(&self, uid: &str, region: &str) -> Result<PlayerRecord, FetchError> {
        let response = self
            .client
            .get(&self.base)
            .query(&[("uid", uid), ("region", region)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(FetchFailure::from)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "player api returned an error status");
            return Err(FetchFailure::Status(status).into());
        }

        let body = response.bytes().await.map_err(FetchFailure::from)?;
        let raw: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, len = body.len(), "player api returned a non-json body");
            e
        })?;

        let record = PlayerRecord::from_value(raw);

        tracing::info!(
            name = record.account.as_ref().and_then(|a| a.name.as_deref()),
            has_account = record.account.is_some(),
            "fetched player"
        );

        Ok(record)
    }
}
