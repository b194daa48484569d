//! HTTP access to the NHL statistics feed

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Url,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::ids::{PlayerId, TeamId},
    error::ExportError,
    Result,
};


/// Base path for the NHL stats API v1.
pub const NHL_BASE_URL: &str = "https://statsapi.web.nhl.com/api/v1/";

pub const TEAMS_PATH: &str = "teams";

pub fn roster_path(team_id: TeamId) -> String {
    format!("teams/{}/roster", team_id)
}

pub fn player_stats_path(player_id: PlayerId) -> String {
    format!("people/{}?hydrate=stats(splits=yearByYear)", player_id)
}

fn common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Blocking-style feed client: each call is awaited to completion before the
/// caller issues the next one.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    base_url: String,
    delay: Duration,
}

impl FeedClient {
    /// Build a client rooted at `base_url`. A trailing `/` is added when
    /// missing so relative paths concatenate cleanly.
    pub fn new(base_url: &str, delay: Duration) -> Result<Self> {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        if Url::parse(&base_url).is_err() {
            return Err(ExportError::InvalidBaseUrl { url: base_url });
        }

        let client = Client::builder().default_headers(common_headers()).build()?;

        Ok(Self {
            client,
            base_url,
            delay,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `base_url + path` and parse the body as JSON.
    ///
    /// Network failures and non-success statuses surface as
    /// [`ExportError::Transport`], unparseable bodies as
    /// [`ExportError::MalformedResponse`].
    pub async fn fetch(&self, path: &str) -> Result<Value> {
        let url = self.url_for(path);
        debug!(%url, "fetching feed");

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        serde_json::from_str(&body).map_err(|e| ExportError::malformed(path, e))
    }

    pub async fn get_teams(&self) -> Result<Value> {
        self.fetch(TEAMS_PATH).await
    }

    pub async fn get_roster(&self, team_id: TeamId) -> Result<Value> {
        self.fetch(&roster_path(team_id)).await
    }

    pub async fn get_player_stats(&self, player_id: PlayerId) -> Result<Value> {
        self.fetch(&player_stats_path(player_id)).await
    }
}

/// Deserialize a fetched document into one of the typed envelopes.
pub fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ExportError::malformed(path, e))
}
