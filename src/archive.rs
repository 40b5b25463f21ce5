//! Contest archive access: the catalog listing and per-contest standings.
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ArchiveError;
use crate::models::{ContestMetadata, Standings};

pub const DEFAULT_BASE_URL: &str = "https://codeforces.com/api";

pub trait ContestArchive {
    async fn list_contests(&self, gym: bool) -> Result<Vec<ContestMetadata>, ArchiveError>;

    async fn standings(&self, contest_id: i64) -> Result<Standings, ArchiveError>;
}

#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    status: String,
    #[serde(default)]
    comment: Option<String>,
    result: Option<T>,
}

pub struct CodeforcesClient {
    client: Client,
    base_url: String,
}

impl CodeforcesClient {
    pub fn new(config: &ArchiveConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, url: String) -> Result<T, ArchiveError> {
        tracing::debug!(%url, "archive request");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(source) => return Err(ArchiveError::Transport { url, source }),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => return Err(ArchiveError::Transport { url, source }),
        };

        check_response(&url, status, &body)
    }
}

/// The body of a failed request is not guaranteed to be JSON, so the status
/// is checked before anything is decoded.
fn check_response<T: DeserializeOwned>(
    url: &str,
    status: StatusCode,
    body: &str,
) -> Result<T, ArchiveError> {
    if !status.is_success() {
        return Err(ArchiveError::Status {
            url: url.to_string(),
            status,
            excerpt: body.chars().take(200).collect(),
        });
    }

    decode_envelope(url, body)
}

fn decode_envelope<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ArchiveError> {
    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|source| ArchiveError::Decode {
        url: url.to_string(),
        source,
    })?;

    match envelope {
        Envelope {
            status,
            result: Some(result),
            ..
        } if status == "OK" => Ok(result),
        Envelope { comment, .. } => Err(ArchiveError::Rejected {
            url: url.to_string(),
            comment: comment.unwrap_or_else(|| "no comment".to_string()),
        }),
    }
}

impl ContestArchive for CodeforcesClient {
    async fn list_contests(&self, gym: bool) -> Result<Vec<ContestMetadata>, ArchiveError> {
        let url = format!("{}/contest.list?gym={gym}", self.base_url);
        self.fetch(url).await
    }

    async fn standings(&self, contest_id: i64) -> Result<Standings, ArchiveError> {
        let url = format!(
            "{}/contest.standings?contestId={contest_id}&showUnofficial=true",
            self.base_url
        );
        self.fetch(url).await
    }
}
