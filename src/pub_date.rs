//! Publication date strategies.
//!
//! Each feed item carries a `<pubDate>`; where it comes from is pluggable:
//! the current time, the mtime of the item's first file, the last GitHub
//! commit touching that file, or a caller-supplied function.

use crate::config::{FeedConfig, GithubOptions};
use crate::types::{FeedError, RegistryItem, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// How the publication date for one item is obtained.
#[derive(Clone)]
pub enum PubDateStrategy {
    DateNow,
    FileMtime,
    GithubLastEdit,
    Custom(Arc<dyn Fn(&RegistryItem) -> DateTime<Utc> + Send + Sync>),
}

impl PubDateStrategy {
    /// Parses a strategy name. Unrecognized names are a soft failure and
    /// fall back to `DateNow`.
    pub fn parse(name: &str) -> Self {
        match name {
            "dateNow" => Self::DateNow,
            "fileMtime" => Self::FileMtime,
            "githubLastEdit" => Self::GithubLastEdit,
            other => {
                warn!(
                    "Unknown pubDate strategy {:?}, falling back to dateNow",
                    other
                );
                Self::DateNow
            }
        }
    }
}

impl fmt::Debug for PubDateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateNow => f.write_str("DateNow"),
            Self::FileMtime => f.write_str("FileMtime"),
            Self::GithubLastEdit => f.write_str("GithubLastEdit"),
            Self::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

/// Formats a date the way RSS consumers expect it: RFC 822 with a literal
/// GMT zone.
pub fn format_pub_date(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Produces the publication date for one registry item. A seam so tests and
/// hosts can supply fixed or recorded dates.
#[async_trait]
pub trait PubDateProvider: Send + Sync {
    async fn pub_date(&self, item: &RegistryItem, config: &FeedConfig) -> Result<DateTime<Utc>>;
}

/// Default provider that dispatches on the configured [`PubDateStrategy`].
pub struct StrategyDateProvider {
    client: Client,
}

impl StrategyDateProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(concat!("registry-rss/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Queries the GitHub commits API for the date of the last commit
    /// touching the item's first file. Any error or an empty commit list
    /// falls back to the current time; this strategy never fails an item.
    async fn github_last_edit(
        &self,
        item: &RegistryItem,
        github: &GithubOptions,
    ) -> DateTime<Utc> {
        match self.fetch_last_commit_date(item, github).await {
            Ok(Some(date)) => date,
            Ok(None) => {
                warn!(
                    "No commits found for {}, falling back to current time",
                    item.name
                );
                Utc::now()
            }
            Err(e) => {
                warn!("GitHub last-edit lookup failed for {}: {}", item.name, e);
                Utc::now()
            }
        }
    }

    async fn fetch_last_commit_date(
        &self,
        item: &RegistryItem,
        github: &GithubOptions,
    ) -> Result<Option<DateTime<Utc>>> {
        let file = item.files.first().ok_or_else(|| FeedError::MissingFile {
            item: item.name.clone(),
        })?;

        let base_url = github.base_url.as_deref().unwrap_or("https://api.github.com");
        let url = format!("{}/repos/{}/{}/commits", base_url, github.owner, github.repo);

        debug!("Looking up last commit for {} via {}", file.path, url);

        let mut request = self.client.get(&url).query(&[
            ("path", file.path.as_str()),
            ("page", "1"),
            ("per_page", "1"),
        ]);

        if let Some(sha) = &github.sha {
            request = request.query(&[("sha", sha.as_str())]);
        }
        for (key, value) in &github.params {
            request = request.query(&[(key.as_str(), value.as_str())]);
        }
        if let Some(token) = &github.token {
            request = request.header("authorization", token);
        }

        let response = request.send().await?.error_for_status()?;
        let commits: Vec<CommitEntry> = response.json().await?;

        Ok(commits.first().map(|entry| entry.commit.committer.date))
    }

    async fn file_mtime(&self, item: &RegistryItem) -> Result<DateTime<Utc>> {
        let file = item.files.first().ok_or_else(|| FeedError::MissingFile {
            item: item.name.clone(),
        })?;

        let metadata = tokio::fs::metadata(&file.path).await?;
        let mtime = metadata.modified()?;
        Ok(DateTime::<Utc>::from(mtime))
    }
}

impl Default for StrategyDateProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PubDateProvider for StrategyDateProvider {
    async fn pub_date(&self, item: &RegistryItem, config: &FeedConfig) -> Result<DateTime<Utc>> {
        match &config.rss.pub_date_strategy {
            PubDateStrategy::DateNow => Ok(Utc::now()),
            PubDateStrategy::FileMtime => self.file_mtime(item).await,
            PubDateStrategy::GithubLastEdit => match &config.github {
                Some(github) => Ok(self.github_last_edit(item, github).await),
                None => {
                    warn!(
                        "githubLastEdit strategy selected without github config, \
                         falling back to current time"
                    );
                    Ok(Utc::now())
                }
            },
            PubDateStrategy::Custom(resolve) => Ok(resolve(item)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CommitEntry {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    committer: CommitActor,
}

#[derive(Debug, Deserialize)]
struct CommitActor {
    date: DateTime<Utc>,
}
