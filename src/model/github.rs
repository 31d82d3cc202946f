//! GitHub search API source.

use std::future::Future;
use std::time::{Duration, SystemTime};

use reqwest::{Client, RequestBuilder};
use serde::Deserialize;

use crate::config::GithubConfig;
use crate::model::item::{Item, ItemId, Period};
use crate::model::source::{FetchError, RepoSource};

const SECONDS_PER_DAY: u64 = 86_400;

/// Fetches the most-starred repositories created within a period.
pub struct GithubSource {
    client: Client,
    api_base_url: String,
    token: Option<String>,
    per_page: u32,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<ApiRepo>,
}

#[derive(Debug, Deserialize)]
struct ApiRepo {
    id: u64,
    full_name: String,
    description: Option<String>,
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    created_at: Option<String>,
    html_url: String,
}

impl From<ApiRepo> for Item {
    fn from(repo: ApiRepo) -> Self {
        Item {
            id: ItemId(repo.id),
            title: repo.full_name,
            description: repo.description,
            language: repo.language,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            created: repo
                .created_at
                .map(|stamp| stamp.chars().take(10).collect()),
            url: repo.html_url,
        }
    }
}

impl GithubSource {
    pub fn new(config: &GithubConfig) -> Result<Self, FetchError> {
        let timeout = Duration::from_secs(config.timeout_seconds);
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            per_page: config.per_page,
            timeout,
        })
    }

    fn search_url(&self, period: Period, page: u32, now: SystemTime) -> String {
        format!(
            "{}/search/repositories?q=created:%3E{}&sort=stars&order=desc&per_page={}&page={}",
            self.api_base_url,
            since_date(period, now),
            self.per_page,
            page
        )
    }

    fn request(&self, url: String) -> RequestBuilder {
        let builder = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

impl RepoSource for GithubSource {
    fn fetch_page(
        &self,
        period: Period,
        page: u32,
    ) -> impl Future<Output = Result<Vec<Item>, FetchError>> + Send {
        let url = self.search_url(period, page, SystemTime::now());
        let request = self.request(url);
        let timeout = self.timeout;

        async move {
            tracing::debug!(?period, page, "Fetching repository page");
            let response = tokio::time::timeout(timeout, request.send())
                .await
                .map_err(|_| FetchError::Timeout {
                    seconds: timeout.as_secs(),
                })??;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    status: status.as_u16(),
                });
            }

            let body: SearchResponse = response.json().await?;
            Ok(body.items.into_iter().map(Item::from).collect())
        }
    }
}

/// Lower bound of the creation-date window as `YYYY-MM-DD` (UTC).
pub fn since_date(period: Period, now: SystemTime) -> String {
    let secs = now
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let days = (secs / SECONDS_PER_DAY).saturating_sub(period.days());
    let (year, month, day) = civil_from_days(days as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Days since 1970-01-01 to a proleptic Gregorian date.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = (z - era * 146_097) as u64;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe as i64 + era * 400;
    (if month <= 2 { year + 1 } else { year }, month, day)
}
