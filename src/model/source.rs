//! Where repository pages come from.

use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

use crate::model::item::{Item, Period};

/// Errors produced while fetching a page of repositories.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with status {status}")]
    Status { status: u16 },

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },
}

impl FetchError {
    /// Short text for the error label under the list.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Status { status: 403 } | FetchError::Status { status: 429 } => {
                "Rate limit reached, try again later".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// A paged source of repositories for a creation period.
///
/// Pages are 1-based. An empty page means the source is exhausted.
pub trait RepoSource: Send + Sync + 'static {
    fn fetch_page(
        &self,
        period: Period,
        page: u32,
    ) -> impl Future<Output = Result<Vec<Item>, FetchError>> + Send;
}

impl<S: RepoSource> RepoSource for Arc<S> {
    fn fetch_page(
        &self,
        period: Period,
        page: u32,
    ) -> impl Future<Output = Result<Vec<Item>, FetchError>> + Send {
        S::fetch_page(self, period, page)
    }
}
