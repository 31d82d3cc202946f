//! In-process source with canned pages, used for `--offline` and in tests.

use std::collections::HashMap;
use std::future::Future;

use parking_lot::Mutex;

use crate::model::item::{Item, Period};
use crate::model::source::{FetchError, RepoSource};

/// Serves pre-registered pages per period. Unregistered pages are empty.
#[derive(Default)]
pub struct FixtureSource {
    pages: Mutex<HashMap<(Period, u32), Vec<Item>>>,
    failures: Mutex<HashMap<(Period, u32), u16>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, period: Period, page: u32, items: Vec<Item>) -> Self {
        self.pages.lock().insert((period, page), items);
        self
    }

    /// Make a page fail with the given HTTP status.
    pub fn with_failure(self, period: Period, page: u32, status: u16) -> Self {
        self.failures.lock().insert((period, page), status);
        self
    }

    /// A small catalogue for every period, two pages each.
    pub fn sample() -> Self {
        let mut source = Self::new();
        for period in Period::ALL {
            let base = (period.index() as u64 + 1) * 1_000;
            source = source
                .with_page(period, 1, sample_page(base, 0))
                .with_page(period, 2, sample_page(base, 1));
        }
        source
    }
}

fn sample_page(base: u64, page: u64) -> Vec<Item> {
    const NAMES: [(&str, &str, Option<&str>); 5] = [
        ("ferris/crab-cache", "Tiny LRU cache with TTL support", Some("Rust")),
        ("octo/trending-cli", "Browse trending repositories from a terminal", Some("Go")),
        ("lumen/notes", "Local-first notes with full-text search", Some("TypeScript")),
        ("nopkg/dotfiles", "", None),
        ("quill/markdown-lint", "Opinionated Markdown linter", Some("Rust")),
    ];

    NAMES
        .iter()
        .enumerate()
        .map(|(idx, (name, description, language))| {
            let id = base + page * 100 + idx as u64;
            let title = if page == 0 {
                name.to_string()
            } else {
                format!("{}-{}", name, page + 1)
            };
            let mut item = Item::new(id, title.clone())
                .with_counts(5_000 / (idx as u64 + 1) / (page + 1), 40 / (idx as u64 + 1))
                .with_url(format!("https://github.com/{}", title));
            if !description.is_empty() {
                item = item.with_description(*description);
            }
            if let Some(language) = language {
                item = item.with_language(*language);
            }
            item
        })
        .collect()
}

impl RepoSource for FixtureSource {
    fn fetch_page(
        &self,
        period: Period,
        page: u32,
    ) -> impl Future<Output = Result<Vec<Item>, FetchError>> + Send {
        let result = match self.failures.lock().get(&(period, page)) {
            Some(&status) => Err(FetchError::Status { status }),
            None => Ok(self
                .pages
                .lock()
                .get(&(period, page))
                .cloned()
                .unwrap_or_default()),
        };
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_registered_pages_and_failures() {
        let source = FixtureSource::new()
            .with_page(Period::Day, 1, vec![Item::new(1, "a/b")])
            .with_failure(Period::Month, 1, 500);

        let page = source.fetch_page(Period::Day, 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert!(source.fetch_page(Period::Day, 2).await.unwrap().is_empty());
        assert!(matches!(
            source.fetch_page(Period::Month, 1).await,
            Err(FetchError::Status { status: 500 })
        ));
    }

    #[test]
    fn sample_ids_are_unique_across_pages() {
        let a = sample_page(1_000, 0);
        let b = sample_page(1_000, 1);
        assert!(a.iter().all(|x| b.iter().all(|y| x.id != y.id)));
        assert!(a[3].description.is_none());
    }
}
