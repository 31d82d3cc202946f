//! Repository item and the enumerations that select which items are shown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a repository (the host's numeric id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A repository as displayed in the list and the detail pane.
///
/// Items are never mutated in place: a refresh replaces the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// `owner/name`.
    pub title: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    /// Creation date as `YYYY-MM-DD`.
    pub created: Option<String>,
    pub url: String,
}

impl Item {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            title: title.into(),
            description: None,
            language: None,
            stars: 0,
            forks: 0,
            created: None,
            url: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_counts(mut self, stars: u64, forks: u64) -> Self {
        self.stars = stars;
        self.forks = forks;
        self
    }

    pub fn with_created(mut self, created: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// Creation-date scope of the repository search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Day,
    Month,
    Year,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Day, Period::Month, Period::Year];

    /// How far back the search window reaches.
    pub fn days(self) -> u64 {
        match self {
            Period::Day => 1,
            Period::Month => 30,
            Period::Year => 365,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Period::Day => 0,
            Period::Month => 1,
            Period::Year => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" => Some(Period::Day),
            "month" => Some(Period::Month),
            "year" => Some(Period::Year),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Domain {
    #[default]
    Repositories,
    Favourites,
}

impl Domain {
    pub fn toggle(self) -> Self {
        match self {
            Domain::Repositories => Domain::Favourites,
            Domain::Favourites => Domain::Repositories,
        }
    }
}
