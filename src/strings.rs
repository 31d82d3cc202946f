//! User-facing strings.

/// Every piece of UI text is looked up through one of these keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    Repositories,
    Favourites,
    NoLanguage,
    NoDescription,
    ForksFormat,
    StarsFormat,
    DateFormat,
    OpenInGitHub,
    Day,
    Month,
    Year,
    Search,
    Loading,
    NoResults,
    NoSelection,
    StaleSelection,
}

impl StringKey {
    fn english(self) -> &'static str {
        match self {
            StringKey::Repositories => "Repositories",
            StringKey::Favourites => "Favourites",
            StringKey::NoLanguage => "No language",
            StringKey::NoDescription => "No description",
            StringKey::ForksFormat => "{} forks",
            StringKey::StarsFormat => "{} stars",
            StringKey::DateFormat => "Created {}",
            StringKey::OpenInGitHub => "Open in GitHub",
            StringKey::Day => "Day",
            StringKey::Month => "Month",
            StringKey::Year => "Year",
            StringKey::Search => "Search",
            StringKey::Loading => "Loading…",
            StringKey::NoResults => "Nothing matches",
            StringKey::NoSelection => "Select a repository",
            StringKey::StaleSelection => "This repository is no longer in the list",
        }
    }
}

/// String table. `uppercase` shouts every string, which makes text that
/// bypasses the table easy to spot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strings {
    uppercase: bool,
}

impl Strings {
    pub fn new(uppercase: bool) -> Self {
        Self { uppercase }
    }

    pub fn get(&self, key: StringKey) -> String {
        let text = key.english();
        if self.uppercase {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }

    /// Substitute `value` for the `{}` placeholder of a format key.
    pub fn format(&self, key: StringKey, value: impl std::fmt::Display) -> String {
        self.get(key).replacen("{}", &value.to_string(), 1)
    }
}

/// Plain lookup with the default table.
pub fn localized(key: StringKey) -> String {
    Strings::default().get(key)
}

/// `localized` for the count formats (stars, forks).
pub fn format_count(key: StringKey, count: u64) -> String {
    Strings::default().format(key, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_plain() {
        assert_eq!(localized(StringKey::Day), "Day");
        assert_eq!(localized(StringKey::OpenInGitHub), "Open in GitHub");
        assert_eq!(format_count(StringKey::ForksFormat, 0), "0 forks");
    }

    #[test]
    fn uppercase_mode() {
        assert_eq!(Strings::new(true).get(StringKey::Favourites), "FAVOURITES");
    }

    #[test]
    fn format_substitutes_once() {
        let strings = Strings::default();
        assert_eq!(strings.format(StringKey::StarsFormat, 12), "12 stars");
        assert_eq!(strings.format(StringKey::DateFormat, "2024-01-01"), "Created 2024-01-01");
        assert_eq!(
            Strings::new(true).format(StringKey::ForksFormat, 3),
            "3 FORKS"
        );
    }
}
