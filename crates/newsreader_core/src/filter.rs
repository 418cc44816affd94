use std::fmt;
use std::str::FromStr;

/// Headline country requested when no query or category is active.
pub const DEFAULT_COUNTRY: &str = "us";

/// Articles requested per page when the caller does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// The active search selection.
///
/// Exactly one case is active at a time; switching cases replaces the
/// previous selection wholesale, which is what makes query, category and
/// country mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Free-text search across all sources, newest first.
    Query(String),
    /// Top headlines for one category.
    Category(Category),
    /// Top headlines for a country code.
    Country(String),
}

impl Default for Filter {
    fn default() -> Self {
        Filter::Country(DEFAULT_COUNTRY.to_string())
    }
}

/// Closed set of headline categories offered by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Business,
        Category::Entertainment,
        Category::General,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    /// Wire value used in the `category` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| UnknownCategory(input.to_string()))
    }
}

/// Parse error for a category name outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category {:?}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// One outbound page request: the active filter plus paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub filter: Filter,
    pub page: u32,
    pub page_size: u32,
}
