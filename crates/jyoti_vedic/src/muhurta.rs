//! Muhurta (favourable date) filtering by weekday rules.
//!
//! Each event category allows a set of weekdays. A search walks a window of
//! calendar dates and keeps those whose weekday is allowed.

use std::collections::BTreeMap;

use jyoti_time::{CivilDate, Weekday};

/// Days searched after the start date when none is configured.
pub const DEFAULT_WINDOW_DAYS: u32 = 14;

/// Dates returned when no cap is configured.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Category → allowed weekdays.
///
/// Category names are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuhurtaTable {
    categories: BTreeMap<String, Vec<Weekday>>,
}

impl MuhurtaTable {
    /// A table with no categories.
    pub fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    /// Add or replace a category.
    pub fn insert(&mut self, category: &str, weekdays: Vec<Weekday>) {
        self.categories.insert(fold(category), weekdays);
    }

    /// Allowed weekdays for a category; empty when unknown.
    pub fn allowed(&self, category: &str) -> &[Weekday] {
        self.categories
            .get(&fold(category))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(&fold(category))
    }

    /// Category names in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for MuhurtaTable {
    /// Built-in rules for business, travel, marriage, education and property.
    fn default() -> Self {
        use Weekday::*;
        let mut table = Self::empty();
        table.insert("business", vec![Wednesday, Thursday, Friday]);
        table.insert("travel", vec![Monday, Wednesday, Friday]);
        table.insert("marriage", vec![Monday, Wednesday, Thursday, Friday]);
        table.insert("education", vec![Wednesday, Thursday]);
        table.insert("property", vec![Thursday, Friday]);
        table
    }
}

fn fold(category: &str) -> String {
    category.trim().to_lowercase()
}

/// A muhurta search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuhurtaQuery {
    pub category: String,
    /// First date considered.
    pub start: CivilDate,
    /// Dates after `start` also considered.
    pub window_days: u32,
    pub max_results: usize,
}

impl MuhurtaQuery {
    /// Query with the default window and cap.
    pub fn new(category: impl Into<String>, start: CivilDate) -> Self {
        Self {
            category: category.into(),
            start,
            window_days: DEFAULT_WINDOW_DAYS,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Qualifying dates in chronological order.
///
/// Considers `start` and the following `window_days` dates, keeps those on
/// an allowed weekday and stops at `max_results`. An unknown category has no
/// allowed weekdays and yields nothing.
pub fn find_muhurta_dates(table: &MuhurtaTable, query: &MuhurtaQuery) -> Vec<CivilDate> {
    let allowed = table.allowed(&query.category);
    if allowed.is_empty() {
        return Vec::new();
    }
    (0..=query.window_days as i64)
        .map(|i| query.start.add_days(i))
        .filter(|d| allowed.contains(&d.weekday()))
        .take(query.max_results)
        .collect()
}
