//! Client-side filtering and ordering for the policy list view.
//!
//! The list view feeds these helpers the store's current page, not the full
//! collection, so a filter only ever sees up to `PAGE_SIZE` policies. That
//! matches how the board has always behaved even though filtering before
//! pagination is probably what users expect.

use crate::policy::Policy;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListFilter {
    pub year: Option<i32>,
    pub category: Option<String>,
}

impl ListFilter {
    /// Filter from raw select values; an empty string means "any".
    #[must_use]
    pub fn from_selection(year: &str, category: &str) -> Self {
        Self {
            year: year.trim().parse().ok(),
            category: Some(category.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        }
    }

    #[must_use]
    pub fn matches(&self, policy: &Policy) -> bool {
        let year_ok = self.year.is_none_or(|year| policy.year() == Some(year));
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|category| policy.category == category);
        year_ok && category_ok
    }

    /// Matching policies ordered by descending vote count; ties keep input order.
    #[must_use]
    pub fn apply(&self, policies: &[Policy]) -> Vec<Policy> {
        let mut filtered: Vec<Policy> = policies
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| b.vote_count().cmp(&a.vote_count()));
        filtered
    }
}

/// Distinct years present in `policies`, in first-seen order.
#[must_use]
pub fn year_options(policies: &[Policy]) -> Vec<i32> {
    let mut years = Vec::new();
    for year in policies.iter().filter_map(Policy::year) {
        if !years.contains(&year) {
            years.push(year);
        }
    }
    years
}

/// Distinct categories present in `policies`, in first-seen order.
#[must_use]
pub fn category_options(policies: &[Policy]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for policy in policies {
        if !categories.iter().any(|c| *c == policy.category) {
            categories.push(policy.category.clone());
        }
    }
    categories
}
