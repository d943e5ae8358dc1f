//! Listing filters for table views: free-text search, required keywords, and
//! a salary band.

use std::collections::HashSet;

use joblens_core::Listing;
use serde::{Deserialize, Serialize};

use crate::salary::parse_salary;

/// Criteria a listing must meet. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilter {
    /// Case-insensitive substring matched against every field.
    pub search: Option<String>,
    /// Raw keywords that must all appear in the listing's keyword column.
    pub keywords: Vec<String>,
    /// Lower bound on the salary midpoint, inclusive. Zero means unset.
    pub min_salary: Option<u64>,
    /// Upper bound on the salary midpoint, inclusive. Zero means unset.
    pub max_salary: Option<u64>,
}

impl ListingFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(str::is_empty)
            && self.keywords.is_empty()
            && self.min_bound().is_none()
            && self.max_bound().is_none()
    }

    /// The effective lower salary bound; a zero bound is treated as unset.
    #[must_use]
    pub fn min_bound(&self) -> Option<u64> {
        self.min_salary.filter(|&min| min > 0)
    }

    /// The effective upper salary bound; a zero bound is treated as unset.
    #[must_use]
    pub fn max_bound(&self) -> Option<u64> {
        self.max_salary.filter(|&max| max > 0)
    }

    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_search(listing)
            && self.matches_keywords(listing)
            && self.matches_salary(listing)
    }

    fn matches_search(&self, listing: &Listing) -> bool {
        let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) else {
            return true;
        };
        let needle = search.to_lowercase();
        listing
            .fields()
            .iter()
            .any(|value| value.to_lowercase().contains(&needle))
    }

    /// Keyword matching is exact on trimmed tokens, without alias resolution.
    fn matches_keywords(&self, listing: &Listing) -> bool {
        if self.keywords.is_empty() {
            return true;
        }
        let tokens: HashSet<&str> = listing.keyword_tokens().collect();
        self.keywords.iter().all(|k| tokens.contains(k.trim()))
    }

    /// Compares the unrounded midpoint: `(min + max) / 2` against each bound,
    /// done as `min + max` against twice the bound to stay in integers.
    fn matches_salary(&self, listing: &Listing) -> bool {
        let (min_bound, max_bound) = (self.min_bound(), self.max_bound());
        if min_bound.is_none() && max_bound.is_none() {
            return true;
        }
        let Some(range) = parse_salary(&listing.salary) else {
            return false;
        };
        let doubled_mid = u128::from(range.min) + u128::from(range.max);
        let above_min = min_bound.is_none_or(|min| doubled_mid >= 2 * u128::from(min));
        let below_max = max_bound.is_none_or(|max| doubled_mid <= 2 * u128::from(max));
        above_min && below_max
    }
}

/// Listings matching `filter`, in input order.
#[must_use]
pub fn filter_listings<'a>(listings: &'a [Listing], filter: &ListingFilter) -> Vec<&'a Listing> {
    let matched: Vec<&Listing> = listings.iter().filter(|l| filter.matches(l)).collect();
    tracing::debug!(
        listings = listings.len(),
        matched = matched.len(),
        "filtered listings"
    );
    matched
}

/// Every distinct raw keyword token across listings, sorted case-insensitively.
#[must_use]
pub fn distinct_keywords(listings: &[Listing]) -> Vec<String> {
    let unique: HashSet<&str> = listings.iter().flat_map(Listing::keyword_tokens).collect();
    let mut keywords: Vec<String> = unique.into_iter().map(str::to_string).collect();
    keywords.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    keywords
}
