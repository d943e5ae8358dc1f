//! City and remote-status breakdowns.

use joblens_core::Listing;

use crate::normalize::{normalize_remote_status, TextNormalizer};
use crate::tally::Tally;
use crate::types::{CityCount, LocationBreakdown, RemoteCount};

/// Extracts the canonical city from a location such as `"Berlin, Germany"`.
///
/// Only the part before the first comma is considered. Returns `None` when
/// that part is blank.
#[must_use]
pub fn extract_city(raw: &str, normalizer: &TextNormalizer) -> Option<String> {
    let first_segment = raw.split(',').next().unwrap_or_default().trim();
    if first_segment.is_empty() {
        return None;
    }
    Some(normalizer.city(first_segment))
}

/// Tallies listings by remote status and by city in a single pass.
///
/// Listings with a blank remote-status column are left out of the remote
/// breakdown; listings with a blank location are left out of the city
/// breakdown. Both lists are sorted by count, highest first.
#[must_use]
pub fn location_breakdown(listings: &[Listing], normalizer: &TextNormalizer) -> LocationBreakdown {
    let mut remote = Tally::default();
    let mut cities = Tally::default();

    for listing in listings {
        if !listing.remote_status.trim().is_empty() {
            let status = normalize_remote_status(&listing.remote_status);
            remote.add(status.label().to_string());
        }

        if let Some(city) = extract_city(&listing.location, normalizer) {
            cities.add(city);
        }
    }

    tracing::debug!(
        listings = listings.len(),
        remote_labels = remote.len(),
        cities = cities.len(),
        "aggregated location breakdown"
    );

    LocationBreakdown {
        remote_breakdown: remote
            .into_sorted_desc()
            .into_iter()
            .map(|(name, value)| RemoteCount { name, value })
            .collect(),
        city_breakdown: cities
            .into_sorted_desc()
            .into_iter()
            .map(|(name, count)| CityCount { name, count })
            .collect(),
    }
}
