//! Keyword demand across listings.

use joblens_core::Listing;

use crate::normalize::TextNormalizer;
use crate::tally::Tally;
use crate::types::KeywordFrequency;

/// Counts canonical keyword occurrences across all listings.
///
/// Each listing's keyword column is split on commas and every token is
/// normalized, so variants such as `"ReactJS"` and `"react.js"` merge. Blank
/// columns and tokens are skipped. The result is sorted by count, highest
/// first; equal counts keep first-seen order.
#[must_use]
pub fn keyword_frequencies(
    listings: &[Listing],
    normalizer: &TextNormalizer,
) -> Vec<KeywordFrequency> {
    let mut tally = Tally::default();
    let mut skipped = 0usize;

    for listing in listings {
        if listing.keywords.trim().is_empty() {
            skipped += 1;
            continue;
        }
        for token in listing.keywords.split(',') {
            let keyword = normalizer.keyword(token);
            if !keyword.is_empty() {
                tally.add(keyword);
            }
        }
    }

    tracing::debug!(
        listings = listings.len(),
        skipped,
        distinct = tally.len(),
        "aggregated keyword frequencies"
    );

    tally
        .into_sorted_desc()
        .into_iter()
        .map(|(keyword, count)| KeywordFrequency { keyword, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn listing(keywords: &str) -> Listing {
        Listing {
            keywords: keywords.to_string(),
            ..Listing::default()
        }
    }

    fn freq(keyword: &str, count: u32) -> KeywordFrequency {
        KeywordFrequency {
            keyword: keyword.to_string(),
            count,
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(keyword_frequencies(&[], &TextNormalizer::default()).is_empty());
    }

    #[test]
    fn variants_merge_into_canonical_keyword() {
        let listings = vec![
            listing("React, Node.js"),
            listing("react.js"),
            listing("ReactJS, nodejs"),
        ];
        let result = keyword_frequencies(&listings, &TextNormalizer::default());
        assert_eq!(result, vec![freq("react", 3), freq("node.js", 2)]);
    }

    #[test]
    fn blank_fields_and_tokens_are_skipped() {
        let listings = vec![listing(""), listing("   "), listing("Rust, , ,Go,")];
        let result = keyword_frequencies(&listings, &TextNormalizer::default());
        assert_eq!(result, vec![freq("rust", 1), freq("go", 1)]);
    }

    #[test]
    fn sorted_descending_with_unique_keywords() {
        let listings = vec![
            listing("SQL, Python, Docker"),
            listing("Python, Docker"),
            listing("Python, k8s"),
            listing("Kubernetes"),
        ];
        let result = keyword_frequencies(&listings, &TextNormalizer::default());

        assert!(result.windows(2).all(|w| w[0].count >= w[1].count));
        let unique: HashSet<&str> = result.iter().map(|f| f.keyword.as_str()).collect();
        assert_eq!(unique.len(), result.len());
        assert_eq!(result[0], freq("python", 3));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let listings = vec![listing("Go, Rust"), listing("Rust, Go, Elixir")];
        let result = keyword_frequencies(&listings, &TextNormalizer::default());
        assert_eq!(result, vec![freq("go", 2), freq("rust", 2), freq("elixir", 1)]);
    }

    #[test]
    fn repeated_keyword_in_one_listing_counts_each_occurrence() {
        let listings = vec![listing("React, ReactJS")];
        let result = keyword_frequencies(&listings, &TextNormalizer::default());
        assert_eq!(result, vec![freq("react", 2)]);
    }
}
