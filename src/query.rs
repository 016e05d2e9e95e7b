//! Read-only views over the card collection.
//!
//! All functions here are stateless and preserve collection order; there is
//! no relevance ranking. The store exposes owning wrappers around them.
use std::collections::HashMap;

use crate::ReferenceCard;

/// Returns all cards whose category equals the given catalog key,
/// in collection order
pub fn by_category<'a>(cards: &'a [ReferenceCard], category: &str) -> Vec<&'a ReferenceCard> {
    cards.iter().filter(|card| card.category == category).collect()
}

/// Returns all cards marked as favorites, in collection order
pub fn favorites(cards: &[ReferenceCard]) -> Vec<&ReferenceCard> {
    cards.iter().filter(|card| card.is_favorite).collect()
}

/// Case-insensitive substring search over title, content, and tags.
///
/// An empty query returns the full collection unchanged.
pub fn search<'a>(cards: &'a [ReferenceCard], query: &str) -> Vec<&'a ReferenceCard> {
    if query.is_empty() {
        return cards.iter().collect();
    }

    let needle = query.to_lowercase();
    cards.iter().filter(|card| matches(card, &needle)).collect()
}

/// Composes an optional category filter with a search query.
///
/// Both conditions must hold for a card to be returned: the category filter
/// is not bypassed by a non-empty query.
pub fn filtered<'a>(
    cards: &'a [ReferenceCard],
    category: Option<&str>,
    query: &str,
) -> Vec<&'a ReferenceCard> {
    let needle = query.to_lowercase();

    cards
        .iter()
        .filter(|card| {
            category.map_or(true, |key| card.category == key)
                && (needle.is_empty() || matches(card, &needle))
        })
        .collect()
}

/// Counts cards per category key; keys with no cards do not appear
pub fn category_counts(cards: &[ReferenceCard]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();

    for card in cards {
        *counts.entry(card.category.clone()).or_insert(0) += 1;
    }

    counts
}

/// Case-insensitive substring match; `needle` must already be lowercased
fn matches(card: &ReferenceCard, needle: &str) -> bool {
    card.title.to_lowercase().contains(needle)
        || card.content.to_lowercase().contains(needle)
        || card
            .tags
            .as_deref()
            .is_some_and(|tags| tags.to_lowercase().contains(needle))
}
