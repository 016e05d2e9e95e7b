//! Shared supporting types for the voltcase library.
//!
//! This module contains the crate Result alias and the small value types
//! returned or published by the card store.
use std::collections::HashMap;
use std::path::PathBuf;

use uuid::Uuid;

use crate::VoltError;

/// A specialized Result type for voltcase operations.
pub type Result<T> = std::result::Result<T, VoltError>;

/// Change notification published by the store after a completed mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A card was appended to the collection
    Added(Uuid),
    /// A card's content was replaced
    Updated(Uuid),
    /// A card was removed from the collection
    Removed(Uuid),
    /// A card's favorite flag was flipped
    FavoriteToggled(Uuid),
    /// An import merged new cards into the collection
    Imported { added: usize },
}

/// Summary of an import operation
#[derive(Debug, Clone)]
pub struct ImportSummary {
    /// Path to the file that was imported
    pub source: PathBuf,
    /// Total number of cards found in the import file
    pub total_cards: usize,
    /// Number of cards appended to the collection
    pub cards_added: usize,
    /// Number of cards skipped because their id already exists
    pub cards_skipped: usize,
}

/// Aggregate statistics over the current collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of cards in the collection
    pub total: usize,
    /// Number of cards marked as favorites
    pub favorite_count: usize,
    /// Cards per category key; only keys borne by at least one card appear
    pub category_counts: HashMap<String, usize>,
}
