//! Core data structures for the voltcase library.
//!
//! This module contains the ReferenceCard type: one reference card with
//! title, content, category, favorite flag, tags, and timestamps.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a single reference card in the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCard {
    /// Unique identifier for the card, assigned at creation and never reused
    pub id: Uuid,
    /// Card title
    pub title: String,
    /// Full card content
    pub content: String,
    /// Stable category key from the catalog. Stored as free text so cards
    /// whose category has left the catalog remain valid.
    pub category: String,
    /// Whether the card is marked as a favorite
    pub is_favorite: bool,
    /// Optional comma-delimited tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// When the card was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl ReferenceCard {
    /// Creates a new card with a fresh id and both timestamps set to now
    pub fn new(
        title: String,
        content: String,
        category: String,
        is_favorite: bool,
        tags: Option<String>,
    ) -> Self {
        let now = Utc::now();

        ReferenceCard {
            id: Uuid::new_v4(),
            title,
            content,
            category,
            is_favorite,
            tags: normalize_tags(tags),
            created_at: now,
            updated_at: now,
        }
    }

    /// Flips the favorite flag and bumps the modification time
    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
        self.updated_at = Utc::now();
    }

    /// Replaces the mutable fields and bumps the modification time.
    ///
    /// The id and creation timestamp are left untouched.
    pub fn update_content(
        &mut self,
        title: String,
        content: String,
        category: String,
        tags: Option<String>,
    ) {
        self.title = title;
        self.content = content;
        self.category = category;
        self.tags = normalize_tags(tags);
        self.updated_at = Utc::now();
    }

    /// Splits the comma-delimited tags field into individual tags,
    /// trimming whitespace and dropping empty entries
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .map(|t| {
                t.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// An absent or blank tags string means "no tags"
pub(crate) fn normalize_tags(tags: Option<String>) -> Option<String> {
    tags.filter(|t| !t.trim().is_empty())
}
