use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, error, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

use crate::{
    export, query, sample_cards, Config, ImportSummary, ReferenceCard, Result, StoreEvent,
    StoreStats, VoltError,
};

/// Owns the authoritative card collection and its durable mirror.
///
/// All mutations go through this type: memory is updated first, then the
/// full collection is rewritten to the snapshot file before the call
/// returns. A failed write surfaces as an error while the in-memory state
/// keeps the mutation, so the session continues from memory and the snapshot
/// falls back to the last successful write on the next start.
///
/// The store expects a single logical owner; mutations are serialized
/// through `&mut self` and reads are served from memory.
pub struct CardStore {
    /// Application configuration
    config: Config,

    /// In-memory collection, in insertion order
    cards: Vec<ReferenceCard>,

    /// Change-notification channels handed out by subscribe()
    subscribers: Vec<UnboundedSender<StoreEvent>>,
}

impl CardStore {
    /// Loads the collection from the durable snapshot.
    ///
    /// A missing or unparsable snapshot falls back to the built-in sample
    /// cards, which are persisted immediately so the snapshot exists for
    /// subsequent runs. This constructor never fails.
    pub fn load(config: Config) -> Self {
        let mut store = Self {
            config,
            cards: Vec::new(),
            subscribers: Vec::new(),
        };

        match store.read_snapshot() {
            Ok(cards) => {
                info!(
                    "Loaded {} cards from {}",
                    cards.len(),
                    store.config.store_path().display()
                );
                store.cards = cards;
            }
            Err(e) => {
                warn!("Could not read card snapshot ({}), bootstrapping sample data", e);
                store.cards = sample_cards();
                if let Err(e) = store.save() {
                    warn!("Failed to persist sample data: {}", e);
                }
            }
        }

        store
    }

    fn read_snapshot(&self) -> Result<Vec<ReferenceCard>> {
        let path = self.config.store_path();
        debug!("Reading card snapshot from {}", path.display());

        let raw = fs::read_to_string(&path)?;
        export::decode_cards(&raw)
    }

    /// Rewrites the full snapshot atomically via a temporary file in the
    /// data directory
    fn save(&self) -> Result<()> {
        if !self.config.data_dir.exists() {
            debug!("Creating data directory: {}", self.config.data_dir.display());
            fs::create_dir_all(&self.config.data_dir).map_err(|e| {
                error!("Failed to create data directory: {}", e);
                VoltError::DirectoryError {
                    path: self.config.data_dir.clone(),
                }
            })?;
        }

        let path = self.config.store_path();
        let json = export::encode_cards(&self.cards)?;
        export::write_atomically(&path, json.as_bytes())?;

        debug!("Persisted {} cards to {}", self.cards.len(), path.display());
        Ok(())
    }

    /// Registers a change-notification channel.
    ///
    /// Every completed mutation publishes a StoreEvent to all live
    /// subscribers; receivers that have been dropped are pruned on the next
    /// publish.
    pub fn subscribe(&mut self) -> UnboundedReceiver<StoreEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    fn publish(&mut self, event: StoreEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Read-only view of the current collection, in insertion order
    pub fn cards(&self) -> &[ReferenceCard] {
        &self.cards
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    /// Appends a card to the collection and persists.
    ///
    /// The id must not already be present in the collection.
    pub fn add_card(&mut self, card: ReferenceCard) -> Result<()> {
        info!("Adding card: {}", card.id);

        if self.position(card.id).is_some() {
            error!("Cannot add card {}: id already present", card.id);
            return Err(VoltError::CardAlreadyExists { id: card.id });
        }

        let id = card.id;
        self.cards.push(card);
        self.save()?;
        self.publish(StoreEvent::Added(id));

        Ok(())
    }

    /// Replaces an existing card in place, keeping its ordinal position,
    /// and persists.
    ///
    /// The replacement must carry the original creation timestamp; the id
    /// selects which card is replaced.
    pub fn update_card(&mut self, card: ReferenceCard) -> Result<()> {
        info!("Updating card: {}", card.id);

        let index = self.position(card.id).ok_or_else(|| {
            error!("Cannot update card {}: not found", card.id);
            VoltError::CardNotFound { id: card.id }
        })?;

        if card.created_at != self.cards[index].created_at {
            let message = "Cannot change card creation timestamp during update".to_string();
            error!("{}", message);
            return Err(VoltError::ApplicationError { message });
        }

        let id = card.id;
        self.cards[index] = card;
        self.save()?;
        self.publish(StoreEvent::Updated(id));

        Ok(())
    }

    /// Removes the card with the given id and persists.
    pub fn delete_card(&mut self, id: Uuid) -> Result<()> {
        info!("Deleting card: {}", id);

        let index = self.position(id).ok_or_else(|| {
            error!("Cannot delete card {}: not found", id);
            VoltError::CardNotFound { id }
        })?;

        self.cards.remove(index);
        self.save()?;
        self.publish(StoreEvent::Removed(id));

        Ok(())
    }

    /// Flips the favorite flag of the card with the given id, bumps its
    /// modification time, and persists.
    pub fn toggle_favorite(&mut self, id: Uuid) -> Result<()> {
        debug!("Toggling favorite for card: {}", id);

        let index = self.position(id).ok_or(VoltError::CardNotFound { id })?;
        self.cards[index].toggle_favorite();
        self.save()?;
        self.publish(StoreEvent::FavoriteToggled(id));

        Ok(())
    }

    /// Creates a card from its parts, appends it, and returns the new id
    pub fn create_card(
        &mut self,
        title: String,
        content: String,
        category: String,
        tags: Option<String>,
        is_favorite: bool,
    ) -> Result<Uuid> {
        let card = ReferenceCard::new(title, content, category, is_favorite, tags);
        let id = card.id;
        self.add_card(card)?;
        Ok(id)
    }

    /// Replaces the mutable fields of an existing card, bumping its
    /// modification time, and persists
    pub fn edit_card(
        &mut self,
        id: Uuid,
        title: String,
        content: String,
        category: String,
        tags: Option<String>,
    ) -> Result<()> {
        info!("Editing card: {}", id);

        let index = self.position(id).ok_or_else(|| {
            error!("Cannot edit card {}: not found", id);
            VoltError::CardNotFound { id }
        })?;

        self.cards[index].update_content(title, content, category, tags);
        self.save()?;
        self.publish(StoreEvent::Updated(id));

        Ok(())
    }

    /// All cards with the given category key, in collection order
    pub fn cards_by_category(&self, category: &str) -> Vec<ReferenceCard> {
        query::by_category(&self.cards, category)
            .into_iter()
            .cloned()
            .collect()
    }

    /// All favorite cards, in collection order
    pub fn favorite_cards(&self) -> Vec<ReferenceCard> {
        query::favorites(&self.cards).into_iter().cloned().collect()
    }

    /// Case-insensitive substring search over title, content, and tags
    pub fn search_cards(&self, query_text: &str) -> Vec<ReferenceCard> {
        query::search(&self.cards, query_text)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Composes an optional category filter with a search query
    pub fn filtered_cards(&self, category: Option<&str>, query_text: &str) -> Vec<ReferenceCard> {
        query::filtered(&self.cards, category, query_text)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Aggregate statistics over the current collection
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total: self.cards.len(),
            favorite_count: self.cards.iter().filter(|card| card.is_favorite).count(),
            category_counts: query::category_counts(&self.cards),
        }
    }

    /// Writes a JSON export of the full collection on a blocking worker and
    /// returns the path of the new file.
    ///
    /// The export is an exact round-trip encoding and can be merged back
    /// with [`import_from_json`](Self::import_from_json).
    pub async fn export_to_json(&self) -> Result<PathBuf> {
        let cards = self.cards.clone();
        let dir = self.config.export_dir.clone();

        tokio::task::spawn_blocking(move || export::write_json_export(&cards, &dir))
            .await
            .map_err(|e| VoltError::ExportFailed {
                message: format!("Export task failed: {}", e),
            })?
    }

    /// Writes the human-readable text report on a blocking worker and
    /// returns the path of the new file
    pub async fn export_to_text(&self) -> Result<PathBuf> {
        let cards = self.cards.clone();
        let dir = self.config.export_dir.clone();

        tokio::task::spawn_blocking(move || export::write_text_export(&cards, &dir))
            .await
            .map_err(|e| VoltError::ExportFailed {
                message: format!("Export task failed: {}", e),
            })?
    }

    /// Merges a JSON export into the collection, union-by-id.
    ///
    /// Cards whose id already exists are skipped; existing cards are never
    /// overwritten or removed. The file is read and decoded on a blocking
    /// worker; the merge and persist happen on the owning context. A
    /// malformed or unreadable file leaves the collection untouched.
    pub async fn import_from_json(&mut self, path: &Path) -> Result<ImportSummary> {
        info!("Importing cards from {}", path.display());

        let source = path.to_path_buf();
        let read_path = source.clone();
        let candidates = tokio::task::spawn_blocking(move || export::read_import_file(&read_path))
            .await
            .map_err(|e| VoltError::ImportFailed {
                message: format!("Import task failed: {}", e),
            })??;

        let total_cards = candidates.len();
        let mut cards_added = 0;

        for candidate in candidates {
            if self.position(candidate.id).is_some() {
                debug!("Skipping already-present card: {}", candidate.id);
                continue;
            }
            self.cards.push(candidate);
            cards_added += 1;
        }

        self.save()?;
        if cards_added > 0 {
            self.publish(StoreEvent::Imported { added: cards_added });
        }

        let summary = ImportSummary {
            source,
            total_cards,
            cards_added,
            cards_skipped: total_cards - cards_added,
        };

        info!(
            "Import complete: added {}, skipped {} of {} cards from {}",
            summary.cards_added,
            summary.cards_skipped,
            summary.total_cards,
            summary.source.display()
        );

        Ok(summary)
    }
}
