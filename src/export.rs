//! Export and import of the card collection.
//!
//! JSON exports are exact round-trip encodings of every card field; the text
//! export is a write-only human-readable report. Export filenames embed a
//! sortable timestamp so repeated exports in one session never collide.
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use log::{debug, error, info};
use tempfile::NamedTempFile;

use crate::{CardCategory, ReferenceCard, Result, VoltError};

/// Timestamp format embedded in export filenames
const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Serializes the collection to pretty-printed JSON
pub(crate) fn encode_cards(cards: &[ReferenceCard]) -> Result<String> {
    Ok(serde_json::to_string_pretty(cards)?)
}

/// Decodes a collection from its JSON encoding
pub(crate) fn decode_cards(json: &str) -> Result<Vec<ReferenceCard>> {
    Ok(serde_json::from_str(json)?)
}

/// Writes a JSON export of the full collection into `dir` and returns the
/// path of the new file
pub fn write_json_export(cards: &[ReferenceCard], dir: &Path) -> Result<PathBuf> {
    ensure_dir(dir)?;

    let file_name = format!(
        "voltcase_backup_{}.json",
        Utc::now().format(EXPORT_TIMESTAMP_FORMAT)
    );
    let path = dir.join(file_name);

    let json = encode_cards(cards)?;
    write_atomically(&path, json.as_bytes())?;

    info!("Exported {} cards to {}", cards.len(), path.display());
    Ok(path)
}

/// Writes the human-readable text report into `dir` and returns the path of
/// the new file. This format is write-only and cannot be imported back.
pub fn write_text_export(cards: &[ReferenceCard], dir: &Path) -> Result<PathBuf> {
    ensure_dir(dir)?;

    let now = Utc::now();
    let file_name = format!("voltcase_backup_{}.txt", now.format(EXPORT_TIMESTAMP_FORMAT));
    let path = dir.join(file_name);

    let report = render_text_report(cards, now);
    write_atomically(&path, report.as_bytes())?;

    info!(
        "Exported text report of {} cards to {}",
        cards.len(),
        path.display()
    );
    Ok(path)
}

/// Renders the text report: a header, then one block per card.
///
/// Categories render with their display label when the key is still in the
/// catalog, and with the raw stored key otherwise.
pub fn render_text_report(cards: &[ReferenceCard], generated_at: DateTime<Utc>) -> String {
    let mut report = String::from("VoltCase Reference Cards Export\n");
    report.push_str(&format!(
        "Generated: {}\n\n",
        generated_at.format(EXPORT_TIMESTAMP_FORMAT)
    ));

    for card in cards {
        let category = CardCategory::from_key(&card.category)
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| card.category.clone());

        report.push_str("═══════════════════════════════════════\n");
        report.push_str(&format!("TITLE: {}\n", card.title));
        report.push_str(&format!("CATEGORY: {}\n", category));
        report.push_str(&format!(
            "FAVORITE: {}\n",
            if card.is_favorite { "★" } else { "☆" }
        ));
        if let Some(tags) = &card.tags {
            report.push_str(&format!("TAGS: {}\n", tags));
        }
        report.push_str(&format!(
            "CREATED: {}\n",
            card.created_at.format(EXPORT_TIMESTAMP_FORMAT)
        ));
        report.push_str(&format!(
            "UPDATED: {}\n",
            card.updated_at.format(EXPORT_TIMESTAMP_FORMAT)
        ));
        report.push_str("───────────────────────────────────────\n");
        report.push_str(&format!("{}\n\n", card.content));
    }

    report
}

/// Reads and decodes a JSON export for merging into the collection.
///
/// Any read or decode failure is reported as ImportFailed so callers can
/// surface it without touching the collection.
pub fn read_import_file(path: &Path) -> Result<Vec<ReferenceCard>> {
    debug!("Reading import file: {}", path.display());

    let raw = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read import file {}: {}", path.display(), e);
        VoltError::ImportFailed {
            message: format!("Failed to read {}: {}", path.display(), e),
        }
    })?;

    decode_cards(&raw).map_err(|e| {
        error!("Failed to decode import file {}: {}", path.display(), e);
        VoltError::ImportFailed {
            message: format!("Malformed card collection in {}: {}", path.display(), e),
        }
    })
}

/// Writes bytes to a temporary file in the target directory and atomically
/// moves it into place, so a crash mid-write never leaves a truncated file
pub(crate) fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| {
        error!("Failed to create temporary file in {}: {}", dir.display(), e);
        VoltError::Io(e)
    })?;

    temp_file.write_all(bytes).map_err(VoltError::Io)?;
    temp_file.flush().map_err(VoltError::Io)?;

    temp_file.persist(path).map_err(|e| {
        error!("Failed to persist file {}: {}", path.display(), e.error);
        VoltError::Io(e.error)
    })?;

    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Creating export directory: {}", dir.display());
        fs::create_dir_all(dir).map_err(|e| {
            error!("Failed to create directory {}: {}", dir.display(), e);
            VoltError::DirectoryError {
                path: dir.to_path_buf(),
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tempfile::tempdir;

    fn fixture() -> Vec<ReferenceCard> {
        vec![
            ReferenceCard::new(
                "HTTP Status Codes".to_string(),
                "200 OK - Success\n404 Not Found - Resource missing".to_string(),
                "error-codes".to_string(),
                true,
                Some("http,api,status,web".to_string()),
            ),
            ReferenceCard::new(
                "Naming Conventions".to_string(),
                "Variables: camelCase".to_string(),
                "naming-rules".to_string(),
                false,
                None,
            ),
        ]
    }

    #[test]
    fn json_encoding_round_trips_every_field() {
        let cards = fixture();

        let json = encode_cards(&cards).unwrap();
        let decoded = decode_cards(&json).unwrap();

        assert_eq!(decoded, cards);
    }

    #[test]
    fn decode_rejects_malformed_input() {
        assert!(decode_cards("{not a collection").is_err());
        assert!(decode_cards("[{\"title\": \"missing fields\"}]").is_err());
    }

    #[test]
    fn text_report_lists_every_card() {
        let cards = fixture();
        let report = render_text_report(&cards, Utc::now());

        assert!(report.starts_with("VoltCase Reference Cards Export\nGenerated: "));
        assert!(report.contains("TITLE: HTTP Status Codes\n"));
        assert!(report.contains("CATEGORY: Error Codes\n"));
        assert!(report.contains("FAVORITE: ★\n"));
        assert!(report.contains("TAGS: http,api,status,web\n"));
        assert!(report.contains("404 Not Found - Resource missing\n"));

        // the untagged card renders without a TAGS line
        assert!(report.contains("TITLE: Naming Conventions\n"));
        assert!(report.contains("FAVORITE: ☆\n"));
        assert_eq!(report.matches("TAGS: ").count(), 1);
        assert_eq!(report.matches("TITLE: ").count(), 2);
    }

    #[test]
    fn unknown_category_keys_render_verbatim() {
        let mut cards = fixture();
        cards[0].category = "legacy-tips".to_string();

        let report = render_text_report(&cards, Utc::now());
        assert!(report.contains("CATEGORY: legacy-tips\n"));
    }

    #[test]
    fn export_filenames_embed_a_sortable_timestamp() {
        let dir = tempdir().unwrap();
        let path = write_json_export(&fixture(), dir.path()).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("voltcase_backup_"));
        assert!(name.ends_with(".json"));

        let stamp = name
            .trim_start_matches("voltcase_backup_")
            .trim_end_matches(".json");
        assert!(NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d_%H-%M-%S").is_ok());
    }

    #[test]
    fn json_export_file_round_trips() {
        let dir = tempdir().unwrap();
        let cards = fixture();

        let path = write_json_export(&cards, dir.path()).unwrap();
        let imported = read_import_file(&path).unwrap();

        assert_eq!(imported, cards);
    }

    #[test]
    fn read_import_file_reports_missing_and_malformed_files() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("nope.json");
        assert!(matches!(
            read_import_file(&missing),
            Err(VoltError::ImportFailed { .. })
        ));

        let malformed = dir.path().join("broken.json");
        fs::write(&malformed, "definitely not json").unwrap();
        assert!(matches!(
            read_import_file(&malformed),
            Err(VoltError::ImportFailed { .. })
        ));
    }
}
