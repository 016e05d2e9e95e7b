//! Built-in sample cards used to bootstrap an empty store.
//!
//! These are written on first launch, or whenever the durable snapshot
//! cannot be read, so the application always starts with a usable collection.
use crate::{CardCategory, ReferenceCard};

/// The fixed sample set of eight reference cards
pub fn sample_cards() -> Vec<ReferenceCard> {
    vec![
        ReferenceCard::new(
            "iOS Build Flags".to_string(),
            "-DDEBUG=1\n-DLOG_LEVEL=2\n-fmodules\n-fcxx-modules\n\nUse for debugging iOS builds in Xcode".to_string(),
            CardCategory::BuildFlags.key().to_string(),
            true,
            Some("ios,xcode,debug,build".to_string()),
        ),
        ReferenceCard::new(
            "Git Reset Commands".to_string(),
            "git reset --soft HEAD~1  # Keep changes staged\ngit reset --mixed HEAD~1  # Unstage changes\ngit reset --hard HEAD~1   # Discard changes".to_string(),
            CardCategory::CommandLine.key().to_string(),
            false,
            Some("git,version-control,reset".to_string()),
        ),
        ReferenceCard::new(
            "HTTP Status Codes".to_string(),
            "200 OK - Success\n201 Created - Resource created\n400 Bad Request - Invalid request\n401 Unauthorized - Auth required\n404 Not Found - Resource missing\n500 Internal Server Error - Server error".to_string(),
            CardCategory::ErrorCodes.key().to_string(),
            true,
            Some("http,api,status,web".to_string()),
        ),
        ReferenceCard::new(
            "API Authentication Headers".to_string(),
            "Authorization: Bearer <token>\nContent-Type: application/json\nX-API-Key: <key>\nAccept: application/json\nUser-Agent: VoltCase/1.0".to_string(),
            CardCategory::ApiHeaders.key().to_string(),
            false,
            Some("api,auth,headers,http".to_string()),
        ),
        ReferenceCard::new(
            "Docker Commands".to_string(),
            "docker build -t image:tag .\ndocker run -p 8080:80 image:tag\ndocker ps               # List containers\ndocker stop container_id\ndocker logs container_id".to_string(),
            CardCategory::CommandLine.key().to_string(),
            true,
            Some("docker,containers,deployment".to_string()),
        ),
        ReferenceCard::new(
            "UI Debugging Notes".to_string(),
            "Log state transitions on every update\nInspect the view hierarchy before blaming layout\nBisect by commenting out subviews\nDump the model: dbg!(&view_model.state)".to_string(),
            CardCategory::Troubleshooting.key().to_string(),
            false,
            Some("ui,debug,layout".to_string()),
        ),
        ReferenceCard::new(
            "JSON API Response Format".to_string(),
            "{\n  \"data\": { ... },\n  \"status\": \"success\",\n  \"message\": \"Operation completed\",\n  \"timestamp\": \"2025-01-20T10:30:00Z\"\n}".to_string(),
            CardCategory::Documentation.key().to_string(),
            true,
            Some("json,api,format,documentation".to_string()),
        ),
        ReferenceCard::new(
            "Naming Conventions".to_string(),
            "Variables: camelCase\nConstants: UPPER_SNAKE_CASE\nClasses: PascalCase\nFiles: kebab-case\nAPIs: snake_case endpoints".to_string(),
            CardCategory::NamingRules.key().to_string(),
            false,
            Some("naming,conventions,coding,standards".to_string()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_has_eight_cards_with_unique_ids() {
        let cards = sample_cards();
        assert_eq!(cards.len(), 8);

        let mut ids: Vec<_> = cards.iter().map(|card| card.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn sample_categories_are_all_in_the_catalog() {
        for card in sample_cards() {
            assert!(
                CardCategory::from_key(&card.category).is_some(),
                "unknown category key: {}",
                card.category
            );
        }
    }
}
