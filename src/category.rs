use std::fmt;

/// The closed catalog of card categories with their display metadata.
///
/// Persisted cards carry the stable `key()` string rather than this enum, so
/// a card whose category leaves the catalog stays readable; it simply
/// renders without icon and color metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardCategory {
    ErrorCodes,
    SetupInstructions,
    CommandLine,
    BuildFlags,
    NamingRules,
    ApiHeaders,
    Configurations,
    Troubleshooting,
    Documentation,
    QuickReference,
}

impl CardCategory {
    /// Every catalog entry, in declaration order
    pub const ALL: [CardCategory; 10] = [
        CardCategory::ErrorCodes,
        CardCategory::SetupInstructions,
        CardCategory::CommandLine,
        CardCategory::BuildFlags,
        CardCategory::NamingRules,
        CardCategory::ApiHeaders,
        CardCategory::Configurations,
        CardCategory::Troubleshooting,
        CardCategory::Documentation,
        CardCategory::QuickReference,
    ];

    /// Stable key stored on persisted cards. Renaming a display label must
    /// not change this value.
    pub fn key(self) -> &'static str {
        match self {
            CardCategory::ErrorCodes => "error-codes",
            CardCategory::SetupInstructions => "setup-instructions",
            CardCategory::CommandLine => "command-line",
            CardCategory::BuildFlags => "build-flags",
            CardCategory::NamingRules => "naming-rules",
            CardCategory::ApiHeaders => "api-headers",
            CardCategory::Configurations => "configurations",
            CardCategory::Troubleshooting => "troubleshooting",
            CardCategory::Documentation => "documentation",
            CardCategory::QuickReference => "quick-reference",
        }
    }

    /// Human-readable display label
    pub fn label(self) -> &'static str {
        match self {
            CardCategory::ErrorCodes => "Error Codes",
            CardCategory::SetupInstructions => "Setup Instructions",
            CardCategory::CommandLine => "Command Line",
            CardCategory::BuildFlags => "Build Flags",
            CardCategory::NamingRules => "Naming Rules",
            CardCategory::ApiHeaders => "API Headers",
            CardCategory::Configurations => "Configurations",
            CardCategory::Troubleshooting => "Troubleshooting",
            CardCategory::Documentation => "Documentation",
            CardCategory::QuickReference => "Quick Reference",
        }
    }

    /// Icon token for UI rendering
    pub fn icon(self) -> &'static str {
        match self {
            CardCategory::ErrorCodes => "warning-triangle",
            CardCategory::SetupInstructions => "gear",
            CardCategory::CommandLine => "terminal",
            CardCategory::BuildFlags => "flag",
            CardCategory::NamingRules => "text-format",
            CardCategory::ApiHeaders => "network",
            CardCategory::Configurations => "sliders",
            CardCategory::Troubleshooting => "wrench",
            CardCategory::Documentation => "doc-text",
            CardCategory::QuickReference => "bolt",
        }
    }

    /// Accent color token for UI rendering
    pub fn color(self) -> &'static str {
        match self {
            CardCategory::ErrorCodes => "#ff2c1f",
            CardCategory::SetupInstructions => "#1e90ff",
            CardCategory::CommandLine => "#ffc700",
            CardCategory::BuildFlags => "#ff2c1f",
            CardCategory::NamingRules => "#1e90ff",
            CardCategory::ApiHeaders => "#ffc700",
            CardCategory::Configurations => "#ff2c1f",
            CardCategory::Troubleshooting => "#1e90ff",
            CardCategory::Documentation => "#ffc700",
            CardCategory::QuickReference => "#ff2c1f",
        }
    }

    /// Resolves a stored key back to its catalog entry, if still present
    pub fn from_key(key: &str) -> Option<CardCategory> {
        Self::ALL.iter().copied().find(|category| category.key() == key)
    }
}

impl fmt::Display for CardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_the_catalog() {
        for category in CardCategory::ALL {
            assert_eq!(CardCategory::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn unknown_keys_resolve_to_none() {
        assert_eq!(CardCategory::from_key("legacy-tips"), None);
        assert_eq!(CardCategory::from_key("Command Line"), None);
    }

    #[test]
    fn display_uses_the_label() {
        assert_eq!(CardCategory::CommandLine.to_string(), "Command Line");
        assert_eq!(CardCategory::ApiHeaders.label(), "API Headers");
    }
}
