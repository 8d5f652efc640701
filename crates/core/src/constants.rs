/// chrono format for monthly encours labels ("Mar 2024")
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";

/// Source key reported when the client list could not be fetched
pub const CLIENTS_SOURCE_KEY: &str = "clients";

/// Profiles below this completion percentage are high priority
pub const PROFILE_HIGH_PRIORITY_BELOW: u8 = 50;

/// Profiles below this completion percentage are medium priority
pub const PROFILE_MEDIUM_PRIORITY_BELOW: u8 = 80;
