/// Fixed happy hour defaults, returned by `get_defaults` and used when no config overrides them
pub const DEFAULT_LOCATION: &str = "The Local Pub";
pub const DEFAULT_TIME: &str = "17:00";
pub const DEFAULT_DURATION_MINUTES: u32 = 120;

/// Every created event starts (and, here, stays) in this state
pub const EVENT_STATUS_SCHEDULED: &str = "Scheduled";

/// Action reported by a dry-run of event creation
pub const CREATE_EVENT_ACTION: &str = "Create event";

pub const CURRENCY_SYMBOL: &str = "$";

// Environment variables
pub const CONFIG_PATH_ENV: &str = "HAPPY_HOUR_CONFIG";

// Logging
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILE: &str = "happy_hour.log";
pub const DEFAULT_LOG_DIRECTIVE: &str = "happy_hour=info";

// Formats
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
