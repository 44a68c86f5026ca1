use crate::constants::CURRENCY_SYMBOL;
use crate::error::EventError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Fixed happy hour settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultsRecord {
    pub location: String,
    /// `HH:MM`
    pub time: String,
    pub duration_minutes: u32,
}

/// Display record produced by merging caller input with the defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoRecord {
    pub location: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time: String,
    /// Human readable, e.g. `"120 minutes"`
    pub duration: String,
    pub day_of_week: String,
}

/// Caller input for event creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRequest {
    pub location: String,
    pub date_time: NaiveDateTime,
    pub attendees: Vec<String>,
    pub theme: Option<String>,
}

impl EventRequest {
    pub fn new(location: impl Into<String>, date_time: NaiveDateTime) -> Self {
        Self {
            location: location.into(),
            date_time,
            attendees: Vec::new(),
            theme: None,
        }
    }

    pub fn with_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attendees = attendees.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }
}

/// A created event. Ownership passes entirely to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub event_id: Uuid,
    pub location: String,
    pub date_time: NaiveDateTime,
    pub attendees: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    pub created: DateTime<Utc>,
    pub status: String,
}

/// What a dry-run would have done
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedAction {
    pub target: String,
    pub action: String,
}

/// Result of `create_event`: either the new record or the action a dry-run skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(EventRecord),
    DryRun(PlannedAction),
}

impl CreateOutcome {
    pub fn into_record(self) -> Option<EventRecord> {
        match self {
            CreateOutcome::Created(record) => Some(record),
            CreateOutcome::DryRun(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    /// Price in cents
    pub price_cents: u32,
}

impl MenuItem {
    /// Price formatted as currency with two decimals, e.g. `$7.50`
    pub fn formatted_price(&self) -> String {
        format!(
            "{}{}.{:02}",
            CURRENCY_SYMBOL,
            self.price_cents / 100,
            self.price_cents % 100
        )
    }
}

/// A section of the compiled-in catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuSection {
    Drinks,
    Food,
}

impl MenuSection {
    pub fn title(&self) -> &'static str {
        match self {
            MenuSection::Drinks => "Drinks",
            MenuSection::Food => "Food",
        }
    }
}

/// Which sections `show_menu` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuCategory {
    #[default]
    All,
    Drinks,
    Food,
}

impl MenuCategory {
    pub fn sections(&self) -> &'static [MenuSection] {
        match self {
            MenuCategory::All => &[MenuSection::Drinks, MenuSection::Food],
            MenuCategory::Drinks => &[MenuSection::Drinks],
            MenuCategory::Food => &[MenuSection::Food],
        }
    }
}

impl FromStr for MenuCategory {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(MenuCategory::All),
            "drinks" => Ok(MenuCategory::Drinks),
            "food" => Ok(MenuCategory::Food),
            _ => Err(EventError::InvalidArgument(format!(
                "unknown menu category '{s}' (expected All, Drinks or Food)"
            ))),
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MenuCategory::All => "All",
            MenuCategory::Drinks => "Drinks",
            MenuCategory::Food => "Food",
        };
        f.write_str(name)
    }
}
