//! Console rendering. Nothing here produces data; it only turns records into text.

use crate::constants::DATE_TIME_FORMAT;
use crate::menu;
use crate::types::{DefaultsRecord, EventRecord, InfoRecord, MenuCategory, PlannedAction};

const MENU_INNER_WIDTH: usize = 36;
const MENU_NAME_WIDTH: usize = 26;
const MENU_PRICE_WIDTH: usize = 8;

pub fn render_defaults(defaults: &DefaultsRecord) -> String {
    format!(
        "🍻 Happy hour defaults\n   Location: {}\n   Time:     {}\n   Duration: {} minutes\n",
        defaults.location, defaults.time, defaults.duration_minutes
    )
}

pub fn render_info(info: &InfoRecord) -> String {
    format!(
        "🍻 Happy hour at {}\n   Date:     {} ({})\n   Time:     {}\n   Duration: {}\n",
        info.location, info.date, info.day_of_week, info.time, info.duration
    )
}

/// Confirmation block printed after an event is created
pub fn render_event_created(event: &EventRecord) -> String {
    let mut out = String::new();
    out.push_str("🎉 Happy hour event created!\n");
    out.push_str(&format!("   Event ID:  {}\n", event.event_id));
    out.push_str(&format!("   Location:  {}\n", event.location));
    out.push_str(&format!(
        "   Date/Time: {}\n",
        event.date_time.format(DATE_TIME_FORMAT)
    ));
    if !event.attendees.is_empty() {
        out.push_str(&format!("   Attendees: {}\n", event.attendees.join(", ")));
    }
    if let Some(theme) = &event.theme {
        out.push_str(&format!("   Theme:     {}\n", theme));
    }
    out
}

pub fn render_dry_run(planned: &PlannedAction) -> String {
    format!(
        "🔍 Dry run: would perform \"{}\" on target \"{}\"\n",
        planned.action, planned.target
    )
}

/// Bordered menu block for the sections picked by `category`
pub fn render_menu(category: MenuCategory, include_prices: bool) -> String {
    let border = format!("+{}+\n", "-".repeat(MENU_INNER_WIDTH + 2));
    let mut out = String::new();

    out.push_str(&border);
    out.push_str(&row(&format!(
        "{:^width$}",
        "HAPPY HOUR MENU",
        width = MENU_INNER_WIDTH
    )));
    out.push_str(&border);

    for (section, items) in menu::sections_for(category) {
        out.push_str(&row(section.title()));
        for item in items {
            let line = if include_prices {
                format!(
                    "  {:<name$}{:>price$}",
                    item.name,
                    item.formatted_price(),
                    name = MENU_NAME_WIDTH,
                    price = MENU_PRICE_WIDTH
                )
            } else {
                format!("  {}", item.name)
            };
            out.push_str(&row(&line));
        }
    }

    out.push_str(&border);
    out
}

fn row(text: &str) -> String {
    format!("| {:<width$} |\n", text, width = MENU_INNER_WIDTH)
}

pub fn render_serial(serial: &str) -> String {
    format!("🖥️  Host serial number: {}\n", serial)
}
