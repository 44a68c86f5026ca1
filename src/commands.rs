//! The command surface: each operation runs the core call and writes its
//! console output to the supplied writer.

use crate::display;
use crate::error::Result;
use crate::events;
use crate::host::{self, HostInventory};
use crate::menu;
use crate::types::{CreateOutcome, DefaultsRecord, EventRecord, EventRequest, InfoRecord, MenuCategory};
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::json;
use std::io::Write;

/// How records are written to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn show_defaults<W: Write>(
    out: &mut W,
    format: OutputFormat,
    defaults: &DefaultsRecord,
) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", display::render_defaults(defaults))?,
        OutputFormat::Json => write_json(out, defaults)?,
    }
    Ok(())
}

pub fn show_info<W: Write>(
    out: &mut W,
    format: OutputFormat,
    defaults: &DefaultsRecord,
    location: Option<&str>,
    date: Option<NaiveDateTime>,
) -> Result<InfoRecord> {
    let info = events::get_info_with(defaults, location, date);
    match format {
        OutputFormat::Text => write!(out, "{}", display::render_info(&info))?,
        OutputFormat::Json => write_json(out, &info)?,
    }
    Ok(info)
}

/// Create an event and print its confirmation. A dry run prints the planned
/// action instead and returns `None`.
pub fn create_event<W: Write>(
    out: &mut W,
    format: OutputFormat,
    request: EventRequest,
    dry_run: bool,
) -> Result<Option<EventRecord>> {
    match events::create_event(request, dry_run) {
        CreateOutcome::Created(record) => {
            match format {
                OutputFormat::Text => write!(out, "{}", display::render_event_created(&record))?,
                OutputFormat::Json => write_json(out, &record)?,
            }
            Ok(Some(record))
        }
        CreateOutcome::DryRun(planned) => {
            match format {
                OutputFormat::Text => write!(out, "{}", display::render_dry_run(&planned))?,
                OutputFormat::Json => write_json(out, &json!({ "dryRun": planned }))?,
            }
            Ok(None)
        }
    }
}

/// Print the menu. `category` must name All, Drinks or Food.
pub fn show_menu<W: Write>(
    out: &mut W,
    format: OutputFormat,
    category: &str,
    include_prices: bool,
) -> Result<()> {
    let category: MenuCategory = category.parse()?;
    match format {
        OutputFormat::Text => write!(out, "{}", display::render_menu(category, include_prices))?,
        OutputFormat::Json => {
            let sections: Vec<_> = menu::sections_for(category)
                .into_iter()
                .map(|(section, items)| {
                    let items: Vec<_> = items
                        .iter()
                        .map(|item| {
                            if include_prices {
                                json!({ "name": item.name, "price": item.formatted_price() })
                            } else {
                                json!({ "name": item.name })
                            }
                        })
                        .collect();
                    json!({ "section": section.title(), "items": items })
                })
                .collect();
            write_json(out, &sections)?;
        }
    }
    Ok(())
}

pub fn show_host_serial<W: Write>(
    out: &mut W,
    format: OutputFormat,
    inventory: &dyn HostInventory,
) -> Result<String> {
    let serial = host::get_host_serial_number(inventory)?;
    match format {
        OutputFormat::Text => write!(out, "{}", display::render_serial(&serial))?,
        OutputFormat::Json => write_json(out, &json!({ "serialNumber": serial }))?,
    }
    Ok(serial)
}
