use anyhow::Result;
use chrono::{Datelike, NaiveDate, Weekday};
use happy_hour::commands::{self, OutputFormat};
use happy_hour::config::Config;
use happy_hour::dates::parse_date_time;
use happy_hour::menu::{DRINKS, FOOD};
use happy_hour::types::EventRequest;
use happy_hour::{get_defaults, get_info, EventError, HostInventory};
use std::io::Write;

struct UnavailableInventory;

impl HostInventory for UnavailableInventory {
    fn source(&self) -> &'static str {
        "simulated management interface"
    }

    fn serial_number(&self) -> happy_hour::Result<String> {
        Err(EventError::HostQuery("management interface unavailable".into()))
    }
}

fn output_of(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("console output is utf-8")
}

#[test]
fn test_get_info_merges_defaults_for_every_weekday() -> Result<()> {
    let defaults = get_defaults();
    let monday = NaiveDate::from_ymd_opt(2025, 12, 8).unwrap();

    for offset in 0..7 {
        let day = monday + chrono::Duration::days(offset);
        let info = get_info(None, Some(day.and_hms_opt(12, 0, 0).unwrap()));

        assert_eq!(info.location, defaults.location);
        assert_eq!(info.date, day.format("%Y-%m-%d").to_string());
        let expected = match day.weekday() {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        };
        assert_eq!(info.day_of_week, expected);
    }
    Ok(())
}

#[test]
fn test_create_event_end_to_end() -> Result<()> {
    let date_time = parse_date_time("2025-12-10T17:00")?;
    let request = EventRequest::new("Rooftop Bar", date_time).with_attendees(["Alice", "Bob", "Charlie"]);

    let mut buf = Vec::new();
    let record = commands::create_event(&mut buf, OutputFormat::Text, request, false)?
        .expect("non dry-run returns a record");

    assert_eq!(record.location, "Rooftop Bar");
    assert_eq!(record.date_time, date_time);
    assert_eq!(record.attendees, vec!["Alice", "Bob", "Charlie"]);
    assert_eq!(record.theme, None);
    assert_eq!(record.status, "Scheduled");
    assert!(!record.event_id.to_string().is_empty());

    let text = output_of(buf);
    assert!(text.contains("event created"));
    assert!(text.contains(&record.event_id.to_string()));
    assert!(text.contains("Attendees: Alice, Bob, Charlie"));
    assert!(!text.contains("Theme"));
    Ok(())
}

#[test]
fn test_create_event_dry_run_reports_instead_of_creating() -> Result<()> {
    let request = EventRequest::new("Rooftop Bar", parse_date_time("2025-12-10T17:00")?);

    let mut buf = Vec::new();
    let record = commands::create_event(&mut buf, OutputFormat::Text, request, true)?;
    assert!(record.is_none());

    let text = output_of(buf);
    assert!(text.contains("Dry run"));
    assert!(text.contains("Create event"));
    assert!(text.contains("Rooftop Bar"));
    assert!(!text.contains("Event ID"));
    Ok(())
}

#[test]
fn test_event_json_omits_missing_theme() -> Result<()> {
    let request = EventRequest::new("Rooftop Bar", parse_date_time("2025-12-10T17:00")?);

    let mut buf = Vec::new();
    commands::create_event(&mut buf, OutputFormat::Json, request, false)?;
    let value: serde_json::Value = serde_json::from_slice(&buf)?;

    assert_eq!(value["status"], "Scheduled");
    assert_eq!(value["dateTime"], "2025-12-10T17:00:00");
    assert!(value["eventId"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(value.get("theme").is_none());
    Ok(())
}

#[test]
fn test_drinks_menu_has_no_food() -> Result<()> {
    let mut buf = Vec::new();
    commands::show_menu(&mut buf, OutputFormat::Text, "Drinks", false)?;
    let text = output_of(buf);

    for item in DRINKS {
        assert!(text.contains(item.name), "missing {}", item.name);
    }
    for item in FOOD {
        assert!(!text.contains(item.name), "unexpected {}", item.name);
    }
    Ok(())
}

#[test]
fn test_food_menu_with_prices() -> Result<()> {
    let mut buf = Vec::new();
    commands::show_menu(&mut buf, OutputFormat::Text, "Food", true)?;
    let text = output_of(buf);

    for item in FOOD {
        assert!(text.contains(&item.formatted_price()), "missing price for {}", item.name);
    }
    assert!(text.contains("$8.99"));
    assert!(text.contains("$10.50"));
    Ok(())
}

#[test]
fn test_menu_rejects_unknown_category() {
    let mut buf = Vec::new();
    let err = commands::show_menu(&mut buf, OutputFormat::Text, "Bogus", false).unwrap_err();
    assert!(matches!(err, EventError::InvalidArgument(_)));
    assert!(buf.is_empty());
}

#[test]
fn test_host_serial_failure_is_reported() {
    let mut buf = Vec::new();
    let result = commands::show_host_serial(&mut buf, OutputFormat::Text, &UnavailableInventory);

    match result {
        Err(EventError::HostQuery(msg)) => assert!(msg.contains("unavailable")),
        other => panic!("expected a host query failure, got {other:?}"),
    }
    assert!(buf.is_empty());
}

#[test]
fn test_config_file_overrides_defaults() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        "[defaults]\nlocation = \"Harbor House\"\ntime = \"16:00\"\nduration_minutes = 90"
    )?;

    let config = Config::load_from(file.path())?;
    let defaults = config.defaults.to_record();

    let mut buf = Vec::new();
    let info = commands::show_info(
        &mut buf,
        OutputFormat::Text,
        &defaults,
        None,
        Some(parse_date_time("2025-12-10")?),
    )?;
    assert_eq!(info.location, "Harbor House");
    assert_eq!(info.time, "16:00");
    assert_eq!(info.duration, "90 minutes");
    assert!(output_of(buf).contains("Harbor House"));
    Ok(())
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, EventError::Config(_)));
}
