use crate::constants::{
    CREATE_EVENT_ACTION, DATE_FORMAT, DATE_TIME_FORMAT, DEFAULT_DURATION_MINUTES,
    DEFAULT_LOCATION, DEFAULT_TIME, EVENT_STATUS_SCHEDULED,
};
use crate::types::{CreateOutcome, DefaultsRecord, EventRecord, EventRequest, InfoRecord, PlannedAction};
use chrono::{Local, NaiveDateTime, Utc};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// The fixed happy hour defaults. Built fresh on every call.
pub fn get_defaults() -> DefaultsRecord {
    DefaultsRecord {
        location: DEFAULT_LOCATION.to_string(),
        time: DEFAULT_TIME.to_string(),
        duration_minutes: DEFAULT_DURATION_MINUTES,
    }
}

/// Happy hour info for `location` on `date`, using the fixed defaults.
///
/// A missing or empty location falls back to the default location and a missing
/// date falls back to the current local moment.
pub fn get_info(location: Option<&str>, date: Option<NaiveDateTime>) -> InfoRecord {
    get_info_with(&get_defaults(), location, date)
}

/// Same as [`get_info`] but merges against caller-supplied defaults (e.g. from config).
#[instrument(skip(defaults))]
pub fn get_info_with(
    defaults: &DefaultsRecord,
    location: Option<&str>,
    date: Option<NaiveDateTime>,
) -> InfoRecord {
    let location = match location {
        Some(loc) if !loc.is_empty() => loc.to_string(),
        _ => {
            debug!("No location given, using default '{}'", defaults.location);
            defaults.location.clone()
        }
    };
    let date = date.unwrap_or_else(|| {
        debug!("No date given, using current time");
        Local::now().naive_local()
    });

    debug!("Building happy hour info for {} on {}", location, date.format(DATE_FORMAT));

    InfoRecord {
        location,
        date: date.format(DATE_FORMAT).to_string(),
        time: defaults.time.clone(),
        duration: format!("{} minutes", defaults.duration_minutes),
        day_of_week: date.format("%A").to_string(),
    }
}

/// Create a new event record, or with `dry_run` only describe what would be created.
///
/// Location and date presence is the caller's concern; any strings are accepted.
#[instrument(skip(request), fields(location = %request.location))]
pub fn create_event(request: EventRequest, dry_run: bool) -> CreateOutcome {
    if dry_run {
        let planned = PlannedAction {
            target: format!(
                "Event at {} on {}",
                request.location,
                request.date_time.format(DATE_TIME_FORMAT)
            ),
            action: CREATE_EVENT_ACTION.to_string(),
        };
        info!("Dry run: skipping '{}' on '{}'", planned.action, planned.target);
        return CreateOutcome::DryRun(planned);
    }

    let record = EventRecord {
        event_id: Uuid::new_v4(),
        location: request.location,
        date_time: request.date_time,
        attendees: request.attendees,
        theme: request.theme,
        created: Utc::now(),
        status: EVENT_STATUS_SCHEDULED.to_string(),
    };

    info!("Created event {} with {} attendees", record.event_id, record.attendees.len());
    CreateOutcome::Created(record)
}
