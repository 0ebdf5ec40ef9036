//! Rendering of a [`CollectionSchedule`] as an iCalendar document.

use chrono::Utc;
use ical::{
    generator::{Emitter, IcalCalendar, IcalCalendarBuilder, IcalEvent, IcalEventBuilder, Property},
    ical_param, ical_property,
    parser::ical::component::IcalAlarm,
};

use crate::collection_client::{CollectionEntry, CollectionSchedule};

static PROD_ID: &str = "-//Waste Collection Calendar//westnorthants.digital";
static CALENDAR_NAME: &str = "Waste Collection Schedule";
static TIMEZONE: &str = "Europe/London";
static UID_DOMAIN: &str = "westnorthants.digital";
static DATE_FORMAT: &str = "%Y%m%d";
static DTSTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";
static REFRESH_INTERVAL: &str = "P1W";
static ALARM_TRIGGER: &str = "-PT18H";

/// Render the schedule as a complete iCalendar document.
///
/// An empty schedule still yields a valid calendar, just without events.
pub fn render(schedule: &CollectionSchedule) -> String {
    build_calendar(schedule).generate()
}

/// Build the calendar with its publishing and weekly-refresh metadata.
fn build_calendar(schedule: &CollectionSchedule) -> IcalCalendar {
    let mut calendar = IcalCalendarBuilder::version("2.0")
        .gregorian()
        .prodid(String::from(PROD_ID))
        .build();
    calendar.properties.push(ical_property!("METHOD", "PUBLISH"));
    calendar
        .properties
        .push(ical_property!("X-WR-CALNAME", CALENDAR_NAME));
    // Label only, the collection dates are calendar dates without a time zone.
    calendar
        .properties
        .push(ical_property!("X-WR-TIMEZONE", TIMEZONE));
    calendar.properties.push(ical_property!(
        "REFRESH-INTERVAL",
        REFRESH_INTERVAL,
        ical_param!("VALUE", "DURATION")
    ));
    calendar
        .properties
        .push(ical_property!("X-PUBLISHED-TTL", REFRESH_INTERVAL));
    let changed = Utc::now().format(DTSTAMP_FORMAT).to_string();
    for entry in &schedule.entries {
        calendar.events.push(build_event(entry, &changed));
    }
    calendar
}

/// Build one all-day event with its reminder alarm.
fn build_event(entry: &CollectionEntry, changed: &str) -> IcalEvent {
    let mut event = IcalEventBuilder::tzid(TIMEZONE)
        .uid(uid(entry))
        .changed_utc(changed)
        .one_day(entry.date.format(DATE_FORMAT).to_string())
        .set(ical_property!(
            "DTEND",
            entry.date.format(DATE_FORMAT).to_string(),
            ical_param!("VALUE", "DATE")
        ))
        .set(ical_property!("SUMMARY", entry.label))
        .set(ical_property!(
            "DESCRIPTION",
            format!("{} - remember to put the bins out", entry.label)
        ))
        .set(ical_property!("STATUS", "CONFIRMED"))
        .set(ical_property!("SEQUENCE", "0"))
        .build();
    let mut alarm = IcalAlarm::new();
    alarm.properties.push(ical_property!("ACTION", "DISPLAY"));
    alarm.properties.push(ical_property!("TRIGGER", ALARM_TRIGGER));
    alarm.properties.push(ical_property!(
        "DESCRIPTION",
        format!("Reminder: {} tomorrow", entry.label)
    ));
    event.alarms.push(alarm);
    event
}

/// Get the stable id for one collection date.
///
/// Calendar clients deduplicate by UID, so changing this function is a
/// breaking change!
fn uid(entry: &CollectionEntry) -> String {
    let type_part = entry
        .raw_type
        .as_deref()
        .map_or_else(|| String::from("waste"), str::to_lowercase);
    format!(
        "waste-{}-{}@{}",
        entry.date.format(DATE_FORMAT),
        type_part,
        UID_DOMAIN
    )
}
