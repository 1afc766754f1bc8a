//! ICS calendar export.
//!
//! Emits one all-day event per upcoming rite and per future annual
//! anniversary, each with reminders 7 days before, 1 day before, and on
//! the day itself. Output is deterministic for a given collection and
//! "now", so re-exports are byte-identical.

use chrono::{Datelike, Days, Duration, NaiveDate};
use icalendar::{Alarm, Calendar, Component, EventLike, Property, Trigger, ValueType};

use crate::dates;
use crate::error::JesaResult;
use crate::memorial::Memorial;
use crate::ritual::RITUALS;

/// How many years of annual anniversaries to emit.
const ANNUAL_HORIZON_YEARS: i32 = 10;

const PRODID: &str = "-//jesa//Memorial Rites//EN";
const CALENDAR_NAME: &str = "Jesa — Memorial Rites";

/// A computed occurrence, before it becomes a VEVENT.
struct Occurrence {
    uid: String,
    date: NaiveDate,
    summary: String,
    description: String,
}

/// Generate the full .ics document for a collection of memorials.
///
/// Never emits an event dated before `now`. Event UIDs are derived from
/// the memorial id and rite key (plus the year, for annual events), so
/// repeated exports stay stable.
pub fn export_calendar(memorials: &[Memorial], now: NaiveDate) -> JesaResult<String> {
    let mut cal = Calendar::new();

    for occurrence in collect_occurrences(memorials, now) {
        cal.push(build_event(&occurrence, now));
    }

    let cal = cal.done();
    Ok(finalize(&cal.to_string()))
}

fn collect_occurrences(memorials: &[Memorial], now: NaiveDate) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();

    for memorial in memorials {
        // Fixed rites, from today onward
        for ritual in &RITUALS {
            let date = dates::ritual_date(memorial.death_date, ritual);
            if dates::days_between(now, date) >= 0 {
                occurrences.push(Occurrence {
                    uid: format!("{}-{}@jesa", memorial.id, ritual.key),
                    date,
                    summary: format!("{} — {}", ritual.korean, memorial.name),
                    description: format!(
                        "{} rite ({}) for {}. Passing: {}",
                        ritual.label, ritual.korean, memorial.name, memorial.death_date
                    ),
                });
            }
        }

        // Annual anniversaries (기일), strictly in the future
        for year in now.year()..=now.year() + ANNUAL_HORIZON_YEARS {
            let date = dates::anniversary_in(memorial.death_date, year);
            if date > now {
                occurrences.push(Occurrence {
                    uid: format!("{}-annual-{}@jesa", memorial.id, year),
                    date,
                    summary: format!("기일 — {}", memorial.name),
                    description: format!(
                        "Annual memorial (기일) for {}. Passing: {}",
                        memorial.name, memorial.death_date
                    ),
                });
            }
        }
    }

    occurrences
}

fn build_event(occurrence: &Occurrence, now: NaiveDate) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&occurrence.uid);
    ics_event.summary(&occurrence.summary);
    ics_event.description(&occurrence.description);

    // DTSTAMP is required by RFC 5545; derive it from `now` instead of the
    // wall clock so identical inputs produce identical output.
    let dtstamp = now.format("%Y%m%dT000000Z").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    // All-day event: DTEND is exclusive, so it ends the following day.
    add_date_property(&mut ics_event, "DTSTART", occurrence.date);
    add_date_property(&mut ics_event, "DTEND", occurrence.date + Days::new(1));

    let reminders = [
        (Duration::days(7), format!("7 days until {}", occurrence.summary)),
        (Duration::days(1), format!("Tomorrow: {}", occurrence.summary)),
        (Duration::zero(), format!("Today: {}", occurrence.summary)),
    ];
    for (before, message) in reminders {
        ics_event.alarm(Alarm::display(&message, Trigger::before_start(before)));
    }

    ics_event.done()
}

/// Add a date-only property with a VALUE=DATE parameter.
fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Clean up the icalendar crate's output:
/// - Replace its PRODID with ours, and add METHOD and X-WR-CALNAME lines
/// - Remove the generated UID and DTSTAMP inside VALARM sections (not
///   required by RFC 5545, and the UID would break determinism)
fn finalize(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut in_valarm = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:{}\r\n", PRODID));
            result.push_str("METHOD:PUBLISH\r\n");
            result.push_str(&format!("X-WR-CALNAME:{}\r\n", CALENDAR_NAME));
            continue;
        }

        if line == "BEGIN:VALARM" {
            in_valarm = true;
        } else if line == "END:VALARM" {
            in_valarm = false;
        }

        if in_valarm && (line.starts_with("DTSTAMP:") || line.starts_with("UID:")) {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
