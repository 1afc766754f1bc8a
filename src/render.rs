//! Terminal rendering for jesa types.
//!
//! Extension traits that add colored output to core types using owo_colors.

use chrono::NaiveDate;
use jesa_core::ritual::{Ritual, RitualStatus};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for RitualStatus {
    fn render(&self) -> String {
        match self {
            RitualStatus::Past => "observed".dimmed().to_string(),
            RitualStatus::Imminent => "imminent".yellow().bold().to_string(),
            RitualStatus::Upcoming => "upcoming".green().to_string(),
        }
    }
}

/// Ritual badge for the card view, colored by status.
pub fn badge(ritual: &Ritual, status: RitualStatus) -> String {
    let label = format!("[{}]", ritual.label);
    match status {
        RitualStatus::Past => label.dimmed().to_string(),
        RitualStatus::Imminent => label.yellow().bold().to_string(),
        RitualStatus::Upcoming => label.green().to_string(),
    }
}

/// "today", "in 1 day", "in N days"
pub fn countdown(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "in 1 day".to_string(),
        n => format!("in {} days", n),
    }
}

/// Human-readable date, e.g. "February 18, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
