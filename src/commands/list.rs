use anyhow::Result;
use chrono::Local;
use jesa_core::dates;
use jesa_core::ritual::{RitualStatus, RITUALS};
use owo_colors::OwoColorize;

use crate::render::{self, badge};

pub fn run() -> Result<()> {
    let shrine = super::open_shrine()?;
    let now = Local::now().date_naive();
    let memorials = shrine.memorials();

    if memorials.is_empty() {
        println!("{}", "No memorials yet.".dimmed());
        println!("{}", "Add a loved one with: jesa add <name> --date YYYY-MM-DD".dimmed());
        return Ok(());
    }

    // Imminent rites first
    let mut alerted = false;
    for memorial in &memorials {
        for ritual in &RITUALS {
            let date = dates::ritual_date(memorial.death_date, ritual);
            if dates::ritual_status(date, now) == RitualStatus::Imminent {
                let days = dates::days_between(now, date);
                println!(
                    "{} {} ({}) is {} ({})",
                    memorial.name.bold(),
                    ritual.label,
                    ritual.korean,
                    render::countdown(days).yellow(),
                    render::format_date(date)
                );
                alerted = true;
            }
        }
    }
    if alerted {
        println!();
    }

    for memorial in &memorials {
        let badges: Vec<String> = RITUALS
            .iter()
            .map(|ritual| {
                let date = dates::ritual_date(memorial.death_date, ritual);
                badge(ritual, dates::ritual_status(date, now))
            })
            .collect();

        let since = dates::days_since(memorial.death_date, now);
        println!("{}", memorial.name.bold());
        println!(
            "  {} {}",
            render::format_date(memorial.death_date),
            format!("({} days ago)", since).dimmed()
        );
        println!("  {}", badges.join(" "));
        println!("  {}", format!("id: {}", memorial.id).dimmed());
        println!();
    }

    Ok(())
}
