use anyhow::Result;
use chrono::Local;
use jesa_core::dates;
use jesa_core::memorial::Memorial;
use jesa_core::ritual::{RitualStatus, RITUALS};
use owo_colors::OwoColorize;

use crate::render::{self, Render};

pub fn run(query: &str) -> Result<()> {
    let shrine = super::open_shrine()?;
    let now = Local::now().date_naive();

    let memorial = find(&shrine.memorials(), query)?;
    let since = dates::days_since(memorial.death_date, now);

    println!("{}", memorial.name.bold());
    println!("{}", render::format_date(memorial.death_date).dimmed());
    println!("{} days since passing", since);
    if let Some(ref photo) = memorial.photo {
        println!("{}", format!("photo: {}", photo).dimmed());
    }

    println!();
    println!("{}", "Memorial Rites".bold());
    for ritual in &RITUALS {
        let date = dates::ritual_date(memorial.death_date, ritual);
        let status = dates::ritual_status(date, now);

        let mut line = format!(
            "  {} ({})  {}  {}",
            ritual.label,
            ritual.korean,
            render::format_date(date),
            status.render()
        );
        if status != RitualStatus::Past {
            let days = dates::days_between(now, date);
            line.push_str(&format!(" {}", render::countdown(days).dimmed()));
        }
        println!("{}", line);
    }

    let annual = dates::next_annual_anniversary(memorial.death_date, now);
    let days = dates::days_between(now, annual);
    println!();
    println!("{}", "Annual Memorial (기일)".bold());
    println!(
        "  {}  {}",
        render::format_date(annual),
        render::countdown(days).dimmed()
    );

    Ok(())
}

/// Resolve a memorial by exact id, then by case-insensitive name match.
fn find(memorials: &[Memorial], query: &str) -> Result<Memorial> {
    if let Some(memorial) = memorials.iter().find(|m| m.id == query) {
        return Ok(memorial.clone());
    }

    let needle = query.to_lowercase();
    let matches: Vec<&Memorial> = memorials
        .iter()
        .filter(|m| m.name.to_lowercase().contains(&needle))
        .collect();

    match matches.as_slice() {
        [only] => Ok((*only).clone()),
        [] => anyhow::bail!("No memorial matches '{}'", query),
        several => {
            let names: Vec<String> = several
                .iter()
                .map(|m| format!("{} ({})", m.name, m.id))
                .collect();
            anyhow::bail!(
                "'{}' matches several memorials:\n  {}",
                query,
                names.join("\n  ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn memorials() -> Vec<Memorial> {
        let date = NaiveDate::from_ymd_opt(2022, 9, 22).unwrap();
        vec![
            Memorial::new("p-dad", "Dad", date, None),
            Memorial::new("p-mark", "Mark Ramsey", date, None),
            Memorial::new("p-marcus", "Marcus", date, None),
        ]
    }

    #[test]
    fn finds_by_exact_id() {
        let found = find(&memorials(), "p-dad").unwrap();
        assert_eq!(found.name, "Dad");
    }

    #[test]
    fn finds_by_unique_name_fragment() {
        let found = find(&memorials(), "ramsey").unwrap();
        assert_eq!(found.id, "p-mark");
    }

    #[test]
    fn ambiguous_name_is_an_error() {
        assert!(find(&memorials(), "mar").is_err());
    }

    #[test]
    fn unknown_query_is_an_error() {
        assert!(find(&memorials(), "nobody").is_err());
    }
}
