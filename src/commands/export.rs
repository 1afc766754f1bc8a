use anyhow::{Context, Result};
use chrono::Local;
use jesa_core::ics::export_calendar;
use owo_colors::OwoColorize;

pub fn run(out: &str) -> Result<()> {
    let shrine = super::open_shrine()?;
    let now = Local::now().date_naive();

    let ics = export_calendar(&shrine.memorials(), now)?;

    if out == "-" {
        print!("{}", ics);
        return Ok(());
    }

    std::fs::write(out, &ics).with_context(|| format!("Failed to write {}", out))?;
    println!("{}", format!("Exported to {}", out).green());
    Ok(())
}
