use anyhow::Result;
use jesa_core::memorial::Memorial;
use owo_colors::OwoColorize;

pub fn run(name: String, date: &str, photo: Option<String>) -> Result<()> {
    let death_date = Memorial::parse_death_date(date)?;
    let mut shrine = super::open_shrine()?;

    let memorial = Memorial::create(name, death_date, photo);
    shrine.add(memorial.clone())?;

    println!("{}", format!("Added memorial for {}", memorial.name).green());
    println!("  {}", format!("id: {}", memorial.id).dimmed());
    Ok(())
}
