use anyhow::Result;
use jesa_core::prayer::Prayer;
use owo_colors::OwoColorize;

pub fn list() -> Result<()> {
    let mut shrine = super::open_shrine()?;
    let prayers = shrine.prayers()?;

    if prayers.is_empty() {
        println!("{}", "No prayer intentions yet.".dimmed());
        return Ok(());
    }

    for prayer in prayers {
        match prayer.detail {
            Some(ref detail) => {
                println!("{} {}", prayer.category.bold(), detail.dimmed());
            }
            None => println!("{}", prayer.category.bold()),
        }
        println!("  {}", format!("id: {}", prayer.id).dimmed());
    }

    Ok(())
}

pub fn add(category: String, detail: Option<String>) -> Result<()> {
    let mut shrine = super::open_shrine()?;
    let prayer = Prayer::create(category, detail);
    shrine.add_prayer(prayer.clone())?;

    println!("{}", format!("Added prayer: {}", prayer.category).green());
    println!("  {}", format!("id: {}", prayer.id).dimmed());
    Ok(())
}

pub fn remove(id: &str) -> Result<()> {
    let mut shrine = super::open_shrine()?;
    shrine.remove_prayer(id)?;

    println!("{}", "Removed prayer intention".green());
    Ok(())
}
