use anyhow::Result;
use jesa_core::memorial::Memorial;
use jesa_core::shrine::MemorialPatch;
use owo_colors::OwoColorize;

pub fn run(
    id: &str,
    name: Option<String>,
    date: Option<&str>,
    photo: Option<String>,
) -> Result<()> {
    if name.is_none() && date.is_none() && photo.is_none() {
        anyhow::bail!("Nothing to change. Pass --name, --date, or --photo.");
    }

    let death_date = date.map(Memorial::parse_death_date).transpose()?;
    let mut shrine = super::open_shrine()?;

    let updated = shrine.update(
        id,
        MemorialPatch {
            name,
            death_date,
            photo,
        },
    )?;

    println!("{}", format!("Updated memorial for {}", updated.name).green());
    Ok(())
}
