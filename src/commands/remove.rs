use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn run(id: &str, force: bool) -> Result<()> {
    let mut shrine = super::open_shrine()?;
    let memorial = shrine.get(id)?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove memorial for {}?", memorial.name))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    shrine.remove(id)?;
    println!("{}", format!("Removed memorial for {}", memorial.name).green());
    Ok(())
}
