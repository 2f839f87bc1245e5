use anyhow::Result;
use owo_colors::OwoColorize;
use teamcal_core::config::TeamCalConfig;

pub fn run() -> Result<()> {
    let config_path = TeamCalConfig::config_path()?;
    let config = TeamCalConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());

    println!("{}", "Sync".bold());
    match &config.remote {
        Some(remote) => println!("  Remote:  {}", remote.database_url),
        None => println!("  Remote:  {}", "(local only)".dimmed()),
    }
    println!("  Rotation: {:?}", config.rotation);

    Ok(())
}
