//! Init command - create the user config file

use algokit::config::UserConfig;
use anyhow::Result;
use console::style;

pub fn run() -> Result<()> {
    let path = UserConfig::init_user_config()?;
    println!(
        "{} Config file at {}",
        style("✓").green(),
        style(path.display()).cyan()
    );
    Ok(())
}
