use anyhow::Result;
use std::path::Path;
use std::process::Command;

use vyra::config::Config;

pub async fn show_config(config_file: &Path) -> Result<()> {
    let config = Config::load_from(config_file.to_path_buf())?;
    let config_str = toml::to_string_pretty(&config)?;

    println!("Current Configuration");
    println!("────────────────────────────────");
    println!();
    println!("{}", config_str);

    Ok(())
}

pub async fn edit_config(config_file: &Path) -> Result<()> {
    // Ensure config file exists
    if !config_file.exists() {
        Config::default().save_to(config_file.to_path_buf())?;
    }

    // Open in default editor
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

    Command::new(editor).arg(config_file).status()?;

    // Reject edits that no longer parse
    Config::load_from(config_file.to_path_buf())?;
    println!("✓ Configuration saved!");

    Ok(())
}

pub async fn init_config(config_file: &Path, force: bool) -> Result<()> {
    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    Config::default().save_to(config_file.to_path_buf())?;

    println!("✓ Configuration initialized at: {}", config_file.display());
    println!();
    println!("You can edit it with: vyra config edit");

    Ok(())
}
