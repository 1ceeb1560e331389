use anyhow::Result;
use dialoguer::Confirm;

use super::open_session;

pub async fn reset(force: bool) -> Result<()> {
    if !force {
        let confirmed = Confirm::new()
            .with_prompt("This deletes your profile and onboarding progress. Continue?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    let mut session = open_session()?;
    session.reset()?;

    println!("✓ Profile and onboarding state cleared");
    if session.has_api_key() {
        println!();
        println!("Your API key was kept. Use 'vyra key clear' to remove it.");
    }

    Ok(())
}
