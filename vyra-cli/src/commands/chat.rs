use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use vyra::api::ChatClient;
use vyra::config::Config;
use vyra::services::Conversation;

use super::{ensure_onboarded, open_session};

#[derive(Args)]
pub struct ChatCommand {}

impl ChatCommand {
    pub async fn execute(self, config: Config) -> Result<()> {
        let session = open_session()?;
        if !ensure_onboarded(&session) {
            return Ok(());
        }

        let Some(api_key) = session.api_key() else {
            println!("No OpenAI API key configured.");
            println!();
            println!("Use 'vyra key set' to add one.");
            return Ok(());
        };

        let client = ChatClient::new(config.chat.clone(), api_key)?;
        let mut conversation = Conversation::new(session.profile());

        println!("{} {}", "Coach:".cyan().bold(), conversation.greeting().content);
        println!("{}", "(type 'exit' to leave)".dimmed());
        println!();

        loop {
            let input: String = Input::new()
                .with_prompt("You")
                .allow_empty(true)
                .interact_text()?;

            let input = input.trim();
            if input.is_empty() {
                continue;
            }
            if matches!(input, "exit" | "quit") {
                break;
            }

            let spinner = thinking_spinner()?;
            let result = conversation.send(&client, input).await;
            spinner.finish_and_clear();

            match result {
                Ok(reply) => println!("{} {}", "Coach:".cyan().bold(), reply),
                Err(_) => {
                    // The apology is already in the transcript
                    if let Some(last) = conversation.messages().last() {
                        println!("{} {}", "Coach:".red().bold(), last.content);
                    }
                }
            }
            println!();
        }

        Ok(())
    }
}

fn thinking_spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Coach is thinking...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}
