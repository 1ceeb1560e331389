use anyhow::{bail, Result};
use clap::Args;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use vyra::models::{
    AthleteProfile, Gender, SkillLevel, Sport, MAX_WEEKLY_TRAINING_DAYS,
    MIN_WEEKLY_TRAINING_DAYS,
};

use super::open_session;
use super::profile::is_positive_measure;

#[derive(Args)]
pub struct OnboardCommand {
    /// Start over even if onboarding is already complete
    #[arg(short, long)]
    force: bool,

    /// First name; skips the interactive prompts when given
    #[arg(long)]
    first_name: Option<String>,

    /// Sport to train as SPORT[:LEVEL], repeatable (e.g. running:moderate)
    #[arg(long = "sport", requires = "first_name")]
    sports: Vec<String>,

    /// Training days per week
    #[arg(long, requires = "first_name", allow_hyphen_values = true)]
    days: Option<i64>,

    /// Primary goal
    #[arg(long, requires = "first_name")]
    goal: Option<String>,
}

impl OnboardCommand {
    pub async fn execute(self) -> Result<()> {
        let mut session = open_session()?;

        if let Some(first_name) = &self.first_name {
            if session.is_onboarded() && !self.force {
                println!("Your profile is already set up. Use --force to start over.");
                return Ok(());
            }

            let profile = self.profile_from_args(first_name)?;
            session.complete_onboarding(profile)?;
            println!("✓ You're all set, {}!", session.profile().full_name());
            return Ok(());
        }

        let theme = ColorfulTheme::default();

        if session.is_onboarded() && !self.force {
            let restart = Confirm::with_theme(&theme)
                .with_prompt("Your profile is already set up. Start over?")
                .default(false)
                .interact()?;

            if !restart {
                println!("Keeping your current profile.");
                return Ok(());
            }
        }

        println!("{}", style("Welcome to Vyra").bold().cyan());
        println!("Let's set up your athlete profile.");
        println!();

        let profile = prompt_profile(&theme)?;
        session.complete_onboarding(profile)?;

        println!();
        println!("✓ You're all set, {}!", session.profile().full_name());
        println!();
        println!("Run 'vyra plan' to see your week or 'vyra chat' to talk to your coach.");

        Ok(())
    }

    fn profile_from_args(&self, first_name: &str) -> Result<AthleteProfile> {
        let first_name = first_name.trim();
        if first_name.is_empty() {
            bail!("First name cannot be empty");
        }
        if self.sports.is_empty() {
            bail!("Pick at least one sport with --sport");
        }

        let mut profile = AthleteProfile {
            first_name: first_name.to_string(),
            ..Default::default()
        };

        for spec in &self.sports {
            let (sport, level) = parse_sport_spec(spec)?;
            profile.add_sport(sport, level);
        }
        if let Some(days) = self.days {
            profile.set_weekly_training_days(days);
        }
        if let Some(goal) = &self.goal {
            profile.primary_goal = goal.trim().to_string();
        }

        Ok(profile)
    }
}

/// Parse `running` or `running:advanced`; the level defaults to beginner
fn parse_sport_spec(spec: &str) -> Result<(Sport, SkillLevel)> {
    match spec.split_once(':') {
        Some((sport, level)) => Ok((sport.parse()?, level.parse()?)),
        None => Ok((spec.parse()?, SkillLevel::Beginner)),
    }
}

fn prompt_profile(theme: &ColorfulTheme) -> Result<AthleteProfile> {
    let mut profile = AthleteProfile::default();

    profile.first_name = Input::with_theme(theme)
        .with_prompt("First name")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Please enter your first name")
            } else {
                Ok(())
            }
        })
        .interact_text()?
        .trim()
        .to_string();

    profile.last_name = Input::<String>::with_theme(theme)
        .with_prompt("Last name")
        .allow_empty(true)
        .interact_text()?
        .trim()
        .to_string();

    let genders = [Gender::Male, Gender::Female, Gender::Other];
    let gender = Select::with_theme(theme)
        .with_prompt("Gender")
        .items(&genders)
        .default(0)
        .interact()?;
    profile.gender = genders[gender];

    profile.weight_kg = Input::with_theme(theme)
        .with_prompt("Weight (kg)")
        .default(profile.weight_kg)
        .validate_with(|kg: &f64| -> Result<(), &str> {
            if is_positive_measure(*kg) {
                Ok(())
            } else {
                Err("Weight must be positive")
            }
        })
        .interact_text()?;

    profile.height_cm = Input::with_theme(theme)
        .with_prompt("Height (cm)")
        .default(profile.height_cm)
        .validate_with(|cm: &f64| -> Result<(), &str> {
            if is_positive_measure(*cm) {
                Ok(())
            } else {
                Err("Height must be positive")
            }
        })
        .interact_text()?;

    let sport_names: Vec<&str> = Sport::ALL.iter().map(|s| s.display_name()).collect();
    let selected = loop {
        let selected = MultiSelect::with_theme(theme)
            .with_prompt("Which sports do you train? (space to select, enter to confirm)")
            .items(&sport_names)
            .interact()?;

        if !selected.is_empty() {
            break selected;
        }
        println!("Pick at least one sport.");
    };

    for index in selected {
        let sport = Sport::ALL[index];
        let level = Select::with_theme(theme)
            .with_prompt(format!("Your level in {}", sport.display_name()))
            .items(&SkillLevel::ALL)
            .default(0)
            .interact()?;
        profile.add_sport(sport, SkillLevel::ALL[level]);
    }

    let day_options: Vec<u8> = (MIN_WEEKLY_TRAINING_DAYS..=MAX_WEEKLY_TRAINING_DAYS).collect();
    let default_days = day_options
        .iter()
        .position(|d| *d == profile.weekly_training_days)
        .unwrap_or(0);
    let days = Select::with_theme(theme)
        .with_prompt("Training days per week")
        .items(&day_options)
        .default(default_days)
        .interact()?;
    profile.set_weekly_training_days(i64::from(day_options[days]));

    profile.primary_goal = Input::<String>::with_theme(theme)
        .with_prompt("Primary goal (e.g. run a 10K, build strength)")
        .allow_empty(true)
        .interact_text()?
        .trim()
        .to_string();

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sport_spec() -> Result<()> {
        assert_eq!(parse_sport_spec("running")?, (Sport::Running, SkillLevel::Beginner));
        assert_eq!(
            parse_sport_spec("CrossFit:advanced")?,
            (Sport::Crossfit, SkillLevel::Advanced)
        );
        assert!(parse_sport_spec("curling").is_err());
        assert!(parse_sport_spec("running:expert").is_err());
        Ok(())
    }
}
