use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use colored::Colorize;

use vyra::models::{AthleteProfile, SkillLevel, Sport};

use super::{ensure_onboarded, open_session};

/// Profile fields editable with `vyra profile set`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Gender,
    Weight,
    Height,
    Goal,
    Days,
    Phase,
}

/// Finite and above zero; NaN and infinity cannot be stored as JSON numbers
pub(crate) fn is_positive_measure(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Apply a textual value to one profile field
pub fn apply_field(profile: &mut AthleteProfile, field: ProfileField, value: &str) -> Result<()> {
    let value = value.trim();

    match field {
        ProfileField::FirstName => profile.first_name = value.to_string(),
        ProfileField::LastName => profile.last_name = value.to_string(),
        ProfileField::Email => {
            profile.email = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }
        ProfileField::Gender => profile.gender = value.parse()?,
        ProfileField::Weight => {
            let kg: f64 = value.parse().context("Weight must be a number in kg")?;
            if !is_positive_measure(kg) {
                bail!("Weight must be positive");
            }
            profile.weight_kg = kg;
        }
        ProfileField::Height => {
            let cm: f64 = value.parse().context("Height must be a number in cm")?;
            if !is_positive_measure(cm) {
                bail!("Height must be positive");
            }
            profile.height_cm = cm;
        }
        ProfileField::Goal => profile.primary_goal = value.to_string(),
        ProfileField::Days => {
            let days: i64 = value.parse().context("Days must be a whole number")?;
            profile.set_weekly_training_days(days);
        }
        ProfileField::Phase => profile.training_phase = value.parse()?,
    }

    Ok(())
}

pub async fn show_profile() -> Result<()> {
    let session = open_session()?;
    if !ensure_onboarded(&session) {
        return Ok(());
    }

    let profile = session.profile();

    println!("{}", "Athlete Profile".bold());
    println!("────────────────────────────────");
    println!("  Name:          {}", profile.full_name());
    if let Some(email) = &profile.email {
        println!("  Email:         {}", email);
    }
    println!("  Gender:        {}", profile.gender);
    println!("  Weight:        {:.1} kg", profile.weight_kg);
    println!("  Height:        {:.0} cm", profile.height_cm);
    if !profile.primary_goal.is_empty() {
        println!("  Goal:          {}", profile.primary_goal);
    }
    println!("  Training days: {} per week", profile.weekly_training_days);
    println!(
        "  Phase:         {} ({})",
        profile.training_phase,
        profile.training_phase.coach_message()
    );
    println!();

    if profile.sports.is_empty() {
        println!("No sports selected. Add one with 'vyra profile add-sport <sport>'.");
    } else {
        println!("{}", "Sports".bold());
        for selection in &profile.sports {
            println!(
                "  {:<12} {}",
                selection.sport.display_name(),
                selection.skill_level
            );
        }
        println!();
        println!(
            "Muscle groups trained: {}",
            profile.trained_muscle_groups().join(", ")
        );
    }

    Ok(())
}

pub async fn set_field(field: ProfileField, value: &str) -> Result<()> {
    let mut session = open_session()?;
    if !ensure_onboarded(&session) {
        return Ok(());
    }

    let mut result = Ok(());
    session.update_profile(|profile| result = apply_field(profile, field, value));
    if let Err(e) = result {
        println!("✗ {}", e);
        return Err(e);
    }

    session.save_profile()?;
    println!("✓ Profile updated");

    if field == ProfileField::Days {
        println!(
            "  Training days: {} per week",
            session.profile().weekly_training_days
        );
    }

    Ok(())
}

pub async fn add_sport(sport: &str, level: &str) -> Result<()> {
    let sport: Sport = sport.parse()?;
    let level: SkillLevel = level.parse()?;

    let mut session = open_session()?;
    if !ensure_onboarded(&session) {
        return Ok(());
    }

    session.update_profile(|profile| profile.add_sport(sport, level));
    session.save_profile()?;

    println!("✓ {} ({}) is in your rotation", sport.display_name(), level);
    Ok(())
}

pub async fn remove_sport(sport: &str) -> Result<()> {
    let sport: Sport = sport.parse()?;

    let mut session = open_session()?;
    if !ensure_onboarded(&session) {
        return Ok(());
    }

    let mut removed = false;
    session.update_profile(|profile| removed = profile.remove_sport(sport));

    if removed {
        session.save_profile()?;
        println!("✓ Removed {}", sport.display_name());
    } else {
        println!("{} is not in your profile", sport.display_name());
    }

    Ok(())
}
