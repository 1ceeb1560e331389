use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use vyra::config::Config;
use vyra::models::{AthleteProfile, DayPlan, WeeklyPlan, WorkoutTemplate};
use vyra::services::{today_workout, weekly_muscle_groups, weekly_stats};

use super::{ensure_onboarded, open_session};

#[derive(Args, Clone, Debug, Default)]
pub struct PlanArgs {
    /// Generate for the week containing this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Seed for workout selection, for a repeatable plan
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlanArgs {
    pub fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Generate the plan for the onboarded athlete, or None after printing the onboarding hint
fn load_plan(config: &Config, args: &PlanArgs) -> Result<Option<(AthleteProfile, WeeklyPlan)>> {
    let session = open_session()?;
    if !ensure_onboarded(&session) {
        return Ok(None);
    }

    let catalog = config.workout_catalog()?;
    let mut rng = args.rng();
    let plan = session.weekly_plan(args.today(), &catalog, &mut rng);
    Ok(Some((session.profile().clone(), plan)))
}

pub async fn show_plan(config: &Config, args: PlanArgs) -> Result<()> {
    let Some((_, plan)) = load_plan(config, &args)? else {
        return Ok(());
    };

    let week_end = plan.days.last().map(|d| d.date).unwrap_or(plan.week_start);
    println!(
        "{}",
        format!(
            "Week of {} - {}",
            plan.week_start.format(&config.ui.date_format),
            week_end.format(&config.ui.date_format)
        )
        .bold()
    );
    println!("────────────────────────────────────────────────────────");

    for day in &plan.days {
        println!("{}", format_day_line(day));
    }

    Ok(())
}

pub async fn show_today(config: &Config, args: PlanArgs) -> Result<()> {
    let Some((profile, plan)) = load_plan(config, &args)? else {
        return Ok(());
    };

    let phase = profile.training_phase;

    println!(
        "{} · {} phase",
        args.today().format(&config.ui.date_format).to_string().bold(),
        phase
    );
    println!("{}", phase.coach_message().italic());
    println!();

    match today_workout(&plan) {
        Some(workout) => print_workout(workout),
        None => {
            println!("{}", "Rest day".bold());
            println!("Recovery is part of training. Take it easy today.");
        }
    }

    Ok(())
}

pub async fn show_stats(config: &Config, args: PlanArgs) -> Result<()> {
    let Some((_, plan)) = load_plan(config, &args)? else {
        return Ok(());
    };

    let stats = weekly_stats(&plan);

    println!("{}", "Weekly Statistics".bold());
    println!();
    println!("  Workouts:       {}", stats.workout_count);
    println!(
        "  Total duration: {}",
        format_duration(stats.total_duration_minutes)
    );

    if !stats.sport_breakdown.is_empty() {
        println!();
        println!("  By sport:");
        for (sport, count) in &stats.sport_breakdown {
            println!("    {:<12} {}", sport.display_name(), count);
        }
    }

    let muscles = weekly_muscle_groups(&plan);
    if !muscles.is_empty() {
        println!();
        println!("  Muscle groups:  {}", muscles.join(", "));
    }

    Ok(())
}

fn format_day_line(day: &DayPlan) -> String {
    let marker = if day.is_today { "▶" } else { " " };
    let label = format!("{} {:<9} {:<7}", marker, day.day_name(), day.date_label);

    let line = match &day.workout {
        Some(w) => format!(
            "{} {:<26} {:>3} min  {:<9} {}",
            label,
            w.name,
            w.duration_minutes,
            w.intensity.to_string(),
            w.sport.display_name()
        ),
        None => format!("{} {}", label, "Rest day".dimmed()),
    };

    if day.is_today {
        line.green().bold().to_string()
    } else {
        line
    }
}

fn print_workout(workout: &WorkoutTemplate) {
    println!("{}", workout.name.bold());
    println!(
        "{} · {} min · {}",
        workout.sport.display_name(),
        workout.duration_minutes,
        workout.intensity
    );
    println!();
    println!("{}", workout.description);

    if !workout.muscle_groups.is_empty() {
        println!();
        println!("Focus: {}", workout.muscle_groups.join(", "));
    }

    if let Some(exercises) = &workout.exercises {
        println!();
        for exercise in exercises {
            println!("  • {}", exercise);
        }
    }
}

pub(crate) fn format_duration(minutes: u32) -> String {
    if minutes >= 60 {
        format!("{}h {}m", minutes / 60, minutes % 60)
    } else {
        format!("{} min", minutes)
    }
}
