use chrono::{Datelike, Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::WorkoutCatalog;
use crate::models::{
    AthleteProfile, DayPlan, SportSelection, WeeklyPlan, WeeklyStats, WorkoutTemplate,
};

const SUNDAY: usize = 6;

/// Weekday indices (0 = Monday) that carry a workout for the given weekly target.
///
/// Up to three days always maps to Monday/Wednesday/Friday. Larger targets take
/// the first N days of Monday–Friday or Monday–Saturday.
pub fn training_day_indices(weekly_training_days: u8) -> Vec<usize> {
    match weekly_training_days {
        0..=3 => vec![0, 2, 4],
        4..=5 => (0..5).take(weekly_training_days as usize).collect(),
        _ => (0..6).take(weekly_training_days as usize).collect(),
    }
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Builds Monday-to-Sunday schedules from an athlete profile and a workout catalog
pub struct PlanGenerationService<'a> {
    catalog: &'a WorkoutCatalog,
}

impl<'a> PlanGenerationService<'a> {
    pub fn new(catalog: &'a WorkoutCatalog) -> Self {
        Self { catalog }
    }

    /// Generate the week containing `today`.
    ///
    /// The only non-deterministic step is the choice between several templates
    /// for the same sport and level, which draws from `rng`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        profile: &AthleteProfile,
        today: NaiveDate,
        rng: &mut R,
    ) -> WeeklyPlan {
        let start = week_start(today);
        let training_days = training_day_indices(profile.weekly_training_days);

        tracing::debug!(
            "Generating plan for week of {} ({} sports, {} training days)",
            start,
            profile.sports.len(),
            training_days.len()
        );

        let days = (0..7usize)
            .map(|i| {
                let date = start + Duration::days(i as i64);

                let workout = if training_days.contains(&i) && !profile.sports.is_empty() {
                    let selection = profile.sports[i % profile.sports.len()];
                    Some(self.pick_workout(selection, rng))
                } else if i == SUNDAY && profile.weekly_training_days >= 4 {
                    Some(self.catalog.recovery().clone())
                } else {
                    None
                };

                DayPlan::new(date, workout, today)
            })
            .collect();

        WeeklyPlan {
            week_start: start,
            days,
        }
    }

    /// Random template for the selection, or a generic session when the sport has none
    fn pick_workout<R: Rng + ?Sized>(
        &self,
        selection: SportSelection,
        rng: &mut R,
    ) -> WorkoutTemplate {
        let candidates = self
            .catalog
            .candidates(selection.sport, selection.skill_level);

        match candidates.choose(rng) {
            Some(template) => template.clone(),
            None => {
                tracing::warn!(
                    "No workouts in catalog for {}, using placeholder",
                    selection.sport
                );
                WorkoutTemplate::placeholder(selection.sport)
            }
        }
    }
}

/// Convenience wrapper around [`PlanGenerationService::generate`]
pub fn generate_weekly_plan<R: Rng + ?Sized>(
    profile: &AthleteProfile,
    today: NaiveDate,
    catalog: &WorkoutCatalog,
    rng: &mut R,
) -> WeeklyPlan {
    PlanGenerationService::new(catalog).generate(profile, today, rng)
}

/// Workout of the day flagged as today, if it is not a rest day
pub fn today_workout(plan: &WeeklyPlan) -> Option<&WorkoutTemplate> {
    plan.today().and_then(|day| day.workout.as_ref())
}

/// Every muscle group trained during the week, in first-seen order
pub fn weekly_muscle_groups(plan: &WeeklyPlan) -> Vec<String> {
    let mut muscles: Vec<String> = Vec::new();
    for workout in plan.days.iter().filter_map(|d| d.workout.as_ref()) {
        for muscle in &workout.muscle_groups {
            if !muscles.contains(muscle) {
                muscles.push(muscle.clone());
            }
        }
    }
    muscles
}

pub fn weekly_stats(plan: &WeeklyPlan) -> WeeklyStats {
    let mut stats = WeeklyStats::default();

    for workout in plan.days.iter().filter_map(|d| d.workout.as_ref()) {
        stats.workout_count += 1;
        stats.total_duration_minutes += workout.duration_minutes;
        *stats.sport_breakdown.entry(workout.sport).or_insert(0) += 1;
    }

    stats
}
