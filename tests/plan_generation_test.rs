use chrono::{Duration, NaiveDate, Weekday};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use vyra::config::WorkoutCatalog;
use vyra::models::{
    AthleteProfile, DayPlan, Intensity, SkillLevel, Sport, WeeklyPlan, WorkoutTemplate,
};
use vyra::services::{generate_weekly_plan, today_workout, weekly_muscle_groups, weekly_stats};

/// Wednesday
fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

fn profile(days: u8, sports: &[(Sport, SkillLevel)]) -> AthleteProfile {
    let mut profile = AthleteProfile {
        weekly_training_days: days,
        ..Default::default()
    };
    for (sport, level) in sports {
        profile.add_sport(*sport, *level);
    }
    profile
}

fn generate(profile: &AthleteProfile, today: NaiveDate, seed: u64) -> WeeklyPlan {
    let catalog = WorkoutCatalog::builtin().unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    generate_weekly_plan(profile, today, &catalog, &mut rng)
}

fn rest_pattern(plan: &WeeklyPlan) -> Vec<bool> {
    plan.days.iter().map(|d| d.is_rest_day).collect()
}

fn template(id: &str, sport: Sport, minutes: u32, muscles: &[&str]) -> WorkoutTemplate {
    WorkoutTemplate {
        id: id.to_string(),
        name: id.to_string(),
        sport,
        duration_minutes: minutes,
        intensity: Intensity::Moderate,
        description: String::new(),
        muscle_groups: muscles.iter().map(|m| m.to_string()).collect(),
        exercises: None,
    }
}

#[test]
fn test_plan_has_seven_days_monday_first() {
    let plan = generate(&profile(4, &[(Sport::Running, SkillLevel::Beginner)]), wednesday(), 1);

    let days: Vec<Weekday> = plan.days.iter().map(|d| d.day).collect();
    assert_eq!(
        days,
        vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun
        ]
    );
    assert_eq!(plan.week_start, NaiveDate::from_ymd_opt(2024, 5, 13).unwrap());
    assert!(plan.days[2].is_today);
    assert_eq!(plan.days.iter().filter(|d| d.is_today).count(), 1);
}

#[test]
fn test_empty_sports_with_four_days_only_recovery() {
    let plan = generate(&profile(4, &[]), wednesday(), 1);

    for day in &plan.days[..6] {
        assert!(day.is_rest_day, "{} should be rest", day.day_name());
    }
    let sunday = plan.days[6].workout.as_ref().unwrap();
    assert_eq!(sunday.name, "Active Recovery");
    assert_eq!(sunday.intensity, Intensity::Recovery);
    assert_eq!(sunday.sport, Sport::Yoga);
    assert_eq!(sunday.duration_minutes, 20);
}

#[test]
fn test_empty_sports_with_three_days_all_rest() {
    let plan = generate(&profile(3, &[]), wednesday(), 1);
    assert!(plan.days.iter().all(|d| d.is_rest_day));
    assert!(today_workout(&plan).is_none());
}

#[test]
fn test_three_days_running_beginner() {
    let plan = generate(&profile(3, &[(Sport::Running, SkillLevel::Beginner)]), wednesday(), 9);

    assert_eq!(
        rest_pattern(&plan),
        vec![false, true, false, true, false, true, true]
    );

    let catalog = WorkoutCatalog::builtin().unwrap();
    let allowed = catalog.templates(Sport::Running, SkillLevel::Beginner);
    for day in plan.training_days() {
        let workout = day.workout.as_ref().unwrap();
        assert_eq!(workout.sport, Sport::Running);
        assert!(allowed.contains(workout));
    }
}

#[test]
fn test_two_and_three_days_share_a_schedule() {
    let sports = [(Sport::Gym, SkillLevel::Moderate)];
    let two = generate(&profile(2, &sports), wednesday(), 3);
    let three = generate(&profile(3, &sports), wednesday(), 3);
    assert_eq!(rest_pattern(&two), rest_pattern(&three));
}

#[test]
fn test_seven_days_rotate_sports_with_sunday_recovery() {
    let plan = generate(
        &profile(
            7,
            &[(Sport::Gym, SkillLevel::Advanced), (Sport::Yoga, SkillLevel::Beginner)],
        ),
        wednesday(),
        5,
    );

    let sports: Vec<Sport> = plan
        .days
        .iter()
        .map(|d| d.workout.as_ref().unwrap().sport)
        .collect();
    assert_eq!(
        sports,
        vec![
            Sport::Gym,
            Sport::Yoga,
            Sport::Gym,
            Sport::Yoga,
            Sport::Gym,
            Sport::Yoga,
            Sport::Yoga
        ]
    );
    assert_eq!(plan.days[0].workout.as_ref().unwrap().id, "gym-a-1");
    assert_eq!(plan.days[1].workout.as_ref().unwrap().id, "yoga-b-1");
    assert_eq!(plan.days[6].workout.as_ref().unwrap().id, "recovery");
}

#[test]
fn test_rotation_uses_weekday_index() {
    // Mon/Wed/Fri with three sports: indices 0, 2, 4 mod 3 -> 0, 2, 1
    let plan = generate(
        &profile(
            3,
            &[
                (Sport::Running, SkillLevel::Beginner),
                (Sport::Swimming, SkillLevel::Beginner),
                (Sport::Boxing, SkillLevel::Beginner),
            ],
        ),
        wednesday(),
        2,
    );

    let sports: Vec<Sport> = plan
        .training_days()
        .map(|d| d.workout.as_ref().unwrap().sport)
        .collect();
    assert_eq!(sports, vec![Sport::Running, Sport::Boxing, Sport::Swimming]);
}

#[test]
fn test_five_days_is_monday_to_friday() {
    let plan = generate(&profile(5, &[(Sport::Tennis, SkillLevel::Moderate)]), wednesday(), 4);
    assert_eq!(
        rest_pattern(&plan),
        vec![false, false, false, false, false, true, false]
    );
    assert_eq!(plan.days[6].workout.as_ref().unwrap().id, "recovery");
}

#[test]
fn test_same_seed_same_plan() {
    let athlete = profile(6, &[(Sport::Running, SkillLevel::Advanced)]);
    assert_eq!(generate(&athlete, wednesday(), 42), generate(&athlete, wednesday(), 42));
}

#[test]
fn test_missing_level_falls_back_to_beginner() {
    let mut catalog = WorkoutCatalog::new(template("recovery", Sport::Yoga, 20, &["core"]));
    catalog.insert(
        SkillLevel::Beginner,
        template("soccer-basic", Sport::Soccer, 30, &["legs"]),
    );

    let mut rng = StdRng::seed_from_u64(0);
    let plan = generate_weekly_plan(
        &profile(3, &[(Sport::Soccer, SkillLevel::Advanced)]),
        wednesday(),
        &catalog,
        &mut rng,
    );

    for day in plan.training_days() {
        assert_eq!(day.workout.as_ref().unwrap().id, "soccer-basic");
    }
}

#[test]
fn test_sport_absent_from_catalog_gets_placeholder() {
    let catalog = WorkoutCatalog::new(template("recovery", Sport::Yoga, 20, &["core"]));
    let mut rng = StdRng::seed_from_u64(0);
    let plan = generate_weekly_plan(
        &profile(4, &[(Sport::Basketball, SkillLevel::Moderate)]),
        wednesday(),
        &catalog,
        &mut rng,
    );

    let monday = plan.days[0].workout.as_ref().unwrap();
    assert_eq!(monday.name, "Basketball Training");
    assert_eq!(monday.duration_minutes, 45);
    assert_eq!(monday.intensity, Intensity::Moderate);
}

#[test]
fn test_weekly_stats_and_muscle_groups() {
    let start = NaiveDate::from_ymd_opt(2024, 5, 13).unwrap();
    let workouts = [
        Some(template("a", Sport::Running, 30, &["legs", "cardio"])),
        None,
        Some(template("b", Sport::Gym, 45, &["full-body"])),
        None,
        Some(template("c", Sport::Running, 60, &["legs", "core"])),
        None,
        None,
    ];
    let days = workouts
        .into_iter()
        .enumerate()
        .map(|(i, w)| DayPlan::new(start + Duration::days(i as i64), w, start))
        .collect();
    let plan = WeeklyPlan {
        week_start: start,
        days,
    };

    let stats = weekly_stats(&plan);
    assert_eq!(stats.total_duration_minutes, 135);
    assert_eq!(stats.workout_count, 3);
    assert_eq!(stats.sport_breakdown.get(&Sport::Running), Some(&2));
    assert_eq!(stats.sport_breakdown.get(&Sport::Gym), Some(&1));

    assert_eq!(
        weekly_muscle_groups(&plan),
        vec!["legs", "cardio", "full-body", "core"]
    );
    assert_eq!(today_workout(&plan).unwrap().id, "a");
}

proptest! {
    #[test]
    fn prop_plan_shape_holds_for_any_input(
        days in 0u8..=12,
        offset in 0i64..3650,
        seed in any::<u64>(),
        sport_count in 0usize..=4,
    ) {
        let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(offset);
        let sports: Vec<(Sport, SkillLevel)> = Sport::ALL
            .iter()
            .take(sport_count)
            .map(|s| (*s, SkillLevel::Moderate))
            .collect();
        let athlete = profile(days, &sports);

        let plan = generate(&athlete, today, seed);
        let other = generate(&athlete, today, seed.wrapping_add(1));

        prop_assert_eq!(plan.days.len(), 7);
        prop_assert_eq!(plan.days[0].day, Weekday::Mon);
        prop_assert_eq!(plan.days.iter().filter(|d| d.is_today).count(), 1);
        prop_assert!(plan.days.iter().any(|d| d.is_today && d.date == today));
        prop_assert_eq!(rest_pattern(&plan), rest_pattern(&other));
        for day in &plan.days {
            prop_assert_eq!(day.is_rest_day, day.workout.is_none());
        }
    }
}
