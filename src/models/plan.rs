use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::sport::Sport;
use super::workout::WorkoutTemplate;

/// One slot of a generated week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: Weekday,
    pub date: NaiveDate,
    /// Short label such as "Oct 18"
    pub date_label: String,
    pub workout: Option<WorkoutTemplate>,
    pub is_rest_day: bool,
    pub is_today: bool,
}

impl DayPlan {
    pub fn new(date: NaiveDate, workout: Option<WorkoutTemplate>, today: NaiveDate) -> Self {
        Self {
            day: chrono::Datelike::weekday(&date),
            date,
            date_label: date.format("%b %-d").to_string(),
            is_rest_day: workout.is_none(),
            workout,
            is_today: date == today,
        }
    }

    /// Full English weekday name
    pub fn day_name(&self) -> &'static str {
        match self.day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

/// Monday-to-Sunday schedule, always seven entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub week_start: NaiveDate,
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    pub fn today(&self) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.is_today)
    }

    pub fn training_days(&self) -> impl Iterator<Item = &DayPlan> {
        self.days.iter().filter(|d| !d.is_rest_day)
    }
}

/// Aggregate numbers for a generated week
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub workout_count: u32,
    pub total_duration_minutes: u32,
    pub sport_breakdown: BTreeMap<Sport, u32>,
}
