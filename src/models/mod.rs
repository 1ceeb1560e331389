pub mod athlete;
pub mod chat;
pub mod plan;
pub mod sport;
pub mod workout;

pub use athlete::{
    AthleteProfile, Gender, SportSelection, TrainingPhase, MAX_WEEKLY_TRAINING_DAYS,
    MIN_WEEKLY_TRAINING_DAYS,
};
pub use chat::{ChatMessage, ChatRole};
pub use plan::{DayPlan, WeeklyPlan, WeeklyStats};
pub use sport::{Intensity, SkillLevel, Sport};
pub use workout::WorkoutTemplate;
