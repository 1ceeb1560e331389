// Business logic services

pub mod athlete_session;
pub mod coach_chat_service;
pub mod plan_generation_service;

pub use athlete_session::AthleteSession;
pub use coach_chat_service::Conversation;
pub use plan_generation_service::{
    generate_weekly_plan, today_workout, weekly_muscle_groups, weekly_stats,
    PlanGenerationService,
};
