use serde::{Deserialize, Deserializer, Serialize};

use super::sport::{Intensity, SkillLevel, Sport};

pub const MIN_WEEKLY_TRAINING_DAYS: u8 = 2;
pub const MAX_WEEKLY_TRAINING_DAYS: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(anyhow::anyhow!("Invalid gender: {}", s)),
        }
    }
}

/// Macro-cycle label shown alongside the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingPhase {
    Base,
    Build,
    Peak,
    Recovery,
}

impl TrainingPhase {
    /// Short coaching line for the phase
    pub fn coach_message(&self) -> &'static str {
        match self {
            TrainingPhase::Base => {
                "Building your foundation. Keep efforts consistent and trust the process."
            }
            TrainingPhase::Build => "Time to push your limits. Progressive overload is the key.",
            TrainingPhase::Peak => "You're ready. Maintain fitness, stay sharp, and perform.",
            TrainingPhase::Recovery => "Let your body adapt. Rest is where growth happens.",
        }
    }

    pub fn intensity(&self) -> Intensity {
        match self {
            TrainingPhase::Base => Intensity::Low,
            TrainingPhase::Build => Intensity::Moderate,
            TrainingPhase::Peak => Intensity::High,
            TrainingPhase::Recovery => Intensity::Recovery,
        }
    }
}

impl std::fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainingPhase::Base => write!(f, "Base"),
            TrainingPhase::Build => write!(f, "Build"),
            TrainingPhase::Peak => write!(f, "Peak"),
            TrainingPhase::Recovery => write!(f, "Recovery"),
        }
    }
}

impl std::str::FromStr for TrainingPhase {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "base" => Ok(TrainingPhase::Base),
            "build" => Ok(TrainingPhase::Build),
            "peak" => Ok(TrainingPhase::Peak),
            "recovery" => Ok(TrainingPhase::Recovery),
            _ => Err(anyhow::anyhow!("Invalid training phase: {}", s)),
        }
    }
}

/// A sport the athlete trains together with their level in it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportSelection {
    pub sport: Sport,
    pub skill_level: SkillLevel,
}

impl SportSelection {
    pub fn new(sport: Sport, skill_level: SkillLevel) -> Self {
        Self { sport, skill_level }
    }
}

/// Athlete profile persisted by the profile store.
///
/// Missing fields in a stored record are filled from [`AthleteProfile::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteProfile {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    /// Rotation order for the plan generator
    pub sports: Vec<SportSelection>,
    pub primary_goal: String,
    #[serde(deserialize_with = "deserialize_training_days")]
    pub weekly_training_days: u8,
    pub training_phase: TrainingPhase,
}

impl Default for AthleteProfile {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: None,
            gender: Gender::Male,
            weight_kg: 70.0,
            height_cm: 175.0,
            sports: Vec::new(),
            primary_goal: String::new(),
            weekly_training_days: 4,
            training_phase: TrainingPhase::Base,
        }
    }
}

impl AthleteProfile {
    /// Full name, or "Athlete" when no name was entered
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            "Athlete".to_string()
        } else {
            name.to_string()
        }
    }

    pub fn primary_sport(&self) -> Option<Sport> {
        self.sports.first().map(|s| s.sport)
    }

    /// Union of the default muscle groups of every selected sport
    pub fn trained_muscle_groups(&self) -> Vec<String> {
        let mut muscles: Vec<String> = Vec::new();
        for selection in &self.sports {
            for muscle in selection.sport.muscle_groups() {
                if !muscles.iter().any(|m| m == muscle) {
                    muscles.push(muscle.to_string());
                }
            }
        }
        muscles
    }

    pub fn skill_level(&self, sport: Sport) -> Option<SkillLevel> {
        self.sports
            .iter()
            .find(|s| s.sport == sport)
            .map(|s| s.skill_level)
    }

    /// Add a sport, or update its level in place if already selected
    pub fn add_sport(&mut self, sport: Sport, skill_level: SkillLevel) {
        if let Some(existing) = self.sports.iter_mut().find(|s| s.sport == sport) {
            existing.skill_level = skill_level;
        } else {
            self.sports.push(SportSelection::new(sport, skill_level));
        }
    }

    /// Returns false when the sport was not selected
    pub fn remove_sport(&mut self, sport: Sport) -> bool {
        let before = self.sports.len();
        self.sports.retain(|s| s.sport != sport);
        self.sports.len() != before
    }

    /// Returns false when the sport was not selected
    pub fn set_skill_level(&mut self, sport: Sport, skill_level: SkillLevel) -> bool {
        match self.sports.iter_mut().find(|s| s.sport == sport) {
            Some(selection) => {
                selection.skill_level = skill_level;
                true
            }
            None => false,
        }
    }

    pub fn set_weekly_training_days(&mut self, days: i64) {
        let days = days.clamp(
            i64::from(MIN_WEEKLY_TRAINING_DAYS),
            i64::from(MAX_WEEKLY_TRAINING_DAYS),
        );
        self.weekly_training_days = days as u8;
    }
}

/// Out-of-range stored counts saturate so the plan falls into the nearest day bucket
fn deserialize_training_days<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let days = i64::deserialize(deserializer)?;
    Ok(days.clamp(0, i64::from(u8::MAX)) as u8)
}
