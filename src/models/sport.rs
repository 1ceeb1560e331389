use serde::{Deserialize, Serialize};

/// Supported training disciplines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Running,
    Biking,
    Swimming,
    Boxing,
    Tennis,
    Gym,
    Yoga,
    Crossfit,
    Soccer,
    Basketball,
}

impl Sport {
    pub const ALL: [Sport; 10] = [
        Sport::Running,
        Sport::Biking,
        Sport::Swimming,
        Sport::Boxing,
        Sport::Tennis,
        Sport::Gym,
        Sport::Yoga,
        Sport::Crossfit,
        Sport::Soccer,
        Sport::Basketball,
    ];

    /// Lowercase identifier used in storage and the catalog file
    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Running => "running",
            Sport::Biking => "biking",
            Sport::Swimming => "swimming",
            Sport::Boxing => "boxing",
            Sport::Tennis => "tennis",
            Sport::Gym => "gym",
            Sport::Yoga => "yoga",
            Sport::Crossfit => "crossfit",
            Sport::Soccer => "soccer",
            Sport::Basketball => "basketball",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Sport::Running => "Running",
            Sport::Biking => "Biking",
            Sport::Swimming => "Swimming",
            Sport::Boxing => "Boxing",
            Sport::Tennis => "Tennis",
            Sport::Gym => "Gym",
            Sport::Yoga => "Yoga",
            Sport::Crossfit => "CrossFit",
            Sport::Soccer => "Soccer",
            Sport::Basketball => "Basketball",
        }
    }

    /// Body parts a sport trains by default
    pub fn muscle_groups(&self) -> &'static [&'static str] {
        match self {
            Sport::Running | Sport::Biking | Sport::Soccer => &["legs", "core", "cardio"],
            Sport::Swimming => &["shoulders", "back", "arms", "core", "cardio"],
            Sport::Boxing => &["arms", "shoulders", "core", "cardio"],
            Sport::Tennis => &["arms", "shoulders", "legs", "core"],
            Sport::Gym => &["full-body"],
            Sport::Yoga => &["core", "flexibility", "back"],
            Sport::Crossfit => &["full-body", "cardio"],
            Sport::Basketball => &["legs", "arms", "core", "cardio"],
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Sport {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Sport::ALL
            .into_iter()
            .find(|sport| sport.as_str() == lower)
            .ok_or_else(|| anyhow::anyhow!("Unknown sport: {}", s))
    }
}

/// Self-reported proficiency in a sport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Moderate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Moderate,
        SkillLevel::Advanced,
    ];
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillLevel::Beginner => write!(f, "Beginner"),
            SkillLevel::Moderate => write!(f, "Moderate"),
            SkillLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

impl std::str::FromStr for SkillLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "moderate" | "intermediate" => Ok(SkillLevel::Moderate),
            "advanced" => Ok(SkillLevel::Advanced),
            _ => Err(anyhow::anyhow!("Invalid skill level: {}", s)),
        }
    }
}

/// Workout effort classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
    Recovery,
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intensity::Low => write!(f, "Low"),
            Intensity::Moderate => write!(f, "Moderate"),
            Intensity::High => write!(f, "High"),
            Intensity::Recovery => write!(f, "Recovery"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sport_from_str_is_case_insensitive() {
        assert_eq!("CrossFit".parse::<Sport>().unwrap(), Sport::Crossfit);
        assert_eq!(" running ".parse::<Sport>().unwrap(), Sport::Running);
        assert!("curling".parse::<Sport>().is_err());
    }

    #[test]
    fn test_sport_serializes_lowercase() {
        let json = serde_json::to_string(&Sport::Basketball).unwrap();
        assert_eq!(json, "\"basketball\"");
    }

    #[test]
    fn test_skill_level_accepts_intermediate_alias() {
        assert_eq!(
            "intermediate".parse::<SkillLevel>().unwrap(),
            SkillLevel::Moderate
        );
    }
}
