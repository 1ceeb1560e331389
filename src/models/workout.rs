use serde::{Deserialize, Serialize};

use super::sport::{Intensity, Sport};

/// Catalog entry describing a single workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: String,
    pub name: String,
    pub sport: Sport,
    pub duration_minutes: u32,
    pub intensity: Intensity,
    pub description: String,
    pub muscle_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<String>>,
}

impl WorkoutTemplate {
    /// Generic session used when the catalog has nothing for a sport
    pub fn placeholder(sport: Sport) -> Self {
        Self {
            id: format!("{}-default", sport.as_str()),
            name: format!("{} Training", sport.display_name()),
            sport,
            duration_minutes: 45,
            intensity: Intensity::Moderate,
            description: "General training session".to_string(),
            muscle_groups: vec!["full-body".to_string()],
            exercises: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_workout() {
        let workout = WorkoutTemplate::placeholder(Sport::Crossfit);

        assert_eq!(workout.id, "crossfit-default");
        assert_eq!(workout.name, "CrossFit Training");
        assert_eq!(workout.duration_minutes, 45);
        assert_eq!(workout.intensity, Intensity::Moderate);
        assert_eq!(workout.muscle_groups, vec!["full-body".to_string()]);
        assert!(workout.exercises.is_none());
    }
}
