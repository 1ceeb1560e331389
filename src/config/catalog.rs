use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::models::{Intensity, SkillLevel, Sport, WorkoutTemplate};

const BUILTIN_CATALOG: &str = include_str!("../../catalog/workouts.toml");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Catalog has no beginner workouts for {0}")]
    MissingBeginner(Sport),
    #[error("Workout {0} has a zero duration")]
    ZeroDuration(String),
}

/// On-disk shape of the catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    recovery: WorkoutTemplate,
    #[serde(default, rename = "workout")]
    workouts: Vec<TemplateRecord>,
}

#[derive(Debug, Deserialize)]
struct TemplateRecord {
    id: String,
    name: String,
    sport: Sport,
    level: SkillLevel,
    duration_minutes: u32,
    intensity: Intensity,
    description: String,
    muscle_groups: Vec<String>,
    #[serde(default)]
    exercises: Option<Vec<String>>,
}

impl TemplateRecord {
    fn into_template(self) -> (SkillLevel, WorkoutTemplate) {
        let template = WorkoutTemplate {
            id: self.id,
            name: self.name,
            sport: self.sport,
            duration_minutes: self.duration_minutes,
            intensity: self.intensity,
            description: self.description,
            muscle_groups: self.muscle_groups,
            exercises: self.exercises,
        };
        (self.level, template)
    }
}

/// Workout templates keyed by sport and skill level, plus the Sunday recovery session
#[derive(Debug, Clone)]
pub struct WorkoutCatalog {
    templates: HashMap<(Sport, SkillLevel), Vec<WorkoutTemplate>>,
    recovery: WorkoutTemplate,
}

impl WorkoutCatalog {
    /// Catalog bundled with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load a catalog from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::debug!("Loading workout catalog from {:?}", path);

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;

        if file.recovery.duration_minutes == 0 {
            return Err(CatalogError::ZeroDuration(file.recovery.id));
        }

        let mut catalog = Self::new(file.recovery);
        for record in file.workouts {
            if record.duration_minutes == 0 {
                return Err(CatalogError::ZeroDuration(record.id));
            }
            let (level, template) = record.into_template();
            catalog.insert(level, template);
        }

        tracing::debug!("Loaded {} workout templates", catalog.len());
        Ok(catalog)
    }

    /// Empty catalog holding only the recovery session
    pub fn new(recovery: WorkoutTemplate) -> Self {
        Self {
            templates: HashMap::new(),
            recovery,
        }
    }

    pub fn insert(&mut self, level: SkillLevel, template: WorkoutTemplate) {
        self.templates
            .entry((template.sport, level))
            .or_default()
            .push(template);
    }

    /// Templates for an exact (sport, level) pair
    pub fn templates(&self, sport: Sport, level: SkillLevel) -> &[WorkoutTemplate] {
        self.templates
            .get(&(sport, level))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Templates for (sport, level), falling back to the sport's beginner list
    pub fn candidates(&self, sport: Sport, level: SkillLevel) -> &[WorkoutTemplate] {
        let exact = self.templates(sport, level);
        if exact.is_empty() {
            self.templates(sport, SkillLevel::Beginner)
        } else {
            exact
        }
    }

    pub fn recovery(&self) -> &WorkoutTemplate {
        &self.recovery
    }

    pub fn len(&self) -> usize {
        self.templates.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that every supported sport has a beginner list
    pub fn validate(&self) -> Result<(), CatalogError> {
        for sport in Sport::ALL {
            if self.templates(sport, SkillLevel::Beginner).is_empty() {
                return Err(CatalogError::MissingBeginner(sport));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
[recovery]
id = "recovery"
name = "Active Recovery"
sport = "yoga"
duration_minutes = 20
intensity = "recovery"
description = "Light movement and stretching"
muscle_groups = ["flexibility", "core"]

[[workout]]
id = "run-b-1"
sport = "running"
level = "beginner"
name = "Easy Jog"
duration_minutes = 20
intensity = "low"
description = "Light jog"
muscle_groups = ["legs"]
"#;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = WorkoutCatalog::builtin().unwrap();
        catalog.validate().unwrap();

        for sport in Sport::ALL {
            for level in SkillLevel::ALL {
                assert!(
                    !catalog.templates(sport, level).is_empty(),
                    "missing {} {}",
                    sport,
                    level
                );
            }
        }
        assert_eq!(catalog.templates(Sport::Running, SkillLevel::Beginner).len(), 2);
        assert_eq!(catalog.recovery().name, "Active Recovery");
        assert_eq!(catalog.recovery().duration_minutes, 20);
    }

    #[test]
    fn test_candidates_fall_back_to_beginner() {
        let catalog = WorkoutCatalog::from_toml_str(FIXTURE).unwrap();

        let candidates = catalog.candidates(Sport::Running, SkillLevel::Advanced);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, "run-b-1");

        assert!(catalog.candidates(Sport::Gym, SkillLevel::Advanced).is_empty());
    }

    #[test]
    fn test_validate_reports_missing_beginner() {
        let catalog = WorkoutCatalog::from_toml_str(FIXTURE).unwrap();
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::MissingBeginner(Sport::Biking)));
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let bad = FIXTURE.replace(
            "duration_minutes = 20\nintensity = \"low\"",
            "duration_minutes = 0\nintensity = \"low\"",
        );
        assert!(matches!(
            WorkoutCatalog::from_toml_str(&bad),
            Err(CatalogError::ZeroDuration(id)) if id == "run-b-1"
        ));

        let bad = FIXTURE.replace(
            "duration_minutes = 20\nintensity = \"recovery\"",
            "duration_minutes = 0\nintensity = \"recovery\"",
        );
        assert!(matches!(
            WorkoutCatalog::from_toml_str(&bad),
            Err(CatalogError::ZeroDuration(id)) if id == "recovery"
        ));
    }

    #[test]
    fn test_invalid_sport_is_rejected() {
        let bad = FIXTURE.replace("sport = \"running\"", "sport = \"curling\"");
        assert!(matches!(
            WorkoutCatalog::from_toml_str(&bad),
            Err(CatalogError::Parse(_))
        ));
    }
}
