use anyhow::Result;
use chrono::NaiveDate;
use rand::Rng;

use crate::api::ChatError;
use crate::config::WorkoutCatalog;
use crate::models::{AthleteProfile, WeeklyPlan};
use crate::services::plan_generation_service::generate_weekly_plan;
use crate::storage::{KeyValueStore, ProfileStore};

/// Application state for one user of the app: profile, onboarding status and
/// chat API key, loaded from and written back to a key-value store.
pub struct AthleteSession<S> {
    store: ProfileStore<S>,
    profile: AthleteProfile,
    onboarded: bool,
    api_key: Option<String>,
}

impl<S: KeyValueStore> AthleteSession<S> {
    /// Load everything the session needs from `store`
    pub fn open(store: S) -> Self {
        let store = ProfileStore::new(store);
        let profile = store.load();
        let onboarded = store.is_onboarding_complete();
        let api_key = store.load_api_key();

        tracing::debug!(
            "Opened session for {} (onboarded: {})",
            profile.full_name(),
            onboarded
        );

        Self {
            store,
            profile,
            onboarded,
            api_key,
        }
    }

    pub fn profile(&self) -> &AthleteProfile {
        &self.profile
    }

    /// Edit the in-memory profile; call [`save_profile`](Self::save_profile) to persist
    pub fn update_profile<F: FnOnce(&mut AthleteProfile)>(&mut self, edit: F) {
        edit(&mut self.profile);
    }

    pub fn save_profile(&self) -> Result<()> {
        self.store.save(&self.profile)
    }

    /// Re-read the profile from storage, discarding unsaved edits
    pub fn reload(&mut self) {
        self.profile = self.store.load();
        self.onboarded = self.store.is_onboarding_complete();
        self.api_key = self.store.load_api_key();
    }

    pub fn is_onboarded(&self) -> bool {
        self.onboarded
    }

    /// Store the profile collected during onboarding and mark onboarding done
    pub fn complete_onboarding(&mut self, profile: AthleteProfile) -> Result<()> {
        self.store.save(&profile)?;
        self.store.set_onboarding_complete()?;

        tracing::info!("Onboarding complete for {}", profile.full_name());
        self.profile = profile;
        self.onboarded = true;
        Ok(())
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate and persist an OpenAI API key
    pub fn set_api_key(&mut self, key: &str) -> Result<()> {
        let key = key.trim();
        if !key.starts_with("sk-") {
            return Err(ChatError::InvalidApiKey.into());
        }

        self.store.save_api_key(key)?;
        self.api_key = Some(key.to_string());
        Ok(())
    }

    pub fn clear_api_key(&mut self) -> Result<()> {
        self.store.clear_api_key()?;
        self.api_key = None;
        Ok(())
    }

    /// Forget the profile and onboarding status
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;
        self.profile = AthleteProfile::default();
        self.onboarded = false;
        Ok(())
    }

    /// Plan for the week containing `today`
    pub fn weekly_plan<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        catalog: &WorkoutCatalog,
        rng: &mut R,
    ) -> WeeklyPlan {
        generate_weekly_plan(&self.profile, today, catalog, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SkillLevel, Sport};
    use crate::storage::MemoryStore;

    #[test]
    fn test_new_session_has_defaults() {
        let session = AthleteSession::open(MemoryStore::new());
        assert!(!session.is_onboarded());
        assert!(!session.has_api_key());
        assert_eq!(session.profile(), &AthleteProfile::default());
    }

    #[test]
    fn test_update_requires_save() -> Result<()> {
        let store = MemoryStore::new();
        let mut session = AthleteSession::open(&store);

        session.update_profile(|p| p.add_sport(Sport::Gym, SkillLevel::Advanced));
        assert_eq!(AthleteSession::open(&store).profile().sports.len(), 0);

        session.save_profile()?;
        assert_eq!(AthleteSession::open(&store).profile().sports.len(), 1);
        Ok(())
    }

    #[test]
    fn test_api_key_must_start_with_sk() -> Result<()> {
        let mut session = AthleteSession::open(MemoryStore::new());

        let err = session.set_api_key("abc123").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ChatError>(),
            Some(&ChatError::InvalidApiKey)
        );

        session.set_api_key("  sk-live-123 ")?;
        assert_eq!(session.api_key(), Some("sk-live-123"));

        session.clear_api_key()?;
        assert!(!session.has_api_key());
        Ok(())
    }

    #[test]
    fn test_reset_clears_onboarding() -> Result<()> {
        let store = MemoryStore::new();
        let mut session = AthleteSession::open(&store);

        let mut profile = AthleteProfile::default();
        profile.first_name = "Noor".to_string();
        session.complete_onboarding(profile)?;
        assert!(AthleteSession::open(&store).is_onboarded());

        session.reset()?;
        assert!(!session.is_onboarded());
        assert_eq!(session.profile().full_name(), "Athlete");

        let reopened = AthleteSession::open(&store);
        assert!(!reopened.is_onboarded());
        assert_eq!(reopened.profile(), &AthleteProfile::default());
        Ok(())
    }
}
