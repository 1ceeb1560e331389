use anyhow::{Context, Result};

use super::KeyValueStore;
use crate::models::AthleteProfile;

const ATHLETE_PROFILE_KEY: &str = "athlete_profile";
const ONBOARDING_COMPLETE_KEY: &str = "onboarding_complete";
const API_KEY_STORAGE_KEY: &str = "openai_api_key";

/// Persists the athlete profile, onboarding flag and chat API key
pub struct ProfileStore<S> {
    store: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Load the stored profile, falling back to defaults when nothing usable is stored
    pub fn load(&self) -> AthleteProfile {
        match self.try_load() {
            Ok(Some(profile)) => profile,
            Ok(None) => AthleteProfile::default(),
            Err(e) => {
                tracing::warn!("Failed to load athlete profile: {:#}", e);
                AthleteProfile::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<AthleteProfile>> {
        let Some(stored) = self.store.get(ATHLETE_PROFILE_KEY)? else {
            return Ok(None);
        };

        let profile =
            serde_json::from_str(&stored).context("Failed to deserialize athlete profile")?;
        Ok(Some(profile))
    }

    pub fn save(&self, profile: &AthleteProfile) -> Result<()> {
        let value = serde_json::to_string(profile).context("Failed to serialize athlete profile")?;

        self.store
            .set(ATHLETE_PROFILE_KEY, &value)
            .context("Failed to save athlete profile")?;

        tracing::debug!("Saved athlete profile for {}", profile.full_name());
        Ok(())
    }

    /// Remove the profile and the onboarding flag together
    pub fn clear(&self) -> Result<()> {
        self.store
            .delete_all(&[ATHLETE_PROFILE_KEY, ONBOARDING_COMPLETE_KEY])
            .context("Failed to clear athlete profile")?;

        tracing::info!("Cleared athlete profile and onboarding status");
        Ok(())
    }

    pub fn is_onboarding_complete(&self) -> bool {
        match self.store.get(ONBOARDING_COMPLETE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!("Failed to check onboarding status: {:#}", e);
                false
            }
        }
    }

    pub fn set_onboarding_complete(&self) -> Result<()> {
        self.store
            .set(ONBOARDING_COMPLETE_KEY, "true")
            .context("Failed to save onboarding status")
    }

    pub fn clear_onboarding(&self) -> Result<()> {
        self.store
            .delete(ONBOARDING_COMPLETE_KEY)
            .context("Failed to clear onboarding status")?;
        Ok(())
    }

    pub fn load_api_key(&self) -> Option<String> {
        match self.store.get(API_KEY_STORAGE_KEY) {
            Ok(key) => key.filter(|k| !k.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to load API key: {:#}", e);
                None
            }
        }
    }

    pub fn save_api_key(&self, key: &str) -> Result<()> {
        self.store
            .set(API_KEY_STORAGE_KEY, key)
            .context("Failed to save API key")
    }

    pub fn clear_api_key(&self) -> Result<()> {
        self.store
            .delete(API_KEY_STORAGE_KEY)
            .context("Failed to clear API key")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SkillLevel, Sport};
    use crate::storage::MemoryStore;

    /// Store whose every operation fails
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(anyhow::anyhow!("disk unavailable"))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow::anyhow!("disk unavailable"))
        }

        fn delete(&self, _key: &str) -> Result<bool> {
            Err(anyhow::anyhow!("disk unavailable"))
        }

        fn delete_all(&self, _keys: &[&str]) -> Result<()> {
            Err(anyhow::anyhow!("disk unavailable"))
        }
    }

    /// Reads and writes work, removals fail
    #[derive(Default)]
    struct FailingDeletes {
        inner: MemoryStore,
    }

    impl KeyValueStore for FailingDeletes {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.inner.set(key, value)
        }

        fn delete(&self, key: &str) -> Result<bool> {
            if key == ATHLETE_PROFILE_KEY {
                Err(anyhow::anyhow!("disk unavailable"))
            } else {
                self.inner.delete(key)
            }
        }

        fn delete_all(&self, _keys: &[&str]) -> Result<()> {
            Err(anyhow::anyhow!("disk unavailable"))
        }
    }

    #[test]
    fn test_load_defaults_when_empty() {
        let store = ProfileStore::new(MemoryStore::new());
        assert_eq!(store.load(), AthleteProfile::default());
        assert!(!store.is_onboarding_complete());
    }

    #[test]
    fn test_save_and_load_profile() -> Result<()> {
        let store = ProfileStore::new(MemoryStore::new());

        let mut profile = AthleteProfile::default();
        profile.first_name = "Mara".to_string();
        profile.add_sport(Sport::Swimming, SkillLevel::Moderate);
        store.save(&profile)?;

        assert_eq!(store.load(), profile);
        Ok(())
    }

    #[test]
    fn test_corrupt_record_loads_defaults() -> Result<()> {
        let store = ProfileStore::new(MemoryStore::new());
        store.inner().set(ATHLETE_PROFILE_KEY, "{not json")?;

        assert_eq!(store.load(), AthleteProfile::default());
        Ok(())
    }

    #[test]
    fn test_failing_backend_degrades() {
        let store = ProfileStore::new(BrokenStore);

        assert_eq!(store.load(), AthleteProfile::default());
        assert!(!store.is_onboarding_complete());
        assert!(store.load_api_key().is_none());
        assert!(store.save(&AthleteProfile::default()).is_err());
    }

    #[test]
    fn test_clear_removes_profile_and_flag() -> Result<()> {
        let store = ProfileStore::new(MemoryStore::new());
        let mut profile = AthleteProfile::default();
        profile.first_name = "Lee".to_string();
        store.save(&profile)?;
        store.set_onboarding_complete()?;
        store.save_api_key("sk-test")?;

        store.clear()?;

        assert_eq!(store.load(), AthleteProfile::default());
        assert!(!store.is_onboarding_complete());
        // The API key is managed separately
        assert_eq!(store.load_api_key(), Some("sk-test".to_string()));
        Ok(())
    }

    #[test]
    fn test_failed_clear_keeps_profile_and_flag() -> Result<()> {
        let store = ProfileStore::new(FailingDeletes::default());
        let mut profile = AthleteProfile::default();
        profile.first_name = "Lee".to_string();
        store.save(&profile)?;
        store.set_onboarding_complete()?;

        assert!(store.clear().is_err());

        assert!(store.is_onboarding_complete());
        assert_eq!(store.load().first_name, "Lee");
        Ok(())
    }
}
