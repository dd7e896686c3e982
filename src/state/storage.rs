//! Local profile storage
//!
//! The only persistence the chat carries: a small JSON file holding the
//! age-verification flag and, optionally, the most recently chosen
//! experience level. Everything else lives and dies with the session.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::StorageConfig;
use crate::utils::errors::Result;

/// Persisted user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProfile {
    pub age_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Default for StoredProfile {
    fn default() -> Self {
        Self {
            age_verified: false,
            experience: None,
            updated_at: Utc::now(),
        }
    }
}

/// File-backed profile store
#[derive(Debug, Clone)]
pub struct ProfileStorage {
    path: PathBuf,
}

impl ProfileStorage {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            path: PathBuf::from(&config.profile_path),
        }
    }

    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the profile, if one has been saved.
    /// A corrupt file is treated as absent rather than fatal.
    pub fn load(&self) -> Result<Option<StoredProfile>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No profile file");
            return Ok(None);
        }

        let data = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<StoredProfile>(&data) {
            Ok(profile) => {
                debug!(path = %self.path.display(), age_verified = profile.age_verified,
                       "Profile loaded");
                Ok(Some(profile))
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e,
                      "Profile file is corrupt, ignoring it");
                Ok(None)
            }
        }
    }

    /// Save the profile, creating parent directories as needed
    pub fn save(&self, profile: &StoredProfile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string_pretty(profile)?;
        std::fs::write(&self.path, serialized)?;
        debug!(path = %self.path.display(), "Profile saved");
        Ok(())
    }

    /// Remove the profile file
    pub fn delete(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            debug!(path = %self.path.display(), "Profile deleted");
        }
        Ok(())
    }

    /// Whether the age-verification flag has been set
    pub fn is_age_verified(&self) -> Result<bool> {
        Ok(self.load()?.map(|p| p.age_verified).unwrap_or(false))
    }

    /// Persist the age-verification flag
    pub fn set_age_verified(&self, verified: bool) -> Result<()> {
        let mut profile = self.load()?.unwrap_or_default();
        profile.age_verified = verified;
        profile.updated_at = Utc::now();
        self.save(&profile)
    }

    /// Remember the chosen experience level
    pub fn set_experience(&self, experience: &str) -> Result<()> {
        let mut profile = self.load()?.unwrap_or_default();
        profile.experience = Some(experience.to_string());
        profile.updated_at = Utc::now();
        self.save(&profile)
    }

    /// The remembered experience level, if any
    pub fn experience(&self) -> Result<Option<String>> {
        Ok(self.load()?.and_then(|p| p.experience))
    }
}
