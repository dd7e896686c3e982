//! Preference bag and recommendation wire types
//!
//! The preference bag accumulates the user's menu selections and is forwarded
//! verbatim to the recommendation endpoint. Keys the user never answered are
//! omitted from the wire body.

use serde::{Deserialize, Serialize};

/// Keys a menu choice may record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrefKey {
    Experience,
    Effect,
    Flavor,
    Type,
}

impl std::fmt::Display for PrefKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefKey::Experience => write!(f, "experience"),
            PrefKey::Effect => write!(f, "effect"),
            PrefKey::Flavor => write!(f, "flavor"),
            PrefKey::Type => write!(f, "type"),
        }
    }
}

/// Accumulated user selections forwarded to the recommendation endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub strain_type: Option<String>,
}

impl Preferences {
    /// Record a selection under the given key, replacing any previous value
    pub fn set(&mut self, key: PrefKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            PrefKey::Experience => self.experience = Some(value),
            PrefKey::Effect => self.effect = Some(value),
            PrefKey::Flavor => self.flavor = Some(value),
            PrefKey::Type => self.strain_type = Some(value),
        }
    }

    pub fn get(&self, key: PrefKey) -> Option<&str> {
        match key {
            PrefKey::Experience => self.experience.as_deref(),
            PrefKey::Effect => self.effect.as_deref(),
            PrefKey::Flavor => self.flavor.as_deref(),
            PrefKey::Type => self.strain_type.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.experience.is_none()
            && self.effect.is_none()
            && self.flavor.is_none()
            && self.strain_type.is_none()
    }

    pub fn clear(&mut self) {
        *self = Preferences::default();
    }
}

/// Request body for `POST /api/recommend`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub preferences: Preferences,
}

/// Response body for `POST /api/recommend`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub recommendations: Vec<super::Strain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
