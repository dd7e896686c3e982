//! Strain data model
//!
//! Strains are owned by the backend catalogue; the chat only ever reads them
//! out of recommendation responses.

use serde::{Deserialize, Serialize};

/// A catalogued cannabis product variant with descriptive attributes
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Strain {
    pub name: String,
    /// Indica, Sativa or Hybrid
    #[serde(rename = "type")]
    pub strain_type: String,
    /// Range string such as "18-22%"
    pub thc_content: String,
    pub cbd_content: String,
    pub effects: Vec<String>,
    pub flavors: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_benefits: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growing_time: Option<String>,
}
