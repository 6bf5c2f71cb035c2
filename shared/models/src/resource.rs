//! Biobank and patient registry records.
//!
//! Both kinds live on the shared `BiobankPatientRegistry` sheet and carry the
//! same fields. The [`ResourceType`] column decides which one a row becomes.

use serde::{Deserialize, Serialize};

/// Discriminator between the two resource kinds sharing one sheet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Biobank,
    PatientRegistry,
}

impl ResourceType {
    /// Parse the verbatim label used in the template. Anything else, including
    /// differently cased labels, is not a resource type.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Biobank" => Some(Self::Biobank),
            "Patient registry" => Some(Self::PatientRegistry),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Biobank => "Biobank",
            Self::PatientRegistry => "Patient registry",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Biobank {
    pub catalog_url: String,
    pub title: String,
    pub description: Option<String>,
    pub population_coverage: Option<String>,
    pub themes: Vec<String>,
    pub publisher_name: Option<String>,
    pub pages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRegistry {
    pub catalog_url: String,
    pub title: String,
    pub description: Option<String>,
    pub population_coverage: Option<String>,
    pub themes: Vec<String>,
    pub publisher_name: Option<String>,
    pub pages: Vec<String>,
}

impl Biobank {
    pub const RESOURCE_TYPE: ResourceType = ResourceType::Biobank;
}

impl PatientRegistry {
    pub const RESOURCE_TYPE: ResourceType = ResourceType::PatientRegistry;
}
