//! Dataset domain model.

use serde::{Deserialize, Serialize};

/// Version assigned to a dataset whose template row leaves it blank.
pub const DEFAULT_DATASET_VERSION: &str = "1";

/// Language every dataset in the template is published in.
pub const DEFAULT_DATASET_LANGUAGE: &str = "en";

/// A dataset published by one of the platform's resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub catalog_url: String,
    pub title: String,
    pub description: Option<String>,
    pub themes: Vec<String>,
    /// Identifier of the virtual platform connection exposing the dataset.
    pub vp_connection: Option<String>,
    pub license: Option<String>,
    /// Identifiers of related datasets or resources.
    pub related: Vec<String>,
    pub version: String,
    pub keywords: Vec<String>,
    pub publisher_name: Option<String>,
    pub language: String,
    pub page: Option<String>,
}
