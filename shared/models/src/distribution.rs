//! Distribution domain model.

use serde::{Deserialize, Serialize};

/// One concrete access route (download or service) of a dataset.
///
/// `dataset_title` refers to a [`crate::Dataset`] by title; the distribution
/// does not own the dataset and the reference is not checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Distribution {
    pub title: String,
    pub dataset_title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub url_type: Option<String>,
    pub license: Option<String>,
    pub version: Option<String>,
    pub media_type: Option<String>,
    pub publisher_name: Option<String>,
    pub is_part_of: Vec<String>,
}
