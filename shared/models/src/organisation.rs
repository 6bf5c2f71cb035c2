//! Organisation records read from the `Organisation` sheet.

use serde::{Deserialize, Serialize};

/// An organisation taking part in the virtual platform, together with the
/// location it is based at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organisation {
    pub catalog_url: String,
    pub title: String,
    pub description: Option<String>,
    pub pages: Vec<String>,
    pub location_title: Option<String>,
    pub location_description: Option<String>,
}

