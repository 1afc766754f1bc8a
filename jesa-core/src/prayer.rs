//! Prayer intentions kept beside the memorials.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A prayer intention: a category and an optional detail line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prayer {
    pub id: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Prayer {
    pub fn new(id: impl Into<String>, category: impl Into<String>, detail: Option<String>) -> Self {
        Prayer {
            id: id.into(),
            category: category.into(),
            detail,
        }
    }

    /// Create a prayer with a freshly generated id.
    pub fn create(category: impl Into<String>, detail: Option<String>) -> Self {
        Prayer::new(Uuid::new_v4().to_string(), category, detail)
    }
}
