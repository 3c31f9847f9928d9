use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generated artifact kept in the in-memory store.
///
/// Identified by `name`. Names are not unique across calls; a later write
/// with the same name silently replaces the earlier artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// The caller's ingredient list, echoed unchanged.
    pub ingredients: Vec<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
