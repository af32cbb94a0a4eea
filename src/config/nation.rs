//! Nation configuration structures

use serde::{Deserialize, Serialize};

/// Nation a character can hail from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nation {
    pub name: String,
    /// Demonym, e.g. "American"
    pub nationality: String,
    pub native_language: String,
}

pub(crate) fn default_nation_name() -> String {
    "United States".to_string()
}
