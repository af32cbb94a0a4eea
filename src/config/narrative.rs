//! Narrative tables: special training, motivations and names

use serde::{Deserialize, Serialize};

/// Special training entry, rendered as "name (link)"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTraining {
    pub name: String,
    /// Skill or statistic the training rolls against
    pub link: String,
}

impl SpecialTraining {
    pub fn display(&self) -> String {
        format!("{} ({})", self.name, self.link)
    }
}

/// Weighted motivation template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motivation {
    /// Relative weight; the entry appears this many times in the draw pool
    #[serde(default = "default_chances")]
    pub chances: u32,
    pub lines: Vec<String>,
    #[serde(default)]
    pub objects: Vec<String>,
}

fn default_chances() -> u32 {
    1
}

/// Forename and surname lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameLists {
    #[serde(default)]
    pub male: Vec<String>,
    #[serde(default)]
    pub female: Vec<String>,
    #[serde(default)]
    pub surname: Vec<String>,
}
