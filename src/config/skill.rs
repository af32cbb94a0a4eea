//! Skill descriptors and the default skill table

use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Suffix marking a skill name that needs a specialization
pub const WILDCARD_MARKER: &str = "(*)";
/// Separator between alternatives in a bonus skill entry
pub const ALTERNATION: char = '|';

pub const FOREIGN_LANGUAGE: &str = "foreign language";
pub const OCCULT: &str = "occult";
pub const UNNATURAL: &str = "unnatural";

/// How a wildcard skill picks its specialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardKind {
    /// A language spoken in some other nation
    ForeignLanguage,
    /// One entry of the skill-type catalog
    Specialization,
}

/// Skill name as written in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillSpec {
    Fixed(String),
    Wildcard { base: String, kind: WildcardKind },
}

impl SkillSpec {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.strip_suffix(WILDCARD_MARKER) {
            Some(base) => {
                let base = base.trim_end().to_string();
                let kind = if base.eq_ignore_ascii_case(FOREIGN_LANGUAGE) {
                    WildcardKind::ForeignLanguage
                } else {
                    WildcardKind::Specialization
                };
                SkillSpec::Wildcard { base, kind }
            }
            None => SkillSpec::Fixed(trimmed.to_string()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, SkillSpec::Wildcard { .. })
    }
}

/// Split "art (*)|craft (*)" into its alternatives
pub fn split_alternatives(raw: &str) -> SmallVec<[&str; 4]> {
    raw.split(ALTERNATION)
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .collect()
}

/// Base proficiencies every character starts from
pub fn default_skills() -> BTreeMap<String, i32> {
    [
        ("accounting", 10),
        ("alertness", 20),
        ("athletics", 30),
        ("bureaucracy", 10),
        ("criminology", 10),
        ("disguise", 10),
        ("dodge", 30),
        ("drive", 20),
        ("firearms", 20),
        ("first aid", 10),
        ("heavy machinery", 10),
        ("history", 10),
        ("humint", 10),
        ("melee weapons", 30),
        ("navigate", 10),
        ("occult", 10),
        ("persuade", 20),
        ("psychotherapy", 10),
        ("ride", 10),
        ("search", 20),
        ("stealth", 10),
        ("survival", 10),
        ("swim", 20),
        ("unarmed combat", 40),
        ("unnatural", 0),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect()
}
