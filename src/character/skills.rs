//! Skill table with clamped proficiencies

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MIN_PROFICIENCY: i32 = 0;
pub const MAX_PROFICIENCY: i32 = 100;

/// Resolved skill name -> proficiency, every value kept in [0, 100]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillTable {
    entries: BTreeMap<String, i32>,
}

impl SkillTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<i32> {
        self.entries.get(name).copied()
    }

    /// Current value, or 0 for an untrained skill
    #[inline]
    pub fn value(&self, name: &str) -> i32 {
        self.get(name).unwrap_or(0)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: i32) {
        self.entries
            .insert(name.into(), value.clamp(MIN_PROFICIENCY, MAX_PROFICIENCY));
    }

    /// Raise a skill to at least `value`
    pub fn raise_to(&mut self, name: &str, value: i32) {
        let current = self.get(name);
        if current.map_or(true, |current| current < value) {
            self.set(name, value);
        }
    }

    /// Add `delta` to a skill, inserting it at 0 first if needed
    pub fn adjust(&mut self, name: &str, delta: i32) {
        let value = self.value(name) + delta;
        self.set(name, value);
    }

    /// Skill names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
