//! Python handle to one generated character

use crate::character::{Character, CharacterType, Stat};
use crate::render::render_character;
use pyo3::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// CharacterRecord PyClass
// ============================================================================

/// CharacterRecord - a generated character held in Rust memory
///
/// The statblock is rendered once at construction; everything else is read
/// lazily through getters.
#[pyclass(frozen)]
pub struct CharacterRecord {
    character: Character,
    /// Pre-rendered statblock
    statblock: String,
}

impl CharacterRecord {
    pub fn new(character: Character) -> Self {
        let statblock = render_character(&character);
        Self {
            character,
            statblock,
        }
    }

    pub fn statblock(&self) -> &str {
        &self.statblock
    }
}

#[pymethods]
impl CharacterRecord {
    // ------------------------------------------------------------------------
    // Getter Properties
    // ------------------------------------------------------------------------

    #[getter]
    fn name(&self) -> &str {
        &self.character.name
    }

    /// "agent" or "npc"
    #[getter]
    fn character_type(&self) -> &'static str {
        match self.character.character_type {
            CharacterType::Agent => "agent",
            CharacterType::Npc => "npc",
        }
    }

    /// Profession id in the catalog
    #[getter]
    fn profession(&self) -> &str {
        &self.character.profession.id
    }

    #[getter]
    fn label(&self) -> &str {
        &self.character.demographics.label
    }

    #[getter]
    fn employer(&self) -> &str {
        &self.character.demographics.employer
    }

    /// "M", "F" or "NB"
    #[getter]
    fn sex(&self) -> &'static str {
        self.character.demographics.sex.short_code()
    }

    #[getter]
    fn age(&self) -> u32 {
        self.character.demographics.age
    }

    /// ISO date (YYYY-MM-DD)
    #[getter]
    fn birthday(&self) -> String {
        self.character.demographics.birthday.to_string()
    }

    #[getter]
    fn nation(&self) -> &str {
        &self.character.demographics.nation.name
    }

    #[getter]
    fn nationality(&self) -> &str {
        &self.character.demographics.nation.nationality
    }

    /// {abbreviation: score}
    #[getter]
    fn statistics(&self) -> BTreeMap<&'static str, i32> {
        Stat::ALL
            .iter()
            .map(|stat| (stat.abbreviation(), self.character.statistics.get(*stat)))
            .collect()
    }

    #[getter]
    fn derived_statistics(&self) -> BTreeMap<&'static str, i32> {
        let derived = &self.character.derived;
        BTreeMap::from([
            ("HP", derived.hp),
            ("WP", derived.wp),
            ("SAN", derived.san),
            ("BP", derived.breaking_point),
        ])
    }

    #[getter]
    fn skills(&self) -> BTreeMap<String, i32> {
        self.character
            .skills
            .iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    #[getter]
    fn bonds(&self) -> Vec<String> {
        self.character.bonds.clone()
    }

    #[getter]
    fn special_training(&self) -> Vec<String> {
        self.character.special_training.clone()
    }

    /// Motivations followed by any disorders
    #[getter]
    fn motivations(&self) -> Vec<String> {
        self.character.motivations.clone()
    }

    /// [(weapon name, skill value)]
    #[getter]
    fn attacks(&self) -> Vec<(String, i32)> {
        self.character
            .attacks
            .iter()
            .map(|attack| (attack.weapon.name.clone(), attack.skill_value))
            .collect()
    }

    #[getter]
    fn armor(&self) -> Vec<String> {
        self.character.armor.iter().map(|armor| armor.name.clone()).collect()
    }

    #[getter]
    fn equipment(&self) -> Vec<String> {
        self.character.equipment.iter().map(|item| item.name.clone()).collect()
    }

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------

    /// Plain-text statblock
    fn render(&self) -> String {
        self.statblock.clone()
    }

    /// Full character as pretty-printed JSON
    fn to_json(&self) -> PyResult<String> {
        Ok(self.character.to_json()?)
    }

    fn __repr__(&self) -> String {
        format!(
            "CharacterRecord(name='{}', profession='{}', age={})",
            self.character.name, self.character.profession.id, self.character.demographics.age
        )
    }
}
