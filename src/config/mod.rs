//! Configuration catalog
//!
//! All lookup tables are deserialized once from a JSON or YAML document into
//! an immutable [`ConfigCatalog`] that every generator borrows.

mod gear;
mod nation;
mod narrative;
mod profession;
mod rules;
mod skill;

pub use gear::*;
pub use nation::*;
pub use narrative::*;
pub use profession::*;
pub use rules::*;
pub use skill::*;

use crate::error::{CharGenError, Result};
use ahash::AHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Catalog document exactly as stored
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    nations: Vec<Nation>,
    #[serde(default = "default_nation_name")]
    default_nation: String,
    professions: BTreeMap<String, ProfessionEntry>,
    #[serde(default)]
    skill_types: AHashMap<String, Vec<String>>,
    #[serde(default = "default_skills")]
    default_skills: BTreeMap<String, i32>,
    #[serde(default)]
    bonus_skill_packs: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    bonus_skills: Vec<String>,
    #[serde(default)]
    weapons: AHashMap<String, Weapon>,
    #[serde(default)]
    armor: AHashMap<String, Armor>,
    #[serde(default)]
    equipment: AHashMap<String, Equipment>,
    #[serde(default)]
    gear_kits: AHashMap<String, GearKit>,
    #[serde(default)]
    special_training: AHashMap<String, SpecialTraining>,
    #[serde(default)]
    motivations: Vec<Motivation>,
    #[serde(default)]
    bonds: Vec<String>,
    #[serde(default)]
    names: NameLists,
    #[serde(default)]
    disorders: Vec<String>,
    #[serde(default)]
    rules: GenerationRules,
}

/// Read-only lookup tables shared by every generation run
#[derive(Debug, Clone)]
pub struct ConfigCatalog {
    nations: Vec<Nation>,
    default_nation: String,
    professions: BTreeMap<String, Profession>,
    skill_types: AHashMap<String, Vec<String>>,
    default_skills: BTreeMap<String, i32>,
    bonus_skill_packs: BTreeMap<String, Vec<String>>,
    bonus_skills: Vec<String>,
    weapons: AHashMap<String, Weapon>,
    armor: AHashMap<String, Armor>,
    equipment: AHashMap<String, Equipment>,
    gear_kits: AHashMap<String, GearKit>,
    special_training: AHashMap<String, SpecialTraining>,
    motivations: Vec<Motivation>,
    bonds: Vec<String>,
    names: NameLists,
    disorders: Vec<String>,
    rules: GenerationRules,
}

impl ConfigCatalog {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let document: CatalogDocument = serde_yaml::from_str(yaml)?;
        Self::from_document(document)
    }

    /// Load a catalog file; `.yaml`/`.yml` are read as YAML, anything else as JSON
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CharGenError::Io(format!("{}: {}", path.display(), e)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }

    fn from_document(document: CatalogDocument) -> Result<Self> {
        if document.nations.is_empty() {
            return Err(CharGenError::InvalidConfig("nation list is empty".to_string()));
        }
        if document.professions.is_empty() {
            return Err(CharGenError::InvalidConfig("profession list is empty".to_string()));
        }
        if let Some(index) = document.motivations.iter().position(|m| m.lines.is_empty()) {
            return Err(CharGenError::InvalidConfig(format!(
                "motivation {} has no lines",
                index
            )));
        }

        let professions = resolve_professions(&document.professions)?;

        tracing::debug!(
            nations = document.nations.len(),
            professions = professions.len(),
            gear_kits = document.gear_kits.len(),
            "catalog loaded"
        );

        Ok(Self {
            nations: document.nations,
            default_nation: document.default_nation,
            professions,
            skill_types: document.skill_types,
            default_skills: document.default_skills,
            bonus_skill_packs: document.bonus_skill_packs,
            bonus_skills: document.bonus_skills,
            weapons: document.weapons,
            armor: document.armor,
            equipment: document.equipment,
            gear_kits: document.gear_kits,
            special_training: document.special_training,
            motivations: document.motivations,
            bonds: document.bonds,
            names: document.names,
            disorders: document.disorders,
            rules: document.rules,
        })
    }

    // ------------------------------------------------------------------------
    // Keyed lookups
    // ------------------------------------------------------------------------

    pub fn profession(&self, id: &str) -> Result<&Profession> {
        self.professions
            .get(id)
            .ok_or_else(|| CharGenError::not_found("Profession", id))
    }

    /// Profession ids in sorted order
    pub fn profession_ids(&self) -> Vec<&str> {
        self.professions.keys().map(String::as_str).collect()
    }

    pub fn default_nation(&self) -> Result<&Nation> {
        self.nations
            .iter()
            .find(|nation| nation.name == self.default_nation)
            .ok_or_else(|| CharGenError::not_found("Nation", self.default_nation.as_str()))
    }

    /// Valid specializations of a wildcard skill
    pub fn specializations(&self, base: &str) -> Result<&[String]> {
        self.skill_types
            .get(base)
            .or_else(|| self.skill_types.get(&base.to_lowercase()))
            .map(Vec::as_slice)
            .ok_or_else(|| CharGenError::not_found("Skill type", base))
    }

    pub fn gear_kit(&self, id: &str) -> Result<&GearKit> {
        self.gear_kits
            .get(id)
            .ok_or_else(|| CharGenError::not_found("Gear kit", id))
    }

    pub fn weapon(&self, id: &str) -> Result<&Weapon> {
        self.weapons
            .get(id)
            .ok_or_else(|| CharGenError::not_found("Weapon", id))
    }

    pub fn armor(&self, id: &str) -> Result<&Armor> {
        self.armor
            .get(id)
            .ok_or_else(|| CharGenError::not_found("Armor", id))
    }

    pub fn equipment(&self, id: &str) -> Result<&Equipment> {
        self.equipment
            .get(id)
            .ok_or_else(|| CharGenError::not_found("Equipment", id))
    }

    pub fn special_training(&self, id: &str) -> Result<&SpecialTraining> {
        self.special_training
            .get(id)
            .ok_or_else(|| CharGenError::not_found("Special training", id))
    }

    // ------------------------------------------------------------------------
    // Whole tables
    // ------------------------------------------------------------------------

    pub fn nations(&self) -> &[Nation] {
        &self.nations
    }

    pub fn default_skills(&self) -> &BTreeMap<String, i32> {
        &self.default_skills
    }

    /// Bonus skill packs in name order
    pub fn bonus_skill_packs(&self) -> impl Iterator<Item = &[String]> {
        self.bonus_skill_packs.values().map(Vec::as_slice)
    }

    pub fn bonus_skill_pack_count(&self) -> usize {
        self.bonus_skill_packs.len()
    }

    pub fn bonus_skills(&self) -> &[String] {
        &self.bonus_skills
    }

    pub fn motivations(&self) -> &[Motivation] {
        &self.motivations
    }

    pub fn bonds(&self) -> &[String] {
        &self.bonds
    }

    pub fn names(&self) -> &NameLists {
        &self.names
    }

    pub fn disorders(&self) -> &[String] {
        &self.disorders
    }

    pub fn rules(&self) -> &GenerationRules {
        &self.rules
    }
}
