//! Profession configuration and load-time override merging

use crate::error::{CharGenError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Skill requirements of a profession
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionSkills {
    /// Skills every member has, with their minimum value
    #[serde(default)]
    pub always: BTreeMap<String, i32>,
    /// Candidate pool; `pick_amount` of these are chosen
    #[serde(default)]
    pub pick: BTreeMap<String, i32>,
    #[serde(default)]
    pub pick_amount: usize,
}

/// Which stats and skills matter for an NPC of this profession
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionNpc {
    #[serde(default)]
    pub important_stats: Vec<String>,
    #[serde(default)]
    pub important_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionTraining {
    /// Inclusion chance per option, in percent
    #[serde(default)]
    pub chance: u32,
    #[serde(default)]
    pub options: Vec<String>,
}

/// Fully resolved profession template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profession {
    pub id: String,
    pub label: String,
    pub employer: String,
    pub division: Option<String>,
    pub skills: ProfessionSkills,
    pub bonds: usize,
    pub npc: ProfessionNpc,
    pub special_training: ProfessionTraining,
    pub gear_kit: Option<String>,
}

impl Profession {
    /// Employer text with the division appended when there is one
    pub fn employer_display(&self) -> String {
        match &self.division {
            Some(division) => format!("{} ({})", self.employer, division),
            None => self.employer.clone(),
        }
    }
}

/// Profession as written in the catalog, possibly overriding another one
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfessionEntry {
    pub label: Option<String>,
    pub employer: Option<String>,
    pub division: Option<String>,
    pub skills: Option<ProfessionSkills>,
    pub bonds: Option<usize>,
    pub npc: Option<ProfessionNpc>,
    pub special_training: Option<ProfessionTraining>,
    pub gear_kit: Option<String>,
    /// Id of the profession this entry builds on
    #[serde(rename = "override")]
    pub override_of: Option<String>,
}

impl ProfessionEntry {
    fn standalone(&self, id: &str) -> Result<Profession> {
        let missing = |field: &str| {
            CharGenError::InvalidConfig(format!("profession '{}' has no {}", id, field))
        };
        Ok(Profession {
            id: id.to_string(),
            label: self.label.clone().ok_or_else(|| missing("label"))?,
            employer: self.employer.clone().ok_or_else(|| missing("employer"))?,
            division: self.division.clone(),
            skills: self.skills.clone().unwrap_or_default(),
            bonds: self.bonds.unwrap_or(0),
            npc: self.npc.clone().unwrap_or_default(),
            special_training: self.special_training.clone().unwrap_or_default(),
            gear_kit: self.gear_kit.clone(),
        })
    }

    fn merged_over(&self, id: &str, base: &Profession) -> Profession {
        Profession {
            id: id.to_string(),
            label: self.label.clone().unwrap_or_else(|| base.label.clone()),
            employer: self.employer.clone().unwrap_or_else(|| base.employer.clone()),
            division: self.division.clone().or_else(|| base.division.clone()),
            skills: self.skills.clone().unwrap_or_else(|| base.skills.clone()),
            bonds: self.bonds.unwrap_or(base.bonds),
            npc: self.npc.clone().unwrap_or_else(|| base.npc.clone()),
            special_training: self
                .special_training
                .clone()
                .unwrap_or_else(|| base.special_training.clone()),
            gear_kit: self.gear_kit.clone().or_else(|| base.gear_kit.clone()),
        }
    }
}

/// Resolve every entry, merging overrides onto their base profession
pub fn resolve_professions(
    entries: &BTreeMap<String, ProfessionEntry>,
) -> Result<BTreeMap<String, Profession>> {
    let mut resolved = BTreeMap::new();
    for id in entries.keys() {
        let mut chain = Vec::new();
        resolve_one(id, entries, &mut resolved, &mut chain)?;
    }
    Ok(resolved)
}

fn resolve_one(
    id: &str,
    entries: &BTreeMap<String, ProfessionEntry>,
    resolved: &mut BTreeMap<String, Profession>,
    chain: &mut Vec<String>,
) -> Result<Profession> {
    if let Some(profession) = resolved.get(id) {
        return Ok(profession.clone());
    }

    if chain.iter().any(|seen| seen == id) {
        chain.push(id.to_string());
        return Err(CharGenError::InvalidConfig(format!(
            "profession override cycle: {}",
            chain.join(" -> ")
        )));
    }

    let entry = entries
        .get(id)
        .ok_or_else(|| CharGenError::not_found("Profession", id))?;

    chain.push(id.to_string());
    let profession = match &entry.override_of {
        Some(base_id) => {
            if !entries.contains_key(base_id) {
                return Err(CharGenError::InvalidConfig(format!(
                    "profession '{}' overrides unknown profession '{}'",
                    id, base_id
                )));
            }
            let base = resolve_one(base_id, entries, resolved, chain)?;
            entry.merged_over(id, &base)
        }
        None => entry.standalone(id)?,
    };
    chain.pop();

    resolved.insert(id.to_string(), profession.clone());
    Ok(profession)
}
