//! Character record and its building blocks

mod skills;
mod statistics;

pub use skills::*;
pub use statistics::*;

use crate::config::{Armor, Equipment, Nation, Profession, Weapon};
use crate::error::{CharGenError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    NonBinary,
}

impl Sex {
    pub fn short_code(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::NonBinary => "NB",
        }
    }
}

impl FromStr for Sex {
    type Err = CharGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            "nb" | "nonbinary" | "non-binary" => Ok(Sex::NonBinary),
            _ => Err(CharGenError::InvalidArgument(format!("unknown sex: {}", s))),
        }
    }
}

/// Player agent or non-player character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterType {
    #[default]
    Agent,
    Npc,
}

impl FromStr for CharacterType {
    type Err = CharGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agent" => Ok(CharacterType::Agent),
            "npc" => Ok(CharacterType::Npc),
            _ => Err(CharGenError::InvalidArgument(format!(
                "unknown character type: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub sex: Sex,
    pub age: u32,
    pub birthday: NaiveDate,
    pub nation: Nation,
    pub label: String,
    pub employer: String,
}

/// Weapon paired with the wielder's skill in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    pub weapon: Weapon,
    pub skill_value: i32,
}

/// Fully generated character
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    pub name: String,
    pub character_type: CharacterType,
    pub profession: Profession,
    pub demographics: Demographics,
    pub statistics: Statistics,
    pub derived: DerivedStatistics,
    pub skills: SkillTable,
    /// Ordered, duplicates allowed
    pub bonds: Vec<String>,
    pub special_training: Vec<String>,
    pub attacks: Vec<Attack>,
    pub armor: Vec<Armor>,
    pub equipment: Vec<Equipment>,
    /// Motivations followed by any disorders
    pub motivations: Vec<String>,
}

impl Character {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
