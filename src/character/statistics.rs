//! Core and derived statistics

use crate::error::{CharGenError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six core attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Strength,
    Constitution,
    Dexterity,
    Intelligence,
    Power,
    Charisma,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Strength,
        Stat::Constitution,
        Stat::Dexterity,
        Stat::Intelligence,
        Stat::Power,
        Stat::Charisma,
    ];

    pub fn abbreviation(self) -> &'static str {
        match self {
            Stat::Strength => "STR",
            Stat::Constitution => "CON",
            Stat::Dexterity => "DEX",
            Stat::Intelligence => "INT",
            Stat::Power => "POW",
            Stat::Charisma => "CHA",
        }
    }
}

impl FromStr for Stat {
    type Err = CharGenError;

    /// Accepts full names and abbreviations, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Stat::Strength),
            "CON" | "CONSTITUTION" => Ok(Stat::Constitution),
            "DEX" | "DEXTERITY" => Ok(Stat::Dexterity),
            "INT" | "INTELLIGENCE" => Ok(Stat::Intelligence),
            "POW" | "POWER" => Ok(Stat::Power),
            "CHA" | "CHARISMA" => Ok(Stat::Charisma),
            _ => Err(CharGenError::InvalidArgument(format!(
                "unknown stat name: {}",
                s
            ))),
        }
    }
}

/// The six core attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub strength: i32,
    pub constitution: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    pub power: i32,
    pub charisma: i32,
}

impl Statistics {
    /// Build from values in [`Stat::ALL`] order
    pub fn from_array(values: [i32; 6]) -> Self {
        let [strength, constitution, dexterity, intelligence, power, charisma] = values;
        Self {
            strength,
            constitution,
            dexterity,
            intelligence,
            power,
            charisma,
        }
    }

    pub fn to_array(&self) -> [i32; 6] {
        [
            self.strength,
            self.constitution,
            self.dexterity,
            self.intelligence,
            self.power,
            self.charisma,
        ]
    }

    #[inline]
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Constitution => self.constitution,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
            Stat::Power => self.power,
            Stat::Charisma => self.charisma,
        }
    }

    #[inline]
    pub fn set(&mut self, stat: Stat, value: i32) {
        match stat {
            Stat::Strength => self.strength = value,
            Stat::Constitution => self.constitution = value,
            Stat::Dexterity => self.dexterity = value,
            Stat::Intelligence => self.intelligence = value,
            Stat::Power => self.power = value,
            Stat::Charisma => self.charisma = value,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Stat::ALL
            .iter()
            .map(|stat| format!("{} {}", stat.abbreviation(), self.get(*stat)))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Values computed from the core attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStatistics {
    pub hp: i32,
    pub wp: i32,
    pub san: i32,
    pub breaking_point: i32,
}

impl DerivedStatistics {
    pub fn from_statistics(stats: &Statistics) -> Self {
        let san = stats.power * 5;
        Self {
            // Integer ceiling of the average
            hp: (stats.strength + stats.constitution + 1).div_euclid(2),
            wp: stats.power,
            san,
            breaking_point: san - stats.power,
        }
    }
}

impl fmt::Display for DerivedStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HP {} WP {} SAN {} BREAKING POINT {}",
            self.hp, self.wp, self.san, self.breaking_point
        )
    }
}
