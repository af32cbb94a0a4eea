//! Generation rule constants, overridable from the catalog

use serde::{Deserialize, Serialize};

/// Tunable numbers used by the generation pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRules {
    /// Ceiling of every skill value
    pub max_skill: i32,
    /// Number of bonus skill slots an Agent fills
    pub bonus_slots: usize,
    pub bonus_boost: i32,
    /// Bonus points never raise a skill above this
    pub bonus_cap: i32,
    pub npc_tiers: NpcTierTable,
    pub veterancy: VeterancyRules,
}

impl Default for GenerationRules {
    fn default() -> Self {
        Self {
            max_skill: 100,
            bonus_slots: 8,
            bonus_boost: 20,
            bonus_cap: 80,
            npc_tiers: NpcTierTable::default(),
            veterancy: VeterancyRules::default(),
        }
    }
}

/// Age bracket of an NPC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NpcTier {
    Child,
    Youth,
    Novice,
    Ordinary,
    Expert,
}

impl NpcTier {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=13 => NpcTier::Child,
            14..=20 => NpcTier::Youth,
            21..=29 => NpcTier::Novice,
            30..=39 => NpcTier::Ordinary,
            _ => NpcTier::Expert,
        }
    }
}

/// Stat and skill levels for one NPC tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcTierRule {
    pub baseline_stat: i32,
    pub boosted_stat: i32,
    /// Default skills are capped here
    pub skill_ceiling: i32,
    /// Important skills are raised at least to this
    pub important_skill_floor: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcTierTable {
    pub child: NpcTierRule,
    pub youth: NpcTierRule,
    pub novice: NpcTierRule,
    pub ordinary: NpcTierRule,
    pub expert: NpcTierRule,
}

impl NpcTierTable {
    pub fn get(&self, tier: NpcTier) -> &NpcTierRule {
        match tier {
            NpcTier::Child => &self.child,
            NpcTier::Youth => &self.youth,
            NpcTier::Novice => &self.novice,
            NpcTier::Ordinary => &self.ordinary,
            NpcTier::Expert => &self.expert,
        }
    }
}

impl Default for NpcTierTable {
    fn default() -> Self {
        let rule = |baseline_stat, boosted_stat, skill_ceiling, important_skill_floor| NpcTierRule {
            baseline_stat,
            boosted_stat,
            skill_ceiling,
            important_skill_floor,
        };
        Self {
            child: rule(6, 9, 20, 30),
            youth: rule(8, 11, 30, 40),
            novice: rule(10, 13, 40, 50),
            ordinary: rule(10, 14, 50, 60),
            expert: rule(11, 15, 60, 70),
        }
    }
}

/// Defaults of the veteran pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VeterancyRules {
    pub improvements: usize,
    pub min_increase: i32,
    pub max_increase: i32,
    pub cap: i32,
}

impl Default for VeterancyRules {
    fn default() -> Self {
        Self {
            improvements: 8,
            min_increase: 5,
            max_increase: 15,
            cap: 90,
        }
    }
}
