//! Gear catalog and gear kit structures

use serde::{Deserialize, Serialize};

/// Weapon entry of the gear catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    /// Skill used to attack with this weapon
    pub skill: String,
    #[serde(default)]
    pub base_range: Option<String>,
    #[serde(default)]
    pub damage: Option<String>,
    #[serde(default)]
    pub armor_piercing: Option<i32>,
    /// Lethality rating in percent
    #[serde(default)]
    pub lethality: Option<i32>,
    #[serde(default)]
    pub kill_radius: Option<String>,
    #[serde(default)]
    pub ammo: Option<i32>,
}

/// Armor entry of the gear catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    #[serde(default)]
    pub armor_rating: i32,
}

/// Miscellaneous equipment entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Reference from a gear kit into the gear catalog
///
/// Accepts either a bare id (`"glock_17"`) or `{ "id": ..., "chance": 50 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GearRefRepr")]
pub struct GearRef {
    pub id: String,
    /// Inclusion probability in percent; `None` means always included
    pub chance: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GearRefRepr {
    Id(String),
    Detailed {
        id: String,
        #[serde(default)]
        chance: Option<u32>,
    },
}

impl From<GearRefRepr> for GearRef {
    fn from(repr: GearRefRepr) -> Self {
        match repr {
            GearRefRepr::Id(id) => GearRef { id, chance: None },
            GearRefRepr::Detailed { id, chance } => GearRef { id, chance },
        }
    }
}

/// Named bundle of probabilistic equipment references
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearKit {
    #[serde(default)]
    pub weapons: Vec<GearRef>,
    #[serde(default)]
    pub armor: Vec<GearRef>,
    #[serde(default)]
    pub other: Vec<GearRef>,
}
