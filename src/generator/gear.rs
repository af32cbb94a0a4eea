//! Gear kit resolution

use crate::character::{Attack, SkillTable};
use crate::config::{Armor, ConfigCatalog, Equipment, GearRef, Profession};
use crate::error::{CharGenError, Result};
use rand::Rng;

/// Equipment carried by a character
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gear {
    pub attacks: Vec<Attack>,
    pub armor: Vec<Armor>,
    pub equipment: Vec<Equipment>,
}

/// Roll the inclusion chance of a kit entry
#[inline]
pub fn is_included<R: Rng + ?Sized>(gear_ref: &GearRef, rng: &mut R) -> bool {
    match gear_ref.chance {
        Some(chance) => rng.gen_range(0..100) < chance,
        None => true,
    }
}

pub fn resolve_gear<R: Rng + ?Sized>(
    catalog: &ConfigCatalog,
    profession: &Profession,
    skills: &SkillTable,
    rng: &mut R,
) -> Result<Gear> {
    let kit_id = match &profession.gear_kit {
        Some(id) => id,
        None => return Ok(Gear::default()),
    };
    let kit = catalog.gear_kit(kit_id)?;
    let mut gear = Gear::default();

    for gear_ref in &kit.weapons {
        if !is_included(gear_ref, rng) {
            continue;
        }
        let weapon = catalog.weapon(&gear_ref.id)?;
        let skill_value = skills.get(&weapon.skill).ok_or_else(|| {
            CharGenError::DataConsistency(format!(
                "weapon '{}' needs skill '{}' which profession '{}' does not have",
                gear_ref.id, weapon.skill, profession.id
            ))
        })?;
        gear.attacks.push(Attack {
            weapon: weapon.clone(),
            skill_value,
        });
    }

    for gear_ref in &kit.armor {
        if is_included(gear_ref, rng) {
            gear.armor.push(catalog.armor(&gear_ref.id)?.clone());
        }
    }

    for gear_ref in &kit.other {
        if is_included(gear_ref, rng) {
            gear.equipment.push(catalog.equipment(&gear_ref.id)?.clone());
        }
    }

    tracing::trace!(
        kit = %kit_id,
        attacks = gear.attacks.len(),
        armor = gear.armor.len(),
        equipment = gear.equipment.len(),
        "gear resolved"
    );
    Ok(gear)
}
