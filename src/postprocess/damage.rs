//! Damaged veteran pass: one traumatic backstory event

use super::veterancy::{improve_skills, VeterancyOptions};
use crate::character::Character;
use crate::config::{ConfigCatalog, OCCULT, UNNATURAL};
use crate::error::{CharGenError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

pub const VIOLENCE_DISORDER: &str = "Adapted to violence";
pub const HELPLESSNESS_DISORDER: &str = "Adapted to helplessness";

const TRAUMA_SAN_LOSS: i32 = 5;
const TRAUMA_CHA_LOSS: i32 = 3;

/// Kind of life event a damaged veteran went through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageKind {
    ExtremeViolence,
    Captivity,
    HardExperience,
    ForbiddenKnowledge,
}

impl DamageKind {
    /// Map a [0, 100) roll to its bucket
    #[inline]
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..=29 => DamageKind::ExtremeViolence,
            30..=59 => DamageKind::Captivity,
            60..=89 => DamageKind::HardExperience,
            _ => DamageKind::ForbiddenKnowledge,
        }
    }

    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_roll(rng.gen_range(0..100))
    }
}

pub fn apply_damage<R: Rng + ?Sized>(
    character: Character,
    catalog: &ConfigCatalog,
    rng: &mut R,
) -> Result<Character> {
    let kind = DamageKind::roll(rng);
    apply_damage_kind(character, kind, catalog, rng)
}

pub fn apply_damage_kind<R: Rng + ?Sized>(
    mut character: Character,
    kind: DamageKind,
    catalog: &ConfigCatalog,
    rng: &mut R,
) -> Result<Character> {
    tracing::debug!(?kind, name = %character.name, "applying damage");

    match kind {
        DamageKind::ExtremeViolence | DamageKind::Captivity => {
            character.skills.adjust(OCCULT, 10);
            character.derived.san = (character.derived.san - TRAUMA_SAN_LOSS).max(0);
            character.statistics.charisma =
                (character.statistics.charisma - TRAUMA_CHA_LOSS).max(0);
            let disorder = if kind == DamageKind::ExtremeViolence {
                VIOLENCE_DISORDER
            } else {
                HELPLESSNESS_DISORDER
            };
            character.motivations.push(disorder.to_string());
        }
        DamageKind::HardExperience => {
            character.skills.adjust(OCCULT, 10);
            character.skills = improve_skills(
                character.skills,
                &VeterancyOptions::hard_experience(),
                rng,
            );
            if !character.bonds.is_empty() {
                let index = rng.gen_range(0..character.bonds.len());
                character.bonds.remove(index);
            }
        }
        DamageKind::ForbiddenKnowledge => {
            character.skills.adjust(UNNATURAL, 10);
            character.skills.adjust(OCCULT, 20);
            let power = character.statistics.power;
            character.derived.san = (character.derived.san - power).max(0);
            character.derived.breaking_point = (character.derived.san - power).max(0);
            let disorder = catalog
                .disorders()
                .choose(rng)
                .ok_or_else(|| CharGenError::not_found("Disorder list", "disorders"))?;
            character.motivations.push(disorder.clone());
        }
    }

    Ok(character)
}
