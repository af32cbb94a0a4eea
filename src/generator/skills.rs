//! Skill table construction and wildcard resolution

use crate::character::{CharacterType, SkillTable};
use crate::config::{
    split_alternatives, ConfigCatalog, NpcTier, Profession, SkillSpec, WildcardKind,
};
use crate::error::{CharGenError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Builds the skill table of one character
pub struct SkillResolver<'a> {
    catalog: &'a ConfigCatalog,
    /// Native language of the character's nation
    native_language: &'a str,
}

impl<'a> SkillResolver<'a> {
    pub fn new(catalog: &'a ConfigCatalog, native_language: &'a str) -> Self {
        Self {
            catalog,
            native_language,
        }
    }

    /// Turn a skill descriptor into the concrete name stored in a table
    pub fn resolve<R: Rng + ?Sized>(&self, spec: &SkillSpec, rng: &mut R) -> Result<String> {
        let (base, kind) = match spec {
            SkillSpec::Fixed(name) => return Ok(name.clone()),
            SkillSpec::Wildcard { base, kind } => (base, *kind),
        };

        let specialization = match kind {
            WildcardKind::ForeignLanguage => {
                let foreign: Vec<&str> = self
                    .catalog
                    .nations()
                    .iter()
                    .map(|nation| nation.native_language.as_str())
                    .filter(|language| !language.eq_ignore_ascii_case(self.native_language))
                    .collect();
                foreign
                    .choose(rng)
                    .copied()
                    .ok_or_else(|| CharGenError::not_found("Foreign language", base.as_str()))?
            }
            WildcardKind::Specialization => self
                .catalog
                .specializations(base)?
                .choose(rng)
                .map(String::as_str)
                .ok_or_else(|| CharGenError::not_found("Skill type", base.as_str()))?,
        };

        Ok(format!("{} ({})", base, specialization))
    }

    /// Parse a catalog skill name and resolve it
    pub fn resolve_name<R: Rng + ?Sized>(&self, raw: &str, rng: &mut R) -> Result<String> {
        self.resolve(&SkillSpec::parse(raw), rng)
    }

    pub fn build<R: Rng + ?Sized>(
        &self,
        profession: &Profession,
        character_type: CharacterType,
        age: u32,
        rng: &mut R,
    ) -> Result<SkillTable> {
        let rules = self.catalog.rules();
        let tier = rules.npc_tiers.get(NpcTier::from_age(age));

        let ceiling = match character_type {
            CharacterType::Agent => rules.max_skill,
            CharacterType::Npc => tier.skill_ceiling,
        };

        let mut table = self.seed_defaults(ceiling, rng)?;

        for (raw, minimum) in &profession.skills.always {
            let name = self.resolve_name(raw, rng)?;
            tracing::trace!(skill = %name, minimum, "profession skill");
            table.raise_to(&name, *minimum);
        }

        match character_type {
            CharacterType::Agent => {
                self.pick_skills(&mut table, profession, rng)?;
                self.allocate_bonus_skills(&mut table, rng)?;
            }
            CharacterType::Npc => {
                for raw in &profession.npc.important_skills {
                    let name = self.resolve_name(raw, rng)?;
                    table.raise_to(&name, tier.important_skill_floor);
                }
            }
        }

        Ok(table)
    }

    fn seed_defaults<R: Rng + ?Sized>(&self, ceiling: i32, rng: &mut R) -> Result<SkillTable> {
        let mut table = SkillTable::new();
        for (raw, value) in self.catalog.default_skills() {
            let name = self.resolve_name(raw, rng)?;
            table.set(name, (*value).min(ceiling));
        }
        Ok(table)
    }

    /// Shuffle the candidate pool and take the first `pick_amount`
    fn pick_skills<R: Rng + ?Sized>(
        &self,
        table: &mut SkillTable,
        profession: &Profession,
        rng: &mut R,
    ) -> Result<()> {
        let skills = &profession.skills;
        if skills.pick.is_empty() || skills.pick_amount == 0 {
            return Ok(());
        }

        let mut candidates: Vec<(&String, &i32)> = skills.pick.iter().collect();
        candidates.shuffle(rng);

        for (raw, minimum) in candidates.into_iter().take(skills.pick_amount) {
            let name = self.resolve_name(raw, rng)?;
            tracing::trace!(skill = %name, minimum, "picked profession skill");
            table.raise_to(&name, *minimum);
        }
        Ok(())
    }

    /// Fill the bonus slots from one random pack, topping up from the global list
    pub fn allocate_bonus_skills<R: Rng + ?Sized>(
        &self,
        table: &mut SkillTable,
        rng: &mut R,
    ) -> Result<()> {
        let rules = self.catalog.rules();
        let packs: Vec<&[String]> = self.catalog.bonus_skill_packs().collect();
        let pack: &[String] = packs.choose(rng).copied().unwrap_or(&[]);

        for slot in 0..rules.bonus_slots {
            let entry = match pack.get(slot) {
                Some(entry) => entry.as_str(),
                None => self
                    .catalog
                    .bonus_skills()
                    .choose(rng)
                    .map(String::as_str)
                    .ok_or_else(|| CharGenError::not_found("Bonus skill list", "bonus_skills"))?,
            };

            let alternatives = split_alternatives(entry);
            let chosen = alternatives
                .choose(rng)
                .copied()
                .ok_or_else(|| {
                    CharGenError::InvalidConfig(format!("empty bonus skill entry in slot {}", slot))
                })?;
            let name = self.resolve_name(chosen, rng)?;

            let current = table.value(&name);
            if current >= rules.bonus_cap {
                tracing::debug!(
                    skill = %name,
                    current,
                    slot,
                    "bonus skill already at cap, slot skipped"
                );
                continue;
            }
            table.set(name, (current + rules.bonus_boost).min(rules.bonus_cap));
        }
        Ok(())
    }
}
