//! Character generation orchestrator

use super::demographics::{generate_demographics, generate_name, DemographicsRequest};
use super::gear::resolve_gear;
use super::narrative::{generate_bonds, generate_motivations, generate_special_training};
use super::skills::SkillResolver;
use super::statistics::{
    generate_agent_statistics, generate_npc_statistics, parse_important_stats,
};
use crate::character::{Character, CharacterType, DerivedStatistics, Sex};
use crate::config::{ConfigCatalog, NpcTier, Profession};
use crate::error::{CharGenError, Result};
use crate::postprocess::{apply_damage, apply_veterancy, VeterancyOptions};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_MIN_AGE: u32 = 25;
pub const DEFAULT_MAX_AGE: u32 = 55;

/// Which profession to generate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProfessionChoice {
    Named(String),
    #[default]
    Random,
}

impl ProfessionChoice {
    /// "random" (any case) or an empty name picks at random
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("random") {
            ProfessionChoice::Random
        } else {
            ProfessionChoice::Named(name.to_string())
        }
    }
}

/// Inclusive age range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min < 0 || max < 0 {
            return Err(CharGenError::InvalidArgument(format!(
                "age must not be negative: {}..{}",
                min, max
            )));
        }
        if min > max {
            return Err(CharGenError::InvalidArgument(format!(
                "minimum age {} is above maximum age {}",
                min, max
            )));
        }
        let to_u32 = |value: i64| {
            u32::try_from(value)
                .map_err(|_| CharGenError::InvalidArgument(format!("age out of range: {}", value)))
        };
        Ok(Self {
            min: to_u32(min)?,
            max: to_u32(max)?,
        })
    }

    pub fn constant(age: u32) -> Self {
        Self { min: age, max: age }
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_AGE,
            max: DEFAULT_MAX_AGE,
        }
    }
}

/// Check a caller-supplied character count
pub fn batch_count(count: i64) -> Result<usize> {
    usize::try_from(count)
        .ok()
        .filter(|count| *count >= 1)
        .ok_or_else(|| {
            CharGenError::InvalidArgument(format!("the count must be at least 1, got {}", count))
        })
}

/// Everything a caller chooses about a generation run
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub character_type: CharacterType,
    pub profession: ProfessionChoice,
    pub count: usize,
    pub random_nationality: bool,
    pub age: AgeRange,
    pub veteran: bool,
    pub damaged: bool,
    /// Keep occult untouched by the veteran pass
    pub no_occult: bool,
    pub verbose: bool,
    pub sex: Option<Sex>,
    pub label: Option<String>,
    pub employer: Option<String>,
    pub seed: Option<u64>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            character_type: CharacterType::Agent,
            profession: ProfessionChoice::Random,
            count: 1,
            random_nationality: false,
            age: AgeRange::default(),
            veteran: false,
            damaged: false,
            no_occult: false,
            verbose: false,
            sex: None,
            label: None,
            employer: None,
            seed: None,
        }
    }
}

impl GenerationParams {
    pub fn validate(&self) -> Result<()> {
        if self.count < 1 {
            return Err(CharGenError::InvalidArgument(
                "the count must be at least 1".to_string(),
            ));
        }
        if self.age.min > self.age.max {
            return Err(CharGenError::InvalidArgument(format!(
                "minimum age {} is above maximum age {}",
                self.age.min, self.age.max
            )));
        }
        Ok(())
    }

    /// Seeded generator when a seed is set, entropy otherwise
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// Sequences every generation step into one [`Character`]
pub struct CharacterGenerator<'a> {
    catalog: &'a ConfigCatalog,
}

impl<'a> CharacterGenerator<'a> {
    pub fn new(catalog: &'a ConfigCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a ConfigCatalog {
        self.catalog
    }

    fn choose_profession<R: Rng + ?Sized>(
        &self,
        choice: &ProfessionChoice,
        rng: &mut R,
    ) -> Result<&'a Profession> {
        match choice {
            ProfessionChoice::Named(id) => self.catalog.profession(id),
            ProfessionChoice::Random => {
                let ids = self.catalog.profession_ids();
                let id = ids
                    .choose(rng)
                    .ok_or_else(|| CharGenError::not_found("Profession", "random"))?;
                self.catalog.profession(id)
            }
        }
    }

    /// Generate one character
    pub fn generate<R: Rng + ?Sized>(
        &self,
        params: &GenerationParams,
        rng: &mut R,
    ) -> Result<Character> {
        params.validate()?;

        let profession = self.choose_profession(&params.profession, rng)?;
        let character_type = params.character_type;
        let important_stats = match character_type {
            CharacterType::Npc => parse_important_stats(&profession.npc.important_stats)?,
            CharacterType::Agent => Default::default(),
        };

        tracing::debug!(profession = %profession.id, ?character_type, "generating character");

        let request = DemographicsRequest {
            min_age: params.age.min,
            max_age: params.age.max,
            random_nationality: params.random_nationality,
            sex: params.sex,
            label: params.label.as_deref(),
            employer: params.employer.as_deref(),
        };
        let demographics = generate_demographics(self.catalog, profession, &request, rng)?;
        let name = generate_name(self.catalog, demographics.sex, rng)?;

        let statistics = match character_type {
            CharacterType::Agent => generate_agent_statistics(rng),
            CharacterType::Npc => {
                let tier = NpcTier::from_age(demographics.age);
                generate_npc_statistics(self.catalog.rules().npc_tiers.get(tier), &important_stats)
            }
        };
        let derived = DerivedStatistics::from_statistics(&statistics);

        let skills = SkillResolver::new(self.catalog, &demographics.nation.native_language)
            .build(profession, character_type, demographics.age, rng)?;

        let gear = resolve_gear(self.catalog, profession, &skills, rng)?;
        let bonds = generate_bonds(self.catalog, profession.bonds, rng)?;
        let special_training = generate_special_training(self.catalog, profession, rng)?;
        let motivations = generate_motivations(self.catalog, rng);

        let mut character = Character {
            name,
            character_type,
            profession: profession.clone(),
            demographics,
            statistics,
            derived,
            skills,
            bonds,
            special_training,
            attacks: gear.attacks,
            armor: gear.armor,
            equipment: gear.equipment,
            motivations,
        };

        if params.veteran {
            let options =
                VeterancyOptions::from_rules(&self.catalog.rules().veterancy, params.no_occult);
            character = apply_veterancy(character, &options, rng);
        }
        if params.damaged {
            character = apply_damage(character, self.catalog, rng)?;
        }

        if params.verbose {
            tracing::info!(
                name = %character.name,
                profession = %profession.id,
                "character generated"
            );
        } else {
            tracing::debug!(name = %character.name, "character generated");
        }
        Ok(character)
    }

    /// Generate `params.count` characters in order, handing each to `sink`
    ///
    /// The first error stops the batch; characters already handed to the sink
    /// are unaffected. Returns the number of characters produced.
    pub fn generate_batch<R, F>(
        &self,
        params: &GenerationParams,
        rng: &mut R,
        mut sink: F,
    ) -> Result<usize>
    where
        R: Rng + ?Sized,
        F: FnMut(usize, Character) -> Result<()>,
    {
        params.validate()?;

        for index in 0..params.count {
            if params.verbose {
                tracing::info!("generating character {} of {}", index + 1, params.count);
            }
            let character = self.generate(params, rng)?;
            sink(index, character)?;
        }
        Ok(params.count)
    }

    /// Collect a whole batch
    pub fn generate_many<R: Rng + ?Sized>(
        &self,
        params: &GenerationParams,
        rng: &mut R,
    ) -> Result<Vec<Character>> {
        let mut characters = Vec::with_capacity(params.count);
        self.generate_batch(params, rng, |_, character| {
            characters.push(character);
            Ok(())
        })?;
        Ok(characters)
    }
}
