//! Property tests for the generator module

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::character::{CharacterType, SkillTable, Stat};
use crate::config::tests::sample_catalog;
use crate::config::FOREIGN_LANGUAGE;
use crate::error::CharGenError;
use crate::generator::{
    generate_bonds, roll_ability, AgeRange, CharacterGenerator, GenerationParams,
    ProfessionChoice, SkillResolver,
};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators
// ═══════════════════════════════════════════════════════════════════════════

fn character_type_strategy() -> impl Strategy<Value = CharacterType> {
    prop_oneof![Just(CharacterType::Agent), Just(CharacterType::Npc)]
}

fn profession_strategy() -> impl Strategy<Value = ProfessionChoice> {
    prop_oneof![
        Just(ProfessionChoice::Random),
        Just(ProfessionChoice::Named("federal_agent".to_string())),
        Just(ProfessionChoice::Named("dea_agent".to_string())),
        Just(ProfessionChoice::Named("criminal".to_string())),
        Just(ProfessionChoice::Named("scientist".to_string())),
        Just(ProfessionChoice::Named("physician".to_string())),
        Just(ProfessionChoice::Named("special_operator".to_string())),
    ]
}

fn params_strategy() -> impl Strategy<Value = GenerationParams> {
    (
        character_type_strategy(),
        profession_strategy(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        (0u32..80, 0u32..40),
    )
        .prop_map(
            |(
                character_type,
                profession,
                random_nationality,
                veteran,
                damaged,
                no_occult,
                (min, span),
            )| {
                GenerationParams {
                    character_type,
                    profession,
                    random_nationality,
                    veteran,
                    damaged,
                    no_occult,
                    age: AgeRange {
                        min,
                        max: min + span,
                    },
                    ..Default::default()
                }
            },
        )
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// 4d6 drop lowest stays within 3..=18
    #[test]
    fn prop_rolled_ability_in_range(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..20 {
            let value = roll_ability(&mut rng);
            prop_assert!((3..=18).contains(&value), "rolled {}", value);
        }
    }

    /// Every generated character keeps skills in [0, 100] and its age in range
    #[test]
    fn prop_generated_character_is_well_formed(
        seed in any::<u64>(),
        params in params_strategy()
    ) {
        let catalog = sample_catalog();
        let generator = CharacterGenerator::new(&catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let character = generator.generate(&params, &mut rng).unwrap();

        for (name, value) in character.skills.iter() {
            prop_assert!((0..=100).contains(&value), "{} = {}", name, value);
        }
        prop_assert!(character.demographics.age >= params.age.min);
        prop_assert!(character.demographics.age <= params.age.max);
        prop_assert!(character.derived.san >= 0);
        prop_assert!(character.statistics.charisma >= 0);
        if !params.damaged {
            prop_assert_eq!(character.skills.value("unnatural"), 0);
        }
        if params.character_type == CharacterType::Agent && !params.damaged {
            for stat in Stat::ALL {
                let value = character.statistics.get(stat);
                prop_assert!((3..=18).contains(&value), "{:?} = {}", stat, value);
            }
        }
    }

    /// The same seed and parameters always give the same character
    #[test]
    fn prop_generation_is_deterministic(
        seed in any::<u64>(),
        params in params_strategy()
    ) {
        let catalog = sample_catalog();
        let generator = CharacterGenerator::new(&catalog);

        let a = generator.generate(&params, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        let b = generator.generate(&params, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Bond draws return exactly the requested count, from the catalog pool
    #[test]
    fn prop_bond_count(seed in any::<u64>(), count in 0usize..6) {
        let catalog = sample_catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let bonds = generate_bonds(&catalog, count, &mut rng).unwrap();
        prop_assert_eq!(bonds.len(), count);
        prop_assert!(bonds.iter().all(|bond| catalog.bonds().contains(bond)));
    }

    /// Unknown professions are reported regardless of the other options
    #[test]
    fn prop_unknown_profession_not_found(
        seed in any::<u64>(),
        name in "[a-z]{3,10}_unknown"
    ) {
        let catalog = sample_catalog();
        let generator = CharacterGenerator::new(&catalog);
        let params = GenerationParams {
            profession: ProfessionChoice::Named(name.clone()),
            ..Default::default()
        };

        let err = generator
            .generate(&params, &mut ChaCha8Rng::seed_from_u64(seed))
            .unwrap_err();
        prop_assert_eq!(err, CharGenError::not_found("Profession", name));
    }

    /// A foreign language wildcard never resolves to the native language
    #[test]
    fn prop_foreign_language_is_not_native(seed in any::<u64>(), nation in 0usize..7) {
        let catalog = sample_catalog();
        let native = catalog.nations()[nation % catalog.nations().len()]
            .native_language
            .clone();
        let resolver = SkillResolver::new(&catalog, &native);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let name = resolver
            .resolve_name(&format!("{} (*)", FOREIGN_LANGUAGE), &mut rng)
            .unwrap();
        let language = name
            .strip_prefix(&format!("{} (", FOREIGN_LANGUAGE))
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap();
        prop_assert!(!language.eq_ignore_ascii_case(&native), "{} for {}", name, native);
    }

    /// Bonus allocation touches at most one skill per slot and respects the cap
    #[test]
    fn prop_bonus_allocation_bounded(seed in any::<u64>()) {
        let catalog = sample_catalog();
        let rules = catalog.rules();
        let resolver = SkillResolver::new(&catalog, "English");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut table = SkillTable::new();
        for (name, value) in catalog.default_skills() {
            if !name.contains("(*)") {
                table.set(name.clone(), *value);
            }
        }
        let before = table.clone();

        resolver.allocate_bonus_skills(&mut table, &mut rng).unwrap();

        let changed: Vec<(&str, i32)> = table
            .iter()
            .filter(|(name, value)| before.get(name) != Some(*value))
            .collect();
        prop_assert!(changed.len() <= rules.bonus_slots);
        for (name, value) in changed {
            let old = before.value(name);
            prop_assert!(value > old, "{} went from {} to {}", name, old, value);
            prop_assert!(value <= rules.bonus_cap, "{} = {}", name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_npc_children_use_child_tier() {
        let catalog = sample_catalog();
        let generator = CharacterGenerator::new(&catalog);
        let params = GenerationParams {
            character_type: CharacterType::Npc,
            profession: ProfessionChoice::parse("scientist"),
            age: AgeRange::constant(10),
            ..Default::default()
        };

        let character = generator
            .generate(&params, &mut ChaCha8Rng::seed_from_u64(8))
            .unwrap();
        let child = catalog.rules().npc_tiers.child;
        assert_eq!(character.statistics.intelligence, child.boosted_stat);
        assert_eq!(character.statistics.strength, child.baseline_stat);
        assert!(character
            .skills
            .iter()
            .filter(|(name, _)| name.starts_with("science ("))
            .all(|(_, value)| value >= child.important_skill_floor));
    }
}
