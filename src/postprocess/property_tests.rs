//! Property tests for the post-generation passes

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::character::{Character, SkillTable};
use crate::config::tests::sample_catalog;
use crate::config::{ConfigCatalog, OCCULT, UNNATURAL};
use crate::generator::{CharacterGenerator, GenerationParams, ProfessionChoice};
use crate::postprocess::{
    apply_damage_kind, improve_skills, DamageKind, VeterancyOptions, HELPLESSNESS_DISORDER,
    VIOLENCE_DISORDER,
};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators
// ═══════════════════════════════════════════════════════════════════════════

fn skill_table_strategy() -> impl Strategy<Value = SkillTable> {
    proptest::collection::btree_map("[a-z]{3,12}", 0..=100i32, 1..20).prop_map(|entries| {
        let mut table = SkillTable::new();
        for (name, value) in entries {
            table.set(name, value);
        }
        table
    })
}

fn options_strategy() -> impl Strategy<Value = VeterancyOptions> {
    (0usize..12, 1..=10i32, 0..=10i32, 50..=100i32, any::<bool>()).prop_map(
        |(improvements, min_increase, spread, cap, protect_occult)| VeterancyOptions {
            improvements,
            min_increase,
            max_increase: min_increase + spread,
            cap,
            protect_occult,
        },
    )
}

fn damage_kind_strategy() -> impl Strategy<Value = DamageKind> {
    prop_oneof![
        Just(DamageKind::ExtremeViolence),
        Just(DamageKind::Captivity),
        Just(DamageKind::HardExperience),
        Just(DamageKind::ForbiddenKnowledge),
    ]
}

fn base_character(catalog: &ConfigCatalog, seed: u64) -> Character {
    let params = GenerationParams {
        profession: ProfessionChoice::parse("federal_agent"),
        ..Default::default()
    };
    CharacterGenerator::new(catalog)
        .generate(&params, &mut ChaCha8Rng::seed_from_u64(seed))
        .unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Veterancy never lowers a skill, never touches protected skills and
    /// never pushes a skill past the cap
    #[test]
    fn prop_veterancy_only_raises(
        seed in any::<u64>(),
        mut skills in skill_table_strategy(),
        options in options_strategy(),
        occult in 0..=100i32,
        unnatural in 0..=100i32
    ) {
        skills.set(OCCULT, occult);
        skills.set(UNNATURAL, unnatural);
        let before = skills.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let after = improve_skills(skills, &options, &mut rng);

        prop_assert_eq!(after.len(), before.len());
        prop_assert_eq!(after.value(UNNATURAL), unnatural);
        if options.protect_occult {
            prop_assert_eq!(after.value(OCCULT), occult);
        }

        let mut improved = 0;
        for (name, value) in after.iter() {
            let old = before.value(name);
            prop_assert!(value >= old, "{} dropped from {} to {}", name, old, value);
            if value > old {
                improved += 1;
                prop_assert!(
                    value <= options.cap,
                    "{} = {} above cap {}",
                    name,
                    value,
                    options.cap
                );
            }
        }
        prop_assert!(improved <= options.improvements);
    }

    /// Every roll lands in exactly one damage bucket
    #[test]
    fn prop_damage_roll_buckets(roll in 0u32..100) {
        let kind = DamageKind::from_roll(roll);
        let expected = if roll < 30 {
            DamageKind::ExtremeViolence
        } else if roll < 60 {
            DamageKind::Captivity
        } else if roll < 90 {
            DamageKind::HardExperience
        } else {
            DamageKind::ForbiddenKnowledge
        };
        prop_assert_eq!(kind, expected);
    }

    /// Damage keeps skills, SAN and CHA in range and adds the expected disorder
    #[test]
    fn prop_damage_effects(seed in any::<u64>(), kind in damage_kind_strategy()) {
        let catalog = sample_catalog();
        let before = base_character(&catalog, seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let after = apply_damage_kind(before.clone(), kind, &catalog, &mut rng).unwrap();

        for (name, value) in after.skills.iter() {
            prop_assert!((0..=100).contains(&value), "{} = {}", name, value);
        }
        prop_assert!(after.derived.san >= 0);
        prop_assert!(after.derived.breaking_point >= 0);
        prop_assert!(after.statistics.charisma >= 0);
        prop_assert!(after.skills.value(OCCULT) >= before.skills.value(OCCULT));

        let occult_before = before.skills.value(OCCULT);
        let power = before.statistics.power;

        match kind {
            DamageKind::ExtremeViolence | DamageKind::Captivity => {
                let disorder = if kind == DamageKind::ExtremeViolence {
                    VIOLENCE_DISORDER
                } else {
                    HELPLESSNESS_DISORDER
                };
                prop_assert_eq!(after.motivations.last().map(String::as_str), Some(disorder));
                prop_assert_eq!(after.derived.san, (before.derived.san - 5).max(0));
                prop_assert_eq!(
                    after.statistics.charisma,
                    (before.statistics.charisma - 3).max(0)
                );
                prop_assert_eq!(after.skills.value(OCCULT), (occult_before + 10).min(100));
            }
            DamageKind::HardExperience => {
                prop_assert_eq!(after.bonds.len(), before.bonds.len().saturating_sub(1));
                prop_assert_eq!(&after.motivations, &before.motivations);
                prop_assert_eq!(after.skills.value(OCCULT), (occult_before + 10).min(100));
                prop_assert_eq!(after.derived, before.derived);

                let mut improved = 0;
                for (name, value) in after.skills.iter() {
                    let old = before.skills.value(name);
                    if name == OCCULT || value == old {
                        continue;
                    }
                    improved += 1;
                    prop_assert_eq!(value, (old + 10).min(90), "{} from {}", name, old);
                }
                prop_assert!(improved <= 5, "{} skills improved", improved);
            }
            DamageKind::ForbiddenKnowledge => {
                let san = (before.derived.san - power).max(0);
                prop_assert_eq!(after.derived.san, san);
                prop_assert_eq!(after.derived.breaking_point, (san - power).max(0));
                prop_assert_eq!(after.statistics.charisma, before.statistics.charisma);
                prop_assert_eq!(
                    after.skills.value(UNNATURAL),
                    (before.skills.value(UNNATURAL) + 10).min(100)
                );
                prop_assert_eq!(after.skills.value(OCCULT), (occult_before + 20).min(100));
                let disorder = after.motivations.last().unwrap();
                prop_assert!(catalog.disorders().contains(disorder));
                prop_assert_eq!(after.motivations.len(), before.motivations.len() + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_knowledge_without_disorders_fails() {
        let catalog = sample_catalog();
        let character = base_character(&catalog, 4);
        let bare = ConfigCatalog::from_json_str(
            r#"{
                "nations": [{"name": "United States", "nationality": "American", "native_language": "English"}],
                "professions": {"a": {"label": "A", "employer": "X"}}
            }"#,
        )
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let err = apply_damage_kind(character, DamageKind::ForbiddenKnowledge, &bare, &mut rng)
            .unwrap_err();
        assert!(matches!(err, crate::error::CharGenError::ConfigNotFound { .. }));
    }
}
