//! Veteran pass: a budgeted number of random skill improvements

use crate::character::{Character, SkillTable};
use crate::config::{VeterancyRules, OCCULT, UNNATURAL};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VeterancyOptions {
    /// Stop after this many improvements
    pub improvements: usize,
    pub min_increase: i32,
    /// Exclusive; equal to `min_increase` for a fixed amount
    pub max_increase: i32,
    pub cap: i32,
    pub protect_occult: bool,
}

impl VeterancyOptions {
    pub fn from_rules(rules: &VeterancyRules, protect_occult: bool) -> Self {
        Self {
            improvements: rules.improvements,
            min_increase: rules.min_increase,
            max_increase: rules.max_increase,
            cap: rules.cap,
            protect_occult,
        }
    }

    /// Five fixed +10 improvements used by the hard-experience damage
    pub fn hard_experience() -> Self {
        Self {
            improvements: 5,
            min_increase: 10,
            max_increase: 10,
            cap: 90,
            protect_occult: true,
        }
    }

    fn roll_increase<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        if self.min_increase < self.max_increase {
            rng.gen_range(self.min_increase..self.max_increase)
        } else {
            self.min_increase
        }
    }
}

#[inline]
pub fn is_protected(skill: &str, protect_occult: bool) -> bool {
    skill == UNNATURAL || (protect_occult && skill == OCCULT)
}

/// Improve random skills; low skills are more likely to improve
pub fn improve_skills<R: Rng + ?Sized>(
    mut skills: SkillTable,
    options: &VeterancyOptions,
    rng: &mut R,
) -> SkillTable {
    let mut names = skills.names();
    names.shuffle(rng);

    let mut improved = 0;
    for name in names {
        if improved >= options.improvements {
            break;
        }
        if is_protected(&name, options.protect_occult) {
            continue;
        }

        let current = skills.value(&name);
        let roll = rng.gen_range(1..100);
        if roll <= current {
            continue;
        }

        let increase = options.roll_increase(rng);
        let value = current.max((current + increase).min(options.cap));
        tracing::trace!(skill = %name, current, increase, value, "veteran improvement");
        skills.set(name, value);
        improved += 1;
    }
    skills
}

pub fn apply_veterancy<R: Rng + ?Sized>(
    mut character: Character,
    options: &VeterancyOptions,
    rng: &mut R,
) -> Character {
    character.skills = improve_skills(character.skills, options, rng);
    character
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn table() -> SkillTable {
        let mut skills = SkillTable::new();
        for (name, value) in [
            ("alertness", 20),
            ("athletics", 30),
            ("firearms", 10),
            ("law", 0),
            ("occult", 10),
            ("unnatural", 0),
            ("swim", 95),
        ] {
            skills.set(name, value);
        }
        skills
    }

    #[test]
    fn test_protected_names() {
        assert!(is_protected("unnatural", false));
        assert!(!is_protected("occult", false));
        assert!(is_protected("occult", true));
        assert!(!is_protected("law", true));
    }

    #[test]
    fn test_improvement_budget() {
        let options = VeterancyOptions {
            improvements: 2,
            min_increase: 5,
            max_increase: 15,
            cap: 90,
            protect_occult: false,
        };
        for seed in 0..30 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let before = table();
            let after = improve_skills(before.clone(), &options, &mut rng);
            let changed = before
                .iter()
                .filter(|(name, value)| after.value(name) != *value)
                .count();
            assert!(changed <= 2);
            assert_eq!(after.value("unnatural"), 0);
            assert_eq!(after.value("swim"), 95, "values above the cap never drop");
        }
    }

    #[test]
    fn test_improvement_needs_roll_above_current() {
        let options = VeterancyOptions {
            improvements: 10,
            min_increase: 1,
            max_increase: 5,
            cap: 100,
            protect_occult: false,
        };
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut skills = SkillTable::new();
            skills.set("alertness", 99);
            skills.set("law", 0);

            let after = improve_skills(skills, &options, &mut rng);
            assert_eq!(after.value("alertness"), 99, "seed {}", seed);
            assert!(after.value("law") > 0, "seed {}", seed);
        }
    }

    #[test]
    fn test_fixed_increase() {
        let options = VeterancyOptions::hard_experience();
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let before = table();
        let after = improve_skills(before.clone(), &options, &mut rng);

        assert_eq!(after.value("occult"), 10);
        for (name, value) in after.iter() {
            let old = before.value(name);
            assert!(value == old || value == (old + 10).min(90), "{} {} -> {}", name, old, value);
        }
    }
}
