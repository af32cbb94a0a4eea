//! Core ability scores for Agents and NPCs

use crate::character::{Stat, Statistics};
use crate::config::NpcTierRule;
use crate::error::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Fixed arrays offered next to the rolled ones
pub const LEGACY_ARRAYS: [[i32; 6]; 3] = [
    [13, 13, 12, 12, 11, 10],
    [15, 14, 12, 11, 10, 9],
    [17, 14, 13, 10, 10, 8],
];

const ROLLED_ARRAYS: usize = 3;

/// 4d6, drop the lowest die
#[inline]
pub fn roll_ability<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    let mut dice = [0i32; 4];
    for die in dice.iter_mut() {
        *die = rng.gen_range(1..=6);
    }
    let lowest = dice.iter().copied().min().unwrap_or(0);
    dice.iter().sum::<i32>() - lowest
}

pub fn roll_ability_array<R: Rng + ?Sized>(rng: &mut R) -> [i32; 6] {
    let mut values = [0i32; 6];
    for value in values.iter_mut() {
        *value = roll_ability(rng);
    }
    values
}

/// Pick one of three rolled and three fixed arrays, then deal it out at random
pub fn generate_agent_statistics<R: Rng + ?Sized>(rng: &mut R) -> Statistics {
    let mut pool: SmallVec<[[i32; 6]; 6]> = SmallVec::new();
    for _ in 0..ROLLED_ARRAYS {
        pool.push(roll_ability_array(rng));
    }
    pool.extend(LEGACY_ARRAYS.iter().copied());

    let index = rng.gen_range(0..pool.len());
    let mut values = pool[index];
    values.shuffle(rng);

    tracing::trace!(array = index, ?values, "agent statistics assigned");
    Statistics::from_array(values)
}

/// Tier baseline everywhere, boosted for the profession's important stats
pub fn generate_npc_statistics(rule: &NpcTierRule, important: &[Stat]) -> Statistics {
    let mut stats = Statistics::default();
    for stat in Stat::ALL {
        let value = if important.contains(&stat) {
            rule.boosted_stat
        } else {
            rule.baseline_stat
        };
        stats.set(stat, value);
    }
    stats
}

pub fn parse_important_stats(names: &[String]) -> Result<SmallVec<[Stat; 6]>> {
    names.iter().map(|name| name.parse::<Stat>()).collect()
}
