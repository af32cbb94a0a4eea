//! Character generation: one stage per submodule, sequenced by [`CharacterGenerator`]

mod demographics;
mod engine;
mod gear;
mod narrative;
mod skills;
mod statistics;

#[cfg(test)]
mod property_tests;

pub use demographics::*;
pub use engine::*;
pub use gear::*;
pub use narrative::*;
pub use skills::*;
pub use statistics::*;
