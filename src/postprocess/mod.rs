//! Post-generation passes: veterancy and damage

mod damage;
mod veterancy;

#[cfg(test)]
mod property_tests;

pub use damage::*;
pub use veterancy::*;
