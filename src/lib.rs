//! Chargen Core - tabletop horror RPG character generator
//!
//! Builds complete player Agents and NPCs from a data catalog of
//! professions, nations, skills and gear, with optional veteran and damaged
//! backstories. Generation is deterministic for a given random source.
//!
//! ```ignore
//! use chargen_core::config::ConfigCatalog;
//! use chargen_core::generator::{CharacterGenerator, GenerationParams};
//!
//! let catalog = ConfigCatalog::from_path("data/catalog.json")?;
//! let params = GenerationParams { seed: Some(7), ..Default::default() };
//! let character = CharacterGenerator::new(&catalog).generate(&params, &mut params.rng())?;
//! println!("{}", chargen_core::render::render_character(&character));
//! ```
//!
//! Python bindings are available behind the `python` feature.

pub mod character;
pub mod config;
pub mod error;
pub mod generator;
pub mod postprocess;
pub mod render;

#[cfg(feature = "python")]
mod bindings;

pub use error::{CharGenError, Result};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn chargen_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    bindings::register(m)
}
