//! Bonds, special training and motivations

use crate::config::{ConfigCatalog, Motivation, Profession};
use crate::error::{CharGenError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Draw `count` bonds from the templates, with replacement
pub fn generate_bonds<R: Rng + ?Sized>(
    catalog: &ConfigCatalog,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let templates = catalog.bonds();
    if templates.is_empty() {
        return Err(CharGenError::not_found("Bond templates", "bonds"));
    }

    Ok((0..count)
        .filter_map(|_| templates.choose(rng).cloned())
        .collect())
}

/// Each training option is included independently at the profession's chance
pub fn generate_special_training<R: Rng + ?Sized>(
    catalog: &ConfigCatalog,
    profession: &Profession,
    rng: &mut R,
) -> Result<Vec<String>> {
    let training = &profession.special_training;
    let mut result = Vec::new();

    for id in &training.options {
        if rng.gen_range(0..100) < training.chance {
            result.push(catalog.special_training(id)?.display());
        }
    }
    Ok(result)
}

/// Between one and three weighted motivations
pub fn generate_motivations<R: Rng + ?Sized>(catalog: &ConfigCatalog, rng: &mut R) -> Vec<String> {
    let pool: Vec<&Motivation> = catalog
        .motivations()
        .iter()
        .flat_map(|motivation| std::iter::repeat(motivation).take(motivation.chances as usize))
        .collect();
    if pool.is_empty() {
        return Vec::new();
    }

    let count = rng.gen_range(1..=3);
    let mut motivations = Vec::with_capacity(count);

    for _ in 0..count {
        let Some(entry) = pool.choose(rng) else {
            break;
        };
        let Some(line) = entry.lines.choose(rng) else {
            continue;
        };
        let text = match entry.objects.choose(rng) {
            Some(object) => format!("{} {}", line, object),
            None => line.clone(),
        };
        motivations.push(text);
    }
    motivations
}
