//! Demographics: sex, age, nationality, birthday, name and job labels

use crate::character::{Demographics, Sex};
use crate::config::{ConfigCatalog, Profession};
use crate::error::{CharGenError, Result};
use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

/// Birthdays fall within this (leap) year
pub const REFERENCE_YEAR: i32 = 2000;

/// Inputs of the demographics step that come from the caller
#[derive(Debug, Clone, Default)]
pub struct DemographicsRequest<'a> {
    pub min_age: u32,
    pub max_age: u32,
    pub random_nationality: bool,
    pub sex: Option<Sex>,
    pub label: Option<&'a str>,
    pub employer: Option<&'a str>,
}

/// Map a [0, 100) roll to a sex
#[inline]
pub fn sex_from_roll(roll: u32) -> Sex {
    match roll {
        0..=44 => Sex::Male,
        45..=89 => Sex::Female,
        _ => Sex::NonBinary,
    }
}

pub fn generate_sex<R: Rng + ?Sized>(rng: &mut R) -> Sex {
    sex_from_roll(rng.gen_range(0..100))
}

pub fn generate_demographics<R: Rng + ?Sized>(
    catalog: &ConfigCatalog,
    profession: &Profession,
    request: &DemographicsRequest<'_>,
    rng: &mut R,
) -> Result<Demographics> {
    let sex = match request.sex {
        Some(sex) => sex,
        None => generate_sex(rng),
    };

    let age = rng.gen_range(request.min_age..=request.max_age);

    let nation = if request.random_nationality {
        catalog
            .nations()
            .choose(rng)
            .ok_or_else(|| CharGenError::not_found("Nation", "any"))?
            .clone()
    } else {
        catalog.default_nation()?.clone()
    };

    let offset = rng.gen_range(0..=365u64);
    let birthday = NaiveDate::from_ymd_opt(REFERENCE_YEAR, 1, 1)
        .and_then(|start| start.checked_add_days(Days::new(offset)))
        .ok_or_else(|| {
            CharGenError::InvalidArgument(format!("birthday offset out of range: {}", offset))
        })?;

    let label = request
        .label
        .map(str::to_string)
        .unwrap_or_else(|| profession.label.clone());
    let employer = request
        .employer
        .map(str::to_string)
        .unwrap_or_else(|| profession.employer_display());

    tracing::trace!(?sex, age, nation = %nation.name, %birthday, "demographics rolled");

    Ok(Demographics {
        sex,
        age,
        birthday,
        nation,
        label,
        employer,
    })
}

/// "Forename Surname" from the name lists matching `sex`
pub fn generate_name<R: Rng + ?Sized>(
    catalog: &ConfigCatalog,
    sex: Sex,
    rng: &mut R,
) -> Result<String> {
    let names = catalog.names();
    let (list, key) = match sex {
        Sex::Male => (&names.male, "male"),
        Sex::Female => (&names.female, "female"),
        Sex::NonBinary => {
            if rng.gen_bool(0.5) {
                (&names.male, "male")
            } else {
                (&names.female, "female")
            }
        }
    };

    let forename = list
        .choose(rng)
        .ok_or_else(|| CharGenError::not_found("Name list", key))?;
    let surname = names
        .surname
        .choose(rng)
        .ok_or_else(|| CharGenError::not_found("Name list", "surname"))?;

    Ok(format!("{} {}", forename, surname))
}
