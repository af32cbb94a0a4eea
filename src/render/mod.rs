//! Plain-text statblock rendering

use crate::character::Character;
use crate::config::Weapon;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Built-in statblock layout
pub const DEFAULT_TEMPLATE: &str = include_str!("../../data/statblock.txt");

static BLANK_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\r?\n){3,}").expect("blank-line pattern is valid"));

static WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w").expect("word-start pattern is valid"));

/// Upper-case the first letter of every word
pub fn title_case(text: &str) -> String {
    WORD_START
        .replace_all(text, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Collapse three or more line breaks into a single blank line
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINES.replace_all(text, "\n\n").into_owned()
}

/// `"LABEL: a, b, c"`, or nothing for an empty list
fn labeled_list<I, S>(label: &str, items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
    if items.is_empty() {
        String::new()
    } else {
        format!("{}: {}", label, items.join(", "))
    }
}

fn render_weapon(weapon: &Weapon, skill_value: i32) -> String {
    let mut parts = vec![format!("{} {}%", weapon.name, skill_value)];
    if let Some(damage) = &weapon.damage {
        parts.push(format!("DMG {}", damage));
    }
    if let Some(lethality) = weapon.lethality {
        parts.push(format!("Lethality {}%", lethality));
    }
    if let Some(range) = &weapon.base_range {
        parts.push(format!("Base Range {}", range));
    }
    if let Some(radius) = &weapon.kill_radius {
        parts.push(format!("Kill Radius {}", radius));
    }
    if let Some(ap) = weapon.armor_piercing {
        parts.push(format!("Armor Piercing {}", ap));
    }
    if let Some(ammo) = weapon.ammo {
        parts.push(format!("Ammo {}", ammo));
    }
    parts.join(", ")
}

fn placeholders(character: &Character) -> [(&'static str, String); 14] {
    let demographics = &character.demographics;

    let mut skills: Vec<String> = character
        .skills
        .iter()
        .map(|(name, value)| format!("{} {}%", title_case(name), value))
        .collect();
    skills.sort();

    let attacks = if character.attacks.is_empty() {
        String::new()
    } else {
        let lines: Vec<String> = character
            .attacks
            .iter()
            .map(|attack| render_weapon(&attack.weapon, attack.skill_value))
            .collect();
        format!("ATTACKS:\n{}", lines.join("\n"))
    };

    [
        ("{name}", character.name.clone()),
        ("{label}", demographics.label.clone()),
        ("{sex}", demographics.sex.short_code().to_string()),
        (
            "{age}",
            format!("{} ({})", demographics.age, demographics.birthday.format("%b %d")),
        ),
        ("{statistics}", character.statistics.to_string()),
        ("{derived_statistics}", character.derived.to_string()),
        ("{skills}", labeled_list("SKILLS", &skills)),
        (
            "{special_training}",
            labeled_list("SPECIAL TRAINING", &character.special_training),
        ),
        ("{bonds}", labeled_list("BONDS", &character.bonds)),
        (
            "{motivations_disorders}",
            labeled_list("MOTIVATIONS AND MENTAL DISORDERS", &character.motivations),
        ),
        (
            "{armor}",
            labeled_list(
                "ARMOR",
                character
                    .armor
                    .iter()
                    .map(|armor| format!("{} (Armor {})", armor.name, armor.armor_rating)),
            ),
        ),
        ("{attacks}", attacks),
        (
            "{equipment}",
            labeled_list(
                "EQUIPMENT",
                character.equipment.iter().map(|item| match &item.description {
                    Some(description) => format!("{} ({})", item.name, description),
                    None => item.name.clone(),
                }),
            ),
        ),
        (
            "{notes}",
            format!(
                "EMPLOYER: {}, NATIONALITY: {} ({})",
                demographics.employer, demographics.nation.nationality, demographics.nation.name
            ),
        ),
    ]
}

/// Fill `template` with the character's sections
pub fn render_with_template(character: &Character, template: &str) -> String {
    let filled = placeholders(character)
        .iter()
        .fold(template.to_string(), |text, (key, value)| text.replace(key, value));
    collapse_blank_lines(&filled)
}

/// Render with the built-in statblock layout
pub fn render_character(character: &Character) -> String {
    render_with_template(character, DEFAULT_TEMPLATE)
}
