//! Move resolution, healing and weather chip damage.

use rand::Rng;

use super::{
    rng::chance,
    status::{StatusEffect, StatusKind},
    type_chart::effectiveness,
};
use crate::server::model::catalogue::Move;

const CRITICAL_CHANCE: f64 = 0.0625;
const CRITICAL_MULTIPLIER: f64 = 1.5;
const STAB_MULTIPLIER: f64 = 1.5;
const TERRAIN_MULTIPLIER: f64 = 1.3;
const DEFAULT_POWER: i32 = 40;
const DEFAULT_STAT: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Sunny,
    Sandstorm,
    Hail,
    Snow,
    Fog,
}

impl Weather {
    pub const ALL: [Weather; 7] = [
        Weather::Clear,
        Weather::Rain,
        Weather::Sunny,
        Weather::Sandstorm,
        Weather::Hail,
        Weather::Snow,
        Weather::Fog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Rain => "rain",
            Self::Sunny => "sunny",
            Self::Sandstorm => "sandstorm",
            Self::Hail => "hail",
            Self::Snow => "snow",
            Self::Fog => "fog",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|w| w.as_str() == value)
    }

    /// Parses a stored value, treating anything unknown as clear skies.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    fn accuracy_modifier(&self) -> f64 {
        match self {
            Self::Sandstorm => 0.8,
            Self::Hail => 0.9,
            Self::Fog => 0.6,
            _ => 1.0,
        }
    }

    fn damage_modifier(&self, move_type: &str) -> f64 {
        match (self, move_type.to_lowercase().as_str()) {
            (Self::Rain, "water") => 1.5,
            (Self::Rain, "fire") => 0.5,
            (Self::Sunny, "fire") => 1.5,
            (Self::Sunny, "water") => 0.5,
            (Self::Snow, "ice") => 1.2,
            _ => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terrain {
    #[default]
    Normal,
    Electric,
    Grassy,
    Misty,
    Psychic,
}

impl Terrain {
    pub const ALL: [Terrain; 5] = [
        Terrain::Normal,
        Terrain::Electric,
        Terrain::Grassy,
        Terrain::Misty,
        Terrain::Psychic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Electric => "electric",
            Self::Grassy => "grassy",
            Self::Misty => "misty",
            Self::Psychic => "psychic",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    fn boosted_type(&self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Electric => Some("Electric"),
            Self::Grassy => Some("Grass"),
            Self::Misty => Some("Fairy"),
            Self::Psychic => Some("Psychic"),
        }
    }
}

/// Battle-wide conditions that affect every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Conditions {
    pub weather: Weather,
    pub terrain: Terrain,
}

/// Stat stage modifiers, -6 to +6.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatStages {
    pub atk: i32,
    pub def: i32,
    pub spa: i32,
    pub spd: i32,
}

/// The parts of a monster that matter for one attack.
#[derive(Debug, Clone)]
pub struct Combatant<'a> {
    pub name: &'a str,
    pub level: i32,
    pub atk: i32,
    pub def: i32,
    pub spa: i32,
    pub spd: i32,
    pub types: &'a [String],
    pub stages: StatStages,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DamageResult {
    pub damage: i32,
    pub hit: bool,
    pub critical: bool,
    pub effectiveness: f64,
    pub messages: Vec<String>,
}

impl DamageResult {
    pub fn message(&self) -> String {
        self.messages.join("\n")
    }
}

fn staged(stat: i32, stage: i32) -> i32 {
    let stat = if stat > 0 { stat } else { DEFAULT_STAT };
    let value = match stage {
        s if s > 0 => stat * (2 + s) / 2,
        s if s < 0 => stat * 2 / (2 - s),
        _ => stat,
    };
    value.max(1)
}

/// Resolves one attack.
///
/// Randomness is drawn in a fixed order: accuracy, category (only for moves
/// that are neither physical nor special), critical hit, then the spread
/// factor.
pub fn calculate(
    rng: &mut impl Rng,
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    conditions: Conditions,
    modifier: f64,
) -> DamageResult {
    let accuracy =
        f64::from(mv.accuracy.unwrap_or(100).clamp(0, 100)) * conditions.weather.accuracy_modifier();

    if rng.random::<f64>() * 100.0 > accuracy {
        return DamageResult {
            damage: 0,
            hit: false,
            critical: false,
            effectiveness: 1.0,
            messages: vec![format!(
                "{} used **{}**, but it missed!",
                attacker.name, mv.name
            )],
        };
    }

    let mut messages = vec![format!("{} used **{}**!", attacker.name, mv.name)];

    let physical = match mv.category.to_lowercase().as_str() {
        "physical" => true,
        "special" => false,
        _ => chance(rng, 0.5),
    };
    let (attack, defense) = if physical {
        (
            staged(attacker.atk, attacker.stages.atk),
            staged(defender.def, defender.stages.def),
        )
    } else {
        (
            staged(attacker.spa, attacker.stages.spa),
            staged(defender.spd, defender.stages.spd),
        )
    };

    let power = mv.power.unwrap_or(DEFAULT_POWER);
    let critical = chance(rng, CRITICAL_CHANCE);
    let spread: f64 = rng.random_range(0.85..=1.0);

    if power <= 0 {
        return DamageResult {
            damage: 0,
            hit: true,
            critical: false,
            effectiveness: 1.0,
            messages,
        };
    }

    let type_modifier = effectiveness(&mv.move_type, defender.types);
    if type_modifier == 0.0 {
        messages.push(format!("It had no effect on {}...", defender.name));
        return DamageResult {
            damage: 0,
            hit: true,
            critical: false,
            effectiveness: 0.0,
            messages,
        };
    }

    let level_factor = (2 * attacker.level.max(1)) / 5 + 2;
    let base = (level_factor * power * attack / defense) / 50 + 2;

    let stab = if attacker
        .types
        .iter()
        .any(|t| t.eq_ignore_ascii_case(&mv.move_type))
    {
        STAB_MULTIPLIER
    } else {
        1.0
    };
    let terrain = match conditions.terrain.boosted_type() {
        Some(t) if t.eq_ignore_ascii_case(&mv.move_type) => TERRAIN_MULTIPLIER,
        _ => 1.0,
    };
    let crit = if critical { CRITICAL_MULTIPLIER } else { 1.0 };

    let total = f64::from(base)
        * crit
        * type_modifier
        * stab
        * conditions.weather.damage_modifier(&mv.move_type)
        * terrain
        * modifier
        * spread;
    let damage = (total.floor() as i32).max(1);

    if critical {
        messages.push("A critical hit!".to_string());
    }
    if type_modifier > 1.0 {
        messages.push("It's super effective!".to_string());
    } else if type_modifier < 1.0 {
        messages.push("It's not very effective...".to_string());
    }

    DamageResult {
        damage,
        hit: true,
        critical,
        effectiveness: type_modifier,
        messages,
    }
}

/// Finds the status a move description talks about, with its duration.
pub fn parse_status_effect(description: &str) -> Option<StatusEffect> {
    let description = description.to_lowercase();

    let (kind, duration) = if description.contains("burn") {
        (StatusKind::Burn, 3)
    } else if description.contains("poison") {
        (StatusKind::Poison, 3)
    } else if description.contains("paraly") {
        (StatusKind::Paralysis, 3)
    } else if description.contains("sleep") {
        (StatusKind::Sleep, 2)
    } else if description.contains("freeze") || description.contains("frozen") {
        (StatusKind::Freeze, 2)
    } else if description.contains("confus") {
        (StatusKind::Confusion, 3)
    } else if description.contains("flinch") {
        (StatusKind::Flinch, 1)
    } else {
        return None;
    };

    Some(StatusEffect::with_duration(kind, duration))
}

/// Rolls the secondary effect described by a move, if any.
pub fn roll_move_status(rng: &mut impl Rng, mv: &Move) -> Option<StatusEffect> {
    let effect = parse_status_effect(mv.description.as_deref()?)?;
    let effect_chance = mv.effect_chance.unwrap_or(100);

    (rng.random::<f64>() * 100.0 < f64::from(effect_chance)).then_some(effect)
}

/// HP restored by a healing effect, capped at the missing HP.
pub fn healing(max_hp: i32, current_hp: i32, amount: Option<i32>, percentage: Option<i32>) -> i32 {
    let heal = match (amount, percentage) {
        (Some(amount), _) => amount,
        (None, Some(pct)) => max_hp * pct / 100,
        (None, None) => max_hp / 5,
    };
    heal.min(max_hp - current_hp).max(0)
}

/// End-of-turn damage from sandstorm or hail.
pub fn weather_damage<S: AsRef<str>>(max_hp: i32, types: &[S], weather: Weather) -> i32 {
    let has = |name: &str| types.iter().any(|t| t.as_ref().eq_ignore_ascii_case(name));

    let immune = match weather {
        Weather::Sandstorm => has("Rock") || has("Ground") || has("Steel"),
        Weather::Hail => has("Ice"),
        _ => return 0,
    };

    if immune {
        0
    } else {
        (max_hp / 16).max(1)
    }
}
