//! Status effects and their per-turn processing.
//!
//! A monster holds at most one primary status (poison, toxic, burn, freeze,
//! paralysis, sleep). Volatile statuses (confusion, flinch) stack on top.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rng::chance;

/// Duration marker for effects that last until cured.
pub const PERMANENT: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Poison,
    Toxic,
    Burn,
    Freeze,
    Paralysis,
    Sleep,
    Confusion,
    Flinch,
}

impl StatusKind {
    pub fn is_primary(&self) -> bool {
        !matches!(self, Self::Confusion | Self::Flinch)
    }

    pub fn default_duration(&self) -> i32 {
        match self {
            Self::Freeze => 5,
            Self::Sleep => 3,
            Self::Confusion => 3,
            Self::Flinch => 1,
            Self::Poison | Self::Toxic | Self::Burn | Self::Paralysis => PERMANENT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poison => "poison",
            Self::Toxic => "toxic",
            Self::Burn => "burn",
            Self::Freeze => "freeze",
            Self::Paralysis => "paralysis",
            Self::Sleep => "sleep",
            Self::Confusion => "confusion",
            Self::Flinch => "flinch",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Poison => "Poison",
            Self::Toxic => "Toxic",
            Self::Burn => "Burn",
            Self::Freeze => "Freeze",
            Self::Paralysis => "Paralysis",
            Self::Sleep => "Sleep",
            Self::Confusion => "Confusion",
            Self::Flinch => "Flinch",
        }
    }

    fn inflicted_message(&self, name: &str) -> String {
        match self {
            Self::Poison => format!("**{}** was poisoned!", name),
            Self::Toxic => format!("**{}** was badly poisoned!", name),
            Self::Burn => format!("**{}** was burned!", name),
            Self::Freeze => format!("**{}** was frozen solid!", name),
            Self::Paralysis => format!("**{}** is paralyzed! It may be unable to move!", name),
            Self::Sleep => format!("**{}** fell asleep!", name),
            Self::Confusion => format!("**{}** became confused!", name),
            Self::Flinch => format!("**{}** flinched!", name),
        }
    }

    /// Status a damaging move of this type may inflict as a side effect.
    pub fn for_move_type(move_type: &str) -> Option<Self> {
        match move_type.to_lowercase().as_str() {
            "fire" => Some(Self::Burn),
            "poison" => Some(Self::Poison),
            "ice" => Some(Self::Freeze),
            "electric" => Some(Self::Paralysis),
            "psychic" | "ghost" => Some(Self::Confusion),
            _ => None,
        }
    }
}

/// Chance of the type-based side effect after a damaging hit.
pub const TYPE_STATUS_CHANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    #[serde(rename = "type")]
    pub kind: StatusKind,
    /// Remaining turns, or [`PERMANENT`].
    pub duration: i32,
}

impl StatusEffect {
    pub fn new(kind: StatusKind) -> Self {
        Self {
            kind,
            duration: kind.default_duration(),
        }
    }

    pub fn with_duration(kind: StatusKind, duration: i32) -> Self {
        Self { kind, duration }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Refreshed,
    /// A different primary status is already present.
    Blocked,
}

/// Applies `effect` to `effects` and returns a message for the battle log.
pub fn apply(name: &str, effects: &mut Vec<StatusEffect>, effect: StatusEffect) -> (ApplyOutcome, String) {
    if let Some(existing) = effects.iter_mut().find(|e| e.kind == effect.kind) {
        existing.duration = effect.duration;
        return (
            ApplyOutcome::Refreshed,
            format!(
                "**{}**'s {} was refreshed!",
                name,
                effect.kind.display_name()
            ),
        );
    }

    if effect.kind.is_primary() && effects.iter().any(|e| e.kind.is_primary()) {
        return (
            ApplyOutcome::Blocked,
            format!("**{}** already has a status condition!", name),
        );
    }

    effects.push(effect);
    (ApplyOutcome::Applied, effect.kind.inflicted_message(name))
}

/// Removes every status, as Full Restore does.
pub fn cure_all(effects: &mut Vec<StatusEffect>) -> bool {
    let had_any = !effects.is_empty();
    effects.clear();
    had_any
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusOutcome {
    pub can_act: bool,
    pub damage: i32,
    pub messages: Vec<String>,
    pub remaining: Vec<StatusEffect>,
}

/// Runs every effect at the start of a monster's action.
pub fn process(
    rng: &mut impl Rng,
    name: &str,
    effects: &[StatusEffect],
    max_hp: i32,
) -> StatusOutcome {
    let mut outcome = StatusOutcome {
        can_act: true,
        damage: 0,
        messages: Vec::new(),
        remaining: Vec::new(),
    };

    for effect in effects {
        let mut keep = true;

        match effect.kind {
            StatusKind::Poison => {
                let damage = (max_hp / 8).max(1);
                outcome.damage += damage;
                outcome
                    .messages
                    .push(format!("**{}** is hurt by poison! (-{} HP)", name, damage));
            }
            StatusKind::Toxic => {
                let damage = (max_hp / 16).max(1);
                outcome.damage += damage;
                outcome.messages.push(format!(
                    "**{}** is hurt by the toxic poison! (-{} HP)",
                    name, damage
                ));
            }
            StatusKind::Burn => {
                let damage = (max_hp / 16).max(1);
                outcome.damage += damage;
                outcome
                    .messages
                    .push(format!("**{}** is hurt by its burn! (-{} HP)", name, damage));
            }
            StatusKind::Freeze => {
                if chance(rng, 0.2) {
                    keep = false;
                    outcome.messages.push(format!("**{}** thawed out!", name));
                } else {
                    outcome.can_act = false;
                    outcome
                        .messages
                        .push(format!("**{}** is frozen solid!", name));
                }
            }
            StatusKind::Paralysis => {
                if chance(rng, 0.25) {
                    outcome.can_act = false;
                    outcome
                        .messages
                        .push(format!("**{}** is paralyzed! It can't move!", name));
                }
            }
            StatusKind::Sleep => {
                if chance(rng, 0.33) {
                    keep = false;
                    outcome.messages.push(format!("**{}** woke up!", name));
                } else {
                    outcome.can_act = false;
                    outcome
                        .messages
                        .push(format!("**{}** is fast asleep.", name));
                }
            }
            StatusKind::Confusion => {
                if chance(rng, 0.33) {
                    let damage = (max_hp / 16).max(1);
                    outcome.damage += damage;
                    outcome.messages.push(format!(
                        "**{}** hurt itself in confusion! (-{} HP)",
                        name, damage
                    ));
                }
            }
            StatusKind::Flinch => {
                outcome.can_act = false;
                outcome.messages.push(format!("**{}** flinched!", name));
                keep = false;
            }
        }

        if !keep {
            continue;
        }

        let mut next = *effect;
        if next.duration > 0 {
            next.duration -= 1;
            if next.duration == 0 {
                outcome.messages.push(format!(
                    "**{}**'s {} wore off!",
                    name,
                    effect.kind.display_name()
                ));
                continue;
            }
        }
        outcome.remaining.push(next);
    }

    outcome
}
