//! Turn order, targeting, knockouts, win conditions and battle rewards.

use rand::Rng;

use super::{
    damage::{parse_status_effect, roll_move_status},
    rng::chance,
    status::{StatusEffect, StatusKind, TYPE_STATUS_CHANCE},
};
use crate::server::model::{
    battle::{TeamSide, Winner},
    catalogue::Move,
};

/// HP of a generated monster with no stored stats.
pub const GENERATED_HP_TOTAL: i32 = 50;

const BASE_EXPERIENCE: f64 = 100.0;
const BASE_COINS: f64 = 50.0;
const WINNER_EXPERIENCE_MULTIPLIER: f64 = 1.5;
const WINNER_COIN_MULTIPLIER: f64 = 1.2;
const MAX_WORD_BONUS: f64 = 0.5;
const WORDS_FOR_FULL_BONUS: f64 = 1000.0;

/// Battle HP from a monster's HP total and level.
pub fn battle_hp(hp_total: i32, level: i32) -> i32 {
    (hp_total + level * 2).max(1)
}

pub fn word_count(message: &str) -> i32 {
    message.split_whitespace().count() as i32
}

/// Moves the turn pointer on by one participant. Wrapping back to the first
/// participant starts a new turn.
///
/// # Returns
/// - `(index, turn)` - The next participant index and turn number
pub fn advance(index: i32, turn: i32, participant_count: usize) -> (i32, i32) {
    if participant_count == 0 {
        return (0, turn);
    }
    let next = (index.max(0) as usize + 1) % participant_count;
    let turn = if next == 0 { turn + 1 } else { turn };
    (next as i32, turn)
}

/// Picks a target among `names`, in the order: 1-based index, exact name,
/// partial name. Without a target the first candidate is used.
///
/// # Returns
/// - `Ok(index)` - Position in `names` of the chosen target
/// - `Err(String)` - No candidates, or nothing matches the target
pub fn pick_target(names: &[&str], target: Option<&str>) -> Result<usize, String> {
    if names.is_empty() {
        return Err("There are no valid targets".to_string());
    }

    let Some(target) = target.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(0);
    };

    if let Ok(index) = target.parse::<usize>() {
        if (1..=names.len()).contains(&index) {
            return Ok(index - 1);
        }
    }

    let wanted = target.to_lowercase();
    if let Some(index) = names.iter().position(|n| n.to_lowercase() == wanted) {
        return Ok(index);
    }
    if let Some(index) = names.iter().position(|n| n.to_lowercase().contains(&wanted)) {
        return Ok(index);
    }

    Err(format!(
        "Target \"{}\" not found. Use a number (1-{}) or one of: {}",
        target,
        names.len(),
        names.join(", ")
    ))
}

/// Levels awarded to the other side for knocking out a monster.
pub fn knockout_levels(level: i32) -> i32 {
    1 + level.max(0) / 10
}

/// How many monsters one side has fielded and how many of them fainted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideTally {
    pub total: usize,
    pub fainted: usize,
}

impl SideTally {
    pub fn count(fainted: impl IntoIterator<Item = bool>) -> Self {
        fainted.into_iter().fold(Self::default(), |tally, is_fainted| Self {
            total: tally.total + 1,
            fainted: tally.fainted + usize::from(is_fainted),
        })
    }

    fn wiped_out(&self) -> bool {
        self.total > 0 && self.fainted == self.total
    }
}

/// A finished battle's winner and the reason it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Winner,
    pub reason: String,
}

/// Checks whether a battle is over. The first matching rule wins.
pub fn check_conditions(players: SideTally, opponents: SideTally, knockout_limit: i32) -> Option<Outcome> {
    let limit = knockout_limit.max(1) as usize;

    if opponents.wiped_out() {
        return Some(Outcome {
            winner: Winner::Side(TeamSide::Players),
            reason: "All enemy monsters have been defeated!".to_string(),
        });
    }
    if players.wiped_out() {
        return Some(Outcome {
            winner: Winner::Side(TeamSide::Opponents),
            reason: "All player monsters have fainted!".to_string(),
        });
    }
    if players.fainted >= limit {
        return Some(Outcome {
            winner: Winner::Side(TeamSide::Opponents),
            reason: format!("Knockout limit reached: {}/{}", players.fainted, limit),
        });
    }
    if opponents.fainted >= limit {
        return Some(Outcome {
            winner: Winner::Side(TeamSide::Players),
            reason: format!("Knockout limit reached: {}/{}", opponents.fainted, limit),
        });
    }

    None
}

/// Experience and coins for a player participant when a battle ends.
pub fn rewards(word_count: i32, won: bool) -> (i32, i32) {
    let word_bonus = (f64::from(word_count.max(0)) / WORDS_FOR_FULL_BONUS).min(MAX_WORD_BONUS);
    let (experience, coins) = if won {
        (
            BASE_EXPERIENCE * WINNER_EXPERIENCE_MULTIPLIER,
            BASE_COINS * WINNER_COIN_MULTIPLIER,
        )
    } else {
        (BASE_EXPERIENCE, BASE_COINS)
    };

    (
        (experience * (1.0 + word_bonus)).floor() as i32,
        (coins * (1.0 + word_bonus)).floor() as i32,
    )
}

/// What a status-category move does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusMoveEffect {
    /// Heals the user by half its max HP.
    Heal,
    Inflict(StatusEffect),
}

pub fn status_move_effect(mv: &Move) -> StatusMoveEffect {
    let description = mv.description.as_deref().unwrap_or_default();
    let lowered = description.to_lowercase();

    if lowered.contains("heal") || lowered.contains("restore") {
        return StatusMoveEffect::Heal;
    }

    StatusMoveEffect::Inflict(
        parse_status_effect(description)
            .unwrap_or_else(|| StatusEffect::with_duration(StatusKind::Confusion, 3)),
    )
}

/// Secondary effect of a damaging move: the one its description names, else
/// a small chance of the status tied to its type.
pub fn secondary_status(rng: &mut impl Rng, mv: &Move) -> Option<StatusEffect> {
    if mv.description.as_deref().and_then(parse_status_effect).is_some() {
        return roll_move_status(rng, mv);
    }

    let kind = StatusKind::for_move_type(&mv.move_type)?;
    chance(rng, TYPE_STATUS_CHANCE).then(|| StatusEffect::new(kind))
}
