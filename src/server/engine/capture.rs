//! Ball normalization and catch probability.

use rand::Rng;

use super::constants::POKEBALLS;

const POKEPUFF_BONUS: f64 = 0.25;
const LEVEL_PENALTY_PER_LEVEL: f64 = 0.02;
const PENALTY_FREE_LEVEL: i32 = 10;
const MIN_CHANCE: f64 = 0.05;
const MAX_CHANCE: f64 = 0.95;

fn fold(value: &str) -> String {
    value
        .to_lowercase()
        .replace(['é', 'è', 'ê'], "e")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Maps a user-supplied ball name such as "poké ball" to its canonical name.
pub fn normalize_ball(input: &str) -> Option<&'static str> {
    let folded = fold(input);
    POKEBALLS
        .iter()
        .find(|(name, _)| fold(name) == folded)
        .map(|(name, _)| *name)
}

/// Base catch rate of a canonical ball name.
pub fn catch_rate(ball: &str) -> f64 {
    POKEBALLS
        .iter()
        .find(|(name, _)| *name == ball)
        .map(|(_, rate)| *rate)
        .unwrap_or(0.5)
}

/// Level of a monster caught straight from an encounter.
pub fn wild_level(rng: &mut impl Rng) -> i32 {
    rng.random_range(5..=14)
}

/// Probability that a throw succeeds.
///
/// Monsters in battle are assumed to be worn down to 30-70% health, which
/// adds up to 35% on top of the ball's rate.
pub fn capture_chance(
    rng: &mut impl Rng,
    ball_rate: f64,
    pokepuffs: u32,
    level: i32,
    in_battle: bool,
) -> f64 {
    let puff_bonus = POKEPUFF_BONUS * f64::from(pokepuffs);
    let level_penalty =
        (f64::from(level - PENALTY_FREE_LEVEL) * LEVEL_PENALTY_PER_LEVEL).max(0.0);
    let battle_bonus = if in_battle {
        let health: f64 = rng.random_range(0.3..0.7);
        (1.0 - health) * 0.5
    } else {
        0.0
    };

    (ball_rate + puff_bonus - level_penalty + battle_bonus).clamp(MIN_CHANCE, MAX_CHANCE)
}

pub fn attempt(rng: &mut impl Rng, chance: f64) -> bool {
    rng.random::<f64>() < chance
}
