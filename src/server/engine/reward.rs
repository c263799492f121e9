//! Submission reward formulas.
//!
//! Art rewards come from the quality of the piece plus per-character bonuses.
//! Writing rewards come from the word count, split between every participant.
//! Levels and coins going to characters the submitter does not own count as
//! gift levels and turn into gift items.

use rand::{seq::IndexedRandom, Rng};

use super::constants::{
    lookup, APPEARANCE_BONUS_LEVELS, ART_QUALITY_LEVELS, BACKGROUND_BONUS_LEVELS,
    COINS_PER_LEVEL, EXTERNAL_ART_LEVEL_DIVISOR, EXTERNAL_BONUS_DIVISOR,
    EXTERNAL_CHARACTER_COMPLEXITY, EXTERNAL_WORDS_PER_LEVEL, GIFT_ITEM_POOL,
    GIFT_LEVELS_PER_ITEM, MAX_LEVEL, STATIC_REWARD_COINS, STATIC_REWARD_LEVELS, WORDS_PER_COIN,
    WORDS_PER_LEVEL,
};
use crate::server::model::submission::{
    Appearance, ArtSubmission, BonusRolls, ExternalArtSubmission, GiftItem, MonsterEntry,
    MonsterReward, SubmissionRewards, TrainerEntry, TrainerReward, WritingSubmission,
};

const UNIQUELY_DIFFICULT_BONUS: i32 = 3;
const TRAINER_BONUS: i32 = 3;

fn quality_levels(quality: &str) -> Result<i32, String> {
    lookup(&ART_QUALITY_LEVELS, quality).ok_or_else(|| format!("Unknown art quality: {}", quality))
}

/// Best background bonus among `backgrounds`; unknown backgrounds count as 0.
fn background_bonus(backgrounds: &[String]) -> i32 {
    backgrounds
        .iter()
        .filter_map(|b| lookup(&BACKGROUND_BONUS_LEVELS, b))
        .max()
        .unwrap_or(0)
}

fn appearance_levels(appearances: &[Appearance]) -> i32 {
    appearances
        .iter()
        .map(|a| lookup(&APPEARANCE_BONUS_LEVELS, &a.kind).unwrap_or(0) * a.count.max(1))
        .sum()
}

/// Splits the levels between what can be applied and what the level cap eats.
///
/// # Returns
/// - `(applied, capped)`
pub fn cap_levels(current_level: i32, levels: i32) -> (i32, i32) {
    if current_level >= MAX_LEVEL {
        (0, levels)
    } else if current_level + levels > MAX_LEVEL {
        (MAX_LEVEL - current_level, current_level + levels - MAX_LEVEL)
    } else {
        (levels, 0)
    }
}

/// `total / rand(2..=4) + rand(1..=4)`, then divided by `divisor`.
fn bonus_roll(rng: &mut impl Rng, total: i32, divisor: i32) -> i32 {
    let divided: i32 = total / rng.random_range(2..=4i32);
    let roll = divided + rng.random_range(1..=4i32);
    roll / divisor.max(1)
}

pub fn bonus_rolls(rng: &mut impl Rng, total: i32, divisor: i32) -> BonusRolls {
    BonusRolls {
        garden_points: bonus_roll(rng, total, divisor),
        mission_progress: bonus_roll(rng, total, divisor),
        boss_damage: bonus_roll(rng, total, divisor),
    }
}

/// One random item per started block of gift levels.
pub fn gift_items(rng: &mut impl Rng, gift_levels: i32) -> Vec<GiftItem> {
    if gift_levels <= 0 {
        return Vec::new();
    }
    let count = (gift_levels + GIFT_LEVELS_PER_ITEM - 1) / GIFT_LEVELS_PER_ITEM;

    (0..count)
        .filter_map(|_| {
            let (category, names) = GIFT_ITEM_POOL.choose(rng)?;
            let name = names.choose(rng)?;
            Some(GiftItem {
                category: category.to_string(),
                name: name.to_string(),
                quantity: 1,
            })
        })
        .collect()
}

fn monster_reward(entry: &MonsterEntry, levels: i32, coins: i32) -> MonsterReward {
    let (levels, capped_levels) = match entry.current_level {
        Some(current) => cap_levels(current, levels),
        None => (levels, 0),
    };

    MonsterReward {
        monster_id: entry.monster_id,
        levels,
        coins,
        capped_levels,
        is_owned: entry.is_owned,
    }
}

fn trainer_art_levels(entry: &TrainerEntry, overall: i32, static_rewards: bool) -> i32 {
    if entry.custom_levels > 0 {
        entry.custom_levels
    } else if static_rewards {
        STATIC_REWARD_LEVELS
    } else {
        overall + appearance_levels(&entry.appearances) + TRAINER_BONUS
    }
}

fn monster_art_levels(entry: &MonsterEntry, overall: i32, static_rewards: bool) -> i32 {
    if entry.custom_levels > 0 {
        entry.custom_levels
    } else if static_rewards {
        STATIC_REWARD_LEVELS
    } else {
        overall + appearance_levels(&entry.appearances) + entry.complexity_bonus
    }
}

fn art_coins(levels: i32, custom_levels: i32, static_rewards: bool) -> i32 {
    if static_rewards && custom_levels <= 0 {
        STATIC_REWARD_COINS
    } else {
        levels * COINS_PER_LEVEL
    }
}

/// Calculates the rewards for an art submission.
///
/// # Returns
/// - `Ok(SubmissionRewards)` - Per-character rewards with `total_levels` set to the image's
///   overall level value
/// - `Err(String)` - The quality is unknown
pub fn art(rng: &mut impl Rng, submission: &ArtSubmission) -> Result<SubmissionRewards, String> {
    let overall = quality_levels(&submission.quality)?
        + background_bonus(&submission.backgrounds)
        + if submission.uniquely_difficult {
            UNIQUELY_DIFFICULT_BONUS
        } else {
            0
        };
    let static_rewards = submission.use_static_rewards;
    let mut gift_levels = 0;

    let trainers: Vec<TrainerReward> = submission
        .trainers
        .iter()
        .map(|t| {
            let levels = trainer_art_levels(t, overall, static_rewards);
            if !t.is_owned {
                gift_levels += levels;
            }
            TrainerReward {
                trainer_id: t.trainer_id,
                levels,
                coins: art_coins(levels, t.custom_levels, static_rewards),
                is_owned: t.is_owned,
            }
        })
        .collect();

    let monsters: Vec<MonsterReward> = submission
        .monsters
        .iter()
        .map(|m| {
            let levels = monster_art_levels(m, overall, static_rewards);
            let reward = monster_reward(m, levels, art_coins(levels, m.custom_levels, static_rewards));
            if !m.is_owned {
                gift_levels += reward.levels + reward.capped_levels;
            }
            reward
        })
        .collect();

    gift_levels += submission.npcs.iter().map(|n| n.levels.max(0)).sum::<i32>();

    let bonus_total = trainers.iter().map(|t| t.levels).sum::<i32>()
        + monsters.iter().map(|m| m.levels).sum::<i32>();
    let total_coins =
        trainers.iter().map(|t| t.coins).sum::<i32>() + monsters.iter().map(|m| m.coins).sum::<i32>();

    Ok(SubmissionRewards {
        total_levels: overall,
        total_coins,
        trainers,
        monsters,
        bonus: bonus_rolls(rng, bonus_total, 1),
        gift_levels,
        gift_items: gift_items(rng, gift_levels),
    })
}

/// Share of `total` for participant `index` out of `participants`; the
/// remainder goes to the earliest participants.
fn share(total: i32, participants: i32, index: i32) -> i32 {
    total / participants + if index < total % participants { 1 } else { 0 }
}

/// Calculates the rewards for a writing submission.
///
/// # Returns
/// - `Ok(SubmissionRewards)` - Levels and coins split between every participant
/// - `Err(String)` - Nobody takes part in the submission
pub fn writing(
    rng: &mut impl Rng,
    submission: &WritingSubmission,
) -> Result<SubmissionRewards, String> {
    let word_count = submission.word_count.max(0);
    let total_levels = word_count / WORDS_PER_LEVEL;
    let total_coins = word_count / WORDS_PER_COIN;

    let participants =
        (submission.trainers.len() + submission.monsters.len() + submission.npcs.len()) as i32;
    if participants == 0 {
        return Err("No trainers or monsters specified for writing submission".to_string());
    }

    let mut gift_levels = 0;
    let mut index = 0;

    let mut trainers = Vec::with_capacity(submission.trainers.len());
    for t in &submission.trainers {
        let levels = share(total_levels, participants, index);
        if !t.is_owned {
            gift_levels += levels;
        }
        trainers.push(TrainerReward {
            trainer_id: t.trainer_id,
            levels,
            coins: share(total_coins, participants, index),
            is_owned: t.is_owned,
        });
        index += 1;
    }

    let mut monsters = Vec::with_capacity(submission.monsters.len());
    for m in &submission.monsters {
        let reward = monster_reward(
            m,
            share(total_levels, participants, index),
            share(total_coins, participants, index),
        );
        if !m.is_owned {
            gift_levels += reward.levels + reward.capped_levels;
        }
        monsters.push(reward);
        index += 1;
    }

    for _ in &submission.npcs {
        gift_levels += share(total_levels, participants, index);
        index += 1;
    }

    Ok(SubmissionRewards {
        total_levels,
        total_coins,
        trainers,
        monsters,
        bonus: bonus_rolls(rng, total_levels, 1),
        gift_levels,
        gift_items: gift_items(rng, gift_levels),
    })
}

/// Calculates the rewards for art made for someone outside the game.
///
/// # Returns
/// - `Ok(SubmissionRewards)` - Totals and halved bonus rolls, without per-character rewards
/// - `Err(String)` - The quality is unknown
pub fn external_art(
    rng: &mut impl Rng,
    submission: &ExternalArtSubmission,
) -> Result<SubmissionRewards, String> {
    let characters: i32 = submission
        .characters
        .iter()
        .map(|c| {
            lookup(&APPEARANCE_BONUS_LEVELS, &c.appearance).unwrap_or(0)
                + lookup(&EXTERNAL_CHARACTER_COMPLEXITY, &c.complexity).unwrap_or(0)
        })
        .sum();
    let raw = quality_levels(&submission.quality)?
        + background_bonus(&submission.backgrounds)
        + characters;
    let total_levels = raw / EXTERNAL_ART_LEVEL_DIVISOR;

    Ok(SubmissionRewards {
        total_levels,
        total_coins: total_levels * COINS_PER_LEVEL,
        bonus: bonus_rolls(rng, total_levels, EXTERNAL_BONUS_DIVISOR),
        ..Default::default()
    })
}

/// Calculates the rewards for writing made for someone outside the game.
pub fn external_writing(rng: &mut impl Rng, word_count: i32) -> SubmissionRewards {
    let total_levels = word_count.max(0) / EXTERNAL_WORDS_PER_LEVEL;

    SubmissionRewards {
        total_levels,
        total_coins: total_levels * COINS_PER_LEVEL,
        bonus: bonus_rolls(rng, total_levels, EXTERNAL_BONUS_DIVISOR),
        ..Default::default()
    }
}
