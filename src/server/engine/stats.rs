//! Stat formulas, monster initialization and level-ups.

use rand::{seq::IndexedRandom, Rng};

use super::{
    constants::{
        CHARACTERISTICS, FALLBACK_ABILITIES, FALLBACK_MOVE, GENDERS, MAX_EV_PER_STAT,
        MAX_FRIENDSHIP, MAX_IV, MAX_LEVEL, MAX_TOTAL_EV, NATURES,
    },
    rng::{chance, weighted_index},
};
use crate::server::model::{
    catalogue::Move,
    monster::{MonsterProfile, MonsterTemplate},
};

/// Weights for gaining 0 through 5 points of friendship or EVs per level.
const GAIN_WEIGHTS: [f64; 6] = [10.0, 35.0, 25.0, 15.0, 10.0, 5.0];
const LEARN_MOVE_CHANCE: f64 = 0.2;
const MAX_STARTING_FRIENDSHIP: i32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Atk,
        Stat::Def,
        Stat::Spa,
        Stat::Spd,
        Stat::Spe,
    ];

    /// Index into the nature table, which has no entry for HP.
    fn nature_index(&self) -> Option<usize> {
        match self {
            Self::Hp => None,
            Self::Atk => Some(0),
            Self::Def => Some(1),
            Self::Spa => Some(2),
            Self::Spd => Some(3),
            Self::Spe => Some(4),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatBlock {
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    pub spa: i32,
    pub spd: i32,
    pub spe: i32,
}

impl StatBlock {
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Atk => self.atk = value,
            Stat::Def => self.def = value,
            Stat::Spa => self.spa = value,
            Stat::Spd => self.spd = value,
            Stat::Spe => self.spe = value,
        }
    }

    pub fn total(&self) -> i32 {
        Stat::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

/// Multiplier a nature applies to a stat. Unknown natures are neutral.
pub fn nature_modifier(nature: &str, stat: Stat) -> f64 {
    let Some(index) = stat.nature_index() else {
        return 1.0;
    };
    let Some((_, up, down)) = NATURES
        .iter()
        .find(|(name, ..)| name.eq_ignore_ascii_case(nature))
    else {
        return 1.0;
    };

    if *up == Some(index) {
        1.1
    } else if *down == Some(index) {
        0.9
    } else {
        1.0
    }
}

pub fn roll_ivs(rng: &mut impl Rng) -> StatBlock {
    let mut ivs = StatBlock::default();
    for stat in Stat::ALL {
        ivs.set(stat, rng.random_range(0..=MAX_IV));
    }
    ivs
}

/// Base value shared by every stat at a level.
pub fn base_value(level: i32) -> i32 {
    20 + level * 5 / 2
}

pub fn calculate_stats(level: i32, ivs: &StatBlock, evs: &StatBlock, nature: &str) -> StatBlock {
    let base = base_value(level);
    let mut stats = StatBlock::default();

    for stat in Stat::ALL {
        let raw = 2 * base + ivs.get(stat) + evs.get(stat) / 4;
        let value = match stat {
            Stat::Hp => raw * level / 100 + level + 10,
            _ => {
                let scaled = f64::from(raw) * f64::from(level) / 100.0 + 5.0;
                (scaled * nature_modifier(nature, stat)).floor() as i32
            }
        };
        stats.set(stat, value);
    }

    stats
}

/// Ability and move pools a new monster draws from.
#[derive(Debug, Clone, Copy)]
pub struct MonsterPools<'a> {
    pub abilities: &'a [String],
    pub moves: &'a [Move],
}

fn roll_abilities(rng: &mut impl Rng, pool: &[String]) -> (String, String) {
    let mut distinct: Vec<&String> = Vec::new();
    for ability in pool {
        if !distinct.contains(&ability) {
            distinct.push(ability);
        }
    }

    if distinct.len() < 2 {
        return (
            FALLBACK_ABILITIES.0.to_string(),
            FALLBACK_ABILITIES.1.to_string(),
        );
    }

    let picked: Vec<&&String> = distinct.choose_multiple(rng, 2).collect();
    (picked[0].to_string(), picked[1].to_string())
}

fn matches_type(mv: &Move, types: &[String]) -> bool {
    types.iter().any(|t| t.eq_ignore_ascii_case(&mv.move_type))
}

fn matches_attribute(mv: &Move, attribute: Option<&str>) -> bool {
    match (mv.attribute.as_deref(), attribute) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

fn pick_unknown<'a>(
    rng: &mut impl Rng,
    moves: &'a [Move],
    known: &[String],
    filter: impl Fn(&Move) -> bool,
) -> Option<&'a Move> {
    let candidates: Vec<&Move> = moves
        .iter()
        .filter(|m| filter(m))
        .filter(|m| !known.iter().any(|k| k.eq_ignore_ascii_case(&m.name)))
        .collect();
    candidates.choose(rng).copied()
}

fn roll_moveset(
    rng: &mut impl Rng,
    moves: &[Move],
    types: &[String],
    attribute: Option<&str>,
    level: i32,
) -> Vec<String> {
    let count = (level / 5 + 1).max(1);
    let mut moveset: Vec<String> = Vec::new();

    for _ in 0..count {
        let roll = rng.random::<f64>();
        let picked = if roll < 0.85 {
            pick_unknown(rng, moves, &moveset, |m| matches_type(m, types))
                .or_else(|| pick_unknown(rng, moves, &moveset, |m| matches_attribute(m, attribute)))
        } else if roll < 0.95 {
            pick_unknown(rng, moves, &moveset, |m| matches_attribute(m, attribute))
        } else {
            None
        };
        let picked = picked.or_else(|| pick_unknown(rng, moves, &moveset, |_| true));

        match picked {
            Some(mv) => moveset.push(mv.name.clone()),
            None => break,
        }
    }

    if moveset.is_empty() {
        moveset.push(FALLBACK_MOVE.to_string());
    }
    moveset
}

/// Rolls everything a template leaves open: IVs, nature, characteristic,
/// gender, friendship, abilities and moves.
pub fn initialize(
    rng: &mut impl Rng,
    template: MonsterTemplate,
    pools: MonsterPools,
) -> MonsterProfile {
    let level = template.level.clamp(1, MAX_LEVEL);
    let ivs = roll_ivs(rng);
    let evs = StatBlock::default();

    let nature = NATURES
        .choose(rng)
        .map(|(name, ..)| name.to_string())
        .unwrap_or_else(|| "Hardy".to_string());
    let characteristic = CHARACTERISTICS
        .choose(rng)
        .map(|c| c.to_string())
        .unwrap_or_default();
    let weights: Vec<f64> = GENDERS.iter().map(|(_, w)| *w).collect();
    let gender = GENDERS[weighted_index(rng, &weights)].0.to_string();
    let friendship = template
        .friendship
        .unwrap_or_else(|| rng.random_range(0..=MAX_STARTING_FRIENDSHIP));

    let (ability1, ability2) = roll_abilities(rng, pools.abilities);
    let moveset = roll_moveset(
        rng,
        pools.moves,
        &template.types,
        template.attribute.as_deref(),
        level,
    );
    let stats = calculate_stats(level, &ivs, &evs, &nature);

    MonsterProfile {
        name: template.name,
        species: template.species,
        types: template.types,
        attribute: template.attribute,
        level,
        stats,
        ivs,
        evs,
        nature,
        characteristic,
        gender,
        friendship,
        ability1,
        ability2,
        moveset,
        where_met: template.where_met,
        img_link: template.img_link,
    }
}

/// What happened while leveling a monster up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelUpReport {
    pub old_level: i32,
    pub new_level: i32,
    pub learned_moves: Vec<String>,
    pub messages: Vec<String>,
}

fn learn_move(rng: &mut impl Rng, profile: &MonsterProfile, moves: &[Move]) -> Option<String> {
    let roll = rng.random::<f64>();
    let types = &profile.types;
    let attribute = profile.attribute.as_deref();
    let known = &profile.moveset;

    let picked = if roll < 0.65 {
        pick_unknown(rng, moves, known, |m| matches_type(m, types))
    } else if roll < 0.80 {
        pick_unknown(rng, moves, known, |m| matches_attribute(m, attribute))
    } else if roll < 0.90 {
        pick_unknown(rng, moves, known, |m| m.move_type.eq_ignore_ascii_case("Normal"))
    } else {
        pick_unknown(rng, moves, known, |_| true)
    };

    picked.map(|m| m.name.clone()).or_else(|| {
        let knows_fallback = known.iter().any(|k| k.eq_ignore_ascii_case(FALLBACK_MOVE));
        (!knows_fallback).then(|| FALLBACK_MOVE.to_string())
    })
}

/// Applies `levels` level-ups, stopping at the level cap.
pub fn level_up(
    rng: &mut impl Rng,
    profile: &mut MonsterProfile,
    levels: i32,
    moves: &[Move],
) -> LevelUpReport {
    let mut report = LevelUpReport {
        old_level: profile.level,
        new_level: profile.level,
        ..Default::default()
    };

    for _ in 0..levels.max(0) {
        if profile.level >= MAX_LEVEL {
            break;
        }
        profile.level += 1;

        let friendship_gain = weighted_index(rng, &GAIN_WEIGHTS) as i32;
        profile.friendship = (profile.friendship + friendship_gain).min(MAX_FRIENDSHIP);

        let stat = Stat::ALL[rng.random_range(0..Stat::ALL.len())];
        let ev_gain = weighted_index(rng, &GAIN_WEIGHTS) as i32;
        let room = (MAX_TOTAL_EV - profile.evs.total()).max(0);
        let current = profile.evs.get(stat);
        let next = (current + ev_gain.min(room)).min(MAX_EV_PER_STAT);
        profile.evs.set(stat, next);

        if chance(rng, LEARN_MOVE_CHANCE) {
            if let Some(name) = learn_move(rng, profile, moves) {
                report
                    .messages
                    .push(format!("{} learned {}!", profile.name, name));
                report.learned_moves.push(name.clone());
                profile.moveset.push(name);
            }
        }
    }

    profile.stats = calculate_stats(profile.level, &profile.ivs, &profile.evs, &profile.nature);

    if profile.level > report.old_level {
        report.messages.insert(
            0,
            format!("{} grew to level {}!", profile.name, profile.level),
        );
    }
    report.new_level = profile.level;
    report
}
