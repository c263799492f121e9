//! Random encounter generation.
//!
//! An encounter is wild monsters to catch, an enemy battle, or a found item.
//! Wild groups that are too aggressive skip straight to a battle.

use rand::{seq::IndexedRandom, Rng};

use super::{
    constants::{BASE_STAGES, ENCOUNTER_ITEM_POOL, NPC_TRAINER_NAMES},
    rng::{chance, weighted_index},
    roller::MonsterRoller,
};
use crate::{
    model::{encounter::EncounterLocation, roll::RollParams},
    server::model::{
        encounter::{EncounterItem, EncounterKind, EncounterPlan, GroupPlan, NpcTrainer},
        roll::RolledMonster,
    },
};

const KIND_WEIGHTS: [(EncounterKind, f64); 3] = [
    (EncounterKind::Battle, 30.0),
    (EncounterKind::Wild, 50.0),
    (EncounterKind::Item, 20.0),
];

pub const AUTO_BATTLE_AGRO: i32 = 75;
const NPC_TRAINER_CHANCE: f64 = 0.6;

const WILD_LEVELS: (i32, i32) = (5, 25);
const WILD_AGRO: (i32, i32) = (10, 60);
const BATTLE_LEVELS: (i32, i32) = (10, 30);

const FALLBACK_LEVEL: i32 = 10;
const FALLBACK_AGRO: i32 = 25;

/// Activities by upper agro bound.
const ACTIVITIES: [(i32, &[&str]); 5] = [
    (20, &["is napping in the shade", "is grazing peacefully", "is bathing in a stream"]),
    (40, &["is foraging for berries", "is playing in the grass", "is wandering around"]),
    (60, &["is exploring the area", "is marking its territory", "is watching you curiously"]),
    (80, &["is patrolling its territory", "is growling at intruders", "is circling you warily"]),
    (i32::MAX, &["is charging straight at you", "is baring its fangs", "is ready to attack"]),
];

pub fn roll_kind(rng: &mut impl Rng) -> EncounterKind {
    let weights: Vec<f64> = KIND_WEIGHTS.iter().map(|(_, w)| *w).collect();
    KIND_WEIGHTS[weighted_index(rng, &weights)].0
}

/// Picks a description of what a wild group is doing at the given agro.
pub fn activity(rng: &mut impl Rng, agro: i32) -> String {
    let options = ACTIVITIES
        .iter()
        .find(|(max, _)| agro <= *max)
        .map(|(_, options)| *options)
        .unwrap_or(ACTIVITIES[ACTIVITIES.len() - 1].1);

    options
        .choose(rng)
        .map(|a| a.to_string())
        .unwrap_or_else(|| "is wandering around".to_string())
}

fn in_range(rng: &mut impl Rng, min: Option<i32>, max: Option<i32>, default: (i32, i32)) -> i32 {
    let min = min.unwrap_or(default.0);
    let max = max.unwrap_or(default.1).max(min);
    rng.random_range(min..=max)
}

/// Roll parameters for a location, with wild defaults filled in.
pub fn location_params(location: &EncounterLocation) -> RollParams {
    let mut params = location.roll.clone();
    params.legendary.get_or_insert(false);
    params.mythical.get_or_insert(false);
    params.species_max.get_or_insert(3);
    params.types_max.get_or_insert(5);
    params
}

fn group(monster: RolledMonster, count: i32, level: i32, agro: i32, activity: String) -> GroupPlan {
    GroupPlan {
        species: monster.species,
        types: monster.types,
        attribute: monster.attribute,
        count,
        level,
        agro,
        activity,
    }
}

fn fallback_params() -> RollParams {
    RollParams {
        legendary: Some(false),
        mythical: Some(false),
        include_stages: BASE_STAGES.iter().map(|s| s.to_string()).collect(),
        include_ranks: ["Baby I", "Baby II", "Child", "E", "D", "C"]
            .iter()
            .map(|r| r.to_string())
            .collect(),
        species_min: Some(1),
        species_max: Some(1),
        types_max: Some(2),
        ..Default::default()
    }
}

/// The group used when nothing in the catalogue matches the location.
pub fn fallback_group(rng: &mut impl Rng, roller: &MonsterRoller) -> GroupPlan {
    match roller.roll_one(rng, &fallback_params()) {
        Some(monster) => group(
            monster,
            1,
            FALLBACK_LEVEL,
            FALLBACK_AGRO,
            "is exploring the area".to_string(),
        ),
        None => GroupPlan {
            species: vec!["Pikachu".to_string()],
            types: vec!["Electric".to_string()],
            attribute: None,
            count: 1,
            level: FALLBACK_LEVEL,
            agro: FALLBACK_AGRO,
            activity: "is playing in the grass".to_string(),
        },
    }
}

fn wild(rng: &mut impl Rng, roller: &MonsterRoller, location: &EncounterLocation) -> EncounterPlan {
    let params = location_params(location);
    let group_count = rng.random_range(1..=3);

    let mut groups: Vec<GroupPlan> = (0..group_count)
        .filter_map(|_| {
            let monster = roller.roll_one(rng, &params)?;
            let count = rng.random_range(1..=5);
            let agro = in_range(rng, location.agro_min, location.agro_max, WILD_AGRO);
            let level = in_range(rng, location.level_min, location.level_max, WILD_LEVELS);
            let activity = activity(rng, agro);
            Some(group(monster, count, level, agro, activity))
        })
        .collect();

    if groups.is_empty() {
        tracing::warn!("No wild groups rolled for location, using fallback group");
        groups.push(fallback_group(rng, roller));
    }

    let aggressive: Vec<GroupPlan> = groups
        .iter()
        .filter(|g| g.agro >= AUTO_BATTLE_AGRO)
        .cloned()
        .collect();

    if aggressive.is_empty() {
        EncounterPlan {
            kind: EncounterKind::Wild,
            auto_battle: false,
            npc_trainers: Vec::new(),
            groups,
            item: None,
        }
    } else {
        EncounterPlan {
            kind: EncounterKind::Battle,
            auto_battle: true,
            npc_trainers: Vec::new(),
            groups: aggressive,
            item: None,
        }
    }
}

fn battle(
    rng: &mut impl Rng,
    roller: &MonsterRoller,
    location: &EncounterLocation,
) -> EncounterPlan {
    let mut npc_trainers = Vec::new();
    if chance(rng, NPC_TRAINER_CHANCE) {
        for _ in 0..rng.random_range(1..=2) {
            let name = NPC_TRAINER_NAMES
                .choose(rng)
                .map(|n| n.to_string())
                .unwrap_or_else(|| "Rival Trainer".to_string());
            let level = rng.random_range(BATTLE_LEVELS.0..=BATTLE_LEVELS.1);
            npc_trainers.push(NpcTrainer { name, level });
        }
    }

    let params = location_params(location);
    let groups = (0..rng.random_range(2..=4))
        .filter_map(|_| {
            let monster = roller.roll_one(rng, &params)?;
            let level = in_range(rng, location.level_min, location.level_max, BATTLE_LEVELS);
            let agro = in_range(rng, location.agro_min, location.agro_max, WILD_AGRO);
            let activity = activity(rng, agro);
            Some(group(monster, 1, level, agro, activity))
        })
        .collect();

    EncounterPlan {
        kind: EncounterKind::Battle,
        auto_battle: false,
        npc_trainers,
        groups,
        item: None,
    }
}

fn item(rng: &mut impl Rng) -> EncounterPlan {
    let item = ENCOUNTER_ITEM_POOL
        .choose(rng)
        .map(|(category, name)| EncounterItem {
            category: category.to_string(),
            name: name.to_string(),
            quantity: 1,
        });

    EncounterPlan {
        kind: EncounterKind::Item,
        auto_battle: false,
        npc_trainers: Vec::new(),
        groups: Vec::new(),
        item,
    }
}

/// Generates an encounter at `location`, of kind `forced` or a weighted random kind.
pub fn generate(
    rng: &mut impl Rng,
    roller: &MonsterRoller,
    location: &EncounterLocation,
    forced: Option<EncounterKind>,
) -> EncounterPlan {
    let kind = forced.unwrap_or_else(|| roll_kind(rng));

    match kind {
        EncounterKind::Wild => wild(rng, roller, location),
        EncounterKind::Battle => battle(rng, roller, location),
        EncounterKind::Item => item(rng),
    }
}
