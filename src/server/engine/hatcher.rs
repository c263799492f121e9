//! Egg hatching with nursery item effects.
//!
//! Every egg rolls [`MONSTERS_PER_EGG`] options from the roller under strict
//! "baby monster" filters. Nursery items first narrow the roll parameters,
//! then a few effects are applied to each rolled option.

use std::collections::HashMap;

use rand::{seq::IndexedRandom, Rng};

use super::{
    constants::{MonsterTable, BASE_STAGES, MONSTERS_PER_EGG, MONSTER_TYPES},
    rng,
    roller::MonsterRoller,
};
use crate::{
    model::{
        nursery::{HatchParams, SpeciesInputs},
        roll::{RollParams, TableFilter},
    },
    server::model::roll::RolledMonster,
};

const ICE_CREAM_SLOTS: [(&str, usize); 5] = [
    ("Vanilla Ice Cream", 0),
    ("Strawberry Ice Cream", 1),
    ("Chocolate Ice Cream", 2),
    ("Mint Ice Cream", 3),
    ("Pecan Ice Cream", 4),
];

const MILK_MIN_TYPES: [(&str, usize); 4] = [
    ("Vanilla Milk", 2),
    ("Chocolate Milk", 3),
    ("Strawberry Milk", 4),
    ("MooMoo Milk", 5),
];

const TABLE_EXCLUSIONS: [(&str, MonsterTable); 5] = [
    ("Spell Tag", MonsterTable::Yokai),
    ("DigiTofu", MonsterTable::Digimon),
    ("Broken Bell", MonsterTable::Pokemon),
    ("Shattered Core", MonsterTable::Nexomon),
    ("Workers Strike Notice", MonsterTable::Pals),
];

const TABLE_INCLUSIONS: [(&str, MonsterTable); 2] = [
    ("Complex Core", MonsterTable::Nexomon),
    ("Worker's Permit", MonsterTable::Pals),
];

const ATTRIBUTE_CODES: [(&str, &str); 3] = [
    ("Corruption Code", "Virus"),
    ("Repair Code", "Vaccine"),
    ("Shiny New Code", "Data"),
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Roll parameters every egg starts from.
pub fn default_roll_params() -> RollParams {
    let mut table_filters = HashMap::new();
    table_filters.insert(
        MonsterTable::Digimon.to_string(),
        TableFilter {
            include_ranks: strings(&["Baby I", "Baby II"]),
            ..Default::default()
        },
    );
    table_filters.insert(
        MonsterTable::Yokai.to_string(),
        TableFilter {
            include_ranks: strings(&["E", "D", "C"]),
            ..Default::default()
        },
    );

    RollParams {
        table_filters,
        include_stages: strings(&BASE_STAGES),
        legendary: Some(false),
        mythical: Some(false),
        species_min: Some(1),
        species_max: Some(2),
        types_min: Some(1),
        types_max: Some(3),
        ..Default::default()
    }
}

/// Roll parameters plus the effects applied after each roll.
#[derive(Debug, Clone, PartialEq)]
pub struct EggPlan {
    pub params: RollParams,
    pub attribute_override: Option<String>,
    pub type_guarantees: Vec<String>,
    pub min_types: usize,
    /// Types forced into slots 1-5 by ice creams.
    pub slot_types: [Option<String>; 5],
    /// Species forced into slots 1-3 by species control items.
    pub forced_species: [Option<String>; 3],
}

fn type_input(inputs: &SpeciesInputs, slot: usize) -> Option<String> {
    match slot {
        0 => inputs.type1.clone(),
        1 => inputs.type2.clone(),
        2 => inputs.type3.clone(),
        3 => inputs.type4.clone(),
        _ => inputs.type5.clone(),
    }
    .filter(|t| !t.trim().is_empty())
}

/// Builds the egg plan for the selected items.
pub fn plan(hatch: &HatchParams) -> EggPlan {
    let inputs = &hatch.species_inputs;
    let mut params = default_roll_params();
    let mut plan_types_max: Option<usize> = None;
    let mut excluded: Vec<MonsterTable> = Vec::new();
    let mut only: Vec<MonsterTable> = Vec::new();

    let mut plan = EggPlan {
        params: RollParams::default(),
        attribute_override: None,
        type_guarantees: Vec::new(),
        min_types: 1,
        slot_types: Default::default(),
        forced_species: Default::default(),
    };

    let mut items: Vec<(&String, &u32)> = hatch
        .selected_items
        .iter()
        .filter(|(_, quantity)| **quantity > 0)
        .collect();
    items.sort();

    for (name, _) in items {
        let name = name.trim();

        if let Some(rank) = name.strip_suffix(" Rank Incense") {
            for filter in params.table_filters.values_mut() {
                if filter.include_ranks.iter().any(|r| r == rank) {
                    filter.include_ranks = vec![rank.to_string()];
                }
            }
        } else if let Some(attribute) = name.strip_suffix(" Color Incense") {
            params.include_attributes.push(attribute.to_string());
        } else if let Some(t) = name.strip_suffix(" Poffin") {
            params.include_types.push(t.to_string());
        } else if let Some(t) = name.strip_suffix(" Nurture Kit") {
            plan.type_guarantees.push(t.to_string());
        } else if let Some((_, table)) = TABLE_EXCLUSIONS.iter().find(|(item, _)| *item == name) {
            excluded.push(*table);
        } else if let Some((_, table)) = TABLE_INCLUSIONS.iter().find(|(item, _)| *item == name) {
            only.push(*table);
        } else if let Some((_, attribute)) = ATTRIBUTE_CODES.iter().find(|(item, _)| *item == name)
        {
            plan.attribute_override = Some(attribute.to_string());
        } else if let Some((_, min)) = MILK_MIN_TYPES.iter().find(|(item, _)| *item == name) {
            plan.min_types = plan.min_types.max(*min);
            if name == "MooMoo Milk" {
                plan_types_max = Some(5);
            }
        } else if let Some((_, slot)) = ICE_CREAM_SLOTS.iter().find(|(item, _)| *item == name) {
            plan.slot_types[*slot] = type_input(inputs, *slot);
        } else if name == "Hot Chocolate" {
            params.species_min = Some(2);
        } else if name == "Input Field" {
            if inputs.species1.is_some() {
                plan.forced_species[0] = inputs.species1.clone();
            }
        } else if name == "Drop Down" {
            if inputs.species1.is_some() && inputs.species2.is_some() {
                plan.forced_species[0] = inputs.species1.clone();
                plan.forced_species[1] = inputs.species2.clone();
                params.species_min = Some(params.species_min.unwrap_or(1).max(2));
            }
        } else if name == "Radio Buttons"
            && inputs.species1.is_some()
            && inputs.species2.is_some()
            && inputs.species3.is_some()
        {
            plan.forced_species = [
                inputs.species1.clone(),
                inputs.species2.clone(),
                inputs.species3.clone(),
            ];
            params.species_min = Some(3);
        }
    }

    if let Some(min) = params.species_min {
        params.species_max = Some(params.species_max.unwrap_or(min).max(min));
    }
    if let Some(max) = plan_types_max {
        params.types_max = Some(max);
    }

    if !only.is_empty() || !excluded.is_empty() {
        let base: Vec<MonsterTable> = if only.is_empty() {
            MonsterTable::ALL.to_vec()
        } else {
            only
        };
        params.tables = base
            .into_iter()
            .filter(|t| !excluded.contains(t))
            .map(|t| t.to_string())
            .collect();
    }

    // Eggs never hatch legendary or mythical monsters, whatever the items say.
    params.legendary = Some(false);
    params.mythical = Some(false);

    plan.params = params;
    plan
}

fn dedup(types: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for t in types {
        if !out.iter().any(|o| o.eq_ignore_ascii_case(&t)) {
            out.push(t);
        }
    }
    out
}

/// Applies item effects to a rolled option.
pub fn adjust(rng: &mut impl Rng, mut monster: RolledMonster, plan: &EggPlan) -> RolledMonster {
    if let Some(attribute) = &plan.attribute_override {
        monster.attribute = Some(attribute.clone());
    }

    for (slot, forced) in plan.forced_species.iter().enumerate() {
        if let Some(species) = forced {
            if slot < monster.species.len() {
                monster.species[slot] = species.clone();
            } else {
                monster.species.push(species.clone());
            }
        }
    }

    for (slot, forced) in plan.slot_types.iter().enumerate() {
        if let Some(t) = forced {
            if slot < monster.types.len() {
                monster.types[slot] = t.clone();
            } else {
                monster.types.push(t.clone());
            }
        }
    }
    monster.types = dedup(monster.types);

    if let Some(guaranteed) = plan.type_guarantees.choose(rng) {
        let present = monster
            .types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(guaranteed));
        if !present {
            match monster.types.first_mut() {
                Some(first) => *first = guaranteed.clone(),
                None => monster.types.push(guaranteed.clone()),
            }
        }
    }
    monster.types = dedup(monster.types);

    while monster.types.len() < plan.min_types {
        let available: Vec<&str> = MONSTER_TYPES
            .iter()
            .copied()
            .filter(|t| !monster.types.iter().any(|m| m.eq_ignore_ascii_case(t)))
            .collect();
        match available.choose(rng) {
            Some(t) => monster.types.push(t.to_string()),
            None => break,
        }
    }

    monster
}

/// One hatched egg and the options the player can pick from.
#[derive(Debug, Clone, PartialEq)]
pub struct HatchedEgg {
    pub egg_id: u32,
    pub seed: String,
    pub monsters: Vec<RolledMonster>,
}

/// Hatches `egg_count` eggs. Egg `i` uses seed `"{seed}-egg-{i}"` and its
/// options use `"{seed}-egg-{i}-monster-{j}"`.
pub fn hatch(
    roller: &MonsterRoller,
    seed: &str,
    egg_count: u32,
    hatch: &HatchParams,
) -> Vec<HatchedEgg> {
    let plan = plan(hatch);

    (0..egg_count)
        .map(|i| {
            let egg_seed = rng::derive(seed, format!("egg-{}", i));
            let mut egg_rng = rng::seeded(&egg_seed);

            let monsters = (0..MONSTERS_PER_EGG)
                .filter_map(|j| {
                    let monster_seed = rng::derive(&egg_seed, format!("monster-{}", j));
                    roller.roll_seeded(&monster_seed, &plan.params)
                })
                .map(|m| adjust(&mut egg_rng, m, &plan))
                .collect();

            HatchedEgg {
                egg_id: i + 1,
                seed: egg_seed,
                monsters,
            }
        })
        .collect()
}
