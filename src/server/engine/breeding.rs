//! Breeding eligibility and offspring inheritance.

use std::collections::HashMap;

use rand::{seq::IndexedRandom, Rng};

use super::{
    constants::{MonsterTable, BABY_DIGIMON_RANKS, BASE_STAGES, DIGIMON_ATTRIBUTES, MONSTER_TYPES},
    rng::{self, chance, weighted_index},
};
use crate::server::model::{catalogue::Species, monster::MonsterProfile, roll::RolledMonster};

pub const MUTAGENIC_MULCH: &str = "Mutagenic Mulch";
pub const TEEMING_TOTEM: &str = "Teeming Totem";
pub const HERMITS_WARD: &str = "Hermit's Ward";

/// Extra breeding items with the most that can be used at once.
pub const EXTRA_ITEMS: [(&str, u32); 3] = [(MUTAGENIC_MULCH, 5), (TEEMING_TOTEM, 1), (HERMITS_WARD, 1)];

const BASE_MUTATION_CHANCE: f64 = 0.1;
const TYPE_COUNT_WEIGHTS: [f64; 5] = [35.0, 30.0, 20.0, 10.0, 5.0];
const WARD_COUNT_WEIGHTS: [f64; 3] = [70.0, 20.0, 10.0];
const TOTEM_COUNT_WEIGHTS: [f64; 4] = [10.0, 15.0, 35.0, 40.0];

/// Whether a species or monster can breed, and why not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    pub eligible: bool,
    pub reason: Option<String>,
}

impl Eligibility {
    fn ok() -> Self {
        Self {
            eligible: true,
            reason: None,
        }
    }

    fn no(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            reason: Some(reason.into()),
        }
    }
}

fn find<'a>(catalogue: &'a [Species], name: &str) -> Option<&'a Species> {
    catalogue.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Checks a single species against its franchise's breeding rule.
pub fn species_eligibility(catalogue: &[Species], name: &str) -> Eligibility {
    let Some(species) = find(catalogue, name) else {
        return Eligibility::ok();
    };

    match species.franchise {
        MonsterTable::Pals | MonsterTable::MonsterHunter => Eligibility::ok(),
        MonsterTable::Digimon => {
            let baby = species
                .rank
                .as_deref()
                .is_some_and(|r| BABY_DIGIMON_RANKS.iter().any(|b| b.eq_ignore_ascii_case(r)));
            if baby {
                Eligibility::no(format!(
                    "{} is a {} Digimon and too young to breed",
                    species.name,
                    species.rank.as_deref().unwrap_or_default()
                ))
            } else {
                Eligibility::ok()
            }
        }
        _ => {
            if species.is_final_stage() {
                Eligibility::ok()
            } else {
                Eligibility::no(format!(
                    "{} must be fully evolved to breed",
                    species.name
                ))
            }
        }
    }
}

/// A monster is eligible when every one of its species is.
pub fn monster_eligibility(catalogue: &[Species], species: &[String]) -> Eligibility {
    if species.is_empty() {
        return Eligibility::no("Monster has no species");
    }

    species
        .iter()
        .map(|name| species_eligibility(catalogue, name))
        .find(|e| !e.eligible)
        .unwrap_or_else(Eligibility::ok)
}

/// Validated extra breeding items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreedingItems {
    pub mutagenic_mulch: u32,
    pub teeming_totem: bool,
    pub hermits_ward: bool,
}

impl BreedingItems {
    /// Validates requested items against [`EXTRA_ITEMS`].
    pub fn from_requested(requested: &HashMap<String, u32>) -> Result<Self, String> {
        let mut items = Self::default();

        for (name, count) in requested {
            if *count == 0 {
                continue;
            }
            let Some((canonical, max)) = EXTRA_ITEMS
                .iter()
                .find(|(item, _)| item.eq_ignore_ascii_case(name))
            else {
                return Err(format!("{} cannot be used for breeding", name));
            };
            if count > max {
                return Err(format!("At most {} {} can be used", max, canonical));
            }

            match *canonical {
                MUTAGENIC_MULCH => items.mutagenic_mulch = *count,
                TEEMING_TOTEM => items.teeming_totem = true,
                _ => items.hermits_ward = true,
            }
        }

        Ok(items)
    }

    /// Items to consume from the trainer's inventory.
    pub fn consumed(&self) -> Vec<(&'static str, u32)> {
        let mut out = Vec::new();
        if self.mutagenic_mulch > 0 {
            out.push((MUTAGENIC_MULCH, self.mutagenic_mulch));
        }
        if self.teeming_totem {
            out.push((TEEMING_TOTEM, 1));
        }
        if self.hermits_ward {
            out.push((HERMITS_WARD, 1));
        }
        out
    }

    fn mutation_chance(&self) -> f64 {
        (BASE_MUTATION_CHANCE * (1.0 + 2.0 * f64::from(self.mutagenic_mulch))).min(1.0)
    }

    fn offspring_count(&self, rng: &mut impl Rng) -> usize {
        if self.hermits_ward {
            weighted_index(rng, &WARD_COUNT_WEIGHTS) + 1
        } else if self.teeming_totem {
            weighted_index(rng, &TOTEM_COUNT_WEIGHTS) + 1
        } else {
            rng.random_range(1..=4)
        }
    }
}

fn unique(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v.eq_ignore_ascii_case(&value)) {
            out.push(value);
        }
    }
    out
}

fn breeds_true(table: MonsterTable) -> bool {
    matches!(
        table,
        MonsterTable::Pals | MonsterTable::Fakemon | MonsterTable::MonsterHunter
    )
}

fn resolve_species(rng: &mut impl Rng, catalogue: &[Species], name: &str) -> String {
    match find(catalogue, name) {
        Some(species) if !breeds_true(species.franchise) => species
            .breeding_results
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| species.name.clone()),
        _ => name.to_string(),
    }
}

fn mutant_species(rng: &mut impl Rng, catalogue: &[Species]) -> Option<String> {
    let candidates: Vec<&Species> = catalogue
        .iter()
        .filter(|s| !s.is_legendary && !s.is_mythical)
        .filter(|s| {
            !s.franchise.schema().has_stage
                || s.stage
                    .as_deref()
                    .is_some_and(|stage| BASE_STAGES.contains(&stage))
        })
        .collect();
    candidates.choose(rng).map(|s| s.name.clone())
}

/// Generates a litter from two parents.
pub fn breed(
    rng: &mut impl Rng,
    catalogue: &[Species],
    parent1: &MonsterProfile,
    parent2: &MonsterProfile,
    items: &BreedingItems,
) -> Vec<RolledMonster> {
    let count = items.offspring_count(rng);
    let mutation = items.mutation_chance();

    let parent_species = unique(parent1.species.iter().chain(&parent2.species).cloned());
    let parent_types = unique(parent1.types.iter().chain(&parent2.types).cloned());
    let parent_attributes: Vec<String> = parent1
        .attribute
        .iter()
        .chain(parent2.attribute.iter())
        .cloned()
        .collect();

    (0..count)
        .map(|_| {
            let shuffled = rng::shuffled(rng, &parent_species);
            let take = rng.random_range(1..=3).min(shuffled.len());
            let species = shuffled
                .iter()
                .take(take)
                .map(|name| {
                    if chance(rng, mutation) {
                        if let Some(mutant) = mutant_species(rng, catalogue) {
                            return mutant;
                        }
                    }
                    resolve_species(rng, catalogue, name)
                })
                .collect::<Vec<_>>();
            let species = unique(species);

            let shuffled = rng::shuffled(rng, &parent_types);
            let wanted = weighted_index(rng, &TYPE_COUNT_WEIGHTS) + 1;
            let take = wanted.min(shuffled.len()).max(1);
            let mut types: Vec<String> = Vec::new();
            for slot in 0..take {
                let inherited = shuffled.get(slot).cloned();
                let value = if inherited.is_none() || chance(rng, mutation) {
                    MONSTER_TYPES
                        .choose(rng)
                        .map(|t| t.to_string())
                        .or(inherited)
                } else {
                    inherited
                };
                if let Some(value) = value {
                    types.push(value);
                }
            }
            let types = unique(types);

            let attribute = parent_attributes
                .choose(rng)
                .cloned()
                .or_else(|| DIGIMON_ATTRIBUTES.choose(rng).map(|a| a.to_string()));

            let franchise = species
                .first()
                .and_then(|name| find(catalogue, name))
                .map(|s| s.franchise.to_string());

            RolledMonster {
                species,
                types,
                attribute,
                franchise,
            }
        })
        .collect()
}
