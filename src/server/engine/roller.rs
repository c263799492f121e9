//! Constrained random species generation.
//!
//! The roller filters the species catalogue with [`RollParams`], picks a
//! franchise, then a species, and builds the species list, types and
//! attribute of the resulting monster. Filters only apply to franchises whose
//! schema carries the filtered column: a stage filter never excludes Digimon,
//! which have no stages.

use std::collections::BTreeSet;

use rand::{seq::IndexedRandom, Rng};

use super::{
    constants::{MonsterTable, DIGIMON_ATTRIBUTES, MONSTER_TYPES},
    rng::{self, weighted_index},
};
use crate::{
    model::roll::{RollParams, TableFilter, UserSettings},
    server::model::{catalogue::Species, roll::RolledMonster},
};

const DEFAULT_SPECIES_MIN: usize = 1;
const DEFAULT_SPECIES_MAX: usize = 2;
const DEFAULT_TYPES_MIN: usize = 1;
const DEFAULT_TYPES_MAX: usize = 3;
const MAX_SPECIES: usize = 3;
const MAX_TYPES: usize = 5;

fn contains_ci(list: &[String], value: &str) -> bool {
    list.iter().any(|v| v.eq_ignore_ascii_case(value))
}

fn contains_substring_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}

/// Rolls monsters from a loaded species catalogue.
pub struct MonsterRoller<'a> {
    catalogue: &'a [Species],
    settings: UserSettings,
}

impl<'a> MonsterRoller<'a> {
    pub fn new(catalogue: &'a [Species], settings: UserSettings) -> Self {
        Self {
            catalogue,
            settings,
        }
    }

    fn table_enabled(&self, table: MonsterTable) -> bool {
        let enabled = self
            .settings
            .franchises
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(table.as_str()))
            .map(|(_, enabled)| *enabled)
            .unwrap_or(true);
        if !enabled {
            return false;
        }

        let schema = table.schema();
        if self.settings.only_legendary && !schema.has_legendary {
            return false;
        }
        if self.settings.only_mythical
            && !schema.has_mythical
            && table != MonsterTable::Yokai
        {
            return false;
        }
        true
    }

    /// Franchises a roll with `params` may draw from.
    pub fn enabled_tables(&self, params: &RollParams) -> Vec<MonsterTable> {
        let requested: Vec<MonsterTable> = params
            .tables
            .iter()
            .filter_map(|t| MonsterTable::parse(t))
            .collect();

        MonsterTable::ALL
            .into_iter()
            .filter(|t| requested.is_empty() || requested.contains(t))
            .filter(|t| self.table_enabled(*t))
            .collect()
    }

    fn table_filter<'p>(params: &'p RollParams, table: MonsterTable) -> Option<&'p TableFilter> {
        params
            .table_filters
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(table.as_str()))
            .map(|(_, filter)| filter)
    }

    /// Whether a species passes every filter that applies to its franchise.
    pub fn matches(&self, species: &Species, params: &RollParams) -> bool {
        let table = species.franchise;
        let schema = table.schema();
        let table_filter = Self::table_filter(params, table);

        if !params.include_species.is_empty() && !contains_ci(&params.include_species, &species.name)
        {
            return false;
        }
        if contains_ci(&params.exclude_species, &species.name) {
            return false;
        }

        if schema.has_types {
            for (slot, filter) in params.type_slots.iter().enumerate().take(MAX_TYPES) {
                let value = species.types.get(slot);
                if !filter.include.is_empty()
                    && !value.is_some_and(|t| contains_ci(&filter.include, t))
                {
                    return false;
                }
                if value.is_some_and(|t| contains_ci(&filter.exclude, t)) {
                    return false;
                }
            }
            if !params.include_types.is_empty()
                && !species
                    .types
                    .iter()
                    .any(|t| contains_ci(&params.include_types, t))
            {
                return false;
            }
            if species
                .types
                .iter()
                .any(|t| contains_ci(&params.exclude_types, t))
            {
                return false;
            }
        }

        if schema.has_attribute {
            let attribute = species.attribute.as_deref();
            if !params.include_attributes.is_empty()
                && !attribute.is_some_and(|a| contains_ci(&params.include_attributes, a))
            {
                return false;
            }
            if attribute.is_some_and(|a| contains_ci(&params.exclude_attributes, a)) {
                return false;
            }
        }

        let legendary = table_filter
            .and_then(|f| f.legendary)
            .or(params.legendary);
        if schema.has_legendary {
            if let Some(wanted) = legendary {
                if species.is_legendary != wanted {
                    return false;
                }
            }
        }
        let mythical = table_filter.and_then(|f| f.mythical).or(params.mythical);
        if schema.has_mythical {
            if let Some(wanted) = mythical {
                if species.is_mythical != wanted {
                    return false;
                }
            }
        }

        if self.settings.only_legendary && !(schema.has_legendary && species.is_legendary) {
            return false;
        }
        if self.settings.only_mythical {
            let yokai_s = table == MonsterTable::Yokai && species.rank.as_deref() == Some("S");
            if !(schema.has_mythical && species.is_mythical) && !yokai_s {
                return false;
            }
        }

        if schema.has_rank && !Self::rank_matches(species, params, table_filter) {
            return false;
        }

        if schema.has_stage {
            let stage = species.stage.as_deref();
            if let Some(wanted) = params.stage.as_deref() {
                if !stage.is_some_and(|s| s.eq_ignore_ascii_case(wanted)) {
                    return false;
                }
            }
            let include_stages = match table_filter {
                Some(f) if !f.include_stages.is_empty() => &f.include_stages,
                _ => &params.include_stages,
            };
            if !include_stages.is_empty() && !stage.is_some_and(|s| contains_ci(include_stages, s))
            {
                return false;
            }
            if stage.is_some_and(|s| contains_ci(&params.exclude_stages, s)) {
                return false;
            }
        }

        if schema.has_evolution {
            if let Some(from) = params.evolves_from.as_deref() {
                if !contains_substring_ci(species.evolves_from.as_deref(), from) {
                    return false;
                }
            }
            if let Some(to) = params.evolves_to.as_deref() {
                if !contains_substring_ci(species.evolves_to.as_deref(), to) {
                    return false;
                }
            }
        }

        if let Some(result) = params.breeding_results.as_deref() {
            let result = result.to_lowercase();
            if !species
                .breeding_results
                .iter()
                .any(|r| r.to_lowercase().contains(&result))
            {
                return false;
            }
        }

        true
    }

    fn rank_matches(species: &Species, params: &RollParams, filter: Option<&TableFilter>) -> bool {
        let include = match filter {
            Some(f) if !f.include_ranks.is_empty() => &f.include_ranks,
            _ => &params.include_ranks,
        };
        let exclude = &params.exclude_ranks;

        // Monster Hunter ranks are numeric, so letter rank filters meant for
        // other franchises do not apply to it.
        let numeric = |list: &[String]| list.iter().any(|r| r.trim().parse::<i32>().is_ok());
        let applies = |list: &[String]| {
            species.franchise != MonsterTable::MonsterHunter || numeric(list)
        };

        let rank = species.rank.as_deref();
        if !include.is_empty() && applies(include) && !rank.is_some_and(|r| contains_ci(include, r))
        {
            return false;
        }
        if !exclude.is_empty() && applies(exclude) && rank.is_some_and(|r| contains_ci(exclude, r)) {
            return false;
        }
        true
    }

    /// Species of `table` passing every filter.
    pub fn candidates(&self, table: MonsterTable, params: &RollParams) -> Vec<&'a Species> {
        self.catalogue
            .iter()
            .filter(|s| s.franchise == table)
            .filter(|s| self.matches(s, params))
            .collect()
    }

    fn table_order(&self, rng: &mut impl Rng, tables: &[MonsterTable]) -> Vec<MonsterTable> {
        if tables.is_empty() {
            return Vec::new();
        }
        let weights: Vec<f64> = tables.iter().map(|t| t.roll_weight()).collect();
        let first = tables[weighted_index(rng, &weights)];
        let rest: Vec<MonsterTable> = tables.iter().copied().filter(|t| *t != first).collect();

        let mut order = vec![first];
        order.extend(rng::shuffled(rng, &rest));
        order
    }

    fn find(&self, name: &str) -> Option<&'a Species> {
        self.catalogue
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    fn range(rng: &mut impl Rng, min: usize, max: usize, cap: usize) -> usize {
        let min = min.clamp(1, cap);
        let max = max.clamp(min, cap);
        rng.random_range(min..=max)
    }

    /// Rolls one monster, or `None` when nothing in the catalogue matches.
    pub fn roll_one(&self, rng: &mut impl Rng, params: &RollParams) -> Option<RolledMonster> {
        let tables = self.enabled_tables(params);

        let (species1, candidate) = if params.species_pool.is_empty() {
            let mut picked = None;
            for table in self.table_order(rng, &tables) {
                if let Some(species) = self.candidates(table, params).choose(rng) {
                    picked = Some(*species);
                    break;
                }
            }
            let species = picked?;
            (species.name.clone(), Some(species))
        } else {
            let name = params.species_pool.choose(rng)?.clone();
            let candidate = self.find(&name);
            (name, candidate)
        };

        let species_count = Self::range(
            rng,
            params.species_min.unwrap_or(DEFAULT_SPECIES_MIN),
            params.species_max.unwrap_or(DEFAULT_SPECIES_MAX),
            MAX_SPECIES,
        );
        let mut species = vec![species1];
        if species_count > 1 {
            let mut others: Vec<String> = Vec::new();
            for table in &tables {
                for s in self.candidates(*table, params) {
                    if !contains_ci(&species, &s.name) && !contains_ci(&others, &s.name) {
                        others.push(s.name.clone());
                    }
                }
            }
            let others = rng::shuffled(rng, &others);
            species.extend(others.into_iter().take(species_count - 1));
        }

        let type_count = Self::range(
            rng,
            params.types_min.unwrap_or(DEFAULT_TYPES_MIN),
            params.types_max.unwrap_or(DEFAULT_TYPES_MAX),
            MAX_TYPES,
        );
        let pool: Vec<String> = if params.species_type_options.is_empty() {
            let mut pool: Vec<String> = candidate.map(|c| c.types.clone()).unwrap_or_default();
            let all: Vec<String> = MONSTER_TYPES.iter().map(|t| t.to_string()).collect();
            pool.extend(rng::shuffled(rng, &all));
            pool
        } else {
            rng::shuffled(rng, &params.species_type_options)
        };
        let mut types: Vec<String> = Vec::new();
        for t in pool {
            if types.len() >= type_count {
                break;
            }
            if !contains_ci(&types, &t) {
                types.push(t);
            }
        }

        let attribute_pool: Vec<String> = if params.attribute_options.is_empty() {
            DIGIMON_ATTRIBUTES.iter().map(|a| a.to_string()).collect()
        } else {
            params.attribute_options.clone()
        };
        let attribute = match &params.override_attribute {
            Some(attribute) => Some(attribute.clone()),
            None => candidate
                .and_then(|c| c.attribute.clone())
                .filter(|a| contains_ci(&attribute_pool, a))
                .or_else(|| attribute_pool.choose(rng).cloned()),
        };

        Some(RolledMonster {
            species,
            types,
            attribute,
            franchise: candidate.map(|c| c.franchise.to_string()),
        })
    }

    pub fn roll_seeded(&self, seed: &str, params: &RollParams) -> Option<RolledMonster> {
        let mut rng = rng::seeded(seed);
        self.roll_one(&mut rng, params)
    }

    /// Rolls `count` monsters with seeds `"{seed}-{i}"`, skipping failed rolls.
    pub fn roll_many(&self, seed: &str, params: &RollParams, count: usize) -> Vec<RolledMonster> {
        (0..count)
            .filter_map(|i| self.roll_seeded(&rng::derive(seed, i), params))
            .collect()
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&Species) -> Vec<String>,
    {
        self.catalogue
            .iter()
            .flat_map(field)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn species_names(&self) -> Vec<String> {
        self.distinct(|s| vec![s.name.clone()])
    }

    pub fn types(&self) -> Vec<String> {
        self.distinct(|s| s.types.clone())
    }

    pub fn attributes(&self) -> Vec<String> {
        self.distinct(|s| s.attribute.iter().cloned().collect())
    }

    pub fn ranks(&self) -> Vec<String> {
        self.distinct(|s| s.rank.iter().cloned().collect())
    }

    pub fn stages(&self) -> Vec<String> {
        self.distinct(|s| s.stage.iter().cloned().collect())
    }
}
