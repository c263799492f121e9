//! Battles started from encounters.
//!
//! Wild encounters put one participant per group on the opponents side.
//! Battle encounters with NPC trainers split the groups between the trainers;
//! a trainer left without a group gets a freshly rolled team.

use rand::{rngs::StdRng, seq::IndexedRandom, Rng};

use crate::{
    model::roll::{RollParams, UserSettings},
    server::{
        data::{
            battle::{monster::BattleMonsterRepository, participant::ParticipantRepository, BattleRepository},
            monster_move::MoveRepository,
            species::SpeciesRepository,
        },
        engine::{
            battle::{self, GENERATED_HP_TOTAL},
            constants::{DEFAULT_KNOCKOUT_LIMIT, FALLBACK_MOVE, NATURES},
            rng,
            roller::MonsterRoller,
            stats::{self, StatBlock},
        },
        error::{game::GameError, AppError},
        model::{
            battle::{
                ActionResult, BattleMonster, BattleType, LogType, NewBattleMonster, NewParticipant,
                ParticipantType, TeamSide,
            },
            encounter::{Encounter, EncounterGroup, EncounterKind},
        },
        service::{encounter::EncounterService, trainer::TrainerService},
    },
};

use super::BattleService;

const DEFAULT_GROUP_LEVEL: i32 = 10;
const FALLBACK_SPECIES: &str = "Pikachu";
const FALLBACK_TYPE: &str = "Electric";
const FALLBACK_LEVEL: i32 = 15;

/// An opponent monster made up for the battle.
struct Generated {
    name: String,
    types: Vec<String>,
    attribute: Option<String>,
    level: i32,
}

impl Generated {
    fn from_group(group: &EncounterGroup, name: String) -> Self {
        let types = if group.types.is_empty() {
            vec!["Normal".to_string()]
        } else {
            group.types.clone()
        };

        Self {
            name,
            types,
            attribute: group.attribute.clone(),
            level: if group.level > 0 {
                group.level
            } else {
                DEFAULT_GROUP_LEVEL
            },
        }
    }
}

impl<'a> BattleService<'a> {
    /// Starts a battle from an encounter with the player's trainer on the
    /// players side.
    ///
    /// # Arguments
    /// - `encounter_id` - Wild or battle encounter to fight
    /// - `player_user_id` - Player starting the battle
    /// - `trainer_id` - The player's trainer
    /// - `monster_ids` - Monsters to bring, the first one starts on the field
    ///
    /// # Returns
    /// - `Ok(ActionResult)` - The opening lines and the new battle
    /// - `Err(AppError::NotFound)` - Unknown encounter, trainer or monster
    /// - `Err(GameError::NotOwner)` - The trainer or a monster belongs to someone else
    /// - `Err(GameError::Rule)` - An item encounter
    pub async fn start_battle(
        &self,
        encounter_id: i32,
        player_user_id: &str,
        trainer_id: i32,
        monster_ids: &[i32],
    ) -> Result<ActionResult, AppError> {
        let encounter = EncounterService::new(self.db).get(encounter_id).await?;
        let battle_type = match encounter.kind {
            EncounterKind::Item => {
                return Err(GameError::rule("Item encounters can't be battled").into())
            }
            EncounterKind::Battle if !encounter.npc_trainers.is_empty() => BattleType::Trainer,
            _ => BattleType::Wild,
        };

        let trainer = TrainerService::new(self.db)
            .get_owned(trainer_id, player_user_id)
            .await?;
        let team = self.team(trainer.id, monster_ids).await?;

        let battle = BattleRepository::new(self.db)
            .create(Some(encounter.id), battle_type, DEFAULT_KNOCKOUT_LIMIT)
            .await?;
        let player = ParticipantRepository::new(self.db)
            .create(NewParticipant::player(
                battle.id,
                TeamSide::Players,
                trainer.id,
                player_user_id,
                trainer.name.clone(),
                0,
            ))
            .await?;
        self.field_monsters(battle.id, player.id, &team).await?;

        let mut rng = rng::fresh();
        let mut lines = match battle_type {
            BattleType::Trainer => self.add_npc_trainers(&mut rng, battle.id, &encounter).await?,
            _ => self.add_wild_groups(&mut rng, battle.id, &encounter.groups).await?,
        };
        lines.push(format!("{} joined the battle!", trainer.name));

        let state = self.state(battle.id).await?;
        self.log(&state, None, LogType::System, lines.join("\n"))
            .await?;

        tracing::info!(
            "{} started {} battle {} from encounter {}",
            trainer.name,
            battle_type.as_str(),
            battle.id,
            encounter.id
        );

        Ok(ActionResult {
            messages: lines,
            captured: None,
            rewards: Vec::new(),
            state: self.state(battle.id).await?,
        })
    }

    async fn add_wild_groups(
        &self,
        rng: &mut StdRng,
        battle_id: i32,
        groups: &[EncounterGroup],
    ) -> Result<Vec<String>, AppError> {
        let participants = ParticipantRepository::new(self.db);
        let mut lines = Vec::new();

        for (i, group) in groups.iter().enumerate() {
            let participant = participants
                .create(NewParticipant::opponent(
                    battle_id,
                    ParticipantType::Wild,
                    format!("Wild Group {}", i + 1),
                    i as i32 + 1,
                ))
                .await?;

            let count = group.count.max(1);
            for position in 0..count {
                let generated =
                    Generated::from_group(group, format!("Wild {}", group.display_name()));
                self.spawn(rng, battle_id, participant.id, generated, position)
                    .await?;
            }

            lines.push(format!("{} wild {} appeared!", count, group.display_name()));
        }

        Ok(lines)
    }

    async fn add_npc_trainers(
        &self,
        rng: &mut StdRng,
        battle_id: i32,
        encounter: &Encounter,
    ) -> Result<Vec<String>, AppError> {
        let participants = ParticipantRepository::new(self.db);
        let npcs = &encounter.npc_trainers;
        let chunk_size = encounter.groups.len().div_ceil(npcs.len().max(1)).max(1);
        let mut chunks = encounter.groups.chunks(chunk_size);
        let mut lines = Vec::new();

        for (i, npc) in npcs.iter().enumerate() {
            let participant = participants
                .create(NewParticipant::opponent(
                    battle_id,
                    ParticipantType::Npc,
                    npc.name.clone(),
                    i as i32 + 1,
                ))
                .await?;

            let groups = chunks.next().unwrap_or_default();
            let team = if groups.is_empty() {
                self.roll_team(rng).await?
            } else {
                groups
                    .iter()
                    .flat_map(|g| {
                        (0..g.count.max(1)).map(|_| Generated::from_group(g, g.display_name()))
                    })
                    .collect()
            };

            for (position, generated) in team.into_iter().enumerate() {
                self.spawn(rng, battle_id, participant.id, generated, position as i32)
                    .await?;
            }

            lines.push(format!("{} wants to battle!", npc.name));
        }

        Ok(lines)
    }

    /// Two or three monsters rolled from the catalogue at level 10-30.
    async fn roll_team(&self, rng: &mut StdRng) -> Result<Vec<Generated>, AppError> {
        let catalogue = SpeciesRepository::new(self.db).catalogue().await?;
        let roller = MonsterRoller::new(&catalogue, UserSettings::default());
        let params = RollParams::default();

        let count = rng.random_range(2..=3);
        let mut team = Vec::with_capacity(count);
        for _ in 0..count {
            let generated = match roller.roll_one(rng, &params) {
                Some(rolled) => Generated {
                    name: rolled.display_name(),
                    types: rolled.types,
                    attribute: rolled.attribute,
                    level: rng.random_range(10..=30),
                },
                None => Generated {
                    name: FALLBACK_SPECIES.to_string(),
                    types: vec![FALLBACK_TYPE.to_string()],
                    attribute: None,
                    level: FALLBACK_LEVEL,
                },
            };
            team.push(generated);
        }

        Ok(team)
    }

    async fn spawn(
        &self,
        rng: &mut StdRng,
        battle_id: i32,
        participant_id: i32,
        generated: Generated,
        position: i32,
    ) -> Result<BattleMonster, AppError> {
        let nature = NATURES.choose(rng).map(|n| n.0).unwrap_or("Hardy");
        let ivs = stats::roll_ivs(rng);
        let max_hp = battle::battle_hp(GENERATED_HP_TOTAL, generated.level);
        let mut monster_stats =
            stats::calculate_stats(generated.level, &ivs, &StatBlock::default(), nature);
        monster_stats.hp = max_hp;

        let moves = self.enemy_moves(rng, &generated.types).await?;

        let repo = BattleMonsterRepository::new(self.db);

        Ok(repo
            .create(NewBattleMonster {
                battle_id,
                participant_id,
                monster_id: None,
                name: generated.name,
                level: generated.level,
                types: generated.types,
                attribute: generated.attribute,
                max_hp,
                stats: monster_stats,
                moves,
                is_active: position == 0,
                position,
            })
            .await?)
    }

    /// Tackle plus one damaging move of the monster's types, when the move
    /// table has one.
    async fn enemy_moves(&self, rng: &mut StdRng, types: &[String]) -> Result<Vec<String>, AppError> {
        let typed: Vec<String> = MoveRepository::new(self.db)
            .get_by_types(types)
            .await?
            .into_iter()
            .filter(|m| m.is_damaging() && !m.name.eq_ignore_ascii_case(FALLBACK_MOVE))
            .map(|m| m.name)
            .collect();

        let mut moves = vec![FALLBACK_MOVE.to_string()];
        if let Some(name) = typed.choose(rng) {
            moves.push(name.clone());
        }

        Ok(moves)
    }
}
