//! Battle domain models.
//!
//! A battle is a set of participants on two sides, each fielding battle
//! monsters. Battle monsters are snapshots: player monsters are copied from
//! the monster table when they enter, generated opponents exist only here.
//! [`BattleState`] bundles everything a turn needs and answers the lookups the
//! battle service keeps asking (whose turn it is, who may be targeted).

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        battle::{
            ActionResultDto, AttackDto, BattleDto, BattleLogDto, BattleMonsterDto,
            BattleRewardDto, BattleStateDto, MonsterActionDto, ParticipantDto, StatusEffectDto,
            UseItemDto,
        },
        monster::StatBlockDto,
    },
    server::{
        engine::{
            damage::{Combatant, Conditions, StatStages, Terrain, Weather},
            stats::StatBlock,
            status::StatusEffect,
        },
        model::monster::Monster,
    },
};

/// Number of log lines returned with a battle's state.
pub const RECENT_LOG_LINES: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleType {
    Wild,
    Trainer,
    Pvp,
}

impl BattleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wild => "wild",
            Self::Trainer => "trainer",
            Self::Pvp => "pvp",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "wild" => Some(Self::Wild),
            "trainer" => Some(Self::Trainer),
            "pvp" => Some(Self::Pvp),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleStatus {
    Active,
    Completed,
}

impl BattleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantType {
    Player,
    Npc,
    Wild,
}

impl ParticipantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Npc => "npc",
            Self::Wild => "wild",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "player" => Some(Self::Player),
            "npc" => Some(Self::Npc),
            "wild" => Some(Self::Wild),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSide {
    Players,
    Opponents,
}

impl TeamSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Players => "players",
            Self::Opponents => "opponents",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "players" => Some(Self::Players),
            "opponents" => Some(Self::Opponents),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Players => Self::Opponents,
            Self::Opponents => Self::Players,
        }
    }
}

/// Who won a finished battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Side(TeamSide),
    Draw,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Side(side) => side.as_str(),
            Self::Draw => "draw",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "draw" => Some(Self::Draw),
            other => TeamSide::parse(other).map(Self::Side),
        }
    }

    pub fn is_side(&self, side: TeamSide) -> bool {
        *self == Self::Side(side)
    }
}

fn parse_column<T>(value: &str, column: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T, DbErr> {
    parse(value).ok_or_else(|| DbErr::Custom(format!("Invalid {}: {}", column, value)))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Battle {
    pub id: i32,
    pub encounter_id: Option<i32>,
    pub battle_type: BattleType,
    pub status: BattleStatus,
    pub current_turn: i32,
    pub current_participant_index: i32,
    pub conditions: Conditions,
    pub knockout_limit: i32,
    pub winner: Option<Winner>,
    pub created_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Battle {
    /// Converts an entity model to the battle domain model.
    ///
    /// Unknown weather and terrain values read as clear and normal.
    ///
    /// # Arguments
    /// - `entity` - The battle entity model from the database
    ///
    /// # Returns
    /// - `Ok(Battle)` - The converted domain model
    /// - `Err(DbErr::Custom)` - The stored type, status or winner is not recognized
    pub fn from_entity(entity: entity::battle::Model) -> Result<Self, DbErr> {
        let winner = entity
            .winner_type
            .as_deref()
            .map(|w| parse_column(w, "winner_type", Winner::parse))
            .transpose()?;

        Ok(Self {
            id: entity.id,
            encounter_id: entity.encounter_id,
            battle_type: parse_column(&entity.battle_type, "battle_type", BattleType::parse)?,
            status: parse_column(&entity.status, "status", BattleStatus::parse)?,
            current_turn: entity.current_turn,
            current_participant_index: entity.current_participant_index,
            conditions: Conditions {
                weather: Weather::parse_or_default(&entity.weather),
                terrain: Terrain::parse_or_default(&entity.terrain),
            },
            knockout_limit: entity.knockout_limit,
            winner,
            created_at: entity.created_at,
            ended_at: entity.ended_at,
        })
    }

    pub fn into_dto(self) -> BattleDto {
        BattleDto {
            id: self.id,
            encounter_id: self.encounter_id,
            battle_type: self.battle_type.as_str().to_string(),
            status: self.status.as_str().to_string(),
            current_turn: self.current_turn,
            current_participant_index: self.current_participant_index,
            weather: self.conditions.weather.as_str().to_string(),
            terrain: self.conditions.terrain.as_str().to_string(),
            knockout_limit: self.knockout_limit,
            winner_type: self.winner.map(|w| w.as_str().to_string()),
            created_at: self.created_at,
            ended_at: self.ended_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BattleStatus::Active
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: i32,
    pub battle_id: i32,
    pub kind: ParticipantType,
    pub side: TeamSide,
    pub trainer_id: Option<i32>,
    pub player_user_id: Option<String>,
    pub trainer_name: String,
    pub turn_order: i32,
    pub is_active: bool,
    pub message_count: i32,
    pub word_count: i32,
}

impl Participant {
    pub fn from_entity(entity: entity::battle_participant::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            battle_id: entity.battle_id,
            kind: parse_column(
                &entity.participant_type,
                "participant_type",
                ParticipantType::parse,
            )?,
            side: parse_column(&entity.team_side, "team_side", TeamSide::parse)?,
            trainer_id: entity.trainer_id,
            player_user_id: entity.player_user_id,
            trainer_name: entity.trainer_name,
            turn_order: entity.turn_order,
            is_active: entity.is_active,
            message_count: entity.message_count,
            word_count: entity.word_count,
        })
    }

    pub fn into_dto(self) -> ParticipantDto {
        ParticipantDto {
            id: self.id,
            participant_type: self.kind.as_str().to_string(),
            team_side: self.side.as_str().to_string(),
            trainer_id: self.trainer_id,
            player_user_id: self.player_user_id,
            trainer_name: self.trainer_name,
            turn_order: self.turn_order,
            is_active: self.is_active,
            message_count: self.message_count,
            word_count: self.word_count,
        }
    }

    /// NPC trainers and wild groups act on their own.
    pub fn is_ai(&self) -> bool {
        self.kind != ParticipantType::Player
    }
}

/// Parameters for adding a participant.
#[derive(Debug, Clone)]
pub struct NewParticipant {
    pub battle_id: i32,
    pub kind: ParticipantType,
    pub side: TeamSide,
    pub trainer_id: Option<i32>,
    pub player_user_id: Option<String>,
    pub trainer_name: String,
    pub turn_order: i32,
}

impl NewParticipant {
    /// An AI-controlled participant on the opponents side.
    pub fn opponent(battle_id: i32, kind: ParticipantType, name: impl Into<String>, turn_order: i32) -> Self {
        Self {
            battle_id,
            kind,
            side: TeamSide::Opponents,
            trainer_id: None,
            player_user_id: None,
            trainer_name: name.into(),
            turn_order,
        }
    }

    /// A player-controlled trainer.
    pub fn player(
        battle_id: i32,
        side: TeamSide,
        trainer_id: i32,
        player_user_id: impl Into<String>,
        trainer_name: impl Into<String>,
        turn_order: i32,
    ) -> Self {
        Self {
            battle_id,
            kind: ParticipantType::Player,
            side,
            trainer_id: Some(trainer_id),
            player_user_id: Some(player_user_id.into()),
            trainer_name: trainer_name.into(),
            turn_order,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BattleMonster {
    pub id: i32,
    pub battle_id: i32,
    pub participant_id: i32,
    /// The stored monster this snapshot was taken from. `None` for generated opponents.
    pub monster_id: Option<i32>,
    pub name: String,
    pub level: i32,
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub max_hp: i32,
    pub current_hp: i32,
    /// `hp` mirrors `max_hp`.
    pub stats: StatBlock,
    pub moves: Vec<String>,
    pub status_effects: Vec<StatusEffect>,
    pub is_active: bool,
    pub is_fainted: bool,
    pub position: i32,
}

impl BattleMonster {
    /// Converts an entity model to the battle monster domain model.
    ///
    /// # Returns
    /// - `Ok(BattleMonster)` - The converted domain model
    /// - `Err(DbErr::Json)` - Types, moves or status effects are malformed
    pub fn from_entity(entity: entity::battle_monster::Model) -> Result<Self, DbErr> {
        let types: Vec<String> = serde_json::from_value(entity.types)
            .map_err(|e| DbErr::Json(format!("Invalid types: {}", e)))?;
        let moves: Vec<String> = serde_json::from_value(entity.moves)
            .map_err(|e| DbErr::Json(format!("Invalid moves: {}", e)))?;
        let status_effects: Vec<StatusEffect> = serde_json::from_value(entity.status_effects)
            .map_err(|e| DbErr::Json(format!("Invalid status effects: {}", e)))?;

        Ok(Self {
            id: entity.id,
            battle_id: entity.battle_id,
            participant_id: entity.participant_id,
            monster_id: entity.monster_id,
            name: entity.name,
            level: entity.level,
            types,
            attribute: entity.attribute,
            max_hp: entity.max_hp,
            current_hp: entity.current_hp,
            stats: StatBlock {
                hp: entity.max_hp,
                atk: entity.atk,
                def: entity.def,
                spa: entity.spa,
                spd: entity.spd,
                spe: entity.spe,
            },
            moves,
            status_effects,
            is_active: entity.is_active,
            is_fainted: entity.is_fainted,
            position: entity.position,
        })
    }

    pub fn into_dto(self) -> BattleMonsterDto {
        BattleMonsterDto {
            id: self.id,
            participant_id: self.participant_id,
            monster_id: self.monster_id,
            name: self.name,
            level: self.level,
            types: self.types,
            attribute: self.attribute,
            max_hp: self.max_hp,
            current_hp: self.current_hp,
            stats: StatBlockDto {
                hp: self.stats.hp,
                atk: self.stats.atk,
                def: self.stats.def,
                spa: self.stats.spa,
                spd: self.stats.spd,
                spe: self.stats.spe,
            },
            moves: self.moves,
            status_effects: self
                .status_effects
                .into_iter()
                .map(|e| StatusEffectDto {
                    kind: e.kind.as_str().to_string(),
                    duration: e.duration,
                })
                .collect(),
            is_active: self.is_active,
            is_fainted: self.is_fainted,
            position: self.position,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.is_fainted && self.current_hp > 0
    }

    /// Alive and on the field.
    pub fn can_fight(&self) -> bool {
        self.is_active && self.is_alive()
    }

    pub fn knows(&self, move_name: &str) -> bool {
        self.moves.iter().any(|m| m.eq_ignore_ascii_case(move_name.trim()))
    }

    pub fn combatant(&self) -> Combatant<'_> {
        Combatant {
            name: &self.name,
            level: self.level,
            atk: self.stats.atk,
            def: self.stats.def,
            spa: self.stats.spa,
            spd: self.stats.spd,
            types: &self.types,
            stages: StatStages::default(),
        }
    }
}

/// Parameters for putting a monster into a battle.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBattleMonster {
    pub battle_id: i32,
    pub participant_id: i32,
    pub monster_id: Option<i32>,
    pub name: String,
    pub level: i32,
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub max_hp: i32,
    pub stats: StatBlock,
    pub moves: Vec<String>,
    pub is_active: bool,
    pub position: i32,
}

impl NewBattleMonster {
    /// Snapshots a stored monster for the given participant.
    pub fn from_monster(
        battle_id: i32,
        participant_id: i32,
        monster: &Monster,
        max_hp: i32,
        position: i32,
    ) -> Self {
        let p = &monster.profile;
        Self {
            battle_id,
            participant_id,
            monster_id: Some(monster.id),
            name: p.name.clone(),
            level: p.level,
            types: p.types.clone(),
            attribute: p.attribute.clone(),
            max_hp,
            stats: p.stats,
            moves: p.moveset.clone(),
            is_active: true,
            position,
        }
    }
}

/// A recorded action.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub battle_id: i32,
    pub turn_number: i32,
    pub participant_id: i32,
    pub battle_monster_id: Option<i32>,
    pub action_type: String,
    pub action_data: serde_json::Value,
    pub damage_dealt: i32,
    pub message: Option<String>,
    pub word_count: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogType {
    System,
    Action,
}

impl LogType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Action => "action",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BattleLog {
    pub id: i32,
    pub participant_id: Option<i32>,
    pub turn_number: i32,
    pub log_type: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl BattleLog {
    pub fn from_entity(entity: entity::battle_log::Model) -> Self {
        Self {
            id: entity.id,
            participant_id: entity.participant_id,
            turn_number: entity.turn_number,
            log_type: entity.log_type,
            message: entity.message,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BattleLogDto {
        BattleLogDto {
            id: self.id,
            participant_id: self.participant_id,
            turn_number: self.turn_number,
            log_type: self.log_type,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

/// Snapshot of a battle and everything in it.
#[derive(Debug, Clone)]
pub struct BattleState {
    pub battle: Battle,
    /// All participants ordered by turn order.
    pub participants: Vec<Participant>,
    pub monsters: Vec<BattleMonster>,
    /// Most recent log lines, oldest first.
    pub recent_logs: Vec<BattleLog>,
}

impl BattleState {
    /// Participants that still take turns, in turn order.
    pub fn turn_order(&self) -> Vec<&Participant> {
        let mut active: Vec<&Participant> =
            self.participants.iter().filter(|p| p.is_active).collect();
        active.sort_by_key(|p| p.turn_order);
        active
    }

    pub fn current_participant(&self) -> Option<&Participant> {
        let order = self.turn_order();
        if order.is_empty() {
            return None;
        }
        let index = self.battle.current_participant_index.max(0) as usize % order.len();
        order.get(index).copied()
    }

    pub fn participant(&self, id: i32) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn participant_for_player(&self, player_user_id: &str) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|p| p.player_user_id.as_deref() == Some(player_user_id))
    }

    pub fn monster(&self, id: i32) -> Option<&BattleMonster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    /// A participant's monsters in position order.
    pub fn monsters_of(&self, participant_id: i32) -> Vec<&BattleMonster> {
        let mut monsters: Vec<&BattleMonster> = self
            .monsters
            .iter()
            .filter(|m| m.participant_id == participant_id)
            .collect();
        monsters.sort_by_key(|m| m.position);
        monsters
    }

    pub fn side_of(&self, monster: &BattleMonster) -> Option<TeamSide> {
        self.participant(monster.participant_id).map(|p| p.side)
    }

    /// Every monster fielded by `side`.
    pub fn monsters_on(&self, side: TeamSide) -> Vec<&BattleMonster> {
        self.monsters
            .iter()
            .filter(|m| self.side_of(m) == Some(side))
            .collect()
    }

    /// Monsters of `side` that can currently be hit.
    pub fn targets_on(&self, side: TeamSide) -> Vec<&BattleMonster> {
        self.monsters_on(side)
            .into_iter()
            .filter(|m| m.can_fight())
            .collect()
    }

    pub fn into_dto(self) -> BattleStateDto {
        let current_participant = self.current_participant().cloned().map(Participant::into_dto);

        BattleStateDto {
            battle: self.battle.into_dto(),
            participants: self.participants.into_iter().map(Participant::into_dto).collect(),
            monsters: self.monsters.into_iter().map(BattleMonster::into_dto).collect(),
            current_participant,
            recent_logs: self.recent_logs.into_iter().map(BattleLog::into_dto).collect(),
        }
    }
}

/// Experience and coins earned by one player participant.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleReward {
    pub participant_id: i32,
    pub trainer_id: i32,
    pub experience: i32,
    pub coins: i32,
}

impl BattleReward {
    pub fn into_dto(self) -> BattleRewardDto {
        BattleRewardDto {
            participant_id: self.participant_id,
            trainer_id: self.trainer_id,
            experience: self.experience,
            coins: self.coins,
        }
    }
}

/// Result of a player action.
#[derive(Debug, Clone)]
pub struct ActionResult {
    pub messages: Vec<String>,
    pub captured: Option<Monster>,
    pub rewards: Vec<BattleReward>,
    pub state: BattleState,
}

impl ActionResult {
    pub fn into_dto(self) -> ActionResultDto {
        ActionResultDto {
            messages: self.messages,
            captured: self.captured.map(Monster::into_dto),
            rewards: self.rewards.into_iter().map(BattleReward::into_dto).collect(),
            state: self.state.into_dto(),
        }
    }
}

/// A player's attack.
#[derive(Debug, Clone)]
pub struct AttackParam {
    pub player_user_id: String,
    pub move_name: String,
    pub target: Option<String>,
    pub attacker_name: Option<String>,
    pub message: String,
}

impl AttackParam {
    pub fn from_dto(dto: AttackDto) -> Self {
        Self {
            player_user_id: dto.player_user_id,
            move_name: dto.move_name,
            target: dto.target,
            attacker_name: dto.attacker_name,
            message: dto.message,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UseItemParam {
    pub player_user_id: String,
    pub trainer_id: i32,
    pub item_name: String,
    pub target: Option<String>,
    pub message: String,
}

impl UseItemParam {
    pub fn from_dto(dto: UseItemDto) -> Self {
        Self {
            player_user_id: dto.player_user_id,
            trainer_id: dto.trainer_id,
            item_name: dto.item_name,
            target: dto.target,
            message: dto.message,
        }
    }
}

/// Releasing or withdrawing a monster by name.
#[derive(Debug, Clone)]
pub struct MonsterActionParam {
    pub player_user_id: String,
    pub monster_name: String,
    pub message: String,
}

impl MonsterActionParam {
    pub fn from_dto(dto: MonsterActionDto) -> Self {
        Self {
            player_user_id: dto.player_user_id,
            monster_name: dto.monster_name,
            message: dto.message,
        }
    }
}
