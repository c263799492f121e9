use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_count() -> i32 {
    1
}

fn default_true() -> bool {
    true
}

/// How a character appears in a piece of art.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AppearanceDto {
    /// `bust`, `halfBody` or `fullBody`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_count")]
    pub count: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TrainerEntryDto {
    pub trainer_id: i32,
    #[serde(default)]
    pub appearances: Vec<AppearanceDto>,
    /// Overrides the calculated levels when above 0.
    #[serde(default)]
    pub custom_levels: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MonsterEntryDto {
    pub monster_id: i32,
    #[serde(default)]
    pub appearances: Vec<AppearanceDto>,
    #[serde(default)]
    pub complexity_bonus: i32,
    #[serde(default)]
    pub custom_levels: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NpcEntryDto {
    pub name: Option<String>,
    /// Levels drawn for the NPC in art submissions.
    #[serde(default)]
    pub levels: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArtSubmissionDto {
    /// `sketch`, `sketchSet`, `lineArt`, `flatColor`, `rendered` or `polished`.
    pub quality: String,
    /// `none`, `simple` or `complex`; the best one counts.
    #[serde(default)]
    pub backgrounds: Vec<String>,
    #[serde(default)]
    pub uniquely_difficult: bool,
    #[serde(default)]
    pub use_static_rewards: bool,
    #[serde(default)]
    pub trainers: Vec<TrainerEntryDto>,
    #[serde(default)]
    pub monsters: Vec<MonsterEntryDto>,
    #[serde(default)]
    pub npcs: Vec<NpcEntryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WritingSubmissionDto {
    pub word_count: i32,
    #[serde(default)]
    pub trainers: Vec<TrainerEntryDto>,
    #[serde(default)]
    pub monsters: Vec<MonsterEntryDto>,
    #[serde(default)]
    pub npcs: Vec<NpcEntryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ExternalCharacterDto {
    pub name: String,
    pub appearance: String,
    /// `simple`, `average`, `complex` or `extravagant`.
    pub complexity: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ExternalArtSubmissionDto {
    pub quality: String,
    #[serde(default)]
    pub backgrounds: Vec<String>,
    #[serde(default)]
    pub characters: Vec<ExternalCharacterDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ExternalWritingSubmissionDto {
    pub word_count: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TrainerRewardDto {
    pub trainer_id: i32,
    pub levels: i32,
    pub coins: i32,
    #[serde(default = "default_true")]
    pub is_owned: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MonsterRewardDto {
    pub monster_id: i32,
    pub levels: i32,
    pub coins: i32,
    #[serde(default)]
    pub capped_levels: i32,
    #[serde(default = "default_true")]
    pub is_owned: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GiftItemDto {
    pub category: String,
    pub name: String,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, Default, ToSchema)]
pub struct BonusRollsDto {
    pub garden_points: i32,
    pub mission_progress: i32,
    pub boss_damage: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubmissionRewardsDto {
    pub total_levels: i32,
    pub total_coins: i32,
    #[serde(default)]
    pub trainers: Vec<TrainerRewardDto>,
    #[serde(default)]
    pub monsters: Vec<MonsterRewardDto>,
    #[serde(default)]
    pub bonus: BonusRollsDto,
    #[serde(default)]
    pub gift_levels: i32,
    #[serde(default)]
    pub gift_items: Vec<GiftItemDto>,
}

/// The submitted work. Rewards are always calculated from it on the server.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionInputDto {
    Art(ArtSubmissionDto),
    Writing(WritingSubmissionDto),
    ExternalArt(ExternalArtSubmissionDto),
    ExternalWriting(ExternalWritingSubmissionDto),
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ApplySubmissionDto {
    pub player_user_id: String,
    pub title: String,
    pub submission: SubmissionInputDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AppliedMonsterDto {
    pub monster_id: i32,
    pub old_level: i32,
    pub new_level: i32,
    pub learned_moves: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AppliedRewardsDto {
    pub submission_id: i32,
    pub trainers: Vec<TrainerRewardDto>,
    pub monsters: Vec<AppliedMonsterDto>,
    /// Damage dealt to the active boss, 0 when there was none.
    pub boss_damage: i32,
    pub gift_levels: i32,
    pub gift_items: Vec<GiftItemDto>,
    pub capped_levels: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubmissionDto {
    pub id: i32,
    pub player_user_id: String,
    pub kind: String,
    pub title: String,
    pub rewards: SubmissionRewardsDto,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}
