use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        battle::{self, BATTLE_TAG},
        boss::{self, BOSS_TAG},
        breeding::{self, BREEDING_TAG},
        catalogue::{self, CATALOGUE_TAG},
        encounter::{self, ENCOUNTER_TAG},
        monster::{self, MONSTER_TAG},
        nursery::{self, NURSERY_TAG},
        roll::{self, ROLL_TAG},
        submission::{self, SUBMISSION_TAG},
        trainer::{self, TRAINER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Menagerie API", description = "Monster collecting game backend"),
    tags(
        (name = TRAINER_TAG, description = "Trainers, coins and inventories"),
        (name = MONSTER_TAG, description = "Owned monsters and their lineage"),
        (name = CATALOGUE_TAG, description = "Species, moves and abilities"),
        (name = ROLL_TAG, description = "Random monster generation"),
        (name = BREEDING_TAG, description = "Breeding two monsters"),
        (name = NURSERY_TAG, description = "Hatching eggs"),
        (name = ENCOUNTER_TAG, description = "Wild, battle and item encounters"),
        (name = BATTLE_TAG, description = "Turn based battles"),
        (name = BOSS_TAG, description = "Monthly bosses and their rewards"),
        (name = SUBMISSION_TAG, description = "Art and writing rewards"),
    )
)]
struct ApiDoc;

/// Builds the API router together with its OpenAPI document.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(trainer_routes())
        .merge(monster_routes())
        .merge(catalogue_routes())
        .merge(generation_routes())
        .merge(battle_routes())
        .merge(boss_routes())
        .merge(submission_routes())
        .split_for_parts()
}

fn trainer_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(trainer::create_trainer, trainer::list_trainers))
        .routes(routes!(trainer::get_trainer, trainer::delete_trainer))
        .routes(routes!(trainer::add_coins))
        .routes(routes!(trainer::list_trainer_monsters))
        .routes(routes!(
            trainer::get_inventory,
            trainer::add_item,
            trainer::remove_item
        ))
        .routes(routes!(trainer::has_item))
}

fn monster_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(monster::create_monster))
        .routes(routes!(monster::get_monster, monster::delete_monster))
        .routes(routes!(monster::rename_monster))
        .routes(routes!(monster::add_levels))
        .routes(routes!(monster::get_lineage, monster::add_parents))
}

fn catalogue_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(catalogue::create_species, catalogue::list_species))
        .routes(routes!(catalogue::create_move, catalogue::list_moves))
        .routes(routes!(catalogue::get_move))
        .routes(routes!(catalogue::create_ability, catalogue::list_abilities))
}

/// Rolling, breeding, hatching and encounters.
fn generation_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(roll::roll))
        .routes(routes!(roll::roll_options))
        .routes(routes!(breeding::check_eligibility))
        .routes(routes!(breeding::breed))
        .routes(routes!(breeding::get_breeding_session))
        .routes(routes!(breeding::claim_offspring))
        .routes(routes!(breeding::reroll_offspring))
        .routes(routes!(nursery::start_hatch))
        .routes(routes!(nursery::get_hatch_session))
        .routes(routes!(nursery::select_hatched))
        .routes(routes!(nursery::reroll_hatch))
        .routes(routes!(encounter::generate_encounter))
        .routes(routes!(encounter::get_encounter))
        .routes(routes!(encounter::capture))
}

fn battle_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(battle::start_battle))
        .routes(routes!(battle::start_pvp))
        .routes(routes!(battle::get_battle))
        .routes(routes!(battle::join_battle))
        .routes(routes!(battle::attack))
        .routes(routes!(battle::use_item))
        .routes(routes!(battle::release))
        .routes(routes!(battle::withdraw))
        .routes(routes!(battle::forfeit))
        .routes(routes!(battle::flee))
        .routes(routes!(battle::force_end))
        .routes(routes!(battle::set_weather))
        .routes(routes!(battle::set_terrain))
        .routes(routes!(battle::set_win_condition))
}

fn boss_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(boss::create_boss))
        .routes(routes!(boss::get_active_boss))
        .routes(routes!(boss::list_defeated_bosses))
        .routes(routes!(boss::get_boss))
        .routes(routes!(boss::get_leaderboard))
        .routes(routes!(boss::add_damage))
        .routes(routes!(boss::list_unclaimed_rewards))
        .routes(routes!(boss::claim_reward))
}

fn submission_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(submission::art_rewards))
        .routes(routes!(submission::writing_rewards))
        .routes(routes!(submission::external_art_rewards))
        .routes(routes!(submission::external_writing_rewards))
        .routes(routes!(
            submission::apply_rewards,
            submission::list_submissions
        ))
        .routes(routes!(submission::get_submission))
}
