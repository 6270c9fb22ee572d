use super::get_resource;
use super::loader::parse_and_insert_game_data;
use crate::domain::core_types::{Base, PerFaction, ResourcePool};
use crate::ecs_types::components::Unit;
use crate::ecs_types::resources::{
    Bases, Economies, EnemyDirector, EventLog, GameData, MatchConfig, MatchState,
};
use crate::error::{DataError, Result};
use crate::logic::movement::base_position;
use bevy_ecs::prelude::{Entity, With, World};

/// 載入資料並開局，回傳可直接步進的 World
pub fn create_world(units_toml: &str, match_toml: &str) -> Result<World> {
    let mut world = World::new();
    parse_and_insert_game_data(&mut world, units_toml, match_toml)?;
    start_match(&mut world)?;
    Ok(world)
}

/// 依 MatchConfig 建立資源池、基地、對戰進度、敵方決策與事件紀錄
///
/// 需先呼叫 `parse_and_insert_game_data`。
pub fn start_match(world: &mut World) -> Result<()> {
    if world.get_resource::<GameData>().is_none() {
        return Err(DataError::GameDataNotFound.into());
    }
    let config = get_resource!(world, MatchConfig).clone();

    world.insert_resource(Economies(PerFaction::from_fn(|_| {
        ResourcePool::new(config.economy.starting_gold, config.economy.income)
    })));
    world.insert_resource(Bases(PerFaction::from_fn(|faction| {
        Base::new(
            base_position(&config.lane, faction),
            config.lane.base_max_health,
        )
    })));
    world.insert_resource(MatchState::default());
    world.insert_resource(EnemyDirector::new(&config.enemy_ai));
    world.insert_resource(EventLog::default());

    log::debug!(
        "match started: lane {}..{}, base health {}",
        config.lane.player_base_position,
        config.lane.enemy_base_position,
        config.lane.base_max_health
    );
    Ok(())
}

/// 移除所有單位並重新開局（離開終局狀態）
pub fn reset_match(world: &mut World) -> Result<()> {
    let units: Vec<Entity> = world
        .query_filtered::<Entity, With<Unit>>()
        .iter(world)
        .collect();
    for entity in units {
        world.despawn(entity);
    }
    start_match(world)
}
