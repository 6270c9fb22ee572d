//! 供畫面與 HUD 讀取的查詢（只讀，於兩次 `step` 之間呼叫）

use super::{get_resource, get_resource_mut};
use crate::domain::alias::{Gold, LaneCoord, Seconds, SpawnSeq, Stat, TypeName};
use crate::domain::core_types::{Archetype, Faction, Outcome, PerFaction, UnitState};
use crate::domain::events::GameEvent;
use crate::ecs_types::components::{
    Behavior, CurrentHp, LanePosition, MaxHp, Owner, SpawnOrder, Unit, UnitTypeName,
};
use crate::ecs_types::resources::{
    Bases, Economies, EventLog, GameData, MatchConfig, MatchState,
};
use crate::error::Result;
use crate::logic::economy::upgrade_cost;
use bevy_ecs::prelude::{With, World};
use serde::Serialize;

/// 單位顯示資料
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitView {
    pub spawn_order: SpawnSeq,
    pub faction: Faction,
    pub type_name: TypeName,
    pub position: LaneCoord,
    pub health: Stat,
    pub max_health: Stat,
    pub state: UnitState,
}

/// 陣營經濟顯示資料
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomyView {
    pub gold: Gold,
    /// 夾在顯示上限內的金幣
    pub display_gold: Gold,
    /// 金幣條填滿比例（0..=1）
    pub gold_fill: f32,
    pub income: Gold,
    pub mine_level: u32,
    pub upgrade_cost: Gold,
}

/// 基地顯示資料
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseView {
    pub position: LaneCoord,
    pub health: Stat,
    pub max_health: Stat,
}

/// 一次取得整局狀態
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSnapshot {
    pub elapsed: Seconds,
    pub outcome: Outcome,
    pub economies: PerFaction<EconomyView>,
    pub bases: PerFaction<BaseView>,
    pub units: Vec<UnitView>,
}

/// 取得對戰設定
pub fn get_match_config(world: &World) -> Result<MatchConfig> {
    Ok(get_resource!(world, MatchConfig).clone())
}

/// 取得單位原型（已套用缺省值）
pub fn get_archetype(world: &World, type_name: &str) -> Result<Archetype> {
    get_resource!(world, GameData).archetype(type_name).cloned()
}

/// 依目錄順序列出可訓練的單位類型
pub fn get_roster(world: &World) -> Result<Vec<Archetype>> {
    Ok(get_resource!(world, GameData).archetypes().cloned().collect())
}

/// 取得對戰結果
pub fn get_outcome(world: &World) -> Result<Outcome> {
    Ok(get_resource!(world, MatchState).outcome)
}

/// 取得已經過的模擬時間
pub fn get_elapsed(world: &World) -> Result<Seconds> {
    Ok(get_resource!(world, MatchState).elapsed)
}

/// 查詢所有存活單位，依生成序號排序
pub fn get_unit_views(world: &mut World) -> Vec<UnitView> {
    let mut views: Vec<UnitView> = world
        .query_filtered::<(
            &SpawnOrder,
            &Owner,
            &UnitTypeName,
            &LanePosition,
            &CurrentHp,
            &MaxHp,
            &Behavior,
        ), With<Unit>>()
        .iter(world)
        .map(
            |(order, owner, type_name, position, current_hp, max_hp, behavior)| UnitView {
                spawn_order: order.0,
                faction: owner.0,
                type_name: type_name.0.clone(),
                position: position.0,
                health: current_hp.0,
                max_health: max_hp.0,
                state: behavior.0,
            },
        )
        .collect();
    views.sort_by_key(|view| view.spawn_order);
    views
}

/// 查詢陣營經濟
pub fn get_economy_view(world: &World, faction: Faction) -> Result<EconomyView> {
    let economy_config = &get_resource!(world, MatchConfig).economy;
    let pool = get_resource!(world, Economies).0.get(faction);
    let ceiling = economy_config.gold_display_ceiling;
    Ok(EconomyView {
        gold: pool.gold,
        display_gold: pool.display_gold(ceiling),
        gold_fill: pool.gold_fill(ceiling),
        income: pool.income,
        mine_level: pool.mine_level,
        upgrade_cost: upgrade_cost(economy_config, pool.mine_level),
    })
}

/// 查詢陣營基地
pub fn get_base_view(world: &World, faction: Faction) -> Result<BaseView> {
    let base = get_resource!(world, Bases).0.get(faction);
    Ok(BaseView {
        position: base.position,
        health: base.health,
        max_health: base.max_health,
    })
}

/// 取得整局快照
pub fn get_match_snapshot(world: &mut World) -> Result<MatchSnapshot> {
    let state = get_resource!(world, MatchState).clone();
    let economies = PerFaction {
        player: get_economy_view(world, Faction::Player)?,
        enemy: get_economy_view(world, Faction::Enemy)?,
    };
    let bases = PerFaction {
        player: get_base_view(world, Faction::Player)?,
        enemy: get_base_view(world, Faction::Enemy)?,
    };
    Ok(MatchSnapshot {
        elapsed: state.elapsed,
        outcome: state.outcome,
        economies,
        bases,
        units: get_unit_views(world),
    })
}

/// 取出並清空事件紀錄
pub fn drain_events(world: &mut World) -> Result<Vec<GameEvent>> {
    Ok(get_resource_mut!(world, EventLog).drain())
}
