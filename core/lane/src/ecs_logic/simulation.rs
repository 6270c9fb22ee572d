//! 模擬步進
//!
//! `step` 由外部的畫面迴圈每幀呼叫一次，順序固定：
//! 時間推進 → 收入累積 → 敵方決策 → 單位更新 → 陣亡清理 → 勝負判定。

use super::combat::{remove_dead_units, update_units};
use super::economy::accrue_income;
use super::enemy_ai::run_enemy_director;
use super::{get_resource, get_resource_mut, push_event};
use crate::domain::alias::Seconds;
use crate::domain::core_types::{Faction, Outcome};
use crate::domain::events::GameEvent;
use crate::ecs_types::resources::{Bases, MatchState};
use crate::error::{MatchError, Result};
use bevy_ecs::prelude::World;

/// 推進模擬 dt 秒，回傳推進後的對戰結果
///
/// - 對戰已結束時不做任何事，直接回傳結果（直到 `reset_match`）
/// - dt 必須是有限且 >= 0 的數值
pub fn step(world: &mut World, dt: Seconds) -> Result<Outcome> {
    let outcome = get_resource!(world, MatchState).outcome;
    if outcome.is_terminal() {
        return Ok(outcome);
    }
    if !dt.is_finite() || dt < 0.0 {
        return Err(MatchError::InvalidDelta { dt }.into());
    }

    get_resource_mut!(world, MatchState).elapsed += dt;
    accrue_income(world, dt)?;
    run_enemy_director(world, dt)?;
    update_units(world, dt)?;
    remove_dead_units(world)?;
    check_outcome(world)
}

/// 判定勝負；雙方基地同時被摧毀時判玩家落敗
fn check_outcome(world: &mut World) -> Result<Outcome> {
    let outcome = {
        let bases = get_resource!(world, Bases);
        if bases.0.get(Faction::Player).is_destroyed() {
            Outcome::won_by(Faction::Enemy)
        } else if bases.0.get(Faction::Enemy).is_destroyed() {
            Outcome::won_by(Faction::Player)
        } else {
            Outcome::InProgress
        }
    };

    if outcome.is_terminal() {
        get_resource_mut!(world, MatchState).outcome = outcome;
        push_event(world, GameEvent::MatchEnded { outcome })?;
    }
    Ok(outcome)
}
