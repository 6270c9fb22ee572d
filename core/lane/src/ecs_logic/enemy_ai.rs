//! 敵方決策
//!
//! 刻意保持簡單：每隔固定時間，從花費不超過預算的單位類型中均勻隨機挑一個訓練。
//! 預算隨對戰時間成長；亂數由設定中的 seed 決定，同 seed 結果相同。

use super::spawner::request_spawn;
use super::{get_resource, get_resource_mut};
use crate::domain::alias::{Gold, Seconds, TypeName};
use crate::domain::core_types::Faction;
use crate::ecs_types::resources::{EnemyDirector, GameData, MatchConfig, MatchState};
use crate::error::Result;
use crate::logic::economy::enemy_budget;
use bevy_ecs::prelude::World;
use rand::Rng;

/// 累積時間，每滿一個決策間隔就嘗試訓練一個單位
pub fn run_enemy_director(world: &mut World, dt: Seconds) -> Result<()> {
    let ai_config = get_resource!(world, MatchConfig).enemy_ai.clone();

    let decisions = {
        let mut director = get_resource_mut!(world, EnemyDirector);
        if !director.enabled {
            return Ok(());
        }
        director.timer += dt;
        let mut decisions = 0;
        while director.timer >= ai_config.decision_interval {
            director.timer -= ai_config.decision_interval;
            decisions += 1;
        }
        decisions
    };

    for _ in 0..decisions {
        let elapsed = get_resource!(world, MatchState).elapsed;
        let budget = enemy_budget(&ai_config, elapsed);
        let Some(type_name) = pick_unit_type(world, budget)? else {
            log::debug!("enemy director: nothing affordable within budget {budget:.1}");
            continue;
        };
        match request_spawn(world, Faction::Enemy, &type_name) {
            Ok(_) => {}
            Err(err) if err.is_recoverable() => {
                log::debug!("enemy director: {type_name} skipped: {err}");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// 從花費 <= budget 的單位類型中均勻隨機挑選
fn pick_unit_type(world: &mut World, budget: Gold) -> Result<Option<TypeName>> {
    let eligible: Vec<TypeName> = get_resource!(world, GameData)
        .archetypes()
        .filter(|archetype| archetype.cost <= budget)
        .map(|archetype| archetype.name.clone())
        .collect();
    if eligible.is_empty() {
        return Ok(None);
    }

    let mut director = get_resource_mut!(world, EnemyDirector);
    let index = director.rng.random_range(0..eligible.len());
    Ok(eligible.into_iter().nth(index))
}
