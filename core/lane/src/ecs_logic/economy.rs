use super::{get_resource, get_resource_mut, push_event};
use crate::domain::alias::Seconds;
use crate::domain::core_types::Faction;
use crate::domain::events::{GameEvent, Purchase};
use crate::ecs_types::resources::{Economies, MatchConfig, MatchState};
use crate::error::{MatchError, Result};
use crate::logic::economy::upgrade_cost;
use bevy_ecs::prelude::World;
use strum::IntoEnumIterator;

/// 雙方依每秒收入連續累積金幣
pub fn accrue_income(world: &mut World, dt: Seconds) -> Result<()> {
    let mut economies = get_resource_mut!(world, Economies);
    for faction in Faction::iter() {
        economies.0.get_mut(faction).accrue(dt);
    }
    Ok(())
}

/// 升級礦場，回傳升級後的等級
///
/// 花費 = upgrade_base_cost × 目前等級；成功後等級 +1、每秒收入 + income_per_upgrade。
/// 金幣不足時不修改任何狀態，寫入事件後回傳錯誤。
pub fn request_upgrade(world: &mut World, faction: Faction) -> Result<u32> {
    let outcome = get_resource!(world, MatchState).outcome;
    if outcome.is_terminal() {
        return Err(MatchError::MatchFinished { outcome }.into());
    }

    let economy_config = get_resource!(world, MatchConfig).economy.clone();
    let (cost, available) = {
        let pool = get_resource!(world, Economies).0.get(faction);
        (upgrade_cost(&economy_config, pool.mine_level), pool.gold)
    };

    let upgraded = {
        let mut economies = get_resource_mut!(world, Economies);
        let pool = economies.0.get_mut(faction);
        match pool.spend(faction, cost) {
            Ok(()) => {
                pool.mine_level += 1;
                pool.income += economy_config.income_per_upgrade;
                Ok((pool.mine_level, pool.income))
            }
            Err(err) => Err(err),
        }
    };

    match upgraded {
        Ok((mine_level, income)) => {
            push_event(
                world,
                GameEvent::Invested {
                    faction,
                    mine_level,
                    income,
                },
            )?;
            Ok(mine_level)
        }
        Err(err) => {
            push_event(
                world,
                GameEvent::InsufficientFunds {
                    faction,
                    purchase: Purchase::Upgrade,
                    required: cost,
                    available,
                },
            )?;
            Err(err)
        }
    }
}
