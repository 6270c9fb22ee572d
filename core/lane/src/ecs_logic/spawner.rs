use super::{get_resource, get_resource_mut, push_event};
use crate::domain::alias::{LaneCoord, SpawnSeq};
use crate::domain::core_types::{Archetype, Faction, UnitRole, UnitState};
use crate::domain::events::{GameEvent, Purchase};
use crate::ecs_types::components::{
    AttackCooldown, AttackPeriod, AttackRange, Behavior, CurrentHp, Damage, GatherRate,
    LanePosition, MaxHp, Owner, SpawnOrder, Speed, StatBundle, Unit, UnitBundle, UnitTypeName,
};
use crate::ecs_types::resources::{Economies, GameData, MatchConfig, MatchState};
use crate::error::{MatchError, Result};
use crate::logic::movement::spawn_position;
use bevy_ecs::entity::Entity;
use bevy_ecs::prelude::World;

/// 為指定陣營訓練一個單位
///
/// - 金幣 >= 花費時扣款，並在己方基地前生成單位（滿血、攻擊冷卻為一個攻擊間隔）
/// - 金幣不足或類型不存在時不修改任何狀態，寫入事件後回傳錯誤
/// - 對戰結束後一律拒絕
pub fn request_spawn(world: &mut World, faction: Faction, type_name: &str) -> Result<Entity> {
    // 第一階段：讀取資料並驗證
    let outcome = get_resource!(world, MatchState).outcome;
    if outcome.is_terminal() {
        return Err(MatchError::MatchFinished { outcome }.into());
    }

    let found = get_resource!(world, GameData).archetype(type_name).cloned();
    let archetype = match found {
        Ok(archetype) => archetype,
        Err(err) => {
            push_event(
                world,
                GameEvent::UnknownUnitType {
                    faction,
                    type_name: type_name.to_string(),
                },
            )?;
            return Err(err);
        }
    };

    let available = get_resource!(world, Economies).0.get(faction).gold;
    let spent = get_resource_mut!(world, Economies)
        .0
        .get_mut(faction)
        .spend(faction, archetype.cost);
    if let Err(err) = spent {
        push_event(
            world,
            GameEvent::InsufficientFunds {
                faction,
                purchase: Purchase::Unit(archetype.name.clone()),
                required: archetype.cost,
                available,
            },
        )?;
        return Err(err);
    }

    // 第二階段：已扣款，寫入 World
    let position = spawn_position(&get_resource!(world, MatchConfig).lane, faction);
    let seq = get_resource_mut!(world, MatchState).take_spawn_seq();
    let entity = spawn_unit(world, faction, &archetype, position, seq);

    push_event(
        world,
        GameEvent::UnitTrained {
            faction,
            type_name: archetype.name.clone(),
            cost: archetype.cost,
        },
    )?;
    Ok(entity)
}

fn spawn_unit(
    world: &mut World,
    faction: Faction,
    archetype: &Archetype,
    position: LaneCoord,
    seq: SpawnSeq,
) -> Entity {
    let state = match archetype.role {
        UnitRole::Combatant => UnitState::Advancing,
        UnitRole::Gatherer { .. } => UnitState::Gathering,
    };

    let mut entity = world.spawn(UnitBundle {
        unit: Unit,
        type_name: UnitTypeName(archetype.name.clone()),
        owner: Owner(faction),
        spawn_order: SpawnOrder(seq),
        position: LanePosition(position),
        cooldown: AttackCooldown(archetype.attack_period),
        behavior: Behavior(state),
        stats: StatBundle {
            max_hp: MaxHp(archetype.max_health),
            current_hp: CurrentHp(archetype.max_health),
            damage: Damage(archetype.damage),
            speed: Speed(archetype.speed),
            attack_range: AttackRange(archetype.range),
            attack_period: AttackPeriod(archetype.attack_period),
        },
    });

    if let UnitRole::Gatherer { rate } = archetype.role {
        entity.insert(GatherRate(rate));
    }

    entity.id()
}
