//! 單位更新與陣亡清理
//!
//! 每個 tick 分三個階段：
//! 1. 收集所有單位的快照（依生成序號排序）
//! 2. 以快照計算每個單位的更新（索敵、攻擊、前進、攻城），傷害先累加不直接寫入
//! 3. 一次寫回 World
//!
//! 所有單位都以 tick 開始時的狀態行動，同一 tick 被擊殺的單位仍會完成本次行動。
//! 陣亡清理在寫回之後單獨進行。

use super::{get_component_mut, get_resource, get_resource_mut, push_event};
use crate::domain::alias::{Gold, LaneCoord, Seconds, SpawnSeq, Stat, TypeName};
use crate::domain::core_types::{Faction, PerFaction, UnitState};
use crate::domain::events::GameEvent;
use crate::ecs_types::components::{
    AttackCooldown, AttackPeriod, AttackRange, Behavior, CurrentHp, Damage, GatherRate,
    LanePosition, Owner, SpawnOrder, Speed, Unit, UnitTypeName,
};
use crate::ecs_types::resources::{Bases, Economies, GameData, MatchConfig};
use crate::error::Result;
use crate::loader_schema::CombatConfig;
use crate::logic::advantage::AdvantageTable;
use crate::logic::movement::{advance, has_reached_base};
use crate::logic::targeting::{Contact, nearest_in_range};
use bevy_ecs::prelude::{Entity, With, World};
use strum::IntoEnumIterator;

/// 第一階段收集的單位快照
#[derive(Debug, Clone)]
struct UnitSnapshot {
    entity: Entity,
    spawn_order: SpawnSeq,
    owner: Faction,
    type_name: TypeName,
    position: LaneCoord,
    health: Stat,
    damage: Stat,
    speed: LaneCoord,
    range: LaneCoord,
    attack_period: Seconds,
    cooldown: Seconds,
    gather_rate: Option<Gold>,
}

impl UnitSnapshot {
    fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

/// 第二階段計算出的單位更新
#[derive(Debug, Clone)]
struct UnitUpdate {
    position: LaneCoord,
    cooldown: Seconds,
    state: UnitState,
    damage_taken: Stat,
}

/// 第二階段的完整結果
#[derive(Debug)]
struct TickResolution {
    updates: Vec<UnitUpdate>,
    base_damage: PerFaction<Stat>,
    gathered: PerFaction<Gold>,
}

/// 更新所有存活單位：索敵、攻擊、前進、攻城、採集
pub fn update_units(world: &mut World, dt: Seconds) -> Result<()> {
    let combat = get_resource!(world, MatchConfig).combat.clone();
    let base_positions = {
        let bases = get_resource!(world, Bases);
        PerFaction::from_fn(|faction| bases.0.get(faction).position)
    };

    // 第一階段：收集快照
    let snapshots = collect_snapshots(world);
    if snapshots.is_empty() {
        return Ok(());
    }

    // 第二階段：計算
    let resolution = {
        let game_data = get_resource!(world, GameData);
        resolve_tick(
            &snapshots,
            &game_data.advantages,
            &combat,
            &base_positions,
            dt,
        )
    };

    // 第三階段：寫回 World
    for (snapshot, update) in snapshots.iter().zip(&resolution.updates) {
        let entity = snapshot.entity;
        get_component_mut!(world, entity, LanePosition).0 = update.position;
        get_component_mut!(world, entity, AttackCooldown).0 = update.cooldown;

        let health = {
            let mut current_hp = get_component_mut!(world, entity, CurrentHp);
            current_hp.0 = (current_hp.0 - update.damage_taken).max(0.0);
            current_hp.0
        };
        get_component_mut!(world, entity, Behavior).0 = if health <= 0.0 {
            UnitState::Dead
        } else {
            update.state
        };
    }

    {
        let mut bases = get_resource_mut!(world, Bases);
        for faction in Faction::iter() {
            let amount = *resolution.base_damage.get(faction);
            if amount > 0.0 {
                bases.0.get_mut(faction).take_damage(amount);
            }
        }
    }

    {
        let mut economies = get_resource_mut!(world, Economies);
        for faction in Faction::iter() {
            economies.0.get_mut(faction).gold += *resolution.gathered.get(faction);
        }
    }

    Ok(())
}

/// 移除所有血量 <= 0 的單位，回傳被移除的 entity（依生成序號）
pub fn remove_dead_units(world: &mut World) -> Result<Vec<Entity>> {
    let mut dead: Vec<(SpawnSeq, Entity, Faction, TypeName)> = world
        .query_filtered::<(Entity, &SpawnOrder, &Owner, &UnitTypeName, &CurrentHp), With<Unit>>()
        .iter(world)
        .filter(|(_, _, _, _, hp)| hp.0 <= 0.0)
        .map(|(entity, order, owner, type_name, _)| (order.0, entity, owner.0, type_name.0.clone()))
        .collect();
    dead.sort_by_key(|(order, ..)| *order);

    let mut removed = Vec::with_capacity(dead.len());
    for (_, entity, faction, type_name) in dead {
        world.despawn(entity);
        push_event(world, GameEvent::UnitKilled { faction, type_name })?;
        removed.push(entity);
    }
    Ok(removed)
}

fn collect_snapshots(world: &mut World) -> Vec<UnitSnapshot> {
    let mut snapshots: Vec<UnitSnapshot> = world
        .query_filtered::<(
            Entity,
            &SpawnOrder,
            &Owner,
            &UnitTypeName,
            &LanePosition,
            &CurrentHp,
            &Damage,
            &Speed,
            &AttackRange,
            &AttackPeriod,
            &AttackCooldown,
            Option<&GatherRate>,
        ), With<Unit>>()
        .iter(world)
        .map(
            |(
                entity,
                spawn_order,
                owner,
                type_name,
                position,
                health,
                damage,
                speed,
                range,
                attack_period,
                cooldown,
                gather_rate,
            )| UnitSnapshot {
                entity,
                spawn_order: spawn_order.0,
                owner: owner.0,
                type_name: type_name.0.clone(),
                position: position.0,
                health: health.0,
                damage: damage.0,
                speed: speed.0,
                range: range.0,
                attack_period: attack_period.0,
                cooldown: cooldown.0,
                gather_rate: gather_rate.map(|rate| rate.0),
            },
        )
        .collect();
    snapshots.sort_by_key(|snapshot| snapshot.spawn_order);
    snapshots
}

fn resolve_tick(
    snapshots: &[UnitSnapshot],
    advantages: &AdvantageTable,
    combat: &CombatConfig,
    base_positions: &PerFaction<LaneCoord>,
    dt: Seconds,
) -> TickResolution {
    let contacts: Vec<Contact> = snapshots
        .iter()
        .map(|snapshot| Contact {
            owner: snapshot.owner,
            position: snapshot.position,
            alive: snapshot.is_alive(),
        })
        .collect();

    let mut updates: Vec<UnitUpdate> = snapshots
        .iter()
        .map(|snapshot| UnitUpdate {
            position: snapshot.position,
            cooldown: snapshot.cooldown,
            state: UnitState::Advancing,
            damage_taken: 0.0,
        })
        .collect();
    let mut base_damage = PerFaction::<Stat>::default();
    let mut gathered = PerFaction::<Gold>::default();

    for (index, unit) in snapshots.iter().enumerate() {
        if !unit.is_alive() {
            updates[index].state = UnitState::Dead;
            continue;
        }

        if let Some(rate) = unit.gather_rate {
            updates[index].state = UnitState::Gathering;
            *gathered.get_mut(unit.owner) += rate * dt;
            continue;
        }

        let opposing_base = *base_positions.get(unit.owner.opponent());
        match nearest_in_range(unit.owner, unit.position, unit.range, &contacts) {
            Some(target_index) => {
                let target = &snapshots[target_index];
                let mut cooldown = unit.cooldown - dt;
                if cooldown <= 0.0 {
                    let multiplier = advantages.multiplier(
                        &unit.type_name,
                        &target.type_name,
                        combat.advantage_multiplier,
                    );
                    updates[target_index].damage_taken += unit.damage * multiplier;
                    cooldown = unit.attack_period;
                }
                let update = &mut updates[index];
                update.state = UnitState::Fighting;
                update.cooldown = cooldown;
            }
            None => {
                let update = &mut updates[index];
                update.state = UnitState::Advancing;
                update.position = advance(unit.owner, unit.position, unit.speed, dt, opposing_base);
            }
        }

        if has_reached_base(unit.owner, updates[index].position, opposing_base) {
            *base_damage.get_mut(unit.owner.opponent()) +=
                unit.damage * dt * combat.base_contact_fraction;
        }
    }

    TickResolution {
        updates,
        base_damage,
        gathered,
    }
}
