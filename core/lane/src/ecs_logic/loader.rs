use crate::domain::core_types::{Archetype, UnitRole};
use crate::ecs_types::resources::{GameData, MatchConfig};
use crate::error::{DataError, LoadError, Result};
use crate::loader_schema::{CombatConfig, MatchToml, UnitType, UnitsToml};
use crate::logic::advantage::AdvantageTable;
use bevy_ecs::prelude::World;
use std::collections::HashMap;

/// 反序列化 TOML，驗證後將遊戲資料與對戰設定存入 World Resource
pub fn parse_and_insert_game_data(
    world: &mut World,
    units_toml: &str,
    match_toml: &str,
) -> Result<()> {
    let parsed_units: UnitsToml =
        toml::from_str(units_toml).map_err(|e| LoadError::DeserializeError {
            format: "units.toml".to_string(),
            reason: e.to_string(),
        })?;

    let parsed_match: MatchToml =
        toml::from_str(match_toml).map_err(|e| LoadError::DeserializeError {
            format: "match.toml".to_string(),
            reason: e.to_string(),
        })?;

    let config = MatchConfig::from(parsed_match);
    validate_match_config(&config)?;

    let game_data = build_game_data(parsed_units.units, &config.combat)?;

    world.insert_resource(config);
    world.insert_resource(game_data);

    Ok(())
}

/// 驗證單位目錄並套用缺省值
fn build_game_data(units: Vec<UnitType>, combat: &CombatConfig) -> Result<GameData> {
    if units.is_empty() {
        return Err(DataError::EmptyCatalog.into());
    }

    let advantages = AdvantageTable::from_units(&units)?;

    let mut roster = Vec::with_capacity(units.len());
    let mut unit_type_map = HashMap::with_capacity(units.len());
    for unit in &units {
        validate_unit_type(unit)?;
        if unit_type_map.contains_key(&unit.name) {
            return Err(DataError::DuplicateUnitType {
                type_name: unit.name.clone(),
            }
            .into());
        }
        roster.push(unit.name.clone());
        unit_type_map.insert(unit.name.clone(), resolve_archetype(unit, combat));
    }

    Ok(GameData {
        unit_type_map,
        roster,
        advantages,
    })
}

fn resolve_archetype(unit: &UnitType, combat: &CombatConfig) -> Archetype {
    Archetype {
        name: unit.name.clone(),
        display_name: unit.display_name.clone().unwrap_or_else(|| unit.name.clone()),
        cost: unit.cost,
        max_health: unit.hp,
        damage: unit.damage,
        speed: unit.speed,
        range: unit.range.unwrap_or(combat.default_range),
        attack_period: unit.attack_period.unwrap_or(combat.default_attack_period),
        role: match unit.gather_rate {
            Some(rate) => UnitRole::Gatherer { rate },
            None => UnitRole::Combatant,
        },
    }
}

fn validate_unit_type(unit: &UnitType) -> Result<()> {
    let ensure = |stat: &'static str, value: f32, allow_zero: bool| -> Result<()> {
        let valid = value.is_finite() && if allow_zero { value >= 0.0 } else { value > 0.0 };
        if valid {
            Ok(())
        } else {
            Err(DataError::InvalidUnitStat {
                type_name: unit.name.clone(),
                stat,
                value,
            }
            .into())
        }
    };

    ensure("cost", unit.cost, true)?;
    ensure("hp", unit.hp, false)?;
    ensure("damage", unit.damage, true)?;
    ensure("speed", unit.speed, true)?;
    if let Some(range) = unit.range {
        ensure("range", range, true)?;
    }
    if let Some(attack_period) = unit.attack_period {
        ensure("attack_period", attack_period, false)?;
    }
    if let Some(gather_rate) = unit.gather_rate {
        ensure("gather_rate", gather_rate, true)?;
    }
    Ok(())
}

fn validate_match_config(config: &MatchConfig) -> Result<()> {
    let ensure = |field: &'static str, ok: bool, reason: String| -> Result<()> {
        if ok {
            Ok(())
        } else {
            Err(DataError::InvalidConfig { field, reason }.into())
        }
    };
    let non_negative = |value: f32| value.is_finite() && value >= 0.0;
    let positive = |value: f32| value.is_finite() && value > 0.0;

    let lane = &config.lane;
    ensure(
        "lane.enemy_base_position",
        lane.player_base_position.is_finite()
            && lane.enemy_base_position.is_finite()
            && lane.enemy_base_position > lane.player_base_position,
        format!(
            "敵方基地 ({}) 必須位於玩家基地 ({}) 之後",
            lane.enemy_base_position, lane.player_base_position
        ),
    )?;
    ensure(
        "lane.spawn_offset",
        non_negative(lane.spawn_offset)
            && lane.spawn_offset <= lane.enemy_base_position - lane.player_base_position,
        format!("{} 超出路線長度", lane.spawn_offset),
    )?;
    ensure(
        "lane.base_max_health",
        positive(lane.base_max_health),
        format!("{} 必須大於 0", lane.base_max_health),
    )?;

    let economy = &config.economy;
    for (field, value) in [
        ("economy.starting_gold", economy.starting_gold),
        ("economy.income", economy.income),
        ("economy.gold_display_ceiling", economy.gold_display_ceiling),
        ("economy.upgrade_base_cost", economy.upgrade_base_cost),
        ("economy.income_per_upgrade", economy.income_per_upgrade),
    ] {
        ensure(field, non_negative(value), format!("{value} 不可為負"))?;
    }

    let combat = &config.combat;
    for (field, value) in [
        ("combat.default_range", combat.default_range),
        ("combat.advantage_multiplier", combat.advantage_multiplier),
        ("combat.base_contact_fraction", combat.base_contact_fraction),
    ] {
        ensure(field, non_negative(value), format!("{value} 不可為負"))?;
    }
    ensure(
        "combat.default_attack_period",
        positive(combat.default_attack_period),
        format!("{} 必須大於 0", combat.default_attack_period),
    )?;

    let enemy_ai = &config.enemy_ai;
    ensure(
        "enemy_ai.decision_interval",
        positive(enemy_ai.decision_interval),
        format!("{} 必須大於 0", enemy_ai.decision_interval),
    )?;
    for (field, value) in [
        ("enemy_ai.base_budget", enemy_ai.base_budget),
        ("enemy_ai.budget_per_second", enemy_ai.budget_per_second),
    ] {
        ensure(field, value.is_finite(), format!("{value} 不是有限數值"))?;
    }

    Ok(())
}
