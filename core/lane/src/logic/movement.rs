//! 路線移動邏輯

use crate::domain::alias::{LaneCoord, Seconds};
use crate::domain::core_types::Faction;
use crate::loader_schema::LaneConfig;

/// 陣營基地前緣的位置
pub fn base_position(lane: &LaneConfig, faction: Faction) -> LaneCoord {
    match faction {
        Faction::Player => lane.player_base_position,
        Faction::Enemy => lane.enemy_base_position,
    }
}

/// 單位生成點：己方基地前緣往對方推進 spawn_offset
pub fn spawn_position(lane: &LaneConfig, faction: Faction) -> LaneCoord {
    base_position(lane, faction) + faction.direction() * lane.spawn_offset
}

/// 朝對方基地前進 speed × dt，不越過對方基地位置
pub fn advance(
    faction: Faction,
    position: LaneCoord,
    speed: LaneCoord,
    dt: Seconds,
    opposing_base: LaneCoord,
) -> LaneCoord {
    let next = position + faction.direction() * speed * dt;
    match faction {
        Faction::Player => next.min(opposing_base.max(position)),
        Faction::Enemy => next.max(opposing_base.min(position)),
    }
}

/// 是否已抵達（或越過）對方基地
pub fn has_reached_base(faction: Faction, position: LaneCoord, opposing_base: LaneCoord) -> bool {
    match faction {
        Faction::Player => position >= opposing_base,
        Faction::Enemy => position <= opposing_base,
    }
}
