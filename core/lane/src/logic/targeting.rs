//! 索敵邏輯

use crate::domain::alias::LaneCoord;
use crate::domain::core_types::Faction;

/// 索敵用的單位快照
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub owner: Faction,
    pub position: LaneCoord,
    pub alive: bool,
}

/// 找出射程內最近的敵方存活單位，回傳其在 candidates 中的索引
///
/// 距離相同時取迭代順序中較前者。
pub fn nearest_in_range(
    owner: Faction,
    position: LaneCoord,
    range: LaneCoord,
    candidates: &[Contact],
) -> Option<usize> {
    let mut best: Option<(usize, LaneCoord)> = None;
    for (index, contact) in candidates.iter().enumerate() {
        if contact.owner == owner || !contact.alive {
            continue;
        }
        let distance = (contact.position - position).abs();
        if distance > range {
            continue;
        }
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}
