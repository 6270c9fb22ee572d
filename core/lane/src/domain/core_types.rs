//! 基本資料類型定義

use crate::domain::alias::{Gold, LaneCoord, Seconds, Stat, TypeName};
use crate::domain::constants::INITIAL_MINE_LEVEL;
use crate::error::{EconomyError, Result};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

// ============================================================================
// 陣營
// ============================================================================

/// 陣營：決定單位、基地、資源池的歸屬
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    Display,
)]
pub enum Faction {
    Player,
    Enemy,
}

impl Faction {
    /// 對立陣營
    pub fn opponent(self) -> Self {
        match self {
            Faction::Player => Faction::Enemy,
            Faction::Enemy => Faction::Player,
        }
    }

    /// 朝向對方基地的方向（玩家往 +，敵方往 -）
    pub fn direction(self) -> LaneCoord {
        match self {
            Faction::Player => 1.0,
            Faction::Enemy => -1.0,
        }
    }
}

/// 雙方陣營各持有一份的資料
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerFaction<T> {
    pub player: T,
    pub enemy: T,
}

impl<T> PerFaction<T> {
    pub fn from_fn(mut f: impl FnMut(Faction) -> T) -> Self {
        Self {
            player: f(Faction::Player),
            enemy: f(Faction::Enemy),
        }
    }

    pub fn get(&self, faction: Faction) -> &T {
        match faction {
            Faction::Player => &self.player,
            Faction::Enemy => &self.enemy,
        }
    }

    pub fn get_mut(&mut self, faction: Faction) -> &mut T {
        match faction {
            Faction::Player => &mut self.player,
            Faction::Enemy => &mut self.enemy,
        }
    }
}

// ============================================================================
// 單位狀態與對戰結果
// ============================================================================

/// 單位行為狀態
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display,
)]
pub enum UnitState {
    #[default]
    Advancing,
    Fighting,
    Gathering,
    Dead,
}

/// 對戰結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    #[default]
    InProgress,
    PlayerWon,
    EnemyWon,
}

impl Outcome {
    /// 指定陣營獲勝的結果
    pub fn won_by(faction: Faction) -> Self {
        match faction {
            Faction::Player => Outcome::PlayerWon,
            Faction::Enemy => Outcome::EnemyWon,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Faction> {
        match self {
            Outcome::InProgress => None,
            Outcome::PlayerWon => Some(Faction::Player),
            Outcome::EnemyWon => Some(Faction::Enemy),
        }
    }
}

// ============================================================================
// 單位原型
// ============================================================================

/// 單位角色
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UnitRole {
    /// 前進並交戰
    Combatant,
    /// 留在生成點採集，每秒為己方帶來 rate 金幣
    Gatherer { rate: Gold },
}

/// 解析後的單位原型（所有可選欄位已套用缺省值）
#[derive(Debug, Clone, PartialEq)]
pub struct Archetype {
    pub name: TypeName,
    pub display_name: String,
    pub cost: Gold,
    pub max_health: Stat,
    pub damage: Stat,
    pub speed: LaneCoord,
    pub range: LaneCoord,
    pub attack_period: Seconds,
    pub role: UnitRole,
}

// ============================================================================
// 經濟與基地
// ============================================================================

/// 陣營資源池
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePool {
    pub gold: Gold,
    /// 每秒收入
    pub income: Gold,
    pub mine_level: u32,
}

impl ResourcePool {
    pub fn new(gold: Gold, income: Gold) -> Self {
        Self {
            gold,
            income,
            mine_level: INITIAL_MINE_LEVEL,
        }
    }

    pub fn can_afford(&self, cost: Gold) -> bool {
        self.gold >= cost
    }

    /// 扣款；餘額不足時拒絕，餘額不變
    pub fn spend(&mut self, faction: Faction, cost: Gold) -> Result<()> {
        if !self.can_afford(cost) {
            return Err(EconomyError::InsufficientResources {
                faction,
                required: cost,
                available: self.gold,
            }
            .into());
        }
        self.gold -= cost;
        Ok(())
    }

    /// 連續累積收入
    pub fn accrue(&mut self, dt: Seconds) {
        self.gold += self.income * dt;
    }

    /// 供 UI 顯示的金幣（夾在 0..=ceiling）
    pub fn display_gold(&self, ceiling: Gold) -> Gold {
        self.gold.clamp(0.0, ceiling.max(0.0))
    }

    /// 金幣條填滿比例（0..=1）
    pub fn gold_fill(&self, ceiling: Gold) -> f32 {
        if ceiling <= 0.0 {
            return 0.0;
        }
        self.display_gold(ceiling) / ceiling
    }
}

/// 陣營基地
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Base {
    /// 基地前緣在路線上的位置
    pub position: LaneCoord,
    pub max_health: Stat,
    pub health: Stat,
}

impl Base {
    pub fn new(position: LaneCoord, max_health: Stat) -> Self {
        Self {
            position,
            max_health,
            health: max_health,
        }
    }

    /// 扣血，血量不低於 0
    pub fn take_damage(&mut self, amount: Stat) {
        self.health = (self.health - amount).max(0.0);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }
}
