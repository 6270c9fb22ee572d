//! Loader 相關的資料結構定義
//!
//! - `UnitsToml`：單位目錄（units.toml）
//! - `MatchToml`：對戰設定（match.toml），所有欄位皆有缺省值
//!
//! 所有結構都拒絕未知欄位，拼錯的欄位名稱在載入時就會報錯。

use crate::domain::alias::{Gold, LaneCoord, Seconds, Stat, TypeName};
use crate::domain::constants::{
    DEFAULT_ADVANTAGE_MULTIPLIER, DEFAULT_ATTACK_PERIOD, DEFAULT_ATTACK_RANGE,
    DEFAULT_BASE_BUDGET, DEFAULT_BASE_CONTACT_FRACTION, DEFAULT_BASE_MAX_HEALTH,
    DEFAULT_BUDGET_PER_SECOND, DEFAULT_DECISION_INTERVAL, DEFAULT_ENEMY_BASE_POSITION,
    DEFAULT_GOLD_DISPLAY_CEILING, DEFAULT_INCOME, DEFAULT_INCOME_PER_UPGRADE,
    DEFAULT_PLAYER_BASE_POSITION, DEFAULT_SPAWN_OFFSET, DEFAULT_STARTING_GOLD,
    DEFAULT_UPGRADE_BASE_COST,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// 單位目錄 (Unit Catalog)
// ============================================================================

/// 單位類型定義（原始格式，可選欄位尚未套用缺省值）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitType {
    pub name: TypeName,
    /// 顯示名稱，缺省為 name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub cost: Gold,
    pub hp: Stat,
    pub damage: Stat,
    /// 每秒移動距離
    pub speed: LaneCoord,
    /// 缺省為 CombatConfig::default_range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<LaneCoord>,
    /// 缺省為 CombatConfig::default_attack_period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_period: Option<Seconds>,
    /// 克制的單位類型
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beats: Option<TypeName>,
    /// 有值時為採集者：不前進、不攻擊，每秒產出金幣
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gather_rate: Option<Gold>,
}

/// units.toml 頂層結構
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitsToml {
    pub units: Vec<UnitType>,
}

// ============================================================================
// 對戰設定 (Match Config)
// ============================================================================

/// 路線與基地
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaneConfig {
    pub player_base_position: LaneCoord,
    pub enemy_base_position: LaneCoord,
    pub spawn_offset: LaneCoord,
    pub base_max_health: Stat,
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            player_base_position: DEFAULT_PLAYER_BASE_POSITION,
            enemy_base_position: DEFAULT_ENEMY_BASE_POSITION,
            spawn_offset: DEFAULT_SPAWN_OFFSET,
            base_max_health: DEFAULT_BASE_MAX_HEALTH,
        }
    }
}

/// 經濟
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EconomyConfig {
    pub starting_gold: Gold,
    /// 每秒收入
    pub income: Gold,
    pub gold_display_ceiling: Gold,
    pub upgrade_base_cost: Gold,
    pub income_per_upgrade: Gold,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_gold: DEFAULT_STARTING_GOLD,
            income: DEFAULT_INCOME,
            gold_display_ceiling: DEFAULT_GOLD_DISPLAY_CEILING,
            upgrade_base_cost: DEFAULT_UPGRADE_BASE_COST,
            income_per_upgrade: DEFAULT_INCOME_PER_UPGRADE,
        }
    }
}

/// 戰鬥
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CombatConfig {
    pub default_range: LaneCoord,
    pub default_attack_period: Seconds,
    pub advantage_multiplier: f32,
    pub base_contact_fraction: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            default_range: DEFAULT_ATTACK_RANGE,
            default_attack_period: DEFAULT_ATTACK_PERIOD,
            advantage_multiplier: DEFAULT_ADVANTAGE_MULTIPLIER,
            base_contact_fraction: DEFAULT_BASE_CONTACT_FRACTION,
        }
    }
}

/// 敵方決策
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnemyAiConfig {
    pub enabled: bool,
    pub decision_interval: Seconds,
    pub base_budget: Gold,
    pub budget_per_second: Gold,
    pub seed: u64,
}

impl Default for EnemyAiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            decision_interval: DEFAULT_DECISION_INTERVAL,
            base_budget: DEFAULT_BASE_BUDGET,
            budget_per_second: DEFAULT_BUDGET_PER_SECOND,
            seed: 0,
        }
    }
}

/// match.toml 頂層結構
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchToml {
    pub lane: LaneConfig,
    pub economy: EconomyConfig,
    pub combat: CombatConfig,
    pub enemy_ai: EnemyAiConfig,
}
