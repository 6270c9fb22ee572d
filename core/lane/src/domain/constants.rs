//! 遊戲常數定義（皆為設定檔缺省值）

use crate::domain::alias::{Gold, LaneCoord, Seconds, Stat};

/// 未指定射程時的預設射程
pub const DEFAULT_ATTACK_RANGE: LaneCoord = 20.0;

/// 未指定攻擊間隔時的預設間隔
pub const DEFAULT_ATTACK_PERIOD: Seconds = 0.7;

/// 克制關係的傷害倍率
pub const DEFAULT_ADVANTAGE_MULTIPLIER: f32 = 1.5;

/// 單位抵達敵方基地後，每秒傷害的折算比例
pub const DEFAULT_BASE_CONTACT_FRACTION: f32 = 0.8;

/// 玩家基地前緣位置
pub const DEFAULT_PLAYER_BASE_POSITION: LaneCoord = 110.0;

/// 敵方基地前緣位置
pub const DEFAULT_ENEMY_BASE_POSITION: LaneCoord = 1256.0;

/// 單位生成點與己方基地前緣的距離
pub const DEFAULT_SPAWN_OFFSET: LaneCoord = 10.0;

/// 基地血量上限
pub const DEFAULT_BASE_MAX_HEALTH: Stat = 400.0;

/// 開局金幣
pub const DEFAULT_STARTING_GOLD: Gold = 10.0;

/// 每秒收入
pub const DEFAULT_INCOME: Gold = 1.2;

/// 金幣條的顯示上限（只影響 UI，不截斷餘額）
pub const DEFAULT_GOLD_DISPLAY_CEILING: Gold = 400.0;

/// 升級礦場的基礎花費（實際花費 = 基礎花費 × 目前等級）
pub const DEFAULT_UPGRADE_BASE_COST: Gold = 100.0;

/// 每次升級增加的每秒收入
pub const DEFAULT_INCOME_PER_UPGRADE: Gold = 0.6;

/// 礦場初始等級
pub const INITIAL_MINE_LEVEL: u32 = 1;

/// 敵方決策間隔
pub const DEFAULT_DECISION_INTERVAL: Seconds = 2.0;

/// 敵方開局預算
pub const DEFAULT_BASE_BUDGET: Gold = 50.0;

/// 敵方預算每秒成長量
pub const DEFAULT_BUDGET_PER_SECOND: Gold = 1.0;
