//! 經濟公式

use crate::domain::alias::{Gold, Seconds};
use crate::loader_schema::{EconomyConfig, EnemyAiConfig};

/// 升級礦場的花費：基礎花費 × 目前等級
pub fn upgrade_cost(config: &EconomyConfig, mine_level: u32) -> Gold {
    config.upgrade_base_cost * mine_level as Gold
}

/// 敵方在對戰進行 elapsed 秒後可使用的單位預算
pub fn enemy_budget(config: &EnemyAiConfig, elapsed: Seconds) -> Gold {
    config.base_budget + config.budget_per_second * elapsed
}
