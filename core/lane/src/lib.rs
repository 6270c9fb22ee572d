//! 路線對戰（lane battle）核心模擬函式庫
//!
//! 雙方基地隔著一條路線對峙，金幣隨時間累積，花費金幣訓練單位，
//! 單位朝對方基地前進、在射程內交戰、抵達後持續削減基地血量。
//!
//! - `domain`：型別別名、常數、基本資料類型與事件
//! - `loader_schema`：units.toml / match.toml 的資料結構
//! - `ecs_types`：ECS Component 與 Resource
//! - `ecs_logic`：對 World 操作的流程（載入、生成、經濟、戰鬥、模擬步進、查詢）
//! - `logic`：與 ECS 無關的純邏輯

pub mod domain;
pub mod ecs_logic;
pub mod ecs_types;
pub mod error;
pub mod loader_schema;
pub mod logic;

/// 內建單位目錄
pub const DEFAULT_UNITS_TOML: &str = include_str!("../data/units.toml");

/// 內建對戰設定
pub const DEFAULT_MATCH_TOML: &str = include_str!("../data/match.toml");
