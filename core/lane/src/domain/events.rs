//! 對戰事件（供外部顯示的人類可讀紀錄，不影響模擬結果）

use crate::domain::alias::{Gold, TypeName};
use crate::domain::core_types::{Faction, Outcome};
use serde::Serialize;
use std::fmt;

/// 花費用途
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Purchase {
    Unit(TypeName),
    Upgrade,
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Purchase::Unit(type_name) => write!(f, "訓練 {type_name}"),
            Purchase::Upgrade => write!(f, "升級礦場"),
        }
    }
}

/// 對戰事件
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    UnitTrained {
        faction: Faction,
        type_name: TypeName,
        cost: Gold,
    },
    InsufficientFunds {
        faction: Faction,
        purchase: Purchase,
        required: Gold,
        available: Gold,
    },
    UnknownUnitType {
        faction: Faction,
        type_name: TypeName,
    },
    Invested {
        faction: Faction,
        mine_level: u32,
        income: Gold,
    },
    UnitKilled {
        faction: Faction,
        type_name: TypeName,
    },
    MatchEnded {
        outcome: Outcome,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::UnitTrained {
                faction,
                type_name,
                cost,
            } => write!(f, "[{faction}] 訓練了 {type_name}（花費 {cost:.0}）"),
            GameEvent::InsufficientFunds {
                faction,
                purchase,
                required,
                available,
            } => write!(
                f,
                "[{faction}] 金幣不足，無法{purchase}：需要 {required:.0}，目前 {available:.0}"
            ),
            GameEvent::UnknownUnitType { faction, type_name } => {
                write!(f, "[{faction}] 未知的單位類型 {type_name}")
            }
            GameEvent::Invested {
                faction,
                mine_level,
                income,
            } => write!(
                f,
                "[{faction}] 礦場升至 {mine_level} 級，每秒收入 {income:.2}"
            ),
            GameEvent::UnitKilled { faction, type_name } => {
                write!(f, "[{faction}] {type_name} 陣亡")
            }
            GameEvent::MatchEnded { outcome } => match outcome.winner() {
                Some(Faction::Player) => write!(f, "勝利！敵方基地已被摧毀"),
                Some(Faction::Enemy) => write!(f, "失敗！我方基地已被摧毀"),
                None => write!(f, "對戰進行中"),
            },
        }
    }
}
