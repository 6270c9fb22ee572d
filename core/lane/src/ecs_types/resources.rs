//! ECS World Resource 定義

use crate::domain::alias::{Seconds, SpawnSeq, TypeName};
use crate::domain::core_types::{Archetype, Base, Outcome, PerFaction, ResourcePool};
use crate::domain::events::GameEvent;
use crate::error::{DataError, Result};
use crate::loader_schema::{CombatConfig, EconomyConfig, EnemyAiConfig, LaneConfig, MatchToml};
use crate::logic::advantage::AdvantageTable;
use bevy_ecs::prelude::Resource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

/// 解析後的靜態遊戲資料，作為 World Resource
#[derive(Debug, Resource)]
pub struct GameData {
    pub unit_type_map: HashMap<TypeName, Archetype>,
    /// 單位類型依目錄中的順序排列（供敵方決策穩定挑選）
    pub roster: Vec<TypeName>,
    pub advantages: AdvantageTable,
}

impl GameData {
    pub fn archetype(&self, type_name: &str) -> Result<&Archetype> {
        self.unit_type_map.get(type_name).ok_or_else(|| {
            DataError::UnitTypeNotFound {
                type_name: type_name.to_string(),
            }
            .into()
        })
    }

    /// 依目錄順序列出所有原型
    pub fn archetypes(&self) -> impl Iterator<Item = &Archetype> {
        self.roster
            .iter()
            .filter_map(|name| self.unit_type_map.get(name))
    }
}

/// 對戰設定（驗證後存入 World）
#[derive(Debug, Clone, Default, PartialEq, Resource)]
pub struct MatchConfig {
    pub lane: LaneConfig,
    pub economy: EconomyConfig,
    pub combat: CombatConfig,
    pub enemy_ai: EnemyAiConfig,
}

impl From<MatchToml> for MatchConfig {
    fn from(parsed: MatchToml) -> Self {
        Self {
            lane: parsed.lane,
            economy: parsed.economy,
            combat: parsed.combat,
            enemy_ai: parsed.enemy_ai,
        }
    }
}

/// 雙方資源池
#[derive(Debug, Clone, PartialEq, Resource)]
pub struct Economies(pub PerFaction<ResourcePool>);

/// 雙方基地
#[derive(Debug, Clone, PartialEq, Resource)]
pub struct Bases(pub PerFaction<Base>);

/// 對戰進度
#[derive(Debug, Clone, Default, PartialEq, Resource)]
pub struct MatchState {
    pub elapsed: Seconds,
    pub outcome: Outcome,
    pub next_spawn_seq: SpawnSeq,
}

impl MatchState {
    /// 取得下一個生成序號
    pub fn take_spawn_seq(&mut self) -> SpawnSeq {
        let seq = self.next_spawn_seq;
        self.next_spawn_seq += 1;
        seq
    }
}

/// 敵方決策狀態
#[derive(Debug, Resource)]
pub struct EnemyDirector {
    pub enabled: bool,
    /// 距離上一次決策累積的時間
    pub timer: Seconds,
    pub rng: StdRng,
}

impl EnemyDirector {
    pub fn new(config: &EnemyAiConfig) -> Self {
        Self {
            enabled: config.enabled,
            timer: 0.0,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }
}

/// 事件紀錄，由外部顯示端讀取或清空
#[derive(Debug, Clone, Default, Resource)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn push(&mut self, event: GameEvent) {
        log::info!("{event}");
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
