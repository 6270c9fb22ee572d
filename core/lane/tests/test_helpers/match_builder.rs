//! 測試輔助：MatchBuilder
//!
//! 以程式碼組出單位目錄與對戰設定，序列化成 TOML 後走正式的載入流程，
//! 取代手寫 TOML 字串。
//!
//! 預設值刻意讓數字好算：
//! - 路線 0..100，生成偏移 10（玩家生成於 10，敵方生成於 90）
//! - 基地血量 100、開局金幣 1000、收入 0
//! - 敵方決策關閉

#![allow(dead_code)]

use bevy_ecs::prelude::World;
use lane::ecs_logic::match_setup::create_world;
use lane::error::Result;
use lane::loader_schema::{MatchToml, UnitType, UnitsToml};

pub struct MatchBuilder {
    units: Vec<UnitType>,
    config: MatchToml,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchBuilder {
    pub fn new() -> Self {
        let mut config = MatchToml::default();
        config.lane.player_base_position = 0.0;
        config.lane.enemy_base_position = 100.0;
        config.lane.spawn_offset = 10.0;
        config.lane.base_max_health = 100.0;
        config.economy.starting_gold = 1000.0;
        config.economy.income = 0.0;
        config.enemy_ai.enabled = false;
        Self {
            units: Vec::new(),
            config,
        }
    }

    /// 加入一個近戰單位類型（射程、攻擊間隔使用缺省值）
    pub fn unit(self, name: &str, cost: f32, hp: f32, damage: f32, speed: f32) -> Self {
        self.unit_type(UnitType {
            name: name.to_string(),
            cost,
            hp,
            damage,
            speed,
            ..Default::default()
        })
    }

    /// 加入完整定義的單位類型
    pub fn unit_type(mut self, unit: UnitType) -> Self {
        self.units.push(unit);
        self
    }

    pub fn lane(mut self, player_base: f32, enemy_base: f32, spawn_offset: f32) -> Self {
        self.config.lane.player_base_position = player_base;
        self.config.lane.enemy_base_position = enemy_base;
        self.config.lane.spawn_offset = spawn_offset;
        self
    }

    pub fn base_health(mut self, health: f32) -> Self {
        self.config.lane.base_max_health = health;
        self
    }

    pub fn gold(mut self, starting_gold: f32, income: f32) -> Self {
        self.config.economy.starting_gold = starting_gold;
        self.config.economy.income = income;
        self
    }

    /// 開啟敵方決策
    pub fn enemy_ai(mut self, seed: u64, decision_interval: f32, base_budget: f32) -> Self {
        self.config.enemy_ai.enabled = true;
        self.config.enemy_ai.seed = seed;
        self.config.enemy_ai.decision_interval = decision_interval;
        self.config.enemy_ai.base_budget = base_budget;
        self.config.enemy_ai.budget_per_second = 0.0;
        self
    }

    /// 直接調整其他設定
    pub fn configure(mut self, f: impl FnOnce(&mut MatchToml)) -> Self {
        f(&mut self.config);
        self
    }

    /// 輸出 (units.toml, match.toml)
    pub fn to_toml(&self) -> (String, String) {
        let units = UnitsToml {
            units: self.units.clone(),
        };
        let units_toml = toml::to_string(&units).expect("序列化單位目錄應成功");
        let match_toml = toml::to_string(&self.config).expect("序列化對戰設定應成功");
        (units_toml, match_toml)
    }

    /// 走正式載入流程建立 World
    pub fn build(&self) -> Result<World> {
        let (units_toml, match_toml) = self.to_toml();
        create_world(&units_toml, &match_toml)
    }
}
