//! 克制關係（剪刀石頭布）
//!
//! 以明確的對照表表示「某單位類型克制另一單位類型」，
//! 載入時驗證被克制的類型確實存在，避免拼錯字後默默失去加成。

use crate::domain::alias::TypeName;
use crate::error::{DataError, Result};
use crate::loader_schema::UnitType;
use std::collections::{HashMap, HashSet};

/// 克制表：攻擊方類型 → 被克制的類型
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvantageTable {
    beats: HashMap<TypeName, TypeName>,
}

impl AdvantageTable {
    /// 由單位目錄建立克制表
    pub fn from_units(units: &[UnitType]) -> Result<Self> {
        let names: HashSet<&str> = units.iter().map(|unit| unit.name.as_str()).collect();

        let mut beats = HashMap::new();
        for unit in units {
            let Some(target) = &unit.beats else {
                continue;
            };
            if !names.contains(target.as_str()) {
                return Err(DataError::UnknownAdvantageTarget {
                    type_name: unit.name.clone(),
                    beats: target.clone(),
                }
                .into());
            }
            beats.insert(unit.name.clone(), target.clone());
        }
        Ok(Self { beats })
    }

    pub fn beats(&self, attacker: &str, target: &str) -> bool {
        self.beats
            .get(attacker)
            .is_some_and(|beaten| beaten == target)
    }

    /// 攻擊方對目標的傷害倍率
    pub fn multiplier(&self, attacker: &str, target: &str, bonus: f32) -> f32 {
        if self.beats(attacker, target) {
            bonus
        } else {
            1.0
        }
    }
}
