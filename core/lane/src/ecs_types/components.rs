//! ECS Component 定義

use crate::domain::alias::{Gold, LaneCoord, Seconds, SpawnSeq, Stat, TypeName};
use crate::domain::core_types::{Faction, UnitState};
use bevy_ecs::bundle::Bundle;
use bevy_ecs::component::Component;

/// 生成 tag components 的 macro
macro_rules! define_tag_components {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("tag component: ", stringify!($name))]
            #[derive(Debug, Component)]
            pub struct $name;
        )*
    };
}

define_tag_components!(Unit);

// ============================================================================
// 身份識別 Components
// ============================================================================

/// 單位的類型名稱（對應 GameData 中的 TypeName）
#[derive(Debug, Clone, Component)]
pub struct UnitTypeName(pub TypeName);

/// 所屬陣營
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Owner(pub Faction);

/// 生成序號，同一局內遞增、不重複
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Component)]
pub struct SpawnOrder(pub SpawnSeq);

// ============================================================================
// 路線與狀態 Components
// ============================================================================

/// 路線上的位置
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Component)]
pub struct LanePosition(pub LaneCoord);

/// 距離下一次攻擊的剩餘時間
#[derive(Debug, Clone, Copy, Default, PartialEq, Component)]
pub struct AttackCooldown(pub Seconds);

/// 行為狀態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component)]
pub struct Behavior(pub UnitState);

/// 採集者每秒產出的金幣（只有採集者擁有此 component）
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct GatherRate(pub Gold);

// ============================================================================
// 數值 Components
// ============================================================================

/// 生成數值 components 和 StatBundle 的 macro
macro_rules! define_stat_components {
    ($(($field:ident, $Type:ident, $Value:ty)),* $(,)?) => {
        $(
            #[doc = concat!("單位數值 component: ", stringify!($Type))]
            #[derive(Debug, Clone, Copy, PartialEq, Component)]
            pub struct $Type(pub $Value);
        )*

        /// 單位數值 Bundle
        #[derive(Debug, Clone, Bundle)]
        pub struct StatBundle {
            $(pub $field: $Type,)*
        }
    };
}

define_stat_components!(
    (max_hp, MaxHp, Stat),
    (current_hp, CurrentHp, Stat),
    (damage, Damage, Stat),
    (speed, Speed, LaneCoord),
    (attack_range, AttackRange, LaneCoord),
    (attack_period, AttackPeriod, Seconds),
);

// ============================================================================
// Bundles
// ============================================================================

/// 單位 Bundle
#[derive(Debug, Bundle)]
pub struct UnitBundle {
    pub unit: Unit,
    pub type_name: UnitTypeName,
    pub owner: Owner,
    pub spawn_order: SpawnOrder,
    pub position: LanePosition,
    pub cooldown: AttackCooldown,
    pub behavior: Behavior,
    pub stats: StatBundle,
}
