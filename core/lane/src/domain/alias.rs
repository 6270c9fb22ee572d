//! 型別別名

/// 單位類型名稱（對應 units.toml 中的 name）
pub type TypeName = String;

/// 金幣數量
pub type Gold = f32;

/// 生命值、傷害等戰鬥數值
pub type Stat = f32;

/// 模擬時間（秒）
pub type Seconds = f32;

/// 路線上的一維座標
pub type LaneCoord = f32;

/// 生成序號，決定單位的迭代順序
pub type SpawnSeq = u64;
