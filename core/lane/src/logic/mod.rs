//! 核心業務邏輯（不是 ECS System）

pub mod advantage;
pub mod economy;
pub mod movement;
pub mod targeting;
