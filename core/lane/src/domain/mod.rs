//! 領域型別（不依賴 ECS）

pub mod alias;
pub mod constants;
pub mod core_types;
pub mod events;
