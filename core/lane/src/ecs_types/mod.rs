//! ECS 型別：Component 與 Resource

pub mod components;
pub mod resources;
