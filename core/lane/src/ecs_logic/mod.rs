pub mod combat;
pub mod economy;
pub mod enemy_ai;
pub mod loader;
pub mod match_setup;
pub mod query;
pub mod simulation;
pub mod spawner;

use crate::domain::events::GameEvent;
use crate::ecs_types::resources::EventLog;
use crate::error::Result;
use bevy_ecs::prelude::World;

/// 從 World 取得 Resource，若缺少則回傳 DataError::ResourceNotFound
macro_rules! get_resource {
    ($world:expr, $resource:ty) => {
        $world.get_resource::<$resource>().ok_or_else(|| {
            crate::error::DataError::ResourceNotFound {
                resource_name: crate::ecs_logic::resource_name::<$resource>(),
            }
        })?
    };
}

/// 從 World 取得可變 Resource，若缺少則回傳 DataError::ResourceNotFound
macro_rules! get_resource_mut {
    ($world:expr, $resource:ty) => {
        $world.get_resource_mut::<$resource>().ok_or_else(|| {
            crate::error::DataError::ResourceNotFound {
                resource_name: crate::ecs_logic::resource_name::<$resource>(),
            }
        })?
    };
}

/// 取得 entity 的可變 component，若缺少則回傳 DataError::MissingComponent
macro_rules! get_component_mut {
    ($world:expr, $entity:expr, $component:ty) => {
        $world.get_mut::<$component>($entity).ok_or_else(|| {
            crate::error::DataError::MissingComponent {
                component_name: stringify!($component).to_string(),
            }
        })?
    };
}

pub(super) use get_component_mut;
pub(super) use get_resource;
pub(super) use get_resource_mut;

/// Resource 型別名稱（去掉模組路徑），用於錯誤訊息
pub(crate) fn resource_name<T: ?Sized>() -> String {
    let full_name = std::any::type_name::<T>();
    full_name
        .rsplit("::")
        .next()
        .unwrap_or(full_name)
        .to_string()
}

/// 寫入事件紀錄
pub(crate) fn push_event(world: &mut World, event: GameEvent) -> Result<()> {
    get_resource_mut!(world, EventLog).push(event);
    Ok(())
}
