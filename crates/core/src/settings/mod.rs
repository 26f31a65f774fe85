//! Settings module - user preferences consumed by the engine.

mod settings_traits;

pub use settings_traits::SettingsRepositoryTrait;
