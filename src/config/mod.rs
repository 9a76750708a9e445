pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::SettingsStore;
pub use types::SettingsSnapshot;
