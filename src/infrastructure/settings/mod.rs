//! Settings provider implementations.

pub mod env_settings;

pub use env_settings::EnvSettingsProvider;
