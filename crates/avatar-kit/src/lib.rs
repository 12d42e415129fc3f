//! Avatar component for Dioxus: an image with icon and text fallbacks,
//! responsive sizing and fitted text.

pub mod components;
pub mod config;
pub mod diagnostics;

pub use components::*;
pub use config::{use_avatar_config, AvatarConfig, ConfigProvider, Direction};
