use dioxus::prelude::*;

/// Class prefix used when no [`ConfigProvider`] is mounted.
pub const DEFAULT_PREFIX: &str = "avatar";

/// Text direction of the surrounding layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Component-wide settings shared through context.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarConfig {
    pub prefix: String,
    pub direction: Direction,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            direction: Direction::default(),
        }
    }
}

impl AvatarConfig {
    /// `{prefix}-{suffix}` class name.
    pub fn class(&self, suffix: &str) -> String {
        format!("{}-{}", self.prefix, suffix)
    }
}

/// Provides an [`AvatarConfig`] to every avatar below it.
#[component]
pub fn ConfigProvider(
    #[props(default = DEFAULT_PREFIX.to_string(), into)] prefix: String,
    #[props(default)] direction: Direction,
    children: Element,
) -> Element {
    use_context_provider(|| AvatarConfig { prefix, direction });

    rsx! {
        {children}
    }
}

/// The nearest provided config, or defaults.
pub fn use_avatar_config() -> AvatarConfig {
    try_use_context::<AvatarConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config() {
        let config = AvatarConfig::default();
        assert_eq!(config.prefix, "avatar");
        assert_eq!(config.direction, Direction::Ltr);
    }

    #[test]
    fn class_uses_prefix() {
        let config = AvatarConfig {
            prefix: "ant-avatar".into(),
            direction: Direction::Rtl,
        };
        assert_eq!(config.class("string"), "ant-avatar-string");
        assert_eq!(config.direction.as_str(), "rtl");
    }
}
