use std::fmt;
use std::str::FromStr;

use crate::components::breakpoint::{resolve_responsive, ResponsiveSize, ScreenMap};

/// Font size used for text fallbacks at fixed pixel sizes.
const TEXT_FONT_SIZE: u32 = 18;

/// Dimensions of an avatar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    #[default]
    Default,
    Large,
    Small,
    /// Fixed square size in pixels.
    Pixels(u32),
    /// Pixel size chosen by the active breakpoint.
    Responsive(ResponsiveSize),
}

impl AvatarSize {
    /// Collapse a responsive size into a concrete one for the current screens.
    ///
    /// Falls back to `Default` when no active breakpoint has a value.
    pub fn resolve(&self, screens: &ScreenMap) -> AvatarSize {
        match self {
            AvatarSize::Responsive(sizes) => resolve_responsive(sizes, screens)
                .map(AvatarSize::Pixels)
                .unwrap_or(AvatarSize::Default),
            other => *other,
        }
    }

    /// Modifier class suffix for named sizes.
    pub fn class_suffix(&self) -> Option<&'static str> {
        match self {
            AvatarSize::Large => Some("lg"),
            AvatarSize::Small => Some("sm"),
            _ => None,
        }
    }

    /// Inline style for pixel sizes. Icons get half the box as font size.
    pub fn style(&self, with_icon: bool) -> Option<String> {
        let AvatarSize::Pixels(px) = self else {
            return None;
        };
        let font = if with_icon { px / 2 } else { TEXT_FONT_SIZE };
        Some(format!(
            "width:{px}px;height:{px}px;line-height:{px}px;font-size:{font}px"
        ))
    }
}

impl From<u32> for AvatarSize {
    fn from(px: u32) -> Self {
        AvatarSize::Pixels(px)
    }
}

impl From<ResponsiveSize> for AvatarSize {
    fn from(sizes: ResponsiveSize) -> Self {
        AvatarSize::Responsive(sizes)
    }
}

/// Failure to parse an [`AvatarSize`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeParseError {
    Empty,
    Invalid(String),
}

impl fmt::Display for SizeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeParseError::Empty => write!(f, "avatar size is empty"),
            SizeParseError::Invalid(raw) => write!(
                f,
                "invalid avatar size `{raw}`: expected default, large, small or a pixel count"
            ),
        }
    }
}

impl std::error::Error for SizeParseError {}

impl FromStr for AvatarSize {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => Err(SizeParseError::Empty),
            "default" => Ok(AvatarSize::Default),
            "large" | "lg" => Ok(AvatarSize::Large),
            "small" | "sm" => Ok(AvatarSize::Small),
            other => other
                .strip_suffix("px")
                .unwrap_or(other)
                .parse::<u32>()
                .map(AvatarSize::Pixels)
                .map_err(|_| SizeParseError::Invalid(trimmed.to_string())),
        }
    }
}

/// Outline of an avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarShape {
    #[default]
    Circle,
    Square,
}

impl AvatarShape {
    pub fn class_suffix(&self) -> &'static str {
        match self {
            AvatarShape::Circle => "circle",
            AvatarShape::Square => "square",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::breakpoint::Breakpoint;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_named_sizes() {
        assert_eq!("default".parse(), Ok(AvatarSize::Default));
        assert_eq!("large".parse(), Ok(AvatarSize::Large));
        assert_eq!("LG".parse(), Ok(AvatarSize::Large));
        assert_eq!(" small ".parse(), Ok(AvatarSize::Small));
        assert_eq!("sm".parse(), Ok(AvatarSize::Small));
    }

    #[test]
    fn parse_pixel_sizes() {
        assert_eq!("64".parse(), Ok(AvatarSize::Pixels(64)));
        assert_eq!("100px".parse(), Ok(AvatarSize::Pixels(100)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("".parse::<AvatarSize>(), Err(SizeParseError::Empty));
        assert_eq!(
            "huge".parse::<AvatarSize>(),
            Err(SizeParseError::Invalid("huge".into()))
        );
        assert_eq!(
            "-4px".parse::<AvatarSize>(),
            Err(SizeParseError::Invalid("-4px".into()))
        );
    }

    #[test]
    fn parse_error_message_names_the_input() {
        let err = "huge".parse::<AvatarSize>().unwrap_err();
        assert!(err.to_string().contains("`huge`"));
    }

    #[test]
    fn pixel_style_for_text_and_icon() {
        assert_eq!(
            AvatarSize::Pixels(100).style(false).as_deref(),
            Some("width:100px;height:100px;line-height:100px;font-size:18px")
        );
        assert_eq!(
            AvatarSize::Pixels(64).style(true).as_deref(),
            Some("width:64px;height:64px;line-height:64px;font-size:32px")
        );
        assert_eq!(AvatarSize::Large.style(false), None);
    }

    #[test]
    fn named_sizes_have_class_suffixes() {
        assert_eq!(AvatarSize::Large.class_suffix(), Some("lg"));
        assert_eq!(AvatarSize::Small.class_suffix(), Some("sm"));
        assert_eq!(AvatarSize::Default.class_suffix(), None);
        assert_eq!(AvatarSize::Pixels(10).class_suffix(), None);
    }

    #[test]
    fn responsive_resolves_or_falls_back() {
        let size = AvatarSize::Responsive(ResponsiveSize {
            lg: Some(64),
            ..Default::default()
        });
        assert_eq!(
            size.resolve(&ScreenMap::only(Breakpoint::Lg)),
            AvatarSize::Pixels(64)
        );
        assert_eq!(
            size.resolve(&ScreenMap::only(Breakpoint::Xs)),
            AvatarSize::Default
        );
    }
}
