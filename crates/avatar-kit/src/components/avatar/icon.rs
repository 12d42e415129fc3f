use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBot, LdSmile, LdUser, LdUsers};
use dioxus_free_icons::Icon;

/// Where named icons are documented.
pub const ICON_DOCS_URL: &str = "https://lucide.dev/icons/";

/// Icon content for an avatar.
#[derive(Clone, PartialEq)]
pub enum AvatarIcon {
    /// An icon element supplied by the caller.
    Node(Element),
    /// Deprecated: icon referenced by name.
    Named(String),
}

impl AvatarIcon {
    pub fn named(name: impl Into<String>) -> Self {
        AvatarIcon::Named(name.into())
    }
}

impl From<Element> for AvatarIcon {
    fn from(element: Element) -> Self {
        AvatarIcon::Node(element)
    }
}

impl From<&str> for AvatarIcon {
    fn from(name: &str) -> Self {
        AvatarIcon::Named(name.to_string())
    }
}

/// Icons that can still be referenced by their string name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedIcon {
    User,
    Team,
    Smile,
    Robot,
}

impl NamedIcon {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "user" => Some(NamedIcon::User),
            "team" => Some(NamedIcon::Team),
            "smile" => Some(NamedIcon::Smile),
            "robot" => Some(NamedIcon::Robot),
            _ => None,
        }
    }
}

/// Deprecation message for a string icon name, if the name is a known icon.
///
/// Unknown names are rendered as text and are not reported.
pub fn deprecated_icon_warning(name: &str) -> Option<String> {
    NamedIcon::from_name(name).map(|_| icon_warning_message(name))
}

/// The deprecation message text for `name`.
pub fn icon_warning_message(name: &str) -> String {
    format!(
        "Warning: [avatar-kit: Avatar] `icon` is using Element instead of string naming. \
         Please check `{name}` at {ICON_DOCS_URL}"
    )
}

/// Renders a registry icon at `size` pixels.
#[component]
pub fn NamedIconView(icon: NamedIcon, #[props(default = 16)] size: u32) -> Element {
    match icon {
        NamedIcon::User => rsx! { Icon::<LdUser> { icon: LdUser, width: size, height: size } },
        NamedIcon::Team => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
        NamedIcon::Smile => rsx! { Icon::<LdSmile> { icon: LdSmile, width: size, height: size } },
        NamedIcon::Robot => rsx! { Icon::<LdBot> { icon: LdBot, width: size, height: size } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_name_produces_fixed_message() {
        assert_eq!(
            deprecated_icon_warning("user").as_deref(),
            Some(
                "Warning: [avatar-kit: Avatar] `icon` is using Element instead of string naming. \
                 Please check `user` at https://lucide.dev/icons/"
            )
        );
    }

    #[test]
    fn unknown_name_is_silent() {
        assert_eq!(deprecated_icon_warning("aa"), None);
        assert_eq!(deprecated_icon_warning(""), None);
    }

    #[test]
    fn registry_lookup() {
        assert_eq!(NamedIcon::from_name("team"), Some(NamedIcon::Team));
        assert_eq!(NamedIcon::from_name("User"), None);
    }

    #[test]
    fn str_converts_to_named_icon() {
        assert!(AvatarIcon::from("user") == AvatarIcon::named("user"));
    }
}
