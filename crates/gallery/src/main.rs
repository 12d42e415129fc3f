use avatar_kit::{
    Avatar, AvatarIcon, AvatarLoadError, AvatarShape, AvatarSize, BreakpointProvider,
    ConfigProvider, Direction, ResponsiveSize,
};
use dioxus::prelude::*;

const BROKEN_SRC: &str = "http://error.url";
const WORKING_SRC: &str = "https://joeschmoe.io/api/v1/random";

/// Sizes shown by the responsive demo, one per breakpoint.
const RESPONSIVE: ResponsiveSize = ResponsiveSize {
    xs: Some(24),
    sm: Some(32),
    md: Some(40),
    lg: Some(64),
    xl: Some(80),
    xxl: Some(100),
};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!("avatar gallery started"));

    rsx! {
        BreakpointProvider {
            main { class: "gallery",
                h1 { "Avatar gallery" }
                FallbackDemo {}
                SwapDemo {}
                section {
                    h2 { "Sizes" }
                    Avatar { size: AvatarSize::Small, "S" }
                    Avatar { "M" }
                    Avatar { size: AvatarSize::Large, "L" }
                    Avatar { size: AvatarSize::Pixels(64), icon: AvatarIcon::named("user") }
                    Avatar { size: AvatarSize::Responsive(RESPONSIVE), icon: AvatarIcon::named("smile") }
                }
                section {
                    h2 { "Right to left" }
                    ConfigProvider { direction: Direction::Rtl,
                        Avatar { shape: AvatarShape::Square, "RTL" }
                    }
                }
            }
        }
    }
}

/// A source that never loads, falling back to initials.
#[component]
fn FallbackDemo() -> Element {
    let mut failures = use_signal(|| 0u32);

    rsx! {
        section {
            h2 { "Fallback" }
            Avatar {
                src: BROKEN_SRC.to_string(),
                on_error: move |err: AvatarLoadError| {
                    tracing::info!(src = %err.src, "gallery avatar failed");
                    failures += 1;
                },
                "JD"
            }
            p { "Failures seen: {failures}" }
        }
    }
}

/// Swapping the source after a failure gives the new image a fresh attempt.
#[component]
fn SwapDemo() -> Element {
    let mut src = use_signal(|| BROKEN_SRC.to_string());

    rsx! {
        section {
            h2 { "Recover on new source" }
            Avatar { src: src(), gap: 2.0, "Fallback" }
            button {
                onclick: move |_| {
                    let next = if src() == BROKEN_SRC { WORKING_SRC } else { BROKEN_SRC };
                    src.set(next.to_string());
                },
                "Swap source"
            }
        }
    }
}
