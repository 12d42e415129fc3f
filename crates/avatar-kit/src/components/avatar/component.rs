use std::cell::RefCell;
use std::rc::Rc;

use dioxus::core::schedule_update;
use dioxus::prelude::*;

use super::icon::{deprecated_icon_warning, AvatarIcon, NamedIcon, NamedIconView};
use super::scale::{scale_style, text_scale, DEFAULT_GAP};
use super::size::{AvatarShape, AvatarSize};
use super::state::{AvatarStatus, FallbackMachine};
use crate::components::breakpoint::use_screens;
use crate::config::{use_avatar_config, Direction};
use crate::diagnostics::warn_once;

/// Passed to `on_error` when the avatar image fails to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarLoadError {
    pub src: String,
}

/// What the avatar body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarContent {
    Image,
    Icon,
    Text,
}

/// Image wins while it can load, then the icon, then the children as text.
pub fn select_content(show_image: bool, has_icon: bool) -> AvatarContent {
    if show_image {
        AvatarContent::Image
    } else if has_icon {
        AvatarContent::Icon
    } else {
        AvatarContent::Text
    }
}

/// Record an image failure for `src`.
///
/// `notify` runs first so the caller can react (for example by swapping the
/// source); the machine then moves to `LoadError` for `src` regardless.
pub fn record_failure(
    machine: &RefCell<FallbackMachine>,
    src: Option<&str>,
    notify: impl FnOnce(AvatarLoadError),
) {
    tracing::debug!(src = ?src, "avatar image failed to load");
    notify(AvatarLoadError {
        src: src.unwrap_or_default().to_string(),
    });
    machine.borrow_mut().fail(src);
}

/// Pass `event` to `handler` when one is set.
pub(crate) fn forward<T: 'static>(handler: Option<&EventHandler<T>>, event: T) {
    if let Some(handler) = handler {
        handler.call(event);
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AvatarProps {
    #[props(default)]
    pub src: Option<String>,
    #[props(default)]
    pub srcset: Option<String>,
    #[props(default)]
    pub alt: Option<String>,
    /// Rendered as the `crossorigin` attribute only when set.
    #[props(default)]
    pub cross_origin: Option<String>,
    #[props(default)]
    pub draggable: Option<bool>,
    #[props(default, into)]
    pub size: AvatarSize,
    #[props(default)]
    pub shape: AvatarShape,
    /// Space kept on each side of scaled text fallbacks.
    #[props(default = DEFAULT_GAP)]
    pub gap: f64,
    #[props(default)]
    pub icon: Option<AvatarIcon>,
    /// Called on image failure before the fallback is shown.
    #[props(default)]
    pub on_error: Option<EventHandler<AvatarLoadError>>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// An avatar that shows an image and falls back to an icon or text when the
/// image cannot load. A new `src` always gets a fresh attempt.
#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let AvatarProps {
        src,
        srcset,
        alt,
        cross_origin,
        draggable,
        size,
        shape,
        gap,
        icon,
        on_error,
        onclick,
        onmouseenter,
        attributes,
        children,
    } = props;

    let config = use_avatar_config();
    let screens = use_screens();
    let initial_src = src.clone();
    let machine = use_hook(move || Rc::new(RefCell::new(FallbackMachine::new(initial_src))));
    let rerender = use_hook(schedule_update);

    let mut scale = use_signal(|| 1.0_f64);
    let mut root_node = use_signal(|| None::<Rc<MountedData>>);
    let mut text_node = use_signal(|| None::<Rc<MountedData>>);

    if let Some(AvatarIcon::Named(name)) = &icon {
        if let Some(message) = deprecated_icon_warning(name) {
            warn_once(&message);
        }
    }

    // Every render tracks the source it shows
    let status = machine.borrow_mut().observe(src.as_deref());
    let show_image = src.is_some() && status == AvatarStatus::LoadSuccess;
    let content = select_content(show_image, icon.is_some());
    let size = size.resolve(&screens);

    use_effect(use_reactive((&src,), move |_| {
        if *scale.peek() != 1.0 {
            scale.set(1.0);
        }
    }));

    use_effect(use_reactive(
        (&gap, &size, &children),
        move |(gap, _, _)| {
            let root = root_node.read().clone();
            let text = text_node.read().clone();
            let (Some(root), Some(text)) = (root, text) else {
                return;
            };
            spawn(async move {
                if let Some(next) = measure_scale(root, text, gap).await {
                    if *scale.peek() != next {
                        scale.set(next);
                    }
                }
            });
        },
    ));

    let mut classes = vec![config.prefix.clone(), config.class(shape.class_suffix())];
    if let Some(suffix) = size.class_suffix() {
        classes.push(config.class(suffix));
    }
    match content {
        AvatarContent::Image => classes.push(config.class("image")),
        AvatarContent::Icon => classes.push(config.class("icon")),
        AvatarContent::Text => {}
    }
    if config.direction == Direction::Rtl {
        classes.push(config.class("rtl"));
    }

    let mut base = vec![
        Attribute::new("class", classes.join(" "), None, false),
        Attribute::new("data-status", status.as_str(), None, false),
    ];
    if config.direction == Direction::Rtl {
        base.push(Attribute::new("dir", config.direction.as_str(), None, false));
    }
    if let Some(style) = size.style(content == AvatarContent::Icon) {
        base.push(Attribute::new("style", style, None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let body = match content {
        AvatarContent::Image => {
            let mut image_attrs = Vec::new();
            if let Some(src) = &src {
                image_attrs.push(Attribute::new("src", src.clone(), None, false));
            }
            if let Some(srcset) = srcset {
                image_attrs.push(Attribute::new("srcset", srcset, None, false));
            }
            if let Some(alt) = alt {
                image_attrs.push(Attribute::new("alt", alt, None, false));
            }
            if let Some(draggable) = draggable {
                image_attrs.push(Attribute::new(
                    "draggable",
                    if draggable { "true" } else { "false" },
                    None,
                    false,
                ));
            }
            if let Some(cross_origin) = cross_origin {
                image_attrs.push(Attribute::new("crossorigin", cross_origin, None, false));
            }

            let failed_src = src.clone();
            let loaded_src = src.clone();
            let failed_machine = machine.clone();
            let loaded_machine = machine.clone();
            rsx! {
                img {
                    onerror: move |_| {
                        record_failure(&failed_machine, failed_src.as_deref(), |err| {
                            forward(on_error.as_ref(), err)
                        });
                        rerender();
                    },
                    onload: move |_| loaded_machine.borrow_mut().load(loaded_src.as_deref()),
                    ..image_attrs,
                }
            }
        }
        AvatarContent::Icon => {
            let icon_px = match size {
                AvatarSize::Pixels(px) => px / 2,
                _ => 16,
            };
            match icon {
                Some(AvatarIcon::Node(element)) => rsx! {
                    {element}
                },
                Some(AvatarIcon::Named(name)) => match NamedIcon::from_name(&name) {
                    Some(named) => rsx! {
                        NamedIconView { icon: named, size: icon_px }
                    },
                    None => rsx! { "{name}" },
                },
                None => rsx! {},
            }
        }
        AvatarContent::Text => rsx! {
            span {
                class: config.class("string"),
                style: scale_style(scale()),
                onmounted: move |evt: MountedEvent| text_node.set(Some(evt.data())),
                {children}
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            onmounted: move |evt: MountedEvent| root_node.set(Some(evt.data())),
            onclick: move |evt| forward(onclick.as_ref(), evt),
            onmouseenter: move |evt| forward(onmouseenter.as_ref(), evt),
            ..merged,
            {body}
        }
    }
}

/// Fit factor for the text node inside the root node.
///
/// The scroll size of the text ignores the transform already applied to it.
async fn measure_scale(root: Rc<MountedData>, text: Rc<MountedData>, gap: f64) -> Option<f64> {
    let outer = root.get_client_rect().await.ok()?;
    let inner = text.get_scroll_size().await.ok()?;
    Some(text_scale(inner.width, outer.size.width, gap))
}
