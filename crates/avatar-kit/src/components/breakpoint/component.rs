use dioxus::prelude::*;

use super::ScreenMap;

/// Reports the viewport width now and on every resize.
const VIEWPORT_LISTENER: &str = r#"
    dioxus.send(window.innerWidth);
    window.addEventListener('resize', function() {
        dioxus.send(window.innerWidth);
    });
    await new Promise(function() {});
"#;

/// Viewport width shared as context by [`BreakpointProvider`].
#[derive(Clone, Copy)]
pub struct ScreenState {
    pub width: Signal<Option<f64>>,
}

impl ScreenState {
    /// Active breakpoints for the last reported width. Empty until a width is known.
    pub fn screens(&self) -> ScreenMap {
        let width = *self.width.read();
        width.map(ScreenMap::from_width).unwrap_or_default()
    }
}

/// Tracks the viewport width and provides [`ScreenState`] to children.
///
/// `initial_width` seeds the state before the browser reports, which keeps
/// server-rendered markup stable.
#[component]
pub fn BreakpointProvider(initial_width: Option<f64>, children: Element) -> Element {
    let mut width = use_signal(|| initial_width);
    use_context_provider(|| ScreenState { width });

    use_coroutine(move |_: UnboundedReceiver<()>| async move {
        let mut listener = document::eval(VIEWPORT_LISTENER);
        while let Ok(next) = listener.recv::<f64>().await {
            if *width.peek() != Some(next) {
                width.set(Some(next));
            }
        }
        tracing::debug!("viewport listener closed");
    });

    rsx! {
        {children}
    }
}

/// Active breakpoints, or an all-inactive map outside a [`BreakpointProvider`].
pub fn use_screens() -> ScreenMap {
    try_use_context::<ScreenState>()
        .map(|state| state.screens())
        .unwrap_or_default()
}
