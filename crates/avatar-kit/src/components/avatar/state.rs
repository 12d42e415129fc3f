/// Load status of the image currently assigned to an avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarStatus {
    /// The image is being attempted or displayed.
    #[default]
    LoadSuccess,
    /// The image failed to load; fallback content is shown.
    LoadError,
}

impl AvatarStatus {
    /// Value for the root `data-status` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarStatus::LoadSuccess => "loaded",
            AvatarStatus::LoadError => "error",
        }
    }
}

/// Inputs that can move an avatar between statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    /// The browser reported a successful image load.
    Loaded,
    /// The browser reported an image load failure.
    Failed,
    /// A different source was assigned to the avatar.
    SourceChanged,
}

/// Pure transition function for the image-fallback machine.
///
/// Only a failure enters `LoadError` and only a source change leaves it.
pub fn transition(status: AvatarStatus, event: LoadEvent) -> AvatarStatus {
    match event {
        LoadEvent::Failed => AvatarStatus::LoadError,
        LoadEvent::SourceChanged => AvatarStatus::LoadSuccess,
        LoadEvent::Loaded => status,
    }
}

/// Image-fallback state tied to the source identity it was recorded for.
///
/// The status only applies to the tracked source. Asking about any other
/// source yields the status after a `SourceChanged` transition, and
/// [`observe`](Self::observe) records that reset, so a new source always
/// gets a fresh attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FallbackMachine {
    source: Option<String>,
    status: AvatarStatus,
}

impl FallbackMachine {
    pub fn new(source: Option<String>) -> Self {
        Self {
            source,
            status: AvatarStatus::LoadSuccess,
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn status(&self) -> AvatarStatus {
        self.status
    }

    /// Effective status for `src` without mutating the machine.
    pub fn status_for(&self, src: Option<&str>) -> AvatarStatus {
        if self.source.as_deref() == src {
            self.status
        } else {
            transition(self.status, LoadEvent::SourceChanged)
        }
    }

    /// Whether the image element should be rendered for `src`.
    pub fn shows_image(&self, src: Option<&str>) -> bool {
        src.is_some() && self.status_for(src) == AvatarStatus::LoadSuccess
    }

    /// Track `src` as the rendered source and return its status.
    ///
    /// Called on every render, so a source that was left and later
    /// reassigned is attempted again.
    pub fn observe(&mut self, src: Option<&str>) -> AvatarStatus {
        self.assign(src);
        self.status
    }

    /// Record a load failure for `src`.
    pub fn fail(&mut self, src: Option<&str>) {
        self.assign(src);
        self.status = transition(self.status, LoadEvent::Failed);
    }

    /// Record a successful load for `src`.
    pub fn load(&mut self, src: Option<&str>) {
        self.assign(src);
        self.status = transition(self.status, LoadEvent::Loaded);
    }

    /// Make `src` the tracked source, resetting the status if it differs.
    pub fn assign(&mut self, src: Option<&str>) {
        if self.source.as_deref() != src {
            tracing::debug!(from = ?self.source, to = ?src, "avatar source changed");
            self.source = src.map(str::to_owned);
            self.status = transition(self.status, LoadEvent::SourceChanged);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LOAD_FAILURE_SRC: &str = "http://error.url";
    const LOAD_SUCCESS_SRC: &str = "https://joeschmoe.io/api/v1/random";

    #[test]
    fn transition_table() {
        use AvatarStatus::*;
        use LoadEvent::*;
        assert_eq!(transition(LoadSuccess, Failed), LoadError);
        assert_eq!(transition(LoadError, Failed), LoadError);
        assert_eq!(transition(LoadError, SourceChanged), LoadSuccess);
        assert_eq!(transition(LoadSuccess, SourceChanged), LoadSuccess);
        assert_eq!(transition(LoadSuccess, Loaded), LoadSuccess);
        // A load event never clears an error on its own
        assert_eq!(transition(LoadError, Loaded), LoadError);
    }

    #[test]
    fn new_machine_attempts_the_image() {
        let machine = FallbackMachine::new(Some(LOAD_SUCCESS_SRC.into()));
        assert_eq!(machine.status(), AvatarStatus::LoadSuccess);
        assert!(machine.shows_image(Some(LOAD_SUCCESS_SRC)));
    }

    #[test]
    fn missing_source_never_shows_image() {
        let machine = FallbackMachine::new(None);
        assert!(!machine.shows_image(None));
    }

    #[test]
    fn failure_switches_to_fallback() {
        let mut machine = FallbackMachine::new(Some(LOAD_FAILURE_SRC.into()));
        machine.fail(Some(LOAD_FAILURE_SRC));
        assert_eq!(machine.status(), AvatarStatus::LoadError);
        assert!(!machine.shows_image(Some(LOAD_FAILURE_SRC)));
    }

    #[test]
    fn new_source_after_failure_is_attempted() {
        let mut machine = FallbackMachine::new(Some(LOAD_FAILURE_SRC.into()));
        machine.fail(Some(LOAD_FAILURE_SRC));

        assert_eq!(
            machine.status_for(Some(LOAD_SUCCESS_SRC)),
            AvatarStatus::LoadSuccess
        );
        assert!(machine.shows_image(Some(LOAD_SUCCESS_SRC)));
        // The failed source stays failed until it is reassigned
        assert!(!machine.shows_image(Some(LOAD_FAILURE_SRC)));
    }

    #[test]
    fn repeated_loads_are_idempotent() {
        let mut machine = FallbackMachine::new(Some(LOAD_SUCCESS_SRC.into()));
        for _ in 0..5 {
            machine.load(Some(LOAD_SUCCESS_SRC));
            assert_eq!(machine.status(), AvatarStatus::LoadSuccess);
        }
    }

    #[test]
    fn retry_of_same_source_does_not_reset() {
        let mut machine = FallbackMachine::new(Some(LOAD_FAILURE_SRC.into()));
        machine.fail(Some(LOAD_FAILURE_SRC));
        machine.load(Some(LOAD_FAILURE_SRC));
        assert_eq!(machine.status(), AvatarStatus::LoadError);
    }

    #[test]
    fn failing_the_new_source_tracks_it() {
        let mut machine = FallbackMachine::new(Some(LOAD_FAILURE_SRC.into()));
        machine.fail(Some(LOAD_FAILURE_SRC));
        machine.fail(Some(LOAD_SUCCESS_SRC));
        assert_eq!(machine.source(), Some(LOAD_SUCCESS_SRC));
        assert!(!machine.shows_image(Some(LOAD_SUCCESS_SRC)));
        assert!(machine.shows_image(Some(LOAD_FAILURE_SRC)));
    }

    #[test]
    fn returning_to_a_failed_source_retries_it() {
        let mut machine = FallbackMachine::new(Some("A".into()));
        machine.fail(Some("A"));
        assert_eq!(machine.observe(Some("A")), AvatarStatus::LoadError);

        // Each render observes the source it shows
        assert_eq!(machine.observe(Some("B")), AvatarStatus::LoadSuccess);
        assert_eq!(machine.observe(Some("A")), AvatarStatus::LoadSuccess);
        assert!(machine.shows_image(Some("A")));
    }

    #[test]
    fn observing_the_same_source_keeps_the_error() {
        let mut machine = FallbackMachine::new(Some(LOAD_FAILURE_SRC.into()));
        machine.fail(Some(LOAD_FAILURE_SRC));
        for _ in 0..3 {
            assert_eq!(
                machine.observe(Some(LOAD_FAILURE_SRC)),
                AvatarStatus::LoadError
            );
        }
    }

    #[test]
    fn assign_to_none_then_back_resets() {
        let mut machine = FallbackMachine::new(Some(LOAD_FAILURE_SRC.into()));
        machine.fail(Some(LOAD_FAILURE_SRC));
        machine.assign(None);
        assert_eq!(machine.source(), None);
        assert_eq!(machine.observe(Some(LOAD_FAILURE_SRC)), AvatarStatus::LoadSuccess);
    }

    #[test]
    fn status_attribute_values() {
        assert_eq!(AvatarStatus::LoadSuccess.as_str(), "loaded");
        assert_eq!(AvatarStatus::LoadError.as_str(), "error");
    }
}
