use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `update` forwards its events to the current screen's `on_event`.
    /// Turn it off if the host calls `external_dispatch` from its own
    /// event loop, otherwise every event is delivered twice.
    pub internal_cycle_events: bool,

    /// Start with the first registered screen. If `false`, every
    /// registration makes the new screen current.
    pub starts_first_screen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            internal_cycle_events: true,
            starts_first_screen: true,
        }
    }
}
