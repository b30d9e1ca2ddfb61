use log::{debug, info};

use crate::{Error, Registry, Screen, Settings, Surface, Transition};

/// Which of the entering callbacks of the current screen are still due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPreEnter,
    AwaitingEnter,
    Settled,
}

#[derive(Debug)]
struct ScreenWithSurface<Ev, S, Err> {
    screen: Box<dyn Screen<Ev, S, Err>>,
    surface: S,
}

/// Owns the screens and drives the current one.
///
/// `Ev` is the host's event type, `S` its surface type and `Err` the
/// error type the screens return (it must be able to hold this crate's
/// errors).
pub struct ScreenManager<Ev, S, Err = Error> {
    surface: S,
    screens: Registry<ScreenWithSurface<Ev, S, Err>>,
    settings: Settings,
    phase: Phase,
}

impl<Ev, S: Surface, Err: From<Error>> ScreenManager<Ev, S, Err> {
    pub fn new(surface: S, settings: Settings) -> Self {
        Self {
            surface,
            screens: Registry::new(),
            settings,
            phase: Phase::AwaitingPreEnter,
        }
    }

    /// Adds a screen under its `name()`, replacing any screen with
    /// the same name. No callbacks are called.
    pub fn register(&mut self, screen: Box<dyn Screen<Ev, S, Err>>) {
        let name = screen.name();
        info!("ScreenManager::register: '{}'", name);
        let surface = self.surface.offscreen(self.surface.size());
        let starts_first = self.settings.starts_first_screen;
        self.screens
            .register(name, ScreenWithSurface { screen, surface }, starts_first);
    }

    /// Must be called exactly once per frame.
    ///
    /// Only the first switch the screen asks for during the frame is
    /// made, the rest are dropped.
    pub fn update(&mut self, events: &[Ev]) -> Result<(), Err> {
        let name = self.current()?;
        let mut transitions = Vec::new();
        {
            let ScreenWithSurface { screen, surface } = self.screens.lookup_mut(&name)?;
            if self.settings.internal_cycle_events {
                for event in events {
                    transitions.push(screen.on_event(event)?);
                }
            }
            if self.phase == Phase::AwaitingPreEnter {
                self.phase = Phase::AwaitingEnter;
                debug!("ScreenManager: '{}'.on_pre_enter", name);
                screen.on_pre_enter()?;
            }
            self.surface.blit(surface, (0.0, 0.0));
            transitions.push(screen.update(surface, events)?);
            if self.phase == Phase::AwaitingEnter {
                self.phase = Phase::Settled;
                debug!("ScreenManager: '{}'.on_enter", name);
                screen.on_enter()?;
            }
        }
        let mut switches = transitions
            .into_iter()
            .filter(|transition| *transition != Transition::None);
        if let Some(transition) = switches.next() {
            for ignored in switches {
                debug!(
                    "ScreenManager: '{}' is already switching, ignoring {:?}",
                    name, ignored
                );
            }
            self.apply(transition)?;
        }
        Ok(())
    }

    /// Sends one event straight to the current screen. A switch it asks
    /// for happens right away.
    pub fn external_dispatch(&mut self, event: &Ev) -> Result<(), Err> {
        let name = self.current()?;
        let transition = self.screens.lookup_mut(&name)?.screen.on_event(event)?;
        self.apply(transition)
    }

    /// Makes `name` the current screen. Its entering callbacks are
    /// called during the next `update`.
    pub fn request_transition(&mut self, name: &str) -> Result<(), Err> {
        let old = self.current()?;
        if !self.screens.contains(name) {
            return Err(Error::ScreenNotFound(name.into()).into());
        }
        info!("ScreenManager::request_transition: '{}' -> '{}'", old, name);
        self.screens.lookup_mut(&old)?.screen.on_pre_exit()?;
        self.phase = Phase::AwaitingPreEnter;
        self.screens.set_current(name)?;
        self.screens.lookup_mut(&old)?.screen.on_exit()?;
        Ok(())
    }

    /// Recreates all screen surfaces with the host surface's size.
    pub fn resize(&mut self) {
        let size = self.surface.size();
        info!("ScreenManager::resize: {:?}", size);
        for entry in self.screens.values_mut() {
            entry.surface = self.surface.offscreen(size);
        }
    }

    pub fn current_name(&self) -> Option<&str> {
        self.screens.current_name()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.screens.contains(name)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn current(&self) -> Result<String, Error> {
        self.screens
            .current_name()
            .map(String::from)
            .ok_or(Error::NoScreens)
    }

    fn apply(&mut self, transition: Transition) -> Result<(), Err> {
        match transition {
            Transition::None => Ok(()),
            Transition::Switch(name) => self.request_transition(&name),
        }
    }
}
