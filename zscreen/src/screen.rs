use std::{any, fmt::Debug};

use crate::Error;

/// What a screen wants the manager to do after a callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    None,
    Switch(String),
}

impl Transition {
    pub fn switch<S: Into<String>>(name: S) -> Self {
        Transition::Switch(name.into())
    }
}

/// A self-contained UI/game state.
///
/// Only `update` and `on_event` are required. The enter/exit hooks
/// are called around every switch:
///
/// - `on_pre_exit` on the old screen while it's still current;
/// - `on_exit` on the old screen right after the switch;
/// - `on_pre_enter` on the new screen before its first frame is drawn;
/// - `on_enter` on the new screen after its first `update`.
pub trait Screen<Ev, S, Err = Error>: Debug {
    /// The registry key. Defaults to the lowercased type name.
    fn name(&self) -> String {
        default_name(any::type_name::<Self>())
    }

    fn update(&mut self, surface: &mut S, events: &[Ev]) -> Result<Transition, Err>;

    fn on_event(&mut self, event: &Ev) -> Result<Transition, Err>;

    fn on_pre_enter(&mut self) -> Result<(), Err> {
        Ok(())
    }

    fn on_enter(&mut self) -> Result<(), Err> {
        Ok(())
    }

    fn on_pre_exit(&mut self) -> Result<(), Err> {
        Ok(())
    }

    fn on_exit(&mut self) -> Result<(), Err> {
        Ok(())
    }
}

/// `my_game::screen::MainMenu<T>` -> `mainmenu`
fn default_name(type_name: &str) -> String {
    let path = type_name.split('<').next().unwrap_or(type_name);
    let short = path.rsplit("::").next().unwrap_or(path);
    short.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{default_name, Screen, Transition};

    #[derive(Debug)]
    struct MainMenu;

    impl Screen<(), ()> for MainMenu {
        fn update(&mut self, _: &mut (), _: &[()]) -> crate::Result<Transition> {
            Ok(Transition::None)
        }

        fn on_event(&mut self, _: &()) -> crate::Result<Transition> {
            Ok(Transition::None)
        }
    }

    #[test]
    fn name_from_type_path() {
        assert_eq!(default_name("game::screen::MainMenu"), "mainmenu");
        assert_eq!(default_name("Battle"), "battle");
        assert_eq!(default_name("game::Popup<game::Confirm>"), "popup");
    }

    #[test]
    fn name_of_boxed_screen() {
        let screen: Box<dyn Screen<(), ()>> = Box::new(MainMenu);
        assert_eq!(screen.name(), "mainmenu");
    }

    #[test]
    fn switch() {
        assert_eq!(Transition::switch("b"), Transition::Switch("b".into()));
    }
}
