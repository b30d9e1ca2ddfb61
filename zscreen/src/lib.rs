//! Named screens with a current one, per-frame dispatch and
//! enter/exit callbacks around every switch.

use std::fmt;

pub use crate::{
    manager::{Phase, ScreenManager},
    registry::Registry,
    screen::{Screen, Transition},
    settings::Settings,
    surface::Surface,
};

mod manager;
mod registry;
mod screen;
mod settings;
mod surface;

pub type Result<T = ()> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    ScreenNotFound(String),
    NoScreens,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ScreenNotFound(name) => write!(f, "Can't find screen '{}'", name),
            Error::NoScreens => write!(f, "No screens were registered"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ScreenNotFound(_) | Error::NoScreens => None,
        }
    }
}
