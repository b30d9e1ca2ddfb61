use zscreen::ScreenManager;

use crate::{error::ZError, event::Event, surface::MqSurface};

mod field;
mod title;

pub use self::{field::Field, title::Title};

pub type Screens = ScreenManager<Event, MqSurface, ZError>;
