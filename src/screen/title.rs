use log::info;
use macroquad::prelude::{
    clear_background, draw_rectangle, draw_text, KeyCode, BLACK, GRAY, WHITE,
};
use zscreen::{Screen, Transition};

use crate::{error::ZError, event::Event, surface::MqSurface, ZResult};

#[derive(Debug, Default)]
pub struct Title;

impl Title {
    pub fn new() -> Self {
        Self
    }
}

impl Screen<Event, MqSurface, ZError> for Title {
    fn update(&mut self, surface: &mut MqSurface, _: &[Event]) -> ZResult<Transition> {
        surface.draw_with(|| {
            clear_background(BLACK);
            draw_rectangle(50.0, 90.0, 90.0, 90.0, WHITE);
            draw_rectangle(50.0, 200.0, 90.0, 90.0, WHITE);
            draw_text("[space] or click: field", 200.0, 40.0, 24.0, GRAY);
            draw_text("[esc]: exit", 200.0, 70.0, 24.0, GRAY);
        });
        Ok(Transition::None)
    }

    fn on_event(&mut self, event: &Event) -> ZResult<Transition> {
        match event {
            Event::Key(KeyCode::Space) | Event::Click(_) => Ok(Transition::switch("field")),
            _ => Ok(Transition::None),
        }
    }

    fn on_exit(&mut self) -> ZResult {
        info!("Title: it went out");
        Ok(())
    }
}
