use log::{debug, info};
use macroquad::prelude::{
    clear_background, draw_rectangle, get_frame_time, Color, KeyCode, DARKBLUE,
};
use zscreen::{Screen, Transition};

use crate::{error::ZError, event::Event, surface::MqSurface, ZResult};

/// Alpha units per second.
const FADE_IN_SPEED: f32 = 2.0;

#[derive(Debug, Default)]
pub struct Field {
    alpha: f32,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen<Event, MqSurface, ZError> for Field {
    fn update(&mut self, surface: &mut MqSurface, _: &[Event]) -> ZResult<Transition> {
        self.alpha = (self.alpha + get_frame_time() * FADE_IN_SPEED).min(1.0);
        let color = Color::new(1.0, 1.0, 1.0, self.alpha);
        surface.draw_with(|| {
            clear_background(DARKBLUE);
            draw_rectangle(200.0, 95.0, 100.0, 100.0, color);
        });
        Ok(Transition::None)
    }

    fn on_event(&mut self, event: &Event) -> ZResult<Transition> {
        match event {
            Event::Key(KeyCode::Space) | Event::Click(_) => Ok(Transition::switch("title")),
            _ => Ok(Transition::None),
        }
    }

    fn on_pre_enter(&mut self) -> ZResult {
        info!("Field: entering");
        self.alpha = 0.0;
        Ok(())
    }

    fn on_enter(&mut self) -> ZResult {
        debug!("Field: first frame is drawn, alpha = {}", self.alpha);
        Ok(())
    }
}
