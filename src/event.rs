use macroquad::prelude::{
    get_last_key_pressed, is_mouse_button_pressed, mouse_position, KeyCode, MouseButton, Vec2,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Key(KeyCode),
    Click(Vec2),
}

/// Collects this frame's input.
pub fn poll() -> Vec<Event> {
    let mut events = Vec::new();
    if let Some(key) = get_last_key_pressed() {
        events.push(Event::Key(key));
    }
    if is_mouse_button_pressed(MouseButton::Left) {
        events.push(Event::Click(mouse_position().into()));
    }
    events
}
