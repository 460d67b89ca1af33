use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::EventHandler;
use macroquad::prelude::*;

/// Input that the frame loop cares about
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Window close request
    Quit,
    /// Primary button pressed at a window position
    PointerDown(Vec2),
}

/// Source of per-frame input, drained once per frame
pub trait InputSource {
    /// Pending events since the last poll. Never blocks.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Current pointer position in window coordinates
    fn pointer_position(&self) -> Vec2;
}

/// Collects primary presses replayed from macroquad's event queue,
/// each with the coordinate it was pressed at
#[derive(Debug, Default)]
struct PressCollector {
    events: Vec<InputEvent>,
}

impl EventHandler for PressCollector {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn mouse_button_down_event(&mut self, button: MouseButton, x: f32, y: f32) {
        if button == MouseButton::Left {
            self.events.push(InputEvent::PointerDown(vec2(x, y)));
        }
    }
}

/// Reads macroquad's input queue.
/// Taking over the close button is what turns it into [`InputEvent::Quit`].
pub struct EventPump {
    subscriber: usize,
}

impl EventPump {
    pub fn new() -> Self {
        prevent_quit();
        Self {
            subscriber: register_input_subscriber(),
        }
    }
}

impl Default for EventPump {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for EventPump {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut collector = PressCollector::default();
        repeat_all_miniquad_input(&mut collector, self.subscriber);

        if is_quit_requested() {
            collector.events.push(InputEvent::Quit);
        }

        collector.events
    }

    fn pointer_position(&self) -> Vec2 {
        mouse_position().into()
    }
}
