use macroquad::prelude::*;

use super::PanelStyle;

/// Rectangular panel button with hover highlighting.
/// Buttons are rebuilt from the layout every frame, so they hold no state.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    rect: Rect,
    text: String,
}

impl Button {
    pub fn new(rect: Rect, text: impl Into<String>) -> Self {
        Self {
            rect,
            text: text.into(),
        }
    }

    /// Check if the pointer is over the button
    pub fn is_hovered(&self, pointer: Vec2) -> bool {
        self.rect.contains(pointer)
    }

    /// Draw button with hover effect and centered caption
    pub fn draw(&self, pointer: Vec2, style: &PanelStyle, font: Option<&Font>) {
        let color = if self.is_hovered(pointer) {
            style.button_hover
        } else {
            style.button
        };

        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, color);
        super::draw_centered_text(&self.text, self.rect.center(), style, font);
    }
}
