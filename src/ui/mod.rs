mod button;
mod control_panel;

pub use button::Button;
pub use control_panel::{ControlPanel, PanelAction, PanelLayout, PanelStatus, StepperRegions};

use macroquad::prelude::*;

use crate::config::ThemeConfig;

/// Convert an `[r, g, b]` triple from the config into an opaque color
pub fn rgb(c: [u8; 3]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}

/// Colors and text size shared by the panel widgets
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelStyle {
    pub background: Color,
    pub button: Color,
    pub button_hover: Color,
    pub text: Color,
    pub font_size: u16,
}

impl From<&ThemeConfig> for PanelStyle {
    fn from(theme: &ThemeConfig) -> Self {
        Self {
            background: rgb(theme.panel),
            button: rgb(theme.button),
            button_hover: rgb(theme.button_hover),
            text: rgb(theme.text),
            font_size: theme.font_size,
        }
    }
}

fn text_params<'a>(style: &PanelStyle, font: Option<&'a Font>) -> TextParams<'a> {
    TextParams {
        font,
        font_size: style.font_size,
        color: style.text,
        ..Default::default()
    }
}

/// Draw text centered on `center`
pub(crate) fn draw_centered_text(text: &str, center: Vec2, style: &PanelStyle, font: Option<&Font>) {
    let size = measure_text(text, font, style.font_size, 1.0);
    draw_text_ex(
        text,
        center.x - size.width / 2.0,
        center.y - size.height / 2.0 + size.offset_y,
        text_params(style, font),
    );
}

/// Draw text with its top-left corner at `top_left`
pub(crate) fn draw_text_from(text: &str, top_left: Vec2, style: &PanelStyle, font: Option<&Font>) {
    let size = measure_text(text, font, style.font_size, 1.0);
    draw_text_ex(text, top_left.x, top_left.y + size.offset_y, text_params(style, font));
}
