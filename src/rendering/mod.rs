use macroquad::prelude::*;

use crate::application::SimulationState;
use crate::config::Config;
use crate::ui::rgb;

/// Draws the grid and panel. Holds only colors, sizes and the loaded font.
pub struct Renderer {
    cell_size: f32,
    alive_color: Color,
    background: Color,
    font: Option<Font>,
}

impl Renderer {
    pub fn new(config: &Config, font: Option<Font>) -> Self {
        Self {
            cell_size: config.grid.cell_size,
            alive_color: rgb(config.theme.alive),
            background: rgb(config.theme.background),
            font,
        }
    }

    /// Screen rectangle covered by the cell at (x, y)
    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        Rect::new(
            x as f32 * self.cell_size,
            y as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Draw one full frame. Nothing becomes visible until the caller
    /// hands control back to macroquad with `next_frame`.
    pub fn render_frame(&self, state: &SimulationState, pointer: Vec2) {
        clear_background(self.background);

        for (x, y) in state.grid.alive_cells() {
            let cell = self.cell_rect(x, y);
            draw_rectangle(cell.x, cell.y, cell.w, cell.h, self.alive_color);
        }

        state.panel.render(pointer, self.font.as_ref(), state.status());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_grid_aligned() {
        let renderer = Renderer::new(&Config::default(), None);
        assert_eq!(renderer.cell_rect(0, 0), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(renderer.cell_rect(7, 3), Rect::new(70.0, 30.0, 10.0, 10.0));
    }
}
