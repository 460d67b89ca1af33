use crate::config::Config;
use crate::domain::Grid;
use crate::input::{InputEvent, InputSource};
use crate::ui::{ControlPanel, PanelAction, PanelStatus, PanelStyle};
use macroquad::math::Vec2;

/// Loop lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// SimulationState owns everything the frame loop mutates.
/// The grid is replaced wholesale on every step and reset.
pub struct SimulationState {
    pub grid: Grid,
    pub panel: ControlPanel,
    pub loop_state: LoopState,
    pub generation: u64,
    alive_probability: f64,
}

impl SimulationState {
    /// Build the initial state from config with a freshly randomized grid
    pub fn new(config: &Config) -> Self {
        let grid = Grid::random(config.grid.width, config.grid.height, config.grid.alive_probability);
        Self::with_grid(config, grid)
    }

    /// Build state around an existing grid
    pub fn with_grid(config: &Config, grid: Grid) -> Self {
        let (_, window_height) = config.window_size();
        let panel = ControlPanel::new(
            config.grid_pixel_width(),
            window_height,
            config.panel.clone(),
            PanelStyle::from(&config.theme),
            config.simulation.thresholds(),
        );

        Self {
            grid,
            panel,
            loop_state: LoopState::Running,
            generation: 0,
            alive_probability: config.grid.alive_probability,
        }
    }

    pub fn is_running(&self) -> bool {
        self.loop_state == LoopState::Running
    }

    /// Advance the grid one generation with the panel's current thresholds
    pub fn advance(&mut self) {
        self.grid = self.grid.step(&self.panel.thresholds());
        self.generation += 1;
    }

    /// Replace the grid with a fresh random one of the same size
    pub fn reset(&mut self) {
        let (width, height) = self.grid.dimensions();
        self.grid = Grid::random(width, height, self.alive_probability);
        self.generation = 0;
        log::info!("Grid reset: population={}", self.grid.population());
    }

    /// Apply one input event. Events after termination are ignored.
    pub fn dispatch(&mut self, event: InputEvent) {
        if !self.is_running() {
            return;
        }

        match event {
            InputEvent::Quit => {
                log::info!("Quit requested after {} generations", self.generation);
                self.loop_state = LoopState::Terminated;
            }
            InputEvent::PointerDown(position) => {
                if self.panel.handle_pointer_down(position) == PanelAction::ResetRequested {
                    self.reset();
                }
            }
        }
    }

    /// Apply a frame's worth of events in arrival order
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        events.into_iter().for_each(|event| self.dispatch(event));
    }

    /// One pass of the frame loop: draw the current (pre-step) grid, advance
    /// it, wait out the frame, then apply whatever input arrived. Presenting
    /// the drawn frame is left to the caller.
    pub fn run_frame<S: InputSource>(
        &mut self,
        input: &mut S,
        draw: impl FnOnce(&SimulationState, Vec2),
        throttle: impl FnOnce(),
    ) {
        draw(self, input.pointer_position());
        self.advance();
        throttle();
        self.dispatch_all(input.poll_events());
    }

    pub fn status(&self) -> PanelStatus {
        PanelStatus {
            generation: self.generation,
            population: self.grid.population(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, Thresholds};
    use macroquad::math::vec2;
    use std::cell::RefCell;

    /// Hands out one batch of events per poll and records when it was polled
    struct Scripted<'a> {
        frames: Vec<Vec<InputEvent>>,
        pointer: Vec2,
        log: &'a RefCell<Vec<&'static str>>,
    }

    impl InputSource for Scripted<'_> {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            self.log.borrow_mut().push("poll");
            if self.frames.is_empty() {
                Vec::new()
            } else {
                self.frames.remove(0)
            }
        }

        fn pointer_position(&self) -> Vec2 {
            self.pointer
        }
    }

    fn config() -> Config {
        let mut config = Config::default();
        config.grid.width = 20;
        config.grid.height = 15;
        config
    }

    // Panel origin is 20 * 10 = 200 for the test config
    const RESET: (f32, f32) = (250.0, 60.0);
    const OVERPOP_MINUS: (f32, f32) = (235.0, 135.0);

    fn lone_cell_state() -> SimulationState {
        let mut grid = Grid::new(20, 15);
        grid.set(5, 5, Cell::Alive);
        SimulationState::with_grid(&config(), grid)
    }

    #[test]
    fn test_starts_running_with_configured_grid() {
        let state = SimulationState::new(&config());
        assert!(state.is_running());
        assert_eq!(state.grid.dimensions(), (20, 15));
        assert_eq!(state.generation, 0);
        assert_eq!(state.panel.thresholds(), Thresholds::classic());
    }

    #[test]
    fn test_quit_terminates() {
        let mut state = lone_cell_state();
        state.dispatch(InputEvent::Quit);
        assert_eq!(state.loop_state, LoopState::Terminated);
    }

    #[test]
    fn test_events_after_quit_are_ignored() {
        let mut state = lone_cell_state();
        state.dispatch_all([
            InputEvent::Quit,
            InputEvent::PointerDown(vec2(OVERPOP_MINUS.0, OVERPOP_MINUS.1)),
        ]);
        assert_eq!(state.panel.thresholds(), Thresholds::classic());
    }

    #[test]
    fn test_advance_steps_grid_and_counts() {
        let mut state = lone_cell_state();
        state.advance();
        assert_eq!(state.grid.population(), 0);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_reset_click_replaces_grid() {
        let mut config = config();
        config.grid.alive_probability = 1.0;
        let mut state = SimulationState::with_grid(&config, Grid::new(20, 15));
        state.generation = 12;

        state.dispatch(InputEvent::PointerDown(vec2(RESET.0, RESET.1)));

        assert_eq!(state.grid.dimensions(), (20, 15));
        assert_eq!(state.grid.population(), 20 * 15);
        assert_eq!(state.generation, 0);
        assert!(state.is_running());
    }

    #[test]
    fn test_click_outside_widgets_changes_nothing() {
        let mut state = lone_cell_state();
        let grid_before = state.grid.clone();

        state.dispatch_all([
            InputEvent::PointerDown(vec2(50.0, 50.0)),
            InputEvent::PointerDown(vec2(390.0, 140.0)),
        ]);

        assert_eq!(state.grid, grid_before);
        assert_eq!(state.panel.thresholds(), Thresholds::classic());
    }

    #[test]
    fn test_stepper_click_feeds_next_step() {
        let mut state = lone_cell_state();
        // underpopulation 2 -> 0 lets the isolated cell survive
        let underpop_minus = vec2(235.0, 215.0);
        state.dispatch_all([
            InputEvent::PointerDown(underpop_minus),
            InputEvent::PointerDown(underpop_minus),
        ]);
        assert_eq!(state.panel.thresholds().underpopulation, 0);

        state.advance();
        assert_eq!(state.grid.get(5, 5), Some(Cell::Alive));
    }

    #[test]
    fn test_status_reports_generation_and_population() {
        let mut state = lone_cell_state();
        assert_eq!(
            state.status(),
            PanelStatus {
                generation: 0,
                population: 1
            }
        );
        state.advance();
        assert_eq!(state.status().generation, 1);
    }

    #[test]
    fn test_frame_draws_pre_step_grid_then_steps_then_throttles_then_polls() {
        let log = RefCell::new(Vec::new());
        let mut source = Scripted {
            frames: vec![vec![]],
            pointer: vec2(12.0, 34.0),
            log: &log,
        };
        let mut state = lone_cell_state();
        let before = state.grid.clone();
        let mut drawn = None;

        state.run_frame(
            &mut source,
            |s, pointer| {
                log.borrow_mut().push("draw");
                drawn = Some((s.grid.clone(), s.generation, pointer));
            },
            || log.borrow_mut().push("throttle"),
        );

        assert_eq!(drawn, Some((before.clone(), 0, vec2(12.0, 34.0))));
        assert_eq!(state.grid, before.step(&Thresholds::classic()));
        assert_eq!(state.generation, 1);
        assert_eq!(*log.borrow(), ["draw", "throttle", "poll"]);
    }

    #[test]
    fn test_reset_click_lands_after_the_frame_step() {
        let log = RefCell::new(Vec::new());
        let mut source = Scripted {
            frames: vec![vec![InputEvent::PointerDown(vec2(RESET.0, RESET.1))]],
            pointer: vec2(0.0, 0.0),
            log: &log,
        };
        let mut state = lone_cell_state();
        state.generation = 7;

        state.run_frame(&mut source, |_, _| {}, || {});

        // The stepped generation is discarded by the reset
        assert_eq!(state.generation, 0);
        assert_eq!(state.grid.dimensions(), (20, 15));
    }

    #[test]
    fn test_two_presses_in_one_frame_both_count() {
        let log = RefCell::new(Vec::new());
        let minus = InputEvent::PointerDown(vec2(OVERPOP_MINUS.0, OVERPOP_MINUS.1));
        let mut source = Scripted {
            frames: vec![vec![minus, minus]],
            pointer: vec2(0.0, 0.0),
            log: &log,
        };
        let mut state = lone_cell_state();

        state.run_frame(&mut source, |_, _| {}, || {});

        assert_eq!(state.panel.thresholds().overpopulation, 1);
    }

    #[test]
    fn test_frames_run_until_quit() {
        let log = RefCell::new(Vec::new());
        let mut source = Scripted {
            frames: vec![vec![], vec![InputEvent::PointerDown(vec2(5.0, 5.0))], vec![InputEvent::Quit]],
            pointer: vec2(0.0, 0.0),
            log: &log,
        };
        let mut state = lone_cell_state();

        let mut frames = 0;
        while state.is_running() {
            state.run_frame(&mut source, |_, _| {}, || {});
            frames += 1;
        }

        assert_eq!(frames, 3);
        assert_eq!(state.loop_state, LoopState::Terminated);
        assert_eq!(state.generation, 3);
    }
}
