// Domain layer - cells, grid evolution, thresholds
pub mod domain;

// Application layer - loop state and frame timing
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod config;

// Re-exports for convenience
pub use application::{FrameLimiter, LoopState, SimulationState};
pub use config::Config;
pub use domain::{Cell, Grid, Threshold, Thresholds};
pub use rendering::Renderer;
pub use ui::ControlPanel;
