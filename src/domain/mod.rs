mod cell;
mod grid;
mod rules;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{MAX_THRESHOLD, MIN_THRESHOLD, Stepper, Threshold, Thresholds};
