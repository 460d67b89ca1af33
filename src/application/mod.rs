mod frame_limiter;
mod game_state;

pub use frame_limiter::FrameLimiter;
pub use game_state::{LoopState, SimulationState};
