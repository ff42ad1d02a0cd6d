mod engine;
pub mod steps;
pub mod timers;

pub use engine::{Lifecycle, Slideshow};
pub use steps::{StepInfo, column_round, max_steps, step_back, step_forward, step_info};
pub use timers::{PendingTimer, TimerAction, TimerSet};
