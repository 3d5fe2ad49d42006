pub mod log_panel;
pub mod trainer;

pub use log_panel::show_log_panel;
pub use trainer::{TrainerAction, show_trainer};
