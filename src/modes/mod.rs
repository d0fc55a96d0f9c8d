pub mod play;
pub mod simulate;

pub use play::{PlayConfig, PlayMode};
pub use simulate::{SimulateConfig, SimulateMode, SimulationSummary};
