//! Fresh/dried weight propagation for harvest rows

pub mod parse;
pub mod state;
pub mod propagator;

pub use parse::{parse_ratio_input, DEFAULT_RATIO};
pub use state::{Ratio, RatioState};
pub use propagator::{on_dried_weight_change, on_fresh_weight_change, on_ratio_input_change, RatioCommand};
