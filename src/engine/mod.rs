//! Checking engine: simulation, validation, metrics and animation frames.
//!
//! Every operation is a pure function of its inputs.

pub mod metrics;
pub mod simulate;
pub mod trace;
pub mod validate;

pub use metrics::{Metrics, OptimalityTier, compute_metrics};
pub use simulate::{SimulatedPath, simulate};
pub use trace::{Frame, FramePath, Trace, build_trace};
pub use validate::{is_valid, validate};
