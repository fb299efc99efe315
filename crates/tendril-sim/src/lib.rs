pub mod capability;
pub mod cursor;
pub mod rng;
pub mod spreader;

#[cfg(test)]
mod test_harness;

pub use capability::{BlockCapability, CapabilityRegistry, DefaultCapability};
pub use cursor::ChargeCursor;
pub use rng::{tick_rng, tick_seed, SpreadRng};
pub use spreader::{feedback_intensity, Spreader, TickSummary};
