//! Copy widget domain types

mod dwell;
mod state;

pub use dwell::{DwellTime, DEFAULT_DWELL_MS};
pub use state::{CopyIndicator, CopyState};
