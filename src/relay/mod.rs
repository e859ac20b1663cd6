pub mod client;
pub mod model;

pub use client::RelayClient;
pub use model::{ScanOutcome, ScanSubmission};
