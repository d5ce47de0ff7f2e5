//! BMI Calculator Shared Library
//!
//! Unit-aware body measurement conversion, BMI calculation, classification
//! and healthy weight ranges. Used by the WASM bindings and the CLI.

pub mod errors;
pub mod evaluation;
pub mod health_metrics;
pub mod measurement;
pub mod presenter;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use evaluation::*;
pub use health_metrics::*;
pub use measurement::*;
pub use presenter::*;
pub use units::*;
