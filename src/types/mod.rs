//! Shared data structures for propeller assessment
//!
//! - `FormInput`: parsed blade count and measurements from the input form
//! - `GuidanceResult`: per-field validation messages
//! - `PerformanceSample`: coefficients from the prediction service
//! - `Recommendation`: drone-type recommendation chosen by the classifier

mod form;
mod guidance;
mod performance;
mod recommendation;

pub use form::*;
pub use guidance::*;
pub use performance::*;
pub use recommendation::*;
