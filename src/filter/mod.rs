//! Declaration gates.
//!
//! - `availability` — platform availability and introduced-in versions
//! - `location` — framework classification and inclusion policy

mod availability;
mod location;


pub use availability::{AvailabilityGate, introduced_in};
pub use location::{LocationFilter, Verdict, framework_from_path, is_system_location};
