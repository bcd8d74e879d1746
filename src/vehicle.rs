//! Vehicle abstraction
//!
//! Pick your vehicle feature set in the `Cargo.toml`
#[cfg(feature = "honda-insight")]
pub use crate::vehicles::honda_insight::*;
