#[cfg(feature = "honda-insight")]
pub mod honda_insight;
