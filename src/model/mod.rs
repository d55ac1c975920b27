pub mod category;
pub mod identity;
pub mod params;
pub mod sample;
pub mod thresholds;
