pub mod fill;

pub use fill::{FillConfig, RADIUS_CEILING};
