#![allow(dead_code)]

pub mod assertions;
pub mod test_app;

pub use assertions::{assert_fuel_in_bounds, assert_spatial_valid};
pub use test_app::{TestApp, TestAppBuilder};
