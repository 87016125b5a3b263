//! Test fixtures for polyline-codec.
//!
//! Real Las Vegas / Henderson coordinates (from OpenStreetMap) strung into
//! routes, with seven decimal digits so quantization is actually exercised.

pub mod las_vegas_routes;

pub use las_vegas_routes::*;
