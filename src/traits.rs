//! Coordinate access trait.
//!
//! The encoder only needs to read a latitude and a longitude from each point.
//! Apps can implement [`Coordinate`] for their own data models instead of
//! copying them into [`LatLng`] first.

use crate::latlng::LatLng;

/// Anything that exposes a latitude and longitude in degrees.
pub trait Coordinate {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

impl Coordinate for LatLng {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}

/// `(lat, lng)` tuples.
impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }

    fn lng(&self) -> f64 {
        self.1
    }
}

/// `[lat, lng]` arrays.
impl Coordinate for [f64; 2] {
    fn lat(&self) -> f64 {
        self[0]
    }

    fn lng(&self) -> f64 {
        self[1]
    }
}

impl<C: Coordinate + ?Sized> Coordinate for &C {
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn lng(&self) -> f64 {
        (**self).lng()
    }
}
