//! Codec configuration.

use crate::error::{PolylineError, Result};

/// Decimal digits kept by the public polyline format.
pub const DEFAULT_PRECISION: u32 = 5;

/// Largest supported precision. Beyond this, quantized values of ordinary
/// coordinates stop being exactly representable in an `f64` mantissa.
pub const MAX_PRECISION: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolylineOptions {
    /// Number of decimal digits kept per component. Coordinates are scaled by
    /// `10^precision` before truncation. OSRM and Valhalla use 6.
    pub precision: u32,
}

impl Default for PolylineOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl PolylineOptions {
    /// Options keeping `precision` decimal digits.
    pub fn with_precision(precision: u32) -> Self {
        Self { precision }
    }

    /// Fails with `InvalidPrecision` above [`MAX_PRECISION`].
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(PolylineError::InvalidPrecision {
                precision: self.precision,
            });
        }
        Ok(())
    }

    /// Scale factor `10^precision`. Validates the precision first.
    pub fn factor(&self) -> Result<f64> {
        self.validate()?;
        Ok(10u64.pow(self.precision) as f64)
    }
}
