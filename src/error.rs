//! Error types for polyline encoding and decoding.

use thiserror::Error;

/// Result type for polyline operations.
pub type Result<T> = std::result::Result<T, PolylineError>;

/// Errors returned by the encoder, the decoder and option validation.
///
/// Offsets are byte positions into the encoded input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolylineError {
    /// Input ended while an integer still had its continuation bit set.
    #[error("truncated varint starting at byte {offset}")]
    TruncatedVarint { offset: usize },

    /// Input ended after a latitude delta with no matching longitude delta.
    #[error("truncated: odd number of delta values (dangling value at byte {offset})")]
    TruncatedPointPair { offset: usize },

    /// Coordinate is NaN, infinite, or too large to quantize into an `i64`.
    #[error("invalid coordinate at index {index}: ({lat}, {lng})")]
    InvalidCoordinate { index: usize, lat: f64, lng: f64 },

    /// Byte lies outside the polyline alphabet (`63..=126`).
    #[error("invalid byte 0x{byte:02x} at offset {offset}")]
    InvalidByte { offset: usize, byte: u8 },

    /// Integer carries more than 64 significant bits.
    #[error("varint starting at byte {offset} overflows 64 bits")]
    VarintOverflow { offset: usize },

    #[error("precision {precision} is out of range (max {max})", max = crate::options::MAX_PRECISION)]
    InvalidPrecision { precision: u32 },
}
