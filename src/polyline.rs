//! Encoded polylines.
//!
//! A path is stored as pairs of (latitude, longitude) deltas. Each component is
//! scaled by `10^precision`, truncated toward zero, diffed against the
//! previous point (the first point against `(0, 0)`), and written as a
//! [`varint`](crate::varint). There are no separators; the varints delimit
//! themselves.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{PolylineError, Result};
use crate::latlng::LatLng;
use crate::options::PolylineOptions;
use crate::traits::Coordinate;
use crate::varint::{self, Values};

/// Output capacity reserved per point. Only a sizing hint.
const BYTES_PER_POINT_HINT: usize = 4;

/// 2^63; quantized values must lie in `[-2^63, 2^63)` to fit an `i64`.
const QUANTIZE_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// An encoded polyline.
///
/// Owns its bytes. Serializes as `{"points": "<encoded text>"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Polyline {
    #[serde(with = "points_text")]
    points: Vec<u8>,
}

impl Polyline {
    /// Wraps already-encoded bytes. Nothing is validated until decoding.
    pub fn new(points: Vec<u8>) -> Self {
        Self { points }
    }

    /// Encodes `path` at the default precision.
    pub fn encode<C: Coordinate>(path: &[C]) -> Result<Self> {
        encode(path)
    }

    /// Encodes `path` at the precision in `options`.
    pub fn encode_with<C: Coordinate>(path: &[C], options: &PolylineOptions) -> Result<Self> {
        encode_with(path, options)
    }

    /// Decodes at the default precision.
    pub fn decode(&self) -> Result<Vec<LatLng>> {
        decode(&self.points)
    }

    /// Decodes at the precision in `options`.
    pub fn decode_with(&self, options: &PolylineOptions) -> Result<Vec<LatLng>> {
        decode_with(&self.points, options)
    }

    /// Returns the encoded bytes.
    pub fn points(&self) -> &[u8] {
        &self.points
    }

    /// Consumes the polyline and returns the owned bytes.
    pub fn into_points(self) -> Vec<u8> {
        self.points
    }

    /// The encoded text, if the bytes are valid UTF-8.
    ///
    /// Always `Some` for polylines produced by [`encode`].
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.points).ok()
    }

    /// Number of encoded bytes.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` for the encoding of an empty path.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.points))
    }
}

impl AsRef<[u8]> for Polyline {
    fn as_ref(&self) -> &[u8] {
        &self.points
    }
}

impl From<Vec<u8>> for Polyline {
    fn from(points: Vec<u8>) -> Self {
        Self { points }
    }
}

impl From<String> for Polyline {
    fn from(text: String) -> Self {
        Self {
            points: text.into_bytes(),
        }
    }
}

impl From<&str> for Polyline {
    fn from(text: &str) -> Self {
        Self {
            points: text.as_bytes().to_vec(),
        }
    }
}

impl FromStr for Polyline {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<Polyline> for Vec<u8> {
    fn from(polyline: Polyline) -> Self {
        polyline.points
    }
}

/// Encodes `path` at the default precision (5 digits).
///
/// Coordinates must be finite. A non-finite component, or one whose scaled
/// value does not fit an `i64`, fails with
/// [`PolylineError::InvalidCoordinate`] and no output.
pub fn encode<C: Coordinate>(path: &[C]) -> Result<Polyline> {
    encode_with(path, &PolylineOptions::default())
}

/// Encodes `path` at the precision in `options`.
pub fn encode_with<C: Coordinate>(path: &[C], options: &PolylineOptions) -> Result<Polyline> {
    let factor = options.factor()?;
    let mut out = Vec::with_capacity(path.len() * BYTES_PER_POINT_HINT);
    let (mut last_lat, mut last_lng) = (0i64, 0i64);

    for (index, point) in path.iter().enumerate() {
        let (lat, lng) = (point.lat(), point.lng());
        let quantized = LatLng::new(lat, lng)
            .is_finite()
            .then(|| quantize(lat, factor).zip(quantize(lng, factor)))
            .flatten();
        let Some((q_lat, q_lng)) = quantized else {
            debug!(index, lat, lng, "coordinate cannot be quantized");
            return Err(PolylineError::InvalidCoordinate { index, lat, lng });
        };

        varint::encode_value(q_lat.wrapping_sub(last_lat), &mut out);
        varint::encode_value(q_lng.wrapping_sub(last_lng), &mut out);

        last_lat = q_lat;
        last_lng = q_lng;
    }

    trace!(
        points = path.len(),
        bytes = out.len(),
        precision = options.precision,
        "encoded polyline"
    );
    Ok(Polyline { points: out })
}

/// Decodes an encoded polyline at the default precision (5 digits).
///
/// Fails on truncated or malformed input; never returns a partial path.
pub fn decode<B: AsRef<[u8]> + ?Sized>(encoded: &B) -> Result<Vec<LatLng>> {
    decode_with(encoded, &PolylineOptions::default())
}

/// Decodes at the precision in `options`.
pub fn decode_with<B: AsRef<[u8]> + ?Sized>(
    encoded: &B,
    options: &PolylineOptions,
) -> Result<Vec<LatLng>> {
    let bytes = encoded.as_ref();
    let scale = 1.0 / options.factor()?;
    let mut values = Values::new(bytes);
    let mut path = Vec::with_capacity(bytes.len() / 2);
    let (mut lat, mut lng) = (0i64, 0i64);

    loop {
        let start = values.offset();
        let Some(d_lat) = values.next() else {
            break;
        };
        let d_lat = d_lat?;
        let Some(d_lng) = values.next() else {
            debug!(offset = start, "latitude delta without longitude delta");
            return Err(PolylineError::TruncatedPointPair { offset: start });
        };
        let d_lng = d_lng?;

        lat = lat.wrapping_add(d_lat);
        lng = lng.wrapping_add(d_lng);
        path.push(LatLng::new(lat as f64 * scale, lng as f64 * scale));
    }

    trace!(
        points = path.len(),
        bytes = bytes.len(),
        precision = options.precision,
        "decoded polyline"
    );
    Ok(path)
}

/// Scales and drops the fractional part, like a C cast. `None` if the result
/// is NaN or does not fit an `i64`.
fn quantize(value: f64, factor: f64) -> Option<i64> {
    let scaled = (value * factor).trunc();
    (-QUANTIZE_LIMIT..QUANTIZE_LIMIT)
        .contains(&scaled)
        .then_some(scaled as i64)
}

mod points_text {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};

    pub fn serialize<S: Serializer>(points: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let text = std::str::from_utf8(points)
            .map_err(|err| <S::Error as ser::Error>::custom(format!("polyline is not valid text: {err}")))?;
        serializer.serialize_str(text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        if !text.is_ascii() {
            return Err(de::Error::custom("polyline text must be ASCII"));
        }
        Ok(text.into_bytes())
    }
}
