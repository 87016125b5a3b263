//! Encoded Polyline Algorithm Format codec.
//!
//! Turns ordered latitude/longitude paths into the compact ASCII strings used
//! by mapping APIs, and back. Coordinates are quantized to `10^-precision`
//! degrees (five digits by default), delta coded against the previous point,
//! and written as sign-folded base-32 varints.
//!
//! ```
//! use polyline_codec::{decode, encode};
//!
//! let path = [(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)];
//! let polyline = encode(&path).unwrap();
//! assert_eq!(polyline.to_string(), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
//!
//! let decoded = decode(&polyline).unwrap();
//! assert_eq!(decoded.len(), 3);
//! ```

pub mod batch;
pub mod error;
pub mod latlng;
pub mod options;
pub mod polyline;
pub mod traits;
pub mod varint;

pub use batch::{decode_all, encode_all};
pub use error::{PolylineError, Result};
pub use latlng::LatLng;
pub use options::PolylineOptions;
pub use polyline::{Polyline, decode, decode_with, encode, encode_with};
pub use traits::Coordinate;
