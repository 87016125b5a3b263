//! Parallel encoding and decoding of many independent paths.
//!
//! Every call in this crate is reentrant, so batches are split across the
//! rayon global pool. Results keep input order, and one bad entry does not
//! fail the others.

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::latlng::LatLng;
use crate::options::PolylineOptions;
use crate::polyline::{self, Polyline};
use crate::traits::Coordinate;

/// Encodes each path in `paths`.
pub fn encode_all<P, C>(paths: &[P], options: &PolylineOptions) -> Vec<Result<Polyline>>
where
    P: AsRef<[C]> + Sync,
    C: Coordinate + Sync,
{
    let results: Vec<_> = paths
        .par_iter()
        .map(|path| polyline::encode_with(path.as_ref(), options))
        .collect();

    log_failures("encode", &results);
    results
}

/// Decodes each encoded polyline in `polylines`.
pub fn decode_all<B>(polylines: &[B], options: &PolylineOptions) -> Vec<Result<Vec<LatLng>>>
where
    B: AsRef<[u8]> + Sync,
{
    let results: Vec<_> = polylines
        .par_iter()
        .map(|encoded| polyline::decode_with(encoded, options))
        .collect();

    log_failures("decode", &results);
    results
}

fn log_failures<T>(operation: &str, results: &[Result<T>]) {
    let failed = results.iter().filter(|result| result.is_err()).count();
    debug!(operation, total = results.len(), failed, "batch finished");
}
