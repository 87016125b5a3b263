//! Sign-folded base-32 varints, the integer primitive of the polyline format.
//!
//! A signed value is folded so the sign lands in bit 0, then written five
//! bits at a time, least-significant chunk first. Every chunk except the last
//! carries the continuation flag `0x20`, and every byte is offset by 63 so the
//! output stays within printable ASCII (`?` through `~`).

use std::iter::FusedIterator;

use tracing::debug;

use crate::error::{PolylineError, Result};

/// Added to every chunk before it is emitted.
pub const OFFSET: u8 = 63;

/// Longest possible encoding of one value (64 folded bits in 5-bit chunks).
pub const MAX_ENCODED_LEN: usize = 13;

const CONTINUATION: u8 = 0x20;
const CHUNK_MASK: u8 = 0x1f;
const CHUNK_BITS: u32 = 5;

/// Moves the sign into bit 0: non-negatives become even, negatives odd.
fn fold(value: i64) -> u64 {
    let shifted = (value as u64) << 1;
    if value < 0 { !shifted } else { shifted }
}

fn unfold(folded: u64) -> i64 {
    let half = (folded >> 1) as i64;
    if folded & 1 == 1 { !half } else { half }
}

/// Appends the encoding of `value` to `out`.
///
/// Every `i64` has exactly one encoding, between 1 and [`MAX_ENCODED_LEN`]
/// bytes long.
pub fn encode_value(value: i64, out: &mut Vec<u8>) {
    let mut folded = fold(value);
    while folded >= u64::from(CONTINUATION) {
        out.push((CONTINUATION | (folded as u8 & CHUNK_MASK)) + OFFSET);
        folded >>= CHUNK_BITS;
    }
    out.push(folded as u8 + OFFSET);
}

/// Number of bytes [`encode_value`] emits for `value`.
pub fn encoded_len(value: i64) -> usize {
    let bits = (u64::BITS - fold(value).leading_zeros()) as usize;
    bits.div_ceil(CHUNK_BITS as usize).max(1)
}

/// Decodes one value starting at byte `pos`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode_value(bytes: &[u8], pos: usize) -> Result<(i64, usize)> {
    let mut acc = 0u64;
    let mut shift = 0u32;

    for (offset, &byte) in bytes.iter().enumerate().skip(pos) {
        let chunk = match byte.checked_sub(OFFSET) {
            Some(chunk) if chunk <= (CONTINUATION | CHUNK_MASK) => chunk,
            _ => {
                debug!(offset, byte, "byte outside polyline alphabet");
                return Err(PolylineError::InvalidByte { offset, byte });
            }
        };

        let bits = u64::from(chunk & CHUNK_MASK);
        if shift >= u64::BITS || (bits << shift) >> shift != bits {
            debug!(offset = pos, "varint exceeds 64 bits");
            return Err(PolylineError::VarintOverflow { offset: pos });
        }
        acc |= bits << shift;

        if chunk & CONTINUATION == 0 {
            return Ok((unfold(acc), offset + 1 - pos));
        }
        shift += CHUNK_BITS;
    }

    debug!(offset = pos, len = bytes.len(), "input ends inside a varint");
    Err(PolylineError::TruncatedVarint { offset: pos })
}

/// Iterator over the values of an encoded byte stream.
///
/// Yields `None` once the input is exhausted, or after the first error.
#[derive(Debug, Clone)]
pub struct Values<'a> {
    bytes: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Values<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            failed: false,
        }
    }

    /// Byte position of the next value.
    pub const fn offset(&self) -> usize {
        self.pos
    }
}

impl Iterator for Values<'_> {
    type Item = Result<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.bytes.len() {
            return None;
        }
        match decode_value(self.bytes, self.pos) {
            Ok((value, consumed)) => {
                self.pos += consumed;
                Some(Ok(value))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Values<'_> {}
