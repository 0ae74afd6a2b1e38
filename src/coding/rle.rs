// src/coding/rle.rs

//! Run-length coding of zero runs.
//!
//! Non-zero values pass through untouched; each maximal run of zeros is
//! collapsed to the pair `[0, run_length]`. Every literal `0` in an
//! encoded sequence is therefore followed by its run length, which is
//! what makes the encoding decodable.

use crate::utils::{CoderError, Result};

/// Collapses runs of zeros in `data` into `[0, run_length]` pairs.
/// Sequences without zeros come back unchanged; empty input yields
/// empty output.
pub fn encode_zero_runs(data: &[i32]) -> Vec<i32> {
    let mut encoded = Vec::with_capacity(data.len());
    let mut i = 0;
    while i < data.len() {
        if data[i] == 0 {
            let run_start = i;
            while i < data.len() && data[i] == 0 {
                i += 1;
            }
            encoded.push(0);
            encoded.push((i - run_start) as i32);
        } else {
            encoded.push(data[i]);
            i += 1;
        }
    }
    encoded
}

/// Expands `[0, run_length]` pairs back into runs of zeros, undoing
/// [`encode_zero_runs`]. Fails when a literal `0` arrives without its
/// run length or with a run length below 1.
pub fn decode_zero_runs(encoded: &[i32]) -> Result<Vec<i32>> {
    let mut decoded = Vec::with_capacity(encoded.len());
    let mut i = 0;
    while i < encoded.len() {
        let value = encoded[i];
        if value == 0 {
            let Some(&length) = encoded.get(i + 1) else {
                return Err(CoderError::TruncatedRun { position: i });
            };
            if length < 1 {
                return Err(CoderError::InvalidRunLength {
                    position: i + 1,
                    length,
                });
            }
            decoded.resize(decoded.len() + length as usize, 0);
            i += 2;
        } else {
            decoded.push(value);
            i += 1;
        }
    }
    Ok(decoded)
}
