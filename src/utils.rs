//! Small helpers for test bodies.

use rand::Rng;

use crate::constants::{RANDOM_ID_MAX, RANDOM_ID_MIN};

/// Random integer in `[min, max)`; returns `min` when the range is empty
pub fn random_int(min: u64, max: u64) -> u64 {
    if max <= min {
        return min;
    }
    rand::thread_rng().gen_range(min..max)
}

/// Random id in the default range `[0, 10000)`
pub fn random_id() -> u64 {
    random_int(RANDOM_ID_MIN, RANDOM_ID_MAX)
}
