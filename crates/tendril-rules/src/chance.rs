use rand::{Rng, RngCore};

/// True with probability `1/n`. Bounds below 1 always succeed.
pub(crate) fn one_in(rng: &mut dyn RngCore, n: i32) -> bool {
    n <= 1 || rng.gen_range(0..n) == 0
}

/// Uniform draw from `[0, n)`, or 0 when `n < 1`.
pub(crate) fn below(rng: &mut dyn RngCore, n: i32) -> i32 {
    if n <= 1 {
        0
    } else {
        rng.gen_range(0..n)
    }
}
