use rand::Rng;
use thiserror::Error;

use crate::constants::EMPTY_NAMES_ERROR;

/// Raised when a spin is requested on a wheel with no names.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{}", EMPTY_NAMES_ERROR)]
pub struct EmptySelectionError;

/// Random draws consumed by a spin: the winning index and the planner's
/// spin count and duration.
///
/// Every `rand::Rng` is a `SpinRng`, so seeded generators can be passed
/// straight through.
pub trait SpinRng {
    /// Uniform draw from `0..len`. `len` must be non-zero.
    fn index_below(&mut self, len: usize) -> usize;

    /// Uniform draw from `low..high`.
    fn between(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> SpinRng for R {
    fn index_below(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..high)
    }
}

/// Picks the winning segment for `names`.
pub fn resolve<R: SpinRng + ?Sized>(
    names: &[String],
    rng: &mut R,
) -> Result<usize, EmptySelectionError> {
    if names.is_empty() {
        return Err(EmptySelectionError);
    }
    Ok(rng.index_below(names.len()))
}
