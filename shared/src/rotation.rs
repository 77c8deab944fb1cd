use serde::{Deserialize, Serialize};

use crate::constants::{MAX_FULL_SPINS, MAX_SPIN_DURATION_MS, MIN_FULL_SPINS, MIN_SPIN_DURATION_MS};
use crate::spin::SpinRng;

/// Where a spin animation should end and how long it should take.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RotationPlan {
    pub target_rotation_deg: f64,
    pub duration_ms: u32,
    pub full_spins: u32,
}

/// Maps any angle into `[0, 360)`.
pub fn normalize_deg(deg: f64) -> f64 {
    let n = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if n >= 360.0 { 0.0 } else { n }
}

pub fn segment_angle(segment_count: usize) -> f64 {
    360.0 / segment_count.max(1) as f64
}

/// Center of segment `index` in the wheel's unrotated frame.
pub fn center_angle(index: usize, segment_count: usize) -> f64 {
    segment_angle(segment_count) * (index as f64 + 0.5)
}

/// Segment sitting under the fixed pointer (angle 0) once the wheel has
/// been rotated clockwise by `rotation_deg`.
pub fn segment_under_pointer(rotation_deg: f64, segment_count: usize) -> usize {
    let count = segment_count.max(1);
    let local = normalize_deg(-rotation_deg);
    ((local / segment_angle(count)).floor() as usize).min(count - 1)
}

/// Smallest forward turn from `current_rotation_deg` that brings the
/// center of `selected_index` under the pointer.
pub fn forward_delta(
    current_rotation_deg: f64,
    segment_count: usize,
    selected_index: usize,
) -> f64 {
    let center = center_angle(selected_index, segment_count);
    normalize_deg(-center - normalize_deg(current_rotation_deg))
}

/// Plans a spin that lands the pointer on `selected_index`.
///
/// The target always lies 6 to 8 full turns beyond the current rotation
/// plus the forward delta, so the wheel visibly advances even when the
/// same segment wins twice in a row. Duration is drawn independently of
/// the distance travelled.
pub fn plan<R: SpinRng + ?Sized>(
    current_rotation_deg: f64,
    segment_count: usize,
    selected_index: usize,
    rng: &mut R,
) -> RotationPlan {
    let delta = forward_delta(current_rotation_deg, segment_count, selected_index);
    let full_spins = rng.between(MIN_FULL_SPINS, MAX_FULL_SPINS + 1);
    let duration_ms = rng.between(MIN_SPIN_DURATION_MS, MAX_SPIN_DURATION_MS);

    RotationPlan {
        target_rotation_deg: current_rotation_deg + full_spins as f64 * 360.0 + delta,
        duration_ms,
        full_spins,
    }
}

/// Single-phase ease-out: fast start, smooth stop.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

impl RotationPlan {
    /// Angle to draw `elapsed_ms` into the animation when it started at
    /// `start_deg`.
    pub fn rotation_at(&self, start_deg: f64, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return self.target_rotation_deg;
        }
        let progress = elapsed_ms / self.duration_ms as f64;
        start_deg + (self.target_rotation_deg - start_deg) * ease_out(progress)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms as f64
    }
}
