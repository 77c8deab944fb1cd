use std::cell::Cell;
use std::rc::Rc;

use gloo_render::request_animation_frame;
use shared::{RotationPlan, SpinCommitted};

use crate::hooks::BoardHandle;

struct SpinAnimation {
    handle: BoardHandle,
    spin: SpinCommitted,
    plan: RotationPlan,
    start_deg: f64,
    started_at: Cell<Option<f64>>,
}

/// Drives one committed spin frame by frame until the plan's duration
/// has elapsed, then reports it back through `BoardHandle::finish`.
pub fn run(handle: BoardHandle, spin: SpinCommitted, plan: RotationPlan, start_deg: f64) {
    let animation = Rc::new(SpinAnimation {
        handle,
        spin,
        plan,
        start_deg,
        started_at: Cell::new(None),
    });
    schedule(animation);
}

fn schedule(animation: Rc<SpinAnimation>) {
    let next = animation.clone();
    let frame = request_animation_frame(move |now| tick(next, now));
    animation.handle.store_frame(animation.spin.wheel_id, frame);
}

fn tick(animation: Rc<SpinAnimation>, now: f64) {
    let SpinAnimation { handle, spin, plan, .. } = &*animation;

    // superseded spins were already reported when the new one launched
    if !handle.is_active(spin.wheel_id, spin.spin_id) {
        return;
    }

    let started_at = match animation.started_at.get() {
        Some(t) => t,
        None => {
            animation.started_at.set(Some(now));
            now
        }
    };
    let elapsed = now - started_at;

    if plan.is_finished(elapsed) {
        handle.set_displayed(spin.wheel_id, plan.target_rotation_deg);
        handle.finish(spin);
        return;
    }

    handle.set_displayed(spin.wheel_id, plan.rotation_at(animation.start_deg, elapsed));
    handle.refresh();
    schedule(animation.clone());
}
