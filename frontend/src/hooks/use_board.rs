use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_render::AnimationFrame;
use shared::{Board, RotationPlan, SpinCommitted, SpinId, WheelId};
use yew::prelude::*;

use crate::config::PickerConfig;
use crate::pages::picker::animation;

/// Rendering-side rotation of one wheel.
#[derive(Default)]
pub struct WheelMotion {
    /// Target of the most recent plan; the next plan starts from here.
    committed_deg: f64,
    /// Angle currently drawn.
    displayed_deg: f64,
    active: Option<SpinCommitted>,
    frame: Option<AnimationFrame>,
}

impl WheelMotion {
    /// Where the next plan starts: the last committed target, even while
    /// an earlier animation is still short of it.
    pub fn plan_origin(&self) -> f64 {
        self.committed_deg
    }

    pub fn displayed_deg(&self) -> f64 {
        self.displayed_deg
    }

    pub fn set_displayed(&mut self, deg: f64) {
        self.displayed_deg = deg;
    }

    /// Makes `spin` the animation driving this wheel and returns the one
    /// it supersedes, whose queued frame is dropped.
    pub fn commit(&mut self, spin: SpinCommitted, plan: &RotationPlan) -> Option<SpinCommitted> {
        self.committed_deg = plan.target_rotation_deg;
        self.frame = None;
        self.active.replace(spin)
    }

    pub fn is_driving(&self, spin_id: SpinId) -> bool {
        self.active.as_ref().map(|s| s.spin_id) == Some(spin_id)
    }

    /// Ends the animation for `spin_id`. True only the first time, and
    /// only for the spin currently driving the wheel.
    pub fn finish(&mut self, spin_id: SpinId) -> bool {
        if !self.is_driving(spin_id) {
            return false;
        }
        self.active = None;
        self.frame = None;
        true
    }
}

/// Shared access to the board and the per-wheel motion state.
///
/// Every handler mutates through the `RefCell`s and then forces a
/// re-render, so late animation callbacks always see the current board.
#[derive(Clone)]
pub struct BoardHandle {
    board: Rc<RefCell<Board>>,
    motions: Rc<RefCell<HashMap<WheelId, WheelMotion>>>,
    refresh: UseForceUpdateHandle,
}

fn build_board(config: &PickerConfig) -> Board {
    let mut board = match config.seed {
        Some(seed) => Board::seeded(seed),
        None => Board::new(),
    };
    for _ in 1..config.wheel_count {
        board.add_wheel();
    }
    board.set_palette(&config.palette_id, "");
    board
}

#[hook]
pub fn use_board(config: &PickerConfig) -> BoardHandle {
    let board = use_mut_ref(|| build_board(config));
    let motions = use_mut_ref(HashMap::new);
    let refresh = use_force_update();

    BoardHandle {
        board,
        motions,
        refresh,
    }
}

impl BoardHandle {
    pub fn board(&self) -> Ref<'_, Board> {
        self.board.borrow()
    }

    pub fn rotation(&self, id: WheelId) -> f64 {
        self.motions
            .borrow()
            .get(&id)
            .map(WheelMotion::displayed_deg)
            .unwrap_or(0.0)
    }

    pub fn refresh(&self) {
        self.refresh.force_update();
    }

    pub fn start_all(&self) {
        let commits = self.board.borrow_mut().start_or_redo_all();
        for spin in commits {
            self.launch(spin);
        }
        self.refresh();
    }

    pub fn reset_all(&self) {
        self.board.borrow_mut().reset_all();
        self.refresh();
    }

    pub fn add_wheel(&self) {
        self.board.borrow_mut().add_wheel();
        self.refresh();
    }

    pub fn remove_wheel(&self, id: WheelId) {
        if self.board.borrow_mut().remove_wheel(id) {
            // dropping the motion cancels any frame still queued for it
            self.motions.borrow_mut().remove(&id);
        }
        self.refresh();
    }

    pub fn edit_wheel(&self, id: WheelId, text: &str) {
        self.board.borrow_mut().edit_wheel(id, text);
        self.refresh();
    }

    pub fn set_palette(&self, palette_id: &str, custom_text: &str) {
        self.board.borrow_mut().set_palette(palette_id, custom_text);
        self.refresh();
    }

    /// Plans the committed spin from the wheel's last committed rotation
    /// and hands it to the animation driver.
    fn launch(&self, spin: SpinCommitted) {
        let (start_deg, plan, superseded) = {
            let mut motions = self.motions.borrow_mut();
            let motion = motions.entry(spin.wheel_id).or_default();
            let plan = self.board.borrow_mut().plan_rotation(&spin, motion.plan_origin());
            let superseded = motion.commit(spin.clone(), &plan);
            (motion.displayed_deg(), plan, superseded)
        };

        // the old animation stops here; its completion is still reported
        if let Some(old) = superseded {
            self.board.borrow_mut().settle(old.wheel_id, old.spin_id, &old.name);
        }

        log::debug!(
            "wheel {}: animating spin {} to {:.1}deg over {}ms",
            spin.wheel_id,
            spin.spin_id,
            plan.target_rotation_deg,
            plan.duration_ms
        );
        animation::run(self.clone(), spin, plan, start_deg);
    }

    /// Whether `spin_id` is still the animation driving wheel `id`.
    pub(crate) fn is_active(&self, id: WheelId, spin_id: SpinId) -> bool {
        self.motions
            .borrow()
            .get(&id)
            .map(|m| m.is_driving(spin_id))
            .unwrap_or(false)
    }

    pub(crate) fn set_displayed(&self, id: WheelId, deg: f64) {
        if let Some(motion) = self.motions.borrow_mut().get_mut(&id) {
            motion.set_displayed(deg);
        }
    }

    pub(crate) fn store_frame(&self, id: WheelId, frame: AnimationFrame) {
        if let Some(motion) = self.motions.borrow_mut().get_mut(&id) {
            motion.frame = Some(frame);
        }
    }

    /// Ends the animation for `spin` and reports it to the board, once.
    pub(crate) fn finish(&self, spin: &SpinCommitted) {
        let finished = self
            .motions
            .borrow_mut()
            .get_mut(&spin.wheel_id)
            .map(|m| m.finish(spin.spin_id))
            .unwrap_or(false);

        if finished {
            self.board
                .borrow_mut()
                .settle(spin.wheel_id, spin.spin_id, &spin.name);
        } else {
            log::debug!("wheel {}: spin {} already reported", spin.wheel_id, spin.spin_id);
        }
        self.refresh();
    }
}
