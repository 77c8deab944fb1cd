use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::constants::{DEFAULT_PALETTE_ID, REDO_LABEL, START_LABEL};
use crate::palettes::{find_palette, resolve_colors};
use crate::rotation::{plan, RotationPlan};
use crate::spin::SpinRng;
use crate::wheel::{SpinCommitted, SpinId, Wheel, WheelId};

/// All wheels on the page plus the shared controls.
///
/// The board owns the random source used for every spin so a seeded
/// board replays the same outcomes.
#[derive(Debug, Clone)]
pub struct Board<R = SmallRng> {
    wheels: Vec<Wheel>,
    has_spun: bool,
    palette_id: String,
    custom_colors: String,
    colors: Vec<String>,
    rng: R,
}

impl Board<SmallRng> {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Board<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SpinRng> Board<R> {
    /// A board with one empty wheel and the default palette.
    pub fn with_rng(rng: R) -> Self {
        Self {
            wheels: vec![Wheel::new()],
            has_spun: false,
            palette_id: DEFAULT_PALETTE_ID.to_string(),
            custom_colors: String::new(),
            colors: resolve_colors(DEFAULT_PALETTE_ID, ""),
            rng,
        }
    }

    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    pub fn wheel(&self, id: WheelId) -> Option<&Wheel> {
        self.wheels.iter().find(|w| w.id == id)
    }

    fn wheel_mut(&mut self, id: WheelId) -> Option<&mut Wheel> {
        self.wheels.iter_mut().find(|w| w.id == id)
    }

    pub fn has_spun(&self) -> bool {
        self.has_spun
    }

    /// Label for the primary action. Cosmetic only.
    pub fn primary_label(&self) -> &'static str {
        if self.has_spun {
            REDO_LABEL
        } else {
            START_LABEL
        }
    }

    pub fn can_remove(&self) -> bool {
        self.wheels.len() > 1
    }

    pub fn palette_id(&self) -> &str {
        &self.palette_id
    }

    pub fn custom_colors(&self) -> &str {
        &self.custom_colors
    }

    /// Colors every wheel draws its segments with.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn add_wheel(&mut self) -> WheelId {
        let wheel = Wheel::new();
        let id = wheel.id;
        self.wheels.push(wheel);
        log::debug!("added wheel {} ({} total)", id, self.wheels.len());
        id
    }

    /// Removes a wheel. The last remaining wheel is never removed.
    pub fn remove_wheel(&mut self, id: WheelId) -> bool {
        if !self.can_remove() {
            log::debug!("not removing wheel {}: it is the only one", id);
            return false;
        }
        let before = self.wheels.len();
        self.wheels.retain(|w| w.id != id);
        self.wheels.len() != before
    }

    pub fn edit_wheel(&mut self, id: WheelId, text: &str) -> bool {
        match self.wheel_mut(id) {
            Some(wheel) => {
                wheel.edit(text);
                true
            }
            None => false,
        }
    }

    /// Spins every wheel. A wheel without names records its own error
    /// and does not stop the others.
    pub fn start_or_redo_all(&mut self) -> Vec<SpinCommitted> {
        self.has_spun = true;
        let rng = &mut self.rng;
        let committed: Vec<SpinCommitted> = self
            .wheels
            .iter_mut()
            .filter_map(|wheel| wheel.start_or_redo(rng).ok())
            .collect();
        log::info!("spun {} of {} wheels", committed.len(), self.wheels.len());
        committed
    }

    /// Plans the animation for a committed spin from the wheel's last
    /// committed rotation.
    pub fn plan_rotation(
        &mut self,
        spin: &SpinCommitted,
        current_rotation_deg: f64,
    ) -> RotationPlan {
        plan(current_rotation_deg, spin.segment_count, spin.selected_index, &mut self.rng)
    }

    /// Reports that the animation for `spin_id` on wheel `id` finished.
    pub fn settle(&mut self, id: WheelId, spin_id: SpinId, reported_name: &str) -> bool {
        self.wheel_mut(id)
            .map(|wheel| wheel.settle(spin_id, reported_name))
            .unwrap_or(false)
    }

    pub fn reset_all(&mut self) {
        for wheel in &mut self.wheels {
            wheel.reset();
        }
        self.has_spun = false;
    }

    /// Selects a palette. `custom_text` is only consulted for the custom
    /// slot; unknown ids resolve to the first catalog palette.
    pub fn set_palette(&mut self, palette_id: &str, custom_text: &str) {
        self.palette_id = find_palette(palette_id).id.to_string();
        self.custom_colors = custom_text.to_string();
        self.colors = resolve_colors(&self.palette_id, &self.custom_colors);
    }
}
