use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::names::parse_names;
use crate::spin::{resolve, EmptySelectionError, SpinRng};

/// Stable identity of a wheel for its whole lifetime.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WheelId(Uuid);

impl WheelId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WheelId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WheelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Token issued once per spin initiation. Two spins never share one,
/// even when they land on the same index.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpinId(Uuid);

impl SpinId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SpinId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SpinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelPhase {
    #[default]
    Idle,
    Spinning,
    Settled,
}

/// Emitted when a spin is committed. The rendering layer consumes it
/// once, animates, then hands `spin_id` and `name` back to `settle`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinCommitted {
    pub wheel_id: WheelId,
    pub spin_id: SpinId,
    pub selected_index: usize,
    pub segment_count: usize,
    /// `names[selected_index]` captured at commit time.
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Wheel {
    pub id: WheelId,
    raw_input: String,
    names: Vec<String>,
    pub selected_index: Option<usize>,
    pub spin_id: Option<SpinId>,
    pub last_result: Option<String>,
    pub error: Option<String>,
    phase: WheelPhase,
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new()
    }
}

impl Wheel {
    pub fn new() -> Self {
        Self {
            id: WheelId::new(),
            raw_input: String::new(),
            names: Vec::new(),
            selected_index: None,
            spin_id: None,
            last_result: None,
            error: None,
            phase: WheelPhase::Idle,
        }
    }

    /// Text exactly as typed.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Names parsed from `raw_input`; only `edit` and `reset` change them.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn phase(&self) -> WheelPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == WheelPhase::Spinning
    }

    /// Index to highlight: the winner once it has been revealed.
    pub fn highlighted_index(&self) -> Option<usize> {
        match self.phase {
            WheelPhase::Spinning => None,
            _ if self.names.is_empty() => None,
            _ => self.selected_index,
        }
    }

    /// Replaces the input text and re-derives `names`.
    ///
    /// A spin in flight survives an edit that leaves the parsed list
    /// unchanged. If the list changed, the pending spin is invalidated so
    /// its late `settle` is ignored and nothing is revealed. A settled
    /// selection no longer points at the winner once the list changes,
    /// so it is dropped too; `last_result` keeps the revealed name.
    pub fn edit(&mut self, text: &str) {
        let names = parse_names(text);
        let changed = names != self.names;

        self.raw_input = text.to_string();
        self.names = names;
        self.error = None;

        if !changed {
            return;
        }

        if self.phase == WheelPhase::Spinning {
            log::debug!(
                "wheel {}: names edited mid-spin, dropping spin {:?}",
                self.id,
                self.spin_id
            );
            self.spin_id = None;
            self.last_result = None;
            self.phase = WheelPhase::Idle;
        }
        self.selected_index = None;
    }

    /// Starts a new spin, or redoes one.
    ///
    /// On an empty list the error is recorded on the wheel and the
    /// current selection and spin id are left untouched.
    pub fn start_or_redo<R: SpinRng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<SpinCommitted, EmptySelectionError> {
        let index = match resolve(&self.names, rng) {
            Ok(index) => index,
            Err(err) => {
                self.error = Some(err.to_string());
                self.last_result = None;
                return Err(err);
            }
        };

        let spin_id = SpinId::new();
        self.selected_index = Some(index);
        self.spin_id = Some(spin_id);
        self.last_result = None;
        self.error = None;
        self.phase = WheelPhase::Spinning;

        log::debug!("wheel {}: spin {} selected index {}", self.id, spin_id, index);

        Ok(SpinCommitted {
            wheel_id: self.id,
            spin_id,
            selected_index: index,
            segment_count: self.names.len(),
            name: self.names[index].clone(),
        })
    }

    /// Reveals the result of `spin_id` once its animation has finished.
    ///
    /// Returns false (and changes nothing) when `spin_id` is not the
    /// pending spin. A reported name that disagrees with the committed
    /// selection is not revealed.
    pub fn settle(&mut self, spin_id: SpinId, reported_name: &str) -> bool {
        if self.phase != WheelPhase::Spinning || self.spin_id != Some(spin_id) {
            log::debug!("wheel {}: ignoring stale settle for spin {}", self.id, spin_id);
            return false;
        }

        let expected = self.selected_index.and_then(|i| self.names.get(i));
        self.last_result = match expected {
            Some(name) if name == reported_name => Some(name.clone()),
            _ => {
                log::warn!(
                    "wheel {}: spin {} reported {:?}, expected {:?}",
                    self.id,
                    spin_id,
                    reported_name,
                    expected
                );
                None
            }
        };
        self.phase = WheelPhase::Settled;
        true
    }

    pub fn reset(&mut self) {
        self.raw_input.clear();
        self.names.clear();
        self.selected_index = None;
        self.spin_id = None;
        self.last_result = None;
        self.error = None;
        self.phase = WheelPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin::testing::ScriptedRng;

    fn wheel_with(text: &str) -> Wheel {
        let mut wheel = Wheel::new();
        wheel.edit(text);
        wheel
    }

    #[test]
    fn test_new_wheel_is_idle_and_empty() {
        let wheel = Wheel::new();
        assert_eq!(wheel.phase(), WheelPhase::Idle);
        assert!(wheel.names.is_empty());
        assert!(wheel.selected_index.is_none());
        assert!(wheel.spin_id.is_none());
    }

    #[test]
    fn test_spin_then_settle_reveals_selected_name() {
        let mut wheel = wheel_with("A\nB\nC");
        let mut rng = ScriptedRng::picking(&[1]);

        let committed = wheel.start_or_redo(&mut rng).unwrap();
        assert_eq!(wheel.selected_index, Some(1));
        assert!(wheel.error.is_none());
        assert!(wheel.last_result.is_none());
        assert!(wheel.is_spinning());
        assert_eq!(committed.name, "B");
        assert_eq!(committed.segment_count, 3);

        assert!(wheel.settle(committed.spin_id, &committed.name));
        assert_eq!(wheel.last_result.as_deref(), Some("B"));
        assert_eq!(wheel.phase(), WheelPhase::Settled);
        assert_eq!(wheel.highlighted_index(), Some(1));
    }

    #[test]
    fn test_empty_wheel_sets_error_and_keeps_spin_state() {
        let mut wheel = Wheel::new();
        let mut rng = ScriptedRng::default();

        let err = wheel.start_or_redo(&mut rng).unwrap_err();
        assert_eq!(err, EmptySelectionError);
        assert_eq!(wheel.error.as_deref(), Some("Add at least one name"));
        assert!(wheel.selected_index.is_none());
        assert!(wheel.spin_id.is_none());
        assert_eq!(wheel.phase(), WheelPhase::Idle);
    }

    #[test]
    fn test_redo_issues_fresh_spin_id_for_same_index() {
        let mut wheel = wheel_with("Solo");
        let mut rng = ScriptedRng::default();

        let first = wheel.start_or_redo(&mut rng).unwrap();
        wheel.settle(first.spin_id, &first.name);
        let second = wheel.start_or_redo(&mut rng).unwrap();

        assert_eq!(first.selected_index, second.selected_index);
        assert_ne!(first.spin_id, second.spin_id);
        assert_eq!(wheel.spin_id, Some(second.spin_id));
        assert!(wheel.last_result.is_none());
    }

    #[test]
    fn test_stale_settle_is_ignored() {
        let mut wheel = wheel_with("A\nB");
        let mut rng = ScriptedRng::picking(&[0, 1]);

        let first = wheel.start_or_redo(&mut rng).unwrap();
        let second = wheel.start_or_redo(&mut rng).unwrap();

        assert!(!wheel.settle(first.spin_id, &first.name));
        assert!(wheel.last_result.is_none());
        assert!(wheel.is_spinning());

        assert!(wheel.settle(second.spin_id, &second.name));
        assert_eq!(wheel.last_result.as_deref(), Some("B"));

        // a second settle for the same spin is a no-op
        assert!(!wheel.settle(second.spin_id, &second.name));
    }

    #[test]
    fn test_edit_mid_spin_invalidates_pending_spin() {
        let mut wheel = wheel_with("A\nB\nC");
        let mut rng = ScriptedRng::picking(&[2]);
        let committed = wheel.start_or_redo(&mut rng).unwrap();

        wheel.edit("A");
        assert_eq!(wheel.phase(), WheelPhase::Idle);
        assert!(wheel.spin_id.is_none());
        assert!(wheel.selected_index.is_none());

        assert!(!wheel.settle(committed.spin_id, &committed.name));
        assert!(wheel.last_result.is_none());
    }

    #[test]
    fn test_cosmetic_edit_keeps_pending_spin() {
        let mut wheel = wheel_with("A\nB");
        let mut rng = ScriptedRng::picking(&[1]);
        let committed = wheel.start_or_redo(&mut rng).unwrap();

        wheel.edit("  A\n\nB  \n");
        assert!(wheel.is_spinning());
        assert!(wheel.settle(committed.spin_id, &committed.name));
        assert_eq!(wheel.last_result.as_deref(), Some("B"));
    }

    #[test]
    fn test_mismatched_report_is_not_revealed() {
        let mut wheel = wheel_with("A\nB");
        let mut rng = ScriptedRng::picking(&[0]);
        let committed = wheel.start_or_redo(&mut rng).unwrap();

        assert!(wheel.settle(committed.spin_id, "B"));
        assert!(wheel.last_result.is_none());
        assert_eq!(wheel.phase(), WheelPhase::Settled);
    }

    #[test]
    fn test_edit_after_settle_drops_highlight() {
        let mut wheel = wheel_with("A\nB\nC");
        let mut rng = ScriptedRng::picking(&[2]);
        let committed = wheel.start_or_redo(&mut rng).unwrap();
        wheel.settle(committed.spin_id, &committed.name);
        assert_eq!(wheel.highlighted_index(), Some(2));

        // same length, different names: "Z" never won
        wheel.edit("X\nY\nZ");
        assert_eq!(wheel.highlighted_index(), None);
        assert!(wheel.selected_index.is_none());
        assert_eq!(wheel.last_result.as_deref(), Some("C"));
        assert_eq!(wheel.names(), ["X", "Y", "Z"]);
        assert_eq!(wheel.raw_input(), "X\nY\nZ");
    }

    #[test]
    fn test_cosmetic_edit_after_settle_keeps_highlight() {
        let mut wheel = wheel_with("A\nB");
        let mut rng = ScriptedRng::picking(&[1]);
        let committed = wheel.start_or_redo(&mut rng).unwrap();
        wheel.settle(committed.spin_id, &committed.name);

        wheel.edit("A\n  B\n");
        assert_eq!(wheel.highlighted_index(), Some(1));
    }

    #[test]
    fn test_edit_clears_error_and_out_of_range_selection() {
        let mut wheel = wheel_with("A\nB\nC");
        let mut rng = ScriptedRng::picking(&[2]);
        let committed = wheel.start_or_redo(&mut rng).unwrap();
        wheel.settle(committed.spin_id, &committed.name);

        wheel.edit("A");
        assert!(wheel.selected_index.is_none());
        assert_eq!(wheel.last_result.as_deref(), Some("C"));

        wheel.edit("");
        assert!(wheel.start_or_redo(&mut rng).is_err());
        assert!(wheel.error.is_some());
        wheel.edit("Z");
        assert!(wheel.error.is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut wheel = wheel_with("A\nB");
        let id = wheel.id;
        let mut rng = ScriptedRng::default();
        let committed = wheel.start_or_redo(&mut rng).unwrap();

        wheel.reset();
        assert_eq!(wheel.id, id);
        assert!(wheel.raw_input.is_empty());
        assert!(wheel.names.is_empty());
        assert!(wheel.selected_index.is_none());
        assert!(wheel.spin_id.is_none());
        assert!(wheel.last_result.is_none());
        assert!(wheel.error.is_none());
        assert_eq!(wheel.phase(), WheelPhase::Idle);
        assert!(!wheel.settle(committed.spin_id, &committed.name));
    }
}
