pub mod board;
pub mod constants;
pub mod names;
pub mod palettes;
pub mod rotation;
pub mod segments;
pub mod spin;
pub mod wheel;

pub use board::Board;
pub use palettes::{Palette, PALETTES};
pub use rotation::RotationPlan;
pub use spin::{EmptySelectionError, SpinRng};
pub use wheel::{SpinCommitted, SpinId, Wheel, WheelId, WheelPhase};
