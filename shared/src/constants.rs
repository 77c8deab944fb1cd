pub const EMPTY_NAMES_ERROR: &str = "Add at least one name";

pub const START_LABEL: &str = "Start";
pub const REDO_LABEL: &str = "Redo";

pub const MIN_FULL_SPINS: u32 = 6;
pub const MAX_FULL_SPINS: u32 = 8;
pub const MIN_SPIN_DURATION_MS: u32 = 2600;
pub const MAX_SPIN_DURATION_MS: u32 = 3400; // exclusive

pub const DEFAULT_PALETTE_ID: &str = "tailwind-vivid";
pub const CUSTOM_PALETTE_ID: &str = "custom";
pub const CUSTOM_FALLBACK_COLORS: [&str; 2] = ["#3b82f6", "#f59e0b"];
pub const DEFAULT_WHEEL_COLORS: [&str; 5] = [
    "#ef4444", "#f59e0b", "#10b981", "#0ea5e9", "#8b5cf6",
];
pub const EMPTY_SEGMENT_COLOR: &str = "#e5e7eb";
pub const DIMMED_ALPHA_SUFFIX: &str = "26";

pub const WHEEL_VIEW_SIZE: f64 = 180.0;
pub const WHEEL_RADIUS: f64 = 88.0;
pub const LABEL_RADIUS: f64 = 60.0;
