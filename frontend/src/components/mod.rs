pub mod palette_picker;

pub use palette_picker::PalettePicker;
