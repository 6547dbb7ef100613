/// Color approximation engine for gifterm.
///
/// Dominant-color detection, per-cell averaging with background
/// suppression, 256-color quantization and grid scaling.
pub mod average;
pub mod background;
pub mod dominant;
pub mod grid;
pub mod quantize;
pub mod scale;

pub use average::cell_average_color;
pub use dominant::dominant_color;
pub use grid::{CellColors, CellGrid, FrameSampler};
pub use quantize::Palette;
pub use scale::{cell_rect, compute_scale};
