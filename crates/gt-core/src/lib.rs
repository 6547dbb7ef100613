/// Shared types, traits, and configuration for gifterm.
///
/// This crate holds the frame model, the cell geometry, the playback
/// configuration and the collaborator traits used across the workspace.

pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod terminal;
pub mod traits;

pub use color::{PaletteIndex, Rgba};
pub use config::PlaybackConfig;
pub use error::CoreError;
pub use frame::{AnimatedImage, Frame};
pub use geometry::{PixelRect, ScaleFactors};
pub use terminal::TerminalInfo;
