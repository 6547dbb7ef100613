use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Pixel buffer length does not match the declared dimensions.
    #[error("Buffer de pixels invalide : attendu {expected} octets, reçu {found}")]
    BufferSize {
        /// Expected byte count (`width * height * 4`).
        expected: usize,
        /// Actual byte count.
        found: usize,
    },

    /// A frame does not share the animation's logical screen size.
    #[error("Frame {index} : {found_width}×{found_height} au lieu de {width}×{height}")]
    FrameSizeMismatch {
        /// Frame position in playback order.
        index: usize,
        /// Animation width.
        width: u32,
        /// Animation height.
        height: u32,
        /// Offending frame width.
        found_width: u32,
        /// Offending frame height.
        found_height: u32,
    },

    /// The animation holds no frame at all.
    #[error("Animation vide : aucune frame")]
    EmptyAnimation,
}
