use crate::color::Rgba;
use crate::error::CoreError;

/// Délai par défaut d'une frame GIF sans délai déclaré (ms).
pub const DEFAULT_FRAME_DELAY_MS: u32 = 100;

/// Une frame décodée, composée sur tout l'écran logique de l'animation.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel.
///
/// # Example
/// ```
/// use gt_core::frame::Frame;
/// let frame = Frame::new(10, 10);
/// assert_eq!(frame.data.len(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Délai d'affichage déclaré par la source, en millisecondes.
    pub delay_ms: u32,
}

impl Frame {
    /// Crée une frame transparente aux dimensions données.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
            delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }

    /// Frame remplie d'une couleur unique.
    ///
    /// # Example
    /// ```
    /// use gt_core::color::Rgba;
    /// use gt_core::frame::Frame;
    /// let frame = Frame::filled(2, 2, Rgba::opaque(255, 0, 0));
    /// assert_eq!(frame.pixel(1, 1), Rgba::opaque(255, 0, 0));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        let mut frame = Self::new(width, height);
        for px in frame.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        frame
    }

    /// Wrap an existing RGBA buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::BufferSize`] if `data` is not `width * height * 4` bytes long.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>, delay_ms: u32) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(CoreError::BufferSize {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            delay_ms,
        })
    }

    /// Accès au pixel (x, y). Hors limites → noir transparent.
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return Rgba::default();
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data
            .get(idx..idx + 4)
            .map_or_else(Rgba::default, Rgba::from_slice)
    }

    /// Écrit le pixel (x, y). Hors limites → no-op.
    #[inline(always)]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        if let Some(px) = self.data.get_mut(idx..idx + 4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }
}

/// Séquence ordonnée de frames partageant une taille globale.
///
/// Invariant : au moins une frame, dimensions non nulles, toutes les frames
/// aux dimensions de l'animation.
///
/// # Example
/// ```
/// use gt_core::color::Rgba;
/// use gt_core::frame::{AnimatedImage, Frame};
/// let image = AnimatedImage::new(2, 2, vec![Frame::filled(2, 2, Rgba::opaque(0, 0, 255))]).unwrap();
/// assert_eq!(image.frame_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct AnimatedImage {
    frames: Vec<Frame>,
    width: u32,
    height: u32,
}

impl AnimatedImage {
    /// Validate and assemble an animation.
    ///
    /// # Errors
    /// Returns an error on zero dimensions, an empty frame list, or a frame
    /// whose size differs from the logical screen.
    pub fn new(width: u32, height: u32, frames: Vec<Frame>) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        if frames.is_empty() {
            return Err(CoreError::EmptyAnimation);
        }
        if let Some((index, f)) = frames
            .iter()
            .enumerate()
            .find(|(_, f)| f.width != width || f.height != height)
        {
            return Err(CoreError::FrameSizeMismatch {
                index,
                width,
                height,
                found_width: f.width,
                found_height: f.height,
            });
        }
        Ok(Self {
            frames,
            width,
            height,
        })
    }

    /// Logical screen width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical screen height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Frames in playback order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Mutable access for the one-shot background pass done before playback.
    pub fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }

    /// Number of frames (always ≥ 1).
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame 0, source of the dominant color.
    #[must_use]
    pub fn first_frame(&self) -> &Frame {
        &self.frames[0]
    }
}
