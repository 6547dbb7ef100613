/// Index dans la palette 256 couleurs du terminal.
///
/// 0–15 : couleurs système, 16–231 : cube 6×6×6, 232–255 : niveaux de gris.
pub type PaletteIndex = u8;

/// Pixel RGBA 8 bits par canal.
///
/// # Example
/// ```
/// use gt_core::color::Rgba;
/// let red = Rgba::new(255, 0, 0, 255);
/// assert_eq!(red.rgb16(), (0xffff, 0, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba {
    /// Build a color from its four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Read a pixel from a 4-byte RGBA slice.
    ///
    /// Short slices yield transparent black.
    #[inline(always)]
    #[must_use]
    pub fn from_slice(px: &[u8]) -> Self {
        match px {
            [r, g, b, a, ..] => Self::new(*r, *g, *b, *a),
            _ => Self::default(),
        }
    }

    /// Expand a channel to 16 bits (`v * 0x101`), so 0xff maps to 0xffff.
    #[inline(always)]
    #[must_use]
    pub const fn widen(v: u8) -> u16 {
        v as u16 * 0x101
    }

    /// RGB triplet in 16-bit precision, used for sentinel comparison.
    #[inline(always)]
    #[must_use]
    pub const fn rgb16(self) -> (u16, u16, u16) {
        (Self::widen(self.r), Self::widen(self.g), Self::widen(self.b))
    }

    /// `true` when both colors share the same 16-bit RGB triplet (alpha ignored).
    ///
    /// # Example
    /// ```
    /// use gt_core::color::Rgba;
    /// assert!(Rgba::new(10, 20, 30, 0).same_rgb(Rgba::opaque(10, 20, 30)));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn same_rgb(self, other: Self) -> bool {
        self.rgb16() == other.rgb16()
    }

    /// Same pixel with RGB forced to black, alpha preserved.
    #[inline(always)]
    #[must_use]
    pub const fn blacked_out(self) -> Self {
        Self { r: 0, g: 0, b: 0, a: self.a }
    }
}
