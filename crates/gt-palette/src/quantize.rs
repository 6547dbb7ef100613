use gt_core::color::PaletteIndex;

/// Premier index du cube 6×6×6 dans la palette 256 couleurs.
pub const CUBE_BASE: u16 = 16;

/// Niveaux par canal dans le cube.
pub const CUBE_LEVELS: u16 = 6;

/// Niveau [0, 5] le plus proche d'un canal 8 bits : `round(v * 5 / 255)`.
///
/// # Example
/// ```
/// use gt_palette::quantize::channel_level;
/// assert_eq!(channel_level(0), 0);
/// assert_eq!(channel_level(128), 3);
/// assert_eq!(channel_level(255), 5);
/// ```
#[inline(always)]
#[must_use]
pub fn channel_level(v: u8) -> u16 {
    (u16::from(v) * (CUBE_LEVELS - 1) + 127) / 255
}

/// Mapping RGB → index de la palette 256 couleurs.
///
/// Par défaut l'index porte un décalage `+1` historique : le noir tombe sur
/// 17 et le blanc sur 232 (premier gris) au lieu de 16 et 231.
/// `legacy_offset: false` donne le cube standard.
///
/// # Example
/// ```
/// use gt_palette::quantize::Palette;
/// let legacy = Palette::default();
/// assert_eq!(legacy.index(255, 255, 255), 232);
/// let exact = Palette::new(false);
/// assert_eq!(exact.index(255, 255, 255), 231);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    legacy_offset: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Palette {
    #[must_use]
    pub const fn new(legacy_offset: bool) -> Self {
        Self { legacy_offset }
    }

    /// Quantize an 8-bit RGB triplet.
    #[inline(always)]
    #[must_use]
    pub fn index(&self, r: u8, g: u8, b: u8) -> PaletteIndex {
        let offset = u16::from(self.legacy_offset);
        let idx = CUBE_BASE
            + 36 * channel_level(r)
            + 6 * channel_level(g)
            + channel_level(b)
            + offset;
        // max = 16 + 180 + 30 + 5 + 1 = 232
        idx as PaletteIndex
    }

    /// Index du noir, utilisé pour les pixels de fond supprimés et les zones vides.
    #[inline(always)]
    #[must_use]
    pub fn black(&self) -> PaletteIndex {
        self.index(0, 0, 0)
    }
}
