/// Facteurs d'échelle cellule terminal → pixels source.
///
/// Invariant : `x >= 1.0`, `y >= 1.0` et `y * ratio >= 2.0` (deux lignes de
/// pixels par cellule), garantis par `gt_palette::scale::compute_scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactors {
    /// Pixels source par colonne.
    pub x: f64,
    /// Pixels source par ligne.
    pub y: f64,
}

impl ScaleFactors {
    /// Fenêtre de repli quand l'image est plus petite que la grille.
    pub const FALLBACK: Self = Self { x: 1.0, y: 2.0 };
}

/// Rectangle demi-ouvert `[start, end)` en coordonnées pixel source.
///
/// # Example
/// ```
/// use gt_core::geometry::PixelRect;
/// let rect = PixelRect::new(0, 0, 2, 4);
/// let (upper, lower) = rect.split_half();
/// assert_eq!(upper, PixelRect::new(0, 0, 2, 2));
/// assert_eq!(lower, PixelRect::new(0, 2, 2, 4));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelRect {
    pub start_x: u32,
    pub start_y: u32,
    pub end_x: u32,
    pub end_y: u32,
}

impl PixelRect {
    #[must_use]
    pub const fn new(start_x: u32, start_y: u32, end_x: u32, end_y: u32) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }

    /// `true` if the rectangle holds no pixel.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end_x <= self.start_x || self.end_y <= self.start_y
    }

    /// Pixel count (0 when empty).
    #[inline]
    #[must_use]
    pub fn area(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        u64::from(self.end_x - self.start_x) * u64::from(self.end_y - self.start_y)
    }

    /// Intersect with `[0, width) × [0, height)`.
    #[inline]
    #[must_use]
    pub fn clip(&self, width: u32, height: u32) -> Self {
        Self {
            start_x: self.start_x.min(width),
            start_y: self.start_y.min(height),
            end_x: self.end_x.min(width),
            end_y: self.end_y.min(height),
        }
    }

    /// Split at the vertical midpoint `(start_y + end_y) / 2`.
    ///
    /// The upper half feeds a half-block cell's background, the lower half its foreground.
    #[inline]
    #[must_use]
    pub fn split_half(&self) -> (Self, Self) {
        let mid = ((u64::from(self.start_y) + u64::from(self.end_y)) / 2) as u32;
        (
            Self {
                end_y: mid,
                ..*self
            },
            Self {
                start_y: mid,
                ..*self
            },
        )
    }
}
