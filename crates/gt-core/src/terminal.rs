/// Rapport hauteur/largeur de cellule par défaut quand le terminal ne
/// rapporte pas sa taille en pixels.
pub const DEFAULT_CELL_RATIO: f64 = 7.0 / 3.0;

/// Grille par défaut quand aucune taille n'est disponible.
pub const DEFAULT_COLUMNS: u16 = 80;
/// See [`DEFAULT_COLUMNS`].
pub const DEFAULT_ROWS: u16 = 24;

/// Dimensions du terminal, résolues une fois avant la lecture.
///
/// # Example
/// ```
/// use gt_core::terminal::TerminalInfo;
/// let info = TerminalInfo::from_window(80, 24, 640, 384);
/// assert_eq!(info.ratio, 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerminalInfo {
    /// Colonnes (cellules par ligne).
    pub columns: u16,
    /// Lignes de texte.
    pub rows: u16,
    /// Correction d'aspect appliquée au mapping cellule → pixels.
    pub ratio: f64,
}

impl Default for TerminalInfo {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            ratio: DEFAULT_CELL_RATIO,
        }
    }
}

impl TerminalInfo {
    /// Build from a window size report.
    ///
    /// The ratio is `(height / rows) / (width / columns)` with whole-pixel
    /// cell sizes; it falls back to [`DEFAULT_CELL_RATIO`] when the pixel
    /// size is unknown or a cell would be narrower than one pixel.
    #[must_use]
    pub fn from_window(columns: u16, rows: u16, width_px: u16, height_px: u16) -> Self {
        let ratio = if width_px > 0 && height_px > 0 && columns > 0 && rows > 0 {
            let cell_w = width_px / columns;
            let cell_h = height_px / rows;
            if cell_w > 0 && cell_h > 0 {
                f64::from(cell_h) / f64::from(cell_w)
            } else {
                DEFAULT_CELL_RATIO
            }
        } else {
            DEFAULT_CELL_RATIO
        };
        Self {
            columns,
            rows,
            ratio,
        }
    }

    /// Total number of cells in the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.columns) * usize::from(self.rows)
    }
}
