use crate::color::PaletteIndex;

/// Destination des cellules rendues (écran du terminal).
///
/// Écrit uniquement par le thread de contrôle, une frame à la fois.
///
/// # Example
/// ```
/// use gt_core::traits::CellSink;
/// use gt_core::color::PaletteIndex;
///
/// struct NullSink;
/// impl CellSink for NullSink {
///     fn set_cell(&mut self, _col: u16, _row: u16, _glyph: char, _fg: PaletteIndex, _bg: PaletteIndex) {}
///     fn flush(&mut self) -> anyhow::Result<()> { Ok(()) }
/// }
/// ```
pub trait CellSink {
    /// Stage one cell: `fg` colors the glyph, `bg` the cell behind it.
    fn set_cell(&mut self, col: u16, row: u16, glyph: char, fg: PaletteIndex, bg: PaletteIndex);

    /// Pousse la frame complète vers le terminal.
    ///
    /// # Errors
    /// Returns an error if the terminal write fails.
    fn flush(&mut self) -> anyhow::Result<()>;
}

/// Événement d'entrée pertinent pour la lecture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// `q`, `Esc`, `Ctrl-C` ou `Ctrl-D`.
    Quit,
    /// Nouvelle taille du terminal (colonnes, lignes).
    Resize(u16, u16),
    /// Tout autre événement, ignoré.
    Other,
}

/// File d'événements clavier/resize, interrogée sans bloquer.
pub trait InputSource {
    /// Retourne le prochain événement en attente, ou `None` immédiatement.
    ///
    /// # Errors
    /// Returns an error if the underlying event stream fails.
    fn poll(&mut self) -> anyhow::Result<Option<InputEvent>>;
}
