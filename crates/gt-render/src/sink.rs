use anyhow::Result;
use gt_core::color::PaletteIndex;
use gt_core::traits::CellSink;
use ratatui::DefaultTerminal;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

/// Écrit une cellule demi-bloc dans un `ratatui::Buffer`.
///
/// Hors de la zone du buffer → ignorée.
///
/// # Example
/// ```
/// use gt_render::sink::write_cell;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use ratatui::style::Color;
///
/// let mut buf = Buffer::empty(Rect::new(0, 0, 2, 2));
/// write_cell(&mut buf, 1, 0, '▄', 22, 17);
/// let cell = buf.cell((1, 0)).unwrap();
/// assert_eq!(cell.symbol(), "▄");
/// assert_eq!(cell.fg, Color::Indexed(22));
/// ```
#[inline]
pub fn write_cell(buf: &mut Buffer, col: u16, row: u16, glyph: char, fg: PaletteIndex, bg: PaletteIndex) {
    if let Some(cell) = buf.cell_mut((col, row)) {
        cell.set_char(glyph)
            .set_fg(Color::Indexed(fg))
            .set_bg(Color::Indexed(bg));
    }
}

/// Copie la grille préparée dans le buffer de la frame ratatui.
///
/// Seule l'intersection des deux zones est copiée.
pub fn copy_staged(staged: &Buffer, target: &mut Buffer, area: Rect) {
    let height = staged.area.height.min(area.height);
    let width = staged.area.width.min(area.width);
    for y in 0..height {
        for x in 0..width {
            if let (Some(src), Some(dst)) = (
                staged.cell((staged.area.x + x, staged.area.y + y)),
                target.cell_mut((area.x + x, area.y + y)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

/// Sink terminal : les cellules sont préparées hors écran puis poussées
/// d'un bloc à chaque `flush` via `Terminal::draw`.
pub struct RatatuiSink {
    terminal: DefaultTerminal,
    staged: Buffer,
}

impl RatatuiSink {
    /// Wrap an initialised terminal with a `columns × rows` staging grid.
    #[must_use]
    pub fn new(terminal: DefaultTerminal, columns: u16, rows: u16) -> Self {
        Self {
            terminal,
            staged: Buffer::empty(Rect::new(0, 0, columns, rows)),
        }
    }
}

impl CellSink for RatatuiSink {
    fn set_cell(&mut self, col: u16, row: u16, glyph: char, fg: PaletteIndex, bg: PaletteIndex) {
        write_cell(&mut self.staged, col, row, glyph, fg, bg);
    }

    fn flush(&mut self) -> Result<()> {
        let staged = &self.staged;
        self.terminal.draw(|frame| {
            let area = frame.area();
            copy_staged(staged, frame.buffer_mut(), area);
        })?;
        Ok(())
    }
}
