use gt_core::color::{PaletteIndex, Rgba};
use gt_core::frame::Frame;
use gt_core::geometry::ScaleFactors;
use rayon::prelude::*;

use crate::average::cell_average_color;
use crate::quantize::Palette;
use crate::scale::cell_rect;

/// Couleurs d'une cellule demi-bloc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellColors {
    /// Moitié basse de la cellule (couleur du glyphe).
    pub fg: PaletteIndex,
    /// Moitié haute de la cellule (fond).
    pub bg: PaletteIndex,
}

/// Grille de cellules pré-allouée, réutilisée à chaque frame.
///
/// # Example
/// ```
/// use gt_palette::grid::CellGrid;
/// let grid = CellGrid::new(80, 24);
/// assert_eq!(grid.cells.len(), 80 * 24);
/// ```
#[derive(Clone, Debug)]
pub struct CellGrid {
    /// Flat array of cells, row-major.
    pub cells: Vec<CellColors>,
    /// Width in cells.
    pub columns: u16,
    /// Height in cells.
    pub rows: u16,
}

impl CellGrid {
    #[must_use]
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            cells: vec![CellColors::default(); usize::from(columns) * usize::from(rows)],
            columns,
            rows,
        }
    }

    /// Cell at (col, row).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, col: u16, row: u16) -> CellColors {
        self.cells[usize::from(row) * usize::from(self.columns) + usize::from(col)]
    }

    /// Cellules en ordre ligne par ligne : `(col, row, couleurs)`.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, CellColors)> + '_ {
        let columns = usize::from(self.columns).max(1);
        self.cells.iter().enumerate().map(move |(i, c)| {
            ((i % columns) as u16, (i / columns) as u16, *c)
        })
    }
}

/// Échantillonne une frame sur la grille du terminal.
///
/// Construit une fois avant la lecture : couleur dominante, échelle et
/// palette restent fixes pour toute la session.
///
/// # Example
/// ```
/// use gt_core::color::Rgba;
/// use gt_core::frame::Frame;
/// use gt_core::geometry::ScaleFactors;
/// use gt_palette::{CellGrid, FrameSampler, Palette};
///
/// let sampler = FrameSampler::new(Rgba::opaque(0, 0, 0), ScaleFactors { x: 1.0, y: 2.0 }, 1.0, Palette::default());
/// let frame = Frame::filled(4, 4, Rgba::opaque(255, 255, 255));
/// let mut grid = CellGrid::new(4, 2);
/// sampler.sample_frame(&frame, &mut grid);
/// assert_eq!(grid.get(3, 1).fg, 232);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FrameSampler {
    dominant: Rgba,
    scale: ScaleFactors,
    ratio: f64,
    palette: Palette,
}

impl FrameSampler {
    #[must_use]
    pub fn new(dominant: Rgba, scale: ScaleFactors, ratio: f64, palette: Palette) -> Self {
        Self {
            dominant,
            scale,
            ratio,
            palette,
        }
    }

    /// Couleurs de la cellule (col, row) : moitié haute → bg, moitié basse → fg.
    #[inline]
    #[must_use]
    pub fn sample_cell(&self, frame: &Frame, col: u16, row: u16) -> CellColors {
        let (upper, lower) = cell_rect(col, row, self.scale, self.ratio).split_half();
        CellColors {
            fg: cell_average_color(frame, self.dominant, lower, self.palette),
            bg: cell_average_color(frame, self.dominant, upper, self.palette),
        }
    }

    /// Remplit toute la grille, une ligne de cellules par tâche rayon.
    ///
    /// Retourne une fois toutes les cellules calculées : c'est la barrière
    /// avant le flush de la frame.
    pub fn sample_frame(&self, frame: &Frame, grid: &mut CellGrid) {
        let columns = usize::from(grid.columns).max(1);
        grid.cells
            .par_chunks_mut(columns)
            .enumerate()
            .for_each(|(row, cells)| {
                for (col, cell) in cells.iter_mut().enumerate() {
                    *cell = self.sample_cell(frame, col as u16, row as u16);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_map_to_bg_and_fg() {
        // ligne 0 blanche, ligne 1 bleue ; une cellule couvre 2 lignes
        let mut frame = Frame::filled(1, 2, Rgba::opaque(0, 0, 255));
        frame.set_pixel(0, 0, Rgba::opaque(255, 255, 255));
        let sampler = FrameSampler::new(Rgba::opaque(1, 1, 1), ScaleFactors::FALLBACK, 1.0, Palette::default());
        let cell = sampler.sample_cell(&frame, 0, 0);
        assert_eq!(cell, CellColors { fg: 22, bg: 232 });
    }

    #[test]
    fn parallel_fill_matches_sequential() {
        let mut frame = Frame::new(37, 23);
        for x in 0..37 {
            for y in 0..23 {
                frame.set_pixel(x, y, Rgba::opaque((x * 7) as u8, (y * 11) as u8, ((x + y) * 3) as u8));
            }
        }
        let sampler = FrameSampler::new(Rgba::opaque(0, 0, 0), ScaleFactors { x: 1.4, y: 1.1 }, 7.0 / 3.0, Palette::default());
        let mut grid = CellGrid::new(26, 9);
        sampler.sample_frame(&frame, &mut grid);
        for (col, row, cell) in grid.iter() {
            assert_eq!(cell, sampler.sample_cell(&frame, col, row), "cell {col},{row}");
        }
    }

    #[test]
    fn solid_frame_fills_both_halves_of_every_cell() {
        let frame = Frame::filled(200, 48, Rgba::opaque(0, 0, 255));
        let ratio = 1.6;
        let scale = crate::scale::compute_scale(200, 48, 80, 24, ratio);
        let sampler = FrameSampler::new(Rgba::opaque(255, 0, 0), scale, ratio, Palette::default());
        let mut grid = CellGrid::new(80, 24);
        sampler.sample_frame(&frame, &mut grid);
        for (col, row, cell) in grid.iter() {
            assert_eq!(cell, CellColors { fg: 22, bg: 22 }, "cell {col},{row}");
        }
    }

    #[test]
    fn iter_is_row_major() {
        let grid = CellGrid::new(3, 2);
        let coords: Vec<(u16, u16)> = grid.iter().map(|(c, r, _)| (c, r)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn empty_grid_is_fine() {
        let sampler = FrameSampler::new(Rgba::default(), ScaleFactors::FALLBACK, 1.0, Palette::default());
        let mut grid = CellGrid::new(0, 5);
        sampler.sample_frame(&Frame::new(2, 2), &mut grid);
        assert!(grid.cells.is_empty());
    }
}
