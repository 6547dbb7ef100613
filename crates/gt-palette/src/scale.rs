use gt_core::geometry::{PixelRect, ScaleFactors};

/// Facteurs d'échelle pour faire tenir l'image dans la grille du terminal.
///
/// `x = image_w / (term_w * ratio)`, `y = image_h / (term_h * ratio)`.
/// Si l'un des deux passe sous 1, n'est pas fini, ou si une cellule couvre
/// moins de deux lignes de pixels (`y * ratio < 2`), les deux retombent sur
/// [`ScaleFactors::FALLBACK`]. Chaque demi-cellule couvre alors au moins un
/// pixel : aucune fenêtre d'échantillonnage n'est vide.
///
/// # Example
/// ```
/// use gt_palette::scale::compute_scale;
/// use gt_core::geometry::ScaleFactors;
/// let s = compute_scale(400, 200, 100, 50, 2.0);
/// assert_eq!(s, ScaleFactors { x: 2.0, y: 2.0 });
/// assert_eq!(compute_scale(10, 10, 80, 24, 1.0), ScaleFactors::FALLBACK);
/// // y = 1.0 : une seule ligne de pixels par cellule
/// assert_eq!(compute_scale(2, 2, 2, 2, 1.0), ScaleFactors::FALLBACK);
/// ```
#[must_use]
pub fn compute_scale(image_w: u32, image_h: u32, term_w: u16, term_h: u16, ratio: f64) -> ScaleFactors {
    let x = f64::from(image_w) / (f64::from(term_w) * ratio);
    let y = f64::from(image_h) / (f64::from(term_h) * ratio);

    // NaN échoue aussi à ces comparaisons
    if !(x.is_finite() && y.is_finite() && x >= 1.0 && y >= 1.0 && y * ratio >= 2.0) {
        log::debug!("Échelle {x:.3}×{y:.3} dégénérée, repli sur 1×2");
        return fallback(ratio);
    }
    ScaleFactors { x, y }
}

/// [`ScaleFactors::FALLBACK`], hauteur relevée si `ratio < 1` pour garder
/// deux lignes de pixels par cellule.
fn fallback(ratio: f64) -> ScaleFactors {
    let mut scale = ScaleFactors::FALLBACK;
    if ratio.is_finite() && ratio > 0.0 && scale.y * ratio < 2.0 {
        scale.y = 2.0 / ratio;
        if scale.y * ratio < 2.0 {
            scale.y = scale.y.next_up();
        }
    }
    scale
}

/// Rectangle source couvert par la cellule (col, row).
///
/// `start = (col·sx, row·sy)`, `end = (start_x + sx, start_y + sy·ratio)`,
/// tronqués en coordonnées pixel entières.
///
/// # Example
/// ```
/// use gt_core::geometry::{PixelRect, ScaleFactors};
/// use gt_palette::scale::cell_rect;
/// let rect = cell_rect(2, 1, ScaleFactors { x: 1.5, y: 2.0 }, 1.0);
/// assert_eq!(rect, PixelRect::new(3, 2, 4, 4));
/// ```
#[inline(always)]
#[must_use]
pub fn cell_rect(col: u16, row: u16, scale: ScaleFactors, ratio: f64) -> PixelRect {
    let start_x = f64::from(col) * scale.x;
    let start_y = f64::from(row) * scale.y;
    let end_x = start_x + scale.x;
    let end_y = start_y + scale.y * ratio;
    PixelRect::new(start_x as u32, start_y as u32, end_x as u32, end_y as u32)
}
