use gt_core::color::{PaletteIndex, Rgba};
use gt_core::frame::Frame;
use gt_core::geometry::PixelRect;

use crate::quantize::Palette;

/// Couleur moyenne 8 bits d'une région, fond supprimé.
///
/// Chaque pixel dont le triplet RGB 16 bits égale celui de `dominant` compte
/// comme noir. La région est d'abord rognée aux limites de la frame ;
/// retourne `None` si elle ne contient aucun pixel.
///
/// # Example
/// ```
/// use gt_core::color::Rgba;
/// use gt_core::frame::Frame;
/// use gt_core::geometry::PixelRect;
/// use gt_palette::average::average_rgb;
///
/// let frame = Frame::filled(4, 4, Rgba::opaque(200, 100, 0));
/// let avg = average_rgb(&frame, Rgba::opaque(0, 0, 0), PixelRect::new(0, 0, 2, 2));
/// assert_eq!(avg, Some((200, 100, 0)));
/// ```
#[must_use]
pub fn average_rgb(frame: &Frame, dominant: Rgba, rect: PixelRect) -> Option<(u8, u8, u8)> {
    let rect = rect.clip(frame.width, frame.height);
    let count = rect.area();
    if count == 0 {
        return None;
    }

    let mut total = [0u64; 3];
    for y in rect.start_y..rect.end_y {
        for x in rect.start_x..rect.end_x {
            let mut px = frame.pixel(x, y);
            if px.same_rgb(dominant) {
                px = px.blacked_out();
            }
            let (r, g, b) = px.rgb16();
            total[0] += u64::from(r >> 8);
            total[1] += u64::from(g >> 8);
            total[2] += u64::from(b >> 8);
        }
    }

    Some((
        (total[0] / count) as u8,
        (total[1] / count) as u8,
        (total[2] / count) as u8,
    ))
}

/// Index palette de la couleur moyenne d'une région de cellule.
///
/// Région vide → index du noir, jamais de division par zéro.
///
/// # Example
/// ```
/// use gt_core::color::Rgba;
/// use gt_core::frame::Frame;
/// use gt_core::geometry::PixelRect;
/// use gt_palette::{cell_average_color, Palette};
///
/// let frame = Frame::filled(2, 2, Rgba::opaque(255, 255, 255));
/// let idx = cell_average_color(&frame, Rgba::opaque(0, 0, 0), PixelRect::new(0, 0, 2, 2), Palette::default());
/// assert_eq!(idx, 232);
/// ```
#[inline]
#[must_use]
pub fn cell_average_color(frame: &Frame, dominant: Rgba, rect: PixelRect, palette: Palette) -> PaletteIndex {
    match average_rgb(frame, dominant, rect) {
        Some((r, g, b)) => palette.index(r, g, b),
        None => palette.black(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::opaque(255, 0, 0);
    const BLUE: Rgba = Rgba::opaque(0, 0, 255);

    #[test]
    fn dominant_only_region_is_black() {
        let frame = Frame::filled(4, 4, RED);
        let idx = cell_average_color(&frame, RED, PixelRect::new(0, 0, 4, 4), Palette::default());
        assert_eq!(idx, 17);
    }

    #[test]
    fn empty_rect_is_black() {
        let frame = Frame::filled(4, 4, BLUE);
        let p = Palette::default();
        assert_eq!(cell_average_color(&frame, RED, PixelRect::new(2, 2, 2, 3), p), p.black());
        assert_eq!(cell_average_color(&frame, RED, PixelRect::new(9, 9, 12, 12), p), p.black());
    }

    #[test]
    fn suppressed_pixels_still_count() {
        // moitié rouge (fond), moitié blanc → moyenne (127, 127, 127)
        let mut frame = Frame::filled(2, 1, RED);
        frame.set_pixel(1, 0, Rgba::opaque(255, 255, 255));
        let avg = average_rgb(&frame, RED, PixelRect::new(0, 0, 2, 1));
        assert_eq!(avg, Some((127, 127, 127)));
    }

    #[test]
    fn alpha_does_not_affect_suppression() {
        let frame = Frame::filled(1, 1, Rgba::new(255, 0, 0, 0));
        let avg = average_rgb(&frame, RED, PixelRect::new(0, 0, 1, 1));
        assert_eq!(avg, Some((0, 0, 0)));
    }

    #[test]
    fn rect_is_clipped_to_frame() {
        let frame = Frame::filled(2, 2, BLUE);
        let avg = average_rgb(&frame, RED, PixelRect::new(1, 1, 8, 8));
        assert_eq!(avg, Some((0, 0, 255)));
    }
}
