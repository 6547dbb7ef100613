use gt_core::color::Rgba;
use gt_core::frame::AnimatedImage;

/// Remplace en place, dans toutes les frames, les pixels de la couleur
/// dominante par du noir (alpha conservé).
///
/// Passe séquentielle unique, exécutée avant la lecture avec un accès
/// exclusif aux frames. Retourne le nombre de pixels modifiés.
///
/// # Example
/// ```
/// use gt_core::color::Rgba;
/// use gt_core::frame::{AnimatedImage, Frame};
/// use gt_palette::background::suppress_background;
///
/// let red = Rgba::opaque(255, 0, 0);
/// let mut image = AnimatedImage::new(2, 2, vec![Frame::filled(2, 2, red)]).unwrap();
/// assert_eq!(suppress_background(&mut image, red), 4);
/// assert_eq!(image.first_frame().pixel(0, 0), Rgba::opaque(0, 0, 0));
/// ```
pub fn suppress_background(image: &mut AnimatedImage, dominant: Rgba) -> usize {
    let mut replaced = 0;
    for frame in image.frames_mut() {
        for px in frame.data.chunks_exact_mut(4) {
            let color = Rgba::from_slice(px);
            if color.same_rgb(dominant) {
                px[..3].fill(0);
                replaced += 1;
            }
        }
    }
    log::info!("Fond supprimé : {replaced} pixels remplacés");
    replaced
}
