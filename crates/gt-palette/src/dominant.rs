use std::collections::HashMap;

use gt_core::color::Rgba;
use gt_core::frame::{AnimatedImage, Frame};

/// Clé d'histogramme : chaque canal 16 bits divisé par 255, puis empaqueté.
#[inline(always)]
fn bucket_key(px: Rgba) -> u64 {
    let q = |v: u8| u64::from(Rgba::widen(v) / 255);
    (q(px.r) << 48) | (q(px.g) << 32) | (q(px.b) << 16) | q(px.a)
}

struct Bucket {
    /// Premier pixel rencontré dans ce bucket.
    color: Rgba,
    count: usize,
}

/// Couleur la plus fréquente d'une frame.
///
/// Parcours colonne par colonne (x puis y). En cas d'égalité, le bucket
/// rempli en premier l'emporte, ce qui rend le résultat reproductible.
///
/// # Example
/// ```
/// use gt_core::color::Rgba;
/// use gt_core::frame::Frame;
/// use gt_palette::dominant::frame_dominant_color;
///
/// let mut frame = Frame::filled(3, 1, Rgba::opaque(0, 128, 0));
/// frame.set_pixel(0, 0, Rgba::opaque(9, 9, 9));
/// assert_eq!(frame_dominant_color(&frame), Rgba::opaque(0, 128, 0));
/// ```
#[must_use]
pub fn frame_dominant_color(frame: &Frame) -> Rgba {
    let mut slots: HashMap<u64, usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();

    for x in 0..frame.width {
        for y in 0..frame.height {
            let px = frame.pixel(x, y);
            let slot = *slots.entry(bucket_key(px)).or_insert_with(|| {
                buckets.push(Bucket { color: px, count: 0 });
                buckets.len() - 1
            });
            buckets[slot].count += 1;
        }
    }

    let mut best: Option<&Bucket> = None;
    for bucket in &buckets {
        if best.is_none_or(|b| bucket.count > b.count) {
            best = Some(bucket);
        }
    }
    best.map(|b| b.color).unwrap_or_default()
}

/// Couleur dominante de l'animation, calculée sur la frame 0.
#[must_use]
pub fn dominant_color(image: &AnimatedImage) -> Rgba {
    let color = frame_dominant_color(image.first_frame());
    log::debug!(
        "Couleur dominante : ({}, {}, {}, {})",
        color.r,
        color.g,
        color.b,
        color.a
    );
    color
}
