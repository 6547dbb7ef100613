use std::fs::File;
use std::io::{BufRead, BufReader, Seek, Write};
use std::path::Path;

use gt_core::frame::{AnimatedImage, DEFAULT_FRAME_DELAY_MS, Frame};
use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::{AnimationDecoder, Delay, ImageDecoder, RgbaImage};

use crate::error::SourceError;

/// Charge un GIF animé depuis le disque.
///
/// # Errors
/// [`SourceError::Io`] si le fichier ne peut pas être ouvert,
/// [`SourceError::Decode`] si le flux est invalide,
/// [`SourceError::Animation`] s'il ne contient aucune frame.
///
/// # Example
/// ```no_run
/// use gt_source::gif::load;
/// use std::path::Path;
/// let image = load(Path::new("cat.gif")).unwrap();
/// println!("{} frames", image.frame_count());
/// ```
pub fn load(path: &Path) -> Result<AnimatedImage, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode(BufReader::new(file))?;
    log::info!(
        "GIF chargé : {} ({}×{}, {} frames)",
        path.display(),
        image.width(),
        image.height(),
        image.frame_count()
    );
    Ok(image)
}

/// Décode un flux GIF complet ; chaque frame est composée sur tout l'écran logique.
///
/// # Errors
/// See [`load`].
pub fn decode<R: BufRead + Seek>(reader: R) -> Result<AnimatedImage, SourceError> {
    let decoder = GifDecoder::new(reader).map_err(SourceError::Decode)?;
    let (width, height) = decoder.dimensions();

    let mut frames = Vec::new();
    for frame in decoder.into_frames() {
        let frame = frame.map_err(SourceError::Decode)?;
        let (numer, denom) = frame.delay().numer_denom_ms();
        let delay_ms = match numer.checked_div(denom) {
            Some(ms) if ms > 0 => ms,
            _ => DEFAULT_FRAME_DELAY_MS,
        };
        let buffer = frame.into_buffer();
        let (w, h) = buffer.dimensions();
        frames.push(Frame::from_rgba(w, h, buffer.into_raw(), delay_ms)?);
    }

    Ok(AnimatedImage::new(width, height, frames)?)
}

/// Exporte une animation en GIF (boucle infinie, délais conservés).
///
/// # Errors
/// [`SourceError::Encode`] si l'encodage échoue, [`SourceError::Io`] si
/// le fichier ne peut pas être écrit.
pub fn save(image: &AnimatedImage, path: &Path) -> Result<(), SourceError> {
    let mut bytes = Vec::new();
    encode(image, &mut bytes)?;
    std::fs::write(path, bytes).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("GIF exporté : {}", path.display());
    Ok(())
}

/// Encode an animation into any writer.
///
/// # Errors
/// Returns [`SourceError::Encode`] if a frame cannot be encoded.
pub fn encode<W: Write>(image: &AnimatedImage, writer: W) -> Result<(), SourceError> {
    let mut encoder = GifEncoder::new(writer);
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(SourceError::Encode)?;

    for frame in image.frames() {
        let buffer = RgbaImage::from_raw(frame.width, frame.height, frame.data.clone()).ok_or(
            gt_core::CoreError::BufferSize {
                expected: frame.width as usize * frame.height as usize * 4,
                found: frame.data.len(),
            },
        )?;
        let delay = Delay::from_numer_denom_ms(frame.delay_ms, 1);
        encoder
            .encode_frame(image::Frame::from_parts(buffer, 0, 0, delay))
            .map_err(SourceError::Encode)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_core::color::Rgba;
    use std::io::Cursor;

    fn two_frames() -> AnimatedImage {
        let mut red = Frame::filled(3, 2, Rgba::opaque(255, 0, 0));
        red.delay_ms = 120;
        let mut blue = Frame::filled(3, 2, Rgba::opaque(0, 0, 255));
        blue.set_pixel(2, 1, Rgba::opaque(255, 255, 255));
        blue.delay_ms = 50;
        AnimatedImage::new(3, 2, vec![red, blue]).unwrap()
    }

    #[test]
    fn export_then_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.gif");
        save(&two_frames(), &path).unwrap();

        let image = load(&path).unwrap();
        assert_eq!((image.width(), image.height()), (3, 2));
        assert_eq!(image.frame_count(), 2);
        let frames = image.frames();
        assert_eq!(frames[0].pixel(1, 1), Rgba::opaque(255, 0, 0));
        assert_eq!(frames[1].pixel(0, 0), Rgba::opaque(0, 0, 255));
        assert_eq!(frames[1].pixel(2, 1), Rgba::opaque(255, 255, 255));
        assert_eq!(frames[0].delay_ms, 120);
        assert_eq!(frames[1].delay_ms, 50);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode(Cursor::new(b"definitely not a gif".to_vec())).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)), "{err}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(Path::new("/nonexistent/anim.gif")).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
