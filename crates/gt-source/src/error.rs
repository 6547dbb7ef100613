use std::path::PathBuf;

use gt_core::CoreError;
use thiserror::Error;

/// Errors raised while loading or exporting an animation.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The file cannot be opened or created.
    #[error("Impossible d'accéder à {path} : {source}")]
    Io {
        /// Path involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The stream is not a valid GIF.
    #[error("GIF invalide : {0}")]
    Decode(#[source] image::ImageError),

    /// The animation could not be encoded.
    #[error("Encodage GIF impossible : {0}")]
    Encode(#[source] image::ImageError),

    /// Decoded frames do not form a valid animation (no frame, bad size).
    #[error(transparent)]
    Animation(#[from] CoreError),
}
