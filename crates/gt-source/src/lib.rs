/// Animated image source for gifterm: GIF decoding and re-encoding.

pub mod error;
pub mod gif;

pub use error::SourceError;
pub use gif::{decode, encode, load, save};
