//! Image loading, base64 encoding, and structural validation.
//!
//! Images are read whole from disk, encoded with the standard base64 alphabet,
//! and validated by parsing the container header only. Pixel data is never
//! decoded; a recognizable signature plus a readable header is enough to
//! reject truncated or corrupt files before they reach the API.

use crate::error::{GroqVisionError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

/// A validated, base64-encoded image ready to embed in a request.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    encoded: String,
}

impl EncodedImage {
    /// Read an image file, encode it, and validate its header.
    ///
    /// Returns [`GroqVisionError::IoError`] if the path is missing or
    /// unreadable, and [`GroqVisionError::InvalidImage`] if the bytes are not
    /// a well-formed image container.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;

        let encoded = STANDARD.encode(&bytes);
        info!(path = %path.display(), "Encoded image");

        validate_image(&bytes)?;

        Ok(Self { encoded })
    }

    /// Base64 text of the raw image bytes, standard alphabet, no line wrapping.
    pub fn as_base64(&self) -> &str {
        &self.encoded
    }

    /// Data URI embedding the encoded image.
    ///
    /// The content type is always `image/png`, matching the upstream service's
    /// lenient handling; the original format is not sniffed into the URI.
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.encoded)
    }
}

/// Check that the bytes form a well-formed image container.
///
/// Verifies the format signature and parses the header for dimensions without
/// decoding pixel data.
fn validate_image(bytes: &[u8]) -> Result<()> {
    let format =
        image::guess_format(bytes).map_err(|e| GroqVisionError::InvalidImage(e.to_string()))?;

    let mut reader = image::ImageReader::new(Cursor::new(bytes));
    reader.set_format(format);
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| GroqVisionError::InvalidImage(e.to_string()))?;

    debug!(?format, width, height, "Validated image header");
    Ok(())
}
