//! PNG loading via the `image` crate.

use std::path::{Path, PathBuf};

use image::{GenericImageView, ImageReader};
use log::debug;

use crate::image::GrayImage;

/// Loader failures: file access, decoding, or a pixel format this tool does
/// not handle.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read \"{path}\": {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode \"{path}\": {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("expected 1 channel (grayscale) in \"{path}\", got {channels} ({width}x{height})")]
    UnsupportedFormat {
        path: PathBuf,
        channels: u8,
        width: u32,
        height: u32,
    },
}

/// Decode a single-channel image into an owned grayscale buffer.
///
/// The decoder reports the channel count; anything but 1 is rejected here
/// rather than silently converted. Single-channel 16-bit input is accepted
/// and narrowed to 8 bits.
pub fn load_gray_image(path: &Path) -> Result<GrayImage, LoadError> {
    let reader = ImageReader::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = reader.decode().map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let channels = decoded.color().channel_count();
    if channels != 1 {
        let (width, height) = decoded.dimensions();
        return Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
            channels,
            width,
            height,
        });
    }

    let gray = decoded.into_luma8();
    let (width, height) = (gray.width() as usize, gray.height() as usize);
    debug!("decoded \"{}\": {width}x{height}, 1 channel", path.display());
    Ok(GrayImage::new(width, height, gray.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_gray_image(Path::new("definitely-not-here.png")).expect_err("no file");
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("definitely-not-here.png"));
    }
}
