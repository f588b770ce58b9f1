use std::fs;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use image::codecs::png::PngEncoder;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder};

use crate::error::OutputError;
use crate::frame::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text PPM (P3)
    Ppm,
    /// Binary PPM (P6)
    PpmBinary,
    Png,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Option<OutputFormat> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "ppm" => Some(OutputFormat::Ppm),
            "png" => Some(OutputFormat::Png),
            _ => None,
        }
    }
}

pub fn write_frame<W: Write>(frame: &Frame, writer: W, format: OutputFormat) -> Result<(), OutputError> {
    let bytes = frame.as_bytes();
    let (width, height) = (frame.width, frame.height);

    match format {
        OutputFormat::Ppm => PnmEncoder::new(writer)
            .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Ascii))
            .write_image(&bytes, width, height, ExtendedColorType::Rgb8)?,
        OutputFormat::PpmBinary => PnmEncoder::new(writer)
            .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
            .write_image(&bytes, width, height, ExtendedColorType::Rgb8)?,
        OutputFormat::Png => {
            PngEncoder::new(writer).write_image(&bytes, width, height, ExtendedColorType::Rgb8)?
        }
    }

    Ok(())
}

/// Encodes the whole frame before touching the file system, so a failed
/// encode never leaves a truncated image behind.
pub fn save_frame(frame: &Frame, path: &Path, format: Option<OutputFormat>) -> Result<(), OutputError> {
    let format = format
        .or_else(|| OutputFormat::from_path(path))
        .ok_or_else(|| OutputError::UnknownFormat(path.to_path_buf()))?;

    let mut encoded = Vec::new();
    write_frame(frame, &mut encoded, format)?;

    fs::write(path, encoded).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("wrote {format:?} image to {path:?}");
    Ok(())
}
