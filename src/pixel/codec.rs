use std::path::Path;

use image::{ColorType, GenericImageView, ImageFormat};

use crate::error::Error;

/// decoded pixel data, channel-interleaved in row-major order
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub bytes: Vec<u8>,
}

pub fn decode(path: &Path) -> crate::Result<DecodedImage> {
    let decoded =
        image::open(path).map_err(|e| Error::FailedToDecodeImage(path.display().to_string(), e))?;
    let (width, height) = decoded.dimensions();
    let channels = decoded.color().channel_count();
    let bytes = match channels {
        1 => decoded.into_luma8().into_raw(),
        2 => decoded.into_luma_alpha8().into_raw(),
        3 => decoded.into_rgb8().into_raw(),
        4 => decoded.into_rgba8().into_raw(),
        other => return Err(Error::UnsupportedChannelCount(other)),
    };
    log::debug!(
        "decoded '{}' as {}x{} with {} channels",
        path.display(),
        width,
        height,
        channels
    );
    Ok(DecodedImage {
        width,
        height,
        channels,
        bytes,
    })
}

pub fn encode_png(
    path: &Path,
    width: u32,
    height: u32,
    channels: u8,
    bytes: &[u8],
) -> crate::Result<()> {
    let color = color_type_for(channels)?;
    image::save_buffer_with_format(path, bytes, width, height, color, ImageFormat::Png)
        .map_err(|e| Error::FailedToEncodeImage(path.display().to_string(), e))?;
    log::debug!(
        "encoded '{}' as {}x{} with {} channels",
        path.display(),
        width,
        height,
        channels
    );
    Ok(())
}

fn color_type_for(channels: u8) -> crate::Result<ColorType> {
    match channels {
        1 => Ok(ColorType::L8),
        2 => Ok(ColorType::La8),
        3 => Ok(ColorType::Rgb8),
        4 => Ok(ColorType::Rgba8),
        other => Err(Error::UnsupportedChannelCount(other)),
    }
}
