use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma, LumaA, Pixel, Rgb, Rgba};

use crate::error::Error;

pub fn resample(
    bytes: &[u8],
    src_width: u32,
    src_height: u32,
    channels: u8,
    dst_width: u32,
    dst_height: u32,
) -> crate::Result<Vec<u8>> {
    log::debug!(
        "resampling {}x{} to {}x{} with {} channels",
        src_width,
        src_height,
        dst_width,
        dst_height,
        channels
    );
    match channels {
        1 => Ok(resample_buffer::<Luma<u8>>(
            bytes, src_width, src_height, dst_width, dst_height,
        )),
        2 => Ok(resample_buffer::<LumaA<u8>>(
            bytes, src_width, src_height, dst_width, dst_height,
        )),
        3 => Ok(resample_buffer::<Rgb<u8>>(
            bytes, src_width, src_height, dst_width, dst_height,
        )),
        4 => Ok(resample_buffer::<Rgba<u8>>(
            bytes, src_width, src_height, dst_width, dst_height,
        )),
        other => Err(Error::UnsupportedChannelCount(other)),
    }
}

fn resample_buffer<P>(
    bytes: &[u8],
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
) -> Vec<u8>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let buffer: ImageBuffer<P, Vec<u8>> =
        ImageBuffer::from_raw(src_width, src_height, bytes.to_vec())
            .expect("Pixel buffer length must match the source dimensions");
    imageops::resize(&buffer, dst_width, dst_height, FilterType::Triangle).into_raw()
}
