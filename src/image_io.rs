use std::path::Path;

use image::error::{ParameterError, ParameterErrorKind};
use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageBuffer, ImageError, ImageFormat, RgbaImage};

use crate::error::{PixswapError, Result};
use crate::pixel::Pixel;

/// Flatten a decoded image into raster-ordered RGBA pixels.
pub fn pixels_from_image(img: &DynamicImage) -> (u32, u32, Vec<Pixel>) {
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    let pixels = rgba.pixels().map(|&p| Pixel::from(p)).collect();
    (w, h, pixels)
}

/// Inverse of [`pixels_from_image`]. Returns `None` if `pixels` does not hold
/// exactly `width * height` entries.
pub fn image_from_pixels(width: u32, height: u32, pixels: &[Pixel]) -> Option<RgbaImage> {
    if pixels.len() != width as usize * height as usize {
        return None;
    }
    Some(ImageBuffer::from_fn(width, height, |x, y| {
        pixels[y as usize * width as usize + x as usize].into()
    }))
}

pub fn decode(path: impl AsRef<Path>) -> Result<(u32, u32, Vec<Pixel>)> {
    let path = path.as_ref();
    let decode_err = |source| PixswapError::Decode { path: path.to_path_buf(), source };
    let img = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;
    Ok(pixels_from_image(&img))
}

/// Write `pixels` as a `width` x `height` image; the format follows the file
/// extension. Formats without an alpha channel (JPEG) get the RGB part only.
pub fn encode(path: impl AsRef<Path>, width: u32, height: u32, pixels: &[Pixel]) -> Result<()> {
    let path = path.as_ref();
    let encode_err = |source| PixswapError::Encode { path: path.to_path_buf(), source };
    let img = image_from_pixels(width, height, pixels).ok_or_else(|| {
        encode_err(ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        )))
    })?;
    let format = ImageFormat::from_path(path).map_err(encode_err)?;
    match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(img).to_rgb8().save_with_format(path, format),
        _ => img.save_with_format(path, format),
    }
    .map_err(encode_err)
}
