use crate::image_normalizer::tensor::{NormalizedTensor, TENSOR_HEIGHT, TENSOR_WIDTH};
use image::{imageops, DynamicImage};

/// The classifier was calibrated against bicubic resizing, so every call
/// must use the same filter.
pub const RESIZE_FILTER: imageops::FilterType = imageops::FilterType::CatmullRom;

#[derive(Debug, thiserror::Error)]
#[error("cannot identify image file: {0}")]
pub struct DecodeError(#[from] image::ImageError);

pub fn normalize(raw_image: &[u8]) -> Result<NormalizedTensor, DecodeError> {
    let image = image::load_from_memory(raw_image)?;
    Ok(normalize_image(&image))
}

pub fn normalize_image(image: &DynamicImage) -> NormalizedTensor {
    let rgb = image.to_rgb8();
    let resized = imageops::resize(
        &rgb,
        TENSOR_WIDTH as u32,
        TENSOR_HEIGHT as u32,
        RESIZE_FILTER,
    );

    let data = resized
        .pixels()
        .flat_map(|pixel| pixel.0)
        .map(|value| value as f32 / 255.0)
        .collect();

    NormalizedTensor::from_hwc(data)
}
