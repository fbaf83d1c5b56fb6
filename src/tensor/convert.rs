//! Conversion between images and normalized tensors

use crate::tensor::Tensor;
use image::{DynamicImage, GrayImage, Luma};
use ndarray::Array3;

/// Convert an image into a `[0, 1]` tensor in `(channels, height, width)` layout
///
/// Grayscale images produce a single channel; everything else is read as RGB
/// with three channels.
pub fn to_unit_tensor(image: &DynamicImage) -> Tensor {
    match image {
        DynamicImage::ImageLuma8(luma) => {
            let (width, height) = luma.dimensions();
            let mut tensor = Array3::zeros((1, height as usize, width as usize));
            for (x, y, pixel) in luma.enumerate_pixels() {
                if let Some(value) = tensor.get_mut((0, y as usize, x as usize)) {
                    *value = f32::from(pixel.0[0]) / 255.0;
                }
            }
            tensor
        }
        other => {
            let rgb = other.to_rgb8();
            let (width, height) = rgb.dimensions();
            let mut tensor = Array3::zeros((3, height as usize, width as usize));
            for (x, y, pixel) in rgb.enumerate_pixels() {
                for (channel, &sample) in pixel.0.iter().enumerate() {
                    if let Some(value) = tensor.get_mut((channel, y as usize, x as usize)) {
                        *value = f32::from(sample) / 255.0;
                    }
                }
            }
            tensor
        }
    }
}

/// Normalize a tensor in place: `(v - mean) / std` per element
///
/// With the standard mean/std of 0.5 this maps `[0, 1]` onto `[-1, 1]`.
#[must_use]
pub fn normalize(tensor: Tensor, mean: f32, std: f32) -> Tensor {
    tensor.mapv_into(|v| (v - mean) / std)
}

/// Render the first channel of a tensor as an 8-bit grayscale image
///
/// `signed` selects the input range: `[-1, 1]` for image tensors, `[0, 1]`
/// for mask tensors. Values are clamped before quantization. Used by the
/// preview binary; the training path never round-trips through this.
pub fn to_luma_image(tensor: &Tensor, signed: bool) -> GrayImage {
    let (_, height, width) = tensor.dim();
    GrayImage::from_fn(width as u32, height as u32, |x, y| {
        let value = tensor
            .get((0, y as usize, x as usize))
            .copied()
            .unwrap_or(0.0);
        let unit = if signed { (value + 1.0) * 0.5 } else { value };
        Luma([(unit.clamp(0.0, 1.0) * 255.0).round() as u8])
    })
}
