//! Ordered transform sequence construction and application

use crate::dataset::options::LoaderOptions;
use crate::io::progress::SizeWarning;
use crate::tensor::{Tensor, convert};
use crate::transform::params::TransformParams;
use image::DynamicImage;
use image::GenericImageView;
use image::imageops::FilterType;
use rand::Rng;
use rand::rngs::StdRng;

/// Default interpolation filter for the sizing stages
///
/// Catmull-Rom is the cubic filter, the closest match to bicubic resampling.
pub const DEFAULT_FILTER: FilterType = FilterType::CatmullRom;

/// Mean and standard deviation of the final normalization stage
///
/// Identical for every channel, so grayscale and color share one code path;
/// `[0, 1]` inputs map onto `[-1, 1]`.
pub const NORMALIZE_MEAN_STD: f32 = 0.5;

#[derive(Debug, Clone, Copy)]
enum TransformStep {
    Grayscale,
    Resize { size: u32, filter: FilterType },
    ScaleWidth { target: u32, min_height: u32, filter: FilterType },
    FixedCrop { pos: (u32, u32), size: u32 },
    RandomCrop { size: u32 },
    HorizontalFlip,
    VerticalFlip,
    RandomHorizontalFlip,
}

/// Ordered sequence of image transforms ending in tensor conversion
///
/// Built once per packed image from one parameter sample and applied to each
/// of its bands, which keeps paired bands spatially aligned. With parameters
/// supplied the sequence is deterministic; without them the crop offset and
/// horizontal flip draw fresh randomness per application.
pub struct TransformPipeline<'a> {
    steps: Vec<TransformStep>,
    warning: &'a SizeWarning,
}

impl<'a> TransformPipeline<'a> {
    /// Construct the transform sequence for `options`
    ///
    /// Stage order: optional grayscale conversion, isotropic resize or
    /// width-preserving scale, crop (fixed offset when parameters are given),
    /// flip (horizontal takes precedence over vertical; skipped entirely
    /// under `no_flip`), then tensor conversion and normalization. Height
    /// adjustments made by the scale stage are recorded through `warning`.
    pub fn build(
        options: &LoaderOptions,
        params: Option<&TransformParams>,
        grayscale: bool,
        filter: FilterType,
        warning: &'a SizeWarning,
    ) -> Self {
        let mut steps = Vec::new();

        if grayscale {
            steps.push(TransformStep::Grayscale);
        }

        if options.preprocess.has_resize() {
            steps.push(TransformStep::Resize {
                size: options.load_size,
                filter,
            });
        } else if options.preprocess.has_scale_width() {
            steps.push(TransformStep::ScaleWidth {
                target: options.load_size,
                min_height: options.crop_size,
                filter,
            });
        }

        if options.preprocess.has_crop() {
            match params {
                Some(p) => steps.push(TransformStep::FixedCrop {
                    pos: p.crop_pos,
                    size: options.crop_size,
                }),
                None => steps.push(TransformStep::RandomCrop {
                    size: options.crop_size,
                }),
            }
        }

        if !options.no_flip {
            match params {
                None => steps.push(TransformStep::RandomHorizontalFlip),
                Some(p) if p.flip_horizontal => steps.push(TransformStep::HorizontalFlip),
                Some(p) if p.flip_vertical => steps.push(TransformStep::VerticalFlip),
                Some(_) => {}
            }
        }

        Self { steps, warning }
    }

    /// Apply the sequence to one image, producing a normalized tensor
    ///
    /// The random source is consumed only by the parameter-less random steps;
    /// with fixed parameters the same input always yields the same output.
    pub fn apply(&self, image: &DynamicImage, rng: &mut StdRng) -> Tensor {
        let mut current = image.clone();
        for step in &self.steps {
            current = match *step {
                TransformStep::Grayscale => DynamicImage::ImageLuma8(current.to_luma8()),
                TransformStep::Resize { size, filter } => {
                    current.resize_exact(size, size, filter)
                }
                TransformStep::ScaleWidth {
                    target,
                    min_height,
                    filter,
                } => scale_width(current, target, min_height, filter, self.warning),
                TransformStep::FixedCrop { pos, size } => crop(current, pos, size),
                TransformStep::RandomCrop { size } => {
                    let (w, h) = current.dimensions();
                    let x = rng.random_range(0..=w.saturating_sub(size));
                    let y = rng.random_range(0..=h.saturating_sub(size));
                    crop(current, (x, y), size)
                }
                TransformStep::HorizontalFlip => current.fliph(),
                TransformStep::VerticalFlip => current.flipv(),
                TransformStep::RandomHorizontalFlip => {
                    if rng.random_bool(0.5) {
                        current.fliph()
                    } else {
                        current
                    }
                }
            };
        }

        convert::normalize(
            convert::to_unit_tensor(&current),
            NORMALIZE_MEAN_STD,
            NORMALIZE_MEAN_STD,
        )
    }
}

// Width goes to the target; height scales proportionally but never below the
// crop size, otherwise the crop stage would run out of rows.
fn scale_width(
    image: DynamicImage,
    target: u32,
    min_height: u32,
    filter: FilterType,
    warning: &SizeWarning,
) -> DynamicImage {
    let (ow, oh) = image.dimensions();
    if ow == target && oh >= min_height {
        return image;
    }
    let proportional = (u64::from(target) * u64::from(oh) / u64::from(ow)) as u32;
    let height = proportional.max(min_height);
    if height != proportional {
        warning.record((ow, oh), (target, height));
    }
    image.resize_exact(target, height, filter)
}

// No padding and no upscaling: the crop applies only when the source exceeds
// the target in some dimension, and the rectangle is intersected with the
// image bounds.
fn crop(image: DynamicImage, pos: (u32, u32), size: u32) -> DynamicImage {
    let (ow, oh) = image.dimensions();
    if ow > size || oh > size {
        image.crop_imm(pos.0, pos.1, size, size)
    } else {
        image
    }
}
