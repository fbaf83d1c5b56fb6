//! Loader options, preprocessing modes, and source directory descriptors

use crate::io::configuration::{DEFAULT_CROP_SIZE, DEFAULT_LOAD_SIZE, DEFAULT_SEED};
use crate::io::error::{DatasetError, invalid_parameter};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Preprocessing mode controlling which resize/scale/crop stages run
///
/// The composable modes pair a sizing stage with a crop stage; the predicate
/// methods expose which stages each mode enables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preprocess {
    /// Isotropic resize to the load size, then crop to the crop size
    ResizeAndCrop,
    /// Width-preserving scale to the load size, then crop to the crop size
    ScaleWidthAndCrop,
    /// Isotropic resize to the load size only
    Resize,
    /// Width-preserving scale to the load size only
    ScaleWidth,
    /// Crop to the crop size only
    Crop,
    /// No sizing or cropping stage
    None,
}

impl Preprocess {
    /// Whether this mode includes the isotropic resize stage
    #[must_use]
    pub const fn has_resize(self) -> bool {
        matches!(self, Self::Resize | Self::ResizeAndCrop)
    }

    /// Whether this mode includes the width-preserving scale stage
    #[must_use]
    pub const fn has_scale_width(self) -> bool {
        matches!(self, Self::ScaleWidth | Self::ScaleWidthAndCrop)
    }

    /// Whether this mode includes the crop stage
    #[must_use]
    pub const fn has_crop(self) -> bool {
        matches!(self, Self::Crop | Self::ResizeAndCrop | Self::ScaleWidthAndCrop)
    }

    /// Canonical configuration token for this mode
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ResizeAndCrop => "resize_and_crop",
            Self::ScaleWidthAndCrop => "scale_width_and_crop",
            Self::Resize => "resize",
            Self::ScaleWidth => "scale_width",
            Self::Crop => "crop",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Preprocess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preprocess {
    type Err = DatasetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "resize_and_crop" => Ok(Self::ResizeAndCrop),
            "scale_width_and_crop" => Ok(Self::ScaleWidthAndCrop),
            "resize" => Ok(Self::Resize),
            "scale_width" => Ok(Self::ScaleWidth),
            "crop" => Ok(Self::Crop),
            "none" => Ok(Self::None),
            other => Err(invalid_parameter(
                "preprocess",
                &other,
                &"expected one of resize_and_crop, scale_width_and_crop, resize, \
                  scale_width, crop, none",
            )),
        }
    }
}

/// Static options controlling preprocessing and sampling
///
/// Read-only for the dataset's lifetime. `seed` initializes the dataset's own
/// random source; parallel workers isolate their randomness by constructing
/// with distinct seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Training mode switch; evaluation mode skips the auxiliary and
    /// synthetic branches entirely
    pub is_train: bool,
    /// Which resize/scale/crop stages the transform pipeline runs
    pub preprocess: Preprocess,
    /// Target size for the resize or scale stage
    pub load_size: u32,
    /// Side length of the square crop stage
    pub crop_size: u32,
    /// Disable the random horizontal flip stage
    pub no_flip: bool,
    /// Seed for the dataset's random source
    pub seed: u64,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            is_train: false,
            preprocess: Preprocess::ResizeAndCrop,
            load_size: DEFAULT_LOAD_SIZE,
            crop_size: DEFAULT_CROP_SIZE,
            no_flip: false,
            seed: DEFAULT_SEED,
        }
    }
}

/// Source directories backing one dataset
///
/// The auxiliary and synthetic directories are only required in training
/// mode; evaluation mode reads the primary set alone.
#[derive(Debug, Clone, Default)]
pub struct DatasetDirs {
    /// Directory of real packed images (guide band + mask band)
    pub primary: PathBuf,
    /// Directory of random-dynamic packed images (guide band + mask band)
    pub auxiliary: Option<PathBuf>,
    /// Directory of synthetic packed triplets (style, content, mask bands)
    pub synthetic: Option<PathBuf>,
}
