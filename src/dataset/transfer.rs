//! The composite sample assembler
//!
//! Pairs the primary (real) set with the auxiliary and synthetic sets into
//! training samples. Every band of one packed image runs through one shared
//! parameter sample; the auxiliary image and each synthetic item draw their
//! own independent samples.

use crate::dataset::options::{DatasetDirs, LoaderOptions};
use crate::dataset::paths;
use crate::io::configuration::{MASK_THRESHOLD, SYNTHESIS_RATE};
use crate::io::error::{DatasetError, Result, empty_source_set, invalid_parameter};
use crate::io::image::{load_packed, split_pair, split_triplet};
use crate::io::progress::SizeWarning;
use crate::tensor::{Tensor, ops};
use crate::transform::params;
use crate::transform::pipeline::{DEFAULT_FILTER, TransformPipeline};
use image::GenericImageView;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// One real-branch record in the output sample
#[derive(Debug, Clone)]
pub struct RealSample {
    /// Network input: the guide with auxiliary content blended in
    /// (identical to `inpaint_b` in evaluation mode)
    pub inpaint_a: Tensor,
    /// Reconstruction target: the unmodified guide band
    pub inpaint_b: Tensor,
    /// Blend mask in `[0, 1]`, suppressed where the primary mask is active
    pub inpaint_c: Tensor,
    /// Filename stem identifying the primary image
    pub inpaint_name: String,
}

/// One synthetic-branch record in the output sample
#[derive(Debug, Clone)]
pub struct SynthesisSample {
    /// Style band tensor in `[-1, 1]`
    pub synt_a: Tensor,
    /// Content band tensor in `[-1, 1]`
    pub synt_b: Tensor,
    /// Mask band tensor remapped to `[0, 1]`
    pub synt_c: Tensor,
}

/// The full record produced by one retrieval
#[derive(Debug, Clone)]
pub struct TransferSample {
    /// Single-element real branch
    pub real: Vec<RealSample>,
    /// Synthetic branch: empty in evaluation mode, `SYNTHESIS_RATE` items in
    /// training mode
    pub synthesis: Vec<SynthesisSample>,
}

/// Dataset pairing real packed images with synthetic triplets
///
/// Paths are enumerated and sorted once at construction and stay immutable;
/// the only mutable state is the owned seeded random source, so parallel
/// workers isolate by constructing their own dataset with a distinct seed.
pub struct TransferDataset {
    options: LoaderOptions,
    primary_paths: Vec<PathBuf>,
    auxiliary_paths: Vec<PathBuf>,
    synthetic_paths: Vec<PathBuf>,
    rng: StdRng,
    size_warning: SizeWarning,
}

impl TransferDataset {
    /// Construct a dataset over the given source directories
    ///
    /// Training mode requires all three directories and fails fast when the
    /// auxiliary or synthetic set is empty; evaluation mode reads the primary
    /// set alone. An empty primary set yields a zero-length dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if a required directory is missing, unreadable, or
    /// empty in training mode.
    pub fn new(options: LoaderOptions, dirs: &DatasetDirs) -> Result<Self> {
        let primary_paths = paths::list_images(&dirs.primary)?;

        let (auxiliary_paths, synthetic_paths) = if options.is_train {
            let auxiliary_dir = dirs.auxiliary.as_deref().ok_or_else(|| {
                invalid_parameter(
                    "auxiliary",
                    &"<unset>",
                    &"training mode requires an auxiliary directory",
                )
            })?;
            let synthetic_dir = dirs.synthetic.as_deref().ok_or_else(|| {
                invalid_parameter(
                    "synthetic",
                    &"<unset>",
                    &"training mode requires a synthetic directory",
                )
            })?;

            let auxiliary_paths = paths::list_images(auxiliary_dir)?;
            if auxiliary_paths.is_empty() {
                return Err(empty_source_set("auxiliary", auxiliary_dir));
            }
            let synthetic_paths = paths::list_images(synthetic_dir)?;
            if synthetic_paths.is_empty() {
                return Err(empty_source_set("synthetic", synthetic_dir));
            }

            (auxiliary_paths, synthetic_paths)
        } else {
            (Vec::new(), Vec::new())
        };

        Ok(Self {
            options,
            primary_paths,
            auxiliary_paths,
            synthetic_paths,
            rng: StdRng::seed_from_u64(options.seed),
            size_warning: SizeWarning::new(),
        })
    }

    /// Number of samples, equal to the primary set size
    pub fn len(&self) -> usize {
        self.primary_paths.len()
    }

    /// Whether the primary set is empty
    pub fn is_empty(&self) -> bool {
        self.primary_paths.is_empty()
    }

    /// The once-only scale adjustment recorder
    ///
    /// Callers surface its message after a run; the transform code never
    /// prints.
    pub const fn size_warning(&self) -> &SizeWarning {
        &self.size_warning
    }

    /// Retrieve the sample at `index`
    ///
    /// Re-reads and re-transforms from disk on every call; there is no
    /// caching layer. A failed retrieval surfaces its error without retry.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or any packed image
    /// cannot be read, decoded, or split.
    pub fn get(&mut self, index: usize) -> Result<TransferSample> {
        let primary_path = self
            .primary_paths
            .get(index)
            .cloned()
            .ok_or(DatasetError::IndexOutOfRange {
                index,
                len: self.primary_paths.len(),
            })?;

        let (guide, mask) = self.transform_pair(&primary_path)?;
        let inpaint_name = paths::file_stem(&primary_path);

        if !self.options.is_train {
            return Ok(TransferSample {
                real: vec![RealSample {
                    inpaint_a: guide.clone(),
                    inpaint_b: guide,
                    inpaint_c: mask,
                    inpaint_name,
                }],
                synthesis: Vec::new(),
            });
        }

        // Blend a random auxiliary scene into the guide; its mask becomes the
        // blend weight and, minus overlap with the primary mask, the target
        // mask.
        let auxiliary_index = self.rng.random_range(0..self.auxiliary_paths.len());
        let auxiliary_path = self
            .auxiliary_paths
            .get(auxiliary_index)
            .cloned()
            .ok_or(DatasetError::IndexOutOfRange {
                index: auxiliary_index,
                len: self.auxiliary_paths.len(),
            })?;
        let (auxiliary_guide, auxiliary_mask) = self.transform_pair(&auxiliary_path)?;

        let inpaint_a = ops::alpha_blend(&guide, &auxiliary_guide, &auxiliary_mask);
        let inpaint_c = ops::masked_fill(&auxiliary_mask, &mask, MASK_THRESHOLD);

        let real = vec![RealSample {
            inpaint_a,
            inpaint_b: guide,
            inpaint_c,
            inpaint_name,
        }];
        let synthesis = self.synthesis_items(index)?;

        Ok(TransferSample { real, synthesis })
    }

    // Loads a two-band packed image and transforms both bands under one
    // parameter sample. The mask band is remapped into [0, 1].
    fn transform_pair(&mut self, path: &Path) -> Result<(Tensor, Tensor)> {
        let packed = load_packed(path)?;
        let (guide_band, mask_band) = split_pair(&packed, path)?;

        let parameters = params::sample(&self.options, guide_band.dimensions(), &mut self.rng);
        let pipeline = TransformPipeline::build(
            &self.options,
            Some(&parameters),
            true,
            DEFAULT_FILTER,
            &self.size_warning,
        );
        let guide = pipeline.apply(&guide_band, &mut self.rng);
        let mask = ops::remap_unit(&pipeline.apply(&mask_band, &mut self.rng));

        Ok((guide, mask))
    }

    // The synthetic window walks backward from the primary index scaled into
    // the synthetic set. Offsets that would leave the set are clamped into
    // range; duplicates at the low edge are accepted.
    fn synthesis_items(&mut self, index: usize) -> Result<Vec<SynthesisSample>> {
        let synthetic_len = self.synthetic_paths.len();
        let base = index * synthetic_len / self.primary_paths.len();

        let mut items = Vec::with_capacity(SYNTHESIS_RATE);
        for offset in 0..SYNTHESIS_RATE {
            let synthetic_index = base
                .saturating_sub(offset)
                .min(synthetic_len.saturating_sub(1));
            let path = self
                .synthetic_paths
                .get(synthetic_index)
                .cloned()
                .ok_or(DatasetError::IndexOutOfRange {
                    index: synthetic_index,
                    len: synthetic_len,
                })?;

            let packed = load_packed(&path)?;
            let (style_band, content_band, mask_band) = split_triplet(&packed, &path)?;

            let parameters =
                params::sample(&self.options, style_band.dimensions(), &mut self.rng);
            let pipeline = TransformPipeline::build(
                &self.options,
                Some(&parameters),
                true,
                DEFAULT_FILTER,
                &self.size_warning,
            );
            let synt_a = pipeline.apply(&style_band, &mut self.rng);
            let synt_b = pipeline.apply(&content_band, &mut self.rng);
            let synt_c = ops::remap_unit(&pipeline.apply(&mask_band, &mut self.rng));

            items.push(SynthesisSample {
                synt_a,
                synt_b,
                synt_c,
            });
        }

        Ok(items)
    }
}
