//! Command-line interface for previewing dataset samples as PNG files

use crate::dataset::options::{DatasetDirs, LoaderOptions, Preprocess};
use crate::dataset::transfer::{TransferDataset, TransferSample};
use crate::io::configuration::{
    DEFAULT_CROP_SIZE, DEFAULT_LOAD_SIZE, DEFAULT_PREVIEW_SAMPLES, DEFAULT_SEED,
};
use crate::io::error::{DatasetError, Result};
use crate::io::progress::ProgressManager;
use crate::tensor::{Tensor, convert};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bandpack")]
#[command(
    author,
    version,
    about = "Export dataset samples as grayscale PNGs for visual inspection"
)]
/// Command-line arguments for the dataset preview tool
pub struct Cli {
    /// Directory of primary (real) packed images
    #[arg(value_name = "PRIMARY_DIR")]
    pub target: PathBuf,

    /// Directory of auxiliary random-dynamic packed images (training mode)
    #[arg(short, long)]
    pub auxiliary: Option<PathBuf>,

    /// Directory of synthetic packed triplets (training mode)
    #[arg(short = 'y', long)]
    pub synthetic: Option<PathBuf>,

    /// Assemble training-mode samples instead of evaluation-mode ones
    #[arg(short, long)]
    pub train: bool,

    /// Random seed for reproducible sampling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of samples to export
    #[arg(short = 'n', long, default_value_t = DEFAULT_PREVIEW_SAMPLES)]
    pub samples: usize,

    /// Output directory for exported PNGs
    #[arg(short, long, default_value = "preview")]
    pub output: PathBuf,

    /// Preprocessing mode (resize_and_crop, scale_width_and_crop, resize,
    /// scale_width, crop, none)
    #[arg(short, long, default_value = "resize_and_crop")]
    pub preprocess: String,

    /// Target size for the resize or scale stage
    #[arg(short, long, default_value_t = DEFAULT_LOAD_SIZE)]
    pub load_size: u32,

    /// Side length of the square crop stage
    #[arg(short, long, default_value_t = DEFAULT_CROP_SIZE)]
    pub crop_size: u32,

    /// Disable the random horizontal flip
    #[arg(short = 'f', long)]
    pub no_flip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Loader options assembled from the parsed arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the preprocess token is unrecognized.
    pub fn loader_options(&self) -> Result<LoaderOptions> {
        Ok(LoaderOptions {
            is_train: self.train,
            preprocess: self.preprocess.parse::<Preprocess>()?,
            load_size: self.load_size,
            crop_size: self.crop_size,
            no_flip: self.no_flip,
            seed: self.seed,
        })
    }

    /// Source directories assembled from the parsed arguments
    pub fn dataset_dirs(&self) -> DatasetDirs {
        DatasetDirs {
            primary: self.target.clone(),
            auxiliary: self.auxiliary.clone(),
            synthetic: self.synthetic.clone(),
        }
    }
}

/// Orchestrates sample export with progress tracking
pub struct PreviewProcessor {
    cli: Cli,
}

impl PreviewProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the dataset and export the requested number of samples
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be constructed, a retrieval
    /// fails, or an export cannot be written.
    pub fn process(&self) -> Result<()> {
        let options = self.cli.loader_options()?;
        let mut dataset = TransferDataset::new(options, &self.cli.dataset_dirs())?;

        let count = dataset.len().min(self.cli.samples);
        if count == 0 {
            return Ok(());
        }

        std::fs::create_dir_all(&self.cli.output).map_err(|e| DatasetError::FileSystem {
            path: self.cli.output.clone(),
            operation: "create directory",
            source: e,
        })?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(count));

        for index in 0..count {
            let sample = dataset.get(index)?;
            let name = self.export_sample(&sample, index)?;
            if let Some(ref bar) = progress {
                bar.advance(&name);
            }
        }

        if let Some(ref bar) = progress {
            if let Some(message) = dataset.size_warning().message() {
                bar.println(&message);
            }
            bar.finish();
        }

        Ok(())
    }

    // Exports the real branch and, in training mode, the first synthetic
    // item. Returns the sample name for progress display.
    fn export_sample(&self, sample: &TransferSample, index: usize) -> Result<String> {
        let Some(real) = sample.real.first() else {
            return Ok(format!("sample_{index}"));
        };

        self.export_tensor(&real.inpaint_a, &real.inpaint_name, "inpaint_A", true)?;
        self.export_tensor(&real.inpaint_b, &real.inpaint_name, "inpaint_B", true)?;
        self.export_tensor(&real.inpaint_c, &real.inpaint_name, "inpaint_C", false)?;

        if let Some(synthesis) = sample.synthesis.first() {
            self.export_tensor(&synthesis.synt_a, &real.inpaint_name, "synt_A", true)?;
            self.export_tensor(&synthesis.synt_b, &real.inpaint_name, "synt_B", true)?;
            self.export_tensor(&synthesis.synt_c, &real.inpaint_name, "synt_C", false)?;
        }

        Ok(real.inpaint_name.clone())
    }

    fn export_tensor(
        &self,
        tensor: &Tensor,
        name: &str,
        suffix: &str,
        signed: bool,
    ) -> Result<()> {
        let path = self.cli.output.join(format!("{name}_{suffix}.png"));
        convert::to_luma_image(tensor, signed)
            .save(&path)
            .map_err(|e| DatasetError::ImageExport { path, source: e })
    }
}
