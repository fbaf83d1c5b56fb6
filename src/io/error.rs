//! Error types and context management for dataset operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all dataset operations
#[derive(Debug)]
pub enum DatasetError {
    /// Failed to load a packed image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// A source directory yielded no usable entries
    ///
    /// Raised at construction when a set required by the current mode
    /// (training needs all three) is empty.
    EmptySourceSet {
        /// Role of the set within the dataset (primary, auxiliary, synthetic)
        role: &'static str,
        /// Directory that was enumerated
        path: PathBuf,
    },

    /// Dataset parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A packed image cannot be divided into the requested band count
    InvalidPackedImage {
        /// Path to the offending image, when known
        path: PathBuf,
        /// Image width in pixels
        width: u32,
        /// Requested number of equal-width bands
        bands: u32,
    },

    /// Sample index exceeds the primary set
    IndexOutOfRange {
        /// The requested sample index
        index: usize,
        /// Number of entries in the primary set
        len: usize,
    },

    /// Failed to save a preview image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::EmptySourceSet { role, path } => {
                write!(
                    f,
                    "The {role} set at '{}' contains no images",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidPackedImage { path, width, bands } => {
                write!(
                    f,
                    "Packed image '{}' of width {width} cannot be split into {bands} bands",
                    path.display()
                )
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Sample index {index} is out of bounds (dataset length: {len})")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for dataset results
pub type Result<T> = std::result::Result<T, DatasetError>;

impl From<image::ImageError> for DatasetError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DatasetError {
    DatasetError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an empty source set error
pub fn empty_source_set(role: &'static str, path: impl Into<PathBuf>) -> DatasetError {
    DatasetError::EmptySourceSet {
        role,
        path: path.into(),
    }
}
