//! Error types.
//!
//! Every condition that the converter cannot recover from is one of these.
//! Nothing here is retried: the first error ends the run and no table is produced.

use std::path::PathBuf;
use thiserror::Error;

/// The device identifier could not be normalized into a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentError {
    /// The identifier is shorter than the fixed vendor/product offsets.
    #[error("device identifier `{0}` is too short to hold a vendor/product id")]
    TooShort(String),
}

/// A mapping line violated the structure the resolver relies on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// `leftx`/`lefty`/`rightx`/`righty` mapped to something other than `a<N>` or `a<N>~`.
    #[error("stick axis `{control}` must map to a full-range axis, got `{source_token}`")]
    NamedAxisNotFullRange {
        control: String,
        source_token: String,
    },

    /// A hat direction bit other than 1, 2, 4 or 8.
    #[error("control `{control}` uses hat {hat} with unknown direction {bit}")]
    UnknownHatDirection { control: String, hat: u32, bit: u32 },

    /// The synthetic axis index for a hat does not fit in `u32`.
    #[error("control `{control}` uses hat {hat}, which is out of range")]
    HatOutOfRange { control: String, hat: u32 },

    /// A standard control ended up on a whole axis with no half selected.
    #[error("control `{control}` maps to full-range axis {axis}, which has no compact form")]
    FullRangeAxis { control: String, axis: u32 },

    /// A standard control's source token matched none of the known grammars.
    #[error("control `{control}` has an unrecognized source")]
    UnrecognizedSource { control: String },
}

/// Top-level error returned by [`convert_str`](crate::convert_str) and friends.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The line had an identifier but no display-name field.
    #[error("line {line}: expected `identifier,name,...`")]
    MissingName { line: usize },

    #[error("line {line}: bad device identifier")]
    Identifier {
        line: usize,
        #[source]
        source: IdentError,
    },

    #[error("line {line} ({key}): cannot resolve mapping")]
    Resolve {
        line: usize,
        key: String,
        #[source]
        source: ResolveError,
    },

    #[error("failed to serialize lookup table")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
