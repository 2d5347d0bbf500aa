//! chromazone-filter - Boundary classification
//!
//! This crate decides which pixels of a drawing are zone-separating lines:
//!
//! - [`BorderClassifier`]: distance to a known line color
//! - [`RangeClassifier`]: per-channel color range over a local window
//! - [`BoundaryOptions`]: configuration and classifier construction
//!
//! Classification runs in parallel over row bands ([`bands`]).

pub mod bands;
pub mod classify;
mod error;
mod options;

pub use error::{FilterError, FilterResult};

pub use bands::DEFAULT_BAND_COUNT;
pub use classify::{BorderClassifier, BoundaryClassifier, RangeClassifier};
pub use options::{BoundaryOptions, Strategy};

use chromazone_core::{BoundaryMap, Pix};

/// Classify `pix` with the classifier described by `options`.
///
/// Logs the number and share of boundary pixels found.
pub fn classify(pix: &Pix, options: &BoundaryOptions) -> FilterResult<BoundaryMap> {
    let classifier = options.build()?;
    let map = classifier.classify(pix);
    log::debug!(
        "{} classifier: {} boundary pixels ({:.1}%)",
        classifier.name(),
        map.count(),
        map.coverage() * 100.0
    );
    Ok(map)
}
