//! Pipeline configuration

use crate::error::Result;
use chromazone_filter::BoundaryOptions;
use chromazone_region::InteriorOptions;

/// Default palette size limit.
pub const DEFAULT_MAX_COLORS: usize = 10;

/// Options for a full conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Boundary classification
    pub boundary: BoundaryOptions,
    /// Label placement margins
    pub interior: InteriorOptions,
    /// Largest palette size, 0 for one entry per distinct zone color
    pub max_colors: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            boundary: BoundaryOptions::default(),
            interior: InteriorOptions::default(),
            max_colors: DEFAULT_MAX_COLORS,
        }
    }
}

impl Options {
    /// Check every nested option group.
    pub fn validate(&self) -> Result<()> {
        self.boundary.validate()?;
        Ok(())
    }
}
