//! Classifier configuration

use crate::bands::DEFAULT_BAND_COUNT;
use crate::classify::{BorderClassifier, BoundaryClassifier, RangeClassifier};
use crate::error::{FilterError, FilterResult};
use chromazone_core::Rgba;
use std::fmt;
use std::str::FromStr;

/// Which boundary classifier to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Match a known line color ([`BorderClassifier`])
    Border,
    /// Local color range filter ([`RangeClassifier`])
    #[default]
    Color,
}

impl FromStr for Strategy {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "border" => Ok(Self::Border),
            "color" => Ok(Self::Color),
            _ => Err(FilterError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Border => "border",
            Self::Color => "color",
        })
    }
}

/// Options for boundary classification
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryOptions {
    /// Classifier to build
    pub strategy: Strategy,
    /// Line color for [`Strategy::Border`]
    pub border_color: Rgba,
    /// Tolerance in percent for [`Strategy::Border`]
    pub border_tolerance_pct: f64,
    /// Tolerance in percent for [`Strategy::Color`]
    pub color_tolerance_pct: f64,
    /// Number of parallel row bands
    pub band_count: usize,
}

impl Default for BoundaryOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Color,
            border_color: Rgba::BLACK,
            border_tolerance_pct: 10.0,
            color_tolerance_pct: 10.0,
            band_count: DEFAULT_BAND_COUNT,
        }
    }
}

impl BoundaryOptions {
    /// Check that both tolerances lie in `[0, 100]` and at least one band
    /// is requested.
    pub fn validate(&self) -> FilterResult<()> {
        check_tolerance("border tolerance", self.border_tolerance_pct)?;
        check_tolerance("color tolerance", self.color_tolerance_pct)?;
        if self.band_count == 0 {
            return Err(FilterError::InvalidParameters(
                "band count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the configured classifier.
    pub fn build(&self) -> FilterResult<Box<dyn BoundaryClassifier>> {
        self.validate()?;
        Ok(match self.strategy {
            Strategy::Border => Box::new(BorderClassifier {
                band_count: self.band_count,
                ..BorderClassifier::new(self.border_color, self.border_tolerance_pct)
            }),
            Strategy::Color => Box::new(RangeClassifier {
                band_count: self.band_count,
                ..RangeClassifier::new(self.color_tolerance_pct)
            }),
        })
    }
}

fn check_tolerance(name: &'static str, value: f64) -> FilterResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(FilterError::InvalidTolerance { name, value });
    }
    Ok(())
}
