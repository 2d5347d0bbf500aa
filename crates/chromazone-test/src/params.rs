//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use chromazone_core::{Pix, Rgba};
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Write rendered images to the regout directory
    Generate,
    /// Check values only (default)
    #[default]
    Compare,
    /// Display mode - write images for visual inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }

    /// Whether images should be written out in this mode.
    pub fn writes_images(self) -> bool {
        matches!(self, Self::Generate | Self::Display)
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "segment")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        if mode.writes_images() {
            let _ = fs::create_dir_all(regout_dir());
        }

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if values match within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Record a boolean property check
    ///
    /// `what` describes the property and is reported on failure.
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.record_failure(msg);
        }
        condition
    }

    /// Compare two Pix images for exact equality
    ///
    /// On mismatch, reports the first differing pixel and how many
    /// pixels differ in total.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        if !pix1.sizes_equal(pix2) {
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - {}x{} vs {}x{}",
                self.test_name,
                self.index,
                pix1.width(),
                pix1.height(),
                pix2.width(),
                pix2.height()
            );
            self.record_failure(msg);
            return false;
        }

        let width = pix1.width().max(1) as usize;
        let mut diffs = pix1
            .data()
            .iter()
            .zip(pix2.data())
            .enumerate()
            .filter(|(_, (a, b))| a != b);
        let Some((first, (a, b))) = diffs.next() else {
            return true;
        };
        let total = 1 + diffs.count();
        let msg = format!(
            "Failure in {}_reg: pix comparison for index {} - {} pixels differ, first at ({}, {}): {:?} vs {:?}",
            self.test_name,
            self.index,
            total,
            first % width,
            first / width,
            Rgba::from_pixel(*a),
            Rgba::from_pixel(*b)
        );
        self.record_failure(msg);
        false
    }

    /// Write a Pix as PNG to the regout directory
    ///
    /// Only writes in generate and display modes; in compare mode this is
    /// a no-op that still advances the index so numbering is stable.
    pub fn write_pix(&mut self, pix: &Pix) -> TestResult<()> {
        self.index += 1;
        if !self.mode.writes_images() {
            return Ok(());
        }

        let local_path = format!("{}/{}.{:02}.png", regout_dir(), self.test_name, self.index);
        chromazone_io::write_png(pix, &local_path).map_err(|e| TestError::ImageWrite {
            path: local_path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("Wrote: {}", local_path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_env() {
        let mode = RegTestMode::from_env();
        assert!(matches!(
            mode,
            RegTestMode::Compare | RegTestMode::Generate | RegTestMode::Display
        ));
    }

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_check_and_compare_pix() {
        let mut rp = RegParams::new("test");
        let a = Pix::new_filled(2, 2, Rgba::WHITE).unwrap();
        let b = a.to_mut();
        assert!(rp.compare_pix(&a, &b.into()));
        assert!(rp.check(true, "always"));
        let c = Pix::new_filled(2, 2, Rgba::BLACK).unwrap();
        assert!(!rp.compare_pix(&a, &c));
        assert_eq!(rp.index(), 3);
    }
}
