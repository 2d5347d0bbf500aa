//! chromazone-test - Regression test framework for chromazone
//!
//! This crate provides the regression harness used by every crate's
//! `tests/*_reg.rs` files, supporting three modes:
//!
//! - **Compare**: Check computed values (default)
//! - **Generate**: Also write rendered images to the regout directory
//! - **Display**: Like generate, for visual inspection
//!
//! It also provides [`fixtures`], synthetic drawings built in memory so
//! the tests need no binary image files.
//!
//! # Usage
//!
//! ```ignore
//! use chromazone_test::RegParams;
//!
//! let mut rp = RegParams::new("segment");
//! rp.compare_values(4.0, zones.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // chromazone-test is at crates/chromazone-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
