//! chromazone-render - Paint-by-number rendering
//!
//! Draws the analysis results of a drawing as a printable page:
//!
//! - **Overlay** ([`render`]): boundary lines plus zone numbers
//! - **Legend** ([`legend`]): numbered color swatches below the drawing
//! - **Text** ([`font`]): the [`FontRenderer`] seam and a built-in digit font
//! - **Layout** ([`options`]): legend dimensions, scaled by image width

pub mod error;
pub mod font;
pub mod legend;
pub mod options;
pub mod render;

pub use error::{RenderError, RenderResult};
pub use font::{BitmapFont, FontRenderer};
pub use legend::{LegendLayout, draw_legend, legend_height};
pub use options::RenderOptions;
pub use render::{compute_font_size, label_font_size, render};
