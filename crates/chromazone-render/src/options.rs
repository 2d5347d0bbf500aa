//! Rendering configuration

/// Legend layout parameters, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Vertical padding above and below the legend rows
    pub legend_padding: u32,
    /// Diameter of each legend swatch
    pub legend_circle_size: u32,
    /// Gap between swatches, horizontally and between rows
    pub legend_spacing: u32,
    /// Left and right margin of the legend area
    pub legend_margin: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            legend_padding: 20,
            legend_circle_size: 30,
            legend_spacing: 15,
            legend_margin: 20,
        }
    }
}

impl RenderOptions {
    /// Legend sized for an image `width` pixels wide: larger swatches for
    /// wider images.
    pub fn scaled_for_width(width: u32) -> Self {
        if width > 1000 {
            Self {
                legend_padding: 30,
                legend_circle_size: 50,
                legend_spacing: 25,
                legend_margin: 30,
            }
        } else if width > 500 {
            Self {
                legend_padding: 24,
                legend_circle_size: 36,
                legend_spacing: 18,
                legend_margin: 24,
            }
        } else {
            Self::default()
        }
    }
}
