//! Zones and label placement
//!
//! A [`Zone`] is a maximal 4-connected set of non-boundary pixels. Besides
//! its pixels it knows how to pick an [`interior point`](Zone::interior_point)
//! where a visible label can sit without touching the zone edge.

use crate::distance::edge_distances;
use chromazone_core::Point;

/// Margins used when placing a label inside a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteriorOptions {
    /// Required distance from the edge for zones of at least
    /// `small_zone_pixels` pixels
    pub margin: u32,
    /// Required distance from the edge for smaller zones
    pub small_margin: u32,
    /// Zones with fewer pixels than this use `small_margin`
    pub small_zone_pixels: usize,
}

impl Default for InteriorOptions {
    fn default() -> Self {
        Self {
            margin: 15,
            small_margin: 5,
            small_zone_pixels: 100,
        }
    }
}

impl InteriorOptions {
    /// Margin required for a zone of `pixel_count` pixels.
    pub fn margin_for(&self, pixel_count: usize) -> u32 {
        if pixel_count < self.small_zone_pixels {
            self.small_margin
        } else {
            self.margin
        }
    }
}

/// A connected region of fill pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    /// 0-based id, equal to the zone's index in the segmentation
    pub id: usize,
    /// Member pixels in discovery order
    pub pixels: Vec<Point>,
}

impl Zone {
    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the zone has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Mean pixel coordinate, truncated toward zero. The origin for an
    /// empty zone.
    pub fn centroid(&self) -> Point {
        if self.pixels.is_empty() {
            return Point::default();
        }
        let (sx, sy) = self
            .pixels
            .iter()
            .fold((0u64, 0u64), |(sx, sy), p| (sx + p.x as u64, sy + p.y as u64));
        let n = self.pixels.len() as u64;
        Point::new((sx / n) as u32, (sy / n) as u32)
    }

    /// Pick a member pixel to carry the zone's label.
    ///
    /// In order of preference:
    /// 1. the centroid, if it is a member at least `margin` from the edge;
    /// 2. the member at least `margin` from the edge nearest the centroid
    ///    (first in pixel order on ties);
    /// 3. the member farthest from the edge, ties broken by nearness to
    ///    the centroid.
    ///
    /// The result is always a member of the zone, except for an empty
    /// zone which yields the origin.
    pub fn interior_point(&self, options: &InteriorOptions) -> Point {
        if self.pixels.is_empty() {
            return Point::default();
        }
        let centroid = self.centroid();
        let margin = options.margin_for(self.pixels.len());
        let dist = edge_distances(&self.pixels);

        if let Some(i) = self.pixels.iter().position(|&p| p == centroid)
            && dist[i] >= margin
        {
            return centroid;
        }

        let within_margin = self
            .pixels
            .iter()
            .zip(&dist)
            .filter(|&(_, &d)| d >= margin)
            .map(|(&p, _)| p)
            .min_by_key(|p| p.distance_sq(centroid));
        if let Some(p) = within_margin {
            return p;
        }

        let mut best = self.pixels[0];
        let mut best_key = (dist[0], u64::MAX - best.distance_sq(centroid));
        for (&p, &d) in self.pixels.iter().zip(&dist).skip(1) {
            let key = (d, u64::MAX - p.distance_sq(centroid));
            if key > best_key {
                best = p;
                best_key = key;
            }
        }
        best
    }
}
